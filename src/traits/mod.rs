pub mod random_source;
pub mod key_value_store;
pub mod export_formatter;
