use clap::Subcommand;

#[derive(Subcommand)]
pub enum SettingsAction {
    Show,
    Set {
        key: String,
        value: String,
    },
    Reset,
}
