use std::time::Duration;

pub const HISTORY_CAPACITY: usize = 50;
pub const RECENT_HISTORY_LIMIT: usize = 10;

pub const QUALITY_SCORE_RANGE: (u32, u32) = (70, 99);
pub const SECURITY_SCORE_RANGE: (u32, u32) = (75, 99);

/// Share of found issues the dashboard reports as fixed.
pub const ISSUES_FIXED_RATIO: f64 = 0.7;

pub const HISTORY_STORAGE_KEY: &str = "analysisHistory";
pub const SETTINGS_STORAGE_KEY: &str = "appSettings";

pub const CONFIG_DIR_NAME: &str = "intellicode";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const DEFAULT_PROGRESS_TICK_MS: u64 = 200;
pub const DEFAULT_SETTLE_MS: u64 = 500;
pub const MAX_PROGRESS_STEP: u32 = 15;

pub const SUPPORTED_FILE_EXTENSIONS: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("java", "java"),
    ("cpp", "cpp"),
    ("c", "cpp"),
    ("ts", "typescript"),
    ("go", "go"),
    ("rs", "rust"),
];

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}
