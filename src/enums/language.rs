use std::fmt;
use serde::{Deserialize, Serialize};
use crate::config::constants::SUPPORTED_FILE_EXTENSIONS;

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Language {
    #[serde(rename = "python")]
    Python,
    #[serde(rename = "javascript")]
    JavaScript,
    #[serde(rename = "java")]
    Java,
    #[serde(rename = "cpp")]
    Cpp,
    #[serde(rename = "typescript")]
    TypeScript,
    #[serde(rename = "go")]
    Go,
    #[serde(rename = "rust")]
    Rust,
    #[serde(rename = "unknown", other)]
    Unknown,
}

impl Language {
    /// Unrecognized tags fall into the `Unknown` bucket instead of failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "python" => Language::Python,
            "javascript" => Language::JavaScript,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "typescript" => Language::TypeScript,
            "go" => Language::Go,
            "rust" => Language::Rust,
            _ => Language::Unknown,
        }
    }

    /// Returns `None` for extensions outside the table so the caller keeps its own choice.
    pub fn from_extension(ext: &str) -> Option<Self> {
        let ext = ext.to_lowercase();
        SUPPORTED_FILE_EXTENSIONS
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, tag)| Language::from_tag(tag))
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::TypeScript => "typescript",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Unknown => "unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Language::Python => "🐍",
            Language::JavaScript => "📜",
            Language::Java => "☕",
            Language::Cpp => "⚙️",
            Language::TypeScript => "📘",
            Language::Go => "🔷",
            Language::Rust => "🦀",
            Language::Unknown => "📄",
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::Unknown
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
