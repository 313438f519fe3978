//! Script metadata configuration
//!
//! The script title and the fixed event fields (style name, start and
//! end timestamps) can be overridden from a small TOML file. Every
//! field is optional; the defaults reproduce the converter's standard
//! output.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing a profile
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Script-level metadata applied to the preamble and every event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptProfile {
    /// `Title:` line of the script info block
    pub title: String,
    /// Style name referenced by every emitted event and defined in the
    /// styles block alongside `Default`
    pub event_style: String,
    /// Start timestamp of every event
    pub event_start: String,
    /// End timestamp of every event
    pub event_end: String,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    script: Option<TomlScript>,
    event: Option<TomlEvent>,
}

#[derive(Deserialize)]
struct TomlScript {
    title: Option<String>,
}

#[derive(Deserialize)]
struct TomlEvent {
    style: Option<String>,
    start: Option<String>,
    end: Option<String>,
}

impl Default for ScriptProfile {
    fn default() -> Self {
        Self {
            title: "svg2ass Generated ASS File".to_string(),
            event_style: "SVG".to_string(),
            event_start: "0:00:00.0".to_string(),
            event_end: "0:00:02.00".to_string(),
        }
    }
}

impl ScriptProfile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string; absent fields keep defaults
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;
        let mut profile = Self::default();

        if let Some(script) = parsed.script {
            if let Some(title) = script.title {
                profile.title = title;
            }
        }
        if let Some(event) = parsed.event {
            if let Some(style) = event.style {
                profile.event_style = style;
            }
            if let Some(start) = event.start {
                profile.event_start = start;
            }
            if let Some(end) = event.end {
                profile.event_end = end;
            }
        }

        Ok(profile)
    }
}
