#![forbid(unsafe_code)]

//! Drag behaviour configuration.
//!
//! Defaults suit interactive use. Environment variables override them so a
//! deployment (or a flaky remote-desktop session) can turn snapping off
//! without a rebuild. Lookups go through an injectable closure so tests
//! never touch the process environment.

use std::fmt;

/// Environment variable to enable or disable snap previews (`1/0/true/false`).
pub const ENV_SNAPPING: &str = "DROPKIT_SNAPPING";
/// Environment variable to control whether Escape cancels a drag (`1/0/true/false`).
pub const ENV_CANCEL_ON_ESCAPE: &str = "DROPKIT_CANCEL_ON_ESCAPE";

/// Configuration shared by every drag session of a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragConfig {
    /// Global snapping switch (default: true).
    ///
    /// A session snaps only when both this and the per-drag request allow it.
    pub snapping: bool,
    /// Whether pressing Escape cancels an active drag (default: true).
    ///
    /// Focus loss and host aborts always cancel.
    pub cancel_on_escape: bool,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            snapping: true,
            cancel_on_escape: true,
        }
    }
}

impl DragConfig {
    /// Disable snap previews for every session.
    #[must_use]
    pub fn without_snapping(mut self) -> Self {
        self.snapping = false;
        self
    }

    /// Keep tracking when Escape is pressed.
    #[must_use]
    pub fn no_escape_cancel(mut self) -> Self {
        self.cancel_on_escape = false;
        self
    }

    /// Read overrides from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Read overrides through a custom environment lookup.
    ///
    /// Unparseable values are ignored and the default is kept.
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        for (key, slot) in [
            (ENV_SNAPPING, &mut config.snapping),
            (ENV_CANCEL_ON_ESCAPE, &mut config.cancel_on_escape),
        ] {
            match read_bool(&get_env, key) {
                Ok(Some(value)) => *slot = value,
                Ok(None) => {}
                Err(_err) => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(error = %_err, "ignoring drag config override");
                }
            }
        }
        config
    }

    /// Read overrides through a custom environment lookup, rejecting
    /// unparseable values.
    pub fn try_from_env_with<F>(get_env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(value) = read_bool(&get_env, ENV_SNAPPING)? {
            config.snapping = value;
        }
        if let Some(value) = read_bool(&get_env, ENV_CANCEL_ON_ESCAPE)? {
            config.cancel_on_escape = value;
        }
        Ok(config)
    }
}

/// A configuration override that could not be applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The variable is set but is not a recognised boolean.
    InvalidBool { key: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBool { key, value } => {
                write!(f, "{key}: expected a boolean, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn read_bool<F>(get_env: &F, key: &'static str) -> Result<Option<bool>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match get_env(key) {
        None => Ok(None),
        Some(value) => parse_bool(&value)
            .map(Some)
            .ok_or(ConfigError::InvalidBool { key, value }),
    }
}
