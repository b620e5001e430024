use std::env::VarError;

use crate::error::NormalizeError;

pub const STRICT_EXIT_VAR: &str = "JSON_NORMALIZE_STRICT_EXIT";
pub const MAX_INPUT_BYTES_VAR: &str = "JSON_NORMALIZE_MAX_INPUT_BYTES";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVarConfig {
    /// Exit with a failure status when the document is rejected.
    pub strict_exit: bool,
    /// Reject input longer than this many bytes before parsing.
    pub max_input_bytes: Option<usize>,
}

impl EnvVarConfig {
    pub fn try_from_env() -> Result<Self, NormalizeError> {
        Self::from_lookup(|key| std::env::var(key))
    }

    /// Builds the config from any variable source; `try_from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, NormalizeError>
    where
        F: Fn(&str) -> Result<String, VarError>,
    {
        let strict_exit = env_w_default(&lookup, STRICT_EXIT_VAR, "false")?;
        let max_input_bytes = env_wo_default(&lookup, MAX_INPUT_BYTES_VAR)?;

        Ok(Self {
            strict_exit: parse_flag(STRICT_EXIT_VAR, &strict_exit)?,
            max_input_bytes: max_input_bytes
                .map(|raw| parse_limit(MAX_INPUT_BYTES_VAR, &raw))
                .transpose()?,
        })
    }
}

//
// PRIVATE METHODS
//

fn env_w_default<F>(lookup: &F, key: &str, default: &str) -> Result<String, NormalizeError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(val) => Ok(val),
        Err(VarError::NotPresent) => Ok(default.to_string()),
        Err(e) => Err(NormalizeError::Config(format!("missing {key}: {e}"))),
    }
}

fn env_wo_default<F>(lookup: &F, key: &str) -> Result<Option<String>, NormalizeError>
where
    F: Fn(&str) -> Result<String, VarError>,
{
    match lookup(key) {
        Ok(val) => Ok(Some(val)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(NormalizeError::Config(format!("{key}: {e}"))),
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, NormalizeError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(NormalizeError::Config(format!(
            "{key}: expected a boolean, got {other:?}"
        ))),
    }
}

fn parse_limit(key: &str, raw: &str) -> Result<usize, NormalizeError> {
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(NormalizeError::Config(format!("{key}: must be positive"))),
        Ok(limit) => Ok(limit),
        Err(e) => Err(NormalizeError::Config(format!("{key}: {e}"))),
    }
}
