use std::path::PathBuf;
use thiserror::Error;

/// Input file read when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "system.data";
/// Output file written when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "system_fixed.data";

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegridConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl Default for RegridConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Default)]
pub struct RegridConfigBuilder {
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
}

impl RegridConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }
    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn build(self) -> Result<RegridConfig, ConfigError> {
        let input_path = self
            .input_path
            .ok_or(ConfigError::MissingParameter("input_path"))?;
        let output_path = self
            .output_path
            .ok_or(ConfigError::MissingParameter("output_path"))?;

        Ok(RegridConfig {
            input_path,
            output_path,
        })
    }
}
