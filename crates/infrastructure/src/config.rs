use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// Encoding used to deliver emitted tagsets
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty JSON array, tags as hex strings
    #[default]
    Json,
    /// Concatenated tagset byte encoding
    Binary,
    /// Run the script, deliver nothing
    None,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "binary" => Ok(Self::Binary),
            "none" => Ok(Self::None),
            other => Err(format!(
                "unknown output format '{}' (expected json, binary or none)",
                other
            )),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    // stdout when absent (json only)
    #[serde(default)]
    pub path: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct RunnerConfig {
    /// Script to run when none is given on the command line
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub output: OutputConfig,
}

impl RunnerConfig {
    pub fn load(config_dir: &str) -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = Config::builder()
            // Start with default settings
            .set_default("output.format", "json")?
            // Local config file, e.g. config/default.toml
            .add_source(File::with_name(&format!("{}/default", config_dir)).required(false))
            // Per run mode overrides, e.g. config/development.toml
            .add_source(File::with_name(&format!("{}/{}", config_dir, run_mode)).required(false))
            // Environment variables (e.g. TAGSCRIPT__OUTPUT__FORMAT=binary)
            .add_source(Environment::with_prefix("TAGSCRIPT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
