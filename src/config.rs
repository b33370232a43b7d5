use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".bundlelintrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_target_function")]
    pub target_function: String,
    #[serde(default = "default_required_label")]
    pub required_label: String,
    #[serde(default = "default_accepted_values")]
    pub accepted_values: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_target_function() -> String {
    "NSLocalizedString".to_string()
}

fn default_required_label() -> String {
    "bundle".to_string()
}

fn default_accepted_values() -> Vec<String> {
    [".module", "Bundle.module"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    vec!["swift".to_string()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_function: default_target_function(),
            required_label: default_required_label(),
            accepted_values: default_accepted_values(),
            extensions: default_extensions(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if a name is empty, no value is accepted, or any glob
    /// pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.target_function.trim().is_empty() {
            bail!("'targetFunction' must not be empty");
        }
        if self.required_label.trim().is_empty() {
            bail!("'requiredLabel' must not be empty");
        }
        if self.accepted_values.is_empty() {
            bail!("'acceptedValues' must list at least one value");
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Build the immutable pattern handed to the call visitor.
    pub fn call_pattern(&self) -> CallPattern {
        CallPattern {
            function_name: self.target_function.clone(),
            required_label: self.required_label.clone(),
            accepted_values: self.accepted_values.clone(),
        }
    }
}

/// The call shape the linter looks for.
///
/// Matching is purely syntactic: the callee must be the bare identifier
/// `function_name`, and the value of the `required_label` argument must be
/// spelled exactly like one of `accepted_values` once trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallPattern {
    pub function_name: String,
    pub required_label: String,
    pub accepted_values: Vec<String>,
}

impl CallPattern {
    pub fn accepts(&self, value: &str) -> bool {
        self.accepted_values.iter().any(|accepted| accepted == value)
    }
}

impl Default for CallPattern {
    fn default() -> Self {
        Config::default().call_pattern()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
    /// Directory `ignores` entries are relative to: the config file's
    /// directory, or the start directory when using defaults.
    pub base_dir: PathBuf,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            let base_dir = path.parent().unwrap_or(start_dir).to_path_buf();
            Ok(ConfigLoadResult {
                config,
                from_file: true,
                base_dir,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
            base_dir: start_dir.to_path_buf(),
        }),
    }
}
