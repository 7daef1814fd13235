use crate::error::{FieldOpsError, Result};
use crate::i18n::Language;
use crate::models::{Crop, FarmProfile, NotificationPrefs, TemperatureUnit};
use dialoguer::{Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Prefix for environment overrides, e.g. `FIELDOPS__TELEMETRY__TICK_INTERVAL_SECS=5`.
const ENV_PREFIX: &str = "FIELDOPS";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub farm: FarmConfig,
    pub telemetry: TelemetryConfig,
    pub prediction: PredictionConfig,
    pub display: DisplayConfig,
    pub notifications: NotificationPrefs,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FarmConfig {
    pub name: String,
    pub location: String,
    pub size_acres: f64,
    pub crops: Vec<String>,
}

impl Default for FarmConfig {
    fn default() -> Self {
        let profile = FarmProfile::default();
        Self {
            name: profile.name.clone(),
            location: profile.location.clone(),
            size_acres: profile.size_acres,
            crops: profile.crops().iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl FarmConfig {
    /// Build the farm profile. Unknown crop names are skipped with a warning.
    pub fn to_profile(&self) -> FarmProfile {
        let mut crops = Vec::new();
        for name in &self.crops {
            match Crop::from_str(name) {
                Some(crop) if !crops.contains(&crop) => crops.push(crop),
                Some(_) => {}
                None => tracing::warn!(crop = %name, "Ignoring unknown crop in config"),
            }
        }

        let size = if self.size_acres > 0.0 {
            self.size_acres
        } else {
            tracing::warn!(size = self.size_acres, "Farm size must be positive, using default");
            FarmProfile::default().size_acres
        };

        FarmProfile::new(&self.name, &self.location, size).with_crops(crops)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TelemetryConfig {
    pub tick_interval_secs: u64,
    /// Fixed RNG seed for reproducible sessions
    pub seed: Option<u64>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            tick_interval_secs: 30,
            seed: None,
        }
    }
}

impl TelemetryConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(self.tick_interval_secs.max(1))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PredictionConfig {
    pub delay_ms: u64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self { delay_ms: 2000 }
    }
}

impl PredictionConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub language: Language,
    pub temperature_unit: TemperatureUnit,
}

impl Config {
    /// Load the config file, falling back to defaults when none exists.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p.clone(),
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            if config_override.is_some() {
                return Err(FieldOpsError::Config(format!(
                    "Config file not found at {:?}",
                    config_path
                )));
            }
            tracing::info!("No config file found, using defaults");
            return Self::from_yaml("");
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FieldOpsError::Config(format!("Failed to read config: {}", e)))?;

        let config = Self::from_yaml(&config_str)?;
        tracing::info!(path = %config_path.display(), "Config loaded");
        Ok(config)
    }

    /// Parse YAML after `${VAR}` substitution, then apply `FIELDOPS__` overrides.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config = ::config::Config::builder()
            .add_source(::config::File::from_str(
                &content,
                ::config::FileFormat::Yaml,
            ))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Config>()?;

        Ok(config)
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        Self::default_config_path()
    }

    /// Default path for writing new config files (~/.config/fieldops/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FieldOpsError::Config("Cannot determine config directory".into()))?
            .join("fieldops");
        Ok(config_dir.join("config.yaml"))
    }

    /// Human-readable problems with the loaded values.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if self.farm.name.trim().is_empty() {
            problems.push("farm.name is empty".to_string());
        }
        if self.farm.size_acres <= 0.0 {
            problems.push(format!(
                "farm.size_acres must be positive (got {})",
                self.farm.size_acres
            ));
        }
        for name in &self.farm.crops {
            if Crop::from_str(name).is_none() {
                problems.push(format!("farm.crops: unknown crop '{}'", name));
            }
        }
        if self.telemetry.tick_interval_secs == 0 {
            problems.push("telemetry.tick_interval_secs must be at least 1".to_string());
        }

        problems
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(target: Option<&PathBuf>) -> Result<(Self, PathBuf)> {
        let defaults = Config::default();

        println!();
        println!("Let's set up FieldOps!");
        println!();

        println!("Farm Profile");
        let name: String = Input::new()
            .with_prompt("  Farm name")
            .default(defaults.farm.name.clone())
            .interact_text()
            .map_err(|e| FieldOpsError::Config(format!("Input error: {}", e)))?;

        let location: String = Input::new()
            .with_prompt("  Location")
            .default(defaults.farm.location.clone())
            .interact_text()
            .map_err(|e| FieldOpsError::Config(format!("Input error: {}", e)))?;

        let size_acres: f64 = Input::new()
            .with_prompt("  Farm size (acres)")
            .default(defaults.farm.size_acres)
            .validate_with(|v: &f64| {
                if *v > 0.0 {
                    Ok(())
                } else {
                    Err("size must be positive")
                }
            })
            .interact_text()
            .map_err(|e| FieldOpsError::Config(format!("Input error: {}", e)))?;

        let crop_names: Vec<&str> = Crop::ALL.iter().map(|c| c.as_str()).collect();
        let default_profile = FarmProfile::default();
        let checked: Vec<bool> = Crop::ALL
            .iter()
            .map(|c| default_profile.grows(*c))
            .collect();
        let selected = MultiSelect::new()
            .with_prompt("  Crops (space to toggle)")
            .items(&crop_names)
            .defaults(&checked)
            .interact()
            .map_err(|e| FieldOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        println!("Display");
        let languages: Vec<String> = Language::ALL
            .iter()
            .map(|l| format!("{} ({})", l.native_name(), l.code()))
            .collect();
        let language_idx = Select::new()
            .with_prompt("  Language")
            .items(&languages)
            .default(0)
            .interact()
            .map_err(|e| FieldOpsError::Config(format!("Input error: {}", e)))?;

        let unit_idx = Select::new()
            .with_prompt("  Temperature unit")
            .items(&["Celsius", "Fahrenheit"])
            .default(0)
            .interact()
            .map_err(|e| FieldOpsError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            farm: FarmConfig {
                name,
                location,
                size_acres,
                crops: selected
                    .into_iter()
                    .map(|i| Crop::ALL[i].to_string())
                    .collect(),
            },
            display: DisplayConfig {
                language: Language::ALL[language_idx],
                temperature_unit: if unit_idx == 0 {
                    TemperatureUnit::Celsius
                } else {
                    TemperatureUnit::Fahrenheit
                },
            },
            ..defaults
        };

        let config_path = match target {
            Some(p) => p.clone(),
            None => Self::default_config_path()?,
        };
        config.save(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn save(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| FieldOpsError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# FieldOps Configuration\n# Generated by `fieldops init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| FieldOpsError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.farm.name, "Green Valley Farm");
        assert_eq!(config.farm.size_acres, 150.0);
        assert_eq!(config.telemetry.tick_interval_secs, 30);
        assert_eq!(config.prediction.delay_ms, 2000);
        assert_eq!(config.display.language, Language::English);
        assert_eq!(config.display.temperature_unit, TemperatureUnit::Celsius);
        assert_eq!(config.notifications, NotificationPrefs::default());
    }

    #[test]
    fn notification_section_overrides_single_flags() {
        let yaml = "notifications:\n  pest_control_alerts: false\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert!(!config.notifications.pest_control_alerts);
        assert!(config.notifications.weather_alerts);
        assert!(config.notifications.harvest_predictions);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let yaml = "farm:\n  name: Ridge Acres\n  crops: [rice, Oats]\ndisplay:\n  language: hi\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.farm.name, "Ridge Acres");
        assert_eq!(config.farm.size_acres, 150.0);
        assert_eq!(config.display.language, Language::Hindi);

        let profile = config.farm.to_profile();
        assert_eq!(profile.crops(), &[Crop::Rice, Crop::Oats]);
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("FIELDOPS_TEST_FARM_NAME", "Sunny Ridge");
        let out = Config::substitute_env_vars("name: ${FIELDOPS_TEST_FARM_NAME}").unwrap();
        assert_eq!(out, "name: Sunny Ridge");

        let untouched = Config::substitute_env_vars("name: ${FIELDOPS_TEST_UNSET_VAR}").unwrap();
        assert_eq!(untouched, "name: ${FIELDOPS_TEST_UNSET_VAR}");
    }

    #[test]
    fn profile_drops_unknown_and_duplicate_crops() {
        let farm = FarmConfig {
            crops: vec!["Wheat".into(), "Sorghum".into(), "wheat".into(), "Corn".into()],
            ..FarmConfig::default()
        };
        assert_eq!(farm.to_profile().crops(), &[Crop::Wheat, Crop::Corn]);
    }

    #[test]
    fn non_positive_size_falls_back() {
        let farm = FarmConfig {
            size_acres: -3.0,
            ..FarmConfig::default()
        };
        assert_eq!(farm.to_profile().size_acres, 150.0);
    }

    #[test]
    fn validate_reports_problems() {
        let mut config = Config::default();
        assert!(config.validate().is_empty());

        config.farm.size_acres = 0.0;
        config.farm.crops.push("Quinoa".into());
        config.telemetry.tick_interval_secs = 0;
        assert_eq!(config.validate().len(), 3);
    }

    #[test]
    fn tick_interval_never_zero() {
        let telemetry = TelemetryConfig {
            tick_interval_secs: 0,
            seed: None,
        };
        assert_eq!(telemetry.tick_interval(), Duration::from_secs(1));
    }
}
