//! Configuration management with file persistence

use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Folio configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    pub display: DisplayConfig,
}

/// Text shown on the showcase surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    pub tagline: String,
    pub about: String,
    pub contact_email: String,
}

/// Presentation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub dark_mode: bool,
    /// How many tags a list entry shows before the overflow marker
    pub tags_shown: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site: SiteConfig {
                title: "My Portfolio".to_string(),
                tagline: "Projects I have built and shipped".to_string(),
                about: "Software developer with a focus on web and systems projects.".to_string(),
                contact_email: String::new(),
            },
            display: DisplayConfig {
                dark_mode: true,
                tags_shown: 3,
            },
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("FOLIO_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("folio")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(config)
        } else {
            // Return default config without creating file
            Ok(Config::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.validate()?;

        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;

        let path = Self::config_path()?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.site.title.trim().is_empty() {
            return Err(anyhow!("site.title must not be empty"));
        }
        if self.display.tags_shown == 0 {
            return Err(anyhow!("display.tags_shown must be at least 1"));
        }
        Ok(())
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "site.title" => Ok(self.site.title.clone()),
            "site.tagline" => Ok(self.site.tagline.clone()),
            "site.about" => Ok(self.site.about.clone()),
            "site.contact_email" => Ok(self.site.contact_email.clone()),
            "display.dark_mode" => Ok(self.display.dark_mode.to_string()),
            "display.tags_shown" => Ok(self.display.tags_shown.to_string()),
            _ => Err(anyhow!(
                "Unknown configuration key: {}. Use `folio config list` to see available keys.",
                key
            )),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "site.title" => {
                if value.trim().is_empty() {
                    return Err(anyhow!("site.title must not be empty"));
                }
                self.site.title = value.to_string();
            }
            "site.tagline" => {
                self.site.tagline = value.to_string();
            }
            "site.about" => {
                self.site.about = value.to_string();
            }
            "site.contact_email" => {
                self.site.contact_email = value.to_string();
            }
            "display.dark_mode" => {
                let dark: bool = value
                    .parse()
                    .with_context(|| format!("Invalid dark_mode value: {}", value))?;
                self.display.dark_mode = dark;
            }
            "display.tags_shown" => {
                let shown: usize = value
                    .parse()
                    .with_context(|| format!("Invalid tags_shown value: {}", value))?;
                if shown == 0 {
                    return Err(anyhow!("display.tags_shown must be at least 1"));
                }
                self.display.tags_shown = shown;
            }
            _ => {
                return Err(anyhow!(
                    "Unknown configuration key: {}. Use `folio config list` to see available keys.",
                    key
                ));
            }
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        let keys = vec![
            "site.title",
            "site.tagline",
            "site.about",
            "site.contact_email",
            "display.dark_mode",
            "display.tags_shown",
        ];

        keys.into_iter()
            .map(|key| {
                let value = self.get(key)?;
                Ok((key.to_string(), value))
            })
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();

        assert_eq!(config.site.title, "My Portfolio");
        assert!(config.display.dark_mode);
        assert_eq!(config.display.tags_shown, 3);
        config.validate().unwrap();
    }

    #[test]
    fn test_get_and_set_round_trip() {
        let mut config = Config::default();

        config.set("site.title", "Rita's Portfolio").unwrap();
        config.set("display.dark_mode", "false").unwrap();
        config.set("display.tags_shown", "5").unwrap();

        assert_eq!(config.get("site.title").unwrap(), "Rita's Portfolio");
        assert_eq!(config.get("display.dark_mode").unwrap(), "false");
        assert_eq!(config.get("display.tags_shown").unwrap(), "5");
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();

        assert!(config.set("site.title", "  ").is_err());
        assert!(config.set("display.tags_shown", "0").is_err());
        assert!(config.set("display.dark_mode", "maybe").is_err());
        assert!(config.set("unknown.key", "x").is_err());
    }

    #[test]
    fn test_list_covers_all_keys() {
        let config = Config::default();
        let items = config.list().unwrap();

        assert_eq!(items.len(), 6);
        assert!(items.iter().any(|(k, _)| k == "site.tagline"));
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.site.contact_email = "dev@example.com".to_string();

        let toml_str = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(back.site.contact_email, "dev@example.com");
        assert_eq!(back.display.tags_shown, config.display.tags_shown);
    }
}
