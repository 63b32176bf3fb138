use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    pub process: ProcessConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Имя дисплея X11; по умолчанию берётся из $DISPLAY
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProcessConfig {
    pub procfs_root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "compact".to_string(),
            },
            display: DisplayConfig::default(),
            process: ProcessConfig {
                procfs_root: PathBuf::from("/proc"),
            },
        }
    }
}

impl Config {
    /// Значения по умолчанию, затем TOML-файл (может отсутствовать), затем PAUSEKEY_*
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("PAUSEKEY_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        if let Some(name) = &self.display.name {
            if name.trim().is_empty() {
                anyhow::bail!("display.name не может быть пустым");
            }
        }

        if self.process.procfs_root.as_os_str().is_empty() {
            anyhow::bail!("process.procfs_root не может быть пустым");
        }

        Ok(())
    }
}
