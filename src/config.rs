use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Default)]
#[command(name = "lighthub")]
#[command(about = "Runs the lighting hub simulator", long_about = None)]
pub struct Cli {
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,

    /// Port to listen on (overrides the config file)
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// JSON file with the initial lights; the built-in set is used when absent
    #[arg(short = 'l', long = "lights")]
    pub lights_path: Option<String>,
}

pub fn default_config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".lighthub")
}

pub fn default_config_path() -> PathBuf {
    default_config_dir().join("config.yaml")
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct App {
    host: String,
    port: u16,
    base_path: String,
    pub lights_file: Option<PathBuf>,
    pub static_dir: Option<PathBuf>,
}

impl Default for App {
    fn default() -> Self {
        App {
            host: "0.0.0.0".to_string(),
            port: 8080,
            base_path: "/".to_string(),
            lights_file: None,
            static_dir: None,
        }
    }
}

impl App {
    pub fn get_host(&self) -> &str {
        &self.host
    }

    pub fn get_port(&self) -> u16 {
        self.port
    }

    /// API mount point, always with a leading slash and no trailing one
    /// (the root is `/`).
    pub fn get_base_path(&self) -> String {
        let trimmed = self.base_path.trim_matches('/');
        format!("/{}", trimmed)
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub app: App,
}

impl Config {
    pub fn new(path: &str) -> Result<Self> {
        let cfg = Config::load_config(path)?;
        Ok(cfg)
    }

    /// Builds the effective configuration: an explicit `--config` must load,
    /// otherwise `~/.lighthub/config.yaml` is used if present. Flags win over
    /// the file.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        Config::resolve_with_default(cli, &default_config_path())
    }

    fn resolve_with_default(cli: &Cli, default_path: &Path) -> Result<Self> {
        let mut cfg = match &cli.config_path {
            Some(path) => {
                Config::new(path).with_context(|| format!("failed to load config {}", path))?
            }
            None if default_path.is_file() => {
                Config::load_config(&default_path.to_string_lossy()).with_context(|| {
                    format!("failed to load config {}", default_path.display())
                })?
            }
            None => Config::default(),
        };

        if let Some(port) = cli.port {
            cfg.app.port = port;
        }
        if let Some(path) = &cli.lights_path {
            cfg.app.lights_file = Some(PathBuf::from(path));
        }
        Ok(cfg)
    }

    pub fn lights_file(&self) -> Option<&Path> {
        self.app.lights_file.as_deref()
    }

    fn load_config(path: &str) -> Result<Config> {
        let yaml_str = fs::read_to_string(path)?;
        Config::from_yaml(&yaml_str)
    }

    fn from_yaml(yaml_str: &str) -> Result<Config> {
        let yaml_with_env = Config::substitute_env_vars(yaml_str)?;
        // An empty document parses as null.
        if yaml_with_env.trim().is_empty() {
            return Ok(Config::default());
        }
        let config: Config = serde_yaml::from_str(&yaml_with_env)?;
        Ok(config)
    }

    fn substitute_env_vars(yaml_str: &str) -> Result<String> {
        let mut result = yaml_str.to_string();
        let mut offset = 0;

        while let Some(start) = result[offset..].find("${") {
            let actual_start = offset + start;
            if let Some(end) = result[actual_start..].find('}') {
                let var_name = &result[actual_start + 2..actual_start + end];

                // ${VAR:-default}
                let env_value = if let Some(default_start) = var_name.find(":-") {
                    let actual_var = &var_name[..default_start];
                    let default_val = &var_name[default_start + 2..];
                    env::var(actual_var).unwrap_or_else(|_| default_val.to_string())
                } else {
                    env::var(var_name).unwrap_or_else(|_| {
                        tracing::warn!(var = %var_name, "environment variable not found");
                        String::new()
                    })
                };

                result.replace_range(actual_start..actual_start + end + 1, &env_value);
                offset = actual_start + env_value.len();
            } else {
                break;
            }
        }

        Ok(result)
    }
}
