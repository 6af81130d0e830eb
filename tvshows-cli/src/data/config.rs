use std::{
    env::{self, VarError},
    fs::{self, File},
    io,
    path::{Path, PathBuf},
};

use platform_dirs::AppDirs;
use serde::{Deserialize, Serialize};
use tvshows_core::webapi::{CreateStyle, Credentials};

use crate::widget::DEFAULT_ROW_TEMPLATE;

const APP_NAME: &str = "tvshows";
const CONFIG_FILENAME: &str = "config.json";
const PROXY_ENV_VAR: &str = "HTTPS_PROXY";
const DEFAULT_BASE_URL: &str = "http://localhost:8080/";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub username: String,
    pub password: String,
    pub create_style: CreateStyle,
    pub row_template: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: String::new(),
            password: String::new(),
            create_style: CreateStyle::default(),
            row_template: DEFAULT_ROW_TEMPLATE.to_string(),
        }
    }
}

impl Config {
    fn app_dirs() -> Option<AppDirs> {
        const USE_XDG_ON_MACOS: bool = false;

        AppDirs::new(Some(APP_NAME), USE_XDG_ON_MACOS)
    }

    pub fn config_dir() -> Option<PathBuf> {
        Self::app_dirs().map(|dirs| dirs.config_dir)
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(CONFIG_FILENAME))
    }

    /// Load the config file, `None` if there is none or it cannot be read.
    pub fn load() -> Option<Config> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        let file = File::open(path).ok()?;
        log::info!("loading config: {:?}", path);
        match serde_json::from_reader(file) {
            Ok(config) => Some(config),
            Err(err) => {
                log::error!("failed to read config {:?}: {}", path, err);
                None
            }
        }
    }

    pub fn save(&self) {
        match Self::config_path() {
            Some(path) => {
                if let Err(err) = self.save_to(&path) {
                    log::error!("failed to save config {:?}: {}", path, err);
                }
            }
            None => log::error!("no config dir on this platform"),
        }
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    pub fn has_credentials(&self) -> bool {
        !self.username.is_empty() && !self.password.is_empty()
    }

    pub fn credentials(&self) -> Option<Credentials> {
        if self.has_credentials() {
            Some(Credentials::from_username_and_password(
                self.username.to_owned(),
                self.password.to_owned(),
            ))
        } else {
            None
        }
    }

    pub fn proxy() -> Option<String> {
        env::var(PROXY_ENV_VAR).map_or_else(
            |err| match err {
                VarError::NotPresent => None,
                VarError::NotUnicode(_) => {
                    log::error!("proxy URL is not a valid unicode");
                    None
                }
            },
            Some,
        )
    }
}
