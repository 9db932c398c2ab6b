use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};
use tsc_list::LineEnding;

const APP_NAME: &str = "tsc_edit";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Options {
    /// Sort commands by code before writing a list.
    #[serde(default = "default_sort_on_save")]
    pub sort_on_save: bool,

    #[serde(default)]
    pub line_ending: LineEnding,
}

fn default_sort_on_save() -> bool {
    true
}

impl Default for Options {
    fn default() -> Self {
        Self {
            sort_on_save: default_sort_on_save(),
            line_ending: LineEnding::Native,
        }
    }
}

impl Options {
    pub fn load_options() -> Self {
        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "GitHub", APP_NAME) {
            let options_file = proj_dirs.config_dir().join("options.toml");
            if options_file.exists() {
                match fs::read_to_string(&options_file) {
                    Ok(txt) => match Self::from_toml(&txt) {
                        Ok(result) => return result,
                        Err(err) => log::error!("Error parsing options file {}: {}", options_file.display(), err),
                    },
                    Err(err) => log::error!("Error reading options file: {}", err),
                }
            }
        }
        Self::default()
    }

    pub fn store_options(&self) {
        let Some(dir) = Self::get_config_dir() else {
            log::error!("No configuration directory available");
            return;
        };
        if !dir.exists() && fs::create_dir_all(&dir).is_err() {
            log::error!("Can't create configuration directory {:?}", dir);
            return;
        }
        match toml::to_string(self) {
            Ok(text) => {
                if let Err(err) = fs::write(dir.join("options.toml"), text) {
                    log::error!("Error writing options file: {}", err);
                }
            }
            Err(err) => log::error!("Error writing options file: {}", err),
        }
    }

    pub fn from_toml(txt: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(txt)
    }

    /// Returns the configuration directory path
    pub fn get_config_dir() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "GitHub", APP_NAME).map(|proj_dirs| proj_dirs.config_dir().to_path_buf())
    }

    /// Returns the log directory path, creating it if needed.
    pub fn get_log_dir() -> Option<PathBuf> {
        let dir = Self::get_config_dir()?;
        if !dir.exists() {
            fs::create_dir_all(&dir).ok()?;
        }
        Some(dir)
    }
}
