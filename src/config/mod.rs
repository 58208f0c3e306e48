use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    /// Path of the server-side spreadsheet export; None disables Ctrl+E.
    #[serde(default = "default_excel_path")]
    pub excel_export_path: Option<String>,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_debounce_ms")]
    pub autosave_debounce_ms: u64,
    #[serde(default = "default_notification_ms")]
    pub notification_ms: u64,
    #[serde(default = "default_reload_delay_ms")]
    pub reload_delay_ms: u64,
    #[serde(default = "default_refresh_interval_secs")]
    pub refresh_interval_secs: u64,
    #[serde(default = "default_long_shift_hours")]
    pub long_shift_hours: f64,
    #[serde(default = "default_standard_hours")]
    pub standard_hours: f64,
    #[serde(default = "default_break_minutes")]
    pub break_minutes: i64,
}

fn default_excel_path() -> Option<String> {
    Some("/export_excel".to_string())
}
fn default_export_file() -> String {
    "attendance_data.csv".to_string()
}
fn default_debounce_ms() -> u64 {
    1000
}
fn default_notification_ms() -> u64 {
    3000
}
fn default_reload_delay_ms() -> u64 {
    2000
}
fn default_refresh_interval_secs() -> u64 {
    300
}
fn default_long_shift_hours() -> f64 {
    12.0
}
fn default_standard_hours() -> f64 {
    8.0
}
fn default_break_minutes() -> i64 {
    60
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5001".to_string(),
            excel_export_path: default_excel_path(),
            export_file: default_export_file(),
            autosave_debounce_ms: default_debounce_ms(),
            notification_ms: default_notification_ms(),
            reload_delay_ms: default_reload_delay_ms(),
            refresh_interval_secs: default_refresh_interval_secs(),
            long_shift_hours: default_long_shift_hours(),
            standard_hours: default_standard_hours(),
            break_minutes: default_break_minutes(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("punchclock")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".punchclock")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("punchclock.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize the configuration file with defaults.
    pub fn init_all(server_url: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let mut config = Config::default();
        if let Some(url) = server_url {
            config.server_url = url;
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        println!("✅ Server:      {}", config.server_url);

        Ok(())
    }
}
