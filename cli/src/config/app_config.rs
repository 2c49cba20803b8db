//! Runtime configuration loaded from defaults + environment overrides.

use std::path::{Path, PathBuf};

use qr_brand::{OutputFormat, Theme};

use super::defaults::{
    BORDER, BOX_SIZE, FILENAME_PREFIX, FORMAT, LOGO_DIR, LOGO_SCALE, MIN_VERSION, THEME,
    THRESHOLD, get_default,
};
use super::validation::validate_setting;

/// Runtime configuration for the generator front end.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub box_size: u32,
    pub border: u32,
    pub min_version: i16,
    pub logo_scale: f64,
    pub threshold: u8,
    pub logo_dir: PathBuf,
    pub filename_prefix: String,
    pub theme: Theme,
    pub format: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            box_size: 50,
            border: 4,
            min_version: 6,
            logo_scale: 0.2,
            threshold: 240,
            logo_dir: executable_dir(),
            filename_prefix: "qr".into(),
            theme: Theme::default(),
            format: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults.
    ///
    /// Values that fail validation are logged and replaced by the default.
    pub fn load(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let g = |key: &str| -> String {
            let default = get_default(key).unwrap_or_default();
            match lookup(key) {
                Some(v) if !v.trim().is_empty() => {
                    let v = v.trim().to_string();
                    match validate_setting(key, &v) {
                        Ok(()) => v,
                        Err(e) => {
                            tracing::warn!("Invalid {key}={v:?}: {e}, using default {default:?}");
                            default.to_string()
                        }
                    }
                }
                _ => default.to_string(),
            }
        };

        let defaults = Self::default();
        let logo_dir = g(LOGO_DIR);

        Self {
            box_size: parse_or(&g(BOX_SIZE), defaults.box_size),
            border: parse_or(&g(BORDER), defaults.border),
            min_version: parse_or(&g(MIN_VERSION), defaults.min_version),
            logo_scale: parse_or(&g(LOGO_SCALE), defaults.logo_scale),
            threshold: parse_or(&g(THRESHOLD), defaults.threshold),
            logo_dir: if logo_dir.is_empty() {
                defaults.logo_dir
            } else {
                PathBuf::from(logo_dir)
            },
            filename_prefix: g(FILENAME_PREFIX),
            theme: parse_or(&g(THEME), defaults.theme),
            format: parse_or(&g(FORMAT), defaults.format),
        }
    }
}

fn parse_or<T: std::str::FromStr>(s: &str, default: T) -> T {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

/// Directory containing the running executable, or `.` if unknown.
fn executable_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}
