//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

use qr_brand::render::{MAX_BORDER, MAX_BOX_SIZE};
use qr_brand::{OutputFormat, Theme};

use super::defaults::{
    BORDER, BOX_SIZE, FILENAME_PREFIX, FORMAT, LOGO_SCALE, MIN_VERSION, THEME, THRESHOLD,
};

static RE_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,32}$").unwrap());

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        BOX_SIZE => validate_int_range(value, 1, i64::from(MAX_BOX_SIZE))?,
        BORDER => validate_int_range(value, 0, i64::from(MAX_BORDER))?,
        MIN_VERSION => validate_int_range(value, 1, 40)?,
        THRESHOLD => validate_int_range(value, 0, 255)?,
        LOGO_SCALE => {
            let v: f64 = value.parse().map_err(|_| "must be a float")?;
            if !(0.01..=0.5).contains(&v) {
                return Err("must be between 0.01 and 0.5".into());
            }
        }
        FILENAME_PREFIX => {
            if !RE_PREFIX.is_match(value) {
                return Err("must be 1-32 letters, digits, '_' or '-'".into());
            }
        }
        THEME => {
            value.parse::<Theme>()?;
        }
        FORMAT => {
            value.parse::<OutputFormat>().map_err(|e| e.to_string())?;
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i64, max: i64) -> Result<(), String> {
    let v: i64 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
