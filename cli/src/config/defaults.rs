//! All setting definitions with their default values.

/// A single setting definition.
#[derive(Debug, Clone, Copy)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

const fn def(key: &'static str, default: &'static str, description: &'static str) -> SettingDef {
    SettingDef {
        key,
        default,
        description,
    }
}

pub const BOX_SIZE: &str = "QR_BRAND_BOX_SIZE";
pub const BORDER: &str = "QR_BRAND_BORDER";
pub const MIN_VERSION: &str = "QR_BRAND_MIN_VERSION";
pub const LOGO_SCALE: &str = "QR_BRAND_LOGO_SCALE";
pub const THRESHOLD: &str = "QR_BRAND_THRESHOLD";
pub const LOGO_DIR: &str = "QR_BRAND_LOGO_DIR";
pub const FILENAME_PREFIX: &str = "QR_BRAND_FILENAME_PREFIX";
pub const THEME: &str = "QR_BRAND_THEME";
pub const FORMAT: &str = "QR_BRAND_FORMAT";

/// Every known setting. An empty default means "computed at load time".
pub const DEFAULT_SETTINGS: &[SettingDef] = &[
    def(BOX_SIZE, "50", "Pixel width of one QR module"),
    def(BORDER, "4", "Blank modules around the symbol"),
    def(MIN_VERSION, "6", "Smallest QR symbol version"),
    def(LOGO_SCALE, "0.2", "Logo side as a fraction of the QR image"),
    def(THRESHOLD, "240", "Channel value above which logo pixels are background"),
    def(LOGO_DIR, "", "Directory holding the theme logos (default: executable dir)"),
    def(FILENAME_PREFIX, "qr", "Prefix for names derived from the URL"),
    def(THEME, "blue-on-white", "Default color theme"),
    def(FORMAT, "png", "Default output format"),
];

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS
        .iter()
        .find(|d| d.key == key)
        .map(|d| d.default)
}
