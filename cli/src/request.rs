//! Turning command-line input into a generation request.

use std::path::PathBuf;

use anyhow::{Context, bail};
use qr_brand::filename::qr_stem_from_url;
use qr_brand::render::RenderOptions;
use qr_brand::{HexColor, LogoOverlay, QrRequest, with_format_extension};

use crate::args::Args;
use crate::config::AppConfig;

/// Build the request for `url`, resolving every setting as
/// command line > config > theme.
pub fn build_request(
    args: &Args,
    url: &str,
    filename: Option<&str>,
    config: &AppConfig,
) -> anyhow::Result<QrRequest> {
    let url = url.trim();
    if url.is_empty() {
        bail!("URL cannot be empty.");
    }

    let format = args.format.unwrap_or(config.format);
    let name = match filename {
        Some(name) => name.to_string(),
        None if args.name_from_url => qr_stem_from_url(url, &config.filename_prefix)
            .context("Failed to derive a file name from the URL")?,
        None => String::new(),
    };
    let output = PathBuf::from(with_format_extension(&name, format));

    let theme = args.theme.unwrap_or(config.theme);
    let foreground = HexColor::or_default(args.fg.as_deref(), theme.foreground());
    let background = HexColor::or_default(args.bg.as_deref(), theme.background());
    tracing::debug!(theme = theme.slug(), %foreground, %background, "Resolved colors");

    let render = RenderOptions {
        box_size: args.box_size.unwrap_or(config.box_size),
        border: args.border.unwrap_or(config.border),
        min_version: config.min_version,
    };

    Ok(QrRequest::new(url, output)
        .with_format(format)
        .with_colors(foreground, background)
        .with_render_options(render)
        .with_logo(resolve_logo(args, config, theme)))
}

fn resolve_logo(args: &Args, config: &AppConfig, theme: qr_brand::Theme) -> Option<LogoOverlay> {
    if args.no_logo {
        return None;
    }
    let path = args
        .logo
        .clone()
        .unwrap_or_else(|| config.logo_dir.join(theme.logo_file()));
    if !path.is_file() {
        tracing::warn!(
            "Logo file not found: {}. QR will be generated without logo.",
            path.display()
        );
        return None;
    }
    Some(
        LogoOverlay::new(path)
            .with_scale(args.scale.unwrap_or(config.logo_scale))
            .with_threshold(config.threshold),
    )
}
