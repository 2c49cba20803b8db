//! Output file naming.

use percent_encoding::percent_decode_str;
use url::{ParseError, Url};

use crate::output::OutputFormat;
use crate::{QrBrandError, Result};

/// Fallback output name when the user gives none.
pub const DEFAULT_FILE_STEM: &str = "qr_code";

/// Default prefix for names derived from a URL.
pub const DEFAULT_PREFIX: &str = "qr";

/// Derive a PNG file name from a URL.
///
/// `https://www.usaa.com/banking` gives `qr_usaa_banking.png` and
/// `https://example.org` gives `qr_example.png`.
pub fn qr_filename_from_url(url: &str, prefix: &str) -> Result<String> {
    Ok(format!("{}.png", qr_stem_from_url(url, prefix)?))
}

/// Like [`qr_filename_from_url`] but without an extension.
///
/// The stem is `{prefix}_{first host label}[_{first path segment}]`, with a
/// leading `www.` dropped from the host. URLs without a scheme are read as
/// `https://`. The path segment is percent-decoded; the host comes back
/// lowercased from URL parsing.
pub fn qr_stem_from_url(url: &str, prefix: &str) -> Result<String> {
    let parsed = parse_lenient(url.trim())?;
    let host = parsed.host_str().ok_or_else(|| QrBrandError::InvalidUrl {
        url: url.to_string(),
        reason: "missing host".into(),
    })?;

    let domain = host.strip_prefix("www.").unwrap_or(host);
    let domain_base = domain.split('.').next().unwrap_or(domain);

    let path_part = parsed
        .path_segments()
        .and_then(|mut segments| segments.find(|s| !s.is_empty()))
        .map(|s| percent_decode_str(s).decode_utf8_lossy());

    Ok(match path_part {
        Some(part) => format!("{prefix}_{domain_base}_{part}"),
        None => format!("{prefix}_{domain_base}"),
    })
}

fn parse_lenient(url: &str) -> Result<Url> {
    let invalid = |e: ParseError| QrBrandError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    };
    match Url::parse(url) {
        Ok(parsed) => Ok(parsed),
        Err(ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{url}")).map_err(invalid)
        }
        Err(e) => Err(invalid(e)),
    }
}

/// Complete a user-typed output name for `format`.
///
/// An empty name becomes [`DEFAULT_FILE_STEM`]. The format's extension is
/// appended unless the name already ends with one of its extensions.
pub fn with_format_extension(name: &str, format: OutputFormat) -> String {
    let name = name.trim();
    let name = if name.is_empty() { DEFAULT_FILE_STEM } else { name };

    let lower = name.to_ascii_lowercase();
    let has_ext = format
        .extensions()
        .iter()
        .any(|ext| lower.ends_with(&format!(".{ext}")));

    if has_ext {
        name.to_string()
    } else {
        format!("{name}.{}", format.extension())
    }
}
