use unicode_width::UnicodeWidthChar;

use url::{ParseError, Url};

/// Truncate a string for display, ending with an ellipsis when cut.
///
/// Width is measured in terminal columns so wide characters count double and
/// the output never lands mid-glyph.
pub fn ellipsize(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthStr;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(1);

        if current_width + char_width + 3 > max_width {
            break;
        }

        result.push(c);
        current_width += char_width;
    }

    result.push_str("...");
    result
}

/// Scheme + host (+ port) of a URL, with a trailing slash, suitable as the
/// base for resolving site-relative hrefs.
pub fn site_root(url: &str) -> Result<String, ParseError> {
    let parsed = Url::parse(url)?;
    let scheme = parsed.scheme();
    let host = parsed.host_str().ok_or(url::ParseError::EmptyHost)?;

    match parsed.port() {
        Some(port) => Ok(format!("{scheme}://{host}:{port}/")),
        None => Ok(format!("{scheme}://{host}/")),
    }
}
