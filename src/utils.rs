//! Small shared helpers: HTML escaping and URL protocol sniffing.

use core::fmt;

/// Escape HTML special characters into any `fmt::Write` sink.
///
/// Streams straight into the output buffer; used by every markup writer.
#[inline]
pub fn escape_into<W: fmt::Write>(writer: &mut W, text: &str) -> fmt::Result {
    let mut last = 0;
    for (idx, ch) in text.char_indices() {
        let replacement = match ch {
            '&' => Some("&amp;"),
            '>' => Some("&gt;"),
            '<' => Some("&lt;"),
            '"' => Some("&quot;"),
            '\'' => Some("&#x27;"),
            _ => None,
        };
        if let Some(rep) = replacement {
            if last < idx {
                writer.write_str(&text[last..idx])?;
            }
            writer.write_str(rep)?;
            last = idx + ch.len_utf8();
        }
    }
    if last < text.len() {
        writer.write_str(&text[last..])?;
    }
    Ok(())
}

/// Escape HTML special characters, allocating a fresh string.
#[must_use]
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let _ = escape_into(&mut escaped, text);
    escaped
}

/// Extract the protocol of a URL for trust checks.
///
/// Returns `Some("_relative")` for protocol-less URLs, `None` when the
/// protocol contains characters that could smuggle a different scheme past
/// the check.
#[must_use]
pub fn protocol_from_url(url: &str) -> Option<String> {
    let trimmed = url.trim_start_matches(|c: char| c.is_ascii_control() || c == ' ');
    let Some(colon) = trimmed.find(':') else {
        return Some("_relative".to_owned());
    };
    // A slash or hash before the colon means the colon is part of the path.
    if trimmed[..colon].contains(['/', '#', '?']) {
        return Some("_relative".to_owned());
    }
    let protocol = &trimmed[..colon];
    if protocol.is_empty()
        || !protocol.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        || !protocol
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    {
        return None;
    }
    Some(protocol.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a & b"), "a &amp; b");
        assert_eq!(escape("<span>"), "&lt;span&gt;");
        assert_eq!(escape("it's \"x\""), "it&#x27;s &quot;x&quot;");
    }

    #[test]
    fn test_protocol_from_url() {
        assert_eq!(protocol_from_url("https://x").as_deref(), Some("https"));
        assert_eq!(protocol_from_url("MailTo:a@b").as_deref(), Some("mailto"));
        assert_eq!(protocol_from_url("/a/b:c").as_deref(), Some("_relative"));
        assert_eq!(protocol_from_url("foo bar:x"), None);
    }
}
