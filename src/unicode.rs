//! Unicode support data: script detection, combining accents, and the
//! sub/superscript codepoints.

use phf::{Map, phf_map};

struct ScriptBlocks {
    name: &'static str,
    blocks: &'static [(u32, u32)],
}

/// Unicode block ranges for scripts the CSS ships fallback fonts for. The
/// block names become `<script>_fallback` classes on symbol nodes.
const SCRIPT_DATA: &[ScriptBlocks] = &[
    ScriptBlocks {
        // Latin characters beyond the Latin-1 set, accented or not.
        name: "latin",
        blocks: &[(0x0100, 0x024F), (0x0300, 0x036F)],
    },
    ScriptBlocks {
        name: "cyrillic",
        blocks: &[(0x0400, 0x04FF)],
    },
    ScriptBlocks {
        name: "armenian",
        blocks: &[(0x0530, 0x058F)],
    },
    ScriptBlocks {
        name: "brahmic",
        blocks: &[(0x0900, 0x109F)],
    },
    ScriptBlocks {
        name: "georgian",
        blocks: &[(0x10A0, 0x10FF)],
    },
    ScriptBlocks {
        // CJK ideograms, Hiragana, Katakana, fullwidth punctuation.
        name: "cjk",
        blocks: &[(0x3000, 0x30FF), (0x4E00, 0x9FAF), (0xFF00, 0xFF60)],
    },
    ScriptBlocks {
        name: "hangul",
        blocks: &[(0xAC00, 0xD7A3)],
    },
];

/// The script fallback class for a codepoint, or `None` for unstyled scripts.
/// Latin is detected but gets no fallback class.
#[must_use]
pub fn script_from_codepoint(codepoint: u32) -> Option<&'static str> {
    for script in SCRIPT_DATA {
        for &(start, end) in script.blocks {
            if (start..=end).contains(&codepoint) && script.name != "latin" {
                return Some(script.name);
            }
        }
    }
    None
}

/// Whether a codepoint falls in a block this crate knows how to render.
#[must_use]
pub fn supported_codepoint(codepoint: u32) -> bool {
    if codepoint < 0x80 {
        return true;
    }
    SCRIPT_DATA.iter().any(|script| {
        script
            .blocks
            .iter()
            .any(|&(start, end)| (start..=end).contains(&codepoint))
    })
}

/// Unicode sub/superscript characters mapped to the plain text they script.
pub const U_SUBS_AND_SUPS: Map<char, &'static str> = phf_map! {
    // subscripts
    '\u{2080}' => "0",
    '\u{2081}' => "1",
    '\u{2082}' => "2",
    '\u{2083}' => "3",
    '\u{2084}' => "4",
    '\u{2085}' => "5",
    '\u{2086}' => "6",
    '\u{2087}' => "7",
    '\u{2088}' => "8",
    '\u{2089}' => "9",
    '\u{208A}' => "+",
    '\u{208B}' => "-",
    '\u{208C}' => "=",
    '\u{208D}' => "(",
    '\u{208E}' => ")",
    '\u{2090}' => "a",
    '\u{2091}' => "e",
    '\u{2095}' => "h",
    '\u{1D62}' => "i",
    '\u{2C7C}' => "j",
    '\u{2096}' => "k",
    '\u{2097}' => "l",
    '\u{2098}' => "m",
    '\u{2099}' => "n",
    '\u{2092}' => "o",
    '\u{209A}' => "p",
    '\u{1D63}' => "r",
    '\u{209B}' => "s",
    '\u{209C}' => "t",
    '\u{1D64}' => "u",
    '\u{1D65}' => "v",
    '\u{2093}' => "x",
    // superscripts
    '\u{B9}' => "1",
    '\u{B2}' => "2",
    '\u{B3}' => "3",
    '\u{2070}' => "0",
    '\u{2074}' => "4",
    '\u{2075}' => "5",
    '\u{2076}' => "6",
    '\u{2077}' => "7",
    '\u{2078}' => "8",
    '\u{2079}' => "9",
    '\u{207A}' => "+",
    '\u{207B}' => "-",
    '\u{207C}' => "=",
    '\u{207D}' => "(",
    '\u{207E}' => ")",
    '\u{2071}' => "i",
    '\u{207F}' => "n",
};

/// Whether a [`U_SUBS_AND_SUPS`] character scripts downward.
#[must_use]
pub const fn is_unicode_subscript(ch: char) -> bool {
    matches!(ch as u32, 0x1D62..=0x1D65 | 0x2080..=0x209C | 0x2C7C)
}

/// Accent commands for a combining mark, per mode.
#[derive(Debug, Clone, Copy)]
pub struct AccentMapping {
    /// Text-mode command (empty when unsupported in text).
    pub text: &'static str,
    /// Math-mode command, when one exists.
    pub math: Option<&'static str>,
}

const fn accent(text: &'static str, math: Option<&'static str>) -> AccentMapping {
    AccentMapping { text, math }
}

/// Combining diacritic → accent command.
const UNICODE_ACCENT_MAP: Map<char, AccentMapping> = phf_map! {
    '\u{0300}' => accent("\\`", Some("\\grave")),
    '\u{0301}' => accent("\\'", Some("\\acute")),
    '\u{0302}' => accent("\\^", Some("\\hat")),
    '\u{0303}' => accent("\\~", Some("\\tilde")),
    '\u{0304}' => accent("\\=", Some("\\bar")),
    '\u{0306}' => accent("\\u", Some("\\breve")),
    '\u{0307}' => accent("\\.", Some("\\dot")),
    '\u{0308}' => accent("\\\"", Some("\\ddot")),
    '\u{030A}' => accent("\\r", Some("\\mathring")),
    '\u{030B}' => accent("\\H", None),
    '\u{030C}' => accent("\\v", Some("\\check")),
    '\u{0327}' => accent("\\c", None),
};

/// Look up the accent command for a combining mark.
#[must_use]
pub fn get_accent_mapping(ch: char) -> Option<&'static AccentMapping> {
    UNICODE_ACCENT_MAP.get(&ch)
}

/// Precomposed characters decomposed into base + combining marks, so the
/// parser can route them through the accent machinery.
pub const UNICODE_SYMBOLS: Map<char, &'static str> = phf_map! {
    '\u{e9}' => "e\u{301}",
    '\u{e8}' => "e\u{300}",
    '\u{ea}' => "e\u{302}",
    '\u{eb}' => "e\u{308}",
    '\u{e1}' => "a\u{301}",
    '\u{e0}' => "a\u{300}",
    '\u{e2}' => "a\u{302}",
    '\u{e4}' => "a\u{308}",
    '\u{e3}' => "a\u{303}",
    '\u{ed}' => "i\u{301}",
    '\u{ec}' => "i\u{300}",
    '\u{ee}' => "i\u{302}",
    '\u{ef}' => "i\u{308}",
    '\u{f3}' => "o\u{301}",
    '\u{f2}' => "o\u{300}",
    '\u{f4}' => "o\u{302}",
    '\u{f6}' => "o\u{308}",
    '\u{f5}' => "o\u{303}",
    '\u{fa}' => "u\u{301}",
    '\u{f9}' => "u\u{300}",
    '\u{fb}' => "u\u{302}",
    '\u{fc}' => "u\u{308}",
    '\u{fd}' => "y\u{301}",
    '\u{ff}' => "y\u{308}",
    '\u{f1}' => "n\u{303}",
    '\u{e7}' => "c\u{327}",
    '\u{c9}' => "E\u{301}",
    '\u{c8}' => "E\u{300}",
    '\u{ca}' => "E\u{302}",
    '\u{cb}' => "E\u{308}",
    '\u{c1}' => "A\u{301}",
    '\u{c0}' => "A\u{300}",
    '\u{c2}' => "A\u{302}",
    '\u{c4}' => "A\u{308}",
    '\u{c3}' => "A\u{303}",
    '\u{d3}' => "O\u{301}",
    '\u{d2}' => "O\u{300}",
    '\u{d4}' => "O\u{302}",
    '\u{d6}' => "O\u{308}",
    '\u{d5}' => "O\u{303}",
    '\u{da}' => "U\u{301}",
    '\u{d9}' => "U\u{300}",
    '\u{db}' => "U\u{302}",
    '\u{dc}' => "U\u{308}",
    '\u{d1}' => "N\u{303}",
    '\u{c7}' => "C\u{327}",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_supported() {
        assert!(supported_codepoint('a' as u32));
        assert!(supported_codepoint('+' as u32));
    }

    #[test]
    fn cjk_gets_fallback_class() {
        assert_eq!(script_from_codepoint(0x4E2D), Some("cjk"));
        assert_eq!(script_from_codepoint(0xAC00), Some("hangul"));
        assert_eq!(script_from_codepoint('x' as u32), None);
    }

    #[test]
    fn latin_extended_has_no_fallback_class() {
        assert!(supported_codepoint(0x0153));
        assert_eq!(script_from_codepoint(0x0153), None);
    }

    #[test]
    fn subscript_detection() {
        assert!(is_unicode_subscript('\u{2082}'));
        assert!(!is_unicode_subscript('\u{B2}'));
    }
}
