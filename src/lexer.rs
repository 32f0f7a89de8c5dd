//! The lexer: input string → tokens with source spans.
//!
//! Recognizes, in priority order: whitespace runs (collapsed to one space),
//! control spaces (`\ `), ordinary characters with trailing combining marks,
//! `\verb`/`\verb*` bodies as single tokens, control words with their
//! trailing space swallowed, and control symbols. `%` starts a comment to end
//! of line; characters outside the supported Unicode ranges fail unless the
//! strict policy says otherwise.

use crate::namespace::KeyMap;
use crate::types::{ParseError, ParseErrorKind, Settings, SourceLocation, Token};
use alloc::sync::Arc;

/// Byte index where a trailing run of combining marks begins in `s`, or
/// `None` when there is none. Lets the parser split `e\u{301}` into base and
/// accents.
#[must_use]
pub fn last_non_combining_mark_index(s: &str) -> Option<usize> {
    let tail: usize = s
        .chars()
        .rev()
        .take_while(|&c| is_combining_mark(c))
        .map(char::len_utf8)
        .sum();
    (tail > 0).then(|| s.len() - tail)
}

const fn is_combining_mark(ch: char) -> bool {
    matches!(ch, '\u{0300}'..='\u{036F}')
}

const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\r' | '\n' | '\t')
}

fn match_space(s: &str) -> Option<usize> {
    let len = s.find(|c| !is_blank(c)).unwrap_or(s.len());
    (len > 0).then_some(len)
}

fn match_control_space(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let next = rest.chars().next()?;
    if !matches!(next, ' ' | '\r' | '\n' | '\t') {
        return None;
    }
    let mut len = 1 + next.len_utf8();
    let mut saw_newline = next == '\n';
    for c in rest[next.len_utf8()..].chars() {
        match c {
            ' ' | '\r' | '\t' => len += c.len_utf8(),
            '\n' if !saw_newline => {
                saw_newline = true;
                len += 1;
            }
            _ => break,
        }
    }
    Some(len)
}

fn match_normal_char_with_combining(s: &str) -> Option<usize> {
    let first = s.chars().next()?;
    let u = first as u32;
    let in_range = matches!(
        u,
        0x0021..=0x005B | 0x005D..=0x2027 | 0x202A..=0xD7FF | 0xF900..=0xFFFF
    ) || u > 0xFFFF;
    if !in_range {
        return None;
    }
    let mut len = first.len_utf8();
    for c in s[len..].chars() {
        if is_combining_mark(c) {
            len += c.len_utf8();
        } else {
            break;
        }
    }
    Some(len)
}

fn match_verb(s: &str, star: bool) -> Option<usize> {
    let prefix = if star { "\\verb*" } else { "\\verb" };
    let rest = s.strip_prefix(prefix)?;
    let mut chars = rest.char_indices();
    let (_, delim) = chars.next()?;
    if !star && delim.is_ascii_alphabetic() {
        return None;
    }
    for (i, c) in chars {
        if matches!(c, '\n' | '\r') {
            return None;
        }
        if c == delim {
            return Some(prefix.len() + i + c.len_utf8());
        }
    }
    None
}

fn match_control_word(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let word = rest
        .find(|c: char| !(c.is_ascii_alphabetic() || c == '@'))
        .unwrap_or(rest.len());
    (word > 0).then(|| word + 1)
}

fn match_control_symbol(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let c = rest.chars().next()?;
    Some(1 + c.len_utf8())
}

enum Matched {
    Space,
    ControlSpace,
    /// Control word length, plus swallowed trailing whitespace.
    ControlWord(usize),
    Plain,
    Unknown,
}

/// Tokenizes one input string. The parser backtracks by re-pushing tokens
/// onto the expander stack, so the lexer itself only ever moves forward.
pub struct Lexer<'a> {
    input: Arc<str>,
    last_index: usize,
    settings: &'a Settings,
    catcodes: KeyMap<char, u8>,
}

impl<'a> Lexer<'a> {
    /// A lexer at the start of `input`.
    #[must_use]
    pub fn new(input: Arc<str>, settings: &'a Settings) -> Self {
        let mut catcodes = KeyMap::default();
        catcodes.insert('%', 14); // comment
        catcodes.insert('~', 13); // active
        Self {
            input,
            last_index: 0,
            settings,
            catcodes,
        }
    }

    /// The input being lexed.
    #[must_use]
    pub fn input(&self) -> &Arc<str> {
        &self.input
    }

    /// Override a character's category code (URL parsing flips `%` and `~`).
    pub fn set_catcode(&mut self, ch: char, code: u8) {
        self.catcodes.insert(ch, code);
    }

    /// The category code of `ch`, if one is set.
    #[must_use]
    pub fn get_catcode(&self, ch: char) -> Option<u8> {
        self.catcodes.get(&ch).copied()
    }

    fn loc(&self, start: usize, end: usize) -> Option<SourceLocation> {
        Some(SourceLocation::new(Arc::clone(&self.input), start, end))
    }

    /// Produce the next token; `EOF` at end of input.
    pub fn lex(&mut self) -> Result<Token, ParseError> {
        if self.last_index >= self.input.len() {
            return Ok(Token::new(
                "EOF".to_owned(),
                self.loc(self.last_index, self.last_index),
            ));
        }

        let start = self.last_index;
        let slice = &self.input[start..];

        let (matched, len) = if let Some(l) = match_space(slice) {
            (Matched::Space, l)
        } else if let Some(l) = match_control_space(slice) {
            (Matched::ControlSpace, l)
        } else if let Some(l) = match_normal_char_with_combining(slice) {
            (Matched::Plain, l)
        } else if let Some(l) = match_verb(slice, true).or_else(|| match_verb(slice, false)) {
            (Matched::Plain, l)
        } else if let Some(word_len) = match_control_word(slice) {
            let space_len = match_space(&slice[word_len..]).unwrap_or(0);
            (Matched::ControlWord(word_len), word_len + space_len)
        } else if let Some(l) = match_control_symbol(slice) {
            (Matched::Plain, l)
        } else {
            (
                Matched::Unknown,
                slice.chars().next().map_or(0, char::len_utf8),
            )
        };

        self.last_index = start + len;
        // The token's span excludes whitespace swallowed after a control word.
        let mut loc_end = self.last_index;

        let text = match matched {
            Matched::Unknown => {
                let character = slice[..len].to_owned();
                let token = Token::new(character.clone(), self.loc(start, self.last_index));
                return Err(ParseError::with_token(
                    ParseErrorKind::UnexpectedCharacter { character },
                    &token,
                ));
            }
            Matched::Space => " ".to_owned(),
            Matched::ControlSpace => "\\ ".to_owned(),
            Matched::ControlWord(word_len) => {
                loc_end = start + word_len;
                slice[..word_len].to_owned()
            }
            Matched::Plain => slice[..len].to_owned(),
        };

        // Comment characters gobble to end of line.
        if text.chars().count() == 1
            && let Some(first) = text.chars().next()
            && self.get_catcode(first) == Some(14)
        {
            if let Some(rel) = slice.find('\n') {
                self.last_index = start + rel;
            } else {
                self.last_index = self.input.len();
                self.settings.report_nonstrict(
                    "commentAtEnd",
                    "% comment has no terminating newline; LaTeX would fail because of commenting the end of math mode",
                    None,
                )?;
            }
            return self.lex();
        }

        Ok(Token::new(text, self.loc(start, loc_end)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex_all(input: &str) -> Vec<String> {
        let settings = Settings::default();
        let mut lexer = Lexer::new(Arc::from(input), &settings);
        let mut out = Vec::new();
        loop {
            let tok = lexer.lex().unwrap();
            if tok.text == "EOF" {
                break;
            }
            out.push(tok.text);
        }
        out
    }

    #[test]
    fn lexes_control_words_and_chars() {
        assert_eq!(lex_all(r"\frac ab"), vec![r"\frac", "a", "b"]);
    }

    #[test]
    fn collapses_spaces() {
        assert_eq!(lex_all("a   b"), vec!["a", " ", "b"]);
    }

    #[test]
    fn control_symbols() {
        assert_eq!(lex_all(r"\%\{"), vec![r"\%", r"\{"]);
    }

    #[test]
    fn comments_run_to_newline() {
        assert_eq!(lex_all("a% ignored\nb"), vec!["a", " ", "b"]);
    }

    #[test]
    fn verb_is_one_token() {
        assert_eq!(lex_all(r"\verb|x y|"), vec![r"\verb|x y|"]);
    }

    #[test]
    fn spans_cover_source() {
        let settings = Settings::default();
        let mut lexer = Lexer::new(Arc::from(r"\alpha x"), &settings);
        let tok = lexer.lex().unwrap();
        let loc = tok.loc.unwrap();
        assert_eq!((loc.start(), loc.end()), (0, 6));
    }
}
