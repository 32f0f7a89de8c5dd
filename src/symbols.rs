//! The symbol table: (mode, canonical name) → character info.
//!
//! Maps control sequences and raw characters to their replacement codepoint,
//! atom family, and font. Populated once by [`create_symbols`] during context
//! initialization and read-only afterwards.

use crate::namespace::KeyMap;
use strum::Display;
use strum_macros::EnumString;

/// Math or text mode; fixed per parse node at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Mode {
    /// Math typesetting rules: italic variables, atom spacing.
    Math,
    /// Text rules: spaces survive, ligatures form.
    Text,
}

/// Which font family a symbol's glyph lives in.
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Font {
    /// The Computer Modern main font.
    Main,
    /// The AMS symbol font.
    Ams,
    /// Some other family, named.
    #[strum(default)]
    Custom(String),
}

/// The six spacing-relevant atom families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Atom {
    /// Binary operators: `+`, `\times`, …
    Bin,
    /// Closing delimiters: `)`, `]`, …
    Close,
    /// Inner atoms: `\ldots`, fractions.
    Inner,
    /// Opening delimiters: `(`, `[`, …
    Open,
    /// Punctuation: `,`, `;`.
    Punct,
    /// Relations: `=`, `<`, `\le`, …
    Rel,
}

/// Symbol groups outside the atom families.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NonAtom {
    /// Accent glyphs (`\hat`, `\'`).
    AccentToken,
    /// Ordinary math symbols.
    MathOrd,
    /// Operator glyphs reachable as raw characters (∑, ∫).
    OpToken,
    /// Explicit spaces (`\ `, `~`).
    Spacing,
    /// Ordinary text symbols.
    TextOrd,
}

/// Atom or non-atom classification of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    /// One of the six spacing families.
    Atom(Atom),
    /// Everything else.
    NonAtom(NonAtom),
}

/// What the table knows about one symbol.
#[derive(Debug, Clone)]
pub struct CharInfo {
    /// Font family holding the glyph.
    pub font: Font,
    /// Spacing classification.
    pub group: Group,
    /// Replacement codepoint rendered instead of the name, if any.
    pub replace: Option<char>,
}

/// The two per-mode symbol maps.
pub struct Symbols {
    math: KeyMap<String, CharInfo>,
    text: KeyMap<String, CharInfo>,
}

impl Default for Symbols {
    fn default() -> Self {
        Self::new()
    }
}

impl Symbols {
    /// An empty table. Use [`create_symbols`] for the populated one.
    #[must_use]
    pub fn new() -> Self {
        Self {
            math: KeyMap::default(),
            text: KeyMap::default(),
        }
    }

    /// Define `name` in `mode`. With `accept_unicode_char`, the replacement
    /// character itself becomes an alias for the name.
    pub fn define_symbol(
        &mut self,
        mode: Mode,
        font: Font,
        group: Group,
        replace: Option<char>,
        name: &str,
        accept_unicode_char: bool,
    ) {
        let info = CharInfo {
            font,
            group,
            replace,
        };
        let table = match mode {
            Mode::Math => &mut self.math,
            Mode::Text => &mut self.text,
        };
        table.insert(name.to_owned(), info.clone());
        if accept_unicode_char && let Some(ch) = replace {
            table.insert(ch.to_string(), info);
        }
    }

    /// Look up `name` in `mode`.
    #[must_use]
    pub fn get(&self, mode: Mode, name: &str) -> Option<&CharInfo> {
        match mode {
            Mode::Math => self.math.get(name),
            Mode::Text => self.text.get(name),
        }
    }

    /// Look up `name` in math mode.
    #[must_use]
    pub fn get_math(&self, name: &str) -> Option<&CharInfo> {
        self.math.get(name)
    }

    /// Look up `name` in text mode.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&CharInfo> {
        self.text.get(name)
    }

    /// Whether `name` is defined in `mode`.
    #[must_use]
    pub fn contains(&self, mode: Mode, name: &str) -> bool {
        self.get(mode, name).is_some()
    }
}

/// Text sequences that the fonts render as single ligature glyphs.
#[must_use]
pub fn is_ligature(text: &str) -> bool {
    matches!(text, "--" | "---" | "``" | "''")
}

const REL: Group = Group::Atom(Atom::Rel);
const BIN: Group = Group::Atom(Atom::Bin);
const OPEN: Group = Group::Atom(Atom::Open);
const CLOSE: Group = Group::Atom(Atom::Close);
const PUNCT: Group = Group::Atom(Atom::Punct);
const INNER: Group = Group::Atom(Atom::Inner);
const MATHORD: Group = Group::NonAtom(NonAtom::MathOrd);
const TEXTORD: Group = Group::NonAtom(NonAtom::TextOrd);
const ACCENT: Group = Group::NonAtom(NonAtom::AccentToken);
const OP: Group = Group::NonAtom(NonAtom::OpToken);
const SPACING: Group = Group::NonAtom(NonAtom::Spacing);

/// `(group, replacement, name, accept_unicode_char)`
type Entry = (Group, Option<char>, &'static str, bool);

const MAIN_MATH: &[Entry] = &[
    // relations
    (REL, Some('='), "=", false),
    (REL, Some('<'), "<", false),
    (REL, Some('>'), ">", false),
    (REL, Some(':'), ":", false),
    (REL, Some('<'), "\\lt", true),
    (REL, Some('>'), "\\gt", true),
    (REL, Some('\u{2264}'), "\\le", false),
    (REL, Some('\u{2264}'), "\\leq", true),
    (REL, Some('\u{2265}'), "\\ge", false),
    (REL, Some('\u{2265}'), "\\geq", true),
    (REL, Some('\u{2260}'), "\\ne", false),
    (REL, Some('\u{2260}'), "\\neq", true),
    (REL, Some('\u{2261}'), "\\equiv", true),
    (REL, Some('\u{223C}'), "\\sim", true),
    (REL, Some('\u{2248}'), "\\approx", true),
    (REL, Some('\u{2245}'), "\\cong", true),
    (REL, Some('\u{221D}'), "\\propto", true),
    (REL, Some('\u{2208}'), "\\in", true),
    (REL, Some('\u{220B}'), "\\ni", true),
    (REL, Some('\u{220B}'), "\\owns", false),
    (REL, Some('\u{2282}'), "\\subset", true),
    (REL, Some('\u{2283}'), "\\supset", true),
    (REL, Some('\u{2286}'), "\\subseteq", true),
    (REL, Some('\u{2287}'), "\\supseteq", true),
    (REL, Some('\u{22A5}'), "\\perp", false),
    (REL, Some('\u{2223}'), "\\mid", false),
    (REL, Some('\u{2225}'), "\\parallel", false),
    // arrows are relations
    (REL, Some('\u{2190}'), "\\leftarrow", true),
    (REL, Some('\u{2190}'), "\\gets", false),
    (REL, Some('\u{2192}'), "\\rightarrow", true),
    (REL, Some('\u{2192}'), "\\to", false),
    (REL, Some('\u{2194}'), "\\leftrightarrow", true),
    (REL, Some('\u{21D0}'), "\\Leftarrow", true),
    (REL, Some('\u{21D2}'), "\\Rightarrow", true),
    (REL, Some('\u{21D4}'), "\\Leftrightarrow", true),
    (REL, Some('\u{21A6}'), "\\mapsto", true),
    (REL, Some('\u{21A9}'), "\\hookleftarrow", true),
    (REL, Some('\u{21AA}'), "\\hookrightarrow", true),
    (REL, Some('\u{2191}'), "\\uparrow", true),
    (REL, Some('\u{2193}'), "\\downarrow", true),
    (REL, Some('\u{2195}'), "\\updownarrow", true),
    (REL, Some('\u{21D1}'), "\\Uparrow", true),
    (REL, Some('\u{21D3}'), "\\Downarrow", true),
    (REL, Some('\u{21D5}'), "\\Updownarrow", true),
    (REL, Some('\u{21BC}'), "\\leftharpoonup", true),
    (REL, Some('\u{21C0}'), "\\rightharpoonup", true),
    // binary operators
    (BIN, Some('+'), "+", false),
    (BIN, Some('\u{2212}'), "-", false),
    (BIN, Some('\u{2217}'), "*", false),
    (BIN, Some('\u{00B1}'), "\\pm", true),
    (BIN, Some('\u{2213}'), "\\mp", true),
    (BIN, Some('\u{00D7}'), "\\times", true),
    (BIN, Some('\u{00F7}'), "\\div", true),
    (BIN, Some('\u{22C5}'), "\\cdot", true),
    (BIN, Some('\u{2218}'), "\\circ", false),
    (BIN, Some('\u{2219}'), "\\bullet", false),
    (BIN, Some('\u{2217}'), "\\ast", false),
    (BIN, Some('\u{222A}'), "\\cup", true),
    (BIN, Some('\u{2229}'), "\\cap", true),
    (BIN, Some('\u{2228}'), "\\vee", true),
    (BIN, Some('\u{2228}'), "\\lor", false),
    (BIN, Some('\u{2227}'), "\\wedge", true),
    (BIN, Some('\u{2227}'), "\\land", false),
    (BIN, Some('\u{2295}'), "\\oplus", true),
    (BIN, Some('\u{2296}'), "\\ominus", true),
    (BIN, Some('\u{2297}'), "\\otimes", true),
    (BIN, Some('\u{2299}'), "\\odot", true),
    (BIN, Some('\u{2216}'), "\\setminus", false),
    (BIN, Some('\u{22C6}'), "\\star", false),
    // open / close
    (OPEN, Some('('), "(", false),
    (OPEN, Some('('), "\\lparen", false),
    (OPEN, Some('['), "[", false),
    (OPEN, Some('['), "\\lbrack", true),
    (OPEN, Some('{'), "\\{", false),
    (OPEN, Some('{'), "\\lbrace", false),
    (OPEN, Some('\u{27E8}'), "\\langle", true),
    (OPEN, Some('\u{2223}'), "\\lvert", false),
    (OPEN, Some('\u{2225}'), "\\lVert", false),
    (OPEN, Some('\u{230A}'), "\\lfloor", true),
    (OPEN, Some('\u{2308}'), "\\lceil", true),
    (OPEN, Some('\u{27EE}'), "\\lgroup", true),
    (OPEN, Some('\u{23B0}'), "\\lmoustache", true),
    (CLOSE, Some(')'), ")", false),
    (CLOSE, Some(')'), "\\rparen", false),
    (CLOSE, Some(']'), "]", false),
    (CLOSE, Some(']'), "\\rbrack", true),
    (CLOSE, Some('}'), "\\}", false),
    (CLOSE, Some('}'), "\\rbrace", false),
    (CLOSE, Some('\u{27E9}'), "\\rangle", true),
    (CLOSE, Some('\u{2223}'), "\\rvert", false),
    (CLOSE, Some('\u{2225}'), "\\rVert", false),
    (CLOSE, Some('\u{230B}'), "\\rfloor", true),
    (CLOSE, Some('\u{2309}'), "\\rceil", true),
    (CLOSE, Some('\u{27EF}'), "\\rgroup", true),
    (CLOSE, Some('\u{23B1}'), "\\rmoustache", true),
    (CLOSE, Some('?'), "?", false),
    (CLOSE, Some('!'), "!", false),
    // punctuation
    (PUNCT, Some(','), ",", false),
    (PUNCT, Some(';'), ";", false),
    // inner
    (INNER, Some('\u{2026}'), "\\mathellipsis", false),
    (INNER, Some('\u{2026}'), "\\ldots", true),
    (INNER, Some('\u{22EF}'), "\\@cdots", true),
    (INNER, Some('\u{22F1}'), "\\ddots", true),
    // ordinary math symbols
    (MATHORD, Some('\u{0131}'), "\\imath", false),
    (MATHORD, Some('\u{0237}'), "\\jmath", false),
    (TEXTORD, Some('\u{2032}'), "\\prime", false),
    (TEXTORD, Some('\u{2113}'), "\\ell", true),
    (TEXTORD, Some('\u{210F}'), "\\hbar", true),
    (TEXTORD, Some('\u{2118}'), "\\wp", true),
    (TEXTORD, Some('\u{2202}'), "\\partial", true),
    (TEXTORD, Some('\u{221E}'), "\\infty", true),
    (TEXTORD, Some('\u{2207}'), "\\nabla", true),
    (TEXTORD, Some('\u{2135}'), "\\aleph", true),
    (TEXTORD, Some('\u{2200}'), "\\forall", true),
    (TEXTORD, Some('\u{2203}'), "\\exists", true),
    (TEXTORD, Some('\u{00AC}'), "\\neg", true),
    (TEXTORD, Some('\u{00AC}'), "\\lnot", false),
    (TEXTORD, Some('\u{2205}'), "\\emptyset", true),
    (TEXTORD, Some('\u{221A}'), "\\surd", false),
    (TEXTORD, Some('\u{22A5}'), "\\bot", false),
    (TEXTORD, Some('\u{2223}'), "\\vert", false),
    (TEXTORD, Some('\u{2225}'), "\\Vert", false),
    (TEXTORD, Some('\u{2223}'), "|", false),
    (TEXTORD, Some('\u{2225}'), "\\|", false),
    (TEXTORD, Some('\u{22EE}'), "\\vdots", true),
    (TEXTORD, Some('/'), "/", false),
    (TEXTORD, Some('\\'), "\\backslash", false),
    (TEXTORD, Some('@'), "@", false),
    (TEXTORD, Some('.'), ".", false),
    (TEXTORD, Some('"'), "\"", false),
    (TEXTORD, Some('#'), "\\#", false),
    (TEXTORD, Some('&'), "\\&", false),
    (TEXTORD, Some('$'), "\\$", false),
    (TEXTORD, Some('%'), "\\%", false),
    (TEXTORD, Some('_'), "\\_", false),
    // uppercase Greek
    (MATHORD, Some('\u{0393}'), "\\Gamma", true),
    (MATHORD, Some('\u{0394}'), "\\Delta", true),
    (MATHORD, Some('\u{0398}'), "\\Theta", true),
    (MATHORD, Some('\u{039B}'), "\\Lambda", true),
    (MATHORD, Some('\u{039E}'), "\\Xi", true),
    (MATHORD, Some('\u{03A0}'), "\\Pi", true),
    (MATHORD, Some('\u{03A3}'), "\\Sigma", true),
    (MATHORD, Some('\u{03A5}'), "\\Upsilon", true),
    (MATHORD, Some('\u{03A6}'), "\\Phi", true),
    (MATHORD, Some('\u{03A8}'), "\\Psi", true),
    (MATHORD, Some('\u{03A9}'), "\\Omega", true),
    // lowercase Greek
    (MATHORD, Some('\u{03B1}'), "\\alpha", true),
    (MATHORD, Some('\u{03B2}'), "\\beta", true),
    (MATHORD, Some('\u{03B3}'), "\\gamma", true),
    (MATHORD, Some('\u{03B4}'), "\\delta", true),
    (MATHORD, Some('\u{03F5}'), "\\epsilon", true),
    (MATHORD, Some('\u{03B5}'), "\\varepsilon", true),
    (MATHORD, Some('\u{03B6}'), "\\zeta", true),
    (MATHORD, Some('\u{03B7}'), "\\eta", true),
    (MATHORD, Some('\u{03B8}'), "\\theta", true),
    (MATHORD, Some('\u{03D1}'), "\\vartheta", true),
    (MATHORD, Some('\u{03B9}'), "\\iota", true),
    (MATHORD, Some('\u{03BA}'), "\\kappa", true),
    (MATHORD, Some('\u{03BB}'), "\\lambda", true),
    (MATHORD, Some('\u{03BC}'), "\\mu", true),
    (MATHORD, Some('\u{03BD}'), "\\nu", true),
    (MATHORD, Some('\u{03BE}'), "\\xi", true),
    (MATHORD, Some('\u{03BF}'), "\\omicron", true),
    (MATHORD, Some('\u{03C0}'), "\\pi", true),
    (MATHORD, Some('\u{03D6}'), "\\varpi", true),
    (MATHORD, Some('\u{03C1}'), "\\rho", true),
    (MATHORD, Some('\u{03F1}'), "\\varrho", true),
    (MATHORD, Some('\u{03C3}'), "\\sigma", true),
    (MATHORD, Some('\u{03C2}'), "\\varsigma", true),
    (MATHORD, Some('\u{03C4}'), "\\tau", true),
    (MATHORD, Some('\u{03C5}'), "\\upsilon", true),
    (MATHORD, Some('\u{03D5}'), "\\phi", true),
    (MATHORD, Some('\u{03C6}'), "\\varphi", true),
    (MATHORD, Some('\u{03C7}'), "\\chi", true),
    (MATHORD, Some('\u{03C8}'), "\\psi", true),
    (MATHORD, Some('\u{03C9}'), "\\omega", true),
    // big operators; the glyphs live in the Size fonts
    (OP, Some('\u{2211}'), "\\sum", true),
    (OP, Some('\u{220F}'), "\\prod", true),
    (OP, Some('\u{2210}'), "\\coprod", true),
    (OP, Some('\u{22C0}'), "\\bigwedge", true),
    (OP, Some('\u{22C1}'), "\\bigvee", true),
    (OP, Some('\u{22C2}'), "\\bigcap", true),
    (OP, Some('\u{22C3}'), "\\bigcup", true),
    (OP, Some('\u{2A00}'), "\\bigodot", true),
    (OP, Some('\u{2A01}'), "\\bigoplus", true),
    (OP, Some('\u{2A02}'), "\\bigotimes", true),
    (OP, Some('\u{2A04}'), "\\biguplus", true),
    (OP, Some('\u{2A06}'), "\\bigsqcup", true),
    (OP, Some('\u{222B}'), "\\int", true),
    (OP, Some('\u{222B}'), "\\intop", false),
    (OP, Some('\u{222B}'), "\\smallint", false),
    (OP, Some('\u{222C}'), "\\iint", true),
    (OP, Some('\u{222D}'), "\\iiint", true),
    (OP, Some('\u{222E}'), "\\oint", true),
    // math accents
    (ACCENT, Some('\u{00B4}'), "\\acute", false),
    (ACCENT, Some('\u{0060}'), "\\grave", false),
    (ACCENT, Some('\u{00A8}'), "\\ddot", false),
    (ACCENT, Some('\u{02DC}'), "\\tilde", false),
    (ACCENT, Some('\u{02C9}'), "\\bar", false),
    (ACCENT, Some('\u{02D8}'), "\\breve", false),
    (ACCENT, Some('\u{02C7}'), "\\check", false),
    (ACCENT, Some('\u{02C6}'), "\\hat", false),
    (ACCENT, Some('\u{20D7}'), "\\vec", false),
    (ACCENT, Some('\u{02D9}'), "\\dot", false),
    (ACCENT, Some('\u{02DA}'), "\\mathring", false),
    (ACCENT, Some('\u{02C6}'), "\\widehat", false),
    (ACCENT, Some('\u{02C7}'), "\\widecheck", false),
    (ACCENT, Some('\u{02DC}'), "\\widetilde", false),
    // spacing
    (SPACING, Some('\u{00A0}'), "\\ ", false),
    (SPACING, Some('\u{00A0}'), "~", false),
    (SPACING, Some('\u{00A0}'), "\\space", false),
    (SPACING, Some('\u{00A0}'), "\\nobreakspace", false),
    (SPACING, None, "\\nobreak", false),
    (SPACING, None, "\\allowbreak", false),
];

const AMS_MATH: &[Entry] = &[
    (REL, Some('\u{2272}'), "\\lesssim", true),
    (REL, Some('\u{2273}'), "\\gtrsim", true),
    (REL, Some('\u{226A}'), "\\ll", true),
    (REL, Some('\u{226B}'), "\\gg", true),
    (REL, Some('\u{2209}'), "\\notin", true),
    (REL, Some('\u{2288}'), "\\nsubseteq", true),
    (REL, Some('\u{2289}'), "\\nsupseteq", true),
    (TEXTORD, Some('\u{2205}'), "\\varnothing", false),
    (TEXTORD, Some('\u{25A1}'), "\\square", false),
    (TEXTORD, Some('\u{25A1}'), "\\Box", false),
    (TEXTORD, Some('\u{25CA}'), "\\lozenge", false),
    (TEXTORD, Some('\u{2127}'), "\\mho", false),
];

const MAIN_TEXT: &[Entry] = &[
    (TEXTORD, Some('\u{2013}'), "--", false),
    (TEXTORD, Some('\u{2013}'), "\\textendash", false),
    (TEXTORD, Some('\u{2014}'), "---", false),
    (TEXTORD, Some('\u{2014}'), "\\textemdash", false),
    (TEXTORD, Some('\u{2018}'), "`", false),
    (TEXTORD, Some('\u{2018}'), "\\textquoteleft", false),
    (TEXTORD, Some('\u{2019}'), "'", false),
    (TEXTORD, Some('\u{2019}'), "\\textquoteright", false),
    (TEXTORD, Some('\u{201C}'), "``", false),
    (TEXTORD, Some('\u{201C}'), "\\textquotedblleft", false),
    (TEXTORD, Some('\u{201D}'), "''", false),
    (TEXTORD, Some('\u{201D}'), "\\textquotedblright", false),
    (TEXTORD, Some('#'), "\\#", false),
    (TEXTORD, Some('&'), "\\&", false),
    (TEXTORD, Some('$'), "\\$", false),
    (TEXTORD, Some('%'), "\\%", false),
    (TEXTORD, Some('_'), "\\_", false),
    (TEXTORD, Some('{'), "\\{", false),
    (TEXTORD, Some('{'), "\\textbraceleft", false),
    (TEXTORD, Some('}'), "\\}", false),
    (TEXTORD, Some('}'), "\\textbraceright", false),
    (TEXTORD, Some('\\'), "\\textbackslash", false),
    (TEXTORD, Some('\u{00A7}'), "\\S", false),
    (TEXTORD, Some('\u{2026}'), "\\textellipsis", false),
    (TEXTORD, Some('\u{2026}'), "\\ldots", true),
    // text accents
    (ACCENT, Some('\u{00B4}'), "\\'", false),
    (ACCENT, Some('\u{0060}'), "\\`", false),
    (ACCENT, Some('\u{02C6}'), "\\^", false),
    (ACCENT, Some('\u{02DC}'), "\\~", false),
    (ACCENT, Some('\u{02C9}'), "\\=", false),
    (ACCENT, Some('\u{02D8}'), "\\u", false),
    (ACCENT, Some('\u{02D9}'), "\\.", false),
    (ACCENT, Some('\u{00A8}'), "\\\"", false),
    (ACCENT, Some('\u{02DA}'), "\\r", false),
    (ACCENT, Some('\u{02CB}'), "\\H", false),
    (ACCENT, Some('\u{02C7}'), "\\v", false),
    // spacing
    (SPACING, Some('\u{00A0}'), "\\ ", false),
    (SPACING, Some('\u{00A0}'), " ", false),
    (SPACING, Some('\u{00A0}'), "~", false),
    (SPACING, Some('\u{00A0}'), "\\space", false),
    (SPACING, Some('\u{00A0}'), "\\nobreakspace", false),
];

/// Build the full symbol table.
#[must_use]
pub fn create_symbols() -> Symbols {
    let mut symbols = Symbols::new();

    for &(group, replace, name, accept) in MAIN_MATH {
        symbols.define_symbol(Mode::Math, Font::Main, group, replace, name, accept);
    }
    for &(group, replace, name, accept) in AMS_MATH {
        symbols.define_symbol(Mode::Math, Font::Ams, group, replace, name, accept);
    }
    for &(group, replace, name, accept) in MAIN_TEXT {
        symbols.define_symbol(Mode::Text, Font::Main, group, replace, name, accept);
    }

    // Latin letters: mathord in math mode, textord in text mode.
    for ch in ('a'..='z').chain('A'..='Z') {
        let name = ch.to_string();
        symbols.define_symbol(Mode::Math, Font::Main, MATHORD, Some(ch), &name, false);
        symbols.define_symbol(Mode::Text, Font::Main, TEXTORD, Some(ch), &name, false);
    }

    // Digits are textord in both modes.
    for ch in '0'..='9' {
        let name = ch.to_string();
        symbols.define_symbol(Mode::Math, Font::Main, TEXTORD, Some(ch), &name, false);
        symbols.define_symbol(Mode::Text, Font::Main, TEXTORD, Some(ch), &name, false);
    }

    // Text-mode ASCII punctuation shared with math mode.
    for ch in [
        ',', ';', '.', '!', '?', ':', '(', ')', '[', ']', '<', '>', '=', '+', '-', '*', '/', '@',
        '"', '\'', '`',
    ] {
        let name = ch.to_string();
        symbols.define_symbol(Mode::Text, Font::Main, TEXTORD, Some(ch), &name, false);
    }

    symbols
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_basics() {
        let symbols = create_symbols();
        let plus = symbols.get_math("+").unwrap();
        assert_eq!(plus.group, Group::Atom(Atom::Bin));
        let alpha = symbols.get_math("\\alpha").unwrap();
        assert_eq!(alpha.replace, Some('\u{3B1}'));
        // unicode alias registered by accept_unicode_char
        assert!(symbols.get_math("\u{3B1}").is_some());
    }

    #[test]
    fn modes_are_separate() {
        let symbols = create_symbols();
        assert!(symbols.get_math("\\alpha").is_some());
        assert!(symbols.get_text("\\alpha").is_none());
        assert!(symbols.get_text("``").is_some());
    }

    #[test]
    fn ligatures() {
        assert!(is_ligature("--"));
        assert!(is_ligature("''"));
        assert!(!is_ligature("-"));
    }
}
