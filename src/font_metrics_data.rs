//! Per-character glyph metrics, one static table per font family.
//!
//! Each entry is `[depth, height, italic, skew, width]` in ems, keyed by
//! codepoint. The tables cover the glyph repertoire the layout rules consult:
//! ASCII, Greek, the delimiter/stacking pieces, big operators, and the common
//! relation/binary/arrow symbols, for every font family the font maps can
//! select. Custom metrics can be layered on at runtime for fonts this crate
//! does not know about.

use crate::font_metrics::MetricMap;
use crate::namespace::KeyMap;
use crate::types::{ParseError, ParseErrorKind};
use phf::phf_map;

/// The measured box of one glyph.
#[derive(Debug, Clone, Copy)]
pub struct CharacterMetrics {
    /// Extent below the baseline.
    pub depth: f64,
    /// Extent above the baseline.
    pub height: f64,
    /// Italic correction applied after the glyph.
    pub italic: f64,
    /// Accent skew.
    pub skew: f64,
    /// Horizontal advance.
    pub width: f64,
}

impl CharacterMetrics {
    /// `[depth, height, italic, skew, width]`, like the TeX font data files.
    #[must_use]
    pub const fn new(depth: f64, height: f64, italic: f64, skew: f64, width: f64) -> Self {
        Self {
            depth,
            height,
            italic,
            skew,
            width,
        }
    }
}

static MAIN_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    32u32 => CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.25), // U+0020
    33u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778), // '!'
    34u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // '"'
    35u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.83334), // '#'
    36u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.5), // '$'
    37u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.83334), // '%'
    38u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.77778), // '&'
    39u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778), // '''
    40u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889), // '('
    41u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889), // ')'
    42u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // '*'
    43u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // '+'
    44u32 => CharacterMetrics::new(0.19444, 0.10556, 0.0, 0.0, 0.27778), // ','
    45u32 => CharacterMetrics::new(-0.08905, 0.19445, 0.0, 0.0, 0.33333), // '-'
    46u32 => CharacterMetrics::new(0.0, 0.10556, 0.0, 0.0, 0.27778), // '.'
    47u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // '/'
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '9'
    58u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.27778), // ':'
    59u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.27778), // ';'
    60u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778), // '<'
    61u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 0.77778), // '='
    62u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778), // '>'
    63u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.47222), // '?'
    64u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.77778), // '@'
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.70834), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.76389), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.68056), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.65278), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.78472), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.36111), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.51389), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.625), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.91667), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.68056), // 'P'
    81u32 => CharacterMetrics::new(0.19444, 0.68333, 0.0, 0.0, 0.77778), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.73611), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.55556), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 1.02778), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.61111), // 'Z'
    91u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778), // '['
    92u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // '\'
    93u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778), // ']'
    95u32 => CharacterMetrics::new(0.31, 0.12, 0.0, 0.0, 0.5), // '_'
    96u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // '`'
    97u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.07778, 0.0, 0.30556), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.5), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.27778), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.65556, 0.0, 0.0, 0.30556), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.52778), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.83334), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.55556), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.52778), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39167), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39445), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.61508, 0.0, 0.0, 0.38889), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.52778), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.72222), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.52778), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.43056, 0.01389, 0.0, 0.52778), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445), // 'z'
    123u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // '{'
    124u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778), // '|'
    125u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // '}'
    160u32 => CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.25), // U+00A0
    168u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+00A8
    172u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.66667), // U+00AC
    177u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+00B1
    180u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+00B4
    215u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778), // U+00D7
    247u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+00F7
    295u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.54028), // U+0127
    710u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02C6
    711u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02C7
    713u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02C9
    728u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02D8
    729u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02D9
    730u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02DA
    732u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02DC
    915u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.625), // U+0393
    916u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83334), // U+0394
    920u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778), // U+0398
    923u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.69445), // U+039B
    926u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.66667), // U+039E
    928u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // U+03A0
    931u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222), // U+03A3
    933u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778), // U+03A5
    934u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222), // U+03A6
    936u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778), // U+03A8
    937u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222), // U+03A9
    8211u32 => CharacterMetrics::new(-0.08905, 0.19445, 0.0, 0.0, 0.5), // U+2013
    8212u32 => CharacterMetrics::new(-0.08905, 0.19445, 0.0, 0.0, 1.0), // U+2014
    8214u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // U+2016
    8216u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778), // U+2018
    8217u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778), // U+2019
    8220u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+201C
    8221u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+201D
    167u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.44445), // U+00A7
    714u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02CA
    715u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+02CB
    8230u32 => CharacterMetrics::new(0.0, 0.12, 0.0, 0.0, 1.172), // U+2026
    8242u32 => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.275), // U+2032
    8942u32 => CharacterMetrics::new(0.03, 0.9, 0.0, 0.0, 0.27778), // U+22EE
    8943u32 => CharacterMetrics::new(-0.03, 0.3, 0.0, 0.0, 1.172), // U+22EF
    8945u32 => CharacterMetrics::new(-0.03, 0.9, 0.0, 0.0, 1.172), // U+22F1
    8407u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5), // U+20D7
    8463u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.54028), // U+210F
    8467u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.41667), // U+2113
    8472u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.80556), // U+2118
    8501u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.61111), // U+2135
    8592u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+2190
    8593u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5), // U+2191
    8594u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+2192
    8595u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5), // U+2193
    8596u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+2194
    8597u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5), // U+2195
    8614u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21A6
    8617u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21A9
    8618u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21AA
    8636u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21BC
    8640u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21C0
    8656u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21D0
    8657u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5), // U+21D1
    8658u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21D2
    8659u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5), // U+21D3
    8660u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.0), // U+21D4
    8661u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5), // U+21D5
    8704u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556), // U+2200
    8706u32 => CharacterMetrics::new(0.0, 0.69444, 0.05556, 0.0, 0.56597), // U+2202
    8707u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556), // U+2203
    8709u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.5), // U+2205
    8711u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83334), // U+2207
    8712u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667), // U+2208
    8715u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667), // U+220B
    8722u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+2212
    8723u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+2213
    8726u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // U+2216
    8727u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.5), // U+2217
    8728u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.5), // U+2218
    8729u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.5), // U+2219
    8730u32 => CharacterMetrics::new(0.05002, 0.85002, 0.0, 0.0, 0.95), // U+221A
    8733u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.77778), // U+221D
    8734u32 => CharacterMetrics::new(-0.00634, 0.43716, 0.0, 0.0, 1.0), // U+221E
    8739u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778), // U+2223
    8741u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // U+2225
    8742u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // U+2226
    8743u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667), // U+2227
    8744u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667), // U+2228
    8745u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667), // U+2229
    8746u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667), // U+222A
    8764u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 0.77778), // U+223C
    8773u32 => CharacterMetrics::new(0.02444, 0.59444, 0.0, 0.0, 0.77778), // U+2245
    8776u32 => CharacterMetrics::new(-0.01688, 0.48312, 0.0, 0.0, 0.77778), // U+2248
    8800u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.77778), // U+2260
    8801u32 => CharacterMetrics::new(-0.00634, 0.49366, 0.0, 0.0, 0.77778), // U+2261
    8804u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778), // U+2264
    8805u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778), // U+2265
    8834u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778), // U+2282
    8835u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778), // U+2283
    8838u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778), // U+2286
    8839u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778), // U+2287
    8853u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+2295
    8854u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+2296
    8855u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+2297
    8857u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+2299
    8869u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.66667), // U+22A5
    8901u32 => CharacterMetrics::new(-0.05555, 0.24444, 0.0, 0.0, 0.27778), // U+22C5
    8902u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5), // U+22C6
    8968u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445), // U+2308
    8969u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445), // U+2309
    8970u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445), // U+230A
    8971u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445), // U+230B
    9136u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.58334), // U+23B0
    9137u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.58334), // U+23B1
    10216u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889), // U+27E8
    10217u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889), // U+27E9
    10222u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.41667), // U+27EE
    10223u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.41667), // U+27EF
};

static MAIN_BOLD: phf::Map<u32, CharacterMetrics> = phf_map! {
    32u32 => CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.2875), // U+0020
    33u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.31945), // '!'
    34u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // '"'
    35u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.95834), // '#'
    36u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.575), // '$'
    37u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.95834), // '%'
    38u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.89445), // '&'
    39u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.31945), // '''
    40u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44722), // '('
    41u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44722), // ')'
    42u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // '*'
    43u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // '+'
    44u32 => CharacterMetrics::new(0.19444, 0.10556, 0.0, 0.0, 0.31945), // ','
    45u32 => CharacterMetrics::new(-0.08905, 0.19445, 0.0, 0.0, 0.38333), // '-'
    46u32 => CharacterMetrics::new(0.0, 0.10556, 0.0, 0.0, 0.31945), // '.'
    47u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // '/'
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '9'
    58u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.31945), // ':'
    59u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.31945), // ';'
    60u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.89445), // '<'
    61u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 0.89445), // '='
    62u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.89445), // '>'
    63u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.54305), // '?'
    64u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.89445), // '@'
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.81459), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83055), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.87847), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.78264), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.7507), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.90243), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.41528), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.59097), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.89445), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.71875), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 1.05417), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.89445), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.78264), // 'P'
    81u32 => CharacterMetrics::new(0.19444, 0.68333, 0.0, 0.0, 0.89445), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.84653), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.63889), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83055), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 1.18195), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.70278), // 'Z'
    91u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.31945), // '['
    92u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // '\'
    93u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.31945), // ']'
    95u32 => CharacterMetrics::new(0.31, 0.12, 0.0, 0.0, 0.575), // '_'
    96u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // '`'
    97u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.575), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.51112), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.51112), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.07778, 0.0, 0.35139), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.575), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.31945), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.65556, 0.0, 0.0, 0.35139), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.60695), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.31945), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.95834), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.63889), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.575), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.63889), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.60695), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.45042), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.45362), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.61508, 0.0, 0.0, 0.44722), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.63889), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.60695), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.83055), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.60695), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.43056, 0.01389, 0.0, 0.60695), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.51112), // 'z'
    123u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // '{'
    124u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.31945), // '|'
    125u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // '}'
    160u32 => CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.2875), // U+00A0
    168u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+00A8
    172u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.76667), // U+00AC
    177u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+00B1
    180u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+00B4
    215u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.89445), // U+00D7
    247u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+00F7
    295u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.62132), // U+0127
    710u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+02C6
    711u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+02C7
    713u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+02C9
    728u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+02D8
    729u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+02D9
    730u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+02DA
    732u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+02DC
    915u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.71875), // U+0393
    916u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.95834), // U+0394
    920u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.89445), // U+0398
    923u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.79862), // U+039B
    926u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.76667), // U+039E
    928u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.8625), // U+03A0
    931u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83055), // U+03A3
    933u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.89445), // U+03A5
    934u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83055), // U+03A6
    936u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.89445), // U+03A8
    937u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83055), // U+03A9
    8211u32 => CharacterMetrics::new(-0.08905, 0.19445, 0.0, 0.0, 0.575), // U+2013
    8212u32 => CharacterMetrics::new(-0.08905, 0.19445, 0.0, 0.0, 1.15), // U+2014
    8214u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // U+2016
    8216u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.31945), // U+2018
    8217u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.31945), // U+2019
    8220u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+201C
    8221u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+201D
    8230u32 => CharacterMetrics::new(0.0, 0.12, 0.0, 0.0, 1.3478), // U+2026
    8242u32 => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.31625), // U+2032
    8407u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // U+20D7
    8463u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.62132), // U+210F
    8467u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.47917), // U+2113
    8472u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.92639), // U+2118
    8501u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.70278), // U+2135
    8592u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+2190
    8593u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.575), // U+2191
    8594u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+2192
    8595u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.575), // U+2193
    8596u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+2194
    8597u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.575), // U+2195
    8614u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21A6
    8617u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21A9
    8618u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21AA
    8636u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21BC
    8640u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21C0
    8656u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21D0
    8657u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.575), // U+21D1
    8658u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21D2
    8659u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.575), // U+21D3
    8660u32 => CharacterMetrics::new(-0.013, 0.511, 0.0, 0.0, 1.15), // U+21D4
    8661u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.575), // U+21D5
    8704u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889), // U+2200
    8706u32 => CharacterMetrics::new(0.0, 0.69444, 0.05556, 0.0, 0.65087), // U+2202
    8707u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889), // U+2203
    8709u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.575), // U+2205
    8711u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.95834), // U+2207
    8712u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.76667), // U+2208
    8715u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.76667), // U+220B
    8722u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+2212
    8723u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+2213
    8726u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // U+2216
    8727u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.575), // U+2217
    8728u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.575), // U+2218
    8729u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.575), // U+2219
    8730u32 => CharacterMetrics::new(0.05002, 0.85002, 0.0, 0.0, 1.0925), // U+221A
    8733u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.89445), // U+221D
    8734u32 => CharacterMetrics::new(-0.00634, 0.43716, 0.0, 0.0, 1.15), // U+221E
    8739u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.31945), // U+2223
    8741u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // U+2225
    8742u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // U+2226
    8743u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.76667), // U+2227
    8744u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.76667), // U+2228
    8745u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.76667), // U+2229
    8746u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.76667), // U+222A
    8764u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 0.89445), // U+223C
    8773u32 => CharacterMetrics::new(0.02444, 0.59444, 0.0, 0.0, 0.89445), // U+2245
    8776u32 => CharacterMetrics::new(-0.01688, 0.48312, 0.0, 0.0, 0.89445), // U+2248
    8800u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.89445), // U+2260
    8801u32 => CharacterMetrics::new(-0.00634, 0.49366, 0.0, 0.0, 0.89445), // U+2261
    8804u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.89445), // U+2264
    8805u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.89445), // U+2265
    8834u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.89445), // U+2282
    8835u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.89445), // U+2283
    8838u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.89445), // U+2286
    8839u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.89445), // U+2287
    8853u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+2295
    8854u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+2296
    8855u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+2297
    8857u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.89445), // U+2299
    8869u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.76667), // U+22A5
    8901u32 => CharacterMetrics::new(-0.05555, 0.24444, 0.0, 0.0, 0.31945), // U+22C5
    8902u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.575), // U+22C6
    8968u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.51112), // U+2308
    8969u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.51112), // U+2309
    8970u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.51112), // U+230A
    8971u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.51112), // U+230B
    9136u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.67084), // U+23B0
    9137u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.67084), // U+23B1
    10216u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44722), // U+27E8
    10217u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44722), // U+27E9
    10222u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.47917), // U+27EE
    10223u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.47917), // U+27EF
};

static MAIN_ITALIC: phf::Map<u32, CharacterMetrics> = phf_map! {
    33u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778), // '!'
    40u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889), // '('
    41u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889), // ')'
    44u32 => CharacterMetrics::new(0.19444, 0.10556, 0.0, 0.0, 0.27778), // ','
    46u32 => CharacterMetrics::new(0.0, 0.10556, 0.0, 0.0, 0.27778), // '.'
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '9'
    58u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.27778), // ':'
    59u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.27778), // ';'
    63u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.47222), // '?'
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.70834), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.72222), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.76389), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.68056), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.65278), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.78472), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.75), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.36111), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.51389), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.77778), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.625), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.91667), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.75), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.77778), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.68056), // 'P'
    81u32 => CharacterMetrics::new(0.19444, 0.68333, 0.0575, 0.0, 0.77778), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.73611), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.55556), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.72222), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.75), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.75), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 1.02778), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.75), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.75), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.0, 0.61111), // 'Z'
    91u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778), // '['
    93u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778), // ']'
    97u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0575, 0.0, 0.55556), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0575, 0.0, 0.55556), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.0575, 0.0, 0.30556), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.5), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0575, 0.0, 0.55556), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.27778), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.65556, 0.0, 0.0, 0.30556), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0575, 0.0, 0.52778), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0575, 0.0, 0.27778), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.83334), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.55556), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.52778), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39167), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39445), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.61508, 0.0575, 0.0, 0.38889), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.52778), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.72222), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.52778), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.52778), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445), // 'z'
};

static MATH_ITALIC: phf::Map<u32, CharacterMetrics> = phf_map! {
    44u32 => CharacterMetrics::new(0.19444, 0.10556, 0.0, 0.0, 0.27778), // ','
    46u32 => CharacterMetrics::new(0.0, 0.10556, 0.0, 0.0, 0.27778), // '.'
    47u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5), // '/'
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '9'
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.13889, 0.75), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.70834), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.72222), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.76389), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.68056), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.65278), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.78472), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.75), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.36111), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.13889, 0.51389), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.77778), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.625), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.91667), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.75), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.77778), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.68056), // 'P'
    81u32 => CharacterMetrics::new(0.19444, 0.68333, 0.0575, 0.08334, 0.77778), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.73611), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.55556), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.72222), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.75), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.75), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 1.02778), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.75), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.75), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.61111), // 'Z'
    97u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.465), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.51667), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.41334), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.16667, 0.51667), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.41334), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.10764, 0.16667, 0.28417), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.02778, 0.465), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.51667), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.65952, 0.0, 0.0, 0.25834), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.65952, 0.0, 0.0, 0.28417), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.49084), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.25834), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.77501), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.51667), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.465), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.51667), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.49084), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.08334, 0.36425), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.08334, 0.36684), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.08334, 0.36167), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.51667), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.02778, 0.49084), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.08334, 0.67166), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.49084), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.05556, 0.49084), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.41334), // 'z'
    305u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.27778), // U+0131
    567u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.30556), // U+0237
    915u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.625), // U+0393
    916u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.83334), // U+0394
    920u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.77778), // U+0398
    923u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.69445), // U+039B
    926u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.66667), // U+039E
    928u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.75), // U+03A0
    931u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.72222), // U+03A3
    933u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.77778), // U+03A5
    934u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.72222), // U+03A6
    936u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.77778), // U+03A8
    937u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.72222), // U+03A9
    945u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.64), // U+03B1
    946u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.566), // U+03B2
    947u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.518), // U+03B3
    948u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.444), // U+03B4
    949u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.466), // U+03B5
    950u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.438), // U+03B6
    951u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.576), // U+03B7
    952u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.469), // U+03B8
    953u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.345), // U+03B9
    954u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.576), // U+03BA
    955u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.583), // U+03BB
    956u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.603), // U+03BC
    957u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.494), // U+03BD
    958u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.438), // U+03BE
    959u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.485), // U+03BF
    960u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.57), // U+03C0
    961u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.517), // U+03C1
    962u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.472), // U+03C2
    963u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.571), // U+03C3
    964u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.437), // U+03C4
    965u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.54), // U+03C5
    966u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.654), // U+03C6
    967u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.626), // U+03C7
    968u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.651), // U+03C8
    969u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.622), // U+03C9
    977u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.591), // U+03D1
    981u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.596), // U+03D5
    982u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.828), // U+03D6
    1009u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.517), // U+03F1
    1013u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.406), // U+03F5
};

static MATH_BOLD_ITALIC: phf::Map<u32, CharacterMetrics> = phf_map! {
    44u32 => CharacterMetrics::new(0.19444, 0.10556, 0.0, 0.0, 0.31945), // ','
    46u32 => CharacterMetrics::new(0.0, 0.10556, 0.0, 0.0, 0.31945), // '.'
    47u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.575), // '/'
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575), // '9'
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.13889, 0.8625), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.81459), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.83055), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.87847), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.78264), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.7507), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.90243), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.8625), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.41528), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.13889, 0.59097), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.89445), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.71875), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 1.05417), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.8625), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.89445), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.78264), // 'P'
    81u32 => CharacterMetrics::new(0.19444, 0.68333, 0.0575, 0.08334, 0.89445), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.84653), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.63889), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.83055), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.8625), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.8625), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 1.18195), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.8625), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.8625), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0575, 0.08334, 0.70278), // 'Z'
    97u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.53475), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.59417), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.47534), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.16667, 0.59417), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.47534), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.10764, 0.16667, 0.3268), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.02778, 0.53475), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.59417), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.65952, 0.0, 0.0, 0.29709), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.65952, 0.0, 0.0, 0.3268), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.56447), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.29709), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.89126), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.59417), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.53475), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.59417), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.56447), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.08334, 0.41889), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.08334, 0.42187), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.08334, 0.41592), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.59417), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.02778, 0.56447), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.08334, 0.77241), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.56447), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.05556, 0.56447), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.47534), // 'z'
    305u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.31945), // U+0131
    567u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.35139), // U+0237
    915u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.71875), // U+0393
    916u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.95834), // U+0394
    920u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.89445), // U+0398
    923u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.79862), // U+039B
    926u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.76667), // U+039E
    928u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.8625), // U+03A0
    931u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.83055), // U+03A3
    933u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.89445), // U+03A5
    934u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.83055), // U+03A6
    936u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.89445), // U+03A8
    937u32 => CharacterMetrics::new(0.0, 0.68333, 0.05556, 0.08334, 0.83055), // U+03A9
    945u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.736), // U+03B1
    946u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.6509), // U+03B2
    947u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.5957), // U+03B3
    948u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.5106), // U+03B4
    949u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.5359), // U+03B5
    950u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.5037), // U+03B6
    951u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.6624), // U+03B7
    952u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.53935), // U+03B8
    953u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.39675), // U+03B9
    954u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.6624), // U+03BA
    955u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.67045), // U+03BB
    956u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.69345), // U+03BC
    957u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.5681), // U+03BD
    958u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.5037), // U+03BE
    959u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.55775), // U+03BF
    960u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.6555), // U+03C0
    961u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.59455), // U+03C1
    962u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.5428), // U+03C2
    963u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.65665), // U+03C3
    964u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.50255), // U+03C4
    965u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.621), // U+03C5
    966u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.7521), // U+03C6
    967u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.7199), // U+03C7
    968u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.74865), // U+03C8
    969u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.7153), // U+03C9
    977u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.05556, 0.67965), // U+03D1
    981u32 => CharacterMetrics::new(0.19444, 0.69444, 0.02778, 0.05556, 0.6854), // U+03D5
    982u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.9522), // U+03D6
    1009u32 => CharacterMetrics::new(0.19444, 0.43056, 0.02778, 0.05556, 0.59455), // U+03F1
    1013u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.4669), // U+03F5
};

static AMS_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5), // '1'
    65u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7125), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.67292), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.68611), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7257), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.64653), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.62014), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.74548), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7125), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.34305), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.4882), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.73889), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.59375), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.87084), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7125), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.73889), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.64653), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.73889), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.6993), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.52778), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.68611), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7125), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7125), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.97639), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7125), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.7125), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.58055), // 'Z'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.52778), // 'k'
    8463u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.54028), // U+210F
    8487u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222), // U+2127
    8709u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.5), // U+2205
    8713u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.66667), // U+2209
    8810u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 1.0), // U+226A
    8811u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 1.0), // U+226B
    8818u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778), // U+2272
    8819u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778), // U+2273
    8840u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.77778), // U+2288
    8841u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.77778), // U+2289
    8912u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778), // U+22D0
    9633u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222), // U+25A1
    9674u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5), // U+25CA
};

static CALIGRAPHIC_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.19445, 0.7875), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.74376), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.75833), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.80208), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.11111, 0.71459), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.11111, 0.68542), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.11111, 0.82396), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.11111, 0.7875), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.02778, 0.37917), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.16667, 0.53958), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.05556, 0.81667), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.65625), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.9625), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.7875), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.11111, 0.81667), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.71459), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.11111, 0.81667), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.77292), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.58334), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.02778, 0.75833), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.7875), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.02778, 0.7875), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 1.07917), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.7875), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.7875), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.64167), // 'Z'
};

static SCRIPT_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    65u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.825), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.77917), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.79444), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.84028), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.74862), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.71806), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.86319), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.825), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.39722), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.56528), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.85556), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.6875), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 1.00834), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.825), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.85556), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.74862), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.85556), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.80972), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.61112), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.79444), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.825), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.825), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 1.13056), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.825), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.825), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.7, 0.0, 0.0, 0.67222), // 'Z'
};

static FRAKTUR_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    65u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.735), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.69417), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.70778), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.74861), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.66695), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.63972), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.76903), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.735), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.35389), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.50361), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.76222), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.6125), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.89834), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.735), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.76222), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.66695), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.76222), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.72139), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.54445), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.70778), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.735), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.735), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 1.00722), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.735), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.735), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.59889), // 'Z'
    97u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.49), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.54445), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.43556), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.54445), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.43556), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.29945), // 'f'
    103u32 => CharacterMetrics::new(0.18906, 0.47534, 0.0, 0.0, 0.49), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.54445), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.27222), // 'i'
    106u32 => CharacterMetrics::new(0.18906, 0.47534, 0.0, 0.0, 0.29945), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.51722), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.27222), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.81667), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.54445), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.49), // 'o'
    112u32 => CharacterMetrics::new(0.18906, 0.47534, 0.0, 0.0, 0.54445), // 'p'
    113u32 => CharacterMetrics::new(0.18906, 0.47534, 0.0, 0.0, 0.51722), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.38384), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.38656), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.69141, 0.0, 0.0, 0.38111), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.54445), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.51722), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.70778), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.51722), // 'x'
    121u32 => CharacterMetrics::new(0.18906, 0.47534, 0.0, 0.0, 0.51722), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.47534, 0.0, 0.0, 0.43556), // 'z'
};

static SANS_SERIF_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    48u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.5), // '9'
    65u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.69), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.65167), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.66444), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.70278), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.62612), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.60056), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.72194), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.69), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.33222), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.47278), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.71556), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.575), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.84334), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.69), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.71556), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.62612), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.71556), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.67722), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.51112), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.66444), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.69), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.69), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.94556), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.69), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.69), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.56222), // 'Z'
    97u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.46), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.51112), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.40889), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.51112), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.40889), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.28112), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.46), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.51112), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.25556), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.28112), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.48556), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.25556), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.76667), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.51112), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.46), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.51112), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.48556), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.36034), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.36289), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.35778), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.51112), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.48556), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.66444), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.48556), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.48556), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.40889), // 'z'
};

static SANS_SERIF_ITALIC: phf::Map<u32, CharacterMetrics> = phf_map! {
    48u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.65556, 0.05, 0.0, 0.5), // '9'
    65u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.69), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.65167), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.66444), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.70278), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.62612), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.60056), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.72194), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.69), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.33222), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.47278), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.71556), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.575), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.84334), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.69), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.71556), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.62612), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.71556), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.67722), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.51112), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.66444), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.69), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.69), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.94556), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.69), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.69), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.56222), // 'Z'
    97u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.46), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.51112), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.40889), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.51112), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.40889), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.28112), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.44444, 0.05, 0.0, 0.46), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.51112), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.25556), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.44444, 0.05, 0.0, 0.28112), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.48556), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.25556), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.76667), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.51112), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.46), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.44444, 0.05, 0.0, 0.51112), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.44444, 0.05, 0.0, 0.48556), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.36034), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.36289), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.69444, 0.05, 0.0, 0.35778), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.51112), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.48556), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.66444), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.48556), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.44444, 0.05, 0.0, 0.48556), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.44444, 0.05, 0.0, 0.40889), // 'z'
};

static SANS_SERIF_BOLD: phf::Map<u32, CharacterMetrics> = phf_map! {
    48u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.65556, 0.0, 0.0, 0.55), // '9'
    65u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.759), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.71684), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.73088), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.77306), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.68873), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.66062), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.79413), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.759), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.36544), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.52006), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.78712), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.6325), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.92767), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.759), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.78712), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.68873), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.78712), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.74494), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.56223), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.73088), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.759), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.759), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 1.04012), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.759), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.759), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.61844), // 'Z'
    97u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.506), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.56223), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.44978), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.56223), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.44978), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.30923), // 'f'
    103u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.506), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.56223), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.28112), // 'i'
    106u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.30923), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.53412), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.28112), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.84334), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.56223), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.506), // 'o'
    112u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.56223), // 'p'
    113u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.53412), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.39637), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.39918), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.39356), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.56223), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.53412), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.73088), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.53412), // 'x'
    121u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.53412), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.44978), // 'z'
};

static TYPEWRITER_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    32u32 => CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.525), // U+0020
    33u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '!'
    34u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '"'
    35u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '#'
    36u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '$'
    37u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '%'
    38u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '&'
    39u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '''
    40u32 => CharacterMetrics::new(0.08333, 0.61111, 0.0, 0.0, 0.525), // '('
    41u32 => CharacterMetrics::new(0.08333, 0.61111, 0.0, 0.0, 0.525), // ')'
    42u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '*'
    43u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '+'
    44u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // ','
    45u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '-'
    46u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '.'
    47u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '/'
    48u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '0'
    49u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '1'
    50u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '2'
    51u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '3'
    52u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '4'
    53u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '5'
    54u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '6'
    55u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '7'
    56u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '8'
    57u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '9'
    58u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // ':'
    59u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // ';'
    60u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '<'
    61u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '='
    62u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '>'
    63u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '?'
    64u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '@'
    65u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'A'
    66u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'B'
    67u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'C'
    68u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'D'
    69u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'E'
    70u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'F'
    71u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'G'
    72u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'H'
    73u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'I'
    74u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'J'
    75u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'K'
    76u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'L'
    77u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'M'
    78u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'N'
    79u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'O'
    80u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'P'
    81u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'Q'
    82u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'R'
    83u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'S'
    84u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'T'
    85u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'U'
    86u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'V'
    87u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'W'
    88u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'X'
    89u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'Y'
    90u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'Z'
    91u32 => CharacterMetrics::new(0.08333, 0.61111, 0.0, 0.0, 0.525), // '['
    92u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '\'
    93u32 => CharacterMetrics::new(0.08333, 0.61111, 0.0, 0.0, 0.525), // ']'
    94u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '^'
    95u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '_'
    96u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '`'
    97u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'a'
    98u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'b'
    99u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'c'
    100u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'd'
    101u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'e'
    102u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'f'
    103u32 => CharacterMetrics::new(0.22222, 0.61111, 0.0, 0.0, 0.525), // 'g'
    104u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'h'
    105u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'i'
    106u32 => CharacterMetrics::new(0.22222, 0.61111, 0.0, 0.0, 0.525), // 'j'
    107u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'k'
    108u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'l'
    109u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'm'
    110u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'n'
    111u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'o'
    112u32 => CharacterMetrics::new(0.22222, 0.61111, 0.0, 0.0, 0.525), // 'p'
    113u32 => CharacterMetrics::new(0.22222, 0.61111, 0.0, 0.0, 0.525), // 'q'
    114u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'r'
    115u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 's'
    116u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 't'
    117u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'u'
    118u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'v'
    119u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'w'
    120u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'x'
    121u32 => CharacterMetrics::new(0.22222, 0.61111, 0.0, 0.0, 0.525), // 'y'
    122u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // 'z'
    123u32 => CharacterMetrics::new(0.08333, 0.61111, 0.0, 0.0, 0.525), // '{'
    124u32 => CharacterMetrics::new(0.08333, 0.61111, 0.0, 0.0, 0.525), // '|'
    125u32 => CharacterMetrics::new(0.08333, 0.61111, 0.0, 0.0, 0.525), // '}'
    126u32 => CharacterMetrics::new(0.0, 0.61111, 0.0, 0.0, 0.525), // '~'
};

static SIZE1_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // '('
    41u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // ')'
    47u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // '/'
    91u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // '['
    92u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // '\'
    93u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // ']'
    123u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // '{'
    125u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // '}'
    8214u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.55556), // U+2016
    8593u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.66667), // U+2191
    8595u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.66667), // U+2193
    8597u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.66667), // U+2195
    8657u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.77778), // U+21D1
    8659u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.77778), // U+21D3
    8661u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.77778), // U+21D5
    8719u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.27778), // U+220F
    8720u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.27778), // U+2210
    8721u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.44445), // U+2211
    8722u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778), // U+2212
    8730u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 1.0), // U+221A
    8739u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.33334), // U+2223
    8741u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.55556), // U+2225
    8747u32 => CharacterMetrics::new(-0.095, 0.805, 0.095, 0.0, 0.55556), // U+222B
    8748u32 => CharacterMetrics::new(-0.095, 0.805, 0.095, 0.0, 0.855), // U+222C
    8749u32 => CharacterMetrics::new(-0.095, 0.805, 0.095, 0.0, 1.15), // U+222D
    8750u32 => CharacterMetrics::new(-0.095, 0.805, 0.095, 0.0, 0.55556), // U+222E
    8896u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.11111), // U+22C0
    8897u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.11111), // U+22C1
    8898u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.11111), // U+22C2
    8899u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.11111), // U+22C3
    8968u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // U+2308
    8969u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // U+2309
    8970u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // U+230A
    8971u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // U+230B
    9136u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // U+23B0
    9137u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.58334), // U+23B1
    9168u32 => CharacterMetrics::new(0.0, 0.6, 0.0, 0.0, 0.66667), // U+23D0
    10216u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // U+27E8
    10217u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.47222), // U+27E9
    10222u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.42222), // U+27EE
    10223u32 => CharacterMetrics::new(0.35001, 0.85001, 0.0, 0.0, 0.42222), // U+27EF
    10752u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.27778), // U+2A00
    10753u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.27778), // U+2A01
    10754u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.27778), // U+2A02
    10756u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.11111), // U+2A04
    10758u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.11111), // U+2A06
};

static SIZE2_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // '('
    41u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // ')'
    47u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // '/'
    91u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // '['
    92u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // '\'
    93u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // ']'
    123u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // '{'
    125u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // '}'
    8214u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.67778), // U+2016
    8593u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.81334), // U+2191
    8595u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.81334), // U+2193
    8597u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.81334), // U+2195
    8657u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.94889), // U+21D1
    8659u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.94889), // U+21D3
    8661u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.94889), // U+21D5
    8719u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+220F
    8720u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2210
    8721u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.44445), // U+2211
    8730u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 1.22), // U+221A
    8739u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.40667), // U+2223
    8741u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.67778), // U+2225
    8747u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.55556), // U+222B
    8748u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.855), // U+222C
    8749u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 1.15), // U+222D
    8750u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.55556), // U+222E
    8896u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C0
    8897u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C1
    8898u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C2
    8899u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C3
    8968u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // U+2308
    8969u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // U+2309
    8970u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // U+230A
    8971u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // U+230B
    9136u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // U+23B0
    9137u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.71167), // U+23B1
    10216u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // U+27E8
    10217u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.57611), // U+27E9
    10222u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.51511), // U+27EE
    10223u32 => CharacterMetrics::new(0.65002, 1.15002, 0.0, 0.0, 0.51511), // U+27EF
    10752u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A00
    10753u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A01
    10754u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A02
    10756u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+2A04
    10758u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+2A06
};

static SIZE3_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // '('
    41u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // ')'
    47u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // '/'
    91u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // '['
    92u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // '\'
    93u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // ']'
    123u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // '{'
    125u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // '}'
    8214u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.7889), // U+2016
    8593u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.94667), // U+2191
    8595u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.94667), // U+2193
    8597u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.94667), // U+2195
    8657u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 1.10445), // U+21D1
    8659u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 1.10445), // U+21D3
    8661u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 1.10445), // U+21D5
    8719u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+220F
    8720u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2210
    8721u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.44445), // U+2211
    8730u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 1.42), // U+221A
    8739u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.47334), // U+2223
    8741u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.7889), // U+2225
    8747u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.55556), // U+222B
    8748u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.855), // U+222C
    8749u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 1.15), // U+222D
    8750u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.55556), // U+222E
    8896u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C0
    8897u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C1
    8898u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C2
    8899u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C3
    8968u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // U+2308
    8969u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // U+2309
    8970u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // U+230A
    8971u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // U+230B
    9136u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // U+23B0
    9137u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.82834), // U+23B1
    10216u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // U+27E8
    10217u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.67055), // U+27E9
    10222u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.59955), // U+27EE
    10223u32 => CharacterMetrics::new(0.95003, 1.45003, 0.0, 0.0, 0.59955), // U+27EF
    10752u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A00
    10753u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A01
    10754u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A02
    10756u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+2A04
    10758u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+2A06
};

static SIZE4_REGULAR: phf::Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // '('
    41u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // ')'
    47u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // '/'
    91u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // '['
    92u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // '\'
    93u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // ']'
    123u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // '{'
    125u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // '}'
    8214u32 => CharacterMetrics::new(0.0, 0.6, 0.0, 0.0, 0.55556), // U+2016
    8593u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 1.05334), // U+2191
    8595u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 1.05334), // U+2193
    8597u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 1.05334), // U+2195
    8657u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 1.22889), // U+21D1
    8659u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 1.22889), // U+21D3
    8661u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 1.22889), // U+21D5
    8719u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+220F
    8720u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2210
    8721u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.44445), // U+2211
    8730u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 1.58), // U+221A
    8739u32 => CharacterMetrics::new(0.0, 0.6, 0.0, 0.0, 0.33334), // U+2223
    8741u32 => CharacterMetrics::new(0.0, 0.6, 0.0, 0.0, 0.55556), // U+2225
    8747u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.55556), // U+222B
    8748u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.855), // U+222C
    8749u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 1.15), // U+222D
    8750u32 => CharacterMetrics::new(0.21, 1.11, 0.095, 0.0, 0.55556), // U+222E
    8896u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C0
    8897u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C1
    8898u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C2
    8899u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+22C3
    8968u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // U+2308
    8969u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // U+2309
    8970u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // U+230A
    8971u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // U+230B
    9115u32 => CharacterMetrics::new(0.3, 0.9, 0.0, 0.0, 0.875), // U+239B
    9116u32 => CharacterMetrics::new(0.3, 0.9, 0.0, 0.0, 0.875), // U+239C
    9117u32 => CharacterMetrics::new(0.3, 0.9, 0.0, 0.0, 0.875), // U+239D
    9118u32 => CharacterMetrics::new(0.3, 0.9, 0.0, 0.0, 0.875), // U+239E
    9119u32 => CharacterMetrics::new(0.3, 0.9, 0.0, 0.0, 0.875), // U+239F
    9120u32 => CharacterMetrics::new(0.3, 0.9, 0.0, 0.0, 0.875), // U+23A0
    9121u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A1
    9122u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A2
    9123u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A3
    9124u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A4
    9125u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A5
    9126u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A6
    9127u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A7
    9128u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A8
    9129u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23A9
    9130u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23AA
    9131u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23AB
    9132u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23AC
    9133u32 => CharacterMetrics::new(0.15, 0.85, 0.0, 0.0, 0.66667), // U+23AD
    9136u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // U+23B0
    9137u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.92168), // U+23B1
    10216u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // U+27E8
    10217u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.74611), // U+27E9
    10222u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.66711), // U+27EE
    10223u32 => CharacterMetrics::new(1.25003, 1.75003, 0.0, 0.0, 0.66711), // U+27EF
    10752u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A00
    10753u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A01
    10754u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.27778), // U+2A02
    10756u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+2A04
    10758u32 => CharacterMetrics::new(0.25, 1.0, 0.0, 0.0, 1.11111), // U+2A06
};

fn builtin_table(font_family: &str) -> Option<&'static phf::Map<u32, CharacterMetrics>> {
    match font_family {
        "Main-Regular" => Some(&MAIN_REGULAR),
        "Main-Bold" => Some(&MAIN_BOLD),
        "Main-Italic" => Some(&MAIN_ITALIC),
        "Math-Italic" => Some(&MATH_ITALIC),
        "Math-BoldItalic" => Some(&MATH_BOLD_ITALIC),
        "AMS-Regular" => Some(&AMS_REGULAR),
        "Caligraphic-Regular" => Some(&CALIGRAPHIC_REGULAR),
        "Script-Regular" => Some(&SCRIPT_REGULAR),
        "Fraktur-Regular" => Some(&FRAKTUR_REGULAR),
        "SansSerif-Regular" => Some(&SANS_SERIF_REGULAR),
        "SansSerif-Italic" => Some(&SANS_SERIF_ITALIC),
        "SansSerif-Bold" => Some(&SANS_SERIF_BOLD),
        "Typewriter-Regular" => Some(&TYPEWRITER_REGULAR),
        "Size1-Regular" => Some(&SIZE1_REGULAR),
        "Size2-Regular" => Some(&SIZE2_REGULAR),
        "Size3-Regular" => Some(&SIZE3_REGULAR),
        "Size4-Regular" => Some(&SIZE4_REGULAR),
        _ => None,
    }
}

/// Glyph metric store: the builtin tables plus runtime overrides.
#[derive(Default)]
pub struct FontMetricsData {
    /// Metrics registered at runtime for fonts outside the builtin set.
    pub custom: KeyMap<String, MetricMap>,
}

impl FontMetricsData {
    /// Look up one glyph. `Err` means the font family itself is unknown.
    pub fn get_metric(
        &self,
        font_family: &str,
        char_code: u32,
    ) -> Result<Option<&CharacterMetrics>, ParseError> {
        if let Some(table) = builtin_table(font_family) {
            return Ok(table.get(&char_code));
        }
        if let Some(custom) = self.custom.get(font_family) {
            return Ok(custom.get(&char_code));
        }
        Err(ParseError::new(ParseErrorKind::FontMetricsNotFound {
            font_family: font_family.to_owned(),
        }))
    }

    /// Register a runtime metric for a custom font family.
    pub fn add_custom_metric(
        &mut self,
        font_family: String,
        char_code: u32,
        metrics: CharacterMetrics,
    ) {
        self.custom
            .entry(font_family)
            .or_default()
            .insert(char_code, metrics);
    }
}
