//! Global font parameters and per-character metric lookup.
//!
//! TeX keeps three sets of font dimensions, one per size class: textstyle
//! (size index 0, >= 9pt), scriptstyle (index 1, 7-8pt) and scriptscriptstyle
//! (index 2, 5-6pt), extracted from cmsy10/cmsy7/cmsy5 and cmex10. The
//! [`FONT_METRICS`] array exposes them; [`get_character_metrics`] resolves
//! individual glyph boxes from the static tables in `font_metrics_data`.

use crate::context::MathTexContext;
use crate::font_metrics_data::CharacterMetrics;
use crate::namespace::KeyMap;
use crate::types::{Mode, ParseError};
use crate::unicode::supported_codepoint;
use phf::phf_map;

/// 0 = textstyle, 1 = scriptstyle, 2 = scriptscriptstyle.
pub type FontSizeIndex = usize;

/// Map from codepoint to glyph metrics within one font family.
pub type MetricMap = KeyMap<u32, CharacterMetrics>;

/// The TeX font parameters (sigmas and xis) for one size class.
#[derive(Debug, Clone, PartialEq)]
#[allow(missing_docs)]
pub struct FontMetrics {
    pub slant: f64,
    pub space: f64,
    pub stretch: f64,
    pub shrink: f64,
    pub x_height: f64,
    pub quad: f64,
    pub extra_space: f64,
    pub num1: f64,
    pub num2: f64,
    pub num3: f64,
    pub denom1: f64,
    pub denom2: f64,
    pub sup1: f64,
    pub sup2: f64,
    pub sup3: f64,
    pub sub1: f64,
    pub sub2: f64,
    pub sup_drop: f64,
    pub sub_drop: f64,
    pub delim1: f64,
    pub delim2: f64,
    pub axis_height: f64,
    /// Thickness of \hrule and fraction bars (xi8).
    pub default_rule_thickness: f64,
    pub big_op_spacing1: f64,
    pub big_op_spacing2: f64,
    pub big_op_spacing3: f64,
    pub big_op_spacing4: f64,
    pub big_op_spacing5: f64,
    /// Thickness of the surd vinculum in the generated SVGs.
    pub sqrt_rule_thickness: f64,
    pub pt_per_em: f64,
    pub double_rule_sep: f64,
    pub array_rule_width: f64,
    pub fbox_sep: f64,
    pub fbox_rule: f64,
    /// CSS ems per math unit (quad / 18).
    pub css_em_per_mu: f64,
}

const fn metrics(
    x_height: f64,
    quad: f64,
    num1: f64,
    num2: f64,
    num3: f64,
    denom1: f64,
    denom2: f64,
    sup1: f64,
    sup2: f64,
    sup3: f64,
    sub1: f64,
    sub2: f64,
    sup_drop: f64,
    sub_drop: f64,
    delim1: f64,
    delim2: f64,
    default_rule_thickness: f64,
    big_op_spacing4: f64,
    big_op_spacing5: f64,
) -> FontMetrics {
    FontMetrics {
        slant: 0.250,
        space: 0.0,
        stretch: 0.0,
        shrink: 0.0,
        x_height,
        quad,
        extra_space: 0.0,
        num1,
        num2,
        num3,
        denom1,
        denom2,
        sup1,
        sup2,
        sup3,
        sub1,
        sub2,
        sup_drop,
        sub_drop,
        delim1,
        delim2,
        axis_height: 0.250,
        default_rule_thickness,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4,
        big_op_spacing5,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        array_rule_width: 0.04,
        fbox_sep: 0.3,
        fbox_rule: 0.04,
        css_em_per_mu: quad / 18.0,
    }
}

/// Sigmas and xis per size class, data from cmsy10/7/5 and cmex10.
pub const FONT_METRICS: [FontMetrics; 3] = [
    // textstyle
    metrics(
        0.431, 1.000, 0.677, 0.394, 0.444, 0.686, 0.345, 0.413, 0.363, 0.289, 0.150, 0.247, 0.386,
        0.050, 2.390, 1.010, 0.040, 0.600, 0.100,
    ),
    // scriptstyle
    metrics(
        0.431, 1.171, 0.732, 0.384, 0.471, 0.752, 0.344, 0.503, 0.431, 0.286, 0.143, 0.286, 0.353,
        0.071, 1.700, 1.157, 0.049, 0.611, 0.143,
    ),
    // scriptscriptstyle
    metrics(
        0.431, 1.472, 0.925, 0.387, 0.504, 1.025, 0.532, 0.504, 0.404, 0.294, 0.200, 0.400, 0.494,
        0.100, 1.980, 1.420, 0.049, 0.611, 0.143,
    ),
];

/// Size class for a size level (1..=11).
#[must_use]
pub const fn font_size_index(size: usize) -> FontSizeIndex {
    if size >= 5 {
        0
    } else if size >= 3 {
        1
    } else {
        2
    }
}

/// Rough stand-ins for characters without direct metrics, defaulting to the
/// Latin glyph a Times-style fallback font would show. Cyrillic letters
/// prefer approximations with ascenders so rules don't intersect the glyph.
pub const EXTRA_CHARACTER_MAP: phf::Map<char, char> = phf_map! {
    // Latin-1
    '\u{c5}' => 'A',
    '\u{d0}' => 'D',
    '\u{de}' => 'o',
    '\u{e5}' => 'a',
    '\u{f0}' => 'd',
    '\u{fe}' => 'o',
    // Cyrillic
    '\u{410}' => 'A',
    '\u{411}' => 'B',
    '\u{412}' => 'B',
    '\u{413}' => 'F',
    '\u{414}' => 'A',
    '\u{415}' => 'E',
    '\u{416}' => 'K',
    '\u{417}' => '3',
    '\u{418}' => 'N',
    '\u{419}' => 'N',
    '\u{41a}' => 'K',
    '\u{41b}' => 'N',
    '\u{41c}' => 'M',
    '\u{41d}' => 'H',
    '\u{41e}' => 'O',
    '\u{41f}' => 'N',
    '\u{420}' => 'P',
    '\u{421}' => 'C',
    '\u{422}' => 'T',
    '\u{423}' => 'y',
    '\u{424}' => 'O',
    '\u{425}' => 'X',
    '\u{426}' => 'U',
    '\u{427}' => 'h',
    '\u{428}' => 'W',
    '\u{429}' => 'W',
    '\u{42a}' => 'B',
    '\u{42b}' => 'X',
    '\u{42c}' => 'B',
    '\u{42d}' => '3',
    '\u{42e}' => 'X',
    '\u{42f}' => 'R',
    '\u{430}' => 'a',
    '\u{431}' => 'b',
    '\u{432}' => 'a',
    '\u{433}' => 'r',
    '\u{434}' => 'y',
    '\u{435}' => 'e',
    '\u{436}' => 'm',
    '\u{437}' => 'e',
    '\u{438}' => 'n',
    '\u{439}' => 'n',
    '\u{43a}' => 'n',
    '\u{43b}' => 'n',
    '\u{43c}' => 'm',
    '\u{43d}' => 'n',
    '\u{43e}' => 'o',
    '\u{43f}' => 'n',
    '\u{440}' => 'p',
    '\u{441}' => 'c',
    '\u{442}' => 'o',
    '\u{443}' => 'y',
    '\u{444}' => 'b',
    '\u{445}' => 'x',
    '\u{446}' => 'n',
    '\u{447}' => 'n',
    '\u{448}' => 'w',
    '\u{449}' => 'w',
    '\u{44a}' => 'a',
    '\u{44b}' => 'm',
    '\u{44c}' => 'a',
    '\u{44d}' => 'e',
    '\u{44e}' => 'm',
    '\u{44f}' => 'r',
};

/// Look up the glyph box for `character` in `font`.
///
/// Falls back through [`EXTRA_CHARACTER_MAP`] and, in text mode, to the
/// metrics of 'M' for supported CJK codepoints so layout stays reasonable.
/// `Err` means the font family itself is unknown.
pub fn get_character_metrics<'a>(
    ctx: &'a MathTexContext,
    character: char,
    font: &str,
    mode: Mode,
) -> Result<Option<&'a CharacterMetrics>, ParseError> {
    let ch = character as u32;

    if let Some(m) = ctx.font_metrics.get_metric(font, ch)? {
        return Ok(Some(m));
    }

    if let Some(&replacement) = EXTRA_CHARACTER_MAP.get(&character)
        && let Some(m) = ctx.font_metrics.get_metric(font, replacement as u32)?
    {
        return Ok(Some(m));
    }

    if mode == Mode::Text && supported_codepoint(ch) {
        // Use metrics for 'M' as an approximation for wide scripts.
        if let Some(m) = ctx.font_metrics.get_metric(font, 'M' as u32)? {
            return Ok(Some(m));
        }
    }

    Ok(None)
}
