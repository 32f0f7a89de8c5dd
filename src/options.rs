//! The immutable context value threaded through building.
//!
//! [`Options`] records the current style, size level, color and font state.
//! Builders never mutate an `Options`; every `having_*`/`with_*` method
//! returns a derived copy, so sibling subtrees cannot observe each other's
//! changes. All derivations funnel through two private helpers, `derive`
//! (clone + patch) and `reseat` (style/size change with the multiplier kept
//! in sync).

use crate::font_metrics::{FONT_METRICS, FontMetrics, font_size_index};
use crate::style::{Style, TEXT};
use bon::bon;
use core::ptr;
use strum::{AsRefStr, Display};

/// Text font weight commands.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FontWeight {
    /// `\textbf`
    TextBf,
    /// `\textmd`
    TextMd,
    /// No change.
    #[strum(serialize = "")]
    Empty,
}

/// Text font shape commands.
#[derive(Debug, Clone, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum FontShape {
    /// `\textit`
    TextIt,
    /// `\textup`
    TextUp,
    /// No change.
    #[strum(serialize = "")]
    Empty,
}

/// Per-size mapping `[textsize, scriptsize, scriptscriptsize]`, from TeX with
/// `\normalsize` = 10pt.
const SIZE_STYLE_MAP: [[usize; 3]; 11] = [
    [1, 1, 1],   // size1: [5, 5, 5]       \tiny
    [2, 1, 1],   // size2: [6, 5, 5]
    [3, 1, 1],   // size3: [7, 5, 5]       \scriptsize
    [4, 2, 1],   // size4: [8, 6, 5]       \footnotesize
    [5, 2, 1],   // size5: [9, 6, 5]       \small
    [6, 3, 1],   // size6: [10, 7, 5]      \normalsize
    [7, 4, 2],   // size7: [12, 8, 6]      \large
    [8, 6, 3],   // size8: [14.4, 10, 7]   \Large
    [9, 7, 6],   // size9: [17.28, 12, 10] \LARGE
    [10, 8, 7],  // size10: [20.74, 14.4, 12] \huge
    [11, 10, 9], // size11: [24.88, 20.74, 17.28] \HUGE
];

const SIZE_MULTIPLIERS: [f64; 11] = [
    0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.728, 2.074, 2.488,
];

/// The em multiplier for a size level, clamped into the table.
const fn multiplier_for(size: usize) -> f64 {
    let idx = if size > SIZE_MULTIPLIERS.len() {
        SIZE_MULTIPLIERS.len()
    } else {
        size
    };
    SIZE_MULTIPLIERS[idx - 1]
}

/// The effective size level of `size` when set in `style`: text-or-larger
/// styles keep it, script levels step down through the size map.
fn size_at_style(size: usize, style: &Style) -> usize {
    match style.size {
        0 | 1 => size,
        level => SIZE_STYLE_MAP[size - 1][level - 1],
    }
}

/// CSS classes that switch the font size from level `from` to level `to`.
fn size_switch_classes(from: usize, to: usize) -> Vec<String> {
    if from == to {
        Vec::new()
    } else {
        vec![
            "sizing".to_owned(),
            format!("reset-size{from}"),
            format!("size{to}"),
        ]
    }
}

/// Style, size, color and font state at one point of the build.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Current math style.
    pub style: &'static Style,
    /// Current color, if any.
    pub color: Option<String>,
    /// Current size level (1..=11).
    pub size: usize,
    /// Size level the surrounding text is set at.
    pub text_size: usize,
    /// Inside a phantom: render transparently.
    pub phantom: bool,
    /// Math font command in effect (e.g. `mathbf`), or empty.
    pub font: String,
    /// Text font family in effect (e.g. `textrm`), or empty.
    pub font_family: String,
    /// Text font weight in effect.
    pub font_weight: FontWeight,
    /// Text font shape in effect.
    pub font_shape: FontShape,
    /// Multiplier of the base em size for the current size level.
    pub size_multiplier: f64,
    /// Cap on computed sizes, from the settings record.
    pub max_size: f64,
    /// Lower bound on rule thickness, from the settings record.
    pub min_rule_thickness: f64,
}

#[bon]
impl Options {
    /// Build an `Options`; unset fields default like the root options do.
    #[builder]
    pub fn new(
        style: &'static Style,
        color: Option<String>,
        size: Option<usize>,
        text_size: Option<usize>,
        phantom: Option<bool>,
        font: Option<String>,
        font_family: Option<String>,
        font_weight: Option<FontWeight>,
        font_shape: Option<FontShape>,
        max_size: f64,
        min_rule_thickness: f64,
    ) -> Self {
        let size = size.unwrap_or(Self::BASESIZE);
        Self {
            style,
            color,
            size,
            text_size: text_size.unwrap_or(size),
            phantom: phantom.unwrap_or(false),
            font: font.unwrap_or_default(),
            font_family: font_family.unwrap_or_default(),
            font_weight: font_weight.unwrap_or(FontWeight::Empty),
            font_shape: font_shape.unwrap_or(FontShape::Empty),
            size_multiplier: multiplier_for(size),
            max_size,
            min_rule_thickness,
        }
    }
}

impl Options {
    /// The size index of `\normalsize`.
    pub const BASESIZE: usize = 6;

    /// Clone with a patch applied. Every `with_*` derivation goes through
    /// here.
    fn derive(&self, patch: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        patch(&mut next);
        next
    }

    /// Clone into a new style/size pair, keeping the multiplier consistent.
    fn reseat(&self, style: &'static Style, size: usize) -> Self {
        self.derive(|o| {
            o.style = style;
            o.size = size;
            o.size_multiplier = multiplier_for(size);
        })
    }

    /// Derived options in the given style (identity when unchanged).
    #[must_use]
    pub fn having_style(&self, style: &'static Style) -> Self {
        if ptr::eq(self.style, style) {
            self.clone()
        } else {
            self.reseat(style, size_at_style(self.text_size, style))
        }
    }

    /// Derived options in the cramped variant of the current style.
    #[must_use]
    pub fn having_cramped_style(&self) -> Self {
        self.having_style(self.style.cramp())
    }

    /// Derived options at the given size level and at least `\textstyle`.
    #[must_use]
    pub fn having_size(&self, size: usize) -> Self {
        if self.size == size && self.text_size == size {
            return self.clone();
        }
        self.derive(|o| {
            o.style = TEXT;
            o.size = size;
            o.text_size = size;
            o.size_multiplier = multiplier_for(size);
        })
    }

    /// Derived options at base size in `style` (or the text version of the
    /// current style when `style` is `None`).
    #[must_use]
    pub fn having_base_style(&self, style: Option<&'static Style>) -> Self {
        let style = style.unwrap_or_else(|| self.style.text());
        let want = size_at_style(Self::BASESIZE, style);
        let already_there =
            self.size == want && self.text_size == Self::BASESIZE && self.style == style;
        if already_there {
            self.clone()
        } else {
            self.reseat(style, want)
        }
    }

    /// Remove user sizing (`\Huge` etc.) but keep the current style's size
    /// class: normalsize at the current script level.
    #[must_use]
    pub fn having_base_sizing(&self) -> Self {
        let size = match self.style.size {
            2 => 3,
            3 => 1,
            _ => Self::BASESIZE,
        };
        self.reseat(self.style.text(), size)
    }

    /// Derived options with the given color.
    #[must_use]
    pub fn with_color(&self, color: String) -> Self {
        self.derive(|o| o.color = Some(color))
    }

    /// Derived options inside a phantom.
    #[must_use]
    pub fn with_phantom(&self) -> Self {
        self.derive(|o| o.phantom = true)
    }

    /// Derived options with the given math font command.
    #[must_use]
    pub fn with_font(&self, font: String) -> Self {
        self.derive(|o| o.font = font)
    }

    /// Derived options with the given text font family. Clears any math font
    /// command, which would otherwise shadow the family.
    #[must_use]
    pub fn with_text_font_family(&self, font_family: String) -> Self {
        self.derive(|o| {
            o.font_family = font_family;
            o.font.clear();
        })
    }

    /// Derived options with the given text font weight.
    #[must_use]
    pub fn with_text_font_weight(&self, font_weight: FontWeight) -> Self {
        self.derive(|o| {
            o.font_weight = font_weight;
            o.font.clear();
        })
    }

    /// Derived options with the given text font shape.
    #[must_use]
    pub fn with_text_font_shape(&self, font_shape: FontShape) -> Self {
        self.derive(|o| {
            o.font_shape = font_shape;
            o.font.clear();
        })
    }

    /// CSS classes that switch sizing from `old_options` to `self`.
    #[must_use]
    pub fn sizing_classes(&self, old_options: &Self) -> Vec<String> {
        size_switch_classes(old_options.size, self.size)
    }

    /// CSS classes that switch from `self` back to the base size.
    #[must_use]
    pub fn base_sizing_classes(&self) -> Vec<String> {
        size_switch_classes(self.size, Self::BASESIZE)
    }

    /// The effective CSS color. Phantom boxes always paint transparent.
    #[must_use]
    pub fn get_color(&self) -> Option<String> {
        if self.phantom {
            return Some("transparent".to_owned());
        }
        self.color.clone()
    }

    /// Global font metrics for the current size level.
    #[must_use]
    pub const fn font_metrics(&self) -> &'static FontMetrics {
        &FONT_METRICS[font_size_index(self.size)]
    }
}

impl Default for Options {
    fn default() -> Self {
        Self::builder()
            .style(TEXT)
            .max_size(1000.0)
            .min_rule_thickness(0.04)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DISPLAY, SCRIPT, SCRIPTSCRIPT};

    fn base() -> Options {
        Options::default()
    }

    #[test]
    fn size_shrinks_with_style() {
        assert_eq!(size_at_style(6, DISPLAY), 6);
        assert_eq!(size_at_style(6, SCRIPT), 3);
        assert_eq!(size_at_style(6, SCRIPTSCRIPT), 1);
    }

    #[test]
    fn having_style_is_identity_when_unchanged() {
        let opts = base();
        assert_eq!(opts, opts.having_style(TEXT));
    }

    #[test]
    fn script_style_reduces_multiplier() {
        let script = base().having_style(SCRIPT);
        assert_eq!(script.size, 3);
        assert!((script.size_multiplier - 0.7).abs() < 1e-12);
    }

    #[test]
    fn base_sizing_undoes_user_size() {
        let huge = base().having_size(11);
        let back = huge.having_base_sizing();
        assert_eq!(back.size, Options::BASESIZE);
    }

    #[test]
    fn sizing_classes_round_trip() {
        let opts = base().having_size(9);
        assert_eq!(
            opts.base_sizing_classes(),
            vec![
                "sizing".to_owned(),
                "reset-size9".to_owned(),
                "size6".to_owned()
            ]
        );
        assert!(base().base_sizing_classes().is_empty());
    }

    #[test]
    fn text_font_family_clears_math_font() {
        let opts = base()
            .with_font("mathbf".to_owned())
            .with_text_font_family("textsf".to_owned());
        assert!(opts.font.is_empty());
        assert_eq!(opts.font_family, "textsf");
    }

    #[test]
    fn phantom_color_is_transparent() {
        let opts = base().with_color("red".to_owned()).with_phantom();
        assert_eq!(opts.get_color().as_deref(), Some("transparent"));
    }
}
