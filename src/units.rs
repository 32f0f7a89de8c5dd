//! Unit conversion between TeX dimensions and CSS ems.

use crate::context::MathTexContext;
use crate::options::Options;
use crate::spacing_data::Measurement;
use crate::types::{ParseError, ParseErrorKind};

/// TeX points per unit, for the absolute units.
fn pt_per_unit<T: AsRef<str>>(unit: &T) -> Option<f64> {
    match unit.as_ref() {
        "pt" => Some(1.0),
        "mm" => Some(7227.0 / 2540.0),
        "cm" => Some(7227.0 / 254.0),
        "in" => Some(72.27),
        // big (PostScript) points; \pdfpxdimen defaults to 1bp
        "bp" | "px" => Some(803.0 / 800.0),
        "pc" => Some(12.0),
        "dd" => Some(1238.0 / 1157.0),
        "cc" => Some(14856.0 / 1157.0),
        "nd" => Some(685.0 / 642.0),
        "nc" => Some(1370.0 / 107.0),
        "sp" => Some(1.0 / 65536.0),
        _ => None,
    }
}

/// Whether a unit string is understood.
pub fn valid_unit_str<T: AsRef<str>>(unit: T) -> bool {
    pt_per_unit(&unit).is_some() || matches!(unit.as_ref(), "ex" | "em" | "mu")
}

/// Whether a measurement carries a valid unit.
pub fn valid_unit<T: AsRef<str>>(measurement: &Measurement<T>) -> bool {
    valid_unit_str(&measurement.unit)
}

impl MathTexContext {
    /// Convert a measurement into CSS ems under the given options.
    ///
    /// Absolute units unscale by the current size multiplier; `mu` follows
    /// the script-size quad; `ex`/`em` refer to the textstyle font of the
    /// current size. The result is clamped to `options.max_size`.
    pub fn calculate_size<T: AsRef<str>>(
        &self,
        size: &Measurement<T>,
        options: &Options,
    ) -> Result<f64, ParseError> {
        let scale = if let Some(pt) = pt_per_unit(&size.unit) {
            let metrics = options.font_metrics();
            pt / metrics.pt_per_em / options.size_multiplier
        } else if size.unit.as_ref() == "mu" {
            options.font_metrics().css_em_per_mu
        } else {
            let unit_options = if options.style.is_tight() {
                options.having_style(options.style.text())
            } else {
                options.clone()
            };
            let metrics = unit_options.font_metrics();
            let mut scale = match size.unit.as_ref() {
                "ex" => metrics.x_height,
                "em" => metrics.quad,
                other => {
                    return Err(ParseError::new(ParseErrorKind::InvalidUnit {
                        unit: other.to_owned(),
                    }));
                }
            };
            if unit_options.size != options.size {
                scale *= unit_options.size_multiplier / options.size_multiplier;
            }
            scale
        };

        Ok(f64::min(size.number * scale, options.max_size))
    }
}

/// Format a length as an em string, rounded to 4 decimals with trailing
/// zeros dropped.
#[must_use]
pub fn make_em(n: f64) -> String {
    let mut s = format!("{n:.4}");
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        "0".clone_into(&mut s);
    }
    s.push_str("em");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MathTexContext;
    use crate::spacing_data::MeasurementOwned;
    use crate::style;

    fn options() -> Options {
        Options::builder()
            .style(style::TEXT)
            .max_size(1_000_000.0)
            .min_rule_thickness(0.04)
            .build()
    }

    #[test]
    fn unit_validity() {
        for unit in ["pt", "mm", "cm", "in", "px", "pc", "em", "ex", "mu", "sp"] {
            assert!(valid_unit_str(unit), "{unit} should be valid");
        }
        assert!(!valid_unit_str("furlong"));
    }

    #[test]
    fn em_formatting() {
        assert_eq!(make_em(1.0), "1em");
        assert_eq!(make_em(1.23456), "1.2346em");
        assert_eq!(make_em(0.00004), "0em");
        assert_eq!(make_em(-0.00001), "0em");
    }

    #[test]
    fn absolute_units() {
        let ctx = MathTexContext::default();
        let m = MeasurementOwned {
            number: 10.0,
            unit: "pt".to_owned(),
        };
        let ems = ctx.calculate_size(&m, &options()).unwrap();
        assert!((ems - 1.0).abs() < 1e-9);
    }

    #[test]
    fn relative_units() {
        let ctx = MathTexContext::default();
        let em = MeasurementOwned {
            number: 2.0,
            unit: "em".to_owned(),
        };
        assert!((ctx.calculate_size(&em, &options()).unwrap() - 2.0).abs() < 1e-9);

        let ex = MeasurementOwned {
            number: 1.0,
            unit: "ex".to_owned(),
        };
        assert!((ctx.calculate_size(&ex, &options()).unwrap() - 0.431).abs() < 1e-9);
    }

    #[test]
    fn max_size_clamps() {
        let ctx = MathTexContext::default();
        let mut opts = options();
        opts.max_size = 1.5;
        let m = MeasurementOwned {
            number: 10.0,
            unit: "em".to_owned(),
        };
        assert!((ctx.calculate_size(&m, &opts).unwrap() - 1.5).abs() < 1e-9);
    }
}
