//! Inter-atom glue tables (TeXbook chapter 18).
//!
//! Two 2-D tables map (left atom class, right atom class) to the glue
//! inserted between them: [`SPACINGS`] for display/text styles and
//! [`TIGHT_SPACINGS`] for script/scriptscript.

use phf::{Map, phf_map};

/// A dimension: number plus TeX unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<T: AsRef<str>> {
    /// Numeric value.
    pub number: f64,
    /// Unit (`"mu"`, `"em"`, `"ex"`, `"pt"`, …).
    pub unit: T,
}

/// Measurement with a runtime unit string.
pub type MeasurementOwned = Measurement<String>;
/// Measurement with a static unit, for the constant tables.
pub type MeasurementStatic = Measurement<&'static str>;

/// `\,` — 3mu.
pub const THINSPACE: MeasurementStatic = MeasurementStatic {
    number: 3.0,
    unit: "mu",
};

/// `\:` — 4mu.
pub const MEDIUMSPACE: MeasurementStatic = MeasurementStatic {
    number: 4.0,
    unit: "mu",
};

/// `\;` — 5mu.
pub const THICKSPACE: MeasurementStatic = MeasurementStatic {
    number: 5.0,
    unit: "mu",
};

/// Left class → right class → glue.
pub type Spacings = Map<&'static str, Map<&'static str, MeasurementStatic>>;

/// Glue in display and text styles.
pub const SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mop" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mbin" => phf_map! {
        "mord" => MEDIUMSPACE,
        "mop" => MEDIUMSPACE,
        "mopen" => MEDIUMSPACE,
        "minner" => MEDIUMSPACE,
    },
    "mrel" => phf_map! {
        "mord" => THICKSPACE,
        "mop" => THICKSPACE,
        "mopen" => THICKSPACE,
        "minner" => THICKSPACE,
    },
    "mopen" => phf_map! {},
    "mclose" => phf_map! {
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "minner" => THINSPACE,
    },
    "mpunct" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mrel" => THICKSPACE,
        "mopen" => THINSPACE,
        "mclose" => THINSPACE,
        "mpunct" => THINSPACE,
        "minner" => THINSPACE,
    },
    "minner" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
        "mbin" => MEDIUMSPACE,
        "mrel" => THICKSPACE,
        "mopen" => THINSPACE,
        "mpunct" => THINSPACE,
        "minner" => THINSPACE,
    },
};

/// Glue in script and scriptscript styles. Binary and relation glue vanishes;
/// only operator adjacency keeps a thin space.
pub const TIGHT_SPACINGS: Spacings = phf_map! {
    "mord" => phf_map! {
        "mop" => THINSPACE,
    },
    "mop" => phf_map! {
        "mord" => THINSPACE,
        "mop" => THINSPACE,
    },
    "mbin" => phf_map! {},
    "mrel" => phf_map! {},
    "mopen" => phf_map! {},
    "mclose" => phf_map! {
        "mop" => THINSPACE,
    },
    "mpunct" => phf_map! {},
    "minner" => phf_map! {
        "mop" => THINSPACE,
    },
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_all_classes() {
        for class in [
            "mord", "mop", "mbin", "mrel", "mopen", "mclose", "mpunct", "minner",
        ] {
            assert!(SPACINGS.contains_key(class), "missing class {class}");
            assert!(TIGHT_SPACINGS.contains_key(class), "missing class {class}");
        }
    }

    #[test]
    fn binary_glue_is_medium() {
        let mord = SPACINGS.get("mord").unwrap();
        assert_eq!(mord.get("mbin"), Some(&MEDIUMSPACE));
        let mbin = SPACINGS.get("mbin").unwrap();
        assert_eq!(mbin.get("mord"), Some(&MEDIUMSPACE));
    }

    #[test]
    fn tight_drops_binary_glue() {
        assert!(TIGHT_SPACINGS.get("mbin").unwrap().is_empty());
        assert!(TIGHT_SPACINGS.get("mrel").unwrap().is_empty());
    }
}
