//! Stretchy wide elements: extensible arrows, horizontal braces, and wide
//! accents, rendered as SVG sized to a computed target extent.

use crate::build_common::{make_span, make_svg_span};
use crate::dom_tree::{DomSpan, HtmlDomNode, PathNode, SvgChildNode, SvgNode};
use crate::mathml_tree::{MathNode, MathNodeType, TextNode};
use crate::namespace::KeyMap;
use crate::options::Options;
use crate::parser::parse_node::AnyParseNode;
use crate::types::{CssProperty, ParseError, ParseErrorKind};
use crate::units::make_em;
use phf::{phf_map, phf_set};

/// Stretchy command → codepoint drawn in the MathML rendering.
pub const STRETCHY_CODE_POINT: phf::Map<&'static str, &'static str> = phf_map! {
    "widehat" => "^",
    "widecheck" => "\u{2c7}",
    "widetilde" => "~",
    "utilde" => "~",
    "overleftarrow" => "\u{2190}",
    "underleftarrow" => "\u{2190}",
    "xleftarrow" => "\u{2190}",
    "overrightarrow" => "\u{2192}",
    "underrightarrow" => "\u{2192}",
    "xrightarrow" => "\u{2192}",
    "underbrace" => "\u{23df}",
    "overbrace" => "\u{23de}",
    "overgroup" => "\u{23e0}",
    "undergroup" => "\u{23e1}",
    "overleftrightarrow" => "\u{2194}",
    "underleftrightarrow" => "\u{2194}",
    "xleftrightarrow" => "\u{2194}",
    "Overrightarrow" => "\u{21d2}",
    "xRightarrow" => "\u{21d2}",
    "overleftharpoon" => "\u{21bc}",
    "xleftharpoonup" => "\u{21bc}",
    "overrightharpoon" => "\u{21c0}",
    "xrightharpoonup" => "\u{21c0}",
    "xLeftarrow" => "\u{21d0}",
    "xLeftrightarrow" => "\u{21d4}",
    "xhookleftarrow" => "\u{21a9}",
    "xhookrightarrow" => "\u{21aa}",
    "xmapsto" => "\u{21a6}",
    "xrightharpoondown" => "\u{21c1}",
    "xleftharpoondown" => "\u{21bd}",
    "xrightleftharpoons" => "\u{21cc}",
    "xleftrightharpoons" => "\u{21cb}",
    "xtwoheadleftarrow" => "\u{219e}",
    "xtwoheadrightarrow" => "\u{21a0}",
    "xlongequal" => "=",
    "xtofrom" => "\u{21c4}",
};

/// Geometry of one stretchy image: path names, minimum width, viewBox height
/// (thousandths of an em), and alignment.
#[derive(Debug, Clone)]
pub struct ImageData {
    /// SVG path names; one, two, or three pieces.
    pub paths: &'static [&'static str],
    /// Minimum width, in ems.
    pub min_width: f64,
    /// Height in SVG units.
    pub height: f64,
    /// preserveAspectRatio alignment for one-piece images.
    pub align: Option<&'static str>,
}

impl ImageData {
    const fn new(
        paths: &'static [&'static str],
        min_width: f64,
        height: f64,
        align: Option<&'static str>,
    ) -> Self {
        Self {
            paths,
            min_width,
            height,
            align,
        }
    }
}

const IMAGES_DATA: phf::Map<&'static str, ImageData> = phf_map! {
    "overrightarrow" => ImageData::new(&["rightarrow"], 0.888, 522.0, Some("xMaxYMin")),
    "overleftarrow" => ImageData::new(&["leftarrow"], 0.888, 522.0, Some("xMinYMin")),
    "underrightarrow" => ImageData::new(&["rightarrow"], 0.888, 522.0, Some("xMaxYMin")),
    "underleftarrow" => ImageData::new(&["leftarrow"], 0.888, 522.0, Some("xMinYMin")),
    "xrightarrow" => ImageData::new(&["rightarrow"], 1.469, 522.0, Some("xMaxYMin")),
    "xleftarrow" => ImageData::new(&["leftarrow"], 1.469, 522.0, Some("xMinYMin")),
    "Overrightarrow" => ImageData::new(&["doublerightarrow"], 0.888, 560.0, Some("xMaxYMin")),
    "xRightarrow" => ImageData::new(&["doublerightarrow"], 1.526, 560.0, Some("xMaxYMin")),
    "xLeftarrow" => ImageData::new(&["doubleleftarrow"], 1.526, 560.0, Some("xMinYMin")),
    "overleftharpoon" => ImageData::new(&["leftharpoon"], 0.888, 522.0, Some("xMinYMin")),
    "xleftharpoonup" => ImageData::new(&["leftharpoon"], 0.888, 522.0, Some("xMinYMin")),
    "xleftharpoondown" => ImageData::new(&["leftharpoondown"], 0.888, 522.0, Some("xMinYMin")),
    "overrightharpoon" => ImageData::new(&["rightharpoon"], 0.888, 522.0, Some("xMaxYMin")),
    "xrightharpoonup" => ImageData::new(&["rightharpoon"], 0.888, 522.0, Some("xMaxYMin")),
    "xrightharpoondown" => ImageData::new(&["rightharpoondown"], 0.888, 522.0, Some("xMaxYMin")),
    "xlongequal" => ImageData::new(&["longequal"], 0.888, 334.0, Some("xMinYMin")),
    "xtwoheadleftarrow" => ImageData::new(&["twoheadleftarrow"], 0.888, 334.0, Some("xMinYMin")),
    "xtwoheadrightarrow" => ImageData::new(&["twoheadrightarrow"], 0.888, 334.0, Some("xMaxYMin")),
    "overleftrightarrow" => ImageData::new(&["leftarrow", "rightarrow"], 0.888, 522.0, None),
    "overbrace" => ImageData::new(&["leftbrace", "midbrace", "rightbrace"], 1.6, 548.0, None),
    "underbrace" => ImageData::new(&["leftbraceunder", "midbraceunder", "rightbraceunder"], 1.6, 548.0, None),
    "underleftrightarrow" => ImageData::new(&["leftarrow", "rightarrow"], 0.888, 522.0, None),
    "xleftrightarrow" => ImageData::new(&["leftarrow", "rightarrow"], 1.75, 522.0, None),
    "xLeftrightarrow" => ImageData::new(&["doubleleftarrow", "doublerightarrow"], 1.75, 560.0, None),
    "xrightleftharpoons" => ImageData::new(&["baraboveleftarrow", "rightharpoonaboveshortbar"], 1.75, 716.0, None),
    "xleftrightharpoons" => ImageData::new(&["baraboveshortleftharpoon", "rightharpoonaboveshortbar"], 1.75, 716.0, None),
    "xhookleftarrow" => ImageData::new(&["leftarrow", "righthook"], 1.08, 522.0, None),
    "xhookrightarrow" => ImageData::new(&["lefthook", "rightarrow"], 1.08, 522.0, None),
    "overgroup" => ImageData::new(&["leftgroup", "rightgroup"], 0.888, 342.0, None),
    "undergroup" => ImageData::new(&["leftgroupunder", "rightgroupunder"], 0.888, 342.0, None),
    "xmapsto" => ImageData::new(&["leftmapsto", "rightarrow"], 1.5, 522.0, None),
    "xtofrom" => ImageData::new(&["leftToFrom", "rightToFrom"], 1.75, 528.0, None),
};

const fn group_length(arg: &AnyParseNode) -> usize {
    match arg {
        AnyParseNode::OrdGroup(group) => group.body.len(),
        _ => 1,
    }
}

const ACCENT_STRETCHY: phf::Set<&'static str> = phf_set! {
    "widehat", "widecheck", "widetilde", "utilde"
};

const ACCENT_STRETCHY_OVER: phf::Set<&'static str> = phf_set! {
    "widehat", "widecheck"
};

/// Image geometry for a wide accent: (viewBox width, viewBox height, em
/// height, path name). Wide accents pick an image by how many characters
/// they cover.
fn accent_image(label: &str, num_chars: usize) -> (f64, f64, f64, String) {
    let over = ACCENT_STRETCHY_OVER.contains(label);
    if num_chars > 5 {
        return if over {
            (2364.0, 420.0, 0.42, format!("{label}4"))
        } else {
            (2340.0, 312.0, 0.34, "tilde4".to_owned())
        };
    }

    let img_index = [1, 1, 2, 2, 3, 3][num_chars];
    if over {
        let widths = [0.0, 1062.0, 2364.0, 2364.0, 2364.0];
        let heights = [0.0, 239.0, 300.0, 360.0, 420.0];
        let ems = [0.0, 0.24, 0.3, 0.3, 0.36, 0.42];
        (
            widths[img_index],
            heights[img_index],
            ems[img_index],
            format!("{label}{img_index}"),
        )
    } else {
        let widths = [0.0, 600.0, 1033.0, 2339.0, 2340.0];
        let heights = [0.0, 260.0, 286.0, 306.0, 312.0];
        let ems = [0.0, 0.26, 0.286, 0.3, 0.306, 0.34];
        (
            widths[img_index],
            heights[img_index],
            ems[img_index],
            format!("tilde{img_index}"),
        )
    }
}

/// One `<svg>` wrapping a single named path, with the given attributes.
fn one_path_svg(path_name: &str, attributes: [(String, String); 4]) -> SvgNode {
    let path = PathNode {
        path_name: path_name.to_owned(),
        alternate: None,
    };
    let mut svg = SvgNode::builder()
        .children(vec![SvgChildNode::Path(path)])
        .build();
    svg.attributes.extend(attributes);
    svg
}

/// Per-piece wrapper classes and alignments for 1/2/3-piece images.
fn piece_layout(count: usize) -> Option<(&'static [&'static str], &'static [&'static str])> {
    match count {
        1 => Some((&["hide-tail"], &["xMinYMin"])),
        2 => Some((
            &["halfarrow-left", "halfarrow-right"],
            &["xMinYMin", "xMaxYMin"],
        )),
        3 => Some((
            &["brace-left", "brace-center", "brace-right"],
            &["xMinYMin", "xMidYMin", "xMaxYMin"],
        )),
        _ => None,
    }
}

fn wide_accent_span(
    label: &str,
    group: &AnyParseNode,
    options: &Options,
) -> Result<HtmlDomNode, ParseError> {
    let base = match group {
        AnyParseNode::Accent(acc) => &acc.base,
        AnyParseNode::AccentUnder(acc) => &acc.base,
        _ => return Err(ParseError::new("Invalid group type for stretchy accent")),
    };
    let (view_box_width, view_box_height, height_em, path_name) =
        accent_image(label, group_length(base));

    let svg = one_path_svg(
        &path_name,
        [
            ("width".to_owned(), "100%".to_owned()),
            ("height".to_owned(), make_em(height_em)),
            (
                "viewBox".to_owned(),
                format!("0 0 {view_box_width} {view_box_height}"),
            ),
            ("preserveAspectRatio".to_owned(), "none".to_owned()),
        ],
    );
    let mut span = make_svg_span(vec![], vec![svg], options);
    span.height = height_em;
    span.style.insert(CssProperty::Height, make_em(height_em));
    span.style.insert(CssProperty::MinWidth, "0");
    Ok(span.into())
}

fn image_span(label: &str, options: &Options) -> Result<HtmlDomNode, ParseError> {
    let unknown = || {
        ParseError::new(ParseErrorKind::UnknownStretchyElement {
            label: label.to_owned(),
        })
    };
    let data = IMAGES_DATA.get(label).ok_or_else(unknown)?;
    let (classes, default_aligns) = piece_layout(data.paths.len()).ok_or_else(unknown)?;
    // Single-piece images carry their own alignment in the table.
    let aligns: Vec<&str> = if data.paths.len() == 1 {
        vec![data.align.unwrap_or("xMinYMin")]
    } else {
        default_aligns.to_vec()
    };
    let height_em = data.height / 1000.0;

    // Each piece clips its own slice of a 400em-wide canvas.
    let mut pieces: Vec<HtmlDomNode> = Vec::with_capacity(data.paths.len());
    for ((path_name, class), align) in data.paths.iter().zip(classes).zip(aligns) {
        let svg = one_path_svg(
            path_name,
            [
                ("width".to_owned(), "400em".to_owned()),
                ("height".to_owned(), make_em(height_em)),
                ("viewBox".to_owned(), format!("0 0 400000 {}", data.height)),
                ("preserveAspectRatio".to_owned(), format!("{align} slice")),
            ],
        );
        let mut piece = make_svg_span(vec![(*class).to_owned()], vec![svg], options);
        piece.style.insert(CssProperty::Height, make_em(height_em));
        pieces.push(piece.into());
    }

    let mut span = if pieces.len() == 1 {
        match pieces.pop() {
            Some(HtmlDomNode::DomSpan(span)) => span,
            _ => return Err(ParseError::new("Internal error: stretchy span missing")),
        }
    } else {
        make_span(vec!["stretchy".to_owned()], pieces, Some(options), None)
    };
    span.height = height_em;
    span.style.insert(CssProperty::Height, make_em(height_em));
    span.style
        .insert(CssProperty::MinWidth, make_em(data.min_width));
    Ok(span.into())
}

/// Build the stretchy SVG span for an accent/brace/arrow node.
pub fn svg_span(group: &AnyParseNode, options: &Options) -> Result<HtmlDomNode, ParseError> {
    let Some(label) = group.label() else {
        return Err(ParseError::new("Unsupported group type for svg_span"));
    };
    let Some(label) = label.strip_prefix('\\') else {
        return Err(ParseError::new("Stretchy label must start with a backslash"));
    };

    if ACCENT_STRETCHY.contains(label) {
        wide_accent_span(label, group, options)
    } else {
        image_span(label, options)
    }
}

/// The `<mo stretchy="true">` MathML rendering of a stretchy command.
pub fn math_ml_node(label: &str) -> MathNode {
    let code_point = label
        .strip_prefix('\\')
        .and_then(|l| STRETCHY_CODE_POINT.get(l).copied())
        .unwrap_or_default();
    let mut node = MathNode::with_children(
        MathNodeType::Mo,
        vec![
            TextNode {
                text: code_point.to_owned(),
            }
            .into(),
        ],
    );
    node.set_attribute("stretchy", "true");
    node
}
