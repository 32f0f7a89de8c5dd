//! Shared box-construction primitives: spans, symbols, vertical lists.

use crate::context::MathTexContext;
use crate::dom_tree::{
    Anchor, DomSpan, HtmlDomFragment, HtmlDomNode, PathNode, Span, SvgChildNode, SvgNode,
    SymbolNode, create_class,
};
use crate::font_metrics::get_character_metrics;
use crate::font_metrics_data::CharacterMetrics;
use crate::namespace::KeyMap;
use crate::options::{FontShape, FontWeight, Options};
use crate::parser::parse_node::AnyParseNode;
use crate::spacing_data::Measurement;
use crate::symbols::{Font, Mode, is_ligature};
use crate::tree::DocumentFragment;
use crate::types::{CssProperty, CssStyle, ParseError};
use crate::units::make_em;
use bon::bon;
use phf::phf_map;

/// Font command → (MathML variant, metric font name).
pub const FONT_MAP: phf::Map<&str, FontMapEntry> = phf_map! {
    "mathbf" => FontMapEntry { variant: "bold", font_name: "Main-Bold" },
    "mathrm" => FontMapEntry { variant: "normal", font_name: "Main-Regular" },
    "textit" => FontMapEntry { variant: "italic", font_name: "Main-Italic" },
    "mathit" => FontMapEntry { variant: "italic", font_name: "Main-Italic" },
    "mathnormal" => FontMapEntry { variant: "italic", font_name: "Math-Italic" },
    "mathbb" => FontMapEntry { variant: "double-struck", font_name: "AMS-Regular" },
    "mathcal" => FontMapEntry { variant: "script", font_name: "Caligraphic-Regular" },
    "mathscr" => FontMapEntry { variant: "script", font_name: "Script-Regular" },
    "mathfrak" => FontMapEntry { variant: "fraktur", font_name: "Fraktur-Regular" },
    "mathsf" => FontMapEntry { variant: "sans-serif", font_name: "SansSerif-Regular" },
    "mathtt" => FontMapEntry { variant: "monospace", font_name: "Typewriter-Regular" },
    "boldsymbol" => FontMapEntry { variant: "bold-italic", font_name: "Math-BoldItalic" },
};

/// One [`FONT_MAP`] entry.
#[derive(Debug, Clone)]
pub struct FontMapEntry {
    /// MathML `mathvariant` value.
    pub variant: &'static str,
    /// Metric table name.
    pub font_name: &'static str,
}

/// Result of a symbol lookup: the replacement codepoint and its metrics.
#[derive(Debug, Clone)]
pub struct SymbolLookup {
    /// Replacement codepoint.
    pub value: char,
    /// Glyph metrics, when the font has the glyph.
    pub metrics: Option<CharacterMetrics>,
}

/// Element child of a vertical list.
#[derive(Debug, bon::Builder)]
pub struct VListElem {
    /// The boxed element.
    pub elem: HtmlDomNode,
    /// Baseline shift for individually shifted lists.
    pub shift: Option<f64>,
    /// margin-left applied to the wrapper.
    pub margin_left: Option<String>,
    /// margin-right applied to the wrapper.
    pub margin_right: Option<String>,
    /// Extra classes on the wrapper.
    pub wrapper_classes: Option<Vec<String>>,
    /// Extra style on the wrapper.
    pub wrapper_style: Option<CssStyle>,
}

/// Kern child of a vertical list.
#[derive(Debug, Clone)]
pub struct VListKern {
    /// Kern size in ems.
    pub size: f64,
}

/// Child of a vertical list.
#[derive(Debug)]
pub enum VListChild {
    /// An element.
    Elem(Box<VListElem>),
    /// A kern.
    Kern(VListKern),
}

impl From<VListElem> for VListChild {
    fn from(elem: VListElem) -> Self {
        Self::Elem(Box::new(elem))
    }
}

/// Element with a mandatory shift, for individually shifted lists.
#[derive(Debug)]
pub struct VListElemAndShift {
    /// The boxed element.
    pub elem: HtmlDomNode,
    /// Baseline shift.
    pub shift: f64,
    /// margin-left applied to the wrapper.
    pub margin_left: Option<String>,
    /// margin-right applied to the wrapper.
    pub margin_right: Option<String>,
    /// Extra classes on the wrapper.
    pub wrapper_classes: Option<Vec<String>>,
    /// Extra style on the wrapper.
    pub wrapper_style: Option<CssStyle>,
}

#[bon]
impl VListElemAndShift {
    /// Build an element-with-shift.
    #[builder]
    pub const fn new(
        elem: HtmlDomNode,
        shift: f64,
        margin_left: Option<String>,
        margin_right: Option<String>,
        wrapper_classes: Option<Vec<String>>,
        wrapper_style: Option<CssStyle>,
    ) -> Self {
        Self {
            elem,
            shift,
            margin_left,
            margin_right,
            wrapper_classes,
            wrapper_style,
        }
    }
}

/// Positioning mode for [`make_v_list`].
#[derive(Debug)]
pub enum VListParam {
    /// Each child carries its own baseline shift.
    IndividualShift {
        /// Children with shifts.
        children: Vec<VListElemAndShift>,
    },
    /// `position_data` is the topmost point.
    Top {
        /// Topmost point.
        position_data: f64,
        /// Children bottom-up.
        children: Vec<VListChild>,
    },
    /// `position_data` is the depth below the baseline.
    Bottom {
        /// Depth below baseline.
        position_data: f64,
        /// Children bottom-up.
        children: Vec<VListChild>,
    },
    /// First child's baseline shifted by `position_data`.
    Shift {
        /// Shift of the first child.
        position_data: f64,
        /// Children bottom-up.
        children: Vec<VListChild>,
    },
    /// First child sits on the baseline.
    FirstBaseline {
        /// Children bottom-up.
        children: Vec<VListChild>,
    },
}

struct VListChildrenAndDepth {
    children: Vec<VListChild>,
    depth: f64,
}

/// Extrema of a child list: (height, depth, max font size).
fn measure(children: &[HtmlDomNode]) -> (f64, f64, f64) {
    children.iter().fold((0.0f64, 0.0f64, 0.0f64), |(h, d, m), child| {
        (
            h.max(child.height()),
            d.max(child.depth()),
            m.max(child.max_font_size()),
        )
    })
}

fn size_span_from_children(node: &mut DomSpan) {
    (node.height, node.depth, node.max_font_size) = measure(&node.children);
}

/// Make a span sized from its children.
#[must_use]
pub fn make_span(
    classes: Vec<String>,
    children: Vec<HtmlDomNode>,
    options: Option<&Options>,
    style: Option<CssStyle>,
) -> DomSpan {
    let mut node = Span::builder()
        .children(children)
        .classes(classes)
        .maybe_style(style)
        .build(options);
    size_span_from_children(&mut node);
    node
}

fn get_v_list_children_and_depth(params: VListParam) -> VListChildrenAndDepth {
    match params {
        VListParam::IndividualShift { children: old } => {
            let mut children: Vec<VListChild> = Vec::with_capacity(2 * old.len());
            let depth = -old[0].shift - old[0].elem.depth();
            let mut curr_pos = depth;

            let mut iter = old.into_iter();
            let first = iter.next().map(|child| VListElem {
                elem: child.elem,
                shift: Some(child.shift),
                margin_left: child.margin_left,
                margin_right: child.margin_right,
                wrapper_classes: child.wrapper_classes,
                wrapper_style: child.wrapper_style,
            });
            let mut prev_extent = first
                .as_ref()
                .map_or(0.0, |e| e.elem.height() + e.elem.depth());
            if let Some(first) = first {
                children.push(first.into());
            }

            // Interleave kerns so each element lands on its requested shift.
            for child in iter {
                let diff = -child.shift - curr_pos - child.elem.depth();
                let size = diff - prev_extent;
                curr_pos += diff;
                prev_extent = child.elem.height() + child.elem.depth();
                children.push(VListChild::Kern(VListKern { size }));
                children.push(
                    VListElem {
                        elem: child.elem,
                        shift: Some(child.shift),
                        margin_left: child.margin_left,
                        margin_right: child.margin_right,
                        wrapper_classes: child.wrapper_classes,
                        wrapper_style: child.wrapper_style,
                    }
                    .into(),
                );
            }

            VListChildrenAndDepth { children, depth }
        }
        VListParam::Top {
            position_data,
            children,
        } => {
            // Walk down from the top to find where the stack bottoms out.
            let depth = children.iter().fold(position_data, |pos, child| {
                pos - match child {
                    VListChild::Kern(kern) => kern.size,
                    VListChild::Elem(elem) => elem.elem.height() + elem.elem.depth(),
                }
            });
            VListChildrenAndDepth { children, depth }
        }
        VListParam::Bottom {
            position_data,
            children,
        } => VListChildrenAndDepth {
            children,
            depth: -position_data,
        },
        VListParam::Shift {
            position_data,
            children,
        } => {
            let depth = -(position_data + leading_elem_depth(&children).unwrap_or(0.0));
            VListChildrenAndDepth { children, depth }
        }
        VListParam::FirstBaseline { children } => VListChildrenAndDepth {
            depth: -leading_elem_depth(&children).unwrap_or(0.0),
            children,
        },
    }
}

/// Depth of the first element child, skipping leading kerns.
fn leading_elem_depth(children: &[VListChild]) -> Option<f64> {
    children.iter().find_map(|child| match child {
        VListChild::Elem(elem) => Some(elem.elem.depth()),
        VListChild::Kern(_) => None,
    })
}

/// The phantom strut pinning each vlist cell's baseline. Must be taller than
/// every element in the list; returns the strut plus its chosen height.
fn make_pstrut(children: &[VListChild]) -> (DomSpan, f64) {
    let tallest = children.iter().fold(0.0f64, |acc, child| match child {
        VListChild::Elem(e) => acc.max(e.elem.height()).max(e.elem.max_font_size()),
        VListChild::Kern(_) => acc,
    });
    let size = tallest + 2.0;
    let mut pstrut = make_span(vec!["pstrut".to_owned()], vec![], None, None);
    pstrut.style.insert(CssProperty::Height, make_em(size));
    (pstrut, size)
}

/// One positioned cell plus the running extent bookkeeping.
struct VListLayout {
    cells: Vec<HtmlDomNode>,
    top: f64,
    bottom: f64,
}

/// Wrap each element with the pstrut and a `top` offset placing it at its
/// computed position, tracking the stack's extrema along the way.
fn position_children(children: Vec<VListChild>, depth: f64) -> VListLayout {
    let (pstrut, pstrut_size) = make_pstrut(&children);
    let mut layout = VListLayout {
        cells: Vec::with_capacity(children.len()),
        top: depth,
        bottom: depth,
    };
    let mut pos = depth;

    for child in children {
        match child {
            VListChild::Kern(kern) => pos += kern.size,
            VListChild::Elem(boxed) => {
                let extent = boxed.elem.height() + boxed.elem.depth();
                let offset = -pstrut_size - pos - boxed.elem.depth();

                let mut cell = make_span(
                    boxed.wrapper_classes.unwrap_or_default(),
                    vec![pstrut.clone().into(), boxed.elem],
                    None,
                    Some(boxed.wrapper_style.unwrap_or_default()),
                );
                cell.style.insert(CssProperty::Top, make_em(offset));
                if let Some(margin) = boxed.margin_left {
                    cell.style.insert(CssProperty::MarginLeft, margin);
                }
                if let Some(margin) = boxed.margin_right {
                    cell.style.insert(CssProperty::MarginRight, margin);
                }

                layout.cells.push(cell.into());
                pos += extent;
            }
        }
        layout.top = layout.top.max(pos);
        layout.bottom = layout.bottom.min(pos);
    }

    layout
}

/// A zero-width space that keeps WebKit from collapsing the baseline row.
fn baseline_anchor() -> HtmlDomNode {
    let anchor = SymbolNode::builder().text("\u{200b}").build();
    make_span(vec!["vlist-s".to_owned()], vec![anchor.into()], None, None).into()
}

/// The second table row that carries the part hanging below the baseline.
fn depth_row(extent: f64) -> HtmlDomNode {
    let filler = make_span(vec![], vec![], None, None);
    let mut strut = make_span(vec!["vlist".to_owned()], vec![filler.into()], None, None);
    strut.style.insert(CssProperty::Height, make_em(extent));
    make_span(vec!["vlist-r".to_owned()], vec![strut.into()], None, None).into()
}

/// Stack boxes vertically with per-child baseline shifts.
///
/// Each child is wrapped with an invisible "pstrut" taller than anything in
/// the list, so the browser's line box cannot disturb the positioning; the
/// container's height/depth are the extrema of the positioned children.
pub fn make_v_list(params: VListParam, _options: &Options) -> Result<DomSpan, ParseError> {
    let VListChildrenAndDepth { children, depth } = get_v_list_children_and_depth(params);
    let layout = position_children(children, depth);
    let hangs_below = layout.bottom < 0.0;

    let mut vlist = make_span(vec!["vlist".to_owned()], layout.cells, None, None);
    vlist.style.insert(CssProperty::Height, make_em(layout.top));

    let mut table_classes = vec!["vlist-t".to_owned()];
    let mut rows: Vec<HtmlDomNode> = Vec::with_capacity(2);
    if hangs_below {
        table_classes.push("vlist-t2".to_owned());
        let first_row = make_span(
            vec!["vlist-r".to_owned()],
            vec![vlist.into(), baseline_anchor()],
            None,
            None,
        );
        rows.push(first_row.into());
        rows.push(depth_row(-layout.bottom));
    } else {
        rows.push(make_span(vec!["vlist-r".to_owned()], vec![vlist.into()], None, None).into());
    }

    let mut table = make_span(table_classes, rows, None, None);
    table.height = layout.top;
    table.depth = -layout.bottom;
    Ok(table)
}

/// Look up a symbol's replacement codepoint and metrics.
pub fn lookup_symbol(
    ctx: &MathTexContext,
    value: &str,
    font_name: &str,
    mode: Mode,
) -> Result<Option<SymbolLookup>, ParseError> {
    let query = if let Some(info) = ctx.symbols.get(mode, value)
        && let Some(replaced) = info.replace
    {
        replaced
    } else {
        let Some(first) = value.chars().next() else {
            return Ok(None);
        };
        first
    };
    let metrics = get_character_metrics(ctx, query, font_name, mode)?.copied();
    Ok(Some(SymbolLookup { value: query, metrics }))
}

/// Make a symbol node in the given font, with metric-based extents.
pub fn make_symbol(
    ctx: &MathTexContext,
    value: &str,
    font_name: &str,
    mode: Mode,
    options: Option<&Options>,
    classes: Option<&[String]>,
) -> Result<SymbolNode, ParseError> {
    let lookup = lookup_symbol(ctx, value, font_name, mode)?;
    let text = lookup
        .as_ref()
        .map_or_else(|| value.to_owned(), |l| l.value.to_string());
    let metrics = lookup.and_then(|l| l.metrics);

    let mut classes_vec = classes.unwrap_or(&[]).to_vec();
    let mut style = CssStyle::default();
    if let Some(options) = options {
        crate::dom_tree::inherit_from_options(&mut classes_vec, &mut style, options);
    }

    let mut symbol = SymbolNode::builder()
        .text(&text)
        .classes(classes_vec)
        .style(style)
        .build();
    if let Some(m) = metrics {
        symbol.height = m.height;
        symbol.depth = m.depth;
        symbol.skew = m.skew;
        symbol.width = m.width;
        // No italic correction in text mode or under \mathit.
        if mode != Mode::Text && !options.is_some_and(|o| o.font == "mathit") {
            symbol.italic = m.italic;
        }
    }
    if let Some(options) = options {
        symbol.max_font_size = options.size_multiplier;
    }
    Ok(symbol)
}

/// Make a symbol in Main-Regular or AMS-Regular, for operator glyphs.
pub fn mathsym(
    ctx: &MathTexContext,
    value: &str,
    mode: Mode,
    options: &Options,
    classes: Option<&[String]>,
) -> Result<SymbolNode, ParseError> {
    let with_extra = |extra: &str| {
        let mut combined = classes.unwrap_or(&[]).to_vec();
        combined.push(extra.to_owned());
        combined
    };

    if options.font == "boldsymbol"
        && lookup_symbol(ctx, value, "Main-Bold", mode)?.is_some_and(|l| l.metrics.is_some())
    {
        let combined = with_extra("mathbf");
        return make_symbol(ctx, value, "Main-Bold", mode, Some(options), Some(&combined));
    }

    let in_main_font = value == "\\"
        || matches!(ctx.symbols.get(mode, value), Some(info) if matches!(info.font, Font::Main));
    if in_main_font {
        make_symbol(ctx, value, "Main-Regular", mode, Some(options), classes)
    } else {
        let combined = with_extra("amsrm");
        make_symbol(ctx, value, "AMS-Regular", mode, Some(options), Some(&combined))
    }
}

/// Metric font name for a text font family/weight/shape combination.
#[must_use]
pub fn retrieve_text_font_name(
    font_family: &str,
    font_weight: &FontWeight,
    font_shape: &FontShape,
) -> String {
    let base = match font_family {
        "amsrm" => "AMS",
        "textrm" => "Main",
        "textsf" => "SansSerif",
        "texttt" => "Typewriter",
        other => other,
    };
    let styles = match (font_weight, font_shape) {
        (FontWeight::TextBf, FontShape::TextIt) => "BoldItalic",
        (FontWeight::TextBf, _) => "Bold",
        (_, FontShape::TextIt) => "Italic",
        _ => "Regular",
    };
    format!("{base}-{styles}")
}

fn can_combine(prev: &SymbolNode, next: &SymbolNode) -> bool {
    if create_class(&prev.classes) != create_class(&next.classes)
        || prev.skew != next.skew
        || prev.max_font_size != next.max_font_size
    {
        return false;
    }
    // Don't combine bare atoms; spacing needs them separate.
    if prev.classes.len() == 1 && matches!(prev.classes[0].as_str(), "mbin" | "mord") {
        return false;
    }
    prev.style == next.style
}

/// Merge consecutive compatible symbol nodes into single text runs.
pub fn try_combine_chars(chars: &mut Vec<HtmlDomNode>) {
    let mut i = 0;
    while i + 1 < chars.len() {
        let combinable = match (&chars[i], &chars[i + 1]) {
            (HtmlDomNode::Symbol(prev), HtmlDomNode::Symbol(next)) => can_combine(prev, next),
            _ => false,
        };
        if combinable {
            let HtmlDomNode::Symbol(next) = chars.remove(i + 1) else {
                unreachable!();
            };
            if let HtmlDomNode::Symbol(prev) = &mut chars[i] {
                prev.text.push_str(&next.text);
                prev.height = prev.height.max(next.height);
                prev.depth = prev.depth.max(next.depth);
                // The last character's italic correction wins.
                prev.italic = next.italic;
            }
        } else {
            i += 1;
        }
    }
}

impl MathTexContext {
    /// Make a glue span of the given measurement.
    pub fn make_glue<T: AsRef<str>>(
        &self,
        measurement: &Measurement<T>,
        options: &Options,
    ) -> Result<DomSpan, ParseError> {
        let mut rule = make_span(vec!["mspace".to_owned()], vec![], Some(options), None);
        let size = self.calculate_size(measurement, options)?;
        rule.style.insert(CssProperty::MarginRight, make_em(size));
        Ok(rule)
    }
}

/// Build a mathord/textord symbol in the correct font and color.
pub fn make_ord(
    ctx: &MathTexContext,
    node: &AnyParseNode,
    options: &Options,
) -> Result<HtmlDomNode, ParseError> {
    let (mode, text, ord_mode) = match node {
        AnyParseNode::MathOrd(n) => (n.mode, &n.text, Mode::Math),
        AnyParseNode::TextOrd(n) => (n.mode, &n.text, Mode::Text),
        AnyParseNode::Spacing(n) => (n.mode, &n.text, Mode::Text),
        _ => {
            return Err(ParseError::new(
                "make_ord: expected MathOrd, TextOrd or Spacing node",
            ));
        }
    };

    let classes = vec!["mord".to_owned()];

    // Math mode, or text mode under an old-style font command.
    let is_font = mode == Mode::Math || (mode == Mode::Text && !options.font.is_empty());
    let font_or_family = if is_font {
        (!options.font.is_empty()).then_some(&options.font)
    } else {
        (!options.font_family.is_empty()).then_some(&options.font_family)
    };

    if let Some(font_or_family) = font_or_family {
        let (font_name, font_classes) = if font_or_family == "boldsymbol" {
            let entry = bold_symbol(ctx, text, mode, ord_mode)?;
            (entry.0.to_owned(), vec![entry.1.to_owned()])
        } else if is_font {
            let font_name = FONT_MAP
                .get(font_or_family.as_str())
                .map_or(font_or_family.as_str(), |entry| entry.font_name);
            (font_name.to_owned(), vec![font_or_family.clone()])
        } else {
            let font_name =
                retrieve_text_font_name(font_or_family, &options.font_weight, &options.font_shape);
            let font_classes = vec![
                font_or_family.clone(),
                options.font_weight.to_string(),
                options.font_shape.as_ref().to_owned(),
            ];
            (font_name, font_classes)
        };

        if lookup_symbol(ctx, text, &font_name, mode)?.is_some_and(|l| l.metrics.is_some()) {
            let mut combined = classes;
            combined.extend(font_classes);
            return Ok(make_symbol(ctx, text, &font_name, mode, Some(options), Some(&combined))?
                .into());
        }

        // Typewriter fonts have no ligatures: split into per-char symbols.
        if font_name.starts_with("Typewriter") && is_ligature(text) {
            let mut base_classes = classes;
            base_classes.extend(font_classes);
            let mut parts = Vec::new();
            for ch in text.chars() {
                parts.push(
                    make_symbol(
                        ctx,
                        &ch.to_string(),
                        &font_name,
                        mode,
                        Some(options),
                        Some(&base_classes),
                    )?
                    .into(),
                );
            }
            return Ok(make_fragment(&parts).into());
        }
    }

    match ord_mode {
        Mode::Math => {
            let mut combined = classes;
            combined.push("mathnormal".to_owned());
            Ok(
                make_symbol(ctx, text, "Math-Italic", mode, Some(options), Some(&combined))?
                    .into(),
            )
        }
        Mode::Text => {
            let family = match ctx.symbols.get(mode, text).map(|info| info.font.clone()) {
                Some(Font::Ams) => "amsrm".to_owned(),
                Some(Font::Custom(custom)) => custom,
                _ => "textrm".to_owned(),
            };
            let font_name =
                retrieve_text_font_name(&family, &options.font_weight, &options.font_shape);
            let mut combined = classes;
            if family == "amsrm" {
                combined.push("amsrm".to_owned());
            }
            combined.push(options.font_weight.to_string());
            combined.push(options.font_shape.as_ref().to_owned());
            Ok(make_symbol(ctx, text, &font_name, mode, Some(options), Some(&combined))?.into())
        }
    }
}

fn bold_symbol(
    ctx: &MathTexContext,
    text: &str,
    mode: Mode,
    ord_mode: Mode,
) -> Result<(&'static str, &'static str), ParseError> {
    if ord_mode != Mode::Text
        && lookup_symbol(ctx, text, "Math-BoldItalic", mode)?.is_some_and(|l| l.metrics.is_some())
    {
        Ok(("Math-BoldItalic", "boldsymbol"))
    } else {
        // Glyphs missing from Math-BoldItalic fall back to Main-Bold.
        Ok(("Main-Bold", "mathbf"))
    }
}

/// Make a span holding SVG children.
#[must_use]
pub fn make_svg_span(classes: Vec<String>, svg_nodes: Vec<SvgNode>, options: &Options) -> DomSpan {
    Span::builder()
        .children(svg_nodes.into_iter().map(HtmlDomNode::SvgNode).collect())
        .classes(classes)
        .build(Some(options))
}

/// W/H of the vec glyph overlay.
pub const VEC_SVG_DATA: (f64, f64) = (0.471, 0.714);

const SVG_DATA: phf::Map<&'static str, (f64, f64)> = phf_map! {
    "vec" => VEC_SVG_DATA,
    "oiintSize1" => (0.957, 0.499),
    "oiintSize2" => (1.472, 0.659),
    "oiiintSize1" => (1.304, 0.499),
    "oiiintSize2" => (1.98, 0.659),
};

/// A fixed-size SVG overlay (`\vec` arrowhead, `\oiint` ovals).
pub fn static_svg(path_name: &str, options: &Options) -> Result<DomSpan, ParseError> {
    let Some((width, height)) = SVG_DATA.get(path_name) else {
        return Ok(make_span(vec![], vec![], Some(options), None));
    };
    let path = PathNode {
        path_name: path_name.to_owned(),
        alternate: None,
    };
    let attributes: KeyMap<String, String> = [
        ("width".to_owned(), make_em(*width)),
        ("height".to_owned(), make_em(*height)),
        // Override the CSS rule `svg { width: 100% }`.
        ("style".to_owned(), format!("width:{}", make_em(*width))),
        (
            "viewBox".to_owned(),
            format!("0 0 {} {}", 1000.0 * width, 1000.0 * height),
        ),
        ("preserveAspectRatio".to_owned(), "xMinYMin".to_owned()),
    ]
    .into_iter()
    .collect();
    let svg = SvgNode::builder()
        .children(vec![SvgChildNode::Path(path)])
        .attributes(attributes)
        .build();
    let mut span = make_svg_span(vec!["overlay".to_owned()], vec![svg], options);
    span.height = *height;
    span.style.insert(CssProperty::Height, make_em(*height));
    span.style.insert(CssProperty::Width, make_em(*width));
    Ok(span)
}

/// A horizontal line span (fraction bars, `\overline`).
#[must_use]
pub fn make_line_span(class_name: &str, options: &Options, thickness: Option<f64>) -> DomSpan {
    let mut line = make_span(vec![class_name.to_owned()], vec![], Some(options), None);
    let default_thickness = options.font_metrics().default_rule_thickness;
    line.height = thickness
        .unwrap_or(default_thickness)
        .max(options.min_rule_thickness);
    line.style
        .insert(CssProperty::BorderBottomWidth, make_em(line.height));
    line.max_font_size = 1.0;
    line
}

/// An anchor element sized from its children.
#[must_use]
pub fn make_anchor(
    href: &str,
    classes: &[String],
    children: Vec<HtmlDomNode>,
    options: &Options,
) -> Anchor {
    let mut attributes = KeyMap::default();
    attributes.insert("href".to_owned(), href.to_owned());

    let (height, depth, max_font_size) = measure(&children);
    let mut anchor = Anchor::builder()
        .children(children)
        .attributes(attributes)
        .classes(classes.to_vec())
        .build(Some(options));
    (anchor.height, anchor.depth, anchor.max_font_size) = (height, depth, max_font_size);
    anchor
}

/// A document fragment sized from its children.
#[must_use]
pub fn make_fragment(children: &[HtmlDomNode]) -> HtmlDomFragment {
    let mut fragment = DocumentFragment::new(children.to_vec());
    (fragment.height, fragment.depth, fragment.max_font_size) = measure(&fragment.children);
    fragment
}

/// Wrap a fragment in a span so classes/styles can attach to it; other nodes
/// pass through unchanged.
#[must_use]
pub fn wrap_fragment(group: HtmlDomNode, options: &Options) -> HtmlDomNode {
    match group {
        HtmlDomNode::Fragment(fragment) => {
            make_span(vec![], vec![fragment.into()], Some(options), None).into()
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::TEXT;

    fn options() -> Options {
        Options::builder()
            .style(TEXT)
            .max_size(1000.0)
            .min_rule_thickness(0.04)
            .build()
    }

    fn box_of(height: f64, depth: f64) -> HtmlDomNode {
        let mut span = make_span(vec![], vec![], None, None);
        span.height = height;
        span.depth = depth;
        span.into()
    }

    #[test]
    fn vlist_extents_match_positioned_children() {
        // Two boxes shifted apart: extents must be the positioned extrema.
        let children = vec![
            VListElemAndShift::builder().elem(box_of(0.5, 0.2)).shift(0.0).build(),
            VListElemAndShift::builder().elem(box_of(0.4, 0.1)).shift(-0.8).build(),
        ];
        let vlist = make_v_list(VListParam::IndividualShift { children }, &options()).unwrap();
        assert!((vlist.height - 1.2).abs() < 1e-9); // 0.8 + 0.4
        assert!((vlist.depth - 0.2).abs() < 1e-9);
    }

    #[test]
    fn vlist_top_positioning() {
        let children = vec![
            VListElem::builder().elem(box_of(0.3, 0.1)).build().into(),
            VListChild::Kern(VListKern { size: 0.2 }),
            VListElem::builder().elem(box_of(0.3, 0.1)).build().into(),
        ];
        let vlist = make_v_list(
            VListParam::Top {
                position_data: 0.5,
                children,
            },
            &options(),
        )
        .unwrap();
        assert!((vlist.height - 0.5).abs() < 1e-9);
        // Total stack extent is 1.0, so 0.5 hangs below the baseline.
        assert!((vlist.depth - 0.5).abs() < 1e-9);
    }

    #[test]
    fn line_span_respects_min_rule_thickness() {
        let mut opts = options();
        opts.min_rule_thickness = 0.1;
        let line = make_line_span("frac-line", &opts, Some(0.04));
        assert!((line.height - 0.1).abs() < 1e-9);
    }

    #[test]
    fn combine_merges_plain_text_runs() {
        let ctx = crate::context::MathTexContext::default();
        let opts = options();
        let a = make_symbol(&ctx, "a", "Main-Regular", Mode::Text, Some(&opts), None).unwrap();
        let b = make_symbol(&ctx, "b", "Main-Regular", Mode::Text, Some(&opts), None).unwrap();
        let mut chars: Vec<HtmlDomNode> = vec![a.into(), b.into()];
        try_combine_chars(&mut chars);
        assert_eq!(chars.len(), 1);
        let HtmlDomNode::Symbol(merged) = &chars[0] else {
            panic!("expected symbol");
        };
        assert_eq!(merged.text, "ab");
    }
}
