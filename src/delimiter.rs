//! Delimiter construction and sizing.
//!
//! A delimiter of a requested extent is realized as either a restyled glyph
//! from Main-Regular, a fixed glyph from the Size1–Size4 fonts, or a stack of
//! glyph pieces with an SVG middle section. `pick_variant` walks the
//! per-delimiter catalog in increasing size, so selection is monotone in the
//! requested extent.

use crate::build_common::{
    VListChild, VListElem, VListKern, VListParam, lookup_symbol, make_span, make_svg_span,
    make_symbol, make_v_list,
};
use crate::context::MathTexContext;
use crate::dom_tree::{DomSpan, PathNode, SvgChildNode, SvgNode};
use crate::font_metrics_data::CharacterMetrics;
use crate::namespace::KeyMap;
use crate::options::Options;
use crate::style::{SCRIPT, SCRIPTSCRIPT, Style, TEXT};
use crate::svg_geometry::{inner_path, sqrt_path, tall_delim};
use crate::symbols::Mode;
use crate::types::{CssProperty, ParseError, ParseErrorKind};
use crate::units::make_em;
use phf::{Set, phf_set};

/// Total extent delivered by each `\big` size class, in ems.
pub const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

/// Padding above the surd vinculum, in SVG units.
const VB_PAD: f64 = 80.0;
/// Padding above the surd, in ems.
const EM_PAD: f64 = 0.08;
/// Overlap between stacked delimiter pieces, in ems.
const LAP_IN_EMS: f64 = 0.008;

/// One rendering strategy in a delimiter's size catalog.
#[derive(Debug, Clone)]
pub enum DelimiterType {
    /// Main-Regular glyph restyled to the given style.
    Small(&'static Style),
    /// SizeN-Regular glyph.
    Large(usize),
    /// Stacked pieces, unbounded.
    Stack,
}

/// Result of [`make_sqrt_image`].
#[derive(Debug)]
pub struct SqrtImageResult {
    /// The span holding the surd SVG.
    pub span: DomSpan,
    /// Vinculum thickness, in ems.
    pub rule_width: f64,
    /// Horizontal advance of the surd, in ems.
    pub advance_width: f64,
}

fn get_metrics(
    ctx: &MathTexContext,
    symbol: &str,
    font: &str,
    mode: Mode,
) -> Result<CharacterMetrics, ParseError> {
    lookup_symbol(ctx, symbol, font, mode)?
        .and_then(|lookup| lookup.metrics)
        .ok_or_else(|| {
            ParseError::new(ParseErrorKind::UnsupportedSymbolFont {
                symbol: symbol.to_owned(),
                font: font.to_owned(),
            })
        })
}

/// Wrap a delimiter in a span restyled to `to_style`, rescaling its extents.
fn style_wrap(
    delim: DomSpan,
    to_style: &'static Style,
    options: &Options,
    classes: &[String],
) -> DomSpan {
    let restyled = options.having_base_style(Some(to_style));
    let mut wrapper_classes = classes.to_vec();
    wrapper_classes.extend(restyled.sizing_classes(options));
    let mut span = make_span(wrapper_classes, vec![delim.into()], Some(options), None);

    let scale = restyled.size_multiplier / options.size_multiplier;
    span.height *= scale;
    span.depth *= scale;
    span.max_font_size = restyled.size_multiplier;
    span
}

fn center_span(mut span: DomSpan, options: &Options, style: &'static Style) -> DomSpan {
    let new_options = options.having_base_style(Some(style));
    let shift = (1.0 - options.size_multiplier / new_options.size_multiplier)
        * options.font_metrics().axis_height;
    span.classes.push("delimcenter".to_owned());
    span.height -= shift;
    span.depth += shift;
    span.style.insert(CssProperty::Top, make_em(shift));
    span
}

/// A Main-Regular delimiter restyled downward (text/script/scriptscript).
pub fn make_small_delim(
    ctx: &MathTexContext,
    delim: &str,
    style: &'static Style,
    center: bool,
    options: &Options,
    mode: Mode,
    classes: &[String],
) -> Result<DomSpan, ParseError> {
    let text = make_symbol(ctx, delim, "Main-Regular", mode, Some(options), Some(classes))?;
    let inner = make_span(vec![], vec![text.into()], None, None);
    let span = style_wrap(inner, style, options, classes);
    Ok(maybe_center(span, center, options))
}

fn maybe_center(span: DomSpan, center: bool, options: &Options) -> DomSpan {
    if center {
        center_span(span, options, TEXT)
    } else {
        span
    }
}

/// A Size1–Size4 delimiter, always set in textstyle.
pub fn make_large_delim(
    ctx: &MathTexContext,
    delim: &str,
    size: usize,
    center: bool,
    options: &Options,
    mode: Mode,
    classes: &[String],
) -> Result<DomSpan, ParseError> {
    let font = format!("Size{size}-Regular");
    let glyph = make_symbol(ctx, delim, &font, mode, Some(options), None)?;
    let sized = make_span(
        vec!["delimsizing".to_owned(), format!("size{size}")],
        vec![glyph.into()],
        Some(options),
        None,
    );
    let span = style_wrap(sized, TEXT, options, classes);
    Ok(maybe_center(span, center, options))
}

fn make_glyph_span(
    ctx: &MathTexContext,
    symbol: &str,
    font: &str,
    mode: Mode,
) -> Result<VListChild, ParseError> {
    let size_class = match font {
        "Size1-Regular" => "delim-size1",
        _ => "delim-size4",
    };
    let glyph = make_symbol(ctx, symbol, font, mode, None, None)?;
    let wrapped = make_span(vec![], vec![glyph.into()], None, None);
    let corner = make_span(
        vec!["delimsizinginner".to_owned(), size_class.to_owned()],
        vec![wrapped.into()],
        None,
        None,
    );
    Ok(VListElem::builder().elem(corner.into()).build().into())
}

/// The stretched inner section of a stacked delimiter, as inline SVG.
fn make_inner(
    ctx: &MathTexContext,
    ch: &str,
    height: f64,
    options: &Options,
) -> Result<VListChild, ParseError> {
    let first = ch
        .chars()
        .next()
        .ok_or_else(|| ParseError::new("Delimiter character is empty"))?;
    let width = if let Some(metric) = ctx.font_metrics.get_metric("Size4-Regular", first as u32)? {
        metric.width
    } else {
        ctx.font_metrics
            .get_metric("Size1-Regular", first as u32)?
            .map_or(0.0, |m| m.width)
    };

    let path = PathNode {
        path_name: "inner".to_owned(),
        alternate: Some(inner_path(ch, (1000.0 * height).round())),
    };
    let mut attributes = KeyMap::default();
    attributes.extend([
        ("width".to_owned(), make_em(width)),
        ("height".to_owned(), make_em(height)),
        ("style".to_owned(), format!("width:{}", make_em(width))),
        (
            "viewBox".to_owned(),
            format!("0 0 {} {}", 1000.0 * width, (1000.0 * height).round()),
        ),
        ("preserveAspectRatio".to_owned(), "xMinYMin".to_owned()),
    ]);
    let svg = SvgNode::builder()
        .children(vec![SvgChildNode::Path(path)])
        .attributes(attributes)
        .build();
    let mut span = make_svg_span(vec![], vec![svg], options);
    span.height = height;
    span.style.insert(CssProperty::Height, make_em(height));
    span.style.insert(CssProperty::Width, make_em(width));
    Ok(VListElem::builder().elem(span.into()).build().into())
}

struct StackedParts {
    top: &'static str,
    middle: Option<&'static str>,
    repeat: &'static str,
    bottom: &'static str,
    font: &'static str,
    svg_label: &'static str,
    view_box_width: f64,
}

fn stacked_parts(delim: &str) -> StackedParts {
    let mut parts = StackedParts {
        top: "",
        middle: None,
        repeat: "",
        bottom: "",
        font: "Size1-Regular",
        svg_label: "",
        view_box_width: 0.0,
    };
    match delim {
        "\\uparrow" => {
            parts.top = "\\uparrow";
            parts.repeat = "\u{23d0}";
            parts.bottom = "\u{23d0}";
        }
        "\\Uparrow" => {
            parts.top = "\\Uparrow";
            parts.repeat = "\u{2016}";
            parts.bottom = "\u{2016}";
        }
        "\\downarrow" => {
            parts.top = "\u{23d0}";
            parts.repeat = "\u{23d0}";
            parts.bottom = "\\downarrow";
        }
        "\\Downarrow" => {
            parts.top = "\u{2016}";
            parts.repeat = "\u{2016}";
            parts.bottom = "\\Downarrow";
        }
        "\\updownarrow" => {
            parts.top = "\\uparrow";
            parts.repeat = "\u{23d0}";
            parts.bottom = "\\downarrow";
        }
        "\\Updownarrow" => {
            parts.top = "\\Uparrow";
            parts.repeat = "\u{2016}";
            parts.bottom = "\\Downarrow";
        }
        "|" | "\\lvert" | "\\rvert" | "\\vert" => {
            parts.top = "\u{2223}";
            parts.repeat = "\u{2223}";
            parts.bottom = "\u{2223}";
            parts.svg_label = "vert";
            parts.view_box_width = 333.0;
        }
        "\\|" | "\\lVert" | "\\rVert" | "\\Vert" => {
            parts.top = "\u{2225}";
            parts.repeat = "\u{2225}";
            parts.bottom = "\u{2225}";
            parts.svg_label = "doublevert";
            parts.view_box_width = 556.0;
        }
        "[" | "\\lbrack" => {
            parts.top = "\u{23a1}";
            parts.repeat = "\u{23a2}";
            parts.bottom = "\u{23a3}";
            parts.font = "Size4-Regular";
            parts.svg_label = "lbrack";
            parts.view_box_width = 667.0;
        }
        "]" | "\\rbrack" => {
            parts.top = "\u{23a4}";
            parts.repeat = "\u{23a5}";
            parts.bottom = "\u{23a6}";
            parts.font = "Size4-Regular";
            parts.svg_label = "rbrack";
            parts.view_box_width = 667.0;
        }
        "\\lfloor" | "\u{230a}" => {
            parts.top = "\u{23a2}";
            parts.repeat = "\u{23a2}";
            parts.bottom = "\u{23a3}";
            parts.font = "Size4-Regular";
            parts.svg_label = "lfloor";
            parts.view_box_width = 667.0;
        }
        "\\lceil" | "\u{2308}" => {
            parts.top = "\u{23a1}";
            parts.repeat = "\u{23a2}";
            parts.bottom = "\u{23a2}";
            parts.font = "Size4-Regular";
            parts.svg_label = "lceil";
            parts.view_box_width = 667.0;
        }
        "\\rfloor" | "\u{230b}" => {
            parts.top = "\u{23a5}";
            parts.repeat = "\u{23a5}";
            parts.bottom = "\u{23a6}";
            parts.font = "Size4-Regular";
            parts.svg_label = "rfloor";
            parts.view_box_width = 667.0;
        }
        "\\rceil" | "\u{2309}" => {
            parts.top = "\u{23a4}";
            parts.repeat = "\u{23a5}";
            parts.bottom = "\u{23a5}";
            parts.font = "Size4-Regular";
            parts.svg_label = "rceil";
            parts.view_box_width = 667.0;
        }
        "(" | "\\lparen" => {
            parts.top = "\u{239b}";
            parts.repeat = "\u{239c}";
            parts.bottom = "\u{239d}";
            parts.font = "Size4-Regular";
            parts.svg_label = "lparen";
            parts.view_box_width = 875.0;
        }
        ")" | "\\rparen" => {
            parts.top = "\u{239e}";
            parts.repeat = "\u{239f}";
            parts.bottom = "\u{23a0}";
            parts.font = "Size4-Regular";
            parts.svg_label = "rparen";
            parts.view_box_width = 875.0;
        }
        "\\{" | "\\lbrace" => {
            parts.top = "\u{23a7}";
            parts.middle = Some("\u{23a8}");
            parts.bottom = "\u{23a9}";
            parts.repeat = "\u{23aa}";
            parts.font = "Size4-Regular";
        }
        "\\}" | "\\rbrace" => {
            parts.top = "\u{23ab}";
            parts.middle = Some("\u{23ac}");
            parts.bottom = "\u{23ad}";
            parts.repeat = "\u{23aa}";
            parts.font = "Size4-Regular";
        }
        "\\lgroup" | "\u{27ee}" => {
            parts.top = "\u{23a7}";
            parts.bottom = "\u{23a9}";
            parts.repeat = "\u{23aa}";
            parts.font = "Size4-Regular";
        }
        "\\rgroup" | "\u{27ef}" => {
            parts.top = "\u{23ab}";
            parts.bottom = "\u{23ad}";
            parts.repeat = "\u{23aa}";
            parts.font = "Size4-Regular";
        }
        "\\lmoustache" | "\u{23b0}" => {
            parts.top = "\u{23a7}";
            parts.bottom = "\u{23ad}";
            parts.repeat = "\u{23aa}";
            parts.font = "Size4-Regular";
        }
        "\\rmoustache" | "\u{23b1}" => {
            parts.top = "\u{23ab}";
            parts.bottom = "\u{23a9}";
            parts.repeat = "\u{23aa}";
            parts.font = "Size4-Regular";
        }
        _ => {}
    }
    parts
}

/// A stacked delimiter of total extent at least `height_total` (TeXbook
/// p. 442).
pub fn make_stacked_delim(
    ctx: &MathTexContext,
    delim: &str,
    height_total: f64,
    center: bool,
    options: &Options,
    mode: Mode,
    classes: &[String],
) -> Result<DomSpan, ParseError> {
    let parts = stacked_parts(delim);
    let top = if parts.top.is_empty() { delim } else { parts.top };
    let repeat = if parts.repeat.is_empty() {
        delim
    } else {
        parts.repeat
    };
    let bottom = if parts.bottom.is_empty() {
        delim
    } else {
        parts.bottom
    };
    let font = parts.font;

    let top_metrics = get_metrics(ctx, top, font, mode)?;
    let top_height_total = top_metrics.height + top_metrics.depth;
    let repeat_metrics = get_metrics(ctx, repeat, font, mode)?;
    let repeat_height_total = repeat_metrics.height + repeat_metrics.depth;
    let bottom_metrics = get_metrics(ctx, bottom, font, mode)?;
    let bottom_height_total = bottom_metrics.height + bottom_metrics.depth;

    let mut middle_height_total = 0.0;
    let middle_factor = if let Some(middle) = parts.middle {
        let middle_metrics = get_metrics(ctx, middle, font, mode)?;
        middle_height_total = middle_metrics.height + middle_metrics.depth;
        2.0 // repeats symmetrically above and below the middle
    } else {
        1.0
    };

    let minimal_height = top_height_total + bottom_height_total + middle_height_total;
    let delta = (height_total - minimal_height) / (middle_factor * repeat_height_total);
    let repeat_count = delta.ceil().max(0.0);
    let real_height_total = (repeat_count * middle_factor)
        .mul_add(repeat_height_total, minimal_height);

    // Centered delimiters sit on a user-size-scaled axis.
    let axis_scale = if center { options.size_multiplier } else { 1.0 };
    let depth = real_height_total / 2.0 - options.font_metrics().axis_height * axis_scale;

    let mut stack: Vec<VListChild> = Vec::new();

    if parts.svg_label.is_empty() {
        stack.push(make_glyph_span(ctx, bottom, font, mode)?);
        stack.push(VListChild::Kern(VListKern { size: -LAP_IN_EMS }));

        if let Some(middle) = parts.middle {
            let inner_height = 2.0f64.mul_add(
                LAP_IN_EMS,
                (real_height_total - top_height_total - bottom_height_total - middle_height_total)
                    / 2.0,
            );
            stack.push(make_inner(ctx, repeat, inner_height, options)?);
            stack.push(VListChild::Kern(VListKern { size: -LAP_IN_EMS }));
            stack.push(make_glyph_span(ctx, middle, font, mode)?);
            stack.push(VListChild::Kern(VListKern { size: -LAP_IN_EMS }));
            stack.push(make_inner(ctx, repeat, inner_height, options)?);
        } else {
            let inner_height = 2.0f64.mul_add(
                LAP_IN_EMS,
                real_height_total - top_height_total - bottom_height_total,
            );
            stack.push(make_inner(ctx, repeat, inner_height, options)?);
        }

        stack.push(VListChild::Kern(VListKern { size: -LAP_IN_EMS }));
        stack.push(make_glyph_span(ctx, top, font, mode)?);
    } else {
        // One-piece SVG for delimiters with a dedicated tall path.
        let mid_height = real_height_total - top_height_total - bottom_height_total;
        let view_box_height = (real_height_total * 1000.0).round();
        let path_str = tall_delim(parts.svg_label, (mid_height * 1000.0).round())?;
        let path = PathNode {
            path_name: parts.svg_label.to_owned(),
            alternate: Some(path_str),
        };
        let width = format!("{:.3}em", parts.view_box_width / 1000.0);
        let height = format!("{:.3}em", view_box_height / 1000.0);

        let mut attributes = KeyMap::default();
        attributes.extend([
            ("width".to_owned(), width.clone()),
            ("height".to_owned(), height.clone()),
            (
                "viewBox".to_owned(),
                format!("0 0 {} {view_box_height}", parts.view_box_width),
            ),
        ]);
        let svg = SvgNode::builder()
            .children(vec![SvgChildNode::Path(path)])
            .attributes(attributes)
            .build();
        let mut wrapper = make_svg_span(vec![], vec![svg], options);
        wrapper.height = view_box_height / 1000.0;
        wrapper.style.insert(CssProperty::Width, width);
        wrapper.style.insert(CssProperty::Height, height);
        stack.push(VListElem::builder().elem(wrapper.into()).build().into());
    }

    let text_options = options.having_base_style(Some(TEXT));
    let param = VListParam::Bottom {
        position_data: depth,
        children: stack,
    };
    let inner = make_v_list(param, &text_options)?;
    let column = make_span(
        vec!["delimsizing".to_owned(), "mult".to_owned()],
        vec![inner.into()],
        Some(&text_options),
        None,
    );
    Ok(style_wrap(column, TEXT, options, classes))
}

fn sqrt_svg(
    sqrt_name: &str,
    height: f64,
    view_box_height: f64,
    extra_vinculum: f64,
    options: &Options,
) -> DomSpan {
    let path = sqrt_path(sqrt_name, 1000.0 * extra_vinculum, view_box_height);
    let path_node = PathNode {
        path_name: sqrt_name.to_owned(),
        alternate: Some(path),
    };
    let mut attributes = KeyMap::default();
    attributes.extend([
        ("width".to_owned(), "400em".to_owned()),
        ("height".to_owned(), make_em(height)),
        (
            "viewBox".to_owned(),
            format!("0 0 400000 {view_box_height:.0}"),
        ),
        ("preserveAspectRatio".to_owned(), "xMinYMin slice".to_owned()),
    ]);
    let svg = SvgNode::builder()
        .children(vec![SvgChildNode::Path(path_node)])
        .attributes(attributes)
        .build();
    let mut span = make_svg_span(vec!["hide-tail".to_owned()], vec![svg], options);
    span.style.insert(CssProperty::MinWidth, "0.853em");
    span.style.insert(CssProperty::Height, make_em(height));
    span
}

/// A surd sized for a radicand of the given height.
pub fn make_sqrt_image(
    ctx: &MathTexContext,
    height: f64,
    options: &Options,
) -> Result<SqrtImageResult, ParseError> {
    // Remove user sizing so the glyph selection matches TeX.
    let new_options = options.having_base_sizing();
    let delimiter_type = pick_variant(
        ctx,
        "\\surd",
        height * new_options.size_multiplier,
        STACK_LARGE_DELIMITER_SEQUENCE,
        &new_options,
    )?;
    let mut size_multiplier = new_options.size_multiplier;

    // Extra vinculum thickness demanded by minRuleThickness.
    let extra_vinculum =
        (options.min_rule_thickness - options.font_metrics().sqrt_rule_thickness).max(0.0);

    let span_height;
    let tex_height;
    let view_box_height;
    let advance_width;

    let mut span = match delimiter_type {
        DelimiterType::Small(_) => {
            // Low radicands rescale like \textfont and \scriptfont radicals.
            size_multiplier = match height {
                h if h < 1.0 => 1.0,
                h if h < 1.4 => 0.7,
                _ => size_multiplier,
            };
            span_height = (1.0 + extra_vinculum + EM_PAD) / size_multiplier;
            tex_height = (1.0 + extra_vinculum) / size_multiplier;
            view_box_height = 1000.0f64.mul_add(extra_vinculum, 1000.0) + VB_PAD;
            advance_width = 0.833 / size_multiplier;
            sqrt_svg("sqrtMain", span_height, view_box_height, extra_vinculum, options)
        }
        DelimiterType::Large(size) => {
            view_box_height = (1000.0 + VB_PAD) * SIZE_TO_MAX_HEIGHT[*size];
            tex_height = (SIZE_TO_MAX_HEIGHT[*size] + extra_vinculum) / size_multiplier;
            span_height = (SIZE_TO_MAX_HEIGHT[*size] + extra_vinculum + EM_PAD) / size_multiplier;
            advance_width = 1.0 / size_multiplier;
            let mut span = sqrt_svg(
                &format!("sqrtSize{size}"),
                span_height,
                view_box_height,
                extra_vinculum,
                options,
            );
            span.style.insert(CssProperty::MinWidth, "1.02em");
            span
        }
        DelimiterType::Stack => {
            span_height = height + extra_vinculum + EM_PAD;
            tex_height = height + extra_vinculum;
            view_box_height = 1000.0f64.mul_add(height, extra_vinculum).round();
            advance_width = 1.056;
            let mut span =
                sqrt_svg("sqrtTall", span_height, view_box_height, extra_vinculum, options);
            span.style.insert(CssProperty::MinWidth, "0.742em");
            span
        }
    };

    span.height = tex_height;
    span.style.insert(CssProperty::Height, make_em(span_height));

    Ok(SqrtImageResult {
        span,
        rule_width: (options.font_metrics().sqrt_rule_thickness + extra_vinculum) * size_multiplier,
        advance_width,
    })
}

/// Angle-bracket spellings normalize to `\langle`/`\rangle` in delimiter
/// position.
fn normalize(delim: &str) -> &str {
    match delim {
        "<" | "\\lt" | "\u{27e8}" => "\\langle",
        ">" | "\\gt" | "\u{27e9}" => "\\rangle",
        other => other,
    }
}

/// The size catalog a delimiter grows through.
fn sequence_for(delim: &str) -> &'static [DelimiterType] {
    if STACK_NEVER_DELIMITERS.contains(delim) {
        STACK_NEVER_DELIMITER_SEQUENCE
    } else if STACK_LARGE_DELIMITERS.contains(delim) {
        STACK_LARGE_DELIMITER_SEQUENCE
    } else {
        STACK_ALWAYS_DELIMITER_SEQUENCE
    }
}

/// Total extent `candidate` would deliver for `delim`, or `None` for the
/// stacked variant (which grows without bound).
fn variant_extent(
    ctx: &MathTexContext,
    delim: &str,
    candidate: &DelimiterType,
    options: &Options,
) -> Result<Option<f64>, ParseError> {
    let (font, rescale) = match candidate {
        DelimiterType::Small(style) => (
            "Main-Regular".to_owned(),
            // Small variants shrink with the style they are restyled to.
            options.having_base_style(Some(style)).size_multiplier,
        ),
        DelimiterType::Large(size) => (format!("Size{size}-Regular"), 1.0),
        DelimiterType::Stack => return Ok(None),
    };
    let metrics = get_metrics(ctx, delim, &font, Mode::Math)?;
    Ok(Some((metrics.height + metrics.depth) * rescale))
}

/// Pick the first catalog entry whose extent covers `target`. Entries are
/// ordered small to large, so the choice is monotone in `target`.
fn pick_variant<'a>(
    ctx: &MathTexContext,
    delim: &str,
    target: f64,
    sequence: &'a [DelimiterType],
    options: &Options,
) -> Result<&'a DelimiterType, ParseError> {
    // Script styles skip fewer leading entries so small variants stay
    // available at small sizes.
    let skip = match options.style.size {
        0 | 1 => 2,
        2 => 1,
        _ => 0,
    };

    for candidate in &sequence[skip.min(sequence.len())..] {
        match variant_extent(ctx, delim, candidate, options)? {
            Some(extent) if extent > target => return Ok(candidate),
            Some(_) => {}
            None => break,
        }
    }
    sequence.last().ok_or_else(|| {
        ParseError::new("Delimiter catalog is empty; please report this as a bug")
    })
}

/// Realize a chosen variant. `target` only matters for the stacked form.
fn realize_variant(
    ctx: &MathTexContext,
    variant: &DelimiterType,
    delim: &str,
    target: f64,
    center: bool,
    options: &Options,
    mode: Mode,
    classes: &[String],
) -> Result<DomSpan, ParseError> {
    match variant {
        DelimiterType::Small(style) => {
            make_small_delim(ctx, delim, style, center, options, mode, classes)
        }
        DelimiterType::Large(size) => {
            make_large_delim(ctx, delim, *size, center, options, mode, classes)
        }
        DelimiterType::Stack => {
            make_stacked_delim(ctx, delim, target, center, options, mode, classes)
        }
    }
}

/// A delimiter at one of the four fixed `\big` sizes.
pub fn sized_delim(
    ctx: &MathTexContext,
    delim: &str,
    size: usize,
    options: &Options,
    mode: Mode,
    classes: &[String],
) -> Result<DomSpan, ParseError> {
    let delim = normalize(delim);

    // Fixed-size delimiters never center; stack-only delimiters realize the
    // size class as a stack of that extent.
    if STACK_ALWAYS_DELIMITERS.contains(delim) {
        let extent = SIZE_TO_MAX_HEIGHT[size];
        make_stacked_delim(ctx, delim, extent, false, options, mode, classes)
    } else if STACK_LARGE_DELIMITERS.contains(delim) || STACK_NEVER_DELIMITERS.contains(delim) {
        make_large_delim(ctx, delim, size, false, options, mode, classes)
    } else {
        Err(ParseError::new(ParseErrorKind::IllegalDelimiter {
            delim: delim.to_owned(),
        }))
    }
}

/// A delimiter of at least the given total extent.
pub fn custom_sized_delim(
    ctx: &MathTexContext,
    delim: &str,
    height: f64,
    center: bool,
    options: &Options,
    mode: Mode,
    classes: &[String],
) -> Result<DomSpan, ParseError> {
    let delim = normalize(delim);
    let variant = pick_variant(ctx, delim, height, sequence_for(delim), options)?;
    realize_variant(ctx, variant, delim, height, center, options, mode, classes)
}

/// The delimiter for `\left`/`\right` around a body of the given extents.
pub fn left_right_delim(
    ctx: &MathTexContext,
    delim: &str,
    height: f64,
    depth: f64,
    options: &Options,
    mode: Mode,
    classes: &[String],
) -> Result<DomSpan, ParseError> {
    // \left/\right delimiters center on the axis.
    let axis_height = options.font_metrics().axis_height * options.size_multiplier;

    // From tex.web, make_left_right.
    let delimiter_factor = 901.0;
    let delimiter_extend = 5.0 / options.font_metrics().pt_per_em;

    let max_dist_from_axis = (height - axis_height).max(depth + axis_height);
    let total_height = (max_dist_from_axis / 500.0 * delimiter_factor)
        .max(2.0f64.mul_add(max_dist_from_axis, -delimiter_extend));

    custom_sized_delim(ctx, delim, total_height, true, options, mode, classes)
}

const STACK_LARGE_DELIMITERS: Set<&str> = phf_set!(
    "(", "\\lparen", ")", "\\rparen", "[", "\\lbrack", "]", "\\rbrack", "\\{", "\\lbrace", "\\}",
    "\\rbrace", "\\lfloor", "\\rfloor", "\u{230a}", "\u{230b}", "\\lceil", "\\rceil", "\u{2308}",
    "\u{2309}", "\\surd",
);

const STACK_ALWAYS_DELIMITERS: Set<&str> = phf_set!(
    "\\uparrow",
    "\\downarrow",
    "\\updownarrow",
    "\\Uparrow",
    "\\Downarrow",
    "\\Updownarrow",
    "|",
    "\\|",
    "\\vert",
    "\\Vert",
    "\\lvert",
    "\\rvert",
    "\\lVert",
    "\\rVert",
    "\\lgroup",
    "\\rgroup",
    "\u{27ee}",
    "\u{27ef}",
    "\\lmoustache",
    "\\rmoustache",
    "\u{23b0}",
    "\u{23b1}",
);

const STACK_NEVER_DELIMITERS: Set<&str> = phf_set!(
    "<",
    ">",
    "\\langle",
    "\\rangle",
    "/",
    "\\backslash",
    "\\lt",
    "\\gt",
);

const STACK_NEVER_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
];

const STACK_ALWAYS_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Stack,
];

const STACK_LARGE_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
    DelimiterType::Stack,
];
