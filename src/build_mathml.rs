//! The semantic builder: parse tree → MathML tree.

use crate::build_common::{FONT_MAP, make_span};
use crate::context::MathTexContext;
use crate::dom_tree::{DomSpan, HtmlDomNode};
use crate::font_metrics::get_character_metrics;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType, TextNode};
use crate::namespace::KeyMap;
use crate::options::{FontShape, FontWeight, Options};
use crate::parser::parse_node::AnyParseNode;
use crate::symbols::{Symbols, is_ligature};
use crate::types::{Mode, ParseError, ParseErrorKind};

/// A MathML text node with symbol replacement applied.
///
/// Replacement is skipped for ligatures under typewriter fonts and for the
/// Mathematical Alphanumeric Symbols block, which must survive untouched.
#[must_use]
pub fn make_text(text: &str, mode: Mode, options: Option<&Options>, symbols: &Symbols) -> TextNode {
    let mut final_text = text.to_owned();

    if let Some(info) = symbols.get(mode, text)
        && let Some(replace) = info.replace
    {
        let first = text.chars().next().unwrap_or('\0') as u32;
        if !(0x1D400..=0x1D7FF).contains(&first) {
            let skip = options.is_some_and(|opts| {
                let is_tt = opts.font_family.ends_with("tt") || opts.font.ends_with("tt");
                is_ligature(text) && is_tt
            });
            if !skip {
                final_text = replace.to_string();
            }
        }
    }

    TextNode { text: final_text }
}

/// Wrap multiple nodes in an `<mrow>`; a single node passes through.
#[must_use]
pub fn make_row(body: &[MathDomNode]) -> MathDomNode {
    if body.len() == 1 {
        body[0].clone()
    } else {
        MathNode::with_children(MathNodeType::Mrow, body.to_vec()).into()
    }
}

/// The `mathvariant` attribute for a symbol under the current options, or
/// `None` when the default variant applies.
pub fn get_variant(
    ctx: &MathTexContext,
    group: &AnyParseNode,
    options: &Options,
) -> Result<Option<&'static str>, ParseError> {
    let Some(text) = group.text() else {
        return Ok(None);
    };

    // Dotless letters never take a variant.
    if text == "\\imath" || text == "\\jmath" {
        return Ok(None);
    }

    if options.font_family == "texttt" {
        return Ok(Some("monospace"));
    }
    if options.font_family == "textsf" {
        return Ok(Some(match (&options.font_shape, &options.font_weight) {
            (FontShape::TextIt, FontWeight::TextBf) => "sans-serif-bold-italic",
            (FontShape::TextIt, _) => "sans-serif-italic",
            (_, FontWeight::TextBf) => "bold-sans-serif",
            _ => "sans-serif",
        }));
    }
    if options.font_shape == FontShape::TextIt && options.font_weight == FontWeight::TextBf {
        return Ok(Some("bold-italic"));
    }
    if options.font_shape == FontShape::TextIt {
        return Ok(Some("italic"));
    }
    if options.font_weight == FontWeight::TextBf {
        return Ok(Some("bold"));
    }

    let font = &options.font;
    if font.is_empty() || font == "mathnormal" {
        return Ok(None);
    }

    let mode = group.mode();
    match font.as_str() {
        "mathit" => return Ok(Some("italic")),
        "boldsymbol" => {
            return Ok(Some(match group {
                AnyParseNode::TextOrd(_) => "bold",
                _ => "bold-italic",
            }));
        }
        "mathbf" => return Ok(Some("bold")),
        "mathbb" => return Ok(Some("double-struck")),
        "mathfrak" => return Ok(Some("fraktur")),
        // MathML makes no distinction between script and calligraphic.
        "mathscr" | "mathcal" => return Ok(Some("script")),
        "mathsf" => return Ok(Some("sans-serif")),
        "mathtt" => return Ok(Some("monospace")),
        _ => {}
    }

    let final_text = ctx
        .symbols
        .get(mode, text)
        .and_then(|info| info.replace)
        .map_or_else(|| text.to_owned(), |c| c.to_string());

    if let Some(entry) = FONT_MAP.get(font.as_str())
        && let Some(first) = final_text.chars().next()
        && get_character_metrics(ctx, first, entry.font_name, mode)?.is_some()
    {
        return Ok(Some(entry.variant));
    }

    Ok(None)
}

/// Whether a node is number punctuation (a dot, or a zero-spaced comma).
fn is_number_punctuation(node: &MathNode) -> bool {
    match node.node_type {
        MathNodeType::Mi => {
            node.children.len() == 1
                && node
                    .children
                    .first()
                    .and_then(MathDomNode::as_text_node)
                    .is_some_and(|t| t.text == ".")
        }
        MathNodeType::Mo => {
            node.children.len() == 1
                && node.attributes.get("separator").is_some_and(|s| s == "true")
                && node.attributes.get("lspace").is_some_and(|s| s == "0em")
                && node.attributes.get("rspace").is_some_and(|s| s == "0em")
                && node
                    .children
                    .first()
                    .and_then(MathDomNode::as_text_node)
                    .is_some_and(|t| t.text == ",")
        }
        _ => false,
    }
}

/// Build a list of parse nodes into MathML, concatenating adjacent runs
/// (`<mtext>`s with equal variants, `<mn>`s, numbers with their punctuation,
/// and `\not` with the symbol it negates).
pub fn build_expression(
    ctx: &MathTexContext,
    expression: &[AnyParseNode],
    options: &Options,
    is_ordgroup: bool,
) -> Result<Vec<MathDomNode>, ParseError> {
    if expression.is_empty() {
        return Ok(Vec::new());
    }

    if expression.len() == 1 {
        let group = build_group(ctx, &expression[0], options)?;
        if let Some(math_node) = group.as_math_node()
            && is_ordgroup
            && math_node.node_type == MathNodeType::Mo
        {
            // Suppress operator spacing inside ordgroups.
            let mut new_node = math_node.clone();
            new_node.set_attribute("lspace", "0em");
            new_node.set_attribute("rspace", "0em");
            return Ok(vec![new_node.into()]);
        }
        return Ok(vec![group]);
    }

    let mut out: Vec<MathDomNode> = Vec::with_capacity(expression.len());
    for node in expression {
        let group = build_group(ctx, node, options)?;

        let replacement = if let (Some(last), Some(current)) = (
            out.last().and_then(MathDomNode::as_math_node),
            group.as_math_node(),
        ) {
            merge_adjacent(last, current)
        } else {
            None
        };

        if let Some(merged) = replacement {
            out.pop();
            out.push(merged.into());
        } else {
            out.push(group);
        }
    }

    Ok(out)
}

fn merge_adjacent(last: &MathNode, current: &MathNode) -> Option<MathNode> {
    // <mtext> + <mtext> with matching variants.
    if current.node_type == MathNodeType::Mtext
        && last.node_type == MathNodeType::Mtext
        && current.attributes.get("mathvariant") == last.attributes.get("mathvariant")
    {
        let mut merged = last.clone();
        merged.children.extend(current.children.clone());
        return Some(merged);
    }
    // <mn> + <mn> / <mn> + number punctuation.
    if last.node_type == MathNodeType::Mn
        && (current.node_type == MathNodeType::Mn || is_number_punctuation(current))
    {
        let mut merged = last.clone();
        merged.children.extend(current.children.clone());
        return Some(merged);
    }
    // number punctuation + <mn>.
    if current.node_type == MathNodeType::Mn && is_number_punctuation(last) {
        let mut merged = current.clone();
        merged.children = last
            .children
            .iter()
            .chain(current.children.iter())
            .cloned()
            .collect();
        return Some(merged);
    }
    // <msup>/<msub> whose base is an <mn>, preceded by an <mn>.
    if matches!(current.node_type, MathNodeType::Msup | MathNodeType::Msub)
        && (last.node_type == MathNodeType::Mn || is_number_punctuation(last))
        && let Some(base) = current.children.first().and_then(MathDomNode::as_math_node)
        && base.node_type == MathNodeType::Mn
    {
        let mut new_base = base.clone();
        new_base.children = last
            .children
            .iter()
            .chain(base.children.iter())
            .cloned()
            .collect();
        let mut merged = current.clone();
        merged.children[0] = new_base.into();
        return Some(merged);
    }
    // \not (combining long solidus) folds into the following symbol.
    if last.node_type == MathNodeType::Mi
        && last.children.len() == 1
        && last
            .children
            .first()
            .and_then(MathDomNode::as_text_node)
            .is_some_and(|t| t.text == "\u{0338}")
        && matches!(
            current.node_type,
            MathNodeType::Mo | MathNodeType::Mi | MathNodeType::Mn
        )
        && let Some(text) = current.children.first().and_then(MathDomNode::as_text_node)
        && let Some(first) = text.text.chars().next()
    {
        let mut new_text = text.text.clone();
        new_text.insert(first.len_utf8(), '\u{0338}');
        let mut merged = current.clone();
        merged.children[0] = TextNode { text: new_text }.into();
        return Some(merged);
    }
    None
}

/// Build a list of parse nodes into a single MathML node, grouped by
/// `<mrow>` when needed.
pub fn build_expression_row(
    ctx: &MathTexContext,
    expression: &[AnyParseNode],
    options: &Options,
    is_ordgroup: bool,
) -> Result<MathDomNode, ParseError> {
    let body = build_expression(ctx, expression, options, is_ordgroup)?;
    Ok(make_row(&body))
}

/// Build one parse node via its registered MathML builder.
pub fn build_group(
    ctx: &MathTexContext,
    group: &AnyParseNode,
    options: &Options,
) -> Result<MathDomNode, ParseError> {
    let group_type = group.discriminant();
    let Some(builder) = ctx.mathml_group_builders.get(&group_type) else {
        return Err(ParseError::new(ParseErrorKind::UnknownGroupType {
            group_type,
        }));
    };
    builder(group, options, ctx)
}

/// Build the full MathML output: `<math>` root with `<semantics>` and the
/// original source as an `<annotation>`, wrapped in a styling span.
pub fn build_mathml(
    ctx: &MathTexContext,
    tree: &[AnyParseNode],
    tex_expression: &str,
    options: &Options,
    is_display_mode: bool,
    for_mathml_only: bool,
) -> Result<DomSpan, ParseError> {
    let expression = build_expression(ctx, tree, options, false)?;

    let wrapper: MathDomNode = if expression.len() == 1
        && expression[0]
            .as_math_node()
            .is_some_and(|n| matches!(n.node_type, MathNodeType::Mrow | MathNodeType::Mtable))
    {
        expression.into_iter().next().unwrap_or_else(|| {
            MathNode::with_children(MathNodeType::Mrow, Vec::new()).into()
        })
    } else {
        MathNode::with_children(MathNodeType::Mrow, expression).into()
    };

    let mut annotation = MathNode::with_children(
        MathNodeType::Annotation,
        vec![
            TextNode {
                text: tex_expression.to_owned(),
            }
            .into(),
        ],
    );
    annotation.set_attribute("encoding", "application/x-tex");

    let semantics =
        MathNode::with_children(MathNodeType::Semantics, vec![wrapper, annotation.into()]);

    let mut math = MathNode::with_children(MathNodeType::Math, vec![semantics.into()]);
    math.set_attribute("xmlns", "http://www.w3.org/1998/Math/MathML");
    if is_display_mode {
        math.set_attribute("display", "block");
    }

    // The wrapper class lets the CSS hide the MathML when HTML rendering is
    // also present.
    let wrapper_class = if for_mathml_only {
        "katex"
    } else {
        "katex-mathml"
    };

    Ok(make_span(
        vec![wrapper_class.to_owned()],
        vec![HtmlDomNode::MathML(math)],
        None,
        None,
    ))
}

/// Shared helper for symbol mathml builders: mi/mn/mo with default-variant
/// suppression.
pub fn make_symbol_node(
    ctx: &MathTexContext,
    group: &AnyParseNode,
    options: &Options,
    node_type: MathNodeType,
) -> Result<MathNode, ParseError> {
    let text = group.text().unwrap_or_default();
    let mut node = MathNode::with_children(
        node_type,
        vec![make_text(text, group.mode(), Some(options), &ctx.symbols).into()],
    );
    let variant = get_variant(ctx, group, options)?;
    match node_type {
        MathNodeType::Mi => {
            // mi defaults to italic; anything else must be spelled out.
            if let Some(variant) = variant {
                if variant != "italic" {
                    node.set_attribute("mathvariant", variant);
                }
            } else if text.chars().count() > 1 {
                node.set_attribute("mathvariant", "normal");
            }
        }
        _ => {
            if let Some(variant) = variant
                && variant != "normal"
            {
                node.set_attribute("mathvariant", variant);
            }
        }
    }
    Ok(node)
}

/// An `mstyle` wrapper setting `mathcolor`.
#[must_use]
pub fn make_color_row(color: &str, children: Vec<MathDomNode>) -> MathNode {
    let mut node = MathNode::with_children(MathNodeType::Mstyle, children);
    let mut attributes = KeyMap::default();
    attributes.insert("mathcolor".to_owned(), color.to_owned());
    node.attributes = attributes;
    node
}
