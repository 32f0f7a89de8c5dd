//! Builders for explicit spacing symbols (`\ `, `~`, `\nobreak`,
//! `\allowbreak`).

use crate::build_common::{make_ord, make_span};
use crate::context::MathTexContext;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType, TextNode};
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::types::{Mode, ParseError, ParseErrorKind};
use phf::{Map, phf_map};

/// Spacing commands that render as a regular space glyph.
const REGULAR_SPACE: Map<&str, &str> = phf_map! {
    " " => "mspace",
    "\\ " => "mspace",
    "~" => "nobreak",
    "\\space" => "nobreak",
    "\\nobreakspace" => "nobreak",
};

/// Zero-width spacing controls.
const ZERO_SPACE: Map<&str, &str> = phf_map! {
    "\\nobreak" => "nobreak",
    "\\allowbreak" => "allowbreak",
};

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Spacing(spacing) = node else {
        return Err(ParseError::new("Expected Spacing node"));
    };

    if let Some(extra_class) = REGULAR_SPACE.get(spacing.text.as_str()) {
        // A real space glyph, so the box has width.
        if spacing.mode == Mode::Text {
            let ord = make_ord(ctx, node, options)?;
            let mut classes = vec!["mspace".to_owned()];
            if *extra_class != "mspace" {
                classes.push((*extra_class).to_owned());
            }
            return Ok(make_span(classes, vec![ord], Some(options), None).into());
        }
        let mut classes = vec!["mspace".to_owned()];
        if *extra_class != "mspace" {
            classes.push((*extra_class).to_owned());
        }
        let symbol = crate::build_common::make_symbol(
            ctx,
            "\u{00a0}",
            "Main-Regular",
            spacing.mode,
            Some(options),
            None,
        )?;
        return Ok(make_span(classes, vec![symbol.into()], Some(options), None).into());
    }

    if let Some(class) = ZERO_SPACE.get(spacing.text.as_str()) {
        return Ok(make_span(
            vec!["mspace".to_owned(), (*class).to_owned()],
            vec![],
            Some(options),
            None,
        )
        .into());
    }

    Err(ParseError::new(ParseErrorKind::UnknownGroupType {
        group_type: NodeType::Spacing,
    }))
}

fn mathml_builder(
    node: &ParseNode,
    _options: &Options,
    _ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Spacing(spacing) = node else {
        return Err(ParseError::new("Expected Spacing node"));
    };
    if REGULAR_SPACE.contains_key(spacing.text.as_str()) {
        return Ok(MathNode::with_children(
            MathNodeType::Mtext,
            vec![
                TextNode {
                    text: "\u{00a0}".to_owned(),
                }
                .into(),
            ],
        )
        .into());
    }
    // Zero-width controls become empty <mspace>.
    Ok(MathNode::with_children(MathNodeType::Mspace, vec![]).into())
}

/// Register the spacing-symbol builders.
pub fn define_spacing(ctx: &mut MathTexContext) {
    ctx.define_function_builders(NodeType::Spacing, Some(html_builder), Some(mathml_builder));
}
