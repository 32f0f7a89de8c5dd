//! Line breaks: `\\` and `\newline`.

use crate::build_common::make_span;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::macros::MacroContextInterface as _;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{CssProperty, ParseError};
use crate::units::make_em;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Cr(group) = node else {
        return Err(ParseError::new("Expected Cr node"));
    };
    if !group.newline {
        // Row-ending \\ inside arrays never reaches the builders.
        return Err(ParseError::new(
            "\\\\ valid only within array environment; please report this as a bug",
        ));
    }
    let mut span = make_span(
        vec!["mspace".to_owned(), "newline".to_owned()],
        vec![],
        Some(options),
        None,
    );
    if let Some(size) = &group.size {
        let size = ctx.calculate_size(size, options)?;
        span.style.insert(CssProperty::MarginTop, make_em(size));
    }
    Ok(span.into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Cr(group) = node else {
        return Err(ParseError::new("Expected Cr node"));
    };
    let mut mspace = MathNode::with_children(MathNodeType::Mspace, vec![]);
    mspace.set_attribute("linebreak", "newline");
    if let Some(size) = &group.size {
        let size = ctx.calculate_size(size, options)?;
        mspace.set_attribute("height", make_em(size));
    }
    Ok(mspace.into())
}

/// Register the break commands.
pub fn define_cr(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Cr),
        names: &["\\\\"],
        props: FunctionPropSpec {
            num_optional_args: 0,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            // An optional [dim] follows when the next token opens a bracket.
            let size = if context.parser.gullet.future_mut()?.text == "[" {
                context.parser.parse_size_group(true)?.map(|s| s.value)
            } else {
                None
            };
            let newline = !context.parser.settings.display_mode
                || !context.parser.settings.use_strict_behavior(
                    "newLineInDisplayMode",
                    "In LaTeX, \\\\ or \\newline does nothing in display mode",
                    None,
                );
            Ok(ParseNode::Cr(parse_node::ParseNodeCr {
                mode: context.parser.mode,
                loc: context.loc(),
                newline,
                size,
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Cr),
        names: &["\\newline"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            let newline = !context.parser.settings.display_mode
                || !context.parser.settings.use_strict_behavior(
                    "newLineInDisplayMode",
                    "In LaTeX, \\\\ or \\newline does nothing in display mode",
                    None,
                );
            Ok(ParseNode::Cr(parse_node::ParseNodeCr {
                mode: context.parser.mode,
                loc: context.loc(),
                newline,
                size: None,
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
