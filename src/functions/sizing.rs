//! Size commands: `\tiny` … `\Huge`.

use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::ParseError;
use crate::units::make_em;

const SIZE_FUNCS: &[&str] = &[
    "\\tiny",
    "\\sixptsize",
    "\\scriptsize",
    "\\footnotesize",
    "\\small",
    "\\normalsize",
    "\\large",
    "\\Large",
    "\\LARGE",
    "\\huge",
    "\\Huge",
];

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Sizing(group) = node else {
        return Err(ParseError::new("Expected Sizing node"));
    };
    let new_options = options.having_size(group.size);
    // The wrapping sizing span is added by build_group's base-options path;
    // here the whole expression is rebuilt at the new size.
    let inner =
        build_html::build_expression(ctx, &group.body, &new_options, GroupType::False, (None, None))?;
    let mut span = crate::build_common::make_span(
        new_options.sizing_classes(options),
        inner,
        Some(&new_options),
        None,
    );
    let multiplier = new_options.size_multiplier / options.size_multiplier;
    span.height *= multiplier;
    span.depth *= multiplier;
    Ok(span.into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Sizing(group) = node else {
        return Err(ParseError::new("Expected Sizing node"));
    };
    let new_options = options.having_size(group.size);
    let children = build_mathml::build_expression(ctx, &group.body, &new_options, false)?;
    let mut mstyle = MathNode::with_children(MathNodeType::Mstyle, children);
    mstyle.set_attribute("mathsize", make_em(new_options.size_multiplier));
    Ok(mstyle.into())
}

/// Register the size commands.
pub fn define_sizing(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Sizing),
        names: SIZE_FUNCS,
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            let size = SIZE_FUNCS
                .iter()
                .position(|name| *name == context.func_name)
                .map_or(Options::BASESIZE, |i| i + 1);
            let body = context
                .parser
                .parse_expression(false, context.break_on_token_text)?;
            Ok(ParseNode::Sizing(parse_node::ParseNodeSizing {
                mode: context.parser.mode,
                loc: context.loc(),
                size,
                body,
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
