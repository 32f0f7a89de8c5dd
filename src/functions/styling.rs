//! Style switches: `\displaystyle`, `\textstyle`, `\scriptstyle`,
//! `\scriptscriptstyle`.

use crate::build_common::make_span;
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::style::{DISPLAY, SCRIPT, SCRIPTSCRIPT, TEXT};
use crate::types::ParseError;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Styling(group) = node else {
        return Err(ParseError::new("Expected Styling node"));
    };
    // Styling changes the style but not the current size.
    let new_options = options.having_style(group.style);
    let inner =
        build_html::build_expression(ctx, &group.body, &new_options, GroupType::False, (None, None))?;
    let mut classes = vec!["mord".to_owned()];
    classes.extend(new_options.sizing_classes(options));
    let mut span = make_span(classes, inner, Some(&new_options), None);
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
    let ParseNode::Styling(group) = node else {
        return Err(ParseError::new("Expected Styling node"));
    };
    let new_options = options.having_style(group.style);
    let children = build_mathml::build_expression(ctx, &group.body, &new_options, false)?;
    let mut mstyle = MathNode::with_children(MathNodeType::Mstyle, children);
    let (script_level, display_style) = match group.style.size {
        0 => ("0", "true"),
        1 => ("0", "false"),
        2 => ("1", "false"),
        _ => ("2", "false"),
    };
    mstyle.set_attribute("scriptlevel", script_level);
    mstyle.set_attribute("displaystyle", display_style);
    Ok(mstyle.into())
}

/// Register the style-switch commands.
pub fn define_styling(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Styling),
        names: &[
            "\\displaystyle",
            "\\textstyle",
            "\\scriptstyle",
            "\\scriptscriptstyle",
        ],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            let style = match context.func_name.as_str() {
                "\\displaystyle" => DISPLAY,
                "\\textstyle" => TEXT,
                "\\scriptstyle" => SCRIPT,
                _ => SCRIPTSCRIPT,
            };
            let body = context
                .parser
                .parse_expression(true, context.break_on_token_text)?;
            Ok(ParseNode::Styling(parse_node::ParseNodeStyling {
                mode: context.parser.mode,
                loc: context.loc(),
                style,
                body,
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
