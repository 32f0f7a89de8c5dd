//! `\mathchoice{D}{T}{S}{SS}`: one rendering per math style.

use crate::build_common::{make_fragment, try_combine_chars};
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::MathDomNode;
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::style::{DISPLAY, SCRIPT, TEXT};
use crate::types::ParseError;

fn choose_body<'a>(
    group: &'a parse_node::ParseNodeMathChoice,
    options: &Options,
) -> &'a [ParseNode] {
    if options.style.size == DISPLAY.size {
        &group.display
    } else if options.style.size == TEXT.size {
        &group.text
    } else if options.style.size == SCRIPT.size {
        &group.script
    } else {
        &group.scriptscript
    }
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::MathChoice(group) = node else {
        return Err(ParseError::new("Expected MathChoice node"));
    };
    let body = choose_body(group, options);
    let mut elements =
        build_html::build_expression(ctx, body, options, GroupType::False, (None, None))?;
    try_combine_chars(&mut elements);
    Ok(make_fragment(&elements).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::MathChoice(group) = node else {
        return Err(ParseError::new("Expected MathChoice node"));
    };
    build_mathml::build_expression_row(ctx, choose_body(group, options), options, false)
}

/// Register `\mathchoice`.
pub fn define_mathchoice(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::MathChoice),
        names: &["\\mathchoice"],
        props: FunctionPropSpec {
            num_args: 4,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::MathChoice(parse_node::ParseNodeMathChoice {
                mode: context.parser.mode,
                loc: context.loc(),
                display: ord_argument(&args[0]),
                text: ord_argument(&args[1]),
                script: ord_argument(&args[2]),
                scriptscript: ord_argument(&args[3]),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
