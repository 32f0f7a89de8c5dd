//! `\vcenter`: center a box on the math axis.

use crate::build_common::{VListElem, VListParam, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, ParseError};

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Vcenter(group) = node else {
        return Err(ParseError::new("Expected Vcenter node"));
    };
    let body = build_html::build_group(ctx, &group.body, options, None)?;
    let axis_height = options.font_metrics().axis_height;
    let dy = 0.5 * ((body.height() - axis_height) - (body.depth() + axis_height));
    let vlist = make_v_list(
        VListParam::Shift {
            position_data: dy,
            children: vec![VListElem::builder().elem(body).build().into()],
        },
        options,
    )?;
    Ok(make_span(vec!["mord".to_owned()], vec![vlist.into()], Some(options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Vcenter(group) = node else {
        return Err(ParseError::new("Expected Vcenter node"));
    };
    // MathML has no direct equivalent; mpadded is the common approximation.
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    Ok(MathNode::with_children(MathNodeType::Mpadded, vec![body]).into())
}

/// Register `\vcenter`.
pub fn define_vcenter(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Vcenter),
        names: &["\\vcenter"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Original]),
            allowed_in_argument: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Vcenter(parse_node::ParseNodeVcenter {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
