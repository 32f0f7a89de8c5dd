//! `\raisebox{dy}{text}`.

use crate::build_common::{VListElem, VListParam, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, ParseError};
use crate::units::make_em;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Raisebox(group) = node else {
        return Err(ParseError::new("Expected Raisebox node"));
    };
    let body = build_html::build_group(ctx, &group.body, options, None)?;
    let dy = ctx.calculate_size(&group.dy, options)?;
    let vlist = make_v_list(
        VListParam::Shift {
            position_data: -dy,
            children: vec![VListElem::builder().elem(body).build().into()],
        },
        options,
    )?;
    Ok(vlist.into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Raisebox(group) = node else {
        return Err(ParseError::new("Expected Raisebox node"));
    };
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    let dy = ctx.calculate_size(&group.dy, options)?;
    let mut mpadded = MathNode::with_children(MathNodeType::Mpadded, vec![body]);
    mpadded.set_attribute("voffset", make_em(dy));
    Ok(mpadded.into())
}

/// Register `\raisebox`.
pub fn define_raisebox(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Raisebox),
        names: &["\\raisebox"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: Some(vec![ArgType::Size, ArgType::Hbox]),
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Size(size) = &args[0] else {
                return Err(ParseError::new("Expected size argument"));
            };
            Ok(ParseNode::Raisebox(parse_node::ParseNodeRaisebox {
                mode: context.parser.mode,
                loc: context.loc(),
                dy: size.value.clone(),
                body: Box::new(args[1].clone()),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
