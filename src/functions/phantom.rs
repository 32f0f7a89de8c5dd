//! Invisible boxes: `\phantom`, `\hphantom`, `\vphantom`.

use crate::build_common::{VListElem, VListParam, make_fragment, make_span, make_v_list};
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::ParseError;

fn phantom_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Phantom(group) = node else {
        return Err(ParseError::new("Expected Phantom node"));
    };
    let elements = build_html::build_expression(
        ctx,
        &group.body,
        &options.with_phantom(),
        GroupType::False,
        (None, None),
    )?;
    Ok(make_fragment(&elements).into())
}

fn phantom_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Phantom(group) = node else {
        return Err(ParseError::new("Expected Phantom node"));
    };
    let children = build_mathml::build_expression(ctx, &group.body, options, false)?;
    Ok(MathNode::with_children(MathNodeType::Mphantom, children).into())
}

fn hphantom_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Hphantom(group) = node else {
        return Err(ParseError::new("Expected Hphantom node"));
    };
    let mut node =
        build_html::build_group(ctx, &group.body, &options.with_phantom(), None)?;
    // Keep the width; zero the vertical extent.
    if let Some(height) = node.height_mut() {
        *height = 0.0;
    }
    if let Some(depth) = node.depth_mut() {
        *depth = 0.0;
    }
    if let HtmlDomNode::DomSpan(span) = &mut node {
        for child in &mut span.children {
            if let Some(height) = child.height_mut() {
                *height = 0.0;
            }
            if let Some(depth) = child.depth_mut() {
                *depth = 0.0;
            }
        }
    }
    let vlist = make_v_list(
        VListParam::FirstBaseline {
            children: vec![VListElem::builder().elem(node).build().into()],
        },
        options,
    )?;
    Ok(make_span(vec!["mord".to_owned()], vec![vlist.into()], Some(options), None).into())
}

fn hphantom_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Hphantom(group) = node else {
        return Err(ParseError::new("Expected Hphantom node"));
    };
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    let phantom = MathNode::with_children(MathNodeType::Mphantom, vec![body]);
    let mut mpadded = MathNode::with_children(MathNodeType::Mpadded, vec![phantom.into()]);
    mpadded.set_attribute("height", "0px");
    mpadded.set_attribute("depth", "0px");
    Ok(mpadded.into())
}

fn vphantom_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Vphantom(group) = node else {
        return Err(ParseError::new("Expected Vphantom node"));
    };
    let body = build_html::build_group(ctx, &group.body, &options.with_phantom(), None)?;
    let inner = make_span(vec!["inner".to_owned()], vec![body], Some(options), None);
    let fix = make_span(vec!["fix".to_owned()], vec![], None, None);
    Ok(make_span(
        vec!["mord".to_owned(), "rlap".to_owned()],
        vec![inner.into(), fix.into()],
        Some(options),
        None,
    )
    .into())
}

fn vphantom_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Vphantom(group) = node else {
        return Err(ParseError::new("Expected Vphantom node"));
    };
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    let phantom = MathNode::with_children(MathNodeType::Mphantom, vec![body]);
    let mut mpadded = MathNode::with_children(MathNodeType::Mpadded, vec![phantom.into()]);
    mpadded.set_attribute("width", "0px");
    Ok(mpadded.into())
}

/// Register the phantom commands.
pub fn define_phantom(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Phantom),
        names: &["\\phantom"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Phantom(parse_node::ParseNodePhantom {
                mode: context.parser.mode,
                loc: context.loc(),
                body: ord_argument(&args[0]),
            }))
        }),
        html_builder: Some(phantom_html),
        mathml_builder: Some(phantom_mathml),
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Hphantom),
        names: &["\\hphantom"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Hphantom(parse_node::ParseNodeHphantom {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: Some(hphantom_html),
        mathml_builder: Some(hphantom_mathml),
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Vphantom),
        names: &["\\vphantom"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Vphantom(parse_node::ParseNodeVphantom {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: Some(vphantom_html),
        mathml_builder: Some(vphantom_mathml),
    });
}
