//! `\smash[tb]{...}`: discard height and/or depth.

use crate::build_common::{VListElem, VListParam, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::ParseError;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Smash(group) = node else {
        return Err(ParseError::new("Expected Smash node"));
    };
    let mut body = build_html::build_group(ctx, &group.body, options, None)?;

    if group.smash_height {
        if let Some(height) = body.height_mut() {
            *height = 0.0;
        }
        if let HtmlDomNode::DomSpan(span) = &mut body {
            for child in &mut span.children {
                if let Some(height) = child.height_mut() {
                    *height = 0.0;
                }
            }
        }
    }
    if group.smash_depth {
        if let Some(depth) = body.depth_mut() {
            *depth = 0.0;
        }
        if let HtmlDomNode::DomSpan(span) = &mut body {
            for child in &mut span.children {
                if let Some(depth) = child.depth_mut() {
                    *depth = 0.0;
                }
            }
        }
    }

    // The vlist re-seats the smashed box so struts see the new extents.
    let vlist = make_v_list(
        VListParam::FirstBaseline {
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
    let ParseNode::Smash(group) = node else {
        return Err(ParseError::new("Expected Smash node"));
    };
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    let mut mpadded = MathNode::with_children(MathNodeType::Mpadded, vec![body]);
    if group.smash_height {
        mpadded.set_attribute("height", "0px");
    }
    if group.smash_depth {
        mpadded.set_attribute("depth", "0px");
    }
    Ok(mpadded.into())
}

/// Register `\smash`.
pub fn define_smash(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Smash),
        names: &["\\smash"],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, opt_args| {
            let mut smash_height = false;
            let mut smash_depth = false;
            if let Some(Some(opt)) = opt_args.first() {
                // [t], [b], or [tb].
                let letters: Vec<&ParseNode> = match opt {
                    ParseNode::OrdGroup(ord) => ord.body.iter().collect(),
                    other => vec![other],
                };
                for letter in letters {
                    match letter.text() {
                        Some("t") => smash_height = true,
                        Some("b") => smash_depth = true,
                        _ => {
                            smash_height = false;
                            smash_depth = false;
                            break;
                        }
                    }
                }
            } else {
                smash_height = true;
                smash_depth = true;
            }
            Ok(ParseNode::Smash(parse_node::ParseNodeSmash {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(args[0].clone()),
                smash_height,
                smash_depth,
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
