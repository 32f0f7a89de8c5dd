//! Atom class overrides: `\mathord`, `\mathbin`, `\mathrel`, `\mathopen`,
//! `\mathclose`, `\mathpunct`, `\mathinner`.

use crate::build_common::{make_span, try_combine_chars};
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::ParseError;

/// The mclass a wrapped binary/relation keeps: `\boldsymbol{+}` stays mbin.
#[must_use]
pub fn binrel_class(arg: &ParseNode) -> &'static str {
    // The argument's innermost element decides.
    let atom = if let ParseNode::OrdGroup(ord) = arg {
        ord.body.first().unwrap_or(arg)
    } else {
        arg
    };
    match atom {
        ParseNode::Atom(a) => match a.family {
            crate::symbols::Atom::Bin => "mbin",
            crate::symbols::Atom::Rel => "mrel",
            _ => "mord",
        },
        _ => "mord",
    }
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Mclass(group) = node else {
        return Err(ParseError::new("Expected Mclass node"));
    };
    let mut inner =
        build_html::build_expression(ctx, &group.body, options, GroupType::True, (None, None))?;
    try_combine_chars(&mut inner);
    Ok(make_span(vec![group.mclass.to_owned()], inner, Some(options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Mclass(group) = node else {
        return Err(ParseError::new("Expected Mclass node"));
    };
    let children = build_mathml::build_expression(ctx, &group.body, options, false)?;
    let mut node = match group.mclass {
        "minner" => MathNode::with_children(MathNodeType::Mpadded, children),
        "mord" => {
            if group.is_character_box {
                return Ok(children
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| MathNode::with_children(MathNodeType::Mrow, vec![]).into()));
            }
            MathNode::with_children(MathNodeType::Mi, children)
        }
        _ => {
            let mut mo = if group.is_character_box {
                match children.into_iter().next() {
                    Some(MathDomNode::Math(inner)) => {
                        let mut inner = inner;
                        inner.node_type = MathNodeType::Mo;
                        inner
                    }
                    Some(other) => MathNode::with_children(MathNodeType::Mo, vec![other]),
                    None => MathNode::with_children(MathNodeType::Mo, vec![]),
                }
            } else {
                MathNode::with_children(MathNodeType::Mo, children)
            };
            // Spacing hints per class.
            match group.mclass {
                "mbin" => {
                    mo.set_attribute("lspace", "0.22em");
                    mo.set_attribute("rspace", "0.22em");
                }
                "mpunct" => {
                    mo.set_attribute("lspace", "0em");
                    mo.set_attribute("rspace", "0.17em");
                }
                "mopen" | "mclose" => {
                    mo.set_attribute("lspace", "0em");
                    mo.set_attribute("rspace", "0em");
                }
                _ => {}
            }
            mo
        }
    };
    if group.mclass == "minner" {
        node.set_attribute("lspace", "0.3em");
        node.set_attribute("rspace", "0.3em");
    }
    Ok(node.into())
}

/// Register the class-override commands.
pub fn define_mclass(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Mclass),
        names: &[
            "\\mathord",
            "\\mathbin",
            "\\mathrel",
            "\\mathopen",
            "\\mathclose",
            "\\mathpunct",
            "\\mathinner",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let body = ord_argument(&args[0]);
            let mclass: &'static str = match context.func_name.as_str() {
                "\\mathord" => "mord",
                "\\mathbin" => "mbin",
                "\\mathrel" => "mrel",
                "\\mathopen" => "mopen",
                "\\mathclose" => "mclose",
                "\\mathpunct" => "mpunct",
                _ => "minner",
            };
            Ok(ParseNode::Mclass(parse_node::ParseNodeMclass {
                mode: context.parser.mode,
                loc: context.loc(),
                mclass,
                is_character_box: args[0].is_character_box(),
                body,
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
