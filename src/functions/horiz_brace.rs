//! `\overbrace` and `\underbrace`.

use crate::build_common::{VListChild, VListElem, VListKern, VListParam, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::stretchy;
use crate::types::ParseError;

/// Shared with supsub: a braced base with optional scripts stacked on the
/// brace side.
pub(super) fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let (group, sup, sub) = match node {
        ParseNode::HorizBrace(group) => (group, None, None),
        ParseNode::SupSub(supsub) => {
            let Some(ParseNode::HorizBrace(group)) = supsub.base.as_deref() else {
                return Err(ParseError::new("Expected HorizBrace node as supsub base"));
            };
            (group, supsub.sup.as_deref(), supsub.sub.as_deref())
        }
        _ => return Err(ParseError::new("Expected HorizBrace node")),
    };

    let style = options.style;
    let body = build_html::build_group(ctx, &group.base, options, None)?;
    let brace = stretchy::svg_span(&ParseNode::HorizBrace(group.clone()), options)?;

    let vlist = if group.is_over {
        make_v_list(
            VListParam::FirstBaseline {
                children: vec![
                    VListElem::builder().elem(body).build().into(),
                    VListChild::Kern(VListKern { size: 0.1 }),
                    VListElem::builder()
                        .elem(brace)
                        .wrapper_classes(vec!["svg-align".to_owned()])
                        .build()
                        .into(),
                ],
            },
            options,
        )?
    } else {
        let body_height = body.height();
        make_v_list(
            VListParam::Top {
                position_data: body_height,
                children: vec![
                    VListElem::builder()
                        .elem(brace)
                        .wrapper_classes(vec!["svg-align".to_owned()])
                        .build()
                        .into(),
                    VListChild::Kern(VListKern { size: 0.1 }),
                    VListElem::builder().elem(body).build().into(),
                ],
            },
            options,
        )?
    };

    let base: HtmlDomNode = make_span(
        vec![
            "mord".to_owned(),
            if group.is_over { "mover" } else { "munder" }.to_owned(),
        ],
        vec![vlist.into()],
        Some(options),
        None,
    )
    .into();

    // An attached script stacks beyond the brace.
    let script = if group.is_over { sup } else { sub };
    if let Some(script) = script {
        let script_html = build_html::build_group(
            ctx,
            script,
            &options.having_style(if group.is_over {
                style.sup()
            } else {
                style.sub()
            }),
            Some(options),
        )?;
        let vlist = if group.is_over {
            make_v_list(
                VListParam::FirstBaseline {
                    children: vec![
                        VListElem::builder().elem(base).build().into(),
                        VListChild::Kern(VListKern { size: 0.2 }),
                        VListElem::builder().elem(script_html).build().into(),
                    ],
                },
                options,
            )?
        } else {
            let base_height = base.height();
            make_v_list(
                VListParam::Top {
                    position_data: base_height,
                    children: vec![
                        VListElem::builder().elem(script_html).build().into(),
                        VListChild::Kern(VListKern { size: 0.2 }),
                        VListElem::builder().elem(base).build().into(),
                    ],
                },
                options,
            )?
        };
        return Ok(make_span(
            vec!["mord".to_owned()],
            vec![vlist.into()],
            Some(options),
            None,
        )
        .into());
    }

    Ok(base)
}

pub(super) fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::HorizBrace(group) = node else {
        return Err(ParseError::new("Expected HorizBrace node"));
    };
    let brace = stretchy::math_ml_node(&group.label);
    let base = build_mathml::build_group(ctx, &group.base, options)?;
    let node_type = if group.is_over {
        MathNodeType::Mover
    } else {
        MathNodeType::Munder
    };
    Ok(MathNode::with_children(node_type, vec![base, brace.into()]).into())
}

/// Register the horizontal braces.
pub fn define_horiz_brace(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::HorizBrace),
        names: &["\\overbrace", "\\underbrace"],
        props: FunctionPropSpec::with_num_args(1),
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::HorizBrace(parse_node::ParseNodeHorizBrace {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                is_over: context.func_name.starts_with("\\over"),
                base: Box::new(args[0].clone()),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
