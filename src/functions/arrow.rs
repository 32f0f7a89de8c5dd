//! Extensible arrows with labels above/below (`\xrightarrow[g]{f}`).

use crate::build_common::{VListElemAndShift, VListParam, make_span, make_v_list};
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

const ARROW_NAMES: &[&str] = &[
    "\\xleftarrow",
    "\\xrightarrow",
    "\\xLeftarrow",
    "\\xRightarrow",
    "\\xleftrightarrow",
    "\\xLeftrightarrow",
    "\\xhookleftarrow",
    "\\xhookrightarrow",
    "\\xmapsto",
    "\\xrightharpoondown",
    "\\xrightharpoonup",
    "\\xleftharpoondown",
    "\\xleftharpoonup",
    "\\xrightleftharpoons",
    "\\xleftrightharpoons",
    "\\xlongequal",
    "\\xtwoheadrightarrow",
    "\\xtwoheadleftarrow",
    "\\xtofrom",
];

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::XArrow(group) = node else {
        return Err(ParseError::new("Expected XArrow node"));
    };
    let style = options.style;

    // Build the label(s) in script style.
    let mut new_options = options.having_style(style.sup());
    let upper_group = {
        let built = build_html::build_group(ctx, &group.body, &new_options, Some(options))?;
        make_span(
            vec!["x-arrow-pad".to_owned()],
            vec![built],
            Some(options),
            None,
        )
    };

    let lower_group = group
        .below
        .as_deref()
        .map(|below| {
            new_options = options.having_style(style.sub());
            let built = build_html::build_group(ctx, below, &new_options, Some(options))?;
            Ok::<_, ParseError>(make_span(
                vec!["x-arrow-pad".to_owned()],
                vec![built],
                Some(options),
                None,
            ))
        })
        .transpose()?;

    let arrow_body = stretchy::svg_span(node, options)?;
    let arrow_body_height = arrow_body.height();

    // Arrow sits on the axis; labels ride above and below.
    let arrow_shift = -options.font_metrics().axis_height - 0.5 * arrow_body_height;
    let upper_shift = arrow_shift - 0.111 - upper_group.depth - arrow_body_height;

    let mut children = vec![
        VListElemAndShift::builder()
            .elem(upper_group.into())
            .shift(upper_shift)
            .build(),
        VListElemAndShift::builder()
            .elem(arrow_body)
            .shift(arrow_shift)
            .build(),
    ];
    if let Some(lower) = lower_group {
        let lower_shift = -options.font_metrics().axis_height
            + 0.5 * arrow_body_height
            + lower.height
            + 0.111;
        children.push(
            VListElemAndShift::builder()
                .elem(lower.into())
                .shift(lower_shift)
                .build(),
        );
    }

    let vlist = make_v_list(VListParam::IndividualShift { children }, options)?;
    Ok(make_span(
        vec!["mrel".to_owned(), "x-arrow".to_owned()],
        vec![vlist.into()],
        Some(options),
        None,
    )
    .into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::XArrow(group) = node else {
        return Err(ParseError::new("Expected XArrow node"));
    };
    let arrow = stretchy::math_ml_node(&group.label);

    let upper = build_mathml::build_group(ctx, &group.body, options)?;
    let node: MathNode = if let Some(below) = group.below.as_deref() {
        let lower = build_mathml::build_group(ctx, below, options)?;
        MathNode::with_children(MathNodeType::Munderover, vec![arrow.into(), lower, upper])
    } else {
        MathNode::with_children(MathNodeType::Mover, vec![arrow.into(), upper])
    };
    Ok(node.into())
}

/// Register the extensible arrows.
pub fn define_arrow(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::XArrow),
        names: ARROW_NAMES,
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, opt_args| {
            Ok(ParseNode::XArrow(parse_node::ParseNodeXArrow {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                body: Box::new(args[0].clone()),
                below: opt_args.first().and_then(Clone::clone).map(Box::new),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
