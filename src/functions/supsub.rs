//! Super/subscript attachment (TeXbook rules 18a–18f).

use crate::build_common::{VListElem, VListElemAndShift, VListParam, make_span, make_v_list};
use crate::build_html::{self, DomType, get_type_of_dom_tree};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::dom_tree::HtmlDomNode;
use crate::functions::op::op_handles_sup_sub;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::style::DISPLAY;
use crate::types::ParseError;
use crate::units::make_em;

fn operatorname_handles_sup_sub(node: &ParseNode) -> bool {
    matches!(node, ParseNode::OperatorName(op) if op.always_handle_sup_sub)
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::SupSub(group) = node else {
        return Err(ParseError::new("Expected SupSub node"));
    };

    // Operators with limits place their own scripts, as do horizontal
    // braces with a script on the brace side.
    if let Some(base) = group.base.as_deref() {
        if op_handles_sup_sub(base, options.style) {
            return super::op::html_builder(node, options, ctx);
        }
        if operatorname_handles_sup_sub(base) {
            return super::operatorname::html_builder(node, options, ctx);
        }
        if let ParseNode::HorizBrace(brace) = base
            && brace.is_over == group.sup.is_some()
        {
            return super::horiz_brace::html_builder(node, options, ctx);
        }
    }

    let base = group
        .base
        .as_deref()
        .map(|b| build_html::build_group(ctx, b, options, None))
        .transpose()?
        .unwrap_or_else(|| make_span(vec![], vec![], Some(options), None).into());

    let metrics = options.font_metrics();
    let base_is_char = group
        .base
        .as_deref()
        .is_some_and(ParseNode::is_character_box);

    // Rule 18a: starting shifts from the base's extents.
    let (mut sup_shift, mut sub_shift) = if base_is_char {
        (0.0, 0.0)
    } else {
        let sup_options = options.having_style(options.style.sup());
        let sub_options = options.having_style(options.style.sub());
        (
            base.height() - metrics.sup_drop * sup_options.size_multiplier / options.size_multiplier,
            base.depth() + metrics.sub_drop * sub_options.size_multiplier / options.size_multiplier,
        )
    };

    // Rule 18c: the minimum superscript shift.
    let min_sup_shift = if options.style.id == DISPLAY.id {
        metrics.sup1
    } else if options.style.cramped {
        metrics.sup3
    } else {
        metrics.sup2
    };

    // Script horizontal padding (the "scriptspace"), in ems.
    let margin_right = make_em(0.5 / metrics.pt_per_em / options.size_multiplier);

    // The subscript tucks under the italic correction of a symbol base.
    let margin_left = if let HtmlDomNode::DomSpan(span) = &base {
        span.italic.map(|italic| make_em(-italic))
    } else {
        None
    };

    let sup = group
        .sup
        .as_deref()
        .map(|s| {
            build_html::build_group(ctx, s, &options.having_style(options.style.sup()), Some(options))
        })
        .transpose()?;
    let sub = group
        .sub
        .as_deref()
        .map(|s| {
            build_html::build_group(ctx, s, &options.having_style(options.style.sub()), Some(options))
        })
        .transpose()?;

    let supsub: HtmlDomNode = match (sup, sub) {
        (Some(sup), Some(sub)) => {
            // Rule 18e: keep 4 rule thicknesses between the scripts.
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth() + 0.25 * metrics.x_height);
            sub_shift = sub_shift.max(metrics.sub2);

            let rule_width = metrics.default_rule_thickness;
            let gap = (sup_shift - sup.depth()) - (sub.height() - sub_shift);
            if gap < 4.0 * rule_width {
                sub_shift = 4.0f64.mul_add(rule_width, -(sup_shift - sup.depth()) + sub.height());
                let psi = 0.8f64.mul_add(metrics.x_height, -(sup_shift - sup.depth()));
                if psi > 0.0 {
                    sup_shift += psi;
                    sub_shift -= psi;
                }
            }

            let children = vec![
                VListElemAndShift::builder()
                    .elem(sub)
                    .shift(sub_shift)
                    .maybe_margin_left(margin_left)
                    .margin_right(margin_right.clone())
                    .build(),
                VListElemAndShift::builder()
                    .elem(sup)
                    .shift(-sup_shift)
                    .margin_right(margin_right)
                    .build(),
            ];
            make_v_list(VListParam::IndividualShift { children }, options)?.into()
        }
        (None, Some(sub)) => {
            // Rule 18b.
            sub_shift = sub_shift
                .max(metrics.sub1)
                .max(sub.height() - 0.8 * metrics.x_height);

            let children = vec![
                VListElem::builder()
                    .elem(sub)
                    .maybe_margin_left(margin_left)
                    .margin_right(margin_right)
                    .build()
                    .into(),
            ];
            let mut vlist = make_v_list(
                VListParam::Shift {
                    position_data: sub_shift,
                    children,
                },
                options,
            )?;
            vlist.classes.push("msupsub".to_owned());
            vlist.into()
        }
        (Some(sup), None) => {
            // Rule 18c/d.
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(sup.depth() + 0.25 * metrics.x_height);

            let children = vec![
                VListElem::builder()
                    .elem(sup)
                    .margin_right(margin_right)
                    .build()
                    .into(),
            ];
            let mut vlist = make_v_list(
                VListParam::Shift {
                    position_data: -sup_shift,
                    children,
                },
                options,
            )?;
            vlist.classes.push("msupsub".to_owned());
            vlist.into()
        }
        (None, None) => {
            return Err(ParseError::new(
                "supsub must have either sup or sub; please report this as a bug",
            ));
        }
    };

    // The result takes the base's atom class so spacing still sees the base.
    let base_type = get_type_of_dom_tree(&base, None).map_or("mord", DomType::as_str);
    let mut supsub = supsub;
    if let HtmlDomNode::DomSpan(span) = &mut supsub
        && !span.classes.iter().any(|c| c == "msupsub")
    {
        span.classes.push("msupsub".to_owned());
    }

    Ok(make_span(
        vec![base_type.to_owned()],
        vec![base, supsub],
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
    let ParseNode::SupSub(group) = node else {
        return Err(ParseError::new("Expected SupSub node"));
    };

    let mut children = Vec::new();
    if let Some(base) = group.base.as_deref() {
        children.push(build_mathml::build_group(ctx, base, options)?);
    } else {
        children.push(MathNode::with_children(MathNodeType::Mrow, vec![]).into());
    }
    if let Some(sub) = group.sub.as_deref() {
        children.push(build_mathml::build_group(ctx, sub, options)?);
    }
    if let Some(sup) = group.sup.as_deref() {
        children.push(build_mathml::build_group(ctx, sup, options)?);
    }

    // Operators with limits use munder/mover instead of msub/msup.
    let use_under_over = group.base.as_deref().is_some_and(|base| {
        matches!(base, ParseNode::Op(op) if op.limits && options.style.id == DISPLAY.id)
    });

    let node_type = match (group.sub.is_some(), group.sup.is_some()) {
        (true, true) => {
            if use_under_over {
                MathNodeType::Munderover
            } else {
                MathNodeType::Msubsup
            }
        }
        (true, false) => {
            if use_under_over {
                MathNodeType::Munder
            } else {
                MathNodeType::Msub
            }
        }
        (false, true) => {
            if use_under_over {
                MathNodeType::Mover
            } else {
                MathNodeType::Msup
            }
        }
        (false, false) => MathNodeType::Mrow,
    };

    Ok(MathNode::with_children(node_type, children).into())
}

/// Register the supsub builders. The parser creates supsub nodes directly;
/// no control sequence maps here.
pub fn define_supsub(ctx: &mut MathTexContext) {
    ctx.define_function_builders(NodeType::SupSub, Some(html_builder), Some(mathml_builder));
}
