//! `\rule[shift]{width}{height}`.

use crate::build_common::make_span;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, CssProperty, ParseError};
use crate::units::make_em;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Rule(group) = node else {
        return Err(ParseError::new("Expected Rule node"));
    };

    let mut rule = make_span(vec!["mord".to_owned(), "rule".to_owned()], vec![], Some(options), None);

    let width = ctx.calculate_size(&group.width, options)?;
    let height = ctx
        .calculate_size(&group.height, options)?
        .max(options.min_rule_thickness);
    let shift = group
        .shift
        .as_ref()
        .map_or(Ok(0.0), |shift| ctx.calculate_size(shift, options))?;

    rule.style.insert(CssProperty::BorderRightWidth, make_em(width));
    rule.style.insert(CssProperty::BorderTopWidth, make_em(height));
    rule.style.insert(CssProperty::Bottom, make_em(shift));

    rule.width = Some(width);
    rule.height = height + shift;
    rule.depth = -shift;
    rule.max_font_size = 1.125 * options.size_multiplier;

    Ok(rule.into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Rule(group) = node else {
        return Err(ParseError::new("Expected Rule node"));
    };
    let width = ctx.calculate_size(&group.width, options)?;
    let height = ctx.calculate_size(&group.height, options)?;
    let shift = group
        .shift
        .as_ref()
        .map_or(Ok(0.0), |shift| ctx.calculate_size(shift, options))?;
    let color = options.color.clone().unwrap_or_else(|| "black".to_owned());

    let mut rule = MathNode::with_children(MathNodeType::Mspace, vec![]);
    rule.set_attribute("mathbackground", color);
    rule.set_attribute("width", make_em(width));
    rule.set_attribute("height", make_em(height));

    let mut wrapper = MathNode::with_children(MathNodeType::Mpadded, vec![rule.into()]);
    if shift >= 0.0 {
        wrapper.set_attribute("height", make_em(shift));
    } else {
        wrapper.set_attribute("height", make_em(shift));
        wrapper.set_attribute("depth", make_em(-shift));
    }
    wrapper.set_attribute("voffset", make_em(shift));
    Ok(wrapper.into())
}

/// Register `\rule`.
pub fn define_rule(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Rule),
        names: &["\\rule"],
        props: FunctionPropSpec {
            num_args: 2,
            num_optional_args: 1,
            allowed_in_text: true,
            allowed_in_argument: true,
            arg_types: Some(vec![ArgType::Size, ArgType::Size, ArgType::Size]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, opt_args| {
            let shift = match opt_args.first() {
                Some(Some(ParseNode::Size(size))) => Some(size.value.clone()),
                _ => None,
            };
            let ParseNode::Size(width) = &args[0] else {
                return Err(ParseError::new("Expected size argument"));
            };
            let ParseNode::Size(height) = &args[1] else {
                return Err(ParseError::new("Expected size argument"));
            };
            Ok(ParseNode::Rule(parse_node::ParseNodeRule {
                mode: context.parser.mode,
                loc: context.loc(),
                shift,
                width: width.value.clone(),
                height: height.value.clone(),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
