//! Square roots and n-th roots.

use crate::build_common::{VListChild, VListElem, VListKern, VListParam, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::delimiter::make_sqrt_image;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::style::{SCRIPTSCRIPT, TEXT};
use crate::types::{CssProperty, ParseError};
use crate::units::make_em;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Sqrt(group) = node else {
        return Err(ParseError::new("Expected Sqrt node"));
    };

    // Rule 11: build the radicand in cramped style.
    let mut inner = build_html::build_group(
        ctx,
        &group.body,
        &options.having_cramped_style(),
        Some(options),
    )?;
    if inner.height() == 0.0
        && let Some(height) = inner.height_mut()
    {
        // A zero-height radicand still reserves an x-height.
        *height = options.font_metrics().x_height;
    }
    let inner = crate::build_common::wrap_fragment(inner, options);

    let metrics = options.font_metrics();
    let theta = metrics.default_rule_thickness;
    let mut phi = theta;
    if options.style.id < TEXT.id {
        phi = metrics.x_height;
    }

    // Clearance between the radicand and the vinculum.
    let mut line_clearance = theta + phi / 4.0;
    let min_delimiter_height = inner.height() + inner.depth() + line_clearance + theta;

    let sqrt = make_sqrt_image(ctx, min_delimiter_height, options)?;
    let mut img = sqrt.span;
    let rule_width = sqrt.rule_width;

    let delim_depth = img.height - rule_width;
    if delim_depth > inner.height() + inner.depth() + line_clearance {
        line_clearance = (line_clearance + delim_depth - inner.height() - inner.depth()) / 2.0;
    }

    // Shift the surd so the vinculum meets the top of the radicand.
    let inner_height = inner.height();
    let img_shift = img.height - inner_height - line_clearance - rule_width;
    img.style
        .insert(CssProperty::PaddingLeft, make_em(sqrt.advance_width));

    let body = make_v_list(
        VListParam::FirstBaseline {
            children: vec![
                VListElem::builder()
                    .elem(inner)
                    .wrapper_classes(vec!["svg-align".to_owned()])
                    .build()
                    .into(),
                VListChild::Kern(VListKern {
                    size: -(inner_height + img_shift),
                }),
                VListElem::builder().elem(img.into()).build().into(),
                VListChild::Kern(VListKern { size: rule_width }),
            ],
        },
        options,
    )?;

    if let Some(index) = &group.index {
        // The index sits in scriptscript style, raised beside the surd.
        let index_options = options.having_style(SCRIPTSCRIPT);
        let index_html = build_html::build_group(ctx, index, &index_options, Some(options))?;
        let to_shift = 0.6 * (body.height - body.depth);
        let index_vlist = make_v_list(
            VListParam::Shift {
                position_data: -to_shift,
                children: vec![VListElem::builder().elem(index_html).build().into()],
            },
            options,
        )?;
        let index_span = make_span(vec!["root".to_owned()], vec![index_vlist.into()], None, None);
        return Ok(make_span(
            vec!["mord".to_owned(), "sqrt".to_owned()],
            vec![index_span.into(), body.into()],
            Some(options),
            None,
        )
        .into());
    }

    Ok(make_span(
        vec!["mord".to_owned(), "sqrt".to_owned()],
        vec![body.into()],
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
    let ParseNode::Sqrt(group) = node else {
        return Err(ParseError::new("Expected Sqrt node"));
    };
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    if let Some(index) = &group.index {
        let index_node = build_mathml::build_group(ctx, index, options)?;
        Ok(MathNode::with_children(MathNodeType::Mroot, vec![body, index_node]).into())
    } else {
        Ok(MathNode::with_children(MathNodeType::Msqrt, vec![body]).into())
    }
}

/// Register `\sqrt`.
pub fn define_sqrt(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Sqrt),
        names: &["\\sqrt"],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, opt_args| {
            Ok(ParseNode::Sqrt(Box::new(parse_node::ParseNodeSqrt {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(args[0].clone()),
                index: opt_args.first().and_then(Clone::clone).map(Box::new),
            })))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
