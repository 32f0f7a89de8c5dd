//! `\overline`.

use crate::build_common::{VListChild, VListElem, VListKern, VListParam, make_line_span, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType, TextNode};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::ParseError;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Overline(group) = node else {
        return Err(ParseError::new("Expected Overline node"));
    };

    // Rule 9: the overlined box is built in cramped style.
    let inner = build_html::build_group(ctx, &group.body, &options.having_cramped_style(), None)?;
    let line = make_line_span("overline-line", options, None);
    let default_rule_thickness = options.font_metrics().default_rule_thickness;

    let vlist = make_v_list(
        VListParam::FirstBaseline {
            children: vec![
                VListElem::builder().elem(inner).build().into(),
                VListChild::Kern(VListKern {
                    size: 3.0 * default_rule_thickness,
                }),
                VListElem::builder().elem(line.into()).build().into(),
                VListChild::Kern(VListKern {
                    size: default_rule_thickness,
                }),
            ],
        },
        options,
    )?;

    Ok(make_span(
        vec!["mord".to_owned(), "overline".to_owned()],
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
    let ParseNode::Overline(group) = node else {
        return Err(ParseError::new("Expected Overline node"));
    };
    let mut line = MathNode::with_children(
        MathNodeType::Mo,
        vec![
            TextNode {
                text: "\u{203e}".to_owned(),
            }
            .into(),
        ],
    );
    line.set_attribute("stretchy", "true");
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    let mut mover = MathNode::with_children(MathNodeType::Mover, vec![body, line.into()]);
    mover.set_attribute("accent", "true");
    Ok(mover.into())
}

/// Register `\overline`.
pub fn define_overline(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Overline),
        names: &["\\overline"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_argument: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Overline(parse_node::ParseNodeOverline {
                mode: context.parser.mode,
                loc: context.loc(),
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
