//! Overlaps: `\mathllap`, `\mathrlap`, `\mathclap` and their text cousins.

use crate::build_common::{VListElem, VListParam, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{CssProperty, ParseError};
use crate::units::make_em;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Lap(group) = node else {
        return Err(ParseError::new("Expected Lap node"));
    };

    // The overlapped content is wrapped so its width vanishes.
    let inner = if group.alignment == "clap" {
        let body = build_html::build_group(ctx, &group.body, options, None)?;
        let inner = make_span(vec!["inner".to_owned()], vec![body], Some(options), None);
        make_span(vec![], vec![inner.into()], Some(options), None)
    } else {
        let body = build_html::build_group(ctx, &group.body, options, None)?;
        make_span(vec!["inner".to_owned()], vec![body], Some(options), None)
    };
    let fix = make_span(vec!["fix".to_owned()], vec![], None, None);
    let mut lap = make_span(
        vec![group.alignment.clone()],
        vec![inner.into(), fix.into()],
        Some(options),
        None,
    );

    // Render at the baseline via a strut-like vlist so depth survives.
    let mut strut = make_span(vec!["strut".to_owned()], vec![], None, None);
    strut
        .style
        .insert(CssProperty::Height, make_em(lap.height + lap.depth));
    if lap.depth > 0.0 {
        strut
            .style
            .insert(CssProperty::VerticalAlign, make_em(-lap.depth));
    }
    lap.children.insert(0, strut.into());

    let wrapped = make_span(
        vec!["thinbox".to_owned()],
        vec![lap.into()],
        Some(options),
        None,
    );
    let vlist = make_v_list(
        VListParam::Shift {
            position_data: 0.0,
            children: vec![VListElem::builder().elem(wrapped.into()).build().into()],
        },
        options,
    )?;
    Ok(make_span(
        vec!["mord".to_owned(), "vbox".to_owned()],
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
    let ParseNode::Lap(group) = node else {
        return Err(ParseError::new("Expected Lap node"));
    };
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    let mut mpadded = MathNode::with_children(MathNodeType::Mpadded, vec![body]);
    if group.alignment != "rlap" {
        let offset = if group.alignment == "llap" { "-1" } else { "-0.5" };
        mpadded.set_attribute("lspace", format!("{offset}width"));
    }
    mpadded.set_attribute("width", "0px");
    Ok(mpadded.into())
}

/// Register the lap commands.
pub fn define_lap(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Lap),
        names: &["\\mathllap", "\\mathrlap", "\\mathclap"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Lap(parse_node::ParseNodeLap {
                mode: context.parser.mode,
                loc: context.loc(),
                alignment: context.func_name[5..].to_owned(),
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    // Text-mode laps take a text argument.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Lap),
        names: &["\\llap", "\\rlap", "\\clap"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            arg_types: Some(vec![crate::types::ArgType::Hbox]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Lap(parse_node::ParseNodeLap {
                mode: context.parser.mode,
                loc: context.loc(),
                alignment: context.func_name[1..].to_owned(),
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
