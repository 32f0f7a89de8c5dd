//! Horizontal kerns: `\kern`, `\mkern`, `\hskip`, `\hspace`, `\mskip`.

use crate::build_common::make_span;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::MathDomNode;
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, CssProperty, ParseError};
use crate::units::make_em;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Kern(group) = node else {
        return Err(ParseError::new("Expected Kern node"));
    };
    let mut span = make_span(vec!["mspace".to_owned()], vec![], Some(options), None);
    let size = ctx.calculate_size(&group.dimension, options)?;
    span.style.insert(CssProperty::MarginRight, make_em(size));
    Ok(span.into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Kern(group) = node else {
        return Err(ParseError::new("Expected Kern node"));
    };
    let size = ctx.calculate_size(&group.dimension, options)?;
    Ok(crate::mathml_tree::SpaceNode::new(size).into())
}

/// Register the kern commands.
pub fn define_kern(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Kern),
        names: &["\\kern", "\\mkern", "\\hskip", "\\hspace", "\\mskip"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Size]),
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Size(size) = &args[0] else {
                return Err(ParseError::new("Expected size argument"));
            };

            // mu units belong to the m-commands; fixed units to the others.
            let mu_unit = size.value.unit == "mu";
            let math_function =
                matches!(context.func_name.as_str(), "\\mkern" | "\\mskip");
            if mu_unit && !math_function {
                context.parser.settings.report_nonstrict(
                    "mathVsTextUnits",
                    &format!("LaTeX's {} doesn't support mu units", context.func_name),
                    None,
                )?;
            }
            if !mu_unit && math_function {
                context.parser.settings.report_nonstrict(
                    "mathVsTextUnits",
                    &format!("LaTeX's {} supports only mu units", context.func_name),
                    None,
                )?;
            }

            Ok(ParseNode::Kern(parse_node::ParseNodeKern {
                mode: context.parser.mode,
                loc: context.loc(),
                dimension: size.value.clone(),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
