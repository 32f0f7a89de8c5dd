//! Text mode: `\text`, `\textrm`, `\textbf`, `\textit`, ….

use crate::build_common::{make_span, try_combine_chars};
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::{FontShape, FontWeight, Options};
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, Mode, ParseError};

/// Text options derived from the wrapping command.
fn options_with_font(group: &parse_node::ParseNodeText, options: &Options) -> Options {
    match group.font.as_deref() {
        Some("\\textrm") => options.with_text_font_family("textrm".to_owned()),
        Some("\\textsf") => options.with_text_font_family("textsf".to_owned()),
        Some("\\texttt") => options.with_text_font_family("texttt".to_owned()),
        Some("\\textnormal") => options.with_text_font_family("textrm".to_owned()),
        Some("\\textbf") => options.with_text_font_weight(FontWeight::TextBf),
        Some("\\textmd") => options.with_text_font_weight(FontWeight::TextMd),
        Some("\\textit") => options.with_text_font_shape(FontShape::TextIt),
        Some("\\textup") => options.with_text_font_shape(FontShape::TextUp),
        _ => options.clone(),
    }
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Text(group) = node else {
        return Err(ParseError::new("Expected Text node"));
    };
    let new_options = options_with_font(group, options);
    let mut inner =
        build_html::build_expression(ctx, &group.body, &new_options, GroupType::True, (None, None))?;
    try_combine_chars(&mut inner);
    Ok(make_span(vec!["mord".to_owned(), "text".to_owned()], inner, Some(&new_options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Text(group) = node else {
        return Err(ParseError::new("Expected Text node"));
    };
    let new_options = options_with_font(group, options);
    let children = build_mathml::build_expression(ctx, &group.body, &new_options, false)?;
    // Adjacent mtexts merged in build_expression; wrap whatever remains.
    if children.len() == 1
        && let Some(math) = children[0].as_math_node()
        && math.node_type == MathNodeType::Mtext
    {
        return Ok(children.into_iter().next().unwrap_or_else(|| {
            MathNode::with_children(MathNodeType::Mrow, vec![]).into()
        }));
    }
    Ok(MathNode::with_children(MathNodeType::Mrow, children).into())
}

/// Register the text-mode commands.
pub fn define_text(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Text),
        names: &[
            "\\text",
            "\\textrm",
            "\\textsf",
            "\\texttt",
            "\\textnormal",
            "\\textbf",
            "\\textmd",
            "\\textit",
            "\\textup",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Mode(Mode::Text)]),
            allowed_in_argument: true,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Text(parse_node::ParseNodeText {
                mode: context.parser.mode,
                loc: context.loc(),
                body: ord_argument(&args[0]),
                font: Some(context.func_name.clone()),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
