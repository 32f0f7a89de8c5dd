//! Hyperlinks: `\href` and `\url`, gated by the trust policy.

use crate::build_common::make_anchor;
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, Mode, ParseError, ParseErrorKind, TrustContext};

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Href(group) = node else {
        return Err(ParseError::new("Expected Href node"));
    };
    let elements =
        build_html::build_expression(ctx, &group.body, options, GroupType::False, (None, None))?;
    Ok(make_anchor(&group.href, &[], elements, options).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Href(group) = node else {
        return Err(ParseError::new("Expected Href node"));
    };
    let mut math = match build_mathml::build_expression_row(ctx, &group.body, options, false)? {
        MathDomNode::Math(math) => math,
        other => MathNode::with_children(MathNodeType::Mrow, vec![other]),
    };
    // The attribute goes on the node that is returned.
    math.set_attribute("href", group.href.clone());
    Ok(math.into())
}

fn check_trust(
    context: &crate::define_function::FunctionContext,
    href: &str,
) -> Result<bool, ParseError> {
    let mut trust_context = TrustContext {
        command: context.func_name.clone(),
        url: Some(href.to_owned()),
        ..TrustContext::default()
    };
    Ok(context.parser.settings.is_trusted(&mut trust_context))
}

/// Register the hyperlink commands.
pub fn define_href(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Href),
        names: &["\\href"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: Some(vec![ArgType::Url, ArgType::Original]),
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Url(url) = &args[0] else {
                return Err(ParseError::new("Expected url argument"));
            };
            let href = url.url.clone();
            if !check_trust(&context, &href)? {
                if context.parser.settings.throw_on_error {
                    return Err(ParseError::new(ParseErrorKind::NotTrusted {
                        command: context.func_name.clone(),
                    }));
                }
                return Ok(ParseNode::Color(
                    context.parser.format_unsupported_cmd("\\href"),
                ));
            }
            Ok(ParseNode::Href(parse_node::ParseNodeHref {
                mode: context.parser.mode,
                loc: context.loc(),
                href,
                body: ord_argument(&args[1]),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Href),
        names: &["\\url"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Url]),
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Url(url) = &args[0] else {
                return Err(ParseError::new("Expected url argument"));
            };
            let href = url.url.clone();
            if !check_trust(&context, &href)? {
                if context.parser.settings.throw_on_error {
                    return Err(ParseError::new(ParseErrorKind::NotTrusted {
                        command: context.func_name.clone(),
                    }));
                }
                return Ok(ParseNode::Color(
                    context.parser.format_unsupported_cmd("\\url"),
                ));
            }
            // The URL renders as its own text, in typewriter face.
            let body: Vec<ParseNode> = href
                .chars()
                .map(|c| {
                    let text = if c == '~' { ' ' } else { c };
                    ParseNode::TextOrd(parse_node::ParseNodeTextOrd {
                        mode: Mode::Text,
                        loc: None,
                        text: text.to_string(),
                    })
                })
                .collect();
            let body = ParseNode::Text(parse_node::ParseNodeText {
                mode: context.parser.mode,
                loc: None,
                body,
                font: Some("\\texttt".to_owned()),
            });
            Ok(ParseNode::Href(parse_node::ParseNodeHref {
                mode: context.parser.mode,
                loc: context.loc(),
                href,
                body: vec![body],
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
