//! HTML attribute wrappers: `\htmlClass`, `\htmlId`, `\htmlStyle`,
//! `\htmlData`. All gated by the trust policy.

use crate::build_common::{make_fragment, make_span};
use crate::build_html::{self, GroupType};
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, ord_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::MathDomNode;
use crate::namespace::KeyMap;
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, ParseError, ParseErrorKind, TrustContext};

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Html(group) = node else {
        return Err(ParseError::new("Expected Html node"));
    };
    let elements =
        build_html::build_expression(ctx, &group.body, options, GroupType::False, (None, None))?;
    let mut span = make_span(
        vec!["enclosing".to_owned()],
        vec![make_fragment(&elements).into()],
        Some(options),
        None,
    );
    for (key, value) in &group.attributes {
        if key == "class" {
            span.classes.extend(value.split_whitespace().map(str::to_owned));
        } else {
            span.attributes.insert(key.clone(), value.clone());
        }
    }
    Ok(span.into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Html(group) = node else {
        return Err(ParseError::new("Expected Html node"));
    };
    build_mathml::build_expression_row(ctx, &group.body, options, false)
}

/// Register the HTML attribute wrappers.
pub fn define_html(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Html),
        names: &["\\htmlClass", "\\htmlId", "\\htmlStyle", "\\htmlData"],
        props: FunctionPropSpec {
            num_args: 2,
            arg_types: Some(vec![ArgType::Raw, ArgType::Original]),
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Raw(value) = &args[0] else {
                return Err(ParseError::new("Expected raw argument"));
            };
            let value = value.string.clone();

            let mut attributes = KeyMap::default();
            let mut trust_context = TrustContext {
                command: context.func_name.clone(),
                ..TrustContext::default()
            };
            match context.func_name.as_str() {
                "\\htmlClass" => {
                    attributes.insert("class".to_owned(), value.clone());
                    trust_context.class = Some(value);
                }
                "\\htmlId" => {
                    attributes.insert("id".to_owned(), value.clone());
                    trust_context.id = Some(value);
                }
                "\\htmlStyle" => {
                    attributes.insert("style".to_owned(), value.clone());
                    trust_context.style = Some(value);
                }
                _ => {
                    // \htmlData: comma-separated key=value pairs.
                    for pair in value.split(',') {
                        let Some((key, value)) = pair.split_once('=') else {
                            return Err(ParseError::new("Error parsing key-value for \\htmlData"));
                        };
                        attributes
                            .insert(format!("data-{}", key.trim()), value.trim().to_owned());
                    }
                    trust_context.attributes = Some(attributes.clone());
                }
            }

            if !context.parser.settings.is_trusted(&mut trust_context) {
                if context.parser.settings.throw_on_error {
                    return Err(ParseError::new(ParseErrorKind::NotTrusted {
                        command: context.func_name.clone(),
                    }));
                }
                return Ok(ParseNode::Color(
                    context.parser.format_unsupported_cmd(&context.func_name),
                ));
            }

            Ok(ParseNode::Html(parse_node::ParseNodeHtml {
                mode: context.parser.mode,
                loc: context.loc(),
                attributes,
                body: ord_argument(&args[1]),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
