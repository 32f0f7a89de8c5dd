//! Math font commands: `\mathbf`, `\mathrm`, …, `\boldsymbol`, and the
//! old-style `\rm` family.

use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, normalize_argument};
use crate::dom_tree::HtmlDomNode;
use crate::functions::mclass::binrel_class;
use crate::mathml_tree::MathDomNode;
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::ParseError;

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Font(group) = node else {
        return Err(ParseError::new("Expected Font node"));
    };
    let new_options = options.with_font(group.font.clone());
    build_html::build_group(ctx, &group.body, &new_options, None)
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Font(group) = node else {
        return Err(ParseError::new("Expected Font node"));
    };
    let new_options = options.with_font(group.font.clone());
    build_mathml::build_group(ctx, &group.body, &new_options)
}

const FONT_ALIASES: &[(&str, &str)] = &[
    ("\\Bbb", "mathbb"),
    ("\\bold", "mathbf"),
    ("\\frak", "mathfrak"),
    ("\\bm", "boldsymbol"),
];

/// Register the font commands.
pub fn define_font(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Font),
        names: &[
            "\\mathrm",
            "\\mathit",
            "\\mathbf",
            "\\mathnormal",
            "\\mathsfit",
            "\\mathbb",
            "\\mathcal",
            "\\mathfrak",
            "\\mathscr",
            "\\mathsf",
            "\\mathtt",
            "\\Bbb",
            "\\bold",
            "\\frak",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_argument: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let body = normalize_argument(&args[0]).clone();
            let mut func = context.func_name.clone();
            for (alias, target) in FONT_ALIASES {
                if func == *alias {
                    func = format!("\\{target}");
                }
            }
            Ok(ParseNode::Font(parse_node::ParseNodeFont {
                mode: context.parser.mode,
                loc: context.loc(),
                font: func[1..].to_owned(),
                body: Box::new(body),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    // \boldsymbol keeps the argument's bin/rel class.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Mclass),
        names: &["\\boldsymbol", "\\bm"],
        props: FunctionPropSpec {
            num_args: 1,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let body = args[0].clone();
            let is_character_box = body.is_character_box();
            let mclass = binrel_class(&body);
            Ok(ParseNode::Mclass(parse_node::ParseNodeMclass {
                mode: context.parser.mode,
                loc: context.loc(),
                mclass,
                body: vec![ParseNode::Font(parse_node::ParseNodeFont {
                    mode: context.parser.mode,
                    loc: context.loc(),
                    font: "boldsymbol".to_owned(),
                    body: Box::new(body),
                })],
                is_character_box,
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // Old-style font commands affect the rest of the group.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Font),
        names: &["\\rm", "\\sf", "\\tt", "\\bf", "\\it", "\\cal"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            let style = match context.func_name.as_str() {
                "\\rm" => "mathrm",
                "\\sf" => "mathsf",
                "\\tt" => "mathtt",
                "\\bf" => "mathbf",
                "\\it" => "mathit",
                _ => "mathcal",
            };
            let mode = context.parser.mode;
            let body = context
                .parser
                .parse_expression(true, context.break_on_token_text)?;
            Ok(ParseNode::Font(parse_node::ParseNodeFont {
                mode,
                loc: context.loc(),
                font: style.to_owned(),
                body: Box::new(ParseNode::OrdGroup(parse_node::ParseNodeOrdGroup {
                    mode,
                    loc: None,
                    body,
                    semisimple: false,
                })),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
