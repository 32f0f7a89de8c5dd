//! `\char`: literal character by number (`\char"41`, `\char98`).

use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ParseError, ParseErrorKind};

/// Register `\char`.
pub fn define_char(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: None,
        names: &["\\@char"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::OrdGroup(arg) = &args[0] else {
                return Err(ParseError::new("\\@char has non-ordgroup argument"));
            };
            let number: String = arg
                .body
                .iter()
                .filter_map(ParseNode::text)
                .collect();
            let code: u32 = number.trim().parse().map_err(|_| {
                ParseError::new(ParseErrorKind::InvalidBaseDigit {
                    base: 10,
                    digit: number.clone(),
                })
            })?;
            let Some(character) = char::from_u32(code) else {
                return Err(ParseError::new(ParseErrorKind::UnexpectedCharacter {
                    character: format!("U+{code:X}"),
                }));
            };
            Ok(ParseNode::TextOrd(parse_node::ParseNodeTextOrd {
                mode: context.parser.mode,
                loc: context.loc(),
                text: character.to_string(),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
