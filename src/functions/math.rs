//! Math-mode delimiters inside text mode: `$…$`, `\(…\)`.

use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::style::TEXT;
use crate::types::{BreakToken, Mode, ParseError};

/// Register the math-mode switchers.
pub fn define_math(ctx: &mut MathTexContext) {
    // Starting math mode from within text mode.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Styling),
        names: &["\\(", "$"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            allowed_in_math: false,
            ..FunctionPropSpec::default()
        },
        handler: Some(|context, _args, _opt_args| {
            let outer_mode = context.parser.mode;
            context.parser.switch_mode(Mode::Math);
            let close = if context.func_name == "\\(" {
                BreakToken::RightParen
            } else {
                BreakToken::Dollar
            };
            let body = context.parser.parse_expression(false, Some(&close))?;
            context.parser.expect(close.as_ref(), true)?;
            context.parser.switch_mode(outer_mode);
            Ok(ParseNode::Styling(parse_node::ParseNodeStyling {
                mode: Mode::Math,
                loc: context.loc(),
                style: TEXT,
                body,
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // Mismatched closers are errors rather than silent text.
    ctx.define_function(FunctionDefSpec {
        node_type: None,
        names: &["\\)", "\\]"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            allowed_in_math: false,
            ..FunctionPropSpec::default()
        },
        handler: Some(|context, _args, _opt_args| {
            Err(ParseError::new(match context.func_name.as_str() {
                "\\)" => "Mismatched \\)",
                _ => "Mismatched \\]",
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
