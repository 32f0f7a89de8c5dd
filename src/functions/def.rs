//! TeX definition primitives: `\def`, `\gdef`, `\edef`, `\xdef`, `\let`,
//! `\futurelet`, `\global`, `\noexpand`, `\expandafter`.

use crate::context::MathTexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::macros::{MacroContextInterface as _, MacroDefinition, MacroExpansion};
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ParseError, ParseErrorKind, Token};
use phf::phf_map;

/// How many trailing groups each definition primitive consumes globally.
const GLOBAL_MAP: phf::Map<&str, &str> = phf_map! {
    "\\global" => "\\global",
    "\\long" => "\\\\globallong",
    "\\\\globallong" => "\\\\globallong",
    "\\def" => "\\gdef",
    "\\gdef" => "\\gdef",
    "\\edef" => "\\xdef",
    "\\xdef" => "\\xdef",
    "\\let" => "\\\\globallet",
    "\\futurelet" => "\\\\globalfuture",
};

fn internal(context: &FunctionContext) -> ParseNode {
    ParseNode::Internal(parse_node::ParseNodeInternal {
        mode: context.parser.mode,
        loc: context.loc(),
    })
}

fn check_control_sequence(tok: &Token) -> Result<String, ParseError> {
    let name = tok.text.clone();
    if name.chars().count() == 1 || name.starts_with('\\') {
        Ok(name)
    } else {
        Err(ParseError::with_token(
            ParseErrorKind::ExpectedControlSequence {
                command: "definition".to_owned(),
                found: name,
            },
            tok,
        ))
    }
}

fn get_rhs(context: &mut FunctionContext) -> Result<Token, ParseError> {
    let mut tok = context.parser.gullet.pop_token()?;
    if tok.text == "=" {
        tok = context.parser.gullet.pop_token()?;
        if tok.text == " " {
            tok = context.parser.gullet.pop_token()?;
        }
    }
    Ok(tok)
}

fn let_command(
    context: &mut FunctionContext,
    name: &str,
    tok: &Token,
    global: bool,
) -> Result<(), ParseError> {
    let mut macro_def = context.parser.gullet.macros().get(&tok.text).cloned();
    if macro_def.is_none() {
        // Undefined control sequence: \let makes an unexpandable alias so
        // the token keeps behaving like itself.
        macro_def = Some(MacroDefinition::Expansion(MacroExpansion {
            tokens: vec![tok.clone()],
            num_args: 0,
            delimiters: None,
            unexpandable: !context.parser.gullet.is_expandable(&tok.text),
        }));
    }
    context.parser.gullet.macros_mut().set(name, macro_def, global);
    Ok(())
}

/// Register the definition primitives.
pub fn define_def(ctx: &mut MathTexContext) {
    // \global and \long prefix another definition.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\global", "\\long", "\\\\globallong"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|mut context, _args, _opt_args| {
            context.parser.consume_spaces()?;
            let token = context.parser.fetch()?.clone();
            if let Some(next_command) = GLOBAL_MAP.get(token.text.as_str()) {
                if context.func_name == "\\global" || context.func_name == "\\\\globallong" {
                    // Pass globalness down to the nested definition.
                    context.parser.consume();
                    context
                        .parser
                        .gullet
                        .push_token(Token::of(next_command));
                }
                let node = context
                    .parser
                    .parse_function(None, None)?
                    .ok_or_else(|| ParseError::new("Invalid token after macro prefix"))?;
                return Ok(node);
            }
            Err(ParseError::with_token(
                "Invalid token after macro prefix",
                &token,
            ))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // \def\name<params>{body}
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\def", "\\gdef", "\\edef", "\\xdef"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|mut context, _args, _opt_args| {
            let tok = context.parser.gullet.pop_token()?;
            let name = check_control_sequence(&tok)?;

            // Parameter text: #1#2... possibly with delimiter tokens.
            let mut num_args = 0usize;
            let mut delimiters: Vec<Vec<String>> = vec![Vec::new()];
            let mut insert = context.parser.gullet.future_mut()?;
            while insert.text != "{" && insert.text != "EOF" {
                if insert.text == "#" {
                    context.parser.gullet.pop_token()?;
                    let arg_tok = context.parser.gullet.pop_token()?;
                    let expected = (num_args + 1).to_string();
                    if arg_tok.text != expected {
                        return Err(ParseError::with_token(
                            ParseErrorKind::InvalidArgumentNumber,
                            &arg_tok,
                        ));
                    }
                    num_args += 1;
                    delimiters.push(Vec::new());
                } else {
                    context.parser.gullet.pop_token()?;
                    delimiters
                        .last_mut()
                        .map(|level| level.push(insert.text.clone()));
                }
                insert = context.parser.gullet.future_mut()?;
            }

            let mut arg = context.parser.gullet.consume_arg(None)?.tokens;
            if context.func_name == "\\edef" || context.func_name == "\\xdef" {
                // Expand the body once at definition time.
                arg = context.parser.gullet.expand_tokens(arg)?;
                arg.reverse();
            }

            let global = context.func_name == "\\gdef" || context.func_name == "\\xdef";
            let has_delimiters = delimiters.iter().any(|level| !level.is_empty());
            context.parser.gullet.macros_mut().set(
                &name,
                Some(MacroDefinition::Expansion(MacroExpansion {
                    tokens: arg,
                    num_args,
                    delimiters: has_delimiters.then_some(delimiters),
                    unexpandable: false,
                })),
                global,
            );
            Ok(internal(&context))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // \let\alias=\target
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\let", "\\\\globallet"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|mut context, _args, _opt_args| {
            let name_tok = context.parser.gullet.pop_token()?;
            let name = check_control_sequence(&name_tok)?;
            context.parser.gullet.consume_spaces()?;
            let tok = get_rhs(&mut context)?;
            let global = context.func_name == "\\\\globallet";
            let_command(&mut context, &name, &tok, global)?;
            Ok(internal(&context))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // \futurelet\alias<token1><token2>
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\futurelet", "\\\\globalfuture"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|mut context, _args, _opt_args| {
            let name_tok = context.parser.gullet.pop_token()?;
            let name = check_control_sequence(&name_tok)?;
            let middle = context.parser.gullet.pop_token()?;
            let tok = context.parser.gullet.pop_token()?;
            let global = context.func_name == "\\\\globalfuture";
            let_command(&mut context, &name, &tok, global)?;
            context.parser.gullet.push_token(tok);
            context.parser.gullet.push_token(middle);
            Ok(internal(&context))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // \noexpand and \expandafter.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\noexpand"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            let mut tok = context.parser.gullet.pop_token()?;
            if context.parser.gullet.is_expandable(&tok.text) {
                tok.noexpand = true;
                tok.treat_as_relax = true;
            }
            context.parser.gullet.push_token(tok);
            Ok(internal(&context))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\expandafter"],
        props: FunctionPropSpec {
            allowed_in_text: true,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            let tok = context.parser.gullet.pop_token()?;
            // Expand the following token once, then put the first back.
            context.parser.gullet.expand_once(Some(true))?;
            context.parser.gullet.push_token(tok);
            Ok(internal(&context))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
