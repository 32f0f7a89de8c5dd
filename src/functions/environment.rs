//! `\begin{...}` / `\end{...}` dispatch into the environment registry.

use crate::context::MathTexContext;
use crate::define_environment::EnvContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::types::{ArgType, ParseError, ParseErrorKind};

/// Register `\begin` and `\end`.
pub fn define_environment(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Internal),
        names: &["\\begin", "\\end"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Raw]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Raw(name_group) = &args[0] else {
                return Err(ParseError::new("Invalid environment name"));
            };
            let env_name = name_group.string.clone();

            if context.func_name == "\\begin" {
                let Some(env) = context.parser.ctx.environments.get(&env_name).cloned() else {
                    return Err(ParseError::new(ParseErrorKind::UnknownEnvironment {
                        name: env_name,
                    }));
                };
                // Build the environment object, reading any arguments first.
                let (env_args, opt_args) = context
                    .parser
                    .parse_arguments(&format!("\\begin{{{env_name}}}"), &env)?;
                let result = {
                    let env_context = EnvContext {
                        mode: context.parser.mode,
                        env_name: env_name.clone(),
                        parser: &mut *context.parser,
                    };
                    (env.handler)(env_context, env_args, opt_args)?
                };

                // The \end consumed by the handler must match.
                context.parser.expect("\\end", false)?;
                let end = context
                    .parser
                    .parse_function(None, None)?
                    .ok_or_else(|| ParseError::new("Expected \\end"))?;
                let ParseNode::Raw(end_name) = &end else {
                    return Err(ParseError::new("Expected \\end"));
                };
                if end_name.string != env_name {
                    return Err(ParseError::new(ParseErrorKind::MismatchedEnvironment {
                        expected: env_name,
                        found: end_name.string.clone(),
                    }));
                }
                return Ok(result);
            }

            // \end: surface the name so \begin's handler can check it.
            Ok(ParseNode::Raw(crate::parser::parse_node::ParseNodeRaw {
                mode: context.parser.mode,
                loc: context.loc(),
                string: env_name,
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
