//! Delimiter commands: the `\big` family, `\left`/`\right`, and `\middle`.

use crate::build_common::make_span;
use crate::build_html::{self, DomType, GroupType, make_null_delimiter};
use crate::build_mathml::{self, make_text};
use crate::context::MathTexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::delimiter;
use crate::dom_tree::{HtmlDomNode, MiddleDelim};
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind};
use phf::{Set, phf_set};

/// Delimiters legal after `\left`, `\right`, `\middle`, and the `\big`s.
const DELIMITERS: Set<&str> = phf_set!(
    "(",
    "\\lparen",
    ")",
    "\\rparen",
    "[",
    "\\lbrack",
    "]",
    "\\rbrack",
    "\\{",
    "\\lbrace",
    "\\}",
    "\\rbrace",
    "\\lfloor",
    "\\rfloor",
    "\u{230a}",
    "\u{230b}",
    "\\lceil",
    "\\rceil",
    "\u{2308}",
    "\u{2309}",
    "<",
    ">",
    "\\langle",
    "\u{27e8}",
    "\\rangle",
    "\u{27e9}",
    "\\lt",
    "\\gt",
    "\\lvert",
    "\\rvert",
    "\\lVert",
    "\\rVert",
    "\\lgroup",
    "\\rgroup",
    "\u{27ee}",
    "\u{27ef}",
    "\\lmoustache",
    "\\rmoustache",
    "\u{23b0}",
    "\u{23b1}",
    "/",
    "\\backslash",
    "|",
    "\\vert",
    "\\|",
    "\\Vert",
    "\\uparrow",
    "\\downarrow",
    "\\updownarrow",
    "\\Uparrow",
    "\\Downarrow",
    "\\Updownarrow",
    ".",
);

/// Check and extract the delimiter text from a `\left`/`\big` argument.
fn check_delimiter(delim: &ParseNode, context: &FunctionContext) -> Result<String, ParseError> {
    let text = delim.text().map(str::to_owned).or_else(|| {
        // Symbols that parse to atoms still carry their text.
        match delim {
            ParseNode::Atom(atom) => Some(atom.text.clone()),
            _ => None,
        }
    });
    match text {
        Some(text) if DELIMITERS.contains(text.as_str()) => Ok(text),
        Some(text) => Err(ParseError::new(ParseErrorKind::InvalidDelimiter {
            delim: text,
            context: context.func_name.clone(),
        })),
        None => Err(ParseError::new(ParseErrorKind::InvalidDelimiter {
            delim: "unknown".to_owned(),
            context: context.func_name.clone(),
        })),
    }
}

fn delimsizing_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Delimsizing(group) = node else {
        return Err(ParseError::new("Expected Delimsizing node"));
    };
    if group.delim == "." {
        return Ok(make_span(vec![group.mclass.to_owned()], vec![], None, None).into());
    }
    Ok(delimiter::sized_delim(
        ctx,
        &group.delim,
        group.size,
        options,
        group.mode,
        &[group.mclass.to_owned()],
    )?
    .into())
}

fn delimsizing_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Delimsizing(group) = node else {
        return Err(ParseError::new("Expected Delimsizing node"));
    };
    let children = if group.delim == "." {
        vec![]
    } else {
        vec![make_text(&group.delim, group.mode, Some(options), &ctx.symbols).into()]
    };
    let mut mo = MathNode::with_children(MathNodeType::Mo, children);
    if group.mclass == "mopen" || group.mclass == "mclose" {
        mo.set_attribute("fence", "true");
    } else {
        // Explicitly sized non-fence delimiters must not stretch.
        mo.set_attribute("fence", "false");
    }
    mo.set_attribute("stretchy", "true");
    let size = crate::units::make_em(delimiter::SIZE_TO_MAX_HEIGHT[group.size]);
    mo.set_attribute("minsize", size.clone());
    mo.set_attribute("maxsize", size);
    Ok(mo.into())
}

fn assert_parsed(group: &parse_node::ParseNodeLeftRight) -> Result<(), ParseError> {
    if group.body.is_empty() && group.left == "." && group.right == "." {
        return Err(ParseError::new(
            "Parsed node has no delimiters; please report this as a bug",
        ));
    }
    Ok(())
}

fn leftright_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::LeftRight(group) = node else {
        return Err(ParseError::new("Expected LeftRight node"));
    };
    assert_parsed(group)?;

    // Build the inner expression with surrounding open/close context.
    let inner = build_html::build_expression(
        ctx,
        &group.body,
        options,
        GroupType::True,
        (Some(DomType::Mopen), Some(DomType::Mclose)),
    )?;

    let mut inner_height = 0.0f64;
    let mut inner_depth = 0.0f64;
    let mut had_middle = false;
    for child in &inner {
        inner_height = inner_height.max(child.height());
        inner_depth = inner_depth.max(child.depth());
        if let HtmlDomNode::DomSpan(span) = child
            && span.middle.is_some()
        {
            had_middle = true;
        }
    }

    // Delimiters size against the body's extent in the current size.
    inner_height *= options.size_multiplier;
    inner_depth *= options.size_multiplier;

    let left_delim = if group.left == "." {
        make_null_delimiter(options, &["mopen".to_owned()])
    } else {
        delimiter::left_right_delim(
            ctx,
            &group.left,
            inner_height,
            inner_depth,
            options,
            group.mode,
            &["mopen".to_owned()],
        )?
    };

    let mut children: Vec<HtmlDomNode> = Vec::with_capacity(inner.len() + 2);
    children.push(left_delim.into());
    for child in inner {
        // Re-size any \middle delimiter now that the extent is known.
        if had_middle
            && let HtmlDomNode::DomSpan(span) = &child
            && let Some(middle) = &span.middle
        {
            let rebuilt = delimiter::left_right_delim(
                ctx,
                &middle.delim,
                inner_height,
                inner_depth,
                &middle.options,
                group.mode,
                &[],
            )?;
            children.push(rebuilt.into());
            continue;
        }
        children.push(child);
    }

    let right_delim = if group.right == "." {
        make_null_delimiter(options, &["mclose".to_owned()])
    } else {
        let right_options = group
            .right_color
            .as_ref()
            .map_or_else(|| options.clone(), |color| options.with_color(color.clone()));
        delimiter::left_right_delim(
            ctx,
            &group.right,
            inner_height,
            inner_depth,
            &right_options,
            group.mode,
            &["mclose".to_owned()],
        )?
    };
    children.push(right_delim.into());

    Ok(make_span(vec!["minner".to_owned()], children, Some(options), None).into())
}

fn leftright_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::LeftRight(group) = node else {
        return Err(ParseError::new("Expected LeftRight node"));
    };
    assert_parsed(group)?;

    let mut children = Vec::with_capacity(group.body.len() + 2);
    if group.left != "." {
        let mut mo = MathNode::with_children(
            MathNodeType::Mo,
            vec![make_text(&group.left, group.mode, Some(options), &ctx.symbols).into()],
        );
        mo.set_attribute("fence", "true");
        children.push(mo.into());
    }
    children.extend(build_mathml::build_expression(ctx, &group.body, options, false)?);
    if group.right != "." {
        let mut mo = MathNode::with_children(
            MathNodeType::Mo,
            vec![make_text(&group.right, group.mode, Some(options), &ctx.symbols).into()],
        );
        mo.set_attribute("fence", "true");
        if let Some(color) = &group.right_color {
            mo.set_attribute("mathcolor", color.clone());
        }
        children.push(mo.into());
    }
    Ok(MathNode::with_children(MathNodeType::Mrow, children).into())
}

fn middle_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Middle(group) = node else {
        return Err(ParseError::new("Expected Middle node"));
    };
    let mut middle_span = if group.delim == "." {
        make_null_delimiter(options, &[])
    } else {
        delimiter::sized_delim(ctx, &group.delim, 1, options, group.mode, &[])?
    };
    // Record the delimiter and the creation-time options so the enclosing
    // \left...\right can re-size it to the final extent.
    middle_span.middle = Some(MiddleDelim {
        delim: group.delim.clone(),
        options: options.clone(),
    });
    Ok(middle_span.into())
}

fn middle_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Middle(group) = node else {
        return Err(ParseError::new("Expected Middle node"));
    };
    // A Unicode vert is stretchy in MathML only via \vert.
    let text = if group.delim == "\\vert" || group.delim == "|" {
        make_text("|", Mode::Text, Some(options), &ctx.symbols)
    } else {
        make_text(&group.delim, group.mode, Some(options), &ctx.symbols)
    };
    let mut mo = MathNode::with_children(MathNodeType::Mo, vec![text.into()]);
    mo.set_attribute("fence", "true");
    mo.set_attribute("lspace", "0.05em");
    mo.set_attribute("rspace", "0.05em");
    Ok(mo.into())
}

/// Register the delimiter commands.
pub fn define_delimsizing(ctx: &mut MathTexContext) {
    // \bigl ... \Biggr
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Delimsizing),
        names: &[
            "\\bigl", "\\Bigl", "\\biggl", "\\Biggl", "\\bigr", "\\Bigr", "\\biggr", "\\Biggr",
            "\\bigm", "\\Bigm", "\\biggm", "\\Biggm", "\\big", "\\Big", "\\bigg", "\\Bigg",
        ],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![crate::types::ArgType::Primitive]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let delim = check_delimiter(&args[0], &context)?;
            let (size, mclass) = match context.func_name.as_str() {
                "\\bigl" => (1, "mopen"),
                "\\Bigl" => (2, "mopen"),
                "\\biggl" => (3, "mopen"),
                "\\Biggl" => (4, "mopen"),
                "\\bigr" => (1, "mclose"),
                "\\Bigr" => (2, "mclose"),
                "\\biggr" => (3, "mclose"),
                "\\Biggr" => (4, "mclose"),
                "\\bigm" => (1, "mrel"),
                "\\Bigm" => (2, "mrel"),
                "\\biggm" => (3, "mrel"),
                "\\Biggm" => (4, "mrel"),
                "\\big" => (1, "mord"),
                "\\Big" => (2, "mord"),
                "\\bigg" => (3, "mord"),
                "\\Bigg" => (4, "mord"),
                _ => {
                    return Err(ParseError::new("Unknown delimiter size command"));
                }
            };
            Ok(ParseNode::Delimsizing(parse_node::ParseNodeDelimsizing {
                mode: context.parser.mode,
                loc: context.loc(),
                size,
                mclass,
                delim,
            }))
        }),
        html_builder: Some(delimsizing_html),
        mathml_builder: Some(delimsizing_mathml),
    });

    // \left ... \right
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::LeftRightRight),
        names: &["\\right"],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let delim = check_delimiter(&args[0], &context)?;
            // The color option for the right delimiter comes from any \color
            // inside the \left...\right body.
            Ok(ParseNode::LeftRightRight(parse_node::ParseNodeLeftRightRight {
                mode: context.parser.mode,
                loc: context.loc(),
                delim,
                color: None,
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::LeftRight),
        names: &["\\left"],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let delim = check_delimiter(&args[0], &context)?;
            let loc = context.token.and_then(|t| t.loc.clone());
            let parser = context.parser;

            parser.leftright_depth += 1;
            // Parse the body up to the matching \right.
            let body = parser.parse_expression(false, None)?;
            parser.leftright_depth -= 1;

            parser.expect("\\right", false)?;
            let right = parser
                .parse_function(None, None)?
                .ok_or_else(|| ParseError::new(ParseErrorKind::ExpectedRight))?;
            let ParseNode::LeftRightRight(right) = right else {
                return Err(ParseError::new(ParseErrorKind::ExpectedRight));
            };
            Ok(ParseNode::LeftRight(parse_node::ParseNodeLeftRight {
                mode: parser.mode,
                loc,
                body,
                left: delim,
                right: right.delim,
                right_color: right.color,
            }))
        }),
        html_builder: Some(leftright_html),
        mathml_builder: Some(leftright_mathml),
    });

    // \middle, legal only inside \left...\right.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Middle),
        names: &["\\middle"],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let delim = check_delimiter(&args[0], &context)?;
            if context.parser.leftright_depth == 0 {
                return Err(ParseError::new(ParseErrorKind::MiddleWithoutLeft));
            }
            Ok(ParseNode::Middle(parse_node::ParseNodeMiddle {
                mode: context.parser.mode,
                loc: context.loc(),
                delim,
            }))
        }),
        html_builder: Some(middle_html),
        mathml_builder: Some(middle_mathml),
    });

}
