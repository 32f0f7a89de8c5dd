//! Big operators: `\sum`-class symbols, `\lim`-class named operators,
//! `\int`-class integrals, and `\mathop`.

use crate::build_common::{
    VListChild, VListElem, VListKern, VListParam, make_span, make_symbol, make_v_list,
    try_combine_chars,
};
use crate::build_html::{self, GroupType};
use crate::build_mathml::{self, make_text};
use crate::context::MathTexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::{DomSpan, HtmlDomNode};
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType, TextNode};
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode, ParseNodeOp};
use crate::style::{DISPLAY, Style};
use crate::types::{CssProperty, Mode, ParseError};
use crate::units::make_em;
use phf::phf_map;

/// Unicode char aliases for symbol operators.
const SYMBOL_REPLACE: phf::Map<&str, &str> = phf_map! {
    "\u{220F}" => "\\prod",
    "\u{2210}" => "\\coprod",
    "\u{2211}" => "\\sum",
    "\u{22C0}" => "\\bigwedge",
    "\u{22C1}" => "\\bigvee",
    "\u{22C2}" => "\\bigcap",
    "\u{22C3}" => "\\bigcup",
    "\u{222B}" => "\\int",
    "\u{222C}" => "\\iint",
    "\u{222D}" => "\\iiint",
    "\u{222E}" => "\\oint",
};

/// Stack `sup`/`sub` above/below a limits operator (TeXbook rule 13a).
pub fn assemble_sup_sub(
    base: HtmlDomNode,
    sup_group: Option<&ParseNode>,
    sub_group: Option<&ParseNode>,
    options: &Options,
    style: &'static Style,
    slant: f64,
    base_shift: f64,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let metrics = options.font_metrics();

    let sup = sup_group
        .map(|group| {
            let elem = build_html::build_group(
                ctx,
                group,
                &options.having_style(style.sup()),
                Some(options),
            )?;
            let kern = (metrics.big_op_spacing3 - elem.depth()).max(metrics.big_op_spacing1);
            Ok::<_, ParseError>((elem, kern))
        })
        .transpose()?;

    let sub = sub_group
        .map(|group| {
            let elem = build_html::build_group(
                ctx,
                group,
                &options.having_style(style.sub()),
                Some(options),
            )?;
            let kern = (metrics.big_op_spacing4 - elem.height()).max(metrics.big_op_spacing2);
            Ok::<_, ParseError>((elem, kern))
        })
        .transpose()?;

    let final_group = match (sup, sub) {
        (Some((sup_elem, sup_kern)), Some((sub_elem, sub_kern))) => {
            let bottom = metrics.big_op_spacing5
                + sub_elem.height()
                + sub_elem.depth()
                + sub_kern
                + base.depth()
                + base_shift;
            make_v_list(
                VListParam::Bottom {
                    position_data: bottom,
                    children: vec![
                        VListChild::Kern(VListKern {
                            size: metrics.big_op_spacing5,
                        }),
                        VListElem::builder()
                            .elem(sub_elem)
                            .margin_left(make_em(-slant))
                            .build()
                            .into(),
                        VListChild::Kern(VListKern { size: sub_kern }),
                        VListElem::builder().elem(base).build().into(),
                        VListChild::Kern(VListKern { size: sup_kern }),
                        VListElem::builder()
                            .elem(sup_elem)
                            .margin_left(make_em(slant))
                            .build()
                            .into(),
                        VListChild::Kern(VListKern {
                            size: metrics.big_op_spacing5,
                        }),
                    ],
                },
                options,
            )?
        }
        (None, Some((sub_elem, sub_kern))) => {
            let top = base.height() - base_shift;
            make_v_list(
                VListParam::Top {
                    position_data: top,
                    children: vec![
                        VListChild::Kern(VListKern {
                            size: metrics.big_op_spacing5,
                        }),
                        VListElem::builder()
                            .elem(sub_elem)
                            .margin_left(make_em(-slant))
                            .build()
                            .into(),
                        VListChild::Kern(VListKern { size: sub_kern }),
                        VListElem::builder().elem(base).build().into(),
                    ],
                },
                options,
            )?
        }
        (Some((sup_elem, sup_kern)), None) => {
            let bottom = base.depth() + base_shift;
            make_v_list(
                VListParam::Bottom {
                    position_data: bottom,
                    children: vec![
                        VListElem::builder().elem(base).build().into(),
                        VListChild::Kern(VListKern { size: sup_kern }),
                        VListElem::builder()
                            .elem(sup_elem)
                            .margin_left(make_em(slant))
                            .build()
                            .into(),
                        VListChild::Kern(VListKern {
                            size: metrics.big_op_spacing5,
                        }),
                    ],
                },
                options,
            )?
        }
        (None, None) => {
            // No scripts at all: just re-seat the base on its shift.
            make_v_list(
                VListParam::Shift {
                    position_data: base_shift,
                    children: vec![VListElem::builder().elem(base).build().into()],
                },
                options,
            )?
        }
    };

    Ok(make_span(
        vec!["mop".to_owned(), "op-limits".to_owned()],
        vec![final_group.into()],
        Some(options),
        None,
    )
    .into())
}

/// Pull the op payload out of a node that may be a supsub wrapper.
fn unwrap_op<'a>(
    node: &'a ParseNode,
) -> Result<(&'a ParseNodeOp, Option<&'a ParseNode>, Option<&'a ParseNode>), ParseError> {
    match node {
        ParseNode::Op(op) => Ok((op, None, None)),
        ParseNode::SupSub(supsub) => {
            let Some(ParseNode::Op(op)) = supsub.base.as_deref() else {
                return Err(ParseError::new("Expected Op node as supsub base"));
            };
            Ok((op, supsub.sup.as_deref(), supsub.sub.as_deref()))
        }
        _ => Err(ParseError::new("Expected Op node")),
    }
}

fn build_base_op(
    op: &ParseNodeOp,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<(HtmlDomNode, f64, f64), ParseError> {
    let style = options.style;
    let mut base_shift = 0.0;
    let mut slant = 0.0;

    let base: HtmlDomNode = if op.symbol {
        // One large glyph from the Size fonts.
        let font_name = if style.size == DISPLAY.size {
            "Size2-Regular"
        } else {
            "Size1-Regular"
        };
        let size_class = if style.size == DISPLAY.size {
            "large-op"
        } else {
            "small-op"
        };
        let name = op.name.as_deref().unwrap_or_default();
        let symbol = make_symbol(
            ctx,
            name,
            font_name,
            Mode::Math,
            Some(options),
            Some(&["mop".to_owned(), "op-symbol".to_owned(), size_class.to_owned()]),
        )?;
        // Center big operators on the axis.
        base_shift = (symbol.height - symbol.depth) / 2.0 - options.font_metrics().axis_height;
        slant = symbol.italic;
        symbol.into()
    } else if let Some(body) = &op.body {
        // \mathop body: an ordinary subexpression reclassified as mop.
        let mut children =
            build_html::build_expression(ctx, body, options, GroupType::True, (None, None))?;
        try_combine_chars(&mut children);
        make_span(vec!["mop".to_owned()], children, Some(options), None).into()
    } else {
        // A named function like \sin, set upright.
        let name = op.name.as_deref().unwrap_or_default();
        let mut children: Vec<HtmlDomNode> = Vec::new();
        for ch in name.chars().skip(1) {
            children.push(
                make_symbol(
                    ctx,
                    &ch.to_string(),
                    "Main-Regular",
                    op.mode,
                    Some(options),
                    None,
                )?
                .into(),
            );
        }
        make_span(vec!["mop".to_owned()], children, Some(options), None).into()
    };

    Ok((base, base_shift, slant))
}

pub(super) fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let (op, sup, sub) = unwrap_op(node)?;
    let style = options.style;
    let has_limits = op.limits && (style.size == DISPLAY.size || op.always_handle_sup_sub);

    let (base, base_shift, slant) = build_base_op(op, options, ctx)?;

    if (sup.is_some() || sub.is_some()) && has_limits {
        return assemble_sup_sub(base, sup, sub, options, style, slant, base_shift, ctx);
    }

    if base_shift != 0.0 || slant != 0.0 {
        let mut span: DomSpan = match base {
            HtmlDomNode::Symbol(symbol) => {
                let mut span = make_span(
                    symbol.classes.clone(),
                    vec![HtmlDomNode::Symbol(symbol)],
                    Some(options),
                    None,
                );
                if let Some(HtmlDomNode::Symbol(inner)) = span.children.first_mut() {
                    inner.classes.clear();
                }
                span
            }
            HtmlDomNode::DomSpan(span) => span,
            other => make_span(vec!["mop".to_owned()], vec![other], Some(options), None),
        };
        if base_shift != 0.0 {
            span.style
                .insert(CssProperty::Position, "relative");
            span.style.insert(CssProperty::Top, make_em(base_shift));
            span.height -= base_shift;
            span.depth += base_shift;
        }
        span.italic = Some(slant);
        return Ok(span.into());
    }

    Ok(base)
}

pub(super) fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let (op, _, _) = unwrap_op(node)?;

    if op.symbol {
        let name = op.name.as_deref().unwrap_or_default();
        let mut mo = MathNode::with_children(
            MathNodeType::Mo,
            vec![make_text(name, op.mode, Some(options), &ctx.symbols).into()],
        );
        if !op.limits {
            // Suppress movable limits in the MathML rendering too.
            mo.set_attribute("movablelimits", "false");
        }
        return Ok(mo.into());
    }

    if let Some(body) = &op.body {
        let children = build_mathml::build_expression(ctx, body, options, false)?;
        let mut mo = MathNode::with_children(MathNodeType::Mo, children);
        mo.set_attribute("movablelimits", "false");
        return Ok(mo.into());
    }

    // Named function: <mo> of the name with applied-function spacing.
    let name = op.name.as_deref().unwrap_or_default();
    let mi = MathNode::with_children(
        MathNodeType::Mi,
        vec![
            TextNode {
                text: name.get(1..).unwrap_or_default().to_owned(),
            }
            .into(),
        ],
    );
    let mut applied = MathNode::with_children(
        MathNodeType::Mo,
        vec![
            TextNode {
                text: "\u{2061}".to_owned(),
            }
            .into(),
        ],
    );
    applied.set_attribute("lspace", "0em");
    Ok(MathNode::with_children(MathNodeType::Mrow, vec![mi.into(), applied.into()]).into())
}

fn op_token_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::OpToken(tok) = node else {
        return Err(ParseError::new("Expected OpToken node"));
    };
    let name = SYMBOL_REPLACE
        .get(tok.text.as_str())
        .copied()
        .unwrap_or(tok.text.as_str());
    let op = ParseNodeOp {
        mode: tok.mode,
        loc: tok.loc.clone(),
        limits: true,
        always_handle_sup_sub: false,
        suppress_base_shift: false,
        parent_is_sup_sub: false,
        symbol: true,
        name: Some(name.to_owned()),
        body: None,
    };
    html_builder(&ParseNode::Op(Box::new(op)), options, ctx)
}

fn op_token_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::OpToken(tok) = node else {
        return Err(ParseError::new("Expected OpToken node"));
    };
    let mut mo = MathNode::with_children(
        MathNodeType::Mo,
        vec![make_text(&tok.text, tok.mode, Some(options), &ctx.symbols).into()],
    );
    mo.set_attribute("movablelimits", "false");
    Ok(mo.into())
}

const SYMBOL_OPS: &[&str] = &[
    "\\coprod",
    "\\bigvee",
    "\\bigwedge",
    "\\biguplus",
    "\\bigcap",
    "\\bigcup",
    "\\intop",
    "\\prod",
    "\\sum",
    "\\bigotimes",
    "\\bigoplus",
    "\\bigodot",
    "\\bigsqcup",
    "\\smallint",
];

const INTEGRAL_OPS: &[&str] = &["\\int", "\\iint", "\\iiint", "\\oint"];

const NAMED_OPS_NO_LIMITS: &[&str] = &[
    "\\arcsin", "\\arccos", "\\arctan", "\\arctg", "\\arcctg", "\\arg", "\\ch", "\\cos", "\\cosec",
    "\\cosh", "\\cot", "\\cotg", "\\coth", "\\csc", "\\ctg", "\\cth", "\\deg", "\\dim", "\\exp",
    "\\hom", "\\ker", "\\lg", "\\ln", "\\log", "\\sec", "\\sin", "\\sinh", "\\sh", "\\tan",
    "\\tanh", "\\tg", "\\th",
];

const NAMED_OPS_WITH_LIMITS: &[&str] = &[
    "\\det", "\\gcd", "\\inf", "\\lim", "\\max", "\\min", "\\Pr", "\\sup",
];

fn make_symbol_op(
    context: &FunctionContext,
    limits: bool,
    symbol: bool,
) -> ParseNode {
    let name = SYMBOL_REPLACE
        .get(context.func_name.as_str())
        .copied()
        .map_or_else(|| context.func_name.clone(), str::to_owned);
    ParseNode::Op(Box::new(ParseNodeOp {
        mode: context.parser.mode,
        loc: context.loc(),
        limits,
        always_handle_sup_sub: false,
        suppress_base_shift: false,
        parent_is_sup_sub: false,
        symbol,
        name: Some(name),
        body: None,
    }))
}

/// Register the operator families.
pub fn define_op(ctx: &mut MathTexContext) {
    // \sum-class: symbols with movable limits.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: SYMBOL_OPS,
        props: FunctionPropSpec::with_default(),
        handler: Some(|context, _args, _opt_args| Ok(make_symbol_op(&context, true, true))),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    // Integrals never take limits by default.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: INTEGRAL_OPS,
        props: FunctionPropSpec::with_default(),
        handler: Some(|context, _args, _opt_args| Ok(make_symbol_op(&context, false, true))),
        html_builder: None,
        mathml_builder: None,
    });

    // \mathop{...}
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: &["\\mathop"],
        props: FunctionPropSpec {
            num_args: 1,
            primitive: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let body = crate::define_function::ord_argument(&args[0]);
            Ok(ParseNode::Op(Box::new(ParseNodeOp {
                mode: context.parser.mode,
                loc: context.loc(),
                limits: false,
                always_handle_sup_sub: false,
                suppress_base_shift: false,
                parent_is_sup_sub: false,
                symbol: false,
                name: None,
                body: Some(body),
            })))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // Named functions without limits (\sin ...).
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: NAMED_OPS_NO_LIMITS,
        props: FunctionPropSpec::with_default(),
        handler: Some(|context, _args, _opt_args| Ok(make_symbol_op(&context, false, false))),
        html_builder: None,
        mathml_builder: None,
    });

    // Named functions with limits (\lim ...).
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Op),
        names: NAMED_OPS_WITH_LIMITS,
        props: FunctionPropSpec::with_default(),
        handler: Some(|context, _args, _opt_args| Ok(make_symbol_op(&context, true, false))),
        html_builder: None,
        mathml_builder: None,
    });

    // Raw operator characters (∑, ∫) reached through the symbol table.
    ctx.define_function_builders(NodeType::OpToken, Some(op_token_html), Some(op_token_mathml));
}

/// Whether a supsub base is an op that places its own scripts.
#[must_use]
pub fn op_handles_sup_sub(node: &ParseNode, style: &Style) -> bool {
    match node {
        ParseNode::Op(op) => op.limits && (style.size == DISPLAY.size || op.always_handle_sup_sub),
        _ => false,
    }
}
