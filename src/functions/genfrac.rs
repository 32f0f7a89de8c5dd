//! Generalized fractions: `\frac` family, `\binom` family, the infix forms
//! (`\over`, `\choose`, `\atop`, `\brace`, `\brack`, `\above`), `\cfrac`, and
//! `\genfrac` itself.

use crate::build_common::{VListElemAndShift, VListParam, make_line_span, make_span, make_v_list};
use crate::build_html::{self, make_null_delimiter};
use crate::build_mathml::{self, make_row};
use crate::context::MathTexContext;
use crate::define_function::{FunctionContext, FunctionDefSpec, FunctionPropSpec, normalize_argument};
use crate::delimiter::custom_sized_delim;
use crate::dom_tree::{DomSpan, HtmlDomNode};
use crate::font_metrics::FontMetrics;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType, TextNode};
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode, ParseNodeGenfrac, ParseNodeInfix};
use crate::spacing_data::MeasurementOwned;
use crate::style::{DISPLAY, SCRIPT, SCRIPTSCRIPT, Style, TEXT};
use crate::symbols::Atom;
use crate::types::{ArgType, Mode, ParseError, ParseErrorKind};
use crate::units::make_em;
use phf::phf_map;

fn delim_from_value(delim: &str) -> Option<String> {
    (!delim.is_empty() && delim != ".").then(|| delim.to_owned())
}

const INFIX_REPLACE: phf::Map<&'static str, &'static str> = phf_map! {
    "\\over" => "\\frac",
    "\\choose" => "\\binom",
    "\\atop" => "\\\\atopfrac",
    "\\brace" => "\\\\bracefrac",
    "\\brack" => "\\\\brackfrac",
};

/// The working style for a forced fraction size (`\dfrac`, `\tfrac`, and the
/// `\genfrac` style digit).
fn adjust_style<'a>(forced: Option<&'a Style>, current: &'a Style) -> &'a Style {
    let Some(forced) = forced else {
        return current;
    };
    match forced.size {
        // Forcing display keeps script contexts at their text size.
        0 if current.id >= SCRIPT.id => current.text(),
        0 => DISPLAY,
        1 if current.size == DISPLAY.size => TEXT,
        2 => SCRIPT,
        3 => SCRIPTSCRIPT,
        _ => current,
    }
}

fn frac_node(
    context: &FunctionContext,
    numer: &ParseNode,
    denom: &ParseNode,
    has_bar_line: bool,
    delims: (Option<String>, Option<String>),
    size: Option<&'static Style>,
    bar_size: Option<MeasurementOwned>,
) -> ParseNode {
    ParseNode::Genfrac(Box::new(ParseNodeGenfrac {
        mode: context.parser.mode,
        loc: context.loc(),
        continued: false,
        numer: Box::new(numer.clone()),
        denom: Box::new(denom.clone()),
        has_bar_line,
        left_delim: delims.0,
        right_delim: delims.1,
        size,
        bar_size,
    }))
}

fn paren_delims() -> (Option<String>, Option<String>) {
    (Some("(".to_owned()), Some(")".to_owned()))
}

fn genfrac_from_name(context: &FunctionContext, args: &[ParseNode]) -> Result<ParseNode, ParseError> {
    let (delims, has_bar_line, size) = match context.func_name.as_str() {
        "\\frac" => ((None, None), true, None),
        "\\dfrac" => ((None, None), true, Some(DISPLAY)),
        "\\tfrac" => ((None, None), true, Some(TEXT)),
        "\\binom" => (paren_delims(), false, None),
        "\\dbinom" => (paren_delims(), false, Some(DISPLAY)),
        "\\tbinom" => (paren_delims(), false, Some(TEXT)),
        "\\\\atopfrac" => ((None, None), false, None),
        "\\\\bracefrac" => ((Some("\\{".to_owned()), Some("\\}".to_owned())), false, None),
        "\\\\brackfrac" => ((Some("[".to_owned()), Some("]".to_owned())), false, None),
        _ => {
            return Err(ParseError::new(ParseErrorKind::UnrecognizedGenfracCommand {
                command: context.func_name.clone(),
            }));
        }
    };

    Ok(frac_node(context, &args[0], &args[1], has_bar_line, delims, size, None))
}

/// The `\genfrac` style argument, as its bare digit.
fn style_digit(arg: &ParseNode) -> Option<&str> {
    match arg {
        ParseNode::OrdGroup(ord) => match ord.body.first() {
            Some(ParseNode::TextOrd(text_ord)) => Some(&text_ord.text),
            _ => None,
        },
        ParseNode::TextOrd(text_ord) => Some(&text_ord.text),
        _ => None,
    }
}

fn style_for_digit(digit: &str) -> Result<&'static Style, ParseError> {
    match digit {
        "0" => Ok(DISPLAY),
        "1" => Ok(TEXT),
        "2" => Ok(SCRIPT),
        "3" => Ok(SCRIPTSCRIPT),
        other => Err(ParseError::new(ParseErrorKind::InvalidGenfracStyle {
            level: other.to_owned(),
        })),
    }
}

/// Register the fraction families.
pub fn define_genfrac(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Genfrac),
        names: &[
            "\\dfrac",
            "\\frac",
            "\\tfrac",
            "\\dbinom",
            "\\binom",
            "\\tbinom",
            "\\\\atopfrac",
            "\\\\bracefrac",
            "\\\\brackfrac",
        ],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_argument: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| genfrac_from_name(&context, &args)),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    // \cfrac: continued fraction, numerator gets a strut.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Genfrac),
        names: &["\\cfrac"],
        props: FunctionPropSpec::with_num_args(2),
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Genfrac(Box::new(ParseNodeGenfrac {
                mode: context.parser.mode,
                loc: context.loc(),
                continued: true,
                numer: Box::new(args[0].clone()),
                denom: Box::new(args[1].clone()),
                has_bar_line: true,
                left_delim: None,
                right_delim: None,
                size: Some(DISPLAY),
                bar_size: None,
            })))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // The infix forms collect their flanks in parse_expression.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Infix),
        names: &["\\over", "\\choose", "\\atop", "\\brace", "\\brack"],
        props: FunctionPropSpec {
            infix: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, _args, _opt_args| {
            let Some(replace_with) = INFIX_REPLACE.get(context.func_name.as_str()) else {
                return Err(ParseError::new(ParseErrorKind::UnrecognizedGenfracCommand {
                    command: context.func_name.clone(),
                }));
            };
            Ok(ParseNode::Infix(ParseNodeInfix {
                mode: context.parser.mode,
                loc: context.loc(),
                replace_with: (*replace_with).to_owned(),
                size: None,
                token: context.token.cloned(),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // \above takes an explicit bar size.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Infix),
        names: &["\\above"],
        props: FunctionPropSpec {
            num_args: 1,
            arg_types: Some(vec![ArgType::Size]),
            infix: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Size(size) = &args[0] else {
                return Err(ParseError::new("\\above argument must be a size"));
            };
            Ok(ParseNode::Infix(ParseNodeInfix {
                mode: context.parser.mode,
                loc: context.loc(),
                replace_with: "\\\\abovefrac".to_owned(),
                size: Some(size.value.clone()),
                token: context.token.cloned(),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Genfrac),
        names: &["\\\\abovefrac"],
        props: FunctionPropSpec::with_num_args(3),
        handler: Some(|context, args, _opt_args| {
            let ParseNode::Infix(infix) = &args[1] else {
                return Err(ParseError::new(
                    "\\\\abovefrac second argument must be an infix node",
                ));
            };
            let bar_size = infix.size.clone();
            let has_bar_line = bar_size.as_ref().is_some_and(|m| m.number > 0.0);

            Ok(frac_node(&context, &args[0], &args[2], has_bar_line, (None, None), None, bar_size))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // \genfrac{left}{right}{barsize}{style}{numer}{denom}
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Genfrac),
        names: &["\\genfrac"],
        props: FunctionPropSpec {
            num_args: 6,
            arg_types: Some(vec![
                ArgType::Mode(Mode::Math),
                ArgType::Mode(Mode::Math),
                ArgType::Size,
                ArgType::Mode(Mode::Text),
                ArgType::Mode(Mode::Math),
                ArgType::Mode(Mode::Math),
            ]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let left_delim = match normalize_argument(&args[0]) {
                ParseNode::Atom(node) if node.family == Atom::Open => delim_from_value(&node.text),
                _ => None,
            };
            let right_delim = match normalize_argument(&args[1]) {
                ParseNode::Atom(node) if node.family == Atom::Close => delim_from_value(&node.text),
                _ => None,
            };

            let mut has_bar_line = true;
            let bar_size = if let ParseNode::Size(size) = &args[2] {
                if size.is_blank {
                    None
                } else {
                    has_bar_line = size.value.number > 0.0;
                    Some(size.value.clone())
                }
            } else {
                None
            };

            let size = style_digit(&args[3]).map(style_for_digit).transpose()?;

            Ok(frac_node(
                &context,
                &args[4],
                &args[5],
                has_bar_line,
                (left_delim, right_delim),
                size,
                bar_size,
            ))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}

/// The fraction bar, when one is drawn, plus its thickness and the spacing
/// unit the clearances are measured in.
fn make_bar(
    group: &ParseNodeGenfrac,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<(Option<DomSpan>, f64, f64), ParseError> {
    if !group.has_bar_line {
        return Ok((None, 0.0, options.font_metrics().default_rule_thickness));
    }
    let thickness = group
        .bar_size
        .as_ref()
        .map(|bar_size| ctx.calculate_size(bar_size, options))
        .transpose()?;
    let rule = make_line_span("frac-line", options, thickness);
    let width = rule.height;
    Ok((Some(rule), width, width))
}

/// Rule 15 initial shifts and clearance for the chosen style.
fn initial_shifts(
    display_sized: bool,
    rule_width: f64,
    rule_spacing: f64,
    fm: &FontMetrics,
) -> (f64, f64, f64) {
    let has_bar = rule_width > 0.0;
    if display_sized {
        let clearance = rule_spacing * if has_bar { 3.0 } else { 7.0 };
        (fm.num1, fm.denom1, clearance)
    } else if has_bar {
        (fm.num2, fm.denom2, rule_spacing)
    } else {
        (fm.num3, fm.denom2, 3.0 * rule_spacing)
    }
}

/// Push a shift outward until `gap` reaches `clearance`; returns the
/// adjusted shift.
fn widen(shift: f64, gap: f64, clearance: f64) -> f64 {
    if gap < clearance { shift + (clearance - gap) } else { shift }
}

/// The delimiter extent flanking a fraction in the given style.
fn delimiter_extent(style: &Style, options: &Options) -> f64 {
    if style.size == DISPLAY.size {
        options.font_metrics().delim1
    } else if style.size == SCRIPTSCRIPT.size {
        options.having_style(SCRIPT).font_metrics().delim2
    } else {
        options.font_metrics().delim2
    }
}

/// A flanking delimiter span, or the null placeholder.
fn flank(
    delim: Option<&String>,
    class: &str,
    extent: f64,
    style: &'static Style,
    group_mode: Mode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<DomSpan, ParseError> {
    match delim {
        Some(delim) => custom_sized_delim(
            ctx,
            delim,
            extent,
            true,
            &options.having_style(style),
            group_mode,
            &[class.to_owned()],
        ),
        None => Ok(make_null_delimiter(options, &[class.to_owned()])),
    }
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Genfrac(group) = node else {
        return Err(ParseError::new("Expected Genfrac node"));
    };

    let style = adjust_style(group.size, options.style);
    let fm = options.font_metrics();
    let axis = fm.axis_height;

    let mut numer = build_html::build_group(
        ctx,
        &group.numer,
        &options.having_style(style.frac_num()),
        Some(options),
    )?;
    if group.continued {
        // \cfrac inserts a \strut into the numerator (TeXbook p. 353).
        let pt = 1.0 / fm.pt_per_em;
        if let Some(height) = numer.height_mut() {
            *height = height.max(8.5 * pt);
        }
        if let Some(depth) = numer.depth_mut() {
            *depth = depth.max(3.5 * pt);
        }
    }
    let denom = build_html::build_group(
        ctx,
        &group.denom,
        &options.having_style(style.frac_den()),
        Some(options),
    )?;

    let (rule, rule_width, rule_spacing) = make_bar(group, options, ctx)?;
    let half_rule = rule_width / 2.0;

    let display_sized = style.id == DISPLAY.id || group.size == Some(DISPLAY);
    let (num_shift, denom_shift, clearance) =
        initial_shifts(display_sized, rule_width, rule_spacing, fm);

    // Rules 15c/15d: open the gaps up to the required clearance, against the
    // bar when there is one, against each other when there is not.
    let (num_shift, denom_shift) = if rule.is_some() {
        let num_gap = (num_shift - numer.depth()) - (axis + half_rule);
        let denom_gap = (axis - half_rule) - (denom.height() - denom_shift);
        (
            widen(num_shift, num_gap, clearance),
            widen(denom_shift, denom_gap, clearance),
        )
    } else {
        let gap = (num_shift - numer.depth()) - (denom.height() - denom_shift);
        let spread = 0.5 * (clearance - gap).max(0.0);
        (num_shift + spread, denom_shift + spread)
    };

    // Stack bottom-up: denominator, optional bar on the axis, numerator.
    let bar_child = rule.map(|bar| {
        VListElemAndShift::builder()
            .elem(bar.into())
            .shift(-(axis - half_rule))
            .build()
    });
    let stack: Vec<VListElemAndShift> = [
        Some(VListElemAndShift::builder().elem(denom).shift(denom_shift).build()),
        bar_child,
        Some(VListElemAndShift::builder().elem(numer).shift(-num_shift).build()),
    ]
    .into_iter()
    .flatten()
    .collect();

    let mut frac = make_v_list(VListParam::IndividualShift { children: stack }, options)?;

    // Account for forced style changes (\dfrac, \tfrac).
    let new_options = options.having_style(style);
    let rescale = new_options.size_multiplier / options.size_multiplier;
    frac.height *= rescale;
    frac.depth *= rescale;

    let extent = delimiter_extent(style, options);
    let left = flank(
        group.left_delim.as_ref(),
        "mopen",
        extent,
        style,
        group.mode,
        options,
        ctx,
    )?;
    let right = if group.continued {
        make_span(vec![], vec![], None, None)
    } else {
        flank(
            group.right_delim.as_ref(),
            "mclose",
            extent,
            style,
            group.mode,
            options,
            ctx,
        )?
    };

    let frac_span = make_span(vec!["mfrac".to_owned()], vec![frac.into()], None, None);
    let classes: Vec<String> = ["mord".to_owned()]
        .into_iter()
        .chain(new_options.sizing_classes(options))
        .collect();
    Ok(make_span(
        classes,
        vec![left.into(), frac_span.into(), right.into()],
        Some(options),
        None,
    )
    .into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Genfrac(group) = node else {
        return Err(ParseError::new("Expected Genfrac node"));
    };

    let style = adjust_style(group.size, options.style);
    let numer = build_mathml::build_group(ctx, &group.numer, &options.having_style(style.frac_num()))?;
    let denom = build_mathml::build_group(ctx, &group.denom, &options.having_style(style.frac_den()))?;

    let mut mfrac = MathNode::with_children(MathNodeType::Mfrac, vec![numer, denom]);
    if !group.has_bar_line {
        mfrac.set_attribute("linethickness", "0px");
    } else if let Some(bar_size) = &group.bar_size {
        let size = ctx.calculate_size(bar_size, options)?;
        mfrac.set_attribute("linethickness", make_em(size));
    }

    let mut final_node = mfrac;
    if style.size != options.style.size {
        let mut mstyle =
            MathNode::with_children(MathNodeType::Mstyle, vec![final_node.into()]);
        mstyle.set_attribute(
            "displaystyle",
            if style.size == DISPLAY.size { "true" } else { "false" },
        );
        mstyle.set_attribute("scriptlevel", "0");
        final_node = mstyle;
    }

    if group.left_delim.is_some() || group.right_delim.is_some() {
        let mut children = Vec::new();
        if let Some(left) = &group.left_delim {
            let mut mo = MathNode::with_children(
                MathNodeType::Mo,
                vec![
                    TextNode {
                        text: left.replace('\\', ""),
                    }
                    .into(),
                ],
            );
            mo.set_attribute("fence", "true");
            children.push(mo.into());
        }
        children.push(final_node.into());
        if let Some(right) = &group.right_delim {
            let mut mo = MathNode::with_children(
                MathNodeType::Mo,
                vec![
                    TextNode {
                        text: right.replace('\\', ""),
                    }
                    .into(),
                ],
            );
            mo.set_attribute("fence", "true");
            children.push(mo.into());
        }
        return Ok(make_row(&children));
    }

    Ok(final_node.into())
}
