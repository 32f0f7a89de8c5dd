//! Enclosures: `\boxed`, `\fbox`, `\colorbox`, `\fcolorbox`, the `\cancel`
//! family, and `\sout`.

use crate::build_common::{VListElemAndShift, VListParam, make_span, make_v_list};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::{HtmlDomNode, LineNode, SvgChildNode, SvgNode};
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::namespace::KeyMap;
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::types::{ArgType, CssProperty, Mode, ParseError};
use crate::units::make_em;

fn enclose_span(
    inner: HtmlDomNode,
    label: &str,
    top_pad: f64,
    bottom_pad: f64,
    options: &Options,
) -> crate::dom_tree::DomSpan {
    let mut img = make_span(vec![], vec![inner], Some(options), None);
    img.height += top_pad;
    img.depth += bottom_pad;

    if label == "\\fbox" || label == "\\boxed" || label == "\\fcolorbox" {
        img.classes.push("boxpad".to_owned());
        img.classes.push("fbox".to_owned());
    } else if label == "\\colorbox" {
        img.classes.push("boxpad".to_owned());
    } else {
        img.classes.push("cancel-pad".to_owned());
    }
    img
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Enclose(group) = node else {
        return Err(ParseError::new("Expected Enclose node"));
    };

    let inner = build_html::build_group(ctx, &group.body, options, None)?;
    let label = group.label.as_str();

    // Padding: boxes get fboxsep; cancels get a fixed 0.2em.
    let (top_pad, bottom_pad) = if label.contains("colorbox") || label.contains("fbox") || label == "\\boxed" {
        let sep = options.font_metrics().fbox_sep;
        (sep, sep)
    } else {
        (0.2, 0.2)
    };

    let mut img = enclose_span(inner, label, top_pad, bottom_pad, options);

    if let Some(background) = &group.background_color {
        img.style
            .insert(CssProperty::BackgroundColor, background.clone());
    }
    if label == "\\fbox" || label == "\\boxed" || label == "\\fcolorbox" {
        img.style.insert(CssProperty::BorderStyle, "solid");
        img.style.insert(
            CssProperty::BorderWidth,
            make_em(options.font_metrics().fbox_rule),
        );
        if let Some(border) = &group.border_color {
            img.style.insert(CssProperty::BorderColor, border.clone());
        }
    }

    // The cancel family overlays an SVG stroke.
    if matches!(label, "\\cancel" | "\\bcancel" | "\\xcancel" | "\\sout") {
        let mut lines: Vec<SvgChildNode> = Vec::new();
        let line =
            |x1: &str, y1: &str, x2: &str, y2: &str| {
                let mut attributes = KeyMap::default();
                attributes.extend([
                    ("x1".to_owned(), x1.to_owned()),
                    ("y1".to_owned(), y1.to_owned()),
                    ("x2".to_owned(), x2.to_owned()),
                    ("y2".to_owned(), y2.to_owned()),
                    ("stroke-width".to_owned(), "0.046em".to_owned()),
                ]);
                SvgChildNode::Line(LineNode { attributes })
            };
        match label {
            "\\cancel" => lines.push(line("0", "100%", "100%", "0")),
            "\\bcancel" => lines.push(line("0", "0", "100%", "100%")),
            "\\xcancel" => {
                lines.push(line("0", "100%", "100%", "0"));
                lines.push(line("0", "0", "100%", "100%"));
            }
            _ => lines.push(line("0", "50%", "100%", "50%")),
        }
        let mut svg_attributes = KeyMap::default();
        svg_attributes.extend([
            ("width".to_owned(), "100%".to_owned()),
            ("height".to_owned(), "100%".to_owned()),
        ]);
        let svg = SvgNode::builder()
            .children(lines)
            .attributes(svg_attributes)
            .build();
        let mut overlay = make_span(vec!["stretchy".to_owned()], vec![svg.into()], Some(options), None);
        overlay.style.insert(CssProperty::Height, "100%");

        let img_height = img.height;
        let img_depth = img.depth;
        let vlist = make_v_list(
            VListParam::IndividualShift {
                children: vec![
                    VListElemAndShift::builder().elem(img.into()).shift(0.0).build(),
                    VListElemAndShift::builder()
                        .elem(overlay.into())
                        .shift(img_depth)
                        .wrapper_classes(vec!["svg-align".to_owned()])
                        .build(),
                ],
            },
            options,
        )?;
        let mut span = make_span(
            vec!["mord".to_owned(), "cancel-lap".to_owned()],
            vec![vlist.into()],
            Some(options),
            None,
        );
        span.height = span.height.max(img_height);
        return Ok(span.into());
    }

    Ok(make_span(vec!["mord".to_owned()], vec![img.into()], Some(options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Enclose(group) = node else {
        return Err(ParseError::new("Expected Enclose node"));
    };
    let body = build_mathml::build_group(ctx, &group.body, options)?;
    let mut menclose = MathNode::with_children(MathNodeType::Menclose, vec![body]);
    match group.label.as_str() {
        "\\cancel" => menclose.set_attribute("notation", "updiagonalstrike"),
        "\\bcancel" => menclose.set_attribute("notation", "downdiagonalstrike"),
        "\\xcancel" => {
            menclose.set_attribute("notation", "updiagonalstrike downdiagonalstrike");
        }
        "\\sout" => menclose.set_attribute("notation", "horizontalstrike"),
        _ => menclose.set_attribute("notation", "box"),
    }
    if let Some(background) = &group.background_color {
        menclose.set_attribute("mathbackground", background.clone());
    }
    Ok(menclose.into())
}

/// Register the enclosure commands.
pub fn define_enclose(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Enclose),
        names: &["\\colorbox"],
        props: FunctionPropSpec {
            num_args: 2,
            allowed_in_text: true,
            arg_types: Some(vec![ArgType::Color, ArgType::Mode(Mode::Text)]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::ColorToken(color) = &args[0] else {
                return Err(ParseError::new("Expected color token"));
            };
            Ok(ParseNode::Enclose(parse_node::ParseNodeEnclose {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                background_color: Some(color.color.clone()),
                border_color: None,
                body: Box::new(args[1].clone()),
            }))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Enclose),
        names: &["\\fcolorbox"],
        props: FunctionPropSpec {
            num_args: 3,
            allowed_in_text: true,
            arg_types: Some(vec![ArgType::Color, ArgType::Color, ArgType::Mode(Mode::Text)]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let ParseNode::ColorToken(border) = &args[0] else {
                return Err(ParseError::new("Expected color token"));
            };
            let ParseNode::ColorToken(background) = &args[1] else {
                return Err(ParseError::new("Expected color token"));
            };
            Ok(ParseNode::Enclose(parse_node::ParseNodeEnclose {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                background_color: Some(background.color.clone()),
                border_color: Some(border.color.clone()),
                body: Box::new(args[2].clone()),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Enclose),
        names: &["\\fbox"],
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            arg_types: Some(vec![ArgType::Hbox]),
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Enclose(parse_node::ParseNodeEnclose {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                background_color: None,
                border_color: None,
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Enclose),
        names: &["\\boxed", "\\cancel", "\\bcancel", "\\xcancel", "\\sout"],
        props: FunctionPropSpec::with_num_args(1),
        handler: Some(|context, args, _opt_args| {
            Ok(ParseNode::Enclose(parse_node::ParseNodeEnclose {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                background_color: None,
                border_color: None,
                body: Box::new(args[0].clone()),
            }))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
