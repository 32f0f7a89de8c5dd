//! Accents above a base: `\hat`, `\vec`, `\widehat`, and the text-mode
//! accents (`\'`, `\"`, …).

use crate::build_common::{
    VListChild, VListElem, VListKern, VListParam, make_span, make_symbol, make_v_list, static_svg,
    wrap_fragment,
};
use crate::build_html;
use crate::build_mathml;
use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec, normalize_argument};
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::stretchy;
use crate::types::{ArgType, CssProperty, Mode, ParseError};
use crate::units::make_em;

const STRETCHY_ACCENTS: &[&str] = &[
    "\\widehat",
    "\\widecheck",
    "\\widetilde",
    "\\overleftarrow",
    "\\overrightarrow",
    "\\overleftrightarrow",
    "\\overgroup",
    "\\overleftharpoon",
    "\\overrightharpoon",
];

const NON_STRETCHY_ACCENTS: &[&str] = &[
    "\\acute",
    "\\grave",
    "\\ddot",
    "\\tilde",
    "\\bar",
    "\\breve",
    "\\check",
    "\\hat",
    "\\vec",
    "\\dot",
    "\\mathring",
];

const TEXT_ACCENTS: &[&str] = &[
    "\\'", "\\`", "\\^", "\\~", "\\=", "\\u", "\\.", "\\\"", "\\r", "\\H", "\\v",
];

/// The skew of the accented base, for accent positioning.
fn base_skew(base: &ParseNode, options: &Options, ctx: &MathTexContext) -> f64 {
    if !base.is_character_box() {
        return 0.0;
    }
    let base_char = base.to_base_elem();
    build_html::build_group(ctx, base_char, &options.having_cramped_style(), None)
        .ok()
        .and_then(|built| match built {
            HtmlDomNode::Symbol(symbol) => Some(symbol.skew),
            _ => None,
        })
        .unwrap_or(0.0)
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Accent(group) = node else {
        return Err(ParseError::new("Expected Accent node"));
    };

    // Rule 12: the base is built in cramped style.
    let body = build_html::build_group(ctx, &group.base, &options.having_cramped_style(), None)?;
    let body = wrap_fragment(body, options);

    let skew = if group.is_shifty {
        base_skew(&group.base, options, ctx)
    } else {
        0.0
    };

    // Clamp the accent's vertical gap to the x-height.
    let clearance = body.height().min(options.font_metrics().x_height);

    let accent_body: HtmlDomNode = if group.is_stretchy {
        let accent = stretchy::svg_span(node, options)?;
        let vlist = make_v_list(
            VListParam::FirstBaseline {
                children: vec![
                    VListElem::builder().elem(body).build().into(),
                    VListElem::builder()
                        .elem(accent)
                        .wrapper_classes(vec!["svg-align".to_owned()])
                        .wrapper_style({
                            let mut style = crate::types::CssStyle::default();
                            if skew > 0.0 {
                                style.insert(CssProperty::Width, format!("calc(100% - {})", make_em(2.0 * skew)));
                                style.insert(CssProperty::MarginLeft, make_em(2.0 * skew));
                            }
                            style
                        })
                        .build()
                        .into(),
                ],
            },
            options,
        )?;
        vlist.into()
    } else {
        let accent_name = group.label.as_str();
        let accent: HtmlDomNode = if accent_name == "\\vec" {
            // \vec draws the SVG arrowhead from the overlay table.
            static_svg("vec", options)?.into()
        } else {
            let mut symbol = make_symbol(
                ctx,
                accent_name,
                "Main-Regular",
                group.mode,
                Some(options),
                None,
            )?;
            // The accent glyph's box is nonsense for stacking; zero it.
            symbol.italic = 0.0;
            let mut accent_span = make_span(
                vec!["accent-body".to_owned()],
                vec![symbol.into()],
                None,
                None,
            );
            // A \H-style full accent is positioned by its center.
            accent_span.style.insert(
                CssProperty::Left,
                make_em(skew),
            );
            accent_span.into()
        };

        let vlist = make_v_list(
            VListParam::FirstBaseline {
                children: vec![
                    VListElem::builder().elem(body).build().into(),
                    VListChild::Kern(VListKern { size: -clearance }),
                    VListElem::builder().elem(accent).build().into(),
                ],
            },
            options,
        )?;
        vlist.into()
    };

    Ok(make_span(
        vec!["mord".to_owned(), "accent".to_owned()],
        vec![accent_body],
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
    let ParseNode::Accent(group) = node else {
        return Err(ParseError::new("Expected Accent node"));
    };

    let accent_node: MathDomNode = if group.is_stretchy {
        stretchy::math_ml_node(&group.label).into()
    } else {
        let accent_char = ctx
            .symbols
            .get(Mode::Math, &group.label)
            .and_then(|info| info.replace)
            .map_or_else(|| group.label.clone(), |c| c.to_string());
        let mut mo = MathNode::with_children(
            MathNodeType::Mo,
            vec![crate::mathml_tree::TextNode { text: accent_char }.into()],
        );
        mo.set_attribute("stretchy", "false");
        mo.into()
    };

    let base = build_mathml::build_group(ctx, &group.base, options)?;
    let mut mover = MathNode::with_children(MathNodeType::Mover, vec![base, accent_node]);
    mover.set_attribute("accent", "true");
    Ok(mover.into())
}

/// Register the accent families.
pub fn define_accent(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Accent),
        names: STRETCHY_ACCENTS,
        props: FunctionPropSpec::with_num_args(1),
        handler: Some(|context, args, _opt_args| {
            let base = normalize_argument(&args[0]).clone();
            Ok(ParseNode::Accent(Box::new(parse_node::ParseNodeAccent {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                is_stretchy: true,
                is_shifty: false,
                base: Box::new(base),
            })))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });

    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Accent),
        names: NON_STRETCHY_ACCENTS,
        props: FunctionPropSpec {
            num_args: 1,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, _opt_args| {
            let base = normalize_argument(&args[0]).clone();
            Ok(ParseNode::Accent(Box::new(parse_node::ParseNodeAccent {
                mode: context.parser.mode,
                loc: context.loc(),
                label: context.func_name.clone(),
                is_stretchy: false,
                is_shifty: true,
                base: Box::new(base),
            })))
        }),
        html_builder: None,
        mathml_builder: None,
    });

    // Text-mode accents.
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Accent),
        names: TEXT_ACCENTS,
        props: FunctionPropSpec {
            num_args: 1,
            allowed_in_text: true,
            allowed_in_math: true,
            arg_types: Some(vec![ArgType::Primitive]),
            ..FunctionPropSpec::default()
        },
        handler: Some(|context, args, _opt_args| {
            let base = args[0].clone();
            let mode = context.parser.mode;
            if mode == Mode::Math {
                context.parser.settings.report_nonstrict(
                    "mathVsTextAccents",
                    &format!("LaTeX's accent {} works only in text mode", context.func_name),
                    None,
                )?;
            }
            Ok(ParseNode::Accent(Box::new(parse_node::ParseNodeAccent {
                mode: Mode::Text,
                loc: context.loc(),
                label: context.func_name.clone(),
                is_stretchy: false,
                is_shifty: true,
                base: Box::new(base),
            })))
        }),
        html_builder: None,
        mathml_builder: None,
    });
}
