//! `\includegraphics[key=value,...]{url}`.

use crate::context::MathTexContext;
use crate::define_function::{FunctionDefSpec, FunctionPropSpec};
use crate::dom_tree::{HtmlDomNode, Img};
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{self, NodeType, ParseNode};
use crate::spacing_data::MeasurementOwned;
use crate::types::{ArgType, CssProperty, CssStyle, ParseError, ParseErrorKind, TrustContext};
use crate::units::make_em;

fn size_or_zero() -> MeasurementOwned {
    MeasurementOwned {
        number: 0.0,
        unit: "em".to_owned(),
    }
}

fn parse_measurement(s: &str) -> Result<MeasurementOwned, ParseError> {
    let trimmed = s.trim();
    let split = trimmed
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(trimmed.len());
    let number: f64 = trimmed[..split].trim().parse().map_err(|_| {
        ParseError::new(ParseErrorKind::InvalidSize {
            size: trimmed.to_owned(),
        })
    })?;
    let unit = trimmed[split..].trim().to_owned();
    let measurement = MeasurementOwned { number, unit };
    if !crate::units::valid_unit(&measurement) {
        return Err(ParseError::new(ParseErrorKind::InvalidUnit {
            unit: measurement.unit,
        }));
    }
    Ok(measurement)
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Includegraphics(group) = node else {
        return Err(ParseError::new("Expected Includegraphics node"));
    };
    let height = ctx.calculate_size(&group.height, options)?;
    let depth = if group.totalheight.number > 0.0 {
        ctx.calculate_size(&group.totalheight, options)? - height
    } else {
        0.0
    };
    let width = if group.width.number > 0.0 {
        ctx.calculate_size(&group.width, options)?
    } else {
        0.0
    };

    let mut style = CssStyle::default();
    style.insert(CssProperty::Height, make_em(height + depth));
    if width > 0.0 {
        style.insert(CssProperty::Width, make_em(width));
    }
    if depth > 0.0 {
        style.insert(CssProperty::VerticalAlign, make_em(-depth));
    }

    let mut img = Img::new(group.src.clone(), group.alt.clone(), height, depth, style);
    img.max_font_size = options.size_multiplier;
    Ok(img.into())
}

fn mathml_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Includegraphics(group) = node else {
        return Err(ParseError::new("Expected Includegraphics node"));
    };
    let mut mglyph = MathNode::with_children(MathNodeType::Mi, vec![]);
    mglyph.set_attribute("src", group.src.clone());
    mglyph.set_attribute("alt", group.alt.clone());
    let height = ctx.calculate_size(&group.height, options)?;
    mglyph.set_attribute("height", make_em(height));
    Ok(mglyph.into())
}

/// Register `\includegraphics`.
pub fn define_includegraphics(ctx: &mut MathTexContext) {
    ctx.define_function(FunctionDefSpec {
        node_type: Some(NodeType::Includegraphics),
        names: &["\\includegraphics"],
        props: FunctionPropSpec {
            num_args: 1,
            num_optional_args: 1,
            arg_types: Some(vec![ArgType::Raw, ArgType::Url]),
            allowed_in_argument: true,
            ..FunctionPropSpec::with_default()
        },
        handler: Some(|context, args, opt_args| {
            let mut width = size_or_zero();
            let mut height = MeasurementOwned {
                number: 0.9,
                unit: "em".to_owned(),
            };
            let mut totalheight = size_or_zero();
            let mut alt = String::new();

            // Optional key-value list: width, height, totalheight, alt.
            if let Some(Some(ParseNode::Raw(raw))) = opt_args.first() {
                for attribute in raw.string.split(',') {
                    let Some((key, value)) = attribute.split_once('=') else {
                        continue;
                    };
                    match key.trim() {
                        "alt" => alt = value.trim().to_owned(),
                        "width" => width = parse_measurement(value)?,
                        "height" => height = parse_measurement(value)?,
                        "totalheight" => totalheight = parse_measurement(value)?,
                        other => {
                            return Err(ParseError::new(ParseErrorKind::InvalidValue {
                                context: "key to \\includegraphics".to_owned(),
                                value: other.to_owned(),
                            }));
                        }
                    }
                }
            }

            let ParseNode::Url(url) = &args[0] else {
                return Err(ParseError::new("Expected url argument"));
            };
            let src = url.url.clone();

            if alt.is_empty() {
                // Default alt text: the file name without path or extension.
                alt = src
                    .rsplit('/')
                    .next()
                    .unwrap_or(&src)
                    .split('.')
                    .next()
                    .unwrap_or(&src)
                    .to_owned();
            }

            let mut trust_context = TrustContext {
                command: "\\includegraphics".to_owned(),
                url: Some(src.clone()),
                ..TrustContext::default()
            };
            if !context.parser.settings.is_trusted(&mut trust_context) {
                if context.parser.settings.throw_on_error {
                    return Err(ParseError::new(ParseErrorKind::NotTrusted {
                        command: "\\includegraphics".to_owned(),
                    }));
                }
                return Ok(ParseNode::Color(
                    context.parser.format_unsupported_cmd("\\includegraphics"),
                ));
            }

            Ok(ParseNode::Includegraphics(
                parse_node::ParseNodeIncludegraphics {
                    mode: context.parser.mode,
                    loc: context.loc(),
                    alt,
                    width,
                    height,
                    totalheight,
                    src,
                },
            ))
        }),
        html_builder: Some(html_builder),
        mathml_builder: Some(mathml_builder),
    });
}
