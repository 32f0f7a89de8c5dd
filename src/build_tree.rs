//! Final output assembly: pick output trees per settings, wrap for display
//! mode.

use crate::build_common::make_span;
use crate::build_html::build_html;
use crate::build_mathml::build_mathml;
use crate::context::MathTexContext;
use crate::dom_tree::DomSpan;
use crate::options::Options;
use crate::parser::parse_node::AnyParseNode;
use crate::style;
use crate::types::{OutputFormat, ParseError, Settings};

fn options_from_settings(settings: &Settings) -> Options {
    let style = if settings.display_mode {
        style::DISPLAY
    } else {
        style::TEXT
    };
    Options::builder()
        .style(style)
        .max_size(settings.max_size)
        .min_rule_thickness(settings.min_rule_thickness)
        .build()
}

fn display_wrap(node: DomSpan, settings: &Settings) -> DomSpan {
    if settings.display_mode {
        let mut classes = vec!["katex-display".to_owned()];
        if settings.leqno {
            classes.push("leqno".to_owned());
        }
        if settings.fleqn {
            classes.push("fleqn".to_owned());
        }
        make_span(classes, vec![node.into()], None, None)
    } else {
        node
    }
}

/// Build the output span holding the selected output trees.
pub fn build_tree(
    ctx: &MathTexContext,
    tree: &[AnyParseNode],
    expression: &str,
    settings: &Settings,
) -> Result<DomSpan, ParseError> {
    let options = options_from_settings(settings);

    let node = match settings.output {
        OutputFormat::Mathml => {
            build_mathml(ctx, tree, expression, &options, settings.display_mode, true)?
        }
        OutputFormat::Html => {
            let html_node = build_html(ctx, tree, &options)?;
            make_span(vec!["katex".to_owned()], vec![html_node.into()], None, None)
        }
        OutputFormat::HtmlAndMathml => {
            let mathml_node =
                build_mathml(ctx, tree, expression, &options, settings.display_mode, false)?;
            let html_node = build_html(ctx, tree, &options)?;
            make_span(
                vec!["katex".to_owned()],
                vec![mathml_node.into(), html_node.into()],
                None,
                None,
            )
        }
    };

    Ok(display_wrap(node, settings))
}

/// Build the HTML-only output span regardless of the settings' output mode.
pub fn build_html_tree(
    ctx: &MathTexContext,
    tree: &[AnyParseNode],
    settings: &Settings,
) -> Result<DomSpan, ParseError> {
    let options = options_from_settings(settings);
    let html_node = build_html(ctx, tree, &options)?;
    let node = make_span(vec!["katex".to_owned()], vec![html_node.into()], None, None);
    Ok(display_wrap(node, settings))
}
