//! Entry points: render to markup, parse, render to a box tree.

use crate::build_common::make_span;
use crate::build_tree::{build_html_tree, build_tree};
use crate::context::MathTexContext;
use crate::dom_tree::{DomSpan, SymbolNode};
use crate::parse_tree::parse_tree;
use crate::parser::parse_node::AnyParseNode;
use crate::tree::VirtualNode as _;
use crate::types::{ParseError, Settings};

/// With `throw_on_error` off, a failed parse renders as a single red symbol
/// leaf carrying the whole input, titled with the error message.
fn render_error(error: &ParseError, expression: &str, settings: &Settings) -> DomSpan {
    let mut node = make_span(
        vec!["katex-error".to_owned()],
        vec![SymbolNode::builder().text(expression).build().into()],
        None,
        None,
    );
    node.attributes.insert("title".to_owned(), error.to_string());
    node.attributes.insert(
        "style".to_owned(),
        format!("color: {}", settings.error_color),
    );
    node
}

fn build_or_render_error<F>(
    expression: &str,
    settings: &Settings,
    build: F,
) -> Result<DomSpan, ParseError>
where
    F: FnOnce() -> Result<DomSpan, ParseError>,
{
    match build() {
        Ok(dom) => Ok(dom),
        Err(e) if settings.throw_on_error => Err(e),
        Err(e) => Ok(render_error(&e, expression, settings)),
    }
}

/// Parse and build `expression`, returning the output markup.
pub fn render_to_string(
    ctx: &MathTexContext,
    expression: &str,
    settings: &Settings,
) -> Result<String, ParseError> {
    let dom_tree = render_to_dom_tree(ctx, expression, settings)?;
    dom_tree.to_markup()
}

/// Parse `expression` and return the raw parse tree.
pub fn parse(
    ctx: &MathTexContext,
    expression: &str,
    settings: &Settings,
) -> Result<Vec<AnyParseNode>, ParseError> {
    parse_tree(ctx, expression, settings)
}

/// Parse and build `expression`, returning the output box tree.
pub fn render_to_dom_tree(
    ctx: &MathTexContext,
    expression: &str,
    settings: &Settings,
) -> Result<DomSpan, ParseError> {
    build_or_render_error(expression, settings, || {
        let tree = parse_tree(ctx, expression, settings)?;
        build_tree(ctx, &tree, expression, settings)
    })
}

/// Parse and build `expression`, returning the HTML-only box tree.
pub fn render_to_html_tree(
    ctx: &MathTexContext,
    expression: &str,
    settings: &Settings,
) -> Result<DomSpan, ParseError> {
    build_or_render_error(expression, settings, || {
        let tree = parse_tree(ctx, expression, settings)?;
        build_html_tree(ctx, &tree, settings)
    })
}
