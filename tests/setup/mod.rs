//! Shared helpers for the integration suite.

use std::sync::OnceLock;

use mathtex::{
    MathTexContext, ParseError, Settings,
    parse,
    parser::parse_node::ParseNode,
    render_to_string,
    types::{StrictMode, StrictSetting},
};

static DEFAULT_CONTEXT: OnceLock<MathTexContext> = OnceLock::new();

pub fn default_ctx() -> &'static MathTexContext {
    DEFAULT_CONTEXT.get_or_init(MathTexContext::default)
}

pub fn default_settings() -> Settings {
    Settings::builder()
        .strict(StrictSetting::Mode(StrictMode::Ignore))
        .build()
}

pub fn display_settings() -> Settings {
    Settings::builder()
        .strict(StrictSetting::Mode(StrictMode::Ignore))
        .display_mode(true)
        .build()
}

/// A "describe"-style sub-assertion runner: names the failing expectation.
pub fn it<F>(description: &str, body: F)
where
    F: FnOnce() -> Result<(), ParseError>,
{
    if let Err(e) = body() {
        panic!("failed: {description}: {e}");
    }
}

pub fn get_parsed(expression: &str) -> Result<Vec<ParseNode>, ParseError> {
    parse(default_ctx(), expression, &default_settings())
}

pub fn render(expression: &str) -> Result<String, ParseError> {
    render_to_string(default_ctx(), expression, &default_settings())
}

pub fn render_display(expression: &str) -> Result<String, ParseError> {
    render_to_string(default_ctx(), expression, &display_settings())
}

#[allow(dead_code)]
pub fn expect_parse_error(expression: &str) {
    assert!(
        get_parsed(expression).is_err(),
        "expected parse failure for {expression:?}"
    );
}
