//! mathtex - TeX math typesetting without a browser
//!
//! Parses a TeX-compatible math dialect and typesets it into an HTML box
//! tree (exact heights, depths, and inter-atom spacing per the TeXbook's
//! appendix G rules) plus a parallel MathML tree. Rendering of the
//! characters themselves is delegated to the host's text engine through
//! font-metric tables and CSS class selectors.
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::unimplemented)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::undocumented_unsafe_blocks)]
// clippy exceptions
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::too_many_arguments)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::single_call_fn)]
#![allow(clippy::module_name_repetitions)]

extern crate alloc;

pub mod build_common;
pub mod build_html;
pub mod build_mathml;
pub mod build_tree;
pub mod context;
pub mod core;
pub mod define_environment;
pub mod define_function;
pub mod delimiter;
pub mod dom_tree;
pub mod font_metrics;
pub mod font_metrics_data;
pub mod functions;
pub mod lexer;
pub mod macro_expander;
pub mod macros;
pub mod mathml_tree;
pub mod namespace;
pub mod options;
/// Parse an input string into the parse-node tree.
pub mod parse_tree;
/// The recursive-descent parser and the parse-node types.
pub mod parser;
pub mod spacing_data;
pub mod stretchy;
pub mod style;
pub mod svg_geometry;
pub mod symbols;
pub mod tree;
pub mod types;
pub mod unicode;
pub mod units;
pub mod utils;

/// The registry of functions, builders, symbols, environments, and font
/// metrics. Build one (usually via `Default`), then share it read-only
/// across renders; the context is immutable after initialization.
pub use crate::context::MathTexContext;

/// Parse and build an expression, returning the output markup.
///
/// ```rust
/// use mathtex::{MathTexContext, Settings, render_to_string};
///
/// fn main() -> Result<(), mathtex::ParseError> {
///     let ctx = MathTexContext::default();
///     let settings = Settings::default();
///     let html = render_to_string(&ctx, r"x = \frac{-b \pm \sqrt{b^2 - 4ac}}{2a}", &settings)?;
///     assert!(html.contains("katex-html"));
///     Ok(())
/// }
/// ```
pub use crate::core::render_to_string;

/// Parse an expression and return the raw parse tree.
///
/// The tree shape is an implementation detail and may change between
/// releases; prefer [`render_to_string`].
pub use crate::core::parse;

/// Parse and build an expression, returning the output box tree.
pub use crate::core::render_to_dom_tree;

/// Parse and build an expression, returning the HTML-only box tree.
pub use crate::core::render_to_html_tree;

/// Glyph metric lookup across the builtin font tables.
pub use crate::font_metrics::get_character_metrics;

/// One glyph's measured box: depth, height, italic, skew, width.
pub use crate::font_metrics_data::CharacterMetrics;

/// The error type thrown for every failure: lexing, parsing, or building.
pub use crate::types::ParseError;

pub use crate::types::{OutputFormat, Settings};
pub use crate::types::{
    StrictFunction, StrictMode, StrictReturn, StrictSetting, TrustContext, TrustFunction,
    TrustSetting,
};

/// Crate version, for hosts that surface it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
