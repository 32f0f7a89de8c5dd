//! Core type definitions shared across the pipeline.

mod source_location;
use core::fmt;

use alloc::rc::Rc;

use crate::define_environment::EnvSpec;
use crate::define_function::FunctionSpec;
use crate::parser::parse_node::NodeType;
pub use source_location::{SourceLocation, SourceRangeRef};
use strum::{AsRefStr, EnumCount, EnumIter, EnumString, FromRepr};

mod parse_error;
pub use parse_error::{ErrorLocationProvider, ParseError, ParseErrorKind};

mod tokens;
pub use crate::symbols::Mode;
pub use tokens::Token;

mod settings;
pub use settings::{
    OutputFormat, Settings, StrictFunction, StrictMode, StrictReturn, StrictSetting, TrustContext,
    TrustFunction, TrustSetting,
};

/// CSS properties the builders are allowed to emit.
///
/// Serialized in kebab-case (the CSS spelling) via `strum`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter, EnumCount, FromRepr, strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
#[repr(u8)]
pub enum CssProperty {
    /// background-color
    BackgroundColor,
    /// border-bottom-width
    BorderBottomWidth,
    /// border-color
    BorderColor,
    /// border-right-style
    BorderRightStyle,
    /// border-right-width
    BorderRightWidth,
    /// border-top-width
    BorderTopWidth,
    /// border-style
    BorderStyle,
    /// border-width
    BorderWidth,
    /// bottom
    Bottom,
    /// color
    Color,
    /// height
    Height,
    /// left
    Left,
    /// margin
    Margin,
    /// margin-left
    MarginLeft,
    /// margin-right
    MarginRight,
    /// margin-top
    MarginTop,
    /// min-width
    MinWidth,
    /// padding-left
    PaddingLeft,
    /// position
    Position,
    /// top
    Top,
    /// width
    Width,
    /// vertical-align
    VerticalAlign,
}

/// Inline style map for a visual node.
///
/// Stored densely as one slot per [`CssProperty`]; iteration yields set
/// properties in declaration order of the enum. Values are `Rc<str>` so that
/// cloning a styled subtree shares the strings.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct CssStyle {
    map: [Option<Rc<str>>; CssProperty::COUNT],
}

impl fmt::Debug for CssStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ds = f.debug_struct("CssStyle");
        for (property, value) in self {
            ds.field(property.as_ref(), &value);
        }
        ds.finish()
    }
}

/// Iterator over set properties of a [`CssStyle`].
pub struct CssStyleIter<'a> {
    index: usize,
    data: &'a [Option<Rc<str>>; CssProperty::COUNT],
}

impl<'a> Iterator for CssStyleIter<'a> {
    type Item = (CssProperty, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let data: &'a [Option<Rc<str>>] = self.data;
        let (idx, prop, value) = data
            .iter()
            .enumerate()
            .skip(self.index)
            .find_map(|(idx, slot)| {
                let value = slot.as_deref()?;
                CssProperty::from_repr(idx as u8).map(|prop| (idx, prop, value))
            })?;
        self.index = idx + 1;
        Some((prop, value))
    }
}

impl<'a> IntoIterator for &'a CssStyle {
    type Item = (CssProperty, &'a str);
    type IntoIter = CssStyleIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        CssStyleIter {
            index: 0,
            data: &self.map,
        }
    }
}

impl CssStyle {
    /// Set a property.
    #[inline]
    pub fn insert<T: Into<Rc<str>>>(&mut self, property: CssProperty, value: T) {
        self.map[property as usize] = Some(value.into());
    }

    /// Copy every set property of `other` into `self`.
    pub fn extend(&mut self, other: &Self) {
        for (slot, value) in self.map.iter_mut().zip(&other.map) {
            if let Some(value) = value {
                *slot = Some(Rc::clone(value));
            }
        }
    }

    /// Get a property's value, if set.
    #[must_use]
    pub fn get(&self, property: CssProperty) -> Option<&str> {
        self.map[property as usize].as_deref()
    }

    /// Whether no property is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.iter().all(Option::is_none)
    }

    /// Iterate over set properties.
    #[must_use]
    pub fn iter(&self) -> CssStyleIter<'_> {
        self.into_iter()
    }
}

/// How a registered function's argument is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgType {
    /// A color spec (`red`, `#rgb`, `#rrggbb`).
    Color,
    /// A TeX dimension (`1.2em`, `-3mu`, …).
    Size,
    /// A URL with hyperref-style escaping.
    Url,
    /// Uninterpreted token text.
    Raw,
    /// An ordinary group parsed in the current mode.
    Original,
    /// A text-mode group wrapped in `\textstyle`.
    Hbox,
    /// A single primitive group (no function applications without args).
    Primitive,
    /// An ordinary group parsed in the given mode.
    Mode(Mode),
}

/// Tokens at which `parse_expression` stops for its caller.
#[derive(Debug, Clone, PartialEq, Eq, EnumString, AsRefStr)]
pub enum BreakToken {
    /// `]` — closes optional arguments.
    #[strum(serialize = "]")]
    RightBracket,
    /// `}` — closes brace groups.
    #[strum(serialize = "}")]
    RightBrace,
    /// `\endgroup`
    #[strum(serialize = "\\endgroup")]
    EndGroup,
    /// `$` — ends inline math inside text.
    #[strum(serialize = "$")]
    Dollar,
    /// `\)` — ends inline math inside text.
    #[strum(serialize = "\\)")]
    RightParen,
    /// `\\` — ends table rows.
    #[strum(serialize = "\\\\")]
    DoubleBackslash,
    /// `\end`
    #[strum(serialize = "\\end")]
    End,
    /// End of input.
    #[strum(serialize = "EOF")]
    Eof,
}

/// Shared argument-shape interface of function and environment specs.
pub trait Spec {
    /// Number of required arguments.
    fn num_args(&self) -> usize;
    /// Number of leading optional arguments.
    fn num_optional_args(&self) -> usize;
    /// Per-argument parse types, when not all `Original`.
    fn arg_types(&self) -> Option<&Vec<ArgType>>;
    /// Whether this is a TeX primitive.
    fn primitive(&self) -> bool;
    /// The parse-node type this spec produces.
    fn node_type(&self) -> Option<&NodeType>;
}

impl Spec for FunctionSpec {
    fn num_args(&self) -> usize {
        self.num_args
    }
    fn num_optional_args(&self) -> usize {
        self.num_optional_args
    }
    fn arg_types(&self) -> Option<&Vec<ArgType>> {
        self.arg_types.as_ref()
    }
    fn primitive(&self) -> bool {
        self.primitive
    }
    fn node_type(&self) -> Option<&NodeType> {
        self.node_type.as_ref()
    }
}

impl Spec for EnvSpec {
    fn num_args(&self) -> usize {
        self.num_args
    }
    fn num_optional_args(&self) -> usize {
        self.num_optional_args
    }
    fn arg_types(&self) -> Option<&Vec<ArgType>> {
        self.arg_types.as_ref()
    }
    fn primitive(&self) -> bool {
        false
    }
    fn node_type(&self) -> Option<&NodeType> {
        Some(&self.node_type)
    }
}
