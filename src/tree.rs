//! The virtual-node interface shared by the HTML and MathML trees.

use crate::types::{CssStyle, ParseError};
use core::fmt;

/// Anything that can serialize itself to markup.
pub trait VirtualNode {
    /// Stream this node's markup into `writer`.
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError>;

    /// Serialize to a fresh string.
    fn to_markup(&self) -> Result<String, ParseError>
    where
        Self: Sized,
    {
        let mut out = String::new();
        self.write_markup(&mut out)?;
        Ok(out)
    }
}

/// An ordered sequence of nodes with no container of its own.
///
/// Fragments are transparent: expression building splices their children
/// inline, and the spacing/cancellation passes descend into them, so a
/// `\color`-style wrapper does not disturb its neighbors' atom classes.
#[derive(Debug)]
pub struct DocumentFragment<ChildType: VirtualNode> {
    /// The contained nodes, in order.
    pub children: Vec<ChildType>,
    /// Classes, consulted by `has_class` but never rendered (fragments have
    /// no element of their own).
    pub classes: Vec<String>,
    /// Extent above the baseline, from the children.
    pub height: f64,
    /// Extent below the baseline, from the children.
    pub depth: f64,
    /// Largest font size used inside.
    pub max_font_size: f64,
    /// Styles, carried for interface parity; never rendered.
    pub style: CssStyle,
}

impl<ChildType: VirtualNode + Clone> Clone for DocumentFragment<ChildType> {
    fn clone(&self) -> Self {
        Self {
            children: self.children.clone(),
            classes: self.classes.clone(),
            height: self.height,
            depth: self.depth,
            max_font_size: self.max_font_size,
            style: self.style.clone(),
        }
    }
}

impl<ChildType: VirtualNode> DocumentFragment<ChildType> {
    /// Fragment over the given children, sizes zeroed.
    #[must_use]
    pub fn new(children: Vec<ChildType>) -> Self {
        Self {
            children,
            classes: Vec::new(),
            height: 0.0,
            depth: 0.0,
            max_font_size: 0.0,
            style: CssStyle::default(),
        }
    }

    /// Whether `class_name` is among this fragment's classes.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes.iter().any(|cls| cls == class_name)
    }
}

impl<ChildType: VirtualNode> VirtualNode for DocumentFragment<ChildType> {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        for child in &self.children {
            child.write_markup(writer)?;
        }
        Ok(())
    }
}
