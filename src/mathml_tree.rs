//! Semantic (MathML) tree nodes.
//!
//! The MathML side carries no layout state; it exists to emit an accessible
//! parallel rendering. Tags come from the closed [`MathNodeType`] set.

use crate::namespace::KeyMap;
use crate::tree::{DocumentFragment, VirtualNode};
use crate::types::ParseError;
use crate::units::make_em;
use crate::utils::escape_into;
use bon::bon;
use core::fmt::{self, Debug};
use strum::AsRefStr;

/// The MathML element tags this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[allow(missing_docs)]
pub enum MathNodeType {
    Math,
    Annotation,
    Semantics,
    Mtext,
    Mn,
    Mo,
    Mi,
    Mspace,
    Mover,
    Munder,
    Munderover,
    Msup,
    Msub,
    Msubsup,
    Mfrac,
    Mroot,
    Msqrt,
    Mtable,
    Mtr,
    Mtd,
    Mlabeledtr,
    Mrow,
    Menclose,
    Mstyle,
    Mpadded,
    Mphantom,
}

/// The standard glue widths and the space characters MathML prefers over an
/// explicit `<mspace>` for them. Negative widths pair the space with an
/// invisible separator.
const SPACE_CHARACTERS: &[(f64, f64, &str)] = &[
    (0.05555, 0.05556, "\u{200a}"),          // VeryThinSpace
    (0.1666, 0.1667, "\u{2009}"),            // ThinSpace
    (0.2222, 0.2223, "\u{2005}"),            // MediumSpace
    (0.2777, 0.2778, "\u{2005}\u{200a}"),    // ThickSpace
    (-0.05556, -0.05555, "\u{200a}\u{2063}"),
    (-0.1667, -0.1666, "\u{2009}\u{2063}"),
    (-0.2223, -0.2222, "\u{205f}\u{2063}"),
    (-0.2778, -0.2777, "\u{2005}\u{2063}"),
];

/// The space-like character for one of the standard glue widths, if any.
#[must_use]
pub fn get_space_character(width: f64) -> Option<&'static str> {
    SPACE_CHARACTERS
        .iter()
        .find(|(lo, hi, _)| (*lo..=*hi).contains(&width))
        .map(|&(_, _, ch)| ch)
}

/// Fragment over MathML children.
pub type MathDomFragment = DocumentFragment<MathDomNode>;

/// The semantic node sum.
#[derive(Clone)]
pub enum MathDomNode {
    /// An element.
    Math(MathNode),
    /// A text leaf.
    Text(TextNode),
    /// A space.
    Space(SpaceNode),
    /// A transparent sequence.
    Fragment(Box<MathDomFragment>),
}

/// A MathML element of any tag.
#[derive(Clone)]
pub struct MathNode {
    /// Element tag.
    pub node_type: MathNodeType,
    /// Attributes as plain strings.
    pub attributes: KeyMap<String, String>,
    /// Children, in order.
    pub children: Vec<MathDomNode>,
    /// CSS classes.
    pub classes: Vec<String>,
}

impl Debug for MathNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MathNode")
            .field("node_type", &self.node_type)
            .field("attributes", &self.attributes)
            .field("children", &format_args!("{} children", self.children.len()))
            .finish()
    }
}

#[bon]
impl MathNode {
    /// Build an element.
    #[builder]
    pub fn new(
        node_type: MathNodeType,
        attributes: Option<KeyMap<String, String>>,
        children: Option<Vec<MathDomNode>>,
        classes: Option<Vec<String>>,
    ) -> Self {
        Self {
            node_type,
            attributes: attributes.unwrap_or_default(),
            children: children.unwrap_or_default(),
            classes: classes.unwrap_or_default(),
        }
    }

    /// Element with the given children and no attributes.
    #[must_use]
    pub fn with_children(node_type: MathNodeType, children: Vec<MathDomNode>) -> Self {
        Self {
            node_type,
            attributes: KeyMap::default(),
            children,
            classes: Vec::new(),
        }
    }

    /// Set an attribute.
    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.attributes.insert(key.into(), value.into());
    }

    fn to_text(&self) -> String {
        self.children.iter().map(MathDomNode::to_text).collect()
    }
}

/// A text leaf.
#[derive(Debug, Clone)]
pub struct TextNode {
    /// UTF-8 text content.
    pub text: String,
}

/// A space, rendered as `<mspace>` or a space character.
#[derive(Debug, Clone)]
pub struct SpaceNode {
    /// Width in ems.
    pub width: f64,
    /// Character rendering when one of the standard widths matches.
    pub character: Option<&'static str>,
}

impl SpaceNode {
    /// Space of the given width.
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            character: get_space_character(width),
        }
    }
}

impl MathDomNode {
    /// Flatten to plain text.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::Math(node) => node.to_text(),
            Self::Text(node) => node.text.clone(),
            Self::Space(node) => node.character.unwrap_or(" ").to_owned(),
            Self::Fragment(fragment) => fragment.children.iter().map(Self::to_text).collect(),
        }
    }

    /// This node as an element, if it is one.
    #[must_use]
    pub const fn as_math_node(&self) -> Option<&MathNode> {
        if let Self::Math(node) = self { Some(node) } else { None }
    }

    /// This node as a text leaf, if it is one.
    #[must_use]
    pub const fn as_text_node(&self) -> Option<&TextNode> {
        if let Self::Text(node) = self { Some(node) } else { None }
    }
}

impl VirtualNode for MathNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        let tag = self.node_type.as_ref();

        write!(writer, "<{tag}")?;
        if !self.classes.is_empty() {
            let joined = self.classes.join(" ");
            writer.write_str(" class=\"")?;
            escape_into(writer, &joined)?;
            writer.write_char('"')?;
        }
        for (key, value) in &self.attributes {
            write!(writer, " {key}=\"")?;
            escape_into(writer, value)?;
            writer.write_char('"')?;
        }
        writer.write_char('>')?;

        for child in &self.children {
            child.write_markup(writer)?;
        }
        write!(writer, "</{tag}>")?;
        Ok(())
    }
}

impl VirtualNode for TextNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        escape_into(writer, &self.text)?;
        Ok(())
    }
}

impl VirtualNode for SpaceNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        if let Some(character) = self.character {
            writer.write_str("<mtext>")?;
            escape_into(writer, character)?;
            writer.write_str("</mtext>")?;
        } else {
            writer.write_str("<mspace width=\"")?;
            writer.write_str(&make_em(self.width))?;
            writer.write_str("\"/>")?;
        }
        Ok(())
    }
}

impl VirtualNode for MathDomNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        match self {
            Self::Math(node) => node.write_markup(writer),
            Self::Text(node) => node.write_markup(writer),
            Self::Space(node) => node.write_markup(writer),
            Self::Fragment(fragment) => fragment.write_markup(writer),
        }
    }
}

impl From<MathNode> for MathDomNode {
    fn from(node: MathNode) -> Self {
        Self::Math(node)
    }
}

impl From<TextNode> for MathDomNode {
    fn from(node: TextNode) -> Self {
        Self::Text(node)
    }
}

impl From<SpaceNode> for MathDomNode {
    fn from(node: SpaceNode) -> Self {
        Self::Space(node)
    }
}

impl From<MathDomFragment> for MathDomNode {
    fn from(fragment: MathDomFragment) -> Self {
        Self::Fragment(Box::new(fragment))
    }
}
