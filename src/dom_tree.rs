//! Visual (HTML) tree nodes.
//!
//! These record the data of the elements we would create — classes, inline
//! styles, box extents — and serialize to markup with [`VirtualNode`]. The
//! host renderer turns the markup into real elements; this crate never
//! touches a DOM.

use core::fmt::{self, Write as _};

use crate::mathml_tree::MathNode;
use crate::namespace::KeyMap;
use crate::options::Options;
use crate::svg_geometry::PATH_MAP;
use crate::tree::{DocumentFragment, VirtualNode};
use crate::types::{CssProperty, CssStyle, ParseError, ParseErrorKind};
use crate::unicode::script_from_codepoint;
use crate::units::make_em;
use crate::utils::escape_into;
use bon::bon;
use phf::phf_map;

/// A `\middle` delimiter's identity, recorded on the span that renders it so
/// the enclosing `\left…\right` builder can re-size it to the final extent.
#[derive(Debug, Clone, PartialEq)]
pub struct MiddleDelim {
    /// The delimiter text, e.g. `"|"`.
    pub delim: String,
    /// The options in effect where the `\middle` appeared.
    pub options: Options,
}

/// Generic container span. `T` is the child type, so SVG subtrees never mix
/// with HTML children.
#[derive(Debug, Clone, PartialEq)]
pub struct Span<T> {
    /// Children, in order.
    pub children: Vec<T>,
    /// HTML attributes.
    pub attributes: KeyMap<String, String>,
    /// CSS classes; index 0 carries the atom class when one applies.
    pub classes: Vec<String>,
    /// Extent above the baseline, in ems.
    pub height: f64,
    /// Extent below the baseline, in ems.
    pub depth: f64,
    /// Horizontal advance, when tracked.
    pub width: Option<f64>,
    /// Largest font size inside, in ems.
    pub max_font_size: f64,
    /// Inline styles.
    pub style: CssStyle,
    /// Set when this span renders a `\middle` delimiter.
    pub middle: Option<MiddleDelim>,
    /// Italic correction recorded for operator scripts.
    pub italic: Option<f64>,
}

#[bon]
impl<T> Span<T> {
    /// Build a span; when `options` are supplied the span inherits the
    /// `mtight` class and current color.
    #[builder]
    #[expect(clippy::option_option)]
    pub fn new(
        #[builder(finish_fn)] options: Option<&Options>,
        children: Vec<T>,
        attributes: Option<KeyMap<String, String>>,
        classes: Option<Vec<String>>,
        height: Option<f64>,
        depth: Option<f64>,
        width: Option<Option<f64>>,
        max_font_size: Option<f64>,
        style: Option<CssStyle>,
        middle: Option<MiddleDelim>,
    ) -> Self {
        let mut span = Self {
            children,
            attributes: attributes.unwrap_or_default(),
            classes: classes.unwrap_or_default(),
            height: height.unwrap_or_default(),
            depth: depth.unwrap_or_default(),
            width: width.unwrap_or(None),
            max_font_size: max_font_size.unwrap_or_default(),
            style: style.unwrap_or_default(),
            middle,
            italic: None,
        };
        if let Some(options) = options {
            inherit_from_options(&mut span.classes, &mut span.style, options);
        }
        span
    }
}

/// Span over HTML children.
pub type DomSpan = Span<HtmlDomNode>;

/// Hyperlink container; transparent to atom-class decisions like a fragment.
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Children, in order.
    pub children: Vec<HtmlDomNode>,
    /// HTML attributes, including `href`.
    pub attributes: KeyMap<String, String>,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
    /// Largest font size inside.
    pub max_font_size: f64,
    /// Inline styles.
    pub style: CssStyle,
}

#[bon]
impl Anchor {
    /// Build an anchor, inheriting tightness/color from `options`.
    #[builder]
    pub fn new(
        #[builder(finish_fn)] options: Option<&Options>,
        children: Option<Vec<HtmlDomNode>>,
        attributes: Option<KeyMap<String, String>>,
        classes: Option<Vec<String>>,
        height: Option<f64>,
        depth: Option<f64>,
        max_font_size: Option<f64>,
        style: Option<CssStyle>,
    ) -> Self {
        let mut anchor = Self {
            children: children.unwrap_or_default(),
            attributes: attributes.unwrap_or_default(),
            classes: classes.unwrap_or_default(),
            height: height.unwrap_or_default(),
            depth: depth.unwrap_or_default(),
            max_font_size: max_font_size.unwrap_or_default(),
            style: style.unwrap_or_default(),
        };
        if let Some(options) = options {
            inherit_from_options(&mut anchor.classes, &mut anchor.style, options);
        }
        anchor
    }
}

/// Raster image leaf (`\includegraphics`).
#[derive(Debug, Clone)]
pub struct Img {
    /// Image source URL.
    pub src: String,
    /// Alternative text.
    pub alt: String,
    /// CSS classes.
    pub classes: Vec<String>,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
    /// Largest font size inside.
    pub max_font_size: f64,
    /// Inline styles.
    pub style: CssStyle,
}

impl Img {
    /// Build an image leaf of class `mord`.
    #[must_use]
    pub fn new(src: String, alt: String, height: f64, depth: f64, style: CssStyle) -> Self {
        Self {
            src,
            alt,
            classes: vec!["mord".to_owned()],
            height,
            depth,
            max_font_size: 0.0,
            style,
        }
    }
}

const I_COMBINATIONS: phf::Map<&str, &str> = phf_map! {
    "\u{ee}" => "\u{0131}\u{0302}",
    "\u{ef}" => "\u{0131}\u{0308}",
    "\u{ed}" => "\u{0131}\u{0301}",
    "\u{ec}" => "\u{0131}\u{0300}",
};

/// A single text run with its measured box.
#[derive(Debug, Clone)]
pub struct SymbolNode {
    /// The rendered text.
    pub text: String,
    /// Extent above the baseline.
    pub height: f64,
    /// Extent below the baseline.
    pub depth: f64,
    /// Italic correction, emitted as margin-right when positive.
    pub italic: f64,
    /// Accent skew.
    pub skew: f64,
    /// Horizontal advance.
    pub width: f64,
    /// Largest font size.
    pub max_font_size: f64,
    /// CSS classes; index 0 carries the atom class when one applies.
    pub classes: Vec<String>,
    /// Inline styles.
    pub style: CssStyle,
}

#[bon]
impl SymbolNode {
    /// Build a symbol node, attaching a `<script>_fallback` class for
    /// non-Latin scripts so the CSS can select a serif fallback font.
    #[builder]
    pub fn new(
        text: &str,
        height: Option<f64>,
        depth: Option<f64>,
        italic: Option<f64>,
        skew: Option<f64>,
        width: Option<f64>,
        max_font_size: Option<f64>,
        classes: Option<Vec<String>>,
        style: Option<CssStyle>,
    ) -> Self {
        let mut classes = classes.unwrap_or_default();
        if let Some(first) = text.chars().next()
            && let Some(script) = script_from_codepoint(first as u32)
        {
            classes.push(format!("{script}_fallback"));
        }
        let text = I_COMBINATIONS
            .get(text)
            .map_or_else(|| text.to_owned(), |s| (*s).to_owned());
        Self {
            text,
            height: height.unwrap_or_default(),
            depth: depth.unwrap_or_default(),
            italic: italic.unwrap_or_default(),
            skew: skew.unwrap_or_default(),
            width: width.unwrap_or_default(),
            max_font_size: max_font_size.unwrap_or_default(),
            classes,
            style: style.unwrap_or_default(),
        }
    }
}

/// SVG child primitives.
#[derive(Debug, Clone)]
pub enum SvgChildNode {
    /// A `<path>`.
    Path(PathNode),
    /// A `<line>`.
    Line(LineNode),
}

/// An `<svg>` subtree for stretchy and geometric primitives.
#[derive(Debug, Clone)]
pub struct SvgNode {
    /// Path/line children.
    pub children: Vec<SvgChildNode>,
    /// SVG attributes (width, height, viewBox, …).
    pub attributes: KeyMap<String, String>,
}

#[bon]
impl SvgNode {
    /// Build an SVG node.
    #[builder]
    pub fn new(children: Vec<SvgChildNode>, attributes: Option<KeyMap<String, String>>) -> Self {
        Self {
            children,
            attributes: attributes.unwrap_or_default(),
        }
    }
}

/// A `<path>`, either by name from [`PATH_MAP`] or with generated data.
#[derive(Debug, Clone)]
pub struct PathNode {
    /// Name into the static path dictionary.
    pub path_name: String,
    /// Generated path data overriding the dictionary (surds, tall delims).
    pub alternate: Option<String>,
}

/// A `<line>`, used for `\cancel`-style strokes.
#[derive(Debug, Clone)]
pub struct LineNode {
    /// SVG attributes (x1, y1, x2, y2, stroke-width).
    pub attributes: KeyMap<String, String>,
}

/// Fragment over HTML children.
pub type HtmlDomFragment = DocumentFragment<HtmlDomNode>;

/// The visual node sum.
#[derive(Debug, Clone)]
pub enum HtmlDomNode {
    /// Container span.
    DomSpan(DomSpan),
    /// Hyperlink container.
    Anchor(Anchor),
    /// Raster image leaf.
    Img(Img),
    /// Text run leaf.
    Symbol(SymbolNode),
    /// SVG subtree.
    SvgNode(SvgNode),
    /// Embedded MathML (the semantic tree riding along in the output span).
    MathML(MathNode),
    /// Transparent sequence.
    Fragment(HtmlDomFragment),
}

impl From<DomSpan> for HtmlDomNode {
    fn from(span: DomSpan) -> Self {
        Self::DomSpan(span)
    }
}

impl From<Anchor> for HtmlDomNode {
    fn from(anchor: Anchor) -> Self {
        Self::Anchor(anchor)
    }
}

impl From<Img> for HtmlDomNode {
    fn from(img: Img) -> Self {
        Self::Img(img)
    }
}

impl From<SymbolNode> for HtmlDomNode {
    fn from(symbol: SymbolNode) -> Self {
        Self::Symbol(symbol)
    }
}

impl From<SvgNode> for HtmlDomNode {
    fn from(svg: SvgNode) -> Self {
        Self::SvgNode(svg)
    }
}

impl From<HtmlDomFragment> for HtmlDomNode {
    fn from(fragment: HtmlDomFragment) -> Self {
        Self::Fragment(fragment)
    }
}

/// Generate the shared-field accessor pair over the five "boxy" variants.
/// SVG and MathML subtrees carry no layout box of their own, so the getter
/// falls back to `$missing` there and the mutable form yields `None`.
macro_rules! box_field {
    ($(#[$doc:meta])* $get:ident, $get_mut:ident, $field:ident, $ret:ty, $missing:expr) => {
        $(#[$doc])*
        #[must_use]
        pub const fn $get(&self) -> $ret {
            match self {
                Self::DomSpan(n) => n.$field,
                Self::Anchor(n) => n.$field,
                Self::Img(n) => n.$field,
                Self::Symbol(n) => n.$field,
                Self::Fragment(n) => n.$field,
                Self::SvgNode(_) | Self::MathML(_) => $missing,
            }
        }

        /// Mutable form of the same field, where the variant has one.
        pub const fn $get_mut(&mut self) -> Option<&mut $ret> {
            match self {
                Self::DomSpan(n) => Some(&mut n.$field),
                Self::Anchor(n) => Some(&mut n.$field),
                Self::Img(n) => Some(&mut n.$field),
                Self::Symbol(n) => Some(&mut n.$field),
                Self::Fragment(n) => Some(&mut n.$field),
                Self::SvgNode(_) | Self::MathML(_) => None,
            }
        }
    };
}

impl HtmlDomNode {
    box_field!(
        /// Extent above the baseline.
        height,
        height_mut,
        height,
        f64,
        0.0
    );
    box_field!(
        /// Extent below the baseline.
        depth,
        depth_mut,
        depth,
        f64,
        0.0
    );

    /// Largest font size inside.
    #[must_use]
    pub const fn max_font_size(&self) -> f64 {
        match self {
            Self::DomSpan(n) => n.max_font_size,
            Self::Anchor(n) => n.max_font_size,
            Self::Img(n) => n.max_font_size,
            Self::Symbol(n) => n.max_font_size,
            Self::Fragment(n) => n.max_font_size,
            Self::SvgNode(_) | Self::MathML(_) => 0.0,
        }
    }

    /// The node's CSS classes (empty for SVG/MathML).
    #[must_use]
    pub fn classes(&self) -> &[String] {
        match self {
            Self::DomSpan(n) => &n.classes,
            Self::Anchor(n) => &n.classes,
            Self::Img(n) => &n.classes,
            Self::Symbol(n) => &n.classes,
            Self::Fragment(n) => &n.classes,
            Self::SvgNode(_) | Self::MathML(_) => &[],
        }
    }

    /// Mutable classes, where the variant has them.
    pub const fn classes_mut(&mut self) -> Option<&mut Vec<String>> {
        match self {
            Self::DomSpan(n) => Some(&mut n.classes),
            Self::Anchor(n) => Some(&mut n.classes),
            Self::Img(n) => Some(&mut n.classes),
            Self::Symbol(n) => Some(&mut n.classes),
            Self::Fragment(n) => Some(&mut n.classes),
            Self::SvgNode(_) | Self::MathML(_) => None,
        }
    }

    /// Horizontal advance, where tracked.
    #[must_use]
    pub const fn width(&self) -> Option<f64> {
        match self {
            Self::DomSpan(n) => n.width,
            Self::Symbol(n) => Some(n.width),
            _ => None,
        }
    }

    /// Inline styles, where the variant has them.
    #[must_use]
    pub const fn style(&self) -> Option<&CssStyle> {
        match self {
            Self::DomSpan(n) => Some(&n.style),
            Self::Anchor(n) => Some(&n.style),
            Self::Img(n) => Some(&n.style),
            Self::Symbol(n) => Some(&n.style),
            Self::Fragment(n) => Some(&n.style),
            Self::SvgNode(_) | Self::MathML(_) => None,
        }
    }

    /// Mutable inline styles, where the variant has them.
    pub const fn style_mut(&mut self) -> Option<&mut CssStyle> {
        match self {
            Self::DomSpan(n) => Some(&mut n.style),
            Self::Anchor(n) => Some(&mut n.style),
            Self::Img(n) => Some(&mut n.style),
            Self::Symbol(n) => Some(&mut n.style),
            Self::Fragment(n) => Some(&mut n.style),
            Self::SvgNode(_) | Self::MathML(_) => None,
        }
    }

    /// Whether the node carries `class_name`.
    #[must_use]
    pub fn has_class(&self, class_name: &str) -> bool {
        self.classes().iter().any(|cls| cls == class_name)
    }
}

/// Join non-empty classes with spaces.
#[must_use]
pub fn create_class(classes: &[String]) -> String {
    classes
        .iter()
        .filter(|cls| !cls.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Seed a fresh node with what it inherits from the build options: the
/// tight-style marker class and the current color.
pub(crate) fn inherit_from_options(
    classes: &mut Vec<String>,
    style: &mut CssStyle,
    options: &Options,
) {
    if options.style.is_tight() {
        classes.push("mtight".to_owned());
    }
    if let Some(color) = options.get_color() {
        style.insert(CssProperty::Color, color);
    }
}

fn write_class_attr<W: fmt::Write>(writer: &mut W, classes: &[String]) -> fmt::Result {
    let joined = create_class(classes);
    if joined.is_empty() {
        return Ok(());
    }
    writer.write_str(" class=\"")?;
    escape_into(writer, &joined)?;
    writer.write_char('"')
}

fn write_style_attr<W: fmt::Write>(writer: &mut W, style: &CssStyle) -> fmt::Result {
    if style.is_empty() {
        return Ok(());
    }
    writer.write_str(" style=\"")?;
    for (property, value) in style {
        write!(writer, "{}:", property.as_ref())?;
        escape_into(writer, value)?;
        writer.write_char(';')?;
    }
    writer.write_char('"')
}

/// Attribute names may not contain whitespace, quoting, or control bytes
/// that could break out of the attribute position.
fn valid_attribute_name(attr: &str) -> bool {
    attr.chars()
        .all(|c| !c.is_whitespace() && !c.is_ascii_control() && !"\"'>/=".contains(c))
}

fn write_attributes<W: fmt::Write>(
    writer: &mut W,
    attributes: &KeyMap<String, String>,
) -> Result<(), ParseError> {
    for (attr, value) in attributes {
        if attr.is_empty() {
            continue;
        }
        if !valid_attribute_name(attr) {
            return Err(ParseError::new(ParseErrorKind::InvalidAttributeName {
                attr: attr.clone(),
            }));
        }
        write!(writer, " {attr}=\"")?;
        escape_into(writer, value)?;
        writer.write_char('"')?;
    }
    Ok(())
}

/// Serialize a container element: open tag with class/style/attributes,
/// children, close tag. Shared by spans and anchors.
fn write_container<W: fmt::Write, T: VirtualNode>(
    writer: &mut W,
    tag: &str,
    classes: &[String],
    style: &CssStyle,
    attributes: &KeyMap<String, String>,
    children: &[T],
) -> Result<(), ParseError> {
    write!(writer, "<{tag}")?;
    write_class_attr(writer, classes)?;
    write_style_attr(writer, style)?;
    write_attributes(writer, attributes)?;
    writer.write_char('>')?;
    for child in children {
        child.write_markup(writer)?;
    }
    write!(writer, "</{tag}>")?;
    Ok(())
}

impl<T: VirtualNode> VirtualNode for Span<T> {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        write_container(
            writer,
            "span",
            &self.classes,
            &self.style,
            &self.attributes,
            &self.children,
        )
    }
}

impl VirtualNode for Anchor {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        write_container(
            writer,
            "a",
            &self.classes,
            &self.style,
            &self.attributes,
            &self.children,
        )
    }
}

impl VirtualNode for Img {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        writer.write_str("<img src=\"")?;
        escape_into(writer, &self.src)?;
        writer.write_str("\" alt=\"")?;
        escape_into(writer, &self.alt)?;
        writer.write_char('"')?;
        write_class_attr(writer, &self.classes)?;
        write_style_attr(writer, &self.style)?;
        writer.write_str("/>")?;
        Ok(())
    }
}

impl VirtualNode for SymbolNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        // Bare text when nothing needs an element around it.
        if self.italic <= 0.0 && self.classes.is_empty() && self.style.is_empty() {
            escape_into(writer, &self.text)?;
            return Ok(());
        }

        // Assemble the declarations first: the italic correction rides in
        // front of any explicit styles.
        let mut declarations = String::new();
        if self.italic > 0.0 {
            let _ = write!(declarations, "margin-right:{};", make_em(self.italic));
        }
        for (key, value) in &self.style {
            let _ = write!(declarations, "{}:{value};", key.as_ref());
        }

        writer.write_str("<span")?;
        write_class_attr(writer, &self.classes)?;
        if !declarations.is_empty() {
            writer.write_str(" style=\"")?;
            escape_into(writer, &declarations)?;
            writer.write_char('"')?;
        }
        writer.write_char('>')?;
        escape_into(writer, &self.text)?;
        writer.write_str("</span>")?;
        Ok(())
    }
}

impl VirtualNode for SvgNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        writer.write_str("<svg xmlns=\"http://www.w3.org/2000/svg\"")?;
        write_attributes(writer, &self.attributes)?;
        writer.write_char('>')?;
        for child in &self.children {
            match child {
                SvgChildNode::Path(path) => path.write_markup(writer)?,
                SvgChildNode::Line(line) => line.write_markup(writer)?,
            }
        }
        writer.write_str("</svg>")?;
        Ok(())
    }
}

impl VirtualNode for PathNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        let path_data = self.alternate.as_deref().unwrap_or_else(|| {
            PATH_MAP.get(self.path_name.as_str()).copied().unwrap_or("")
        });
        writer.write_str("<path d=\"")?;
        escape_into(writer, path_data)?;
        writer.write_str("\"/>")?;
        Ok(())
    }
}

impl VirtualNode for LineNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        writer.write_str("<line")?;
        write_attributes(writer, &self.attributes)?;
        writer.write_str("/>")?;
        Ok(())
    }
}

impl VirtualNode for HtmlDomNode {
    fn write_markup<W: fmt::Write>(&self, writer: &mut W) -> Result<(), ParseError> {
        match self {
            Self::DomSpan(span) => span.write_markup(writer),
            Self::Anchor(anchor) => anchor.write_markup(writer),
            Self::Img(img) => img.write_markup(writer),
            Self::Symbol(symbol) => symbol.write_markup(writer),
            Self::SvgNode(svg) => svg.write_markup(writer),
            Self::MathML(math) => math.write_markup(writer),
            Self::Fragment(fragment) => fragment.write_markup(writer),
        }
    }
}
