//! Parse tree node definitions.
//!
//! [`AnyParseNode`] is the tagged sum over every construct the parser can
//! produce. The `strum` discriminant enum [`NodeType`] keys the builder
//! dispatch tables.

use crate::namespace::KeyMap;
use crate::spacing_data::MeasurementOwned;
use crate::style::Style;
use crate::symbols::{Atom, Mode};
use crate::types::{SourceLocation, Token};
use strum::{AsRefStr, Display, EnumDiscriminants};

/// Column separation flavors for array-like environments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColSeparationType {
    /// `aligned`-style alternating right/left columns.
    Align,
    /// `alignedat`: explicit column pair count, no added gaps.
    AlignAt,
    /// `gathered`: single centered column.
    Gather,
    /// `smallmatrix`: condensed spacing.
    Small,
}

/// Per-column alignment/separator specification.
#[derive(Debug, Clone, PartialEq)]
pub enum AlignSpec {
    /// A separator column, e.g. `|` or `:`.
    Separator {
        /// The separator text.
        separator: String,
    },
    /// An aligned column with optional gaps, in ems.
    Align {
        /// `"c"`, `"l"`, or `"r"`.
        align: String,
        /// Space before the column.
        pregap: Option<f64>,
        /// Space after the column.
        postgap: Option<f64>,
    },
}

/// Payload for `array` and friends.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeArray {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Column separation flavor, when not a plain array.
    pub col_separation_type: Option<ColSeparationType>,
    /// Surround the array with \arraycolsep-like padding.
    pub hskip_before_and_after: bool,
    /// Add \jot to row spacing (aligned environments).
    pub add_jot: bool,
    /// Column specifications.
    pub cols: Option<Vec<AlignSpec>>,
    /// Row height multiplier from \arraystretch.
    pub arraystretch: f64,
    /// Cells, row-major.
    pub body: Vec<Vec<AnyParseNode>>,
    /// Extra gap below each row from `\\[dim]`.
    pub row_gaps: Vec<Option<MeasurementOwned>>,
    /// `\hline`s (false) / `\hdashline`s (true) above each row; one list per
    /// row boundary.
    pub h_lines_before_row: Vec<Vec<bool>>,
}

/// Payload for brace groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOrdGroup {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Contained expression.
    pub body: Vec<AnyParseNode>,
    /// `\begingroup` groups are transparent to spacing.
    pub semisimple: bool,
}

/// Payload for super/subscripts. At least one of `sup`/`sub` is present.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSupSub {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The base, absent for a leading script.
    pub base: Option<Box<AnyParseNode>>,
    /// Superscript.
    pub sup: Option<Box<AnyParseNode>>,
    /// Subscript.
    pub sub: Option<Box<AnyParseNode>>,
}

/// Payload for generalized fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeGenfrac {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// `\cfrac` sets this: numerator gets a strut.
    pub continued: bool,
    /// Numerator.
    pub numer: Box<AnyParseNode>,
    /// Denominator.
    pub denom: Box<AnyParseNode>,
    /// Draw the fraction bar.
    pub has_bar_line: bool,
    /// Left delimiter, e.g. `(` for `\binom`.
    pub left_delim: Option<String>,
    /// Right delimiter.
    pub right_delim: Option<String>,
    /// Forced style (`\dfrac`, `\tfrac`).
    pub size: Option<&'static Style>,
    /// Explicit bar thickness from `\above` / `\genfrac`.
    pub bar_size: Option<MeasurementOwned>,
}

/// Payload for `\left…\right` groups.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeLeftRight {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Enclosed expression; always non-empty of structure (parser guarantees
    /// the `\right` was found).
    pub body: Vec<AnyParseNode>,
    /// Left delimiter text (`.` for null).
    pub left: String,
    /// Right delimiter text (`.` for null).
    pub right: String,
    /// Color applied to the right delimiter (from `\color` inside).
    pub right_color: Option<String>,
}

/// Payload for the `\right` half, consumed by the `\left` handler.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeLeftRightRight {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Delimiter text.
    pub delim: String,
    /// Current color at the `\right`.
    pub color: Option<String>,
}

/// Payload for square roots.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSqrt {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Radicand.
    pub body: Box<AnyParseNode>,
    /// Root index (`\sqrt[3]{x}`).
    pub index: Option<Box<AnyParseNode>>,
}

/// Payload for symbols with an atom family.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeAtom {
    /// The atom family; governs spacing.
    pub family: Atom,
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Replacement codepoint or canonical name.
    pub text: String,
}

/// Payload for ordinary math symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeMathOrd {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Symbol text.
    pub text: String,
}

/// Payload for ordinary text symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeTextOrd {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Symbol text.
    pub text: String,
}

/// Payload for big operators (`\sum`, `\lim`, `\int`, `\mathop`).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOp {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Place scripts above/below rather than beside.
    pub limits: bool,
    /// `\limits`/`\nolimits` was given explicitly.
    pub always_handle_sup_sub: bool,
    /// Suppress the axis centering shift (`\operatorname`).
    pub suppress_base_shift: bool,
    /// Set while the supsub builder drives this op.
    pub parent_is_sup_sub: bool,
    /// True when rendered from a single glyph; then `name` is set.
    pub symbol: bool,
    /// The operator's control-sequence name, for symbol ops.
    pub name: Option<String>,
    /// Body, for `\mathop{...}`.
    pub body: Option<Vec<AnyParseNode>>,
}

/// Payload for explicit spacing symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSpacing {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The spacing command's text.
    pub text: String,
}

/// Payload for `\text{…}` and its font variants.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeText {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Text-mode body.
    pub body: Vec<AnyParseNode>,
    /// Font command (`\textbf`, …) applied to the body.
    pub font: Option<String>,
}

/// Payload for style switches (`\displaystyle`, …).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeStyling {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The selected style.
    pub style: &'static Style,
    /// Affected expression.
    pub body: Vec<AnyParseNode>,
}

/// Payload for math font commands (`\mathbf`, …).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeFont {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Font command without backslash, e.g. `mathbf`.
    pub font: String,
    /// Affected group.
    pub body: Box<AnyParseNode>,
}

/// Payload for `\color`/`\textcolor`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeColor {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// CSS color.
    pub color: String,
    /// Affected expression.
    pub body: Vec<AnyParseNode>,
}

/// Payload for accents above a base.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeAccent {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Accent command, e.g. `\hat`.
    pub label: String,
    /// Accent stretches with the base.
    pub is_stretchy: bool,
    /// Accent shifts with the base's skew.
    pub is_shifty: bool,
    /// The accented base.
    pub base: Box<AnyParseNode>,
}

/// Payload for accents below a base.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeAccentUnder {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Accent command, e.g. `\underleftarrow`.
    pub label: String,
    /// The base above the accent.
    pub base: Box<AnyParseNode>,
}

/// Payload for `\overline`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOverline {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The overlined group.
    pub body: Box<AnyParseNode>,
}

/// Payload for `\underline`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeUnderline {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The underlined group.
    pub body: Box<AnyParseNode>,
}

/// Payload for `\phantom`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodePhantom {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Invisible expression.
    pub body: Vec<AnyParseNode>,
}

/// Payload for `\hphantom`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeHphantom {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Width-only invisible group.
    pub body: Box<AnyParseNode>,
}

/// Payload for `\vphantom`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeVphantom {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Height-only invisible group.
    pub body: Box<AnyParseNode>,
}

/// Payload for `\rule`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeRule {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Baseline shift.
    pub shift: Option<MeasurementOwned>,
    /// Rule width.
    pub width: MeasurementOwned,
    /// Rule height.
    pub height: MeasurementOwned,
}

/// Payload for color tokens inside `\color` argument parsing.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeColorToken {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// CSS color.
    pub color: String,
}

/// Payload for raw string arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeRaw {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Uninterpreted text.
    pub string: String,
}

/// Payload for size arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSize {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The dimension.
    pub value: MeasurementOwned,
    /// An empty optional size argument was defaulted to 0pt.
    pub is_blank: bool,
}

/// Payload for tagged equations.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeTag {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The tagged expression.
    pub body: Vec<AnyParseNode>,
    /// The tag content.
    pub tag: Vec<AnyParseNode>,
}

/// Payload for `\url`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeUrl {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The URL.
    pub url: String,
}

/// Payload for `\verb`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeVerb {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Verbatim text.
    pub body: String,
    /// `\verb*` shows spaces as ␣.
    pub star: bool,
}

/// Payload for accent glyph symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeAccentToken {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Accent text.
    pub text: String,
}

/// Payload for operator glyph symbols reached as raw characters.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOpToken {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Operator text.
    pub text: String,
}

/// Payload for `\\` and `\newline`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeCr {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Whether this breaks a line (vs ending a table row).
    pub newline: bool,
    /// Extra vertical space from `\\[dim]`.
    pub size: Option<MeasurementOwned>,
}

/// Payload for fixed-size delimiters (`\bigl` …).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeDelimsizing {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Size index 1..=4.
    pub size: usize,
    /// Atom class the sized delimiter takes (`mopen`, `mclose`, `mrel`,
    /// `mord`).
    pub mclass: &'static str,
    /// Delimiter text.
    pub delim: String,
}

/// Payload for `\boxed`/`\fbox`/`\colorbox`/`\fcolorbox`/`\cancel`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeEnclose {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Enclosure kind, e.g. `\fbox` or `\cancel`.
    pub label: String,
    /// Fill color for `\colorbox`.
    pub background_color: Option<String>,
    /// Border color for `\fcolorbox`.
    pub border_color: Option<String>,
    /// Enclosed group.
    pub body: Box<AnyParseNode>,
}

/// Payload for `\hbox`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeHbox {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Text-mode body.
    pub body: Vec<AnyParseNode>,
}

/// Payload for `\overbrace`/`\underbrace`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeHorizBrace {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The brace command.
    pub label: String,
    /// Brace above (true) or below.
    pub is_over: bool,
    /// The braced base.
    pub base: Box<AnyParseNode>,
}

/// Payload for `\href`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeHref {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Link target.
    pub href: String,
    /// Link body.
    pub body: Vec<AnyParseNode>,
}

/// Payload for `\htmlClass`/`\htmlId`/`\htmlStyle`/`\htmlData`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeHtml {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Attributes to set on the wrapper span.
    pub attributes: KeyMap<String, String>,
    /// Wrapped expression.
    pub body: Vec<AnyParseNode>,
}

/// Payload for `\html@mathml`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeHtmlMathMl {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Rendering for the HTML tree.
    pub html: Vec<AnyParseNode>,
    /// Rendering for the MathML tree.
    pub mathml: Vec<AnyParseNode>,
}

/// Payload for `\includegraphics`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeIncludegraphics {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Alt text.
    pub alt: String,
    /// Display width.
    pub width: MeasurementOwned,
    /// Height above baseline.
    pub height: MeasurementOwned,
    /// Total height (height + depth).
    pub totalheight: MeasurementOwned,
    /// Image URL.
    pub src: String,
}

/// Payload for infix operators (`\over`, `\choose`, `\above`).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeInfix {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The function the infix rewrites to, e.g. `\frac`.
    pub replace_with: String,
    /// Bar size for `\above`.
    pub size: Option<MeasurementOwned>,
    /// The infix token, for error reporting.
    pub token: Option<Token>,
}

/// Payload for internal no-output nodes (`\relax`, definitions).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeInternal {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
}

/// Payload for `\kern`/`\mkern`/`\hskip`/`\hspace`/`\mskip`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeKern {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The kern amount.
    pub dimension: MeasurementOwned,
}

/// Payload for `\llap`/`\rlap`/`\clap`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeLap {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Overlap direction: `"left"`, `"right"`, or `"center"`.
    pub alignment: String,
    /// Overlapped group.
    pub body: Box<AnyParseNode>,
}

/// Payload for `\mathchoice`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeMathChoice {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Display-style rendering.
    pub display: Vec<AnyParseNode>,
    /// Text-style rendering.
    pub text: Vec<AnyParseNode>,
    /// Script-style rendering.
    pub script: Vec<AnyParseNode>,
    /// Scriptscript-style rendering.
    pub scriptscript: Vec<AnyParseNode>,
}

/// Payload for `\middle`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeMiddle {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Delimiter text.
    pub delim: String,
}

/// Payload for `\mathbin`/`\mathrel`/… class overrides.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeMclass {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The forced atom class, e.g. `"mbin"`.
    pub mclass: &'static str,
    /// Reclassified expression.
    pub body: Vec<AnyParseNode>,
    /// Whether the body is a single character box.
    pub is_character_box: bool,
}

/// Payload for `\operatorname`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeOperatorName {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The operator's name, as parse nodes.
    pub body: Vec<AnyParseNode>,
    /// The starred form takes `\limits`.
    pub always_handle_sup_sub: bool,
    /// Scripts go above/below.
    pub limits: bool,
    /// Set while the supsub builder drives this node.
    pub parent_is_sup_sub: bool,
}

/// Payload for `\raisebox`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeRaisebox {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Vertical displacement.
    pub dy: MeasurementOwned,
    /// Raised group.
    pub body: Box<AnyParseNode>,
}

/// Payload for size commands (`\Huge`, `\small`, …).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSizing {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Target size level 1..=11.
    pub size: usize,
    /// Affected expression.
    pub body: Vec<AnyParseNode>,
}

/// Payload for `\smash`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeSmash {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Smashed group.
    pub body: Box<AnyParseNode>,
    /// Zero the height.
    pub smash_height: bool,
    /// Zero the depth.
    pub smash_depth: bool,
}

/// Payload for `\vcenter`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeVcenter {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// Centered group.
    pub body: Box<AnyParseNode>,
}

/// Payload for extensible arrows (`\xrightarrow[below]{above}`).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNodeXArrow {
    /// Mode this node was parsed in.
    pub mode: Mode,
    /// Source span.
    pub loc: Option<SourceLocation>,
    /// The arrow command.
    pub label: String,
    /// Label above the arrow.
    pub body: Box<AnyParseNode>,
    /// Optional label below the arrow.
    pub below: Option<Box<AnyParseNode>>,
}

/// Every construct the parser can produce.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(vis(pub))]
#[strum_discriminants(doc = "Discriminant tags keying the builder dispatch tables")]
#[strum_discriminants(derive(Display, Hash, AsRefStr), strum(serialize_all = "lowercase"))]
#[strum_discriminants(name(NodeType))]
pub enum AnyParseNode {
    /// Array/matrix environments.
    Array(Box<ParseNodeArray>),
    /// Brace groups.
    OrdGroup(ParseNodeOrdGroup),
    /// Super/subscripts.
    SupSub(ParseNodeSupSub),
    /// Generalized fractions.
    Genfrac(Box<ParseNodeGenfrac>),
    /// `\left…\right`.
    LeftRight(ParseNodeLeftRight),
    /// The `\right` half, transient.
    #[strum_discriminants(strum(serialize = "leftright-right"))]
    LeftRightRight(ParseNodeLeftRightRight),
    /// Square roots.
    Sqrt(Box<ParseNodeSqrt>),
    /// Atoms with a spacing family.
    Atom(ParseNodeAtom),
    /// Ordinary math symbols.
    MathOrd(ParseNodeMathOrd),
    /// Big operators.
    Op(Box<ParseNodeOp>),
    /// Explicit spacing.
    Spacing(ParseNodeSpacing),
    /// Text-mode content.
    Text(ParseNodeText),
    /// Style switches.
    Styling(ParseNodeStyling),
    /// Math font switches.
    Font(ParseNodeFont),
    /// Color wrappers.
    Color(ParseNodeColor),
    /// Accents above.
    Accent(Box<ParseNodeAccent>),
    /// Accents below.
    #[strum_discriminants(strum(serialize = "accentUnder"))]
    AccentUnder(Box<ParseNodeAccentUnder>),
    /// `\overline`.
    Overline(ParseNodeOverline),
    /// `\underline`.
    Underline(ParseNodeUnderline),
    /// `\phantom`.
    Phantom(ParseNodePhantom),
    /// `\hphantom`.
    Hphantom(ParseNodeHphantom),
    /// `\vphantom`.
    Vphantom(ParseNodeVphantom),
    /// `\rule`.
    Rule(ParseNodeRule),
    /// Color argument tokens.
    #[strum_discriminants(strum(serialize = "color-token"))]
    ColorToken(ParseNodeColorToken),
    /// Raw string arguments.
    Raw(ParseNodeRaw),
    /// Size arguments.
    Size(ParseNodeSize),
    /// Tagged equations.
    Tag(Box<ParseNodeTag>),
    /// `\url`.
    Url(ParseNodeUrl),
    /// `\verb`.
    Verb(ParseNodeVerb),
    /// Ordinary text symbols.
    TextOrd(ParseNodeTextOrd),
    /// Accent glyphs.
    #[strum_discriminants(strum(serialize = "accent-token"))]
    AccentToken(ParseNodeAccentToken),
    /// Operator glyphs.
    #[strum_discriminants(strum(serialize = "op-token"))]
    OpToken(ParseNodeOpToken),
    /// Line/row breaks.
    Cr(ParseNodeCr),
    /// Fixed-size delimiters.
    Delimsizing(ParseNodeDelimsizing),
    /// Enclosures (boxes, cancel).
    Enclose(ParseNodeEnclose),
    /// `\hbox`.
    Hbox(ParseNodeHbox),
    /// Horizontal braces.
    HorizBrace(ParseNodeHorizBrace),
    /// `\href`.
    Href(ParseNodeHref),
    /// HTML attribute wrappers.
    Html(ParseNodeHtml),
    /// Dual HTML/MathML rendering.
    #[strum_discriminants(strum(serialize = "htmlmathml"))]
    HtmlMathMl(ParseNodeHtmlMathMl),
    /// `\includegraphics`.
    Includegraphics(ParseNodeIncludegraphics),
    /// Infix fractions.
    Infix(ParseNodeInfix),
    /// Internal no-output nodes.
    Internal(ParseNodeInternal),
    /// Kerns.
    Kern(ParseNodeKern),
    /// Laps.
    Lap(ParseNodeLap),
    /// `\mathchoice`.
    MathChoice(ParseNodeMathChoice),
    /// `\middle`.
    Middle(ParseNodeMiddle),
    /// Atom class overrides.
    Mclass(ParseNodeMclass),
    /// `\operatorname`.
    OperatorName(ParseNodeOperatorName),
    /// `\raisebox`.
    Raisebox(ParseNodeRaisebox),
    /// Size commands.
    Sizing(ParseNodeSizing),
    /// `\smash`.
    Smash(ParseNodeSmash),
    /// `\vcenter`.
    Vcenter(ParseNodeVcenter),
    /// Extensible arrows.
    #[strum_discriminants(strum(serialize = "x-arrow"))]
    XArrow(ParseNodeXArrow),
}

/// The working alias used throughout the crate.
pub type ParseNode = AnyParseNode;

macro_rules! for_each_variant {
    ($self:expr, $node:ident => $body:expr) => {
        match $self {
            AnyParseNode::Array($node) => $body,
            AnyParseNode::OrdGroup($node) => $body,
            AnyParseNode::SupSub($node) => $body,
            AnyParseNode::Genfrac($node) => $body,
            AnyParseNode::LeftRight($node) => $body,
            AnyParseNode::LeftRightRight($node) => $body,
            AnyParseNode::Sqrt($node) => $body,
            AnyParseNode::Atom($node) => $body,
            AnyParseNode::MathOrd($node) => $body,
            AnyParseNode::Op($node) => $body,
            AnyParseNode::Spacing($node) => $body,
            AnyParseNode::Text($node) => $body,
            AnyParseNode::Styling($node) => $body,
            AnyParseNode::Font($node) => $body,
            AnyParseNode::Color($node) => $body,
            AnyParseNode::Accent($node) => $body,
            AnyParseNode::AccentUnder($node) => $body,
            AnyParseNode::Overline($node) => $body,
            AnyParseNode::Underline($node) => $body,
            AnyParseNode::Phantom($node) => $body,
            AnyParseNode::Hphantom($node) => $body,
            AnyParseNode::Vphantom($node) => $body,
            AnyParseNode::Rule($node) => $body,
            AnyParseNode::ColorToken($node) => $body,
            AnyParseNode::Raw($node) => $body,
            AnyParseNode::Size($node) => $body,
            AnyParseNode::Tag($node) => $body,
            AnyParseNode::Url($node) => $body,
            AnyParseNode::Verb($node) => $body,
            AnyParseNode::TextOrd($node) => $body,
            AnyParseNode::AccentToken($node) => $body,
            AnyParseNode::OpToken($node) => $body,
            AnyParseNode::Cr($node) => $body,
            AnyParseNode::Delimsizing($node) => $body,
            AnyParseNode::Enclose($node) => $body,
            AnyParseNode::Hbox($node) => $body,
            AnyParseNode::HorizBrace($node) => $body,
            AnyParseNode::Href($node) => $body,
            AnyParseNode::Html($node) => $body,
            AnyParseNode::HtmlMathMl($node) => $body,
            AnyParseNode::Includegraphics($node) => $body,
            AnyParseNode::Infix($node) => $body,
            AnyParseNode::Internal($node) => $body,
            AnyParseNode::Kern($node) => $body,
            AnyParseNode::Lap($node) => $body,
            AnyParseNode::MathChoice($node) => $body,
            AnyParseNode::Middle($node) => $body,
            AnyParseNode::Mclass($node) => $body,
            AnyParseNode::OperatorName($node) => $body,
            AnyParseNode::Raisebox($node) => $body,
            AnyParseNode::Sizing($node) => $body,
            AnyParseNode::Smash($node) => $body,
            AnyParseNode::Vcenter($node) => $body,
            AnyParseNode::XArrow($node) => $body,
        }
    };
}

impl AnyParseNode {
    /// The node's discriminant tag.
    #[must_use]
    pub fn discriminant(&self) -> NodeType {
        NodeType::from(self)
    }

    /// The mode this node was parsed in.
    #[must_use]
    pub fn mode(&self) -> Mode {
        for_each_variant!(self, node => node.mode)
    }

    /// The node's source span.
    #[must_use]
    pub fn loc(&self) -> Option<&SourceLocation> {
        for_each_variant!(self, node => node.loc.as_ref())
    }

    /// The symbol text, for symbol-shaped nodes.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Atom(n) => Some(&n.text),
            Self::MathOrd(n) => Some(&n.text),
            Self::TextOrd(n) => Some(&n.text),
            Self::Spacing(n) => Some(&n.text),
            Self::AccentToken(n) => Some(&n.text),
            Self::OpToken(n) => Some(&n.text),
            _ => None,
        }
    }

    /// The stretchy/enclose label, for labeled constructs.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Accent(n) => Some(&n.label),
            Self::AccentUnder(n) => Some(&n.label),
            Self::HorizBrace(n) => Some(&n.label),
            Self::Enclose(n) => Some(&n.label),
            Self::XArrow(n) => Some(&n.label),
            _ => None,
        }
    }

    /// Innermost element of single-child groups (ordgroup/color/font
    /// wrappers around one node).
    #[must_use]
    pub fn to_base_elem(&self) -> &Self {
        match self {
            Self::OrdGroup(ord) if ord.body.len() == 1 => ord.body[0].to_base_elem(),
            Self::Color(color) if color.body.len() == 1 => color.body[0].to_base_elem(),
            Self::Font(font) => font.body.to_base_elem(),
            _ => self,
        }
    }

    /// Whether this is a "character box": its innermost group is a single
    /// character. TeXbook algorithms branch on this.
    #[must_use]
    pub fn is_character_box(&self) -> bool {
        matches!(
            self.to_base_elem(),
            Self::MathOrd(_) | Self::TextOrd(_) | Self::Atom(_)
        )
    }
}

impl crate::types::ErrorLocationProvider for AnyParseNode {
    fn loc(&self) -> Option<&SourceLocation> {
        Self::loc(self)
    }
}
