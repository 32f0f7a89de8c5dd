//! The visual builder: parse tree → positioned box tree.
//!
//! `build_expression` is the workhorse: it builds each child, splices
//! document fragments inline, performs the TeXbook rule 5/6 bin cancellation,
//! and inserts inter-atom glue from the spacing tables. `build_html` chunks
//! the result at legal line-break points and wraps each chunk in a strutted
//! "base" span.

use crate::build_common::{make_span, try_combine_chars};
use crate::context::MathTexContext;
use crate::dom_tree::{DomSpan, HtmlDomNode};
use crate::options::Options;
use crate::parser::parse_node::AnyParseNode;
use crate::spacing_data::{SPACINGS, TIGHT_SPACINGS};
use crate::types::{CssProperty, ParseError, ParseErrorKind};
use crate::units::make_em;
use core::str::FromStr as _;
use phf::phf_set;
use strum::{AsRefStr, EnumString, IntoStaticStr};

// Binary atoms (first class `mbin`) degrade to ordinary atoms (`mord`)
// depending on their surroundings. TeXbook pp. 442-446, rules 5 and 6, and
// the text before rule 19.
const BIN_LEFT_CANCELLER: phf::Set<&str> =
    phf_set!("leftmost", "mbin", "mopen", "mrel", "mop", "mpunct");
const BIN_RIGHT_CANCELLER: phf::Set<&str> = phf_set!("rightmost", "mrel", "mclose", "mpunct");

/// The eight atom classes as DOM class names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DomType {
    /// Ordinary.
    Mord,
    /// Operator.
    Mop,
    /// Binary.
    Mbin,
    /// Relation.
    Mrel,
    /// Opening delimiter.
    Mopen,
    /// Closing delimiter.
    Mclose,
    /// Punctuation.
    Mpunct,
    /// Inner.
    Minner,
}

impl DomType {
    /// The CSS class string.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Whether an expression is a real group for spacing purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupType {
    /// Partial group (`\color` etc.): the parent inserts the spacing.
    False,
    /// Real group: apply cancellation and spacing here.
    True,
    /// The root expression: like `True`, plus newline handling.
    Root,
}

impl GroupType {
    const fn is_real(self) -> bool {
        matches!(self, Self::True | Self::Root)
    }

    const fn is_root(self) -> bool {
        matches!(self, Self::Root)
    }
}

/// Which end of a subtree to look at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// Leftmost descendant.
    Left,
    /// Rightmost descendant.
    Right,
}

/// An empty delimiter placeholder keeping the slot's width conventions.
#[must_use]
pub fn make_null_delimiter(options: &Options, classes: &[String]) -> DomSpan {
    let mut combined = classes.to_vec();
    combined.push("nulldelimiter".to_owned());
    combined.extend(options.base_sizing_classes());
    make_span(combined, vec![], None, None)
}

/// Children of a node that is transparent to atom-class decisions.
fn check_partial_group(node: &HtmlDomNode) -> Option<&Vec<HtmlDomNode>> {
    match node {
        HtmlDomNode::Fragment(fragment) => Some(&fragment.children),
        HtmlDomNode::Anchor(anchor) => Some(&anchor.children),
        HtmlDomNode::DomSpan(span) if span.classes.iter().any(|c| c == "enclosing") => {
            Some(&span.children)
        }
        _ => None,
    }
}

fn check_partial_group_mut(node: &mut HtmlDomNode) -> Option<&mut Vec<HtmlDomNode>> {
    match node {
        HtmlDomNode::Fragment(fragment) => Some(&mut fragment.children),
        HtmlDomNode::Anchor(anchor) => Some(&mut anchor.children),
        HtmlDomNode::DomSpan(span) if span.classes.iter().any(|c| c == "enclosing") => {
            Some(&mut span.children)
        }
        _ => None,
    }
}

/// Outermost non-partial-group descendant on the given side.
fn get_outermost_node(node: &HtmlDomNode, side: Side) -> &HtmlDomNode {
    if let Some(children) = check_partial_group(node)
        && !children.is_empty()
    {
        return match side {
            Side::Right => get_outermost_node(&children[children.len() - 1], Side::Right),
            Side::Left => get_outermost_node(&children[0], Side::Left),
        };
    }
    node
}

/// The atom class of a subtree, looking through partial groups.
#[must_use]
pub fn get_type_of_dom_tree(node: &HtmlDomNode, side: Option<Side>) -> Option<DomType> {
    let node = side.map_or(node, |side| get_outermost_node(node, side));
    DomType::from_str(node.classes().first()?).ok()
}

/// One step of the traversal order: a node position, or a reset caused by a
/// root-level newline.
enum TraversalItem {
    Node(Vec<usize>),
    NewlineReset,
}

fn node_at_path<'a>(nodes: &'a [HtmlDomNode], path: &[usize]) -> Option<&'a HtmlDomNode> {
    let (&first, rest) = path.split_first()?;
    let node = nodes.get(first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at_path(check_partial_group(node)?, rest)
    }
}

fn node_at_path_mut<'a>(
    nodes: &'a mut [HtmlDomNode],
    path: &[usize],
) -> Option<&'a mut HtmlDomNode> {
    let (&first, rest) = path.split_first()?;
    let node = nodes.get_mut(first)?;
    if rest.is_empty() {
        Some(node)
    } else {
        node_at_path_mut(check_partial_group_mut(node)?, rest)
    }
}

/// Collect the in-order positions of every non-space node, descending into
/// partial groups, and note root-level newlines.
fn collect_traversal(
    nodes: &[HtmlDomNode],
    prefix: &mut Vec<usize>,
    out: &mut Vec<TraversalItem>,
    is_root: bool,
) {
    for (i, node) in nodes.iter().enumerate() {
        prefix.push(i);
        if let Some(children) = check_partial_group(node) {
            collect_traversal(children, prefix, out, false);
        } else if node.has_class("mspace") {
            if is_root && node.has_class("newline") {
                out.push(TraversalItem::NewlineReset);
            }
        } else {
            out.push(TraversalItem::Node(prefix.clone()));
        }
        prefix.pop();
    }
}

fn rewrite_first_class_to_mord(nodes: &mut [HtmlDomNode], path: &[usize]) {
    if let Some(node) = node_at_path_mut(nodes, path)
        && let Some(classes) = node.classes_mut()
        && !classes.is_empty()
    {
        "mord".clone_into(&mut classes[0]);
    }
}

/// Build a list of parse nodes into visual nodes.
///
/// Fragments returned by child builders are spliced inline. With
/// `is_real_group`, the bin-cancellation and spacing passes run over the
/// result, using `surrounding` as the atom classes beyond each end.
pub fn build_expression(
    ctx: &MathTexContext,
    expression: &[AnyParseNode],
    options: &Options,
    is_real_group: GroupType,
    surrounding: (Option<DomType>, Option<DomType>),
) -> Result<Vec<HtmlDomNode>, ParseError> {
    let mut groups: Vec<HtmlDomNode> = Vec::new();
    for node in expression {
        let output = build_group(ctx, node, options, None)?;
        if let HtmlDomNode::Fragment(fragment) = output {
            groups.extend(fragment.children);
        } else {
            groups.push(output);
        }
    }

    try_combine_chars(&mut groups);

    if !is_real_group.is_real() {
        return Ok(groups);
    }

    // When the whole expression is one sizing/styling node, glue must scale
    // with it.
    let glue_options = if expression.len() == 1 {
        match &expression[0] {
            AnyParseNode::Sizing(sizing) => options.having_size(sizing.size),
            AnyParseNode::Styling(styling) => options.having_style(styling.style),
            _ => options.clone(),
        }
    } else {
        options.clone()
    };

    let left_class = surrounding
        .0
        .map_or("leftmost", DomType::as_str);
    let right_class = surrounding
        .1
        .map_or("rightmost", DomType::as_str);
    let is_root = is_real_group.is_root();

    let mut traversal = Vec::new();
    collect_traversal(&groups, &mut Vec::new(), &mut traversal, is_root);

    // Bin cancellation: an mbin next to an incompatible neighbor becomes
    // mord. The sentinels participate as leftmost/rightmost pseudo-atoms.
    let mut prev: Option<Vec<usize>> = None;
    let mut prev_sentinel_class = left_class;
    for item in &traversal {
        match item {
            TraversalItem::NewlineReset => {
                prev = None;
                prev_sentinel_class = "leftmost";
            }
            TraversalItem::Node(path) => {
                let prev_class = prev
                    .as_ref()
                    .and_then(|p| node_at_path(&groups, p))
                    .and_then(|n| n.classes().first().cloned())
                    .unwrap_or_else(|| prev_sentinel_class.to_owned());
                let cur_class = node_at_path(&groups, path)
                    .and_then(|n| n.classes().first().cloned())
                    .unwrap_or_default();

                if prev_class == "mbin" && BIN_RIGHT_CANCELLER.contains(cur_class.as_str()) {
                    if let Some(p) = &prev {
                        rewrite_first_class_to_mord(&mut groups, p);
                    }
                } else if cur_class == "mbin" && BIN_LEFT_CANCELLER.contains(prev_class.as_str()) {
                    rewrite_first_class_to_mord(&mut groups, path);
                }
                prev = Some(path.clone());
            }
        }
    }
    // A trailing mbin cancels against the right sentinel.
    if let Some(p) = &prev
        && BIN_RIGHT_CANCELLER.contains(right_class)
        && node_at_path(&groups, p)
            .and_then(|n| n.classes().first().map(|c| c == "mbin"))
            .unwrap_or(false)
    {
        rewrite_first_class_to_mord(&mut groups, p);
    }

    // Spacing: look up glue for each adjacent pair and record insertions,
    // then apply them back to front so indices stay valid.
    let mut traversal = Vec::new();
    collect_traversal(&groups, &mut Vec::new(), &mut traversal, is_root);

    let mut insertions: Vec<(Vec<usize>, DomSpan)> = Vec::new();
    let mut prev: Option<Vec<usize>> = None;
    let mut prev_is_sentinel = true;
    for item in &traversal {
        match item {
            TraversalItem::NewlineReset => {
                prev = None;
                prev_is_sentinel = true;
            }
            TraversalItem::Node(path) => {
                if !prev_is_sentinel
                    && let Some(prev_path) = &prev
                {
                    let prev_type = node_at_path(&groups, prev_path)
                        .and_then(|n| get_type_of_dom_tree(n, None));
                    let node = node_at_path(&groups, path);
                    let cur_type = node.and_then(|n| get_type_of_dom_tree(n, None));
                    if let (Some(prev_type), Some(cur_type)) = (prev_type, cur_type) {
                        // Script styles select the tight table, keyed off the
                        // right-hand node.
                        let tight = node.is_some_and(|n| n.has_class("mtight"));
                        let table = if tight { &TIGHT_SPACINGS } else { &SPACINGS };
                        let space = table
                            .get(prev_type.as_str())
                            .and_then(|inner| inner.get(cur_type.as_str()));
                        if let Some(space) = space {
                            let glue = ctx.make_glue(space, &glue_options)?;
                            insertions.push((prev_path.clone(), glue));
                        }
                    }
                }
                prev = Some(path.clone());
                prev_is_sentinel = false;
            }
        }
    }

    for (path, glue) in insertions.into_iter().rev() {
        let (last, parent) = path.split_last().unwrap_or((&0, &[]));
        if parent.is_empty() {
            groups.insert(last + 1, glue.into());
        } else if let Some(container) = node_at_path_mut(&mut groups, parent)
            .and_then(check_partial_group_mut)
        {
            container.insert(last + 1, glue.into());
        }
    }

    Ok(groups)
}

/// Build one parse node, wrapping in a sizing span when the caller's size
/// differs.
pub fn build_group(
    ctx: &MathTexContext,
    group: &AnyParseNode,
    options: &Options,
    base_options: Option<&Options>,
) -> Result<HtmlDomNode, ParseError> {
    let group_type = group.discriminant();
    let Some(builder) = ctx.html_group_builders.get(&group_type) else {
        return Err(ParseError::new(ParseErrorKind::UnknownGroupType {
            group_type,
        }));
    };
    let group_node = builder(group, options, ctx)?;

    if let Some(base_options) = base_options
        && options.size != base_options.size
    {
        let mut wrapped = make_span(
            options.sizing_classes(base_options),
            vec![group_node],
            Some(options),
            None,
        );
        let multiplier = options.size_multiplier / base_options.size_multiplier;
        wrapped.height *= multiplier;
        wrapped.depth *= multiplier;
        Ok(wrapped.into())
    } else {
        Ok(group_node)
    }
}

/// An invisible strut whose height/vertical-align pin a container to the
/// given extent and depth.
fn make_strut(extent: f64, depth: f64, options: &Options) -> DomSpan {
    let mut strut = make_span(vec!["strut".to_owned()], vec![], Some(options), None);
    strut.style.insert(CssProperty::Height, make_em(extent));
    if depth > 0.0 {
        strut.style.insert(CssProperty::VerticalAlign, make_em(-depth));
    }
    strut
}

/// Wrap a chunk in an unbreakable `base` span with its strut.
fn build_html_unbreakable(children: Vec<HtmlDomNode>, options: &Options) -> HtmlDomNode {
    let mut body = make_span(vec!["base".to_owned()], children, Some(options), None);
    let strut = make_strut(body.height + body.depth, body.depth, options);
    body.children.insert(0, strut.into());
    HtmlDomNode::DomSpan(body)
}

/// Where a node list may legally be cut into lines.
enum Cut {
    /// Cut after this index; everything up to it forms one chunk.
    After(usize),
    /// The node at this index is a forced newline, kept outside any chunk.
    Newline(usize),
}

/// Find the first legal cut point, scanning from the front.
fn find_cut(nodes: &[HtmlDomNode]) -> Option<Cut> {
    let mut i = 0;
    while i < nodes.len() {
        let node = &nodes[i];
        if node.has_class("newline") {
            return Some(Cut::Newline(i));
        }

        let breakable =
            node.has_class("mbin") || node.has_class("mrel") || node.has_class("allowbreak");
        if breakable {
            // Post-operator glue rides along on the operator's line; a
            // \nobreak anywhere in that run vetoes the cut.
            let mut end = i;
            let mut vetoed = false;
            while let Some(glue) = nodes.get(end + 1) {
                if !glue.has_class("mspace") || glue.has_class("newline") {
                    break;
                }
                vetoed |= glue.has_class("nobreak");
                end += 1;
            }
            if vetoed {
                i = end + 1;
                continue;
            }
            return Some(Cut::After(end));
        }
        i += 1;
    }
    None
}

/// TeXbook p.173: a formula breaks only after an outer-level relation or
/// binary operator. Slice the built node list into strutted `base` chunks at
/// those points; forced newlines sit between chunks.
fn chunk_at_breaks(mut nodes: Vec<HtmlDomNode>, options: &Options) -> Vec<HtmlDomNode> {
    let mut out = Vec::new();
    loop {
        match find_cut(&nodes) {
            Some(Cut::Newline(at)) => {
                let mut segment: Vec<HtmlDomNode> = nodes.drain(..=at).collect();
                let newline = segment.pop();
                if !segment.is_empty() {
                    out.push(build_html_unbreakable(segment, options));
                }
                out.extend(newline);
            }
            Some(Cut::After(at)) => {
                let segment: Vec<HtmlDomNode> = nodes.drain(..=at).collect();
                out.push(build_html_unbreakable(segment, options));
            }
            None => {
                if !nodes.is_empty() {
                    out.push(build_html_unbreakable(nodes, options));
                }
                break;
            }
        }
    }
    out
}

/// Build the whole tree: expression, line-break chunking, tag placement.
pub fn build_html(
    ctx: &MathTexContext,
    tree: &[AnyParseNode],
    options: &Options,
) -> Result<DomSpan, ParseError> {
    // Strip an outer \tag wrapper; its body is the real expression.
    let (tag, tree) = match tree {
        [AnyParseNode::Tag(tag_node)] => (Some(tag_node.tag.as_slice()), tag_node.body.as_slice()),
        _ => (None, tree),
    };

    let mut expression = build_expression(ctx, tree, options, GroupType::Root, (None, None))?;

    let eqn_num = if expression.len() == 2 && expression[1].has_class("tag") {
        // An environment with automatic equation numbers.
        expression.pop()
    } else {
        None
    };

    let mut children = chunk_at_breaks(expression, options);

    let tag_child_index = match tag {
        Some(tag) => {
            let tag_html = build_expression(ctx, tag, options, GroupType::True, (None, None))?;
            let mut chunk = build_html_unbreakable(tag_html, options);
            if let HtmlDomNode::DomSpan(span) = &mut chunk {
                span.classes = vec!["tag".to_owned()];
            }
            children.push(chunk);
            Some(children.len() - 1)
        }
        None => {
            children.extend(eqn_num);
            None
        }
    };

    let mut span = make_span(vec!["katex-html".to_owned()], children, Some(options), None);
    span.attributes
        .insert("aria-hidden".to_owned(), "true".to_owned());

    // The tag's strut stretches to the whole line's extent so it aligns with
    // any chunk.
    if let Some(index) = tag_child_index {
        resize_tag_strut(&mut span, index);
    }

    Ok(span)
}

/// Stretch the strut inside the tag chunk at `index` to the root span's full
/// extent.
fn resize_tag_strut(root: &mut DomSpan, index: usize) {
    let (line_extent, line_depth) = (root.height + root.depth, root.depth);
    if let Some(HtmlDomNode::DomSpan(tag_span)) = root.children.get_mut(index)
        && let Some(HtmlDomNode::DomSpan(strut)) = tag_span.children.first_mut()
    {
        if line_extent > 0.0 {
            strut.style.insert(CssProperty::Height, make_em(line_extent));
        }
        if line_depth > 0.0 {
            strut
                .style
                .insert(CssProperty::VerticalAlign, make_em(-line_depth));
        }
    }
}
