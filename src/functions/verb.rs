//! `\verb` and `\verb*`, lexed upstream as single tokens.

use crate::build_common::{make_span, make_symbol};
use crate::context::MathTexContext;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType, TextNode};
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::symbols::Mode;
use crate::types::ParseError;

/// `\verb*` shows spaces as open boxes.
fn make_verb(body: &str, star: bool) -> String {
    if star {
        body.replace(' ', "\u{2423}")
    } else {
        body.replace(' ', "\u{a0}")
    }
}

fn html_builder(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Verb(group) = node else {
        return Err(ParseError::new("Expected Verb node"));
    };
    let text = make_verb(&group.body, group.star);
    let new_options = options.having_style(options.style.text());

    let mut children: Vec<HtmlDomNode> = Vec::with_capacity(text.chars().count());
    for ch in text.chars() {
        let ch = if ch == '\u{a0}' { ' ' } else { ch };
        children.push(
            make_symbol(
                ctx,
                &ch.to_string(),
                "Typewriter-Regular",
                Mode::Text,
                Some(&new_options),
                Some(&["mord".to_owned(), "texttt".to_owned()]),
            )?
            .into(),
        );
    }
    let mut classes = vec!["mord".to_owned(), "text".to_owned()];
    classes.extend(new_options.sizing_classes(options));
    Ok(make_span(classes, children, Some(&new_options), None).into())
}

fn mathml_builder(
    node: &ParseNode,
    _options: &Options,
    _ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Verb(group) = node else {
        return Err(ParseError::new("Expected Verb node"));
    };
    let text = TextNode {
        text: make_verb(&group.body, group.star),
    };
    let mut mtext = MathNode::with_children(MathNodeType::Mtext, vec![text.into()]);
    mtext.set_attribute("mathvariant", "monospace");
    Ok(mtext.into())
}

/// Register the verb builders. The node is produced by the parser from the
/// lexer's single-token `\verb` form; there is no handler to register.
pub fn define_verb(ctx: &mut MathTexContext) {
    ctx.define_function_builders(NodeType::Verb, Some(html_builder), Some(mathml_builder));
}
