//! Builders for bare symbol nodes: atoms, mathords, textords.

use crate::build_common::{make_ord, mathsym};
use crate::build_mathml::{make_symbol_node, make_text};
use crate::context::MathTexContext;
use crate::dom_tree::HtmlDomNode;
use crate::mathml_tree::{MathDomNode, MathNode, MathNodeType};
use crate::options::Options;
use crate::parser::parse_node::{NodeType, ParseNode};
use crate::symbols::Atom;
use crate::types::{Mode, ParseError};
use phf::phf_set;

// Some ords map to <mn> or <mo> in MathML by their content.
const DIGITS_AND_DOT: phf::Set<&str> = phf_set!("0", "1", "2", "3", "4", "5", "6", "7", "8", "9");

fn atom_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::Atom(atom) = node else {
        return Err(ParseError::new("Expected Atom node"));
    };
    let class = format!("m{}", atom.family.as_ref());
    Ok(mathsym(ctx, &atom.text, atom.mode, options, Some(&[class]))?.into())
}

fn atom_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::Atom(atom) = node else {
        return Err(ParseError::new("Expected Atom node"));
    };
    let mut mo = MathNode::with_children(
        MathNodeType::Mo,
        vec![make_text(&atom.text, atom.mode, Some(options), &ctx.symbols).into()],
    );
    match atom.family {
        Atom::Bin => {
            if let Some(variant) = crate::build_mathml::get_variant(ctx, node, options)?
                && variant == "bold-italic"
            {
                mo.set_attribute("mathvariant", variant);
            }
        }
        Atom::Punct => {
            mo.set_attribute("separator", "true");
            mo.set_attribute("lspace", "0em");
            mo.set_attribute("rspace", "0em");
        }
        Atom::Open | Atom::Close => {
            mo.set_attribute("stretchy", "false");
        }
        _ => {}
    }
    Ok(mo.into())
}

fn mathord_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    make_ord(ctx, node, options)
}

fn mathord_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    Ok(make_symbol_node(ctx, node, options, MathNodeType::Mi)?.into())
}

fn textord_html(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    make_ord(ctx, node, options)
}

fn textord_mathml(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<MathDomNode, ParseError> {
    let ParseNode::TextOrd(textord) = node else {
        return Err(ParseError::new("Expected TextOrd node"));
    };
    let node_type = if textord.mode == Mode::Text {
        MathNodeType::Mtext
    } else if DIGITS_AND_DOT.contains(textord.text.as_str())
        || textord.text.chars().all(|c| c.is_ascii_digit())
    {
        MathNodeType::Mn
    } else if textord.text == "\\prime" {
        MathNodeType::Mo
    } else {
        MathNodeType::Mi
    };
    Ok(make_symbol_node(ctx, node, options, node_type)?.into())
}

/// Register the symbol-node builders.
pub fn define_symbols(ctx: &mut MathTexContext) {
    ctx.define_function_builders(NodeType::Atom, Some(atom_html), Some(atom_mathml));
    ctx.define_function_builders(NodeType::MathOrd, Some(mathord_html), Some(mathord_mathml));
    ctx.define_function_builders(NodeType::TextOrd, Some(textord_html), Some(textord_mathml));
    // Accent glyphs reached bare (rare) render as ordinary text.
    ctx.define_function_builders(
        NodeType::AccentToken,
        Some(make_ord_like),
        Some(|node, options, ctx| {
            Ok(make_symbol_node(ctx, node, options, MathNodeType::Mo)?.into())
        }),
    );
}

fn make_ord_like(
    node: &ParseNode,
    options: &Options,
    ctx: &MathTexContext,
) -> Result<HtmlDomNode, ParseError> {
    let ParseNode::AccentToken(tok) = node else {
        return Err(ParseError::new("Expected AccentToken node"));
    };
    Ok(mathsym(ctx, &tok.text, tok.mode, options, Some(&["mord".to_owned()]))?.into())
}
