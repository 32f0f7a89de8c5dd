//! Macro definitions and the builtin macro table.
//!
//! A macro maps a name to either replacement text, a pre-tokenized expansion,
//! or a function run against the expander. User macros arrive through the
//! settings record; builtins live in the [`BUILTIN_MACROS`] phf table.

use alloc::sync::Arc;
use core::fmt::{self, Debug};

use crate::context::MathTexContext;
use crate::namespace::Namespace;
use crate::types::{Mode, ParseError, ParseErrorKind, Token};
use phf::phf_map;

/// One consumed macro argument with its boundary tokens.
#[derive(Debug, Clone)]
pub struct MacroArg {
    /// The argument's tokens, in reverse (stack) order.
    pub tokens: Vec<Token>,
    /// First token of the argument region.
    pub start: Token,
    /// Last token of the argument region.
    pub end: Token,
}

/// A pre-tokenized macro body.
#[derive(Debug, Clone, Default)]
pub struct MacroExpansion {
    /// Body tokens in reverse order, ready to push onto the stack.
    pub tokens: Vec<Token>,
    /// Number of `#n` parameters.
    pub num_args: usize,
    /// Argument delimiter patterns (`num_args + 1` entries) for macros
    /// defined with delimited parameters.
    pub delimiters: Option<Vec<Vec<String>>>,
    /// `\let`-style aliases set this so the alias is not re-expanded.
    pub unexpandable: bool,
}

/// What a function macro hands back.
pub enum MacroExpansionResult {
    /// Replacement text to be tokenized.
    String(String),
    /// A ready expansion.
    Expansion(MacroExpansion),
    /// Nothing; the macro acted purely through side effects.
    Empty,
}

/// Function macro behind an `Arc`, for closures created at runtime.
pub type MacroFunction = Arc<
    dyn Fn(&mut dyn MacroContextInterface) -> Result<MacroExpansionResult, ParseError>
        + Send
        + Sync,
>;

/// Function macro as a plain fn pointer, for the builtin table.
pub type StaticMacroFunction =
    fn(&mut dyn MacroContextInterface) -> Result<MacroExpansionResult, ParseError>;

/// A macro's definition.
#[derive(Clone)]
pub enum MacroDefinition {
    /// Replacement text, owned (user macros).
    String(String),
    /// Replacement text, static (builtins).
    StaticStr(&'static str),
    /// Pre-tokenized body.
    Expansion(MacroExpansion),
    /// Runtime closure.
    Function(MacroFunction),
    /// Builtin function pointer.
    StaticFunction(StaticMacroFunction),
}

impl MacroDefinition {
    /// The replacement text, when this is a plain string macro.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::StaticStr(s) => Some(s),
            _ => None,
        }
    }
}

impl Debug for MacroDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::StaticStr(s) => f.debug_tuple("StaticStr").field(s).finish(),
            Self::Expansion(e) => f.debug_tuple("Expansion").field(e).finish(),
            Self::Function(_) => f.debug_struct("Function").finish(),
            Self::StaticFunction(_) => f.debug_struct("StaticFunction").finish(),
        }
    }
}

/// The expander surface exposed to function macros and to parser helpers
/// that read raw tokens (`\def`, `\verb` arguments, URL parsing).
pub trait MacroContextInterface<'a> {
    /// Current mode.
    fn mode(&self) -> Mode;
    /// The shared context.
    fn context(&self) -> &MathTexContext;
    /// The macro namespace.
    fn macros<'s>(&'s self) -> &'s Namespace<'a, MacroDefinition>;
    /// The macro namespace, mutably.
    fn macros_mut<'s>(&'s mut self) -> &'s mut Namespace<'a, MacroDefinition>;
    /// Peek the next token without expanding it.
    fn future_mut(&mut self) -> Result<Token, ParseError>;
    /// Pop the next token without expanding it.
    fn pop_token(&mut self) -> Result<Token, ParseError>;
    /// Drop upcoming space tokens.
    fn consume_spaces(&mut self) -> Result<(), ParseError>;
    /// Expand the next token once. Returns the pushed token count, or `None`
    /// when the token was not expandable.
    fn expand_once(&mut self, expandable_only: Option<bool>) -> Result<Option<isize>, ParseError>;
    /// `\expandafter`: expand once, then peek.
    fn expand_after_future(&mut self) -> Result<Token, ParseError>;
    /// Fully expand and return the next unexpandable token.
    fn expand_next_token(&mut self) -> Result<Token, ParseError>;
    /// Fully expand the named macro, or `None` when it is not defined.
    fn expand_macro(&mut self, name: &str) -> Result<Option<Vec<Token>>, ParseError>;
    /// Fully expand the named macro to a string.
    fn expand_macro_as_text(&mut self, name: &str) -> Result<Option<String>, ParseError>;
    /// Fully expand a token list to forward-order tokens.
    fn expand_tokens(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError>;
    /// Consume one argument, optionally bounded by delimiter tokens.
    fn consume_arg(&mut self, delims: Option<&[&str]>) -> Result<MacroArg, ParseError>;
    /// Consume `num_args` braced arguments.
    fn consume_args(&mut self, num_args: usize) -> Result<Vec<Vec<Token>>, ParseError>;
    /// Whether `name` means anything: macro, function, symbol, or implicit.
    fn is_defined(&self, name: &str) -> bool;
    /// Whether `name` is expandable (a non-`\let` macro or non-primitive
    /// function).
    fn is_expandable(&self, name: &str) -> bool;
    /// Open a macro-namespace group.
    fn begin_group(&mut self);
    /// Close a macro-namespace group.
    fn end_group(&mut self) -> Result<(), ParseError>;
}

fn dots_by_token(text: &str) -> &'static str {
    match text {
        "," => "\\dotsc",
        "\\int" | "\\oint" | "\\iint" | "\\iiint" => "\\dotsi",
        "+" | "-" | "=" | "<" | ">" | "\\times" | "\\cdot" | "\\pm" | "\\mp" | "\\cup" | "\\cap"
        | "\\sum" | "\\prod" | "\\to" | "\\rightarrow" | "\\leftarrow" | "\\mapsto" | "\\vee"
        | "\\wedge" | "\\oplus" | "\\otimes" => "\\dotsb",
        _ => "\\dotso",
    }
}

/// `\dots`: chooses the dots flavor from the following token, like amsmath.
fn expand_dots(
    context: &mut dyn MacroContextInterface,
) -> Result<MacroExpansionResult, ParseError> {
    let next = context.expand_after_future()?.text;
    Ok(MacroExpansionResult::String(
        dots_by_token(&next).to_owned(),
    ))
}

fn expand_new_command(
    context: &mut dyn MacroContextInterface,
    exists_ok: bool,
    nonexists_ok: bool,
    skip_if_exists: bool,
) -> Result<MacroExpansionResult, ParseError> {
    let mut name_tokens = context.consume_arg(None)?.tokens;
    if name_tokens.len() != 1 {
        return Err(ParseError::new(
            r"\newcommand's first argument must be a macro name",
        ));
    }
    let name = name_tokens.remove(0).text;

    let exists = context.is_defined(&name);
    if exists && !exists_ok {
        return Err(ParseError::new(ParseErrorKind::ExpectedControlSequence {
            command: r"\newcommand".to_owned(),
            found: name,
        }));
    }
    if !exists && !nonexists_ok {
        return Err(ParseError::new(
            r"\renewcommand attempting to redefine an undefined command",
        ));
    }

    // Optional [numargs]
    let mut num_args = 0;
    if context.future_mut()?.text == "[" {
        context.pop_token()?;
        let mut digits = String::new();
        loop {
            let tok = context.pop_token()?;
            if tok.text == "]" {
                break;
            }
            digits.push_str(&tok.text);
        }
        num_args = digits.trim().parse::<usize>().map_err(|_| {
            ParseError::new(ParseErrorKind::InvalidValue {
                context: "number of arguments".to_owned(),
                value: digits.clone(),
            })
        })?;
    }

    let body = context.consume_arg(None)?.tokens;
    if !(exists && skip_if_exists) {
        context.macros_mut().set(
            &name,
            Some(MacroDefinition::Expansion(MacroExpansion {
                tokens: body,
                num_args,
                delimiters: None,
                unexpandable: false,
            })),
            false,
        );
    }
    Ok(MacroExpansionResult::Empty)
}

fn macro_newcommand(
    context: &mut dyn MacroContextInterface,
) -> Result<MacroExpansionResult, ParseError> {
    expand_new_command(context, false, true, false)
}

fn macro_renewcommand(
    context: &mut dyn MacroContextInterface,
) -> Result<MacroExpansionResult, ParseError> {
    expand_new_command(context, true, false, false)
}

fn macro_providecommand(
    context: &mut dyn MacroContextInterface,
) -> Result<MacroExpansionResult, ParseError> {
    // Defines only when the name is new; otherwise parses and discards.
    expand_new_command(context, true, true, true)
}

/// `\char`: TeX number syntax (`"` hex, `'` octal, `` ` `` char, or decimal)
/// normalized to a decimal `\@char{n}` call.
fn macro_char(context: &mut dyn MacroContextInterface) -> Result<MacroExpansionResult, ParseError> {
    let token = context.pop_token()?;
    let (base, mut number): (u32, Option<u32>) = match token.text.as_str() {
        "'" => (8, None),
        "\"" => (16, None),
        "`" => {
            let next = context.pop_token()?;
            let ch = next
                .text
                .strip_prefix('\\')
                .unwrap_or(&next.text)
                .chars()
                .next()
                .ok_or_else(|| {
                    ParseError::new(ParseErrorKind::InvalidBaseDigit {
                        base: 10,
                        digit: next.text.clone(),
                    })
                })?;
            (10, Some(ch as u32))
        }
        _ => (10, None),
    };

    let value = if let Some(value) = number.take() {
        value
    } else {
        let mut digits = String::new();
        if base == 10 {
            digits.push_str(&token.text);
        }
        loop {
            let next = context.future_mut()?;
            let Some(first) = next.text.chars().next() else {
                break;
            };
            if first.is_digit(base) && next.text.chars().all(|c| c.is_digit(base)) {
                digits.push_str(&next.text);
                context.pop_token()?;
            } else {
                break;
            }
        }
        u32::from_str_radix(&digits, base).map_err(|_| {
            ParseError::new(ParseErrorKind::InvalidBaseDigit {
                base,
                digit: digits.clone(),
            })
        })?
    };

    Ok(MacroExpansionResult::String(format!("\\@char{{{value}}}")))
}

/// `\operatorname` / `\operatorname*`: the star selects the limits-taking
/// form, so it must be inspected before argument parsing begins.
fn macro_operatorname(
    context: &mut dyn MacroContextInterface,
) -> Result<MacroExpansionResult, ParseError> {
    let star = context.future_mut()?.text == "*";
    if star {
        context.pop_token()?;
        Ok(MacroExpansionResult::String(
            "\\operatornamewithlimits".to_owned(),
        ))
    } else {
        Ok(MacroExpansionResult::String("\\operatorname@".to_owned()))
    }
}

/// `\tag` / `\tag*`: records the tag body in the `\df@tag` marker macro; the
/// parser picks it up after the expression finishes.
fn macro_tag(context: &mut dyn MacroContextInterface) -> Result<MacroExpansionResult, ParseError> {
    let star = context.future_mut()?.text == "*";
    if star {
        context.pop_token()?;
    }
    if context.macros().get("\\df@tag").is_some() {
        return Err(ParseError::new(r"multiple \tag"));
    }
    let arg = context.consume_arg(None)?.tokens;

    // Assemble `\text{(arg)}` (or `\text{arg}` for the starred form) in
    // reverse order, ready for the stack.
    let mut tokens: Vec<Token> = Vec::with_capacity(arg.len() + 5);
    tokens.push(Token::of("}"));
    if !star {
        tokens.push(Token::of(")"));
    }
    tokens.extend(arg);
    if !star {
        tokens.push(Token::of("("));
    }
    tokens.push(Token::of("{"));
    tokens.push(Token::of("\\text"));

    context.macros_mut().set(
        "\\df@tag",
        Some(MacroDefinition::Expansion(MacroExpansion {
            tokens,
            num_args: 0,
            delimiters: None,
            unexpandable: false,
        })),
        true,
    );
    Ok(MacroExpansionResult::Empty)
}

/// The builtin macro table.
pub static BUILTIN_MACROS: phf::Map<&'static str, MacroDefinition> = phf_map! {
    // spacing
    "\\," => MacroDefinition::StaticStr("\\mskip 3mu"),
    "\\:" => MacroDefinition::StaticStr("\\mskip 4mu"),
    "\\>" => MacroDefinition::StaticStr("\\mskip 4mu"),
    "\\;" => MacroDefinition::StaticStr("\\mskip 5mu"),
    "\\!" => MacroDefinition::StaticStr("\\mskip -3mu"),
    "\\thinspace" => MacroDefinition::StaticStr("\\,"),
    "\\medspace" => MacroDefinition::StaticStr("\\:"),
    "\\thickspace" => MacroDefinition::StaticStr("\\;"),
    "\\negthinspace" => MacroDefinition::StaticStr("\\!"),
    "\\negmedspace" => MacroDefinition::StaticStr("\\mskip -4mu"),
    "\\negthickspace" => MacroDefinition::StaticStr("\\mskip -5mu"),
    "\\enspace" => MacroDefinition::StaticStr("\\kern .5em "),
    "\\enskip" => MacroDefinition::StaticStr("\\hskip .5em\\relax"),
    "\\quad" => MacroDefinition::StaticStr("\\hskip 1em\\relax"),
    "\\qquad" => MacroDefinition::StaticStr("\\hskip 2em\\relax"),
    "\\hspace*" => MacroDefinition::StaticStr("\\hspace"),
    // dots family
    "\\dots" => MacroDefinition::StaticFunction(expand_dots),
    "\\dotso" => MacroDefinition::StaticStr("\\ldots"),
    "\\dotsc" => MacroDefinition::StaticStr("\\ldots\\,"),
    "\\dotsb" => MacroDefinition::StaticStr("\\cdots"),
    "\\dotsi" => MacroDefinition::StaticStr("\\!\\cdots"),
    "\\cdots" => MacroDefinition::StaticStr("\\@cdots"),
    // logic shorthands
    "\\iff" => MacroDefinition::StaticStr("\\;\\Leftrightarrow\\;"),
    "\\implies" => MacroDefinition::StaticStr("\\;\\Rightarrow\\;"),
    "\\impliedby" => MacroDefinition::StaticStr("\\;\\Leftarrow\\;"),
    // punctuation / operators
    "\\colon" => MacroDefinition::StaticStr("\\mathpunct{:}"),
    "\\bmod" => MacroDefinition::StaticStr("\\mathbin{\\textrm{mod}}"),
    "\\pmod" => MacroDefinition::StaticStr("\\quad(\\textrm{mod}\\ #1)"),
    "\\stackrel" => MacroDefinition::StaticStr("\\mathrel{\\mathop{#2}\\limits^{#1}}"),
    "\\overset" => MacroDefinition::StaticStr("\\mathop{#2}\\limits^{#1}"),
    "\\underset" => MacroDefinition::StaticStr("\\mathop{#2}\\limits_{#1}"),
    // italic Greek capitals
    "\\varGamma" => MacroDefinition::StaticStr("\\mathit{\\Gamma}"),
    "\\varDelta" => MacroDefinition::StaticStr("\\mathit{\\Delta}"),
    "\\varTheta" => MacroDefinition::StaticStr("\\mathit{\\Theta}"),
    "\\varLambda" => MacroDefinition::StaticStr("\\mathit{\\Lambda}"),
    "\\varXi" => MacroDefinition::StaticStr("\\mathit{\\Xi}"),
    "\\varPi" => MacroDefinition::StaticStr("\\mathit{\\Pi}"),
    "\\varSigma" => MacroDefinition::StaticStr("\\mathit{\\Sigma}"),
    "\\varUpsilon" => MacroDefinition::StaticStr("\\mathit{\\Upsilon}"),
    "\\varPhi" => MacroDefinition::StaticStr("\\mathit{\\Phi}"),
    "\\varPsi" => MacroDefinition::StaticStr("\\mathit{\\Psi}"),
    "\\varOmega" => MacroDefinition::StaticStr("\\mathit{\\Omega}"),
    // logos
    "\\TeX" => MacroDefinition::StaticStr(
        "\\textrm{T\\kern-.1667em\\raisebox{-.5ex}{E}\\kern-.125emX}",
    ),
    "\\LaTeX" => MacroDefinition::StaticStr(
        "\\textrm{L\\kern-.36em\\raisebox{.2em}{\\scriptstyle A}\\kern-.15em\\TeX}",
    ),
    // command definition
    "\\newcommand" => MacroDefinition::StaticFunction(macro_newcommand),
    "\\renewcommand" => MacroDefinition::StaticFunction(macro_renewcommand),
    "\\providecommand" => MacroDefinition::StaticFunction(macro_providecommand),
    // operators
    "\\operatorname" => MacroDefinition::StaticFunction(macro_operatorname),
    "\\char" => MacroDefinition::StaticFunction(macro_char),
    // tags
    "\\tag" => MacroDefinition::StaticFunction(macro_tag),
    "\\notag" => MacroDefinition::StaticStr("\\nonumber"),
    "\\nonumber" => MacroDefinition::StaticStr("\\relax"),
    // misc aliases
    "\\cr" => MacroDefinition::StaticStr("\\\\"),
    "\\liminf" => MacroDefinition::StaticStr("\\operatorname*{lim\\,inf}"),
    "\\limsup" => MacroDefinition::StaticStr("\\operatorname*{lim\\,sup}"),
    "\\argmin" => MacroDefinition::StaticStr("\\operatorname*{arg\\,min}"),
    "\\argmax" => MacroDefinition::StaticStr("\\operatorname*{arg\\,max}"),
    "\\bra" => MacroDefinition::StaticStr("\\mathinner{\\langle{#1}|}"),
    "\\ket" => MacroDefinition::StaticStr("\\mathinner{|{#1}\\rangle}"),
    "\\braket" => MacroDefinition::StaticStr("\\mathinner{\\langle{#1}\\rangle}"),
    "\\textellipsis" => MacroDefinition::StaticStr("\\ldots"),
};
