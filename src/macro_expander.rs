//! The macro expander ("gullet"): sits between lexer and parser, expanding
//! macros until only unexpandable tokens remain.
//!
//! Expansions are pushed onto a token stack in reverse order and consumed
//! before the underlying lexer resumes, so macro bodies can themselves invoke
//! macros to arbitrary (bounded) depth. The bound is the settings record's
//! `max_expand`.

use alloc::sync::Arc;

use crate::context::MathTexContext;
use crate::lexer::Lexer;
use crate::macros::{
    BUILTIN_MACROS, MacroArg, MacroContextInterface, MacroDefinition, MacroExpansion,
    MacroExpansionResult,
};
use crate::namespace::{KeyMap, Namespace};
use crate::types::{Mode, ParseError, ParseErrorKind, Settings, Token};

/// Map of macro definitions, as stored in the settings record.
pub type MacroMap = KeyMap<String, MacroDefinition>;

/// Commands that act like macros but are neither macros, functions, nor
/// symbols.
pub const IMPLICIT_COMMANDS: phf::Set<&str> = phf::phf_set! {
    "^",
    "_",
    "\\limits",
    "\\nolimits",
};

/// The expander. One per parse; the macro namespace dies with it.
pub struct MacroExpander<'a> {
    settings: &'a Settings,
    expansion_count: usize,
    lexer: Lexer<'a>,
    macros: Namespace<'a, MacroDefinition>,
    /// Pending tokens in reverse order; drained before the lexer is asked.
    stack: Vec<Token>,
    mode: Mode,
    ctx: &'a MathTexContext,
}

impl<'a> MacroExpander<'a> {
    /// Expander over `input`, with builtins plus the settings' user macros.
    #[must_use]
    pub fn new(input: &str, settings: &'a Settings, mode: Mode, ctx: &'a MathTexContext) -> Self {
        let globals = settings.macros.borrow_mut();
        let macros = Namespace::new(&BUILTIN_MACROS, globals);
        Self {
            lexer: Lexer::new(Arc::from(input), settings),
            settings,
            expansion_count: 0,
            macros,
            stack: Vec::new(),
            mode,
            ctx,
        }
    }

    /// Switch between math and text modes.
    pub const fn switch_mode(&mut self, new_mode: Mode) {
        self.mode = new_mode;
    }

    /// Close every open macro group.
    pub fn end_groups(&mut self) {
        self.macros.end_groups();
    }

    /// Adjust a character's category code in the lexer.
    pub fn set_catcode(&mut self, ch: char, code: u8) {
        self.lexer.set_catcode(ch, code);
    }

    /// Push one token back.
    pub fn push_token(&mut self, token: Token) {
        self.stack.push(token);
    }

    /// Push tokens back; the slice must already be in reverse order.
    pub fn push_tokens(&mut self, tokens: Vec<Token>) {
        self.stack.extend(tokens);
    }

    /// Lex another token whenever the pushback stack has run dry.
    fn ensure_lookahead(&mut self) -> Result<(), ParseError> {
        if self.stack.is_empty() {
            let token = self.lexer.lex()?;
            self.push_token(token);
        }
        Ok(())
    }

    /// Scan one macro argument without expanding it and push its tokens back
    /// followed by an `EOF` sentinel. Returns a token covering the argument
    /// region, or `None` for a missing optional argument.
    pub fn scan_argument(&mut self, is_optional: bool) -> Result<Option<Token>, ParseError> {
        let (start, end, tokens) = if is_optional {
            self.consume_spaces()?;
            if self.future_mut()?.text != "[" {
                return Ok(None);
            }
            let start = self.pop_token()?; // drop the [
            let arg = self.consume_arg(Some(&["]"]))?;
            (start, arg.end, arg.tokens)
        } else {
            let arg = self.consume_arg(None)?;
            (arg.start, arg.end, arg.tokens)
        };

        self.push_token(Token::new("EOF".to_owned(), end.loc.clone()));
        self.push_tokens(tokens);
        Ok(Some(start.range(&end, String::new())))
    }

    fn consume_args_with_delims(
        &mut self,
        num_args: usize,
        delimiters: Option<&Vec<Vec<String>>>,
    ) -> Result<Vec<Vec<Token>>, ParseError> {
        if let Some(delims) = delimiters {
            if delims.len() != num_args + 1 {
                return Err(ParseError::new(
                    "The length of delimiters doesn't match the number of args!",
                ));
            }
            for expected in &delims[0] {
                let tok = self.pop_token()?;
                if *expected != tok.text {
                    return Err(ParseError::with_token(
                        ParseErrorKind::MacroUseMismatch,
                        &tok,
                    ));
                }
            }
        }

        let mut args = Vec::with_capacity(num_args);
        for i in 0..num_args {
            let delims_for_arg: Option<Vec<&str>> = delimiters
                .map(|d| d[i + 1].iter().map(String::as_str).collect());
            let arg = self.consume_arg(delims_for_arg.as_deref())?;
            args.push(arg.tokens);
        }
        Ok(args)
    }

    fn count_expansion(&mut self, amount: usize) -> Result<(), ParseError> {
        self.expansion_count += amount;
        if self.expansion_count > self.settings.max_expand {
            return Err(ParseError::new(ParseErrorKind::TooManyExpansions));
        }
        Ok(())
    }

    fn expand_once_internal(&mut self, expandable_only: bool) -> Result<Option<isize>, ParseError> {
        let top_token = self.pop_token()?;
        let name = top_token.text.clone();
        let expansion = if top_token.noexpand {
            None
        } else {
            self.get_expansion(&name)?
        };

        let expansion = match expansion {
            Some(exp) if !(expandable_only && exp.unexpandable) => exp,
            blocked => {
                // An undefined control sequence caught in expandable-only
                // context is a hard error; everything else flows through
                // unexpanded.
                let undefined = blocked.is_none()
                    && name.starts_with('\\')
                    && !self.is_defined(&name);
                if expandable_only && undefined {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UndefinedControlSequence { name },
                        &top_token,
                    ));
                }
                self.push_token(top_token);
                return Ok(None);
            }
        };

        self.count_expansion(1)?;
        let args = self.consume_args_with_delims(expansion.num_args, expansion.delimiters.as_ref())?;
        let tokens = if expansion.num_args == 0 {
            expansion.tokens
        } else {
            substitute_args(expansion.tokens, &args)?
        };
        let pushed = tokens.len() as isize;
        self.push_tokens(tokens);
        Ok(Some(pushed))
    }

    fn expand_tokens_internal(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        let mut output = Vec::new();
        let old_len = self.stack.len();
        self.push_tokens(tokens);
        while self.stack.len() > old_len {
            if self.expand_once_internal(true)?.is_none() {
                let mut token = self.stack.pop().ok_or_else(|| {
                    ParseError::new("Internal error: stack empty during token expansion")
                })?;
                if token.treat_as_relax {
                    // The expansion of \noexpand is the token itself.
                    token.noexpand = false;
                    token.treat_as_relax = false;
                }
                output.push(token);
            }
        }
        self.count_expansion(output.len())?;
        Ok(output)
    }

    fn get_expansion(&mut self, name: &str) -> Result<Option<MacroExpansion>, ParseError> {
        // Single characters only expand when marked active.
        if name.chars().count() == 1
            && let Some(ch) = name.chars().next()
            && let Some(catcode) = self.lexer.get_catcode(ch)
            && catcode != 13
        {
            return Ok(None);
        }

        let Some(definition) = self.macros.get(name).cloned() else {
            return Ok(None);
        };

        let expansion = match definition {
            MacroDefinition::Function(f) => match f(self as &mut dyn MacroContextInterface)? {
                MacroExpansionResult::String(s) => Some(self.string_to_expansion(&s)),
                MacroExpansionResult::Expansion(e) => Some(e),
                MacroExpansionResult::Empty => Some(MacroExpansion::default()),
            },
            MacroDefinition::StaticFunction(f) => match f(self as &mut dyn MacroContextInterface)? {
                MacroExpansionResult::String(s) => Some(self.string_to_expansion(&s)),
                MacroExpansionResult::Expansion(e) => Some(e),
                MacroExpansionResult::Empty => Some(MacroExpansion::default()),
            },
            MacroDefinition::StaticStr(s) => Some(self.string_to_expansion(s)),
            MacroDefinition::String(s) => Some(self.string_to_expansion(&s)),
            MacroDefinition::Expansion(e) => Some(e),
        };
        Ok(expansion)
    }

    fn string_to_expansion(&self, expansion: &str) -> MacroExpansion {
        // The parameter count is the highest #n referenced; ## escapes.
        let mut num_args = 0usize;
        let mut chars = expansion.chars();
        while let Some(ch) = chars.next() {
            if ch != '#' {
                continue;
            }
            match chars.next() {
                Some(digit) if digit.is_ascii_digit() => {
                    let n = (digit as u8 - b'0') as usize;
                    num_args = num_args.max(n);
                }
                _ => {}
            }
        }

        let mut body_lexer = Lexer::new(Arc::from(expansion), self.settings);
        let mut tokens = Vec::new();
        loop {
            match body_lexer.lex() {
                Ok(tok) if tok.text == "EOF" => break,
                Ok(tok) => tokens.push(tok),
                Err(_) => break,
            }
        }
        tokens.reverse();
        MacroExpansion {
            tokens,
            num_args,
            delimiters: None,
            unexpandable: false,
        }
    }

    /// One undelimited argument: a bare token, or a braced group with the
    /// outer braces stripped.
    fn consume_plain_arg(&mut self) -> Result<MacroArg, ParseError> {
        self.consume_spaces()?;
        let start = self.future_mut()?;

        if start.text != "{" {
            let tok = self.pop_token()?;
            match tok.text.as_str() {
                "EOF" => Err(ParseError::with_token(
                    ParseErrorKind::UnexpectedEndOfMacroArgument {
                        expected: "}".to_owned(),
                    },
                    &tok,
                )),
                "}" => Err(ParseError::with_token(ParseErrorKind::ExtraCloseBrace, &tok)),
                _ => Ok(MacroArg {
                    tokens: vec![tok.clone()],
                    start,
                    end: tok,
                }),
            }
        } else {
            self.pop_token()?; // the opening brace
            let mut tokens: Vec<Token> = Vec::new();
            let mut depth = 1usize;
            let end = loop {
                let tok = self.pop_token()?;
                match tok.text.as_str() {
                    "{" => depth += 1,
                    "}" => {
                        depth -= 1;
                        if depth == 0 {
                            break tok;
                        }
                    }
                    "EOF" => {
                        return Err(ParseError::with_token(
                            ParseErrorKind::UnexpectedEndOfMacroArgument {
                                expected: "}".to_owned(),
                            },
                            &tok,
                        ));
                    }
                    _ => {}
                }
                tokens.push(tok);
            };
            tokens.reverse();
            Ok(MacroArg { tokens, start, end })
        }
    }

    /// One delimited argument: everything up to the delimiter token pattern,
    /// which must match at group level zero.
    fn consume_delimited_arg(&mut self, delims: &[&str]) -> Result<MacroArg, ParseError> {
        let start = self.future_mut()?;
        let mut tokens: Vec<Token> = Vec::new();
        let mut depth: isize = 0;
        let mut matched = 0usize;

        let end = loop {
            let tok = self.pop_token()?;
            let text = tok.text.clone();
            match text.as_str() {
                "{" => depth += 1,
                "}" => {
                    depth -= 1;
                    if depth < 0 {
                        return Err(ParseError::with_token(ParseErrorKind::ExtraCloseBrace, &tok));
                    }
                }
                "EOF" => {
                    return Err(ParseError::with_token(
                        ParseErrorKind::UnexpectedEndOfMacroArgument {
                            expected: delims[matched].to_owned(),
                        },
                        &tok,
                    ));
                }
                _ => {}
            }
            tokens.push(tok);

            // The pattern advances only at group level zero (a literal brace
            // in the pattern matches the level it just opened).
            let at_level = depth == 0 || (depth == 1 && delims[matched] == "{");
            if at_level && text == delims[matched] {
                matched += 1;
                if matched == delims.len() {
                    let end = tokens[tokens.len() - 1].clone();
                    tokens.truncate(tokens.len() - matched);
                    break end;
                }
            } else {
                matched = 0;
            }
        };

        // An argument that is exactly one braced group loses its braces.
        if start.text == "{" && tokens.last().is_some_and(|t| t.text == "}") {
            tokens.pop();
            if !tokens.is_empty() {
                tokens.remove(0);
            }
        }
        tokens.reverse();
        Ok(MacroArg { tokens, start, end })
    }
}

/// Replace `#n` placeholders in a (stack-ordered) macro body with the
/// matching argument token lists, resolving `##` to a literal `#`. The body
/// is processed in reading order and flipped back to stack order at the end.
fn substitute_args(body: Vec<Token>, args: &[Vec<Token>]) -> Result<Vec<Token>, ParseError> {
    let mut out: Vec<Token> = Vec::with_capacity(body.len());
    let mut reading = body.into_iter().rev();

    while let Some(tok) = reading.next() {
        if tok.text != "#" {
            out.push(tok);
            continue;
        }
        let Some(follower) = reading.next() else {
            return Err(ParseError::with_token(
                ParseErrorKind::IncompletePlaceholder,
                &tok,
            ));
        };
        if follower.text == "#" {
            // An escaped hash.
            out.push(follower);
            continue;
        }
        let slot = follower
            .text
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=args.len()).contains(n))
            .ok_or_else(|| {
                ParseError::with_token(ParseErrorKind::InvalidArgumentNumber, &follower)
            })?;
        // Arguments are stored stack-ordered; emit them reading-ordered.
        out.extend(args[slot - 1].iter().rev().cloned());
    }

    out.reverse();
    Ok(out)
}

fn stack_underflow() -> ParseError {
    ParseError::new("Internal error: token stack is empty")
}

impl<'a> MacroContextInterface<'a> for MacroExpander<'a> {
    fn future_mut(&mut self) -> Result<Token, ParseError> {
        self.ensure_lookahead()?;
        self.stack.last().cloned().ok_or_else(stack_underflow)
    }

    fn pop_token(&mut self) -> Result<Token, ParseError> {
        self.ensure_lookahead()?;
        self.stack.pop().ok_or_else(stack_underflow)
    }

    fn consume_spaces(&mut self) -> Result<(), ParseError> {
        while self.future_mut()?.text == " " {
            self.stack.pop();
        }
        Ok(())
    }

    fn expand_once(&mut self, expandable_only: Option<bool>) -> Result<Option<isize>, ParseError> {
        self.expand_once_internal(expandable_only.unwrap_or(false))
    }

    fn expand_after_future(&mut self) -> Result<Token, ParseError> {
        self.expand_once_internal(false)?;
        self.future_mut()
    }

    fn expand_next_token(&mut self) -> Result<Token, ParseError> {
        while self.expand_once_internal(false)?.is_some() {}
        let mut token = self.stack.pop().ok_or_else(stack_underflow)?;
        if token.treat_as_relax {
            token.text = "\\relax".to_owned();
        }
        Ok(token)
    }

    fn expand_macro(&mut self, name: &str) -> Result<Option<Vec<Token>>, ParseError> {
        if !self.macros.has(name) {
            return Ok(None);
        }
        self.expand_tokens_internal(vec![Token::of(name)]).map(Some)
    }

    fn mode(&self) -> Mode {
        self.mode
    }

    fn context(&self) -> &MathTexContext {
        self.ctx
    }

    fn macros<'s>(&'s self) -> &'s Namespace<'a, MacroDefinition> {
        &self.macros
    }

    fn macros_mut<'s>(&'s mut self) -> &'s mut Namespace<'a, MacroDefinition> {
        &mut self.macros
    }

    fn expand_macro_as_text(&mut self, name: &str) -> Result<Option<String>, ParseError> {
        Ok(self
            .expand_macro(name)?
            .map(|tokens| tokens.into_iter().map(|t| t.text).collect()))
    }

    fn expand_tokens(&mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        self.expand_tokens_internal(tokens)
    }

    fn consume_arg(&mut self, delims: Option<&[&str]>) -> Result<MacroArg, ParseError> {
        match delims {
            Some(delims) if !delims.is_empty() => self.consume_delimited_arg(delims),
            _ => self.consume_plain_arg(),
        }
    }

    fn consume_args(&mut self, num_args: usize) -> Result<Vec<Vec<Token>>, ParseError> {
        self.consume_args_with_delims(num_args, None)
    }

    fn is_defined(&self, name: &str) -> bool {
        self.macros.has(name)
            || self.ctx.functions.contains_key(name)
            || IMPLICIT_COMMANDS.contains(name)
            || self.ctx.symbols.contains(Mode::Math, name)
            || self.ctx.symbols.contains(Mode::Text, name)
    }

    fn is_expandable(&self, name: &str) -> bool {
        if let Some(def) = self.macros.get(name) {
            match def {
                MacroDefinition::Expansion(e) => !e.unexpandable,
                _ => true,
            }
        } else {
            self.ctx
                .functions
                .get(name)
                .is_some_and(|func| !func.primitive)
        }
    }

    fn end_group(&mut self) -> Result<(), ParseError> {
        self.macros.end_group()
    }

    fn begin_group(&mut self) {
        self.macros.begin_group();
    }
}
