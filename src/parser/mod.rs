//! The recursive-descent parser.
//!
//! Consumes tokens through the macro expander (the "gullet"), dispatching
//! control sequences to the function registry and characters to the symbol
//! table. Produces the [`parse_node::AnyParseNode`] tree consumed by the
//! builders.

pub mod parse_node;

use crate::context::MathTexContext;
use crate::define_function::FunctionContext;
use crate::lexer::last_non_combining_mark_index;
use crate::macro_expander::{IMPLICIT_COMMANDS, MacroExpander};
use crate::macros::{MacroContextInterface as _, MacroDefinition};
use crate::spacing_data::MeasurementOwned;
use crate::style::TEXT;
use crate::symbols::{Group, NonAtom};
use crate::types::{
    ArgType, BreakToken, ErrorLocationProvider, Mode, ParseError, ParseErrorKind, Settings,
    SourceRangeRef as _, Spec, Token,
};
use crate::unicode::{
    U_SUBS_AND_SUPS, UNICODE_SYMBOLS, get_accent_mapping, is_unicode_subscript,
    supported_codepoint,
};
use crate::units::valid_unit;
use parse_node::{AnyParseNode, NodeType, ParseNode};
use phf::phf_set;

const END_OF_EXPRESSION: phf::Set<&'static str> = phf_set! {
    "}",
    "\\endgroup",
    "\\end",
    "\\right",
    "&",
};

#[inline]
fn wrap_ordgroup(mut nodes: Vec<ParseNode>, mode: Mode) -> ParseNode {
    match nodes.as_slice() {
        [ParseNode::OrdGroup(_)] => nodes.remove(0),
        _ => ParseNode::OrdGroup(parse_node::ParseNodeOrdGroup {
            mode,
            loc: None,
            body: nodes,
            semisimple: false,
        }),
    }
}

/// Replace `count` adjacent text nodes at `i` with one ligature node.
fn splice_ligature(group: &mut Vec<ParseNode>, i: usize, count: usize, text: String) {
    let loc = group[i].loc().range_ref(group[i + count - 1].loc());
    let ligature = ParseNode::TextOrd(parse_node::ParseNodeTextOrd {
        mode: Mode::Text,
        loc,
        text,
    });
    group.splice(i..i + count, [ligature]);
}

fn parse_size_with_unit(s: &str) -> Option<(f64, String)> {
    let mut chars = s.chars().peekable();

    let mut sign = 1.0;
    match chars.peek() {
        Some('+') => {
            chars.next();
        }
        Some('-') => {
            sign = -1.0;
            chars.next();
        }
        _ => {}
    }
    while matches!(chars.peek(), Some(' ')) {
        chars.next();
    }

    let mut number = String::new();
    let mut saw_digit = false;
    while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
        saw_digit = true;
        number.push(chars.next()?);
    }
    if matches!(chars.peek(), Some('.')) {
        number.push('.');
        chars.next();
        let mut digit_after_dot = false;
        while matches!(chars.peek(), Some(c) if c.is_ascii_digit()) {
            digit_after_dot = true;
            number.push(chars.next()?);
        }
        if !saw_digit && !digit_after_dot {
            return None;
        }
    } else if !saw_digit {
        return None;
    }
    while matches!(chars.peek(), Some(' ')) {
        chars.next();
    }

    let mut unit = String::new();
    for _ in 0..2 {
        let c = chars.next()?;
        if c.is_ascii_lowercase() {
            unit.push(c);
        } else {
            return None;
        }
    }

    let value: f64 = number.parse().ok()?;
    Some((sign * value, unit))
}

/// Accept a named color, `#rgb`, `#rrggbb`, or bare `rrggbb` (normalized to
/// the hash form); anything else is rejected.
fn normalize_color(text: &str) -> Option<String> {
    let named = !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic());
    let hex = |s: &str, len: usize| s.len() == len && s.chars().all(|c| c.is_ascii_hexdigit());
    if named {
        Some(text.to_owned())
    } else if let Some(body) = text.strip_prefix('#') {
        (hex(body, 3) || hex(body, 6)).then(|| text.to_owned())
    } else if hex(text, 6) {
        Some(format!("#{text}"))
    } else {
        None
    }
}

/// The parser: one per input string.
pub struct Parser<'a> {
    /// Current mode.
    pub mode: Mode,
    /// Token stream and macro machinery.
    pub gullet: MacroExpander<'a>,
    /// The settings record.
    pub settings: &'a Settings,
    /// Nesting depth of `\left`…`\right`, for `\middle` validity.
    pub leftright_depth: usize,
    /// Cached lookahead token.
    pub next_token: Option<Token>,
    /// The shared registry.
    pub ctx: &'a MathTexContext,
}

impl<'a> Parser<'a> {
    /// A parser over `input`, starting in math mode.
    #[must_use]
    pub fn new(input: &'a str, settings: &'a Settings, ctx: &'a MathTexContext) -> Self {
        let mode = Mode::Math;
        Self {
            mode,
            gullet: MacroExpander::new(input, settings, mode, ctx),
            settings,
            leftright_depth: 0,
            next_token: None,
            ctx,
        }
    }

    /// Assert the next token is `text`, optionally consuming it.
    pub fn expect(&mut self, text: &str, consume: bool) -> Result<(), ParseError> {
        let found = self.fetch()?;
        if found.text == text {
            if consume {
                self.consume();
            }
            return Ok(());
        }
        let kind = ParseErrorKind::ExpectedToken {
            expected: text.to_owned(),
            found: found.text.clone(),
        };
        Err(ParseError::with_token(kind, found))
    }

    /// Discard the cached lookahead token.
    pub fn consume(&mut self) {
        self.next_token = None;
    }

    /// The current lookahead token, fetching from the gullet if needed.
    pub fn fetch(&mut self) -> Result<&Token, ParseError> {
        match &mut self.next_token {
            Some(token) => Ok(token),
            slot => {
                let token = self.gullet.expand_next_token()?;
                Ok(slot.get_or_insert(token))
            }
        }
    }

    /// Switch math/text mode in the parser and gullet.
    pub const fn switch_mode(&mut self, new_mode: Mode) {
        self.mode = new_mode;
        self.gullet.switch_mode(new_mode);
    }

    /// Parse the whole input.
    pub fn parse(&mut self) -> Result<Vec<ParseNode>, ParseError> {
        if !self.settings.global_group {
            // LaTeX opens a group for every math list.
            self.gullet.begin_group();
        }

        // Legacy \color behavior aliases it to \textcolor inside this group.
        if self.settings.color_is_text_color {
            let legacy = MacroDefinition::StaticStr("\\textcolor");
            self.gullet.macros_mut().set("\\color", Some(legacy), false);
        }

        let result = self.parse_body();
        if result.is_err() {
            self.gullet.end_groups();
            return result;
        }
        if !self.settings.global_group
            && let Err(e) = self.gullet.end_group()
        {
            self.gullet.end_groups();
            return Err(e);
        }
        self.gullet.end_groups();
        result
    }

    fn parse_body(&mut self) -> Result<Vec<ParseNode>, ParseError> {
        let body = self.parse_expression(false, None)?;
        self.expect("EOF", true)?;

        // A \tag stored its content in the \df@tag marker macro.
        if self.gullet.macros().get("\\df@tag").is_some() {
            if !self.settings.display_mode {
                return Err(ParseError::new(ParseErrorKind::TagOnlyInDisplayMode));
            }
            let tag = self.subparse(vec![Token::of("\\df@tag")])?;
            return Ok(vec![ParseNode::Tag(Box::new(parse_node::ParseNodeTag {
                mode: self.mode,
                loc: None,
                body,
                tag,
            }))]);
        }

        Ok(body)
    }

    /// Parse a sequence of atoms until an end condition.
    pub fn parse_expression(
        &mut self,
        break_on_infix: bool,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<Vec<ParseNode>, ParseError> {
        let mut body: Vec<ParseNode> = Vec::new();

        loop {
            if self.mode == Mode::Math {
                self.consume_spaces()?;
            }
            let lex_text = self.fetch()?.text.clone();

            if END_OF_EXPRESSION.contains(&lex_text) {
                break;
            }
            if let Some(break_tok) = break_on_token_text
                && lex_text == break_tok.as_ref()
            {
                break;
            }
            if break_on_infix
                && let Some(func) = self.ctx.functions.get(&lex_text)
                && func.infix
            {
                break;
            }

            let Some(atom) = self.parse_atom(break_on_token_text)? else {
                break;
            };
            if let ParseNode::Internal(_) = atom {
                // Definitions and \relax leave nothing in the tree.
                continue;
            }
            body.push(atom);
        }

        if self.mode == Mode::Text {
            self.form_ligatures(&mut body);
        }

        self.handle_infix_nodes(body)
    }

    /// Skip space tokens.
    pub fn consume_spaces(&mut self) -> Result<(), ParseError> {
        while self.fetch()?.text == " " {
            self.consume();
        }
        Ok(())
    }

    /// Parse a base and any attached scripts, primes, and limit controls.
    fn parse_atom(
        &mut self,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let mut base = self.parse_group("atom", break_on_token_text)?;

        if matches!(base, Some(ParseNode::Internal(_))) {
            // No scripts on internal nodes; scripts attach to an empty base
            // on the next round instead.
            return Ok(base);
        }
        if self.mode == Mode::Text {
            return Ok(base);
        }

        let mut superscript: Option<ParseNode> = None;
        let mut subscript: Option<ParseNode> = None;

        loop {
            self.consume_spaces()?;
            let lex = self.fetch()?.clone();
            match lex.text.as_str() {
                "\\limits" | "\\nolimits" => {
                    let limits = lex.text == "\\limits";
                    match &mut base {
                        Some(ParseNode::Op(op)) => {
                            op.limits = limits;
                            op.always_handle_sup_sub = true;
                        }
                        Some(ParseNode::OperatorName(op)) if op.always_handle_sup_sub => {
                            op.limits = limits;
                        }
                        _ => {
                            return Err(ParseError::with_token(
                                ParseErrorKind::LimitsMustFollowBase,
                                &lex,
                            ));
                        }
                    }
                    self.consume();
                }
                "^" => {
                    if superscript.is_some() {
                        return Err(ParseError::with_token(
                            ParseErrorKind::DoubleSuperscript,
                            &lex,
                        ));
                    }
                    superscript = Some(self.handle_sup_subscript("superscript")?);
                }
                "_" => {
                    if subscript.is_some() {
                        return Err(ParseError::with_token(ParseErrorKind::DoubleSubscript, &lex));
                    }
                    subscript = Some(self.handle_sup_subscript("subscript")?);
                }
                "'" => {
                    if superscript.is_some() {
                        return Err(ParseError::with_token(
                            ParseErrorKind::DoubleSuperscript,
                            &lex,
                        ));
                    }
                    // Collapse the whole prime run into one ^{\prime...}.
                    let mut count = 0usize;
                    while self.fetch()?.text == "'" {
                        count += 1;
                        self.consume();
                    }
                    let prime = ParseNode::TextOrd(parse_node::ParseNodeTextOrd {
                        mode: self.mode,
                        loc: None,
                        text: "\\prime".to_owned(),
                    });
                    let mut body = vec![prime; count];
                    if self.fetch()?.text == "^" {
                        body.push(self.handle_sup_subscript("superscript")?);
                    }
                    superscript = Some(ParseNode::OrdGroup(parse_node::ParseNodeOrdGroup {
                        mode: self.mode,
                        loc: None,
                        body,
                        semisimple: false,
                    }));
                }
                text => {
                    // Unicode sub/superscript characters continue a script.
                    let Some(first) = text.chars().next() else {
                        break;
                    };
                    let Some(&mapped) = U_SUBS_AND_SUPS.get(&first) else {
                        break;
                    };
                    let is_sub = is_unicode_subscript(first);
                    let mut script_tokens = vec![Token::of(mapped)];
                    self.consume();
                    loop {
                        let token = self.fetch()?.text.clone();
                        let Some(c) = token.chars().next() else { break };
                        let Some(&mapped) = U_SUBS_AND_SUPS.get(&c) else {
                            break;
                        };
                        if is_unicode_subscript(c) != is_sub {
                            break;
                        }
                        script_tokens.push(Token::of(mapped));
                        self.consume();
                    }
                    script_tokens.reverse();
                    let body = self.subparse(script_tokens)?;
                    let group = ParseNode::OrdGroup(parse_node::ParseNodeOrdGroup {
                        mode: Mode::Math,
                        loc: None,
                        body,
                        semisimple: false,
                    });
                    if is_sub {
                        subscript = Some(group);
                    } else {
                        superscript = Some(group);
                    }
                }
            }
        }

        if superscript.is_some() || subscript.is_some() {
            return Ok(Some(ParseNode::SupSub(parse_node::ParseNodeSupSub {
                mode: self.mode,
                loc: None,
                base: base.map(Box::new),
                sup: superscript.map(Box::new),
                sub: subscript.map(Box::new),
            })));
        }
        Ok(base)
    }

    /// Rewrite a collected infix operator (`\over` and friends) into the
    /// function it stands for, wrapping the flanks as numerator/denominator.
    fn handle_infix_nodes(&mut self, mut body: Vec<ParseNode>) -> Result<Vec<ParseNode>, ParseError> {
        let mut infix = None;
        for (i, node) in body.iter().enumerate() {
            let ParseNode::Infix(n) = node else { continue };
            if infix.is_some() {
                return Err(ParseError::with_token(
                    ParseErrorKind::OnlyOneInfixPerGroup,
                    &n.token,
                ));
            }
            infix = Some((i, n.replace_with.clone()));
        }

        let Some((over_idx, func_name)) = infix else {
            return Ok(body);
        };

        let denom_body = body.split_off(over_idx + 1);
        let mut numer_body = body;
        let Some(infix_node) = numer_body.pop() else {
            return Err(ParseError::new(ParseErrorKind::InfixAtStart));
        };

        let numer = wrap_ordgroup(numer_body, self.mode);
        let denom = wrap_ordgroup(denom_body, self.mode);

        let node = if func_name == "\\\\abovefrac" {
            self.call_function(&func_name, vec![numer, infix_node, denom], vec![], None, None)?
        } else {
            self.call_function(&func_name, vec![numer, denom], vec![], None, None)?
        };
        Ok(vec![node])
    }

    /// Combine ASCII runs into typographic ligatures (text mode).
    fn form_ligatures(&self, group: &mut Vec<ParseNode>) {
        let mut i = 0;
        while i + 1 < group.len() {
            let run = match group[i].text() {
                Some("-") if group[i + 1].text() == Some("-") => {
                    if group.get(i + 2).and_then(ParseNode::text) == Some("-") {
                        Some((3, "---".to_owned()))
                    } else {
                        Some((2, "--".to_owned()))
                    }
                }
                Some(quote @ ("'" | "`")) if group[i + 1].text() == Some(quote) => {
                    Some((2, quote.repeat(2)))
                }
                _ => None,
            };
            if let Some((count, text)) = run {
                splice_ligature(group, i, count, text);
            }
            i += 1;
        }
    }

    /// Accumulate tokens while `validator` accepts the concatenation.
    fn parse_regex_group<F>(&mut self, mode_name: &str, mut validator: F) -> Result<Token, ParseError>
    where
        F: FnMut(&str) -> bool,
    {
        let first_token = self.fetch()?.clone();
        let mut last_token = first_token.clone();
        let mut acc = String::new();

        loop {
            let next_token = self.fetch()?;
            if next_token.text == "EOF" {
                break;
            }
            let test = format!("{}{}", acc, next_token.text);
            if !validator(&test) {
                break;
            }
            last_token = next_token.clone();
            acc = test;
            self.consume();
        }

        if acc.is_empty() {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidValue {
                    context: mode_name.to_owned(),
                    value: first_token.text.clone(),
                },
                &first_token,
            ));
        }
        Ok(first_token.range(&last_token, acc))
    }

    /// Read a braced argument as its raw token text.
    fn parse_string_group(&mut self, optional: bool) -> Result<Option<Token>, ParseError> {
        let Some(mut arg_token) = self.gullet.scan_argument(optional)? else {
            return Ok(None);
        };
        let mut text = String::new();
        loop {
            let next = self.fetch()?;
            if next.text == "EOF" {
                break;
            }
            text.push_str(&next.text);
            self.consume();
        }
        self.consume(); // the EOF sentinel
        arg_token.text = text;
        Ok(Some(arg_token))
    }

    /// Parse a color argument.
    fn parse_color_group(&mut self, optional: bool) -> Result<Option<ParseNode>, ParseError> {
        let Some(tok) = self.parse_string_group(optional)? else {
            return Ok(None);
        };
        let Some(color) = normalize_color(&tok.text) else {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidValue {
                    context: "color".to_owned(),
                    value: tok.text.clone(),
                },
                &tok,
            ));
        };
        Ok(Some(ParseNode::ColorToken(parse_node::ParseNodeColorToken {
            mode: self.mode,
            loc: None,
            color,
        })))
    }

    /// Parse a size argument (braced or bare, e.g. `1.5em`).
    pub fn parse_size_group(
        &mut self,
        optional: bool,
    ) -> Result<Option<parse_node::ParseNodeSize>, ParseError> {
        self.gullet.consume_spaces()?;
        let res = if optional || self.gullet.future_mut()?.text == "{" {
            self.parse_string_group(optional)?
        } else {
            Some(self.parse_regex_group("size", |s| {
                // Accept any prefix of: [+-]? number unit, with a unit of at
                // most two lowercase letters.
                let body = s.trim();
                let body = body.strip_prefix(['+', '-']).unwrap_or(body).trim_start();
                if body.is_empty() {
                    return true;
                }
                let digits = body.chars().take_while(char::is_ascii_digit).count();
                let mut tail = &body[digits..];
                if let Some(frac) = tail.strip_prefix('.') {
                    let frac_digits = frac.chars().take_while(char::is_ascii_digit).count();
                    tail = &frac[frac_digits..];
                } else if digits == 0 {
                    return false;
                }
                let tail = tail.trim_start();
                let unit = tail
                    .chars()
                    .take(2)
                    .take_while(char::is_ascii_lowercase)
                    .count();
                tail[unit..].trim().is_empty()
            })?)
        };

        let Some(mut res) = res else { return Ok(None) };
        let is_blank = if !optional && res.text.is_empty() {
            // Empty size argument in \genfrac means "default thickness".
            res.text = "0pt".to_owned();
            true
        } else {
            false
        };

        let Some((number, unit)) = parse_size_with_unit(&res.text) else {
            return Err(ParseError::with_token(
                ParseErrorKind::InvalidSize {
                    size: res.text.clone(),
                },
                &res,
            ));
        };
        let value = MeasurementOwned { number, unit };
        if !valid_unit(&value) {
            return Err(ParseError::new(ParseErrorKind::InvalidUnit {
                unit: value.unit,
            }));
        }
        Ok(Some(parse_node::ParseNodeSize {
            mode: self.mode,
            loc: res.loc,
            value,
            is_blank,
        }))
    }

    /// Parse a URL argument with hyperref catcodes and `\%`-style unescaping.
    fn parse_url_group(&mut self, optional: bool) -> Result<Option<ParseNode>, ParseError> {
        self.gullet.set_catcode('%', 13); // active
        self.gullet.set_catcode('~', 12); // other
        let res = self.parse_string_group(optional);
        self.gullet.set_catcode('%', 14); // comment
        self.gullet.set_catcode('~', 13); // active
        let Some(tok) = res? else { return Ok(None) };

        let mut url = String::with_capacity(tok.text.len());
        let mut chars = tok.text.chars().peekable();
        while let Some(c) = chars.next() {
            match (c, chars.peek()) {
                // hyperref-style escapes drop their backslash.
                ('\\', Some(escaped)) if "#$%&~_^{}".contains(*escaped) => {
                    url.push(*escaped);
                    chars.next();
                }
                _ => url.push(c),
            }
        }
        Ok(Some(ParseNode::Url(parse_node::ParseNodeUrl {
            mode: self.mode,
            loc: tok.loc,
            url,
        })))
    }

    /// Parse a full argument group, optionally switching mode for its body.
    fn parse_argument_group(
        &mut self,
        optional: bool,
        mode: Option<Mode>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let Some(arg_token) = self.gullet.scan_argument(optional)? else {
            return Ok(None);
        };
        let outer_mode = mode.map(|inner| {
            let outer = self.mode;
            self.switch_mode(inner);
            outer
        });
        self.gullet.begin_group();
        let body = self.parse_expression(false, Some(&BreakToken::Eof))?;
        self.expect("EOF", true)?;
        self.gullet.end_group()?;
        if let Some(outer) = outer_mode {
            self.switch_mode(outer);
        }

        Ok(Some(ParseNode::OrdGroup(parse_node::ParseNodeOrdGroup {
            mode: self.mode,
            loc: arg_token.loc,
            body,
            semisimple: false,
        })))
    }

    /// Parse one argument of the given type.
    fn parse_group_of_type(
        &mut self,
        name: &str,
        arg_type: Option<&ArgType>,
        optional: bool,
    ) -> Result<Option<ParseNode>, ParseError> {
        match arg_type {
            Some(ArgType::Color) => self.parse_color_group(optional),
            Some(ArgType::Size) => Ok(self.parse_size_group(optional)?.map(ParseNode::Size)),
            Some(ArgType::Url) => self.parse_url_group(optional),
            Some(ArgType::Mode(mode)) => self.parse_argument_group(optional, Some(*mode)),
            Some(ArgType::Hbox) => {
                Ok(self.parse_argument_group(optional, Some(Mode::Text))?.map(|group| {
                    ParseNode::Styling(parse_node::ParseNodeStyling {
                        mode: group.mode(),
                        loc: None,
                        style: TEXT,
                        body: vec![group],
                    })
                }))
            }
            Some(ArgType::Raw) => Ok(self.parse_string_group(optional)?.map(|t| {
                ParseNode::Raw(parse_node::ParseNodeRaw {
                    mode: Mode::Text,
                    loc: t.loc,
                    string: t.text,
                })
            })),
            Some(ArgType::Primitive) => {
                if optional {
                    return Err(ParseError::new("A primitive argument cannot be optional"));
                }
                match self.parse_group(name, None)? {
                    Some(group) => Ok(Some(group)),
                    None => Err(ParseError::with_token(
                        ParseErrorKind::ExpectedGroupAs {
                            context: name.to_owned(),
                        },
                        self.fetch()?,
                    )),
                }
            }
            Some(ArgType::Original) | None => self.parse_argument_group(optional, None),
        }
    }

    /// Parse a group: `{...}`, `\begingroup...`, a function, or a symbol.
    fn parse_group(
        &mut self,
        name: &str,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let first_token = self.fetch()?.clone();
        let text = first_token.text.clone();

        let brace_breaker = match text.as_str() {
            "{" => Some(BreakToken::RightBrace),
            "\\begingroup" => Some(BreakToken::EndGroup),
            _ => None,
        };
        if let Some(break_token) = brace_breaker {
            self.consume();
            self.gullet.begin_group();
            let expression = self.parse_expression(false, Some(&break_token))?;
            let last_token = self.fetch()?.clone();
            self.expect(break_token.as_ref(), true)?;
            self.gullet.end_group()?;
            return Ok(Some(ParseNode::OrdGroup(parse_node::ParseNodeOrdGroup {
                mode: self.mode,
                loc: first_token.loc.as_ref().range_ref(last_token.loc.as_ref()),
                body: expression,
                // \begingroup..\endgroup is a semi-simple group, transparent
                // to math spacing.
                semisimple: text == "\\begingroup",
            })));
        }

        let mut result = self.parse_function(break_on_token_text, Some(name))?;
        if result.is_none() {
            result = self.parse_symbol()?;
        }
        if result.is_none()
            && text.starts_with('\\')
            && !IMPLICIT_COMMANDS.contains(text.as_str())
        {
            if self.settings.throw_on_error {
                return Err(ParseError::with_token(
                    ParseErrorKind::UndefinedControlSequence { name: text },
                    &first_token,
                ));
            }
            result = Some(ParseNode::Color(self.format_unsupported_cmd(&text)));
            self.consume();
        }
        Ok(result)
    }

    /// Render an unsupported command as error-colored text.
    #[must_use]
    pub fn format_unsupported_cmd(&self, text: &str) -> parse_node::ParseNodeColor {
        let textord_list = text
            .chars()
            .map(|ch| {
                AnyParseNode::TextOrd(parse_node::ParseNodeTextOrd {
                    mode: Mode::Text,
                    loc: None,
                    text: ch.to_string(),
                })
            })
            .collect();
        let text_node = AnyParseNode::Text(parse_node::ParseNodeText {
            mode: self.mode,
            loc: None,
            body: textord_list,
            font: None,
        });
        parse_node::ParseNodeColor {
            mode: self.mode,
            loc: None,
            color: self.settings.error_color.clone(),
            body: vec![text_node],
        }
    }

    /// Parse a function application at the current token, if there is one.
    pub fn parse_function(
        &mut self,
        break_on_token_text: Option<&BreakToken>,
        name: Option<&str>,
    ) -> Result<Option<ParseNode>, ParseError> {
        let token = self.fetch()?.clone();
        let func = token.text.clone();
        let Some(func_data) = self.ctx.functions.get(&func) else {
            return Ok(None);
        };
        let func_data = func_data.clone();
        self.consume();

        // Bare-argument position only admits functions flagged for it.
        if let Some(context_name) = name.filter(|n| *n != "atom")
            && !func_data.allowed_in_argument
        {
            return Err(ParseError::with_token(
                ParseErrorKind::FunctionMissingArguments {
                    func: func.clone(),
                    context: context_name.to_owned(),
                },
                &token,
            ));
        }
        let allowed_here = match self.mode {
            Mode::Text => func_data.allowed_in_text,
            Mode::Math => func_data.allowed_in_math,
        };
        if !allowed_here {
            return Err(ParseError::with_token(
                ParseErrorKind::FunctionDisallowedInMode {
                    func: func.clone(),
                    mode: self.mode,
                },
                &token,
            ));
        }

        let (args, opt_args) = self.parse_arguments(&func, &func_data)?;
        let node = self.call_function(&func, args, opt_args, Some(&token), break_on_token_text)?;
        Ok(Some(node))
    }

    /// Parse a symbol at the current token, if there is one.
    fn parse_symbol(&mut self) -> Result<Option<ParseNode>, ParseError> {
        let nucleus = self.fetch()?.clone();
        let mut text = nucleus.text.clone();

        // \verb bodies arrive as single tokens from the lexer.
        let verb_arg = text
            .strip_prefix("\\verb")
            .filter(|arg| arg.chars().next().is_some_and(|c| !c.is_ascii_alphabetic()));
        if let Some(arg) = verb_arg {
            self.consume();
            let star = arg.starts_with('*');
            let body = arg.strip_prefix('*').unwrap_or(arg);
            let delimited =
                body.len() >= 2 && body.chars().next() == body.chars().last();
            if !delimited {
                return Err(ParseError::with_token(
                    "\\verb assertion failed -- please report what input caused this bug",
                    &nucleus,
                ));
            }
            return Ok(Some(ParseNode::Verb(parse_node::ParseNodeVerb {
                mode: Mode::Text,
                loc: nucleus.loc,
                body: body[1..body.len() - 1].to_owned(),
                star,
            })));
        }

        // Decompose precomposed accented characters.
        if let Some(first) = text.chars().next()
            && let Some(mapped) = UNICODE_SYMBOLS.get(&first)
            && self.ctx.symbols.get(self.mode, &first.to_string()).is_none()
        {
            if self.mode == Mode::Math {
                self.settings.report_nonstrict(
                    "unicodeTextInMathMode",
                    &format!("Accented Unicode text character \"{first}\" used in math mode"),
                    nucleus.loc.as_ref().map(|l| l as &dyn ErrorLocationProvider),
                )?;
            }
            let rest: String = text.chars().skip(1).collect();
            text = format!("{mapped}{rest}");
        }

        // Split off trailing combining marks.
        let accents = last_non_combining_mark_index(&text).map(|idx| {
            let accents = text.split_off(idx);
            if text == "i" {
                text = "\u{0131}".to_owned(); // dotless i
            } else if text == "j" {
                text = "\u{0237}".to_owned(); // dotless j
            }
            accents
        });

        let mut symbol = if let Some(info) = self.ctx.symbols.get(self.mode, &text) {
            match info.group {
                Group::Atom(family) => ParseNode::Atom(parse_node::ParseNodeAtom {
                    family,
                    mode: self.mode,
                    loc: nucleus.loc.clone(),
                    text: text.clone(),
                }),
                Group::NonAtom(NonAtom::MathOrd) => {
                    ParseNode::MathOrd(parse_node::ParseNodeMathOrd {
                        mode: self.mode,
                        loc: nucleus.loc.clone(),
                        text: text.clone(),
                    })
                }
                Group::NonAtom(NonAtom::TextOrd) => {
                    ParseNode::TextOrd(parse_node::ParseNodeTextOrd {
                        mode: self.mode,
                        loc: nucleus.loc.clone(),
                        text: text.clone(),
                    })
                }
                Group::NonAtom(NonAtom::Spacing) => {
                    ParseNode::Spacing(parse_node::ParseNodeSpacing {
                        mode: self.mode,
                        loc: nucleus.loc.clone(),
                        text: text.clone(),
                    })
                }
                Group::NonAtom(NonAtom::AccentToken) => {
                    ParseNode::AccentToken(parse_node::ParseNodeAccentToken {
                        mode: self.mode,
                        loc: nucleus.loc.clone(),
                        text: text.clone(),
                    })
                }
                Group::NonAtom(NonAtom::OpToken) => {
                    ParseNode::OpToken(parse_node::ParseNodeOpToken {
                        mode: self.mode,
                        loc: nucleus.loc.clone(),
                        text: text.clone(),
                    })
                }
            }
        } else if text.chars().next().is_some_and(|c| c >= '\u{80}') {
            let first = text.chars().next().unwrap_or('\0');
            if supported_codepoint(first as u32) {
                if self.mode == Mode::Math {
                    self.settings.report_nonstrict(
                        "unicodeTextInMathMode",
                        &format!("Unicode text character \"{text}\" used in math mode"),
                        nucleus.loc.as_ref().map(|l| l as &dyn ErrorLocationProvider),
                    )?;
                }
            } else {
                self.settings.report_nonstrict(
                    "unknownSymbol",
                    &format!(
                        "Unrecognized Unicode character \"{text}\" (0x{:X})",
                        first as u32
                    ),
                    nucleus.loc.as_ref().map(|l| l as &dyn ErrorLocationProvider),
                )?;
            }
            ParseNode::TextOrd(parse_node::ParseNodeTextOrd {
                mode: Mode::Text,
                loc: nucleus.loc.clone(),
                text: text.clone(),
            })
        } else {
            // EOF, ^, _, {, }, unregistered control sequences.
            return Ok(None);
        };

        self.consume();

        // Fold combining marks into accent nodes, innermost first.
        for ch in accents.as_deref().unwrap_or_default().chars() {
            let Some(mapping) = get_accent_mapping(ch) else {
                return Err(ParseError::with_token(
                    ParseErrorKind::UnknownAccent {
                        accent: ch.to_string(),
                    },
                    &nucleus,
                ));
            };
            let command = match self.mode {
                Mode::Math => mapping.math.unwrap_or(mapping.text),
                Mode::Text => mapping.text,
            };
            if command.is_empty() {
                return Err(ParseError::with_token(
                    ParseErrorKind::UnsupportedAccentInMode {
                        accent: ch.to_string(),
                        mode: self.mode,
                    },
                    &nucleus,
                ));
            }
            symbol = ParseNode::Accent(Box::new(parse_node::ParseNodeAccent {
                mode: self.mode,
                loc: nucleus.loc.clone(),
                label: command.to_owned(),
                is_stretchy: false,
                is_shifty: true,
                base: Box::new(symbol),
            }));
        }

        Ok(Some(symbol))
    }

    /// Parse a separate token list as its own job. Tokens are supplied in
    /// reverse order, as in a macro body.
    pub fn subparse(&mut self, tokens: Vec<Token>) -> Result<Vec<ParseNode>, ParseError> {
        let old_token = self.next_token.take();
        self.gullet.push_token(Token::of("}"));
        self.gullet.push_tokens(tokens);
        let parse = self.parse_expression(false, None)?;
        self.expect("}", true)?;
        self.next_token = old_token;
        Ok(parse)
    }

    /// Parse the group after `^` or `_`.
    pub fn handle_sup_subscript(&mut self, name: &str) -> Result<ParseNode, ParseError> {
        let symbol_token = self.fetch()?.clone();
        let symbol = symbol_token.text.clone();
        self.consume();
        self.consume_spaces()?;

        // Skip internal nodes such as \relax between the script symbol and
        // its group.
        let mut group = self.parse_group(name, None)?;
        while let Some(ParseNode::Internal(_)) = group {
            group = self.parse_group(name, None)?;
        }

        group.ok_or_else(|| {
            ParseError::with_token(
                ParseErrorKind::ExpectedGroupAfterSymbol { symbol },
                &symbol_token,
            )
        })
    }

    /// Invoke a registered function's handler.
    pub fn call_function(
        &mut self,
        name: &str,
        args: Vec<ParseNode>,
        opt_args: Vec<Option<ParseNode>>,
        token: Option<&Token>,
        break_on_token_text: Option<&BreakToken>,
    ) -> Result<ParseNode, ParseError> {
        let Some(handler) = self.ctx.functions.get(name).and_then(|f| f.handler) else {
            return Err(ParseError::new(ParseErrorKind::NoFunctionHandler {
                name: name.to_owned(),
            }));
        };
        handler(
            FunctionContext {
                func_name: name.to_owned(),
                parser: self,
                token,
                break_on_token_text,
            },
            args,
            opt_args,
        )
    }

    /// Parse the arguments a function or environment declares.
    pub fn parse_arguments(
        &mut self,
        func: &str,
        func_data: &dyn Spec,
    ) -> Result<(Vec<ParseNode>, Vec<Option<ParseNode>>), ParseError> {
        let num_optional = func_data.num_optional_args();
        let total_args = func_data.num_args() + num_optional;
        if total_args == 0 {
            return Ok((Vec::new(), Vec::new()));
        }

        let mut args = Vec::with_capacity(func_data.num_args());
        let mut opt_args = Vec::with_capacity(num_optional);

        for i in 0..total_args {
            let declared = func_data.arg_types().and_then(|v| v.get(i)).copied();
            let is_optional = i < num_optional;

            // Primitives take primitive arguments; \sqrt's radicand does too
            // when no index was given.
            let arg_type = if (func_data.primitive() && declared.is_none())
                || (func_data.node_type() == Some(&NodeType::Sqrt)
                    && i == 1
                    && opt_args.first().is_none_or(|o: &Option<ParseNode>| o.is_none()))
            {
                Some(ArgType::Primitive)
            } else {
                declared
            };

            let context = format!("argument to '{func}'");
            let arg = self.parse_group_of_type(&context, arg_type.as_ref(), is_optional)?;

            match (is_optional, arg) {
                (true, slot) => opt_args.push(slot),
                (false, Some(arg)) => args.push(arg),
                (false, None) => return Err(ParseError::new(ParseErrorKind::NullArgument)),
            }
        }

        Ok((args, opt_args))
    }
}
