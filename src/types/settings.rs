//! Rendering configuration.
//!
//! [`Settings`] is the resolved form of the options record the embedding host
//! passes to the entry functions. All fields hold concrete values; the bon
//! builder applies the documented defaults for anything left unset.

use core::cell::RefCell;
use core::fmt;

use alloc::sync::Arc;
use bon::bon;

use crate::macro_expander::MacroMap;
use crate::namespace::KeyMap;
use crate::types::{ErrorLocationProvider, ParseError, ParseErrorKind};
use crate::utils::protocol_from_url;

/// Which output trees the entry function assembles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Visual HTML tree plus the MathML tree for accessibility (default).
    #[default]
    HtmlAndMathml,
    /// Visual HTML tree only.
    Html,
    /// MathML tree only.
    Mathml,
}

/// How non-LaTeX-compatible input is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrictMode {
    /// Accept silently.
    Ignore,
    /// Log to stderr and accept.
    Warn,
    /// Fail with a [`ParseError`].
    Error,
}

/// Return value of a custom strict callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrictReturn {
    /// `true` = error, `false` = ignore.
    Bool(bool),
    /// An explicit mode.
    Mode(StrictMode),
}

/// Per-code strict callback: `(error_code, error_msg, location) -> decision`.
pub type StrictFunction =
    dyn Fn(&str, &str, Option<&dyn ErrorLocationProvider>) -> Option<StrictReturn> + Send + Sync;

/// Strictness configuration: a fixed mode, a boolean, or a callback.
#[derive(Clone)]
pub enum StrictSetting {
    /// Fixed mode for all codes.
    Mode(StrictMode),
    /// `true` maps to [`StrictMode::Error`], `false` to ignore.
    Bool(bool),
    /// Per-code callback; `None` falls back to ignore.
    Function(Arc<StrictFunction>),
}

impl fmt::Debug for StrictSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mode(mode) => f.debug_tuple("Mode").field(mode).finish(),
            Self::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Self::Function(_) => f.debug_tuple("Function").field(&"..").finish(),
        }
    }
}

impl Default for StrictSetting {
    fn default() -> Self {
        Self::Mode(StrictMode::Warn)
    }
}

/// What a trust callback gets to look at before a potentially dangerous
/// command (`\href`, `\url`, `\includegraphics`, `\htmlClass`, …) renders.
#[derive(Debug, Clone, Default)]
pub struct TrustContext {
    /// The command requesting trust, e.g. `"\\href"`.
    pub command: String,
    /// URL argument, when the command carries one.
    pub url: Option<String>,
    /// Protocol inferred from `url` (e.g. `"https"`, `"_relative"`).
    pub protocol: Option<String>,
    /// CSS class for `\htmlClass`.
    pub class: Option<String>,
    /// Element id for `\htmlId`.
    pub id: Option<String>,
    /// Inline style for `\htmlStyle`.
    pub style: Option<String>,
    /// Data attributes for `\htmlData`.
    pub attributes: Option<KeyMap<String, String>>,
}

/// Trust callback: `Some(true)` trusts, `Some(false)`/`None` rejects.
pub type TrustFunction = dyn Fn(&mut TrustContext) -> Option<bool> + Send + Sync;

/// Trust configuration: blanket boolean or a callback.
#[derive(Clone)]
pub enum TrustSetting {
    /// Trust everything (`true`) or nothing (`false`, default).
    Bool(bool),
    /// Context-aware callback.
    Function(Arc<TrustFunction>),
}

impl fmt::Debug for TrustSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(flag) => f.debug_tuple("Bool").field(flag).finish(),
            Self::Function(_) => f.debug_tuple("Function").field(&"..").finish(),
        }
    }
}

impl Default for TrustSetting {
    fn default() -> Self {
        Self::Bool(false)
    }
}

/// All knobs controlling parsing and rendering.
///
/// Construct with [`Settings::builder`] or mutate the public fields directly.
/// For high-throughput use, build one `Settings` and reuse it across calls.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Render in display (block) style rather than inline text style.
    pub display_mode: bool,
    /// Which output trees to assemble.
    pub output: OutputFormat,
    /// Place equation tags on the left.
    pub leqno: bool,
    /// Flush display equations left instead of centering.
    pub fleqn: bool,
    /// Propagate errors to the caller (`true`) or render a red error span.
    pub throw_on_error: bool,
    /// CSS color for the error span when `throw_on_error` is false.
    pub error_color: String,
    /// User macro definitions, shared with the expander's namespace.
    pub macros: RefCell<MacroMap>,
    /// Lower bound for rule thickness, in ems.
    pub min_rule_thickness: f64,
    /// Legacy behavior: `\color` acts like `\textcolor`.
    pub color_is_text_color: bool,
    /// Strictness policy for non-LaTeX-compatible input.
    pub strict: StrictSetting,
    /// Trust policy for commands that can inject URLs or markup.
    pub trust: TrustSetting,
    /// Cap on any single computed size, in ems.
    pub max_size: f64,
    /// Cap on macro expansions per parse.
    pub max_expand: usize,
    /// Skip the implicit group around the whole expression.
    pub global_group: bool,
}

#[bon]
impl Settings {
    /// Build a `Settings`, defaulting every unset field.
    #[must_use]
    #[builder]
    pub fn new(
        display_mode: Option<bool>,
        output: Option<OutputFormat>,
        leqno: Option<bool>,
        fleqn: Option<bool>,
        throw_on_error: Option<bool>,
        error_color: Option<String>,
        macros: Option<MacroMap>,
        min_rule_thickness: Option<f64>,
        color_is_text_color: Option<bool>,
        strict: Option<StrictSetting>,
        trust: Option<TrustSetting>,
        max_size: Option<f64>,
        max_expand: Option<usize>,
        global_group: Option<bool>,
    ) -> Self {
        Self {
            display_mode: display_mode.unwrap_or(false),
            output: output.unwrap_or_default(),
            leqno: leqno.unwrap_or(false),
            fleqn: fleqn.unwrap_or(false),
            throw_on_error: throw_on_error.unwrap_or(true),
            error_color: error_color.unwrap_or_else(|| "#cc0000".to_owned()),
            macros: RefCell::new(macros.unwrap_or_default()),
            min_rule_thickness: min_rule_thickness.unwrap_or(0.0).max(0.0),
            color_is_text_color: color_is_text_color.unwrap_or(false),
            strict: strict.unwrap_or_default(),
            trust: trust.unwrap_or_default(),
            max_size: max_size.unwrap_or(f64::INFINITY).max(0.0),
            max_expand: max_expand.unwrap_or(1000),
            global_group: global_group.unwrap_or(false),
        }
    }

    /// Resolve the strict policy for one code/message/site, logging the warn
    /// channel as a side effect so every caller shares it.
    #[expect(clippy::print_stderr)]
    fn strict_mode_for(
        &self,
        error_code: &str,
        error_msg: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> StrictMode {
        let mode = match &self.strict {
            StrictSetting::Mode(mode) => *mode,
            StrictSetting::Bool(true) => StrictMode::Error,
            StrictSetting::Bool(false) => StrictMode::Ignore,
            StrictSetting::Function(f) => match f(error_code, error_msg, token) {
                Some(StrictReturn::Mode(mode)) => mode,
                Some(StrictReturn::Bool(strict)) => {
                    if strict {
                        StrictMode::Error
                    } else {
                        StrictMode::Ignore
                    }
                }
                None => StrictMode::Ignore,
            },
        };
        if mode == StrictMode::Warn {
            eprintln!(
                "LaTeX-incompatible input and strict mode is set to 'warn': {error_msg} [{error_code}]"
            );
        }
        mode
    }

    /// Report non-LaTeX-compatible input according to the strict policy.
    ///
    /// Returns `Ok(())` under ignore/warn and an error under error mode. The
    /// warn channel writes a one-line message to stderr, like LaTeX's own
    /// console warnings.
    pub fn report_nonstrict(
        &self,
        error_code: &str,
        error_msg: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> Result<(), ParseError> {
        if self.strict_mode_for(error_code, error_msg, token) != StrictMode::Error {
            return Ok(());
        }
        let kind = ParseErrorKind::StrictModeError {
            message: error_msg.to_owned(),
            code: error_code.to_owned(),
        };
        Err(match token {
            Some(site) => ParseError::with_token(kind, site),
            None => ParseError::new(kind),
        })
    }

    /// Like [`Self::report_nonstrict`] but only answers whether strict
    /// (LaTeX-faithful) behavior should be used, without failing.
    #[must_use]
    pub fn use_strict_behavior(
        &self,
        error_code: &str,
        error_msg: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> bool {
        self.strict_mode_for(error_code, error_msg, token) == StrictMode::Error
    }

    /// Decide whether a potentially dangerous command is allowed to render.
    ///
    /// Infers the protocol from `context.url` when absent; a URL whose
    /// protocol cannot be determined is rejected outright.
    pub fn is_trusted(&self, context: &mut TrustContext) -> bool {
        if context.protocol.is_none() {
            let inferred = context.url.as_deref().map(protocol_from_url);
            match inferred {
                // No URL involved: nothing to infer.
                None => {}
                Some(Some(protocol)) => context.protocol = Some(protocol),
                Some(None) => return false,
            }
        }
        match &self.trust {
            TrustSetting::Bool(trusted) => *trusted,
            TrustSetting::Function(f) => f(context) == Some(true),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
