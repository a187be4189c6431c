use std::fmt::Display;

use thiserror::Error as ThisError;

use crate::Span;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::MixedCallArguments => "MixedCallArguments",
            ErrorImpl::AmbiguousVariantShape { .. } => "AmbiguousVariantShape",
            ErrorImpl::RecursionLimitExceeded => "RecursionLimitExceeded",
        }
    }

    /// The taxonomy class the variant belongs to. Lexical and syntactic
    /// classes group several variants; the last two are classes of their
    /// own.
    pub fn get_class(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } | ErrorImpl::UnterminatedString => "LexError",
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::UnexpectedTokenDetailed { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::MixedCallArguments => "SyntaxError",
            ErrorImpl::AmbiguousVariantShape { .. } => "AmbiguousVariantShape",
            ErrorImpl::RecursionLimitExceeded => "RecursionLimitExceeded",
        }
    }

    /// Only `RecursionLimitExceeded` aborts parsing of the current unit;
    /// everything else is recorded and recovered from.
    pub fn is_fatal(&self) -> bool {
        matches!(self.internal_error, ErrorImpl::RecursionLimitExceeded)
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must close with `\"` before the end of the line",
            )),
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`", token))
            }
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::MixedCallArguments => ErrorTip::Suggestion(String::from(
                "Call arguments must be all positional or all named",
            )),
            ErrorImpl::AmbiguousVariantShape { variant } => ErrorTip::Suggestion(format!(
                "Variant `{}` mixes `name: Type` members with bare types",
                variant
            )),
            ErrorImpl::RecursionLimitExceeded => {
                ErrorTip::Suggestion(String::from("Input is nested too deeply to parse"))
            }
        }
    }

    pub fn into_diagnostic(self) -> Diagnostic {
        Diagnostic {
            severity: Severity::Error,
            message: format!("{}: {}", self.get_class(), self.internal_error),
            span: self.span,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(ThisError, Debug, Clone)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("call mixes positional and named arguments")]
    MixedCallArguments,
    #[error("cannot resolve shape of variant {variant:?}")]
    AmbiguousVariantShape { variant: String },
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,
}

/// User-facing report produced by a parse. An ordered list of these comes
/// back with every `Module`.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    pub span: Span,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}
