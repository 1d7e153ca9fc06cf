//! Ground fact types for solver answer sets.
//!
//! - [`Fact`]: one ground atom `name(arg1, ..., argN)` as printed by the
//!   solver, with arguments kept as raw text
//! - [`FactDiagnostic`]: non-fatal flags for malformed tokens
//!
//! # Example
//! ```rust
//! use parser::fact::Fact;
//!
//! let (fact, diagnostics) = Fact::parse("happens(move(a,b),3)");
//! assert!(diagnostics.is_empty());
//! assert_eq!(fact.name(), "happens");
//! assert_eq!(fact.arguments(), ["move(a,b)", "3"]);
//! assert_eq!(fact.signature(), "happens/2");
//! ```

use itertools::Itertools;
use std::fmt;

/// Fact name whose display form is rewritten for human consumption.
const OUTPUT_NAME: &str = "__output";

/// Non-fatal flag raised while scanning a single token.
///
/// Malformed tokens are recovered best-effort so one bad token never
/// aborts the surrounding answer set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactDiagnostic {
    /// A `(` was seen but the token has no closing `)`.
    MissingClosingParen,
    /// Parenthesis depth went negative or did not return to zero.
    UnbalancedParens,
}

impl fmt::Display for FactDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingClosingParen => write!(f, "missing closing paren"),
            Self::UnbalancedParens => write!(f, "unbalanced parens in argument list"),
        }
    }
}

/// One ground atom from solver output: `name(arg1, ..., argN)`.
///
/// Arguments are kept as raw text; a nested term such as `move(a,b)`
/// stays one argument. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fact {
    raw: String,
    name: String,
    arguments: Vec<String>,
}

impl Fact {
    /// Scan one whitespace-delimited token into a fact.
    ///
    /// The argument list is everything between the first `(` and the
    /// LAST `)` of the token. A missing closing paren is tolerated: the
    /// rest of the token becomes the argument list and a diagnostic is
    /// returned alongside the fact. Without any `(`, the whole token is
    /// the name and the argument list is empty.
    #[must_use]
    pub fn parse(token: &str) -> (Self, Vec<FactDiagnostic>) {
        let raw = token.trim().to_string();
        let mut diagnostics = Vec::new();

        let Some(open) = raw.find('(') else {
            let name = raw.clone();
            return (
                Self {
                    raw,
                    name,
                    arguments: Vec::new(),
                },
                diagnostics,
            );
        };

        let close = match raw.rfind(')') {
            Some(index) if index > open => index,
            _ => {
                diagnostics.push(FactDiagnostic::MissingClosingParen);
                raw.len()
            }
        };

        let name = raw[..open].to_string();
        let arguments = split_arguments(&raw[open + 1..close], &mut diagnostics);

        (
            Self {
                raw,
                name,
                arguments,
            },
            diagnostics,
        )
    }

    /// Verbatim trimmed input token.
    #[must_use]
    #[inline]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Predicate name.
    #[must_use]
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments (as a slice of raw text).
    #[must_use]
    #[inline]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Number of arguments.
    #[must_use]
    #[inline]
    pub fn arity(&self) -> usize {
        self.arguments.len()
    }

    /// `name/arity` label classifying facts of the same shape.
    #[must_use]
    pub fn signature(&self) -> String {
        format!("{}/{}", self.name, self.arguments.len())
    }
}

impl fmt::Display for Fact {
    /// Prints the raw token, except `__output` facts which render as
    /// `first_arg: remaining args` with embedded double quotes stripped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.name != OUTPUT_NAME || self.arguments.is_empty() {
            return write!(f, "{}", self.raw);
        }

        let tail = self.arguments[1..]
            .iter()
            .map(|arg| arg.replace('"', ""))
            .join(" ");
        write!(f, "{}: {}", self.arguments[0].replace('"', ""), tail)
    }
}

/// Split an argument list on commas at parenthesis depth 0.
///
/// Depth increases on `(` and decreases on `)`; commas inside nested
/// terms are kept. Imbalance is flagged, never fatal.
fn split_arguments(args: &str, diagnostics: &mut Vec<FactDiagnostic>) -> Vec<String> {
    let mut depth: i32 = 0;
    let mut went_negative = false;
    let mut current = String::new();
    let mut out = Vec::new();

    for ch in args.chars() {
        match ch {
            ',' if depth == 0 => {
                out.push(std::mem::take(&mut current));
                continue;
            }
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    went_negative = true;
                }
            }
            _ => {}
        }
        current.push(ch);
    }
    out.push(current);

    if went_negative || depth != 0 {
        diagnostics.push(FactDiagnostic::UnbalancedParens);
    }

    out
}
