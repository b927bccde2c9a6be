//! Source-annotated diagnostics through miette
//!
//! Enabled with the `diag` feature. Wrap an error and the source it came from in a
//! [Diagnostic] and hand it to a `miette::Report` to get a labeled snippet.

use crate::mathexpr::error::Error;
use crate::mathexpr::lexing::LexError;
use crate::mathexpr::parsing::{Expected, ParseError};
use miette::NamedSource;
use std::fmt;
use std::ops::Range;

pub trait DiagTrait: fmt::Debug + fmt::Display {
    fn span(&self) -> Range<usize>;
    fn message(&self) -> String;
    fn help(&self) -> Option<String> {
        None
    }
}

impl DiagTrait for LexError {
    fn span(&self) -> Range<usize> {
        LexError::span(self)
    }

    fn message(&self) -> String {
        format!("invalid character {:?}", self.character)
    }

    fn help(&self) -> Option<String> {
        Some(
            "expressions use identifiers, numbers, `# comments` and the operators \
             ** <= >= != + - * / = < > ( ) [ ] { } ,"
                .to_string(),
        )
    }
}

impl DiagTrait for ParseError {
    fn span(&self) -> Range<usize> {
        ParseError::span(self)
    }

    fn message(&self) -> String {
        match self.expected {
            Expected::NestingDepth(max) => format!("nested deeper than {} levels", max),
            _ => format!("expected {}, found {}", self.expected, self.token.kind()),
        }
    }

    fn help(&self) -> Option<String> {
        match self.expected {
            Expected::Delimiter(op) => Some(format!("the {} is not closed with '{}'", self.rule, op)),
            Expected::RelationalOperator => {
                Some("every statement compares two expressions, e.g. `y = x + 1`".to_string())
            }
            Expected::Operand => None,
            Expected::NestingDepth(_) => {
                Some("bind inner parts to names in separate statements".to_string())
            }
        }
    }
}

impl DiagTrait for Error {
    fn span(&self) -> Range<usize> {
        Error::span(self)
    }

    fn message(&self) -> String {
        match self {
            Error::Lex(err) => err.message(),
            Error::Parse(err) => err.message(),
        }
    }

    fn help(&self) -> Option<String> {
        match self {
            Error::Lex(err) => err.help(),
            Error::Parse(err) => err.help(),
        }
    }
}

/// An error paired with the named source text it points into.
#[derive(Debug)]
pub struct Diagnostic {
    diag: Box<dyn DiagTrait + Send + Sync>,
    source: NamedSource<String>,
}

impl Diagnostic {
    pub fn new(diag: Box<dyn DiagTrait + Send + Sync>, name: &str, src: &str) -> Self {
        let source = NamedSource::new(name, src.to_string()).with_language("mathexpr");
        Self { diag, source }
    }

    /// Wrap a pipeline error together with the text it was produced from.
    pub fn from_error(error: Error, name: Option<String>, src: &str) -> Self {
        let name = name.as_deref().unwrap_or("<input>");
        Self::new(Box::new(error), name, src)
    }

    pub fn span(&self) -> Range<usize> {
        self.diag.span()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.diag.message())
    }
}

impl std::error::Error for Diagnostic {}

impl miette::Diagnostic for Diagnostic {
    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = self.diag.help()?;
        Some(Box::new(help))
    }

    fn labels<'a>(&'a self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + 'a>> {
        let span = self.diag.span();
        let label = miette::LabeledSpan::at(span, self.diag.message());
        Some(Box::new(std::iter::once(label)))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.source)
    }
}
