//! Main module for mathexpr library functionality

pub mod ast;
#[cfg(feature = "diag")]
pub mod diag;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod parsing;
pub mod pipeline;
pub mod testing;
pub mod token;

/// Parse `source` and render it in normalized call form with the default options.
///
/// Empty input renders as the empty string.
pub fn interpret(source: &str) -> error::Result<String> {
    let root = parsing::parse(source)?;
    Ok(formats::render(&root))
}
