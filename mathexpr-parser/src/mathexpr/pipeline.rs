//! Processing API
//!
//! Runs source text through the pipeline up to a given stage and formats the result.
//! A processing spec is written `<stage>-<format>`:
//!
//!     token-simple    one `Token(kind, "lexeme")` per line
//!     token-json      the token list as JSON
//!     ast-tree        the structural form (`x = +(1, 2)`)
//!     ast-json        the tree as JSON
//!     ast-treeviz     one line per node
//!     ast-render      the normalized call form
//!
//! ## Example Usage
//!
//! ```rust
//! use mathexpr_parser::mathexpr::pipeline::{process_source, ProcessingOptions, ProcessingSpec};
//!
//! let spec = ProcessingSpec::from_string("ast-render").unwrap();
//! let output = process_source("x = 1 + 2", &spec, &ProcessingOptions::default()).unwrap();
//! ```

use crate::mathexpr::error::Error;
use crate::mathexpr::formats::{to_treeviz_str, RenderOptions, Renderer, DEFAULT_LABEL_WIDTH};
use crate::mathexpr::lexing::tokenize;
use crate::mathexpr::parsing::parse;
use crate::mathexpr::token::Token;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Represents the processing stage (what data to extract)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Token,
    Ast,
}

/// Represents the output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Tree,
    Treeviz,
    Render,
}

/// Represents a complete processing specification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    /// Parse a format string like "token-simple" or "ast-render"
    pub fn from_string(format_str: &str) -> Result<Self, ProcessingError> {
        let (stage, format) = format_str
            .split_once('-')
            .ok_or_else(|| ProcessingError::InvalidFormat(format_str.to_string()))?;

        let stage = match stage {
            "token" => ProcessingStage::Token,
            "ast" => ProcessingStage::Ast,
            _ => return Err(ProcessingError::InvalidStage(stage.to_string())),
        };

        let format = match format {
            "simple" => OutputFormat::Simple,
            "json" => OutputFormat::Json,
            "tree" => OutputFormat::Tree,
            "treeviz" => OutputFormat::Treeviz,
            "render" => OutputFormat::Render,
            _ => return Err(ProcessingError::InvalidFormatType(format.to_string())),
        };

        // Validate stage/format compatibility
        match (stage, format) {
            (ProcessingStage::Token, OutputFormat::Simple | OutputFormat::Json) => {}
            (ProcessingStage::Ast, OutputFormat::Simple) => {
                return Err(ProcessingError::InvalidFormatType(
                    "Format 'simple' only works with token stage".to_string(),
                ))
            }
            (ProcessingStage::Ast, _) => {}
            (ProcessingStage::Token, _) => {
                return Err(ProcessingError::InvalidFormatType(format!(
                    "Format '{}' only works with ast stage",
                    format.name()
                )))
            }
        }

        Ok(ProcessingSpec { stage, format })
    }

    /// Get all available processing specifications
    pub fn available_specs() -> Vec<ProcessingSpec> {
        let token = |format| ProcessingSpec {
            stage: ProcessingStage::Token,
            format,
        };
        let ast = |format| ProcessingSpec {
            stage: ProcessingStage::Ast,
            format,
        };
        vec![
            token(OutputFormat::Simple),
            token(OutputFormat::Json),
            ast(OutputFormat::Tree),
            ast(OutputFormat::Json),
            ast(OutputFormat::Treeviz),
            ast(OutputFormat::Render),
        ]
    }

    pub fn name(&self) -> String {
        format!("{}-{}", self.stage.name(), self.format.name())
    }
}

impl ProcessingStage {
    pub fn name(&self) -> &'static str {
        match self {
            ProcessingStage::Token => "token",
            ProcessingStage::Ast => "ast",
        }
    }
}

impl OutputFormat {
    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Simple => "simple",
            OutputFormat::Json => "json",
            OutputFormat::Tree => "tree",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Render => "render",
        }
    }
}

/// Knobs for the formats that have any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    pub render: RenderOptions,
    pub treeviz_label_width: usize,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        ProcessingOptions {
            render: RenderOptions::default(),
            treeviz_label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

/// Errors that can occur during processing
#[derive(Debug, Error)]
pub enum ProcessingError {
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Invalid stage: {0}")]
    InvalidStage(String),

    #[error("Invalid format type: {0}")]
    InvalidFormatType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Syntax(#[from] Error),
}

/// Process source text according to the given specification
pub fn process_source(
    source: &str,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Token => {
            let tokens = tokenize(source).map_err(Error::from)?;
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Ast => {
            let root = parse(source)?;
            let output = match spec.format {
                OutputFormat::Tree => root.to_string(),
                OutputFormat::Json => serde_json::to_string_pretty(&root)?,
                OutputFormat::Treeviz => to_treeviz_str(&root, options.treeviz_label_width),
                OutputFormat::Render => Renderer::new(options.render.clone()).render(&root),
                OutputFormat::Simple => {
                    return Err(ProcessingError::InvalidFormatType(
                        "simple format only works with token stage".to_string(),
                    ))
                }
            };
            Ok(output)
        }
    }
}

/// Process a file according to the given specification
pub fn process_file<P: AsRef<Path>>(
    file_path: P,
    spec: &ProcessingSpec,
    options: &ProcessingOptions,
) -> Result<String, ProcessingError> {
    let content = fs::read_to_string(file_path.as_ref())?;
    process_source(&content, spec, options)
}

/// Format tokens according to the specified format
fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Simple => Ok(tokens
            .iter()
            .map(|token| format!("{}\n", token))
            .collect()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tokens)?),
        other => Err(ProcessingError::InvalidFormatType(format!(
            "{} format only works with ast stage",
            other.name()
        ))),
    }
}

/// Get all available format strings
pub fn available_formats() -> Vec<String> {
    ProcessingSpec::available_specs()
        .iter()
        .map(ProcessingSpec::name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str, format: &str) -> String {
        let spec = ProcessingSpec::from_string(format).unwrap();
        process_source(source, &spec, &ProcessingOptions::default()).unwrap()
    }

    #[test]
    fn test_spec_parsing() {
        assert_eq!(
            ProcessingSpec::from_string("ast-render").unwrap(),
            ProcessingSpec {
                stage: ProcessingStage::Ast,
                format: OutputFormat::Render,
            }
        );
        assert!(matches!(
            ProcessingSpec::from_string("render"),
            Err(ProcessingError::InvalidFormat(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("cst-tree"),
            Err(ProcessingError::InvalidStage(_))
        ));
        assert!(matches!(
            ProcessingSpec::from_string("ast-xml"),
            Err(ProcessingError::InvalidFormatType(_))
        ));
    }

    #[test]
    fn test_incompatible_stage_and_format() {
        assert!(ProcessingSpec::from_string("token-render").is_err());
        assert!(ProcessingSpec::from_string("token-treeviz").is_err());
        assert!(ProcessingSpec::from_string("ast-simple").is_err());
    }

    #[test]
    fn test_available_formats_round_trip() {
        let formats = available_formats();
        assert_eq!(
            formats,
            vec![
                "token-simple",
                "token-json",
                "ast-tree",
                "ast-json",
                "ast-treeviz",
                "ast-render"
            ]
        );
        for format in formats {
            assert_eq!(ProcessingSpec::from_string(&format).unwrap().name(), format);
        }
    }

    #[test]
    fn test_token_simple() {
        assert_eq!(
            run("x <= 1", "token-simple"),
            "Token(identifier, \"x\")\nToken(less_equal, \"<=\")\nToken(number, \"1\")\nToken(eof, \"\")\n"
        );
    }

    #[test]
    fn test_token_json() {
        let json: serde_json::Value = serde_json::from_str(&run("x", "token-json")).unwrap();
        assert_eq!(json[0]["kind"], "identifier");
        assert_eq!(json[0]["lexeme"], "x");
        assert_eq!(json[1]["kind"], "end_of_input");
    }

    #[test]
    fn test_ast_formats() {
        assert_eq!(run("x = 1 + 2", "ast-tree"), "x = +(1, 2)");
        assert_eq!(
            run("x = 1 + 2", "ast-render"),
            r#"Func("=")(atom("x"), Func("+").eval(atom("1"), atom("2")))"#
        );
        let json: serde_json::Value = serde_json::from_str(&run("x = 1", "ast-json")).unwrap();
        assert_eq!(json["type"], "relation");
    }

    #[test]
    fn test_syntax_errors_are_wrapped() {
        let spec = ProcessingSpec::from_string("ast-tree").unwrap();
        let err = process_source("x = (1", &spec, &ProcessingOptions::default()).unwrap_err();
        assert!(matches!(err, ProcessingError::Syntax(Error::Parse(_))));

        let spec = ProcessingSpec::from_string("token-simple").unwrap();
        let err = process_source("x = $", &spec, &ProcessingOptions::default()).unwrap_err();
        assert!(matches!(err, ProcessingError::Syntax(Error::Lex(_))));
    }

    #[test]
    fn test_missing_file() {
        let spec = ProcessingSpec::from_string("ast-tree").unwrap();
        let err = process_file(
            "/definitely/not/here.math",
            &spec,
            &ProcessingOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ProcessingError::Io(_)));
    }
}
