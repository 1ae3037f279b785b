use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for manifest and metadata parsing (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Source context for error reporting.
///
/// Carries the source content and filename so error factories can attach
/// a labelled span without threading both through every call.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    /// Create a new source context.
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        &self.src
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Create a parse error from a toml error.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a parse error from a JSON error, converting its line and column to a span.
    pub fn json_error(&self, source: serde_json::Error) -> Box<Error> {
        let span = line_column_offset(&self.src, source.line(), source.column())
            .map(|offset| SourceSpan::from((offset, 1)));
        Box::new(Error::Json {
            src: self.named_source(),
            span,
            source,
        })
    }

    /// Create a validation error, labelling the first occurrence of `key` when found.
    pub fn validation_error(&self, message: impl Into<String>, key: Option<&str>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: key.and_then(|key| find_key_span(&self.src, key)),
            message: message.into(),
        })
    }

    /// Create an invalid package error for the `package_suffix` setting.
    pub fn invalid_package_error(
        &self,
        package: impl Into<String>,
        reason: impl Into<String>,
    ) -> Box<Error> {
        Box::new(Error::InvalidPackage {
            src: self.named_source(),
            span: find_key_span(&self.src, "package_suffix"),
            package: package.into(),
            reason: reason.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(wrapgen::io),
        help("run 'wrapgen init' to create a wrapgen.toml")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML")]
    #[diagnostic(code(wrapgen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to parse metadata JSON")]
    #[diagnostic(code(wrapgen::metadata_parse_error))]
    Json {
        #[source_code]
        src: NamedSource<String>,
        #[label("{source}")]
        span: Option<SourceSpan>,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported metadata file '{path}'")]
    #[diagnostic(
        code(wrapgen::metadata_format),
        help("metadata files must end in .json or .toml")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("{message}")]
    #[diagnostic(code(wrapgen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("invalid package suffix '{package}'")]
    #[diagnostic(
        code(wrapgen::invalid_package),
        help(
            "{reason}. Use dot-separated segments of letters, digits, and underscores, e.g. 'wrappers' or 'scala.wrappers'."
        )
    )]
    InvalidPackage {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid package")]
        span: Option<SourceSpan>,
        package: String,
        reason: String,
    },
}

impl Error {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }
}

/// Find the span of a `key = ...` entry in TOML source.
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        let indent = line.len() - trimmed.len();
        let quoted = format!("\"{}\"", key);
        let matched = [key, quoted.as_str()].into_iter().find(|candidate| {
            trimmed
                .strip_prefix(candidate)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        });
        if let Some(candidate) = matched {
            return Some(SourceSpan::from((offset + indent, candidate.len())));
        }
        offset += line.len();
    }
    None
}

/// Byte offset of a 1-based line and column, as reported by serde_json.
fn line_column_offset(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = line_start + column.saturating_sub(1);
    (offset < src.len()).then_some(offset)
}
