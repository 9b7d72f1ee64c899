//! Error types for template rendering

use thiserror::Error;

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur while compiling or rendering a template
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Invalid template syntax
    #[error("invalid template syntax in '{name}': {message}")]
    SyntaxError { name: String, message: String },

    /// Undefined variable or filter in template
    #[error("undefined value in '{name}': {message}")]
    UndefinedValue { name: String, message: String },

    /// A filter rejected its input or parameter
    #[error("invalid operation in '{name}': {message}")]
    InvalidOperation { name: String, message: String },

    /// Failed to render template
    #[error("failed to render template '{name}': {message}")]
    RenderError { name: String, message: String },
}

impl TemplateError {
    /// Name of the template the error was raised for
    pub fn template_name(&self) -> &str {
        match self {
            TemplateError::SyntaxError { name, .. }
            | TemplateError::UndefinedValue { name, .. }
            | TemplateError::InvalidOperation { name, .. }
            | TemplateError::RenderError { name, .. } => name,
        }
    }

    pub(crate) fn from_minijinja(name: &str, err: minijinja::Error) -> Self {
        let name = name.to_string();
        let message = describe(&err);
        match err.kind() {
            minijinja::ErrorKind::SyntaxError => TemplateError::SyntaxError { name, message },
            minijinja::ErrorKind::UndefinedError | minijinja::ErrorKind::UnknownFilter => {
                TemplateError::UndefinedValue { name, message }
            }
            minijinja::ErrorKind::InvalidOperation => {
                TemplateError::InvalidOperation { name, message }
            }
            _ => TemplateError::RenderError { name, message },
        }
    }
}

/// Flatten a minijinja error and its source chain into one line
fn describe(err: &minijinja::Error) -> String {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(err);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = std::error::Error::source(cause);
    }
    message
}
