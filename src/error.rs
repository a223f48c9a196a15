use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse ignore patterns. Original error: {0}")]
    GlobSetParseError(#[from] globset::Error),

    #[error("Failed to compile detection pattern. Original error: {0}")]
    RegexParseError(#[from] regex::Error),

    /// An override supplied a string outside an enum's closed vocabulary.
    #[error("Invalid value '{value}' for field '{field}'.")]
    InvalidConfigValue { field: &'static str, value: String },

    /// The override file exists but is unreadable or not a JSON object.
    #[error("Malformed override file '{path}': {detail}.")]
    MalformedOverride { path: String, detail: String },

    /// A required template directory or file is absent from the skill root.
    #[error("Cannot proceed: template source '{path}' does not exist.")]
    MissingTemplateSource { path: String },

    #[error("Cannot resolve the skill root: {0}.")]
    SkillRootError(String),
}

/// Convenience type alias for Results with pivloop's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}
