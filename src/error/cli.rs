use thiserror::Error;

/// Command-line parsing errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CliError {
    /// A flag that takes a value was last on the line
    #[error("{0} requires a value")]
    MissingValue(String),

    /// Flag not recognised
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    /// `--item` value had an empty codename
    #[error("--item requires a non-empty codename (CODENAME[=NAME])")]
    EmptyCodename,

    /// No `--item` given
    #[error("At least one --item is required")]
    NoItems,
}
