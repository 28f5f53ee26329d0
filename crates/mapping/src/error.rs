use std::result;

/// Errors raised while loading or resolving a mapping.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to parse mapping: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid codepoint key '{0}' (expected a positive decimal integer)")]
    InvalidCodepoint(String),

    #[error("codepoint {0} is listed more than once")]
    DuplicateCodepoint(u32),

    #[error("alias '{alias}' is mapped to both {first} and {second}")]
    DuplicateAlias { alias: String, first: u32, second: u32 },

    #[error("codepoint {0} has an empty alias list")]
    MalformedMapping(u32),

    #[error("codepoint {0} is not in the mapping")]
    UnknownCodepoint(u32),
}

pub type Result<T> = result::Result<T, Error>;
