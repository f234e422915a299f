use thiserror::Error;

/// A raw string that cannot be segmented into a valid namespace/name pair
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedTitleError {
    /// Nothing left after whitespace normalization
    #[error("Title is empty")]
    Empty,
    /// A namespace prefix with nothing after it (e.g. `Category:`)
    #[error("Title '{title}' has an empty name after its namespace prefix")]
    EmptyName { title: String },
    /// A name still starting with `:` after the optional leading colon
    #[error("Title '{title}' starts with a colon")]
    LeadingColon { title: String },
    /// A character that may never appear in a title
    #[error("Title '{title}' contains the illegal character {character:?}")]
    IllegalCharacter { title: String, character: char },
    /// `.` / `..` path segments
    #[error("Title '{title}' contains a relative path segment")]
    RelativePath { title: String },
    #[error("Title is {length} bytes long, the limit is {limit}")]
    TooLong { length: usize, limit: usize },
}
