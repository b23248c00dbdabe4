use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("malformed header, expected two digit tag and length at: {input}")]
    MalformedHeader { input: String },

    #[error("truncated payload, tag {tag} declares {declared} chars but only {available} remain: {input}")]
    TruncatedPayload {
        tag: String,
        declared: usize,
        available: usize,
        input: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
