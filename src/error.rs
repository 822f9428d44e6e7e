use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Record for \"{person}\" is missing required field: {field}")]
    MissingField { person: String, field: String },

    #[error("Cannot annotate an empty group")]
    EmptyGroup,
}
