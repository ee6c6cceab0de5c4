use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CourseError {
    #[error("invalid data format")]
    InvalidData,
    #[error("{0}")]
    InvalidQuery(String),
    #[error("not found")]
    NotFound,
    #[error("no course ids left to assign")]
    IdsExhausted,
}
