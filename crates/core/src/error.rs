use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Missing configuration: {0}")]
    MissingConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, CoreError>;
