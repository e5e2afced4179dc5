use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum GeneratorError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("cannot create resource name from record {name}: not punycode-encodable")]
    InvalidName { name: String },

    #[error("render error: {0}")]
    Render(String),
}

impl From<std::io::Error> for GeneratorError {
    fn from(err: std::io::Error) -> Self {
        GeneratorError::Io(err.to_string())
    }
}

impl From<std::fmt::Error> for GeneratorError {
    fn from(err: std::fmt::Error) -> Self {
        GeneratorError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
