use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    #[error("Invalid input for {0}: {1}")]
    InvalidInput(String, String),

    #[error("A selection must contain between {min} and {max} instruments, got {actual}.")]
    InvalidSelection { min: usize, max: usize, actual: usize },
}
