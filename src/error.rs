use crate::hazard::Hazard;
use crate::{buffer, divide};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("declared length {len} exceeds region of {available} bytes")]
    BufferOverread { len: usize, available: usize },

    #[error("division by zero")]
    DivisionByZero,

    #[error("Config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn overread(len: usize, available: usize) -> Self {
        Self::BufferOverread { len, available }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Weakness class this error stands in for, if any.
    pub fn hazard(&self) -> Option<Hazard> {
        match self {
            Self::BufferOverread { .. } => Some(buffer::HAZARD),
            Self::DivisionByZero => Some(divide::HAZARD),
            Self::Config(_) | Self::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
