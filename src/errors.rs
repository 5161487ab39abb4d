use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitError {
    MissingElement { id: &'static str },
}

impl fmt::Display for InitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InitError::MissingElement { id } => {
                write!(f, "required page element '{id}' is missing")
            }
        }
    }
}

impl std::error::Error for InitError {}

#[derive(Debug)]
pub struct StoreError {
    pub message: String,
}

impl StoreError {
    pub fn new(err: impl std::error::Error) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for StoreError {}
