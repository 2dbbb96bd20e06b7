use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrinterError {
    #[error("glyph table format error: {0}")]
    Format(String),
    #[error("glyph resource error: {0}")]
    Resource(#[from] std::io::Error),
    #[error("terminal write failed")]
    Terminal,
}

pub type Result<T> = std::result::Result<T, PrinterError>;
