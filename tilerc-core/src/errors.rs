use thiserror::Error;

pub type Result<T> = std::result::Result<T, TileError>;

#[derive(Debug, Error)]
pub enum TileError {
    #[error("Invalid colour `{0}`, expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
    #[error("Invalid colour reference `{0}`, expected `palette.key` or a literal colour")]
    InvalidColorRef(String),
    #[error("Unknown palette `{0}`")]
    UnknownPalette(String),
    #[error("Palette `{palette}` has no colour named `{key}`")]
    UnknownColor { palette: String, key: String },
    #[error("Invalid margins: {0}")]
    InvalidMargins(&'static str),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
