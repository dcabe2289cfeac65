use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, ParseError>;

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed IndoorGML document: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IndoorGML document is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("failed to read IndoorGML document {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
