pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error reading file: {0}")]
    IOFailed(std::io::Error),
    #[error("error reading json: {0}")]
    SerdeFailed(serde_json::Error),
    #[error("error when creating regex: {0}")]
    RegexFailed(regex::Error),
    #[error("json data should be a list of cards")]
    NotAList,
    #[error("invalid entry at index {index}: {source}")]
    InvalidEntry {
        index: usize,
        source: serde_json::Error,
    },
    #[error("invalid config file: {0}")]
    ConfigFailed(serde_json::Error),
    #[error("gui failed: {0}")]
    GuiFailed(iced::Error),
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::IOFailed(error)
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::SerdeFailed(error)
    }
}

impl From<regex::Error> for Error {
    fn from(error: regex::Error) -> Self {
        Self::RegexFailed(error)
    }
}

impl From<iced::Error> for Error {
    fn from(error: iced::Error) -> Self {
        Self::GuiFailed(error)
    }
}
