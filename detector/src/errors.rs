use thiserror::Error;

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("detector error: {0}")]
    Detector(#[from] cudaobjdetect::Error),

    #[error("opencv error: {0}")]
    OpenCv(#[from] opencv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image could not be decoded: {0}")]
    EmptyImage(String),

    #[error("invalid argument {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    #[error("detector engine lock poisoned")]
    EnginePoisoned,
}

pub type Result<T, E = DetectError> = std::result::Result<T, E>;
