use std::ffi::NulError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Exception raised inside OpenCV, carrying its error code and message.
    #[error("opencv error {code}: {message}")]
    Native { code: i32, message: String },

    #[error("opencv host error: {0}")]
    OpenCv(#[from] opencv::Error),

    #[error("native call returned a null handle")]
    NullHandle,

    #[error("invalid path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("cascade model not found: {0:?}")]
    ModelNotFound(PathBuf),

    #[error("string contains an interior nul byte: {0}")]
    Nul(#[from] NulError),

    #[error("detection returned {rects} rectangles but {confidences} confidences")]
    LengthMismatch { rects: usize, confidences: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn native_error_message() {
        let err = Error::Native {
            code: -215,
            message: "Assertion failed".to_string(),
        };
        assert_eq!(err.to_string(), "opencv error -215: Assertion failed");
    }

    #[test]
    fn nul_error_converts() {
        let err: Error = CString::new("a\0b").unwrap_err().into();
        assert!(matches!(err, Error::Nul(_)));
    }
}
