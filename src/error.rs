//! Crate-level error types.

use std::fmt;

/// Errors produced by the lidarview crate.
///
/// The first three variants are synchronous contract violations raised by
/// the decoder and the camera; none of them is retryable. The rest come from
/// the options and ingest plumbing.
#[derive(Debug)]
pub enum LidarError {
    /// Malformed raw polar scan (no azimuth samples, or a sample count
    /// outside the record buffer).
    InvalidFrame(String),
    /// Out-of-domain numeric argument (non-positive zoom ratio or aspect
    /// ratio, bad decoder constants, ...).
    InvalidParameter(String),
    /// Eye coincides with the reference point, or the view vector is
    /// parallel to `up`, so the view basis is undefined.
    DegenerateView,
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Failed to spawn the background decode thread.
    ThreadSpawn(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for LidarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFrame(msg) => write!(f, "invalid frame: {msg}"),
            Self::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
            Self::DegenerateView => {
                write!(f, "degenerate view: eye and reference define no view axis")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ThreadSpawn(e) => {
                write!(f, "failed to spawn thread: {e}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for LidarError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) | Self::ThreadSpawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LidarError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_names_the_failure() {
        let err = LidarError::InvalidParameter("zoom ratio must be > 0".into());
        assert_eq!(err.to_string(), "invalid parameter: zoom ratio must be > 0");
        assert!(LidarError::DegenerateView
            .to_string()
            .starts_with("degenerate view"));
    }

    #[test]
    fn io_errors_keep_their_source() {
        let err: LidarError =
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, LidarError::Io(_)));
        assert!(err.source().is_some());
        assert!(LidarError::DegenerateView.source().is_none());
    }
}
