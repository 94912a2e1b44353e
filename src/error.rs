// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Every failure the editor can surface.
///
/// All variants are recoverable: a command that fails leaves the session
/// exactly as it was before the command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input file could not be read or is not a supported raster image.
    DecodeFailure(String),

    /// The crop selection is empty or falls outside the image.
    InvalidRegion,

    /// An editing command was issued before any image was loaded.
    NoImageLoaded,

    /// An image is loaded but no region has been cropped yet.
    NothingCropped,

    /// History holds no snapshot to step back to.
    NothingToUndo,

    /// No undone snapshot is waiting to be re-applied.
    NothingToRedo,

    /// Writing the working image failed.
    EncodeFailure(String),

    Io(String),
    Config(String),

    /// Command-line arguments could not be parsed.
    Usage(String),
}

impl Error {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::DecodeFailure(_) => "error-load-image-decode",
            Error::InvalidRegion => "warning-crop-invalid-region",
            Error::NoImageLoaded => "warning-no-image-loaded",
            Error::NothingCropped => "warning-nothing-cropped",
            Error::NothingToUndo => "info-nothing-to-undo",
            Error::NothingToRedo => "info-nothing-to-redo",
            Error::EncodeFailure(_) => "error-save-image-encode",
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Usage(_) => "error-usage",
        }
    }

    /// Whether the UI should present this as a warning rather than an error.
    ///
    /// Warnings come from commands that were not applicable in the current
    /// state; errors come from failed file or configuration access.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Error::InvalidRegion
                | Error::NoImageLoaded
                | Error::NothingCropped
                | Error::NothingToUndo
                | Error::NothingToRedo
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DecodeFailure(e) => write!(f, "Failed to load image: {}", e),
            Error::InvalidRegion => write!(f, "Invalid cropping area"),
            Error::NoImageLoaded => write!(f, "Please load an image first"),
            Error::NothingCropped => write!(f, "Please crop a region first"),
            Error::NothingToUndo => write!(f, "Nothing to undo"),
            Error::NothingToRedo => write!(f, "Nothing to redo"),
            Error::EncodeFailure(e) => write!(f, "Failed to save image: {}", e),
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Usage(e) => write!(f, "Usage Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<pico_args::Error> for Error {
    fn from(err: pico_args::Error) -> Self {
        Error::Usage(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn decode_failure_carries_reason() {
        let err = Error::DecodeFailure("unsupported format".into());
        assert!(format!("{}", err).contains("unsupported format"));
        assert!(!err.is_warning());
    }

    #[test]
    fn state_errors_are_warnings() {
        assert!(Error::InvalidRegion.is_warning());
        assert!(Error::NoImageLoaded.is_warning());
        assert!(Error::NothingCropped.is_warning());
        assert!(Error::NothingToUndo.is_warning());
        assert!(Error::NothingToRedo.is_warning());
        assert!(!Error::EncodeFailure("disk full".into()).is_warning());
    }

    #[test]
    fn i18n_keys() {
        assert_eq!(Error::InvalidRegion.i18n_key(), "warning-crop-invalid-region");
        assert_eq!(Error::NothingToUndo.i18n_key(), "info-nothing-to-undo");
        assert_eq!(
            Error::DecodeFailure(String::new()).i18n_key(),
            "error-load-image-decode"
        );
    }

    #[test]
    fn pico_args_error_becomes_usage() {
        let err: Error = pico_args::Error::MissingArgument.into();
        assert!(matches!(err, Error::Usage(_)));
    }
}
