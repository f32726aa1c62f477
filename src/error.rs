// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    /// An embedded asset could not be resolved by name.
    Asset(String),
    /// An asset resolved but could not be decoded into an image.
    Image(String),
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Asset(e) => write!(f, "Asset Error: {}", e),
            Error::Image(e) => write!(f, "Image Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
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

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_asset_error() {
        let err = Error::Asset("missing.png".to_string());
        assert_eq!(format!("{}", err), "Asset Error: missing.png");
    }

    #[test]
    fn from_io_error_produces_config_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Config(message) => assert!(message.contains("boom")),
            _ => panic!("expected Config variant"),
        }
    }

    #[test]
    fn image_error_formats_properly() {
        let err = Error::Image("bad header".into());
        assert_eq!(format!("{}", err), "Image Error: bad header");
    }
}
