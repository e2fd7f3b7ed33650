//! Configuration constants and validation functions.

use crate::error::{ModelError, Result};

/// OGC KML 2.2 namespace URI.
pub const KML_NAMESPACE: &str = "http://www.opengis.net/kml/2.2";

/// Google extension namespace URI (the `gx:` elements).
pub const GX_NAMESPACE: &str = "http://www.google.com/kml/ext/2.2";

/// Delimiter placed between coordinate tuples when none is configured.
pub const DEFAULT_DELIMITER: &str = "\n";

/// Options for a single write pass.
///
/// Every coordinate collection serialized during the pass uses the same
/// delimiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteOptions {
    /// Text placed between coordinate tuples.
    pub coordinate_delimiter: String,
}

impl WriteOptions {
    /// Create options with the given coordinate delimiter.
    ///
    /// Only whitespace delimiters can be read back: the coordinate parser
    /// splits tuples on whitespace, so text written with e.g. `;` between
    /// tuples parses to fewer points. Such delimiters are accepted with a
    /// warning.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the delimiter is empty.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Result<Self> {
        let delimiter = delimiter.into();
        validate_delimiter(&delimiter)?;
        if !round_trips(&delimiter) {
            tracing::warn!(
                delimiter = %delimiter.escape_debug(),
                "Coordinate delimiter is not whitespace; written coordinates will not parse back"
            );
        }
        Ok(Self {
            coordinate_delimiter: delimiter,
        })
    }
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            coordinate_delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

/// Validate a coordinate tuple delimiter.
///
/// An empty delimiter would fuse adjacent tuples into one token.
///
/// # Returns
/// * `Ok(())` if valid
/// * `Err(ModelError::InvalidArgument)` if empty
pub fn validate_delimiter(delimiter: &str) -> Result<()> {
    if delimiter.is_empty() {
        return Err(ModelError::InvalidArgument(
            "coordinate delimiter must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Check whether text written with `delimiter` parses back to the same tuples.
#[must_use]
pub fn round_trips(delimiter: &str) -> bool {
    !delimiter.is_empty() && delimiter.chars().all(char::is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_write_options() {
        let options = WriteOptions::default();
        assert_eq!(options.coordinate_delimiter, "\n");
    }

    #[test]
    fn test_with_delimiter() {
        let options = WriteOptions::with_delimiter(" ").unwrap();
        assert_eq!(options.coordinate_delimiter, " ");
    }

    #[test]
    fn test_validate_delimiter_empty() {
        assert!(validate_delimiter("").is_err());
        assert!(WriteOptions::with_delimiter("").is_err());
    }

    #[test]
    fn test_non_whitespace_delimiter_accepted_but_lossy() {
        let options = WriteOptions::with_delimiter(";").unwrap();
        assert_eq!(options.coordinate_delimiter, ";");
        assert!(!round_trips(";"));
        assert!(!round_trips(" ; "));
        assert!(round_trips(" \r\n\t"));
        assert!(!round_trips(""));
    }

    #[test]
    fn test_validate_delimiter_valid() {
        assert!(validate_delimiter("\n").is_ok());
        assert!(validate_delimiter("\t").is_ok());
        assert!(validate_delimiter(" ; ").is_ok());
    }
}
