//! Error type shared by the series transforms, loader and query builder

#[derive(Debug)]
pub enum SeriesError {
    /// Bucket key with calendar fields that do not name a real UTC minute
    InvalidRecord { index: usize, reason: String },
    /// Epoch-millisecond value outside chrono's representable range
    InvalidTimestamp(i64),
    Io(std::io::Error),
    Serialization(serde_json::Error),
    InvalidUrl(url::ParseError),
}

impl From<std::io::Error> for SeriesError {
    fn from(err: std::io::Error) -> Self {
        SeriesError::Io(err)
    }
}

impl From<serde_json::Error> for SeriesError {
    fn from(err: serde_json::Error) -> Self {
        SeriesError::Serialization(err)
    }
}

impl From<url::ParseError> for SeriesError {
    fn from(err: url::ParseError) -> Self {
        SeriesError::InvalidUrl(err)
    }
}

impl std::fmt::Display for SeriesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeriesError::InvalidRecord { index, reason } => {
                write!(f, "Invalid record at index {}: {}", index, reason)
            }
            SeriesError::InvalidTimestamp(ms) => write!(f, "Invalid timestamp: {}ms", ms),
            SeriesError::Io(e) => write!(f, "IO error: {}", e),
            SeriesError::Serialization(e) => write!(f, "Serialization error: {}", e),
            SeriesError::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
        }
    }
}

impl std::error::Error for SeriesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SeriesError::Io(e) => Some(e),
            SeriesError::Serialization(e) => Some(e),
            SeriesError::InvalidUrl(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_record_display() {
        let err = SeriesError::InvalidRecord {
            index: 3,
            reason: "month 13 out of range".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid record at index 3: month 13 out of range");
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err();
        let err: SeriesError = parse_err.into();
        assert!(matches!(err, SeriesError::Serialization(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
