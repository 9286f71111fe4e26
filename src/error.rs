use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("runtime error: {0}")]
    Runtime(String),
}

pub type Result<T> = std::result::Result<T, ApiError>;

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_syntax() || err.is_eof() {
            ApiError::Parse(err.to_string())
        } else {
            ApiError::Serialization(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_display_and_json_mapping() {
        let err = ApiError::Config("x".to_string());
        assert!(format!("{err}").contains("configuration error"));

        let syntax = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        assert!(matches!(ApiError::from(syntax), ApiError::Parse(_)));

        let truncated = serde_json::from_str::<serde_json::Value>("{\"a\":").unwrap_err();
        assert!(matches!(ApiError::from(truncated), ApiError::Parse(_)));

        let shape = serde_json::from_str::<u8>("\"text\"").unwrap_err();
        assert!(matches!(ApiError::from(shape), ApiError::Serialization(_)));
    }
}
