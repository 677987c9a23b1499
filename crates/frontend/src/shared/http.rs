//! JSON GET helper shared by list pages and chart loaders.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Generic message shown in place of a table or chart when loading fails.
pub const LOAD_ERROR_TEXT: &str = "Có lỗi xảy ra khi tải dữ liệu";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Every failure kind collapses to the same localized message.
    pub fn user_message(&self) -> &'static str {
        LOAD_ERROR_TEXT
    }
}

pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_failures_share_one_user_message() {
        let errors = [
            FetchError::Transport("offline".into()),
            FetchError::Status(500),
            FetchError::Decode("expected value".into()),
        ];
        for e in errors {
            assert_eq!(e.user_message(), LOAD_ERROR_TEXT);
        }
    }

    #[test]
    fn display_keeps_technical_detail_for_logs() {
        assert_eq!(
            FetchError::Status(404).to_string(),
            "server responded with status 404"
        );
    }
}
