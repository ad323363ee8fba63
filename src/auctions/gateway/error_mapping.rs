//! Error mapping helpers for the reqwest auction gateway.

use http::StatusCode;

use crate::error::ClientError;

/// Maps a reqwest failure that happened before a status was available.
pub(super) fn map_reqwest_error(operation: &str, error: &reqwest::Error) -> ClientError {
    if error.is_decode() {
        return ClientError::Decode {
            message: format!("{operation} failed: {error}"),
        };
    }

    if let Some(status) = error.status() {
        return map_http_error(operation, status, None);
    }

    ClientError::Network {
        message: format!("{operation} failed: {error}"),
    }
}

/// Maps a non-success HTTP status into an API error.
pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> ClientError {
    let message = maybe_message
        .or_else(|| status.canonical_reason().map(ToOwned::to_owned))
        .unwrap_or_else(|| "unknown error".to_owned());
    ClientError::Api {
        status: status.as_u16(),
        message: format!("{operation} failed: {message}"),
    }
}

/// Pulls a human-readable message out of a Spring-style error body.
pub(super) fn extract_error_message(body: &str) -> Option<String> {
    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return None;
    };
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(*key).and_then(serde_json::Value::as_str))
        .filter(|message| !message.is_empty())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::message(r#"{"message":"no such page"}"#, Some("no such page"))]
    #[case::error(r#"{"error":"Not Found","status":404}"#, Some("Not Found"))]
    #[case::empty_message(r#"{"message":""}"#, None)]
    #[case::not_json("Service Unavailable", None)]
    fn extracts_message_from_error_body(#[case] body: &str, #[case] expected: Option<&str>) {
        assert_eq!(extract_error_message(body).as_deref(), expected);
    }

    #[rstest]
    fn http_error_falls_back_to_canonical_reason() {
        let error = map_http_error("load auctions", StatusCode::BAD_GATEWAY, None);

        assert_eq!(
            error,
            ClientError::Api {
                status: 502,
                message: "load auctions failed: Bad Gateway".to_owned(),
            }
        );
    }
}
