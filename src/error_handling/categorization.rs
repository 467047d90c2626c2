//! Error categorization.

use super::types::ErrorType;

/// Categorizes a `reqwest::Error` into an `ErrorType`.
///
/// Checked in order of specificity: a timed-out connect reports as a timeout.
///
/// # Arguments
///
/// * `error` - The `reqwest::Error` to categorize
///
/// # Returns
///
/// The appropriate `ErrorType` for the error.
pub fn categorize_reqwest_error(error: &reqwest::Error) -> ErrorType {
    if error.is_builder() {
        ErrorType::HttpRequestBuilderError
    } else if error.is_redirect() {
        ErrorType::HttpRequestRedirectError
    } else if error.is_timeout() {
        ErrorType::HttpRequestTimeoutError
    } else if error.is_connect() {
        ErrorType::HttpRequestConnectError
    } else if error.is_body() {
        ErrorType::HttpRequestBodyError
    } else if error.is_decode() {
        ErrorType::HttpRequestDecodeError
    } else if error.is_request() {
        ErrorType::HttpRequestRequestError
    } else {
        ErrorType::HttpRequestOtherError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_categorize_builder_error() {
        // A URL without a scheme fails while building the request
        let client = reqwest::Client::new();
        let error = client
            .get("not a url")
            .send()
            .await
            .expect_err("request with invalid URL should fail");
        assert_eq!(
            categorize_reqwest_error(&error),
            ErrorType::HttpRequestBuilderError
        );
    }

    #[tokio::test]
    async fn test_categorize_connect_error() {
        // Bind then drop to get a local port with nothing listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = reqwest::Client::new();
        let error = client
            .get(format!("http://{}/", addr))
            .send()
            .await
            .expect_err("request to closed port should fail");
        assert_eq!(
            categorize_reqwest_error(&error),
            ErrorType::HttpRequestConnectError
        );
    }
}
