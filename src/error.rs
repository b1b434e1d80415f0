use reqwest::StatusCode;
use std::path::PathBuf;

/// Failure while scraping a single product URL.
///
/// These abort the URL they occur on; the driver decides whether they also
/// abort the whole run.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    /// Sending the request or reading its body failed.
    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("response status {} for {url}", status_text(.status))]
    Status { url: String, status: StatusCode },
    #[error("failed to write image {}: {source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid selector {0}")]
    Selector(String),
}

impl ScrapeError {
    pub fn http(url: &str, source: reqwest::Error) -> Self {
        Self::Http {
            url: url.to_string(),
            source,
        }
    }
}

fn status_text(status: &StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_names_url() {
        let source = reqwest::blocking::get("not a url").unwrap_err();
        let err = ScrapeError::http("not a url", source);

        assert!(matches!(err, ScrapeError::Http { .. }));
        assert!(err.to_string().starts_with("request to not a url failed"));
    }

    #[test]
    fn status_error_names_url_and_code() {
        let err = ScrapeError::Status {
            url: "https://example.com/board".to_string(),
            status: StatusCode::NOT_FOUND,
        };

        assert_eq!(
            err.to_string(),
            "response status 404 Not Found for https://example.com/board"
        );
    }
}
