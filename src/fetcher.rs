use crate::config::REGION_CODE;

use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};
use serde_json::Value;

use std::fmt;

#[derive(Debug)]
pub enum FetchError {
    BadStatus { status: StatusCode },
    Request { err: reqwest::Error },
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Request { err }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::BadStatus { status } => write!(f, "server returned status {status}"),
            FetchError::Request { err } => write!(f, "request failed: {err}"),
        }
    }
}

pub fn build_client() -> Client {
    ClientBuilder::new()
        .gzip(true)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Unable to construct HTTP client")
}

/// Fetch and decode the forecast document, distinguishing why it failed
pub fn try_fetch(client: &Client, url: &str) -> Result<Value, FetchError> {
    let res = client.get(url).send()?;
    match res.status() {
        StatusCode::OK => Ok(res.json()?),
        status => Err(FetchError::BadStatus { status }),
    }
}

/// Fetch the forecast document for the configured region.
///
/// Every failure is logged and collapsed into `None`; callers show the same
/// fallback whatever went wrong.
pub fn fetch_weather_data(client: &Client, url: &str) -> Option<Value> {
    info!("Fetching forecast for region {REGION_CODE}: {url}");
    match try_fetch(client, url) {
        Ok(data) => {
            info!("Fetched forecast from {url}");
            Some(data)
        }
        Err(err @ FetchError::BadStatus { .. }) => {
            error!("Unable to fetch forecast from {url}: {err}");
            None
        }
        Err(err @ FetchError::Request { .. }) => {
            error!("Error while fetching forecast from {url}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// Serve one canned HTTP response on a local port and return its URL
    fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
            }
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/forecast.json")
    }

    fn test_client() -> Client {
        ClientBuilder::new().no_proxy().build().unwrap()
    }

    fn closed_port_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/forecast.json")
    }

    #[test]
    fn test_ok_response_is_parsed() {
        let url = serve_once("200 OK", r#"[{"publishingOffice":"稚内地方気象台"}]"#);

        let data = fetch_weather_data(&test_client(), &url).unwrap();

        assert_eq!(data[0]["publishingOffice"], "稚内地方気象台");
    }

    #[test]
    fn test_bad_status_is_none() {
        let url = serve_once("404 Not Found", "");
        let client = test_client();

        assert!(matches!(
            try_fetch(&client, &url),
            Err(FetchError::BadStatus { status }) if status == StatusCode::NOT_FOUND
        ));
        let url = serve_once("503 Service Unavailable", "");
        assert!(fetch_weather_data(&client, &url).is_none());
    }

    #[test]
    fn test_connection_error_is_none() {
        let url = closed_port_url();
        let client = test_client();

        assert!(matches!(
            try_fetch(&client, &url),
            Err(FetchError::Request { .. })
        ));
        assert!(fetch_weather_data(&client, &url).is_none());
    }

    #[test]
    fn test_malformed_body_is_none() {
        let url = serve_once("200 OK", "not json at all");

        assert!(fetch_weather_data(&test_client(), &url).is_none());
    }
}
