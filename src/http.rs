//! HTTP client for marketplace requests using wreq for TLS fingerprint emulation.

use crate::error::ScrapeError;
use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};
use std::time::Duration;
use tracing::{debug, warn};
use wreq::Client;
use wreq_util::Emulation;

/// Request headers sent with a page fetch.
pub type HeaderProfile = &'static [(&'static str, &'static str)];

/// Full desktop browser profile; kakaku.com rejects bare clients.
pub const BROWSER_HEADERS: HeaderProfile = &[
    (
        "User-Agent",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    ),
    ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    ("Accept-Language", "ja,en-US;q=0.7,en;q=0.3"),
    ("Upgrade-Insecure-Requests", "1"),
];

/// Profile used for suggestion lookups.
pub const SUGGEST_HEADERS: HeaderProfile =
    &[("User-Agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")];

/// Minimal profile used for the secondary marketplaces.
pub const BASIC_HEADERS: HeaderProfile = &[("User-Agent", "Mozilla/5.0")];

/// How many leading bytes are searched for a `<meta charset>` declaration.
const META_SNIFF_LEN: usize = 1024;

/// Page fetcher with browser impersonation and a fixed request timeout.
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Creates a client whose requests give up after `timeout`.
    pub fn new(timeout: Duration, proxy: Option<&str>) -> Result<Self, ScrapeError> {
        let mut builder = Client::builder()
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(timeout)
            .connect_timeout(timeout.min(Duration::from_secs(10)));

        if let Some(proxy_url) = proxy {
            debug!("Configuring proxy: {}", proxy_url);
            let proxy = wreq::Proxy::all(proxy_url)
                .map_err(|e| ScrapeError::Client(format!("invalid proxy {}: {}", proxy_url, e)))?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| ScrapeError::Client(e.to_string()))?;

        Ok(Self { client, timeout })
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetches `url` and returns the body decoded with its detected encoding.
    pub async fn get_html(&self, url: &str, headers: HeaderProfile) -> Result<String, ScrapeError> {
        debug!("GET {}", url);

        let mut request = self.client.get(url).emulation(Emulation::Chrome131);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            if status == 503 {
                warn!("Service unavailable (503); the site may be throttling requests");
            }
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response.bytes().await.map_err(|e| self.classify(e))?;
        let (text, encoding) = decode_body(&body, content_type.as_deref());
        debug!("Decoded {} bytes as {}", body.len(), encoding.name());

        Ok(text)
    }

    fn classify(&self, error: wreq::Error) -> ScrapeError {
        if error.is_timeout() {
            ScrapeError::Timeout(self.timeout)
        } else {
            ScrapeError::Request(error)
        }
    }
}

/// Decodes a response body, detecting its character encoding.
///
/// Detection order: byte-order mark, `Content-Type` charset, a `<meta>`
/// declaration near the top of the document, valid UTF-8, then Shift_JIS.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> (String, &'static Encoding) {
    let encoding = detect_encoding(bytes, content_type);
    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        debug!("Body contained sequences invalid in {}", encoding.name());
    }
    (text.into_owned(), encoding)
}

fn detect_encoding(bytes: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(charset_param).and_then(label_to_encoding) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(META_SNIFF_LEN)]).to_lowercase();
    if let Some(encoding) = meta_charset(&head).and_then(label_to_encoding) {
        return encoding;
    }

    if std::str::from_utf8(bytes).is_ok() {
        UTF_8
    } else {
        SHIFT_JIS
    }
}

fn label_to_encoding(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Extracts the `charset` parameter of a `Content-Type` value.
fn charset_param(content_type: &str) -> Option<&str> {
    content_type.split(';').skip(1).find_map(|param| {
        let (key, value) = param.split_once('=')?;
        key.trim().eq_ignore_ascii_case("charset").then(|| value.trim().trim_matches('"'))
    })
}

/// Finds `charset=...` in a lower-cased document head.
fn meta_charset(head: &str) -> Option<&str> {
    let start = head.find("<meta")?;
    let rest = &head[start..];
    let at = rest.find("charset=")? + "charset=".len();
    let value = rest[at..].trim_start_matches(['"', '\'']);
    let end = value.find(|c: char| matches!(c, '"' | '\'' | ';' | '>' | '/') || c.is_whitespace())?;
    Some(&value[..end]).filter(|v| !v.is_empty())
}
