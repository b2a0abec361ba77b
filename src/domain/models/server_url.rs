//! Decomposition of the public server URL into the three values the host
//! platform routes with: protocol, server name and URL prefix.

use serde::{Deserialize, Serialize};

/// Host-and-port suffix that is dropped from the server name.
const DEFAULT_HTTP_PORT_SUFFIX: &str = ":80";

/// Server URL split into its routing components.
///
/// `protocol` and `server_name` are `None` when the URL has no scheme or no
/// network location; `url_prefix` is always present and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerUrl {
    /// Lowercased scheme
    pub protocol: Option<String>,
    /// Host and port, without a `:80` suffix
    pub server_name: Option<String>,
    /// Path without leading slashes
    pub url_prefix: String,
}

impl ServerUrl {
    /// Split `url` into scheme, network location and path.
    ///
    /// Leading control characters and spaces are ignored, as are tabs and
    /// line breaks anywhere. Query, fragment and `;params` of the last path
    /// segment are discarded. A trailing `:80` on the network location is
    /// removed regardless of scheme; no other port is touched.
    pub fn parse(url: &str) -> Self {
        let cleaned: String = url
            .trim_start_matches(|c: char| c <= ' ')
            .chars()
            .filter(|c| !matches!(c, '\t' | '\r' | '\n'))
            .collect();
        let parts = split_url(&cleaned);

        let server_name = (!parts.netloc.is_empty()).then(|| {
            parts
                .netloc
                .strip_suffix(DEFAULT_HTTP_PORT_SUFFIX)
                .unwrap_or(parts.netloc)
                .to_string()
        });

        Self {
            protocol: (!parts.scheme.is_empty()).then_some(parts.scheme),
            server_name,
            url_prefix: parts.path.trim_start_matches('/').to_string(),
        }
    }

    /// Reassemble the base URL the server is reachable at, if it has both a
    /// protocol and a server name.
    pub fn base_url(&self) -> Option<String> {
        let protocol = self.protocol.as_deref()?;
        let server_name = self.server_name.as_deref()?;
        if self.url_prefix.is_empty() {
            Some(format!("{protocol}://{server_name}"))
        } else {
            Some(format!("{protocol}://{server_name}/{}", self.url_prefix))
        }
    }
}

struct UrlParts<'a> {
    scheme: String,
    netloc: &'a str,
    path: &'a str,
}

fn split_url(url: &str) -> UrlParts<'_> {
    let (scheme, rest) = match url.split_once(':') {
        Some((candidate, rest)) if is_scheme(candidate) => (candidate.to_ascii_lowercase(), rest),
        _ => (String::new(), url),
    };

    let (netloc, rest) = match rest.strip_prefix("//") {
        Some(after) => {
            let end = after.find(['/', '?', '#']).unwrap_or(after.len());
            after.split_at(end)
        }
        None => ("", rest),
    };

    let mut path = rest.split(['?', '#']).next().unwrap_or_default();
    if PARAM_SCHEMES.contains(&scheme.as_str()) {
        path = strip_params(path);
    }

    UrlParts {
        scheme,
        netloc,
        path,
    }
}

/// Schemes whose last path segment may carry `;params`.
const PARAM_SCHEMES: &[&str] = &[
    "", "ftp", "hdl", "prospero", "http", "imap", "https", "shttp", "rtsp", "rtspu", "sip",
    "sips", "mms", "sftp", "tel",
];

fn strip_params(path: &str) -> &str {
    let last_segment = path.rfind('/').unwrap_or(0);
    match path[last_segment..].find(';') {
        Some(i) => &path[..last_segment + i],
        None => path,
    }
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_scheme(candidate: &str) -> bool {
    let mut chars = candidate.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
