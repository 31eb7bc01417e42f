//! Push credentials
//!
//! The access token is handed to git per invocation as an HTTP header
//! scoped to the remote URL (`-c http.<url>.extraheader=...`). Neither the
//! remote URL nor the repository config ever contains it.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use std::fmt;

/// Username GitHub expects alongside an installation or workflow token
const TOKEN_USERNAME: &str = "x-access-token";

/// A secret API token
///
/// `Debug` is redacted so the token cannot leak through logs or error output.
#[derive(Clone)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

/// Authorization for git's smart-HTTP transport
#[derive(Clone)]
pub struct HttpCredential {
    header: String,
}

impl HttpCredential {
    /// Basic authorization built from a token
    pub fn from_token(token: &AccessToken) -> Self {
        let encoded = BASE64.encode(format!("{TOKEN_USERNAME}:{}", token.expose()));
        Self {
            header: format!("AUTHORIZATION: basic {encoded}"),
        }
    }

    /// Credential that adds no header, for remotes that need no auth
    pub const fn anonymous() -> Self {
        Self {
            header: String::new(),
        }
    }

    /// `-c` overrides for a single git invocation against `remote_url`
    ///
    /// Git applies the most specific matching `http.<url>.*` key, so the
    /// header is keyed on the full remote URL to outrank host-scoped headers
    /// such as the one `actions/checkout` saves. The empty value clears
    /// headers collected from config files before it.
    pub fn git_config(&self, remote_url: &str) -> Vec<(String, String)> {
        if self.header.is_empty() {
            return Vec::new();
        }
        let key = format!("http.{remote_url}.extraheader");
        vec![(key.clone(), String::new()), (key, self.header.clone())]
    }
}

impl fmt::Debug for HttpCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpCredential")
            .field("anonymous", &self.header.is_empty())
            .finish()
    }
}
