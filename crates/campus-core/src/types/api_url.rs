//! Backend base URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// The versioned path prefix all backend endpoints live under.
const API_PREFIX: &str = "api/v1";

/// A validated backend server URL.
///
/// This type ensures the URL is absolute, uses HTTPS (or HTTP for
/// localhost), and is normalized for endpoint construction under the
/// versioned API prefix.
///
/// # Example
///
/// ```
/// use campus_core::ApiUrl;
///
/// let server = ApiUrl::new("https://lms.example.com").unwrap();
/// assert_eq!(server.endpoint("auth/login/"),
///            "https://lms.example.com/api/v1/auth/login/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        // Normalize: remove trailing slash
        let normalized = if url.path() == "/" {
            let mut u = url.clone();
            u.set_path("");
            u
        } else {
            url
        };

        Ok(Self(normalized))
    }

    /// Returns the full URL for an endpoint path under the API prefix.
    ///
    /// Endpoint paths follow the backend's convention of a trailing
    /// slash, e.g. `auth/login/` or `employee/list/`.
    pub fn endpoint(&self, path: &str) -> String {
        // The URL crate always adds a trailing slash to root paths,
        // so trim before joining the prefix
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}/{}", base, API_PREFIX, path.trim_start_matches('/'))
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        // Must be HTTPS (or HTTP for localhost)
        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(InvalidInputError::ServerUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApiUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ApiUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.0.as_str())
    }
}

impl<'de> Deserialize<'de> for ApiUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ApiUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ApiUrl {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_https_url() {
        let server = ApiUrl::new("https://lms.example.com").unwrap();
        assert_eq!(server.host(), Some("lms.example.com"));
    }

    #[test]
    fn valid_localhost_http() {
        let server = ApiUrl::new("http://localhost:8000").unwrap();
        assert_eq!(server.host(), Some("localhost"));
    }

    #[test]
    fn endpoint_construction() {
        let server = ApiUrl::new("https://lms.example.com").unwrap();
        assert_eq!(
            server.endpoint("auth/login/"),
            "https://lms.example.com/api/v1/auth/login/"
        );
    }

    #[test]
    fn endpoint_with_query_style_path() {
        let server = ApiUrl::new("https://lms.example.com").unwrap();
        assert_eq!(
            server.endpoint("employee/list/"),
            "https://lms.example.com/api/v1/employee/list/"
        );
    }

    #[test]
    fn normalizes_trailing_slash() {
        let server = ApiUrl::new("https://lms.example.com/").unwrap();
        assert_eq!(
            server.endpoint("auth/refresh/"),
            "https://lms.example.com/api/v1/auth/refresh/"
        );
    }

    #[test]
    fn invalid_http_non_localhost() {
        assert!(ApiUrl::new("http://lms.example.com").is_err());
    }

    #[test]
    fn invalid_relative_url() {
        assert!(ApiUrl::new("/api/v1/auth/login/").is_err());
    }
}
