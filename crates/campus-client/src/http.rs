//! Authenticated HTTP client with one-shot token refresh.

use std::sync::Arc;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace, warn};

use campus_core::error::{ApiError, AuthError, TransportError};
use campus_core::{AccessToken, ApiUrl, CredentialStore, Error, RefreshToken};

use crate::endpoints::{ErrorBody, REFRESH, RefreshRequest, RefreshResponse};

/// HTTP client for the campus backend API.
///
/// Attaches the bearer credential held by the injected
/// [`CredentialStore`] to every call, and on an authorization failure
/// performs a single refresh of the access token before reissuing the
/// failed call. Credential mutation is the only side effect the client
/// performs itself; reacting to a fatal session-expired outcome
/// (e.g. navigating to a sign-in entry point) is left to the caller.
///
/// Cloning is cheap; clones share the underlying connection pool and
/// credential store.
#[derive(Clone)]
pub struct ApiClient {
    server: ApiUrl,
    http: reqwest::Client,
    cookie_http: reqwest::Client,
    store: Arc<dyn CredentialStore>,
}

/// One in-flight outbound call, tracked for at-most-one-retry semantics.
///
/// A pending request is retried at most once regardless of how many
/// times authorization fails; concurrent calls each carry their own
/// marker and do not coordinate refreshes.
struct PendingRequest<'a> {
    method: Method,
    path: &'a str,
    retried: bool,
}

impl ApiClient {
    /// Create a new client for the given backend server.
    pub fn new(server: ApiUrl, store: Arc<dyn CredentialStore>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("campus/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        // Separate client for the cookie-session sign-in path; keeps
        // the session cookie out of the bearer-token connection pool.
        let cookie_http = reqwest::Client::builder()
            .user_agent(concat!("campus/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .build()
            .expect("failed to build HTTP client");

        Self {
            server,
            http,
            cookie_http,
            store,
        }
    }

    /// Returns the server URL this client is configured for.
    pub fn server(&self) -> &ApiUrl {
        &self.server
    }

    /// Returns the credential store backing this client.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Make a GET call to an endpoint without query parameters.
    #[instrument(skip(self), fields(server = %self.server))]
    pub async fn get<R>(&self, path: &str) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.request::<(), (), R>(Method::GET, path, None, None)
            .await
    }

    /// Make a GET call with query parameters.
    #[instrument(skip(self, params), fields(server = %self.server))]
    pub async fn get_with<Q, R>(&self, path: &str, params: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        self.request::<Q, (), R>(Method::GET, path, Some(params), None)
            .await
    }

    /// Make a POST call with a JSON body.
    #[instrument(skip(self, body), fields(server = %self.server))]
    pub async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        self.request::<(), B, R>(Method::POST, path, None, Some(body))
            .await
    }

    /// Issue a call with the one-shot refresh protocol.
    ///
    /// The bearer credential is re-read from the store on every attempt,
    /// so a reissued call picks up the freshly stored access token. A
    /// 401 on a call already marked retried is returned to the caller
    /// unmodified, as is any non-401 failure.
    async fn request<Q, B, R>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        B: Serialize,
        R: DeserializeOwned,
    {
        let mut pending = PendingRequest {
            method,
            path,
            retried: false,
        };

        loop {
            let response = self.send(&pending, query, body).await?;
            let status = response.status();
            trace!(status = %status, "API response");

            if status.is_success() {
                return response.json::<R>().await.map_err(transport_error);
            }

            let error = self.parse_error_response(response).await;
            if error.is_unauthorized() && !pending.retried {
                pending.retried = true;
                self.recover_session(error).await?;
                continue;
            }

            return Err(error.into());
        }
    }

    /// Send one attempt of a pending request.
    async fn send<Q, B>(
        &self,
        pending: &PendingRequest<'_>,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<reqwest::Response, Error>
    where
        Q: Serialize + std::fmt::Debug,
        B: Serialize,
    {
        let url = self.server.endpoint(pending.path);
        debug!(path = pending.path, retried = pending.retried, "API call");

        let mut request = self.http.request(pending.method.clone(), &url);
        if let Some(params) = query {
            trace!(?params, "query parameters");
            request = request.query(params);
        }
        if let Some(body) = body {
            request = request.json(body);
        }
        // A missing credential simply omits the header; the backend
        // rejects the unauthenticated call itself.
        if let Some(token) = self.store.access_token() {
            request = request.headers(auth_headers(token.as_str()));
        }

        request.send().await.map_err(transport_error)
    }

    /// Repair an expired access credential after an authorization failure.
    ///
    /// On success the store holds a fresh access token and the caller
    /// reissues the original call. On any other outcome the store is
    /// cleared and the fatal session-expired error carries the failure
    /// to propagate: the original 401 when no refresh credential
    /// existed, the refresh failure otherwise.
    async fn recover_session(&self, original: ApiError) -> Result<(), Error> {
        let Some(refresh) = self.store.refresh_token() else {
            debug!("no refresh token available, clearing session");
            self.store.clear();
            return Err(AuthError::SessionExpired {
                source: Box::new(original.into()),
            }
            .into());
        };

        match self.refresh_access_token(&refresh).await {
            Ok(access) => {
                self.store.set_access_token(access);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, clearing session");
                self.store.clear();
                Err(AuthError::SessionExpired {
                    source: Box::new(err),
                }
                .into())
            }
        }
    }

    /// Exchange the refresh token for a new access token.
    ///
    /// The refresh endpoint is unauthenticated: the refresh token rides
    /// in the body, never in an Authorization header.
    #[instrument(skip(self, refresh), fields(server = %self.server))]
    async fn refresh_access_token(&self, refresh: &RefreshToken) -> Result<AccessToken, Error> {
        let url = self.server.endpoint(REFRESH);
        debug!("refreshing access token");

        let response = self
            .http
            .post(&url)
            .json(&RefreshRequest {
                refresh: refresh.as_str(),
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            let body: RefreshResponse = response.json().await.map_err(transport_error)?;
            debug!("access token refreshed");
            Ok(AccessToken::new(body.access))
        } else {
            Err(self.parse_error_response(response).await.into())
        }
    }

    /// Explicitly exchange the stored refresh token for a new access
    /// token.
    ///
    /// Shares the automatic path's contract: success overwrites only
    /// the access credential; a rejected exchange clears the store and
    /// yields the fatal session-expired outcome. Fails without a
    /// network call when no refresh credential is stored.
    #[instrument(skip(self), fields(server = %self.server))]
    pub async fn refresh_session(&self) -> Result<(), Error> {
        let refresh = self
            .store
            .refresh_token()
            .ok_or(AuthError::RefreshTokenMissing)?;

        match self.refresh_access_token(&refresh).await {
            Ok(access) => {
                self.store.set_access_token(access);
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, clearing session");
                self.store.clear();
                Err(AuthError::SessionExpired {
                    source: Box::new(err),
                }
                .into())
            }
        }
    }

    /// Make a POST call over the cookie-session transport.
    ///
    /// Used by the identity-provider sign-in path, which establishes a
    /// backend session cookie instead of riding the bearer-token path.
    /// No Authorization header is attached and no refresh is attempted.
    pub(crate) async fn post_cookie_session<B, R>(&self, path: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let url = self.server.endpoint(path);
        debug!(path, "API call (cookie session)");

        let response = self
            .cookie_http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status.is_success() {
            response.json::<R>().await.map_err(transport_error)
        } else {
            Err(self.parse_error_response(response).await.into())
        }
    }

    /// Parse a non-2xx response into an [`ApiError`].
    async fn parse_error_response(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();

        // Try to parse the conventional error payload
        match response.json::<ErrorBody>().await {
            Ok(body) => ApiError::new(status, body.message, body.detail),
            Err(_) => ApiError::new(status, None, None),
        }
    }
}

/// Create authorization headers for authenticated requests.
fn auth_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    let auth_value = format!("Bearer {}", token);
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&auth_value).expect("invalid token characters"),
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers
}

/// Map a reqwest failure onto the transport error taxonomy.
fn transport_error(err: reqwest::Error) -> Error {
    let transport = if err.is_timeout() {
        TransportError::Timeout { duration_ms: 0 }
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(transport)
}

// Custom Debug impl that hides the credential store contents
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("server", &self.server)
            .field("store", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::MemoryStore;

    #[test]
    fn client_creation() {
        let server = ApiUrl::new("https://lms.example.com").unwrap();
        let client = ApiClient::new(server.clone(), Arc::new(MemoryStore::new()));
        assert_eq!(client.server().as_str(), server.as_str());
    }

    #[test]
    fn debug_hides_store() {
        let server = ApiUrl::new("https://lms.example.com").unwrap();
        let client = ApiClient::new(server, Arc::new(MemoryStore::new()));
        let debug = format!("{:?}", client);
        assert!(debug.contains("[REDACTED]"));
    }
}
