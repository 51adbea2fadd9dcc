//! Session lifecycle operations: sign-in, registration, sign-out.

use tracing::{debug, info, instrument, warn};

use campus_core::error::InvalidInputError;
use campus_core::validate::{validate_country_code, validate_phone};
use campus_core::{
    AccessToken, Credentials, Error, RefreshToken, Session, UserProfile,
};

use crate::endpoints::{
    AuthResponse, GOOGLE_LOGIN, GoogleLoginRequest, LOGIN, LOGOUT, LoginRequest, LogoutRequest,
    REGISTER, RegisterRequest, USER_DETAILS,
};
use crate::http::ApiClient;

impl ApiClient {
    /// Sign in with email and password.
    ///
    /// On success the returned session (access token, refresh token,
    /// user profile) is written to the credential store and the profile
    /// is returned. Failures carry the backend's explanation; use
    /// [`ApiError::normalized_message`](campus_core::ApiError::normalized_message)
    /// for display.
    #[instrument(skip(self, credentials), fields(server = %self.server(), email = %credentials.email()))]
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, Error> {
        info!("Signing in");

        let request = LoginRequest {
            email: credentials.email(),
            password: credentials.password(),
        };
        let response: AuthResponse = self.post(LOGIN, &request).await?;

        let session = store_auth_response(self, response);
        debug!("Session created");
        Ok(session.user)
    }

    /// Create an account.
    ///
    /// The backend signs the new account in immediately, so the same
    /// session-persistence contract as [`login`](Self::login) applies.
    /// Optional phone and country code fields are validated locally
    /// before any network call.
    #[instrument(skip(self, request), fields(server = %self.server(), email = %request.email))]
    pub async fn register(&self, request: &RegisterRequest) -> Result<UserProfile, Error> {
        if let Some(phone) = request.contact_number.as_deref() {
            validate_phone(phone)?;
        }
        if let Some(code) = request.country_code.as_deref() {
            validate_country_code(code)?;
        }

        info!("Registering account");
        let response: AuthResponse = self.post(REGISTER, request).await?;

        let session = store_auth_response(self, response);
        debug!("Session created");
        Ok(session.user)
    }

    /// Sign in with a Google identity token.
    ///
    /// Fails before any network call when the provider credential is
    /// missing. The call rides the cookie-session transport rather than
    /// the bearer-token path; the resulting token pair is stored
    /// identically to a password sign-in.
    #[instrument(skip(self, credential), fields(server = %self.server()))]
    pub async fn google_login(&self, credential: &str) -> Result<UserProfile, Error> {
        if credential.trim().is_empty() {
            return Err(InvalidInputError::MissingProviderCredential.into());
        }

        info!("Signing in via identity provider");
        let response: AuthResponse = self
            .post_cookie_session(GOOGLE_LOGIN, &GoogleLoginRequest { credential })
            .await?;

        let session = store_auth_response(self, response);
        debug!("Session created");
        Ok(session.user)
    }

    /// Sign out.
    ///
    /// Best-effort notifies the backend so the refresh token is revoked;
    /// a failed notification is logged and otherwise ignored. The
    /// credential store is cleared unconditionally.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn logout(&self) {
        info!("Signing out");

        if let Some(refresh) = self.store().refresh_token() {
            let request = LogoutRequest {
                refresh: refresh.as_str(),
            };
            let result: Result<serde_json::Value, Error> = self.post(LOGOUT, &request).await;
            if let Err(err) = result {
                warn!(error = %err, "logout notification failed, clearing session anyway");
            }
        }

        self.store().clear();
    }

    /// Probe the backend to check whether the stored session is usable.
    ///
    /// Returns `Ok(true)` when the probe succeeds. An authorization
    /// failure (after the usual one-shot refresh) clears the store and
    /// returns `Ok(false)`; any other failure is propagated
    /// uninterpreted for the caller to decide.
    #[instrument(skip(self), fields(server = %self.server()))]
    pub async fn check_session(&self) -> Result<bool, Error> {
        match self.user_details().await {
            Ok(_) => Ok(true),
            Err(err) if err.is_unauthorized() => {
                debug!("session probe rejected, clearing session");
                self.store().clear();
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// Fetch details for the authenticated user.
    pub async fn user_details(&self) -> Result<serde_json::Value, Error> {
        self.get(USER_DETAILS).await
    }

    /// Whether the store holds both bearer credentials.
    pub fn is_authenticated(&self) -> bool {
        self.store().is_authenticated()
    }

    /// The stored user profile, without a network call.
    pub fn current_user(&self) -> Option<UserProfile> {
        self.store().user_profile()
    }
}

/// Persist a successful auth response and hand back the session.
fn store_auth_response(client: &ApiClient, response: AuthResponse) -> Session {
    let session = Session::new(
        AccessToken::new(response.access),
        RefreshToken::new(response.refresh),
        response.user,
    );
    client.store().store_session(&session);
    session
}
