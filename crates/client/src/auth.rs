//! Account client: registration, login, profile, seller application.
//!
//! Login is the one place the credential store is written; everything else
//! reads the token back out of the injected store. Failures from the
//! backend carry its `{message}` payloads (shown verbatim by the UI), local
//! precondition failures are their own variants.

use squiirshop_core::{BearerToken, Email, EmailError};
use thiserror::Error;

use crate::api::{
    ApiGateway, BusinessApplication, GatewayError, LoginRequest, ProfileUpdate, RegistrationForm,
    UserProfile, UserSummary,
};
use crate::credentials::{CredentialStore, CredentialStoreError};

/// Errors from account operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login attempted with an empty email or password.
    #[error("Email and password are required.")]
    MissingCredentials,

    /// The email is structurally invalid.
    #[error(transparent)]
    InvalidEmail(#[from] EmailError),

    /// An authenticated operation ran without a stored token.
    #[error("No token found. Please log in.")]
    NotSignedIn,

    /// Backend call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The credential store rejected a write.
    #[error(transparent)]
    Store(#[from] CredentialStoreError),
}

/// Account operations over a gateway and a credential store.
pub struct AccountClient<G, S> {
    gateway: G,
    credentials: S,
}

impl<G: ApiGateway, S: CredentialStore> AccountClient<G, S> {
    /// Create an account client.
    #[must_use]
    pub fn new(gateway: G, credentials: S) -> Self {
        Self {
            gateway,
            credentials,
        }
    }

    /// Whether a session credential is currently stored.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.credentials.get().is_some()
    }

    /// Create a new account. Returns the backend's confirmation message.
    ///
    /// Registration does not sign the user in; the backend sends a
    /// verification email first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the form.
    pub async fn register(&self, form: RegistrationForm) -> Result<String, AuthError> {
        Ok(self.gateway.register(form).await?)
    }

    /// Exchange email and password for a session.
    ///
    /// Both fields are required and the email must be structurally valid;
    /// violations are caught locally before any network call. On success
    /// the token is written to the credential store and the user summary
    /// returned for display.
    ///
    /// # Errors
    ///
    /// Returns an error on local validation failure, backend rejection, or
    /// a credential store write failure.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSummary, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        let email = Email::parse(email)?;

        let response = self
            .gateway
            .login(&LoginRequest {
                email,
                password: password.to_owned(),
            })
            .await?;

        self.credentials.set(BearerToken::new(response.token))?;
        tracing::info!("Signed in");
        Ok(response.user)
    }

    /// Drop the stored session credential.
    ///
    /// # Errors
    ///
    /// Returns an error if the credential store rejects the removal.
    pub fn logout(&self) -> Result<(), AuthError> {
        self.credentials.clear()?;
        tracing::info!("Signed out");
        Ok(())
    }

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::NotSignedIn`] without a network call when no
    /// token is stored.
    pub async fn profile(&self) -> Result<UserProfile, AuthError> {
        let token = self.token()?;
        Ok(self.gateway.fetch_profile(&token).await?)
    }

    /// Update the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Self::profile`].
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<UserProfile, AuthError> {
        let token = self.token()?;
        Ok(self.gateway.update_profile(update, &token).await?)
    }

    /// Apply to open a seller business on the account.
    ///
    /// # Errors
    ///
    /// Same preconditions as [`Self::profile`].
    pub async fn start_business(
        &self,
        application: &BusinessApplication,
    ) -> Result<String, AuthError> {
        let token = self.token()?;
        Ok(self.gateway.start_business(application, &token).await?)
    }

    fn token(&self) -> Result<BearerToken, AuthError> {
        self.credentials.get().ok_or(AuthError::NotSignedIn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::LoginResponse;
    use crate::credentials::MemoryCredentialStore;
    use crate::testing::{FakeGateway, backend_error};

    #[tokio::test]
    async fn test_login_stores_token_and_logout_clears_it() {
        let gateway = FakeGateway::new();
        FakeGateway::script(
            &gateway.login_results,
            Ok(LoginResponse {
                token: "tok".to_owned(),
                user: UserSummary {
                    name: Some("Ana".to_owned()),
                    email: None,
                },
            }),
        );

        let account = AccountClient::new(gateway, MemoryCredentialStore::new());
        assert!(!account.is_signed_in());

        let user = account
            .login("ana@example.com", "hunter2")
            .await
            .expect("login succeeds");
        assert_eq!(user.name.as_deref(), Some("Ana"));
        assert!(account.is_signed_in());

        account.logout().expect("logout succeeds");
        assert!(!account.is_signed_in());
    }

    #[tokio::test]
    async fn test_login_requires_both_fields_locally() {
        // No scripted login result: reaching the gateway would panic.
        let account = AccountClient::new(FakeGateway::new(), MemoryCredentialStore::new());

        let err = account.login("", "hunter2").await.expect_err("rejected");
        assert!(matches!(err, AuthError::MissingCredentials));

        let err = account
            .login("ana@example.com", "")
            .await
            .expect_err("rejected");
        assert!(matches!(err, AuthError::MissingCredentials));

        let err = account
            .login("not-an-email", "hunter2")
            .await
            .expect_err("rejected");
        assert!(matches!(err, AuthError::InvalidEmail(_)));
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_backend_message() {
        let gateway = FakeGateway::new();
        FakeGateway::script(
            &gateway.login_results,
            Err(GatewayError::Api {
                status: 401,
                message: "Invalid credentials".to_owned(),
            }),
        );

        let account = AccountClient::new(gateway, MemoryCredentialStore::new());
        let err = account
            .login("ana@example.com", "wrong")
            .await
            .expect_err("rejected");

        match err {
            AuthError::Gateway(gateway_err) => {
                assert_eq!(gateway_err.backend_message(), Some("Invalid credentials"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!account.is_signed_in());
    }

    #[tokio::test]
    async fn test_profile_without_token_is_local_failure() {
        // No scripted profile result: reaching the gateway would panic.
        let account = AccountClient::new(FakeGateway::new(), MemoryCredentialStore::new());
        let err = account.profile().await.expect_err("rejected");
        assert!(matches!(err, AuthError::NotSignedIn));
    }

    #[tokio::test]
    async fn test_profile_fetch_failure_propagates() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.profiles, Err(backend_error()));

        let store = MemoryCredentialStore::with_token(BearerToken::new("tok"));
        let account = AccountClient::new(gateway, store);
        let err = account.profile().await.expect_err("propagates");
        assert!(matches!(err, AuthError::Gateway(_)));
    }
}
