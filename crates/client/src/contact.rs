//! Contact form submission.

use crate::api::{ApiGateway, ContactForm, GatewayError};

/// Thin wrapper around the contact endpoint.
pub struct ContactClient<G> {
    gateway: G,
}

impl<G: ApiGateway> ContactClient<G> {
    /// Create a contact client.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Submit the form.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the submission.
    pub async fn send(&self, form: &ContactForm) -> Result<(), GatewayError> {
        self.gateway.send_contact(form).await
    }
}
