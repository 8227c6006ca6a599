//! SquiirShop backend API gateway.
//!
//! # Architecture
//!
//! - One trait method per backend operation; the storefront components
//!   depend on [`ApiGateway`], never on HTTP directly
//! - [`HttpGateway`] is the production implementation over `reqwest`
//! - The backend is plain REST under `/api/v1`; authenticated operations
//!   take the bearer token as an explicit argument rather than reading
//!   ambient state
//!
//! # Example
//!
//! ```rust,ignore
//! use squiirshop_client::api::{ApiGateway, HttpGateway};
//! use squiirshop_client::config::ClientConfig;
//!
//! let gateway = HttpGateway::new(&ClientConfig::from_env()?)?;
//! let products = gateway.list_products().await?;
//! ```

mod http;
pub mod types;

pub use http::HttpGateway;
pub use types::*;

use squiirshop_core::{BearerToken, ProductId};
use thiserror::Error;

/// Errors that can occur when talking to the SquiirShop backend.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed (connection, TLS, malformed URL).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Backend-provided message, or the raw body when unstructured.
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl GatewayError {
    /// Backend-provided error message, if the failure carried one.
    ///
    /// Login and registration errors arrive as `{message}` payloads that
    /// the UI shows verbatim.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message),
            _ => None,
        }
    }
}

/// Every network operation the storefront consumes, one method per
/// request/response pair.
///
/// Implementations must be non-blocking; the components suspend only at
/// these boundaries. Timeout and retry policy belongs to the transport,
/// not to this interface.
#[allow(async_fn_in_trait)]
pub trait ApiGateway {
    // -- Storefront ---------------------------------------------------------

    /// List the public product catalog.
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError>;

    /// Add a product to the server-side cart.
    async fn add_to_cart(&self, product_id: &ProductId) -> Result<(), GatewayError>;

    /// Fetch the current cart contents.
    async fn fetch_cart(&self) -> Result<Vec<CartLine>, GatewayError>;

    /// Delete a product from the server-side cart.
    async fn remove_cart_item(&self, product_id: &ProductId) -> Result<(), GatewayError>;

    /// Submit the cart for checkout. Requires an authenticated session.
    async fn checkout(
        &self,
        order: &CheckoutRequest,
        token: &BearerToken,
    ) -> Result<(), GatewayError>;

    // -- Account ------------------------------------------------------------

    /// Create a new account. Returns the backend confirmation message.
    async fn register(&self, form: RegistrationForm) -> Result<String, GatewayError>;

    /// Exchange credentials for a bearer token and user summary.
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, GatewayError>;

    /// Fetch the authenticated user's profile.
    async fn fetch_profile(&self, token: &BearerToken) -> Result<UserProfile, GatewayError>;

    /// Update the authenticated user's profile.
    async fn update_profile(
        &self,
        update: &ProfileUpdate,
        token: &BearerToken,
    ) -> Result<UserProfile, GatewayError>;

    /// Apply to open a seller account. Returns the backend message.
    async fn start_business(
        &self,
        application: &BusinessApplication,
        token: &BearerToken,
    ) -> Result<String, GatewayError>;

    // -- Merchant panel -----------------------------------------------------

    /// List the seller's own products.
    async fn list_own_products(&self, token: &BearerToken) -> Result<Vec<Product>, GatewayError>;

    /// Create a product.
    async fn create_product(
        &self,
        form: ProductForm,
        token: &BearerToken,
    ) -> Result<(), GatewayError>;

    /// Update an existing product.
    async fn update_product(
        &self,
        product_id: &ProductId,
        form: ProductForm,
        token: &BearerToken,
    ) -> Result<(), GatewayError>;

    /// Delete a product.
    async fn delete_product(
        &self,
        product_id: &ProductId,
        token: &BearerToken,
    ) -> Result<(), GatewayError>;

    /// List orders placed against the seller's products.
    async fn seller_orders(&self, token: &BearerToken) -> Result<Vec<SellerOrder>, GatewayError>;

    // -- Misc ----------------------------------------------------------------

    /// Submit the contact form.
    async fn send_contact(&self, form: &ContactForm) -> Result<(), GatewayError>;
}
