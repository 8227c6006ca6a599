//! `reqwest` implementation of the API gateway.
//!
//! One shared request path: build the request, send, check the status,
//! then parse. Non-success responses are read as text first so the
//! backend's `{message}` payloads survive into [`GatewayError::Api`].

use reqwest::multipart;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use squiirshop_core::{BearerToken, ProductId};
use tracing::debug;

use crate::config::ClientConfig;

use super::types::{
    AddToCartRequest, BusinessApplication, CartLine, CheckoutRequest, ContactForm, LoginRequest,
    LoginResponse, MessageResponse, Product, ProductForm, ProfileUpdate, RegistrationForm,
    SellerOrder, SellerOrdersResponse, Upload, UserProfile,
};
use super::{ApiGateway, GatewayError};

/// Client for the SquiirShop REST backend.
///
/// Cheap to clone; the underlying `reqwest::Client` pools connections.
#[derive(Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGateway {
    /// Create a gateway from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("squiirshop-client/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base.as_str().trim_end_matches('/').to_owned(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Send a request, enforce a success status, and parse the body.
    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(
                error = %e,
                body = %body.chars().take(500).collect::<String>(),
                "Failed to parse backend response"
            );
            GatewayError::Parse(e.to_string())
        })
    }

    /// Send a request where only the success status matters (opaque ack).
    async fn send_ack(&self, request: RequestBuilder) -> Result<(), GatewayError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(api_error(status, &body));
        }

        Ok(())
    }

    /// Send a request and return the backend's `{message}` text.
    async fn send_message(&self, request: RequestBuilder) -> Result<String, GatewayError> {
        let ack: MessageResponse = self.send(request).await?;
        Ok(ack.message)
    }
}

/// Build an [`GatewayError::Api`], preferring the backend's `{message}`
/// payload over the raw body.
fn api_error(status: StatusCode, body: &str) -> GatewayError {
    let message = serde_json::from_str::<MessageResponse>(body)
        .map(|m| m.message)
        .ok()
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| body.chars().take(200).collect());

    debug!(status = %status, message = %message, "Backend returned non-success status");

    GatewayError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Build the multipart form shared by product create/edit.
fn product_multipart(form: ProductForm) -> multipart::Form {
    let mut body = multipart::Form::new()
        .text("name", form.name)
        .text("description", form.description)
        .text("price", form.price.to_string());

    if let Some(image) = form.image {
        body = body.part("image", upload_part(image));
    }

    body
}

fn upload_part(upload: Upload) -> multipart::Part {
    multipart::Part::bytes(upload.bytes).file_name(upload.filename)
}

impl ApiGateway for HttpGateway {
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        debug!("Fetching product catalog");
        self.send(self.client.get(self.endpoint("/process/products")))
            .await
    }

    async fn add_to_cart(&self, product_id: &ProductId) -> Result<(), GatewayError> {
        self.send_ack(
            self.client
                .post(self.endpoint("/process/addcart"))
                .json(&AddToCartRequest { product_id }),
        )
        .await
    }

    async fn fetch_cart(&self) -> Result<Vec<CartLine>, GatewayError> {
        debug!("Fetching cart");
        self.send(self.client.get(self.endpoint("/process/cart")))
            .await
    }

    async fn remove_cart_item(&self, product_id: &ProductId) -> Result<(), GatewayError> {
        self.send_ack(
            self.client
                .delete(self.endpoint(&format!("/process/cart/{product_id}"))),
        )
        .await
    }

    async fn checkout(
        &self,
        order: &CheckoutRequest,
        token: &BearerToken,
    ) -> Result<(), GatewayError> {
        debug!(lines = order.cart_items.len(), "Submitting checkout");
        self.send_ack(
            self.client
                .post(self.endpoint("/process/checkout"))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value())
                .json(order),
        )
        .await
    }

    async fn register(&self, form: RegistrationForm) -> Result<String, GatewayError> {
        let mut body = multipart::Form::new()
            .text("name", form.name)
            .text("email", form.email.into_inner())
            .text("password", form.password)
            .text("address", form.address)
            .text("phone", form.phone);

        if let Some(image) = form.profile_image {
            body = body.part("profileImage", upload_part(image));
        }

        self.send_message(
            self.client
                .post(self.endpoint("/process/register"))
                .multipart(body),
        )
        .await
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, GatewayError> {
        self.send(
            self.client
                .post(self.endpoint("/process/login"))
                .json(request),
        )
        .await
    }

    async fn fetch_profile(&self, token: &BearerToken) -> Result<UserProfile, GatewayError> {
        self.send(
            self.client
                .get(self.endpoint("/process/protected"))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value()),
        )
        .await
    }

    async fn update_profile(
        &self,
        update: &ProfileUpdate,
        token: &BearerToken,
    ) -> Result<UserProfile, GatewayError> {
        self.send(
            self.client
                .put(self.endpoint("/process/edit-profile"))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value())
                .json(update),
        )
        .await
    }

    async fn start_business(
        &self,
        application: &BusinessApplication,
        token: &BearerToken,
    ) -> Result<String, GatewayError> {
        self.send_message(
            self.client
                .post(self.endpoint("/business"))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value())
                .json(application),
        )
        .await
    }

    async fn list_own_products(&self, token: &BearerToken) -> Result<Vec<Product>, GatewayError> {
        self.send(
            self.client
                .get(self.endpoint("/process/product"))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value()),
        )
        .await
    }

    async fn create_product(
        &self,
        form: ProductForm,
        token: &BearerToken,
    ) -> Result<(), GatewayError> {
        self.send_ack(
            self.client
                .post(self.endpoint("/process/product"))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value())
                .multipart(product_multipart(form)),
        )
        .await
    }

    async fn update_product(
        &self,
        product_id: &ProductId,
        form: ProductForm,
        token: &BearerToken,
    ) -> Result<(), GatewayError> {
        // Backend routes use a literal colon before the id, not a slash.
        self.send_ack(
            self.client
                .put(self.endpoint(&format!("/process/editproduct:{product_id}")))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value())
                .multipart(product_multipart(form)),
        )
        .await
    }

    async fn delete_product(
        &self,
        product_id: &ProductId,
        token: &BearerToken,
    ) -> Result<(), GatewayError> {
        self.send_ack(
            self.client
                .delete(self.endpoint(&format!("/process/delproduct:{product_id}")))
                .header(reqwest::header::AUTHORIZATION, token.authorization_value()),
        )
        .await
    }

    async fn seller_orders(&self, token: &BearerToken) -> Result<Vec<SellerOrder>, GatewayError> {
        let response: SellerOrdersResponse = self
            .send(
                self.client
                    .get(self.endpoint("/process/seller-orders"))
                    .header(reqwest::header::AUTHORIZATION, token.authorization_value()),
            )
            .await?;
        Ok(response.orders)
    }

    async fn send_contact(&self, form: &ContactForm) -> Result<(), GatewayError> {
        self.send_ack(
            self.client
                .post(self.endpoint("/process/contact"))
                .json(form),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_prefers_backend_message() {
        let err = api_error(
            StatusCode::UNAUTHORIZED,
            r#"{"message": "Invalid credentials"}"#,
        );
        assert_eq!(err.backend_message(), Some("Invalid credentials"));
    }

    #[test]
    fn test_api_error_falls_back_to_raw_body() {
        let err = api_error(StatusCode::BAD_GATEWAY, "upstream exploded");
        match err {
            GatewayError::Api { status, message } => {
                assert_eq!(status, 502);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ClientConfig::with_base_url("https://api.example/api/v1/")
            .expect("valid test config");
        let gateway = HttpGateway::new(&config).expect("client builds");
        assert_eq!(
            gateway.endpoint("/process/products"),
            "https://api.example/api/v1/process/products"
        );
    }
}
