//! Merchant panel: the seller's own products and orders.
//!
//! Mirrors the seller workflow: the panel holds the seller's product list,
//! a form that toggles between create and edit (edit when a product id is
//! supplied), and a single message slot for panel feedback. Every operation
//! needs the bearer credential; its absence is a local precondition
//! failure, not a network error.
//!
//! Unlike the storefront cart, the panel re-fetches its list after every
//! confirmed mutation - the seller needs to see backend-assigned fields
//! (id, stored image URI) immediately.

use std::sync::Mutex;

use squiirshop_core::{BearerToken, ProductId};
use thiserror::Error;

use crate::api::{ApiGateway, GatewayError, Product, ProductForm, SellerOrder};
use crate::credentials::CredentialStore;

/// Panel message after a failed list fetch.
pub const PRODUCTS_FETCH_ERROR: &str = "Error fetching products.";

/// Panel message after a successful create.
pub const PRODUCT_ADDED: &str = "Product added successfully!";

/// Panel message after a successful edit.
pub const PRODUCT_UPDATED: &str = "Product updated successfully!";

/// Panel message after a failed create or edit.
pub const PRODUCT_SAVE_ERROR: &str = "Error saving product.";

/// Panel message after a successful delete.
pub const PRODUCT_DELETED: &str = "Product deleted successfully!";

/// Panel message after a failed delete.
pub const PRODUCT_DELETE_ERROR: &str = "Error deleting product.";

/// Fallback message when the order list fetch fails without a backend
/// message.
pub const ORDERS_FETCH_ERROR: &str = "Failed to fetch orders. Please try again.";

/// Panel feedback kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Operation confirmed.
    Success,
    /// Operation failed.
    Error,
}

/// The panel's single feedback slot; success and error replace each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelMessage {
    /// Message text.
    pub text: &'static str,
    /// Whether it reports success or failure.
    pub kind: MessageKind,
}

/// Errors from merchant operations.
#[derive(Debug, Error)]
pub enum MerchantError {
    /// No credential stored; nothing was sent.
    #[error("No token found. Please log in.")]
    NotSignedIn,

    /// Backend call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// The seller panel component.
pub struct MerchantClient<G, S> {
    gateway: G,
    credentials: S,
    products: Mutex<Vec<Product>>,
    message: Mutex<Option<PanelMessage>>,
}

impl<G: ApiGateway, S: CredentialStore> MerchantClient<G, S> {
    /// Create a merchant panel with an empty product list.
    #[must_use]
    pub fn new(gateway: G, credentials: S) -> Self {
        Self {
            gateway,
            credentials,
            products: Mutex::new(Vec::new()),
            message: Mutex::new(None),
        }
    }

    /// The held product list.
    #[must_use]
    pub fn products(&self) -> Vec<Product> {
        self.products.lock().map_or_else(|_| Vec::new(), |p| p.clone())
    }

    /// The current panel message, if any.
    #[must_use]
    pub fn message(&self) -> Option<PanelMessage> {
        self.message.lock().ok().and_then(|m| m.clone())
    }

    /// Fetch the seller's product list; the on-mount action, also run
    /// after every confirmed mutation.
    ///
    /// # Errors
    ///
    /// Returns an error without a network call when no token is stored,
    /// or when the fetch fails (the panel message is set either way).
    pub async fn refresh(&self) -> Result<(), MerchantError> {
        let token = self.token()?;

        match self.gateway.list_own_products(&token).await {
            Ok(products) => {
                if let Ok(mut held) = self.products.lock() {
                    *held = products;
                }
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Seller product fetch failed");
                self.set_message(MessageKind::Error, PRODUCTS_FETCH_ERROR);
                Err(e.into())
            }
        }
    }

    /// Create or update a product.
    ///
    /// Edit mode when `existing` is supplied, create otherwise - the same
    /// toggle the panel form uses. A confirmed save re-fetches the list so
    /// backend-assigned fields appear.
    ///
    /// # Errors
    ///
    /// Returns an error without a network call when no token is stored,
    /// or when the save fails.
    pub async fn save_product(
        &self,
        existing: Option<&ProductId>,
        form: ProductForm,
    ) -> Result<(), MerchantError> {
        let token = self.token()?;

        let (result, confirmation) = match existing {
            Some(id) => (
                self.gateway.update_product(id, form, &token).await,
                PRODUCT_UPDATED,
            ),
            None => (
                self.gateway.create_product(form, &token).await,
                PRODUCT_ADDED,
            ),
        };

        match result {
            Ok(()) => {
                self.set_message(MessageKind::Success, confirmation);
                // Best effort; a failed refresh overwrites the message.
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Product save failed");
                self.set_message(MessageKind::Error, PRODUCT_SAVE_ERROR);
                Err(e.into())
            }
        }
    }

    /// Delete a product and re-fetch the list on confirmation.
    ///
    /// # Errors
    ///
    /// Returns an error without a network call when no token is stored,
    /// or when the delete fails.
    pub async fn delete_product(&self, product_id: &ProductId) -> Result<(), MerchantError> {
        let token = self.token()?;

        match self.gateway.delete_product(product_id, &token).await {
            Ok(()) => {
                self.set_message(MessageKind::Success, PRODUCT_DELETED);
                let _ = self.refresh().await;
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, product_id = %product_id, "Product delete failed");
                self.set_message(MessageKind::Error, PRODUCT_DELETE_ERROR);
                Err(e.into())
            }
        }
    }

    /// Fetch orders placed against the seller's products.
    ///
    /// # Errors
    ///
    /// Returns an error without a network call when no token is stored,
    /// or when the fetch fails.
    pub async fn orders(&self) -> Result<Vec<SellerOrder>, MerchantError> {
        let token = self.token()?;
        Ok(self.gateway.seller_orders(&token).await?)
    }

    fn token(&self) -> Result<BearerToken, MerchantError> {
        self.credentials.get().ok_or(MerchantError::NotSignedIn)
    }

    fn set_message(&self, kind: MessageKind, text: &'static str) {
        if let Ok(mut slot) = self.message.lock() {
            *slot = Some(PanelMessage { text, kind });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::MemoryCredentialStore;
    use crate::testing::{FakeGateway, backend_error, product};
    use rust_decimal::Decimal;
    use squiirshop_core::BearerToken;

    fn form(name: &str) -> ProductForm {
        ProductForm {
            name: name.to_owned(),
            description: String::new(),
            price: Decimal::from(5),
            image: None,
        }
    }

    fn signed_in(gateway: FakeGateway) -> MerchantClient<FakeGateway, MemoryCredentialStore> {
        MerchantClient::new(
            gateway,
            MemoryCredentialStore::with_token(BearerToken::new("tok")),
        )
    }

    #[tokio::test]
    async fn test_operations_require_token_locally() {
        // No scripted results: reaching the gateway would panic.
        let panel = MerchantClient::new(FakeGateway::new(), MemoryCredentialStore::new());

        assert!(matches!(
            panel.refresh().await,
            Err(MerchantError::NotSignedIn)
        ));
        assert!(matches!(
            panel.save_product(None, form("mug")).await,
            Err(MerchantError::NotSignedIn)
        ));
        assert!(matches!(
            panel.orders().await,
            Err(MerchantError::NotSignedIn)
        ));
    }

    #[tokio::test]
    async fn test_create_then_refresh_shows_confirmation() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.save_results, Ok(()));
        FakeGateway::script(&gateway.own_products, Ok(vec![product("p1", "5")]));

        let panel = signed_in(gateway);
        panel.save_product(None, form("mug")).await.expect("saved");

        assert_eq!(panel.products().len(), 1);
        assert_eq!(
            panel.message(),
            Some(PanelMessage {
                text: PRODUCT_ADDED,
                kind: MessageKind::Success
            })
        );
    }

    #[tokio::test]
    async fn test_edit_mode_when_id_supplied() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.save_results, Ok(()));
        FakeGateway::script(&gateway.own_products, Ok(vec![product("p1", "6")]));

        let panel = signed_in(gateway);
        let id = ProductId::new("p1");
        panel
            .save_product(Some(&id), form("mug v2"))
            .await
            .expect("updated");

        assert_eq!(
            panel.message().map(|m| m.text),
            Some(PRODUCT_UPDATED)
        );
    }

    #[tokio::test]
    async fn test_save_failure_sets_error_and_keeps_list() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.own_products, Ok(vec![product("p1", "5")]));
        FakeGateway::script(&gateway.save_results, Err(backend_error()));

        let panel = signed_in(gateway);
        panel.refresh().await.expect("initial list");

        let result = panel.save_product(None, form("mug")).await;
        assert!(matches!(result, Err(MerchantError::Gateway(_))));
        assert_eq!(panel.products().len(), 1);
        assert_eq!(
            panel.message(),
            Some(PanelMessage {
                text: PRODUCT_SAVE_ERROR,
                kind: MessageKind::Error
            })
        );
    }

    #[tokio::test]
    async fn test_delete_refreshes_list() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.own_products, Ok(vec![product("p1", "5")]));
        FakeGateway::script(&gateway.delete_results, Ok(()));
        FakeGateway::script(&gateway.own_products, Ok(vec![]));

        let panel = signed_in(gateway);
        panel.refresh().await.expect("initial list");

        panel
            .delete_product(&ProductId::new("p1"))
            .await
            .expect("deleted");
        assert!(panel.products().is_empty());
        assert_eq!(panel.message().map(|m| m.text), Some(PRODUCT_DELETED));
    }
}
