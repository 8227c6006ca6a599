//! Catalog component: product browsing and add-to-cart.
//!
//! A leaf component. It fetches the public product list once per mount and
//! issues fire-and-forget add-to-cart requests; it never tracks cart state
//! and never re-fetches the list as a result of an add.
//!
//! State machine: `Loading -> Ready | Failed`. A load failure is terminal
//! for that mount cycle (the only recovery is a fresh [`load`]); `Ready`
//! additionally carries at most one transient notice - success or error,
//! never both - that toggles freely without touching the outer state.
//!
//! [`load`]: CatalogClient::load

use std::sync::Mutex;

use tracing::debug;

use crate::api::{ApiGateway, Product};
use crate::mount::Mount;
use squiirshop_core::ProductId;

/// Fixed message shown when the catalog fetch fails.
pub const CATALOG_LOAD_ERROR: &str = "Failed to fetch products. Please try again later.";

/// Transient notice after a successful add.
pub const ADD_SUCCESS_NOTICE: &str = "Product added to cart successfully!";

/// Transient notice after a failed add.
pub const ADD_ERROR_NOTICE: &str = "Error adding to cart. Please try again.";

/// The single notice slot shown above the product grid.
///
/// Holding the two variants in one `Option` slot makes success and error
/// mutually exclusive by construction: setting one replaces the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The last add-to-cart succeeded.
    Success(&'static str),
    /// The last add-to-cart failed.
    Error(&'static str),
}

/// Observable catalog state.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogState {
    /// Initial fetch in flight.
    Loading,
    /// Product list held locally; notice slot for add-to-cart feedback.
    Ready {
        /// The server's product list as of the last load.
        products: Vec<Product>,
        /// Transient add-to-cart feedback, if any.
        notice: Option<Notice>,
    },
    /// The load failed; terminal until the next mount.
    Failed {
        /// Fixed user-facing message.
        message: &'static str,
    },
}

/// The catalog component.
///
/// Generic over the gateway so tests can drive it with a fake. All state
/// mutation happens in this component's own completion handlers; callers
/// observe via [`snapshot`](Self::snapshot).
pub struct CatalogClient<G> {
    gateway: G,
    state: Mutex<CatalogState>,
    mount: Mount,
}

impl<G: ApiGateway> CatalogClient<G> {
    /// Create a catalog component in the `Loading` state.
    #[must_use]
    pub fn new(gateway: G) -> Self {
        Self {
            gateway,
            state: Mutex::new(CatalogState::Loading),
            mount: Mount::new(),
        }
    }

    /// A clone of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> CatalogState {
        self.state
            .lock()
            .map_or(CatalogState::Loading, |s| s.clone())
    }

    /// Fetch the product list; the on-mount action.
    ///
    /// Starts a fresh mount cycle: any previous state (including a terminal
    /// `Failed`) is replaced by `Loading`, and responses still in flight
    /// from earlier cycles are invalidated. On success the held list is
    /// replaced wholesale; on failure the component shows
    /// [`CATALOG_LOAD_ERROR`] and discards any partial data.
    pub async fn load(&self) {
        let generation = self.mount.bump();
        self.set_state(CatalogState::Loading);

        let result = self.gateway.list_products().await;

        if !self.mount.is_current(generation) {
            debug!("Dropping stale catalog response");
            return;
        }

        match result {
            Ok(products) => {
                debug!(count = products.len(), "Catalog loaded");
                self.set_state(CatalogState::Ready {
                    products,
                    notice: None,
                });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog load failed");
                self.set_state(CatalogState::Failed {
                    message: CATALOG_LOAD_ERROR,
                });
            }
        }
    }

    /// Request that a product be added to the server-side cart.
    ///
    /// Fire-and-forget with respect to the held list: the catalog is never
    /// re-fetched and no local cart state exists here. The outcome lands in
    /// the notice slot - success and error replace each other. An empty
    /// product id is a caller bug and is rejected locally without a network
    /// call.
    pub async fn add_to_cart(&self, product_id: &ProductId) {
        if product_id.is_empty() {
            self.set_notice(Notice::Error(ADD_ERROR_NOTICE));
            return;
        }

        let generation = self.mount.current();
        let result = self.gateway.add_to_cart(product_id).await;

        if !self.mount.is_current(generation) {
            debug!("Dropping stale add-to-cart response");
            return;
        }

        match result {
            Ok(()) => self.set_notice(Notice::Success(ADD_SUCCESS_NOTICE)),
            Err(e) => {
                tracing::warn!(error = %e, product_id = %product_id, "Add to cart failed");
                self.set_notice(Notice::Error(ADD_ERROR_NOTICE));
            }
        }
    }

    /// Invalidate in-flight requests; call on component teardown.
    pub fn detach(&self) {
        self.mount.bump();
    }

    fn set_state(&self, next: CatalogState) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }

    /// Replace the notice slot; a no-op unless the component is `Ready`.
    fn set_notice(&self, notice: Notice) {
        if let Ok(mut state) = self.state.lock()
            && let CatalogState::Ready { notice: slot, .. } = &mut *state
        {
            *slot = Some(notice);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeGateway, backend_error, product};
    use std::sync::Arc;
    use tokio::sync::Notify;

    fn ready_products(state: &CatalogState) -> &[Product] {
        match state {
            CatalogState::Ready { products, .. } => products,
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    fn ready_notice(state: &CatalogState) -> Option<&Notice> {
        match state {
            CatalogState::Ready { notice, .. } => notice.as_ref(),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_replaces_list_on_success() {
        let gateway = FakeGateway::new();
        FakeGateway::script(
            &gateway.products,
            Ok(vec![product("p1", "5.50"), product("p2", "3")]),
        );

        let catalog = CatalogClient::new(gateway);
        assert_eq!(catalog.snapshot(), CatalogState::Loading);

        catalog.load().await;
        let state = catalog.snapshot();
        assert_eq!(ready_products(&state).len(), 2);
        assert!(ready_notice(&state).is_none());
    }

    #[tokio::test]
    async fn test_load_failure_is_terminal_with_fixed_message() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.products, Err(backend_error()));

        let catalog = CatalogClient::new(gateway);
        catalog.load().await;

        assert_eq!(
            catalog.snapshot(),
            CatalogState::Failed {
                message: CATALOG_LOAD_ERROR
            }
        );
    }

    #[tokio::test]
    async fn test_remount_after_failure_replaces_error_entirely() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.products, Err(backend_error()));
        FakeGateway::script(&gateway.products, Ok(vec![product("p1", "1")]));

        let catalog = CatalogClient::new(gateway);
        catalog.load().await;
        assert!(matches!(catalog.snapshot(), CatalogState::Failed { .. }));

        // Fresh mount: the fetch runs again and a success wipes the error.
        catalog.load().await;
        let state = catalog.snapshot();
        assert_eq!(ready_products(&state).len(), 1);
        assert!(ready_notice(&state).is_none());
    }

    #[tokio::test]
    async fn test_add_notices_are_mutually_exclusive() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.products, Ok(vec![product("p1", "1")]));
        FakeGateway::script(&gateway.add_results, Err(backend_error()));
        FakeGateway::script(&gateway.add_results, Ok(()));

        let catalog = CatalogClient::new(gateway);
        catalog.load().await;

        catalog.add_to_cart(&ProductId::new("p1")).await;
        assert_eq!(
            ready_notice(&catalog.snapshot()),
            Some(&Notice::Error(ADD_ERROR_NOTICE))
        );

        // Success replaces the failure notice outright.
        catalog.add_to_cart(&ProductId::new("p1")).await;
        assert_eq!(
            ready_notice(&catalog.snapshot()),
            Some(&Notice::Success(ADD_SUCCESS_NOTICE))
        );
    }

    #[tokio::test]
    async fn test_add_does_not_refetch_or_touch_list() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.products, Ok(vec![product("p1", "1")]));
        FakeGateway::script(&gateway.add_results, Ok(()));

        let catalog = CatalogClient::new(gateway);
        catalog.load().await;
        catalog.add_to_cart(&ProductId::new("p1")).await;

        let state = catalog.snapshot();
        assert_eq!(ready_products(&state).len(), 1);
        assert_eq!(catalog.gateway.list_calls.load(std::sync::atomic::Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_product_id_rejected_without_network() {
        let gateway = FakeGateway::new();
        FakeGateway::script(&gateway.products, Ok(vec![]));

        let catalog = CatalogClient::new(gateway);
        catalog.load().await;
        catalog.add_to_cart(&ProductId::new("")).await;

        assert_eq!(
            catalog.gateway.add_calls.load(std::sync::atomic::Ordering::SeqCst),
            0
        );
        assert_eq!(
            ready_notice(&catalog.snapshot()),
            Some(&Notice::Error(ADD_ERROR_NOTICE))
        );
    }

    #[tokio::test]
    async fn test_detach_drops_late_load_response() {
        let gate = Arc::new(Notify::new());
        let mut gateway = FakeGateway::new();
        gateway.list_gate = Some(Arc::clone(&gate));
        FakeGateway::script(&gateway.products, Ok(vec![product("p1", "1")]));

        let catalog = CatalogClient::new(gateway);

        tokio::join!(catalog.load(), async {
            // Runs once load() is parked on the gate.
            catalog.detach();
            gate.notify_one();
        });

        // The response arrived after teardown, so it must not apply.
        assert_eq!(catalog.snapshot(), CatalogState::Loading);
    }
}
