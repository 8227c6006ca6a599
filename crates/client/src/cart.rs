//! Cart component: contents, removal, totals, and the checkout hand-off.
//!
//! Holds a transient, read-mostly copy of the server-side cart, fetched
//! fresh on mount. Local mutation happens in exactly one place: after a
//! *confirmed* server delete, the matching lines are filtered out. Checkout
//! never mutates the cart locally; on success the view transitions away.
//!
//! State machine: `Loading -> Ready -> CheckedOut | Failed`, with a busy
//! flag making checkout non-reentrant: while a submission is pending, a
//! second invocation is a no-op and issues no request.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use rust_decimal::Decimal;
use tracing::debug;

use crate::api::{ApiGateway, CartLine, CheckoutRequest};
use crate::credentials::CredentialStore;
use crate::mount::Mount;
use squiirshop_core::ProductId;

/// Fixed message shown when the cart fetch fails.
pub const CART_LOAD_ERROR: &str = "Failed to load cart data. Please try again.";

/// Blocking alert when a remove request fails.
pub const REMOVE_ERROR_ALERT: &str = "Failed to remove item. Please try again.";

/// Blocking alert when checkout is attempted without a session.
pub const LOGIN_REQUIRED_ALERT: &str = "You need to be logged in to checkout.";

/// Confirmation shown before navigating to the order confirmation view.
pub const CHECKOUT_SUCCESS_ALERT: &str = "Checkout successful!";

/// Blocking alert when the checkout request fails.
pub const CHECKOUT_ERROR_ALERT: &str = "Failed to complete checkout. Please try again.";

/// Observable cart state.
#[derive(Debug, Clone, PartialEq)]
pub enum CartState {
    /// Initial fetch in flight.
    Loading,
    /// Cart contents held locally.
    Ready {
        /// The cart lines as of the last load, minus confirmed removals.
        lines: Vec<CartLine>,
    },
    /// The load failed; terminal until the next mount.
    Failed {
        /// Fixed user-facing message.
        message: &'static str,
    },
    /// Checkout succeeded; the view has navigated away.
    CheckedOut,
}

/// Result of a removal attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum RemoveOutcome {
    /// Server confirmed; matching lines filtered from the local copy.
    Removed,
    /// Request failed; local state untouched.
    Failed {
        /// Blocking alert text.
        alert: &'static str,
    },
}

/// Result of a checkout attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum CheckoutOutcome {
    /// Order submitted; the cart is now `CheckedOut`.
    Completed {
        /// Confirmation text.
        notice: &'static str,
    },
    /// No credential in the store; nothing was sent.
    NotSignedIn {
        /// Blocking alert text.
        alert: &'static str,
    },
    /// A submission is already pending; this invocation was a no-op.
    AlreadyInProgress,
    /// The cart is not in a submittable state (still loading, failed, or
    /// already checked out).
    NotReady,
    /// Request failed; busy flag cleared, cart untouched, retry is safe.
    Failed {
        /// Blocking alert text.
        alert: &'static str,
    },
}

/// Sum of `price * quantity` over a line sequence.
///
/// Pure and total: malformed price/quantity fields were already coerced to
/// zero at the wire boundary, so every line contributes a valid decimal and
/// the empty sequence sums to zero.
#[must_use]
pub fn compute_total(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_total).sum()
}

/// The cart component.
///
/// Generic over the gateway and the credential store; checkout reads the
/// bearer token from the injected store, never from ambient state.
pub struct CartClient<G, S> {
    gateway: G,
    credentials: S,
    state: Mutex<CartState>,
    checking_out: AtomicBool,
    mount: Mount,
}

impl<G: ApiGateway, S: CredentialStore> CartClient<G, S> {
    /// Create a cart component in the `Loading` state.
    #[must_use]
    pub fn new(gateway: G, credentials: S) -> Self {
        Self {
            gateway,
            credentials,
            state: Mutex::new(CartState::Loading),
            checking_out: AtomicBool::new(false),
            mount: Mount::new(),
        }
    }

    /// A clone of the current state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> CartState {
        self.state.lock().map_or(CartState::Loading, |s| s.clone())
    }

    /// The held lines, empty unless `Ready`.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine> {
        match self.snapshot() {
            CartState::Ready { lines } => lines,
            _ => Vec::new(),
        }
    }

    /// Grand total over the held lines; zero on an empty or unready cart.
    #[must_use]
    pub fn total(&self) -> Decimal {
        compute_total(&self.lines())
    }

    /// Whether a checkout submission is pending.
    #[must_use]
    pub fn is_checking_out(&self) -> bool {
        self.checking_out.load(Ordering::Acquire)
    }

    /// Fetch the cart contents; the on-mount action.
    ///
    /// Same mount-cycle policy as the catalog: replaces any prior state
    /// (including a terminal `Failed`) and invalidates in-flight responses
    /// from earlier cycles.
    pub async fn load(&self) {
        let generation = self.mount.bump();
        self.set_state(CartState::Loading);

        let result = self.gateway.fetch_cart().await;

        if !self.mount.is_current(generation) {
            debug!("Dropping stale cart response");
            return;
        }

        match result {
            Ok(lines) => {
                debug!(count = lines.len(), "Cart loaded");
                self.set_state(CartState::Ready { lines });
            }
            Err(e) => {
                tracing::warn!(error = %e, "Cart load failed");
                self.set_state(CartState::Failed {
                    message: CART_LOAD_ERROR,
                });
            }
        }
    }

    /// Delete a product from the cart.
    ///
    /// No optimistic mutation: the local copy changes only after the server
    /// confirms, and then by id filter (resilient to reordering, idempotent
    /// for ids no longer present). On failure the local state is untouched.
    pub async fn remove_item(&self, product_id: &ProductId) -> RemoveOutcome {
        let generation = self.mount.current();
        let result = self.gateway.remove_cart_item(product_id).await;

        match result {
            Ok(()) => {
                if self.mount.is_current(generation)
                    && let Ok(mut state) = self.state.lock()
                    && let CartState::Ready { lines } = &mut *state
                {
                    lines.retain(|line| line.product.id != *product_id);
                }
                RemoveOutcome::Removed
            }
            Err(e) => {
                tracing::warn!(error = %e, product_id = %product_id, "Remove from cart failed");
                RemoveOutcome::Failed {
                    alert: REMOVE_ERROR_ALERT,
                }
            }
        }
    }

    /// Submit the cart as an order.
    ///
    /// Preconditions, checked locally before any network traffic: no other
    /// submission pending (busy flag) and a credential present in the
    /// store. The request carries the held lines, the locally computed
    /// total, and the bearer header. On failure the busy flag clears and
    /// the cart is untouched, so a retry is safe.
    pub async fn checkout(&self) -> CheckoutOutcome {
        // The busy flag is the non-reentrancy guard: first caller wins.
        if self
            .checking_out
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return CheckoutOutcome::AlreadyInProgress;
        }

        let CartState::Ready { lines } = self.snapshot() else {
            self.checking_out.store(false, Ordering::Release);
            return CheckoutOutcome::NotReady;
        };

        let Some(token) = self.credentials.get() else {
            self.checking_out.store(false, Ordering::Release);
            return CheckoutOutcome::NotSignedIn {
                alert: LOGIN_REQUIRED_ALERT,
            };
        };

        let order = CheckoutRequest {
            total: compute_total(&lines),
            cart_items: lines,
        };

        let generation = self.mount.current();
        let result = self.gateway.checkout(&order, &token).await;
        self.checking_out.store(false, Ordering::Release);

        match result {
            Ok(()) => {
                debug!(total = %order.total, "Checkout completed");
                if self.mount.is_current(generation) {
                    self.set_state(CartState::CheckedOut);
                }
                CheckoutOutcome::Completed {
                    notice: CHECKOUT_SUCCESS_ALERT,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Checkout failed");
                CheckoutOutcome::Failed {
                    alert: CHECKOUT_ERROR_ALERT,
                }
            }
        }
    }

    /// Invalidate in-flight requests; call on component teardown.
    pub fn detach(&self) {
        self.mount.bump();
    }

    fn set_state(&self, next: CartState) {
        if let Ok(mut state) = self.state.lock() {
            *state = next;
        }
    }
}
