//! Test doubles shared by the component tests.
//!
//! `FakeGateway` implements [`ApiGateway`](crate::api::ApiGateway) over
//! queues of scripted results, with call counters and optional gates so a
//! test can hold a request in flight while it pokes the component from the
//! outside (duplicate-submit and stale-response scenarios).

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use rust_decimal::Decimal;
use squiirshop_core::{BearerToken, ProductId};
use tokio::sync::Notify;

use crate::api::{
    ApiGateway, BusinessApplication, CartLine, CheckoutRequest, ContactForm, GatewayError,
    LoginRequest, LoginResponse, Product, ProductForm, ProfileUpdate, RegistrationForm,
    SellerOrder, UserProfile,
};

/// A scripted backend failure.
pub(crate) fn backend_error() -> GatewayError {
    GatewayError::Api {
        status: 500,
        message: "scripted failure".to_owned(),
    }
}

/// Build a product with the given id and price string.
pub(crate) fn product(id: &str, price: &str) -> Product {
    Product {
        id: ProductId::new(id),
        name: format!("product {id}"),
        description: String::new(),
        price: price.parse().unwrap_or(Decimal::ZERO),
        image: None,
        owner: None,
    }
}

/// Build a cart line with the given id, price string, and quantity.
pub(crate) fn cart_line(id: &str, price: &str, quantity: u32) -> CartLine {
    CartLine {
        product: product(id, price),
        quantity,
    }
}

type ResultQueue<T> = Mutex<VecDeque<Result<T, GatewayError>>>;

/// Scripted [`ApiGateway`] implementation.
#[derive(Default)]
pub(crate) struct FakeGateway {
    pub products: ResultQueue<Vec<Product>>,
    pub carts: ResultQueue<Vec<CartLine>>,
    pub add_results: ResultQueue<()>,
    pub remove_results: ResultQueue<()>,
    pub checkout_results: ResultQueue<()>,
    pub login_results: ResultQueue<LoginResponse>,
    pub register_results: ResultQueue<String>,
    pub profiles: ResultQueue<UserProfile>,
    pub own_products: ResultQueue<Vec<Product>>,
    pub save_results: ResultQueue<()>,
    pub delete_results: ResultQueue<()>,
    pub orders: ResultQueue<Vec<SellerOrder>>,

    pub list_calls: AtomicUsize,
    pub add_calls: AtomicUsize,
    pub remove_calls: AtomicUsize,
    pub checkout_calls: AtomicUsize,

    /// When set, `list_products` waits here before completing.
    pub list_gate: Option<std::sync::Arc<Notify>>,
    /// When set, `checkout` waits here before completing.
    pub checkout_gate: Option<std::sync::Arc<Notify>>,

    /// Last checkout body, for payload assertions.
    pub last_checkout: Mutex<Option<CheckoutRequest>>,
    /// Last bearer header attached to checkout.
    pub last_checkout_auth: Mutex<Option<String>>,
}

impl FakeGateway {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn pop<T>(queue: &ResultQueue<T>, op: &str) -> Result<T, GatewayError> {
        queue
            .lock()
            .expect("queue lock")
            .pop_front()
            .unwrap_or_else(|| panic!("no scripted result for {op}"))
    }

    pub(crate) fn script<T>(queue: &ResultQueue<T>, result: Result<T, GatewayError>) {
        queue.lock().expect("queue lock").push_back(result);
    }
}

impl ApiGateway for FakeGateway {
    async fn list_products(&self) -> Result<Vec<Product>, GatewayError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.list_gate {
            gate.notified().await;
        }
        Self::pop(&self.products, "list_products")
    }

    async fn add_to_cart(&self, _product_id: &ProductId) -> Result<(), GatewayError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.add_results, "add_to_cart")
    }

    async fn fetch_cart(&self) -> Result<Vec<CartLine>, GatewayError> {
        Self::pop(&self.carts, "fetch_cart")
    }

    async fn remove_cart_item(&self, _product_id: &ProductId) -> Result<(), GatewayError> {
        self.remove_calls.fetch_add(1, Ordering::SeqCst);
        Self::pop(&self.remove_results, "remove_cart_item")
    }

    async fn checkout(
        &self,
        order: &CheckoutRequest,
        token: &BearerToken,
    ) -> Result<(), GatewayError> {
        self.checkout_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_checkout.lock().expect("lock") = Some(order.clone());
        *self.last_checkout_auth.lock().expect("lock") = Some(token.authorization_value());
        if let Some(gate) = &self.checkout_gate {
            gate.notified().await;
        }
        Self::pop(&self.checkout_results, "checkout")
    }

    async fn register(&self, _form: RegistrationForm) -> Result<String, GatewayError> {
        Self::pop(&self.register_results, "register")
    }

    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse, GatewayError> {
        Self::pop(&self.login_results, "login")
    }

    async fn fetch_profile(&self, _token: &BearerToken) -> Result<UserProfile, GatewayError> {
        Self::pop(&self.profiles, "fetch_profile")
    }

    async fn update_profile(
        &self,
        _update: &ProfileUpdate,
        _token: &BearerToken,
    ) -> Result<UserProfile, GatewayError> {
        Self::pop(&self.profiles, "update_profile")
    }

    async fn start_business(
        &self,
        _application: &BusinessApplication,
        _token: &BearerToken,
    ) -> Result<String, GatewayError> {
        Self::pop(&self.register_results, "start_business")
    }

    async fn list_own_products(&self, _token: &BearerToken) -> Result<Vec<Product>, GatewayError> {
        Self::pop(&self.own_products, "list_own_products")
    }

    async fn create_product(
        &self,
        _form: ProductForm,
        _token: &BearerToken,
    ) -> Result<(), GatewayError> {
        Self::pop(&self.save_results, "create_product")
    }

    async fn update_product(
        &self,
        _product_id: &ProductId,
        _form: ProductForm,
        _token: &BearerToken,
    ) -> Result<(), GatewayError> {
        Self::pop(&self.save_results, "update_product")
    }

    async fn delete_product(
        &self,
        _product_id: &ProductId,
        _token: &BearerToken,
    ) -> Result<(), GatewayError> {
        Self::pop(&self.delete_results, "delete_product")
    }

    async fn seller_orders(&self, _token: &BearerToken) -> Result<Vec<SellerOrder>, GatewayError> {
        Self::pop(&self.orders, "seller_orders")
    }

    async fn send_contact(&self, _form: &ContactForm) -> Result<(), GatewayError> {
        Ok(())
    }
}
