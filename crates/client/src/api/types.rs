//! Wire types for the SquiirShop REST API.
//!
//! These structs mirror the backend's JSON shapes exactly; renames map the
//! backend's camelCase (and Mongo-style `_id`) onto Rust naming. Numeric
//! fields the backend is known to send loosely (price, quantity) coerce at
//! the deserialization boundary via the lenient adapters in
//! `squiirshop_core`, so a malformed field yields zero instead of failing
//! the whole payload.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use squiirshop_core::types::num;
use squiirshop_core::{Email, ProductId};

// =============================================================================
// Catalog & cart
// =============================================================================

/// The seller shown on a product card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seller {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Avatar URI.
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
}

/// A purchasable product as the backend reports it.
///
/// Read-only from the storefront's perspective; only the merchant panel
/// creates or edits products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque backend identifier.
    #[serde(rename = "_id")]
    pub id: ProductId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Description text.
    #[serde(default)]
    pub description: String,
    /// Unit price. Coerced to zero when the backend sends garbage.
    #[serde(default, deserialize_with = "num::lenient_decimal")]
    pub price: Decimal,
    /// Image URI.
    #[serde(default)]
    pub image: Option<String>,
    /// Owning seller.
    #[serde(default)]
    pub owner: Option<Seller>,
}

/// One cart entry: a product reference and a quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product in the cart.
    pub product: Product,
    /// How many units. Coerced to zero when the backend sends garbage.
    #[serde(default, deserialize_with = "num::lenient_quantity")]
    pub quantity: u32,
}

impl CartLine {
    /// `price * quantity` for this line. Malformed fields already coerced
    /// to zero, so the result is always a valid decimal.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

/// Body for `POST /process/addcart`.
#[derive(Debug, Clone, Serialize)]
pub struct AddToCartRequest<'a> {
    /// The product to add.
    #[serde(rename = "productId")]
    pub product_id: &'a ProductId,
}

/// Body for `POST /process/checkout`.
///
/// Sent together with the bearer header. The total is computed locally
/// from the held lines; the backend revalidates against its own cart.
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutRequest {
    /// The cart lines being purchased.
    #[serde(rename = "cartItems")]
    pub cart_items: Vec<CartLine>,
    /// Locally computed grand total.
    pub total: Decimal,
}

// =============================================================================
// Account
// =============================================================================

/// An uploaded file (avatar or product image) attached to a multipart form.
#[derive(Debug, Clone)]
pub struct Upload {
    /// Name reported in the multipart part.
    pub filename: String,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// Multipart body for `POST /process/register`.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    /// Display name.
    pub name: String,
    /// Validated email address.
    pub email: Email,
    /// Plain password; sent once over TLS, never stored locally.
    pub password: String,
    /// Postal address.
    pub address: String,
    /// Phone number.
    pub phone: String,
    /// Optional avatar upload.
    pub profile_image: Option<Upload>,
}

/// Body for `POST /process/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: Email,
    /// Account password.
    pub password: String,
}

/// Response from `POST /process/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for the new session.
    pub token: String,
    /// Summary of the logged-in user.
    #[serde(default)]
    pub user: UserSummary,
}

/// The user object returned alongside the login token.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserSummary {
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
}

/// Response from `GET /process/protected`.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Postal address.
    #[serde(default)]
    pub address: String,
    /// Phone number.
    #[serde(default)]
    pub phone: String,
    /// Whether the account has an approved seller business.
    #[serde(rename = "Business", default)]
    pub business: bool,
}

/// Body for `PUT /process/edit-profile`.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileUpdate {
    /// New display name.
    pub name: String,
    /// New postal address.
    pub address: String,
    /// New phone number.
    pub phone: String,
}

/// Body for `POST /business`.
#[derive(Debug, Clone, Serialize)]
pub struct BusinessApplication {
    /// Proposed business name.
    #[serde(rename = "businessName")]
    pub business_name: String,
    /// What the business sells.
    pub description: String,
}

// =============================================================================
// Merchant panel
// =============================================================================

/// Multipart body for creating or editing a product.
#[derive(Debug, Clone)]
pub struct ProductForm {
    /// Display name.
    pub name: String,
    /// Description text.
    pub description: String,
    /// Unit price.
    pub price: Decimal,
    /// Optional image upload; editing without one keeps the stored image.
    pub image: Option<Upload>,
}

/// One line of a seller order.
#[derive(Debug, Clone, Deserialize)]
pub struct SellerOrderItem {
    /// Name of the purchased product.
    #[serde(rename = "productName", default)]
    pub product_name: String,
    /// Units purchased.
    #[serde(default, deserialize_with = "num::lenient_quantity")]
    pub quantity: u32,
    /// Unit price at purchase time.
    #[serde(default, deserialize_with = "num::lenient_decimal")]
    pub price: Decimal,
}

/// An order placed against the seller's products.
#[derive(Debug, Clone, Deserialize)]
pub struct SellerOrder {
    /// Purchasing user's identifier.
    #[serde(rename = "userId", default)]
    pub user_id: String,
    /// Purchasing user's display name.
    #[serde(rename = "userName", default)]
    pub user_name: String,
    /// Purchased lines.
    #[serde(default)]
    pub items: Vec<SellerOrderItem>,
}

/// Envelope for `GET /process/seller-orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct SellerOrdersResponse {
    /// The seller's orders.
    #[serde(default)]
    pub orders: Vec<SellerOrder>,
}

// =============================================================================
// Misc
// =============================================================================

/// Body for `POST /process/contact`.
#[derive(Debug, Clone, Serialize)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: Email,
    /// Message body.
    pub message: String,
}

/// Generic `{message}` payload used by several endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    /// Human-readable confirmation or error text.
    #[serde(default)]
    pub message: String,
}
