//! Cart and checkout commands.

use squiirshop_client::api::HttpGateway;
use squiirshop_client::cart::{CartClient, CartState, CheckoutOutcome, RemoveOutcome};
use squiirshop_client::credentials::FileCredentialStore;
use squiirshop_core::ProductId;

type CommandResult = Result<(), Box<dyn std::error::Error>>;
type Cart = CartClient<HttpGateway, FileCredentialStore>;

async fn load_cart(gateway: HttpGateway, credentials: FileCredentialStore) -> Result<Cart, Box<dyn std::error::Error>> {
    let cart = CartClient::new(gateway, credentials);
    cart.load().await;

    if let CartState::Failed { message } = cart.snapshot() {
        return Err(message.into());
    }
    Ok(cart)
}

/// `squiir cart show`
pub async fn show(gateway: HttpGateway, credentials: FileCredentialStore) -> CommandResult {
    let cart = load_cart(gateway, credentials).await?;
    let lines = cart.lines();

    if lines.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    for line in &lines {
        println!(
            "{}  {}  ${} x {} = ${}",
            line.product.id,
            line.product.name,
            line.product.price,
            line.quantity,
            line.line_total()
        );
    }
    println!("Grand total: ${}", cart.total());
    Ok(())
}

/// `squiir cart remove <PRODUCT_ID>`
pub async fn remove(
    gateway: HttpGateway,
    credentials: FileCredentialStore,
    product_id: &str,
) -> CommandResult {
    let cart = load_cart(gateway, credentials).await?;

    match cart.remove_item(&ProductId::new(product_id)).await {
        RemoveOutcome::Removed => {
            println!("Removed {product_id}. New total: ${}", cart.total());
            Ok(())
        }
        RemoveOutcome::Failed { alert } => Err(alert.into()),
    }
}

/// `squiir cart checkout`
pub async fn checkout(gateway: HttpGateway, credentials: FileCredentialStore) -> CommandResult {
    let cart = load_cart(gateway, credentials).await?;

    match cart.checkout().await {
        CheckoutOutcome::Completed { notice } => {
            println!("{notice}");
            Ok(())
        }
        CheckoutOutcome::NotSignedIn { alert } | CheckoutOutcome::Failed { alert } => {
            Err(alert.into())
        }
        CheckoutOutcome::AlreadyInProgress | CheckoutOutcome::NotReady => {
            Err("Checkout is not available right now.".into())
        }
    }
}
