//! Seller panel commands.

use std::path::PathBuf;

use rust_decimal::Decimal;
use squiirshop_client::api::{HttpGateway, ProductForm};
use squiirshop_client::credentials::FileCredentialStore;
use squiirshop_client::merchant::MerchantClient;
use squiirshop_core::ProductId;

use super::read_upload;

type CommandResult = Result<(), Box<dyn std::error::Error>>;
type Panel = MerchantClient<HttpGateway, FileCredentialStore>;

fn panel(gateway: HttpGateway, credentials: FileCredentialStore) -> Panel {
    MerchantClient::new(gateway, credentials)
}

fn print_message(panel: &Panel) {
    if let Some(message) = panel.message() {
        println!("{}", message.text);
    }
}

/// `squiir manage list`
pub async fn list(gateway: HttpGateway, credentials: FileCredentialStore) -> CommandResult {
    let panel = panel(gateway, credentials);
    panel.refresh().await?;

    let products = panel.products();
    if products.is_empty() {
        println!("You have no products yet.");
        return Ok(());
    }
    for product in &products {
        println!("{}  {}  ${}", product.id, product.name, product.price);
    }
    Ok(())
}

/// `squiir manage add` / `squiir manage edit <PRODUCT_ID>`
pub async fn save(
    gateway: HttpGateway,
    credentials: FileCredentialStore,
    existing: Option<String>,
    name: &str,
    description: &str,
    price: Decimal,
    image: Option<PathBuf>,
) -> CommandResult {
    let image = image.as_deref().map(read_upload).transpose()?;
    let form = ProductForm {
        name: name.to_owned(),
        description: description.to_owned(),
        price,
        image,
    };

    let panel = panel(gateway, credentials);
    let existing_id = existing.map(ProductId::new);
    panel.save_product(existing_id.as_ref(), form).await?;

    print_message(&panel);
    Ok(())
}

/// `squiir manage delete <PRODUCT_ID>`
pub async fn delete(
    gateway: HttpGateway,
    credentials: FileCredentialStore,
    product_id: &str,
) -> CommandResult {
    let panel = panel(gateway, credentials);
    panel.delete_product(&ProductId::new(product_id)).await?;

    print_message(&panel);
    Ok(())
}

/// `squiir manage orders`
pub async fn orders(gateway: HttpGateway, credentials: FileCredentialStore) -> CommandResult {
    let panel = panel(gateway, credentials);
    let orders = panel.orders().await?;

    if orders.is_empty() {
        println!("No orders found for your products.");
        return Ok(());
    }

    for order in &orders {
        println!("Order from {} ({})", order.user_name, order.user_id);
        for item in &order.items {
            println!("  {} x {} @ ${}", item.product_name, item.quantity, item.price);
        }
    }
    Ok(())
}
