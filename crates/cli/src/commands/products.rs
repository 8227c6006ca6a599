//! Catalog browsing commands.

use squiirshop_client::api::HttpGateway;
use squiirshop_client::catalog::{CatalogClient, CatalogState, Notice};
use squiirshop_core::ProductId;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// `squiir products list`
pub async fn list(gateway: HttpGateway) -> CommandResult {
    let catalog = CatalogClient::new(gateway);
    catalog.load().await;

    match catalog.snapshot() {
        CatalogState::Ready { products, .. } => {
            if products.is_empty() {
                println!("No products available.");
                return Ok(());
            }
            for product in &products {
                let owner = product
                    .owner
                    .as_ref()
                    .map_or("unknown seller", |o| o.name.as_str());
                println!(
                    "{}  {}  ${}  (by {owner})",
                    product.id, product.name, product.price
                );
                if !product.description.is_empty() {
                    println!("    {}", product.description);
                }
            }
            Ok(())
        }
        CatalogState::Failed { message } => Err(message.into()),
        CatalogState::Loading => unreachable!("load() always resolves the state"),
    }
}

/// `squiir products add <PRODUCT_ID>`
pub async fn add(gateway: HttpGateway, product_id: &str) -> CommandResult {
    let catalog = CatalogClient::new(gateway);
    catalog.load().await;

    if let CatalogState::Failed { message } = catalog.snapshot() {
        return Err(message.into());
    }

    catalog.add_to_cart(&ProductId::new(product_id)).await;

    match catalog.snapshot() {
        CatalogState::Ready {
            notice: Some(Notice::Success(text)),
            ..
        } => {
            println!("{text}");
            Ok(())
        }
        CatalogState::Ready {
            notice: Some(Notice::Error(text)),
            ..
        } => Err(text.into()),
        _ => Err("Add to cart produced no outcome.".into()),
    }
}
