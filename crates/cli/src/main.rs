//! SquiirShop CLI - command-line storefront.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog and add to the cart
//! squiir products list
//! squiir products add <PRODUCT_ID>
//!
//! # Cart and checkout
//! squiir cart show
//! squiir cart remove <PRODUCT_ID>
//! squiir cart checkout
//!
//! # Account
//! squiir account login -e you@example.com -p <password>
//! squiir account profile
//! squiir account logout
//!
//! # Seller panel
//! squiir manage list
//! squiir manage add --name "Mug" --description "A mug" --price 5.50
//! squiir manage orders
//! ```
//!
//! # Environment Variables
//!
//! - `SQUIIR_API_BASE` - Backend base URL (default: production backend)
//! - `SQUIIR_TOKEN_FILE` - Where the login token is persisted

#![cfg_attr(not(test), forbid(unsafe_code))]
// A storefront CLI talks to the user on stdout.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use squiirshop_client::api::HttpGateway;
use squiirshop_client::config::ClientConfig;
use squiirshop_client::credentials::FileCredentialStore;

mod commands;

#[derive(Parser)]
#[command(name = "squiir")]
#[command(author, version, about = "SquiirShop command-line storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Inspect and submit the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the signed-in account
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Seller product management
    Manage {
        #[command(subcommand)]
        action: ManageAction,
    },
    /// Send a message to the shop
    Contact {
        /// Your name
        #[arg(short, long)]
        name: String,
        /// Your email address
        #[arg(short, long)]
        email: String,
        /// Message body
        #[arg(short, long)]
        message: String,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List the catalog
    List,
    /// Add a product to the cart
    Add {
        /// Product identifier
        product_id: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show cart contents and total
    Show,
    /// Remove a product from the cart
    Remove {
        /// Product identifier
        product_id: String,
    },
    /// Submit the cart as an order (requires login)
    Checkout,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Create an account
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
        /// Postal address
        #[arg(short, long)]
        address: String,
        /// Phone number
        #[arg(long)]
        phone: String,
        /// Path to an avatar image
        #[arg(long)]
        avatar: Option<std::path::PathBuf>,
    },
    /// Sign in and persist the session token
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Drop the persisted session token
    Logout,
    /// Show the signed-in profile
    Profile,
    /// Update profile fields
    Update {
        /// New display name
        #[arg(short, long)]
        name: String,
        /// New postal address
        #[arg(short, long)]
        address: String,
        /// New phone number
        #[arg(long)]
        phone: String,
    },
    /// Apply to open a seller business
    StartBusiness {
        /// Business name
        #[arg(short, long)]
        name: String,
        /// What the business sells
        #[arg(short, long)]
        description: String,
    },
}

#[derive(Subcommand)]
enum ManageAction {
    /// List your products
    List,
    /// Create a product
    Add {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Description text
        #[arg(short, long)]
        description: String,
        /// Unit price
        #[arg(short, long)]
        price: rust_decimal::Decimal,
        /// Path to a product image
        #[arg(long)]
        image: Option<std::path::PathBuf>,
    },
    /// Edit an existing product
    Edit {
        /// Product identifier
        product_id: String,
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Description text
        #[arg(short, long)]
        description: String,
        /// Unit price
        #[arg(short, long)]
        price: rust_decimal::Decimal,
        /// Path to a replacement product image
        #[arg(long)]
        image: Option<std::path::PathBuf>,
    },
    /// Delete a product
    Delete {
        /// Product identifier
        product_id: String,
    },
    /// List orders placed against your products
    Orders,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ClientConfig::from_env()?;
    let gateway = HttpGateway::new(&config)?;
    let credentials = FileCredentialStore::new(&config.token_file);

    match cli.command {
        Commands::Products { action } => match action {
            ProductsAction::List => commands::products::list(gateway).await?,
            ProductsAction::Add { product_id } => {
                commands::products::add(gateway, &product_id).await?;
            }
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(gateway, credentials).await?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(gateway, credentials, &product_id).await?;
            }
            CartAction::Checkout => commands::cart::checkout(gateway, credentials).await?,
        },
        Commands::Account { action } => match action {
            AccountAction::Register {
                name,
                email,
                password,
                address,
                phone,
                avatar,
            } => {
                commands::account::register(
                    gateway,
                    credentials,
                    &name,
                    &email,
                    &password,
                    &address,
                    &phone,
                    avatar,
                )
                .await?;
            }
            AccountAction::Login { email, password } => {
                commands::account::login(gateway, credentials, &email, &password).await?;
            }
            AccountAction::Logout => commands::account::logout(gateway, credentials)?,
            AccountAction::Profile => commands::account::profile(gateway, credentials).await?,
            AccountAction::Update {
                name,
                address,
                phone,
            } => {
                commands::account::update(gateway, credentials, &name, &address, &phone).await?;
            }
            AccountAction::StartBusiness { name, description } => {
                commands::account::start_business(gateway, credentials, &name, &description)
                    .await?;
            }
        },
        Commands::Manage { action } => match action {
            ManageAction::List => commands::manage::list(gateway, credentials).await?,
            ManageAction::Add {
                name,
                description,
                price,
                image,
            } => {
                commands::manage::save(
                    gateway,
                    credentials,
                    None,
                    &name,
                    &description,
                    price,
                    image,
                )
                .await?;
            }
            ManageAction::Edit {
                product_id,
                name,
                description,
                price,
                image,
            } => {
                commands::manage::save(
                    gateway,
                    credentials,
                    Some(product_id),
                    &name,
                    &description,
                    price,
                    image,
                )
                .await?;
            }
            ManageAction::Delete { product_id } => {
                commands::manage::delete(gateway, credentials, &product_id).await?;
            }
            ManageAction::Orders => commands::manage::orders(gateway, credentials).await?,
        },
        Commands::Contact {
            name,
            email,
            message,
        } => commands::contact::send(gateway, &name, &email, &message).await?,
    }

    Ok(())
}
