//! Account commands: register, login, profile, seller application.

use std::path::PathBuf;

use squiirshop_client::api::{BusinessApplication, HttpGateway, ProfileUpdate, RegistrationForm};
use squiirshop_client::auth::AccountClient;
use squiirshop_client::credentials::FileCredentialStore;
use squiirshop_core::Email;

use super::read_upload;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// `squiir account register`
pub async fn register(
    gateway: HttpGateway,
    credentials: FileCredentialStore,
    name: &str,
    email: &str,
    password: &str,
    address: &str,
    phone: &str,
    avatar: Option<PathBuf>,
) -> CommandResult {
    let profile_image = avatar.as_deref().map(read_upload).transpose()?;

    let account = AccountClient::new(gateway, credentials);
    let message = account
        .register(RegistrationForm {
            name: name.to_owned(),
            email: Email::parse(email)?,
            password: password.to_owned(),
            address: address.to_owned(),
            phone: phone.to_owned(),
            profile_image,
        })
        .await?;

    println!("{message}");
    Ok(())
}

/// `squiir account login`
pub async fn login(
    gateway: HttpGateway,
    credentials: FileCredentialStore,
    email: &str,
    password: &str,
) -> CommandResult {
    let account = AccountClient::new(gateway, credentials);
    let user = account.login(email, password).await?;

    match user.name {
        Some(name) => println!("Signed in as {name}."),
        None => println!("Signed in."),
    }
    Ok(())
}

/// `squiir account logout`
pub fn logout(gateway: HttpGateway, credentials: FileCredentialStore) -> CommandResult {
    let account = AccountClient::new(gateway, credentials);
    account.logout()?;
    println!("Signed out.");
    Ok(())
}

/// `squiir account profile`
pub async fn profile(gateway: HttpGateway, credentials: FileCredentialStore) -> CommandResult {
    let account = AccountClient::new(gateway, credentials);
    let profile = account.profile().await?;

    println!("Name:    {}", profile.name);
    println!("Address: {}", profile.address);
    println!("Phone:   {}", profile.phone);
    if profile.business {
        println!("Seller account: active");
    }
    Ok(())
}

/// `squiir account update`
pub async fn update(
    gateway: HttpGateway,
    credentials: FileCredentialStore,
    name: &str,
    address: &str,
    phone: &str,
) -> CommandResult {
    let account = AccountClient::new(gateway, credentials);
    let profile = account
        .update_profile(&ProfileUpdate {
            name: name.to_owned(),
            address: address.to_owned(),
            phone: phone.to_owned(),
        })
        .await?;

    println!("Profile updated: {} / {} / {}", profile.name, profile.address, profile.phone);
    Ok(())
}

/// `squiir account start-business`
pub async fn start_business(
    gateway: HttpGateway,
    credentials: FileCredentialStore,
    name: &str,
    description: &str,
) -> CommandResult {
    let account = AccountClient::new(gateway, credentials);
    let message = account
        .start_business(&BusinessApplication {
            business_name: name.to_owned(),
            description: description.to_owned(),
        })
        .await?;

    if message.is_empty() {
        println!("Business created successfully!");
    } else {
        println!("{message}");
    }
    Ok(())
}
