//! Contact form command.

use squiirshop_client::api::{ContactForm, HttpGateway};
use squiirshop_client::contact::ContactClient;
use squiirshop_core::Email;

/// `squiir contact`
pub async fn send(
    gateway: HttpGateway,
    name: &str,
    email: &str,
    message: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let contact = ContactClient::new(gateway);
    contact
        .send(&ContactForm {
            name: name.to_owned(),
            email: Email::parse(email)?,
            message: message.to_owned(),
        })
        .await?;

    println!("Message sent!");
    Ok(())
}
