//! Command implementations, one module per subcommand group.

pub mod account;
pub mod cart;
pub mod contact;
pub mod manage;
pub mod products;

use std::path::Path;

use squiirshop_client::api::Upload;

/// Read a file into a multipart upload, using the file name as the part name.
pub fn read_upload(path: &Path) -> Result<Upload, Box<dyn std::error::Error>> {
    let bytes = std::fs::read(path)?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload")
        .to_owned();
    Ok(Upload { filename, bytes })
}
