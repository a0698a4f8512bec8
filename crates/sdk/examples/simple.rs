//! Simple SDK Example
//!
//! Demonstrates basic usage of the FAT SDK against a local daemon.
//!
//! # Usage
//!
//! 1. Start `fatd` (listens on http://localhost:8078 by default)
//!
//! 2. Run this example:
//!    ```bash
//!    FATD_CHAIN_ID=<chain id> FATD_FCT_ADDRESS=<FA address> \
//!        cargo run --package fat-sdk --example simple
//!    ```

use fat_sdk::{ApiErrorKind, ClientConfig, FatdClient, TokenParams};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("FAT SDK - Simple Example");
    println!("========================\n");

    // 1. Build client from FATD_* environment variables
    let config = ClientConfig::from_env();
    let client = FatdClient::new(config)?;
    println!("1. Using endpoint {}\n", client.url());

    // 2. Daemon properties
    println!("2. Fetching daemon properties...");
    let properties = client.get_daemon_properties(TokenParams::default()).await?;
    println!("   {}\n", serde_json::to_string_pretty(&properties)?);

    // 3. Issuance of the default token
    println!("3. Fetching issuance...");
    match client.get_issuance(TokenParams::default()).await {
        Ok(issuance) => println!("   {}\n", serde_json::to_string_pretty(&issuance)?),
        Err(e) if e.api_kind() == Some(ApiErrorKind::TokenNotFound) => {
            println!("   Token not found\n");
        }
        Err(e) if e.api_kind() == Some(ApiErrorKind::TokenSyncing) => {
            println!("   Daemon is still syncing this token\n");
        }
        Err(e) => return Err(e.into()),
    }

    // 4. Balance of the default address
    println!("4. Fetching balance...");
    let balance = client.get_balance(TokenParams::default(), None).await?;
    println!("   Balance: {}", balance);

    Ok(())
}
