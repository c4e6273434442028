/*
[INPUT]:  MTI_COMPANY / MTI_KEY environment variables
[OUTPUT]: Decoded response printed to stdout
[POS]:    Examples - single signed request demonstration
[UPDATE]: When the request flow changes
*/

use mti_adapter::*;
use serde_json::json;

/// Example: one signed request
///
/// 1. Build credentials
/// 2. Create the client
/// 3. Show the exact body that is posted
/// 4. Send it and walk the decoded reply
#[tokio::main]
async fn main() {
    println!("=== MTI Request Example ===\n");

    let company = std::env::var("MTI_COMPANY").unwrap_or_else(|_| "demo".to_string());
    let key = std::env::var("MTI_KEY").unwrap_or_else(|_| "demo-key".to_string());

    let client = match MtiClient::new(Credentials::new(company, key)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ Client created for {}", client.endpoint());

    let params = json!({ "filter": { "status": "active" } });
    match client.build_request_body("ping", params.clone(), &current_timestamp()) {
        Ok(body) => println!("✓ Request body:\n  {}", body),
        Err(e) => {
            eprintln!("Failed to encode request: {}", e);
            return;
        }
    }

    match client.make_request("ping", params).await {
        Ok(response) => {
            println!("✓ Response:");
            match serde_json::to_string_pretty(&response) {
                Ok(rendered) => println!("{}", rendered),
                Err(e) => eprintln!("Failed to render response: {}", e),
            }
        }
        Err(e) if e.is_transport_error() => eprintln!("Transport error: {}", e),
        Err(e) => eprintln!("Request failed: {}", e),
    }
}
