/// Example client walking through the four read operations of the events API
///
/// ```bash
/// EVENTFEED_TOKEN=<token> cargo run --example list_events
/// ```

use anyhow::Result;
use eventfeed_rs::{EventsClient, EventsConfig, RequestOptions};
use serde::Deserialize;

#[derive(Deserialize, Debug)]
struct EventSummary {
    #[serde(rename = "trackingId")]
    tracking_id: Option<String>,
    #[serde(rename = "ruleId")]
    rule_id: Option<String>,
    timestamp: Option<String>,
    name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let token = std::env::var("EVENTFEED_TOKEN").unwrap_or_else(|_| "demo-token".to_string());
    let client = match std::env::var("EVENTFEED_API_URL") {
        Ok(origin) => EventsClient::with_config(EventsConfig { origin })?,
        Err(_) => EventsClient::new()?,
    };

    println!("=== EventFeed API Demo ===\n");

    // 1. First page of events
    println!("1. Listing events (first page of 5)...");
    let options = RequestOptions::bearer(&token).with_count(5);
    let mut next_page_token = None;
    match client.list(&options).await {
        Ok(body) => {
            let events: Vec<EventSummary> = match body.get("events") {
                Some(value) => serde_json::from_value(value.clone())?,
                None => Vec::new(),
            };
            println!("   {} event(s) on this page", events.len());
            for event in &events {
                println!(
                    "   [{}] {} (device {}, rule {})",
                    event.timestamp.as_deref().unwrap_or("-"),
                    event.name.as_deref().unwrap_or("event"),
                    event.tracking_id.as_deref().unwrap_or("?"),
                    event.rule_id.as_deref().unwrap_or("?"),
                );
            }
            next_page_token = body
                .get("nextPageToken")
                .and_then(|t| t.as_str())
                .map(|t| t.to_string());
            println!();
        }
        Err(e) => println!("   Request failed: {}\n", e),
    }

    // 2. Next page, if the service returned a cursor
    if let Some(page_token) = next_page_token {
        println!("2. Fetching the next page...");
        let options = RequestOptions::bearer(&token)
            .with_count(5)
            .with_page_token(page_token);
        match client.list(&options).await {
            Ok(body) => {
                let count = body
                    .get("events")
                    .and_then(|e| e.as_array())
                    .map(|e| e.len())
                    .unwrap_or(0);
                println!("   {} event(s) on the next page\n", count);
            }
            Err(e) => println!("   Request failed: {}\n", e),
        }
    } else {
        println!("2. No next page token returned, skipping\n");
    }

    // 3. Events for one device
    println!("3. Listing events for device tracker-001...");
    let options = RequestOptions::bearer(&token);
    match client.get_by_device("tracker-001", &options).await {
        Ok(body) => println!("   {}\n", body),
        Err(e) => println!("   Request failed: {}\n", e),
    }

    // 4. Events for one rule
    println!("4. Listing events for rule geofence-exit...");
    match client.get_by_rule("geofence-exit", &options).await {
        Ok(body) => println!("   {}\n", body),
        Err(e) => println!("   Request failed: {}\n", e),
    }

    // 5. Detail of a single event
    println!("5. Fetching one event's detail...");
    match client
        .get_details("tracker-001", "geofence-exit", "1754000000", &options)
        .await
    {
        Ok(body) => println!("   {}\n", body),
        Err(e) => println!("   Request failed: {}\n", e),
    }

    println!("=== Demo Complete ===");

    Ok(())
}
