use std::time::Instant;

use anyhow::Result;
use eventfeed_rs::{EventsClient, RequestOptions};

#[tokio::main]
async fn main() -> Result<()> {
    let token = std::env::var("EVENTFEED_TOKEN").unwrap_or_else(|_| "demo-token".to_string());

    // Create a single client instance
    let client = EventsClient::new()?;

    let device_ids = vec![
        "tracker-001",
        "tracker-002",
        "tracker-003",
        "tracker-004",
        "tracker-005",
        "tracker-006",
        "tracker-007",
        "tracker-008",
        "tracker-009",
        "tracker-010",
    ];

    println!(
        "Fetching events for {} devices concurrently...",
        device_ids.len()
    );
    let start = Instant::now();

    // Spawn concurrent tasks
    let handles: Vec<_> = device_ids
        .iter()
        .map(|id| {
            let client = client.clone(); // Cheap clone, the connection pool is shared
            let options = RequestOptions::bearer(&token).with_count(20);
            let id = id.to_string();
            tokio::spawn(async move { client.get_by_device(&id, &options).await })
        })
        .collect();

    // Wait for all tasks to complete
    let mut bodies = Vec::new();
    for handle in handles {
        match handle.await? {
            Ok(body) => bodies.push(body),
            Err(e) => eprintln!("Error fetching device events: {}", e),
        }
    }

    let elapsed = start.elapsed();

    println!("\n=== Results ===");
    println!("Fetched {} device feeds in {:?}", bodies.len(), elapsed);
    println!(
        "Throughput: {:.2} feeds/sec",
        bodies.len() as f64 / elapsed.as_secs_f64()
    );

    for (i, body) in bodies.iter().enumerate() {
        let count = body
            .get("events")
            .and_then(|e| e.as_array())
            .map(|e| e.len())
            .unwrap_or(0);
        println!("  [{}] {} event(s)", i + 1, count);
    }

    Ok(())
}
