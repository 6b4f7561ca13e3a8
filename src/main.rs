use std::env;

use anyhow::{Context, Result};
use eventfeed_rs::{EventsClient, EventsConfig, RequestOptions};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventfeed_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        usage(&args[0]);
        std::process::exit(1);
    }

    let token = env::var("EVENTFEED_TOKEN").context("EVENTFEED_TOKEN is not set")?;
    let mut options = RequestOptions::bearer(token);
    if let Ok(count) = env::var("EVENTFEED_COUNT") {
        options = options.with_count(count.parse().context("EVENTFEED_COUNT must be a number")?);
    }
    if let Ok(page_token) = env::var("EVENTFEED_PAGE_TOKEN") {
        options = options.with_page_token(page_token);
    }

    let client = match env::var("EVENTFEED_API_URL") {
        Ok(origin) => EventsClient::with_config(EventsConfig { origin })?,
        Err(_) => EventsClient::new()?,
    };

    let body = match (args[1].as_str(), &args[2..]) {
        ("list", _) => client.list(&options).await?,
        ("device", [tracking_id, ..]) => client.get_by_device(tracking_id, &options).await?,
        ("rule", [rule_id, ..]) => client.get_by_rule(rule_id, &options).await?,
        ("details", [tracking_id, rule_id, timestamp, ..]) => {
            client
                .get_details(tracking_id, rule_id, timestamp, &options)
                .await?
        }
        _ => {
            usage(&args[0]);
            std::process::exit(1);
        }
    };

    println!("{}", serde_json::to_string_pretty(&body)?);

    Ok(())
}

fn usage(program: &str) {
    eprintln!("Usage: {} <command> [args]", program);
    eprintln!("  list");
    eprintln!("  device <trackingId>");
    eprintln!("  rule <ruleId>");
    eprintln!("  details <trackingId> <ruleId> <timestamp>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  EVENTFEED_TOKEN       bearer token (required)");
    eprintln!("  EVENTFEED_API_URL     API origin override");
    eprintln!("  EVENTFEED_COUNT       page size");
    eprintln!("  EVENTFEED_PAGE_TOKEN  pagination cursor");
}
