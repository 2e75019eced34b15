// src/bin/test_upstream.rs
use dotenv::dotenv;
use valueglance_backend::config::AppConfig;
use valueglance_backend::services::upstream::UpstreamClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = AppConfig::from_env()?;
    let client = UpstreamClient::new(&config)?;
    let records = client.fetch().await?;

    println!("Symbol:  {}", config.symbol);
    println!("Records: {}", records.len());
    for record in &records {
        println!(
            "{:<12} revenue={:<16} netIncome={}",
            record.get("date").and_then(|v| v.as_str()).unwrap_or("?"),
            record.get("revenue").map(|v| v.to_string()).unwrap_or_default(),
            record.get("netIncome").map(|v| v.to_string()).unwrap_or_default(),
        );
    }
    Ok(())
}
