//! Example: convert HTML from stdin with a rule set
//!
//! ```text
//! cargo run -p swiftswap-engine --example convert -- react < page.html
//! ```

use std::io::Read;

use anyhow::{Context, bail};
use swiftswap_engine::{Config, Converter};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let rule_set = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.default_rule_set.clone());

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading HTML from stdin")?;

    let converter = Converter::builtin(config).map_err(|err| anyhow::anyhow!("{err}"))?;
    let conversion = converter.convert(&input, &rule_set);

    if !conversion.transform.success {
        bail!(
            "{}",
            conversion.transform.error.unwrap_or_else(|| "conversion failed".to_string())
        );
    }

    println!("{}", conversion.transform.result);
    if let Some(stats) = &conversion.stats {
        eprintln!("{}", serde_json::to_string_pretty(stats)?);
    }
    Ok(())
}
