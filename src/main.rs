//! Shop Stock Sync - Shopify inventory levels from CSV
//!
//! Reads the inventory export once, pushes every matched quantity and prints
//! a summary of which SKUs were updated.

use clap::Parser;
use shop_stock_sync::config::DEFAULT_TIMEOUT_SECS;
use shop_stock_sync::{read_inventory_file, run_sync, ShopifyClient, SyncConfig, SyncReport};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Shopify stock sync - sets inventory levels from a CSV export
#[derive(Parser, Debug)]
#[command(name = "shop_stock_sync")]
#[command(version, about, long_about = None)]
struct Args {
    /// Semicolon-delimited inventory export
    #[arg(short, long, default_value = "inventory_update.csv")]
    input: PathBuf,

    /// Admin API base URL, e.g. https://shop.myshopify.com/admin/api/2024-04
    #[arg(long, env = "SHOPIFY_STORE_URL")]
    store_url: String,

    /// Admin API access token
    #[arg(long, env = "SHOPIFY_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Inventory location whose stock levels are set
    #[arg(long, env = "SHOPIFY_LOCATION_ID")]
    location_id: i64,

    /// Maximum number of update requests in flight (default: unbounded)
    #[arg(long)]
    max_concurrency: Option<usize>,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,

    /// Print the summary as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Exit with status 1 when any row failed
    #[arg(long, default_value_t = false)]
    fail_on_error: bool,
}

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting shop_stock_sync...");

    let config = match SyncConfig::new(&args.store_url, &args.access_token, args.location_id)
        .and_then(|c| c.with_max_concurrency(args.max_concurrency))
    {
        Ok(config) => config.with_timeout(Duration::from_secs(args.timeout_secs)),
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration: {:?}", config);

    let rows = match read_inventory_file(&args.input) {
        Ok(rows) => rows,
        Err(e) => {
            log::error!("Failed to read {}: {}", args.input.display(), e);
            std::process::exit(1);
        }
    };

    let client = match ShopifyClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            log::error!("Failed to create HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let report = match run_sync(client, &config, &rows).await {
        Ok(report) => report,
        Err(e) => {
            log::error!("Failed to fetch product catalog: {}", e);
            std::process::exit(1);
        }
    };

    match render_report(&report, args.json) {
        Ok(output) => print!("{}", output),
        Err(e) => {
            log::error!("Failed to serialize summary: {}", e);
            std::process::exit(1);
        }
    }

    let code = exit_code(&report, args.fail_on_error);
    if code != 0 {
        std::process::exit(code);
    }
}

/// Text summary, or pretty JSON when `json` is set
fn render_report(report: &SyncReport, json: bool) -> serde_json::Result<String> {
    if json {
        Ok(format!("{}\n", serde_json::to_string_pretty(report)?))
    } else {
        Ok(format!("\n{}", report))
    }
}

/// Row failures only change the exit status when `--fail-on-error` is given
fn exit_code(report: &SyncReport, fail_on_error: bool) -> i32 {
    if fail_on_error && report.has_failures() {
        1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REQUIRED: [&str; 7] = [
        "shop_stock_sync",
        "--store-url",
        "https://shop.example.com/admin/api/2024-04",
        "--access-token",
        "shpat_test",
        "--location-id",
        "655441491",
    ];

    fn report_with_failure() -> SyncReport {
        let mut report = SyncReport::new();
        report.record_success("ABC123");
        report.record_failure("ZZZ999", "No product found");
        report
    }

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(REQUIRED).unwrap();

        assert_eq!(args.input, PathBuf::from("inventory_update.csv"));
        assert_eq!(args.location_id, 655441491);
        assert_eq!(args.max_concurrency, None);
        assert_eq!(args.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!args.json);
        assert!(!args.fail_on_error);
    }

    #[test]
    fn parses_flags() {
        let mut argv = REQUIRED.to_vec();
        argv.extend([
            "--input",
            "stock.csv",
            "--max-concurrency",
            "4",
            "--timeout-secs",
            "5",
            "--json",
            "--fail-on-error",
        ]);
        let args = Args::try_parse_from(argv).unwrap();

        assert_eq!(args.input, PathBuf::from("stock.csv"));
        assert_eq!(args.max_concurrency, Some(4));
        assert_eq!(args.timeout_secs, 5);
        assert!(args.json);
        assert!(args.fail_on_error);
    }

    #[test]
    fn rejects_non_integer_location() {
        let mut argv = REQUIRED.to_vec();
        argv[6] = "main-warehouse";
        let err = Args::try_parse_from(argv).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn credentials_fall_back_to_environment() {
        std::env::set_var("SHOPIFY_STORE_URL", "https://env.example.com/admin/api/2024-04");
        std::env::set_var("SHOPIFY_ACCESS_TOKEN", "shpat_from_env");
        std::env::set_var("SHOPIFY_LOCATION_ID", "42");

        let args = Args::try_parse_from(["shop_stock_sync"]).unwrap();

        assert_eq!(args.store_url, "https://env.example.com/admin/api/2024-04");
        assert_eq!(args.access_token, "shpat_from_env");
        assert_eq!(args.location_id, 42);
    }

    #[test]
    fn row_failures_exit_zero_by_default() {
        assert_eq!(exit_code(&report_with_failure(), false), 0);
    }

    #[test]
    fn fail_on_error_exits_one_only_on_failures() {
        assert_eq!(exit_code(&report_with_failure(), true), 1);

        let mut clean = SyncReport::new();
        clean.record_success("ABC123");
        assert_eq!(exit_code(&clean, true), 0);
    }

    #[test]
    fn json_output_is_the_report() {
        let output = render_report(&report_with_failure(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["succeeded"], serde_json::json!(["ABC123"]));
        assert_eq!(value["failed"][0]["sku"], "ZZZ999");
        assert_eq!(value["failed"][0]["reason"], "No product found");
    }

    #[test]
    fn text_output_is_the_summary() {
        let output = render_report(&report_with_failure(), false).unwrap();
        assert!(output.contains("Successfully updated SKUs: ABC123"));
        assert!(output.contains("SKU: ZZZ999, Reason: No product found"));
    }
}
