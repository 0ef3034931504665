use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use iptrack::api;
use iptrack::config;
use iptrack::models::AppContext;
use iptrack::shell;

#[derive(Parser)]
#[command(
    name = "iptrack",
    author,
    version,
    about = "Interactive IP geolocation tracker",
    long_about = r#"iptrack — look up, collect and explore IP geolocation data from your terminal.

Starts an interactive menu for fetching details about any IP address (or your own),
storing the results for the session, editing and sorting them, charting the
countries involved, and saving or reloading the collection as JSON.

Examples:
  1) Run with defaults (data saved to ip_data.json):
      iptrack
  2) Keep data somewhere else and stay quiet about HTTP traffic:
      iptrack --data-file ~/ips.json --silent
"#,
    after_help = "Set LOOKUP_BASE_URL or DATA_FILE in the environment (or an --env-file) to override the defaults."
)]
struct Cli {
    /// Disable colorized output
    #[arg(long)]
    no_color: bool,
    /// Disable request/response logging
    #[arg(long)]
    silent: bool,
    /// Path to .env file
    #[arg(long)]
    env_file: Option<String>,
    /// JSON file used by the save/load menu options
    #[arg(long)]
    data_file: Option<String>,
}

fn build_context_from_env(env_file: Option<&str>, data_file: Option<&str>) -> AppContext {
    config::load_env_file(env_file);

    let client = reqwest::Client::builder()
        .user_agent(format!("Iptrack/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to create HTTP client");

    AppContext {
        client,
        lookup_base_url: config::get_lookup_base_url(),
        data_file: data_file
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(config::get_data_file())),
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.silent {
        api::client::set_silent(true);
    }

    let ctx = build_context_from_env(cli.env_file.as_deref(), cli.data_file.as_deref());
    shell::run(&ctx).await;
}
