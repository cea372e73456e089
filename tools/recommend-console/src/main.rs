//! Recommendations console — the recommendation form, driven from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Create, then look it up again
//! cargo run -p recommend-console -- create --product-id 12 --recommended-product-id 34 --type up-sell
//! cargo run -p recommend-console -- retrieve --id 1
//!
//! # Filtered listing against another host
//! cargo run -p recommend-console -- --base-url http://localhost:9000 search --type accessory
//!
//! # Load the shared seed rows, then work interactively
//! cargo run -p recommend-console -- seed --file contracts/seed/recommendations.json
//! cargo run -p recommend-console -- shell
//! ```
//!
//! Exits 1 when the action ends with an error flash.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tokio::io::BufReader;
use tracing::info;

use recommend_console::cli::{Args, Command};
use recommend_console::config::ConsoleConfig;
use recommend_console::{reporter, seed, shell};
use recommend_core::tracing::init_tracing;
use recommend_form::controller::FormController;
use recommend_form::infra::http::HttpRecommendationApi;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    let args = Args::parse();
    let config = ConsoleConfig::from_env();
    let base_url = args.base_url.clone().unwrap_or(config.base_url);
    info!(%base_url, "recommendations console starting");

    let mut controller = FormController::new(HttpRecommendationApi::new(&base_url));

    match &args.command {
        Command::Seed { file } => {
            let created = seed::run(controller.api(), file).await?;
            println!("Seeded {created} recommendation(s)");
        }
        Command::Shell => {
            let stdin = BufReader::new(tokio::io::stdin());
            let mut stdout = io::stdout();
            shell::run(&mut controller, stdin, &mut stdout).await?;
            writeln!(stdout)?;
        }
        command => {
            let Some((action, fields)) = command.form_request() else {
                return Ok(());
            };
            let outcome = controller.execute(action, &fields).await;
            controller.apply(outcome);
            print!("{}", reporter::render(action, controller.state()));
            if controller.state().has_error() {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
