mod config;
mod errors;
mod jobs;
mod services;
mod structs;
mod utils;

use chrono::Local;
use config::Config;
use services::slack::SlackClient;
use std::{env::var, process::ExitCode};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lunch_roster=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    dotenvy::dotenv().ok();

    let outcome = jobs::lunch::run(
        var("SLACK_BOT_TOKEN").ok(),
        Config::from_env(),
        Local::now().date_naive(),
        |token, config| SlackClient::new(token, config.api_url.clone()),
        &mut rand::thread_rng(),
    )
    .await;

    outcome.into()
}
