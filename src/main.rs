use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nba_predictions::api::{FetchOutcome, PredictionsClient};
use nba_predictions::app;
use nba_predictions::config::Config;
use nba_predictions::render::{text, CardRenderer, TimeFormat};
use nba_predictions::view::{Page, ViewController};

/// Command line options
#[derive(Debug, Default)]
struct Args {
    /// Print the plain-text report instead of the HTML page
    text: bool,
    /// Write output here instead of stdout
    out: Option<PathBuf>,
    /// Probe `/health` before fetching
    health: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the rendered page
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "nba_predictions=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = parse_args(env::args().skip(1))?;

    let config = Config::from_env()?;
    info!("Configuration loaded (api: {})", config.api_url);

    let time_format = TimeFormat::new(config.display_offset()?, &config.display_zone_label);
    let client = PredictionsClient::new(&config.api_url);

    if args.health {
        if client.check_health().await {
            info!("Predictions API is healthy");
        } else {
            warn!("Predictions API health check did not pass, fetching anyway");
        }
    }

    let output = if args.text {
        render_text(&client, &time_format).await
    } else {
        render_page(&client, &config, time_format).await
    };

    match args.out {
        Some(path) => {
            fs::write(&path, output)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

/// Run the page flow and serialize the resulting document
async fn render_page(client: &PredictionsClient, config: &Config, time_format: TimeFormat) -> String {
    let renderer = CardRenderer::new(time_format);
    let mut page = Page::new(&config.page_title);

    let mut controller = ViewController::new(page.regions());
    let state = app::run(client, &renderer, &mut controller).await;
    drop(controller);

    info!("Page rendered in {} state", state.as_str());
    page.to_html()
}

async fn render_text(client: &PredictionsClient, time_format: &TimeFormat) -> String {
    match client.fetch_predictions().await {
        Ok(FetchOutcome::Populated(response)) => {
            text::render_report(&response.predictions, time_format)
        }
        Ok(FetchOutcome::Empty) => text::render_notice("No scheduled games found for today."),
        Err(e) => text::render_notice(&format!("Error: {}", e)),
    }
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--text" => parsed.text = true,
            "--health" => parsed.health = true,
            "--out" => {
                let path = args.next().context("--out requires a path")?;
                parsed.out = Some(PathBuf::from(path));
            }
            other => anyhow::bail!("Unknown argument: {}", other),
        }
    }

    Ok(parsed)
}
