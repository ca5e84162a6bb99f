use tracing::{error, info};

use crate::api::{FetchOutcome, PredictionsClient};
use crate::error::FetchError;
use crate::render::CardRenderer;
use crate::view::{Region, ViewController, ViewState};

/// Run one fetch cycle: enter loading, fetch, then show the outcome
pub async fn run<R: Region>(
    client: &PredictionsClient,
    renderer: &CardRenderer,
    controller: &mut ViewController<'_, R>,
) -> ViewState {
    controller.begin_cycle();

    let result = client.fetch_predictions().await;

    present(&result, renderer, controller)
}

/// Map a fetch result onto the page
pub fn present<R: Region>(
    result: &Result<FetchOutcome, FetchError>,
    renderer: &CardRenderer,
    controller: &mut ViewController<'_, R>,
) -> ViewState {
    match result {
        Ok(FetchOutcome::Empty) => {
            controller.show_empty();
        }
        Ok(FetchOutcome::Populated(response)) => {
            info!("Rendering {} game cards", response.predictions.len());
            controller.show_populated(renderer, &response.predictions);
        }
        Err(e) => {
            error!("Failed to load predictions ({}): {}", e.kind(), e);
            controller.show_error(&e.to_string());
        }
    }

    controller.state()
}
