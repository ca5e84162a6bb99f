use tracing::{debug, warn};

use crate::models::GamePrediction;
use crate::render::CardRenderer;
use crate::view::{Region, ViewState};

/// Handles to the page regions the controller drives
pub struct ViewRegions<'a, R: Region> {
    pub loading: &'a mut R,
    pub error: &'a mut R,
    /// Message slot inside the error region
    pub error_text: &'a mut R,
    pub no_games: &'a mut R,
    /// Cards are mounted here; doubles as the populated region
    pub container: &'a mut R,
}

/// Switches between loading, error, empty and populated.
///
/// Every transition hides all four regions and then shows exactly one.
/// A fetch cycle starts in `Loading` and ends in one terminal state; further
/// terminal transitions are rejected until [`ViewController::begin_cycle`].
pub struct ViewController<'a, R: Region> {
    regions: ViewRegions<'a, R>,
    state: ViewState,
}

impl<'a, R: Region> ViewController<'a, R> {
    /// Take the region handles and enter `Loading`
    pub fn new(regions: ViewRegions<'a, R>) -> Self {
        let mut controller = Self {
            regions,
            state: ViewState::Loading,
        };
        controller.enter(ViewState::Loading);
        controller
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    /// Restart at `Loading` for a new fetch
    pub fn begin_cycle(&mut self) {
        self.enter(ViewState::Loading);
    }

    /// Show the error region with `message`
    pub fn show_error(&mut self, message: &str) -> bool {
        if !self.can_finish(ViewState::Error) {
            return false;
        }
        self.regions.error_text.set_text(message);
        self.enter(ViewState::Error);
        true
    }

    /// Show the no-games region; the container is cleared
    pub fn show_empty(&mut self) -> bool {
        if !self.can_finish(ViewState::Empty) {
            return false;
        }
        self.regions.container.set_html(String::new());
        self.enter(ViewState::Empty);
        true
    }

    /// Mount one card per prediction and show the container
    pub fn show_populated(&mut self, renderer: &CardRenderer, predictions: &[GamePrediction]) -> bool {
        if !self.can_finish(ViewState::Populated) {
            return false;
        }
        renderer.mount(predictions, &mut *self.regions.container);
        self.enter(ViewState::Populated);
        true
    }

    fn can_finish(&self, next: ViewState) -> bool {
        if self.state.is_terminal() {
            warn!(
                "Ignoring transition to {} after cycle ended in {}",
                next.as_str(),
                self.state.as_str()
            );
            return false;
        }
        true
    }

    fn enter(&mut self, next: ViewState) {
        for state in ViewState::ALL {
            self.region_mut(state).hide();
        }
        self.region_mut(next).show();

        debug!("View state {} -> {}", self.state.as_str(), next.as_str());
        self.state = next;
    }

    fn region_mut(&mut self, state: ViewState) -> &mut R {
        match state {
            ViewState::Loading => &mut *self.regions.loading,
            ViewState::Error => &mut *self.regions.error,
            ViewState::Empty => &mut *self.regions.no_games,
            ViewState::Populated => &mut *self.regions.container,
        }
    }
}
