/// Which of the four mutually exclusive page regions is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    /// Fetch in flight
    Loading,
    /// Fetch failed; error text is shown
    Error,
    /// Backend reported no games
    Empty,
    /// Game cards are mounted
    Populated,
}

impl ViewState {
    pub const ALL: [ViewState; 4] = [
        ViewState::Loading,
        ViewState::Error,
        ViewState::Empty,
        ViewState::Populated,
    ];

    /// Whether this state ends a fetch cycle
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Loading => "loading",
            ViewState::Error => "error",
            ViewState::Empty => "empty",
            ViewState::Populated => "populated",
        }
    }
}
