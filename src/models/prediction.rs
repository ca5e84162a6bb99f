use serde::Deserialize;

/// Shown when the feed sent no game name
pub const UNKNOWN_GAME: &str = "Unknown Game";

/// Shown when the feed sent no tip-off time
pub const TIME_TBD: &str = "TBD";

/// Body of `GET /predictions`
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PredictionResponse {
    /// Number of games predicted (0 means no scheduled games)
    pub games_count: u32,

    /// One entry per scheduled game, in schedule order
    #[serde(default)]
    pub predictions: Vec<GamePrediction>,

    /// Day the predictions cover (the backend sends "today")
    #[serde(default)]
    pub date: Option<String>,

    /// Informational message, sent with empty results
    #[serde(default)]
    pub message: Option<String>,
}

impl PredictionResponse {
    /// Whether the backend reported no games
    pub fn is_empty(&self) -> bool {
        self.games_count == 0
    }
}

/// A single game with its predicted outcome
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GamePrediction {
    /// Upstream event identifier
    #[serde(default)]
    pub game_id: Option<String>,

    /// Display name (e.g. "Milwaukee Bucks at Cleveland Cavaliers"); may be null upstream
    #[serde(default)]
    pub game_name: Option<String>,

    /// ISO-8601 tip-off time, kept raw so unparsable values can be shown as-is; may be null upstream
    #[serde(default)]
    pub game_time: Option<String>,

    pub home_team: Team,

    pub away_team: Team,

    pub prediction: Outcome,
}

impl GamePrediction {
    pub fn display_name(&self) -> &str {
        self.game_name.as_deref().unwrap_or(UNKNOWN_GAME)
    }

    /// Raw tip-off time, or "TBD" when the feed had none
    pub fn raw_time(&self) -> &str {
        self.game_time.as_deref().unwrap_or(TIME_TBD)
    }

    /// Side the prediction favors, decided by exact name equality with the home team
    pub fn winning_side(&self) -> Side {
        if self.prediction.winner == self.home_team.name {
            Side::Home
        } else {
            Side::Away
        }
    }

    /// Whether the predicted winner names one of the two teams
    pub fn winner_is_known(&self) -> bool {
        self.prediction.winner == self.home_team.name
            || self.prediction.winner == self.away_team.name
    }
}

/// Home or away
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Home => "home",
            Side::Away => "away",
        }
    }
}

/// Team info and season stats
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Team {
    pub name: String,

    pub abbreviation: String,

    /// Logo URL (empty when the upstream schedule had none)
    #[serde(default)]
    pub logo: String,

    #[serde(default)]
    pub stats: TeamStats,

    /// Strength score computed by the predictor
    pub predictor_score: f64,
}

/// Season averages; any stat may be missing upstream
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamStats {
    /// Field goal percentage (0-100)
    pub fg_pct: Option<f64>,

    /// Points per game
    pub ppg: Option<f64>,

    /// Rebounds per game
    pub rpg: Option<f64>,

    /// Assists per game
    pub apg: Option<f64>,

    /// Three point percentage (0-100)
    #[serde(default)]
    pub three_pct: Option<f64>,

    /// Free throw percentage (0-100)
    #[serde(default)]
    pub ft_pct: Option<f64>,
}

/// Predicted outcome of a game
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Outcome {
    /// Name of the predicted winner, matching one team's `name`
    pub winner: String,

    #[serde(default)]
    pub winner_abbreviation: Option<String>,

    /// Likelihood of the predicted winner, 0-100
    pub confidence: f64,

    /// Predicted margin in points
    pub score_difference: f64,
}

impl Outcome {
    /// Confidence clamped into the displayable 0-100 range
    pub fn bar_width(&self) -> f64 {
        if self.confidence.is_nan() {
            0.0
        } else {
            self.confidence.clamp(0.0, 100.0)
        }
    }
}
