pub mod prediction;

pub use prediction::{
    GamePrediction, Outcome, PredictionResponse, Side, Team, TeamStats, TIME_TBD, UNKNOWN_GAME,
};
