pub mod predictions;

pub use predictions::{classify_response, FetchOutcome, PredictionsClient};
