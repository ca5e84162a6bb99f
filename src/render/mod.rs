pub mod card;
pub mod escape;
pub mod text;
pub mod time;

pub use card::{CardRenderer, WINNER_CLASS};
pub use escape::escape_html;
pub use time::TimeFormat;
