pub mod controller;
pub mod page;
pub mod region;
pub mod state;

pub use controller::{ViewController, ViewRegions};
pub use page::Page;
pub use region::{HtmlRegion, Region};
pub use state::ViewState;
