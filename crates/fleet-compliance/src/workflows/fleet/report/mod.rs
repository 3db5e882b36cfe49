mod summary;
pub mod views;

pub use summary::{summarize, MinorFixCategory};
pub use views::CostSummary;
