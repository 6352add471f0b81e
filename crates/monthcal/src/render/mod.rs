//! Text rendering of calendar views.

mod month;

pub use month::{render_month, GridOptions};
