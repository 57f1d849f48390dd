pub mod controls;
pub mod error;
pub mod notices;
pub mod skip_card;
pub mod steps;
pub mod summary;

pub use controls::{toolbar, view_fields};
pub use error::error_page;
pub use notices::{empty_notice, error_notice, loading_notice};
pub use skip_card::{skip_card, CardCtx};
pub use steps::steps_header;
pub use summary::selection_summary;
