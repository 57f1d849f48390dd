pub mod derive;
pub mod pricing;
pub mod selection;
pub mod size;

pub use derive::{derive, RoadFilter, SortKey};
pub use pricing::{format_money, format_percent, price_with_vat, vat_amount};
pub use selection::Selection;
pub use size::{image_url, SizeCategory};
