pub mod selector;

pub use selector::selector_page;
