use crate::domain::{RoadFilter, SortKey};
use crate::templates::components::view_fields;
use maud::{html, Markup};

pub fn loading_notice() -> Markup {
    html! {
        div class="notice" id="loading" {
            h2 { "Loading Skip Options" }
            p { "We're fetching the best skip sizes for your project..." }
        }
    }
}

/// "Try Again" keeps the current sort and filter.
pub fn error_notice(message: &str, sort: SortKey, filter: RoadFilter) -> Markup {
    html! {
        div class="notice" id="error" {
            h2 { "Oops! Something went wrong" }
            p { (message) }
            form method="post" action="/reload" {
                (view_fields(sort, filter))
                button type="submit" { "Try Again" }
            }
            p { a href="javascript:history.back()" { "Go Back" } }
        }
    }
}

pub fn empty_notice() -> Markup {
    html! {
        div class="notice" id="empty" {
            h3 { "No skips match your criteria" }
            p { "Try adjusting your filters to see more options" }
            a href="/reset" { button type="button" { "Reset Filters" } }
        }
    }
}
