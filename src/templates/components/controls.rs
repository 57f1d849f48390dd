use crate::domain::{RoadFilter, SortKey};
use maud::{html, Markup};

/// Result count plus the filter/sort form. Submitting is a plain GET so the
/// view lives in the URL.
pub fn toolbar(count: usize, sort: SortKey, filter: RoadFilter) -> Markup {
    html! {
        div class="toolbar" {
            div {
                h3 {
                    (count) " Skip" @if count != 1 { "s" } " Available"
                }
                p { "Choose the perfect size for your project" }
            }
            form method="get" action="/" {
                select name="filter" onchange="this.form.submit()" {
                    @for option in RoadFilter::ALL {
                        option value=(option.as_str()) selected[option == filter] { (option.label()) }
                    }
                }
                select name="sort" onchange="this.form.submit()" {
                    @for option in SortKey::ALL {
                        option value=(option.as_str()) selected[option == sort] { (option.label()) }
                    }
                }
                noscript { button type="submit" { "Apply" } }
            }
        }
    }
}

/// Hidden fields that carry the current view through a POST.
pub fn view_fields(sort: SortKey, filter: RoadFilter) -> Markup {
    html! {
        input type="hidden" name="sort" value=(sort.as_str());
        input type="hidden" name="filter" value=(filter.as_str());
    }
}
