use crate::catalog::SkipRecord;
use crate::domain::{
    format_money, format_percent, price_with_vat, vat_amount, RoadFilter, SizeCategory, SortKey,
};
use crate::templates::components::view_fields;
use maud::{html, Markup};

/// Panel shown under the grid once a skip is picked. Prices are worked out
/// from the record every render.
pub fn selection_summary(skip: &SkipRecord, sort: SortKey, filter: RoadFilter) -> Markup {
    let category = SizeCategory::from_size(skip.size);

    html! {
        section class="summary" id="selection-summary" {
            h3 { "Skip Selected" }
            p { "Review your selection and continue" }

            h4 { (skip.size) " Yard Skip" }
            p { "Perfect for " (category.perfect_for()) }

            ul {
                li { (skip.hire_period_days) " Days Hire Period" }
                li { "Free Delivery, Next Day Service" }
            }

            @if !skip.allowed_on_road {
                div class="badge warning" {
                    strong { "Not Allowed On The Road" }
                    " This skip size not allowed on public roads. We can help arrange this for you."
                }
            }

            div class="breakdown" {
                p class="price" { "£" (format_money(price_with_vat(skip))) }
                p { "Total inc. VAT & Delivery" }
                div { span { "Skip Hire:" } span { "£" (format_money(skip.price_before_vat)) } }
                div {
                    span { "VAT (" (format_percent(skip.vat)) "%):" }
                    span { "£" (format_money(vat_amount(skip))) }
                }
                div { span { "Delivery:" } span { "FREE" } }
            }

            form method="post" action="/clear" {
                (view_fields(sort, filter))
                button type="submit" class="secondary" { "Change Selection" }
            }
            button type="button" { "Continue to Next Step →" }
        }
    }
}
