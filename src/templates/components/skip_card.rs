use crate::catalog::SkipRecord;
use crate::domain::{format_money, image_url, price_with_vat, RoadFilter, SizeCategory, SortKey};
use crate::templates::components::view_fields;
use maud::{html, Markup};

// Hide the broken image and reveal the placeholder next to it.
const IMG_FALLBACK: &str =
    "this.style.display='none';this.nextElementSibling.classList.remove('hidden');";

pub struct CardCtx<'a> {
    pub image_base: &'a str,
    pub sort: SortKey,
    pub filter: RoadFilter,
}

pub fn skip_card(skip: &SkipRecord, is_selected: bool, ctx: &CardCtx<'_>) -> Markup {
    let category = SizeCategory::from_size(skip.size);
    let card_class = if is_selected {
        "skip-card selected"
    } else {
        "skip-card"
    };

    html! {
        div class=(card_class) data-skip-id=(skip.id.to_string()) {
            span class="badge" { (skip.size) " Yards" }
            img
                src=(image_url(ctx.image_base, skip.size))
                alt=(format!("{} yard skip", skip.size))
                onerror=(IMG_FALLBACK);
            div class="skip-placeholder hidden" {
                "SKIP" br; (skip.size) "YD"
            }
            span class=(format!("badge {}", category.css_class())) { (category.label()) }
            @if !skip.allowed_on_road {
                span class="badge warning" title="This skip size not allowed on public roads." {
                    "Not Allowed On The Road"
                }
            }
            div class="card-body" {
                h3 { (skip.size) " Yard Skip" }
                p { (category.suitable_for()) }
                p { "Hire Period: " strong { (skip.hire_period_days) " days" } }
                p class="price" { "£" (format_money(price_with_vat(skip))) }
                p { small { "inc. VAT" } }
                form method="post" action="/select" {
                    input type="hidden" name="id" value=(skip.id.to_string());
                    (view_fields(ctx.sort, ctx.filter))
                    @if is_selected {
                        button type="submit" disabled { "Selected" }
                    } @else {
                        button type="submit" { "Select This Skip" }
                    }
                }
            }
        }
    }
}
