// templates/pages/selector.rs

use crate::app::{CatalogView, DisplayState};
use crate::templates::{
    components::{
        empty_notice, error_notice, loading_notice, selection_summary, skip_card, toolbar, CardCtx,
    },
    desktop_layout,
};
use maud::{html, Markup};

pub fn selector_page(view: &CatalogView, image_base: &str) -> Markup {
    let ctx = CardCtx {
        image_base,
        sort: view.sort,
        filter: view.filter,
    };

    let content = html! {
        main {
            @match &view.state {
                DisplayState::Loading => { (loading_notice()) }
                DisplayState::Error(msg) => { (error_notice(msg, view.sort, view.filter)) }
                DisplayState::Empty | DisplayState::Populated => {
                    (toolbar(view.items.len(), view.sort, view.filter))

                    @if view.skipped > 0 {
                        p class="badge warning" {
                            (view.skipped) " listing(s) could not be read and are not shown."
                        }
                    }

                    @if view.state == DisplayState::Empty {
                        (empty_notice())
                    } @else {
                        div class="grid" {
                            @for skip in &view.items {
                                (skip_card(skip, view.selection.is_selected(&skip.id), &ctx))
                            }
                        }
                    }

                    @if let Some(selected) = view.selection.current() {
                        (selection_summary(selected, view.sort, view.filter))
                    }
                }
            }
        }
    };

    desktop_layout(
        "Choose Your Skip Size",
        view.state == DisplayState::Loading,
        content,
    )
}
