//! Pagination Component
//!
//! First/prev/next/last controls writing the page number into navigable
//! state. The committed filter survives page navigation.

use leptos::prelude::*;

use crate::context::AppContext;

/// Pagination footer for the tag table
#[component]
pub fn Pagination(pages: u32, items: u32, page: u32) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let at_first = page <= 1;
    let at_last = page >= pages;
    let last = pages.max(1);

    view! {
        <footer class="pagination">
            <span class="pagination-summary">
                {format!("Page {} of {} · {} item(s)", page, last, items)}
            </span>
            <div class="pagination-controls">
                <button disabled=at_first on:click=move |_| ctx.go_to_page(1)>
                    "First"
                </button>
                <button disabled=at_first on:click=move |_| ctx.go_to_page(page.saturating_sub(1).max(1))>
                    "Prev"
                </button>
                <button disabled=at_last on:click=move |_| ctx.go_to_page((page + 1).min(last))>
                    "Next"
                </button>
                <button disabled=at_last on:click=move |_| ctx.go_to_page(last)>
                    "Last"
                </button>
            </div>
        </footer>
    }
}
