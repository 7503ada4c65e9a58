//! Tags Page Component
//!
//! Filter controls, the tag table, pagination and the create-tag panel.

use leptos::prelude::*;

use crate::components::{CreateTagForm, Pagination};
use crate::context::AppContext;
use crate::hooks::use_debounced_value;
use crate::tags_query::use_tags_query;

/// Typing pauses shorter than this do not commit the filter.
const FILTER_DEBOUNCE_MS: u32 = 400;

/// True when the committed filter differs from the last one seen, so
/// page-only changes never clobber text the user is still typing.
fn needs_resync(previous: Option<&str>, committed: &str) -> bool {
    previous != Some(committed)
}

/// Main page: renders a page of tags for the committed filter/page
#[component]
pub fn TagsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let tags = use_tags_query(ctx);

    let (pending_filter, set_pending_filter) = signal(ctx.query.get_untracked().filter);
    let (panel_open, set_panel_open) = signal(false);

    // Auto-commit the filter after a typing pause; the button commits now
    let debounced_filter =
        use_debounced_value(Signal::<String>::from(pending_filter), FILTER_DEBOUNCE_MS);
    Effect::new(move |_| {
        let next = debounced_filter.get();
        if next != ctx.query.get_untracked().filter {
            // Replaces the history entry: typing should not leave a trail
            ctx.apply_filter_replacing(&next);
        }
    });

    // Rewrite the input only when the committed filter itself changed
    // (back/forward navigation), never on page-only changes
    Effect::new(move |previous: Option<String>| {
        let committed = ctx.query.get().filter;
        if needs_resync(previous.as_deref(), &committed) {
            set_pending_filter.set(committed.clone());
        }
        committed
    });

    let on_filter = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.apply_filter(&pending_filter.get());
    };

    view! {
        <div class="tags-page">
            <header class="page-header">
                <h1>"Tags"</h1>
                <button class="primary-btn" on:click=move |_| set_panel_open.set(true)>
                    "Create new"
                </button>
            </header>

            <form class="filter-form" on:submit=on_filter>
                <input
                    type="text"
                    placeholder="Search tags..."
                    prop:value=move || pending_filter.get()
                    on:input=move |ev| set_pending_filter.set(event_target_value(&ev))
                />
                <button type="submit">"Filter"</button>
            </form>

            {move || tags.state.get().error.map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button type="button" on:click=move |_| tags.dismiss_error()>
                        "Dismiss"
                    </button>
                </div>
            })}

            <Show when=move || tags.state.get().is_loading>
                <p class="loading-indicator">"Loading tags..."</p>
            </Show>

            {move || tags.state.get().data.map(|page| {
                let current_page = ctx.query.get().page;
                view! {
                    <table class="tags-table">
                        <thead>
                            <tr>
                                <th>"Tag"</th>
                                <th>"Amount of videos"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {page.data.iter().map(|tag| view! {
                                <tr>
                                    <td>
                                        <div class="tag-cell">
                                            <span class="tag-title">{tag.title.clone()}</span>
                                            <span class="tag-slug">{tag.slug.clone()}</span>
                                        </div>
                                    </td>
                                    <td>{format!("{} video(s)", tag.amount_of_videos)}</td>
                                </tr>
                            }).collect_view()}
                        </tbody>
                    </table>
                    <Pagination pages=page.pages items=page.items page=current_page />
                }
            })}

            <Show when=move || panel_open.get()>
                <aside class="create-panel">
                    <h2>"Create Tag"</h2>
                    <p class="panel-description">
                        "Tags can be used to group videos about similar concepts."
                    </p>
                    <CreateTagForm on_close=move |_: ()| set_panel_open.set(false) />
                </aside>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_run_syncs_input() {
        assert!(needs_resync(None, "rust"));
    }

    #[test]
    fn test_page_only_change_keeps_typed_text() {
        assert!(!needs_resync(Some("rust"), "rust"));
    }

    #[test]
    fn test_filter_change_rewrites_input() {
        assert!(needs_resync(Some("rust"), "go"));
    }
}
