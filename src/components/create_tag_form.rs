//! Create Tag Form Component
//!
//! Title field with live slug preview, validation and submission. A
//! successful create invalidates every cached tag page so the list
//! refetches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::gateway::{self, CreateTagArgs};
use crate::models::TagPage;
use crate::query::{QueryClient, GET_TAGS};
use crate::slug::derive_slug;

const TITLE_MIN_CHARS: usize = 3;

/// Validate a tag title against the minimum-length rule.
pub fn validate_title(title: &str) -> Result<(), &'static str> {
    if title.chars().count() < TITLE_MIN_CHARS {
        return Err("Minimum 3 characters!");
    }
    Ok(())
}

/// Validate `title` and assemble the create-tag request body. Invalid
/// titles never reach the gateway.
pub fn build_create_args(title: &str) -> Result<CreateTagArgs, &'static str> {
    validate_title(title)?;
    Ok(CreateTagArgs {
        title: title.to_string(),
        slug: derive_slug(title),
        amount_of_videos: 0,
    })
}

/// Form for creating a tag. `on_close` runs on cancel and after a
/// successful save (the caller owns the panel).
#[component]
pub fn CreateTagForm(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let cache = expect_context::<QueryClient<TagPage>>();

    let (title, set_title) = signal(String::new());
    let (field_error, set_field_error) = signal::<Option<&'static str>>(None);
    let (submit_error, set_submit_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    // Read-only preview, recomputed on every keystroke
    let slug_preview = Memo::new(move |_| derive_slug(&title.get()));

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }

        let args = match build_create_args(&title.get()) {
            Ok(args) => args,
            Err(message) => {
                set_field_error.set(Some(message));
                return;
            }
        };

        set_field_error.set(None);
        set_submit_error.set(None);
        set_submitting.set(true);

        let cache = cache.clone();
        spawn_local(async move {
            match gateway::create_tag(&args).await {
                Ok(()) => {
                    // Drop every tag list sub-key, then rerun the active query
                    cache.invalidate_op(GET_TAGS);
                    ctx.reload();
                    set_title.set(String::new());
                    set_submitting.set(false);
                    on_close.run(());
                }
                Err(message) => {
                    set_submitting.set(false);
                    set_submit_error.set(Some(message));
                }
            }
        });
    };

    view! {
        <form class="create-tag-form" on:submit=on_submit>
            <div class="form-field">
                <label for="title">"Tag Title"</label>
                <input
                    id="title"
                    type="text"
                    prop:value=move || title.get()
                    on:input=move |ev| set_title.set(event_target_value(&ev))
                />
                {move || field_error.get().map(|message| view! {
                    <p class="field-error">{message}</p>
                })}
            </div>

            <div class="form-field">
                <label for="slug">"Slug"</label>
                <input
                    id="slug"
                    type="text"
                    readonly
                    prop:value=move || slug_preview.get()
                />
            </div>

            {move || submit_error.get().map(|message| view! {
                <div class="error-banner">
                    <span>{message}</span>
                    <button type="button" on:click=move |_| set_submit_error.set(None)>
                        "Dismiss"
                    </button>
                </div>
            })}

            <div class="form-actions">
                <button type="button" on:click=move |_| on_close.run(())>
                    "Cancel"
                </button>
                <button type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Saving..." } else { "Save" }}
                </button>
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_title_is_rejected() {
        assert_eq!(build_create_args("ab"), Err("Minimum 3 characters!"));
        assert_eq!(build_create_args(""), Err("Minimum 3 characters!"));
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // Three characters, more than three bytes
        assert!(build_create_args("ãéî").is_ok());
    }

    #[test]
    fn test_valid_title_builds_gateway_args() {
        let args = build_create_args("São Paulo").expect("valid title");
        assert_eq!(args.title, "São Paulo");
        assert_eq!(args.slug, derive_slug("São Paulo"));
        assert_eq!(args.slug, "sao-paulo");
        assert_eq!(args.amount_of_videos, 0);
    }

    #[test]
    fn test_three_char_title_is_accepted() {
        assert!(build_create_args("abc").is_ok());
    }
}
