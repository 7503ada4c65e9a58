//! Tag Admin App
//!
//! Root component: provides the query cache and navigable state, keeps the
//! latter in sync with back/forward navigation, and hosts the tags page.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::components::TagsPage;
use crate::context::AppContext;
use crate::models::TagPage;
use crate::query::QueryClient;
use crate::route;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(route::current());

    // Provide context to all children
    provide_context(ctx);
    provide_context(QueryClient::<TagPage>::new());

    // Resync filter/page when the user navigates back/forward
    let on_popstate = Closure::<dyn FnMut()>::new(move || ctx.sync_from_location());
    if let Some(window) = web_sys::window() {
        let _ = window
            .add_event_listener_with_callback("popstate", on_popstate.as_ref().unchecked_ref());
    }
    on_popstate.forget();

    view! {
        <div class="app-layout">
            <main class="main-content">
                <TagsPage />
            </main>
        </div>
    }
}
