//! Reactive Hooks
//!
//! Small reusable Leptos hooks.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Mirror `value`, committing a change only after `delay_ms` of silence.
///
/// Every input change schedules a commit and invalidates the previously
/// scheduled one, so only the final value of a burst propagates.
pub fn use_debounced_value<T>(value: Signal<T>, delay_ms: u32) -> ReadSignal<T>
where
    T: Clone + Send + Sync + 'static,
{
    let (debounced, set_debounced) = signal(value.get_untracked());
    let generation = StoredValue::new(0u64);

    Effect::new(move |_| {
        let next = value.get();
        let ticket = generation.with_value(|current| current + 1);
        generation.set_value(ticket);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            // A newer change canceled this commit
            if generation.get_value() == ticket {
                set_debounced.set(next);
            }
        });
    });

    debounced
}

#[cfg(test)]
mod tests {
    use super::*;

    // Callers pass owned element types; a regression toward unsized
    // inference at the call site fails this coercion at compile time.
    #[test]
    fn test_hook_instantiates_for_owned_strings() {
        let _: fn(Signal<String>, u32) -> ReadSignal<String> = use_debounced_value::<String>;
    }
}
