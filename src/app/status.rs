use chrono::Utc;
use leptos::prelude::*;
use leptos_use::use_interval_fn;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::tooltip::Tooltip;
use crate::status::Activity;

const REFRESH_MS: u64 = 60_000;

/// Emoji for what the owner is up to, with the label in a tooltip.
/// Waves on the very first visit only.
#[component]
pub fn CurrentlyEmoji() -> impl IntoView {
    let (activity, set_activity) = signal(Activity::current(Utc::now()));
    let (animate, set_animate) = signal(false);

    #[cfg(feature = "hydrate")]
    let (cached, set_cached, _) =
        use_local_storage::<Option<Activity>, JsonSerdeWasmCodec>("current_status");
    #[cfg(feature = "hydrate")]
    let (seen, set_seen, _) = use_local_storage::<bool, JsonSerdeWasmCodec>("initial_page_load");

    #[cfg(feature = "hydrate")]
    Effect::watch(
        || (),
        move |_, _, _| {
            if let Some(prev) = cached.get_untracked() {
                set_activity.set(prev);
            }
            if !seen.get_untracked() {
                set_animate.set(true);
                set_seen.set(true);
            }
        },
        true,
    );

    use_interval_fn(
        move || {
            let now = Activity::current(Utc::now());
            set_activity.set(now);
            #[cfg(feature = "hydrate")]
            set_cached.set(Some(now));
        },
        REFRESH_MS,
    );

    view! {
        {move || {
            let activity = activity.get();
            view! {
                <Tooltip content=activity.label()>
                    <span
                        class=move || {
                            if animate.get() { "inline-block animate-wave" } else { "inline-block" }
                        }
                        role="img"
                        aria-label=activity.label()
                    >
                        {activity.emoji()}
                    </span>
                </Tooltip>
            }
        }}
    }
}
