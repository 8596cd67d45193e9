use chrono::Utc;
use leptos::prelude::*;
use leptos_use::use_interval_fn;

use crate::clock::format_clock;
use crate::config::SITE_PROFILE;

/// Owner's wall-clock time. Renders nothing until mounted in the browser so
/// the server's time never ends up in the hydrated markup.
#[component]
pub fn RigaClock() -> impl IntoView {
    let (time, set_time) = signal(None::<String>);

    Effect::new(move |_| set_time.set(Some(format_clock(Utc::now()))));
    use_interval_fn(move || set_time.set(Some(format_clock(Utc::now()))), 1000_u64);

    view! {
        {move || {
            time.get()
                .map(|t| {
                    view! {
                        <span class="text-sm tabular-nums text-gray-600 dark:text-gray-400">
                            {t}
                            " "
                            {SITE_PROFILE.location}
                        </span>
                    }
                })
        }}
    }
}
