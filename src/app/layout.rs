use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use super::{clock::RigaClock, status::CurrentlyEmoji};
use crate::clock::format_timestamp;
use crate::config::{BUILD_TIME, SITE_PROFILE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="flex items-center justify-between py-6">
            <A href="/">
                <span class="text-2xl font-bold tracking-tight">{SITE_PROFILE.initials}</span>
            </A>
            <div class="flex items-center gap-2">
                <CurrentlyEmoji />
                <RigaClock />
            </div>
        </header>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let updated = format_timestamp(BUILD_TIME).unwrap_or_else(|| BUILD_TIME.to_string());
    let year = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.with_timezone(&Utc).year())
        .unwrap_or_else(|_| Utc::now().year());

    view! {
        <footer class="mt-16 py-6 border-t border-gray-200 dark:border-gray-800 text-sm text-gray-500 flex flex-col sm:flex-row sm:justify-between gap-2">
            <span>"Last updated " {updated}</span>
            <span>"© " {year} " " {SITE_PROFILE.full_name}</span>
        </footer>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <Title text="Page not found" />
        <div class="flex flex-col items-center justify-center py-24 gap-4 text-center">
            <h1 class="text-6xl font-bold">"404"</h1>
            <p class="text-gray-600 dark:text-gray-400">
                "The page you're looking for doesn't exist."
            </p>
            <A href="/">
                <span class="inline-block rounded-md px-4 py-2 bg-gray-900 text-white dark:bg-white dark:text-gray-900">
                    "Go back home"
                </span>
            </A>
        </div>
    }
}
