use leptos::prelude::*;
use leptos_router::{components::A, hooks::use_location};

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use super::{contact::CopyEmailButton, tooltip::Tooltip};
use crate::config::SITE_PROFILE;

const DARK_MODE_CLASS: &str = "dark-mode";

struct NavLink {
    href: &'static str,
    icon: &'static str,
    label: &'static str,
}

const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "/", icon: "⌂", label: "Home" },
    NavLink { href: "/projects", icon: "▦", label: "Projects" },
    NavLink { href: "/about", icon: "☺", label: "About" },
];

/// Whether `pathname` falls under the nav entry for `href`.
fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        pathname == "/"
    } else {
        pathname == href || pathname.starts_with(&format!("{href}/"))
    }
}

fn set_dark_mode_class(on: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let classes = body.class_list();
    let res = if on {
        classes.add_1(DARK_MODE_CLASS)
    } else {
        classes.remove_1(DARK_MODE_CLASS)
    };
    if let Err(err) = res {
        log::warn!("couldn't toggle dark mode: {err:?}");
    }
}

/// Dock pinned to the bottom of the viewport.
#[component]
pub fn FloatingNavbar() -> impl IntoView {
    let pathname = use_location().pathname;

    #[cfg(feature = "hydrate")]
    let (dark, set_dark, _) = use_local_storage::<bool, JsonSerdeWasmCodec>("dark_mode");
    #[cfg(not(feature = "hydrate"))]
    let (dark, set_dark) = signal(false);

    Effect::new(move |_| set_dark_mode_class(dark.get()));

    let item = "flex items-center justify-center w-10 h-10 rounded-full text-lg hover:bg-gray-100 dark:hover:bg-gray-800";

    view! {
        <nav class="fixed bottom-4 left-1/2 -translate-x-1/2 z-40 flex items-center gap-1 rounded-full border border-gray-200 dark:border-gray-800 bg-white/80 dark:bg-gray-950/80 backdrop-blur px-3 py-2 shadow-lg">
            {NAV_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <Tooltip content=link.label>
                            <A href=link.href>
                                <span aria-label=link.label class=move || {
                                    if is_active(link.href, &pathname.get()) {
                                        format!("{item} bg-gray-100 dark:bg-gray-800")
                                    } else {
                                        item.to_string()
                                    }
                                }>{link.icon}</span>
                            </A>
                        </Tooltip>
                    }
                })
                .collect_view()}
            <Tooltip content="Resume">
                <a
                    href=SITE_PROFILE.resume_url
                    target="_blank"
                    rel="noopener noreferrer"
                    aria-label="Resume"
                    class=item
                >
                    "📄"
                </a>
            </Tooltip>
            <div class="w-px h-6 mx-1 bg-gray-200 dark:bg-gray-800" />
            <CopyEmailButton class="rounded-full" />
            <Tooltip content="Toggle theme">
                <button
                    type="button"
                    class=item
                    aria-label="Toggle dark mode"
                    on:click=move |_| set_dark.update(|d| *d = !*d)
                >
                    {move || if dark.get() { "☀" } else { "☾" }}
                </button>
            </Tooltip>
        </nav>
    }
}
