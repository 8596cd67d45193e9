use leptos::{either::Either, prelude::*};
use leptos_use::{use_clipboard_with_options, UseClipboardOptions, UseClipboardReturn};

use crate::config::{COPIED_RESET_MS, SITE_PROFILE};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    Default,
    #[default]
    Outline,
}

fn button_class(variant: ButtonVariant, copied: bool) -> &'static str {
    match (variant, copied) {
        (_, true) => {
            "inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-medium bg-green-600 text-white cursor-default"
        }
        (ButtonVariant::Default, false) => {
            "inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-medium bg-gray-900 text-white hover:bg-gray-700 dark:bg-white dark:text-gray-900 dark:hover:bg-gray-200"
        }
        (ButtonVariant::Outline, false) => {
            "inline-flex items-center gap-2 rounded-md px-4 py-2 text-sm font-medium border border-gray-300 hover:bg-gray-100 dark:border-gray-700 dark:hover:bg-gray-800"
        }
    }
}

/// Copies the owner's email address, then says so for a couple of seconds.
#[component]
pub fn CopyEmailButton(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let UseClipboardReturn { copied, copy, .. } =
        use_clipboard_with_options(UseClipboardOptions::default().copied_reset_delay(COPIED_RESET_MS));

    view! {
        <button
            type="button"
            class=move || format!("{} {class}", button_class(variant, copied.get()))
            disabled=move || copied.get()
            on:click=move |_| {
                if !copied.get_untracked() {
                    copy(SITE_PROFILE.email);
                }
            }
        >
            {move || {
                if copied.get() {
                    Either::Left(view! { <span aria-hidden="true">"✓"</span> "Copied!" })
                } else {
                    Either::Right(view! { <span aria-hidden="true">"⧉"</span> "Copy email" })
                }
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copied_look_wins_over_variant() {
        assert_eq!(
            button_class(ButtonVariant::Default, true),
            button_class(ButtonVariant::Outline, true)
        );
        assert_ne!(
            button_class(ButtonVariant::Default, false),
            button_class(ButtonVariant::Outline, false)
        );
    }

    #[test]
    fn test_outline_is_default() {
        assert_eq!(ButtonVariant::default(), ButtonVariant::Outline);
    }
}
