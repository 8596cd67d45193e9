use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::use_media_query;

use crate::config::TOOLTIP_MAX_TOUCH_WIDTH;

/// Gap between the pointer and the tooltip's top-left corner.
const POINTER_OFFSET: i32 = 10;

fn tooltip_offset(client_x: i32, client_y: i32) -> (i32, i32) {
    (client_x + POINTER_OFFSET, client_y + POINTER_OFFSET)
}

/// Follows the pointer while hovering `children`. Nothing is shown on
/// touch-sized viewports.
#[component]
pub fn Tooltip(#[prop(into)] content: String, children: Children) -> impl IntoView {
    let is_touch = use_media_query(format!("(max-width: {TOOLTIP_MAX_TOUCH_WIDTH}px)"));
    let (position, set_position) = signal(None::<(i32, i32)>);

    let track = move |ev: MouseEvent| {
        if !is_touch.get_untracked() {
            set_position.set(Some(tooltip_offset(ev.client_x(), ev.client_y())));
        }
    };

    view! {
        <div
            class="inline-block"
            on:mouseenter=track
            on:mousemove=track
            on:mouseleave=move |_| set_position.set(None)
        >
            {children()}
            {move || {
                position
                    .get()
                    .filter(|_| !is_touch.get())
                    .map(|(x, y)| {
                        view! {
                            <div
                                role="tooltip"
                                class="fixed z-50 pointer-events-none whitespace-nowrap rounded-md px-2 py-1 text-sm bg-gray-900 text-white dark:bg-white dark:text-gray-900 shadow-md"
                                style:left=format!("{x}px")
                                style:top=format!("{y}px")
                            >
                                {content.clone()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_sits_below_right_of_pointer() {
        assert_eq!(tooltip_offset(0, 0), (10, 10));
        assert_eq!(tooltip_offset(300, 120), (310, 130));
    }
}
