use std::time::Duration;

use leptos::{either::Either, ev, html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::config::MediaConfig;
use crate::media::{
    HoverPreview, LazySource, LoadState, MediaDescriptor, MediaError, ModalSession, Playback,
    VisibilityGate, ZoomController, ZoomEffect, ZoomEvent, ZoomPhase, SCROLL_LOCK,
    SCROLL_LOCK_CLASS,
};

const MEDIA_BASE: &str =
    "w-full h-auto max-h-full object-contain rounded-md transition-all ease-in-out";

fn set_body_scroll_lock(locked: bool) {
    let Some(body) = document().body() else {
        log::warn!("no <body> to toggle scroll lock on");
        return;
    };
    let classes = body.class_list();
    let res = if locked {
        classes.add_1(SCROLL_LOCK_CLASS)
    } else {
        classes.remove_1(SCROLL_LOCK_CLASS)
    };
    if let Err(err) = res {
        log::warn!("couldn't toggle scroll lock: {err:?}");
    }
}

/// Starts playback, calling `on_rejected` if the browser refuses it.
fn play(video: NodeRef<html::Video>, on_rejected: impl FnOnce() + 'static) {
    let Some(el) = video.get_untracked() else {
        return;
    };
    match el.play() {
        Ok(promise) => leptos::task::spawn_local(async move {
            if let Err(err) = wasm_bindgen_futures::JsFuture::from(promise).await {
                // browsers reject play() on autoplay policy or a quick mouseleave
                log::debug!("{}", MediaError::Playback(format!("{err:?}")));
                on_rejected();
            }
        }),
        Err(err) => {
            log::debug!("{}", MediaError::Playback(format!("{err:?}")));
            on_rejected();
        }
    }
}

fn pause(video: NodeRef<html::Video>) {
    if let Some(el) = video.get_untracked() {
        if let Err(err) = el.pause() {
            log::debug!("{}", MediaError::Playback(format!("{err:?}")));
        }
    }
}

/// A lazily loaded image or video tile.
///
/// Image tiles may carry a hover preview video that cross-fades over the
/// poster. Video tiles may open a full-screen zoom overlay on click.
#[component]
pub fn LazyMedia(
    descriptor: MediaDescriptor,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let config = MediaConfig::default();
    let container = NodeRef::<html::Div>::new();
    let poster_ref = NodeRef::<html::Img>::new();
    let video_ref = NodeRef::<html::Video>::new();

    // visibility
    let (visible, set_visible) = signal(descriptor.priority);
    let gate = StoredValue::new(VisibilityGate::new());
    let UseIntersectionObserverReturn {
        is_supported, stop, ..
    } = use_intersection_observer_with_options(
        container,
        move |entries, observer| {
            let fired = gate
                .try_update_value(|g| entries.iter().any(|e| g.observe(e.is_intersecting())))
                .unwrap_or(false);
            if fired {
                observer.disconnect();
                set_visible.set(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .root_margin(config.root_margin.to_string())
            .thresholds(vec![config.threshold]),
    );

    // without IntersectionObserver every tile counts as visible
    Effect::new(move |_| {
        if !is_supported.get_untracked() && gate.try_update_value(|g| g.fail_open()).unwrap_or(false)
        {
            log::debug!("{}, loading media eagerly", MediaError::Unsupported);
            set_visible.set(true);
        }
    });

    on_cleanup(move || {
        gate.try_update_value(|g| g.dispose());
        stop();
    });

    let source = StoredValue::new(LazySource::new(
        descriptor.image_source.clone(),
        descriptor.priority,
    ));
    let (src, set_src) = signal(source.try_update_value(|s| s.initial()).flatten());
    Effect::watch(
        move || visible.get(),
        move |visible, _, _| {
            if let Some(url) = source.try_update_value(|s| s.reveal(*visible)).flatten() {
                set_src.set(Some(url));
            }
        },
        true,
    );

    // loading
    let (load, set_load) = signal(LoadState::default());
    let settle = move |observed: LoadState| {
        set_load.update(|state| {
            if state.sync(observed) && observed == LoadState::Failed {
                log::warn!("{}", MediaError::Load(src.get_untracked().unwrap_or_default()));
            }
        });
    };
    let fade = format!("{}ms", config.load_fade_ms);

    if descriptor.is_video_primary {
        Either::Left(view! {
            <ZoomableVideo
                descriptor
                class
                container
                src
                load
                settle=Callback::new(settle)
                fade
                transition_ms=config.zoom_transition_ms
            />
        })
    } else {
        // a poster served with the page may finish before hydration attaches on:load
        Effect::new(move |_| {
            let Some(img) = poster_ref.get() else {
                return;
            };
            // complete() is also true for an <img> without a src
            if src.get_untracked().is_none() {
                return;
            }
            let complete = img.complete();
            settle(LoadState::from_element(
                complete,
                complete && img.natural_width() > 0,
                false,
            ));
        });

        let (hover, set_hover) = signal(HoverPreview::new(descriptor.has_hover_preview()));
        let on_enter = move |_| {
            if let Some(Some(Playback::Play)) = set_hover.try_update(|h| h.enter()) {
                let session = hover.get_untracked().session();
                play(video_ref, move || {
                    set_hover.try_update(|h| h.play_rejected(session));
                });
            }
        };
        let on_leave = move |_| {
            if let Some(Some(Playback::Pause)) = set_hover.try_update(|h| h.leave()) {
                pause(video_ref);
            }
        };
        let preview = descriptor.video_source.clone().filter(|_| descriptor.has_hover_preview());

        Either::Right(view! {
            <div
                node_ref=container
                class=format!("relative overflow-hidden {class}")
                style:aspect-ratio=descriptor.aspect_ratio()
                on:mouseenter=on_enter
                on:mouseleave=on_leave
            >
                <LoadOverlay load />
                <img
                    node_ref=poster_ref
                    src=move || src.get()
                    alt=descriptor.label.clone()
                    width=descriptor.intrinsic_width.to_string()
                    height=descriptor.intrinsic_height.to_string()
                    class=move || {
                        format!(
                            "{MEDIA_BASE} {} {}",
                            load.get().media_class(),
                            hover.get().poster_class(),
                        )
                    }
                    style:transition-duration=fade.clone()
                    on:load=move |_| settle(LoadState::Loaded)
                    on:error=move |_| settle(LoadState::Failed)
                />
                {move || {
                    let preview = preview.clone()?;
                    visible
                        .get()
                        .then(|| {
                            view! {
                                <video
                                    node_ref=video_ref
                                    src=preview
                                    muted=true
                                    loop=true
                                    playsinline=true
                                    preload="metadata"
                                    class=move || {
                                        format!(
                                            "{MEDIA_BASE} absolute inset-0 object-cover {}",
                                            hover.get().video_class(),
                                        )
                                    }
                                />
                            }
                        })
                }}
            </div>
        })
    }
}

/// Skeleton while loading, a notice once loading has failed.
#[component]
fn LoadOverlay(load: ReadSignal<LoadState>) -> impl IntoView {
    view! {
        <Show when=move || load.get().shows_placeholder()>
            <div class="absolute inset-0 rounded-md bg-gray-200 dark:bg-gray-800 animate-pulse" />
        </Show>
        <Show when=move || load.get().shows_fallback()>
            <div class="absolute inset-0 flex items-center justify-center rounded-md bg-gray-100 dark:bg-gray-900 text-sm text-gray-500">
                "Media unavailable"
            </div>
        </Show>
    }
}

#[component]
fn ZoomableVideo(
    descriptor: MediaDescriptor,
    class: String,
    container: NodeRef<html::Div>,
    src: ReadSignal<Option<String>>,
    load: ReadSignal<LoadState>,
    settle: Callback<LoadState>,
    fade: String,
    transition_ms: u32,
) -> impl IntoView {
    let zoomable = descriptor.is_zoomable();
    let zoom = StoredValue::new(ZoomController::new(zoomable, transition_ms));
    let (phase, set_phase) = signal(ZoomPhase::Closed);
    let session = StoredValue::new(None::<ModalSession>);
    let escape_listener = StoredValue::new(None::<WindowListenerHandle>);
    let timer = StoredValue::new(None::<TimeoutHandle>);
    let elapsed = Trigger::new();
    let escape_pressed = Trigger::new();

    let apply = move |effects: Vec<ZoomEffect>| {
        for effect in effects {
            match effect {
                ZoomEffect::LockScroll => {
                    let guard = ModalSession::begin(&SCROLL_LOCK, set_body_scroll_lock);
                    session.try_update_value(|s| *s = Some(guard));
                }
                ZoomEffect::UnlockScroll => {
                    session.try_update_value(Option::take);
                }
                ZoomEffect::StartTimer(ms) => {
                    match set_timeout_with_handle(
                        move || elapsed.notify(),
                        Duration::from_millis(ms.into()),
                    ) {
                        Ok(handle) => {
                            timer.try_update_value(|t| *t = Some(handle));
                        }
                        Err(err) => {
                            log::warn!("zoom transition timer unavailable: {err:?}");
                            elapsed.notify();
                        }
                    }
                }
                ZoomEffect::CancelTimer => {
                    if let Some(handle) = timer.try_update_value(Option::take).flatten() {
                        handle.clear();
                    }
                }
                ZoomEffect::BindEscape => {
                    let handle = window_event_listener(ev::keydown, move |ev| {
                        if ev.key() == "Escape" {
                            escape_pressed.notify();
                        }
                    });
                    escape_listener.try_update_value(|l| *l = Some(handle));
                }
                ZoomEffect::UnbindEscape => {
                    if let Some(handle) = escape_listener.try_update_value(Option::take).flatten() {
                        handle.remove();
                    }
                }
            }
        }
    };

    let dispatch = move |event: ZoomEvent| {
        let effects = zoom
            .try_update_value(|z| z.handle(event))
            .unwrap_or_default();
        if effects.is_empty() {
            return;
        }
        apply(effects);
        if let Some(next) = zoom.try_with_value(|z| z.phase()) {
            log::debug!("zoom {event:?} -> {next:?}");
            set_phase.try_set(next);
        }
    };

    Effect::watch(
        move || elapsed.track(),
        move |_, _, _| {
            timer.try_update_value(Option::take);
            dispatch(ZoomEvent::TransitionElapsed);
        },
        false,
    );
    Effect::watch(
        move || escape_pressed.track(),
        move |_, _, _| dispatch(ZoomEvent::Dismiss),
        false,
    );
    on_cleanup(move || dispatch(ZoomEvent::Teardown));

    // same race as the poster: a priority video may have data before hydration
    let video_ref = NodeRef::<html::Video>::new();
    Effect::new(move |_| {
        if let Some(video) = video_ref.get() {
            settle.run(LoadState::from_element(
                false,
                video.ready_state() >= web_sys::HtmlMediaElement::HAVE_CURRENT_DATA,
                video.error().is_some(),
            ));
        }
    });

    let full_src = descriptor.image_source.clone();
    let label = descriptor.label.clone();

    view! {
        <div
            node_ref=container
            class=move || {
                let cursor = if zoomable && phase.get() == ZoomPhase::Closed {
                    "cursor-zoom-in"
                } else {
                    ""
                };
                format!("relative overflow-hidden {cursor} {class}")
            }
            style:aspect-ratio=descriptor.aspect_ratio()
            on:click=move |_| dispatch(ZoomEvent::Trigger)
        >
            <LoadOverlay load />
            {move || {
                src.get()
                    .map(|url| {
                        view! {
                            <video
                                src=url
                                aria-label=label.clone()
                                muted=true
                                loop=true
                                autoplay=true
                                playsinline=true
                                preload="metadata"
                                width=descriptor.intrinsic_width.to_string()
                                height=descriptor.intrinsic_height.to_string()
                                class=move || format!("{MEDIA_BASE} {}", load.get().media_class())
                                style:transition-duration=fade.clone()
                                node_ref=video_ref
                                on:loadeddata=move |_| settle.run(LoadState::Loaded)
                                on:error=move |_| settle.run(LoadState::Failed)
                            />
                        }
                    })
            }}
        </div>
        <Show when=move || phase.get().is_overlay_mounted()>
            <div
                class=move || {
                    format!(
                        "fixed inset-0 z-50 flex items-center justify-center bg-black/90 {}",
                        phase.get().overlay_class(),
                    )
                }
                role="dialog"
                aria-modal="true"
                on:click=move |_| dispatch(ZoomEvent::Dismiss)
                on:touchend=move |_| dispatch(ZoomEvent::Dismiss)
            >
                <div
                    class="relative max-w-[75vw] max-h-[75vh] zoom-content"
                    on:click=|ev| ev.stop_propagation()
                    on:touchend=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute -top-10 right-0 text-white text-2xl hover:text-gray-300"
                        aria-label="Close"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            dispatch(ZoomEvent::Dismiss);
                        }
                    >
                        "✕"
                    </button>
                    <video
                        src=full_src.clone()
                        muted=true
                        loop=true
                        autoplay=true
                        playsinline=true
                        class="max-h-[75vh] w-auto rounded-md"
                    />
                </div>
            </div>
        </Show>
    }
}
