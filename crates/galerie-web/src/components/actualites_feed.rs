//! "Actualités" feed with infinite scroll
//!
//! Pages are requested through [`Feed`], which hands out one request at a
//! time and discards responses that a reset has superseded. Scroll events
//! are throttled; after each page the distance to the bottom is measured
//! again so a short page cannot stall the feed. The feed's [`AbortHandle`]
//! is aborted on unmount so late responses and scroll events are ignored.

use galerie_core::assets::PLACEHOLDER_IMAGE;
use galerie_core::feed::{is_near_bottom, Feed, FeedUpdate, PageRequest, ScrollThrottle};
use galerie_core::models::Actualite;
use galerie_core::AbortHandle;
use leptos::logging::{error, log};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::i18n::use_i18n;

type NewsFeed = RwSignal<Feed<Actualite>>;

fn load_page(feed: NewsFeed, abort: AbortHandle, request: PageRequest) {
    spawn_local(async move {
        let result = api::fetch_actualites(request.page).await;
        abort.run(|| match result {
            Ok(items) => {
                let mut update = FeedUpdate::Stale;
                feed.update(|feed| {
                    update = feed.complete(request, items);
                    match update {
                        FeedUpdate::Stale => log!("Dropped stale news page {}", request.page),
                        FeedUpdate::Exhausted => log!("News feed exhausted after page {}", feed.page()),
                        FeedUpdate::Replaced(_) | FeedUpdate::Appended(_) => {}
                    }
                });
                if update.grew() {
                    fill_viewport(feed, abort.clone());
                }
            }
            Err(err) => {
                error!("Failed to load news page {}: {}", request.page, err);
                feed.update(|feed| {
                    feed.fail(request);
                });
            }
        });
    });
}

/// Keep loading while the rendered list does not reach past the viewport
///
/// Runs on the next frame so the distance is measured with the new items
/// laid out.
fn fill_viewport(feed: NewsFeed, abort: AbortHandle) {
    request_animation_frame(move || {
        if abort.is_aborted() {
            return;
        }
        let near_bottom = window_near_bottom();
        let mut next = None;
        feed.update(|feed| next = feed.request_fill(near_bottom));
        if let Some(request) = next {
            load_page(feed, abort, request);
        }
    });
}

/// Remaining scroll distance of the document against the viewport height
fn window_near_bottom() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let scroll_top = window.scroll_y().unwrap_or(0.0);
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let scroll_height = window
        .document()
        .and_then(|document| document.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or(0.0);
    is_near_bottom(scroll_top, viewport_height, scroll_height)
}

#[component]
pub fn ActualitesFeed() -> impl IntoView {
    let i18n = use_i18n();
    let feed: NewsFeed = RwSignal::new(Feed::new());
    let abort = AbortHandle::new();
    let throttle = StoredValue::new(ScrollThrottle::default());

    let request_more = {
        let abort = abort.clone();
        move || {
            let mut next = None;
            feed.update(|feed| next = feed.request_next());
            if let Some(request) = next {
                load_page(feed, abort.clone(), request);
            }
        }
    };

    let refresh = {
        let abort = abort.clone();
        move |_| {
            let mut request = None;
            feed.update(|feed| request = Some(feed.reset()));
            if let Some(request) = request {
                load_page(feed, abort.clone(), request);
            }
        }
    };

    request_more();

    let scroll_abort = abort.clone();
    let scroll_handle = leptos::leptos_dom::helpers::window_event_listener(leptos::ev::scroll, move |_| {
        if scroll_abort.is_aborted() {
            return;
        }
        let now = js_sys::Date::now();
        let mut fire = false;
        throttle.update_value(|throttle| fire = throttle.should_fire(now));
        if fire && window_near_bottom() {
            request_more();
        }
    });

    on_cleanup(move || {
        abort.abort();
        scroll_handle.remove();
    });

    let resolver = api::assets();
    let items = move || {
        feed.with(|feed| {
            feed.items()
                .iter()
                .cloned()
                .enumerate()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="actualites">
            <div class="section-header">
                <h2>{move || i18n.t("news.title")}</h2>
                <button class="btn-icon" on:click=refresh aria-label="↻">"↻"</button>
            </div>

            <div class="actualites-list">
                <For
                    each=items
                    key=|(index, item)| (*index, item.id)
                    children=move |(_, item)| {
                        let image = item
                            .image
                            .as_deref()
                            .map(|path| resolver.resolve_or(Some(path), PLACEHOLDER_IMAGE));
                        let link = item.external_link().map(str::to_string);
                        view! {
                            <article class="actualite">
                                {image.map(|src| view! {
                                    <img class="actualite-image" src=src alt=item.titre.clone() loading="lazy" />
                                })}
                                <div class="actualite-body">
                                    <h3>{item.titre.clone()}</h3>
                                    {item.description.clone().map(|text| view! { <p>{text}</p> })}
                                    {link.map(|href| view! {
                                        <a href=href target="_blank" rel="noopener noreferrer">
                                            {move || i18n.t("common.read_more")} " →"
                                        </a>
                                    })}
                                </div>
                            </article>
                        }
                    }
                />
            </div>

            {move || {
                feed.with(|feed| {
                    if feed.is_loading() {
                        view! { <p class="feed-status">{move || i18n.t("news.loading_more")}</p> }.into_any()
                    } else if feed.is_empty() {
                        view! { <p class="feed-status">{move || i18n.t("news.empty")}</p> }.into_any()
                    } else if feed.is_exhausted() {
                        view! { <p class="feed-status">{move || i18n.t("news.end")}</p> }.into_any()
                    } else {
                        ().into_any()
                    }
                })
            }}
        </section>
    }
}
