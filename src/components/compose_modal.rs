//! Modal for publishing a new post from a local image file.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting reads the selected image asynchronously. The modal stays open
//! until the read settles and the post is stored: success prepends the post
//! and closes; a failed read, a timeout, or a rejected save shows a message and
//! lets the user retry or cancel.

use leptos::prelude::*;

use crate::config;
use crate::state::compose::ComposeState;
#[cfg(feature = "csr")]
use crate::state::feed::BrowserFeed;
#[cfg(feature = "csr")]
use crate::state::post::{Post, post_id_at};
#[cfg(feature = "csr")]
use crate::state::ui::UiState;

#[component]
pub fn ComposeModal() -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();
    #[cfg(feature = "csr")]
    let feed = expect_context::<RwSignal<BrowserFeed>>();
    #[cfg(feature = "csr")]
    let ui = expect_context::<RwSignal<UiState>>();
    let file_ref = NodeRef::<leptos::html::Input>::new();

    let on_close = Callback::new(move |()| compose.update(ComposeState::close));
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let file = selected_file(file_ref);
            let mut seq = None;
            compose.update(|c| seq = c.begin_read(file.is_some()));
            let (Some(seq), Some(file)) = (seq, file) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::file_read::read_data_url_within(file, config::READ_TIMEOUT).await {
                    Ok(image) => publish(feed, ui, compose, seq, image),
                    Err(err) => {
                        log::warn!("could not read selected image: {err}");
                        compose.update(|c| c.fail_read(seq, config::READ_FAILED_MESSAGE));
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        log::trace!("image selection needs a browser ({} read timeout)", config::READ_TIMEOUT.as_secs());
    };

    let reading = move || compose.with(ComposeState::is_reading);
    let error = move || compose.with(|c| c.error().map(str::to_owned));

    view! {
        <Show when=move || compose.with(ComposeState::is_open)>
            <div id="newPostModal" class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--compose"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="dialog__header">
                        <h2>"Nueva publicación"</h2>
                        <button
                            id="closeModal"
                            type="button"
                            class="dialog__close"
                            title="Cerrar"
                            on:click=move |_| on_close.run(())
                        >
                            "✕"
                        </button>
                    </div>
                    <form id="newPostForm" class="dialog__form" on:submit=on_submit>
                        <label class="dialog__label">
                            "Imagen"
                            <input id="postImage" class="dialog__input" type="file" accept="image/*" node_ref=file_ref/>
                        </label>
                        <label class="dialog__label">
                            "Descripción"
                            <textarea
                                id="postCaption"
                                class="dialog__input"
                                rows="3"
                                prop:value=move || compose.with(|c| c.caption.clone())
                                on:input=move |ev| {
                                    let caption = event_target_value(&ev);
                                    compose.update(|c| c.caption = caption);
                                }
                            ></textarea>
                        </label>
                        <Show when=move || error().is_some()>
                            <p class="dialog__danger">{move || error().unwrap_or_default()}</p>
                        </Show>
                        <div class="dialog__actions">
                            <button id="cancelModal" type="button" class="btn" on:click=move |_| on_close.run(())>
                                "Cancelar"
                            </button>
                            <button type="submit" class="btn btn--primary" disabled=reading>
                                {move || if reading() { "Leyendo…" } else { "Publicar" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}

#[cfg(feature = "csr")]
fn selected_file(input: NodeRef<leptos::html::Input>) -> Option<web_sys::File> {
    input.get()?.files()?.get(0)
}

/// Finish read `seq`: store the post first and show the whole feed, or keep the
/// modal open with an error when it cannot be saved.
#[cfg(feature = "csr")]
fn publish(
    feed: RwSignal<BrowserFeed>,
    ui: RwSignal<UiState>,
    compose: RwSignal<ComposeState>,
    seq: u64,
    image: String,
) {
    let Some(caption) = compose.with_untracked(|c| c.pending_caption(seq)) else {
        log::debug!("dropping stale image read {seq}");
        return;
    };
    let post = Post::composed(post_id_at(crate::util::clock::now_ms()), image, &caption);
    let mut saved = None;
    feed.update(|store| saved = Some(store.prepend(post)));
    match saved {
        Some(Ok(_)) => {
            compose.update(|c| {
                c.finish_read(seq);
            });
            ui.update(UiState::clear_search);
        }
        Some(Err(err)) => {
            log::warn!("could not save new post: {err}");
            compose.update(|c| c.fail_read(seq, config::SAVE_FAILED_MESSAGE));
        }
        None => log::debug!("feed store is gone; dropping image read {seq}"),
    }
}
