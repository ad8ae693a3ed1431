//! Feed card for one post: author header, image, action row, likes, comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! A card looks its post up in the feed store by id when it mounts rather than
//! trusting the record it was rendered from. Every interaction goes through
//! `FeedStore::mutate`, which persists the whole list; the card's memo then
//! re-renders only its own like and comment fragments.

use leptos::prelude::*;

use crate::components::emoji_picker::EmojiPicker;
use crate::config;
use crate::state::feed::BrowserFeed;
use crate::state::post::Post;
use crate::state::share::ShareFeedback;

/// One post in the feed, identified by `id`.
#[component]
pub fn PostCard(id: String) -> impl IntoView {
    let feed = expect_context::<RwSignal<BrowserFeed>>();
    let Some(initial) = feed.with_untracked(|store| store.get(&id).cloned()) else {
        log::debug!("no post {id} to render");
        return ().into_any();
    };
    let post_id = StoredValue::new(id);
    let post = Memo::new(move |_| feed.with(|store| post_id.with_value(|id| store.get(id).cloned())));

    let comments_open = RwSignal::new(true);
    let emoji_open = RwSignal::new(false);
    let draft = RwSignal::new(String::new());
    let share = RwSignal::new(ShareFeedback::default());
    let input_ref = NodeRef::<leptos::html::Input>::new();

    let apply = move |change: fn(&mut Post)| {
        feed.update(|store| {
            post_id.with_value(|id| {
                store.mutate(id, |p| {
                    change(p);
                    true
                });
            });
        });
    };
    let on_like = move |_| apply(Post::toggle_like);
    let on_double_tap = move |_| apply(Post::double_tap_like);

    let on_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        let mut added = false;
        feed.update(|store| {
            added = post_id.with_value(|id| store.mutate(id, |p| p.add_comment(&text)));
        });
        if added {
            draft.set(String::new());
        }
    };

    let on_pick = Callback::new(move |glyph: &'static str| {
        draft.update(|text| text.push_str(glyph));
        #[cfg(feature = "csr")]
        {
            if let Some(input) = input_ref.get() {
                if let Err(err) = input.focus() {
                    log::debug!("could not focus comment input: {err:?}");
                }
            }
        }
    });

    let on_share = move |_| {
        let Some(text) = post.with_untracked(|p| p.as_ref().map(Post::share_text)) else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::util::clipboard::copy_text(&text).await {
                Ok(()) => {
                    let mut seq = 0;
                    share.update(|s| seq = s.show());
                    gloo_timers::future::sleep(config::SHARE_CONFIRMATION_DELAY).await;
                    share.update(|s| s.expire(seq));
                }
                Err(err) => log::debug!("share copy failed: {err}"),
            }
        });
        #[cfg(not(feature = "csr"))]
        log::trace!("share needs a browser clipboard: {text}");
    };

    let liked = move || post.with(|p| p.as_ref().is_some_and(|p| p.liked));
    let heart_icon = move || post.with(|p| p.as_ref().map_or(config::HEART_ICON, Post::heart_icon));
    let likes_label = move || post.with(|p| p.as_ref().map(Post::likes_label).unwrap_or_default());
    let comments_label = move || post.with(|p| p.as_ref().map(Post::comments_label).unwrap_or_default());
    let comments = move || post.with(|p| p.as_ref().map(|p| p.comments.clone()).unwrap_or_default());

    let Post { author_name, author_avatar, image, caption, .. } = initial;
    let caption_line = (!caption.is_empty()).then(|| {
        let author_name = author_name.clone();
        view! {
            <p class="post-card__caption">
                <span class="post-card__caption-author">{author_name}</span>
                " "
                {caption}
            </p>
        }
    });

    view! {
        <article class="post-card" data-post-id=post_id.get_value()>
            <header class="post-card__header">
                <img class="post-card__avatar" src=author_avatar alt="Perfil"/>
                <span class="post-card__author">{author_name}</span>
                <span class="post-card__spacer"></span>
                <button class="icon post-card__more" aria-label="Más">"•••"</button>
            </header>

            <div class="post-card__media">
                <img class="post-card__image" src=image alt="Publicación" on:dblclick=on_double_tap/>
            </div>

            <div class="post-card__actions">
                <button class="icon post-card__like" aria-label="Me gusta" on:click=on_like>
                    <img class="post-card__heart" class:liked=liked src=heart_icon alt="Me gusta"/>
                </button>
                <button
                    class="icon post-card__toggle-comments"
                    aria-label="Comentarios"
                    on:click=move |_| comments_open.update(|open| *open = !*open)
                >
                    <img class="post-card__icon" src=config::COMMENT_ICON alt="Comentarios"/>
                </button>
                <button class="icon post-card__share" aria-label="Compartir" on:click=on_share>
                    {move || {
                        if share.with(|s| s.shown) {
                            config::SHARE_CONFIRMATION.into_any()
                        } else {
                            view! { <img class="post-card__icon" src=config::SHARE_ICON alt="Compartir"/> }.into_any()
                        }
                    }}
                </button>
                <button
                    class="icon post-card__show-emoji"
                    aria-label="Emojis"
                    on:click=move |_| emoji_open.update(|open| *open = !*open)
                >
                    <img class="post-card__icon post-card__icon--emoji" src=config::EMOJI_ICON alt="Emoji"/>
                </button>
            </div>

            <p class="post-card__likes">{likes_label}</p>
            {caption_line}

            <Show when=move || comments_open.get()>
                <section class="post-card__comments">
                    <p class="post-card__comments-count">{comments_label}</p>
                    <div class="post-card__comments-list">
                        {move || comments().into_iter().map(|text| view! { <p>{text}</p> }).collect_view()}
                    </div>
                    <form class="post-card__comment-form" on:submit=on_comment>
                        <Show when=move || emoji_open.get()>
                            <EmojiPicker on_pick=on_pick/>
                        </Show>
                        <input
                            type="text"
                            name="comentario"
                            placeholder="Escribe un comentario..."
                            autocomplete="off"
                            node_ref=input_ref
                            prop:value=move || draft.get()
                            on:input=move |ev| draft.set(event_target_value(&ev))
                        />
                        <button type="submit" class="btn btn--primary">"Publicar"</button>
                    </form>
                </section>
            </Show>
        </article>
    }
    .into_any()
}
