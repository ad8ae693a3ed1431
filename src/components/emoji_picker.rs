//! Emoji palette shown under a post's comment input.

use leptos::prelude::*;

use crate::config;

/// Row of emoji buttons; clicking one hands its glyph to `on_pick`.
#[component]
pub fn EmojiPicker(on_pick: Callback<&'static str>) -> impl IntoView {
    view! {
        <div class="emoji-picker">
            {config::EMOJI_PALETTE
                .iter()
                .map(|&glyph| {
                    view! {
                        <button type="button" class="emoji-picker__btn" on:click=move |_| on_pick.run(glyph)>
                            {glyph}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
