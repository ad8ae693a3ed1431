//! The feed: one card per visible post, in store order.
//!
//! DESIGN
//! ======
//! Visibility is derived from the store and the search query on every change;
//! search never writes to storage. Cards are keyed by [`CardKey`]: a new query
//! or a new post rebuilds every card, while a like or comment leaves the cards
//! mounted and only the changed card's fragments update.

use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::state::feed::{BrowserFeed, CardKey, card_keys};
use crate::state::ui::UiState;

#[component]
pub fn Feed() -> impl IntoView {
    let feed = expect_context::<RwSignal<BrowserFeed>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let visible = Memo::new(move |_| ui.with(|u| feed.with(|store| card_keys(store.posts(), &u.search_query))));

    view! {
        <section id="feed" class="feed">
            <For
                each=move || visible.get()
                key=|key| key.clone()
                children=move |key: CardKey| view! { <PostCard id=key.id/> }
            />
        </section>
    }
}
