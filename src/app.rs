//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{compose_modal::ComposeModal, feed::Feed, toolbar::Toolbar};
use crate::state::compose::ComposeState;
use crate::state::feed::FeedStore;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Applies the persisted theme, opens the feed store (seeding it on first
/// run), and provides the shared state contexts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = crate::util::theme::read_preference(&BrowserStorage);
    crate::util::theme::apply(theme);

    let feed = RwSignal::new(FeedStore::open(BrowserStorage));
    let ui = RwSignal::new(UiState::with_theme(theme));
    let compose = RwSignal::new(ComposeState::default());

    provide_context(feed);
    provide_context(ui);
    provide_context(compose);

    view! {
        <Title text="InstaFront"/>
        <Toolbar/>
        <main class="feed-page">
            <Feed/>
        </main>
        <ComposeModal/>
    }
}
