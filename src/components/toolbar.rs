//! Top bar with brand, search box, new-post trigger, and theme toggle.
//!
//! SYSTEM CONTEXT
//! ==============
//! These controls stay visible for the whole session and only write to UI and
//! compose state; the feed reacts to them.

use leptos::prelude::*;

use crate::state::compose::ComposeState;
use crate::state::ui::UiState;
use crate::util::storage::BrowserStorage;

/// Header toolbar for the feed page.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let compose = expect_context::<RwSignal<ComposeState>>();

    view! {
        <header class="toolbar">
            <span class="toolbar__brand">"InstaFront"</span>
            <span class="toolbar__divider" aria-hidden="true"></span>

            <input
                id="search"
                class="toolbar__search"
                type="search"
                placeholder="Buscar"
                autocomplete="off"
                prop:value=move || ui.with(|u| u.search_query.clone())
                on:input=move |ev| {
                    let query = event_target_value(&ev);
                    ui.update(|u| u.search_query = query);
                }
            />

            <span class="toolbar__spacer"></span>

            <button id="newPostBtn" class="btn toolbar__new-post" on:click=move |_| compose.update(ComposeState::open)>
                "+ Nueva publicación"
            </button>

            <button
                id="themeToggle"
                class="btn toolbar__theme-toggle"
                on:click=move |_| {
                    let current = ui.get_untracked().theme;
                    let next = crate::util::theme::toggle(current, &mut BrowserStorage);
                    ui.update(|u| u.theme = next);
                }
                title="Cambiar tema"
            >
                {move || ui.with(|u| u.theme.toggle_icon())}
            </button>
        </header>
    }
}
