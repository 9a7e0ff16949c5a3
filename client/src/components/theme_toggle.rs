//! Sun/moon button that flips the theme.

use leptos::prelude::*;

use crate::components::icons::{Glyph, Icon};
use crate::state::ui::UiState;

/// Theme toggle. Shows the sun in dark mode and the moon in light mode.
#[component]
pub fn ThemeToggle(#[prop(into)] class: String) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class=class
            on:click=move |_| {
                let current = ui.get_untracked().is_dark();
                let next = crate::util::dark_mode::toggle(current);
                ui.update(|u| u.set_dark(next));
            }
            aria-label="Toggle dark mode"
            title="Toggle dark mode"
        >
            {move || {
                let glyph = if ui.get().is_dark() { Glyph::Sun } else { Glyph::Moon };
                view! { <Icon glyph=glyph/> }
            }}
        </button>
    }
}
