//! Identity sidebar: fixed panel on desktop, header + overlay menu on mobile.
//!
//! ARCHITECTURE
//! ============
//! Both layouts are always rendered and CSS picks one by viewport width. They
//! share the same `SiteState` (and therefore the same affiliation grid) and
//! the same `UiState` theme, so toggling in either updates both.

use leptos::prelude::*;

use crate::components::affiliation_grid::{AffiliationGrid, GridVariant};
use crate::components::icons::{Glyph, Icon};
use crate::components::nav_links::{NavLinks, NavStyle};
use crate::components::social_links::SocialLinks;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::site::SiteState;
use crate::state::ui::UiState;
use crate::util::reveal::Reveal;

/// Sidebar for both viewport classes.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <MobileHeader/>
        <MobileMenu/>
        <DesktopSidebar/>
    }
}

#[component]
fn MobileHeader() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <header class="mobile-header">
            <h1 class="mobile-header__name">{site.content.personal.name.clone()}</h1>
            <div class="mobile-header__actions">
                <ThemeToggle class="icon-button"/>
                <button
                    class="icon-button"
                    on:click=move |_| ui.update(UiState::toggle_menu)
                    aria-label="Toggle menu"
                >
                    {move || {
                        let glyph = if ui.get().mobile_menu_open { Glyph::Close } else { Glyph::Menu };
                        view! { <Icon glyph=glyph size=24/> }
                    }}
                </button>
            </div>
        </header>
    }
}

#[component]
fn MobileMenu() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let ui = expect_context::<RwSignal<UiState>>();
    let close = Callback::new(move |()| ui.update(UiState::close_menu));

    let content = site.content.clone();
    view! {
        <Show when=move || ui.get().mobile_menu_open>
            <div class="mobile-menu reveal reveal--drop">
                <div class="mobile-menu__portrait">
                    <img src=content.personal.portrait_url.clone() alt=content.personal.name.clone()/>
                </div>
                <div class="mobile-menu__social">
                    <SocialLinks links=content.social_links.clone() link_class="social-link social-link--menu"/>
                </div>
                <AffiliationGrid variant=GridVariant::Compact/>
                <NavLinks links=content.nav_links.clone() style=NavStyle::Menu on_navigate=close/>
                <a href=content.mailto() class="mobile-menu__email">
                    {content.personal.email.clone()}
                </a>
            </div>
        </Show>
    }
}

#[component]
fn DesktopSidebar() -> impl IntoView {
    let site = expect_context::<SiteState>();
    let content = site.content.clone();
    let personal = &content.personal;

    let portrait = Reveal::scale(0);
    let name = Reveal::rise(200);
    let email = Reveal::fade(300);
    let actions = Reveal::fade(400);
    let grid = Reveal::fade(450);
    let nav = Reveal::rise(500);

    view! {
        <aside class="sidebar">
            <div class="sidebar__identity">
                <div class=format!("sidebar__portrait {}", portrait.class()) style=portrait.style()>
                    <img src=personal.portrait_url.clone() alt=personal.name.clone()/>
                </div>
                <h1 class=format!("sidebar__name {}", name.class()) style=name.style()>
                    {personal.name.clone()}
                </h1>
                <a href=content.mailto() class=format!("sidebar__email {}", email.class()) style=email.style()>
                    {personal.email.clone()}
                </a>
                <div class=format!("sidebar__actions {}", actions.class()) style=actions.style()>
                    <SocialLinks links=content.social_links.clone() link_class="social-link social-link--sidebar"/>
                    <div class="sidebar__divider"></div>
                    <ThemeToggle class="social-link social-link--sidebar theme-toggle"/>
                </div>
                <div class=format!("sidebar__grid {}", grid.class()) style=grid.style()>
                    <AffiliationGrid variant=GridVariant::Expanded/>
                </div>
            </div>
            <div class=format!("sidebar__nav {}", nav.class()) style=nav.style()>
                <hr class="sidebar__rule"/>
                <NavLinks links=content.nav_links.clone() style=NavStyle::Sidebar/>
            </div>
        </aside>
    }
}
