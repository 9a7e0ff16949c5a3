//! 3×3 affiliation logo grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Placement is computed once in `SiteState`; this component only renders
//! it. The compact (mobile menu) and expanded (desktop sidebar) variants read
//! the same assignment, so the two layouts cannot drift apart.

use folio::AffiliationRecord;
use folio::affiliation::themed_logo_url;
use leptos::prelude::*;

use crate::state::site::SiteState;
use crate::state::ui::UiState;

#[cfg(test)]
#[path = "affiliation_grid_test.rs"]
mod affiliation_grid_test;

/// Rendering density of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridVariant {
    Compact,
    Expanded,
}

impl GridVariant {
    pub fn container_class(self) -> &'static str {
        match self {
            Self::Compact => "affiliation-grid affiliation-grid--compact",
            Self::Expanded => "affiliation-grid affiliation-grid--expanded",
        }
    }

    pub fn logo_box_class(self) -> &'static str {
        match self {
            Self::Compact => "affiliation-grid__logo-box affiliation-grid__logo-box--compact",
            Self::Expanded => "affiliation-grid__logo-box affiliation-grid__logo-box--expanded",
        }
    }
}

/// Affiliation grid. Empty slots render as blank placeholders.
#[component]
pub fn AffiliationGrid(variant: GridVariant) -> impl IntoView {
    let site = expect_context::<SiteState>();
    let ui = expect_context::<RwSignal<UiState>>();

    let cells = site
        .grid
        .slots()
        .iter()
        .cloned()
        .enumerate()
        .map(|(slot, record)| {
            view! {
                <div class="affiliation-grid__cell" data-slot=slot.to_string()>
                    {record.map(|record| view! { <AffiliationLogo record=record variant=variant ui=ui/> })}
                </div>
            }
        })
        .collect_view();

    view! { <div class=variant.container_class()>{cells}</div> }
}

#[component]
fn AffiliationLogo(record: AffiliationRecord, variant: GridVariant, ui: RwSignal<UiState>) -> impl IntoView {
    let href = record.href().to_owned();
    let AffiliationRecord { name, logo_reference, .. } = record;
    let src = move || themed_logo_url(&logo_reference, ui.get().theme);

    view! {
        <a href=href class="affiliation-grid__link" title=name.clone()>
            <div class=variant.logo_box_class()>
                <img src=src alt=name.clone() class="affiliation-grid__logo"/>
            </div>
            <span class="affiliation-grid__name">{name.clone()}</span>
        </a>
    }
}
