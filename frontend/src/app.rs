use leptos::prelude::*;

use crate::components::search_panel::SearchPanel;
use crate::components::sections::{AppVersions, Manuals, Settings};
use crate::services::theme_service::{provide_theme_state, use_theme_state};

/// Portal sections reachable from the sidebar. A plain signal-backed
/// switch; the shell is UI chrome with no state worth routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Manuals,
    Versions,
    Settings,
}

impl Section {
    pub fn all() -> [Section; 3] {
        [Section::Manuals, Section::Versions, Section::Settings]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Manuals => "Manuals",
            Section::Versions => "App Versions",
            Section::Settings => "Settings",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Manuals => "📖",
            Section::Versions => "🗂️",
            Section::Settings => "⚙️",
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_theme_state();
    let theme = use_theme_state();
    let active = RwSignal::new(Section::Manuals);

    view! {
        <div class=move || {
            if theme.dark_mode.get() { "container dark" } else { "container" }
        }>
            <header class="header">
                <div class="header-title">"Sahara DocuHub"</div>
                <div class="header-search">
                    <SearchPanel />
                </div>
                <div class="header-actions">
                    <button class="dark-mode-toggle" on:click=move |_| theme.toggle()>
                        {move || if theme.dark_mode.get() { "Light" } else { "Dark" }}
                    </button>
                </div>
            </header>

            <div class="sidebar">
                {Section::all()
                    .into_iter()
                    .map(|section| {
                        let is_active = move || active.get() == section;
                        view! {
                            <button
                                class=move || {
                                    if is_active() { "menu-item active" } else { "menu-item" }
                                }
                                on:click=move |_| active.set(section)
                            >
                                <span class="menu-icon">{section.icon()}</span>
                                <span class="menu-text">{section.label()}</span>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="main">
                <div class="content">
                    {move || match active.get() {
                        Section::Manuals => view! { <Manuals /> }.into_any(),
                        Section::Versions => view! { <AppVersions /> }.into_any(),
                        Section::Settings => view! { <Settings /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
