//! Portal section views: manuals grid, app-versions list, settings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::file_upload::FileUpload;
use crate::services::file_index::{Collection, FileEntry};
use crate::services::remote_index::fetch_index;
use crate::services::theme_service::use_theme_state;

#[component]
pub fn Manuals() -> impl IntoView {
    let manuals = RwSignal::new(Vec::<FileEntry>::new());
    spawn_local(async move {
        manuals.set(fetch_index(Collection::Manuals).await);
    });

    view! {
        <div class="section">
            <h2>"Manuals"</h2>
            <Show when=move || manuals.with(Vec::is_empty)>
                <p>"No manuals found yet."</p>
            </Show>
            <div class="items-grid">
                {move || {
                    manuals
                        .get()
                        .into_iter()
                        .map(|manual| {
                            view! {
                                <div class="item-card">
                                    <h3>{manual.name.clone()}</h3>
                                    <div class="item-preview">
                                        <iframe src=manual.url.clone() title=manual.name.clone()></iframe>
                                    </div>
                                    <a
                                        href=manual.url
                                        download=manual.name
                                        class="download-button"
                                    >
                                        "⬇ Download"
                                    </a>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
pub fn AppVersions() -> impl IntoView {
    let apps = RwSignal::new(Vec::<FileEntry>::new());
    spawn_local(async move {
        apps.set(fetch_index(Collection::Versions).await);
    });

    view! {
        <div class="section">
            <h2>"App Versions"</h2>
            <Show when=move || apps.with(Vec::is_empty)>
                <p>"No app versions available yet."</p>
            </Show>
            {move || {
                apps.get()
                    .into_iter()
                    .map(|app| {
                        view! {
                            <div class="version-row">
                                <a href=app.url download=app.name.clone() class="download-button">
                                    "⬇ Download " {app.name.clone()}
                                </a>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[component]
pub fn Settings() -> impl IntoView {
    let theme = use_theme_state();

    view! {
        <div class="section">
            <h2>"Settings"</h2>
            <label class="setting-row">
                <input
                    type="checkbox"
                    prop:checked=move || theme.dark_mode.get()
                    on:change=move |_| theme.toggle()
                />
                " Dark mode"
            </label>
            <FileUpload />
        </div>
    }
}
