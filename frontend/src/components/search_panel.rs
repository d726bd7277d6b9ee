//! Search Panel Component
//!
//! Debounced live filter over the merged remote file index:
//! - query echoes synchronously, filtering runs after a quiet period
//! - Enter or the search button trigger the filter immediately
//! - pointer-down outside the panel dismisses the dropdown only
//! - refocusing the input re-opens the dropdown without re-filtering

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use send_wrapper::SendWrapper;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;

use crate::services::file_index::{Collection, FileEntry, SearchController, DEBOUNCE_MS};
use crate::services::remote_index::fetch_index;
use crate::utils::debounce::Debouncer;

fn file_icon(name: &str) -> &'static str {
    if name.ends_with(".pdf") {
        "📕"
    } else if name.ends_with(".zip") {
        "🗜️"
    } else {
        "📄"
    }
}

/// Card title: underscores to spaces, extension stripped.
fn card_title(name: &str) -> String {
    let base = name.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(name);
    base.replace('_', " ")
}

#[component]
pub fn SearchPanel() -> impl IntoView {
    let index = RwSignal::new(Vec::<FileEntry>::new());
    let search = RwSignal::new(SearchController::new());
    let debouncer = Debouncer::new();
    let panel_ref = NodeRef::<html::Div>::new();

    // Load every collection concurrently on mount. The merge is plain
    // concatenation, so completion order does not affect the final index.
    for collection in Collection::all() {
        spawn_local(async move {
            let entries = fetch_index(collection).await;
            index.update(|all| all.extend(entries));
        });
    }

    // Shared filter step: debounced path and immediate triggers both land
    // here, so results are applied exactly once per trigger.
    let run_filter = move || {
        search.update(|s| s.apply_filter(&index.get_untracked()));
    };

    let on_input = {
        let debouncer = debouncer.clone();
        move |evt: ev::Event| {
            search.update(|s| s.set_query(event_target_value(&evt)));
            debouncer.schedule(DEBOUNCE_MS, run_filter);
        }
    };

    // Immediate trigger: supersede any in-flight debounce so a late timer
    // cannot re-apply results on top of this one.
    let trigger_now = {
        let debouncer = debouncer.clone();
        move || {
            debouncer.cancel();
            run_filter();
        }
    };

    let on_keydown = {
        let trigger_now = trigger_now.clone();
        move |evt: ev::KeyboardEvent| {
            if evt.key() == "Enter" {
                evt.prevent_default();
                trigger_now();
            }
        }
    };

    let on_search_click = {
        let trigger_now = trigger_now.clone();
        move |_: ev::MouseEvent| trigger_now()
    };

    let on_focus = move |_: ev::FocusEvent| {
        search.update(|s| s.refocus());
    };

    // Dismiss the dropdown on pointer-down outside the panel. The listener
    // lives exactly as long as the component: registered once here, removed
    // again on cleanup.
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let handle_pointerdown =
            Closure::<dyn FnMut(web_sys::PointerEvent)>::new(move |evt: web_sys::PointerEvent| {
                let target = evt.target().and_then(|t| t.dyn_into::<web_sys::Node>().ok());
                if let (Some(panel), Some(target)) = (panel_ref.get_untracked(), target) {
                    if !panel.contains(Some(&target)) {
                        search.update(|s| s.dismiss());
                    }
                }
            });
        let _ = document.add_event_listener_with_callback(
            "pointerdown",
            handle_pointerdown.as_ref().unchecked_ref(),
        );

        // on_cleanup requires a Send + Sync closure; the document handle,
        // the listener closure, and the debouncer are all main-thread only,
        // so they cross that bound inside a SendWrapper.
        let teardown = SendWrapper::new((document, handle_pointerdown, debouncer.clone()));
        on_cleanup(move || {
            let (document, listener, debouncer) = teardown.take();
            let _ = document.remove_event_listener_with_callback(
                "pointerdown",
                listener.as_ref().unchecked_ref(),
            );
            // Cancel the pending debounce so it cannot fire into a
            // destroyed scope.
            debouncer.cancel();
        });
    }

    view! {
        <div class="search-panel" node_ref=panel_ref>
            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search files..."
                    prop:value=move || search.with(|s| s.query.clone())
                    on:input=on_input
                    on:keydown=on_keydown
                    on:focus=on_focus
                />
                <button class="search-button" on:click=on_search_click>
                    "🔍"
                </button>
            </div>

            {move || {
                let state = search.get();
                if !state.dropdown_visible {
                    return None;
                }
                Some(view! {
                    <div class="search-dropdown">
                        {if state.results.is_empty() {
                            view! { <p class="no-results">"No matches ❌"</p> }.into_any()
                        } else {
                            view! {
                                <div class="items-grid">
                                    {state
                                        .results
                                        .into_iter()
                                        .map(|file| {
                                            view! {
                                                <div class="item-card">
                                                    <div class="item-icon">{file_icon(&file.name)}</div>
                                                    <h3>{card_title(&file.name)}</h3>
                                                    <div class="item-actions">
                                                        <a
                                                            href=file.url.clone()
                                                            target="_blank"
                                                            rel="noopener noreferrer"
                                                            class="open-button"
                                                        >
                                                            "Open"
                                                        </a>
                                                        <a
                                                            href=file.url
                                                            download=file.name
                                                            class="download-button"
                                                        >
                                                            "⬇ Download"
                                                        </a>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                                .into_any()
                        }}
                    </div>
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_title_strips_extension_and_underscores() {
        assert_eq!(card_title("User_Manual.pdf"), "User Manual");
        assert_eq!(card_title("README"), "README");
    }

    #[test]
    fn test_file_icon_by_extension() {
        assert_eq!(file_icon("a.pdf"), "📕");
        assert_eq!(file_icon("a.zip"), "🗜️");
        assert_eq!(file_icon("a.docx"), "📄");
    }
}
