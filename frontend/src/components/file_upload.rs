//! Upload form: posts a selected file to the backend upload endpoint and
//! shows the access path it comes back with.

use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Backend origin for uploads. Matches the backend's default port.
pub const BACKEND_ORIGIN: &str = "http://localhost:5000";

/// Success body returned by `POST /upload`.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadReply {
    pub message: String,
    pub filename: String,
    pub path: String,
}

async fn post_file(file: web_sys::File) -> Result<UploadReply, JsValue> {
    let form = web_sys::FormData::new()?;
    form.append_with_blob_and_filename("file", &file, &file.name())?;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&form);

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let url = format!("{BACKEND_ORIGIN}/upload");
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str_and_init(&url, &init))
        .await?
        .dyn_into()?;
    if !response.ok() {
        return Err(JsValue::from_str(&format!("HTTP {}", response.status())));
    }
    let json = JsFuture::from(response.json()?).await?;
    serde_wasm_bindgen::from_value(json).map_err(Into::into)
}

#[component]
pub fn FileUpload() -> impl IntoView {
    let message = RwSignal::new(String::new());
    let uploaded_url = RwSignal::new(Option::<String>::None);
    let input_ref = NodeRef::<html::Input>::new();

    let on_upload = move |_: ev::MouseEvent| {
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|list| list.get(0)) else {
            message.set("⚠️ Please select a file first.".to_string());
            return;
        };

        spawn_local(async move {
            match post_file(file).await {
                Ok(reply) => {
                    message.set(format!("✅ {}", reply.message));
                    uploaded_url.set(Some(format!("{BACKEND_ORIGIN}{}", reply.path)));
                }
                Err(e) => {
                    web_sys::console::error_1(&e);
                    message.set("❌ Upload failed.".to_string());
                }
            }
        });
    };

    view! {
        <div class="file-upload">
            <h2>"📂 Upload a File"</h2>
            <input type="file" node_ref=input_ref />
            <button on:click=on_upload>"Upload"</button>

            <p>{move || message.get()}</p>

            {move || {
                uploaded_url
                    .get()
                    .map(|url| {
                        view! {
                            <p>
                                "🔗 File available at: "
                                <a href=url.clone() target="_blank" rel="noreferrer">
                                    {url.clone()}
                                </a>
                            </p>
                        }
                    })
            }}
        </div>
    }
}
