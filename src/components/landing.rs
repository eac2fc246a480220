//! Landing view: drop zone and file picker with inline validation.
//!
//! Accepts a clicked file-picker selection or a drag-and-drop file.
//! Validation failures are rendered inline and never leave this view.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::utils::validate_file;

#[component]
pub fn LandingPage(#[prop(into)] on_file_select: Callback<File>) -> impl IntoView {
    let (drag_active, set_drag_active) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    let handle_file = move |file: File| {
        set_error.set(None);

        let validation = validate_file(&file);
        if !validation.is_valid {
            let message = validation
                .error
                .unwrap_or_else(|| "Invalid file".to_string());
            log::warn!("Rejected file {}: {}", file.name(), message);
            set_error.set(Some(message));
            return;
        }

        on_file_select.call(file);
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = files.get(0) {
                handle_file(file);
            }
        }
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);

        let dropped = ev
            .data_transfer()
            .and_then(|transfer| transfer.files())
            .and_then(|files| files.get(0));
        if let Some(file) = dropped {
            handle_file(file);
        }
    };

    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
    };

    let on_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };

    let on_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
    };

    let open_file_dialog = move |_| {
        if let Some(input) = gloo_utils::document().get_element_by_id("fileInput") {
            if let Some(html_input) = input.dyn_ref::<HtmlInputElement>() {
                html_input.click();
            }
        }
    };

    view! {
        <div class="landing-page">
            <div class="landing-content">
                <h1 class="landing-title">"Receipt Scanner"</h1>
                <p class="landing-subtitle">
                    "Upload an image of your receipt to extract key information automatically"
                </p>

                <div
                    class="drop-zone"
                    class=("drag-active", move || drag_active.get())
                    class=("error", move || error.get().is_some())
                    role="button"
                    tabindex="0"
                    aria-label="Click or drop receipt image here"
                    on:drop=on_drop
                    on:dragover=on_drag_over
                    on:dragenter=on_drag_enter
                    on:dragleave=on_drag_leave
                    on:click=open_file_dialog
                >
                    <div class="drop-zone-content">
                        <div class="upload-icon">"📷"</div>
                        <h3>"Drop your receipt here"</h3>
                        <p>"or click to browse files"</p>
                        <div class="file-info">
                            <small>"Supports: JPG, JPEG, PNG"</small>
                            <small>"Max size: 10MB"</small>
                        </div>
                    </div>
                </div>

                <Show when=move || error.get().is_some() fallback=|| view! {}>
                    <div class="error-message">
                        <span class="error-icon">"⚠️"</span>
                        {move || error.get().unwrap_or_default()}
                    </div>
                </Show>

                <div class="alternative-action">
                    <button class="btn btn-secondary" on:click=open_file_dialog>
                        "Choose File"
                    </button>
                </div>

                <input
                    type="file"
                    id="fileInput"
                    accept=".jpg,.jpeg,.png"
                    style="display:none"
                    on:change=on_file_change
                />
            </div>
        </div>
    }
}
