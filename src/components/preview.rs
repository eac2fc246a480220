//! File preview shown before submission.
//!
//! Creates an object URL for the selected image on mount and revokes it
//! when the view is torn down, so cancel, start-over, and submission all
//! release the temporary handle.

use leptos::*;
use web_sys::{File, Url};

use crate::utils::{format_file_size, format_timestamp, get_file_extension};

#[component]
pub fn FilePreview(
    file: File,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let (is_submitting, set_is_submitting) = create_signal(false);

    let file_name = file.name();
    let extension = get_file_extension(&file.name());
    let size = format_file_size(file.size());
    let last_modified = format_timestamp(file.last_modified());

    let image_url = Url::create_object_url_with_blob(&file).ok();
    {
        let image_url = image_url.clone();
        on_cleanup(move || {
            if let Some(url) = image_url {
                let _ = Url::revoke_object_url(&url);
            }
        });
    }

    let handle_submit = move |_| {
        set_is_submitting.set(true);
        on_submit.call(());
    };

    view! {
        <div class="file-preview">
            <div class="preview-header">
                <h2>"Review Your Receipt"</h2>
                <p>"Please review the selected file before processing"</p>
            </div>

            <div class="preview-content">
                <div class="image-preview">
                    {image_url.map(|url| view! {
                        <img src=url alt="Receipt preview" class="preview-image"/>
                    })}
                </div>

                <div class="file-details">
                    <h3>"File Information"</h3>

                    <div class="detail-grid">
                        <div class="detail-row">
                            <span class="detail-label">"Name:"</span>
                            <span class="detail-value">{file_name}</span>
                        </div>
                        <div class="detail-row">
                            <span class="detail-label">"Type:"</span>
                            <span class="detail-value">{extension}</span>
                        </div>
                        <div class="detail-row">
                            <span class="detail-label">"Size:"</span>
                            <span class="detail-value">{size}</span>
                        </div>
                        <div class="detail-row">
                            <span class="detail-label">"Last Modified:"</span>
                            <span class="detail-value">{last_modified}</span>
                        </div>
                    </div>

                    <div class="processing-info">
                        <div class="info-card">
                            <h4>"What happens next?"</h4>
                            <ul>
                                <li>"Your receipt will be analyzed using AI"</li>
                                <li>"Key information will be extracted automatically"</li>
                                <li>"Results will be displayed for your review"</li>
                                <li>"Processing typically takes 5-10 seconds"</li>
                            </ul>
                        </div>
                    </div>
                </div>
            </div>

            <div class="preview-actions">
                <button
                    class="btn btn-secondary"
                    disabled=move || is_submitting.get()
                    on:click=move |_| on_cancel.call(())
                >
                    "Cancel"
                </button>
                <button
                    class="btn btn-primary"
                    disabled=move || is_submitting.get()
                    on:click=handle_submit
                >
                    {move || if is_submitting.get() { "Processing..." } else { "Extract Receipt Details" }}
                </button>
            </div>
        </div>
    }
}
