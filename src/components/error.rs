//! Error view with status-dependent guidance.
//!
//! Everything keyed off the status code is display-only; the normalized
//! message is always shown verbatim.

use leptos::*;

use crate::types::ApiError;

fn error_icon(status_code: Option<u16>) -> &'static str {
    match status_code {
        Some(code) if (400..500).contains(&code) => "⚠️",
        Some(code) if code >= 500 => "🔧",
        _ => "❌",
    }
}

fn error_title(status_code: Option<u16>) -> &'static str {
    match status_code {
        None => "Something went wrong",
        Some(400) => "Invalid Request",
        Some(413) => "File Too Large",
        Some(415) => "Unsupported File Type",
        Some(code) if code >= 500 => "Server Error",
        Some(_) => "Error Occurred",
    }
}

fn helpful_message(status_code: Option<u16>) -> &'static str {
    match status_code {
        Some(400) => "Please check your file and try again.",
        Some(413) => "Please choose a smaller image file (under 10MB).",
        Some(415) => "Please upload a JPG, JPEG, or PNG image file.",
        Some(code) if code >= 500 => {
            "Our servers are experiencing issues. Please try again in a few moments."
        }
        _ => "Please try again or contact support if the problem persists.",
    }
}

fn troubleshooting_tips(status_code: Option<u16>) -> &'static [&'static str] {
    match status_code {
        Some(413) => &[
            "Reduce the image file size",
            "Compress the image before uploading",
            "Use a lower resolution image",
        ],
        Some(415) => &[
            "Use JPG, JPEG, or PNG format only",
            "Convert your image to a supported format",
            "Check that the file is not corrupted",
        ],
        Some(code) if code >= 500 => &[
            "Wait a few minutes and try again",
            "Check your internet connection",
            "Contact support if the issue persists",
        ],
        _ => &[
            "Ensure your image is clear and well-lit",
            "Make sure the receipt text is readable",
            "Try uploading a different image format (JPG, PNG)",
        ],
    }
}

#[component]
pub fn ErrorView(
    error: ApiError,
    can_retry: bool,
    #[prop(into)] on_retry: Callback<()>,
    #[prop(into)] on_start_over: Callback<()>,
) -> impl IntoView {
    let message = error.message.joined();
    let status_code = error.status_code;

    let contact_support = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url(
                "mailto:support@receiptscanner.com?subject=Receipt%20Scanner%20Issue",
            );
        }
    };

    view! {
        <div class="error-message">
            <div class="error-content">
                <div class="error-icon-container">
                    <div class="error-icon">{error_icon(status_code)}</div>
                </div>

                <div class="error-details">
                    <h2>{error_title(status_code)}</h2>
                    <p class="error-text">{message}</p>
                    <p class="helpful-message">{helpful_message(status_code)}</p>
                </div>

                <div class="troubleshooting-section">
                    <h3>"Troubleshooting Tips"</h3>
                    <ul class="tips-list">
                        {troubleshooting_tips(status_code)
                            .iter()
                            .map(|tip| view! { <li>{*tip}</li> })
                            .collect_view()}
                    </ul>
                </div>

                {status_code.map(|code| view! {
                    <div class="error-code">
                        <small>"Error Code: " {code}</small>
                    </div>
                })}

                <div class="error-actions">
                    <Show when=move || can_retry fallback=|| view! {}>
                        <button class="btn btn-primary" on:click=move |_| on_retry.call(())>
                            "🔄 Try Again"
                        </button>
                    </Show>
                    <button class="btn btn-secondary" on:click=move |_| on_start_over.call(())>
                        "📷 Upload New Receipt"
                    </button>
                </div>

                <div class="support-section">
                    <p>"Still having trouble?"</p>
                    <button class="btn btn-secondary btn-small" on:click=contact_support>
                        "📧 Contact Support"
                    </button>
                </div>
            </div>
        </div>
    }
}
