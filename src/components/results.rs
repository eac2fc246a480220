//! Extraction results view.
//!
//! Renders the server's data verbatim; the subtotal is the only derived
//! value and the server's `total` is never recomputed.

use leptos::*;
use wasm_bindgen::JsValue;

use crate::config::API_BASE_URL;
use crate::types::ReceiptData;
use crate::utils::{format_currency, format_date, truncate_text};

/// Item names longer than this are shortened for the list display.
const MAX_ITEM_NAME_LEN: usize = 40;

#[component]
pub fn ExtractionResults(
    result: ReceiptData,
    #[prop(into)] on_start_over: Callback<()>,
) -> impl IntoView {
    let (image_failed, set_image_failed) = create_signal(false);

    let image_url = if result.image_url.starts_with("http") {
        result.image_url.clone()
    } else {
        format!("{}{}", API_BASE_URL, result.image_url)
    };

    let subtotal: f64 = result.receipt_items.iter().map(|item| item.item_cost).sum();
    let processed_at = String::from(
        js_sys::Date::new_0().to_locale_string("en-US", &JsValue::UNDEFINED),
    );

    let item_rows = result
        .receipt_items
        .iter()
        .map(|item| {
            view! {
                <div class="item-row">
                    <div class="item-details">
                        <span class="item-name">
                            {truncate_text(&item.item_name, MAX_ITEM_NAME_LEN)}
                        </span>
                    </div>
                    <span class="item-cost">
                        {format_currency(item.item_cost, &result.currency)}
                    </span>
                </div>
            }
        })
        .collect_view();

    let print_results = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.print();
        }
    };

    view! {
        <div class="extraction-results">
            <div class="results-header">
                <h2>"✅ Extraction Complete!"</h2>
                <p>"Here's what we found on your receipt"</p>
            </div>

            <div class="results-content">
                <div class="receipt-image-section">
                    <div class="image-container">
                        <Show when=move || !image_failed.get() fallback=|| view! {}>
                            <img
                                src=image_url.clone()
                                alt="Receipt"
                                class="receipt-image"
                                on:error=move |_| set_image_failed.set(true)
                            />
                        </Show>
                    </div>
                </div>

                <div class="receipt-details-section">
                    <div class="details-card">
                        <h3>"Receipt Information"</h3>

                        <div class="info-grid">
                            <div class="info-row">
                                <span class="info-label">"📅 Date:"</span>
                                <span class="info-value">{format_date(&result.date)}</span>
                            </div>
                            <div class="info-row">
                                <span class="info-label">"🏪 Vendor:"</span>
                                <span class="info-value">{result.vendor_name.clone()}</span>
                            </div>
                            <div class="info-row">
                                <span class="info-label">"💰 Currency:"</span>
                                <span class="info-value">{result.currency.clone()}</span>
                            </div>
                        </div>
                    </div>

                    <div class="details-card">
                        <h3>"Items (" {result.receipt_items.len()} ")"</h3>
                        <div class="items-list">{item_rows}</div>
                    </div>

                    <div class="details-card summary-card">
                        <h3>"Summary"</h3>

                        <div class="summary-grid">
                            <div class="summary-row">
                                <span class="summary-label">"Subtotal:"</span>
                                <span class="summary-value">
                                    {format_currency(subtotal, &result.currency)}
                                </span>
                            </div>
                            <div class="summary-row">
                                <span class="summary-label">"Tax:"</span>
                                <span class="summary-value">
                                    {format_currency(result.tax, &result.currency)}
                                </span>
                            </div>
                            <div class="summary-row total-row">
                                <span class="summary-label">"Total:"</span>
                                <span class="summary-value total">
                                    {format_currency(result.total, &result.currency)}
                                </span>
                            </div>
                        </div>
                    </div>

                    <div class="metadata-card">
                        <h4>"Processing Details"</h4>
                        <div class="metadata-grid">
                            <div class="metadata-row">
                                <span class="metadata-label">"Receipt ID:"</span>
                                <span class="metadata-value">{result.id.clone()}</span>
                            </div>
                            <div class="metadata-row">
                                <span class="metadata-label">"Processed:"</span>
                                <span class="metadata-value">{processed_at}</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>

            <div class="results-actions">
                <button class="btn btn-primary" on:click=move |_| on_start_over.call(())>
                    "📷 Scan Another Receipt"
                </button>
                <button class="btn btn-secondary" on:click=print_results>
                    "🖨️ Print Results"
                </button>
            </div>
        </div>
    }
}
