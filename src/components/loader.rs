//! Extraction progress animation.
//!
//! Two independent interval timers drive the display: one advances the
//! step list every two seconds (wrapping), the other nudges the progress
//! bar by a random amount until it parks at 90%. Both are purely
//! cosmetic and are dropped unconditionally when the view unmounts.

use gloo_timers::callback::Interval;
use leptos::*;
use rand::Rng;

use crate::config::{PROGRESS_INTERVAL_MS, STEP_INTERVAL_MS};

const STEPS: [&str; 6] = [
    "Uploading your receipt...",
    "Analyzing image quality...",
    "Extracting text with AI...",
    "Identifying receipt details...",
    "Processing payment information...",
    "Finalizing results...",
];

#[component]
pub fn ExtractingLoader() -> impl IntoView {
    let (current_step, set_current_step) = create_signal(0usize);
    let (progress, set_progress) = create_signal(0.0f64);

    let step_timer = Interval::new(STEP_INTERVAL_MS, move || {
        set_current_step.update(|step| *step = (*step + 1) % STEPS.len());
    });
    let progress_timer = Interval::new(PROGRESS_INTERVAL_MS, move || {
        set_progress.update(|value| {
            if *value < 90.0 {
                *value += rand::thread_rng().gen_range(0.0..10.0);
            }
        });
    });
    on_cleanup(move || {
        drop(step_timer);
        drop(progress_timer);
    });

    let clamped_progress = move || progress.get().min(100.0);

    view! {
        <div class="extracting-loader">
            <div class="loader-content">
                <div class="loader-header">
                    <h2>"Processing Your Receipt"</h2>
                    <p>"Our AI is analyzing your receipt to extract key information"</p>
                </div>

                <div class="loader-visual">
                    <div class="spinner-container">
                        <div class="loading-spinner large"></div>
                    </div>
                    <div class="receipt-icon">"📄"</div>
                </div>

                <div class="progress-section">
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style=move || format!("width: {}%;", clamped_progress())
                        ></div>
                    </div>
                    <div class="progress-text">
                        {move || format!("{}% Complete", clamped_progress().round() as u32)}
                    </div>
                </div>

                <div class="steps-section">
                    <div class="current-step">
                        <span class="step-icon">"⚡"</span>
                        {move || STEPS[current_step.get()]}
                    </div>

                    <div class="step-list">
                        <For
                            each=move || STEPS.iter().enumerate()
                            key=|(index, _)| *index
                            children=move |(index, step)| {
                                let item_class = move || {
                                    let current = current_step.get();
                                    if index < current {
                                        "step-item completed"
                                    } else if index == current {
                                        "step-item completed active"
                                    } else {
                                        "step-item"
                                    }
                                };
                                let indicator = move || {
                                    let current = current_step.get();
                                    if index < current {
                                        "✓"
                                    } else if index == current {
                                        "⚡"
                                    } else {
                                        "○"
                                    }
                                };
                                view! {
                                    <div class=item_class>
                                        <div class="step-indicator">{indicator}</div>
                                        <div class="step-text">{*step}</div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>

                <div class="loading-tips">
                    <h4>"Did you know?"</h4>
                    <p>
                        "Our AI can extract information from receipts in multiple languages "
                        "and currencies, making it perfect for international business expenses!"
                    </p>
                </div>
            </div>
        </div>
    }
}
