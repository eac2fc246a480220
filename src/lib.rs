//! Receipt Scanner - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend for uploading receipt images and rendering
//! the structured data returned by the extraction API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (title click resets the flow)                        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent — one view per state:                           │
//! │  landing → preview → extracting → results                    │
//! │                          └──────→ error (retry / start over) │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Base URL and upload limits
//! - [`state`] - Explicit state machine behind the root controller
//! - [`types`] - Wire types (ReceiptData, ApiError, ...)
//! - [`utils`] - Validation and display formatting
//! - [`components`] - UI components (one per view state)
//! - [`services`] - Extraction API client

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use web_sys::File;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod state;
pub mod types;
pub mod utils;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use services::*;
pub use state::{AppEvent, AppModel, AppState};
pub use types::{ApiError, ErrorMessage, HealthStatus, ReceiptData, ReceiptItem};
pub use utils::*;

// =============================================================================
// Application shell
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=MainContent/>
            </Routes>
        </Router>
    }
}

/// Root controller: owns the [`AppModel`] and orchestrates transitions.
///
/// The extraction call is fire-and-forget: the busy state is entered
/// before the request is spawned, and the next transition happens
/// strictly on settlement.
#[component]
fn MainContent() -> impl IntoView {
    let (model, set_model) = create_signal(AppModel::<File>::default());

    let submit = move || {
        let Some(file) = model.with_untracked(|m| m.file.clone()) else {
            return;
        };
        set_model.update(|m| m.apply(AppEvent::Submitted));
        log::info!("📤 Submitting {} for extraction", file.name());

        spawn_local(async move {
            match services::extract_receipt_details(&file).await {
                Ok(result) => {
                    log::info!("✅ Extraction complete: receipt {}", result.id);
                    set_model.update(|m| m.apply(AppEvent::ExtractionSucceeded(result)));
                }
                Err(error) => {
                    log::error!("❌ Extraction failed: {}", error);
                    set_model.update(|m| m.apply(AppEvent::ExtractionFailed(error)));
                }
            }
        });
    };

    let on_file_select = move |file: File| {
        log::info!("📎 File selected: {}", file.name());
        set_model.update(|m| m.apply(AppEvent::FileSelected(file)));
    };

    let on_cancel = move |_: ()| {
        set_model.update(|m| m.apply(AppEvent::Cancelled));
    };

    let on_start_over = move |_: ()| {
        set_model.update(|m| m.apply(AppEvent::StartOver));
    };

    let on_submit = move |_: ()| submit();

    // Retry re-submits the held file; without one the error view only
    // offers start-over, so this path resets instead.
    let on_retry = move |_: ()| {
        if model.with_untracked(AppModel::can_retry) {
            submit();
        } else {
            set_model.update(|m| m.apply(AppEvent::StartOver));
        }
    };

    view! {
        <Header on_start_over=on_start_over/>

        <main class="app-main">
            {move || match model.with(|m| m.state) {
                AppState::Landing => view! {
                    <LandingPage on_file_select=on_file_select/>
                }
                .into_view(),
                AppState::Preview => match model.with(|m| m.file.clone()) {
                    Some(file) => view! {
                        <FilePreview file=file on_cancel=on_cancel on_submit=on_submit/>
                    }
                    .into_view(),
                    None => view! { <LandingPage on_file_select=on_file_select/> }.into_view(),
                },
                AppState::Extracting => view! { <ExtractingLoader/> }.into_view(),
                AppState::Results => match model.with(|m| m.result.clone()) {
                    Some(result) => view! {
                        <ExtractionResults result=result on_start_over=on_start_over/>
                    }
                    .into_view(),
                    None => view! { <LandingPage on_file_select=on_file_select/> }.into_view(),
                },
                AppState::Error => {
                    let error = model
                        .with(|m| m.error.clone())
                        .unwrap_or_else(|| ApiError::transport("Something went wrong"));
                    let can_retry = model.with(|m| m.can_retry());
                    view! {
                        <ErrorView
                            error=error
                            can_retry=can_retry
                            on_retry=on_retry
                            on_start_over=on_start_over
                        />
                    }
                    .into_view()
                }
            }}
        </main>

        <Footer/>
    }
}
