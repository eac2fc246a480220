//! Root controller state machine.
//!
//! [`AppModel`] is the single source of truth for the whole flow: the
//! active view, the selected file, the extraction result, and the last
//! error. All mutation goes through [`AppModel::apply`], an explicit
//! transition function over [`AppEvent`]s.
//!
//! The model is generic over the file handle so transitions can be
//! exercised without a DOM; the running application instantiates it
//! with `web_sys::File`.
//!
//! # States
//!
//! ```text
//! landing ── file selected ──▶ preview ── submit ──▶ extracting
//!    ▲                           │                      │
//!    │◀──────── cancel ──────────┘          success ────┼──▶ results
//!    │                                      failure ────┴──▶ error
//!    │◀────────────── start over (any state) ◀── retry (file held)
//! ```

use crate::types::{ApiError, ReceiptData};

/// Active view of the single-page flow. Exactly one at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppState {
    Landing,
    Preview,
    Extracting,
    Results,
    Error,
}

/// Everything that can happen to the flow.
#[derive(Clone, Debug)]
pub enum AppEvent<F> {
    /// A file passed validation in the landing view.
    FileSelected(F),
    /// The preview was dismissed without submitting.
    Cancelled,
    /// The held file was submitted for extraction (also used for retry).
    Submitted,
    ExtractionSucceeded(ReceiptData),
    ExtractionFailed(ApiError),
    /// Reset everything back to the landing view.
    StartOver,
}

/// State bundle owned by the root controller.
#[derive(Clone, Debug)]
pub struct AppModel<F> {
    pub state: AppState,
    pub file: Option<F>,
    pub result: Option<ReceiptData>,
    pub error: Option<ApiError>,
}

impl<F> Default for AppModel<F> {
    fn default() -> Self {
        AppModel {
            state: AppState::Landing,
            file: None,
            result: None,
            error: None,
        }
    }
}

impl<F> AppModel<F> {
    /// Apply one transition.
    ///
    /// Selecting a file always clears any previous error and result
    /// before entering the preview. Submitting without a held file is a
    /// no-op. Starting over clears everything unconditionally.
    pub fn apply(&mut self, event: AppEvent<F>) {
        match event {
            AppEvent::FileSelected(file) => {
                self.error = None;
                self.result = None;
                self.file = Some(file);
                self.state = AppState::Preview;
            }
            AppEvent::Cancelled => {
                self.file = None;
                self.error = None;
                self.state = AppState::Landing;
            }
            AppEvent::Submitted => {
                if self.file.is_some() {
                    self.state = AppState::Extracting;
                }
            }
            AppEvent::ExtractionSucceeded(result) => {
                self.result = Some(result);
                self.state = AppState::Results;
            }
            AppEvent::ExtractionFailed(error) => {
                self.error = Some(error);
                self.state = AppState::Error;
            }
            AppEvent::StartOver => {
                *self = AppModel::default();
            }
        }
    }

    /// Retry is only offered while a file is still held.
    pub fn can_retry(&self) -> bool {
        self.file.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ErrorMessage, ReceiptItem};

    fn receipt_fixture() -> ReceiptData {
        ReceiptData {
            id: "rcpt_42".to_string(),
            date: "2024-01-15".to_string(),
            currency: "USD".to_string(),
            vendor_name: "Corner Grocery".to_string(),
            receipt_items: vec![
                ReceiptItem {
                    item_name: "Coffee".to_string(),
                    item_cost: 4.5,
                },
                ReceiptItem {
                    item_name: "Bagel".to_string(),
                    item_cost: 2.25,
                },
            ],
            tax: 0.54,
            total: 7.29,
            image_url: "/uploads/rcpt_42.jpg".to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    fn server_error() -> ApiError {
        ApiError {
            message: ErrorMessage::from("Failed to extract receipt details"),
            status_code: Some(500),
            error: None,
        }
    }

    #[test]
    fn starts_on_landing_with_nothing_held() {
        let model = AppModel::<&str>::default();
        assert_eq!(model.state, AppState::Landing);
        assert!(model.file.is_none());
        assert!(model.result.is_none());
        assert!(model.error.is_none());
    }

    #[test]
    fn selecting_a_file_enters_preview() {
        let mut model = AppModel::default();
        model.apply(AppEvent::FileSelected("receipt.jpg"));
        assert_eq!(model.state, AppState::Preview);
        assert_eq!(model.file, Some("receipt.jpg"));
    }

    #[test]
    fn selecting_a_file_clears_stale_error_and_result() {
        let mut model = AppModel {
            state: AppState::Error,
            file: None,
            result: Some(receipt_fixture()),
            error: Some(server_error()),
        };
        model.apply(AppEvent::FileSelected("fresh.png"));
        assert_eq!(model.state, AppState::Preview);
        assert!(model.error.is_none());
        assert!(model.result.is_none());
    }

    #[test]
    fn cancel_drops_the_file_and_returns_to_landing() {
        let mut model = AppModel::default();
        model.apply(AppEvent::FileSelected("receipt.jpg"));
        model.apply(AppEvent::Cancelled);
        assert_eq!(model.state, AppState::Landing);
        assert!(model.file.is_none());
    }

    #[test]
    fn successful_extraction_walk_reaches_results() {
        let mut model = AppModel::default();
        model.apply(AppEvent::FileSelected("receipt.jpg"));
        model.apply(AppEvent::Submitted);
        assert_eq!(model.state, AppState::Extracting);

        model.apply(AppEvent::ExtractionSucceeded(receipt_fixture()));
        assert_eq!(model.state, AppState::Results);
        assert_eq!(
            model.result.as_ref().map(|r| r.vendor_name.as_str()),
            Some("Corner Grocery")
        );
    }

    #[test]
    fn failed_extraction_enters_error_with_the_message() {
        let mut model = AppModel::default();
        model.apply(AppEvent::FileSelected("receipt.jpg"));
        model.apply(AppEvent::Submitted);
        model.apply(AppEvent::ExtractionFailed(server_error()));

        assert_eq!(model.state, AppState::Error);
        let error = model.error.as_ref().expect("error should be held");
        assert_eq!(error.message.joined(), "Failed to extract receipt details");
        assert_eq!(error.status_code, Some(500));
        assert!(model.can_retry());
    }

    #[test]
    fn retry_with_held_file_reenters_extracting() {
        let mut model = AppModel::default();
        model.apply(AppEvent::FileSelected("receipt.jpg"));
        model.apply(AppEvent::Submitted);
        model.apply(AppEvent::ExtractionFailed(server_error()));

        model.apply(AppEvent::Submitted);
        assert_eq!(model.state, AppState::Extracting);
        assert_eq!(model.file, Some("receipt.jpg"));
    }

    #[test]
    fn submit_without_a_file_is_a_noop() {
        let mut model = AppModel::<&str>::default();
        model.apply(AppEvent::Submitted);
        assert_eq!(model.state, AppState::Landing);

        let mut errored = AppModel::<&str> {
            state: AppState::Error,
            file: None,
            result: None,
            error: Some(server_error()),
        };
        assert!(!errored.can_retry());
        errored.apply(AppEvent::Submitted);
        assert_eq!(errored.state, AppState::Error);
    }

    #[test]
    fn start_over_clears_everything_from_any_state() {
        let mut from_results = AppModel::default();
        from_results.apply(AppEvent::FileSelected("receipt.jpg"));
        from_results.apply(AppEvent::Submitted);
        from_results.apply(AppEvent::ExtractionSucceeded(receipt_fixture()));
        from_results.apply(AppEvent::StartOver);
        assert_eq!(from_results.state, AppState::Landing);
        assert!(from_results.file.is_none());
        assert!(from_results.result.is_none());
        assert!(from_results.error.is_none());

        let mut from_error = AppModel::default();
        from_error.apply(AppEvent::FileSelected("receipt.jpg"));
        from_error.apply(AppEvent::Submitted);
        from_error.apply(AppEvent::ExtractionFailed(server_error()));
        from_error.apply(AppEvent::StartOver);
        assert_eq!(from_error.state, AppState::Landing);
        assert!(from_error.file.is_none());
        assert!(from_error.error.is_none());
    }
}
