//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Receipt Types** - Structured extraction results from the backend
//! - **Health Types** - Service health payload
//! - **Error Types** - Normalized API error shape

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Receipt Types
// =============================================================================

/// A single line item on a receipt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptItem {
    /// Item description as printed on the receipt
    pub item_name: String,
    /// Item cost in the receipt's currency
    pub item_cost: f64,
}

/// Structured receipt data returned by a successful extraction.
///
/// The client trusts the server's `total` verbatim; it is not
/// recomputed from the items.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptData {
    /// Server-assigned receipt identifier
    pub id: String,
    /// Purchase date as an ISO-like string
    pub date: String,
    /// ISO 4217 currency code
    pub currency: String,
    /// Vendor / merchant name
    pub vendor_name: String,
    /// Line items in receipt order
    pub receipt_items: Vec<ReceiptItem>,
    /// Tax amount
    pub tax: f64,
    /// Grand total
    pub total: f64,
    /// Location of the stored receipt image (absolute or server-relative)
    pub image_url: String,
    /// Creation timestamp, when the server provides one
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Last-update timestamp, when the server provides one
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

// =============================================================================
// Health Types
// =============================================================================

/// Payload of the `/receipt/health/check` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Error message payload from the backend.
///
/// The backend reports validation failures as a list of messages and
/// everything else as a single string; both shapes are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    Single(String),
    Multiple(Vec<String>),
}

impl ErrorMessage {
    /// Flatten the payload into one displayable string.
    pub fn joined(&self) -> String {
        match self {
            ErrorMessage::Single(message) => message.clone(),
            ErrorMessage::Multiple(messages) => messages.join(", "),
        }
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.joined())
    }
}

impl From<String> for ErrorMessage {
    fn from(message: String) -> Self {
        ErrorMessage::Single(message)
    }
}

impl From<&str> for ErrorMessage {
    fn from(message: &str) -> Self {
        ErrorMessage::Single(message.to_string())
    }
}

/// Normalized error for every failed API operation.
///
/// HTTP failures carry the response status; transport-level failures
/// (no response at all) carry `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// Human-readable message (or list of messages)
    pub message: ErrorMessage,
    /// HTTP status code, when a response was received
    pub status_code: Option<u16>,
    /// Error-kind label reported by the backend (e.g. "Bad Request")
    pub error: Option<String>,
}

impl ApiError {
    /// Build an error for a failure that produced no HTTP response.
    pub fn transport(message: impl Into<ErrorMessage>) -> Self {
        ApiError {
            message: message.into(),
            status_code: None,
            error: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status_code {
            Some(code) => write!(f, "{} (status {})", self.message, code),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_accepts_single_string() {
        let message: ErrorMessage = serde_json::from_str(r#""Failed to extract receipt details""#)
            .expect("single-string message should deserialize");
        assert_eq!(message.joined(), "Failed to extract receipt details");
    }

    #[test]
    fn error_message_accepts_string_list() {
        let message: ErrorMessage =
            serde_json::from_str(r#"["image must be provided", "image must be an image file"]"#)
                .expect("string-list message should deserialize");
        assert_eq!(
            message.joined(),
            "image must be provided, image must be an image file"
        );
    }

    #[test]
    fn api_error_display_includes_status() {
        let error = ApiError {
            message: ErrorMessage::from("Internal server error"),
            status_code: Some(500),
            error: None,
        };
        assert_eq!(error.to_string(), "Internal server error (status 500)");

        let transport = ApiError::transport("HTTP request failed: network down");
        assert_eq!(transport.to_string(), "HTTP request failed: network down");
        assert_eq!(transport.status_code, None);
    }
}
