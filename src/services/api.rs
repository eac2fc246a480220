//! HTTP client for the receipt extraction API.
//!
//! Wraps the backend endpoints and normalizes every failure into
//! [`ApiError`]: non-success responses surface the backend's JSON
//! `message` (falling back to the HTTP status text), transport-level
//! failures surface with no status code.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use web_sys::{File, FormData};

use crate::config::API_BASE_URL;
use crate::types::{ApiError, ErrorMessage, HealthStatus, ReceiptData};

/// Error payload the backend attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    message: Option<ErrorMessage>,
    error: Option<String>,
}

/// Upload a receipt image and return the extracted data.
pub async fn extract_receipt_details(file: &File) -> Result<ReceiptData, ApiError> {
    let form_data = FormData::new()
        .map_err(|e| ApiError::transport(format!("Failed to create FormData: {:?}", e)))?;
    form_data
        .append_with_blob("image", file)
        .map_err(|e| ApiError::transport(format!("Failed to append file: {:?}", e)))?;

    let url = format!("{}/receipt/extract-receipt-details", API_BASE_URL);
    let request = Request::post(&url)
        .body(form_data)
        .map_err(|e| ApiError::transport(format!("Failed to build request: {}", e)))?;

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("HTTP request failed: {}", e)))?;

    handle_response(response).await
}

/// Fetch a single stored receipt.
pub async fn get_receipt_by_id(id: &str) -> Result<ReceiptData, ApiError> {
    let url = format!("{}/receipt/{}", API_BASE_URL, id);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("HTTP request failed: {}", e)))?;

    handle_response(response).await
}

/// Fetch all stored receipts, newest first (server order).
pub async fn get_all_receipts() -> Result<Vec<ReceiptData>, ApiError> {
    let url = format!("{}/receipt", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("HTTP request failed: {}", e)))?;

    handle_response(response).await
}

/// Delete a stored receipt. The endpoint returns no body.
pub async fn delete_receipt(id: &str) -> Result<(), ApiError> {
    let url = format!("{}/receipt/{}", API_BASE_URL, id);
    let response = Request::delete(&url)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        return Err(ApiError {
            message: ErrorMessage::from(format!(
                "Failed to delete receipt: {}",
                response.status_text()
            )),
            status_code: Some(response.status()),
            error: None,
        });
    }

    Ok(())
}

/// Probe the extraction service.
pub async fn health_check() -> Result<HealthStatus, ApiError> {
    let url = format!("{}/receipt/health/check", API_BASE_URL);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::transport(format!("HTTP request failed: {}", e)))?;

    handle_response(response).await
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(&response).await);
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::transport(format!("Failed to parse response: {}", e)))
}

/// Build an [`ApiError`] from a non-success response: prefer the JSON
/// body's `message`, fall back to the status text, then to a generic
/// "HTTP error!" line.
async fn error_from_response(response: &Response) -> ApiError {
    let status = response.status();
    let mut message = ErrorMessage::from(format!("HTTP error! status: {}", status));
    let mut kind = None;

    match response.json::<ErrorBody>().await {
        Ok(body) => {
            if let Some(body_message) = body.message {
                message = body_message;
            }
            kind = body.error;
        }
        Err(_) => {
            let status_text = response.status_text();
            if !status_text.is_empty() {
                message = ErrorMessage::from(status_text);
            }
        }
    }

    ApiError {
        message,
        status_code: Some(status),
        error: kind,
    }
}
