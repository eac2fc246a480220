//! Upload validation and file display helpers.

use web_sys::File;

use crate::config::{ALLOWED_FILE_TYPES, MAX_FILE_SIZE};

/// Outcome of [`validate_file`].
#[derive(Clone, Debug, PartialEq)]
pub struct FileValidation {
    pub is_valid: bool,
    pub error: Option<String>,
}

/// Whether the MIME type is on the upload allow-list.
pub fn is_valid_image_type(mime: &str) -> bool {
    ALLOWED_FILE_TYPES.contains(&mime)
}

/// Whether the byte size is within the upload ceiling (inclusive).
pub fn is_valid_file_size(bytes: f64) -> bool {
    bytes <= MAX_FILE_SIZE
}

/// Validate a selected file. The type check runs before the size check.
pub fn validate_file(file: &File) -> FileValidation {
    validate_parts(&file.type_(), file.size())
}

fn validate_parts(mime: &str, bytes: f64) -> FileValidation {
    if !is_valid_image_type(mime) {
        return FileValidation {
            is_valid: false,
            error: Some(format!(
                "Invalid file type. Only {} files are allowed.",
                ALLOWED_FILE_TYPES.join(", ")
            )),
        };
    }

    if !is_valid_file_size(bytes) {
        return FileValidation {
            is_valid: false,
            error: Some(format!(
                "File size {} exceeds the maximum allowed size of {}.",
                format_file_size(bytes),
                format_file_size(MAX_FILE_SIZE)
            )),
        };
    }

    FileValidation {
        is_valid: true,
        error: None,
    }
}

/// Render a byte count with the largest fitting unit, up to two decimal
/// places with trailing zeros stripped ("1 KB", "1.5 KB").
///
/// The unit table stops at GB; larger values render as GB counts.
/// Negative input is not validated and yields strings like "-500 Bytes".
pub fn format_file_size(bytes: f64) -> String {
    if bytes == 0.0 {
        return "0 Bytes".to_string();
    }

    const UNITS: [&str; 4] = ["Bytes", "KB", "MB", "GB"];
    const K: f64 = 1024.0;

    let exponent = (bytes.ln() / K.ln()).floor();
    let exponent = if exponent.is_nan() {
        0.0
    } else {
        exponent.clamp(0.0, (UNITS.len() - 1) as f64)
    };

    let scaled = bytes / K.powf(exponent);
    let rendered = format!("{:.2}", scaled);
    let rendered = rendered.trim_end_matches('0').trim_end_matches('.');

    format!("{} {}", rendered, UNITS[exponent as usize])
}

/// Upper-cased substring after the last '.'; a dotless name upper-cases
/// whole, an empty name yields "".
pub fn get_file_extension(filename: &str) -> String {
    filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_exactly_the_three_image_types() {
        assert!(is_valid_image_type("image/jpeg"));
        assert!(is_valid_image_type("image/jpg"));
        assert!(is_valid_image_type("image/png"));
        assert!(!is_valid_image_type("image/gif"));
        assert!(!is_valid_image_type("application/pdf"));
        assert!(!is_valid_image_type(""));
    }

    #[test]
    fn rejected_type_names_the_allow_list() {
        let validation = validate_parts("image/gif", 1024.0);
        assert!(!validation.is_valid);
        let error = validation.error.expect("error message expected");
        assert!(error.contains("image/jpeg, image/jpg, image/png"));
    }

    #[test]
    fn size_ceiling_is_inclusive() {
        let ceiling = 10.0 * 1024.0 * 1024.0;
        assert!(validate_parts("image/png", ceiling).is_valid);

        let validation = validate_parts("image/png", ceiling + 1.0);
        assert!(!validation.is_valid);
        let error = validation.error.expect("error message expected");
        assert!(error.contains("10 MB"));
    }

    #[test]
    fn type_check_runs_before_size_check() {
        let validation = validate_parts("text/plain", 50.0 * 1024.0 * 1024.0);
        let error = validation.error.expect("error message expected");
        assert!(error.starts_with("Invalid file type."));
    }

    #[test]
    fn formats_byte_counts() {
        assert_eq!(format_file_size(0.0), "0 Bytes");
        assert_eq!(format_file_size(512.0), "512 Bytes");
        assert_eq!(format_file_size(1024.0), "1 KB");
        assert_eq!(format_file_size(1536.0), "1.5 KB");
        assert_eq!(format_file_size(1024.0 * 1024.0), "1 MB");
        assert_eq!(format_file_size(10.0 * 1024.0 * 1024.0), "10 MB");
        assert_eq!(format_file_size(1024.0 * 1024.0 * 1024.0), "1 GB");
    }

    #[test]
    fn negative_sizes_pass_through_undisplayed() {
        assert_eq!(format_file_size(-500.0), "-500 Bytes");
    }

    #[test]
    fn extracts_upper_cased_extension() {
        assert_eq!(get_file_extension("receipt.jpg"), "JPG");
        assert_eq!(get_file_extension("receipt.backup.jpg"), "JPG");
        assert_eq!(get_file_extension("no-extension"), "NO-EXTENSION");
        assert_eq!(get_file_extension("trailing."), "");
        assert_eq!(get_file_extension(""), "");
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn make_file(name: &str, mime: &str) -> File {
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str("fake image bytes"));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime);
        File::new_with_str_sequence_and_options(&parts, name, &options)
            .expect("File construction failed")
    }

    #[wasm_bindgen_test]
    fn validate_file_accepts_a_small_png() {
        let file = make_file("receipt.png", "image/png");
        let validation = validate_file(&file);
        assert!(validation.is_valid);
        assert!(validation.error.is_none());
    }

    #[wasm_bindgen_test]
    fn validate_file_rejects_a_pdf() {
        let file = make_file("receipt.pdf", "application/pdf");
        let validation = validate_file(&file);
        assert!(!validation.is_valid);
        assert!(validation
            .error
            .expect("error message expected")
            .contains("Invalid file type"));
    }
}
