//! Multipart résumé upload parsing.
//!
//! Form fields:
//! - `file` (required): a `.txt` file holding the résumé text, UTF-8 encoded.
//! - `name`, `email`, `technology` (optional): plain text, empty when absent.
//!
//! Unknown fields are drained and ignored.

use axum::extract::Multipart;
use std::path::Path;

use crate::errors::AppError;
use crate::models::candidate::CandidateFields;

const FILE_FIELD: &str = "file";
const ALLOWED_EXTENSION: &str = "txt";

/// Reads the whole form into unsanitized candidate fields.
pub async fn read_upload(mut multipart: Multipart) -> Result<CandidateFields, AppError> {
    let mut fields = CandidateFields::default();
    let mut file_seen = false;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let field_name = field.name().unwrap_or("").to_string();
        match field_name.as_str() {
            FILE_FIELD => {
                let file_name = field.file_name().unwrap_or("").to_string();
                if !is_text_file(&file_name) {
                    return Err(AppError::Validation(
                        "Only .txt files are accepted".to_string(),
                    ));
                }
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
                if data.is_empty() {
                    return Err(AppError::Validation("Uploaded file is empty".to_string()));
                }
                fields.resume_text = String::from_utf8(data.to_vec()).map_err(|_| {
                    AppError::Validation("Uploaded file is not valid UTF-8 text".to_string())
                })?;
                file_seen = true;
            }
            "name" | "email" | "technology" => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid field {field_name}: {e}")))?;
                match field_name.as_str() {
                    "name" => fields.name = value,
                    "email" => fields.email = value,
                    _ => fields.technology = value,
                }
            }
            _ => {
                field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?;
            }
        }
    }

    if !file_seen {
        return Err(AppError::Validation(format!(
            "A .txt file is required in the '{FILE_FIELD}' field"
        )));
    }
    Ok(fields)
}

fn is_text_file(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(ALLOWED_EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_text_file() {
        assert!(is_text_file("cv.txt"));
        assert!(is_text_file("CV.TXT"));
        assert!(is_text_file("my.resume.txt"));
        assert!(!is_text_file("cv.pdf"));
        assert!(!is_text_file("txt"));
        assert!(!is_text_file(""));
        assert!(!is_text_file("cv.txt.exe"));
    }
}
