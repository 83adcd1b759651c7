use thiserror::Error;

/// Shown for any failure the user cannot act on directly.
pub const GENERIC_ERROR_MESSAGE: &str = "Error al procesar la acción";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    #[error("unsupported file type: {0:?}")]
    InvalidFileType(String),

    #[error("file too large: {size} bytes (max {max})")]
    FileTooLarge { size: u64, max: u64 },

    #[error("failed to read file: {0}")]
    FileRead(String),

    #[error("server rejected request: {0}")]
    Server(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("failed to parse response: {0}")]
    Decode(String),

    #[error("storage unavailable: {0}")]
    Storage(String),

    #[error("missing element: {0}")]
    MissingElement(String),
}

impl FeedError {
    /// Text shown to the user in a notification.
    pub fn user_message(&self) -> String {
        match self {
            FeedError::InvalidFileType(_) => {
                "Por favor selecciona un archivo de imagen válido".to_string()
            }
            FeedError::FileTooLarge { .. } => "La imagen debe ser menor a 5MB".to_string(),
            FeedError::FileRead(_) => "No se pudo cargar la vista previa de la imagen".to_string(),
            FeedError::Server(message) => message.clone(),
            FeedError::Request(_)
            | FeedError::Http(_)
            | FeedError::Decode(_)
            | FeedError::Storage(_)
            | FeedError::MissingElement(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Render a thrown JS value for logs and error payloads.
pub fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_have_specific_messages() {
        assert_eq!(
            FeedError::InvalidFileType("text/plain".into()).user_message(),
            "Por favor selecciona un archivo de imagen válido"
        );
        assert_eq!(
            FeedError::FileTooLarge {
                size: 6_000_000,
                max: 5_242_880
            }
            .user_message(),
            "La imagen debe ser menor a 5MB"
        );
    }

    #[test]
    fn server_errors_surface_their_text() {
        assert_eq!(FeedError::Server("x".into()).user_message(), "x");
    }

    #[test]
    fn transport_errors_are_generic() {
        for err in [
            FeedError::Request("offline".into()),
            FeedError::Http(500),
            FeedError::Decode("eof".into()),
        ] {
            assert_eq!(err.user_message(), GENERIC_ERROR_MESSAGE);
        }
    }
}
