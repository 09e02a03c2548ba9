use rooms::{DraftError, RoomId, SearchError};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Error de red: {0}")]
    Transport(String),

    #[error("{message}")]
    Status { status: u16, message: String },

    #[error("Respuesta inesperada del servidor: {0}")]
    Decode(String),

    #[error("No se encontró la habitación {0}")]
    NotFound(RoomId),
}

impl ApiError {
    /// Whether the server answered with a non-success status.
    pub fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. } | Self::NotFound(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            Self::Decode(e.to_string())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// Error bodies the backend sends on failure, e.g. `{"message": "..."}`.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub(crate) fn into_message(self) -> Option<String> {
        self.message.or(self.error).filter(|m| !m.is_empty())
    }
}

/// Why an availability search produced no results.
#[derive(Debug, Error)]
pub enum SearchFailure {
    #[error(transparent)]
    Invalid(#[from] SearchError),

    #[error("Error buscando habitaciones disponibles: {0}")]
    Api(#[from] ApiError),
}

/// Why an add or edit form submission did not go through.
#[derive(Debug, Error)]
pub enum SubmitFailure {
    #[error(transparent)]
    Invalid(#[from] DraftError),

    #[error(transparent)]
    Api(#[from] ApiError),

    /// The backend accepted the change but reading it back failed.
    #[error("Cambios guardados, pero no se pudo recargar la habitación: {0}")]
    Reload(ApiError),
}
