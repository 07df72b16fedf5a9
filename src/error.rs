use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("URL manquante")]
    MissingUrl,

    #[error("URL invalide: {0}")]
    InvalidUrl(String),

    #[error("Corps de requête invalide: {0}")]
    InvalidBody(String),

    #[error("Méthode non autorisée")]
    MethodNotAllowed,

    #[error("Impossible d'accéder au site {0}. Il est peut-être inaccessible ou bloque les requêtes automatiques.")]
    FetchFailed(String),

    #[error("Le site {0} effectue trop de redirections ou bloque les requêtes automatiques.")]
    TooManyRedirects(String),

    #[error("Le site {0} a renvoyé une page vide ou invalide.")]
    EmptyPage(String),

    #[error("Une erreur inattendue est survenue.")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingUrl | AppError::InvalidUrl(_) | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::FetchFailed(_)
            | AppError::TooManyRedirects(_)
            | AppError::EmptyPage(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            AppError::Internal(details) => Json(json!({
                "message": self.to_string(),
                "details": details,
            })),
            _ => Json(json!({
                "message": self.to_string(),
            })),
        };

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
