use actix_web::{HttpResponse, ResponseError, http::StatusCode, http::header::ContentType};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("invalid news item: {0}")]
    Validation(String),
    #[error("news item not found for link {0}")]
    NotFound(i64),
    #[error("link {0} matches more than one news item")]
    MultipleResults(i64),
    #[error("template error: {0}")]
    Template(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    /// Message safe to show in a response body. Infrastructure details
    /// stay in the logs.
    fn public_message(&self) -> String {
        match self {
            DomainError::Validation(msg) => msg.clone(),
            DomainError::NotFound(link) => format!("no news item with link {link}"),
            DomainError::MultipleResults(_)
            | DomainError::Template(_)
            | DomainError::Internal(_) => "something went wrong on our side".to_string(),
        }
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::Validation(_) => StatusCode::BAD_REQUEST,
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::MultipleResults(_)
            | DomainError::Template(_)
            | DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = format!(
            "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{status}</title></head>\n\
             <body><h1>{status}</h1><p>{message}</p><p><a href=\"/news/\">Back to all news</a></p></body>\n</html>\n",
            message = self.public_message(),
        );
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(
            DomainError::Validation("title is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DomainError::NotFound(9).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DomainError::MultipleResults(9).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            DomainError::Internal("db down".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_not_leaked() {
        let err = DomainError::Internal("database error: table missing".into());
        assert!(!err.public_message().contains("table missing"));
    }
}
