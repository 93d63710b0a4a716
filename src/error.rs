use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;

/// Where in the request a validation failure was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Path,
    Query,
    Body,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub loc: Vec<Location>,
    pub msg: String,
}
impl ValidationError {
    pub fn new(location: Location, kind: &'static str, msg: impl Into<String>) -> Self {
        Self {
            kind,
            loc: vec![location],
            msg: msg.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {:?}: {}", self.kind, self.loc, self.msg)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(ValidationError),
    #[error("not found")]
    NotFound,
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => {
                tracing::warn!(loc = ?err.loc, kind = err.kind, "rejected request: {}", err.msg);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "detail": [err] })),
                )
                    .into_response()
            }
            Self::NotFound => {
                (StatusCode::NOT_FOUND, Json(json!({ "detail": "Not Found" }))).into_response()
            }
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(json!({ "detail": "Method Not Allowed" })),
            )
                .into_response(),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "model_invalid",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type_invalid",
            _ => "body_invalid",
        };
        ValidationError::new(Location::Body, kind, rejection.body_text()).into()
    }
}

// bodies sent without a content type are parsed directly
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        let kind = if err.is_data() { "model_invalid" } else { "json_invalid" };
        ValidationError::new(Location::Body, kind, err.to_string()).into()
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        ValidationError::new(Location::Path, "path_invalid", rejection.body_text()).into()
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        ValidationError::new(Location::Query, "query_invalid", rejection.body_text()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use axum::body::to_bytes;

    async fn render(err: AppError) -> Result<(StatusCode, serde_json::Value)> {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await?;
        Ok((status, serde_json::from_slice(&bytes)?))
    }

    #[tokio::test]
    async fn validation_renders_as_unprocessable_entity() -> Result<()> {
        let err = ValidationError::new(Location::Query, "query_invalid", "missing");
        let (status, body) = render(err.into()).await?;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body,
            json!({"detail": [{"type": "query_invalid", "loc": ["query"], "msg": "missing"}]})
        );
        Ok(())
    }

    #[tokio::test]
    async fn not_found_renders_detail() -> Result<()> {
        let (status, body) = render(AppError::NotFound).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"detail": "Not Found"}));
        Ok(())
    }

    #[tokio::test]
    async fn method_not_allowed_renders_detail() -> Result<()> {
        let (status, body) = render(AppError::MethodNotAllowed).await?;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({"detail": "Method Not Allowed"}));
        Ok(())
    }

    #[test]
    fn serde_errors_split_syntax_from_shape() {
        let syntax = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let shape = serde_json::from_str::<u8>("\"x\"").unwrap_err();
        let kind = |err: AppError| match err {
            AppError::Validation(err) => err.kind,
            _ => "other",
        };
        assert_eq!(kind(syntax.into()), "json_invalid");
        assert_eq!(kind(shape.into()), "model_invalid");
    }
}
