//! Extractors that report malformed input as [`AppError::Validation`]
//! instead of axum's default plain-text 400/415 rejections.

use std::collections::HashMap;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
};
use serde::de::{value::MapDeserializer, DeserializeOwned};

use crate::error::{AppError, Location, ValidationError};

/// JSON body. A request without any `Content-Type` is still read as JSON;
/// any other non-JSON content type is rejected.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(CONTENT_TYPE) {
            let axum::Json(value) = axum::Json::<T>::from_request(req, state).await?;
            return Ok(Self(value));
        }
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            ValidationError::new(Location::Body, "body_invalid", rejection.body_text())
        })?;
        let value = serde_json::from_slice(&bytes)?;
        Ok(Self(value))
    }
}

#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct ValidPath<T>(pub T);

/// Query string. A repeated key keeps its last value. Fields are
/// deserialized from strings, so `T` should hold `String`s or types that
/// parse themselves from one.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs): Query<Vec<(String, String)>> =
            Query::from_request_parts(parts, state).await?;
        // later pairs overwrite earlier ones
        let fields: HashMap<String, String> = pairs.into_iter().collect();
        let deserializer = MapDeserializer::<_, serde::de::value::Error>::new(fields.into_iter());
        T::deserialize(deserializer)
            .map(Self)
            .map_err(|err| ValidationError::new(Location::Query, "query_invalid", err.to_string()))
            .map_err(AppError::from)
    }
}
