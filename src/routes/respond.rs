//! Shared plumbing between a store route and its single storage call.
//!
//! Every handler hands its storage future to [`execute`] together with a
//! [`ReplyPolicy`] describing how a successful result becomes a response.
//! Failures are logged and mapped to [`StoreError`].

use axum::{http::StatusCode, response::{IntoResponse, Json}};
use serde::Serialize;
use std::future::Future;
use tracing::error;

use crate::errors::StoreError;

/// Turns the value produced by a storage call into a response.
pub trait ReplyPolicy<T> {
    type Reply: IntoResponse;

    fn reply(&self, value: T) -> Self::Reply;
}

/// Serialize the stored value as the JSON body.
#[derive(Debug, Clone, Copy)]
pub struct Echo;

/// Discard the value and answer `200 OK` with an empty body.
#[derive(Debug, Clone, Copy)]
pub struct Acknowledge;

impl<T: Serialize> ReplyPolicy<T> for Echo {
    type Reply = Json<T>;

    fn reply(&self, value: T) -> Json<T> {
        Json(value)
    }
}

impl<T> ReplyPolicy<T> for Acknowledge {
    type Reply = StatusCode;

    fn reply(&self, _value: T) -> StatusCode {
        StatusCode::OK
    }
}

/// Run one storage operation and shape its outcome.
///
/// `operation` reads as a gerund phrase ("getting cohort with id: ...") and
/// is used both in the log line and in the error body.
pub async fn execute<P, T, Fut>(
    policy: P,
    operation: impl Into<String>,
    storage_call: Fut,
) -> Result<P::Reply, StoreError>
where
    P: ReplyPolicy<T>,
    Fut: Future<Output = anyhow::Result<T>>,
{
    match storage_call.await {
        Ok(value) => Ok(policy.reply(value)),
        Err(e) => {
            let operation = operation.into();
            error!("error {} from DB: {:#}", operation, e);
            Err(StoreError::operation_failed(operation, &e))
        }
    }
}
