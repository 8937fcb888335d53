//! # Error Classification
//!
//! The portal reports failures in several shapes: plain HTTP status codes, bodies of
//! the form `{"exception": "<java class or message>"}`, and sometimes an HTTP 200
//! whose body nonetheless carries an exception. This module folds all of them into
//! the closed [`ClassifiedError`] taxonomy.
//!
//! Classification is a pure translation step. It never retries and never recovers;
//! whether to retry, surface or abort belongs entirely to the caller.
use http::StatusCode;
use serde_json::Value;

/// A remote failure, classified.
///
/// Callers pattern-match on the variant; each one carries the original HTTP status
/// and the remote message (or, for [`ClassifiedError::Unknown`], the whole body for
/// diagnostics).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifiedError {
    #[error("Unauthorized ({status}): '{message}'")]
    Unauthorized { status: StatusCode, message: String },
    #[error("Not found ({status}): '{message}'")]
    NotFound { status: StatusCode, message: String },
    #[error("Bad request ({status}): '{message}'")]
    BadRequest { status: StatusCode, message: String },
    #[error("Portal server error ({status}): '{message}'")]
    ServerError { status: StatusCode, message: String },
    #[error("Unknown portal failure ({status}): {body}")]
    Unknown { status: StatusCode, body: Value },
}

/// Maps a raw `(status, body)` failure pair into a [`ClassifiedError`].
///
/// Checked in order, first match wins:
///
/// 1. HTTP 401/403, or a permission/authentication exception -> `Unauthorized`
/// 2. a `NoSuch…Exception` (entity/record does not exist) -> `NotFound`
/// 3. an unresolvable service path or malformed parameters -> `BadRequest`
/// 4. HTTP 5xx, or an unrecognized exception with a stack trace -> `ServerError`
/// 5. anything else -> `Unknown`, carrying the raw body
pub fn classify(status: StatusCode, body: &Value) -> ClassifiedError {
    let exception = remote_exception(body);
    let message = exception.unwrap_or("").to_string();

    let unauthorized = status == StatusCode::UNAUTHORIZED
        || status == StatusCode::FORBIDDEN
        || exception.is_some_and(|e| {
            e.contains("PrincipalException")
                || e.contains("SecurityException")
                || e.contains("Authenticated access required")
        });
    if unauthorized {
        return ClassifiedError::Unauthorized { status, message };
    }

    if exception.is_some_and(is_no_such_entity) {
        return ClassifiedError::NotFound { status, message };
    }

    if exception.is_some_and(|e| {
        e.contains("No JSON web service action") || e.contains("IllegalArgumentException")
    }) {
        return ClassifiedError::BadRequest { status, message };
    }

    if status.is_server_error() || exception.is_some_and(has_stack_trace) {
        return ClassifiedError::ServerError { status, message };
    }

    ClassifiedError::Unknown {
        status,
        body: body.clone(),
    }
}

/// Extracts the remote exception string, if the body carries one.
///
/// The service layer wraps failures as `{"exception": "..."}`; some deployments
/// return the bare message string instead.
fn remote_exception(body: &Value) -> Option<&str> {
    body.get("exception")
        .and_then(Value::as_str)
        .or_else(|| body.as_str())
}

/// `com.liferay.portal.NoSuchUserException` and friends.
fn is_no_such_entity(exception: &str) -> bool {
    exception.contains("NoSuch") && exception.contains("Exception")
}

fn has_stack_trace(exception: &str) -> bool {
    exception.contains("java.lang.")
        || exception
            .lines()
            .any(|line| line.trim_start().starts_with("at "))
}
