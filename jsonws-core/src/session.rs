//! # Session & Transport Boundary
//!
//! The core performs no I/O. Connecting, authenticating, identifying the portal
//! version and actually sending a compiled payload are the job of an external
//! collaborator, which plugs in through the [`Transport`] trait.
//!
//! ## Error Handling
//!
//! - **`Transport::Error`**: transport-level failures (connection refused, DNS, TLS).
//! - **[`RemoteFailure`]**: the round-trip reached the portal but was rejected; it is
//!   fed to [`classify`] and surfaces as a typed [`ClassifiedError`].
//!
//! [`Transport::send`] separates the two by returning
//! `Result<Result<Value, RemoteFailure>, Self::Error>`, and [`Session::invoke`]
//! folds both sides into a single [`InvokeError`].
use crate::compiler::{CallSpecification, compile};
use crate::error::{ClassifiedError, classify};
use http::StatusCode;
use serde_json::Value;

/// A round-trip that reached the portal but was rejected at the protocol level.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteFailure {
    pub status: StatusCode,
    pub body: Value,
}

/// The seam towards the excluded HTTP/authentication collaborator.
///
/// Implementors receive an already-compiled, wire-ready payload and are expected to
/// carry whatever session state (cookies, credentials, base URL) the portal needs.
/// Retry policy, timeouts and cancellation all belong on this side of the seam.
#[allow(async_fn_in_trait)]
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends a compiled call specification to the portal.
    ///
    /// # Returns
    /// * `Ok(Ok(Value))` - The portal executed the batch; raw JSON payload.
    /// * `Ok(Err(RemoteFailure))` - The portal answered with a protocol-level failure.
    /// * `Err(Self::Error)` - The request never completed.
    async fn send(
        &mut self,
        payload: &CallSpecification,
    ) -> Result<Result<Value, RemoteFailure>, Self::Error>;
}

/// Errors surfaced by [`Session::invoke`].
#[derive(Debug, thiserror::Error)]
pub enum InvokeError<E> {
    #[error(transparent)]
    Remote(#[from] ClassifiedError),
    #[error("Transport failure: '{0}'")]
    Transport(#[source] E),
}

/// An authenticated portal session: compiles specifications, dispatches them through
/// the transport and classifies failures.
#[derive(Debug, Clone)]
pub struct Session<T> {
    transport: T,
}

impl<T: Transport> Session<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Invokes one or more services described by `spec`.
    ///
    /// The specification is compiled (see [`compile`]) and handed to the transport.
    /// On success the raw JSON payload is returned unmodified — decoding it belongs
    /// to the caller. The portal reports many failures with HTTP 200 and an
    /// `"exception"` body; those are classified exactly like explicit failures.
    pub async fn invoke(&mut self, spec: &CallSpecification) -> Result<Value, InvokeError<T::Error>> {
        let compiled = compile(spec);

        let outcome = self
            .transport
            .send(&compiled)
            .await
            .map_err(InvokeError::Transport)?;

        match outcome {
            Ok(body) => {
                if body.get("exception").is_some() {
                    return Err(InvokeError::Remote(classify(StatusCode::OK, &body)));
                }
                Ok(body)
            }
            Err(failure) => Err(InvokeError::Remote(classify(failure.status, &failure.body))),
        }
    }

    /// Consumes the session, returning the underlying transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
