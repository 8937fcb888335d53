//! # JSON-WS Core
//!
//! `jsonws-core` is a client compiler for the JSON-WS batch RPC protocol exposed by
//! enterprise portal platforms. Callers describe one or more service invocations with
//! a nested, declarative notation; this crate rewrites that notation into the exact
//! wire-compatible parameter names and structure the portal expects, and classifies
//! remote failures into a small typed taxonomy.
//!
//! ## Key Components
//!
//! * **[`camelcase`]:** Rewrites identifiers to compensate for the inconsistent acronym
//!   casing of the portal's auto-generated service APIs (`feedURL` vs `feedUrl`).
//! * **[`key`]:** Parses the marker syntax carried in bag keys (`$alias = path`,
//!   `@field`, `+name`, `name:remote.Type`) into a tagged [`KeyKind`].
//! * **[`compiler`]:** Walks a possibly nested [`CallSpecification`] and produces a
//!   wire-ready copy, normalizing only the keys the protocol expects normalized.
//! * **[`error`]:** Maps a raw `(status, body)` failure into a [`ClassifiedError`].
//! * **[`session`]:** The seam towards the excluded HTTP/authentication collaborators.
//!   A [`Session`] compiles a specification, hands it to a [`Transport`], and
//!   classifies whatever comes back.
//!
//! ## What this crate does *not* do
//!
//! It performs no I/O: connecting, authenticating, identifying the portal version and
//! sending requests all live behind the [`Transport`] trait. It also never resolves
//! `alias.field` references itself; those are substituted by the portal at execution
//! time and must reach the wire byte-for-byte.
pub mod camelcase;
pub mod compiler;
pub mod error;
pub mod key;
pub mod session;

pub use compiler::{CallSpecification, ParameterBag, compile};
pub use error::{ClassifiedError, classify};
pub use key::KeyKind;
pub use session::{InvokeError, RemoteFailure, Session, Transport};
