//! # Invocation Compiler
//!
//! Rewrites a caller-authored call specification into the exact shape the JSON-WS
//! wire protocol expects.
//!
//! ## How it works
//!
//! The compiler walks every key/value pair of the tree, classifies the key with
//! [`KeyKind::parse`], and rewrites it only where the protocol expects the
//! normalized form:
//!
//! * plain parameter keys go through [`camelcase::normalize_parameter`] (dotted
//!   trailing segments stay untouched);
//! * `+name` type hints and the bare name of `name:Type` inline-typed keys have
//!   their name portion normalized, decorations preserved;
//! * call paths, `$alias = path` bindings and `@field` reference keys are preserved
//!   byte-for-byte, as are all values that are not objects — in particular
//!   `alias.field` reference strings, which the portal resolves at execution time.
//!
//! Object values recurse with the same rules at any depth; chains of dependent calls
//! have no depth limit. The input is never mutated and the output keeps the input's
//! declaration order, because the portal executes batched calls in the order they
//! were declared and later calls may depend on earlier bindings.
use crate::camelcase;
use crate::key::KeyKind;
use serde_json::Value;

/// An ordered mapping from call keys (`/module/method`, optionally prefixed with
/// `$alias = `) to parameter bags.
pub type CallSpecification = serde_json::Map<String, Value>;

/// Parameter bags share the call specification's representation; nested dependent
/// calls make the two shapes mutually recursive.
pub type ParameterBag = CallSpecification;

/// Compiles a call specification into its wire-ready form.
///
/// Pure and total: malformed keys are treated as plain parameters and normalized
/// rather than rejected, deferring validation to the remote service (whose refusal
/// is later mapped by [`crate::error::classify`]).
///
/// # Examples
///
/// ```
/// use jsonws_core::compile;
///
/// let spec = serde_json::json!({
///     "$user = /user/get-user-by-id": {
///         "fullURL": 123,
///         "@contactId": "$other.id"
///     }
/// });
/// let compiled = compile(spec.as_object().unwrap());
///
/// let expected = serde_json::json!({
///     "$user = /user/get-user-by-id": {
///         "fullUrl": 123,
///         "@contactId": "$other.id"
///     }
/// });
/// assert_eq!(serde_json::Value::Object(compiled), expected);
/// ```
pub fn compile(spec: &CallSpecification) -> CallSpecification {
    let mut out = CallSpecification::new();

    for (key, value) in spec {
        let rewritten_key = match KeyKind::parse(key) {
            KeyKind::Parameter(name) => camelcase::normalize_parameter(name),
            KeyKind::TypeHint(name) => format!("+{}", camelcase::normalize_parameter(name)),
            KeyKind::InlineTyped { name, remote_type } => {
                format!("{}:{}", camelcase::normalize(name), remote_type)
            }
            // Call paths, bindings and reference keys reach the wire untouched.
            KeyKind::CallPath(_) | KeyKind::Binding { .. } | KeyKind::Reference(_) => key.clone(),
        };

        let rewritten_value = match value {
            Value::Object(bag) => Value::Object(compile(bag)),
            other => other.clone(),
        };

        out.insert(rewritten_key, rewritten_value);
    }

    out
}
