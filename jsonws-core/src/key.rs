//! # Key Classification
//!
//! The call notation encodes bindings, references, type hints and inline types as
//! prefix/suffix conventions on plain string keys. This module turns that syntax into
//! an explicit [`KeyKind`], decoupling detection from the normalization logic in
//! [`crate::compiler`] so each concern is testable on its own.
//!
//! Classification is purely local: a key's kind never depends on where in the tree it
//! appears, and it is re-derived independently at every nesting level.

/// The classification of a single key inside a call specification or parameter bag.
///
/// Borrowed views into the original key; the compiler keeps the original string
/// whenever the kind calls for byte-for-byte preservation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind<'a> {
    /// A plain parameter name, subject to camel-case normalization.
    Parameter(&'a str),
    /// `/module/method` — a service call path, preserved verbatim.
    CallPath(&'a str),
    /// `$alias = /module/method` — a call whose result is bound to `alias` so later
    /// calls in the same tree can reference its fields.
    Binding { alias: &'a str, path: &'a str },
    /// `@field` — the value is an `alias.field` reference into a previously bound
    /// result, substituted by the portal at execution time.
    Reference(&'a str),
    /// `+name` — declares the fully-qualified remote type of the sibling parameter
    /// `name`. The name portion is normalized, the `+` preserved.
    TypeHint(&'a str),
    /// `name:fully.qualified.Type` — an inline typed object whose value is a nested
    /// bag. Equivalent to a `+name` hint plus flattened `name.field` parameters.
    InlineTyped { name: &'a str, remote_type: &'a str },
}

impl<'a> KeyKind<'a> {
    /// Classifies a single bag key.
    ///
    /// Any key that matches none of the marker conventions is treated as a plain
    /// parameter; the compiler never rejects a specification, it defers validation
    /// to the remote service.
    pub fn parse(key: &'a str) -> Self {
        if let Some(rest) = key.strip_prefix('$')
            && let Some((alias, path)) = rest.split_once('=')
        {
            return KeyKind::Binding {
                alias: alias.trim(),
                path: path.trim(),
            };
        }
        if key.starts_with('/') {
            return KeyKind::CallPath(key);
        }
        if let Some(field) = key.strip_prefix('@') {
            return KeyKind::Reference(field);
        }
        if let Some(name) = key.strip_prefix('+') {
            return KeyKind::TypeHint(name);
        }
        if let Some((name, remote_type)) = key.split_once(':') {
            return KeyKind::InlineTyped { name, remote_type };
        }
        KeyKind::Parameter(key)
    }
}
