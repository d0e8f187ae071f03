//! Error types for loading configuration from environment variables

use crate::coerce::Kind;

/// Errors that can occur when loading a record from environment variables.
///
/// Loading stops at the first failing field. Fields processed before the
/// failure keep their new values; the failing field and every field after it
/// are left untouched.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The record does not expose any named fields to load into.
    #[error("Configuration must be a struct with named fields, got '{type_name}'")]
    NotAStruct {
        /// Type name of the value passed to the loader
        type_name: &'static str,
    },

    /// The environment text could not be coerced into the field's type.
    ///
    /// `value` is the text after default and zero substitution, i.e. exactly
    /// what the parser saw.
    #[error("Field '{field}': {env_var}=\"{value}\" must be {expected}: {reason}")]
    TypeMismatch {
        /// Name of the struct field
        field: &'static str,
        /// Environment variable the text was read from
        env_var: String,
        /// Offending text
        value: String,
        /// Kind the text was expected to parse as
        expected: Kind,
        /// Message from the underlying parser
        reason: String,
    },

    /// The field's type has no coercion rule.
    #[error("Field '{field}': type '{kind}' is not parsable from the environment")]
    UnsupportedType {
        /// Name of the struct field
        field: &'static str,
        /// Rust type name of the field
        kind: &'static str,
    },
}

impl LoadError {
    /// Create a not-a-struct error for `T`
    #[doc(hidden)]
    pub fn not_a_struct<T: ?Sized>() -> Self {
        Self::NotAStruct {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Create a type mismatch error (used by the loader)
    #[doc(hidden)]
    pub fn type_mismatch(
        field: &'static str,
        env_var: impl Into<String>,
        value: impl Into<String>,
        expected: Kind,
        reason: impl std::fmt::Display,
    ) -> Self {
        Self::TypeMismatch {
            field,
            env_var: env_var.into(),
            value: value.into(),
            expected,
            reason: reason.to_string(),
        }
    }

    /// Name of the field the error refers to, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::NotAStruct { .. } => None,
            Self::TypeMismatch { field, .. } | Self::UnsupportedType { field, .. } => Some(*field),
        }
    }
}
