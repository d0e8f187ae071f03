//! Field bindings and their resolved descriptors

use std::any::{self, Any};
use std::fmt;

use crate::coerce::Kind;

/// One field of a configuration record, bound to its storage.
///
/// The derive macro builds these; they can also be written by hand when
/// implementing [`LoadEnv`](crate::LoadEnv) manually:
///
/// ```
/// use envload::Field;
///
/// let mut port = 0u16;
/// let field = Field::new("port", &mut port).annotation("PORT,8888");
/// let descriptor = field.descriptor("");
/// assert_eq!(descriptor.env_var, "PORT");
/// assert_eq!(descriptor.default.as_deref(), Some("8888"));
/// ```
pub struct Field<'a> {
    name: &'static str,
    env_var: Option<String>,
    default: Option<String>,
    type_name: &'static str,
    target: &'a mut dyn Any,
}

impl<'a> Field<'a> {
    /// Bind the field called `name` to `target`.
    pub fn new<T: Any>(name: &'static str, target: &'a mut T) -> Self {
        Self {
            name,
            env_var: None,
            default: None,
            type_name: any::type_name::<T>(),
            target,
        }
    }

    /// Apply a `NAME` or `NAME,DEFAULT` annotation.
    ///
    /// An empty name keeps the derived one, so `",8888"` only sets a default.
    pub fn annotation(self, annotation: &str) -> Self {
        let (name, default) = parse_annotation(annotation);
        let field = match name {
            Some(name) => self.env_var(name),
            None => self,
        };
        match default {
            Some(default) => field.default(default),
            None => field,
        }
    }

    /// Read the field from `env_var` instead of the upper-cased field name.
    pub fn env_var(mut self, env_var: impl Into<String>) -> Self {
        self.env_var = Some(env_var.into());
        self
    }

    /// Text used when the variable is unset or empty.
    pub fn default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// Name of the struct field
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Rust type name of the field
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Semantic kind of the field, `None` if the type cannot be loaded.
    pub fn kind(&self) -> Option<Kind> {
        Kind::of(&*self.target)
    }

    /// Resolve the variable name and default, with `prefix` prepended to the
    /// variable name.
    pub fn descriptor(&self, prefix: &str) -> FieldDescriptor {
        let base = match &self.env_var {
            Some(env_var) => env_var.clone(),
            None => derived_env_var(self.name),
        };
        FieldDescriptor {
            field: self.name,
            env_var: format!("{prefix}{base}"),
            default: self.default.clone(),
        }
    }

    pub(crate) fn target(&mut self) -> &mut dyn Any {
        &mut *self.target
    }
}

impl fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("env_var", &self.env_var)
            .field("default", &self.default)
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

/// Resolved (field, variable, default) triple for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Name of the struct field
    pub field: &'static str,
    /// Environment variable the field is read from
    pub env_var: String,
    /// Text used when the variable is unset or empty
    pub default: Option<String>,
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}={}",
            self.env_var,
            self.default.as_deref().unwrap_or_default()
        )
    }
}

/// Split a `NAME,DEFAULT` annotation.
///
/// Empty segments count as absent. Segments after the second are ignored.
pub fn parse_annotation(annotation: &str) -> (Option<&str>, Option<&str>) {
    let mut parts = annotation.split(',');
    let name = parts.next().filter(|name| !name.is_empty());
    let default = parts.next().filter(|default| !default.is_empty());
    (name, default)
}

/// Upper-cased field name, without the raw identifier prefix.
fn derived_env_var(field: &str) -> String {
    field.strip_prefix("r#").unwrap_or(field).to_uppercase()
}
