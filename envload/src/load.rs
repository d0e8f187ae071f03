//! The loading pass over a record's fields

use std::env::VarError;

use crate::env::{Environment, ProcessEnv};
use crate::error::LoadError;
use crate::field::{Field, FieldDescriptor};

/// A configuration record that can be populated from the environment.
///
/// Usually implemented with `#[derive(LoadEnv)]`. A manual implementation
/// lists the fields in the order they should be loaded:
///
/// ```
/// use envload::{Field, LoadEnv, LoadError};
///
/// #[derive(Default)]
/// struct Config {
///     port: u16,
///     debug: bool,
/// }
///
/// impl LoadEnv for Config {
///     fn fields(&mut self) -> Result<Vec<Field<'_>>, LoadError> {
///         Ok(vec![
///             Field::new("port", &mut self.port).annotation("HTTP_PORT,8080"),
///             Field::new("debug", &mut self.debug),
///         ])
///     }
/// }
///
/// let env = std::collections::HashMap::from([("DEBUG".to_string(), "t".to_string())]);
/// let mut config = Config::default();
/// envload::load_env_from(&mut config, &env).unwrap();
/// assert_eq!(config.port, 8080);
/// assert!(config.debug);
/// ```
pub trait LoadEnv {
    /// Bindings for every field, in load order.
    ///
    /// The default body reports that the type has no named fields.
    fn fields(&mut self) -> Result<Vec<Field<'_>>, LoadError> {
        Err(LoadError::not_a_struct::<Self>())
    }

    /// Prefix prepended to every variable name.
    fn prefix(&self) -> &'static str {
        ""
    }
}

/// Populate `record` from the process environment.
///
/// # Errors
///
/// - [`LoadError::NotAStruct`] if the record exposes no named fields
/// - [`LoadError::TypeMismatch`] if a value cannot be parsed into its field's type
/// - [`LoadError::UnsupportedType`] if a field's type has no coercion rule
///
/// Loading stops at the first error. Fields before the failing one keep
/// their new values.
pub fn load_env<R: LoadEnv + ?Sized>(record: &mut R) -> Result<(), LoadError> {
    load_env_from(record, &ProcessEnv)
}

/// Populate `record` from `env`.
///
/// Behaves like [`load_env`] but reads from the given [`Environment`].
pub fn load_env_from<R, E>(record: &mut R, env: &E) -> Result<(), LoadError>
where
    R: LoadEnv + ?Sized,
    E: Environment + ?Sized,
{
    let prefix = record.prefix();
    let fields = record.fields()?;
    let record_type = std::any::type_name::<R>();
    tracing::trace!(
        record = record_type,
        fields = fields.len(),
        "loading configuration from environment"
    );

    for field in fields {
        load_field(field, prefix, env)?;
    }
    Ok(())
}

/// Build a zero-valued `T` and populate it from the process environment.
///
/// ```
/// #[derive(Debug, Default, envload::LoadEnv)]
/// struct Config {
///     #[env("ENVLOAD_DOC_WORKERS,4")]
///     workers: usize,
/// }
///
/// # fn main() -> anyhow::Result<()> {
/// let config: Config = envload::from_env()?;
/// assert_eq!(config.workers, 4);
/// # Ok(())
/// # }
/// ```
pub fn from_env<T: LoadEnv + Default>() -> Result<T, LoadError> {
    from_env_with(&ProcessEnv)
}

/// Build a zero-valued `T` and populate it from `env`.
pub fn from_env_with<T, E>(env: &E) -> Result<T, LoadError>
where
    T: LoadEnv + Default,
    E: Environment + ?Sized,
{
    let mut record = T::default();
    load_env_from(&mut record, env)?;
    Ok(record)
}

/// Resolved descriptors for every field of `T`.
pub fn descriptors<T: LoadEnv + Default>() -> Result<Vec<FieldDescriptor>, LoadError> {
    let mut record = T::default();
    let prefix = record.prefix();
    let fields = record.fields()?;
    Ok(fields.iter().map(|field| field.descriptor(prefix)).collect())
}

/// The variables `T` reads, one `NAME=DEFAULT` line per field.
///
/// ```
/// #[derive(Default, envload::LoadEnv)]
/// struct Config {
///     #[env("PORT,8888")]
///     port: u16,
///     log_prefix: String,
/// }
///
/// assert_eq!(envload::requirements::<Config>().unwrap(), "PORT=8888\nLOG_PREFIX=\n");
/// ```
pub fn requirements<T: LoadEnv + Default>() -> Result<String, LoadError> {
    let mut out = String::new();
    for descriptor in descriptors::<T>()? {
        out.push_str(&descriptor.to_string());
        out.push('\n');
    }
    Ok(out)
}

fn load_field<E>(mut field: Field<'_>, prefix: &str, env: &E) -> Result<(), LoadError>
where
    E: Environment + ?Sized,
{
    let name = field.name();
    let Some(kind) = field.kind() else {
        return Err(LoadError::UnsupportedType {
            field: name,
            kind: field.type_name(),
        });
    };

    let FieldDescriptor {
        env_var, default, ..
    } = field.descriptor(prefix);

    let value = match env.get(&env_var) {
        Ok(value) => Some(value).filter(|value| !value.is_empty()),
        Err(VarError::NotPresent) => None,
        Err(VarError::NotUnicode(raw)) => {
            return Err(LoadError::type_mismatch(
                name,
                env_var,
                raw.to_string_lossy(),
                kind,
                "value is not valid unicode",
            ));
        }
    };
    let (text, source) = match value {
        Some(value) => (value, "environment"),
        None => match default.filter(|default| !default.is_empty()) {
            Some(default) => (default, "default"),
            None => (kind.zero_text().to_string(), "zero"),
        },
    };
    tracing::debug!(field = name, env_var = %env_var, %kind, source, "resolved field");

    kind.assign(&text, field.target())
        .map_err(|reason| LoadError::type_mismatch(name, env_var, text, kind, reason))
}
