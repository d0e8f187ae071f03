//! Populate configuration structs in place from environment variables
//!
//! `envload` walks the fields of a configuration record, reads one
//! environment variable per field, coerces the text to the field's type and
//! writes it back into the record.
//!
//! # Features
//!
//! - **Declarative**: field listing generated by `#[derive(LoadEnv)]`
//! - **Zero values**: unset numbers are `0`, unset booleans are `false`, unset
//!   strings are empty; a missing variable is never an error
//! - **Defaults**: per-field default text, parsed like environment text
//! - **Durations**: `std::time::Duration` fields accept `300ms`, `1.5h`, `2h30m`
//! - **Testable**: load from any [`Environment`], not only the process environment
//!
//! # Supported field types
//!
//! | Kind          | Rust types                                      |
//! |---------------|-------------------------------------------------|
//! | text          | `String`                                        |
//! | integer       | `i8`..`i128`, `isize`, `u8`..`u128`, `usize`    |
//! | 32-bit float  | `f32`                                           |
//! | 64-bit float  | `f64`                                           |
//! | boolean       | `bool` (`1 0 t f true false`, any case)         |
//! | duration      | `std::time::Duration`                           |
//!
//! Any other field type fails the load with [`LoadError::UnsupportedType`].
//!
//! # Example
//!
//! ```rust
//! use envload::LoadEnv;
//!
//! #[derive(Debug, Default, LoadEnv)]
//! struct Config {
//!     #[env("LOG_PREFIX")]
//!     pub log_prefix: String,
//!
//!     #[env("PORT,8888")]
//!     pub port: i64,
//!
//!     #[env("DEVELOPMENT")]
//!     pub development: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("LOG_PREFIX", "svc");
//! #     std::env::remove_var("PORT");
//! #     std::env::remove_var("DEVELOPMENT");
//! let mut config = Config::default();
//! envload::load_env(&mut config)?;
//! assert_eq!(config.log_prefix, "svc");
//! assert_eq!(config.port, 8888);
//! assert!(!config.development);
//! #     Ok(())
//! # }
//! ```
//!
//! # Attributes
//!
//! ## `#[env("NAME")]` and `#[env("NAME,DEFAULT")]`
//!
//! Read the field from `NAME`, falling back to `DEFAULT` when the variable is
//! unset or empty. An empty name keeps the derived one, so `#[env(",30s")]`
//! only sets a default. Without the attribute the variable is the upper-cased
//! field name.
//!
//! ## `#[env(name = "NAME", default = "DEFAULT")]`
//!
//! The same, spelled with keys. Either key may be omitted.
//!
//! ```rust
//! # use envload::LoadEnv;
//! #[derive(Default, LoadEnv)]
//! struct Config {
//!     #[env(name = "REDIS_URL")]
//!     pub cache_url: String,
//!
//!     #[env(default = "30s")]
//!     pub request_timeout: std::time::Duration,
//! }
//! ```
//!
//! ## `#[env(prefix = "PREFIX_")]`
//!
//! Struct-level. Prepended to every variable name, explicit or derived.
//!
//! ```rust
//! # use envload::LoadEnv;
//! #[derive(Default, LoadEnv)]
//! #[env(prefix = "APP_")]
//! struct Config {
//!     // Reads APP_PORT
//!     pub port: u16,
//! }
//! ```

mod coerce;
mod duration;
mod env;
mod error;
mod field;
mod load;

pub use coerce::Kind;
pub use duration::{parse_duration, ParseDurationError};
pub use env::{Environment, ProcessEnv};
pub use envload_derive::LoadEnv;
pub use error::LoadError;
pub use field::{parse_annotation, Field, FieldDescriptor};
pub use load::{
    descriptors, from_env, from_env_with, load_env, load_env_from, requirements, LoadEnv,
};
