//! Coercion of environment text into typed field values

use std::any::{self, Any};
use std::fmt;
use std::time::Duration;

use crate::duration::parse_duration;

/// Semantic type of a configuration field.
///
/// Every Rust type the loader can write into maps to exactly one kind; see
/// [`Kind::of`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `String`, copied verbatim
    Text,
    /// Any primitive integer, parsed base-10 into the field's width
    Int,
    /// `f32`
    Float32,
    /// `f64`
    Float64,
    /// `bool`
    Bool,
    /// `std::time::Duration`, parsed with [`parse_duration`]
    Duration,
}

/// Apply `$m` to every supported integer type.
macro_rules! for_each_int {
    ($m:ident) => {
        $m!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize)
    };
}

impl Kind {
    /// Resolve the kind of a field from its concrete type.
    ///
    /// Returns `None` when the type has no coercion rule.
    pub fn of(target: &dyn Any) -> Option<Self> {
        macro_rules! is_int {
            ($($t:ty),*) => { false $(|| target.is::<$t>())* };
        }

        if target.is::<String>() {
            Some(Self::Text)
        } else if for_each_int!(is_int) {
            Some(Self::Int)
        } else if target.is::<f32>() {
            Some(Self::Float32)
        } else if target.is::<f64>() {
            Some(Self::Float64)
        } else if target.is::<bool>() {
            Some(Self::Bool)
        } else if target.is::<Duration>() {
            Some(Self::Duration)
        } else {
            None
        }
    }

    /// Text used when neither the environment nor the annotation supplies
    /// one. Only text fields keep the empty string.
    pub fn zero_text(self) -> &'static str {
        match self {
            Self::Text => "",
            Self::Int | Self::Float32 | Self::Float64 | Self::Duration => "0",
            Self::Bool => "false",
        }
    }

    /// Parse `text` and store it in `target`.
    ///
    /// `target` is only written when parsing succeeds. On failure the parser's
    /// message is returned.
    pub(crate) fn assign(self, text: &str, target: &mut dyn Any) -> Result<(), String> {
        match self {
            Self::Text => store(target, text.to_owned()),
            Self::Int => assign_int(text, target),
            Self::Float32 => store(target, text.parse::<f32>().map_err(|e| e.to_string())?),
            Self::Float64 => store(target, text.parse::<f64>().map_err(|e| e.to_string())?),
            Self::Bool => store(target, parse_bool(text)?),
            Self::Duration => store(target, parse_duration(text).map_err(|e| e.to_string())?),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Text => "text",
            Self::Int => "integer",
            Self::Float32 => "32-bit float",
            Self::Float64 => "64-bit float",
            Self::Bool => "boolean",
            Self::Duration => "duration",
        };
        f.write_str(name)
    }
}

fn store<T: Any>(target: &mut dyn Any, value: T) -> Result<(), String> {
    match target.downcast_mut::<T>() {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(format!("field is not a {}", any::type_name::<T>())),
    }
}

fn assign_int(text: &str, target: &mut dyn Any) -> Result<(), String> {
    macro_rules! try_int {
        ($($t:ty),*) => {$(
            if let Some(slot) = target.downcast_mut::<$t>() {
                *slot = text.parse::<$t>().map_err(|e| e.to_string())?;
                return Ok(());
            }
        )*};
    }

    for_each_int!(try_int);
    Err("field is not an integer".to_string())
}

/// Parse the conventional boolean spellings, ignoring ASCII case.
pub(crate) fn parse_bool(text: &str) -> Result<bool, String> {
    const TRUE: [&str; 3] = ["1", "t", "true"];
    const FALSE: [&str; 3] = ["0", "f", "false"];

    if TRUE.iter().any(|t| text.eq_ignore_ascii_case(t)) {
        Ok(true)
    } else if FALSE.iter().any(|f| text.eq_ignore_ascii_case(f)) {
        Ok(false)
    } else {
        Err(format!("\"{text}\" is not a valid boolean"))
    }
}
