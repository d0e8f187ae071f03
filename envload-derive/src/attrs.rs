//! Attribute parsing for `#[env(...)]` annotations.
//!
//! Field-level attributes come in two spellings that may not be mixed on one
//! field:
//! - descriptor: `#[env("NAME")]`, `#[env("NAME,DEFAULT")]` or `#[env = "NAME,DEFAULT"]`
//! - keyed: `#[env(name = "NAME", default = "DEFAULT")]`
//!
//! The struct-level attribute only accepts `#[env(prefix = "PREFIX_")]`.

use syn::{Attribute, DeriveInput, Expr, ExprLit, Field, Lit, LitStr, Meta};

/// Parsed `#[env(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw `NAME,DEFAULT` descriptor, split at runtime.
    pub annotation: Option<LitStr>,

    /// Environment variable name override from `name = "..."`.
    ///
    /// If `None`, the field name is upper-cased.
    pub name: Option<LitStr>,

    /// Default text from `default = "..."`.
    pub default: Option<LitStr>,
}

impl FieldAttrs {
    /// Extract and validate `#[env(...)]` attributes from a struct field.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&field.attrs) {
            // #[env = "NAME,DEFAULT"]
            if let Meta::NameValue(meta) = &attr.meta {
                let lit = string_literal(&meta.value)?;
                attrs.set_annotation(lit)?;
                continue;
            }

            // #[env("NAME,DEFAULT")]
            if let Ok(lit) = attr.parse_args::<LitStr>() {
                attrs.set_annotation(lit)?;
                continue;
            }

            // #[env(name = "...", default = "...")]
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    if lit.value().is_empty() {
                        return Err(syn::Error::new_spanned(&lit, "name must not be empty"));
                    }
                    attrs.name = Some(lit);
                    return Ok(());
                }

                if meta.path.is_ident("default") {
                    attrs.default = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                Err(meta.error("unsupported env attribute, expected `name` or `default`"))
            })?;
        }

        if let Some(annotation) = &attrs.annotation {
            if attrs.name.is_some() || attrs.default.is_some() {
                return Err(syn::Error::new_spanned(
                    annotation,
                    "use either #[env(\"NAME,DEFAULT\")] or #[env(name = ..., default = ...)], not both",
                ));
            }
        }

        Ok(attrs)
    }

    fn set_annotation(&mut self, lit: LitStr) -> syn::Result<()> {
        if self.annotation.is_some() {
            return Err(syn::Error::new_spanned(
                lit,
                "duplicate env descriptor on the same field",
            ));
        }
        self.annotation = Some(lit);
        Ok(())
    }
}

/// Parsed `#[env(...)]` attributes from the struct itself.
#[derive(Debug, Default)]
pub struct StructAttrs {
    /// Prefix prepended to every variable name.
    pub prefix: Option<LitStr>,
}

impl StructAttrs {
    pub fn from_input(input: &DeriveInput) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in env_attrs(&input.attrs) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("prefix") {
                    attrs.prefix = Some(meta.value()?.parse()?);
                    return Ok(());
                }

                Err(meta.error("unsupported struct-level env attribute, expected `prefix`"))
            })?;
        }

        Ok(attrs)
    }
}

fn env_attrs(attrs: &[Attribute]) -> impl Iterator<Item = &Attribute> {
    attrs.iter().filter(|attr| attr.path().is_ident("env"))
}

fn string_literal(expr: &Expr) -> syn::Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Ok(lit.clone()),
        _ => Err(syn::Error::new_spanned(expr, "expected a string literal")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    fn value(lit: &Option<LitStr>) -> Option<String> {
        lit.as_ref().map(LitStr::value)
    }

    #[test]
    fn test_parse_descriptor() {
        let field: Field = parse_quote! {
            #[env("PORT,8888")]
            pub port: i64
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(value(&attrs.annotation), Some("PORT,8888".to_string()));
        assert!(attrs.name.is_none());
        assert!(attrs.default.is_none());
    }

    #[test]
    fn test_parse_name_value_descriptor() {
        let field: Field = parse_quote! {
            #[env = "LOG_PREFIX"]
            pub log_prefix: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(value(&attrs.annotation), Some("LOG_PREFIX".to_string()));
    }

    #[test]
    fn test_parse_keyed() {
        let field: Field = parse_quote! {
            #[env(name = "REDIS_URL", default = "redis://localhost")]
            pub cache_url: String
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.annotation.is_none());
        assert_eq!(value(&attrs.name), Some("REDIS_URL".to_string()));
        assert_eq!(value(&attrs.default), Some("redis://localhost".to_string()));
    }

    #[test]
    fn test_parse_keyed_across_attributes() {
        let field: Field = parse_quote! {
            #[env(name = "TIMEOUT")]
            #[env(default = "30s")]
            pub timeout: std::time::Duration
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert_eq!(value(&attrs.name), Some("TIMEOUT".to_string()));
        assert_eq!(value(&attrs.default), Some("30s".to_string()));
    }

    #[test]
    fn test_no_attributes() {
        let field: Field = parse_quote! {
            #[doc = "not ours"]
            pub development: bool
        };

        let attrs = FieldAttrs::from_field(&field).unwrap();
        assert!(attrs.annotation.is_none());
        assert!(attrs.name.is_none());
        assert!(attrs.default.is_none());
    }

    #[test]
    fn test_reject_unknown_key() {
        let field: Field = parse_quote! {
            #[env(from_file)]
            pub secret: String
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("unsupported env attribute"));
    }

    #[test]
    fn test_reject_non_string_default() {
        let field: Field = parse_quote! {
            #[env(default = 8888)]
            pub port: i64
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_reject_empty_name() {
        let field: Field = parse_quote! {
            #[env(name = "")]
            pub port: i64
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn test_reject_mixed_spellings() {
        let field: Field = parse_quote! {
            #[env("PORT")]
            #[env(default = "8888")]
            pub port: i64
        };

        let err = FieldAttrs::from_field(&field).unwrap_err();
        assert!(err.to_string().contains("not both"));
    }

    #[test]
    fn test_reject_duplicate_descriptor() {
        let field: Field = parse_quote! {
            #[env("PORT")]
            #[env("HTTP_PORT")]
            pub port: i64
        };

        assert!(FieldAttrs::from_field(&field).is_err());
    }

    #[test]
    fn test_parse_prefix() {
        let input: DeriveInput = parse_quote! {
            #[env(prefix = "APP_")]
            struct Config {
                port: u16,
            }
        };

        let attrs = StructAttrs::from_input(&input).unwrap();
        assert_eq!(value(&attrs.prefix), Some("APP_".to_string()));
    }

    #[test]
    fn test_reject_unknown_struct_key() {
        let input: DeriveInput = parse_quote! {
            #[env(rename_all = "lowercase")]
            struct Config {
                port: u16,
            }
        };

        assert!(StructAttrs::from_input(&input).is_err());
    }
}
