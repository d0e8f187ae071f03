//! Derive macro implementation for envload

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAttrs, StructAttrs};

/// `LoadEnv` derive macro
///
/// Implements `envload::LoadEnv` by listing every named field, in
/// declaration order, with its variable name and default.
///
/// # Supported Attributes
///
/// **Struct-level**:
/// - `#[env(prefix = "PREFIX_")]`: Add prefix to all env var names
///
/// **Field-level**:
/// - `#[env("NAME")]` / `#[env("NAME,DEFAULT")]`: Variable name and optional default text
/// - `#[env(name = "NAME")]`: Custom environment variable name
/// - `#[env(default = "DEFAULT")]`: Text used when the variable is unset or empty
///
/// # Example
///
/// See the `envload` crate documentation for usage examples.
#[proc_macro_derive(LoadEnv, attributes(env))]
pub fn derive_load_env(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let struct_name = &input.ident;
    let struct_attrs = StructAttrs::from_input(input)?;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "LoadEnv only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "LoadEnv only supports structs",
            ));
        }
    };

    let bindings = fields
        .iter()
        .map(|field| {
            let ident = field
                .ident
                .as_ref()
                .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
            let field_name = ident.unraw().to_string();
            let attrs = FieldAttrs::from_field(field)?;

            let mut binding = quote! {
                ::envload::Field::new(#field_name, &mut self.#ident)
            };
            if let Some(annotation) = &attrs.annotation {
                binding = quote! { #binding.annotation(#annotation) };
            }
            if let Some(name) = &attrs.name {
                binding = quote! { #binding.env_var(#name) };
            }
            if let Some(default) = &attrs.default {
                binding = quote! { #binding.default(#default) };
            }
            Ok(binding)
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let prefix_fn = struct_attrs.prefix.map(|prefix| {
        quote! {
            fn prefix(&self) -> &'static str {
                #prefix
            }
        }
    });

    // Field bindings are `dyn Any`, so every type parameter must be 'static.
    let mut generics = input.generics.clone();
    let type_params: Vec<_> = generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = generics.make_where_clause();
    for ident in type_params {
        where_clause
            .predicates
            .push(syn::parse_quote!(#ident: 'static));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        #[automatically_derived]
        impl #impl_generics ::envload::LoadEnv for #struct_name #ty_generics #where_clause {
            fn fields(
                &mut self,
            ) -> ::core::result::Result<::std::vec::Vec<::envload::Field<'_>>, ::envload::LoadError> {
                ::core::result::Result::Ok(::std::vec![#(#bindings),*])
            }

            #prefix_fn
        }
    })
}
