//! Derive macros for envsettings library
//!
//! This crate provides `#[derive(SettingsEnum)]` for declaring a batch of
//! settings as a fieldless enum, one variant per setting.
//!
//! # Usage
//!
//! ```text
//! use envsettings::DeriveSettingsEnum;
//!
//! #[derive(DeriveSettingsEnum)]
//! enum GlobalSettings {
//!     #[setting(default = "localhost", local_only, log)]
//!     POSTGRES_HOST,
//!
//!     #[setting(secret, required)]
//!     POSTGRES_PASSWORD,
//! }
//! ```

use proc_macro::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Expr, Fields, Lit, Meta, parse_macro_input};

/// Derive macro for generating `SettingsEnum` and `SettingName` implementations.
///
/// The symbolic name of each setting is the variant identifier, unless
/// overridden with `name`.
///
/// # Attributes
///
/// ## Variant attributes (`#[setting(...)]`)
/// - `default = "value"` - Default value
/// - `name = "NAME"` - Symbolic name override
/// - `secret` - Read from the secret provider, never logged
/// - `local_only` - Apply the default only in local environments
/// - `log` - Allow the value in safe dumps
/// - `required` - Fail resolution when the provider has no value
#[proc_macro_derive(SettingsEnum, attributes(setting))]
pub fn derive_settings_enum(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(name, "SettingsEnum can only be derived for enums"));
        }
    };

    let mut declarations = Vec::new();
    let mut name_arms = Vec::new();

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                "SettingsEnum variants cannot have fields",
            ));
        }

        let ident = &variant.ident;
        let attrs = parse_variant_attrs(&variant.attrs)?;
        let setting_name = attrs.name.clone().unwrap_or_else(|| ident.to_string());

        // Build the declaration with chainable modifiers
        let mut modifiers = Vec::new();

        if let Some(default) = &attrs.default {
            modifiers.push(quote! { .default_value(#default) });
        }
        if attrs.secret {
            modifiers.push(quote! { .secret() });
        }
        if attrs.local_only {
            modifiers.push(quote! { .local_only() });
        }
        if attrs.log {
            modifiers.push(quote! { .log_value() });
        }
        if attrs.required {
            modifiers.push(quote! { .required() });
        }

        declarations.push(quote! {
            envsettings::SettingDeclaration::new(#setting_name) #(#modifiers)*
        });
        name_arms.push(quote! { Self::#ident => #setting_name, });
    }

    Ok(quote! {
        impl #impl_generics envsettings::SettingsEnum for #name #ty_generics #where_clause {
            fn declarations() -> ::std::vec::Vec<envsettings::SettingDeclaration> {
                ::std::vec![#(#declarations),*]
            }
        }

        impl #impl_generics envsettings::SettingName for #name #ty_generics #where_clause {
            fn setting_name(&self) -> &str {
                match *self {
                    #(#name_arms)*
                }
            }
        }
    })
}

/// Variant-level attributes from #[setting(...)]
#[derive(Default)]
struct VariantAttrs {
    default: Option<String>,
    name: Option<String>,
    secret: bool,
    local_only: bool,
    log: bool,
    required: bool,
}

fn parse_variant_attrs(attrs: &[Attribute]) -> syn::Result<VariantAttrs> {
    let mut result = VariantAttrs::default();

    for attr in attrs {
        if !attr.path().is_ident("setting") {
            continue;
        }

        let nested = attr.parse_args_with(
            syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated,
        )?;

        for meta in nested {
            match meta {
                Meta::Path(path) => {
                    if path.is_ident("secret") {
                        result.secret = true;
                    } else if path.is_ident("local_only") {
                        result.local_only = true;
                    } else if path.is_ident("log") {
                        result.log = true;
                    } else if path.is_ident("required") {
                        result.required = true;
                    } else {
                        return Err(unknown_key(&path));
                    }
                }
                Meta::NameValue(nv) => {
                    if nv.path.is_ident("default") {
                        result.default = Some(string_literal(&nv.value, "default")?);
                    } else if nv.path.is_ident("name") {
                        result.name = Some(string_literal(&nv.value, "name")?);
                    } else {
                        return Err(unknown_key(&nv.path));
                    }
                }
                Meta::List(list) => return Err(unknown_key(&list.path)),
            }
        }
    }

    Ok(result)
}

fn string_literal(value: &Expr, key: &str) -> syn::Result<String> {
    if let Expr::Lit(lit) = value {
        if let Lit::Str(s) = &lit.lit {
            return Ok(s.value());
        }
    }
    Err(syn::Error::new_spanned(value, format!("#[setting({key})] must be a string literal")))
}

fn unknown_key(path: &syn::Path) -> syn::Error {
    syn::Error::new_spanned(
        path,
        "Unknown #[setting] key. Expected one of: default, name, secret, local_only, log, required",
    )
}
