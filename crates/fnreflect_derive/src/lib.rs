//! Derive macros mapping user types onto fnreflect value categories.
//!
//! - `Classify` on an enum: implements `fnreflect::Classify` with the `Enum` category.
//! - `Classify` on a struct: implements `fnreflect::Classify` with the `User` category and marks the struct as a
//!   reflected `fnreflect::Class`, so it can act as a method receiver and be shared through `Arc`/`Rc` references.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, GenericParam, parse_macro_input, parse_quote};

/// Maps a user enum or struct onto its value category.
///
/// # Example
/// ```ignore
/// #[derive(Classify)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
///
/// // Generates:
/// impl fnreflect::Classify for Point {
///     type Canonical = Self;
///     const CATEGORY: fnreflect::ValueCategory = fnreflect::ValueCategory::User;
///     type Shape = fnreflect::classify::shape::Object;
/// }
/// impl fnreflect::Class for Point {}
/// ```
#[proc_macro_derive(Classify)]
pub fn derive_classify(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_classify(input).unwrap_or_else(syn::Error::into_compile_error).into()
}

fn expand_classify(mut input: DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    // Type identity tokens are built from `TypeId`, which needs `'static`.
    if let Some(lt) = input.generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lt,
            "Classify cannot be derived for types with lifetime parameters",
        ));
    }

    let is_enum = match &input.data {
        Data::Enum(_) => true,
        Data::Struct(_) => false,
        Data::Union(u) => {
            return Err(syn::Error::new_spanned(
                u.union_token,
                "Classify can only be derived for structs and enums",
            ));
        }
    };

    for param in input.generics.params.iter_mut() {
        if let GenericParam::Type(ty) = param {
            ty.bounds.push(parse_quote!('static));
        }
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let (category, shape) = if is_enum {
        (
            quote!(::fnreflect::ValueCategory::Enum),
            quote!(::fnreflect::classify::shape::Plain),
        )
    } else {
        (
            quote!(::fnreflect::ValueCategory::User),
            quote!(::fnreflect::classify::shape::Object),
        )
    };

    let class_impl = if is_enum {
        quote!()
    } else {
        quote! {
            impl #impl_generics ::fnreflect::Class for #name #ty_generics #where_clause {}
        }
    };

    Ok(quote! {
        impl #impl_generics ::fnreflect::Classify for #name #ty_generics #where_clause {
            type Canonical = Self;
            const CATEGORY: ::fnreflect::ValueCategory = #category;
            type Shape = #shape;
        }

        #class_impl
    })
}
