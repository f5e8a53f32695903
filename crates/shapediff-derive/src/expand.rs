use std::collections::HashSet;

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{parse_quote, Data, DataStruct, DeriveInput, Fields, Index, LitStr, Member};

use crate::attrs::{ContainerAttrs, FieldAttrs};

pub(crate) fn derive(input: &DeriveInput) -> syn::Result<TokenStream> {
    let container = ContainerAttrs::parse(&input.attrs)?;
    let krate = container
        .krate
        .clone()
        .unwrap_or_else(|| parse_quote!(::shapediff));

    match &input.data {
        Data::Struct(data) if !container.scalar => nested(input, data, &krate),
        Data::Struct(_) | Data::Enum(_) => scalar(input, &container, &krate),
        Data::Union(data) => Err(syn::Error::new_spanned(
            data.union_token,
            "Diffable cannot be derived for unions",
        )),
    }
}

/// One walked field: its path segment and how to reach it on `Self`.
struct FieldPlan {
    name: LitStr,
    member: Member,
}

fn plan_fields(data: &DataStruct) -> syn::Result<Vec<FieldPlan>> {
    let mut seen = HashSet::new();
    let mut plans = Vec::new();

    for (i, field) in data.fields.iter().enumerate() {
        let attrs = FieldAttrs::parse(&field.attrs)?;
        if attrs.skip {
            continue;
        }
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(i)),
        };
        let name = attrs.rename.unwrap_or_else(|| {
            let text = match &field.ident {
                Some(ident) => ident.unraw().to_string(),
                None => i.to_string(),
            };
            LitStr::new(&text, field.span())
        });
        if !seen.insert(name.value()) {
            return Err(syn::Error::new(
                name.span(),
                format!("duplicate field name `{}` in diff paths", name.value()),
            ));
        }
        plans.push(FieldPlan { name, member });
    }
    Ok(plans)
}

fn nested(input: &DeriveInput, data: &DataStruct, krate: &syn::Path) -> syn::Result<TokenStream> {
    if matches!(data.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "unit structs have no fields to compare; use #[diff(scalar)] or derive on a struct with fields",
        ));
    }

    let ident = &input.ident;
    let mut generics = input.generics.clone();
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(#krate::Diffable));
    }
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let walks = plan_fields(data)?.into_iter().map(|FieldPlan { name, member }| {
        quote! {
            #krate::FieldAccessor::new(#name, |s: &Self| ::core::option::Option::Some(&s.#member))
                .diff(old, new, path, cx)?;
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::Diffable for #ident #ty_generics #where_clause {
            const SHAPE: #krate::FieldShape = #krate::FieldShape::NestedObject;

            #[allow(unused_variables)]
            fn diff(
                old: ::core::option::Option<&Self>,
                new: ::core::option::Option<&Self>,
                path: &#krate::Path,
                cx: &mut #krate::DiffContext<'_>,
            ) -> #krate::Result<()> {
                #krate::diff_nested(old, new, path, cx, |cx| {
                    #(#walks)*
                    ::core::result::Result::Ok(())
                })
            }
        }
    })
}

fn scalar(
    input: &DeriveInput,
    container: &ContainerAttrs,
    krate: &syn::Path,
) -> syn::Result<TokenStream> {
    let ident = &input.ident;
    let mut generics = input.generics.clone();
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let format_bound: syn::Path = if container.debug {
        parse_quote!(::core::fmt::Debug)
    } else {
        parse_quote!(::core::fmt::Display)
    };
    generics.make_where_clause().predicates.push(parse_quote! {
        #ident #ty_generics: ::core::cmp::PartialEq + ::core::cmp::PartialOrd + #format_bound
    });
    let (impl_generics, _, where_clause) = generics.split_for_impl();

    let display = if container.debug {
        quote!(::std::format!("{:?}", self))
    } else {
        quote!(::std::string::ToString::to_string(self))
    };

    Ok(quote! {
        impl #impl_generics #krate::Diffable for #ident #ty_generics #where_clause {
            const SHAPE: #krate::FieldShape = #krate::FieldShape::Scalar;

            fn diff(
                old: ::core::option::Option<&Self>,
                new: ::core::option::Option<&Self>,
                path: &#krate::Path,
                cx: &mut #krate::DiffContext<'_>,
            ) -> #krate::Result<()> {
                #krate::diff_scalar(old, new, path, cx)
            }

            fn display(&self) -> ::std::string::String {
                #display
            }

            fn natural_cmp(&self, other: &Self) -> ::core::cmp::Ordering {
                #krate::partial_order(self, other)
            }
        }
    })
}
