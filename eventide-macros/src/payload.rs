//! `#[derive(Payload)]` implementation.

use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Ident, Token,
    parse::{Parse, ParseStream},
    parse_macro_input,
};

/// Arguments of the `#[payload(...)]` attribute.
pub(crate) struct PayloadArgs {
    pub kind: Ident,
}

impl Parse for PayloadArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut kind = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "kind" => {
                    kind = Some(input.parse::<Ident>()?);
                }
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        match kind {
            Some(kind) => Ok(PayloadArgs { kind }),
            None => Err(syn::Error::new(
                input.span(),
                "expected `kind = <EventKind variant>`",
            )),
        }
    }
}

pub fn derive_payload_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    if !matches!(input.data, Data::Struct(_)) {
        return syn::Error::new_spanned(name, "Payload can only be derived for structs")
            .to_compile_error()
            .into();
    }

    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(&input.generics, "Payload structs cannot be generic")
            .to_compile_error()
            .into();
    }

    let Some(attr) = input.attrs.iter().find(|a| a.path().is_ident("payload")) else {
        return syn::Error::new_spanned(name, "missing #[payload(kind = ...)] attribute")
            .to_compile_error()
            .into();
    };

    let args = match attr.parse_args::<PayloadArgs>() {
        Ok(args) => args,
        Err(err) => return err.to_compile_error().into(),
    };
    let kind = &args.kind;

    let expanded = quote! {
        impl ::eventide_core::Payload for #name {
            const KIND: ::eventide_core::EventKind = ::eventide_core::EventKind::#kind;

            fn from_data(
                data: &::eventide_core::EventData,
            ) -> ::core::option::Option<&Self> {
                match data {
                    ::eventide_core::EventData::#name(payload) => ::core::option::Option::Some(payload),
                    _ => ::core::option::Option::None,
                }
            }

            fn from_data_mut(
                data: &mut ::eventide_core::EventData,
            ) -> ::core::option::Option<&mut Self> {
                match data {
                    ::eventide_core::EventData::#name(payload) => ::core::option::Option::Some(payload),
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::convert::From<#name> for ::eventide_core::EventData {
            fn from(payload: #name) -> Self {
                ::eventide_core::EventData::#name(payload)
            }
        }
    };

    TokenStream::from(expanded)
}
