extern crate proc_macro2;

use proc_macro::TokenStream;
use quote::quote;

// The token derives only make sense for the flat code-table enums, so both
// insist on unit variants.
fn unit_variants(input: &syn::DeriveInput) -> Vec<&syn::Variant> {
    let variants = match &input.data {
        syn::Data::Enum(item) => &item.variants,
        _ => panic!("Token derives only apply to enums."),
    };

    for variant in variants {
        assert!(
            variant.fields.is_empty(),
            "Token enums may only have unit variants."
        );
    }

    variants.iter().collect()
}

#[proc_macro_derive(TokenName)]
pub fn token_name_derive(input: TokenStream) -> TokenStream {
    let syn_item: syn::DeriveInput = syn::parse(input).unwrap();
    let name = &syn_item.ident;
    let variants = unit_variants(&syn_item);

    let identifiers = variants.iter().map(|v| &v.ident);
    let tokens = variants
        .iter()
        .map(|v| proc_macro2::Literal::string(&v.ident.to_string().to_lowercase()));

    let expanded = quote! {
        impl TokenName for #name {
            fn token(&self) -> &'static str {
                match self {
                    #( #name::#identifiers => #tokens, )*
                }
            }
        }
    };
    expanded.into()
}

#[proc_macro_derive(TokenFromStr)]
pub fn token_from_str_derive(input: TokenStream) -> TokenStream {
    let syn_item: syn::DeriveInput = syn::parse(input).unwrap();
    let name = &syn_item.ident;
    let name_str = name.to_string();
    let variants = unit_variants(&syn_item);

    let literals = variants
        .iter()
        .map(|v| proc_macro2::Literal::string(&v.ident.to_string().to_lowercase()));
    let identifiers = variants.iter().map(|v| &v.ident);

    let expanded = quote! {
        impl TokenFromStr for #name {
            fn from_token(s: &str) -> Result<#name, ::util::ParseEnumError> {
                match s {
                    #( #literals => Ok(#name::#identifiers), )*
                    _ => Err(::util::ParseEnumError {
                        value: s.to_string(),
                        enum_name: #name_str,
                    }),
                }
            }
        }

        impl ::core::str::FromStr for #name {
            type Err = ::util::ParseEnumError;

            fn from_str(s: &str) -> Result<#name, ::util::ParseEnumError> {
                TokenFromStr::from_token(s)
            }
        }
    };

    expanded.into()
}
