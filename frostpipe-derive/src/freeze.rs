//! Implementation of the `#[derive(Freeze)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Index, Variant, parse_macro_input, parse_quote};

use crate::deep_clone::add_trait_bounds;

/// Main implementation of the `Freeze` derive macro.
pub fn derive_freeze_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = add_trait_bounds(
        input.generics.clone(),
        &parse_quote!(::frostpipe::object::Freeze),
    );

    let body = match &input.data {
        Data::Struct(data_struct) => generate_struct_seal(&data_struct.fields),
        Data::Enum(data_enum) => generate_enum_seal(&data_enum.variants.iter().collect::<Vec<_>>()),
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "Freeze cannot be derived for unions.")
                .to_compile_error()
                .into();
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::frostpipe::object::Freeze for #name #type_generics #where_clause {
            fn seal(&self) {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

fn generate_struct_seal(fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let sealed = named_fields.named.iter().filter_map(|field| {
                let field_name = field.ident.as_ref()?;
                Some(quote! { ::frostpipe::object::Freeze::seal(&self.#field_name); })
            });
            quote! { #(#sealed)* }
        }
        Fields::Unnamed(unnamed_fields) => {
            let sealed = (0..unnamed_fields.unnamed.len()).map(|position| {
                let accessor = Index::from(position);
                quote! { ::frostpipe::object::Freeze::seal(&self.#accessor); }
            });
            quote! { #(#sealed)* }
        }
        Fields::Unit => TokenStream2::new(),
    }
}

fn generate_enum_seal(variants: &[&Variant]) -> TokenStream2 {
    if variants.is_empty() {
        return quote! { match *self {} };
    }

    let arms = variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        match &variant.fields {
            Fields::Named(named_fields) => {
                let names: Vec<_> = named_fields
                    .named
                    .iter()
                    .filter_map(|field| field.ident.as_ref())
                    .collect();
                let bindings: Vec<_> = names
                    .iter()
                    .map(|name| format_ident!("binding_{}", name))
                    .collect();
                quote! {
                    Self::#variant_name { #(#names: #bindings),* } => {
                        #(::frostpipe::object::Freeze::seal(#bindings);)*
                    }
                }
            }
            Fields::Unnamed(unnamed_fields) => {
                let bindings: Vec<_> = (0..unnamed_fields.unnamed.len())
                    .map(|position| format_ident!("binding_{}", position))
                    .collect();
                quote! {
                    Self::#variant_name(#(#bindings),*) => {
                        #(::frostpipe::object::Freeze::seal(#bindings);)*
                    }
                }
            }
            Fields::Unit => quote! { Self::#variant_name => {} },
        }
    });

    quote! {
        match self {
            #(#arms)*
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn compact(tokens: &TokenStream2) -> String {
        tokens.to_string().split_whitespace().collect()
    }

    #[rstest]
    fn test_struct_seal_visits_every_positional_field() {
        let fields: syn::FieldsUnnamed = parse_quote!((String, u32));
        let rendered = compact(&generate_struct_seal(&Fields::Unnamed(fields)));
        assert!(rendered.contains("Freeze::seal(&self.0);"));
        assert!(rendered.contains("Freeze::seal(&self.1);"));
    }

    #[rstest]
    fn test_unit_struct_seal_is_empty() {
        assert!(generate_struct_seal(&Fields::Unit).is_empty());
    }
}
