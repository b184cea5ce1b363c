//! Implementation of the `#[derive(DeepClone)]` macro.
//!
//! The generated impl routes every field through the `CloneContext`, which
//! records the field path and detects cycles through shared nodes.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Index, Variant, parse_macro_input, parse_quote};

/// Main implementation of the `DeepClone` derive macro.
pub fn derive_deep_clone_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let name = &input.ident;
    let generics = add_trait_bounds(
        input.generics.clone(),
        &parse_quote!(::frostpipe::object::DeepClone),
    );

    let body = match &input.data {
        Data::Struct(data_struct) => generate_struct_clone(&data_struct.fields),
        Data::Enum(data_enum) => {
            generate_enum_clone(&data_enum.variants.iter().collect::<Vec<_>>())
        }
        Data::Union(_) => {
            return syn::Error::new_spanned(&input.ident, "DeepClone cannot be derived for unions.")
                .to_compile_error()
                .into();
        }
    };

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let expanded = quote! {
        impl #impl_generics ::frostpipe::object::DeepClone for #name #type_generics #where_clause {
            #[allow(unused_variables)]
            fn deep_clone_in(
                &self,
                context: &mut ::frostpipe::object::CloneContext,
            ) -> ::core::result::Result<Self, ::frostpipe::object::ObjectError> {
                #body
            }
        }
    };

    TokenStream::from(expanded)
}

/// Adds `bound` to every type parameter of `generics`.
pub fn add_trait_bounds(mut generics: Generics, bound: &syn::Path) -> Generics {
    for type_parameter in generics.type_params_mut() {
        type_parameter.bounds.push(parse_quote!(#bound));
    }
    generics
}

fn generate_struct_clone(fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let cloned_fields = named_fields.named.iter().filter_map(|field| {
                let field_name = field.ident.as_ref()?;
                let label = field_name.to_string();
                Some(quote! { #field_name: context.field(#label, &self.#field_name)? })
            });
            quote! { ::core::result::Result::Ok(Self { #(#cloned_fields),* }) }
        }
        Fields::Unnamed(unnamed_fields) => {
            let cloned_fields = (0..unnamed_fields.unnamed.len()).map(|position| {
                let accessor = Index::from(position);
                quote! { context.index(#position, &self.#accessor)? }
            });
            quote! { ::core::result::Result::Ok(Self(#(#cloned_fields),*)) }
        }
        Fields::Unit => quote! { ::core::result::Result::Ok(Self) },
    }
}

fn generate_enum_clone(variants: &[&Variant]) -> TokenStream2 {
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
                let labels = names.iter().map(ToString::to_string);
                quote! {
                    Self::#variant_name { #(#names: #bindings),* } => ::core::result::Result::Ok(
                        Self::#variant_name { #(#names: context.field(#labels, #bindings)?),* }
                    ),
                }
            }
            Fields::Unnamed(unnamed_fields) => {
                let positions: Vec<usize> = (0..unnamed_fields.unnamed.len()).collect();
                let bindings: Vec<_> = positions
                    .iter()
                    .map(|position| format_ident!("binding_{}", position))
                    .collect();
                quote! {
                    Self::#variant_name(#(#bindings),*) => ::core::result::Result::Ok(
                        Self::#variant_name(#(context.index(#positions, #bindings)?),*)
                    ),
                }
            }
            Fields::Unit => quote! {
                Self::#variant_name => ::core::result::Result::Ok(Self::#variant_name),
            },
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
    fn test_add_trait_bounds_appends_to_every_parameter() {
        let generics: Generics = parse_quote!(<A, B: Clone>);
        let bounded = add_trait_bounds(generics, &parse_quote!(Marker));
        let rendered: Vec<String> = bounded
            .type_params()
            .map(|parameter| compact(&quote!(#parameter)))
            .collect();
        assert_eq!(rendered, vec!["A:Marker", "B:Clone+Marker"]);
    }

    #[rstest]
    fn test_struct_clone_uses_field_labels() {
        let fields: syn::FieldsNamed = parse_quote!({ id: u64, name: String });
        let rendered = compact(&generate_struct_clone(&Fields::Named(fields)));
        assert!(rendered.contains("context.field(\"id\",&self.id)?"));
        assert!(rendered.contains("context.field(\"name\",&self.name)?"));
    }

    #[rstest]
    fn test_empty_enum_matches_on_never() {
        assert_eq!(compact(&generate_enum_clone(&[])), "match*self{}");
    }
}
