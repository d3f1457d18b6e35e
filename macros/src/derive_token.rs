use proc_macro2::TokenStream;
use quote::quote;
use syn::{Attribute, Data, DeriveInput, Ident, LitStr, parse::ParseStream};

/// Convert PascalCase to snake_case
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

struct VariantDef {
    name: Ident,
    description: String,
    newline: bool,
}

/// First string argument of a logos `#[token("...", ...)]` attribute.
fn logos_literal(attr: &Attribute) -> syn::Result<LitStr> {
    attr.parse_args_with(|input: ParseStream| {
        let literal: LitStr = input.parse()?;
        // priority = .., callbacks and the like
        input.parse::<TokenStream>()?;
        Ok(literal)
    })
}

impl VariantDef {
    fn from_variant(variant: &syn::Variant) -> syn::Result<Self> {
        let mut describe = None;
        let mut literal = None;
        let mut newline = false;

        for attr in &variant.attrs {
            if attr.path().is_ident("describe") {
                if describe.is_some() {
                    return Err(syn::Error::new_spanned(attr, "duplicate `describe` attribute"));
                }
                describe = Some(attr.parse_args::<LitStr>()?.value());
            } else if attr.path().is_ident("newline") {
                attr.meta.require_path_only()?;
                newline = true;
            } else if attr.path().is_ident("token") && literal.is_none() {
                literal = Some(logos_literal(attr)?.value());
            }
        }

        let name = variant.ident.clone();
        let description = describe
            .or_else(|| literal.map(|lit| format!("'{}'", lit)))
            .unwrap_or_else(|| to_snake_case(&name.to_string()));

        Ok(Self {
            name,
            description,
            newline,
        })
    }
}

pub fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "`Token` can only be derived for enums",
        ));
    };

    let variants = data
        .variants
        .iter()
        .map(VariantDef::from_variant)
        .collect::<syn::Result<Vec<_>>>()?;

    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let describe_arms = variants.iter().map(|v| {
        let name = &v.name;
        let description = &v.description;
        quote! {
            Self::#name { .. } => ::std::string::String::from(#description)
        }
    });

    let newline_variants: Vec<_> = variants
        .iter()
        .filter(|v| v.newline)
        .map(|v| &v.name)
        .collect();
    let is_newline = if newline_variants.is_empty() {
        quote! {}
    } else {
        quote! {
            #[inline]
            fn is_newline(&self) -> bool {
                ::std::matches!(self, #(Self::#newline_variants { .. })|*)
            }
        }
    };

    // an empty enum has no values to describe
    let describe_body = if variants.is_empty() {
        quote! { match *self {} }
    } else {
        quote! {
            match self {
                #(#describe_arms),*
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::parsekit::Token for #ident #ty_generics #where_clause {
            #is_newline

            fn describe(&self) -> ::std::string::String {
                #describe_body
            }
        }
    })
}
