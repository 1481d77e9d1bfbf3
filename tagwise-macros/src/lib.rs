use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, LitStr, parse_macro_input};

/// Derive macro for implementing the `Tag` trait.
///
/// By default the tag's diagnostic name is its type name; `#[tag(name = "...")]`
/// overrides it:
///
/// ```ignore
/// #[derive(Tag)]
/// #[tag(name = "device.reset")]
/// struct Reset;
/// ```
#[proc_macro_derive(Tag, attributes(tag))]
pub fn derive_tag(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let mut name_override = None;
    for attr in &input.attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }
        let parsed = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                name_override = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown attribute key, expected `name`"))
            }
        });
        if let Err(err) = parsed {
            return err.to_compile_error().into();
        }
    }

    let name_fn = name_override.map(|n| {
        quote! {
            fn name() -> &'static str {
                #n
            }
        }
    });

    let expanded = quote! {
        impl #impl_generics ::tagwise::Tag for #name #ty_generics #where_clause {
            #name_fn
        }
    };

    TokenStream::from(expanded)
}
