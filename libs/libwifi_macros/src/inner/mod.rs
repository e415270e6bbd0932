use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Ident};

pub fn address_header_inner(ast: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &ast.ident;
    let field = address_field(ast)?;

    Ok(quote! {
        impl crate::Addresses for #name {
            fn src(&self) -> Option<&crate::frame::components::MacAddress> {
                crate::Addresses::src(&self.#field)
            }

            fn dest(&self) -> &crate::frame::components::MacAddress {
                crate::Addresses::dest(&self.#field)
            }

            fn bssid(&self) -> Option<&crate::frame::components::MacAddress> {
                crate::Addresses::bssid(&self.#field)
            }
        }
    })
}

/// Find the field that provides the addresses.
/// A field marked with `#[addresses]` wins, otherwise a field called `header` is used.
fn address_field(ast: &DeriveInput) -> syn::Result<Ident> {
    let Data::Struct(data) = &ast.data else {
        return Err(Error::new_spanned(
            &ast.ident,
            "AddressHeader can only be derived for structs",
        ));
    };
    let Fields::Named(fields) = &data.fields else {
        return Err(Error::new_spanned(
            &ast.ident,
            "AddressHeader requires a struct with named fields",
        ));
    };

    let mut marked = fields
        .named
        .iter()
        .filter(|field| field.attrs.iter().any(|attr| attr.path().is_ident("addresses")));

    if let Some(field) = marked.next() {
        if let Some(second) = marked.next() {
            return Err(Error::new_spanned(
                second,
                "Only one field can be marked with #[addresses]",
            ));
        }
        return field
            .ident
            .clone()
            .ok_or_else(|| Error::new_spanned(field, "Marked field needs a name"));
    }

    fields
        .named
        .iter()
        .filter_map(|field| field.ident.clone())
        .find(|ident| ident == "header")
        .ok_or_else(|| {
            Error::new_spanned(
                &ast.ident,
                "AddressHeader needs a field marked with #[addresses] or a field named `header`",
            )
        })
}
