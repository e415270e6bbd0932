use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod inner;

/// A little helper derive macro to implement the `libwifi::Addresses` trait
/// for frames that embed a type which already implements it.
///
/// The addresses are taken from the field marked with `#[addresses]`.
/// Without such a marker, a field named `header` is used.
///
/// This macro is only designed for internal usage in the [libwifi](https://docs.rs/libwifi/latest/libwifi/) crate.
///
/// How to use:
/// ```rust,ignore
/// #[derive(Clone, Debug, AddressHeader)]
/// pub struct Action {
///     #[addresses]
///     management: ManagementFrame,
///     body: ActionHeader,
/// }
/// ```
///
/// The new generated code will look like this:
/// ```rust,ignore
/// impl crate::Addresses for Action {
///     fn src(&self) -> Option<&crate::frame::components::MacAddress> {
///         crate::Addresses::src(&self.management)
///     }
///
///     fn dest(&self) -> &crate::frame::components::MacAddress {
///         crate::Addresses::dest(&self.management)
///     }
///
///     fn bssid(&self) -> Option<&crate::frame::components::MacAddress> {
///         crate::Addresses::bssid(&self.management)
///     }
/// }
/// ```
#[proc_macro_derive(AddressHeader, attributes(addresses))]
pub fn address_header(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let toks = inner::address_header_inner(&input).unwrap_or_else(|err| err.to_compile_error());

    toks.into()
}
