mod decode_property;

use decode_property::{decode_property, PropertyMetadata};
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, ItemStruct};

/// Derive the `Mapped` schema description for a named-field struct.
///
/// Field attributes:
/// - `#[rowmap(column = "...")]` declares an explicit column alias; the
///   property then resolves from the alias instead of the field name.
/// - `#[rowmap(skip)]` excludes the field from mapping, it keeps its
///   `Default` value.
///
/// ```ignore
/// #[derive(Default, Mapped)]
/// struct User {
///     id: i64,
///     #[rowmap(column = "usr_nm")]
///     name: String,
///     email: Option<String>,
/// }
/// ```
#[proc_macro_derive(Mapped, attributes(rowmap))]
pub fn derive_mapped(input: TokenStream) -> TokenStream {
    let item: ItemStruct = parse_macro_input!(input as ItemStruct);
    let name = &item.ident;
    let properties: Vec<PropertyMetadata> = item.fields.iter().map(decode_property).collect();
    let mapped: Vec<&PropertyMetadata> = properties.iter().filter(|p| !p.skip).collect();
    let defs = mapped.iter().map(|p| p.def());
    let get_arms = mapped.iter().map(|p| {
        let property = &p.name;
        let ident = &p.ident;
        quote! {
            #property => Some(::rowmap::AsValue::as_value(self.#ident.clone())),
        }
    });
    let set_arms = mapped.iter().map(|p| {
        let property = &p.name;
        let ident = &p.ident;
        let ty = &p.ty;
        quote! {
            #property => {
                self.#ident = <#ty as ::rowmap::AsValue>::try_from_value(value)?;
                Ok(())
            }
        }
    });
    quote! {
        impl ::rowmap::Mapped for #name {
            fn properties() -> &'static [::rowmap::PropertyDef] {
                static PROPERTIES: &[::rowmap::PropertyDef] = &[#(#defs),*];
                PROPERTIES
            }
            fn get(&self, property: &str) -> Option<::rowmap::Value> {
                match property {
                    #(#get_arms)*
                    _ => None,
                }
            }
            fn set(&mut self, property: &str, value: ::rowmap::Value) -> ::rowmap::Result<()> {
                match property {
                    #(#set_arms)*
                    _ => Err(::rowmap::Error::msg(format!(
                        "No property `{}` in {}",
                        property,
                        stringify!(#name),
                    ))),
                }
            }
        }
    }
    .into()
}
