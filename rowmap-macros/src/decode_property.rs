use proc_macro2::TokenStream;
use quote::quote;
use rowmap_core::{decode_type, DataType};
use syn::{parse::ParseBuffer, Field, Ident, LitStr, Type};

pub(crate) struct PropertyMetadata {
    pub(crate) ident: Ident,
    pub(crate) ty: Type,
    pub(crate) name: String,
    pub(crate) column: Option<String>,
    pub(crate) data_type: DataType,
    pub(crate) nullable: bool,
    pub(crate) skip: bool,
}

impl PropertyMetadata {
    /// Tokens constructing the `PropertyDef` literal for this field.
    pub(crate) fn def(&self) -> TokenStream {
        let name = &self.name;
        let data_type = &self.data_type;
        let nullable = self.nullable;
        let column = match &self.column {
            Some(column) => quote!(Some(#column)),
            None => quote!(None),
        };
        quote! {
            ::rowmap::PropertyDef {
                name: #name,
                data_type: #data_type,
                nullable: #nullable,
                column: #column,
                readable: true,
                writable: true,
            }
        }
    }
}

pub(crate) fn decode_property(field: &Field) -> PropertyMetadata {
    let ident = field
        .ident
        .clone()
        .expect("Mapped can only be derived for structs with named fields");
    let mut metadata = PropertyMetadata {
        name: ident.to_string(),
        ty: field.ty.clone(),
        ident,
        column: None,
        data_type: DataType::Unknown,
        nullable: false,
        skip: false,
    };
    for attr in &field.attrs {
        let meta = &attr.meta;
        if !meta.path().is_ident("rowmap") {
            continue;
        }
        let Ok(list) = meta.require_list() else {
            panic!("Error while parsing `rowmap`, use it like: `#[rowmap(column = \"...\")]`");
        };
        let result = list.parse_nested_meta(|arg| {
            if arg.path.is_ident("column") {
                let Ok(v) = arg.value().and_then(ParseBuffer::parse::<LitStr>) else {
                    panic!(
                        "Error while parsing `column`, use it like: `#[rowmap(column = \"user_name\")]`"
                    );
                };
                metadata.column = Some(v.value());
            } else if arg.path.is_ident("skip") {
                metadata.skip = true;
            } else {
                panic!(
                    "Unknown rowmap attribute `{}`",
                    arg.path
                        .get_ident()
                        .map(ToString::to_string)
                        .unwrap_or_default()
                );
            }
            Ok(())
        });
        if let Err(error) = result {
            panic!("Error while parsing `rowmap` attribute: {error}");
        }
    }
    if !metadata.skip {
        let (data_type, nullable) = decode_type(&field.ty);
        metadata.data_type = data_type;
        metadata.nullable = nullable;
    }
    metadata
}
