use crate::DataType;
use quote::ToTokens;
use syn::{GenericArgument, PathArguments, Type};

fn generic_argument(ty: &Type) -> &Type {
    let Type::Path(type_path) = ty else {
        panic!("Unsupported type `{}`", ty.to_token_stream());
    };
    let segment = type_path
        .path
        .segments
        .last()
        .expect("The type path cannot be empty");
    let PathArguments::AngleBracketed(bracketed) = &segment.arguments else {
        panic!(
            "`{}` must have a generic argument",
            ty.to_token_stream()
        );
    };
    match bracketed.args.first() {
        Some(GenericArgument::Type(inner)) => inner,
        _ => panic!(
            "`{}` must have a type as the first generic argument",
            ty.to_token_stream()
        ),
    }
}

fn is_u8(ty: &Type) -> bool {
    matches!(ty, Type::Path(p) if p.path.is_ident("u8"))
}

/// Map a Rust field type to its [`DataType`] tag and nullability. `Option`
/// marks the type nullable, `Box` and `Arc` are transparent wrappers,
/// `Vec<u8>` and `Box<[u8]>` are blobs. Used at compile time by
/// `#[derive(Mapped)]`.
pub fn decode_type(ty: &Type) -> (DataType, bool) {
    let Type::Path(type_path) = ty else {
        panic!("Unsupported field type `{}`", ty.to_token_stream());
    };
    let segment = type_path
        .path
        .segments
        .last()
        .expect("The type path cannot be empty");
    let ident = &segment.ident;
    if ident == "Option" {
        let (data_type, _) = decode_type(generic_argument(ty));
        return (data_type, true);
    }
    if ident == "Box" || ident == "Arc" {
        let inner = generic_argument(ty);
        if let Type::Slice(slice) = inner {
            if is_u8(&slice.elem) {
                return (DataType::Blob, false);
            }
            panic!("Unsupported field type `{}`", ty.to_token_stream());
        }
        return decode_type(inner);
    }
    if ident == "Vec" {
        if is_u8(generic_argument(ty)) {
            return (DataType::Blob, false);
        }
        panic!("Unsupported field type `{}`", ty.to_token_stream());
    }
    let data_type = if ident == "bool" {
        DataType::Boolean
    } else if ident == "i8" {
        DataType::Int8
    } else if ident == "i16" {
        DataType::Int16
    } else if ident == "i32" {
        DataType::Int32
    } else if ident == "i64" {
        DataType::Int64
    } else if ident == "u8" {
        DataType::UInt8
    } else if ident == "u16" {
        DataType::UInt16
    } else if ident == "u32" {
        DataType::UInt32
    } else if ident == "u64" {
        DataType::UInt64
    } else if ident == "f32" {
        DataType::Float32
    } else if ident == "f64" {
        DataType::Float64
    } else if ident == "String" {
        DataType::Varchar
    } else if ident == "Decimal" {
        DataType::Decimal
    } else if ident == "Date" {
        DataType::Date
    } else if ident == "Time" {
        DataType::Time
    } else if ident == "PrimitiveDateTime" {
        DataType::Timestamp
    } else if ident == "OffsetDateTime" {
        DataType::TimestampWithTimezone
    } else if ident == "Uuid" {
        DataType::Uuid
    } else {
        panic!("Unknown field type `{}`", ty.to_token_stream());
    };
    (data_type, false)
}
