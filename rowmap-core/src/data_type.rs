use proc_macro2::TokenStream;
use quote::{quote, ToTokens, TokenStreamExt};

/// Type tag for a [`Value`](crate::Value) variant.
///
/// Used as the declared type of a mapped property and as the lookup key of the
/// type handler registry. `Unknown` marks values whose column type is not
/// described, they travel through the pass-through handler unconverted.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    #[default]
    Unknown,
    Boolean,
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Decimal,
    Varchar,
    Blob,
    Date,
    Time,
    Timestamp,
    TimestampWithTimezone,
    Uuid,
}

impl ToTokens for DataType {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        use DataType::*;
        tokens.append_all(match self {
            Unknown => quote!(::rowmap::DataType::Unknown),
            Boolean => quote!(::rowmap::DataType::Boolean),
            Int8 => quote!(::rowmap::DataType::Int8),
            Int16 => quote!(::rowmap::DataType::Int16),
            Int32 => quote!(::rowmap::DataType::Int32),
            Int64 => quote!(::rowmap::DataType::Int64),
            UInt8 => quote!(::rowmap::DataType::UInt8),
            UInt16 => quote!(::rowmap::DataType::UInt16),
            UInt32 => quote!(::rowmap::DataType::UInt32),
            UInt64 => quote!(::rowmap::DataType::UInt64),
            Float32 => quote!(::rowmap::DataType::Float32),
            Float64 => quote!(::rowmap::DataType::Float64),
            Decimal => quote!(::rowmap::DataType::Decimal),
            Varchar => quote!(::rowmap::DataType::Varchar),
            Blob => quote!(::rowmap::DataType::Blob),
            Date => quote!(::rowmap::DataType::Date),
            Time => quote!(::rowmap::DataType::Time),
            Timestamp => quote!(::rowmap::DataType::Timestamp),
            TimestampWithTimezone => quote!(::rowmap::DataType::TimestampWithTimezone),
            Uuid => quote!(::rowmap::DataType::Uuid),
        });
    }
}
