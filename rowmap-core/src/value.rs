use crate::{AsValue, DataType, Result};
use rust_decimal::Decimal;
use time::{Date, OffsetDateTime, PrimitiveDateTime, Time};
use uuid::Uuid;

/// Dynamically typed column value.
///
/// Every variant wraps an `Option` so that a SQL `NULL` stays typed: a NULL
/// integer column is `Value::Int32(None)`, not a bare `Value::Null`. The bare
/// `Null` variant exists for values whose column type is unknown.
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int8(Option<i8>),
    Int16(Option<i16>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    UInt8(Option<u8>),
    UInt16(Option<u16>),
    UInt32(Option<u32>),
    UInt64(Option<u64>),
    Float32(Option<f32>),
    Float64(Option<f64>),
    Decimal(Option<Decimal>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Date(Option<Date>),
    Time(Option<Time>),
    Timestamp(Option<PrimitiveDateTime>),
    TimestampWithTimezone(Option<OffsetDateTime>),
    Uuid(Option<Uuid>),
}

impl Value {
    /// True for `Null` and for any typed variant holding no payload.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int8(v) => v.is_none(),
            Value::Int16(v) => v.is_none(),
            Value::Int32(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::UInt8(v) => v.is_none(),
            Value::UInt16(v) => v.is_none(),
            Value::UInt32(v) => v.is_none(),
            Value::UInt64(v) => v.is_none(),
            Value::Float32(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Decimal(v) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Blob(v) => v.is_none(),
            Value::Date(v) => v.is_none(),
            Value::Time(v) => v.is_none(),
            Value::Timestamp(v) => v.is_none(),
            Value::TimestampWithTimezone(v) => v.is_none(),
            Value::Uuid(v) => v.is_none(),
        }
    }

    /// The type tag of this value.
    pub fn data_type(&self) -> DataType {
        match self {
            Value::Null => DataType::Unknown,
            Value::Boolean(..) => DataType::Boolean,
            Value::Int8(..) => DataType::Int8,
            Value::Int16(..) => DataType::Int16,
            Value::Int32(..) => DataType::Int32,
            Value::Int64(..) => DataType::Int64,
            Value::UInt8(..) => DataType::UInt8,
            Value::UInt16(..) => DataType::UInt16,
            Value::UInt32(..) => DataType::UInt32,
            Value::UInt64(..) => DataType::UInt64,
            Value::Float32(..) => DataType::Float32,
            Value::Float64(..) => DataType::Float64,
            Value::Decimal(..) => DataType::Decimal,
            Value::Varchar(..) => DataType::Varchar,
            Value::Blob(..) => DataType::Blob,
            Value::Date(..) => DataType::Date,
            Value::Time(..) => DataType::Time,
            Value::Timestamp(..) => DataType::Timestamp,
            Value::TimestampWithTimezone(..) => DataType::TimestampWithTimezone,
            Value::Uuid(..) => DataType::Uuid,
        }
    }

    /// The typed NULL for a given type tag.
    pub fn empty(data_type: &DataType) -> Value {
        match data_type {
            DataType::Unknown => Value::Null,
            DataType::Boolean => Value::Boolean(None),
            DataType::Int8 => Value::Int8(None),
            DataType::Int16 => Value::Int16(None),
            DataType::Int32 => Value::Int32(None),
            DataType::Int64 => Value::Int64(None),
            DataType::UInt8 => Value::UInt8(None),
            DataType::UInt16 => Value::UInt16(None),
            DataType::UInt32 => Value::UInt32(None),
            DataType::UInt64 => Value::UInt64(None),
            DataType::Float32 => Value::Float32(None),
            DataType::Float64 => Value::Float64(None),
            DataType::Decimal => Value::Decimal(None),
            DataType::Varchar => Value::Varchar(None),
            DataType::Blob => Value::Blob(None),
            DataType::Date => Value::Date(None),
            DataType::Time => Value::Time(None),
            DataType::Timestamp => Value::Timestamp(None),
            DataType::TimestampWithTimezone => Value::TimestampWithTimezone(None),
            DataType::Uuid => Value::Uuid(None),
        }
    }

    /// Convert this value into the canonical variant for `target`.
    ///
    /// NULL always converts into the typed NULL of the target. Numeric
    /// conversions are range checked, everything else must already be the
    /// right variant. `Unknown` is the pass-through target and never converts.
    pub fn try_cast(self, target: &DataType) -> Result<Value> {
        if self.is_null() {
            return Ok(Value::empty(target));
        }
        Ok(match target {
            DataType::Unknown => self,
            DataType::Boolean => bool::try_from_value(self)?.as_value(),
            DataType::Int8 => i8::try_from_value(self)?.as_value(),
            DataType::Int16 => i16::try_from_value(self)?.as_value(),
            DataType::Int32 => i32::try_from_value(self)?.as_value(),
            DataType::Int64 => i64::try_from_value(self)?.as_value(),
            DataType::UInt8 => u8::try_from_value(self)?.as_value(),
            DataType::UInt16 => u16::try_from_value(self)?.as_value(),
            DataType::UInt32 => u32::try_from_value(self)?.as_value(),
            DataType::UInt64 => u64::try_from_value(self)?.as_value(),
            DataType::Float32 => f32::try_from_value(self)?.as_value(),
            DataType::Float64 => f64::try_from_value(self)?.as_value(),
            DataType::Decimal => Decimal::try_from_value(self)?.as_value(),
            DataType::Varchar => String::try_from_value(self)?.as_value(),
            DataType::Blob => <Box<[u8]>>::try_from_value(self)?.as_value(),
            DataType::Date => Date::try_from_value(self)?.as_value(),
            DataType::Time => Time::try_from_value(self)?.as_value(),
            DataType::Timestamp => PrimitiveDateTime::try_from_value(self)?.as_value(),
            DataType::TimestampWithTimezone => OffsetDateTime::try_from_value(self)?.as_value(),
            DataType::Uuid => Uuid::try_from_value(self)?.as_value(),
        })
    }
}
