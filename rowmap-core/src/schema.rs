use crate::{PropertyDef, Result, Value};

/// Schema description of a mappable struct.
///
/// This is the explicit, build-time replacement for runtime reflection: the
/// sole data source for column resolution. Usually generated by
/// `#[derive(Mapped)]`, implementable by hand for external types.
///
/// `properties()` must return a stable, ordered slice; an empty slice is a
/// valid schema (a type with zero mapped properties), never an error. Property
/// names must be non-empty and unique within the slice.
pub trait Mapped: Default {
    /// The ordered property descriptors of this type.
    fn properties() -> &'static [PropertyDef];

    /// Read a property by name. `None` when the name is unknown or the
    /// property is not readable.
    fn get(&self, property: &str) -> Option<Value>;

    /// Write a property by name, converting through
    /// [`AsValue::try_from_value`](crate::AsValue::try_from_value).
    fn set(&mut self, property: &str, value: Value) -> Result<()>;

    /// Find a property descriptor by exact name.
    fn property(name: &str) -> Option<&'static PropertyDef> {
        Self::properties().iter().find(|p| p.name == name)
    }
}
