use crate::DataType;

/// Declarative description of one mapped property of a struct.
///
/// Built at compile time by `#[derive(Mapped)]` or written by hand for types
/// whose schema is declared manually. The `name` must be non-empty and unique
/// within the owning [`Mapped::properties`](crate::Mapped::properties) slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyDef {
    /// Property name as exposed to column resolution.
    pub name: &'static str,
    /// Declared value type.
    pub data_type: DataType,
    /// Whether the property can hold a NULL (an `Option` field).
    pub nullable: bool,
    /// Explicit column alias. When declared it replaces the property name as
    /// the column the property resolves from.
    pub column: Option<&'static str>,
    /// The property can be read through [`Mapped::get`](crate::Mapped::get).
    /// Informational: the derive always emits `true`, hand-written schemas may
    /// clear it to document a write-only property. The mapping path never
    /// consults it.
    pub readable: bool,
    /// The property can be written through [`Mapped::set`](crate::Mapped::set).
    /// Row mapping skips properties with `writable: false`.
    pub writable: bool,
}

impl PropertyDef {
    /// The column name this property maps from: the alias if one is declared,
    /// the property name otherwise.
    pub fn effective_column(&self) -> &'static str {
        self.column.unwrap_or(self.name)
    }
}
