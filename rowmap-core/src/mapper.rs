use crate::{
    Mapped, MappedMetadata, MappingFailure, PropertyDef, Result, RowSource, TypeHandlerRegistry,
};
use std::{any, collections::HashMap, sync::Arc};

/// Hook invoked when a non-nullable property would receive a NULL column
/// value. Without one the assignment is skipped and the property keeps its
/// default value.
pub trait NullHandler<T>: Send + Sync {
    fn handle_null(&self, property: &PropertyDef, instance: &mut T);
}

impl<T, F> NullHandler<T> for F
where
    F: Fn(&PropertyDef, &mut T) + Send + Sync,
{
    fn handle_null(&self, property: &PropertyDef, instance: &mut T) {
        self(property, instance)
    }
}

/// Maps one result row into a freshly constructed `T`.
///
/// Column resolution goes through [`MappedMetadata`], value conversion through
/// the global [`TypeHandlerRegistry`]. One mapper is built per query and can
/// map any number of rows.
#[derive(Clone)]
pub struct RowMapper<T: Mapped + 'static> {
    metadata: MappedMetadata<T>,
    overrides: Option<HashMap<String, String>>,
    null_handler: Option<Arc<dyn NullHandler<T>>>,
}

impl<T: Mapped + 'static> RowMapper<T> {
    pub fn new(
        case_sensitive: bool,
        auto_derive_column_names: bool,
        throw_on_mapping_failure: bool,
    ) -> Self {
        Self {
            metadata: MappedMetadata::new(
                case_sensitive,
                auto_derive_column_names,
                throw_on_mapping_failure,
            ),
            overrides: None,
            null_handler: None,
        }
    }

    /// Per-query column name overrides, raw column name to property name.
    /// Consulted before the cached mapping, never stored in it.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn with_null_handler(mut self, handler: Arc<dyn NullHandler<T>>) -> Self {
        self.null_handler = Some(handler);
        self
    }

    pub fn metadata(&self) -> &MappedMetadata<T> {
        &self.metadata
    }

    /// Map the current row of `row` into a new `T`.
    ///
    /// Every column whose name resolves to a writable property is fetched
    /// through the handler registered for the property's declared type and
    /// assigned. Unresolved columns are dropped silently unless the metadata
    /// was built with `throw_on_mapping_failure`.
    pub fn map_row(&self, row: &mut dyn RowSource) -> Result<T> {
        let mut instance = T::default();
        for index in 0..row.columns().len() {
            let column = row.columns()[index].clone();
            let Some(property) = self.metadata.resolve(&column, self.overrides.as_ref()) else {
                if self.metadata.throw_on_mapping_failure {
                    return Err(MappingFailure {
                        column,
                        target: any::type_name::<T>(),
                    }
                    .into());
                }
                log::debug!(
                    "Column `{}` resolves to no property of {}, skipping",
                    column,
                    any::type_name::<T>()
                );
                continue;
            };
            if !property.writable {
                continue;
            }
            let handler = TypeHandlerRegistry::global().lookup(&property.data_type);
            let value = handler.get_result(row, index)?;
            if value.is_null() && !property.nullable {
                // A non-nullable slot cannot represent NULL.
                if let Some(null_handler) = &self.null_handler {
                    null_handler.handle_null(property, &mut instance);
                }
                continue;
            }
            instance.set(property.name, value)?;
        }
        Ok(instance)
    }
}

/// One-shot convenience over [`RowMapper`]: map the current row of `row` into
/// a new `T` with the given resolution mode. The entry point the query and
/// pagination layers build on.
pub fn map_row<T: Mapped + 'static>(
    row: &mut dyn RowSource,
    case_sensitive: bool,
    auto_derive_column_names: bool,
    overrides: Option<HashMap<String, String>>,
    throw_on_mapping_failure: bool,
) -> Result<T> {
    let mut mapper = RowMapper::new(
        case_sensitive,
        auto_derive_column_names,
        throw_on_mapping_failure,
    );
    if let Some(overrides) = overrides {
        mapper = mapper.with_overrides(overrides);
    }
    mapper.map_row(row)
}
