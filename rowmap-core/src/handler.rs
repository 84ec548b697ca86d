use crate::{DataType, Result, RowSource, Value};
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, RwLock},
};

/// A bound statement accepting positional parameters. Supplied by the
/// database-client layer; parameter indexes are 1-based, matching the SQL
/// placeholder convention.
pub trait Statement {
    /// Bind a concrete value at `index`.
    fn bind(&mut self, index: usize, value: Value) -> Result<()>;
    /// Bind a typed SQL NULL at `index`.
    fn bind_null(&mut self, index: usize, data_type: DataType) -> Result<()>;
}

/// Bidirectional converter between a column's wire-level value and its
/// canonical in-memory [`Value`] variant.
///
/// NULL detection belongs here, not in the generic mapping path: `get_result`
/// turns SQL NULL into the typed empty variant, and `set_parameter` routes
/// absent values through `set_null_parameter` so the NULL-typing decision
/// stays with the handler.
pub trait TypeHandler: Send + Sync {
    /// The canonical type this handler produces and consumes.
    fn data_type(&self) -> DataType;

    /// Bind `value` at `index`, NULL-aware.
    fn set_parameter(
        &self,
        statement: &mut dyn Statement,
        index: usize,
        value: &Value,
    ) -> Result<()> {
        if value.is_null() {
            self.set_null_parameter(statement, index)
        } else {
            self.set_non_null_parameter(statement, index, value)
        }
    }

    fn set_null_parameter(&self, statement: &mut dyn Statement, index: usize) -> Result<()> {
        statement.bind_null(index, self.data_type())
    }

    fn set_non_null_parameter(
        &self,
        statement: &mut dyn Statement,
        index: usize,
        value: &Value,
    ) -> Result<()> {
        statement.bind(index, value.clone().try_cast(&self.data_type())?)
    }

    /// Read and convert the column at `index` from the current row. Must
    /// tolerate SQL NULL by returning the typed empty variant.
    fn get_result(&self, row: &mut dyn RowSource, index: usize) -> Result<Value> {
        let value = row.read_column(index, &self.data_type())?;
        if value.is_null() {
            return Ok(Value::empty(&self.data_type()));
        }
        value.try_cast(&self.data_type())
    }
}

macro_rules! type_handler {
    ($name:ident, $data_type:expr) => {
        pub struct $name;
        impl TypeHandler for $name {
            fn data_type(&self) -> DataType {
                $data_type
            }
        }
    };
}

type_handler!(BooleanTypeHandler, DataType::Boolean);
type_handler!(Int8TypeHandler, DataType::Int8);
type_handler!(Int16TypeHandler, DataType::Int16);
type_handler!(Int32TypeHandler, DataType::Int32);
type_handler!(Int64TypeHandler, DataType::Int64);
type_handler!(UInt8TypeHandler, DataType::UInt8);
type_handler!(UInt16TypeHandler, DataType::UInt16);
type_handler!(UInt32TypeHandler, DataType::UInt32);
type_handler!(UInt64TypeHandler, DataType::UInt64);
type_handler!(Float32TypeHandler, DataType::Float32);
type_handler!(Float64TypeHandler, DataType::Float64);
type_handler!(DecimalTypeHandler, DataType::Decimal);
type_handler!(VarcharTypeHandler, DataType::Varchar);
type_handler!(BlobTypeHandler, DataType::Blob);
type_handler!(DateTypeHandler, DataType::Date);
type_handler!(TimeTypeHandler, DataType::Time);
type_handler!(TimestampTypeHandler, DataType::Timestamp);
type_handler!(TimestampWithTimezoneTypeHandler, DataType::TimestampWithTimezone);
type_handler!(UuidTypeHandler, DataType::Uuid);

/// Pass-through fallback: no conversion in either direction, the value is
/// handed to the driver exactly as it came.
pub struct ObjectTypeHandler;

impl TypeHandler for ObjectTypeHandler {
    fn data_type(&self) -> DataType {
        DataType::Unknown
    }
    fn set_non_null_parameter(
        &self,
        statement: &mut dyn Statement,
        index: usize,
        value: &Value,
    ) -> Result<()> {
        statement.bind(index, value.clone())
    }
    fn get_result(&self, row: &mut dyn RowSource, index: usize) -> Result<Value> {
        row.read_column(index, &DataType::Unknown)
    }
}

/// Process-wide registry of [`TypeHandler`]s keyed by [`DataType`].
///
/// Append-only during normal operation and safe to read under concurrent
/// registration. Lookup is by exact type tag; anything unregistered falls back
/// to the pass-through [`ObjectTypeHandler`].
pub struct TypeHandlerRegistry {
    handlers: RwLock<HashMap<DataType, Arc<dyn TypeHandler>>>,
    fallback: Arc<dyn TypeHandler>,
}

static REGISTRY: LazyLock<TypeHandlerRegistry> = LazyLock::new(TypeHandlerRegistry::with_defaults);

impl TypeHandlerRegistry {
    /// The shared process-wide registry.
    pub fn global() -> &'static TypeHandlerRegistry {
        &REGISTRY
    }

    /// A registry preloaded with the built-in handlers.
    pub fn with_defaults() -> Self {
        let registry = Self::empty();
        registry.register(Arc::new(BooleanTypeHandler));
        registry.register(Arc::new(Int8TypeHandler));
        registry.register(Arc::new(Int16TypeHandler));
        registry.register(Arc::new(Int32TypeHandler));
        registry.register(Arc::new(Int64TypeHandler));
        registry.register(Arc::new(UInt8TypeHandler));
        registry.register(Arc::new(UInt16TypeHandler));
        registry.register(Arc::new(UInt32TypeHandler));
        registry.register(Arc::new(UInt64TypeHandler));
        registry.register(Arc::new(Float32TypeHandler));
        registry.register(Arc::new(Float64TypeHandler));
        registry.register(Arc::new(DecimalTypeHandler));
        registry.register(Arc::new(VarcharTypeHandler));
        registry.register(Arc::new(BlobTypeHandler));
        registry.register(Arc::new(DateTypeHandler));
        registry.register(Arc::new(TimeTypeHandler));
        registry.register(Arc::new(TimestampTypeHandler));
        registry.register(Arc::new(TimestampWithTimezoneTypeHandler));
        registry.register(Arc::new(UuidTypeHandler));
        registry
    }

    /// A registry with no handlers, everything resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            fallback: Arc::new(ObjectTypeHandler),
        }
    }

    /// Register a handler for its [`TypeHandler::data_type`], replacing any
    /// previous handler for the same tag.
    pub fn register(&self, handler: Arc<dyn TypeHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(handler.data_type(), handler);
    }

    /// Find the handler for a type tag, the pass-through fallback when none
    /// is registered.
    pub fn lookup(&self, data_type: &DataType) -> Arc<dyn TypeHandler> {
        self.handlers
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .get(data_type)
            .cloned()
            .unwrap_or_else(|| self.fallback.clone())
    }
}
