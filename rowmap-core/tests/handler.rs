#[cfg(test)]
mod tests {
    use rowmap_core::{
        DataType, ObjectTypeHandler, Result, Row, RowSource, Statement, TypeHandler,
        TypeHandlerRegistry, Value, VecRowSource,
    };
    use std::sync::Arc;

    /// Statement double recording every bind in call order.
    #[derive(Debug, Default)]
    struct MockStatement {
        binds: Vec<(usize, Value)>,
        nulls: Vec<(usize, DataType)>,
    }

    impl Statement for MockStatement {
        fn bind(&mut self, index: usize, value: Value) -> Result<()> {
            self.binds.push((index, value));
            Ok(())
        }
        fn bind_null(&mut self, index: usize, data_type: DataType) -> Result<()> {
            self.nulls.push((index, data_type));
            Ok(())
        }
    }

    fn one_row_source(value: Value) -> VecRowSource {
        let row: Row = Box::new([value]);
        let mut source = VecRowSource::new(["c"], vec![row]);
        assert!(source.advance().unwrap());
        source
    }

    #[test]
    fn get_result_converts_to_the_handler_type() {
        let handler = TypeHandlerRegistry::global().lookup(&DataType::Int32);
        let mut source = one_row_source(Value::Int64(Some(42)));
        let value = handler.get_result(&mut source, 0).unwrap();
        assert_eq!(value, Value::Int32(Some(42)));
    }

    #[test]
    fn get_result_turns_null_into_the_typed_empty() {
        let handler = TypeHandlerRegistry::global().lookup(&DataType::Varchar);
        let mut source = one_row_source(Value::Null);
        let value = handler.get_result(&mut source, 0).unwrap();
        assert_eq!(value, Value::Varchar(None));
        assert!(value.is_null());
    }

    #[test]
    fn get_result_rejects_out_of_range_narrowing() {
        let handler = TypeHandlerRegistry::global().lookup(&DataType::Int8);
        let mut source = one_row_source(Value::Int64(Some(1000)));
        assert!(handler.get_result(&mut source, 0).is_err());
    }

    #[test]
    fn set_parameter_splits_on_null() {
        let handler = TypeHandlerRegistry::global().lookup(&DataType::Int64);
        let mut statement = MockStatement::default();
        handler
            .set_parameter(&mut statement, 1, &Value::Int64(Some(5)))
            .unwrap();
        handler
            .set_parameter(&mut statement, 2, &Value::Int64(None))
            .unwrap();
        assert_eq!(statement.binds, [(1, Value::Int64(Some(5)))]);
        assert_eq!(statement.nulls, [(2, DataType::Int64)]);
    }

    #[test]
    fn set_parameter_casts_before_binding() {
        let handler = TypeHandlerRegistry::global().lookup(&DataType::Int64);
        let mut statement = MockStatement::default();
        handler
            .set_parameter(&mut statement, 1, &Value::Int32(Some(7)))
            .unwrap();
        assert_eq!(statement.binds, [(1, Value::Int64(Some(7)))]);
    }

    #[test]
    fn unknown_tags_fall_back_to_pass_through() {
        let handler = TypeHandlerRegistry::global().lookup(&DataType::Unknown);
        assert_eq!(handler.data_type(), DataType::Unknown);
        let mut statement = MockStatement::default();
        handler
            .set_parameter(&mut statement, 1, &Value::Int16(Some(3)))
            .unwrap();
        // No conversion: the value reaches the statement as it came.
        assert_eq!(statement.binds, [(1, Value::Int16(Some(3)))]);
    }

    #[test]
    fn empty_registry_resolves_everything_to_the_fallback() {
        let registry = TypeHandlerRegistry::empty();
        let handler = registry.lookup(&DataType::Int32);
        let mut source = one_row_source(Value::Int64(Some(42)));
        // Pass-through: the stored variant survives untouched.
        let value = handler.get_result(&mut source, 0).unwrap();
        assert_eq!(value, Value::Int64(Some(42)));
    }

    #[test]
    fn registration_replaces_the_previous_handler() {
        struct UppercaseVarcharHandler;
        impl TypeHandler for UppercaseVarcharHandler {
            fn data_type(&self) -> DataType {
                DataType::Varchar
            }
            fn get_result(&self, row: &mut dyn RowSource, index: usize) -> Result<Value> {
                let value = row.read_column(index, &DataType::Varchar)?;
                match value.try_cast(&DataType::Varchar)? {
                    Value::Varchar(Some(v)) => Ok(Value::Varchar(Some(v.to_uppercase()))),
                    other => Ok(other),
                }
            }
        }

        let registry = TypeHandlerRegistry::with_defaults();
        registry.register(Arc::new(UppercaseVarcharHandler));
        let handler = registry.lookup(&DataType::Varchar);
        let mut source = one_row_source(Value::Varchar(Some("abc".into())));
        let value = handler.get_result(&mut source, 0).unwrap();
        assert_eq!(value, Value::Varchar(Some("ABC".into())));
    }

    #[test]
    fn object_handler_keeps_null_binding_typed() {
        let mut statement = MockStatement::default();
        ObjectTypeHandler
            .set_parameter(&mut statement, 1, &Value::Null)
            .unwrap();
        assert_eq!(statement.nulls, [(1, DataType::Unknown)]);
    }
}
