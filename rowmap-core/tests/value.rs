#[cfg(test)]
mod tests {
    use rowmap_core::{AsValue, DataType, Value};
    use rust_decimal::{prelude::FromPrimitive, Decimal};
    use time::{Date, Month, Time};
    use uuid::Uuid;

    #[test]
    fn value_null() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Null.is_null());
        assert!(Value::Int32(None).is_null());
        assert!(!Value::Int32(Some(0)).is_null());
        assert_eq!(Value::Null.data_type(), DataType::Unknown);
        assert_eq!(Value::empty(&DataType::Varchar), Value::Varchar(None));
    }

    #[test]
    fn value_bool() {
        let var = true;
        let val: Value = var.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        let var: bool = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, true);
        assert_eq!(bool::try_from_value((1 as i8).into()).unwrap(), true);
        assert_eq!(bool::try_from_value((0 as i64).into()).unwrap(), false);
        assert_eq!(bool::try_from_value((2 as u32).into()).unwrap(), true);
        assert!(bool::try_from_value((0.5 as f32).into()).is_err());
        assert!(bool::try_from_value(Value::Varchar(Some("true".into()))).is_err());
    }

    #[test]
    fn value_i8() {
        let var = 127 as i8;
        let val: Value = var.into();
        assert_eq!(val, Value::Int8(Some(127)));
        assert_ne!(val, Value::Int8(Some(126)));
        let var: i8 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 127);
        assert_eq!(i8::try_from_value((99 as u8).into()).unwrap(), 99);
        assert!(i8::try_from_value((128 as i16).into()).is_err());
        assert!(i8::try_from_value((0.1 as f64).into()).is_err());
    }

    #[test]
    fn value_i32() {
        let var = -2147483648 as i32;
        let val: Value = var.into();
        assert_eq!(val, Value::Int32(Some(-2147483648)));
        let var: i32 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, -2147483648);
        assert_eq!(i32::try_from_value((-31 as i8).into()).unwrap(), -31);
        assert_eq!(i32::try_from_value((70000 as i64).into()).unwrap(), 70000);
        assert!(i32::try_from_value(((i32::MAX as i64) + 1).into()).is_err());
    }

    #[test]
    fn value_u64() {
        let var = u64::MAX;
        let val: Value = var.into();
        assert_eq!(val, Value::UInt64(Some(u64::MAX)));
        let var: u64 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, u64::MAX);
        assert_eq!(u64::try_from_value((12 as i8).into()).unwrap(), 12);
        assert!(u64::try_from_value((-1 as i8).into()).is_err());
    }

    #[test]
    fn value_f64() {
        let var = 2.5 as f64;
        let val: Value = var.into();
        assert_eq!(val, Value::Float64(Some(2.5)));
        let var: f64 = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, 2.5);
        assert_eq!(f64::try_from_value((1.5 as f32).into()).unwrap(), 1.5);
        assert_eq!(f64::try_from_value((10 as i32).into()).unwrap(), 10.0);
        assert_eq!(
            f64::try_from_value(Decimal::from_f64(0.25).unwrap().into()).unwrap(),
            0.25
        );
        assert!(f64::try_from_value(Value::Varchar(Some("2.5".into()))).is_err());
    }

    #[test]
    fn value_decimal() {
        let var = Decimal::new(12345, 2);
        let val: Value = var.into();
        assert_eq!(val, Value::Decimal(Some(Decimal::new(12345, 2))));
        let var: Decimal = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, Decimal::new(12345, 2));
        assert_eq!(
            Decimal::try_from_value((7 as i64).into()).unwrap(),
            Decimal::from(7)
        );
        assert_eq!(
            Decimal::try_from_value((0.5 as f32).into()).unwrap(),
            Decimal::new(5, 1)
        );
        assert!(Decimal::try_from_value(Value::Boolean(Some(true))).is_err());
    }

    #[test]
    fn value_string() {
        let var = String::from("Hello world");
        let val: Value = var.into();
        assert_eq!(val, Value::Varchar(Some("Hello world".into())));
        let var: String = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, "Hello world");
        let val: Value = "borrowed".into();
        assert_eq!(val, Value::Varchar(Some("borrowed".into())));
        assert!(String::try_from_value(Value::Int32(Some(1))).is_err());
    }

    #[test]
    fn value_blob() {
        let var: Vec<u8> = vec![1, 2, 3];
        let val: Value = var.into();
        assert_eq!(val, Value::Blob(Some(Box::new([1, 2, 3]))));
        let var: Vec<u8> = AsValue::try_from_value(val).unwrap();
        assert_eq!(var, [1, 2, 3]);
        let val: Value = (&[9u8, 8][..]).into();
        assert_eq!(val, Value::Blob(Some(Box::new([9, 8]))));
    }

    #[test]
    fn value_date_and_time() {
        let date = Date::from_calendar_date(2024, Month::May, 17).unwrap();
        let val: Value = date.into();
        assert_eq!(val, Value::Date(Some(date)));
        let back: Date = AsValue::try_from_value(val).unwrap();
        assert_eq!(back, date);
        let time = Time::from_hms(13, 30, 0).unwrap();
        let val: Value = time.into();
        assert_eq!(val, Value::Time(Some(time)));
        assert!(Date::try_from_value(Value::Time(Some(time))).is_err());
    }

    #[test]
    fn value_uuid() {
        let id = Uuid::from_u128(0x1234_5678_9abc_def0_1234_5678_9abc_def0);
        let val: Value = id.into();
        assert_eq!(val, Value::Uuid(Some(id)));
        let back: Uuid = AsValue::try_from_value(val).unwrap();
        assert_eq!(back, id);
        let parsed =
            Uuid::try_from_value(Value::Varchar(Some(id.hyphenated().to_string()))).unwrap();
        assert_eq!(parsed, id);
        assert!(Uuid::try_from_value(Value::Varchar(Some("not a uuid".into()))).is_err());
    }

    #[test]
    fn value_option() {
        let var: Option<i32> = Some(5);
        let val: Value = var.into();
        assert_eq!(val, Value::Int32(Some(5)));
        let var: Option<i32> = None;
        let val: Value = var.into();
        assert_eq!(val, Value::Int32(None));
        let back: Option<i32> = AsValue::try_from_value(Value::Int32(None)).unwrap();
        assert_eq!(back, None);
        let back: Option<i32> = AsValue::try_from_value(Value::Null).unwrap();
        assert_eq!(back, None);
        let back: Option<i32> = AsValue::try_from_value(Value::Int32(Some(9))).unwrap();
        assert_eq!(back, Some(9));
        assert!(i32::try_from_value(Value::Int32(None)).is_err());
    }

    #[test]
    fn value_try_cast() {
        let cast = Value::Int64(Some(42)).try_cast(&DataType::Int16).unwrap();
        assert_eq!(cast, Value::Int16(Some(42)));
        assert!(Value::Int64(Some(40000))
            .try_cast(&DataType::Int16)
            .is_err());
        // NULL converts into the typed NULL of the target.
        let cast = Value::Null.try_cast(&DataType::Uuid).unwrap();
        assert_eq!(cast, Value::Uuid(None));
        let cast = Value::Varchar(None).try_cast(&DataType::Int32).unwrap();
        assert_eq!(cast, Value::Int32(None));
        // Unknown passes through untouched.
        let cast = Value::Varchar(Some("x".into()))
            .try_cast(&DataType::Unknown)
            .unwrap();
        assert_eq!(cast, Value::Varchar(Some("x".into())));
    }
}
