/// Transform an underscore separated column name into camelCase, the
/// auto-derivation fallback of column resolution. The input is lower-cased so
/// `CREATED_AT` and `created_at` both derive `createdAt`.
pub fn underscore_to_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut upper_next = false;
    for c in name.chars() {
        if c == '_' {
            upper_next = true;
            continue;
        }
        if upper_next {
            result.extend(c.to_uppercase());
            upper_next = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }
    result
}
