use crate::{underscore_to_camel_case, Mapped, PropertyDef};
use std::{
    any::TypeId,
    borrow::Cow,
    collections::HashMap,
    marker::PhantomData,
    sync::{Arc, LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

/// Normalized effective column name to index into `T::properties()`.
type Mapping = Arc<HashMap<String, usize>>;
type Cache = RwLock<HashMap<TypeId, Mapping>>;

// Two fixed partitions: the same type can be mapped case sensitively in one
// call site and insensitively in another, the variants must not collide.
static CASE_SENSITIVE: LazyLock<Cache> = LazyLock::new(Default::default);
static CASE_INSENSITIVE: LazyLock<Cache> = LazyLock::new(Default::default);

fn read(cache: &Cache) -> RwLockReadGuard<'_, HashMap<TypeId, Mapping>> {
    cache.read().unwrap_or_else(|e| e.into_inner())
}

fn write(cache: &Cache) -> RwLockWriteGuard<'_, HashMap<TypeId, Mapping>> {
    cache.write().unwrap_or_else(|e| e.into_inner())
}

fn mapping_for<T: Mapped + 'static>(case_sensitive: bool) -> Mapping {
    let cache = if case_sensitive {
        &CASE_SENSITIVE
    } else {
        &CASE_INSENSITIVE
    };
    let key = TypeId::of::<T>();
    if let Some(found) = read(cache).get(&key) {
        return found.clone();
    }
    // Computed outside the lock. The mapping is a pure function of the type,
    // losing the race only wastes the redundant computation.
    let mut computed = HashMap::with_capacity(T::properties().len());
    for (index, property) in T::properties().iter().enumerate() {
        let column = property.effective_column();
        let column = if case_sensitive {
            column.to_owned()
        } else {
            column.to_lowercase()
        };
        // Normalization collisions keep the later declared property.
        computed.insert(column, index);
    }
    let computed: Mapping = Arc::new(computed);
    write(cache).entry(key).or_insert(computed).clone()
}

/// Column-to-property resolution for a [`Mapped`] type.
///
/// The resolution mode (case sensitivity, auto-derivation, strictness) is
/// fixed at construction. The column mapping itself is computed once per
/// (type, case sensitivity) pair and memoized process-wide, so constructing
/// this wrapper is cheap after the first use of a type.
#[derive(Debug)]
pub struct MappedMetadata<T: Mapped + 'static> {
    /// Whether column names match properties by exact case.
    pub case_sensitive: bool,
    /// Enable the underscore to camelCase fallback for unresolved columns.
    pub auto_derive_column_names: bool,
    /// Raise a mapping error for columns no property resolves from, instead
    /// of silently dropping them.
    pub throw_on_mapping_failure: bool,
    mapping: Mapping,
    marker: PhantomData<fn() -> T>,
}

impl<T: Mapped + 'static> MappedMetadata<T> {
    pub fn new(
        case_sensitive: bool,
        auto_derive_column_names: bool,
        throw_on_mapping_failure: bool,
    ) -> Self {
        Self {
            case_sensitive,
            auto_derive_column_names,
            throw_on_mapping_failure,
            mapping: mapping_for::<T>(case_sensitive),
            marker: PhantomData,
        }
    }

    fn normalized<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        }
    }

    /// Look a property up by its effective column name, normalized per the
    /// case-sensitivity mode.
    pub fn property(&self, name: &str) -> Option<&'static PropertyDef> {
        self.mapping
            .get(self.normalized(name).as_ref())
            .map(|index| &T::properties()[*index])
    }

    /// Resolve a result-set column to a property descriptor.
    ///
    /// Order, each step short-circuiting on success:
    /// 1. caller-supplied overrides (raw column name to property name), an
    ///    override naming an unknown property falls through rather than fail;
    /// 2. direct lookup of the column name;
    /// 3. underscore to camelCase derivation, when enabled.
    pub fn resolve(
        &self,
        column: &str,
        overrides: Option<&HashMap<String, String>>,
    ) -> Option<&'static PropertyDef> {
        if let Some(overrides) = overrides {
            if let Some(property_name) = overrides.get(self.normalized(column).as_ref()) {
                if let Some(found) = self.property(property_name) {
                    return Some(found);
                }
            }
        }
        if let Some(found) = self.property(column) {
            return Some(found);
        }
        if self.auto_derive_column_names {
            return self.property(&underscore_to_camel_case(column));
        }
        None
    }
}

impl<T: Mapped + 'static> Clone for MappedMetadata<T> {
    fn clone(&self) -> Self {
        Self {
            case_sensitive: self.case_sensitive,
            auto_derive_column_names: self.auto_derive_column_names,
            throw_on_mapping_failure: self.throw_on_mapping_failure,
            mapping: self.mapping.clone(),
            marker: PhantomData,
        }
    }
}

impl<T: Mapped + 'static> PartialEq for MappedMetadata<T> {
    fn eq(&self, other: &Self) -> bool {
        self.case_sensitive == other.case_sensitive
            && self.auto_derive_column_names == other.auto_derive_column_names
            && self.throw_on_mapping_failure == other.throw_on_mapping_failure
    }
}

impl<T: Mapped + 'static> Eq for MappedMetadata<T> {}
