//! The `Table` container type.

use std::borrow::Borrow;
use std::hash::Hash;

use super::iter::{Entries, IntoEntries, NamedEntries};

/// Hasher for the keyed segment, selected at compile time by feature flag.
#[cfg(feature = "fxhash")]
pub(crate) type KeyedHasher = rustc_hash::FxBuildHasher;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type KeyedHasher = ahash::RandomState;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type KeyedHasher = std::collections::hash_map::RandomState;

pub(crate) type KeyedMap<K, V> = std::collections::HashMap<K, V, KeyedHasher>;

/// A hybrid ordered/keyed container.
///
/// A `Table` combines two segments:
///
/// - the **array segment**: a contiguous, order-significant sequence of
///   values addressed by 1-based positions (position `i` holds the `i`-th
///   element; there are no gaps);
/// - the **keyed segment**: arbitrary key-to-value entries whose iteration
///   order is unspecified.
///
/// The table's *length* is the element count of the array segment alone;
/// [`is_empty`](Table::is_empty) considers both segments.
///
/// The operations in [`ops`](crate::ops) treat tables as immutable values:
/// they borrow their inputs and build fresh results. The mutating methods
/// here (`push`, `insert_named`, `Extend`) exist to construct inputs.
///
/// # Examples
///
/// ```rust
/// use funtab::table::Table;
///
/// let mut table: Table<&str, i32> = Table::from_values([10, 20, 30]);
/// table.insert_named("answer", 42);
///
/// assert_eq!(table.len(), 3);
/// assert_eq!(table.keyed_len(), 1);
/// assert_eq!(table.get(2), Some(&20));
/// assert_eq!(table.get_named("answer"), Some(&42));
/// ```
#[derive(Clone, Debug)]
pub struct Table<K, V> {
    /// The array segment; position `i` lives at vector index `i - 1`.
    pub(crate) array: Vec<V>,
    /// The keyed segment.
    pub(crate) keyed: KeyedMap<K, V>,
}

impl<K, V> Table<K, V> {
    /// Creates a new empty table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let table: Table<String, i32> = Table::new();
    /// assert!(table.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            array: Vec::new(),
            keyed: KeyedMap::default(),
        }
    }

    /// Creates a table whose array segment holds the given values in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let table: Table<String, i32> = Table::from_values([1, 2, 3]);
    /// assert_eq!(table.len(), 3);
    /// assert_eq!(table.get(1), Some(&1));
    /// ```
    #[must_use]
    pub fn from_values(values: impl IntoIterator<Item = V>) -> Self {
        Self {
            array: values.into_iter().collect(),
            keyed: KeyedMap::default(),
        }
    }

    /// Returns the length of the array segment.
    ///
    /// Keyed entries do not contribute; see [`keyed_len`](Table::keyed_len)
    /// and [`entry_count`](Table::entry_count).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.array.len()
    }

    /// Returns the number of entries in the keyed segment.
    #[inline]
    #[must_use]
    pub fn keyed_len(&self) -> usize {
        self.keyed.len()
    }

    /// Returns the total number of entries across both segments.
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.array.len() + self.keyed.len()
    }

    /// Returns `true` if the table has no entries in either segment.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let mut table: Table<&str, i32> = Table::new();
    /// assert!(table.is_empty());
    ///
    /// table.insert_named("answer", 42);
    /// assert!(!table.is_empty());
    /// assert_eq!(table.len(), 0); // the array segment is still empty
    /// ```
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.array.is_empty() && self.keyed.is_empty()
    }

    /// Returns the value at the given 1-based position in the array segment.
    ///
    /// Position 0 and positions past the array length return `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let table: Table<String, i32> = Table::from_values([10, 20, 30]);
    /// assert_eq!(table.get(1), Some(&10));
    /// assert_eq!(table.get(3), Some(&30));
    /// assert_eq!(table.get(0), None);
    /// assert_eq!(table.get(4), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&V> {
        position
            .checked_sub(1)
            .and_then(|index| self.array.get(index))
    }

    /// Returns the first element of the array segment.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&V> {
        self.array.first()
    }

    /// Returns the last element of the array segment.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&V> {
        self.array.last()
    }

    /// Borrows the array segment as a slice.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let table: Table<String, i32> = Table::from_values([1, 2, 3]);
    /// assert_eq!(table.array(), &[1, 2, 3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn array(&self) -> &[V] {
        &self.array
    }

    /// Appends a value to the array segment, at position `len() + 1`.
    #[inline]
    pub fn push(&mut self, value: V) {
        self.array.push(value);
    }

    /// Iterates over the array segment's values in positional order.
    pub fn values(&self) -> std::slice::Iter<'_, V> {
        self.array.iter()
    }

    /// Iterates over every entry of the table as `(key, value)` pairs.
    ///
    /// Array entries come first, in positional order, as
    /// [`TableKey::Position`](crate::table::TableKey::Position); keyed entries
    /// follow in unspecified order.
    #[must_use]
    pub fn entries(&self) -> Entries<'_, K, V> {
        Entries::new(&self.array, &self.keyed)
    }

    /// Iterates over the keyed segment's entries, in unspecified order.
    #[must_use]
    pub fn named_entries(&self) -> NamedEntries<'_, K, V> {
        NamedEntries::new(&self.keyed)
    }

    /// Consumes the table, iterating over every entry as owned
    /// `(key, value)` pairs, array entries first.
    #[must_use]
    pub fn into_entries(self) -> IntoEntries<K, V> {
        self.into_iter()
    }
}

impl<K: Eq + Hash, V> Table<K, V> {
    /// Creates a table whose keyed segment holds the given entries.
    ///
    /// Duplicate keys keep the last value, as with `HashMap` insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let table = Table::from_entries([("one", 1), ("two", 2)]);
    /// assert_eq!(table.get_named("two"), Some(&2));
    /// assert_eq!(table.len(), 0);
    /// ```
    #[must_use]
    pub fn from_entries(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Self {
            array: Vec::new(),
            keyed: entries.into_iter().collect(),
        }
    }

    /// Inserts an entry into the keyed segment, returning the value the key
    /// previously held, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let mut table: Table<&str, i32> = Table::new();
    /// assert_eq!(table.insert_named("answer", 41), None);
    /// assert_eq!(table.insert_named("answer", 42), Some(41));
    /// ```
    #[inline]
    pub fn insert_named(&mut self, key: K, value: V) -> Option<V> {
        self.keyed.insert(key, value)
    }

    /// Returns the value for the given key in the keyed segment.
    ///
    /// The key may be any borrowed form of the table's key type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::Table;
    ///
    /// let table = Table::from_entries([(String::from("one"), 1)]);
    /// assert_eq!(table.get_named("one"), Some(&1));
    /// assert_eq!(table.get_named("two"), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn get_named<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.keyed.get(key)
    }

    /// Returns `true` if the keyed segment contains the given key.
    #[inline]
    #[must_use]
    pub fn contains_named<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.keyed.contains_key(key)
    }
}

impl<K, V> Default for Table<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V: PartialEq> PartialEq for Table<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.array == other.array && self.keyed == other.keyed
    }
}

impl<K: Eq + Hash, V: Eq> Eq for Table<K, V> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
const TABLE_FIELDS: &[&str] = &["array", "keyed"];

#[cfg(feature = "serde")]
impl<K, V> serde::Serialize for Table<K, V>
where
    K: serde::Serialize + Eq + Hash,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Table", 2)?;
        state.serialize_field("array", &self.array)?;
        state.serialize_field("keyed", &self.keyed)?;
        state.end()
    }
}

#[cfg(feature = "serde")]
struct TableVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> TableVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for TableVisitor<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    type Value = Table<K, V>;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a table with array and keyed segments")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let array: Vec<V> = access
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(0, &self))?;
        let keyed: KeyedMap<K, V> = access
            .next_element()?
            .ok_or_else(|| serde::de::Error::invalid_length(1, &self))?;
        Ok(Table { array, keyed })
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut array: Option<Vec<V>> = None;
        let mut keyed: Option<KeyedMap<K, V>> = None;
        while let Some(field) = access.next_key::<String>()? {
            match field.as_str() {
                "array" => array = Some(access.next_value()?),
                "keyed" => keyed = Some(access.next_value()?),
                other => {
                    return Err(serde::de::Error::unknown_field(other, TABLE_FIELDS));
                }
            }
        }
        Ok(Table {
            array: array.unwrap_or_default(),
            keyed: keyed.unwrap_or_default(),
        })
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for Table<K, V>
where
    K: serde::Deserialize<'de> + Eq + Hash,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_struct("Table", TABLE_FIELDS, TableVisitor::new())
    }
}

static_assertions::assert_impl_all!(Table<String, i32>: Clone, Default, Send, Sync);
