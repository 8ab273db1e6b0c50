//! The key of a single table entry.

/// Identifies one entry of a [`Table`](crate::table::Table): either a
/// position in the array segment or a key in the keyed segment.
///
/// Positions are 1-based, matching the table's positional addressing.
///
/// # Examples
///
/// ```rust
/// use funtab::table::TableKey;
///
/// let positional: TableKey<&str> = TableKey::Position(1);
/// let named: TableKey<&str> = TableKey::Named("total");
///
/// assert!(positional.is_position());
/// assert_eq!(positional.as_position(), Some(1));
/// assert_eq!(named.as_named(), Some(&"total"));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TableKey<K> {
    /// A 1-based position in the array segment.
    Position(usize),
    /// A key in the keyed segment.
    Named(K),
}

impl<K> TableKey<K> {
    /// Returns `true` if this key addresses the array segment.
    #[inline]
    #[must_use]
    pub const fn is_position(&self) -> bool {
        matches!(self, Self::Position(_))
    }

    /// Returns `true` if this key addresses the keyed segment.
    #[inline]
    #[must_use]
    pub const fn is_named(&self) -> bool {
        matches!(self, Self::Named(_))
    }

    /// Returns the 1-based position, if this key is positional.
    #[inline]
    #[must_use]
    pub const fn as_position(&self) -> Option<usize> {
        match self {
            Self::Position(position) => Some(*position),
            Self::Named(_) => None,
        }
    }

    /// Returns a reference to the name, if this key is named.
    #[inline]
    #[must_use]
    pub const fn as_named(&self) -> Option<&K> {
        match self {
            Self::Position(_) => None,
            Self::Named(name) => Some(name),
        }
    }

    /// Converts into the name, if this key is named.
    #[inline]
    #[must_use]
    pub fn into_named(self) -> Option<K> {
        match self {
            Self::Position(_) => None,
            Self::Named(name) => Some(name),
        }
    }
}

impl<'a, K: Clone> TableKey<&'a K> {
    /// Maps a `TableKey<&K>` to a `TableKey<K>` by cloning the name.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use funtab::table::TableKey;
    ///
    /// let name = String::from("total");
    /// let borrowed: TableKey<&String> = TableKey::Named(&name);
    /// let owned: TableKey<String> = borrowed.cloned();
    /// assert_eq!(owned, TableKey::Named(String::from("total")));
    /// ```
    #[inline]
    #[must_use]
    pub fn cloned(self) -> TableKey<K> {
        match self {
            Self::Position(position) => TableKey::Position(position),
            Self::Named(name) => TableKey::Named(name.clone()),
        }
    }
}
