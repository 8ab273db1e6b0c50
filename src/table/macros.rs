//! The `table!` construction macro.

/// Builds a [`Table`](crate::table::Table) from a literal entry list.
///
/// # Syntax
///
/// - `table![]`: an empty table
/// - `table![a, b, c]`: array segment only, positions 1..=3
/// - `table! { k1 => v1, k2 => v2 }`: keyed segment only
/// - `table![a, b; k => v]`: both segments
///
/// # Examples
///
/// ```rust
/// use funtab::table;
/// use funtab::table::Table;
///
/// let values: Table<String, i32> = table![1, 2, 3];
/// assert_eq!(values.array(), &[1, 2, 3]);
///
/// let named = table! { "one" => 1, "two" => 2 };
/// assert_eq!(named.get_named("two"), Some(&2));
///
/// let mixed = table![10, 20; "total" => 30];
/// assert_eq!(mixed.len(), 2);
/// assert_eq!(mixed.get_named("total"), Some(&30));
/// ```
#[macro_export]
macro_rules! table {
    () => {
        $crate::table::Table::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::table::Table::new();
        $(table.insert_named($key, $value);)+
        table
    }};
    ($($value:expr),+ $(,)?) => {{
        let mut table = $crate::table::Table::new();
        $(table.push($value);)+
        table
    }};
    ($($value:expr),+ ; $($key:expr => $named:expr),+ $(,)?) => {{
        let mut table = $crate::table::Table::new();
        $(table.push($value);)+
        $(table.insert_named($key, $named);)+
        table
    }};
}
