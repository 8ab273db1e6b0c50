//! The `partial!` and `partial_last!` macros.

/// Fixes a leading prefix of a function's arguments.
///
/// The fixed values come first; `__` (double underscore) placeholder tokens
/// mark the trailing arguments that remain parameters of the returned
/// closure. With no placeholders the result is a zero-argument thunk.
///
/// **Important**: `__` is matched as a literal token; do not import anything
/// named `__`.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`] (the partial function may be
///   called multiple times)
/// - The original function must implement [`Fn`]
///
/// # Supported Argument Counts
///
/// Functions with 2 to 4 arguments.
///
/// # Examples
///
/// ```rust
/// use funtab::partial;
///
/// fn add(first: i32, second: i32) -> i32 { first + second }
///
/// let add_five = partial!(add, 5, __);
/// assert_eq!(add_five(3), 8);
/// assert_eq!(add_five(10), 15);
///
/// let thunk = partial!(add, 3, 5);
/// assert_eq!(thunk(), 8);
/// ```
///
/// ## Three-argument function, two slots open
///
/// ```rust
/// use funtab::partial;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let at_least_zero = partial!(clamp, 0, __, __);
/// assert_eq!(at_least_zero(10, -3), 0);
/// assert_eq!(at_least_zero(10, 7), 7);
/// ```
#[macro_export]
macro_rules! partial {
    // ---- 4-argument functions, most placeholders first ----
    ($function:expr, $arg1:expr, __, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3, arg4| function(arg1.clone(), arg2, arg3, arg4)
    }};
    ($function:expr, $arg1:expr, $arg2:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3, arg4| function(arg1.clone(), arg2.clone(), arg3, arg4)
    }};
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg4| function(arg1.clone(), arg2.clone(), arg3.clone(), arg4)
    }};
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move || function(arg1.clone(), arg2.clone(), arg3.clone(), arg4.clone())
    }};

    // ---- 3-argument functions ----
    ($function:expr, $arg1:expr, __, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2, arg3| function(arg1.clone(), arg2, arg3)
    }};
    ($function:expr, $arg1:expr, $arg2:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move |arg3| function(arg1.clone(), arg2.clone(), arg3)
    }};
    ($function:expr, $arg1:expr, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move || function(arg1.clone(), arg2.clone(), arg3.clone())
    }};

    // ---- 2-argument functions (fewest tokens last) ----
    ($function:expr, $arg1:expr, __ $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        move |arg2| function(arg1.clone(), arg2)
    }};
    ($function:expr, $arg1:expr, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg1 = $arg1;
        let arg2 = $arg2;
        move || function(arg1.clone(), arg2.clone())
    }};
}

/// Fixes a trailing suffix of a function's arguments.
///
/// The mirror image of [`partial!`](crate::partial): `__` placeholder tokens
/// mark the leading arguments that remain parameters of the returned
/// closure; the fixed values are appended after them on every call.
///
/// **Important**: `__` is matched as a literal token; do not import anything
/// named `__`.
///
/// # Type Requirements
///
/// - Fixed values must implement [`Clone`]
/// - The original function must implement [`Fn`]
///
/// # Supported Argument Counts
///
/// Functions with 2 to 4 arguments.
///
/// # Examples
///
/// ```rust
/// use funtab::partial_last;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let halve = partial_last!(divide, __, 2.0);
/// assert_eq!(halve(10.0), 5.0);
/// ```
///
/// ## Fixing the last two of four arguments
///
/// ```rust
/// use funtab::partial_last;
///
/// fn format_entry(key: &str, value: i32, separator: &str, terminator: &str) -> String {
///     format!("{key}{separator}{value}{terminator}")
/// }
///
/// let plain = partial_last!(format_entry, __, __, "=", ";");
/// assert_eq!(plain("count", 3), "count=3;");
/// ```
#[macro_export]
macro_rules! partial_last {
    // ---- 4-argument functions, most placeholders first ----
    ($function:expr, __, __, __, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg4 = $arg4;
        move |arg1, arg2, arg3| function(arg1, arg2, arg3, arg4.clone())
    }};
    ($function:expr, __, __, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1, arg2| function(arg1, arg2, arg3.clone(), arg4.clone())
    }};
    ($function:expr, __, $arg2:expr, $arg3:expr, $arg4:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        let arg4 = $arg4;
        move |arg1| function(arg1, arg2.clone(), arg3.clone(), arg4.clone())
    }};

    // ---- 3-argument functions ----
    ($function:expr, __, __, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg3 = $arg3;
        move |arg1, arg2| function(arg1, arg2, arg3.clone())
    }};
    ($function:expr, __, $arg2:expr, $arg3:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        let arg3 = $arg3;
        move |arg1| function(arg1, arg2.clone(), arg3.clone())
    }};

    // ---- 2-argument functions ----
    ($function:expr, __, $arg2:expr $(,)?) => {{
        let function = $function;
        let arg2 = $arg2;
        move |arg1| function(arg1, arg2.clone())
    }};
}
