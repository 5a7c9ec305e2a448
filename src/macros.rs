/// Builds a row of [`RawValue`](crate::RawValue) cells.
///
/// Every element is converted with `RawValue::from`; the bare word `null`
/// stands for a null cell.
///
/// # Examples
///
/// ```rust
/// use js_tablewriter::{row, RawValue};
///
/// let cells = row![1, "two", 3.5, true, null];
/// assert_eq!(cells.len(), 5);
/// assert_eq!(cells[4], RawValue::Null);
///
/// let empty = row![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! row {
    () => {
        ::std::vec::Vec::<$crate::RawValue>::new()
    };

    ($($tt:tt)+) => {{
        let mut row: ::std::vec::Vec<$crate::RawValue> = ::std::vec::Vec::new();
        $crate::__row_push!(row; $($tt)+);
        row
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __row_push {
    ($row:ident;) => {};

    ($row:ident; null $(, $($rest:tt)*)?) => {
        $row.push($crate::RawValue::Null);
        $( $crate::__row_push!($row; $($rest)*); )?
    };

    ($row:ident; $elem:expr $(, $($rest:tt)*)?) => {
        $row.push($crate::RawValue::from($elem));
        $( $crate::__row_push!($row; $($rest)*); )?
    };
}
