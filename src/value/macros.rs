//! Literal constructors for containers.

/// Builds a [`Value::Sequence`](crate::Value::Sequence) from a list of
/// expressions, converting each element with [`Value::from`](crate::Value).
///
/// # Examples
///
/// ```rust
/// use underbar::{sequence, Value};
///
/// let nested = sequence![1, "two", sequence![3.0, true]];
/// assert_eq!(underbar::size(&nested), 3);
/// assert_eq!(sequence![], Value::from(Vec::new()));
/// ```
#[macro_export]
macro_rules! sequence {
    () => {
        $crate::Value::Sequence($crate::Sequence::new())
    };
    ($($element:expr),+ $(,)?) => {
        $crate::Value::Sequence($crate::Sequence::from(::std::vec![
            $($crate::Value::from($element)),+
        ]))
    };
}

/// Builds a [`Value::Association`](crate::Value::Association) from
/// `key => value` pairs, converting keys with [`Key::from`](crate::Key) and
/// values with [`Value::from`](crate::Value).
///
/// Pairs whose value is `Null` are dropped, like any other `Null` insertion.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, Key, Value};
///
/// let record = association! { "a" => 1, "b" => Value::Null };
/// assert_eq!(underbar::size(&record), 1);
/// assert_eq!(record.get(&Key::from("a")), Some(Value::from(1)));
/// ```
#[macro_export]
macro_rules! association {
    () => {
        $crate::Value::Association($crate::Association::new())
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let association = $crate::Association::new();
        $(
            association.insert($crate::Key::from($key), $crate::Value::from($value));
        )+
        $crate::Value::Association(association)
    }};
}
