//! crates/logging/src/macros.rs
//! Context construction macro.

/// Builds a [`Context`](crate::Context) from `key => value` pairs.
///
/// Keys convert with `Into<String>` and values with `Into<Value>`. Repeating
/// a key replaces the earlier value in place.
///
/// ```
/// use logging::{Value, context};
///
/// let context = context! { "user" => "ada", "attempts" => 3 };
/// assert_eq!(context.get("attempts"), Some(&Value::Int(3)));
/// assert!(context!().is_empty());
/// ```
#[macro_export]
macro_rules! context {
    () => {
        $crate::Context::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut context = $crate::Context::new();
        $(context.insert($key, $value);)+
        context
    }};
}
