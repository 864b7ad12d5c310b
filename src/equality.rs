// ============================================================================
// mixed-collection - Equality
// Loose and strict value comparison for `contains`
// ============================================================================

// =============================================================================
// COMPARISON MODE
// =============================================================================

/// How [`Collection::contains_with`](crate::Collection::contains_with) compares values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Comparison {
    /// [`LooseEq`]: values that mean the same thing match even if their
    /// representation differs.
    #[default]
    Loose,
    /// [`PartialEq`]: type- and representation-exact.
    Strict,
}

// =============================================================================
// LOOSE EQUALITY
// =============================================================================

/// Loose equality.
///
/// For plain Rust types this is the same as `PartialEq`, floats included: NaN
/// equals nothing, itself neither. Dynamic values (`serde_json::Value`) get
/// real coercion: `1`, `1.0` and `"1"` are loosely equal.
///
/// # Example
/// ```
/// use mixed_collection::LooseEq;
///
/// assert!("bar".loose_eq("bar"));
/// assert!(String::from("bar").loose_eq("bar"));
/// assert!(!f64::NAN.loose_eq(&f64::NAN));
/// assert!(!1.0f64.loose_eq(&2.0));
/// ```
pub trait LooseEq<Rhs: ?Sized = Self> {
    fn loose_eq(&self, other: &Rhs) -> bool;
}

/// Implements [`LooseEq`] for types whose loose equality is just `PartialEq`.
///
/// ```
/// use mixed_collection::{impl_loose_eq, Collection};
///
/// #[derive(Clone, PartialEq)]
/// struct Point(i32, i32);
/// impl_loose_eq!(Point);
///
/// let points = Collection::from(vec![Point(0, 0), Point(1, 2)]);
/// assert!(points.contains(&Point(1, 2)));
/// ```
#[macro_export]
macro_rules! impl_loose_eq {
    ($($t:ty),+ $(,)?) => {
        $(
            impl $crate::LooseEq for $t {
                fn loose_eq(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )+
    };
}

impl_loose_eq!(
    bool, char, f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, ()
);

impl LooseEq for str {
    fn loose_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl LooseEq for String {
    fn loose_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl LooseEq<str> for String {
    fn loose_eq(&self, other: &str) -> bool {
        self == other
    }
}

impl LooseEq<String> for str {
    fn loose_eq(&self, other: &String) -> bool {
        self == other
    }
}

impl LooseEq<&str> for String {
    fn loose_eq(&self, other: &&str) -> bool {
        self == other
    }
}

impl<T: LooseEq + ?Sized> LooseEq for &T {
    fn loose_eq(&self, other: &Self) -> bool {
        (**self).loose_eq(*other)
    }
}

impl<T: LooseEq> LooseEq for Option<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (None, None) => true,
            (Some(a), Some(b)) => a.loose_eq(b),
            _ => false,
        }
    }
}

impl<T: LooseEq> LooseEq for Vec<T> {
    fn loose_eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().zip(other).all(|(a, b)| a.loose_eq(b))
    }
}

// =============================================================================
// JSON VALUES
// =============================================================================

#[cfg(feature = "serde")]
mod json {
    use serde_json::{Number, Value};

    use super::LooseEq;
    use crate::core::key::canonical_index;

    /// Truthiness of a dynamic value.
    fn truthy(value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
            Value::String(s) => !(s.is_empty() || s == "0"),
            Value::Array(items) => !items.is_empty(),
            Value::Object(map) => !map.is_empty(),
        }
    }

    /// Numeric reading of a string: integers and decimal/exponent forms,
    /// surrounding whitespace allowed.
    fn numeric_str(s: &str) -> Option<f64> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Some(index) = canonical_index(trimmed) {
            return Some(index as f64);
        }
        let looks_numeric = trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'));
        if !looks_numeric {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
    }

    fn numbers_equal(a: &Number, b: &Number) -> bool {
        match (a.as_i64(), b.as_i64()) {
            (Some(x), Some(y)) => x == y,
            _ => match (a.as_u64(), b.as_u64()) {
                (Some(x), Some(y)) => x == y,
                _ => a.as_f64() == b.as_f64(),
            },
        }
    }

    impl LooseEq for Value {
        fn loose_eq(&self, other: &Self) -> bool {
            match (self, other) {
                (Value::Null, Value::Null) => true,
                (Value::Bool(_), _) | (_, Value::Bool(_)) => truthy(self) == truthy(other),
                (Value::Null, Value::String(s)) | (Value::String(s), Value::Null) => s.is_empty(),
                (Value::Null, v) | (v, Value::Null) => !truthy(v),
                (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
                (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
                    match (numeric_str(s), n.as_f64()) {
                        (Some(x), Some(y)) => x == y,
                        _ => false,
                    }
                }
                (Value::String(a), Value::String(b)) => {
                    a == b
                        || match (numeric_str(a), numeric_str(b)) {
                            (Some(x), Some(y)) => x == y,
                            _ => false,
                        }
                }
                (Value::Array(a), Value::Array(b)) => {
                    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.loose_eq(y))
                }
                (Value::Object(a), Value::Object(b)) => {
                    a.len() == b.len()
                        && a.iter().all(|(k, x)| b.get(k).is_some_and(|y| x.loose_eq(y)))
                }
                _ => false,
            }
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
