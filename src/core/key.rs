// ============================================================================
// mixed-collection - Key
// Integer positions and string names sharing one key space
// ============================================================================

use std::borrow::Cow;
use std::fmt;

use crate::core::error::CollectionError;

// =============================================================================
// KEY
// =============================================================================

/// A key in a [`Collection`](crate::Collection).
///
/// Integer keys and string keys live side by side in the same ordered store.
/// Appending without a key allocates an [`Key::Index`]; everything else is
/// whatever the caller chose.
///
/// String keys that spell a canonical decimal integer are folded into
/// [`Key::Index`], so `"3"` and `3` address the same entry:
///
/// ```
/// use mixed_collection::Key;
///
/// assert_eq!(Key::from("3"), Key::Index(3));
/// assert_eq!(Key::from("-12"), Key::Index(-12));
///
/// // Anything that isn't the canonical spelling stays a name
/// assert_eq!(Key::from("03"), Key::Name("03".to_string()));
/// assert_eq!(Key::from("+3"), Key::Name("+3".to_string()));
/// assert_eq!(Key::from("-0"), Key::Name("-0".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Integer key, either allocated by an append or set explicitly
    Index(i64),
    /// String identifier
    Name(String),
}

impl Key {
    /// Returns the integer if this is an [`Key::Index`].
    pub fn as_index(&self) -> Option<i64> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Returns the string if this is a [`Key::Name`].
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    pub fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    /// Folds a [`Key::Name`] that spells a canonical integer into its
    /// [`Key::Index`]. Conversions from strings already do this; a `Name`
    /// built directly may not have been.
    ///
    /// ```
    /// use mixed_collection::Key;
    ///
    /// assert_eq!(Key::Name("1".into()).normalize(), Key::Index(1));
    /// assert_eq!(Key::Name("01".into()).normalize(), Key::Name("01".into()));
    /// ```
    pub fn normalize(self) -> Key {
        match self {
            Key::Name(name) => Key::from(name),
            index => index,
        }
    }

    /// True unless this is a [`Key::Name`] that [`normalize`](Self::normalize)
    /// would turn into an index.
    pub fn is_normalized(&self) -> bool {
        match self {
            Key::Name(name) => canonical_index(name).is_none(),
            Key::Index(_) => true,
        }
    }

    /// String form of the key, as used for object-style export.
    pub fn to_str(&self) -> Cow<'_, str> {
        match self {
            Key::Index(index) => Cow::Owned(index.to_string()),
            Key::Name(name) => Cow::Borrowed(name),
        }
    }
}

/// Parses `s` as an integer key only if it is the canonical decimal spelling:
/// optional `-`, no leading zeros, no `+`, no whitespace, and not `-0`.
pub(crate) fn canonical_index(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if digits == "0" && s.len() > 1 {
        return None;
    }
    // Overflowing spellings stay names
    s.parse::<i64>().ok()
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{}", index),
            Key::Name(name) => write!(f, "{}", name),
        }
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        match canonical_index(s) {
            Some(index) => Key::Index(index),
            None => Key::Name(s.to_string()),
        }
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        match canonical_index(&s) {
            Some(index) => Key::Index(index),
            None => Key::Name(s),
        }
    }
}

impl From<&String> for Key {
    fn from(s: &String) -> Self {
        Key::from(s.as_str())
    }
}

impl From<&Key> for Key {
    fn from(key: &Key) -> Self {
        key.clone()
    }
}

macro_rules! key_from_lossless_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Key {
                fn from(index: $t) -> Self {
                    Key::Index(i64::from(index))
                }
            }
        )*
    };
}

key_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

impl TryFrom<usize> for Key {
    type Error = CollectionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        i64::try_from(index).map(Key::Index).map_err(|_| CollectionError::IndexOutOfRange {
            index: u64::try_from(index).unwrap_or(u64::MAX),
        })
    }
}

impl TryFrom<u64> for Key {
    type Error = CollectionError;

    fn try_from(index: u64) -> Result<Self, Self::Error> {
        i64::try_from(index)
            .map(Key::Index)
            .map_err(|_| CollectionError::IndexOutOfRange { index })
    }
}

// =============================================================================
// TESTS
// =============================================================================
