//! Blank-value detection for cache keys and values
//!
//! The cache provider refuses to store a key or value whose textual form is
//! empty. Types opt in by implementing [`CacheItem`]; the default
//! implementation treats every value as non-blank.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

/// A value that may be used as a cache key or cache value
pub trait CacheItem {
    /// Whether the value's textual form is empty
    fn is_blank(&self) -> bool {
        false
    }
}

impl CacheItem for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl CacheItem for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl CacheItem for &str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl CacheItem for Cow<'_, str> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T> CacheItem for Vec<T> {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: CacheItem + ?Sized> CacheItem for Arc<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: CacheItem + ?Sized> CacheItem for Rc<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

impl<T: CacheItem + ?Sized> CacheItem for Box<T> {
    fn is_blank(&self) -> bool {
        (**self).is_blank()
    }
}

macro_rules! never_blank {
    ($($ty:ty),+ $(,)?) => {
        $(impl CacheItem for $ty {})+
    };
}

never_blank!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    //! Unit tests for cache::item.
    use super::*;

    #[test]
    fn test_empty_strings_are_blank() {
        assert!(String::new().is_blank());
        assert!("".is_blank());
        assert!(Cow::Borrowed("").is_blank());
        assert!(Arc::<str>::from("").is_blank());
    }

    #[test]
    fn test_whitespace_is_not_blank() {
        // Only the empty string form counts; a space is a real value.
        assert!(!" ".is_blank());
        assert!(!"Widget.FactoryMethod".to_string().is_blank());
    }

    #[test]
    fn test_numbers_are_never_blank() {
        assert!(!0_i32.is_blank());
        assert!(!0_u64.is_blank());
    }

    #[test]
    fn test_smart_pointers_delegate() {
        assert!(Box::new(String::new()).is_blank());
        assert!(!Rc::new("x".to_string()).is_blank());
        assert!(Vec::<u8>::new().is_blank());
    }
}
