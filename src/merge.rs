//! Recursive merging of component option records.
//!
//! Scalar options are replaced wholesale when the override supplies them.
//! Nested option blocks and attribute maps merge field by field, so a caller
//! can override `fieldset.legend.text` without losing the rest of a default
//! fieldset.

/// Merge `overrides` over `self`, treating `self` as the defaults.
pub trait Merge: Sized {
    fn merge(self, overrides: Self) -> Self;
}

impl<T: Merge> Merge for Option<T> {
    fn merge(self, overrides: Self) -> Self {
        match (self, overrides) {
            (Some(defaults), Some(overrides)) => Some(defaults.merge(overrides)),
            (defaults, None) => defaults,
            (None, overrides) => overrides,
        }
    }
}

/// Merge two option records: `merge(defaults, overrides)`.
pub fn merge<T: Merge>(defaults: T, overrides: T) -> T {
    defaults.merge(overrides)
}

/// Implement [`Merge`] for an options record.
///
/// Every field must be listed: `replace` fields take the override when it is
/// `Some`, `nested` fields merge recursively.
#[macro_export]
macro_rules! impl_merge {
    ($ty:ty { replace: [$($leaf:ident),* $(,)?], nested: [$($nested:ident),* $(,)?] $(,)? }) => {
        impl $crate::merge::Merge for $ty {
            fn merge(self, overrides: Self) -> Self {
                Self {
                    $($leaf: overrides.$leaf.or(self.$leaf),)*
                    $($nested: $crate::merge::Merge::merge(self.$nested, overrides.$nested),)*
                }
            }
        }
    };
}
