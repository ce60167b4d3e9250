//! Element identity contract for sequence diffing
//!
//! Every diffed element exposes two capabilities:
//! - **Identity** (`diff_id`): which old element is "the same logical item"
//!   as a new one, independent of position and content.
//! - **Content equality** (`same_content`): whether a matched pair is
//!   unchanged or must be reported as a `Replace`.
//!
//! # Identity vs Content
//!
//! ```text
//! old: [ (1, "x"), (2, "y") ]
//! new: [ (2, "y"), (1, "z") ]
//!
//! id 1: matched, content "x" != "z"  -> Replace
//! id 2: matched, content equal       -> Move (or unchanged)
//! ```
//!
//! # Contract
//!
//! Both methods must be deterministic for the duration of a diff call.
//! `same_content` is authoritative: fields it ignores never produce a change.
//! An inconsistent implementation is not detected; the resulting script is
//! still well-formed but may not describe the intended edit.

use std::hash::Hash;

// =============================================================================
// Diffable
// =============================================================================

/// An element that can take part in a sequence diff.
///
/// The identity is a GAT so it may borrow from the element, which keeps
/// indexing allocation-free for string-keyed items:
///
/// ```
/// use tola_seqdiff::Diffable;
///
/// #[derive(Clone, PartialEq)]
/// struct Row {
///     key: String,
///     title: String,
/// }
///
/// impl Diffable for Row {
///     type Id<'a> = &'a str;
///
///     fn diff_id(&self) -> &str {
///         &self.key
///     }
///
///     fn same_content(&self, other: &Self) -> bool {
///         self.title == other.title
///     }
/// }
/// ```
pub trait Diffable {
    /// Stable identity used to pair old and new elements.
    type Id<'a>: Hash + Eq
    where
        Self: 'a;

    /// Extract the identity of this element.
    fn diff_id(&self) -> Self::Id<'_>;

    /// Compare the content of two elements that share an identity.
    fn same_content(&self, other: &Self) -> bool;
}

// =============================================================================
// Forwarding impls
// =============================================================================

impl<T: Diffable + ?Sized> Diffable for &T {
    type Id<'a>
        = T::Id<'a>
    where
        Self: 'a;

    #[inline]
    fn diff_id(&self) -> Self::Id<'_> {
        (**self).diff_id()
    }

    #[inline]
    fn same_content(&self, other: &Self) -> bool {
        (**self).same_content(*other)
    }
}

impl<T: Diffable + ?Sized> Diffable for Box<T> {
    type Id<'a>
        = T::Id<'a>
    where
        Self: 'a;

    #[inline]
    fn diff_id(&self) -> Self::Id<'_> {
        (**self).diff_id()
    }

    #[inline]
    fn same_content(&self, other: &Self) -> bool {
        (**self).same_content(other)
    }
}

/// Keyed pair: identity is the key, content is the value.
impl<K: Hash + Eq, V: PartialEq> Diffable for (K, V) {
    type Id<'a>
        = &'a K
    where
        Self: 'a;

    #[inline]
    fn diff_id(&self) -> &K {
        &self.0
    }

    #[inline]
    fn same_content(&self, other: &Self) -> bool {
        self.1 == other.1
    }
}

// =============================================================================
// Value types: identity is the value itself
// =============================================================================

// Two values with the same identity are equal, so these never yield Replace.
macro_rules! impl_diffable_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Diffable for $ty {
                type Id<'a> = $ty;

                #[inline]
                fn diff_id(&self) -> $ty {
                    *self
                }

                #[inline]
                fn same_content(&self, other: &Self) -> bool {
                    self == other
                }
            }
        )*
    };
}

impl_diffable_by_value!(
    u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, bool, char,
);

impl Diffable for str {
    type Id<'a> = &'a str;

    #[inline]
    fn diff_id(&self) -> &str {
        self
    }

    #[inline]
    fn same_content(&self, other: &Self) -> bool {
        self == other
    }
}

impl Diffable for String {
    type Id<'a> = &'a str;

    #[inline]
    fn diff_id(&self) -> &str {
        self.as_str()
    }

    #[inline]
    fn same_content(&self, other: &Self) -> bool {
        self == other
    }
}

// =============================================================================
// Derive helper
// =============================================================================

/// Implement [`Diffable`] for a struct keyed by one field.
///
/// Content equality is the struct's `PartialEq`.
///
/// # Example
///
/// ```
/// use tola_seqdiff::{diffable, diff, Change};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Item {
///     id: u32,
///     label: &'static str,
/// }
///
/// diffable!(Item, id: u32);
///
/// let old = [Item { id: 1, label: "x" }];
/// let new = [Item { id: 1, label: "y" }];
/// let changes = diff(&old, &new);
/// assert!(matches!(changes[0], Change::Replace { index: 0, .. }));
/// ```
#[macro_export]
macro_rules! diffable {
    ($ty:ty, $field:ident : $id:ty) => {
        impl $crate::Diffable for $ty {
            type Id<'a> = &'a $id;

            #[inline]
            fn diff_id(&self) -> &$id {
                &self.$field
            }

            #[inline]
            fn same_content(&self, other: &Self) -> bool {
                self == other
            }
        }
    };
}

// =============================================================================
// Tests
// =============================================================================
