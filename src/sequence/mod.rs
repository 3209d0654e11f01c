//! Zero-terminated sequences and the elements they are made of.

use std::ffi::CStr;
use std::fmt;

/// Element type with a designated terminator value.
pub trait Terminated: Copy + PartialEq + fmt::Debug + 'static {
    /// Value marking the logical end of a sequence.
    const TERMINATOR: Self;

    /// A sequence holding nothing but the terminator.
    const EMPTY: &'static [Self];

    /// Whether this element ends the sequence.
    #[inline]
    fn is_terminator(&self) -> bool {
        *self == Self::TERMINATOR
    }
}

macro_rules! impl_terminated {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Terminated for $ty {
                const TERMINATOR: Self = $zero;
                const EMPTY: &'static [Self] = &[$zero];
            }
        )*
    };
}

impl_terminated! {
    u8 => 0,
    i8 => 0,
    u16 => 0,
    u32 => 0,
    char => '\0',
}

/// Non-owning, possibly-null reference to a zero-terminated run of `T`.
///
/// The referenced storage should contain a terminator. Scans stop at the
/// first one; anything stored after it is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeqRef<'a, T> {
    elems: Option<&'a [T]>,
}

impl<'a, T: Terminated> SeqRef<'a, T> {
    /// Reference the given storage.
    pub fn new(elems: &'a [T]) -> Self {
        Self { elems: Some(elems) }
    }

    /// The null reference.
    pub fn null() -> Self {
        Self { elems: None }
    }

    /// Whether this is the null reference.
    pub fn is_null(&self) -> bool {
        self.elems.is_none()
    }

    /// Underlying storage, or `None` when null.
    pub fn as_slice(&self) -> Option<&'a [T]> {
        self.elems
    }
}

impl<'a, T: Terminated> From<&'a [T]> for SeqRef<'a, T> {
    fn from(elems: &'a [T]) -> Self {
        Self::new(elems)
    }
}

impl<'a, T: Terminated, const N: usize> From<&'a [T; N]> for SeqRef<'a, T> {
    fn from(elems: &'a [T; N]) -> Self {
        Self::new(elems)
    }
}

impl<'a, T: Terminated> From<Option<&'a [T]>> for SeqRef<'a, T> {
    fn from(elems: Option<&'a [T]>) -> Self {
        Self { elems }
    }
}

impl<'a> From<&'a CStr> for SeqRef<'a, u8> {
    fn from(s: &'a CStr) -> Self {
        Self::new(s.to_bytes_with_nul())
    }
}

impl<'a> From<Option<&'a CStr>> for SeqRef<'a, u8> {
    fn from(s: Option<&'a CStr>) -> Self {
        Self {
            elems: s.map(CStr::to_bytes_with_nul),
        }
    }
}
