//! Element hashing.
//!
//! Containers from unrelated implementations must agree on their hash
//! whenever they are equal, so the hash of an element is a fixed 32-bit
//! function of its value rather than whatever a [`std::hash::Hasher`]
//! happens to produce. The values match the hash codes of the
//! corresponding JVM boxed types, so independently written containers
//! interoperate bit for bit.
use std::rc::Rc;
use std::sync::Arc;

/// A stable 32-bit hash consistent with the element's `PartialEq`.
pub trait ElementHash {
    fn element_hash(&self) -> i32;
}

/// Combine element hashes in order: `h = 31 * h + e`, starting at 1.
pub fn ordered_hash<'a, T, I>(elements: I) -> i32
where
    T: ElementHash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements.into_iter().fold(1i32, |hash, element| {
        hash.wrapping_mul(31).wrapping_add(element.element_hash())
    })
}

/// Combine element hashes regardless of order: the wrapping sum.
pub fn unordered_hash<'a, T, I>(elements: I) -> i32
where
    T: ElementHash + ?Sized + 'a,
    I: IntoIterator<Item = &'a T>,
{
    elements
        .into_iter()
        .fold(0i32, |hash, element| hash.wrapping_add(element.element_hash()))
}

fn wide_hash(bits: u64) -> i32 {
    (bits ^ (bits >> 32)) as i32
}

macro_rules! narrow_element_hash {
    ($($t:ty),*) => {
        $(
            impl ElementHash for $t {
                #[inline]
                fn element_hash(&self) -> i32 {
                    *self as i32
                }
            }
        )*
    };
}

macro_rules! wide_element_hash {
    ($($t:ty),*) => {
        $(
            impl ElementHash for $t {
                #[inline]
                fn element_hash(&self) -> i32 {
                    wide_hash(*self as u64)
                }
            }
        )*
    };
}

narrow_element_hash!(i8, u8, i16, u16, i32, u32);
wide_element_hash!(i64, u64, isize, usize);

impl ElementHash for bool {
    #[inline]
    fn element_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl ElementHash for char {
    #[inline]
    fn element_hash(&self) -> i32 {
        *self as i32
    }
}

impl ElementHash for f32 {
    fn element_hash(&self) -> i32 {
        // all NaNs collapse to the canonical one
        if self.is_nan() {
            0x7fc0_0000
        } else {
            self.to_bits() as i32
        }
    }
}

impl ElementHash for f64 {
    fn element_hash(&self) -> i32 {
        if self.is_nan() {
            wide_hash(0x7ff8_0000_0000_0000)
        } else {
            wide_hash(self.to_bits())
        }
    }
}

impl ElementHash for str {
    fn element_hash(&self) -> i32 {
        // hashed over UTF-16 code units
        self.encode_utf16()
            .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
    }
}

impl ElementHash for String {
    #[inline]
    fn element_hash(&self) -> i32 {
        self.as_str().element_hash()
    }
}

impl<T: ElementHash> ElementHash for Option<T> {
    /// An absent slot hashes as 0.
    #[inline]
    fn element_hash(&self) -> i32 {
        self.as_ref().map_or(0, ElementHash::element_hash)
    }
}

impl<T: ElementHash> ElementHash for [T] {
    /// Nested lists hash like sequences.
    fn element_hash(&self) -> i32 {
        ordered_hash(self)
    }
}

impl<T: ElementHash> ElementHash for Vec<T> {
    #[inline]
    fn element_hash(&self) -> i32 {
        self.as_slice().element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for &T {
    #[inline]
    fn element_hash(&self) -> i32 {
        (**self).element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for Box<T> {
    #[inline]
    fn element_hash(&self) -> i32 {
        (**self).element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for Rc<T> {
    #[inline]
    fn element_hash(&self) -> i32 {
        (**self).element_hash()
    }
}

impl<T: ElementHash + ?Sized> ElementHash for Arc<T> {
    #[inline]
    fn element_hash(&self) -> i32 {
        (**self).element_hash()
    }
}
