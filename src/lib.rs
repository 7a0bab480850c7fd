//! In-place unstable sorting for type-erased buffers.
//!
//! The engine is a partition-exchange sort after Bentley and McIlroy
//! ("Engineering a Sort Function", 1993): adaptive median-of-3 /
//! pseudo-median-of-9 pivot selection, three-way partitioning that absorbs
//! runs of equal keys, an insertion-sort finish for short ranges, and element
//! exchanges dispatched once per call to the widest alignment-safe
//! granularity. It never allocates and never interprets element bytes except
//! to move them.
//!
//! [`sort`] and [`sort_by`] are the typed surface over slices. [`sort_raw_by`]
//! is the type-erased core for callers that only know an element width at
//! runtime, and [`ffi::bmqsort`] exports the same entry with a libc
//! `qsort`-shaped C ABI.

use core::cmp::Ordering;
use core::mem;

pub mod ffi;
pub mod patterns;

mod pivot;
mod quicksort;
mod swap;

use swap::SwapStrategy;

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// In-place (i.e., does not allocate) and unstable (i.e., may reorder equal
/// elements).
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// bmqsort::sort(&mut v);
/// assert_eq!(v, [-5, -3, 1, 2, 4]);
/// ```
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_by(v, |a, b| a.cmp(b));
}

/// Sorts the slice with a comparator function, but might not preserve the
/// order of equal elements.
///
/// The comparator must define a total order for the result to be ordered. If
/// it does not, the resulting order is unspecified, but the slice still holds
/// its original elements: the engine only ever exchanges whole elements
/// in place.
///
/// # Examples
///
/// ```
/// let mut v = [5i32, 4, 1, 3, 2];
/// bmqsort::sort_by(&mut v, |a, b| a.cmp(b));
/// assert_eq!(v, [1, 2, 3, 4, 5]);
///
/// // reverse sorting
/// bmqsort::sort_by(&mut v, |a, b| b.cmp(a));
/// assert_eq!(v, [5, 4, 3, 2, 1]);
/// ```
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    // Sorting has no meaningful behavior on zero-sized types.
    if mem::size_of::<T>() == 0 || v.len() < 2 {
        return;
    }

    let base = v.as_mut_ptr().cast::<u8>();
    let mut raw_compare = |a: *const u8, b: *const u8| {
        // SAFETY: the engine only hands the comparator addresses of whole,
        // live elements inside the slice.
        unsafe { compare(&*a.cast::<T>(), &*b.cast::<T>()) }
    };

    // SAFETY: the slice owns `v.len()` contiguous elements of
    // `size_of::<T>()` bytes each and the engine only permutes whole
    // elements, so every byte pattern it leaves behind is a valid `T`.
    unsafe {
        sort_raw_by(base, v.len(), mem::size_of::<T>(), &mut raw_compare);
    }
}

/// Sorts `elem_count` contiguous elements of `elem_size` bytes starting at
/// `base`, reordering them so every adjacent pair satisfies
/// `compare(a, b) <= Ordering::Equal`.
///
/// The buffer is treated as opaque: bytes are moved, never read as values.
/// The call leaves the same multiset of element byte patterns behind, also
/// when the comparator is inconsistent or panics.
///
/// # Panics
///
/// Panics before touching the buffer if `elem_size` is zero, or if `base` is
/// null while `elem_count > 0`.
///
/// # Safety
///
/// `base` must be valid for `elem_count * elem_size` bytes of reads and
/// writes for the duration of the call, nothing else may access the buffer
/// while it runs, and `compare` must be safe to call on any two element
/// addresses within it.
///
/// # Examples
///
/// ```
/// let mut v: [u32; 10] = [5, 3, 3, 1, 4, 1, 5, 9, 2, 6];
///
/// unsafe {
///     bmqsort::sort_raw_by(
///         v.as_mut_ptr().cast(),
///         v.len(),
///         std::mem::size_of::<u32>(),
///         |a, b| unsafe { (*a.cast::<u32>()).cmp(&*b.cast::<u32>()) },
///     );
/// }
/// assert_eq!(v, [1, 1, 2, 3, 3, 4, 5, 5, 6, 9]);
/// ```
pub unsafe fn sort_raw_by<F>(base: *mut u8, elem_count: usize, elem_size: usize, mut compare: F)
where
    F: FnMut(*const u8, *const u8) -> Ordering,
{
    assert!(elem_size >= 1, "elements cannot be zero-sized");
    assert!(
        elem_count == 0 || !base.is_null(),
        "null buffer with {elem_count} elements"
    );

    if elem_count < 2 {
        return;
    }

    let strategy = SwapStrategy::select(base, elem_size);
    quicksort::quicksort(base, elem_count, elem_size, strategy, &mut compare);
}
