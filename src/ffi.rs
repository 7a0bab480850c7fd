//! C ABI surface, shaped like libc `qsort`.

use core::cmp::Ordering;
use std::ffi::{c_int, c_void};

/// Three-way C comparator: negative, zero or positive, like `memcmp`.
pub type CompareFn = unsafe extern "C" fn(*const c_void, *const c_void) -> c_int;

/// Sorts `elem_count` contiguous records of `elem_size` bytes at `base` with
/// `compare`. Drop-in shape for callers that already talk to libc `qsort`.
///
/// Precondition violations panic: a zero `elem_size`, a null `base` with
/// records present, or a null `compare` with more than one record. The
/// `"C-unwind"` ABI lets that panic travel back through the boundary instead
/// of aborting.
///
/// # Safety
///
/// `base` must be valid for `elem_count * elem_size` bytes of reads and
/// writes for the duration of the call, nothing else may access the buffer
/// while it runs, and `compare` must be safe to call on any two record
/// addresses within it and must not unwind.
#[no_mangle]
pub unsafe extern "C-unwind" fn bmqsort(
    base: *mut c_void,
    elem_count: usize,
    elem_size: usize,
    compare: Option<CompareFn>,
) {
    assert!(elem_size >= 1, "records cannot be zero-sized");
    assert!(
        elem_count == 0 || !base.is_null(),
        "null buffer with {elem_count} records"
    );

    if elem_count < 2 {
        return;
    }

    let compare = compare.expect("null comparator with more than one record");

    crate::sort_raw_by(base.cast::<u8>(), elem_count, elem_size, |a, b| {
        // SAFETY: the engine only passes addresses of whole records inside
        // the buffer, which the caller vouched for.
        let raw = unsafe { compare(a.cast::<c_void>(), b.cast::<c_void>()) };
        match raw {
            r if r < 0 => Ordering::Less,
            0 => Ordering::Equal,
            _ => Ordering::Greater,
        }
    });
}
