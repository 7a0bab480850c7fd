use core::cmp::Ordering;

/// Above this partition length the pivot is a pseudo-median of nine samples
/// instead of a median of three.
pub(crate) const PSEUDO_MEDIAN_THRESHOLD: usize = 40;

/// Picks a pivot address for the `n` elements of width `elem_size` at `base`.
///
/// Up to [`PSEUDO_MEDIAN_THRESHOLD`] elements: median of the first, middle and
/// last element. Beyond that: median-of-3 of three median-of-3 samples spread
/// `n / 8` elements apart across the low end, the middle and the high end.
/// The wider sample keeps the choice close to the true median on organ-pipe
/// and other adversarial layouts.
///
/// # Safety
///
/// `base` must be valid for `n * elem_size` bytes of reads with `n >= 3`, and
/// the comparator must be safe to call on any two element addresses within
/// that range.
pub(crate) unsafe fn choose_pivot<F>(
    base: *mut u8,
    n: usize,
    elem_size: usize,
    cmp: &mut F,
) -> *mut u8
where
    F: FnMut(*const u8, *const u8) -> Ordering,
{
    let mut lo = base;
    let mut mid = base.add((n / 2) * elem_size);
    let mut hi = base.add((n - 1) * elem_size);

    if n > PSEUDO_MEDIAN_THRESHOLD {
        let d = (n / 8) * elem_size;
        lo = median3(lo, lo.add(d), lo.add(2 * d), cmp);
        mid = median3(mid.sub(d), mid, mid.add(d), cmp);
        hi = median3(hi.sub(2 * d), hi.sub(d), hi, cmp);
    }

    median3(lo, mid, hi, cmp)
}

/// Median of the elements at `a`, `b` and `c`.
///
/// Tie handling is fixed, not arbitrary: with `a < b` the middle candidate
/// wins only while it stays below `c`, with `a >= b` only while it stays
/// above `c`. Runs of equal keys therefore always settle on the same
/// candidate.
///
/// # Safety
///
/// All three addresses must point at live elements.
unsafe fn median3<F>(a: *mut u8, b: *mut u8, c: *mut u8, cmp: &mut F) -> *mut u8
where
    F: FnMut(*const u8, *const u8) -> Ordering,
{
    if cmp(a, b) == Ordering::Less {
        if cmp(b, c) == Ordering::Less {
            b
        } else if cmp(a, c) == Ordering::Less {
            c
        } else {
            a
        }
    } else if cmp(b, c) == Ordering::Greater {
        b
    } else if cmp(a, c) == Ordering::Less {
        a
    } else {
        c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem;

    fn median3_of(vals: [i32; 3]) -> i32 {
        let mut v = vals;
        let base = v.as_mut_ptr().cast::<u8>();
        let es = mem::size_of::<i32>();
        let mut cmp = |a: *const u8, b: *const u8| {
            // SAFETY: both point at elements of `v`.
            unsafe { (*a.cast::<i32>()).cmp(&*b.cast::<i32>()) }
        };
        unsafe {
            let m = median3(base, base.add(es), base.add(2 * es), &mut cmp);
            *m.cast::<i32>()
        }
    }

    #[test]
    fn median3_all_permutations() {
        for perm in [
            [1, 2, 3],
            [1, 3, 2],
            [2, 1, 3],
            [2, 3, 1],
            [3, 1, 2],
            [3, 2, 1],
        ] {
            assert_eq!(median3_of(perm), 2, "median of {perm:?}");
        }
    }

    #[test]
    fn median3_ties() {
        assert_eq!(median3_of([1, 1, 2]), 1);
        assert_eq!(median3_of([2, 1, 1]), 1);
        assert_eq!(median3_of([1, 2, 2]), 2);
        assert_eq!(median3_of([2, 2, 1]), 2);
        assert_eq!(median3_of([2, 1, 2]), 2);
        assert_eq!(median3_of([1, 2, 1]), 1);
        assert_eq!(median3_of([5, 5, 5]), 5);
    }

    #[test]
    fn pseudo_median_lands_near_middle() {
        // Organ pipe: the plain middle element would be the maximum.
        let mut v: Vec<i32> = (0..50).chain((0..50).rev()).collect();
        let sorted = {
            let mut s = v.clone();
            s.sort_unstable();
            s
        };
        let es = mem::size_of::<i32>();
        let base = v.as_mut_ptr().cast::<u8>();
        let n = v.len();

        let mut cmp = |a: *const u8, b: *const u8| {
            // SAFETY: both point at elements of `v`.
            unsafe { (*a.cast::<i32>()).cmp(&*b.cast::<i32>()) }
        };
        let pivot = unsafe {
            let p = choose_pivot(base, n, es, &mut cmp);
            *p.cast::<i32>()
        };

        // Within the middle half of the value distribution.
        assert!(pivot >= sorted[n / 4] && pivot <= sorted[(3 * n) / 4]);
    }
}
