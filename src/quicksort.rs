use core::cmp::Ordering;

use crate::pivot::choose_pivot;
use crate::swap::{elem_swap, vec_swap, SwapStrategy};

/// Ranges shorter than this skip partitioning and are insertion sorted
/// outright.
pub(crate) const INSERTION_SORT_THRESHOLD: usize = 7;

/// Sorts the `n` elements of width `elem_size` starting at `base`.
///
/// Classic partition-exchange sort: install a median-based pivot at the front,
/// split the range three ways around it, then sort the smaller side
/// recursively while looping on the larger one. Looping instead of recursing
/// on the larger side keeps the auxiliary stack depth logarithmic no matter
/// how skewed the partitions get.
///
/// # Safety
///
/// `base` must be valid for `n * elem_size` bytes of reads and writes for the
/// whole call, `n >= 2`, `strategy` must have been selected for `base` and
/// `elem_size`, and the comparator must be safe to call on any two element
/// addresses within the range.
pub(crate) unsafe fn quicksort<F>(
    mut base: *mut u8,
    mut n: usize,
    elem_size: usize,
    strategy: SwapStrategy,
    cmp: &mut F,
) where
    F: FnMut(*const u8, *const u8) -> Ordering,
{
    let es = elem_size;

    loop {
        if n < INSERTION_SORT_THRESHOLD {
            insertion_sort(base, n, es, strategy, cmp);
            return;
        }

        let pivot = choose_pivot(base, n, es, cmp);
        elem_swap(base, pivot, es, strategy);

        // The pivot sits at `base`. The rest of the range is split into five
        // regions:
        //
        //   [ == | < | unexamined | > | == ]
        //        ^pa ^pb          ^pc ^pd
        //
        // `pb` and `pc` scan inward. Keys equal to the pivot are parked in the
        // outer equal regions and moved to the middle once the scan finishes,
        // so duplicate-heavy ranges shrink by the whole equal run at once.
        let mut pa = base.add(es);
        let mut pb = pa;
        let mut pc = base.add((n - 1) * es);
        let mut pd = pc;
        let mut exchanged = false;

        loop {
            while pb <= pc {
                match cmp(pb, base) {
                    Ordering::Greater => break,
                    Ordering::Equal => {
                        exchanged = true;
                        elem_swap(pa, pb, es, strategy);
                        pa = pa.add(es);
                    }
                    Ordering::Less => {}
                }
                pb = pb.add(es);
            }
            while pb <= pc {
                match cmp(pc, base) {
                    Ordering::Less => break,
                    Ordering::Equal => {
                        exchanged = true;
                        elem_swap(pc, pd, es, strategy);
                        pd = pd.sub(es);
                    }
                    Ordering::Greater => {}
                }
                pc = pc.sub(es);
            }
            if pb > pc {
                break;
            }
            elem_swap(pb, pc, es, strategy);
            exchanged = true;
            pb = pb.add(es);
            pc = pc.sub(es);
        }

        if !exchanged {
            // The scan moved nothing, so the range was already partitioned
            // around the pivot. Typical for nearly-sorted input, where
            // finishing with insertion sort beats partitioning further.
            insertion_sort(base, n, es, strategy, cmp);
            return;
        }

        // Relocate the equal regions from the rims to the middle, next to
        // where the scanners crossed.
        let end = base.add(n * es);
        let lt_equal = pa.offset_from(base).min(pb.offset_from(pa)) as usize;
        vec_swap(base, pb.sub(lt_equal), lt_equal, strategy);
        let gt_equal = pd.offset_from(pc).min(end.offset_from(pd) - es as isize) as usize;
        vec_swap(pb, end.sub(gt_equal), gt_equal, strategy);

        let lt_len = pb.offset_from(pa) as usize;
        let gt_len = pd.offset_from(pc) as usize;

        let (short_base, short_len, long_base, long_len) = if lt_len <= gt_len {
            (base, lt_len, end.sub(gt_len), gt_len)
        } else {
            (end.sub(gt_len), gt_len, base, lt_len)
        };

        if short_len > es {
            quicksort(short_base, short_len / es, es, strategy, cmp);
        }
        if long_len <= es {
            return;
        }
        base = long_base;
        n = long_len / es;
    }
}

/// Insertion sorts the `n` elements of width `elem_size` starting at `base`:
/// each element walks left through adjacent swaps while it compares below its
/// neighbor.
///
/// # Safety
///
/// As [`quicksort`], except any `n >= 1` is fine.
pub(crate) unsafe fn insertion_sort<F>(
    base: *mut u8,
    n: usize,
    elem_size: usize,
    strategy: SwapStrategy,
    cmp: &mut F,
) where
    F: FnMut(*const u8, *const u8) -> Ordering,
{
    let end = base.add(n * elem_size);

    let mut cur = base.add(elem_size);
    while cur < end {
        let mut hole = cur;
        while hole > base && cmp(hole.sub(elem_size), hole) == Ordering::Greater {
            elem_swap(hole, hole.sub(elem_size), elem_size, strategy);
            hole = hole.sub(elem_size);
        }
        cur = cur.add(elem_size);
    }
}
