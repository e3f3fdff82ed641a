//! Page-order computation for the named sort modes
//!
//! Every function here is a pure computation from a page count to a
//! zero-based target order. An order may be shorter than the page count
//! (removal modes drop pages) or contain repeats (side-stitch clamps the
//! trailing chunk instead of inserting blanks).
//!
//! The half-sheet modes lay out whole folded sheets, so their orders are
//! computed over the page count padded to the next multiple of 4
//! ([`SortMode::required_page_count`]). The padding slots reference blank
//! pages that must be appended to the document before the order is applied.

use crate::types::SortMode;

/// Compute the zero-based page order for `mode` over `total_pages` pages.
///
/// Total for every `total_pages >= 0`; degenerate counts yield short or
/// empty orders rather than failing.
pub fn sort_order(mode: SortMode, total_pages: usize) -> Vec<usize> {
    match mode {
        SortMode::ReverseOrder => reverse_order(total_pages),
        SortMode::DuplexSort => duplex_sort(total_pages),
        SortMode::BookletSort => booklet_sort(total_pages),
        SortMode::SideStitchBookletSort => side_stitch_booklet_sort(total_pages),
        SortMode::OddEvenSplit => odd_even_split(total_pages),
        SortMode::OddEvenMerge => odd_even_merge(total_pages),
        SortMode::RemoveFirst => remove_first(total_pages),
        SortMode::RemoveLast => remove_last(total_pages),
        SortMode::RemoveFirstAndLast => remove_first_and_last(total_pages),
        SortMode::BookletHalfSheetSort => booklet_half_sheet_sort(total_pages),
        SortMode::BookHalfSheetSort => book_half_sheet_sort(total_pages),
    }
}

/// Smallest multiple of `multiple` that is `>= n`
pub(crate) fn next_multiple_of(n: usize, multiple: usize) -> usize {
    n + (multiple - n % multiple) % multiple
}

fn reverse_order(total_pages: usize) -> Vec<usize> {
    (0..total_pages).rev().collect()
}

fn remove_first(total_pages: usize) -> Vec<usize> {
    if total_pages <= 1 {
        return Vec::new();
    }
    (1..total_pages).collect()
}

fn remove_last(total_pages: usize) -> Vec<usize> {
    if total_pages <= 1 {
        return Vec::new();
    }
    (0..total_pages - 1).collect()
}

fn remove_first_and_last(total_pages: usize) -> Vec<usize> {
    if total_pages <= 2 {
        return Vec::new();
    }
    (1..total_pages - 1).collect()
}

/// Interleave the ascending first half with the descending second half, so
/// front/back printing pairs read in order: 1, N, 2, N-1, ...
fn duplex_sort(total_pages: usize) -> Vec<usize> {
    let half = total_pages.div_ceil(2);
    let mut order = Vec::with_capacity(total_pages);
    for i in 1..=half {
        order.push(i - 1);
        // The second half is one page shorter for odd counts
        if i <= total_pages - half {
            order.push(total_pages - i);
        }
    }
    order
}

/// Outermost pair inward. Odd counts drop the middle page: the order has
/// `2 * (total_pages / 2)` entries.
fn booklet_sort(total_pages: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(total_pages);
    for i in 0..total_pages / 2 {
        order.push(i);
        order.push(total_pages - i - 1);
    }
    order
}

/// Rotate each 4-page chunk to `3, 0, 1, 2` (relative to the chunk start).
/// Slots past the end of the document clamp to the last page, so a count
/// that is not a multiple of 4 repeats its final page.
fn side_stitch_booklet_sort(total_pages: usize) -> Vec<usize> {
    let chunks = total_pages.div_ceil(4);
    let mut order = Vec::with_capacity(chunks * 4);
    for chunk in 0..chunks {
        let begin = chunk * 4;
        let last = total_pages - 1;
        order.push((begin + 3).min(last));
        order.push(begin.min(last));
        order.push((begin + 1).min(last));
        order.push((begin + 2).min(last));
    }
    order
}

fn odd_even_split(total_pages: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..total_pages).step_by(2).collect();
    order.extend((1..total_pages).step_by(2));
    order
}

/// Inverse of [`odd_even_split`]: pair index `k` of the first half with
/// index `odd_pages + k` of the second half while the latter is in range.
fn odd_even_merge(total_pages: usize) -> Vec<usize> {
    let odd_pages = total_pages.div_ceil(2);
    let mut order = Vec::with_capacity(total_pages);
    for k in 0..odd_pages {
        order.push(k);
        if odd_pages + k < total_pages {
            order.push(odd_pages + k);
        }
    }
    order
}

/// Half-sheet booklet over the whole (padded) document. Sheet faces
/// alternate which side carries the outer page:
/// `N-1, 0, 1, N-2, N-3, 2, 3, N-4, ...`
fn booklet_half_sheet_sort(total_pages: usize) -> Vec<usize> {
    let padded = next_multiple_of(total_pages, 4);
    half_sheet_chunk(0, padded)
}

/// Half-sheet booklet per 16-page chunk (4 sheets of 4 faces). Only whole
/// chunks are laid out; pages past the last full chunk are dropped.
fn book_half_sheet_sort(total_pages: usize) -> Vec<usize> {
    const PAGES_PER_CHUNK: usize = 16;
    let padded = next_multiple_of(total_pages, 4);
    let chunks = padded / PAGES_PER_CHUNK;
    let mut order = Vec::with_capacity(chunks * PAGES_PER_CHUNK);
    for chunk in 0..chunks {
        order.extend(half_sheet_chunk(chunk * PAGES_PER_CHUNK, PAGES_PER_CHUNK));
    }
    order
}

/// One half-sheet run over `len` pages starting at `start`, alternating
/// outer-then-inner with inner-then-outer on successive faces.
fn half_sheet_chunk(start: usize, len: usize) -> Vec<usize> {
    let mut order = Vec::with_capacity(len);
    for i in 0..len / 2 {
        let outer = start + len - i - 1;
        let inner = start + i;
        if i % 2 == 0 {
            order.push(outer);
            order.push(inner);
        } else {
            order.push(inner);
            order.push(outer);
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Apply `second` to the output of `first`, yielding the combined order.
    fn compose(first: &[usize], second: &[usize]) -> Vec<usize> {
        second.iter().map(|&i| first[i]).collect()
    }

    fn identity(total_pages: usize) -> Vec<usize> {
        (0..total_pages).collect()
    }

    /// An order is a permutation when it covers 0..total_pages exactly once.
    fn is_permutation(order: &[usize], total_pages: usize) -> bool {
        let mut seen = vec![false; total_pages];
        if order.len() != total_pages {
            return false;
        }
        for &i in order {
            if i >= total_pages || seen[i] {
                return false;
            }
            seen[i] = true;
        }
        true
    }

    #[test]
    fn test_reverse_order() {
        assert_eq!(sort_order(SortMode::ReverseOrder, 4), vec![3, 2, 1, 0]);
        assert!(sort_order(SortMode::ReverseOrder, 0).is_empty());
    }

    #[test]
    fn test_reverse_twice_is_identity() {
        for total in [0, 1, 2, 5, 16, 17] {
            let reversed = sort_order(SortMode::ReverseOrder, total);
            assert_eq!(compose(&reversed, &reversed), identity(total));
        }
    }

    #[test]
    fn test_removal_modes() {
        assert_eq!(sort_order(SortMode::RemoveFirst, 4), vec![1, 2, 3]);
        assert_eq!(sort_order(SortMode::RemoveLast, 4), vec![0, 1, 2]);
        assert_eq!(
            sort_order(SortMode::RemoveFirstAndLast, 10),
            (1..=8).collect::<Vec<_>>()
        );
        assert!(sort_order(SortMode::RemoveFirstAndLast, 2).is_empty());
        for total in [0, 1] {
            assert!(sort_order(SortMode::RemoveFirst, total).is_empty());
            assert!(sort_order(SortMode::RemoveLast, total).is_empty());
            assert!(sort_order(SortMode::RemoveFirstAndLast, total).is_empty());
        }
    }

    #[test]
    fn test_duplex_sort() {
        assert_eq!(sort_order(SortMode::DuplexSort, 6), vec![0, 5, 1, 4, 2, 3]);
        assert_eq!(sort_order(SortMode::DuplexSort, 5), vec![0, 4, 1, 3, 2]);
        for total in [0, 1, 2, 5, 16, 17] {
            assert!(is_permutation(&sort_order(SortMode::DuplexSort, total), total));
        }
    }

    #[test]
    fn test_booklet_sort() {
        assert_eq!(sort_order(SortMode::BookletSort, 6), vec![0, 5, 1, 4, 2, 3]);
        // Odd counts drop the middle page
        assert_eq!(sort_order(SortMode::BookletSort, 5), vec![0, 4, 1, 3]);
        for total in [0, 1, 2, 5, 16, 17] {
            assert_eq!(sort_order(SortMode::BookletSort, total).len(), 2 * (total / 2));
        }
    }

    #[test]
    fn test_side_stitch_booklet_sort() {
        assert_eq!(
            sort_order(SortMode::SideStitchBookletSort, 16),
            vec![3, 0, 1, 2, 7, 4, 5, 6, 11, 8, 9, 10, 15, 12, 13, 14]
        );
        for total in [0, 4, 8, 16] {
            assert!(is_permutation(
                &sort_order(SortMode::SideStitchBookletSort, total),
                total
            ));
        }
        // Counts off a multiple of 4 clamp the trailing chunk to the last page
        assert_eq!(
            sort_order(SortMode::SideStitchBookletSort, 5),
            vec![3, 0, 1, 2, 4, 4, 4, 4]
        );
    }

    #[test]
    fn test_odd_even_split() {
        assert_eq!(sort_order(SortMode::OddEvenSplit, 5), vec![0, 2, 4, 1, 3]);
        assert_eq!(sort_order(SortMode::OddEvenSplit, 6), vec![0, 2, 4, 1, 3, 5]);
    }

    #[test]
    fn test_odd_even_merge() {
        assert_eq!(sort_order(SortMode::OddEvenMerge, 5), vec![0, 3, 1, 4, 2]);
        for total in [0, 1, 2, 5, 16, 17] {
            assert!(is_permutation(&sort_order(SortMode::OddEvenMerge, total), total));
        }
    }

    #[test]
    fn test_split_then_merge_is_identity() {
        for total in 0..=17 {
            let split = sort_order(SortMode::OddEvenSplit, total);
            let merge = sort_order(SortMode::OddEvenMerge, total);
            assert_eq!(compose(&split, &merge), identity(total), "total = {total}");
        }
    }

    #[test]
    fn test_booklet_half_sheet_sort() {
        assert_eq!(
            sort_order(SortMode::BookletHalfSheetSort, 16),
            vec![15, 0, 1, 14, 13, 2, 3, 12, 11, 4, 5, 10, 9, 6, 7, 8]
        );
        // Non-multiples of 4 lay out the padded count; the padding indices
        // reference blank pages appended before the order is applied.
        assert_eq!(
            sort_order(SortMode::BookletHalfSheetSort, 5),
            vec![7, 0, 1, 6, 5, 2, 3, 4]
        );
        assert!(is_permutation(&sort_order(SortMode::BookletHalfSheetSort, 8), 8));
        assert!(sort_order(SortMode::BookletHalfSheetSort, 0).is_empty());
    }

    #[test]
    fn test_book_half_sheet_sort() {
        // A single chunk matches the whole-document half-sheet layout
        assert_eq!(
            sort_order(SortMode::BookHalfSheetSort, 16),
            sort_order(SortMode::BookletHalfSheetSort, 16)
        );
        let order = sort_order(SortMode::BookHalfSheetSort, 32);
        assert_eq!(
            &order[..16],
            &[15, 0, 1, 14, 13, 2, 3, 12, 11, 4, 5, 10, 9, 6, 7, 8]
        );
        assert_eq!(
            &order[16..],
            &[31, 16, 17, 30, 29, 18, 19, 28, 27, 20, 21, 26, 25, 22, 23, 24]
        );
        assert!(is_permutation(&order, 32));
    }

    #[test]
    fn test_book_half_sheet_sort_drops_partial_chunk() {
        // 20 pages pad to 20, which holds a single whole 16-page chunk
        let order = sort_order(SortMode::BookHalfSheetSort, 20);
        assert_eq!(order.len(), 16);
        assert!(order.iter().all(|&i| i < 16));
        assert!(sort_order(SortMode::BookHalfSheetSort, 3).is_empty());
    }

    #[test]
    fn test_next_multiple_of() {
        assert_eq!(next_multiple_of(0, 4), 0);
        assert_eq!(next_multiple_of(1, 4), 4);
        assert_eq!(next_multiple_of(4, 4), 4);
        assert_eq!(next_multiple_of(5, 4), 8);
        assert_eq!(next_multiple_of(45, 4), 48);
    }
}
