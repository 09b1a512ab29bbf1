/// Find the `n`-th highest value (1-indexed) of `scores` without sorting.
///
/// The first `n` slots of the slice are turned into a bounded min-heap, and
/// every later value larger than the heap root replaces it. Once the scan is
/// done the root is the smallest of the `n` largest values, which is exactly
/// the value at rank `n` in descending order. Ties are not collapsed: with
/// scores `[9, 7, 7, 3]`, rank 2 and rank 3 are both `7`.
///
/// Returns `None` if `n` is zero or exceeds the number of scores. The slice is
/// reordered in place.
pub fn nth_highest<T: Ord + Copy>(scores: &mut [T], n: usize) -> Option<T> {
    if n == 0 || n > scores.len() {
        return None;
    }

    let (heap, rest) = scores.split_at_mut(n);
    for parent in (0..n / 2).rev() {
        sift_down(heap, parent);
    }
    debug_assert!(is_min_heap(heap));

    for &score in rest.iter() {
        if score > heap[0] {
            heap[0] = score;
            sift_down(heap, 0);
        }
    }
    debug_assert!(is_min_heap(heap));

    Some(heap[0])
}

fn is_min_heap<T: Ord>(heap: &[T]) -> bool {
    (1..heap.len()).all(|child| heap[(child - 1) / 2] <= heap[child])
}

fn sift_down<T: Ord>(heap: &mut [T], mut index: usize) {
    loop {
        let left = 2 * index + 1;
        let right = left + 1;

        let mut smallest = index;
        if left < heap.len() && heap[left] < heap[smallest] {
            smallest = left;
        }
        if right < heap.len() && heap[right] < heap[smallest] {
            smallest = right;
        }
        if smallest == index {
            return;
        }
        heap.swap(index, smallest);
        index = smallest;
    }
}
