/*!
A max heap over some subset of a fixed collection of indexed values.

The values stay in place and are indexed by their position, and the heap itself holds indices.
A companion vector tracks where (if anywhere) each index currently sits on the heap, so an index may be moved on or off the heap, or have its value revised, without a search.

The [CDCL backend](crate::backend::cdcl) keeps variables on an index heap, valued by activity, as it is a useful heuristic to decide on the most active variable without a value.

Ties are broken in favour of the lower index.

```rust
# use ordered_ramsey::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();
heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

#[derive(Clone, Debug)]
pub struct IndexHeap<V: PartialOrd + Default> {
    values: Vec<V>,
    position_in_heap: Vec<Option<usize>>,
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Sets the value at `index`, growing the store as needed.
    ///
    /// Returns true if `index` was fresh.
    /// A fresh index is not on the heap until [activated](IndexHeap::activate).
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = index >= self.values.len();
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.position_in_heap.resize(index + 1, None);
        }
        self.values[index] = value;
        if !fresh {
            self.heapify_if_active(index);
        }
        fresh
    }

    /// Places `index` on the heap, returning true if it was not already on the heap.
    ///
    /// `index` must have been [added](IndexHeap::add).
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position_in_heap[index] {
            Some(_) => false,
            None => {
                self.position_in_heap[index] = Some(self.heap.len());
                self.heap.push(index);
                self.sift_up(self.heap.len() - 1);
                true
            }
        }
    }

    /// Removes `index` from the heap, returning true if it was on the heap.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(position) = self.position_in_heap.get(index).copied().flatten() else {
            return false;
        };

        match self.heap.pop() {
            Some(last) if last != index => {
                self.heap[position] = last;
                self.position_in_heap[last] = Some(position);
                self.sift_down(position);
                self.sift_up(position);
            }
            _ => {}
        }
        self.position_in_heap[index] = None;
        true
    }

    /// The index with the greatest value on the heap, if any.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the index with the greatest value on the heap, if any.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Applies `f` to the value at `index`, and restores the heap.
    pub fn apply_to_value_at(&mut self, index: usize, f: impl Fn(&V) -> V) {
        self.values[index] = f(&self.values[index]);
        self.heapify_if_active(index);
    }

    /// Applies `f` to every value.
    ///
    /// `f` should preserve the order of values, as the heap is not restored.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Restores the heap around `index`, if on the heap.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(position) = self.position_in_heap[index] {
            self.sift_up(position);
            if let Some(position) = self.position_in_heap[index] {
                self.sift_down(position);
            }
        }
    }

    /// A count of indexed values, on the heap or not.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of indices on the heap.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Whether the index at heap position `a` belongs above the index at heap position `b`.
    fn above(&self, a: usize, b: usize) -> bool {
        let (a, b) = (self.heap[a], self.heap[b]);
        self.values[a] > self.values[b] || (self.values[a] == self.values[b] && a < b)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position_in_heap[self.heap[a]] = Some(a);
        self.position_in_heap[self.heap[b]] = Some(b);
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if !self.above(position, parent) {
                break;
            }
            self.swap(position, parent);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut largest = position;

            if left < self.heap.len() && self.above(left, largest) {
                largest = left;
            }
            if right < self.heap.len() && self.above(right, largest) {
                largest = right;
            }
            if largest == position {
                break;
            }
            self.swap(position, largest);
            position = largest;
        }
    }
}
