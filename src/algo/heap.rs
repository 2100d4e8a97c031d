/// Entry of a [`MinHeap`]: an arbitrary key ordered by a numeric priority
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeapItem<K> {
    pub key: K,
    pub priority: f64,
}

impl<K> HeapItem<K> {
    pub fn new(key: K, priority: f64) -> Self {
        Self { key, priority }
    }
}

/// Array-backed binary min-heap over [`HeapItem`]s.
///
/// There is no decrease-key: users push a key again with its improved priority and
/// skip outdated entries when they are popped (lazy deletion).
/// Items with equal priority are popped in no particular order.
///
/// ```
/// use textgraphs::algo::*;
///
/// let mut heap = MinHeap::new();
/// heap.push(HeapItem::new("b", 2.0));
/// heap.push(HeapItem::new("a", 1.0));
///
/// assert_eq!(heap.pop().map(|x| x.key), Some("a"));
/// assert_eq!(heap.pop().map(|x| x.key), Some("b"));
/// assert!(heap.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct MinHeap<K> {
    items: Vec<HeapItem<K>>,
}

impl<K> Default for MinHeap<K> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<K> MinHeap<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the item with minimum priority without removing it
    pub fn peek(&self) -> Option<&HeapItem<K>> {
        self.items.first()
    }

    /// Inserts an item in `O(log n)`
    pub fn push(&mut self, item: HeapItem<K>) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the item with minimum priority in `O(log n)`
    pub fn pop(&mut self) -> Option<HeapItem<K>> {
        if self.items.is_empty() {
            return None;
        }

        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();

        if !self.items.is_empty() {
            self.sift_down(0);
        }

        top
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[idx].priority < self.items[parent].priority {
                self.items.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.items[left].priority < self.items[smallest].priority {
                smallest = left;
            }
            if right < len && self.items[right].priority < self.items[smallest].priority {
                smallest = right;
            }

            if smallest == idx {
                break;
            }

            self.items.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<K> Extend<HeapItem<K>> for MinHeap<K> {
    fn extend<I: IntoIterator<Item = HeapItem<K>>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<K> FromIterator<HeapItem<K>> for MinHeap<K> {
    fn from_iter<I: IntoIterator<Item = HeapItem<K>>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}
