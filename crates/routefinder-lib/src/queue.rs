//! Priority queue facade over [`Heap`].

use std::fmt;

use crate::heap::Heap;

/// Minimal queue interface shared by queue implementations.
pub trait Queue {
    type Item;

    /// Add an element; returns `true` once it has been accepted.
    fn enqueue(&mut self, element: Self::Item) -> bool;

    /// Remove the next element in queue order.
    fn dequeue(&mut self) -> Option<Self::Item>;

    fn peek(&self) -> Option<&Self::Item>;

    fn is_empty(&self) -> bool;
}

/// Queue that always yields the element ranked first by its predicate.
///
/// There is no deduplication: enqueueing the same value twice stores it twice.
pub struct PriorityQueue<T, F> {
    heap: Heap<T, F>,
}

impl<T, F> PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    pub fn new(less: F) -> Self {
        Self {
            heap: Heap::new(less),
        }
    }

    /// Seed the queue with initial elements.
    pub fn with_elements(less: F, elements: Vec<T>) -> Self {
        Self {
            heap: Heap::from_vec(less, elements),
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}

impl<T, F> Queue for PriorityQueue<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    type Item = T;

    fn enqueue(&mut self, element: T) -> bool {
        self.heap.insert(element);
        true
    }

    fn dequeue(&mut self) -> Option<T> {
        self.heap.remove_root()
    }

    fn peek(&self) -> Option<&T> {
        self.heap.peek()
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for PriorityQueue<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("heap", &self.heap)
            .finish()
    }
}
