//! Array-backed binary heap ordered by a caller-supplied predicate.
//!
//! The heap keeps the element for which `less(root, other)` never fails at
//! index zero. Passing `|a, b| a < b` yields a min-heap, `|a, b| a > b` a
//! max-heap. The predicate must be a strict ordering; [`Heap::find`] in
//! particular relies on it being stable while elements sit in the heap.

use std::fmt;

/// Binary heap parameterized by an ordering predicate.
pub struct Heap<T, F> {
    elements: Vec<T>,
    less: F,
}

impl<T, F> Heap<T, F>
where
    F: Fn(&T, &T) -> bool,
{
    /// Create an empty heap ordered by `less`.
    pub fn new(less: F) -> Self {
        Self {
            elements: Vec::new(),
            less,
        }
    }

    /// Build a heap from an unordered list of elements in O(n).
    pub fn from_vec(less: F, elements: Vec<T>) -> Self {
        let mut heap = Self { elements, less };
        for index in (0..heap.elements.len() / 2).rev() {
            heap.sift_down(index);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Root element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Append `element` and restore the heap order.
    pub fn insert(&mut self, element: T) {
        self.elements.push(element);
        let last = self.elements.len() - 1;
        self.sift_up(last);
    }

    /// Remove and return the root element.
    pub fn remove_root(&mut self) -> Option<T> {
        if self.elements.is_empty() {
            return None;
        }
        let last = self.elements.len() - 1;
        self.elements.swap(0, last);
        let root = self.elements.pop();
        self.sift_down(0);
        root
    }

    /// Remove and return the element stored at `index`.
    ///
    /// The replacement element is sifted in both directions; at most one of
    /// the two passes moves anything.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let len = self.elements.len();
        if index >= len {
            return None;
        }
        if index == len - 1 {
            return self.elements.pop();
        }
        self.elements.swap(index, len - 1);
        let removed = self.elements.pop();
        self.sift_down(index);
        self.sift_up(index);
        removed
    }

    /// Consume the heap, returning its elements in heap (not sorted) order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    fn sift_up(&mut self, index: usize) {
        let mut child = index;
        while child > 0 {
            let parent = parent_index(child);
            if !(self.less)(&self.elements[child], &self.elements[parent]) {
                break;
            }
            self.elements.swap(child, parent);
            child = parent;
        }
    }

    fn sift_down(&mut self, index: usize) {
        let len = self.elements.len();
        let mut parent = index;
        loop {
            let left = left_child_index(parent);
            let right = right_child_index(parent);
            let mut candidate = parent;

            if left < len && (self.less)(&self.elements[left], &self.elements[candidate]) {
                candidate = left;
            }
            if right < len && (self.less)(&self.elements[right], &self.elements[candidate]) {
                candidate = right;
            }
            if candidate == parent {
                return;
            }

            self.elements.swap(parent, candidate);
            parent = candidate;
        }
    }
}

impl<T, F> Heap<T, F>
where
    T: PartialEq,
    F: Fn(&T, &T) -> bool,
{
    /// Locate `target`, pruning subtrees whose root already orders after it.
    ///
    /// Worst case O(n). Only complete while the ordering of stored elements
    /// does not change underneath the heap.
    pub fn find(&self, target: &T) -> Option<usize> {
        self.find_from(target, 0)
    }

    fn find_from(&self, target: &T, index: usize) -> Option<usize> {
        let element = self.elements.get(index)?;
        if (self.less)(target, element) {
            return None;
        }
        if element == target {
            return Some(index);
        }
        self.find_from(target, left_child_index(index))
            .or_else(|| self.find_from(target, right_child_index(index)))
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Heap<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

fn parent_index(child: usize) -> usize {
    (child - 1) / 2
}

fn left_child_index(parent: usize) -> usize {
    2 * parent + 1
}

fn right_child_index(parent: usize) -> usize {
    2 * parent + 2
}
