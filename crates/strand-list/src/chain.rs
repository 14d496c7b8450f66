//! Container-owned doubly linked node storage.
//!
//! A [`Chain`] keeps its nodes in a slot vector and links them by slot
//! index. Vacated slots go on a free list and are reused by the next
//! insertion. Once live nodes fall below a quarter of the slots, the
//! chain is compacted into an exactly-sized slot vector; when it empties,
//! the slot storage is released.

use std::iter::FusedIterator;

use strand_core::{plan, End};

/// Slot index of a neighbouring node, `None` at either end.
type Link = Option<usize>;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    prev: Link,
    next: Link,
}

/// Doubly linked sequence of `T` with head/tail tracking.
///
/// Invariants:
/// - `len == 0` iff `head` and `tail` are both `None`.
/// - the head's `prev` and the tail's `next` are `None`.
/// - following `next` from `head` visits exactly `len` live slots and
///   ends at `tail`; `prev` is the exact reverse.
/// - every vacated slot index is on `free` exactly once.
/// - after any removal, `len == 0` or `len >= slots.len() / 4`.
#[derive(Clone, Debug)]
pub(crate) struct Chain<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Link,
    tail: Link,
    len: usize,
}

impl<T> Chain<T> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn push_back(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => self.set_next(tail, Some(slot)),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    pub(crate) fn push_front(&mut self, value: T) {
        let slot = self.alloc(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => self.set_prev(head, Some(slot)),
            None => self.tail = Some(slot),
        }
        self.head = Some(slot);
        self.len += 1;
    }

    /// Insert `value` so it ends up at position `index`.
    ///
    /// Callers bounds-check first; an `index` past the end appends.
    pub(crate) fn insert(&mut self, index: usize, value: T) {
        if index == 0 {
            self.push_front(value);
        } else if index >= self.len {
            self.push_back(value);
        } else {
            match self.locate(index) {
                Some(at) => self.insert_before(at, value),
                None => {
                    debug_assert!(false, "broken link walking to interior index {index}");
                    self.push_back(value);
                }
            }
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&T> {
        let slot = self.locate(index)?;
        self.node(slot).map(|n| &n.value)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        let slot = self.locate(index)?;
        self.node_mut(slot).map(|n| &mut n.value)
    }

    pub(crate) fn front(&self) -> Option<&T> {
        self.node(self.head?).map(|n| &n.value)
    }

    pub(crate) fn back(&self) -> Option<&T> {
        self.node(self.tail?).map(|n| &n.value)
    }

    /// Unlink and return the value at `index`.
    pub(crate) fn remove(&mut self, index: usize) -> Option<T> {
        let slot = self.locate(index)?;
        self.unlink(slot)
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        let slot = self.tail?;
        self.unlink(slot)
    }

    /// Drop every node and release the slot storage.
    pub(crate) fn clear(&mut self) {
        self.slots = Vec::new();
        self.free = Vec::new();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            chain: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        }
    }

    /// Slot of the node at `index`, walking from the nearer end.
    fn locate(&self, index: usize) -> Option<usize> {
        let route = plan(self.len, index)?;
        let mut slot = match route.start {
            End::Head => self.head?,
            End::Tail => self.tail?,
        };
        for _ in 0..route.steps {
            let node = self.node(slot)?;
            slot = match route.start {
                End::Head => node.next?,
                End::Tail => node.prev?,
            };
        }
        Some(slot)
    }

    fn insert_before(&mut self, at: usize, value: T) {
        let prev = self.node(at).and_then(|n| n.prev);
        let slot = self.alloc(Node {
            value,
            prev,
            next: Some(at),
        });
        self.set_prev(at, Some(slot));
        match prev {
            Some(p) => self.set_next(p, Some(slot)),
            None => self.head = Some(slot),
        }
        self.len += 1;
    }

    /// Take the node out of `slot`, splice its neighbours together and
    /// return its value. The node itself is dropped here.
    fn unlink(&mut self, slot: usize) -> Option<T> {
        let node = self.slots.get_mut(slot)?.take()?;
        match node.prev {
            Some(p) => self.set_next(p, node.next),
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.set_prev(n, node.prev),
            None => self.tail = node.prev,
        }
        self.len -= 1;
        if self.len == 0 {
            self.slots = Vec::new();
            self.free = Vec::new();
        } else {
            self.free.push(slot);
            if self.len < self.slots.len() / 4 {
                self.compact();
            }
        }
        Some(node.value)
    }

    /// Move the live nodes into a fresh, exactly-sized slot vector in
    /// chain order and drop the vacated slots. Node `i` lands in slot `i`.
    fn compact(&mut self) {
        log::trace!("chain compact: slots {} -> {}", self.slots.len(), self.len);
        let mut old = std::mem::take(&mut self.slots);
        let mut slots = Vec::with_capacity(self.len);
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let Some(node) = old.get_mut(slot).and_then(Option::take) else {
                break;
            };
            cursor = node.next;
            let index = slots.len();
            slots.push(Some(Node {
                value: node.value,
                prev: index.checked_sub(1),
                next: None,
            }));
            if let Some(Some(prev)) = index.checked_sub(1).and_then(|p| slots.get_mut(p)) {
                prev.next = Some(index);
            }
        }
        debug_assert_eq!(slots.len(), self.len, "compaction lost nodes");
        self.len = slots.len();
        self.head = if slots.is_empty() { None } else { Some(0) };
        self.tail = slots.len().checked_sub(1);
        self.slots = slots;
        self.free = Vec::new();
    }

    fn alloc(&mut self, node: Node<T>) -> usize {
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                slot
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    fn node(&self, slot: usize) -> Option<&Node<T>> {
        self.slots.get(slot)?.as_ref()
    }

    fn node_mut(&mut self, slot: usize) -> Option<&mut Node<T>> {
        self.slots.get_mut(slot)?.as_mut()
    }

    fn set_next(&mut self, slot: usize, next: Link) {
        if let Some(node) = self.node_mut(slot) {
            node.next = next;
        }
    }

    fn set_prev(&mut self, slot: usize, prev: Link) {
        if let Some(node) = self.node_mut(slot) {
            node.prev = prev;
        }
    }

    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Walk both directions and check every structural invariant.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        assert_eq!(self.len == 0, self.head.is_none());
        assert_eq!(self.len == 0, self.tail.is_none());

        let mut forward = Vec::new();
        let mut prev = None;
        let mut cursor = self.head;
        while let Some(slot) = cursor {
            let node = self.node(slot).expect("linked slot is live");
            assert_eq!(node.prev, prev, "prev link of slot {slot}");
            forward.push(slot);
            prev = Some(slot);
            cursor = node.next;
            assert!(forward.len() <= self.len, "cycle in forward links");
        }
        assert_eq!(forward.len(), self.len);
        assert_eq!(prev, self.tail);

        let live = self.slots.iter().filter(|s| s.is_some()).count();
        assert_eq!(live, self.len);
        assert_eq!(live + self.free.len(), self.slots.len());
        assert!(
            self.len == 0 || self.len >= self.slots.len() / 4,
            "{} live nodes in {} slots",
            self.len,
            self.slots.len()
        );
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator over the values of a linked container, head to tail.
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    chain: &'a Chain<T>,
    front: Link,
    back: Link,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.front?)?;
        self.front = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.chain.node(self.back?)?;
        self.back = node.prev;
        self.remaining -= 1;
        Some(&node.value)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
