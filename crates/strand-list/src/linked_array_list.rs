//! Doubly linked list whose nodes each own one [`ArrayList`].

use std::fmt;

use strand_array::ArrayList;
use strand_core::{IndexError, Operation};

use crate::chain::{Chain, Iter};

/// A doubly linked list of independently owned [`ArrayList`]s.
///
/// Each node embeds its array by value: no two nodes share storage, so
/// mutating the array at one index is never observable through another.
/// Cloning deep-copies every inner array.
#[derive(Clone, Default)]
pub struct LinkedArrayList {
    chain: Chain<ArrayList>,
}

impl LinkedArrayList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self {
            chain: Chain::new(),
        }
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Alias for [`len`](Self::len).
    pub fn length(&self) -> usize {
        self.chain.len()
    }

    /// `true` when the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.chain.len() == 0
    }

    /// Link a new node after the tail owning an array built from `values`.
    pub fn append(&mut self, values: impl Into<ArrayList>) {
        self.chain.push_back(values.into());
    }

    /// The array owned by the node at `index`.
    pub fn get(&self, index: usize) -> Result<&ArrayList, IndexError> {
        self.chain
            .get(index)
            .ok_or(IndexError::new(Operation::Get, index, self.len()))
    }

    /// Exclusive access to the array owned by the node at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut ArrayList, IndexError> {
        let len = self.len();
        self.chain
            .get_mut(index)
            .ok_or(IndexError::new(Operation::Get, index, len))
    }

    /// Unlink the node at `index` and hand its array to the caller.
    pub fn remove(&mut self, index: usize) -> Result<ArrayList, IndexError> {
        let len = self.len();
        let array = self
            .chain
            .remove(index)
            .ok_or(IndexError::new(Operation::Remove, index, len))?;
        log::debug!(
            "linked_array_list: removed node {index} holding {} elements",
            array.len()
        );
        Ok(array)
    }

    /// Iterate over the owned arrays, head to tail.
    pub fn iter(&self) -> Iter<'_, ArrayList> {
        self.chain.iter()
    }

    /// Drop every node together with its array.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Write the list to stdout, one array per line.
    pub fn print(&self) {
        println!("{self}");
    }
}

impl<'a> IntoIterator for &'a LinkedArrayList {
    type Item = &'a ArrayList;
    type IntoIter = Iter<'a, ArrayList>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: Into<ArrayList>> FromIterator<A> for LinkedArrayList {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        let mut list = Self::new();
        for values in iter {
            list.append(values);
        }
        list
    }
}

impl PartialEq for LinkedArrayList {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedArrayList {}

impl fmt::Debug for LinkedArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// ```text
/// [
///  ArrayList([1, 2])
///  ArrayList([4, 5, 6])
/// ]
/// ```
impl fmt::Display for LinkedArrayList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[")?;
        for array in self.iter() {
            writeln!(f, " {array}")?;
        }
        f.write_str("]")
    }
}
