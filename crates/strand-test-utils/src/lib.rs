//! Test utilities and reference models for Strand development.
//!
//! Provides a [`ReferenceModel`] implementation of [`Sequence`] backed
//! by a plain `Vec<i32>`, a small operation language ([`Op`]) with
//! proptest strategies, and [`run_against_model`] which replays a
//! script against a container and the model in lockstep.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use strand_core::{
    CollectionError, EmptyCollectionError, IndexError, Operation, Sequence,
};

/// Oracle implementation of [`Sequence`].
///
/// Every operation is a direct `Vec` call guarded by the same bounds
/// checks the real containers use, so error values compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReferenceModel {
    items: Vec<i32>,
}

impl ReferenceModel {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn from_values(values: &[i32]) -> Self {
        Self {
            items: values.to_vec(),
        }
    }
}

impl Sequence for ReferenceModel {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn get(&self, index: usize) -> Result<i32, IndexError> {
        IndexError::check_element(Operation::Get, index, self.items.len())?;
        Ok(self.items[index])
    }

    fn set(&mut self, index: usize, value: i32) -> Result<(), IndexError> {
        IndexError::check_element(Operation::Set, index, self.items.len())?;
        self.items[index] = value;
        Ok(())
    }

    fn append(&mut self, value: i32) {
        self.items.push(value);
    }

    fn insert(&mut self, value: i32, index: usize) -> Result<(), IndexError> {
        IndexError::check_insert(index, self.items.len())?;
        self.items.insert(index, value);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<(), IndexError> {
        IndexError::check_element(Operation::Remove, index, self.items.len())?;
        self.items.remove(index);
        Ok(())
    }

    fn pop_at(&mut self, index: usize) -> Result<i32, IndexError> {
        IndexError::check_element(Operation::Pop, index, self.items.len())?;
        Ok(self.items.remove(index))
    }

    fn pop(&mut self) -> Result<i32, EmptyCollectionError> {
        self.items
            .pop()
            .ok_or(EmptyCollectionError::new(Operation::Pop))
    }

    fn min(&self) -> Result<i32, EmptyCollectionError> {
        self.items
            .iter()
            .copied()
            .min()
            .ok_or(EmptyCollectionError::new(Operation::Min))
    }

    fn max(&self) -> Result<i32, EmptyCollectionError> {
        self.items
            .iter()
            .copied()
            .max()
            .ok_or(EmptyCollectionError::new(Operation::Max))
    }

    fn to_vec(&self) -> Vec<i32> {
        self.items.clone()
    }
}

/// Result of applying one [`Op`]: the value it produced, if any, or the
/// error it signalled.
pub type Outcome = Result<Option<i32>, CollectionError>;

/// One step of a container script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Op {
    Append(i32),
    Insert { value: i32, index: usize },
    Get(usize),
    Set { index: usize, value: i32 },
    Remove(usize),
    PopAt(usize),
    Pop,
    Min,
    Max,
}

impl Op {
    /// Run this step against `seq`.
    pub fn apply<S: Sequence + ?Sized>(&self, seq: &mut S) -> Outcome {
        match *self {
            Op::Append(value) => {
                seq.append(value);
                Ok(None)
            }
            Op::Insert { value, index } => Ok(seq.insert(value, index).map(|_| None)?),
            Op::Get(index) => Ok(seq.get(index).map(Some)?),
            Op::Set { index, value } => Ok(seq.set(index, value).map(|_| None)?),
            Op::Remove(index) => Ok(seq.remove(index).map(|_| None)?),
            Op::PopAt(index) => Ok(seq.pop_at(index).map(Some)?),
            Op::Pop => Ok(seq.pop().map(Some)?),
            Op::Min => Ok(seq.min().map(Some)?),
            Op::Max => Ok(seq.max().map(Some)?),
        }
    }
}

/// Strategy for a single [`Op`].
///
/// Indices range a little past any length a short script reaches, so
/// rejected indices are exercised alongside valid ones. Appends and
/// inserts are weighted up so lists actually grow.
pub fn arb_op() -> impl Strategy<Value = Op> {
    let value = -50i32..50;
    let index = 0usize..24;
    prop_oneof![
        4 => value.clone().prop_map(Op::Append),
        3 => (value.clone(), index.clone()).prop_map(|(value, index)| Op::Insert { value, index }),
        2 => index.clone().prop_map(Op::Get),
        1 => (index.clone(), value).prop_map(|(index, value)| Op::Set { index, value }),
        2 => index.clone().prop_map(Op::Remove),
        2 => index.prop_map(Op::PopAt),
        2 => Just(Op::Pop),
        1 => Just(Op::Min),
        1 => Just(Op::Max),
    ]
}

/// Strategy for a script of up to `max_len` operations.
pub fn arb_script(max_len: usize) -> impl Strategy<Value = Vec<Op>> {
    proptest::collection::vec(arb_op(), 0..max_len)
}

/// Replay `script` against `seq` and a fresh [`ReferenceModel`],
/// failing on the first divergence in outcome, length or contents.
pub fn run_against_model<S: Sequence + ?Sized>(
    seq: &mut S,
    script: &[Op],
) -> Result<(), TestCaseError> {
    let mut model = ReferenceModel::new();
    for (step, op) in script.iter().enumerate() {
        let expected = op.apply(&mut model);
        let actual = op.apply(seq);
        prop_assert_eq!(&actual, &expected, "step {} {:?}", step, op);
        prop_assert_eq!(seq.len(), model.len(), "step {} {:?}", step, op);
        prop_assert_eq!(seq.to_vec(), model.to_vec(), "step {} {:?}", step, op);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_rejects_like_a_container() {
        let mut m = ReferenceModel::from_values(&[1, 2]);
        assert_eq!(
            Op::Get(2).apply(&mut m),
            Err(IndexError::new(Operation::Get, 2, 2).into())
        );
        assert_eq!(Op::Insert { value: 0, index: 2 }.apply(&mut m), Ok(None));
        assert_eq!(m.to_vec(), vec![1, 2, 0]);
    }

    #[test]
    fn model_pop_and_aggregates_on_empty() {
        let mut m = ReferenceModel::new();
        assert_eq!(
            Op::Pop.apply(&mut m),
            Err(EmptyCollectionError::new(Operation::Pop).into())
        );
        assert_eq!(
            Op::Min.apply(&mut m),
            Err(EmptyCollectionError::new(Operation::Min).into())
        );
    }

    #[test]
    fn model_agrees_with_itself() {
        let script = vec![
            Op::Append(3),
            Op::Insert { value: 1, index: 0 },
            Op::PopAt(1),
            Op::Max,
        ];
        let mut m = ReferenceModel::new();
        run_against_model(&mut m, &script).unwrap();
    }
}
