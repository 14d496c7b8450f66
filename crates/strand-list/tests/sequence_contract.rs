//! The index-based contract, checked against both sequence containers.

use strand_array::ArrayList;
use strand_core::{CollectionError, EmptyCollectionError, IndexError, Operation, Sequence};
use strand_list::{LinkedArrayList, LinkedList};
use strand_test_utils::fixtures::{ascending, PRIMES};

fn filled<S: Sequence + Default>(values: &[i32]) -> S {
    let mut seq = S::default();
    for &v in values {
        seq.append(v);
    }
    seq
}

fn appends_read_back_in_order<S: Sequence + Default>() {
    let seq: S = filled(&PRIMES);
    assert_eq!(seq.len(), PRIMES.len());
    for (i, &p) in PRIMES.iter().enumerate() {
        assert_eq!(seq.get(i), Ok(p));
    }
}

fn insert_shifts_tail_right<S: Sequence + Default>() {
    let mut seq: S = filled(&ascending(6));
    seq.insert(100, 2).unwrap();
    assert_eq!(seq.get(2), Ok(100));
    assert_eq!(seq.to_vec(), vec![0, 1, 100, 2, 3, 4, 5]);
}

fn remove_shifts_tail_left<S: Sequence + Default>() {
    let mut seq: S = filled(&ascending(6));
    seq.remove(2).unwrap();
    assert_eq!(seq.len(), 5);
    assert_eq!(seq.to_vec(), vec![0, 1, 3, 4, 5]);
}

fn rejected_operations_leave_contents_alone<S: Sequence + Default>() {
    let mut seq: S = filled(&[1, 2, 3]);
    assert_eq!(seq.get(3), Err(IndexError::new(Operation::Get, 3, 3)));
    assert_eq!(seq.insert(0, 4), Err(IndexError::new(Operation::Insert, 4, 3)));
    assert_eq!(seq.remove(3), Err(IndexError::new(Operation::Remove, 3, 3)));
    assert_eq!(seq.pop_at(3), Err(IndexError::new(Operation::Pop, 3, 3)));
    assert_eq!(seq.to_vec(), vec![1, 2, 3]);

    let mut empty = S::default();
    assert_eq!(empty.pop(), Err(EmptyCollectionError::new(Operation::Pop)));
    assert_eq!(empty.min(), Err(EmptyCollectionError::new(Operation::Min)));
    assert_eq!(empty.max(), Err(EmptyCollectionError::new(Operation::Max)));
}

fn mixed_errors_unify<S: Sequence + Default>() -> Result<i32, CollectionError> {
    let mut seq: S = filled(&[4, 8]);
    let first = seq.pop_at(0)?;
    let last = seq.pop()?;
    seq.pop()?;
    Ok(first + last)
}

macro_rules! contract_tests {
    ($name:ident, $ty:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn appends_read_back_in_order() {
                super::appends_read_back_in_order::<$ty>();
            }

            #[test]
            fn insert_shifts_tail_right() {
                super::insert_shifts_tail_right::<$ty>();
            }

            #[test]
            fn remove_shifts_tail_left() {
                super::remove_shifts_tail_left::<$ty>();
            }

            #[test]
            fn rejected_operations_leave_contents_alone() {
                super::rejected_operations_leave_contents_alone::<$ty>();
            }

            #[test]
            fn third_pop_surfaces_empty_through_umbrella_error() {
                assert_eq!(
                    super::mixed_errors_unify::<$ty>(),
                    Err(CollectionError::Empty(EmptyCollectionError::new(
                        Operation::Pop
                    )))
                );
            }
        }
    };
}

contract_tests!(array_list, ArrayList);
contract_tests!(linked_list, LinkedList);

#[test]
fn array_and_list_render_differently() {
    let array = ArrayList::from(vec![1, 2, 3]);
    let list = LinkedList::from(vec![1, 2, 3]);
    assert_eq!(array.to_string(), "ArrayList([1, 2, 3])");
    assert_eq!(list.to_string(), "[1, 2, 3]");
}

#[cfg(not(miri))]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pop_at_matches_read_then_remove(
            values in proptest::collection::vec(-100i32..100, 1..40),
            seed in any::<usize>(),
        ) {
            let index = seed % values.len();
            for_each_kind(&values, index)?;
        }

        #[test]
        fn nested_arrays_stay_isolated(
            rows in proptest::collection::vec(proptest::collection::vec(-10i32..10, 0..8), 1..8),
            pick in any::<usize>(),
            extra in proptest::collection::vec(-10i32..10, 1..8),
        ) {
            let mut list: LinkedArrayList = rows.iter().cloned().collect();
            let k = pick % rows.len();
            for &v in &extra {
                list.get_mut(k).unwrap().append(v);
            }
            list.get_mut(k).unwrap().insert(42, 0).unwrap();
            for (j, row) in rows.iter().enumerate() {
                let inner = list.get(j).unwrap();
                if j == k {
                    prop_assert_eq!(inner.len(), row.len() + extra.len() + 1);
                } else {
                    prop_assert_eq!(&inner.to_vec(), row);
                }
            }
        }
    }

    fn for_each_kind(values: &[i32], index: usize) -> Result<(), TestCaseError> {
        check_pop_at::<ArrayList>(values, index)?;
        check_pop_at::<LinkedList>(values, index)
    }

    fn check_pop_at<S: Sequence + Default>(values: &[i32], index: usize) -> Result<(), TestCaseError> {
        let mut popped: S = filled(values);
        let mut removed: S = filled(values);
        let expected = removed.get(index).unwrap();
        removed.remove(index).unwrap();
        prop_assert_eq!(popped.pop_at(index), Ok(expected));
        prop_assert_eq!(popped.to_vec(), removed.to_vec());
        Ok(())
    }
}
