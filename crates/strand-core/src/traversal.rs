//! Nearest-end traversal planning for index-addressed linked chains.
//!
//! A doubly linked chain can reach position `i` either by following
//! `i` forward links from the head or `len - 1 - i` backward links from
//! the tail. [`plan`] picks the shorter walk. It is a pure function of
//! `(len, index)` so the choice can be tested without any node storage.

/// Which end of the chain a walk starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    /// Start at the head and follow forward links.
    Head,
    /// Start at the tail and follow backward links.
    Tail,
}

/// A walk to one position: the starting end and the number of hops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraversalPlan {
    /// End the walk starts from.
    pub start: End,
    /// Links to follow from `start`.
    pub steps: usize,
}

impl TraversalPlan {
    /// The index this plan lands on in a chain of length `len`.
    pub fn target(&self, len: usize) -> usize {
        match self.start {
            End::Head => self.steps,
            End::Tail => len - 1 - self.steps,
        }
    }
}

/// Plan the walk to `index` in a chain of `len` nodes.
///
/// The head side is chosen when `index <= len / 2`, so a walk never
/// takes more than `len / 2` hops. Returns `None` when `index >= len`.
pub fn plan(len: usize, index: usize) -> Option<TraversalPlan> {
    if index >= len {
        return None;
    }
    if index <= len / 2 {
        Some(TraversalPlan {
            start: End::Head,
            steps: index,
        })
    } else {
        Some(TraversalPlan {
            start: End::Tail,
            steps: len - 1 - index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_has_no_plan() {
        assert_eq!(plan(0, 0), None);
        assert_eq!(plan(5, 5), None);
        assert_eq!(plan(5, 100), None);
    }

    #[test]
    fn single_node_is_head_with_no_hops() {
        assert_eq!(
            plan(1, 0),
            Some(TraversalPlan {
                start: End::Head,
                steps: 0
            })
        );
    }

    #[test]
    fn midpoint_walks_from_head() {
        // len 4: index 2 == len/2 takes the head side even though the
        // tail is one hop closer.
        let p = plan(4, 2).unwrap();
        assert_eq!(p.start, End::Head);
        assert_eq!(p.steps, 2);

        let p = plan(5, 2).unwrap();
        assert_eq!(p.start, End::Head);
    }

    #[test]
    fn last_index_is_tail_with_no_hops() {
        let p = plan(10, 9).unwrap();
        assert_eq!(p.start, End::Tail);
        assert_eq!(p.steps, 0);
    }

    #[test]
    fn just_past_half_walks_from_tail() {
        let p = plan(10, 6).unwrap();
        assert_eq!(p.start, End::Tail);
        assert_eq!(p.steps, 3);
        assert_eq!(p.target(10), 6);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn plan_lands_on_requested_index(len in 1usize..10_000, seed in any::<usize>()) {
                let index = seed % len;
                let p = plan(len, index).unwrap();
                prop_assert_eq!(p.target(len), index);
            }

            #[test]
            fn plan_never_exceeds_half_the_chain(len in 1usize..10_000, seed in any::<usize>()) {
                let index = seed % len;
                let p = plan(len, index).unwrap();
                prop_assert!(p.steps <= len / 2);
            }
        }
    }
}
