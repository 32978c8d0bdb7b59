//! Reducer trait for state containers driven by a tagged action union.

/// Pure, total state transition.
///
/// - **Input**: the current state and one action.
/// - **Output**: the next state.
///
/// Reducers must not perform IO or side effects, and must be defined for every
/// `(state, action)` pair: invalid arguments are normalized by the reducer
/// itself rather than rejected. Side effects (persistence, notifications,
/// re-rendering) belong to whoever owns the state and commits the result.
pub trait Reducer: Sized {
    type Action: Clone + core::fmt::Debug;

    /// Compute the next state from `self` and a single action.
    ///
    /// This must not mutate `self`; the caller decides when to commit.
    fn reduce(&self, action: &Self::Action) -> Self;

    /// Apply a sequence of actions left to right.
    fn fold<'a, I>(&self, actions: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Action>,
        Self: Clone,
        Self::Action: 'a,
    {
        actions
            .into_iter()
            .fold(self.clone(), |state, action| state.reduce(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter(i64);

    #[derive(Debug, Clone)]
    enum CounterAction {
        Increment,
        Reset,
    }

    impl Reducer for Counter {
        type Action = CounterAction;

        fn reduce(&self, action: &Self::Action) -> Self {
            match action {
                CounterAction::Increment => Counter(self.0 + 1),
                CounterAction::Reset => Counter(0),
            }
        }
    }

    #[test]
    fn fold_applies_actions_in_order() {
        let actions = [
            CounterAction::Increment,
            CounterAction::Increment,
            CounterAction::Reset,
            CounterAction::Increment,
        ];
        assert_eq!(Counter(5).fold(&actions), Counter(1));
    }

    #[test]
    fn reduce_leaves_the_input_untouched() {
        let start = Counter(3);
        let next = start.reduce(&CounterAction::Increment);
        assert_eq!(start, Counter(3));
        assert_eq!(next, Counter(4));
    }
}
