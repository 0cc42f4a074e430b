/// The goal of a problem: either one target state or a set of acceptable
/// target states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Goal<S> {
    Single(S),
    AnyOf(Vec<S>),
}

impl<S: PartialEq> Goal<S> {
    /// Returns true if the goal is satisfied by the given state.
    pub fn is_satisfied(&self, state: &S) -> bool {
        match self {
            Goal::Single(target) => target == state,
            Goal::AnyOf(targets) => targets.iter().any(|target| target == state),
        }
    }
}

impl<S> Goal<S> {
    /// Iterate over the acceptable target states.
    pub fn targets(&self) -> impl Iterator<Item = &S> {
        match self {
            Goal::Single(target) => std::slice::from_ref(target).iter(),
            Goal::AnyOf(targets) => targets.iter(),
        }
    }
}

impl<S> From<S> for Goal<S> {
    fn from(state: S) -> Self {
        Goal::Single(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_goal() {
        let goal = Goal::Single(3);
        assert!(goal.is_satisfied(&3));
        assert!(!goal.is_satisfied(&4));
        assert_eq!(goal.targets().count(), 1);
    }

    #[test]
    fn any_of_goal() {
        let goal = Goal::AnyOf(vec![1, 5, 7]);
        assert!(goal.is_satisfied(&5));
        assert!(!goal.is_satisfied(&6));
        assert_eq!(goal.targets().copied().collect::<Vec<_>>(), vec![1, 5, 7]);
    }

    #[test]
    fn empty_any_of_is_never_satisfied() {
        let goal: Goal<u32> = Goal::AnyOf(vec![]);
        assert!(!goal.is_satisfied(&0));
    }
}
