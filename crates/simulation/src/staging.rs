//! Draft/commit staging of user-edited parameters.
//!
//! Input forms edit a draft freely; computations only ever see the committed
//! snapshot, which changes on an explicit [`ParameterStage::commit`].

/// A draft value and its last committed snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStage<T> {
    draft: T,
    committed: T,
    revision: u64,
}

impl<T: Clone + PartialEq> ParameterStage<T> {
    /// Creates a stage whose draft and committed values are both `initial`.
    #[must_use]
    pub fn new(initial: T) -> Self {
        Self {
            draft: initial.clone(),
            committed: initial,
            revision: 0,
        }
    }

    /// Returns the draft.
    #[must_use]
    pub fn draft(&self) -> &T {
        &self.draft
    }

    /// Returns the draft for editing.
    pub fn draft_mut(&mut self) -> &mut T {
        &mut self.draft
    }

    /// Replaces the draft.
    pub fn set_draft(&mut self, draft: T) {
        self.draft = draft;
    }

    /// Returns the committed snapshot.
    #[must_use]
    pub fn committed(&self) -> &T {
        &self.committed
    }

    /// Number of commits that changed the snapshot.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Checks whether the draft differs from the committed snapshot.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.committed
    }

    /// Copies the draft into the committed snapshot and returns it.
    pub fn commit(&mut self) -> &T {
        if self.is_dirty() {
            self.committed = self.draft.clone();
            self.revision += 1;
        }
        &self.committed
    }

    /// Throws away draft edits, resetting the draft to the snapshot.
    pub fn discard(&mut self) {
        self.draft = self.committed.clone();
    }
}

impl<T: Clone + PartialEq + Default> Default for ParameterStage<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fin_planner_domain::enums::ResamplePeriod;
    use fin_planner_domain::value_objects::SimulationParameters;

    #[test]
    fn test_draft_edits_do_not_reach_committed() {
        let mut stage = ParameterStage::<SimulationParameters>::default();
        stage.draft_mut().recurring_deposit = 500.0;

        assert!(stage.is_dirty());
        assert_eq!(stage.committed().recurring_deposit, 300.0);
        assert_eq!(stage.draft().recurring_deposit, 500.0);
    }

    #[test]
    fn test_commit_publishes_draft() {
        let mut stage = ParameterStage::<SimulationParameters>::default();
        stage.draft_mut().resample_period = ResamplePeriod::Yearly;

        let committed = *stage.commit();

        assert_eq!(committed.resample_period, ResamplePeriod::Yearly);
        assert!(!stage.is_dirty());
        assert_eq!(stage.revision(), 1);
    }

    #[test]
    fn test_commit_without_changes_keeps_revision() {
        let mut stage = ParameterStage::new(5u32);
        stage.commit();
        assert_eq!(stage.revision(), 0);

        stage.set_draft(6);
        stage.commit();
        stage.commit();
        assert_eq!(stage.revision(), 1);
        assert_eq!(*stage.committed(), 6);
    }

    #[test]
    fn test_discard_restores_snapshot() {
        let mut stage = ParameterStage::new(String::from("a"));
        stage.set_draft(String::from("b"));
        stage.discard();

        assert_eq!(stage.draft(), "a");
        assert!(!stage.is_dirty());
    }
}
