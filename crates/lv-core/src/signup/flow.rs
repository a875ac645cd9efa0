use serde::{Deserialize, Serialize};

use crate::form::StepValues;
use crate::signup::{AdvanceError, WizardState};
use crate::user::UserDraft;
use crate::validation::Schema;

/// What a successful advance produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Moved on to the given step.
    Next(usize),
    /// The last step completed; the draft is fully accumulated and the
    /// caller should trigger submission.
    ReadyToSubmit,
}

/// Pure step accumulator.
///
/// Starts at step 0 with an empty draft. Each `advance` validates one
/// step's values against that step's schema, merges them on success and
/// moves the pointer forward. Validation failure leaves both the draft and
/// the pointer untouched. Reaching the step count transitions to the
/// terminal `Complete` state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepFlow {
    total_steps: usize,
    state: WizardState,
    draft: UserDraft,
}

impl StepFlow {
    /// A flow with `total_steps` steps (at least one).
    pub fn new(total_steps: usize) -> Self {
        debug_assert!(total_steps > 0, "a wizard needs at least one step");
        Self {
            total_steps: total_steps.max(1),
            state: WizardState::Step(0),
            draft: UserDraft::new(),
        }
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// Validate one step's values and, on success, merge them and move the
    /// pointer forward.
    ///
    /// The schema is the submitting step's own: passing it per call keeps
    /// stale-schema bugs impossible. `None` means the step has nothing to
    /// validate.
    pub fn advance(
        &mut self,
        values: &StepValues,
        schema: Option<&Schema>,
    ) -> Result<Progress, AdvanceError> {
        let current = match self.state {
            WizardState::Step(i) => i,
            WizardState::Complete => return Err(AdvanceError::AlreadyComplete),
        };

        Schema::validate_opt(schema, values).map_err(AdvanceError::Invalid)?;

        self.draft.merge(values);

        let next = current + 1;
        if next == self.total_steps {
            self.state = WizardState::Complete;
            Ok(Progress::ReadyToSubmit)
        } else {
            self.state = WizardState::Step(next);
            Ok(Progress::Next(next))
        }
    }

    /// Drop the accumulated draft. The flow state is untouched; the
    /// container calls this once the record has been handed off, so a
    /// finished wizard stops holding the password in memory.
    pub fn discard_draft(&mut self) {
        self.draft = UserDraft::new();
    }

    /// Move the pointer back to an earlier step without clearing the draft.
    ///
    /// Backing up never discards already-merged values; resubmitting the
    /// revisited step re-validates and overwrites them (the merge is
    /// last-write-wins), so a conflicting resubmission never leaves stale
    /// data behind.
    pub fn revisit(&mut self, step: usize) -> Result<(), AdvanceError> {
        match self.state {
            WizardState::Complete => Err(AdvanceError::AlreadyComplete),
            WizardState::Step(current) => {
                if step >= current {
                    return Err(AdvanceError::StepNotBehind {
                        target: step,
                        current,
                    });
                }
                self.state = WizardState::Step(step);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signup::schemas;

    fn name_values() -> StepValues {
        StepValues::new().with("firstName", "Ana").with("lastName", "Lima")
    }

    fn credential_values() -> StepValues {
        StepValues::new()
            .with("email", "ana@x.com")
            .with("password", "secret1")
    }

    fn profile_values() -> StepValues {
        StepValues::new().with("company", "Acme").with("isCertified", true)
    }

    #[test]
    fn three_valid_steps_accumulate_and_complete() {
        let mut flow = StepFlow::new(3);

        let p0 = flow
            .advance(&name_values(), Some(&schemas::step_one()))
            .unwrap();
        assert_eq!(p0, Progress::Next(1));
        assert_eq!(flow.state(), WizardState::Step(1));

        let p1 = flow
            .advance(&credential_values(), Some(&schemas::step_two()))
            .unwrap();
        assert_eq!(p1, Progress::Next(2));

        let p2 = flow
            .advance(&profile_values(), Some(&schemas::step_three()))
            .unwrap();
        assert_eq!(p2, Progress::ReadyToSubmit);
        assert!(flow.is_complete());

        // the draft is the shallow merge of all three payloads
        let mut expected = name_values();
        expected.merge(&credential_values());
        expected.merge(&profile_values());
        assert_eq!(flow.draft().values(), &expected);
    }

    #[test]
    fn validation_failure_mutates_nothing() {
        let mut flow = StepFlow::new(3);
        flow.advance(&name_values(), Some(&schemas::step_one()))
            .unwrap();
        let before = flow.clone();

        let bad = StepValues::new()
            .with("email", "not-an-email")
            .with("password", "secret1");
        let err = flow.advance(&bad, Some(&schemas::step_two())).unwrap_err();

        match err {
            AdvanceError::Invalid(errors) => {
                assert_eq!(errors.get("email"), Some("Invalid email"));
                assert_eq!(errors.len(), 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(flow, before);
    }

    #[test]
    fn advance_after_complete_is_refused() {
        let mut flow = StepFlow::new(1);
        flow.advance(&name_values(), None).unwrap();

        let err = flow.advance(&name_values(), None).unwrap_err();
        assert_eq!(err, AdvanceError::AlreadyComplete);
    }

    #[test]
    fn revisit_keeps_the_draft_and_resubmission_overwrites() {
        let mut flow = StepFlow::new(3);
        flow.advance(&name_values(), Some(&schemas::step_one()))
            .unwrap();
        flow.advance(&credential_values(), Some(&schemas::step_two()))
            .unwrap();

        flow.revisit(0).unwrap();
        assert_eq!(flow.state(), WizardState::Step(0));
        // nothing was discarded
        assert_eq!(flow.draft().values().text("email"), Some("ana@x.com"));

        let corrected = StepValues::new()
            .with("firstName", "Anabela")
            .with("lastName", "Lima");
        flow.advance(&corrected, Some(&schemas::step_one())).unwrap();
        assert_eq!(flow.draft().values().text("firstName"), Some("Anabela"));
    }

    #[test]
    fn revisit_cannot_jump_forward_or_leave_complete() {
        let mut flow = StepFlow::new(2);
        assert_eq!(
            flow.revisit(1).unwrap_err(),
            AdvanceError::StepNotBehind {
                target: 1,
                current: 0
            }
        );

        flow.advance(&name_values(), None).unwrap();
        flow.advance(&credential_values(), None).unwrap();
        assert_eq!(flow.revisit(0).unwrap_err(), AdvanceError::AlreadyComplete);
    }
}
