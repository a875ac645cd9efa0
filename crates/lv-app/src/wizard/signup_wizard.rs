use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use lv_core::form::StepValues;
use lv_core::ports::UserDirectoryPort;
use lv_core::signup::{Progress, StepFlow, WizardState};
use lv_core::user::{CreatedUser, NewUser, UserDraft};
use lv_core::validation::Schema;

use crate::wizard::SignupError;

/// What a successful `advance` produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    /// Moved on to the given step.
    Advanced { next_step: usize },
    /// The last step completed and the create-user call succeeded.
    Submitted(CreatedUser),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Submission {
    NotStarted,
    Succeeded,
    Failed,
}

struct Inner {
    flow: StepFlow,
    submission: Submission,
}

/// Wizard-scoped state container.
///
/// Owns the step accumulator and the draft; step screens go through
/// [`advance`](Self::advance) and never touch either directly.
///
/// Calls are serialized: the container refuses an `advance`/`submit` while
/// another is in flight (`Busy`) instead of trusting the UI to disable its
/// submit button. Once the last step completes, the accumulated record is
/// sent to the user directory exactly once; a failed submission can only
/// be retried by an explicit [`retry_submit`](Self::retry_submit).
pub struct SignupWizard {
    directory: Arc<dyn UserDirectoryPort>,
    closed: AtomicBool,
    inner: Mutex<Inner>,
}

impl SignupWizard {
    /// A wizard with the given number of steps.
    pub fn new(total_steps: usize, directory: Arc<dyn UserDirectoryPort>) -> Self {
        Self {
            directory,
            closed: AtomicBool::new(false),
            inner: Mutex::new(Inner {
                flow: StepFlow::new(total_steps),
                submission: Submission::NotStarted,
            }),
        }
    }

    /// Submit the current step's values against that step's schema.
    ///
    /// On validation failure the error map comes back and nothing moves.
    /// Completing the last step triggers the create-user call; its failure
    /// is returned as [`SignupError::Submission`] with the draft preserved.
    pub async fn advance(
        &self,
        values: &StepValues,
        schema: Option<&Schema>,
    ) -> Result<StepOutcome, SignupError> {
        if self.is_closed() {
            return Err(SignupError::Closed);
        }
        let mut inner = self.inner.try_lock().map_err(|_| SignupError::Busy)?;

        match inner.flow.advance(values, schema)? {
            Progress::Next(next_step) => {
                debug!(next_step, "sign-up step completed");
                Ok(StepOutcome::Advanced { next_step })
            }
            Progress::ReadyToSubmit => {
                debug!("last sign-up step completed, submitting");
                let created = self.run_submission(&mut inner).await?;
                Ok(StepOutcome::Submitted(created))
            }
        }
    }

    /// Retry a failed submission. Only valid in the `Complete` state, and
    /// never after a success.
    pub async fn retry_submit(&self) -> Result<CreatedUser, SignupError> {
        if self.is_closed() {
            return Err(SignupError::Closed);
        }
        let mut inner = self.inner.try_lock().map_err(|_| SignupError::Busy)?;

        if !inner.flow.is_complete() {
            return Err(SignupError::NotComplete);
        }
        self.run_submission(&mut inner).await
    }

    /// Move back to an earlier step. The draft keeps what it already
    /// merged; resubmitting the revisited step overwrites those fields.
    pub async fn revisit(&self, step: usize) -> Result<(), SignupError> {
        if self.is_closed() {
            return Err(SignupError::Closed);
        }
        let mut inner = self.inner.try_lock().map_err(|_| SignupError::Busy)?;
        inner.flow.revisit(step)?;
        debug!(step, "revisiting earlier sign-up step");
        Ok(())
    }

    /// Mark the wizard as closed (screen unmounted). The result of an
    /// in-flight call is discarded instead of being applied.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    pub async fn state(&self) -> WizardState {
        self.inner.lock().await.flow.state()
    }

    /// Snapshot of the accumulated draft.
    pub async fn draft(&self) -> UserDraft {
        self.inner.lock().await.flow.draft().clone()
    }

    /// At-most-once submission. The guard is the submission state checked
    /// and recorded under the same lock that serializes all calls.
    async fn run_submission(&self, inner: &mut Inner) -> Result<CreatedUser, SignupError> {
        match inner.submission {
            Submission::Succeeded => return Err(SignupError::AlreadySubmitted),
            Submission::NotStarted | Submission::Failed => {}
        }

        let user = NewUser::try_from(inner.flow.draft()).map_err(|err| match err {
            lv_core::user::DraftError::Incomplete { missing } => {
                SignupError::IncompleteDraft { missing }
            }
        })?;

        let result = self.directory.create_user(&user).await;

        if self.is_closed() {
            // the wizard went away while the call was in flight
            debug!("discarding sign-up submission result after close");
            return Err(SignupError::Closed);
        }

        match result {
            Ok(created) => {
                inner.submission = Submission::Succeeded;
                // the record has been handed off; the draft is done
                inner.flow.discard_draft();
                info!(user_id = %created.id, "sign-up submitted");
                Ok(created)
            }
            Err(err) => {
                inner.submission = Submission::Failed;
                warn!(error = %err, "sign-up submission failed");
                Err(SignupError::Submission(err))
            }
        }
    }
}
