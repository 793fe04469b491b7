//! Stage advancement for a recruitment drive.
//!
//! The nineteen sub-stages form a linear chain with one conditional fork: the
//! screening phase's internal sequence depends on the drive's selection
//! methodology, fixed at creation. A normal advance moves exactly one step
//! along the methodology's applicable chain; anything else goes through the
//! audited override path.

use chrono::NaiveDate;

use super::methodology::SelectionMethodology;
use super::progress::StageMark;
use super::record::{Recruitment, RecruitmentStatus, TimelineEvent};
use super::taxonomy::SubStage;

/// A rejected stage transition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransitionError {
    /// The requested target is not the next applicable sub-stage. The caller
    /// should re-derive the target from the drive's current position.
    #[error("cannot advance from '{current}' to '{target}': not the next applicable sub-stage")]
    OutOfOrder { current: SubStage, target: SubStage },
    /// The target sub-stage is never occupied under the drive's methodology.
    #[error("sub-stage '{target}' does not apply under methodology '{methodology}'")]
    NotApplicable {
        target: SubStage,
        methodology: SelectionMethodology,
    },
    /// A concurrent advance committed first. The caller should re-read the
    /// drive and decide whether to retry.
    #[error("concurrent advance won: expected sub-stage order {expected}, found {found}")]
    Stale { expected: u8, found: u8 },
}

impl Recruitment {
    /// Advance this drive to `target`, which must be the successor of the
    /// current sub-stage along the methodology's applicable chain.
    ///
    /// On success the vacated sub-stage's `current` timeline event becomes
    /// `completed`, a new `current` event is appended for `target`, and the
    /// derived stage fields follow the canonical pointer. Reaching the
    /// terminal sub-stage marks the drive `Completed` unless it was archived.
    pub fn advance(
        &mut self,
        target: SubStage,
        date: NaiveDate,
        actor: Option<String>,
        details: Option<String>,
    ) -> Result<(), TransitionError> {
        let expected = self.selection_methodology.successor(self.current_sub_stage);
        if expected != Some(target) {
            return Err(TransitionError::OutOfOrder {
                current: self.current_sub_stage,
                target,
            });
        }

        self.enter(target, date, actor, details);
        Ok(())
    }

    /// Administrative override: move to any applicable sub-stage other than
    /// the current one, skipping the successor check.
    ///
    /// The actor and justification are mandatory so the jump is audited in the
    /// timeline.
    pub fn advance_override(
        &mut self,
        target: SubStage,
        date: NaiveDate,
        actor: String,
        details: String,
    ) -> Result<(), TransitionError> {
        if !self.selection_methodology.applies_to(target) {
            return Err(TransitionError::NotApplicable {
                target,
                methodology: self.selection_methodology,
            });
        }
        if target == self.current_sub_stage {
            return Err(TransitionError::OutOfOrder {
                current: self.current_sub_stage,
                target,
            });
        }

        self.enter(target, date, Some(actor), Some(details));
        Ok(())
    }

    fn enter(
        &mut self,
        target: SubStage,
        date: NaiveDate,
        actor: Option<String>,
        details: Option<String>,
    ) {
        for event in &mut self.timeline {
            if event.status == StageMark::Current {
                event.status = StageMark::Completed;
            }
        }

        self.timeline.push(TimelineEvent {
            stage: target.label().to_string(),
            sub_stage: Some(target),
            date,
            status: StageMark::Current,
            actor,
            details,
        });

        self.current_sub_stage = target;

        if target.is_terminal() && self.status != RecruitmentStatus::Archived {
            self.status = RecruitmentStatus::Completed;
        }
    }
}
