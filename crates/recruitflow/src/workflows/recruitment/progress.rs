use serde::{Deserialize, Serialize};

use super::taxonomy::{Stage, SubStage};

/// Where a sub-stage sits relative to a drive's current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageMark {
    Completed,
    Current,
    Upcoming,
}

impl StageMark {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Completed => "Completed",
            Self::Current => "Current",
            Self::Upcoming => "Upcoming",
        }
    }
}

/// Classify `other` against a drive currently at `current`.
///
/// Strict order comparison: exactly one sub-stage of the nineteen is ever
/// `Current`, regardless of whether the methodology conducts `other`.
pub fn classify(current: SubStage, other: SubStage) -> StageMark {
    if other.order() < current.order() {
        StageMark::Completed
    } else if other == current {
        StageMark::Current
    } else {
        StageMark::Upcoming
    }
}

/// Classify a phase against the drive's current phase.
pub fn classify_stage(current: Stage, other: Stage) -> StageMark {
    if other.number() < current.number() {
        StageMark::Completed
    } else if other == current {
        StageMark::Current
    } else {
        StageMark::Upcoming
    }
}

/// Fine-grained completion percentage: `round(order / 19 * 100)`.
///
/// The first sub-stage already counts as progress, so a freshly published
/// drive reports 5%, not 0%. The terminal sub-stage reports 100%.
pub fn percent_complete(current: SubStage) -> u8 {
    round_pct(current.order(), SubStage::COUNT)
}

/// Coarse completion percentage from phase granularity alone:
/// `round(number / 6 * 100)`.
///
/// Used by compact and table views. It is a different projection than
/// [`percent_complete`] and the two are allowed to disagree.
pub fn stage_percent(current: Stage) -> u8 {
    round_pct(current.number(), 6)
}

// Round-half-up of position/total*100, matching the display arithmetic the
// dashboards use.
fn round_pct(position: u8, total: u8) -> u8 {
    let scaled = u32::from(position) * 200 + u32::from(total);
    (scaled / (u32::from(total) * 2)) as u8
}

/// The four stage fields a recruitment row historically persisted. Only
/// `current_sub_stage` is canonical; the other three are derivations that must
/// stay in lockstep with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredStageRow {
    pub current_stage: Stage,
    pub current_sub_stage: SubStage,
    /// 1-6, must equal `current_stage.number()`.
    pub stage_progress: u8,
    /// 1-19, must equal `current_sub_stage.order()`.
    pub sub_stage_progress: u8,
}

impl StoredStageRow {
    /// Derive a consistent row from the canonical sub-stage pointer.
    pub fn derive(current_sub_stage: SubStage) -> Self {
        let current_stage = current_sub_stage.parent();
        Self {
            current_stage,
            current_sub_stage,
            stage_progress: current_stage.number(),
            sub_stage_progress: current_sub_stage.order(),
        }
    }

    /// Check the lockstep invariants between the canonical sub-stage and the
    /// three derived fields.
    ///
    /// A failure means whatever wrote the row is buggy; the row is surfaced as
    /// corrupt rather than repaired so the writer's bug is not masked.
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        let expected_stage = self.current_sub_stage.parent();
        if self.current_stage != expected_stage {
            return Err(ConsistencyError::StageMismatch {
                sub_stage: self.current_sub_stage,
                recorded: self.current_stage,
                expected: expected_stage,
            });
        }

        if self.stage_progress != expected_stage.number() {
            return Err(ConsistencyError::StageProgressMismatch {
                recorded: self.stage_progress,
                expected: expected_stage.number(),
            });
        }

        let expected_order = self.current_sub_stage.order();
        if self.sub_stage_progress != expected_order {
            return Err(ConsistencyError::SubStageProgressMismatch {
                recorded: self.sub_stage_progress,
                expected: expected_order,
            });
        }

        Ok(())
    }
}

/// A recruitment row whose persisted stage fields disagree with each other.
///
/// Treated as corrupt state: logged and rejected, never auto-repaired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConsistencyError {
    #[error("stage '{recorded}' does not own sub-stage '{sub_stage}' (expected '{expected}')")]
    StageMismatch {
        sub_stage: SubStage,
        recorded: Stage,
        expected: Stage,
    },
    #[error("stage progress {recorded} disagrees with current stage (expected {expected})")]
    StageProgressMismatch { recorded: u8, expected: u8 },
    #[error("sub-stage progress {recorded} disagrees with current sub-stage (expected {expected})")]
    SubStageProgressMismatch { recorded: u8, expected: u8 },
    #[error("timeline holds {found} 'current' events, expected exactly one")]
    TimelineCurrentCount { found: usize },
    #[error("timeline 'current' event records {recorded:?}, expected '{expected}'")]
    TimelineCurrentStage {
        recorded: Option<SubStage>,
        expected: SubStage,
    },
}
