use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::methodology::SelectionMethodology;
use super::progress::{self, ConsistencyError, StageMark, StoredStageRow};
use super::stats::{
    ApprovalStep, CategoryStats, ExamResult, FeeStatus, GenderStats, InterviewResult, PendingTask,
    SelectionResult, ShortlistingResult,
};
use super::taxonomy::{Stage, SubStage};

/// Identifier wrapper for recruitment drives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecruitmentId(pub String);

impl fmt::Display for RecruitmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Administrative status of a drive, orthogonal to its stage pointer.
///
/// `Archived` can be layered over any sub-stage; it is a flag, not a stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecruitmentStatus {
    Ongoing,
    Draft,
    ClosingSoon,
    Completed,
    Archived,
}

impl RecruitmentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ongoing => "Ongoing",
            Self::Draft => "Draft",
            Self::ClosingSoon => "Needs Attention",
            Self::Completed => "Completed",
            Self::Archived => "Archived",
        }
    }
}

/// An entry in the drive's stage history.
///
/// Events with status `completed` are never touched again; exactly one event
/// holds status `current` at any time, matching the drive's current sub-stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub stage: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_stage: Option<SubStage>,
    pub date: NaiveDate,
    pub status: StageMark,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// One recruitment drive: a vacancy's end-to-end processing lifecycle.
///
/// Only `current_sub_stage` and `selection_methodology` are canonical stage
/// state; phase, stage progress, and percentages are computed from them so the
/// derived fields can never drift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recruitment {
    pub id: RecruitmentId,
    pub vacancy_code: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub status: RecruitmentStatus,
    pub current_sub_stage: SubStage,
    pub selection_methodology: SelectionMethodology,

    pub total_applications: u32,
    pub category_stats: CategoryStats,
    pub gender_stats: GenderStats,
    pub fee_status: FeeStatus,

    pub verified: u32,
    pub pending: u32,
    pub rejected: u32,
    pub shortlisted: u32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub shortlisting_result: Option<ShortlistingResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exam_result: Option<ExamResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_result: Option<InterviewResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_result: Option<SelectionResult>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub approval_workflow: Vec<ApprovalStep>,

    pub posted_date: NaiveDate,
    pub closing_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pending_tasks: Vec<PendingTask>,
    pub timeline: Vec<TimelineEvent>,
}

impl Recruitment {
    /// Open a drive at publication: it enters `notification_published` with a
    /// single `current` timeline event.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        id: RecruitmentId,
        vacancy_code: String,
        title: String,
        department: String,
        location: String,
        selection_methodology: SelectionMethodology,
        posted_date: NaiveDate,
        closing_date: NaiveDate,
    ) -> Self {
        let first = SubStage::NotificationPublished;
        let timeline = vec![TimelineEvent {
            stage: first.label().to_string(),
            sub_stage: Some(first),
            date: posted_date,
            status: StageMark::Current,
            actor: None,
            details: None,
        }];

        Self {
            id,
            vacancy_code,
            title,
            department,
            location,
            status: RecruitmentStatus::Ongoing,
            current_sub_stage: first,
            selection_methodology,
            total_applications: 0,
            category_stats: CategoryStats::default(),
            gender_stats: GenderStats::default(),
            fee_status: FeeStatus::default(),
            verified: 0,
            pending: 0,
            rejected: 0,
            shortlisted: 0,
            shortlisting_result: None,
            exam_result: None,
            interview_result: None,
            selection_result: None,
            approval_workflow: Vec::new(),
            posted_date,
            closing_date,
            pending_tasks: Vec::new(),
            timeline,
        }
    }

    /// The phase owning the current sub-stage.
    pub fn current_stage(&self) -> Stage {
        self.current_sub_stage.parent()
    }

    /// Phase count, 1-6.
    pub fn stage_progress(&self) -> u8 {
        self.current_stage().number()
    }

    /// Sub-stage count, 1-19.
    pub fn sub_stage_progress(&self) -> u8 {
        self.current_sub_stage.order()
    }

    pub fn percent_complete(&self) -> u8 {
        progress::percent_complete(self.current_sub_stage)
    }

    pub fn stage_percent(&self) -> u8 {
        progress::stage_percent(self.current_stage())
    }

    /// The four stage fields in the shape older rows persisted them.
    pub fn stored_stage_row(&self) -> StoredStageRow {
        StoredStageRow::derive(self.current_sub_stage)
    }

    /// Classify any sub-stage against this drive's position.
    pub fn classify(&self, sub_stage: SubStage) -> StageMark {
        progress::classify(self.current_sub_stage, sub_stage)
    }

    /// Days between `today` and the closing date, clamped at zero.
    pub fn days_left(&self, today: NaiveDate) -> i64 {
        (self.closing_date - today).num_days().max(0)
    }

    /// The single timeline event holding status `current`, if the timeline is
    /// well formed.
    pub fn current_event(&self) -> Option<&TimelineEvent> {
        self.timeline
            .iter()
            .find(|event| event.status == StageMark::Current)
    }

    /// Check the stage invariants of this record plus its timeline.
    ///
    /// Because phase and progress are derived here, the lockstep invariants
    /// hold by construction; this remains the seam where a raw persisted row is
    /// verified. The timeline must hold exactly one `current` event, and that
    /// event must point at the record's current sub-stage.
    pub fn validate(&self) -> Result<(), ConsistencyError> {
        self.stored_stage_row().validate()?;

        let current_events: Vec<&TimelineEvent> = self
            .timeline
            .iter()
            .filter(|event| event.status == StageMark::Current)
            .collect();
        match current_events.as_slice() {
            [event] => {
                if event.sub_stage != Some(self.current_sub_stage) {
                    return Err(ConsistencyError::TimelineCurrentStage {
                        recorded: event.sub_stage,
                        expected: self.current_sub_stage,
                    });
                }
            }
            other => {
                return Err(ConsistencyError::TimelineCurrentCount { found: other.len() });
            }
        }

        Ok(())
    }
}
