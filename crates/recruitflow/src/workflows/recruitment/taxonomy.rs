use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the six top-level phases of a recruitment drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Published,
    Applications,
    Verification,
    Screening,
    Evaluation,
    Selection,
}

impl Stage {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Published,
            Self::Applications,
            Self::Verification,
            Self::Screening,
            Self::Evaluation,
            Self::Selection,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Published => "Published",
            Self::Applications => "Applications",
            Self::Verification => "Verification",
            Self::Screening => "Screening",
            Self::Evaluation => "Evaluation",
            Self::Selection => "Selection",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Published => "Pub",
            Self::Applications => "Apps",
            Self::Verification => "Ver",
            Self::Screening => "Scr",
            Self::Evaluation => "Eval",
            Self::Selection => "Sel",
        }
    }

    /// Fixed position of this phase in the drive, 1 through 6.
    pub const fn number(self) -> u8 {
        match self {
            Self::Published => 1,
            Self::Applications => 2,
            Self::Verification => 3,
            Self::Screening => 4,
            Self::Evaluation => 5,
            Self::Selection => 6,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Published => "published",
            Self::Applications => "applications",
            Self::Verification => "verification",
            Self::Screening => "screening",
            Self::Evaluation => "evaluation",
            Self::Selection => "selection",
        }
    }

    /// All sub-stages belonging to this phase, in ascending order.
    pub const fn sub_stages(self) -> &'static [SubStage] {
        match self {
            Self::Published => &[SubStage::NotificationPublished],
            Self::Applications => &[SubStage::ApplicationsOpen, SubStage::ApplicationsClosed],
            Self::Verification => &[
                SubStage::AutoShortlisting,
                SubStage::DocumentVerification,
                SubStage::MeritListPublished,
            ],
            Self::Screening => &[
                SubStage::ExamScheduled,
                SubStage::ExamConducted,
                SubStage::InterviewScheduled,
                SubStage::InterviewConducted,
            ],
            Self::Evaluation => &[
                SubStage::FinalMeritCalculation,
                SubStage::FinalMeritList,
                SubStage::ApprovalPending,
                SubStage::ApprovalComplete,
            ],
            Self::Selection => &[
                SubStage::SelectionListGenerated,
                SubStage::ResultsPublished,
                SubStage::AcceptanceTracking,
                SubStage::JoiningFormalities,
                SubStage::RecruitmentComplete,
            ],
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = UnknownStageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "published" => Ok(Self::Published),
            "applications" => Ok(Self::Applications),
            "verification" => Ok(Self::Verification),
            "screening" => Ok(Self::Screening),
            "evaluation" => Ok(Self::Evaluation),
            "selection" => Ok(Self::Selection),
            other => Err(UnknownStageError(other.to_owned())),
        }
    }
}

/// One of the nineteen fine-grained steps of a recruitment drive.
///
/// The variants are globally ordered: every sub-stage of a phase sorts before
/// every sub-stage of the next phase, with `order()` running 1 through 19
/// without gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubStage {
    NotificationPublished,
    ApplicationsOpen,
    ApplicationsClosed,
    AutoShortlisting,
    DocumentVerification,
    MeritListPublished,
    ExamScheduled,
    ExamConducted,
    InterviewScheduled,
    InterviewConducted,
    FinalMeritCalculation,
    FinalMeritList,
    ApprovalPending,
    ApprovalComplete,
    SelectionListGenerated,
    ResultsPublished,
    AcceptanceTracking,
    JoiningFormalities,
    RecruitmentComplete,
}

impl SubStage {
    pub const COUNT: u8 = 19;

    pub const fn ordered() -> [Self; 19] {
        [
            Self::NotificationPublished,
            Self::ApplicationsOpen,
            Self::ApplicationsClosed,
            Self::AutoShortlisting,
            Self::DocumentVerification,
            Self::MeritListPublished,
            Self::ExamScheduled,
            Self::ExamConducted,
            Self::InterviewScheduled,
            Self::InterviewConducted,
            Self::FinalMeritCalculation,
            Self::FinalMeritList,
            Self::ApprovalPending,
            Self::ApprovalComplete,
            Self::SelectionListGenerated,
            Self::ResultsPublished,
            Self::AcceptanceTracking,
            Self::JoiningFormalities,
            Self::RecruitmentComplete,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::NotificationPublished => "Notification Published",
            Self::ApplicationsOpen => "Applications Open",
            Self::ApplicationsClosed => "Applications Closed",
            Self::AutoShortlisting => "Automatic Shortlisting",
            Self::DocumentVerification => "Document Verification",
            Self::MeritListPublished => "Merit List Published",
            Self::ExamScheduled => "Exam Scheduled",
            Self::ExamConducted => "Exam Conducted",
            Self::InterviewScheduled => "Interview Scheduled",
            Self::InterviewConducted => "Interview Conducted",
            Self::FinalMeritCalculation => "Final Merit Calculation",
            Self::FinalMeritList => "Final Merit List",
            Self::ApprovalPending => "Approval Pending",
            Self::ApprovalComplete => "Approval Complete",
            Self::SelectionListGenerated => "Selection List Generated",
            Self::ResultsPublished => "Results Published",
            Self::AcceptanceTracking => "Acceptance Tracking",
            Self::JoiningFormalities => "Joining Formalities",
            Self::RecruitmentComplete => "Recruitment Complete",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::NotificationPublished => "Published",
            Self::ApplicationsOpen => "Open",
            Self::ApplicationsClosed => "Closed",
            Self::AutoShortlisting => "Auto-Short",
            Self::DocumentVerification => "Doc Verify",
            Self::MeritListPublished => "Merit List",
            Self::ExamScheduled => "Exam Sched",
            Self::ExamConducted => "Exam Done",
            Self::InterviewScheduled => "Int Sched",
            Self::InterviewConducted => "Int Done",
            Self::FinalMeritCalculation => "Calc Merit",
            Self::FinalMeritList => "Final List",
            Self::ApprovalPending => "Approval",
            Self::ApprovalComplete => "Approved",
            Self::SelectionListGenerated => "Select List",
            Self::ResultsPublished => "Published",
            Self::AcceptanceTracking => "Acceptance",
            Self::JoiningFormalities => "Joining",
            Self::RecruitmentComplete => "Complete",
        }
    }

    /// The phase this sub-stage belongs to. Fixed for the life of the taxonomy.
    pub const fn parent(self) -> Stage {
        match self {
            Self::NotificationPublished => Stage::Published,
            Self::ApplicationsOpen | Self::ApplicationsClosed => Stage::Applications,
            Self::AutoShortlisting | Self::DocumentVerification | Self::MeritListPublished => {
                Stage::Verification
            }
            Self::ExamScheduled
            | Self::ExamConducted
            | Self::InterviewScheduled
            | Self::InterviewConducted => Stage::Screening,
            Self::FinalMeritCalculation
            | Self::FinalMeritList
            | Self::ApprovalPending
            | Self::ApprovalComplete => Stage::Evaluation,
            Self::SelectionListGenerated
            | Self::ResultsPublished
            | Self::AcceptanceTracking
            | Self::JoiningFormalities
            | Self::RecruitmentComplete => Stage::Selection,
        }
    }

    /// Global position in the drive, 1 through 19.
    pub const fn order(self) -> u8 {
        match self {
            Self::NotificationPublished => 1,
            Self::ApplicationsOpen => 2,
            Self::ApplicationsClosed => 3,
            Self::AutoShortlisting => 4,
            Self::DocumentVerification => 5,
            Self::MeritListPublished => 6,
            Self::ExamScheduled => 7,
            Self::ExamConducted => 8,
            Self::InterviewScheduled => 9,
            Self::InterviewConducted => 10,
            Self::FinalMeritCalculation => 11,
            Self::FinalMeritList => 12,
            Self::ApprovalPending => 13,
            Self::ApprovalComplete => 14,
            Self::SelectionListGenerated => 15,
            Self::ResultsPublished => 16,
            Self::AcceptanceTracking => 17,
            Self::JoiningFormalities => 18,
            Self::RecruitmentComplete => 19,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotificationPublished => "notification_published",
            Self::ApplicationsOpen => "applications_open",
            Self::ApplicationsClosed => "applications_closed",
            Self::AutoShortlisting => "auto_shortlisting",
            Self::DocumentVerification => "document_verification",
            Self::MeritListPublished => "merit_list_published",
            Self::ExamScheduled => "exam_scheduled",
            Self::ExamConducted => "exam_conducted",
            Self::InterviewScheduled => "interview_scheduled",
            Self::InterviewConducted => "interview_conducted",
            Self::FinalMeritCalculation => "final_merit_calculation",
            Self::FinalMeritList => "final_merit_list",
            Self::ApprovalPending => "approval_pending",
            Self::ApprovalComplete => "approval_complete",
            Self::SelectionListGenerated => "selection_list_generated",
            Self::ResultsPublished => "results_published",
            Self::AcceptanceTracking => "acceptance_tracking",
            Self::JoiningFormalities => "joining_formalities",
            Self::RecruitmentComplete => "recruitment_complete",
        }
    }

    /// The last sub-stage of the success path.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::RecruitmentComplete)
    }
}

impl fmt::Display for SubStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SubStage {
    type Err = UnknownStageError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ordered()
            .into_iter()
            .find(|stage| stage.as_str() == value)
            .ok_or_else(|| UnknownStageError(value.to_owned()))
    }
}

/// A stage identifier that is not part of the taxonomy.
///
/// This signals a data or deployment mismatch (persisted rows written against a
/// different taxonomy revision), so it is surfaced rather than mapped to any
/// default stage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stage identifier '{0}'")]
pub struct UnknownStageError(pub String);
