use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::taxonomy::{Stage, SubStage};

/// How a drive screens its shortlisted candidates.
///
/// Chosen once when the drive opens and immutable afterward: changing the
/// methodology mid-drive would rewrite which screening sub-stages apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMethodology {
    ExamOnly,
    InterviewOnly,
    ExamAndInterview,
}

impl SelectionMethodology {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExamOnly => "Exam Only",
            Self::InterviewOnly => "Interview Only",
            Self::ExamAndInterview => "Exam & Interview",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExamOnly => "exam_only",
            Self::InterviewOnly => "interview_only",
            Self::ExamAndInterview => "exam_and_interview",
        }
    }

    /// The screening sub-stages this methodology actually conducts, in
    /// taxonomy order. Always a subset of `Stage::Screening.sub_stages()`.
    pub const fn screening_sub_stages(self) -> &'static [SubStage] {
        match self {
            Self::ExamOnly => &[SubStage::ExamScheduled, SubStage::ExamConducted],
            Self::InterviewOnly => &[SubStage::InterviewScheduled, SubStage::InterviewConducted],
            Self::ExamAndInterview => Stage::Screening.sub_stages(),
        }
    }

    /// Whether a drive under this methodology ever occupies `sub_stage`.
    ///
    /// Non-screening sub-stages apply to every methodology.
    pub fn applies_to(self, sub_stage: SubStage) -> bool {
        if sub_stage.parent() != Stage::Screening {
            return true;
        }
        self.screening_sub_stages().contains(&sub_stage)
    }

    /// The full ordered chain of sub-stages a drive with this methodology
    /// traverses: all non-screening sub-stages plus this methodology's
    /// screening subset.
    pub fn applicable_sequence(self) -> Vec<SubStage> {
        SubStage::ordered()
            .into_iter()
            .filter(|sub_stage| self.applies_to(*sub_stage))
            .collect()
    }

    /// The sub-stage a drive moves to after `current`, or `None` at the end of
    /// the chain.
    pub fn successor(self, current: SubStage) -> Option<SubStage> {
        SubStage::ordered()
            .into_iter()
            .filter(|candidate| self.applies_to(*candidate))
            .find(|candidate| candidate.order() > current.order())
    }
}

impl fmt::Display for SelectionMethodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionMethodology {
    type Err = InvalidMethodologyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "exam_only" => Ok(Self::ExamOnly),
            "interview_only" => Ok(Self::InterviewOnly),
            "exam_and_interview" => Ok(Self::ExamAndInterview),
            other => Err(InvalidMethodologyError(other.to_owned())),
        }
    }
}

/// An unrecognized selection-methodology value.
///
/// A caller contract violation: never defaulted, because falling back to the
/// full four-stage screening set would misrepresent a drive that only conducts
/// interviews.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid selection methodology '{0}'")]
pub struct InvalidMethodologyError(pub String);
