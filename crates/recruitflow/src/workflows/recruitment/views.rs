use serde::Serialize;

use super::progress::{classify_stage, StageMark};
use super::record::{Recruitment, RecruitmentId, RecruitmentStatus};
use super::taxonomy::{Stage, SubStage};

/// One phase row of a progress bar.
#[derive(Debug, Clone, Serialize)]
pub struct StageEntry {
    pub stage: Stage,
    pub label: &'static str,
    pub short_label: &'static str,
    pub number: u8,
    pub mark: StageMark,
}

/// One sub-stage row of an expanded progress bar.
#[derive(Debug, Clone, Serialize)]
pub struct SubStageEntry {
    pub sub_stage: SubStage,
    pub label: &'static str,
    pub short_label: &'static str,
    pub order: u8,
    pub parent: Stage,
    pub mark: StageMark,
}

/// Everything a progress display needs for one drive.
///
/// The sub-stage rows narrow the screening phase to the drive's methodology,
/// matching what the dashboard renders; classification itself stays a pure
/// order comparison over the full taxonomy.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressBoard {
    pub current_stage: Stage,
    pub current_stage_label: &'static str,
    pub current_sub_stage: SubStage,
    pub current_sub_stage_label: &'static str,
    pub stage_number: u8,
    pub sub_stage_order: u8,
    pub percent_complete: u8,
    pub stage_percent: u8,
    pub stages: Vec<StageEntry>,
    pub sub_stages: Vec<SubStageEntry>,
}

impl ProgressBoard {
    pub fn for_recruitment(recruitment: &Recruitment) -> Self {
        let current_stage = recruitment.current_stage();
        let current_sub_stage = recruitment.current_sub_stage;

        let stages = Stage::ordered()
            .into_iter()
            .map(|stage| StageEntry {
                stage,
                label: stage.label(),
                short_label: stage.short_label(),
                number: stage.number(),
                mark: classify_stage(current_stage, stage),
            })
            .collect();

        let sub_stages = SubStage::ordered()
            .into_iter()
            .filter(|sub_stage| recruitment.selection_methodology.applies_to(*sub_stage))
            .map(|sub_stage| SubStageEntry {
                sub_stage,
                label: sub_stage.label(),
                short_label: sub_stage.short_label(),
                order: sub_stage.order(),
                parent: sub_stage.parent(),
                mark: recruitment.classify(sub_stage),
            })
            .collect();

        Self {
            current_stage,
            current_stage_label: current_stage.label(),
            current_sub_stage,
            current_sub_stage_label: current_sub_stage.label(),
            stage_number: current_stage.number(),
            sub_stage_order: current_sub_stage.order(),
            percent_complete: recruitment.percent_complete(),
            stage_percent: recruitment.stage_percent(),
            stages,
            sub_stages,
        }
    }
}

/// Sanitized summary of one drive for API responses and table views.
#[derive(Debug, Clone, Serialize)]
pub struct RecruitmentStatusView {
    pub id: RecruitmentId,
    pub vacancy_code: String,
    pub title: String,
    pub status: RecruitmentStatus,
    pub status_label: &'static str,
    pub current_stage: Stage,
    pub current_sub_stage: SubStage,
    pub stage_progress: u8,
    pub sub_stage_progress: u8,
    pub percent_complete: u8,
    pub total_applications: u32,
}

impl RecruitmentStatusView {
    pub fn of(recruitment: &Recruitment) -> Self {
        Self {
            id: recruitment.id.clone(),
            vacancy_code: recruitment.vacancy_code.clone(),
            title: recruitment.title.clone(),
            status: recruitment.status,
            status_label: recruitment.status.label(),
            current_stage: recruitment.current_stage(),
            current_sub_stage: recruitment.current_sub_stage,
            stage_progress: recruitment.stage_progress(),
            sub_stage_progress: recruitment.sub_stage_progress(),
            percent_complete: recruitment.percent_complete(),
            total_applications: recruitment.total_applications,
        }
    }
}

/// Status tallies across all drives, for the admin dashboard header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub ongoing: usize,
    pub drafts: usize,
    pub closing_soon: usize,
    pub completed: usize,
    pub total: usize,
}

impl DashboardStats {
    pub fn tally<'a>(drives: impl IntoIterator<Item = &'a Recruitment>) -> Self {
        let mut stats = Self::default();
        for drive in drives {
            stats.total += 1;
            match drive.status {
                RecruitmentStatus::Ongoing => stats.ongoing += 1,
                RecruitmentStatus::Draft => stats.drafts += 1,
                RecruitmentStatus::ClosingSoon => stats.closing_soon += 1,
                RecruitmentStatus::Completed => stats.completed += 1,
                RecruitmentStatus::Archived => {}
            }
        }
        stats
    }
}
