//! Recruitment drive lifecycle: the fixed 6-phase / 19-sub-stage taxonomy,
//! methodology-aware screening resolution, progress projection, and the
//! transition engine that moves a drive along the chain.

pub mod methodology;
pub mod progress;
pub mod record;
pub mod router;
pub mod service;
pub mod stats;
pub mod store;
pub mod taxonomy;
pub mod transition;
pub mod views;

#[cfg(test)]
mod tests;

pub use methodology::{InvalidMethodologyError, SelectionMethodology};
pub use progress::{
    classify, classify_stage, percent_complete, stage_percent, ConsistencyError, StageMark,
    StoredStageRow,
};
pub use record::{Recruitment, RecruitmentId, RecruitmentStatus, TimelineEvent};
pub use router::recruitment_router;
pub use service::{AdvanceRequest, OpenRecruitment, RecruitmentService, ServiceError};
pub use store::{RecruitmentStore, StoreError};
pub use taxonomy::{Stage, SubStage, UnknownStageError};
pub use transition::TransitionError;
pub use views::{DashboardStats, ProgressBoard, RecruitmentStatusView, StageEntry, SubStageEntry};
