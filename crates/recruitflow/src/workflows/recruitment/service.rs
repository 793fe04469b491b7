use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use tracing::error;

use super::methodology::{InvalidMethodologyError, SelectionMethodology};
use super::progress::ConsistencyError;
use super::record::{Recruitment, RecruitmentId};
use super::store::{RecruitmentStore, StoreError};
use super::taxonomy::{SubStage, UnknownStageError};
use super::transition::TransitionError;
use super::views::{DashboardStats, ProgressBoard, RecruitmentStatusView};

/// Parameters for opening a drive when its vacancy notification goes out.
#[derive(Debug, Clone)]
pub struct OpenRecruitment {
    pub vacancy_code: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub selection_methodology: SelectionMethodology,
    pub posted_date: NaiveDate,
    pub closing_date: NaiveDate,
}

/// Parameters for one advance request.
#[derive(Debug, Clone)]
pub struct AdvanceRequest {
    pub target: SubStage,
    pub date: NaiveDate,
    pub actor: Option<String>,
    pub details: Option<String>,
    /// Audited administrative jump; requires both actor and details.
    pub admin_override: bool,
}

/// Service composing the store with the taxonomy, projector, and transition
/// engine.
pub struct RecruitmentService<S> {
    store: Arc<S>,
}

static RECRUITMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_recruitment_id() -> RecruitmentId {
    let id = RECRUITMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    RecruitmentId(format!("rec-{id:06}"))
}

impl<S> RecruitmentService<S>
where
    S: RecruitmentStore + 'static,
{
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Open a drive at `notification_published` and persist it.
    pub fn open(&self, request: OpenRecruitment) -> Result<Recruitment, ServiceError> {
        let record = Recruitment::open(
            next_recruitment_id(),
            request.vacancy_code,
            request.title,
            request.department,
            request.location,
            request.selection_methodology,
            request.posted_date,
            request.closing_date,
        );

        let stored = self.store.insert(record)?;
        Ok(stored)
    }

    /// Fetch a drive, rejecting records whose stage fields are corrupt.
    pub fn get(&self, id: &RecruitmentId) -> Result<Recruitment, ServiceError> {
        let record = self.store.fetch(id)?.ok_or(StoreError::NotFound)?;
        self.checked(record)
    }

    /// Current status summary for API responses.
    pub fn status(&self, id: &RecruitmentId) -> Result<RecruitmentStatusView, ServiceError> {
        Ok(RecruitmentStatusView::of(&self.get(id)?))
    }

    /// Full progress projection for rendering.
    pub fn progress(&self, id: &RecruitmentId) -> Result<ProgressBoard, ServiceError> {
        Ok(ProgressBoard::for_recruitment(&self.get(id)?))
    }

    /// Advance a drive one step (or through the audited override path) and
    /// commit the new stage atomically.
    ///
    /// The commit is a compare-and-swap on the sub-stage order read here: when
    /// a concurrent advance wins, the caller sees `TransitionError::Stale` and
    /// can re-read to decide whether to retry.
    pub fn advance(
        &self,
        id: &RecruitmentId,
        request: AdvanceRequest,
    ) -> Result<Recruitment, ServiceError> {
        let mut record = self.get(id)?;
        let expected_order = record.sub_stage_progress();

        if request.admin_override {
            let actor = request.actor.ok_or(ServiceError::OverrideUnaudited)?;
            let details = request.details.ok_or(ServiceError::OverrideUnaudited)?;
            record.advance_override(request.target, request.date, actor, details)?;
        } else {
            record.advance(request.target, request.date, request.actor, request.details)?;
        }

        match self.store.commit_stage(expected_order, record.clone()) {
            Ok(()) => Ok(record),
            Err(StoreError::Stale { expected, found }) => {
                Err(TransitionError::Stale { expected, found }.into())
            }
            Err(other) => Err(other.into()),
        }
    }

    /// Status tallies across every drive.
    pub fn dashboard(&self) -> Result<DashboardStats, ServiceError> {
        let drives = self.store.list()?;
        Ok(DashboardStats::tally(&drives))
    }

    fn checked(&self, record: Recruitment) -> Result<Recruitment, ServiceError> {
        if let Err(err) = record.validate() {
            error!(id = %record.id, error = %err, "recruitment record failed consistency check");
            return Err(ServiceError::Consistency(err));
        }
        Ok(record)
    }
}

/// Error raised by the recruitment service.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("corrupt recruitment record: {0}")]
    Consistency(#[source] ConsistencyError),
    #[error(transparent)]
    UnknownStage(#[from] UnknownStageError),
    #[error(transparent)]
    Methodology(#[from] InvalidMethodologyError),
    #[error("administrative override requires an actor and a justification")]
    OverrideUnaudited,
}
