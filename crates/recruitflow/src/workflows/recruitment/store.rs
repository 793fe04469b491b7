use super::record::{Recruitment, RecruitmentId};

/// Storage abstraction so the service can be exercised in isolation.
///
/// One drive is the unit of mutual exclusion: `commit_stage` must apply its
/// write only if the stored drive still sits at the expected sub-stage order,
/// so two concurrent advances serialize instead of double-advancing. Plain
/// reads are free to return whatever committed state they see.
pub trait RecruitmentStore: Send + Sync {
    fn insert(&self, record: Recruitment) -> Result<Recruitment, StoreError>;
    fn fetch(&self, id: &RecruitmentId) -> Result<Option<Recruitment>, StoreError>;
    /// Compare-and-swap stage write: fails with [`StoreError::Stale`] when the
    /// stored sub-stage order no longer equals `expected_order`.
    fn commit_stage(&self, expected_order: u8, record: Recruitment) -> Result<(), StoreError>;
    fn list(&self) -> Result<Vec<Recruitment>, StoreError>;
}

/// Error enumeration for store failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("drive already exists")]
    Conflict,
    #[error("drive not found")]
    NotFound,
    #[error("stage write lost to a concurrent advance (expected order {expected}, found {found})")]
    Stale { expected: u8, found: u8 },
    #[error("store unavailable: {0}")]
    Unavailable(String),
}
