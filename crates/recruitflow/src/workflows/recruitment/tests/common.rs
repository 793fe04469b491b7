use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use crate::workflows::recruitment::methodology::SelectionMethodology;
use crate::workflows::recruitment::record::{Recruitment, RecruitmentId};
use crate::workflows::recruitment::service::{OpenRecruitment, RecruitmentService};
use crate::workflows::recruitment::store::{RecruitmentStore, StoreError};

pub(super) fn posted() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).expect("valid date")
}

pub(super) fn closing() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 28).expect("valid date")
}

pub(super) fn open_request(methodology: SelectionMethodology) -> OpenRecruitment {
    OpenRecruitment {
        vacancy_code: "VAC-2026-117".to_string(),
        title: "Assistant Professor (Physics)".to_string(),
        department: "Higher Education".to_string(),
        location: "Pune".to_string(),
        selection_methodology: methodology,
        posted_date: posted(),
        closing_date: closing(),
    }
}

pub(super) fn drive(methodology: SelectionMethodology) -> Recruitment {
    Recruitment::open(
        RecruitmentId("rec-test".to_string()),
        "VAC-2026-117".to_string(),
        "Assistant Professor (Physics)".to_string(),
        "Higher Education".to_string(),
        "Pune".to_string(),
        methodology,
        posted(),
        closing(),
    )
}

pub(super) fn service_with_store() -> (
    RecruitmentService<MemoryStore>,
    Arc<MemoryStore>,
) {
    let store = Arc::new(MemoryStore::default());
    (RecruitmentService::new(store.clone()), store)
}

#[derive(Default, Clone)]
pub(super) struct MemoryStore {
    records: Arc<Mutex<HashMap<RecruitmentId, Recruitment>>>,
}

impl RecruitmentStore for MemoryStore {
    fn insert(&self, record: Recruitment) -> Result<Recruitment, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(StoreError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &RecruitmentId) -> Result<Option<Recruitment>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn commit_stage(&self, expected_order: u8, record: Recruitment) -> Result<(), StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        let stored = guard.get(&record.id).ok_or(StoreError::NotFound)?;
        let found = stored.sub_stage_progress();
        if found != expected_order {
            return Err(StoreError::Stale {
                expected: expected_order,
                found,
            });
        }
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Recruitment>, StoreError> {
        let guard = self.records.lock().expect("store mutex poisoned");
        Ok(guard.values().cloned().collect())
    }
}

impl MemoryStore {
    /// Overwrite a record directly, bypassing the compare-and-swap. Lets tests
    /// seed corrupt or concurrently-modified state.
    pub(super) fn put_raw(&self, record: Recruitment) {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.insert(record.id.clone(), record);
    }
}

/// Store whose stage commits always lose the race.
pub(super) struct StaleStore {
    inner: MemoryStore,
}

impl StaleStore {
    pub(super) fn new() -> Self {
        Self {
            inner: MemoryStore::default(),
        }
    }
}

impl RecruitmentStore for StaleStore {
    fn insert(&self, record: Recruitment) -> Result<Recruitment, StoreError> {
        self.inner.insert(record)
    }

    fn fetch(&self, id: &RecruitmentId) -> Result<Option<Recruitment>, StoreError> {
        self.inner.fetch(id)
    }

    fn commit_stage(&self, expected_order: u8, _record: Recruitment) -> Result<(), StoreError> {
        Err(StoreError::Stale {
            expected: expected_order,
            found: expected_order + 1,
        })
    }

    fn list(&self) -> Result<Vec<Recruitment>, StoreError> {
        self.inner.list()
    }
}

/// Store that is permanently offline.
pub(super) struct UnavailableStore;

impl RecruitmentStore for UnavailableStore {
    fn insert(&self, _record: Recruitment) -> Result<Recruitment, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &RecruitmentId) -> Result<Option<Recruitment>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn commit_stage(&self, _expected_order: u8, _record: Recruitment) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<Recruitment>, StoreError> {
        Err(StoreError::Unavailable("database offline".to_string()))
    }
}
