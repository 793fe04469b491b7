use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use recruitflow::workflows::recruitment::{
    Recruitment, RecruitmentId, RecruitmentStore, StoreError,
};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Single-process store backing the service. The mutex makes each stage
/// commit atomic per drive: the compare-and-swap on sub-stage order happens
/// under the same lock as the write.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRecruitmentStore {
    records: Arc<Mutex<HashMap<RecruitmentId, Recruitment>>>,
}

impl RecruitmentStore for InMemoryRecruitmentStore {
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

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
