//! Statistics a drive accumulates as it moves through the taxonomy.
//!
//! These blocks are written by the external processes that run each phase
//! (intake, verification, exam and interview conduct, approvals) and consumed
//! by the progress views and reporting.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Application counts broken down by reservation category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub general: u32,
    pub obc: u32,
    pub sc: u32,
    pub st: u32,
    pub ews: u32,
    pub pwbd: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderStats {
    pub male: u32,
    pub female: u32,
    pub others: u32,
}

/// Application-fee payment tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStatus {
    pub paid: u32,
    pub pending: u32,
    pub failed: u32,
}

/// Why automatic shortlisting rejected applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionReasons {
    pub age_ineligible: u32,
    pub education_below_requirement: u32,
    pub fee_not_paid: u32,
    pub documents_incomplete: u32,
}

/// Outcome of the verification phase (auto-shortlisting through merit list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortlistingResult {
    pub total_received: u32,
    pub auto_eligible: u32,
    pub auto_rejected: u32,
    pub rejection_reasons: RejectionReasons,
    pub merit_shortlisted: u32,
    pub category_breakdown: CategoryStats,
}

/// Category-wise qualifying cutoffs for the written exam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamCutoffs {
    pub general: f32,
    pub obc: f32,
    pub scst: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamResult {
    pub conducted: bool,
    pub total_appeared: u32,
    pub passed: u32,
    pub failed: u32,
    pub cutoffs: ExamCutoffs,
}

/// Weightage assigned to each interview assessment head.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewMarkingScheme {
    pub subject_knowledge: f32,
    pub teaching_skills: f32,
    pub research: f32,
    pub general_awareness: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InterviewResult {
    pub conducted: bool,
    pub total_interviewed: u32,
    pub passed: u32,
    pub marking_scheme: InterviewMarkingScheme,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptanceStatus {
    pub accepted: u32,
    pub declined: u32,
    pub pending: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoiningStatus {
    pub joined: u32,
    pub pending: u32,
}

/// Outcome of the selection phase, filled in as offers go out and candidates
/// respond.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionResult {
    pub selected: u32,
    pub waitlisted: u32,
    pub not_selected: u32,
    pub acceptance_status: AcceptanceStatus,
    pub joining_status: JoiningStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalDecision {
    Pending,
    Approved,
    Rejected,
}

/// One signatory in the approval chain for the final merit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalStep {
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: ApprovalDecision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// An outstanding action item surfaced on the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTask {
    pub id: String,
    pub title: String,
    pub priority: TaskPriority,
    pub action: String,
}
