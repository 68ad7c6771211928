//! Read-only views over submitted and draft settlements for the status
//! dashboard.

use crate::domain::{SettlementAggregate, SettlementStatus, SettlementSummary};
use crate::store::Store;

/// Stages shown on the status timeline, in order.
pub const TIMELINE_STAGES: [&str; 5] = ["Draft", "Submitted", "Under Review", "Approved", "Settled"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineStep {
    pub stage: &'static str,
    pub completed: bool,
}

/// One dashboard row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusRow {
    pub request_number: String,
    pub status: SettlementStatus,
    pub total_claimed: f64,
    pub total_approved: f64,
    pub finance_reviewer: String,
    pub expense_count: usize,
    pub is_draft: bool,
}

impl From<&SettlementAggregate> for StatusRow {
    fn from(settlement: &SettlementAggregate) -> Self {
        Self {
            request_number: settlement.request_number.clone(),
            status: settlement.status,
            total_claimed: settlement.total_claimed,
            total_approved: settlement.total_approved,
            finance_reviewer: settlement.finance_reviewer.clone(),
            expense_count: settlement.expense_count(),
            is_draft: settlement.is_draft,
        }
    }
}

pub struct StatusService;

impl StatusService {
    /// Looks in the submitted bucket first, then drafts.
    pub fn find<'a>(store: &'a Store, request_number: &str) -> Option<&'a SettlementAggregate> {
        store
            .find_settlement_any_case(request_number)
            .or_else(|| store.find_draft_any_case(request_number))
    }

    /// Submitted settlements followed by drafts, each in store order.
    pub fn rows(store: &Store) -> Vec<StatusRow> {
        store
            .settlements()
            .iter()
            .chain(store.draft_settlements())
            .map(StatusRow::from)
            .collect()
    }

    /// Balance against the advance; once approved, the approved total counts.
    pub fn summary(settlement: &SettlementAggregate, allocated: f64) -> SettlementSummary {
        let summary = SettlementSummary::new(settlement.total_claimed, allocated);
        match settlement.status {
            SettlementStatus::Approved => summary.with_approved(settlement.total_approved),
            _ => summary,
        }
    }

    pub fn timeline(settlement: &SettlementAggregate) -> Vec<TimelineStep> {
        let reached = Self::stages_reached(settlement);
        TIMELINE_STAGES
            .into_iter()
            .enumerate()
            .map(|(idx, stage)| TimelineStep {
                stage,
                completed: idx < reached,
            })
            .collect()
    }

    // A rejected settlement stops after review.
    fn stages_reached(settlement: &SettlementAggregate) -> usize {
        if settlement.is_draft {
            return 1;
        }
        match settlement.status {
            SettlementStatus::Draft => 1,
            SettlementStatus::UnderReview | SettlementStatus::Rejected => 3,
            SettlementStatus::Approved if settlement.total_paid > 0.0 => 5,
            SettlementStatus::Approved => 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 2, 1).unwrap()
    }

    fn completed(steps: &[TimelineStep]) -> Vec<&str> {
        steps
            .iter()
            .filter(|step| step.completed)
            .map(|step| step.stage)
            .collect()
    }

    #[test]
    fn find_searches_both_buckets() {
        let store = Store::seeded(today());
        assert!(!StatusService::find(&store, "TR-2025-002").unwrap().is_draft);
        assert!(StatusService::find(&store, "tr-2025-003").unwrap().is_draft);
        assert!(StatusService::find(&store, "TR-2025-999").is_none());
    }

    #[test]
    fn rows_list_submitted_before_drafts() {
        let store = Store::seeded(today());
        let rows = StatusService::rows(&store);
        let numbers: Vec<&str> = rows.iter().map(|row| row.request_number.as_str()).collect();
        assert_eq!(numbers, vec!["TR-2025-002", "TR-2025-003"]);
        assert_eq!(rows[0].expense_count, 3);
    }

    #[test]
    fn timeline_tracks_progress() {
        let store = Store::seeded(today());
        let review = StatusService::find(&store, "TR-2025-002").unwrap();
        assert_eq!(
            completed(&StatusService::timeline(review)),
            vec!["Draft", "Submitted", "Under Review"]
        );

        let draft = StatusService::find(&store, "TR-2025-003").unwrap();
        assert_eq!(completed(&StatusService::timeline(draft)), vec!["Draft"]);

        let mut settled = review.clone();
        settled.status = SettlementStatus::Approved;
        settled.total_paid = 6200.0;
        assert_eq!(StatusService::timeline(&settled).iter().filter(|s| s.completed).count(), 5);
    }

    #[test]
    fn summary_switches_to_approved_total() {
        let store = Store::seeded(today());
        let review = StatusService::find(&store, "TR-2025-002").unwrap();
        let pending = StatusService::summary(review, 5000.0);
        assert_eq!(pending.total_approved, None);
        assert_eq!(pending.balance(), 1200.0);

        let mut approved = review.clone();
        approved.status = SettlementStatus::Approved;
        approved.total_approved = 4000.0;
        let summary = StatusService::summary(&approved, 5000.0);
        assert_eq!(summary.total_approved, Some(4000.0));
        assert_eq!(summary.balance_label(), "Balance Recoverable");
    }
}
