//! Console summary of a generated event collection.

use events_core::{Event, EventKind, Window};
use std::collections::HashMap;
use std::fmt;

/// Number of owners shown in the distribution report.
const TOP_OWNERS: usize = 10;

/// Per-kind and per-owner distribution of a generated collection.
#[derive(Debug, Clone)]
pub struct SummaryReport {
    total: usize,
    window: Window,
    kind_counts: Vec<(EventKind, u64)>,
    top_owners: Vec<(String, u64)>,
}

impl SummaryReport {
    /// Compute the distribution of `events` generated over `window`.
    pub fn from_events(events: &[Event], window: &Window) -> Self {
        let mut kind_counts: Vec<(EventKind, u64)> = Vec::new();
        for event in events {
            match kind_counts.iter_mut().find(|(kind, _)| *kind == event.kind) {
                Some(entry) => entry.1 += 1,
                None => kind_counts.push((event.kind, 1)),
            }
        }
        kind_counts.sort_by_key(|(kind, _)| kind.as_str());

        let mut top_owners: Vec<(String, u64)> = Vec::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();
        for event in events {
            match first_seen.get(&event.owner) {
                Some(&i) => top_owners[i].1 += 1,
                None => {
                    first_seen.insert(event.owner.clone(), top_owners.len());
                    top_owners.push((event.owner.clone(), 1));
                }
            }
        }
        // Stable sort keeps first-seen order for equal counts.
        top_owners.sort_by(|a, b| b.1.cmp(&a.1));
        top_owners.truncate(TOP_OWNERS);

        Self {
            total: events.len(),
            window: *window,
            kind_counts,
            top_owners,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Counts per event kind, sorted by kind name.
    pub fn kind_counts(&self) -> &[(EventKind, u64)] {
        &self.kind_counts
    }

    /// Top owners by descending event count, ties in first-seen order.
    pub fn top_owners(&self) -> &[(String, u64)] {
        &self.top_owners
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} events", self.total)?;
        writeln!(
            f,
            "Date range: {} to {}",
            self.window.start.format("%Y-%m-%d"),
            self.window.end.format("%Y-%m-%d")
        )?;

        writeln!(f)?;
        writeln!(f, "Event type distribution:")?;
        for (kind, count) in &self.kind_counts {
            writeln!(f, "  {kind}: {count}")?;
        }

        writeln!(f)?;
        writeln!(f, "Owner distribution:")?;
        for (owner, count) in &self.top_owners {
            writeln!(f, "  {owner}: {count}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use events_core::{EventPayload, OwnerKind};

    fn window() -> Window {
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        Window::trailing_days(end, 90)
    }

    fn event(kind: EventKind, owner: &str) -> Event {
        let timestamp = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        Event {
            id: format!("{owner}-docs-{}-x", kind.as_str()),
            kind,
            owner: owner.to_string(),
            owner_kind: OwnerKind::User,
            repo: "docs".to_string(),
            member: "alice".to_string(),
            timestamp,
            payload: EventPayload::Commit {
                sha: "abcdef0".to_string(),
                message: "Fix typo".to_string(),
                additions: 10,
                deletions: 5,
                files_changed: 1,
            },
            created_at: timestamp,
        }
    }

    #[test]
    fn test_kind_counts_sorted_by_name() {
        let events = vec![
            event(EventKind::PullRequest, "alice"),
            event(EventKind::Deploy, "alice"),
            event(EventKind::Commit, "alice"),
            event(EventKind::Deploy, "bob"),
        ];

        let report = SummaryReport::from_events(&events, &window());

        let names: Vec<&str> = report
            .kind_counts()
            .iter()
            .map(|(kind, _)| kind.as_str())
            .collect();
        assert_eq!(names, vec!["commit", "deploy", "pull_request"]);
        assert_eq!(report.kind_counts()[1], (EventKind::Deploy, 2));
    }

    #[test]
    fn test_top_owners_descending_with_ties_in_first_seen_order() {
        let events = vec![
            event(EventKind::Commit, "bob"),
            event(EventKind::Commit, "alice"),
            event(EventKind::Commit, "alice"),
            event(EventKind::Commit, "carol"),
        ];

        let report = SummaryReport::from_events(&events, &window());

        let owners: Vec<&str> = report
            .top_owners()
            .iter()
            .map(|(owner, _)| owner.as_str())
            .collect();
        // alice leads; bob and carol tie at 1 and keep first-seen order
        assert_eq!(owners, vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn test_top_owners_truncated_to_ten() {
        let mut events = Vec::new();
        for i in 0..15 {
            events.push(event(EventKind::Commit, &format!("owner-{i}")));
        }

        let report = SummaryReport::from_events(&events, &window());

        assert_eq!(report.top_owners().len(), 10);
        assert_eq!(report.total(), 15);
    }

    #[test]
    fn test_empty_collection() {
        let report = SummaryReport::from_events(&[], &window());

        assert_eq!(report.total(), 0);
        assert!(report.kind_counts().is_empty());
        assert!(report.top_owners().is_empty());
    }

    #[test]
    fn test_display_layout() {
        let events = vec![
            event(EventKind::Commit, "alice"),
            event(EventKind::Commit, "alice"),
            event(EventKind::Deploy, "bob"),
        ];

        let rendered = SummaryReport::from_events(&events, &window()).to_string();

        assert!(rendered.starts_with("Generated 3 events\n"));
        assert!(rendered.contains("Date range: 2024-03-03 to 2024-06-01"));
        assert!(rendered.contains("Event type distribution:\n  commit: 2\n  deploy: 1\n"));
        assert!(rendered.contains("Owner distribution:\n  alice: 2\n  bob: 1\n"));
    }
}
