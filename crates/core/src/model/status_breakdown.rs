use crate::model::{SessionStatus, StudySession};

/// Number of sessions sharing one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusCount {
    pub status: SessionStatus,
    pub count: u32,
}

/// Count of sessions per status.
///
/// Entries are ordered by count (highest first), ties in `SessionStatus::ALL`
/// order. Statuses without any sessions are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    entries: Vec<StatusCount>,
    total: u32,
}

impl StatusBreakdown {
    #[must_use]
    pub fn from_sessions(sessions: &[StudySession]) -> Self {
        let mut counts = [0_u32; SessionStatus::ALL.len()];
        for session in sessions {
            let slot = status_index(session.status());
            counts[slot] = counts[slot].saturating_add(1);
        }

        let mut entries: Vec<StatusCount> = SessionStatus::ALL
            .iter()
            .zip(counts)
            .filter(|(_, count)| *count > 0)
            .map(|(status, count)| StatusCount {
                status: *status,
                count,
            })
            .collect();
        // Stable sort keeps the ALL order for equal counts.
        entries.sort_by(|a, b| b.count.cmp(&a.count));

        let total = counts.iter().fold(0_u32, |acc, c| acc.saturating_add(*c));
        Self { entries, total }
    }

    #[must_use]
    pub fn entries(&self) -> &[StatusCount] {
        &self.entries
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.total
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    #[must_use]
    pub fn count(&self, status: SessionStatus) -> u32 {
        self.entries
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }

    /// Fraction of all sessions with the given status, `0.0` when empty.
    #[must_use]
    pub fn share(&self, status: SessionStatus) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        f64::from(self.count(status)) / f64::from(self.total)
    }
}

fn status_index(status: SessionStatus) -> usize {
    match status {
        SessionStatus::Planned => 0,
        SessionStatus::InProgress => 1,
        SessionStatus::Completed => 2,
    }
}
