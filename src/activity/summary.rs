// src/activity/summary.rs
// =============================================================================
// Folds a list of events into per-category counts.
//
// Two modes:
// - Overall: everything lands in one group. That group remembers the
//   repository of the first event so the report has a name to print.
// - ByRepository: one group per repo.name, created the first time the repo
//   shows up, so groups keep the order in which repositories first appear.
//
// Every group holds a count for all nine categories (zero by default).
// The Summary is built in a single pass and never changed afterwards.
// =============================================================================

use std::collections::HashMap;

use tracing::debug;

use super::category::Category;
use crate::github::Event;

/// Whether to count across all repositories or per repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Grouping {
    #[default]
    Overall,
    ByRepository,
}

/// One count per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts([u64; Category::COUNT]);

impl Counts {
    pub fn get(&self, category: Category) -> u64 {
        self.0[category.index()]
    }

    /// (category, count) pairs in display order, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.iter().map(move |&category| (category, self.get(category)))
    }

    fn add(&mut self, category: Category, amount: u64) {
        self.0[category.index()] += amount;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Repository the lines of this group name.
    /// Always set in ByRepository mode; in Overall mode it is the first
    /// event's repository, or None when there were no events at all.
    pub repo: Option<String>,
    pub counts: Counts,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub groups: Vec<Group>,
}

// Builds the summary for a list of events
//
// Overall mode always yields exactly one group; ByRepository yields one
// group per distinct repository (none for an empty list).
pub fn summarize(events: &[Event], grouping: Grouping) -> Summary {
    let groups = match grouping {
        Grouping::Overall => {
            let mut group = Group {
                repo: events.first().map(|event| event.repo.name.clone()),
                counts: Counts::default(),
            };
            for event in events {
                record(&mut group.counts, event);
            }
            vec![group]
        }
        Grouping::ByRepository => {
            let mut groups: Vec<Group> = Vec::new();
            // repo name -> position in `groups`
            let mut positions: HashMap<&str, usize> = HashMap::new();

            for event in events {
                let position = *positions.entry(event.repo.name.as_str()).or_insert_with(|| {
                    groups.push(Group {
                        repo: Some(event.repo.name.clone()),
                        counts: Counts::default(),
                    });
                    groups.len() - 1
                });
                record(&mut groups[position].counts, event);
            }
            groups
        }
    };

    Summary { groups }
}

fn record(counts: &mut Counts, event: &Event) {
    match Category::classify(event) {
        Some((category, amount)) => counts.add(category, amount),
        None => debug!(kind = %event.kind, id = %event.id, "skipping uncounted event type"),
    }
}
