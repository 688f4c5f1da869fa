// src/activity/category.rs
// =============================================================================
// The nine kinds of activity we count, and the table that maps GitHub event
// types onto them.
//
// The table is plain data: adding a category means adding one row here and
// one template in report.rs. Event types that are not in the table (for
// example CommitCommentEvent or MemberEvent) are ignored on purpose.
// =============================================================================

use crate::github::Event;

/// A counted kind of activity, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Push,
    PullRequest,
    Issue,
    Star,
    Fork,
    Create,
    Delete,
    Release,
    Wiki,
}

/// How much one event adds to its category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Increment {
    /// One per event
    One,
    /// Number of commits in the push payload
    Commits,
}

// event type -> (category, increment)
static EVENT_TABLE: [(&str, Category, Increment); 9] = [
    ("PushEvent", Category::Push, Increment::Commits),
    ("PullRequestEvent", Category::PullRequest, Increment::One),
    ("IssuesEvent", Category::Issue, Increment::One),
    ("WatchEvent", Category::Star, Increment::One),
    ("ForkEvent", Category::Fork, Increment::One),
    ("CreateEvent", Category::Create, Increment::One),
    ("DeleteEvent", Category::Delete, Increment::One),
    ("ReleaseEvent", Category::Release, Increment::One),
    ("GollumEvent", Category::Wiki, Increment::One),
];

impl Category {
    pub const COUNT: usize = 9;

    /// Every category, in the order lines are printed
    pub const ALL: [Category; Category::COUNT] = [
        Category::Push,
        Category::PullRequest,
        Category::Issue,
        Category::Star,
        Category::Fork,
        Category::Create,
        Category::Delete,
        Category::Release,
        Category::Wiki,
    ];

    /// Position in `ALL`, used to index count arrays
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up the category and increment rule for a GitHub event type
    pub fn for_event_type(kind: &str) -> Option<(Category, Increment)> {
        EVENT_TABLE
            .iter()
            .find(|(event_type, _, _)| *event_type == kind)
            .map(|&(_, category, increment)| (category, increment))
    }

    /// Classifies an event; None for event types we don't count
    pub fn classify(event: &Event) -> Option<(Category, u64)> {
        let (category, increment) = Category::for_event_type(&event.kind)?;
        let amount = match increment {
            Increment::One => 1,
            Increment::Commits => event.commit_count() as u64,
        };
        Some((category, amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::test_support::event;

    #[test]
    fn test_all_matches_index_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn test_table_covers_every_category_once_in_order() {
        let categories: Vec<Category> = EVENT_TABLE.iter().map(|(_, c, _)| *c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
    }

    #[test]
    fn test_for_event_type() {
        assert_eq!(
            Category::for_event_type("PushEvent"),
            Some((Category::Push, Increment::Commits))
        );
        assert_eq!(
            Category::for_event_type("GollumEvent"),
            Some((Category::Wiki, Increment::One))
        );
        assert_eq!(Category::for_event_type("CommitCommentEvent"), None);
        // Case matters: the API sends exact tags
        assert_eq!(Category::for_event_type("pushevent"), None);
    }

    #[test]
    fn test_classify_push_counts_commits() {
        assert_eq!(
            Category::classify(&event("PushEvent", "a/b", 4)),
            Some((Category::Push, 4))
        );
        assert_eq!(
            Category::classify(&event("PushEvent", "a/b", 0)),
            Some((Category::Push, 0))
        );
    }

    #[test]
    fn test_classify_other_events_count_one() {
        assert_eq!(
            Category::classify(&event("WatchEvent", "a/b", 0)),
            Some((Category::Star, 1))
        );
        assert_eq!(Category::classify(&event("MemberEvent", "a/b", 0)), None);
    }
}
