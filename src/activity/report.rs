// src/activity/report.rs
// =============================================================================
// Turns a Summary into the lines we print.
//
// For each group, in order, and each category, in Category::ALL order, one
// line is produced if the count is above zero. Rendering is a pure function:
// the same Summary always gives the same lines.
// =============================================================================

use super::category::Category;
use super::summary::Summary;

// Renders a summary as text lines (without the "- " bullet main.rs adds)
//
// A group without a repository name (an Overall summary of zero events)
// renders nothing: all of its counts are zero anyway.
pub fn render(summary: &Summary) -> Vec<String> {
    let mut lines = Vec::new();

    for group in &summary.groups {
        let Some(repo) = group.repo.as_deref() else {
            continue;
        };

        for (category, count) in group.counts.iter() {
            if count > 0 {
                lines.push(render_line(category, count, repo));
            }
        }
    }

    lines
}

fn render_line(category: Category, count: u64, repo: &str) -> String {
    match category {
        Category::Push => format!("Pushed {} commits to {}", count, repo),
        Category::PullRequest => format!("Opened a pull request in {}", repo),
        Category::Issue => format!("Opened a new issue in {}", repo),
        Category::Star => format!("Starred {}", repo),
        Category::Fork => format!("Forked {}", repo),
        Category::Create => format!("Created a new branch or tag in {}", repo),
        Category::Delete => format!("Deleted a branch or tag in {}", repo),
        Category::Release => format!("Created or published a release in {}", repo),
        Category::Wiki => format!("Edited a wiki page in {}", repo),
    }
}
