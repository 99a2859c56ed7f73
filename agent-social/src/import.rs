//! Bulk loading of follow edges from CSV.
//!
//! The input has a header row with at least the columns `Agent` (the
//! follower) and `Followed Agent` (the followee). Each row names both sides
//! by display name; names are resolved against the roster row by row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use agent_primitives::AgentRoster;
use serde::Deserialize;
use tracing::{info, warn};

use crate::graph::FollowGraph;
use crate::SocialResult;

/// One follow edge as it appears in the CSV input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FollowRow {
    /// Display name of the follower.
    #[serde(rename = "Agent")]
    pub follower: String,
    /// Display name of the followed agent.
    #[serde(rename = "Followed Agent")]
    pub followee: String,
}

impl FollowRow {
    /// Creates a row from two display names.
    #[must_use]
    pub fn new(follower: impl Into<String>, followee: impl Into<String>) -> Self {
        Self {
            follower: follower.into(),
            followee: followee.into(),
        }
    }
}

/// A row whose edge was not added to the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedRow {
    /// A name did not match any agent in the roster.
    Unresolved {
        /// 1-based data row number, header excluded.
        row: usize,
        /// The name that failed to resolve.
        name: String,
    },
    /// The graph refused the edge: self-follow or already following.
    Rejected {
        /// 1-based data row number, header excluded.
        row: usize,
        /// The row as read.
        edge: FollowRow,
    },
}

/// Outcome of an import run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Data rows processed.
    pub rows: usize,
    /// Edges newly added to the graph.
    pub added: usize,
    /// Rows that did not produce an edge, in input order.
    pub skipped: Vec<SkippedRow>,
}

impl ImportReport {
    /// Returns whether every row produced a new edge.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Rows skipped because a name was not in the roster.
    pub fn unresolved(&self) -> impl Iterator<Item = &SkippedRow> {
        self.skipped
            .iter()
            .filter(|row| matches!(row, SkippedRow::Unresolved { .. }))
    }

    /// Rows skipped because the graph refused the edge.
    pub fn rejected(&self) -> impl Iterator<Item = &SkippedRow> {
        self.skipped
            .iter()
            .filter(|row| matches!(row, SkippedRow::Rejected { .. }))
    }
}

/// Applies already-parsed rows to the graph.
///
/// Rows naming an agent outside the roster are skipped; refused edges are
/// reported but do not stop the import.
pub fn import_rows<I>(graph: &mut FollowGraph, roster: &AgentRoster, rows: I) -> ImportReport
where
    I: IntoIterator<Item = FollowRow>,
{
    let mut report = ImportReport::default();
    for (offset, edge) in rows.into_iter().enumerate() {
        apply_row(graph, roster, offset + 1, edge, &mut report);
    }
    info!(
        rows = report.rows,
        added = report.added,
        skipped = report.skipped.len(),
        "follow import finished"
    );
    report
}

/// Reads CSV rows from `reader` and applies them to the graph.
///
/// # Errors
///
/// Returns [`SocialError::Csv`](crate::SocialError::Csv) when the header lacks a
/// required column or a row cannot be read. Rows applied before the failure
/// stay in the graph.
pub fn import_follows<R: Read>(
    graph: &mut FollowGraph,
    roster: &AgentRoster,
    reader: R,
) -> SocialResult<ImportReport> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut report = ImportReport::default();
    for (offset, row) in csv_reader.deserialize::<FollowRow>().enumerate() {
        apply_row(graph, roster, offset + 1, row?, &mut report);
    }
    info!(
        rows = report.rows,
        added = report.added,
        skipped = report.skipped.len(),
        "follow import finished"
    );
    Ok(report)
}

/// Opens `path` and imports its rows.
///
/// # Errors
///
/// Returns [`SocialError::Io`](crate::SocialError::Io) when the file cannot be
/// opened, plus every error of [`import_follows`].
pub fn import_follows_from_path(
    graph: &mut FollowGraph,
    roster: &AgentRoster,
    path: impl AsRef<Path>,
) -> SocialResult<ImportReport> {
    let file = File::open(path.as_ref())?;
    import_follows(graph, roster, file)
}

fn apply_row(
    graph: &mut FollowGraph,
    roster: &AgentRoster,
    row: usize,
    edge: FollowRow,
    report: &mut ImportReport,
) {
    report.rows += 1;

    let Some(follower) = roster.find_by_name(&edge.follower) else {
        warn!(row, name = %edge.follower, "follower not in roster; row skipped");
        report.skipped.push(SkippedRow::Unresolved {
            row,
            name: edge.follower,
        });
        return;
    };
    let Some(followee) = roster.find_by_name(&edge.followee) else {
        warn!(row, name = %edge.followee, "followed agent not in roster; row skipped");
        report.skipped.push(SkippedRow::Unresolved {
            row,
            name: edge.followee,
        });
        return;
    };

    if graph.add_follow(follower, followee) {
        report.added += 1;
    } else {
        warn!(
            row,
            follower = %edge.follower,
            followee = %edge.followee,
            "follow edge refused"
        );
        report.skipped.push(SkippedRow::Rejected { row, edge });
    }
}

#[cfg(test)]
mod tests {
    use agent_primitives::Agent;

    use super::*;
    use crate::SocialError;

    fn roster() -> AgentRoster {
        AgentRoster::from_names(["Anna", "Bruno", "Chiara"]).unwrap()
    }

    #[test]
    fn applies_rows_in_order() {
        let roster = roster();
        let mut graph = FollowGraph::with_agents(&roster);
        let csv = "Agent,Followed Agent\nAnna,Bruno\nAnna,Chiara\nChiara,Anna\n";

        let report = import_follows(&mut graph, &roster, csv.as_bytes()).unwrap();

        assert_eq!(report.rows, 3);
        assert_eq!(report.added, 3);
        assert!(report.is_clean());
        let anna = roster.find_by_name("Anna").unwrap();
        let names: Vec<_> = graph.followees(anna).iter().map(|a| a.name()).collect();
        assert_eq!(names, ["Bruno", "Chiara"]);
    }

    #[test]
    fn unknown_name_does_not_reuse_previous_row() {
        let roster = roster();
        let mut graph = FollowGraph::with_agents(&roster);
        let csv = "Agent,Followed Agent\nAnna,Bruno\nXavier,Chiara\n";

        let report = import_follows(&mut graph, &roster, csv.as_bytes()).unwrap();

        assert_eq!(report.added, 1);
        assert_eq!(
            report.skipped,
            [SkippedRow::Unresolved {
                row: 2,
                name: "Xavier".into()
            }]
        );
        let anna = roster.find_by_name("Anna").unwrap();
        assert_eq!(graph.followees(anna).len(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn shared_name_binds_last_roster_agent() {
        let first = Agent::new("Dup").unwrap();
        let second = Agent::new("Dup").unwrap();
        let target = Agent::new("B").unwrap();
        let roster =
            AgentRoster::from_agents([first.clone(), second.clone(), target.clone()]).unwrap();
        let mut graph = FollowGraph::with_agents(&roster);

        let report = import_follows(&mut graph, &roster, "Agent,Followed Agent\nDup,B\n".as_bytes())
            .unwrap();

        assert_eq!(report.added, 1);
        assert!(!graph.is_following(&first, &target));
        assert!(graph.is_following(&second, &target));
    }

    #[test]
    fn refused_edges_do_not_abort() {
        let roster = roster();
        let mut graph = FollowGraph::with_agents(&roster);
        let rows = [
            FollowRow::new("Anna", "Anna"),
            FollowRow::new("Anna", "Bruno"),
            FollowRow::new("Anna", "Bruno"),
            FollowRow::new("Bruno", "Chiara"),
        ];

        let report = import_rows(&mut graph, &roster, rows);

        assert_eq!(report.rows, 4);
        assert_eq!(report.added, 2);
        assert_eq!(report.rejected().count(), 2);
        assert_eq!(report.unresolved().count(), 0);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn tolerates_extra_columns_and_padding() {
        let roster = roster();
        let mut graph = FollowGraph::new();
        let csv = "Since,Agent,Followed Agent\n2024, Bruno , Anna\n";

        let report = import_follows(&mut graph, &roster, csv.as_bytes()).unwrap();

        assert_eq!(report.added, 1);
        let bruno = roster.find_by_name("Bruno").unwrap();
        let anna = roster.find_by_name("Anna").unwrap();
        assert!(graph.is_following(bruno, anna));
    }

    #[test]
    fn missing_column_is_an_error() {
        let roster = roster();
        let mut graph = FollowGraph::new();
        let csv = "Agent,Target\nAnna,Bruno\n";

        let err = import_follows(&mut graph, &roster, csv.as_bytes()).expect_err("bad header");
        assert!(matches!(err, SocialError::Csv { .. }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let roster = roster();
        let mut graph = FollowGraph::new();
        let mut path = std::env::temp_dir();
        path.push(format!("follows-{}.csv", uuid::Uuid::new_v4()));

        let err = import_follows_from_path(&mut graph, &roster, &path).expect_err("missing");
        assert!(matches!(err, SocialError::Io { .. }));
    }
}
