// crates/reelstats-core/src/reports.rs

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::ops::AddAssign;

use serde::Serialize;

use crate::model::MovieRecord;

/// Number of groups each report keeps after ranking.
pub const TOP_N: usize = 10;

/// A summable report metric with a total order over its sums.
pub trait MetricTotal: Copy + AddAssign {
    fn compare(&self, other: &Self) -> Ordering;
}

impl MetricTotal for i64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl MetricTotal for f64 {
    fn compare(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Per-group running sums that remember the order groups first appeared in.
///
/// Ranking sorts stably over that order, so groups with equal totals come out
/// in first-seen order under either sort direction.
#[derive(Debug)]
pub struct GroupTotals<K, M> {
    order: Vec<K>,
    totals: HashMap<K, M>,
}

impl<K, M> GroupTotals<K, M>
where
    K: Eq + Hash + Clone,
    M: MetricTotal,
{
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            totals: HashMap::new(),
        }
    }

    /// Adds `value` to the group's total, registering the group on first sight.
    pub fn add(&mut self, key: K, value: M) {
        match self.totals.entry(key) {
            Entry::Occupied(mut entry) => *entry.get_mut() += value,
            Entry::Vacant(entry) => {
                self.order.push(entry.key().clone());
                entry.insert(value);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<K, M> Default for GroupTotals<K, M>
where
    K: Eq + Hash + Clone,
    M: MetricTotal,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Builds per-group totals in one pass over the record set.
///
/// Every call starts from an empty accumulator, so re-running a report can
/// never fold the previous run's sums into the next. A record whose metric is
/// absent contributes nothing; a record with several keys (a multi-genre
/// movie) contributes its full metric to each of them.
pub fn aggregate<K, M, I>(
    records: &[MovieRecord],
    group_keys: impl Fn(&MovieRecord) -> I,
    metric: impl Fn(&MovieRecord) -> Option<M>,
) -> GroupTotals<K, M>
where
    K: Eq + Hash + Clone,
    M: MetricTotal,
    I: IntoIterator<Item = K>,
{
    let mut totals = GroupTotals::new();
    for record in records {
        let Some(value) = metric(record) else {
            continue;
        };
        for key in group_keys(record) {
            totals.add(key, value);
        }
    }
    totals
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Orders groups by total and keeps the first `limit`.
pub fn rank<K, M>(totals: GroupTotals<K, M>, direction: SortDirection, limit: usize) -> Vec<(K, M)>
where
    K: Eq + Hash + Clone,
    M: MetricTotal,
{
    let GroupTotals { order, mut totals } = totals;
    let mut ranked: Vec<(K, M)> = order
        .into_iter()
        .map(|key| {
            let total = totals.remove(&key).expect("tracked group lost its total");
            (key, total)
        })
        .collect();

    // Stable sort: equal totals stay in first-seen order.
    ranked.sort_by(|a, b| match direction {
        SortDirection::Ascending => a.1.compare(&b.1),
        SortDirection::Descending => b.1.compare(&a.1),
    });
    ranked.truncate(limit);
    ranked
}

/// The four canned reports, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Report {
    GenreProfitability,
    ActorProfitability,
    DirectorProfitability,
    ActorDirectorRating,
}

impl Report {
    pub const ALL: [Report; 4] = [
        Report::GenreProfitability,
        Report::ActorProfitability,
        Report::DirectorProfitability,
        Report::ActorDirectorRating,
    ];

    /// Banner printed above the report table.
    pub fn title(&self) -> &'static str {
        match self {
            Report::GenreProfitability => "Top 10 Genre with decreasing profitability.",
            Report::ActorProfitability => "Top 10 Actor with decreasing profitability.",
            Report::DirectorProfitability => "Top 10 Director with decreasing profitability.",
            Report::ActorDirectorRating => "Top 10 actor director pair with most IMDB rating.",
        }
    }

    pub fn key_label(&self) -> &'static str {
        match self {
            Report::GenreProfitability => "Genre",
            Report::ActorProfitability => "Actor",
            Report::DirectorProfitability => "Director",
            Report::ActorDirectorRating => "Actor||||Director",
        }
    }

    pub fn value_label(&self) -> &'static str {
        match self {
            Report::ActorDirectorRating => "Total IMDB Rating",
            _ => "Revenue",
        }
    }

    /// Computes the report rows for the given record set.
    ///
    /// The profitability reports rank ascending (least profitable group
    /// first); the rating report ranks descending (highest summed score
    /// first). Both cap at [`TOP_N`] rows.
    pub fn run(&self, records: &[MovieRecord]) -> Vec<ReportRow> {
        match self {
            Report::GenreProfitability => {
                profitability_rows(records, |record| record.genres.clone())
            }
            Report::ActorProfitability => {
                profitability_rows(records, |record| record.lead_actor.clone())
            }
            Report::DirectorProfitability => {
                profitability_rows(records, |record| record.director.clone())
            }
            Report::ActorDirectorRating => rating_rows(records),
        }
    }
}

fn profitability_rows<I>(
    records: &[MovieRecord],
    group_keys: impl Fn(&MovieRecord) -> I,
) -> Vec<ReportRow>
where
    I: IntoIterator<Item = String>,
{
    let totals = aggregate(records, group_keys, MovieRecord::profitability);
    rank(totals, SortDirection::Ascending, TOP_N)
        .into_iter()
        .map(|(key, total)| ReportRow {
            key,
            total: ReportTotal::Revenue(total),
        })
        .collect()
}

fn rating_rows(records: &[MovieRecord]) -> Vec<ReportRow> {
    let totals = aggregate(records, MovieRecord::actor_director, |record| {
        record.imdb_score
    });
    rank(totals, SortDirection::Descending, TOP_N)
        .into_iter()
        .map(|(pair, total)| ReportRow {
            key: pair.to_string(),
            total: ReportTotal::Rating(total),
        })
        .collect()
}

/// One printed line of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub key: String,
    pub total: ReportTotal,
}

/// The summed metric carried by a report row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum ReportTotal {
    Revenue(i64),
    Rating(f64),
}

impl fmt::Display for ReportTotal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportTotal::Revenue(total) => write!(f, "{total}"),
            ReportTotal::Rating(total) => write!(f, "{total:.1}"),
        }
    }
}
