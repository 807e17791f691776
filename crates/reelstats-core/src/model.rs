// crates/reelstats-core/src/model.rs

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single movie row after the parse boundary.
///
/// Numeric fields that were missing or unparseable in the source are `None`,
/// never zero; the aggregator skips such records rather than counting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieRecord {
    pub genres: Vec<String>,
    pub lead_actor: Option<String>,
    pub director: Option<String>,
    pub gross: Option<i64>,
    pub budget: Option<i64>,
    pub imdb_score: Option<f64>,
}

impl MovieRecord {
    /// Gross minus budget, present only when both source fields were.
    pub fn profitability(&self) -> Option<i64> {
        match (self.gross, self.budget) {
            (Some(gross), Some(budget)) => Some(gross - budget),
            _ => None,
        }
    }

    /// The actor-director pair key, present only when both names were.
    pub fn actor_director(&self) -> Option<ActorDirector> {
        match (&self.lead_actor, &self.director) {
            (Some(actor), Some(director)) => Some(ActorDirector {
                actor: actor.clone(),
                director: director.clone(),
            }),
            _ => None,
        }
    }
}

/// Composite group key for the actor-director rating report.
///
/// A real two-field key: a separator sequence appearing inside a name can
/// never merge two distinct pairs. The display form keeps the historical
/// `actor||||director` shape the report surface shows.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorDirector {
    pub actor: String,
    pub director: String,
}

impl fmt::Display for ActorDirector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}||||{}", self.actor, self.director)
    }
}
