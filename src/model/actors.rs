//! Actor (tenant/business) listings shown next to the card-spending section.
//!
//! The roster files come from a separate export whose per-actor columns vary
//! between reports, so only the fields the report reads are typed and the
//! rest are kept verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    pub name: String,
    #[serde(default, alias = "kategori")]
    pub category: String,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStat {
    #[serde(alias = "kategori")]
    pub category: String,
    #[serde(default, alias = "antall")]
    pub count: u32,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

/// Contents of `aktorer/<id>.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActorRoster {
    #[serde(default)]
    pub actors: Vec<Actor>,
    #[serde(default)]
    pub category_stats: Vec<CategoryStat>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

impl ActorRoster {
    /// Actors in `category`, in file order.
    pub fn in_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Actor> {
        self.actors.iter().filter(move |a| a.category == category)
    }
}
