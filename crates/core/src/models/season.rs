use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::finance::{FinanceField, FinanceLedger};
use super::player::Player;
use crate::services::finance_service::FinanceService;

/// End-of-season competition placements, free text ("1st", "Semi-finals").
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Placements {
    #[serde(rename = "liga", deserialize_with = "crate::models::null_as_default")]
    pub league: String,

    #[serde(rename = "copa", deserialize_with = "crate::models::null_as_default")]
    pub domestic_cup: String,

    #[serde(rename = "champions", deserialize_with = "crate::models::null_as_default")]
    pub continental_cup: String,

    #[serde(rename = "otros", deserialize_with = "crate::models::null_as_default")]
    pub other: String,
}

/// One year of a career: roster, results and finances.
///
/// Players are identified by their position in `players`. Every roster or
/// finance edit made through these methods re-runs the finance aggregation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Season {
    #[serde(rename = "nombre", default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,

    #[serde(rename = "objetivos", default, deserialize_with = "crate::models::null_as_default")]
    pub objectives: String,

    #[serde(rename = "jugadores", default, deserialize_with = "crate::models::null_as_default")]
    pub players: Vec<Player>,

    #[serde(rename = "posiciones", default, deserialize_with = "crate::models::null_as_default")]
    pub placements: Placements,

    #[serde(rename = "finanzas", default, deserialize_with = "crate::models::null_as_default")]
    pub finance: FinanceLedger,

    /// Once set, never cleared by the system
    #[serde(rename = "completada", default, deserialize_with = "crate::models::null_as_default")]
    pub completed: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Season {
    pub fn new(name: impl Into<String>, objectives: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            objectives: objectives.into(),
            ..Self::default()
        }
    }

    pub fn with_players(mut self, players: Vec<Player>) -> Self {
        self.players = players;
        self.recompute_finance();
        self
    }

    /// Overwrite the derived ledger fields from the current roster.
    pub fn recompute_finance(&mut self) {
        self.finance = FinanceService::recompute(self);
    }

    /// Append a player. Returns the index it was stored at.
    pub fn add_player(&mut self, player: Player) -> usize {
        self.players.push(player);
        self.recompute_finance();
        self.players.len() - 1
    }

    /// Remove the player at `index`, or `None` when out of range.
    pub fn remove_player(&mut self, index: usize) -> Option<Player> {
        if index >= self.players.len() {
            return None;
        }
        let removed = self.players.remove(index);
        self.recompute_finance();
        Some(removed)
    }

    /// Edit the player at `index` in place. Returns `false` when out of range.
    pub fn update_player<F>(&mut self, index: usize, edit: F) -> bool
    where
        F: FnOnce(&mut Player),
    {
        match self.players.get_mut(index) {
            Some(player) => {
                edit(player);
                self.recompute_finance();
                true
            }
            None => false,
        }
    }

    pub fn set_finance_field(&mut self, field: FinanceField, value: impl Into<String>) {
        *self.finance.field_mut(field) = value.into();
        self.recompute_finance();
    }

    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}
