use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::season::Season;

/// One tracked campaign: a team plus its seasons in chronological order.
///
/// Field order matches the stored layout, where `id` is written last.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CareerMode {
    #[serde(rename = "nombre", default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,

    #[serde(rename = "equipo", default, deserialize_with = "crate::models::null_as_default")]
    pub team: String,

    #[serde(
        rename = "temporadaInicial",
        default,
        deserialize_with = "crate::models::null_as_default"
    )]
    pub starting_season_label: String,

    #[serde(rename = "reglas", default, deserialize_with = "crate::models::null_as_default")]
    pub custom_rules: String,

    #[serde(rename = "objetivos", default, deserialize_with = "crate::models::null_as_default")]
    pub overall_objectives: String,

    /// ISO-8601 creation timestamp
    #[serde(rename = "fechaCreacion", default, deserialize_with = "crate::models::null_as_default")]
    pub created_at: String,

    /// Append-only; order drives default naming and carry-forward
    #[serde(rename = "temporadas", default, deserialize_with = "crate::models::null_as_default")]
    pub seasons: Vec<Season>,

    /// Assigned at creation, never changed afterwards
    #[serde(default, deserialize_with = "crate::models::null_as_default")]
    pub id: String,

    /// Keys this crate doesn't model, kept so they survive a rewrite
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CareerMode {
    /// The most recently appended season, if any.
    pub fn latest_season(&self) -> Option<&Season> {
        self.seasons.last()
    }

    pub fn completed_season_count(&self) -> usize {
        self.seasons.iter().filter(|s| s.completed).count()
    }
}

/// User-supplied fields for a new career mode. `id`, `created_at` and the
/// (empty) season list are filled in by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewCareerMode {
    pub name: String,
    pub team: String,
    pub starting_season_label: String,
    pub custom_rules: String,
    pub overall_objectives: String,
}

impl NewCareerMode {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            team: team.into(),
            ..Self::default()
        }
    }

    pub fn starting_season(mut self, label: impl Into<String>) -> Self {
        self.starting_season_label = label.into();
        self
    }

    pub fn rules(mut self, rules: impl Into<String>) -> Self {
        self.custom_rules = rules.into();
        self
    }

    pub fn objectives(mut self, objectives: impl Into<String>) -> Self {
        self.overall_objectives = objectives.into();
        self
    }
}

/// Partial update of a career mode's top-level fields. `None` leaves the
/// stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CareerModeUpdate {
    pub name: Option<String>,
    pub team: Option<String>,
    pub starting_season_label: Option<String>,
    pub custom_rules: Option<String>,
    pub overall_objectives: Option<String>,
}

impl CareerModeUpdate {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.team.is_none()
            && self.starting_season_label.is_none()
            && self.custom_rules.is_none()
            && self.overall_objectives.is_none()
    }

    /// Shallow-merge the provided fields into `mode`.
    pub fn apply_to(self, mode: &mut CareerMode) {
        if let Some(name) = self.name {
            mode.name = name;
        }
        if let Some(team) = self.team {
            mode.team = team;
        }
        if let Some(label) = self.starting_season_label {
            mode.starting_season_label = label;
        }
        if let Some(rules) = self.custom_rules {
            mode.custom_rules = rules;
        }
        if let Some(objectives) = self.overall_objectives {
            mode.overall_objectives = objectives;
        }
    }
}
