use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Season-scoped roster state of a player.
///
/// Stored as the legacy strings `en_club`, `cedido` and `vendido`. Any other
/// stored value is kept verbatim in `Unrecognized` so that a load/save cycle
/// never rewrites user data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlayerStatus {
    /// Registered with the first team
    #[default]
    InSquad,
    /// Out on loan at another club
    OnLoan,
    /// Sold during the season
    Sold,
    /// A value outside the three known states, preserved as-is
    Unrecognized(String),
}

impl PlayerStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PlayerStatus::InSquad => "en_club",
            PlayerStatus::OnLoan => "cedido",
            PlayerStatus::Sold => "vendido",
            PlayerStatus::Unrecognized(raw) => raw,
        }
    }

    /// `true` for players who still belong to the club at season end.
    pub fn is_retained(&self) -> bool {
        matches!(self, PlayerStatus::InSquad | PlayerStatus::OnLoan)
    }
}

impl From<String> for PlayerStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "en_club" => PlayerStatus::InSquad,
            "cedido" => PlayerStatus::OnLoan,
            "vendido" => PlayerStatus::Sold,
            _ => PlayerStatus::Unrecognized(raw),
        }
    }
}

impl From<PlayerStatus> for String {
    fn from(status: PlayerStatus) -> Self {
        match status {
            PlayerStatus::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for PlayerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerStatus::InSquad => write!(f, "In squad"),
            PlayerStatus::OnLoan => write!(f, "On loan"),
            PlayerStatus::Sold => write!(f, "Sold"),
            PlayerStatus::Unrecognized(raw) => write!(f, "{raw}"),
        }
    }
}

/// One roster member within a season.
///
/// Every numeric-looking field is a free-form display string ("45M€", "82").
/// Only the finance aggregator and the roster sort parse them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Player {
    #[serde(rename = "nombre", default, deserialize_with = "crate::models::null_as_default")]
    pub name: String,

    #[serde(rename = "posicion", default, deserialize_with = "crate::models::null_as_default")]
    pub position: String,

    #[serde(rename = "edad", default, deserialize_with = "crate::models::null_as_default")]
    pub age: String,

    /// Rating at the start of the season
    #[serde(rename = "valoracion", default, deserialize_with = "crate::models::null_as_default")]
    pub initial_rating: String,

    /// Rating at the end of the season
    #[serde(rename = "valoracionFinal", default, skip_serializing_if = "Option::is_none")]
    pub final_rating: Option<String>,

    #[serde(rename = "valor", default, deserialize_with = "crate::models::null_as_default")]
    pub market_value: String,

    /// Fee paid to sign the player this season
    #[serde(rename = "valorCompra", default, skip_serializing_if = "Option::is_none")]
    pub purchase_value: Option<String>,

    /// Fee received when the player left this season
    #[serde(rename = "valorVenta", default, skip_serializing_if = "Option::is_none")]
    pub sale_value: Option<String>,

    #[serde(rename = "salario", default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,

    #[serde(rename = "estado", default, deserialize_with = "crate::models::null_as_default")]
    pub status: PlayerStatus,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        position: impl Into<String>,
        age: impl Into<String>,
        initial_rating: impl Into<String>,
        market_value: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            age: age.into(),
            initial_rating: initial_rating.into(),
            market_value: market_value.into(),
            ..Self::default()
        }
    }

    pub fn with_status(mut self, status: PlayerStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_final_rating(mut self, rating: impl Into<String>) -> Self {
        self.final_rating = Some(rating.into());
        self
    }

    pub fn with_purchase_value(mut self, value: impl Into<String>) -> Self {
        self.purchase_value = Some(value.into());
        self
    }

    pub fn with_sale_value(mut self, value: impl Into<String>) -> Self {
        self.sale_value = Some(value.into());
        self
    }

    pub fn with_salary(mut self, salary: impl Into<String>) -> Self {
        self.salary = Some(salary.into());
        self
    }

    /// The rating a following season starts from: the final rating when one
    /// was recorded, otherwise the initial rating.
    pub fn baseline_rating(&self) -> &str {
        match self.final_rating.as_deref() {
            Some(r) if !r.trim().is_empty() => r,
            _ => &self.initial_rating,
        }
    }

    /// Legacy identity: two players are "the same" when name and position match.
    pub fn same_identity(&self, name: &str, position: &str) -> bool {
        self.name == name && self.position == position
    }
}

/// Field a roster listing can be ordered by. Ordering is always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerSortKey {
    #[default]
    Name,
    Position,
    Age,
    InitialRating,
    FinalRating,
    MarketValue,
}

/// Criteria for a filtered roster view.
#[derive(Debug, Clone, Default)]
pub struct PlayerFilter {
    /// Case-insensitive substring matched against the position
    pub position: Option<String>,
    /// Exact status match; `None` shows every status
    pub status: Option<PlayerStatus>,
    pub sort_by: PlayerSortKey,
}

impl PlayerFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, fragment: impl Into<String>) -> Self {
        self.position = Some(fragment.into());
        self
    }

    pub fn status(mut self, status: PlayerStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn sort_by(mut self, key: PlayerSortKey) -> Self {
        self.sort_by = key;
        self
    }
}
