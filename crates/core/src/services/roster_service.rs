use std::cmp::Ordering;

use crate::models::player::{Player, PlayerFilter, PlayerSortKey, PlayerStatus};
use crate::models::season::Season;

use super::money::{parse_magnitude, parse_optional};

/// Head counts shown on a season card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RosterSummary {
    pub total: usize,
    pub in_squad: usize,
    pub on_loan: usize,
    pub sold: usize,
}

/// Read-only roster views: filtering, sorting and lookups.
pub struct RosterService;

impl RosterService {
    pub fn new() -> Self {
        Self
    }

    /// Filter and sort a roster.
    ///
    /// Each entry carries the player's index in `players`, so an edit made from
    /// a filtered view always targets the right player.
    /// Text keys compare lexicographically; numeric keys compare as parsed
    /// numbers, with unparseable values counting as zero. The sort is stable.
    pub fn filter_and_sort<'a>(
        &self,
        players: &'a [Player],
        filter: &PlayerFilter,
    ) -> Vec<(usize, &'a Player)> {
        let needle = filter
            .position
            .as_deref()
            .map(str::to_lowercase)
            .filter(|n| !n.is_empty());

        let mut view: Vec<(usize, &Player)> = players
            .iter()
            .enumerate()
            .filter(|(_, p)| match &needle {
                Some(n) => p.position.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .filter(|(_, p)| match &filter.status {
                Some(status) => &p.status == status,
                None => true,
            })
            .collect();

        view.sort_by(|(_, a), (_, b)| Self::compare(a, b, filter.sort_by));
        view
    }

    /// Index of the first player matching `name` and `position`.
    ///
    /// Name and position are not unique; prefer the indices returned by
    /// `filter_and_sort` when editing.
    pub fn find_by_name_position(
        &self,
        players: &[Player],
        name: &str,
        position: &str,
    ) -> Option<usize> {
        players.iter().position(|p| p.same_identity(name, position))
    }

    pub fn summary(&self, season: &Season) -> RosterSummary {
        season
            .players
            .iter()
            .fold(RosterSummary::default(), |mut acc, p| {
                acc.total += 1;
                match p.status {
                    PlayerStatus::InSquad => acc.in_squad += 1,
                    PlayerStatus::OnLoan => acc.on_loan += 1,
                    PlayerStatus::Sold => acc.sold += 1,
                    PlayerStatus::Unrecognized(_) => {}
                }
                acc
            })
    }

    fn compare(a: &Player, b: &Player, key: PlayerSortKey) -> Ordering {
        match key {
            PlayerSortKey::Name => a.name.cmp(&b.name),
            PlayerSortKey::Position => a.position.cmp(&b.position),
            PlayerSortKey::Age => Self::numeric(parse_magnitude(&a.age), parse_magnitude(&b.age)),
            PlayerSortKey::InitialRating => Self::numeric(
                parse_magnitude(&a.initial_rating),
                parse_magnitude(&b.initial_rating),
            ),
            PlayerSortKey::FinalRating => Self::numeric(
                parse_optional(a.final_rating.as_deref()),
                parse_optional(b.final_rating.as_deref()),
            ),
            PlayerSortKey::MarketValue => Self::numeric(
                parse_magnitude(&a.market_value),
                parse_magnitude(&b.market_value),
            ),
        }
    }

    fn numeric(a: f64, b: f64) -> Ordering {
        a.partial_cmp(&b).unwrap_or(Ordering::Equal)
    }
}

impl Default for RosterService {
    fn default() -> Self {
        Self::new()
    }
}
