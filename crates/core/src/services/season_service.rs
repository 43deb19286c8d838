use crate::models::career_mode::CareerMode;
use crate::models::player::{Player, PlayerStatus};
use crate::models::season::Season;

/// Builds new seasons: default naming and the roster carried over from the
/// previous season.
pub struct SeasonService;

impl SeasonService {
    pub fn new() -> Self {
        Self
    }

    /// Starting roster for the season that follows `source`.
    ///
    /// - sold players are dropped
    /// - loaned players come back into the squad
    /// - transfer fees are cleared (they belong to the season they happened in)
    /// - the new initial rating is last season's final rating, or the old
    ///   initial rating when no final rating was recorded
    pub fn carry_forward(&self, source: &Season) -> Vec<Player> {
        let carried: Vec<Player> = source
            .players
            .iter()
            .filter(|p| p.status.is_retained())
            .map(|p| Player {
                initial_rating: p.baseline_rating().to_string(),
                final_rating: Some(String::new()),
                purchase_value: Some(String::new()),
                sale_value: Some(String::new()),
                status: PlayerStatus::InSquad,
                ..p.clone()
            })
            .collect();

        log::debug!(
            "carried {} of {} players forward from '{}'",
            carried.len(),
            source.players.len(),
            source.name
        );
        carried
    }

    /// "{prefix} {n}" where `n` is the 1-based position of the new season.
    pub fn default_season_name(&self, prefix: &str, existing_seasons: usize) -> String {
        format!("{prefix} {}", existing_seasons + 1)
    }

    /// The next season for `mode`: default name, and either an empty roster
    /// (first season) or the roster carried forward from the latest season.
    pub fn next_season(&self, mode: &CareerMode, prefix: &str) -> Season {
        let name = self.default_season_name(prefix, mode.seasons.len());
        let season = Season::new(name, "");
        match mode.latest_season() {
            Some(previous) => season.with_players(self.carry_forward(previous)),
            None => season,
        }
    }
}

impl Default for SeasonService {
    fn default() -> Self {
        Self::new()
    }
}
