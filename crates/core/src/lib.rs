pub mod errors;
pub mod models;
pub mod services;
pub mod storage;

use models::{
    career_mode::{CareerMode, CareerModeUpdate, NewCareerMode},
    finance::FinanceField,
    player::{Player, PlayerFilter},
    season::Season,
    settings::Settings,
};
use services::{
    roster_service::{RosterService, RosterSummary},
    season_service::SeasonService,
};
use storage::{format, repository::CareerModeRepository, traits::KeyValueStore};

use errors::CoreError;

/// Main entry point for the career tracker core library.
///
/// Wraps the repository with the season and roster services. Holds no
/// collection state of its own: every call goes through the store.
#[must_use]
pub struct CareerTracker<S: KeyValueStore> {
    settings: Settings,
    repository: CareerModeRepository<S>,
    season_service: SeasonService,
    roster_service: RosterService,
}

impl<S: KeyValueStore> std::fmt::Debug for CareerTracker<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CareerTracker")
            .field("settings", &self.settings)
            .finish()
    }
}

impl<S: KeyValueStore> CareerTracker<S> {
    /// Open a tracker over `store` with default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, Settings::default())
    }

    pub fn with_settings(store: S, settings: Settings) -> Self {
        let repository = CareerModeRepository::with_settings(store, &settings);
        Self {
            settings,
            repository,
            season_service: SeasonService::new(),
            roster_service: RosterService::new(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn repository(&self) -> &CareerModeRepository<S> {
        &self.repository
    }

    // ── Career Modes ────────────────────────────────────────────────

    #[must_use]
    pub fn list_modes(&self) -> Vec<CareerMode> {
        self.repository.list()
    }

    #[must_use]
    pub fn get_mode(&self, id: &str) -> Option<CareerMode> {
        self.repository.get(id)
    }

    #[must_use]
    pub fn mode_count(&self) -> usize {
        self.repository.list().len()
    }

    pub fn create_mode(&mut self, fields: NewCareerMode) -> Result<String, CoreError> {
        self.repository.create(fields)
    }

    pub fn update_mode(&mut self, id: &str, changes: CareerModeUpdate) -> Result<bool, CoreError> {
        self.repository.update(id, changes)
    }

    pub fn delete_mode(&mut self, id: &str) -> Result<bool, CoreError> {
        self.repository.delete(id)
    }

    // ── Seasons ─────────────────────────────────────────────────────

    pub fn add_season(&mut self, mode_id: &str, season: Season) -> Result<bool, CoreError> {
        self.repository.add_season(mode_id, season)
    }

    pub fn update_season(
        &mut self,
        mode_id: &str,
        index: usize,
        season: Season,
    ) -> Result<bool, CoreError> {
        self.repository.update_season(mode_id, index, season)
    }

    /// Fetch one season by its position in the mode.
    #[must_use]
    pub fn get_season(&self, mode_id: &str, index: usize) -> Option<Season> {
        self.get_mode(mode_id)
            .and_then(|mode| mode.seasons.into_iter().nth(index))
    }

    /// Append the next season with its default name and, when a previous
    /// season exists, the roster carried forward from it.
    /// Returns the new season's index.
    pub fn start_next_season(
        &mut self,
        mode_id: &str,
        objectives: &str,
    ) -> Result<usize, CoreError> {
        let mode = self
            .get_mode(mode_id)
            .ok_or_else(|| CoreError::ModeNotFound(mode_id.to_string()))?;

        let mut season = self
            .season_service
            .next_season(&mode, &self.settings.season_name_prefix);
        season.objectives = objectives.to_string();

        if !self.repository.add_season(mode_id, season)? {
            return Err(CoreError::ModeNotFound(mode_id.to_string()));
        }
        Ok(mode.seasons.len())
    }

    /// Mark a season completed. There is no way to undo this.
    pub fn complete_season(&mut self, mode_id: &str, index: usize) -> Result<(), CoreError> {
        self.edit_season(mode_id, index, |season| {
            season.mark_completed();
            Ok(())
        })
    }

    pub fn set_finance_field(
        &mut self,
        mode_id: &str,
        index: usize,
        field: FinanceField,
        value: &str,
    ) -> Result<(), CoreError> {
        self.edit_season(mode_id, index, |season| {
            season.set_finance_field(field, value);
            Ok(())
        })
    }

    // ── Roster ──────────────────────────────────────────────────────

    /// Add a player to a season. Returns the player's index in the roster.
    pub fn add_player(
        &mut self,
        mode_id: &str,
        season_index: usize,
        player: Player,
    ) -> Result<usize, CoreError> {
        if player.name.trim().is_empty() {
            return Err(CoreError::ValidationError("Player name must not be empty".into()));
        }
        self.edit_season(mode_id, season_index, |season| Ok(season.add_player(player)))
    }

    pub fn remove_player(
        &mut self,
        mode_id: &str,
        season_index: usize,
        player_index: usize,
    ) -> Result<Player, CoreError> {
        self.edit_season(mode_id, season_index, |season| {
            season
                .remove_player(player_index)
                .ok_or_else(|| CoreError::PlayerNotFound {
                    season: season.name.clone(),
                    index: player_index,
                })
        })
    }

    /// Edit one player in place, addressed by roster index.
    pub fn update_player<F>(
        &mut self,
        mode_id: &str,
        season_index: usize,
        player_index: usize,
        edit: F,
    ) -> Result<(), CoreError>
    where
        F: FnOnce(&mut Player),
    {
        self.edit_season(mode_id, season_index, |season| {
            if season.update_player(player_index, edit) {
                Ok(())
            } else {
                Err(CoreError::PlayerNotFound {
                    season: season.name.clone(),
                    index: player_index,
                })
            }
        })
    }

    /// Filtered, sorted roster of one season, paired with roster indices.
    pub fn filtered_players(
        &self,
        mode_id: &str,
        season_index: usize,
        filter: &PlayerFilter,
    ) -> Result<Vec<(usize, Player)>, CoreError> {
        let season = self.require_season(mode_id, season_index)?;
        Ok(self
            .roster_service
            .filter_and_sort(&season.players, filter)
            .into_iter()
            .map(|(idx, p)| (idx, p.clone()))
            .collect())
    }

    pub fn roster_summary(
        &self,
        mode_id: &str,
        season_index: usize,
    ) -> Result<RosterSummary, CoreError> {
        let season = self.require_season(mode_id, season_index)?;
        Ok(self.roster_service.summary(&season))
    }

    // ── Export / Import ─────────────────────────────────────────────

    /// Export the whole collection as JSON, in the stored format.
    pub fn export_json(&self) -> Result<String, CoreError> {
        let modes = self.repository.load_all()?;
        format::encode(&modes, self.settings.pretty_json)
    }

    /// Replace the whole collection with the modes in `json`.
    /// Every mode must carry a non-empty id, and ids must be unique.
    /// Returns the number of modes imported.
    pub fn import_json(&mut self, json: &str) -> Result<usize, CoreError> {
        let modes = format::decode(json)?;

        let mut seen = std::collections::HashSet::new();
        for mode in &modes {
            if mode.id.is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "Career mode '{}' has no id",
                    mode.name
                )));
            }
            if !seen.insert(mode.id.as_str()) {
                return Err(CoreError::ValidationError(format!(
                    "Duplicate career mode id '{}'",
                    mode.id
                )));
            }
        }

        self.repository.save_all(&modes)?;
        log::info!("imported {} career modes", modes.len());
        Ok(modes.len())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn require_season(&self, mode_id: &str, index: usize) -> Result<Season, CoreError> {
        let mode = self
            .get_mode(mode_id)
            .ok_or_else(|| CoreError::ModeNotFound(mode_id.to_string()))?;
        mode.seasons
            .into_iter()
            .nth(index)
            .ok_or_else(|| CoreError::SeasonNotFound {
                mode_id: mode_id.to_string(),
                index,
            })
    }

    /// Load one season, apply `edit`, and store it back. Nothing is written
    /// when `edit` fails.
    fn edit_season<T, F>(&mut self, mode_id: &str, index: usize, edit: F) -> Result<T, CoreError>
    where
        F: FnOnce(&mut Season) -> Result<T, CoreError>,
    {
        let mut season = self.require_season(mode_id, index)?;
        let out = edit(&mut season)?;
        if !self.repository.update_season(mode_id, index, season)? {
            return Err(CoreError::SeasonNotFound {
                mode_id: mode_id.to_string(),
                index,
            });
        }
        Ok(out)
    }
}
