use chrono::{SecondsFormat, Utc};

use crate::errors::CoreError;
use crate::models::career_mode::{CareerMode, CareerModeUpdate, NewCareerMode};
use crate::models::season::Season;
use crate::models::settings::Settings;

use super::format::{self, STORAGE_KEY};
use super::traits::KeyValueStore;

/// Mutation and query API over the whole career mode collection.
///
/// Every call reloads the collection from the store, and every mutation
/// writes the whole collection back (read → modify → write). Nothing is cached
/// between calls. There is no locking or versioning: if two writers share a
/// store, the last full snapshot written wins.
///
/// Misses (unknown mode id, season index out of range) return `false`/`None`
/// and leave the store untouched. `Err` means the store itself failed; a
/// mutation never writes after a failed read.
pub struct CareerModeRepository<S: KeyValueStore> {
    store: S,
    key: String,
    pretty: bool,
}

impl<S: KeyValueStore> CareerModeRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            key: STORAGE_KEY.to_string(),
            pretty: false,
        }
    }

    pub fn with_settings(store: S, settings: &Settings) -> Self {
        Self {
            store,
            key: settings.storage_key.clone(),
            pretty: settings.pretty_json,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ── Whole-collection access ─────────────────────────────────────

    /// Load the collection, surfacing read and parse failures.
    pub fn load_all(&self) -> Result<Vec<CareerMode>, CoreError> {
        match self.store.read(&self.key)? {
            Some(blob) if !blob.trim().is_empty() => format::decode(&blob),
            _ => Ok(Vec::new()),
        }
    }

    /// Replace the stored collection.
    pub fn save_all(&mut self, modes: &[CareerMode]) -> Result<(), CoreError> {
        let blob = format::encode(modes, self.pretty)?;
        self.store.write(&self.key, &blob)
    }

    /// Remove the stored collection entirely.
    pub fn clear(&mut self) -> Result<(), CoreError> {
        self.store.clear(&self.key)
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// All career modes. A missing, unreadable or corrupt blob reads as an
    /// empty collection; the failure is logged.
    pub fn list(&self) -> Vec<CareerMode> {
        match self.load_all() {
            Ok(modes) => modes,
            Err(e) => {
                log::warn!("treating '{}' as empty: {e}", self.key);
                Vec::new()
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<CareerMode> {
        self.list().into_iter().find(|m| m.id == id)
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Create a career mode with no seasons. Returns its id.
    ///
    /// The id is the current Unix time in milliseconds; if that id is taken it
    /// is bumped until unique.
    pub fn create(&mut self, fields: NewCareerMode) -> Result<String, CoreError> {
        let id = self
            .modify(|modes| {
                let id = Self::unique_id(modes, Utc::now().timestamp_millis());
                modes.push(CareerMode {
                    name: fields.name,
                    team: fields.team,
                    starting_season_label: fields.starting_season_label,
                    custom_rules: fields.custom_rules,
                    overall_objectives: fields.overall_objectives,
                    created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
                    seasons: Vec::new(),
                    id: id.clone(),
                    extra: Default::default(),
                });
                Some(id)
            })?
            .unwrap_or_default();

        log::info!("created career mode {id}");
        Ok(id)
    }

    /// Append a season to a mode. The finance ledger is recomputed first.
    pub fn add_season(&mut self, mode_id: &str, mut season: Season) -> Result<bool, CoreError> {
        season.recompute_finance();
        let added = self
            .modify(|modes| {
                let mode = modes.iter_mut().find(|m| m.id == mode_id)?;
                mode.seasons.push(season);
                Some(())
            })?
            .is_some();

        if !added {
            log::debug!("add_season: career mode {mode_id} not found");
        }
        Ok(added)
    }

    /// Replace the season at `index` wholesale (no merge). The finance ledger
    /// is recomputed, and a season already marked completed stays completed.
    pub fn update_season(
        &mut self,
        mode_id: &str,
        index: usize,
        mut season: Season,
    ) -> Result<bool, CoreError> {
        season.recompute_finance();
        let updated = self
            .modify(|modes| {
                let mode = modes.iter_mut().find(|m| m.id == mode_id)?;
                let slot = mode.seasons.get_mut(index)?;
                season.completed |= slot.completed;
                *slot = season;
                Some(())
            })?
            .is_some();

        if !updated {
            log::debug!("update_season: season {index} of career mode {mode_id} not found");
        }
        Ok(updated)
    }

    /// Shallow-merge the provided top-level fields into a mode.
    pub fn update(&mut self, mode_id: &str, changes: CareerModeUpdate) -> Result<bool, CoreError> {
        let updated = self
            .modify(|modes| {
                let mode = modes.iter_mut().find(|m| m.id == mode_id)?;
                changes.apply_to(mode);
                Some(())
            })?
            .is_some();

        if !updated {
            log::debug!("update: career mode {mode_id} not found");
        }
        Ok(updated)
    }

    pub fn delete(&mut self, mode_id: &str) -> Result<bool, CoreError> {
        let deleted = self
            .modify(|modes| {
                let before = modes.len();
                modes.retain(|m| m.id != mode_id);
                (modes.len() != before).then_some(())
            })?
            .is_some();

        if deleted {
            log::info!("deleted career mode {mode_id}");
        }
        Ok(deleted)
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Load, apply `f`, and write back only when `f` returns `Some`.
    fn modify<T, F>(&mut self, f: F) -> Result<Option<T>, CoreError>
    where
        F: FnOnce(&mut Vec<CareerMode>) -> Option<T>,
    {
        let mut modes = self.load_for_write()?;
        match f(&mut modes) {
            Some(out) => {
                self.save_all(&modes)?;
                Ok(Some(out))
            }
            None => Ok(None),
        }
    }

    /// Like `list`, but only a corrupt blob degrades to empty. A failed store
    /// read is returned, since writing after it would drop every stored mode.
    fn load_for_write(&self) -> Result<Vec<CareerMode>, CoreError> {
        match self.load_all() {
            Ok(modes) => Ok(modes),
            Err(CoreError::Deserialization(e)) => {
                log::warn!("overwriting corrupt '{}': {e}", self.key);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn unique_id(modes: &[CareerMode], mut millis: i64) -> String {
        loop {
            let candidate = millis.to_string();
            if !modes.iter().any(|m| m.id == candidate) {
                return candidate;
            }
            millis += 1;
        }
    }
}
