// ═══════════════════════════════════════════════════════════════════
// Storage Tests: backends, blob format, CareerModeRepository
// ═══════════════════════════════════════════════════════════════════

use career_tracker_core::errors::CoreError;
use career_tracker_core::models::career_mode::{CareerModeUpdate, NewCareerMode};
use career_tracker_core::models::player::{Player, PlayerStatus};
use career_tracker_core::models::season::Season;
use career_tracker_core::models::settings::Settings;
use career_tracker_core::storage::file::FileStore;
use career_tracker_core::storage::format::{self, STORAGE_KEY};
use career_tracker_core::storage::memory::{DetachedStore, MemoryStore};
use career_tracker_core::storage::repository::CareerModeRepository;
use career_tracker_core::storage::traits::KeyValueStore;

/// A blob in the layout the web app writes: form fields first, then
/// `fechaCreacion` and `temporadas`, with `id` appended last.
const LEGACY_BLOB: &str = concat!(
    r#"[{"nombre":"Barca Save","equipo":"FC Barcelona","temporadaInicial":"2023/24","#,
    r#""reglas":"","objetivos":"Win it all","fechaCreacion":"2023-11-14T22:13:20.000Z","#,
    r#""temporadas":[{"nombre":"Temporada 1","objetivos":"","jugadores":[{"nombre":"Pedri","#,
    r#""posicion":"MC","edad":"21","valoracion":"85","valoracionFinal":"87","valor":"90M€","#,
    r#""salario":"","estado":"en_club"},{"nombre":"Old","posicion":"DC","edad":"36","#,
    r#""valoracion":"70","valor":"1M€","estado":"retirado"}],"#,
    r#""posiciones":{"liga":"1º","copa":"","champions":"Semis","otros":""},"#,
    r#""finanzas":{"presupuestoInicial":"100M€","gastosFichajes":"","profitsFichajes":"","#,
    r#""gastosEntrenadores":"","gastosOjeadores":"","gastosInfraestructura":"","gastosOtros":"","#,
    r#""ingresosOtros":"","gastoTotal":"","ingresoTotal":"","presupuestoFinal":""},"#,
    r#""completada":true}],"id":"1700000000000"}]"#
);

/// Keys this crate doesn't model, at every nesting level.
const EXTENDED_BLOB: &str = concat!(
    r#"[{"nombre":"Barca Save","equipo":"FC Barcelona","temporadaInicial":"","reglas":"","#,
    r#""objetivos":"","fechaCreacion":"2023-11-14T22:13:20.000Z","temporadas":[{"nombre":"T1","#,
    r#""objetivos":"","jugadores":[{"nombre":"Pedri","posicion":"MC","edad":"21","#,
    r#""valoracion":"85","valor":"90M€","estado":"en_club","dorsal":8}],"#,
    r#""posiciones":{"liga":"","copa":"","champions":"","otros":""},"#,
    r#""finanzas":{"presupuestoInicial":"","gastosFichajes":"","profitsFichajes":"","#,
    r#""gastosEntrenadores":"","gastosOjeadores":"","gastosInfraestructura":"","gastosOtros":"","#,
    r#""ingresosOtros":"","gastoTotal":"","ingresoTotal":"","presupuestoFinal":""},"#,
    r#""completada":false,"notas":["derby win"]}],"id":"1","tema":"dark"}]"#
);

fn repo() -> CareerModeRepository<MemoryStore> {
    CareerModeRepository::new(MemoryStore::new())
}

fn raw(repo: &CareerModeRepository<MemoryStore>) -> Option<String> {
    repo.store().read(STORAGE_KEY).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Backends
// ═══════════════════════════════════════════════════════════════════

mod memory_store {
    use super::*;

    #[test]
    fn read_write_clear() {
        let mut store = MemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.read("k").unwrap(), None);

        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
        assert_eq!(store.len(), 1);

        store.clear("k").unwrap();
        assert_eq!(store.read("k").unwrap(), None);
        store.clear("k").unwrap();
    }

    #[test]
    fn with_entry() {
        let store = MemoryStore::with_entry("k", "v");
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.write("k", "v").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("v"));
    }
}

mod detached_store {
    use super::*;

    #[test]
    fn reads_are_empty() {
        assert_eq!(DetachedStore.read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn writes_fail() {
        let mut store = DetachedStore;
        let err = store.write(STORAGE_KEY, "[]").unwrap_err();
        assert!(matches!(err, CoreError::StorageUnavailable(_)));
        assert!(matches!(store.clear(STORAGE_KEY), Err(CoreError::StorageUnavailable(_))));
    }
}

mod file_store {
    use super::*;

    #[test]
    fn missing_key_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.read(STORAGE_KEY).unwrap(), None);
    }

    #[test]
    fn write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().join("nested"));
        store.write(STORAGE_KEY, "[]").unwrap();
        assert_eq!(store.read(STORAGE_KEY).unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("nested").join("fifa_career_modes.json").exists());
        assert!(!dir.path().join("nested").join("fifa_career_modes.json.tmp").exists());
    }

    #[test]
    fn overwrite_replaces_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.write("k", "first").unwrap();
        store.write("k", "second").unwrap();
        assert_eq!(store.read("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.write("k", "v").unwrap();
        store.clear("k").unwrap();
        store.clear("k").unwrap();
        assert_eq!(store.read("k").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        for key in ["", "../escape", "a/b", "a\\b", ".hidden"] {
            assert!(matches!(store.write(key, "v"), Err(CoreError::ValidationError(_))), "{key}");
        }
    }

    #[test]
    fn repository_over_files_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let id = {
            let mut repo = CareerModeRepository::new(FileStore::new(dir.path()));
            repo.create(NewCareerMode::new("Barca Save", "FC Barcelona")).unwrap()
        };
        let repo = CareerModeRepository::new(FileStore::new(dir.path()));
        assert_eq!(repo.get(&id).unwrap().name, "Barca Save");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Blob format
// ═══════════════════════════════════════════════════════════════════

mod blob_format {
    use super::*;

    #[test]
    fn decode_legacy_blob() {
        let modes = format::decode(LEGACY_BLOB).unwrap();
        assert_eq!(modes.len(), 1);
        let season = &modes[0].seasons[0];
        assert!(season.completed);
        assert_eq!(season.placements.continental_cup, "Semis");
        assert_eq!(season.players[0].final_rating.as_deref(), Some("87"));
        assert_eq!(season.players[1].status, PlayerStatus::Unrecognized("retirado".into()));
    }

    #[test]
    fn encode_reproduces_legacy_blob() {
        let modes = format::decode(LEGACY_BLOB).unwrap();
        assert_eq!(format::encode(&modes, false).unwrap(), LEGACY_BLOB);
    }

    #[test]
    fn id_is_written_last() {
        let mut repo = repo();
        repo.create(NewCareerMode::new("A", "B")).unwrap();
        let blob = raw(&repo).unwrap();
        assert!(blob.starts_with(r#"[{"nombre":"A""#));
        assert!(blob.contains(r#""temporadas":[],"id":""#));
    }

    #[test]
    fn unknown_keys_round_trip() {
        let modes = format::decode(EXTENDED_BLOB).unwrap();
        assert_eq!(modes[0].extra["tema"], "dark");
        assert_eq!(modes[0].seasons[0].extra["notas"][0], "derby win");
        assert_eq!(modes[0].seasons[0].players[0].extra["dorsal"], 8);
        assert_eq!(format::encode(&modes, false).unwrap(), EXTENDED_BLOB);
    }

    #[test]
    fn null_reads_as_empty() {
        assert!(format::decode("null").unwrap().is_empty());
    }

    #[test]
    fn missing_nested_keys_are_backfilled() {
        let blob = r#"[{"id":"1","nombre":"X","temporadas":[{"nombre":"T1"}]}]"#;
        let modes = format::decode(blob).unwrap();
        let encoded = format::encode(&modes, false).unwrap();
        let placements = r#""posiciones":{"liga":"","copa":"","champions":"","otros":""}"#;
        assert!(encoded.contains(placements));
        assert!(encoded.contains(r#""presupuestoFinal":"""#));
        assert!(encoded.contains(r#""completada":false"#));
    }

    #[test]
    fn corrupt_blob_is_an_error() {
        let err = format::decode("{not json").unwrap_err();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn pretty_encoding() {
        let modes = format::decode(LEGACY_BLOB).unwrap();
        let pretty = format::encode(&modes, true).unwrap();
        assert!(pretty.contains('\n'));
        assert_eq!(format::decode(&pretty).unwrap(), modes);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Repository
// ═══════════════════════════════════════════════════════════════════

mod repository {
    use super::*;

    #[test]
    fn empty_store_lists_nothing() {
        assert!(repo().list().is_empty());
    }

    #[test]
    fn mutation_keeps_unknown_keys_of_every_mode() {
        let other = r#"[{"nombre":"Other","id":"2","tema":"light"},{"#;
        let blob = EXTENDED_BLOB.replacen("[{", other, 1);
        let mut repo = CareerModeRepository::new(MemoryStore::with_entry(STORAGE_KEY, &blob));

        assert!(repo.update("1", CareerModeUpdate::default()).unwrap());
        let stored = raw(&repo).unwrap();
        assert!(stored.contains(r#""id":"2","tema":"light"}"#));
        assert!(stored.contains(r#""id":"1","tema":"dark"}"#));
        assert!(stored.contains(r#""notas":["derby win"]"#));
        assert!(stored.contains(r#""dorsal":8"#));
    }

    #[test]
    fn unreadable_store_fails_mutation_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fifa_career_modes.json");
        let mut bytes = br#"[{"nombre":"Keep me","id":"1"}]"#.to_vec();
        bytes.push(0xFF);
        std::fs::write(&path, &bytes).unwrap();

        let mut repo = CareerModeRepository::new(FileStore::new(dir.path()));
        let err = repo.create(NewCareerMode::new("New", "X")).unwrap_err();
        assert!(matches!(err, CoreError::FileIO(_)));
        assert!(matches!(repo.delete("1"), Err(CoreError::FileIO(_))));
        assert_eq!(std::fs::read(&path).unwrap(), bytes);
    }

    #[test]
    fn corrupt_store_is_overwritten_by_mutation() {
        let store = MemoryStore::with_entry(STORAGE_KEY, "<<garbage>>");
        let mut repo = CareerModeRepository::new(store);
        let id = repo.create(NewCareerMode::new("A", "B")).unwrap();
        let modes = repo.load_all().unwrap();
        assert_eq!(modes.len(), 1);
        assert_eq!(modes[0].id, id);
    }

    #[test]
    fn corrupt_store_lists_nothing() {
        let repo = CareerModeRepository::new(MemoryStore::with_entry(STORAGE_KEY, "<<garbage>>"));
        assert!(repo.list().is_empty());
        assert!(repo.load_all().is_err());
    }

    #[test]
    fn create_assigns_id_and_empty_seasons() {
        let mut repo = repo();
        let id = repo
            .create(NewCareerMode::new("Barca Save", "FC Barcelona").starting_season("2024/25"))
            .unwrap();
        assert!(!id.is_empty());
        assert!(id.chars().all(|c| c.is_ascii_digit()));

        let mode = repo.get(&id).unwrap();
        assert_eq!(mode.name, "Barca Save");
        assert_eq!(mode.starting_season_label, "2024/25");
        assert!(mode.seasons.is_empty());
        assert!(mode.created_at.ends_with('Z'));
    }

    #[test]
    fn ids_are_unique_for_rapid_creates() {
        let mut repo = repo();
        let ids: Vec<String> = (0..20)
            .map(|i| repo.create(NewCareerMode::new(format!("Mode {i}"), "Team")).unwrap())
            .collect();
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
        assert_eq!(repo.list().len(), 20);
    }

    #[test]
    fn get_unknown_is_none() {
        assert!(repo().get("nope").is_none());
    }

    #[test]
    fn round_trip_is_byte_identical() {
        let mut repo = repo();
        let id = repo.create(NewCareerMode::new("Barca Save", "FC Barcelona")).unwrap();
        repo.add_season(
            &id,
            Season::new("Temporada 1", "").with_players(vec![
                Player::new("Pedri", "MC", "21", "85", "90M€").with_purchase_value("40M€"),
            ]),
        )
        .unwrap();

        let before = raw(&repo).unwrap();
        let modes = repo.load_all().unwrap();
        repo.save_all(&modes).unwrap();
        assert_eq!(raw(&repo).unwrap(), before);
    }

    #[test]
    fn add_season_to_unknown_mode_leaves_storage_untouched() {
        let mut repo = repo();
        repo.create(NewCareerMode::new("A", "B")).unwrap();
        let before = raw(&repo);

        assert!(!repo.add_season("missing", Season::new("Temporada 1", "")).unwrap());
        assert_eq!(raw(&repo), before);
    }

    #[test]
    fn add_season_on_empty_store_writes_nothing() {
        let mut repo = repo();
        assert!(!repo.add_season("missing", Season::new("Temporada 1", "")).unwrap());
        assert!(repo.store().is_empty());
    }

    #[test]
    fn add_season_recomputes_finance() {
        let mut repo = repo();
        let id = repo.create(NewCareerMode::new("A", "B")).unwrap();
        let mut season = Season::new("Temporada 1", "");
        season.players.push(Player::new("X", "DC", "20", "70", "5M€").with_sale_value("7M€"));
        assert!(repo.add_season(&id, season).unwrap());

        let stored = &repo.get(&id).unwrap().seasons[0];
        assert_eq!(stored.finance.transfer_income, "7.0M€");
        assert_eq!(stored.finance.total_income, "7.0M€");
    }

    #[test]
    fn update_season_replaces_wholesale() {
        let mut repo = repo();
        let id = repo.create(NewCareerMode::new("A", "B")).unwrap();
        repo.add_season(&id, Season::new("Temporada 1", "Old goals")).unwrap();

        let mut replacement = Season::new("Renamed", "New goals");
        replacement.placements.league = "2º".into();
        assert!(repo.update_season(&id, 0, replacement).unwrap());

        let season = &repo.get(&id).unwrap().seasons[0];
        assert_eq!(season.name, "Renamed");
        assert_eq!(season.objectives, "New goals");
        assert_eq!(season.placements.league, "2º");
    }

    #[test]
    fn update_season_index_out_of_range_fails() {
        let mut repo = repo();
        let id = repo.create(NewCareerMode::new("A", "B")).unwrap();
        repo.add_season(&id, Season::new("Temporada 1", "")).unwrap();
        let before = raw(&repo);

        assert!(!repo.update_season(&id, 1, Season::new("Ghost", "")).unwrap());
        assert_eq!(raw(&repo), before);
        assert_eq!(repo.get(&id).unwrap().seasons.len(), 1);
    }

    #[test]
    fn update_season_unknown_mode_fails() {
        let mut repo = repo();
        assert!(!repo.update_season("missing", 0, Season::new("T", "")).unwrap());
    }

    #[test]
    fn completed_is_never_cleared() {
        let mut repo = repo();
        let id = repo.create(NewCareerMode::new("A", "B")).unwrap();
        let mut done = Season::new("Temporada 1", "");
        done.mark_completed();
        repo.add_season(&id, done).unwrap();

        assert!(repo.update_season(&id, 0, Season::new("Temporada 1", "edited")).unwrap());
        let season = &repo.get(&id).unwrap().seasons[0];
        assert!(season.completed);
        assert_eq!(season.objectives, "edited");
    }

    #[test]
    fn update_merges_fields() {
        let mut repo = repo();
        let id = repo.create(NewCareerMode::new("A", "B").rules("No loans")).unwrap();
        let changes = CareerModeUpdate {
            name: Some("Renamed".into()),
            ..CareerModeUpdate::default()
        };
        assert!(repo.update(&id, changes).unwrap());

        let mode = repo.get(&id).unwrap();
        assert_eq!(mode.id, id);
        assert_eq!(mode.name, "Renamed");
        assert_eq!(mode.custom_rules, "No loans");
    }

    #[test]
    fn update_unknown_mode_fails() {
        let mut repo = repo();
        assert!(!repo.update("missing", CareerModeUpdate::default()).unwrap());
    }

    #[test]
    fn delete_removes_only_target() {
        let mut repo = repo();
        let a = repo.create(NewCareerMode::new("A", "B")).unwrap();
        let b = repo.create(NewCareerMode::new("C", "D")).unwrap();

        assert!(repo.delete(&a).unwrap());
        assert!(!repo.delete(&a).unwrap());
        let remaining: Vec<String> = repo.list().into_iter().map(|m| m.id).collect();
        assert_eq!(remaining, vec![b]);
    }

    #[test]
    fn seasons_keep_append_order() {
        let mut repo = repo();
        let id = repo.create(NewCareerMode::new("A", "B")).unwrap();
        for n in 1..=3 {
            repo.add_season(&id, Season::new(format!("Temporada {n}"), "")).unwrap();
        }
        let seasons = repo.get(&id).unwrap().seasons;
        let names: Vec<String> = seasons.into_iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Temporada 1", "Temporada 2", "Temporada 3"]);
    }

    #[test]
    fn custom_storage_key() {
        let settings = Settings {
            storage_key: "other_key".into(),
            ..Settings::default()
        };
        let mut repo = CareerModeRepository::with_settings(MemoryStore::new(), &settings);
        repo.create(NewCareerMode::new("A", "B")).unwrap();
        assert!(repo.store().read("other_key").unwrap().is_some());
        assert!(repo.store().read(STORAGE_KEY).unwrap().is_none());
    }

    #[test]
    fn clear_removes_everything() {
        let mut repo = repo();
        repo.create(NewCareerMode::new("A", "B")).unwrap();
        repo.clear().unwrap();
        assert!(repo.list().is_empty());
    }

    #[test]
    fn detached_store_reads_empty_and_fails_writes() {
        let mut repo = CareerModeRepository::new(DetachedStore);
        assert!(repo.list().is_empty());
        let err = repo.create(NewCareerMode::new("A", "B")).unwrap_err();
        assert!(matches!(err, CoreError::StorageUnavailable(_)));
    }
}
