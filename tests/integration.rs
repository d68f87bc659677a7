// SPDX-License-Identifier: MPL-2.0
use citysync::app::dispatch::{select_view, select_view_raw, ViewDescriptor};
use citysync::app::persistence::ACTIVE_SECTION_KEY;
use citysync::app::section::SectionId;
use citysync::app::section_state::SectionState;
use citysync::app::session_store::{FileStore, MemoryStore, SessionStore, UnavailableStore};
use citysync::config::{self, Config, SessionStoreKind};
use citysync::i18n::I18n;
use citysync::ui::theming::ThemeMode;
use tempfile::tempdir;

fn file_state(dir: &std::path::Path) -> SectionState {
    SectionState::init(Box::new(FileStore::in_dir(dir)))
}

#[test]
fn navigation_survives_a_restart_in_the_same_session() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut first = file_state(dir.path());
    assert_eq!(first.active(), SectionId::Home);
    first.set_active(SectionId::Community);
    drop(first);

    let second = file_state(dir.path());
    assert_eq!(second.active(), SectionId::Community);
    assert_eq!(second.view(), ViewDescriptor::CommunityHub);
}

#[test]
fn new_session_directory_starts_on_landing() {
    let old_session = tempdir().expect("Failed to create temporary directory");
    let mut state = file_state(old_session.path());
    state.set_active(SectionId::Map);

    let new_session = tempdir().expect("Failed to create temporary directory");
    let fresh = file_state(new_session.path());
    assert_eq!(fresh.active(), SectionId::Home);
}

#[test]
fn tampered_session_value_resolves_to_home() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut store = FileStore::in_dir(dir.path());
    store
        .set(ACTIVE_SECTION_KEY, "admin-panel")
        .expect("Failed to write session store");

    let state = file_state(dir.path());
    assert_eq!(state.active(), SectionId::Home);
    assert_eq!(
        state.store().get(ACTIVE_SECTION_KEY).expect("readable store"),
        Some("home".to_string())
    );
}

#[test]
fn reload_observes_writes_from_another_shell() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut shell = file_state(dir.path());
    shell.set_active(SectionId::Report);

    let mut other = FileStore::in_dir(dir.path());
    other
        .set(ACTIVE_SECTION_KEY, "map")
        .expect("Failed to write session store");

    shell.reload();
    assert_eq!(shell.active(), SectionId::Map);
}

#[test]
fn report_survives_a_reload() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut shell = file_state(dir.path());
    assert_eq!(shell.view(), ViewDescriptor::Landing);

    shell.set_active(SectionId::Report);
    assert_eq!(
        shell.store().get(ACTIVE_SECTION_KEY).expect("readable store"),
        Some("report".to_string())
    );
    drop(shell);

    let reloaded = file_state(dir.path());
    assert_eq!(reloaded.active(), SectionId::Report);
    assert_eq!(reloaded.view(), ViewDescriptor::IssueReporting);
}

#[test]
fn home_map_community_home_leaves_home_stored() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let mut shell = file_state(dir.path());
    for section in [SectionId::Map, SectionId::Community, SectionId::Home] {
        shell.set_active(section);
    }

    assert_eq!(shell.active(), SectionId::Home);
    assert_eq!(shell.view(), ViewDescriptor::Landing);
    assert_eq!(
        shell.store().get(ACTIVE_SECTION_KEY).expect("readable store"),
        Some("home".to_string())
    );

    let restarted = file_state(dir.path());
    assert_eq!(restarted.active(), SectionId::Home);
}

#[test]
fn shell_works_without_persistence() {
    let mut state = SectionState::init(Box::new(UnavailableStore));
    for section in SectionId::ALL {
        state.set_active(section);
        assert_eq!(state.active(), section);
        assert_eq!(state.view(), select_view(section));
    }
}

#[test]
fn raw_navigation_matches_dispatch_fallback() {
    let mut state = SectionState::init(Box::new(MemoryStore::new()));
    state.set_active(SectionId::Report);

    assert!(!state.set_active_raw("dashboard"));
    assert_eq!(state.view(), ViewDescriptor::IssueReporting);
    assert_eq!(select_view_raw("dashboard"), ViewDescriptor::Landing);
}

#[test]
fn config_round_trip_through_settings_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.language = Some("en-US".to_string());
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.session.store = SessionStoreKind::Memory;
    config::save_to_path(&cfg, &path).expect("Failed to write config file");

    let loaded = config::load_from_path(&path).expect("Failed to load config file");
    assert_eq!(loaded, cfg);

    let i18n = I18n::new(None, &loaded);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
    assert_eq!(i18n.tr("nav-map"), "City Map");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let mut cfg = Config::default();
    cfg.general.language = Some("tlh".to_string());
    let i18n = I18n::new(Some("xx".to_string()), &cfg);
    assert_eq!(i18n.tr("app-name"), "CitySync");
}
