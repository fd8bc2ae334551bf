use std::cell::Cell;
use std::rc::Rc;

use proptest::prelude::*;
use tempfile::TempDir;
use themeswitch::{
    ClassList, ColorMode, FileStorage, MediaQuery, MemoryStorage, Theme, ThemeConfig,
    ThemeStorage, ThemeStore,
};

fn store_with(
    storage: Rc<dyn ThemeStorage>,
    query: Rc<MediaQuery>,
    root: Rc<ClassList>,
) -> ThemeStore {
    ThemeStore::new(ThemeConfig::default(), storage, query, root)
}

fn any_theme() -> impl Strategy<Value = Theme> {
    prop::sample::select(Theme::ALL.to_vec())
}

#[test]
fn test_persistence_round_trip_in_memory() {
    let storage = Rc::new(MemoryStorage::new());
    let query = Rc::new(MediaQuery::new(false));

    let first = store_with(storage.clone(), query.clone(), Rc::new(ClassList::new()));
    first.set_theme(Theme::Dark);
    drop(first);

    let second = store_with(storage, query, Rc::new(ClassList::new()));
    assert_eq!(second.theme(), Theme::Dark);
}

#[test]
fn test_persistence_round_trip_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("theme.json");
    let query = Rc::new(MediaQuery::new(false));

    let first = store_with(
        Rc::new(FileStorage::new(&path)),
        query.clone(),
        Rc::new(ClassList::new()),
    );
    first.set_theme(Theme::Dark);
    drop(first);

    let root = Rc::new(ClassList::new());
    let second = store_with(Rc::new(FileStorage::new(&path)), query, root.clone());
    assert_eq!(second.theme(), Theme::Dark);
    assert_eq!(root.color_mode(), Some(ColorMode::Dark));
}

#[test]
fn test_storage_keys_do_not_collide() {
    let storage = Rc::new(MemoryStorage::new());
    let query = Rc::new(MediaQuery::new(false));
    let a = ThemeStore::new(
        ThemeConfig::new(Theme::System, "a"),
        storage.clone(),
        query.clone(),
        Rc::new(ClassList::new()),
    );
    let b = ThemeStore::new(
        ThemeConfig::new(Theme::System, "b"),
        storage.clone(),
        query,
        Rc::new(ClassList::new()),
    );

    a.set_theme(Theme::Light);
    b.set_theme(Theme::Dark);
    assert_eq!(storage.get_item("a").unwrap().as_deref(), Some("light"));
    assert_eq!(storage.get_item("b").unwrap().as_deref(), Some("dark"));
}

#[test]
fn test_unrecognized_persisted_value_falls_back() {
    let storage = Rc::new(MemoryStorage::with_item("ui-theme", "SYSTEM"));
    let store = ThemeStore::new(
        ThemeConfig::new(Theme::Light, "ui-theme"),
        storage,
        Rc::new(MediaQuery::new(true)),
        Rc::new(ClassList::new()),
    );
    assert_eq!(store.theme(), Theme::Light);
}

#[test]
fn test_host_changes_only_reach_root_in_system_mode() {
    let query = Rc::new(MediaQuery::new(false));
    let root = Rc::new(ClassList::with_classes(["app"]));
    let store = store_with(Rc::new(MemoryStorage::new()), query.clone(), root.clone());

    assert_eq!(store.theme(), Theme::System);
    query.set_prefers_dark(true);
    assert_eq!(root.color_mode(), Some(ColorMode::Dark));

    store.set_theme(Theme::Light);
    assert_eq!(query.listener_count(), 0);
    query.set_prefers_dark(false);
    query.set_prefers_dark(true);
    assert_eq!(root.color_mode(), Some(ColorMode::Light));
    assert!(root.contains("app"));

    store.set_theme(Theme::System);
    assert_eq!(query.listener_count(), 1);
    assert_eq!(root.color_mode(), Some(ColorMode::Dark));
}

#[test]
fn test_teardown_leaves_no_listener() {
    let query = Rc::new(MediaQuery::new(false));
    {
        let _store = store_with(
            Rc::new(MemoryStorage::new()),
            query.clone(),
            Rc::new(ClassList::new()),
        );
        assert_eq!(query.listener_count(), 1);
    }
    assert_eq!(query.listener_count(), 0);
}

#[test]
fn test_every_set_notifies() {
    let store = store_with(
        Rc::new(MemoryStorage::new()),
        Rc::new(MediaQuery::new(false)),
        Rc::new(ClassList::new()),
    );
    let count = Rc::new(Cell::new(0));
    let sink = Rc::clone(&count);
    let _subscription = store.subscribe(move |_| sink.set(sink.get() + 1));

    for theme in Theme::ALL {
        store.set_theme(theme);
    }
    assert_eq!(count.get(), 3);
}

proptest! {
    #[test]
    fn prop_set_then_get(themes in prop::collection::vec(any_theme(), 1..12), prefers_dark in any::<bool>()) {
        let query = Rc::new(MediaQuery::new(prefers_dark));
        let root = Rc::new(ClassList::new());
        let store = store_with(Rc::new(MemoryStorage::new()), query.clone(), root.clone());

        for theme in themes {
            store.set_theme(theme);
            prop_assert_eq!(store.theme(), theme);
            // Exactly one marker, matching the resolved mode.
            prop_assert_eq!(root.color_modes(), vec![theme.resolve(prefers_dark)]);
            prop_assert_eq!(query.listener_count(), usize::from(theme.is_system()));
        }
    }

    #[test]
    fn prop_set_twice_matches_set_once(theme in any_theme(), prefers_dark in any::<bool>()) {
        let once_root = Rc::new(ClassList::new());
        let once_query = Rc::new(MediaQuery::new(prefers_dark));
        let once = store_with(Rc::new(MemoryStorage::new()), once_query.clone(), once_root.clone());
        once.set_theme(theme);

        let twice_root = Rc::new(ClassList::new());
        let twice_query = Rc::new(MediaQuery::new(prefers_dark));
        let twice = store_with(Rc::new(MemoryStorage::new()), twice_query.clone(), twice_root.clone());
        twice.set_theme(theme);
        twice.set_theme(theme);

        prop_assert_eq!(once_root.classes(), twice_root.classes());
        prop_assert_eq!(once_query.listener_count(), twice_query.listener_count());
        prop_assert_eq!(once.theme(), twice.theme());
    }
}
