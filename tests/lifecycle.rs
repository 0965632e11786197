//! End-to-end lifecycle scenarios driven through the public event API.

use chrono::{Duration, Utc};
use skygraph::app::messages::FixedRandom;
use skygraph::app::undo::{DELETE_UNDO_WINDOW_MS, TRASH_UNDO_WINDOW_MS};
use skygraph::app::{handle_event, AppState, Event};
use skygraph::domain::{LocationModel, LocationRecord};
use skygraph::infrastructure::{Clock, ManualClock};
use skygraph::storage::{JsonStorage, MemoryStorage, Storage};
use uuid::Uuid;

fn record(city: &str, temp: i32) -> LocationRecord {
    LocationRecord::new(LocationModel::new(
        city,
        temp,
        "Partly Cloudy",
        "cloud.sun.fill",
        vec![temp; 8],
    ))
}

/// Builds a loaded state over shared in-memory storage.
fn harness(records: Vec<LocationRecord>) -> (AppState, ManualClock, MemoryStorage) {
    let clock = ManualClock::new(Utc::now());
    let mut backing = MemoryStorage::new();
    if !records.is_empty() {
        backing.save_locations(&records).unwrap();
    }
    let mut state = AppState::new(
        Box::new(backing.clone()),
        Box::new(clock.clone()),
        Box::new(FixedRandom(0)),
    );
    handle_event(&mut state, &Event::Load);
    (state, clock, backing)
}

fn cities(state: &AppState) -> Vec<String> {
    state.locations().iter().map(|r| r.model.city.clone()).collect()
}

fn trash_cities(state: &AppState) -> Vec<String> {
    state.trash().iter().map(|t| t.location.model.city.clone()).collect()
}

fn expire_pending(state: &mut AppState, clock: &ManualClock) {
    clock.advance(Duration::milliseconds(DELETE_UNDO_WINDOW_MS));
    handle_event(state, &Event::Tick);
}

#[test]
fn save_then_load_reproduces_the_sequence() {
    let (mut state, _clock, backing) = harness(vec![
        record("CityA", 61),
        record("CityB", 72),
        record("CityC", 83),
    ]);

    handle_event(&mut state, &Event::AddLocation { record: record("CityD", 55) });
    handle_event(&mut state, &Event::Reorder { from: 3, to: 0 });
    handle_event(&mut state, &Event::SetHome { index: 2 });
    let expected: Vec<LocationRecord> = state.locations().to_vec();

    // A fresh state over the same backing must reproduce the sequence
    // element-wise.
    let clock = ManualClock::new(Utc::now());
    let mut reloaded = AppState::new(
        Box::new(backing.clone()),
        Box::new(clock.clone()),
        Box::new(FixedRandom(0)),
    );
    handle_event(&mut reloaded, &Event::Load);
    assert_eq!(reloaded.locations(), &expected[..]);
}

#[test]
fn at_most_one_home_after_any_set_home() {
    let (mut state, _clock, _backing) =
        harness(vec![record("A", 60), record("B", 70), record("C", 80)]);

    for index in 0..state.locations().len() {
        handle_event(&mut state, &Event::SetHome { index });
        let homes = state.locations().iter().filter(|r| r.is_user_location).count();
        assert_eq!(homes, 1);
        assert!(state.locations()[index].is_user_location);
    }
}

#[test]
fn delete_and_undo_preserve_the_original_index() {
    // Active list = [CityA(home), CityB, CityC].
    let mut a = record("CityA", 61);
    a.is_user_location = true;
    let (mut state, _clock, _backing) =
        harness(vec![a, record("CityB", 72), record("CityC", 83)]);
    let before: Vec<LocationRecord> = state.locations().to_vec();
    let b_id = state.locations()[1].id;

    handle_event(&mut state, &Event::Delete { id: b_id });
    assert_eq!(cities(&state), vec!["CityA", "CityC"]);

    handle_event(&mut state, &Event::Undo);
    assert_eq!(state.locations(), &before[..]);
}

#[test]
fn an_expired_countdown_lands_the_record_in_trash() {
    // Active list = [CityA]; delete and let the countdown run out.
    let (mut state, clock, _backing) = harness(vec![record("CityA", 61)]);
    let id = state.locations()[0].id;

    handle_event(&mut state, &Event::Delete { id });
    expire_pending(&mut state, &clock);

    assert!(state.locations().is_empty());
    assert_eq!(trash_cities(&state), vec!["CityA"]);
    assert_eq!(state.trash()[0].deleted_at, clock.now());
}

#[test]
fn sweep_keeps_only_fresh_entries() {
    // Trash = [CityX deleted 31 days ago, CityY deleted 2 days ago].
    let (mut state, clock, _backing) = harness(vec![record("CityX", 50), record("CityY", 51)]);

    let x_id = state.locations()[0].id;
    handle_event(&mut state, &Event::Delete { id: x_id });
    expire_pending(&mut state, &clock);

    clock.advance(Duration::days(29));
    let y_id = state.locations()[0].id;
    handle_event(&mut state, &Event::Delete { id: y_id });
    expire_pending(&mut state, &clock);

    clock.advance(Duration::days(2));
    handle_event(&mut state, &Event::OpenTrash);

    assert_eq!(trash_cities(&state), vec!["CityY"]);
}

#[test]
fn batch_restore_and_its_aggregate_undo() {
    let (mut state, clock, _backing) =
        harness(vec![record("A", 60), record("B", 70), record("C", 80)]);
    let ids: Vec<Uuid> = state.locations().iter().map(|r| r.id).collect();
    for id in ids {
        handle_event(&mut state, &Event::Delete { id });
        expire_pending(&mut state, &clock);
    }
    assert_eq!(state.trash().len(), 3);

    handle_event(&mut state, &Event::OpenTrash);
    handle_event(&mut state, &Event::ToggleEditMode);
    let a_id = state.trash()[0].id;
    let b_id = state.trash()[1].id;
    handle_event(&mut state, &Event::ToggleSelection { id: a_id });
    handle_event(&mut state, &Event::ToggleSelection { id: b_id });
    handle_event(&mut state, &Event::RestoreSelected);

    assert_eq!(cities(&state), vec!["A", "B"]);
    assert_eq!(trash_cities(&state), vec!["C"]);

    // The aggregate undo moves the whole batch back, not just one entry.
    handle_event(&mut state, &Event::Undo);
    assert!(state.locations().is_empty());
    assert_eq!(trash_cities(&state), vec!["A", "B", "C"]);
}

#[test]
fn a_second_delete_supersedes_the_pending_undo() {
    let (mut state, _clock, _backing) = harness(vec![record("A", 60), record("B", 70)]);
    let a_id = state.locations()[0].id;
    handle_event(&mut state, &Event::Delete { id: a_id });

    // Deleting B before A's countdown resolves commits A to trash.
    let b_id = state.locations()[0].id;
    handle_event(&mut state, &Event::Delete { id: b_id });
    assert_eq!(trash_cities(&state), vec!["A"]);

    handle_event(&mut state, &Event::Undo);
    assert_eq!(cities(&state), vec!["B"]);
    assert_eq!(trash_cities(&state), vec!["A"]);
}

#[test]
fn purge_undo_round_trip_through_the_trash_window() {
    let (mut state, clock, _backing) = harness(vec![record("A", 60)]);
    let id = state.locations()[0].id;
    handle_event(&mut state, &Event::Delete { id });
    expire_pending(&mut state, &clock);

    handle_event(&mut state, &Event::PurgeForever { id });
    assert!(state.trash().is_empty());

    handle_event(&mut state, &Event::Undo);
    assert_eq!(trash_cities(&state), vec!["A"]);

    // Let the next purge's window elapse instead: the entry stays gone.
    handle_event(&mut state, &Event::PurgeForever { id });
    clock.advance(Duration::milliseconds(TRASH_UNDO_WINDOW_MS));
    handle_event(&mut state, &Event::Tick);
    handle_event(&mut state, &Event::Undo);
    assert!(state.trash().is_empty());
}

#[test]
fn full_cycle_persists_through_json_storage() {
    let dir = tempfile::tempdir().unwrap();
    let clock = ManualClock::new(Utc::now());

    let expected_trash_city;
    {
        let storage = JsonStorage::new(dir.path().to_path_buf()).unwrap();
        let mut state = AppState::new(
            Box::new(storage),
            Box::new(clock.clone()),
            Box::new(FixedRandom(2)),
        );
        handle_event(&mut state, &Event::Load);
        assert_eq!(state.locations().len(), 3); // seed

        let id = state.locations()[1].id;
        expected_trash_city = state.locations()[1].model.city.clone();
        handle_event(&mut state, &Event::Delete { id });
        expire_pending(&mut state, &clock);
    }

    // A brand-new process over the same directory sees both slots.
    let storage = JsonStorage::new(dir.path().to_path_buf()).unwrap();
    let mut state = AppState::new(
        Box::new(storage),
        Box::new(clock.clone()),
        Box::new(FixedRandom(2)),
    );
    handle_event(&mut state, &Event::Load);
    assert_eq!(state.locations().len(), 2);
    assert_eq!(trash_cities(&state), vec![expected_trash_city]);
}
