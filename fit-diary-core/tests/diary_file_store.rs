use chrono::NaiveDate;
use fit_diary_core::{
    DiaryEntry, DiaryLedger, DiaryTarget, HabitCatalog, JsonFileStore, LedgerConfig, MealSlot,
    NoticeLevel, PersistentStore, PlanCatalog, RecordingNotifier, SaveOutcome, UpdateOutcome,
    UserSettings,
};
use tempfile::TempDir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn setup() -> (JsonFileStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("data"));
    (store, temp_dir)
}

#[test]
fn test_save_and_reload_across_ledgers() {
    let (store, _temp) = setup();
    let day = date("2024-05-01");
    let config = LedgerConfig {
        default_goal: 2500.0,
    };

    let saved = {
        let recorder = RecordingNotifier::new();
        let mut ledger = DiaryLedger::new(&store, config).with_notifier(recorder.clone());
        ledger.update_diary(day, DiaryTarget::Food(MealSlot::Breakfast), 300.0);
        ledger.update_diary(day, DiaryTarget::Food(MealSlot::Lunch), 500.0);
        ledger.update_diary(day, DiaryTarget::Exercise, 200.0);
        assert_eq!(ledger.compute_remaining(day), 2500.0 - 1000.0);

        assert!(ledger.save_diary_entry(day).is_saved());
        assert_eq!(recorder.last().unwrap().level, NoticeLevel::Success);
        ledger.read_entry(day)
    };

    let file = store.path("diary_2024-05-01").unwrap();
    assert!(file.exists());

    let mut reloaded = DiaryLedger::new(&store, config);
    assert!(reloaded.load_saved(day));
    assert_eq!(reloaded.read_entry(day), saved);
    assert_eq!(
        reloaded.update_diary(day, DiaryTarget::Food(MealSlot::Snacks), 100.0),
        UpdateOutcome::RejectedReadOnly
    );
    assert_eq!(reloaded.read_entry(day).food.snacks, 0.0);
}

#[test]
fn test_nothing_to_save_writes_no_file() {
    let (store, _temp) = setup();
    let recorder = RecordingNotifier::new();
    let mut ledger =
        DiaryLedger::new(&store, LedgerConfig::default()).with_notifier(recorder.clone());

    let outcome = ledger.save_diary_entry(date("2024-05-02"));
    assert!(matches!(outcome, SaveOutcome::NothingToSave));
    assert!(!store.data_dir().exists());
    assert_eq!(recorder.last().unwrap().level, NoticeLevel::Info);
}

#[test]
fn test_corrupted_snapshot_reads_default() {
    let (store, _temp) = setup();
    store.set_string("diary_2024-05-03", "not json at all").unwrap();

    let mut ledger = DiaryLedger::new(&store, LedgerConfig::default());
    assert!(!ledger.load_saved(date("2024-05-03")));
    assert_eq!(
        ledger.read_entry(date("2024-05-03")),
        DiaryEntry::new(LedgerConfig::default().default_goal)
    );
}

#[test]
fn test_user_goal_applies_to_new_entries() {
    let (store, _temp) = setup();
    UserSettings::new(&store).complete_onboarding(2222.0).unwrap();

    let mut ledger = DiaryLedger::new(&store, LedgerConfig::default());
    ledger.update_diary(date("2024-06-01"), DiaryTarget::Exercise, 100.0);
    assert_eq!(ledger.read_entry(date("2024-06-01")).goal, 2222.0);
    assert_eq!(ledger.compute_remaining(date("2024-06-01")), 2122.0);
}

#[test]
fn test_catalogs_share_store_with_diary() {
    let (store, _temp) = setup();

    let plans = PlanCatalog::new(&store);
    plans.seed_defaults().unwrap();
    assert!(plans.set_opt_in(4, true).unwrap());

    let habits = HabitCatalog::new(&store);
    habits.add(habits.preset("2").unwrap()).unwrap();

    let mut ledger = DiaryLedger::new(&store, LedgerConfig::default());
    ledger.update_diary(date("2024-06-02"), DiaryTarget::Food(MealSlot::Water), 3.0);
    ledger.save_diary_entry(date("2024-06-02"));

    assert_eq!(plans.opted_in().len(), 1);
    assert_eq!(habits.list().len(), 1);
    assert!(store.exists("userPlans"));
    assert!(store.exists("userHabits"));
    assert!(store.exists("diary_2024-06-02"));
}
