mod common;

use common::{clock, expense, TODAY};
use travel_settlement::{
    core::{
        errors::SettlementError,
        ids::SequentialIds,
        scratch::ScratchSpace,
        services::{CaptureForm, EditorState, ImportDialog, ImportTab, SettlementEditor, TypeFilter},
    },
    domain::{BalanceDirection, ExpenseCategory, SettlementStatus, UNASSIGNED_REVIEWER},
    store::{Action, Store},
};

#[test]
fn draft_scenario_snapshots_total() {
    let mut store = Store::default();
    let mut editor = SettlementEditor::new();
    editor.select_travel_request("TR-2025-010");
    editor.import(vec![expense("a", "travel", 1200.0), expense("b", "meals", 800.0)]);

    let draft = editor.save_draft(&mut store, &clock()).expect("draft saved");
    assert_eq!(draft.total_claimed, 2000.0);
    assert_eq!(draft.status, SettlementStatus::Draft);
    assert!(draft.is_draft);
    assert_eq!(draft.finance_reviewer, UNASSIGNED_REVIEWER);
    assert_eq!(draft.review_date, *TODAY);
    assert_eq!(store.find_draft("TR-2025-010"), Some(&draft));
    assert_eq!(editor.state(), EditorState::SavedAsDraft);
}

#[test]
fn empty_request_submission_creates_nothing() {
    let mut store = Store::seeded(*TODAY);
    let before = store.state().clone();
    let mut editor = SettlementEditor::new();
    editor.select_travel_request("");
    editor.import(vec![expense("a", "travel", 1200.0)]);

    let err = editor.submit(&mut store, &clock()).expect_err("request required");
    assert!(matches!(err, SettlementError::MissingTravelRequest));
    assert_eq!(store.state(), &before);
    assert_eq!(editor.selected_expenses().len(), 1);
}

#[test]
fn toggles_never_mix_categories() {
    let pool = vec![
        expense("1", "travel", 100.0),
        expense("2", "Hotel stay", 200.0),
        expense("3", "flight", 300.0),
        expense("4", "taxi", 50.0),
        expense("5", "Travel - train", 70.0),
    ];
    let mut dialog = ImportDialog::new();
    dialog.open();
    for idx in [0, 1, 4, 2, 0, 1, 3, 1, 4] {
        let _ = dialog.toggle_expense(&pool[idx].id, &pool);
        let categories: Vec<ExpenseCategory> = pool
            .iter()
            .filter(|item| dialog.is_expense_selected(&item.id))
            .map(|item| item.category)
            .collect();
        assert!(categories.windows(2).all(|pair| pair[0] == pair[1]));
    }
}

#[test]
fn imported_expenses_read_back_minus_removed() {
    let store = Store::seeded(*TODAY);
    let mut dialog = ImportDialog::new();
    dialog.open();
    dialog.set_filter(TypeFilter::Only(ExpenseCategory::Lodging));
    dialog.select_all(store.expenses()).expect("filter active");
    let imported = dialog.confirm(store.expenses(), store.draft_settlements());

    let mut editor = SettlementEditor::new();
    editor.import(imported);
    dialog.open();
    dialog.set_tab(ImportTab::Drafts);
    dialog.toggle_draft("TR-2025-003");
    editor.import(dialog.confirm(store.expenses(), store.draft_settlements()));

    let mut ids: Vec<&str> = editor.selected_expenses().iter().map(|i| i.id.as_str()).collect();
    ids.sort();
    assert_eq!(ids, vec!["2", "4", "5"]);

    editor.remove_expense("4").expect("present");
    let ids: Vec<&str> = editor.selected_expenses().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "5"]);
    assert_eq!(editor.total(), 6000.0);
}

#[test]
fn submit_then_track_and_promote_draft() {
    let mut store = Store::seeded(*TODAY);
    let mut editor = SettlementEditor::new();
    editor.select_travel_request("TR-2025-001");
    editor.import(vec![expense("1", "travel", 4500.0)]);
    editor.submit(&mut store, &clock()).expect("submitted");
    assert_eq!(store.settlements().len(), 2);

    store.dispatch(Action::PromoteDraft("TR-2025-003".into()));
    assert_eq!(store.settlements().len(), 3);
    assert!(store.draft_settlements().is_empty());

    let summary = editor.summary(25_000.0);
    assert_eq!(summary.total_claimed, 0.0);
    assert_eq!(summary.direction(), BalanceDirection::Recoverable);
}

#[test]
fn captured_expenses_flow_into_the_editor() {
    let mut store = Store::default();
    let mut scratch = ScratchSpace::new();
    let ids = SequentialIds::new("cap");
    let mut form = CaptureForm::new();

    form.set_label("Meals with client");
    form.capture_receipt(&clock());
    form.save(&ids, &clock()).expect("first");
    form.set_label("Taxi");
    form.set_amount(420.0).expect("amount");
    form.save(&ids, &clock()).expect("second");

    assert_eq!(form.sync(&mut store, &mut scratch).expect("synced"), 2);
    assert!(form.saved().is_empty());
    assert_eq!(store.expenses().len(), 2);

    let mut editor = SettlementEditor::new();
    assert_eq!(editor.load_staged(&mut scratch).expect("staged"), 2);
    assert_eq!(editor.total(), 1670.0);
    assert!(matches!(
        editor.load_staged(&mut scratch),
        Err(SettlementError::NoStagedExpenses)
    ));
    assert!(matches!(
        form.sync(&mut store, &mut scratch),
        Err(SettlementError::NothingToSync)
    ));
}
