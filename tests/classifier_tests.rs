use travel_settlement::domain::{classify, ExpenseCategory, ExpenseItem};

#[test]
fn documented_examples() {
    assert_eq!(classify("Flight Allowance"), ExpenseCategory::FlatAllowance);
    assert_eq!(classify("Hotel stay"), ExpenseCategory::Lodging);
    assert_eq!(classify(""), ExpenseCategory::Others);
}

#[test]
fn priority_order_decides_overlaps() {
    assert_eq!(classify("travel allowance"), ExpenseCategory::FlatAllowance);
    assert_eq!(classify("Travel hotel"), ExpenseCategory::Travel);
    assert_eq!(classify("hotel food"), ExpenseCategory::Lodging);
    assert_eq!(classify("Local TRANSPORT"), ExpenseCategory::Conveyance);
    assert_eq!(classify("team food"), ExpenseCategory::Meals);
    assert_eq!(classify("stationery"), ExpenseCategory::Others);
}

#[test]
fn every_label_lands_in_exactly_one_known_bucket() {
    for label in ["", " ", "Meals", "taxi", "Conference fee", "Ünïcode", "lodging"] {
        assert!(ExpenseCategory::ALL.contains(&classify(label)));
    }
}

#[test]
fn decoding_resolves_category_from_type() {
    let json = r#"{"id":"9","type":"Hotel Stay","amount":3200,"date":"2025-01-21","remarks":""}"#;
    let item: ExpenseItem = serde_json::from_str(json).expect("decode");
    assert_eq!(item.category, ExpenseCategory::Lodging);
    assert_eq!(item.label, "Hotel Stay");
    assert!(item.image.is_none());
}
