use chrono::NaiveDate;
use csv2invoice::core::*;
use csv2invoice::tabular;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn mapping() -> FieldMapping {
    FieldMapping {
        date: Some("Date".into()),
        description: Some("Desc".into()),
        amount: Some("Amt".into()),
        reference: Some("Ref".into()),
    }
}

fn dataset_from_cents(cents: &[i64]) -> Dataset {
    let mut d = Dataset::new(vec![
        "Date".into(),
        "Desc".into(),
        "Amt".into(),
        "Ref".into(),
    ]);
    for (i, c) in cents.iter().enumerate() {
        d.push_row(vec![
            "2024-01-01".into(),
            format!("Item {i}"),
            Decimal::new(*c, 2).to_string(),
            format!("R{i}"),
        ]);
    }
    d
}

proptest! {
    #[test]
    fn single_mode_line_count_matches_row_count(
        cents in proptest::collection::vec(-100_000i64..100_000, 0..50)
    ) {
        let d = dataset_from_cents(&cents);
        let doc = aggregate(
            &d,
            &mapping(),
            BusinessProfile::default(),
            InvoiceMode::Single,
            "INV-1",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .unwrap();

        prop_assert_eq!(doc.line_items.len(), cents.len());
        for (line, c) in doc.line_items.iter().zip(&cents) {
            prop_assert!(line.amount >= Decimal::ZERO);
            prop_assert_eq!(line.is_credit, *c < 0);
            prop_assert_eq!(line.amount, Decimal::new(c.abs(), 2));
        }
    }

    #[test]
    fn amount_sign_drives_credit_flag(cents in -1_000_000i64..1_000_000) {
        let raw = Decimal::new(cents, 2).to_string();
        let parsed = parse_amount(&raw);
        prop_assert_eq!(parsed < Decimal::ZERO, cents < 0);
        prop_assert!(parsed.abs() >= Decimal::ZERO);
    }

    #[test]
    fn parsers_never_panic_on_arbitrary_text(s in ".*") {
        let _ = parse_amount(&s);
        let _ = BusinessProfile::parse(&s);
    }

    #[test]
    fn export_round_trips_delimiter_free_values(
        rows in proptest::collection::vec(("[a-zA-Z0-9 ]{1,12}", "[a-zA-Z0-9 ]{1,12}"), 1..20)
    ) {
        let mut d = Dataset::new(vec!["Desc".into(), "Ref".into()]);
        for (desc, reference) in &rows {
            d.push_row(vec![desc.clone(), reference.clone()]);
        }
        let reparsed = tabular::parse(tabular::to_csv(&d).as_bytes()).unwrap();
        prop_assert_eq!(reparsed, d);
    }
}
