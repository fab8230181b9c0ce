use csv2invoice::core::{Dataset, InvoiceError, InvoiceMode, annotate};
use csv2invoice::tabular;

// --- Round trips ---

#[test]
fn export_then_reparse_yields_same_dataset() {
    let source = b"Date,Desc,Amt,Ref\n2024-01-01,Coffee,-4.50,A1\n2024-01-02,Rent,800,A2\n";
    let dataset = tabular::parse(source).unwrap();

    let exported = tabular::to_csv(&dataset);
    let reparsed = tabular::parse(exported.as_bytes()).unwrap();
    assert_eq!(reparsed, dataset);
}

#[test]
fn delimiter_values_survive_the_round_trip_quoted() {
    let mut dataset = Dataset::new(vec!["Desc".into(), "Amt".into()]);
    dataset.push_row(vec!["Lunch, team".into(), "25.00".into()]);

    let exported = tabular::to_csv(&dataset);
    assert!(exported.contains("\"Lunch, team\""));

    let reparsed = tabular::parse(exported.as_bytes()).unwrap();
    assert_eq!(reparsed, dataset);
}

#[test]
fn annotated_dataset_round_trips_with_invoice_number_column() {
    let source = b"Date,Desc,Amt,Ref\n2024-01-01,Coffee,-4.50,A1\n2024-01-02,Rent,800,A2\n";
    let dataset = tabular::parse(source).unwrap();
    let annotated = annotate(&dataset, InvoiceMode::Multiple, "INV-7");

    let reparsed = tabular::parse(tabular::to_csv(&annotated).as_bytes()).unwrap();
    assert_eq!(
        reparsed.headers(),
        ["Date", "Desc", "Amt", "Ref", "invoice_number"]
    );
    assert_eq!(reparsed.value(0, "invoice_number"), Some("INV-7-1"));
    assert_eq!(reparsed.value(1, "invoice_number"), Some("INV-7-2"));
    // Original values intact
    assert_eq!(reparsed.value(0, "Amt"), Some("-4.50"));
}

// --- Error reporting ---

#[test]
fn header_only_input_yields_empty_dataset() {
    let dataset = tabular::parse(b"Date,Desc,Amt,Ref\n").unwrap();
    assert!(dataset.is_empty());
    assert_eq!(dataset.headers().len(), 4);
}

#[test]
fn unparseable_input_is_malformed() {
    let err = tabular::parse(b"").unwrap_err();
    assert!(matches!(err, InvoiceError::MalformedInput(_)));
}
