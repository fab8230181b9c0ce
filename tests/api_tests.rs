use csv2invoice::api::{self, GenerateRequest};
use csv2invoice::core::{FieldMapping, InvoiceError, InvoiceMode};
use csv2invoice::render::Template;
use csv2invoice::store::UploadStore;
use csv2invoice::tabular;
use tempfile::TempDir;

const CSV: &[u8] =
    b"Date,Description,Amount,Reference\n2024-01-01,Coffee,-4.50,A1\n2024-01-02,Rent,800,A2\n2024-01-03,Fee,12.50,A3\n";

fn store() -> (TempDir, UploadStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = UploadStore::new(dir.path().join("uploads")).unwrap();
    (dir, store)
}

fn request(upload_id: &str, mode: InvoiceMode, mapping: FieldMapping) -> GenerateRequest {
    GenerateRequest {
        upload_id: upload_id.to_string(),
        mode,
        template: Template::Minimal,
        mapping,
        business_details: "Acme\nVAT: BE123\nacme@x.com".into(),
        business_name: String::new(),
    }
}

// --- Upload boundary ---

#[test]
fn upload_reports_headers_and_row_count() {
    let (_dir, store) = store();
    let response = api::upload(&store, CSV).unwrap();
    assert_eq!(
        response.headers,
        ["Date", "Description", "Amount", "Reference"]
    );
    assert_eq!(response.row_count, 3);
}

#[test]
fn upload_rejects_empty_input() {
    let (_dir, store) = store();
    let err = api::upload(&store, b"").unwrap_err();
    assert!(matches!(err, InvoiceError::MalformedInput(_)));
}

// --- Generation boundary ---

#[test]
fn full_flow_single_mode() {
    let (_dir, store) = store();
    let uploaded = api::upload(&store, CSV).unwrap();

    let mapping = FieldMapping::suggest(&uploaded.headers);
    assert!(mapping.is_complete());

    let generated = api::generate(&store, &request(&uploaded.id, InvoiceMode::Single, mapping))
        .unwrap();
    assert!(generated.invoice_number.starts_with("INV-"));
    assert!(generated.markup.contains("INVOICE"));
    assert!(generated.markup.contains("€4.50"));

    let exported = api::export(&store, &generated.export_id).unwrap();
    let dataset = tabular::parse(exported.as_bytes()).unwrap();
    assert_eq!(dataset.len(), 3);
    // Same number stamped on every row
    for row in 0..3 {
        assert_eq!(
            dataset.value(row, "invoice_number"),
            Some(generated.invoice_number.as_str())
        );
    }
}

#[test]
fn full_flow_multiple_mode() {
    let (_dir, store) = store();
    let uploaded = api::upload(&store, CSV).unwrap();
    let mapping = FieldMapping::suggest(&uploaded.headers);

    let generated = api::generate(
        &store,
        &request(&uploaded.id, InvoiceMode::Multiple, mapping),
    )
    .unwrap();
    // Preview renders only the first row plus the remaining-count note
    assert!(generated.markup.contains("Note: 2 more invoices will be generated"));
    assert!(generated.markup.contains("Coffee"));
    assert!(!generated.markup.contains("Rent"));

    let exported = api::export(&store, &generated.export_id).unwrap();
    let dataset = tabular::parse(exported.as_bytes()).unwrap();
    let numbers: Vec<&str> = (0..3)
        .map(|r| dataset.value(r, "invoice_number").unwrap())
        .collect();
    assert_eq!(numbers[0], format!("{}-1", generated.invoice_number));
    assert_eq!(numbers[1], format!("{}-2", generated.invoice_number));
    assert_eq!(numbers[2], format!("{}-3", generated.invoice_number));
}

#[test]
fn generate_with_unknown_id_is_not_found() {
    let (_dir, store) = store();
    let mapping = FieldMapping {
        date: Some("Date".into()),
        description: Some("Description".into()),
        amount: Some("Amount".into()),
        reference: Some("Reference".into()),
    };
    let err = api::generate(&store, &request("1700000000000-999", InvoiceMode::Single, mapping))
        .unwrap_err();
    assert!(matches!(err, InvoiceError::NotFound(_)));
}

#[test]
fn generate_with_incomplete_mapping_fails() {
    let (_dir, store) = store();
    let uploaded = api::upload(&store, CSV).unwrap();
    let err = api::generate(
        &store,
        &request(&uploaded.id, InvoiceMode::Single, FieldMapping::default()),
    )
    .unwrap_err();
    assert!(matches!(err, InvoiceError::IncompleteMapping(_)));
}

#[test]
fn business_name_override_shows_in_markup() {
    let (_dir, store) = store();
    let uploaded = api::upload(&store, CSV).unwrap();
    let mapping = FieldMapping::suggest(&uploaded.headers);

    let mut req = request(&uploaded.id, InvoiceMode::Single, mapping);
    req.business_name = "Declared GmbH".into();
    let generated = api::generate(&store, &req).unwrap();
    assert!(generated.markup.contains("Declared GmbH"));
    assert!(!generated.markup.contains("<strong>Acme</strong>"));
}

// --- Export boundary ---

#[test]
fn export_with_unknown_id_is_not_found() {
    let (_dir, store) = store();
    let err = api::export(&store, "1700000000000-999").unwrap_err();
    assert!(matches!(err, InvoiceError::NotFound(_)));

    // Crafted ids never reach the filesystem
    let err = api::export(&store, "../secrets").unwrap_err();
    assert!(matches!(err, InvoiceError::NotFound(_)));
}

// --- Request wire format ---

#[test]
fn request_deserializes_from_json() {
    let req: GenerateRequest = serde_json::from_str(
        r#"{
            "upload_id": "1700000000000-0",
            "mode": "multiple",
            "template": "professional",
            "mapping": {
                "date": "Date",
                "description": "Description",
                "amount": "Amount",
                "reference": "Reference"
            }
        }"#,
    )
    .unwrap();
    assert_eq!(req.mode, InvoiceMode::Multiple);
    assert_eq!(req.template, Template::Professional);
    assert!(req.mapping.is_complete());
    assert!(req.business_details.is_empty());
}

#[test]
fn unknown_template_id_is_rejected_at_the_boundary() {
    let result = serde_json::from_str::<GenerateRequest>(
        r#"{
            "upload_id": "1700000000000-0",
            "mode": "single",
            "template": "neon",
            "mapping": {}
        }"#,
    );
    assert!(result.is_err());
}
