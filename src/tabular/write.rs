use crate::core::Dataset;

const DELIMITER: char = ',';

/// Serialize a dataset back to delimited text: header line plus one line per
/// row. Any field containing the delimiter is wrapped in double quotes.
///
/// Embedded double quotes are not escaped — a known limitation of the export
/// format; values containing literal quote characters pass through verbatim.
pub fn to_csv(dataset: &Dataset) -> String {
    let mut out = String::new();
    write_record(&mut out, dataset.headers());
    for row in dataset.rows() {
        write_record(&mut out, row);
    }
    out
}

fn write_record(out: &mut String, fields: &[String]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(DELIMITER);
        }
        if field.contains(DELIMITER) {
            out.push('"');
            out.push_str(field);
            out.push('"');
        } else {
            out.push_str(field);
        }
    }
    out.push('\n');
}
