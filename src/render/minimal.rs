//! Minimal template: light single-column layout, per-line payment badge,
//! no tax breakdown — the total shown is the subtotal.

use super::{business_info_html, format_currency, preview_note};
use crate::core::InvoiceDocument;

const STYLE: &str = "\
<style>
.invoice-container { font-family: 'Helvetica', Arial, sans-serif; color: #333; padding: 20px; }
table { width: 100%; border-collapse: collapse; }
table th, table td { padding: 12px 15px; border-bottom: 1px solid #ddd; }
table thead th { background-color: #f8f9fa; border-bottom: 2px solid #ddd; text-align: left; }
.text-end { text-align: right; }
.text-center { text-align: center; }
.text-muted { color: #6c757d; }
.badge.bg-success { background-color: #198754; color: white; padding: 2px 8px; border-radius: 4px; font-size: 12px; }
</style>
";

pub(super) fn render(document: &InvoiceDocument) -> String {
    let mut line_items = String::new();
    for item in &document.line_items {
        let badge = if item.is_credit {
            "<span class=\"badge bg-success\">Paid</span>"
        } else {
            ""
        };
        line_items.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td class=\"text-end\">{}</td></tr>\n",
            item.date,
            item.description,
            item.reference,
            badge,
            format_currency(item.amount),
        ));
    }
    line_items.push_str(&preview_note(document, 5));

    let markup = format!(
        "<div class=\"invoice-container\">
<div class=\"row mb-4\">
<div class=\"col-6\">
<h1 class=\"mb-1\">INVOICE</h1>
<h5 class=\"text-muted mb-4\">#{number}</h5>
<div class=\"business-info\">
{business_info}</div>
</div>
<div class=\"col-6 text-end\">
<p class=\"mb-1\"><strong>Date:</strong> {issue_date}</p>
<p class=\"mb-1\"><strong>Payment Status:</strong> Pending</p>
</div>
</div>
<table class=\"table mb-0\">
<thead>
<tr><th>Date</th><th>Description</th><th>Reference</th><th>Status</th><th class=\"text-end\">Amount</th></tr>
</thead>
<tbody>
{line_items}</tbody>
<tfoot>
<tr><td colspan=\"4\" class=\"text-end\"><strong>Total:</strong></td>\
<td class=\"text-end\"><strong>{total}</strong></td></tr>
</tfoot>
</table>
<p class=\"text-muted\">Thank you for your business!</p>
</div>
",
        number = document.number,
        business_info = business_info_html(&document.profile),
        issue_date = document.issue_date,
        total = format_currency(document.subtotal),
    );

    markup + STYLE
}
