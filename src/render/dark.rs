//! Dark template: monospace type, dark header and footer bars, the same
//! subtotal / VAT / total breakdown as the professional layout.

use super::{business_info_html, format_currency, preview_note};
use crate::core::InvoiceDocument;

const STYLE: &str = "\
<style>
.invoice-container { font-family: 'Courier New', monospace; color: #333; background-color: white; }
.invoice-header { margin-bottom: 30px; }
.header-bar { background-color: #1a1a1a; color: white; padding: 20px; }
.header-bar h1, .header-bar h2 { margin: 0; color: white; }
.header-bar h2 { font-size: 1.2rem; letter-spacing: 2px; }
.invoice-id { color: #999; margin: 5px 0 0; }
.invoice-body { padding: 20px; }
.invoice-info { margin-bottom: 30px; }
.invoice-info h5 { color: #333; border-bottom: 1px solid #ddd; padding-bottom: 10px; margin-bottom: 15px; }
table { width: 100%; border-collapse: collapse; }
table th, table td { padding: 12px 15px; border-bottom: 1px solid #ddd; }
table thead th { background-color: #1a1a1a; color: white; border-bottom: 2px solid #ddd; text-align: left; }
table tfoot tr.total { background-color: #1a1a1a; color: white; }
.invoice-footer { margin-top: 30px; background-color: #1a1a1a; color: white; padding: 15px 20px; }
.footer-note { font-size: 12px; }
.text-end { text-align: right; }
.text-center { text-align: center; }
.text-muted { color: #6c757d; }
</style>
";

pub(super) fn render(document: &InvoiceDocument) -> String {
    let mut line_items = String::new();
    for item in &document.line_items {
        line_items.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td>\
             <td class=\"text-end\">{}</td></tr>\n",
            item.date,
            item.description,
            item.reference,
            format_currency(item.amount),
        ));
    }
    line_items.push_str(&preview_note(document, 4));

    let markup = format!(
        "<div class=\"invoice-container\">
<div class=\"invoice-header\">
<div class=\"header-bar\">
<div class=\"row\">
<div class=\"col-6\"><h2>{company}</h2></div>
<div class=\"col-6 text-end\"><h1>INVOICE</h1><p class=\"invoice-id\">#{number}</p></div>
</div>
</div>
</div>
<div class=\"invoice-body\">
<div class=\"row invoice-info\">
<div class=\"col-6\">
<h5>FROM:</h5>
<div class=\"business-info\">
{business_info}</div>
</div>
<div class=\"col-6 text-end\">
<h5>DETAILS:</h5>
<p><strong>Date:</strong> {issue_date}</p>
<p><strong>Due Date:</strong> {due_date}</p>
<p><strong>Status:</strong> Pending</p>
</div>
</div>
<table class=\"table\">
<thead>
<tr><th>Date</th><th>Description</th><th>Reference</th><th class=\"text-end\">Amount</th></tr>
</thead>
<tbody>
{line_items}</tbody>
<tfoot>
<tr><td colspan=\"3\" class=\"text-end\"><strong>Subtotal:</strong></td>\
<td class=\"text-end\">{subtotal}</td></tr>
<tr><td colspan=\"3\" class=\"text-end\"><strong>VAT (21%):</strong></td>\
<td class=\"text-end\">{tax}</td></tr>
<tr class=\"total\"><td colspan=\"3\" class=\"text-end\"><strong>TOTAL:</strong></td>\
<td class=\"text-end\"><strong>{total}</strong></td></tr>
</tfoot>
</table>
</div>
<div class=\"invoice-footer\">
<div class=\"footer-note\">
<p>Payment due within 30 days. Late payment may result in additional fees.</p>
</div>
</div>
</div>
",
        company = document.profile.name.as_deref().unwrap_or_default(),
        number = document.number,
        business_info = business_info_html(&document.profile),
        issue_date = document.issue_date,
        due_date = document.due_date,
        subtotal = format_currency(document.subtotal),
        tax = format_currency(document.tax_amount),
        total = format_currency(document.total),
    );

    markup + STYLE
}
