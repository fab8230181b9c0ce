//! Professional template: FROM/TO/DETAILS header, due date, and the full
//! subtotal / VAT / total breakdown.

use super::{business_info_html, format_currency, preview_note};
use crate::core::InvoiceDocument;

const STYLE: &str = "\
<style>
.invoice-container { font-family: 'Arial', sans-serif; color: #333; padding: 30px; max-width: 1000px; margin: 0 auto; }
.invoice-header { margin-bottom: 40px; }
.invoice-header h1 { color: #333; margin: 0; font-weight: 700; }
.invoice-id { color: #777; font-size: 18px; }
.invoice-info { margin-bottom: 40px; }
.invoice-info h5 { color: #333; border-bottom: 1px solid #ddd; padding-bottom: 10px; margin-bottom: 15px; }
.invoice-items { margin-bottom: 40px; }
table { width: 100%; border-collapse: collapse; }
table th, table td { padding: 12px 15px; border-bottom: 1px solid #ddd; }
table thead th { background-color: #f8f9fa; border-bottom: 2px solid #ddd; text-align: left; }
table tfoot tr { background-color: #f8f9fa; }
table tfoot tr.total { background-color: #333; color: white; }
.text-end { text-align: right; }
.text-center { text-align: center; }
.text-muted { color: #6c757d; }
.invoice-footer { margin-top: 40px; text-align: center; color: #777; font-size: 14px; }
.small { font-size: 12px; margin-top: 10px; }
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
<div class=\"row\">
<div class=\"col-6\"><div class=\"company-name\">{company}</div></div>
<div class=\"col-6 text-end\"><h1>INVOICE</h1><p class=\"invoice-id\">#{number}</p></div>
</div>
</div>
<div class=\"row invoice-info\">
<div class=\"col-4\">
<h5>FROM:</h5>
<div class=\"business-info\">
{business_info}</div>
</div>
<div class=\"col-4\">
<h5>TO:</h5>
<p><strong>Multiple Customers</strong></p>
<p>Statement of Transactions</p>
</div>
<div class=\"col-4 text-end\">
<h5>DETAILS:</h5>
<p><strong>Invoice Date:</strong> {issue_date}</p>
<p><strong>Due Date:</strong> {due_date}</p>
<p><strong>Status:</strong> Pending</p>
</div>
</div>
<div class=\"invoice-items\">
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
<p>Payment is due within 30 days. Thank you for your business.</p>
<p class=\"small\">This invoice was generated automatically and is valid without a signature.</p>
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
