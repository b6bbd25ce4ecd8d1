//! HTML rendering of quotes and invoices.
//!
//! Rendering is stateless: everything shown comes from the document's own
//! snapshot, so a document renders identically years later regardless of
//! catalog or client changes. The footer is the only live input.

use chrono::{DateTime, Utc};

use crate::{
    format::{format_currency, format_phone_number},
    models::document::Document,
    models::enums::DocumentType,
};

fn title(doc_type: DocumentType) -> &'static str {
    match doc_type {
        DocumentType::Quote => "DEVIS",
        DocumentType::Invoice => "FACTURE",
    }
}

fn date_fr(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Render a document as a self-contained printable HTML page
pub fn render_document(document: &Document, footer: Option<&str>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\">");
    html.push_str(&format!(
        "<title>{} {}</title>",
        title(document.doc_type),
        escape(&document.number)
    ));
    html.push_str(
        "<style>\
         body{font-family:Arial,sans-serif;color:#222;margin:40px}\
         h1{font-size:24px;margin-bottom:0}\
         .number{color:#666;margin-top:4px}\
         .parties{display:flex;justify-content:space-between;margin:30px 0}\
         .party{white-space:pre-line;line-height:1.5}\
         table{width:100%;border-collapse:collapse;margin:20px 0}\
         th{background:#0e7490;color:#fff;text-align:left;padding:8px}\
         td{border-bottom:1px solid #ddd;padding:8px}\
         .amount{text-align:right}\
         .totals{margin-left:auto;width:300px}\
         .totals td{padding:4px 8px}\
         .grand{font-weight:bold;font-size:18px;border-top:2px solid #222}\
         .footer{margin-top:40px;font-size:12px;color:#666;white-space:pre-line}\
         </style></head><body>",
    );

    html.push_str(&format!("<h1>{}</h1>", title(document.doc_type)));
    html.push_str(&format!(
        "<p class=\"number\">N° {} — émis le {}</p>",
        escape(&document.number),
        date_fr(document.issue_date)
    ));
    if let Some(due) = document.due_date {
        html.push_str(&format!(
            "<p class=\"number\">À régler avant le {}</p>",
            date_fr(due)
        ));
    }

    // Company and client blocks
    html.push_str("<div class=\"parties\"><div class=\"party\">");
    let company = &document.company_details;
    html.push_str(&format!("<strong>{}</strong>\n", escape(&company.name)));
    if let Some(address) = &company.address {
        html.push_str(&escape(address));
        html.push('\n');
    }
    if let Some(phone) = &company.phone {
        html.push_str(&format!("Tél : {}\n", escape(&format_phone_number(phone))));
    }
    if let Some(email) = &company.email {
        html.push_str(&escape(email));
        html.push('\n');
    }
    if let Some(tax_number) = &company.tax_number {
        html.push_str(&format!("N° Tahiti : {}\n", escape(tax_number)));
    }
    html.push_str("</div><div class=\"party\">");
    let client = &document.client_details;
    html.push_str(&format!("<strong>{}</strong>\n", escape(&client.name)));
    if let Some(address) = &client.address {
        html.push_str(&escape(address));
        html.push('\n');
    }
    if let Some(phone) = &client.phone {
        html.push_str(&escape(&format_phone_number(phone)));
        html.push('\n');
    }
    if let Some(email) = &client.email {
        html.push_str(&escape(email));
        html.push('\n');
    }
    html.push_str("</div></div>");

    // Billed lines
    html.push_str(
        "<table><thead><tr>\
         <th>Désignation</th><th>Du</th><th>Au</th><th>Jours</th>\
         <th class=\"amount\">Montant</th>\
         </tr></thead><tbody>",
    );
    for line in &document.lines {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"amount\">{}</td></tr>",
            escape(&line.label),
            date_fr(line.start_date),
            date_fr(line.end_date),
            line.days,
            format_currency(line.amount)
        ));
    }
    html.push_str("</tbody></table>");

    // Totals
    html.push_str("<table class=\"totals\">");
    html.push_str(&format!(
        "<tr><td>Sous-total</td><td class=\"amount\">{}</td></tr>",
        format_currency(document.subtotal)
    ));
    html.push_str(&format!(
        "<tr><td>Taxes ({}%)</td><td class=\"amount\">{}</td></tr>",
        document.tax_rate,
        format_currency(document.tax_amount)
    ));
    html.push_str(&format!(
        "<tr class=\"grand\"><td>Total</td><td class=\"amount\">{}</td></tr>",
        format_currency(document.total_amount)
    ));
    html.push_str("</table>");

    if let Some(notes) = &document.notes {
        html.push_str(&format!("<p class=\"party\">{}</p>", escape(notes)));
    }
    if let Some(footer) = footer {
        html.push_str(&format!("<div class=\"footer\">{}</div>", escape(footer)));
    }

    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{ClientDetails, CompanyDetails, DocumentLine};
    use crate::models::enums::DocumentStatus;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn sample_invoice() -> Document {
        let start = Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap();
        Document {
            id: Uuid::new_v4(),
            created_at: start,
            doc_type: DocumentType::Invoice,
            number: "F2025-0042".to_string(),
            issue_date: start,
            due_date: Some(Utc.with_ymd_and_hms(2025, 7, 31, 0, 0, 0).unwrap()),
            status: DocumentStatus::Draft,
            client_id: Uuid::new_v4(),
            subtotal: dec!(45000),
            tax_rate: dec!(13),
            tax_amount: dec!(5850),
            total_amount: dec!(50850),
            company_details: CompanyDetails {
                name: "Raiatea Location".to_string(),
                address: Some("BP 123, Uturoa".to_string()),
                phone: Some("40 66 12 34".to_string()),
                email: Some("contact@raiatea-location.pf".to_string()),
                tax_number: Some("123456".to_string()),
            },
            client_details: ClientDetails {
                client_id: Uuid::new_v4(),
                name: "Jean Dupont".to_string(),
                address: None,
                phone: None,
                email: Some("jean@example.com".to_string()),
            },
            lines: vec![DocumentLine {
                reservation_id: Uuid::new_v4(),
                label: "Toyota Yaris (123456 P)".to_string(),
                start_date: start,
                end_date: Utc.with_ymd_and_hms(2025, 7, 4, 0, 0, 0).unwrap(),
                days: 3,
                amount: dec!(45000),
            }],
            notes: None,
        }
    }

    #[test]
    fn invoice_renders_snapshot_values() {
        let html = render_document(&sample_invoice(), Some("Merci de votre confiance"));

        assert!(html.contains("FACTURE"));
        assert!(html.contains("F2025-0042"));
        assert!(html.contains("Toyota Yaris (123456 P)"));
        assert!(html.contains("45 000 XPF"));
        assert!(html.contains("50 850 XPF"));
        assert!(html.contains("Taxes (13%)"));
        assert!(html.contains("Merci de votre confiance"));
        assert!(html.contains("01/07/2025"));
    }

    #[test]
    fn quote_has_no_due_date() {
        let mut doc = sample_invoice();
        doc.doc_type = DocumentType::Quote;
        doc.number = "D2025-0001".to_string();
        doc.due_date = None;

        let html = render_document(&doc, None);
        assert!(html.contains("DEVIS"));
        assert!(!html.contains("À régler avant"));
    }

    #[test]
    fn labels_are_escaped() {
        let mut doc = sample_invoice();
        doc.lines[0].label = "Scooter <50cc> & casque".to_string();

        let html = render_document(&doc, None);
        assert!(html.contains("Scooter &lt;50cc&gt; &amp; casque"));
    }
}
