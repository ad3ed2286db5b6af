use std::fmt::Write as _;

use atelier_core::format_amount;
use atelier_quotes::{LaborTotals, Quote, QuoteLineItem};

use crate::words::amount_to_words;

/// Everything the printable quote needs beyond the quote itself,
/// pre-resolved to display strings so rendering stays a pure function.
#[derive(Debug, Clone, Default)]
pub struct QuoteRenderContext {
    pub shop_name: String,
    pub shop_address: String,
    pub shop_phone: String,
    pub client_name: Option<String>,
    pub vehicle_label: Option<String>,
    pub insurer_name: Option<String>,
    pub case_number: Option<String>,
    pub policy_number: Option<String>,
    pub claim_ref: Option<String>,
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn info_row(out: &mut String, label: &str, value: &Option<String>) {
    if let Some(value) = value {
        let _ = writeln!(
            out,
            "      <p><strong>{label} :</strong> {}</p>",
            escape(value)
        );
    }
}

fn labor_row(out: &mut String, label: &str, amount: rust_decimal::Decimal) {
    if amount == rust_decimal::Decimal::ZERO {
        return;
    }
    let _ = writeln!(
        out,
        "      <tr><td>{label}</td><td>Main d'œuvre</td><td>1</td><td>{amount}</td><td>{amount}</td><td>20%</td></tr>",
        amount = format_amount(amount),
    );
}

/// Renders a quote as a self-contained HTML page ready for printing.
///
/// Blank lines are left out, used parts show an empty VAT cell, and each
/// non-zero labor trade appears as its own row with quantity 1 at the
/// standard rate. The closing formula spells the TTC amount in words.
pub fn render_quote_html(
    quote: &Quote,
    items: &[QuoteLineItem],
    labor: &LaborTotals,
    ctx: &QuoteRenderContext,
) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html lang=\"fr\">");
    let _ = writeln!(out, "<head>");
    let _ = writeln!(out, "  <meta charset=\"utf-8\">");
    let _ = writeln!(out, "  <title>Devis {}</title>", escape(&quote.number));
    let _ = writeln!(
        out,
        "  <style>body{{font-family:sans-serif;margin:2em}}table{{width:100%;border-collapse:collapse}}td,th{{border:1px solid #444;padding:4px 8px;text-align:left}}.totals{{margin-top:1em;text-align:right}}</style>"
    );
    let _ = writeln!(out, "</head>");
    let _ = writeln!(out, "<body>");

    // Shop header.
    let _ = writeln!(out, "  <header>");
    let _ = writeln!(out, "    <h1>{}</h1>", escape(&ctx.shop_name));
    let _ = writeln!(out, "    <p>{}</p>", escape(&ctx.shop_address));
    let _ = writeln!(out, "    <p>Tél : {}</p>", escape(&ctx.shop_phone));
    let _ = writeln!(out, "  </header>");

    let _ = writeln!(
        out,
        "  <h2>Devis N° {} du {}</h2>",
        escape(&quote.number),
        quote.issued_on.format("%d/%m/%Y")
    );

    // Client, vehicle and insurance blocks.
    let _ = writeln!(out, "  <section class=\"parties\">");
    info_row(&mut out, "Client", &ctx.client_name);
    info_row(&mut out, "Véhicule", &ctx.vehicle_label);
    info_row(&mut out, "Assurance", &ctx.insurer_name);
    info_row(&mut out, "Affaire", &ctx.case_number);
    info_row(&mut out, "N° de police", &ctx.policy_number);
    info_row(&mut out, "Réf sinistre", &ctx.claim_ref);
    let _ = writeln!(out, "  </section>");

    // Parts and labor table.
    let _ = writeln!(out, "  <table>");
    let _ = writeln!(
        out,
        "    <thead><tr><th>Désignation</th><th>Intervention</th><th>Qté</th><th>P.U. HT</th><th>Total HT</th><th>TVA</th></tr></thead>"
    );
    let _ = writeln!(out, "    <tbody>");
    for item in items.iter().filter(|item| !item.is_blank()) {
        let vat_cell = if item.intervention.is_vat_exempt() {
            ""
        } else {
            "20%"
        };
        let _ = writeln!(
            out,
            "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape(&item.description),
            item.intervention.label(),
            item.quantity,
            format_amount(item.unit_price_ex_tax),
            format_amount(item.line_total_ex_tax()),
            vat_cell,
        );
    }
    labor_row(&mut out, "Tôlerie", labor.panel_beating);
    labor_row(&mut out, "Peinture", labor.painting);
    labor_row(&mut out, "Mécanique", labor.mechanical);
    labor_row(&mut out, "Électrique", labor.electrical);
    let _ = writeln!(out, "    </tbody>");
    let _ = writeln!(out, "  </table>");

    // Totals: supply and labor blocks, then the HT/TVA/TTC grid.
    let parts_subtotal: rust_decimal::Decimal = items
        .iter()
        .filter(|item| !item.is_blank())
        .map(QuoteLineItem::line_total_ex_tax)
        .sum();
    let _ = writeln!(out, "  <section class=\"totals\">");
    let _ = writeln!(
        out,
        "    <p>Total fournitures HT : {} DH</p>",
        format_amount(parts_subtotal)
    );
    let _ = writeln!(
        out,
        "    <p>Total main d'œuvre HT : {} DH</p>",
        format_amount(labor.subtotal())
    );
    let _ = writeln!(
        out,
        "    <p>Total HT : {} DH</p>",
        format_amount(quote.totals.total_ex_tax)
    );
    let _ = writeln!(
        out,
        "    <p>TVA : {} DH</p>",
        format_amount(quote.totals.total_vat)
    );
    let _ = writeln!(
        out,
        "    <p><strong>Total TTC : {} DH</strong></p>",
        format_amount(quote.totals.total_inc_tax)
    );
    let _ = writeln!(out, "  </section>");

    let _ = writeln!(
        out,
        "  <p class=\"closing\">Arrêté le présent devis à la somme de {} Dirhams</p>",
        amount_to_words(quote.totals.total_inc_tax)
    );

    let _ = writeln!(out, "</body>");
    let _ = writeln!(out, "</html>");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_quotes::{compute_totals, InterventionKind};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn sample_quote() -> (Quote, Vec<QuoteLineItem>, LaborTotals) {
        let mut quote = Quote::new(
            "DEV-2024-001",
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            atelier_cases::CaseId::new(),
        )
        .unwrap();
        let items = vec![
            QuoteLineItem::new(
                quote.id,
                0,
                "Pare-choc avant",
                2,
                Decimal::new(100, 0),
                InterventionKind::Replacement,
            ),
            QuoteLineItem::new(
                quote.id,
                1,
                "Aile arrière occasion",
                1,
                Decimal::new(400, 0),
                InterventionKind::Used,
            ),
        ];
        let labor = LaborTotals::new(
            Decimal::new(50, 0),
            Decimal::ZERO,
            Decimal::ZERO,
            Decimal::ZERO,
        );
        quote.labor = labor;
        quote.totals = compute_totals(&items, &labor);
        (quote, items, labor)
    }

    fn ctx() -> QuoteRenderContext {
        QuoteRenderContext {
            shop_name: "Carrosserie Atlas".into(),
            shop_address: "12 rue des Ateliers, Casablanca".into(),
            shop_phone: "05 22 00 00 00".into(),
            client_name: Some("Omar Bennis".into()),
            vehicle_label: Some("Dacia Logan (12345-A-6)".into()),
            insurer_name: Some("AXA Assurance".into()),
            case_number: Some("AFF-2024-001".into()),
            policy_number: None,
            claim_ref: None,
        }
    }

    #[test]
    fn renders_header_and_parties() {
        let (quote, items, labor) = sample_quote();
        let html = render_quote_html(&quote, &items, &labor, &ctx());
        assert!(html.contains("Carrosserie Atlas"));
        assert!(html.contains("Devis N° DEV-2024-001 du 01/06/2024"));
        assert!(html.contains("Omar Bennis"));
        assert!(html.contains("Dacia Logan (12345-A-6)"));
    }

    #[test]
    fn used_lines_have_an_empty_vat_cell() {
        let (quote, items, labor) = sample_quote();
        let html = render_quote_html(&quote, &items, &labor, &ctx());
        assert!(html.contains("<td>Aile arrière occasion</td><td>Occasion</td><td>1</td><td>400,00</td><td>400,00</td><td></td>"));
        assert!(html.contains("<td>Pare-choc avant</td><td>Remplacement</td><td>2</td><td>100,00</td><td>200,00</td><td>20%</td>"));
    }

    #[test]
    fn labor_rows_only_for_non_zero_trades() {
        let (quote, items, labor) = sample_quote();
        let html = render_quote_html(&quote, &items, &labor, &ctx());
        assert!(html.contains("<td>Tôlerie</td>"));
        assert!(!html.contains("<td>Peinture</td>"));
    }

    #[test]
    fn closing_formula_spells_the_ttc_amount() {
        let (quote, items, labor) = sample_quote();
        // HT 650, VAT 40 + 10 = 50, TTC 700.
        let html = render_quote_html(&quote, &items, &labor, &ctx());
        assert!(html.contains("Total fournitures HT : 600,00 DH"));
        assert!(html.contains("Total main d'œuvre HT : 50,00 DH"));
        assert!(html.contains("Total TTC : 700,00 DH"));
        assert!(html
            .contains("Arrêté le présent devis à la somme de sept cents Dirhams"));
    }

    #[test]
    fn blank_lines_are_not_rendered() {
        let (quote, mut items, labor) = sample_quote();
        items.push(QuoteLineItem::new(
            quote.id,
            2,
            "   ",
            1,
            Decimal::new(999, 0),
            InterventionKind::New,
        ));
        let html = render_quote_html(&quote, &items, &labor, &ctx());
        assert!(!html.contains("999,00"));
    }
}
