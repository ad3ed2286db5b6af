//! Seeds a small data set and prints the resulting quote document,
//! the derived purchase orders and the dashboard figures.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use atelier_app::{InsightsService, LineItemDraft, QuoteService, Registry, ShopProfile};
use atelier_core::format_amount;
use atelier_quotes::{InterventionKind, LaborTotals};
use atelier_store::{Collection, Warehouse};

fn main() -> Result<()> {
    atelier_observability::init();

    let warehouse = Warehouse::new();
    let registry = Registry::new(warehouse.clone());
    let quotes = QuoteService::new(warehouse.clone());
    let insights = InsightsService::new(warehouse.clone());

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date");

    let client = registry.register_client("Alaoui", "Yasmine")?;
    let vehicle = registry.register_vehicle("12345-A-6", "Dacia", "Logan", client.id)?;
    let insurer = registry.register_insurer("AXA Assurance")?;
    let supplier = registry.register_supplier("Maghreb Pièces Auto")?;

    let mut case = registry.open_case(today)?;
    case.client_id = Some(client.id);
    case.vehicle_id = Some(vehicle.id);
    case.insurer_id = Some(insurer.id);
    warehouse.cases.update(case.clone())?;

    let quote = quotes.create_quote(today, case.id)?;
    let labor = LaborTotals::new(
        Decimal::new(500, 0),
        Decimal::new(300, 0),
        Decimal::ZERO,
        Decimal::ZERO,
    );
    let quote = quotes.save_quote(
        quote.id,
        labor,
        vec![
            LineItemDraft::new(
                "Pare-choc avant",
                1,
                Decimal::new(1200, 0),
                InterventionKind::Replacement,
            )
            .with_supplier(supplier.id),
            LineItemDraft::new(
                "Aile arrière occasion",
                1,
                Decimal::new(800, 0),
                InterventionKind::Used,
            ),
            LineItemDraft::new("Phare gauche", 2, Decimal::new(350, 0), InterventionKind::New)
                .with_supplier(supplier.id),
        ],
    )?;

    println!("{}", quotes.render_document(quote.id, &ShopProfile::from_env())?);

    for order in quotes.accept_quote(quote.id)? {
        println!(
            "{} : {} ligne(s), total HT {} DH, avancement {}%",
            order.reference,
            order.items.len(),
            format_amount(order.total_ex_tax),
            quotes.order_progress(&order)?,
        );
    }

    let summary = insights.dashboard()?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}
