use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::info;

use atelier_cases::CaseId;
use atelier_catalog::{ArticleId, CatalogArticle};
use atelier_core::DomainError;
use atelier_documents::{render_quote_html, QuoteRenderContext};
use atelier_parties::SupplierId;
use atelier_purchasing::{
    group_by_supplier, Fulfillment, FulfillmentStatus, PurchaseOrderGroup,
};
use atelier_quotes::{
    compute_totals, InterventionKind, LaborTotals, LineItemId, Quote, QuoteId, QuoteLineItem,
    QuoteStatus,
};
use atelier_store::{Collection, Warehouse};

use crate::config::ShopProfile;
use crate::error::ServiceResult;

/// What the quote editor hands over on save: one row of the parts table,
/// before coercion. `id` is set when the row edits an existing line, so
/// its procurement tracking survives the save.
#[derive(Debug, Clone)]
pub struct LineItemDraft {
    pub id: Option<LineItemId>,
    pub description: String,
    pub quantity: u32,
    pub unit_price_ex_tax: Decimal,
    pub intervention: InterventionKind,
    pub supplier_id: Option<SupplierId>,
    pub article_id: Option<ArticleId>,
}

impl LineItemDraft {
    pub fn new(
        description: impl Into<String>,
        quantity: u32,
        unit_price_ex_tax: Decimal,
        intervention: InterventionKind,
    ) -> Self {
        Self {
            id: None,
            description: description.into(),
            quantity,
            unit_price_ex_tax,
            intervention,
            supplier_id: None,
            article_id: None,
        }
    }

    /// A row pre-filled from a catalog article.
    pub fn from_article(
        article: &CatalogArticle,
        quantity: u32,
        intervention: InterventionKind,
    ) -> Self {
        let mut draft = Self::new(
            article.description.clone(),
            quantity,
            article.unit_price_ex_tax,
            intervention,
        );
        draft.supplier_id = article.supplier_id;
        draft.article_id = Some(article.id);
        draft
    }

    pub fn with_supplier(mut self, supplier_id: SupplierId) -> Self {
        self.supplier_id = Some(supplier_id);
        self
    }

    fn is_blank(&self) -> bool {
        self.description.trim().is_empty()
    }

    fn into_line(self, quote_id: QuoteId, position: u32) -> QuoteLineItem {
        let mut line = QuoteLineItem::new(
            quote_id,
            position,
            self.description,
            self.quantity,
            self.unit_price_ex_tax,
            self.intervention,
        );
        if let Some(id) = self.id {
            line.id = id;
        }
        line.supplier_id = self.supplier_id;
        line.article_id = self.article_id;
        line
    }
}

/// The quote use cases: create, save with recomputed totals, status
/// changes, derived purchase orders, fulfillment tracking and the
/// printable document.
#[derive(Clone)]
pub struct QuoteService {
    warehouse: Warehouse,
}

impl QuoteService {
    pub fn new(warehouse: Warehouse) -> Self {
        Self { warehouse }
    }

    pub fn create_quote(&self, issued_on: NaiveDate, case_id: CaseId) -> ServiceResult<Quote> {
        let number = self
            .warehouse
            .counters
            .next_yearly("DEV", issued_on.year())?;
        let quote = Quote::new(number, issued_on, case_id)?;
        self.warehouse.quotes.insert(quote.clone())?;
        info!(number = %quote.number, "quote created");
        Ok(quote)
    }

    fn load_quote(&self, quote_id: QuoteId) -> ServiceResult<Quote> {
        Ok(self
            .warehouse
            .quotes
            .get(&quote_id)?
            .ok_or_else(DomainError::not_found)?)
    }

    /// Persists the editor state: blank rows are dropped, totals are
    /// recomputed from what will actually be stored, and the line set is
    /// swapped atomically so no reader sees a half-saved quote.
    pub fn save_quote(
        &self,
        quote_id: QuoteId,
        labor: LaborTotals,
        drafts: Vec<LineItemDraft>,
    ) -> ServiceResult<Quote> {
        let mut quote = self.load_quote(quote_id)?;

        let lines: Vec<QuoteLineItem> = drafts
            .into_iter()
            .filter(|draft| !draft.is_blank())
            .enumerate()
            .map(|(position, draft)| draft.into_line(quote_id, position as u32))
            .collect();

        quote.labor = labor;
        quote.totals = compute_totals(&lines, &labor);

        self.warehouse.replace_quote_lines(quote_id, lines)?;
        self.warehouse.quotes.update(quote.clone())?;
        info!(
            number = %quote.number,
            total_inc_tax = %quote.totals.total_inc_tax,
            "quote saved"
        );
        Ok(quote)
    }

    pub fn set_status(&self, quote_id: QuoteId, status: QuoteStatus) -> ServiceResult<Quote> {
        let mut quote = self.load_quote(quote_id)?;
        quote.status = status;
        self.warehouse.quotes.update(quote.clone())?;
        Ok(quote)
    }

    /// Marks the quote accepted, mirrors the decision onto its case, and
    /// returns the purchase orders to place.
    pub fn accept_quote(&self, quote_id: QuoteId) -> ServiceResult<Vec<PurchaseOrderGroup>> {
        let quote = self.set_status(quote_id, QuoteStatus::Accepted)?;

        if let Some(mut case) = self.warehouse.cases.get(&quote.case_id)? {
            case.status = atelier_cases::CaseStatus::Accepted;
            self.warehouse.cases.update(case)?;
        }

        info!(number = %quote.number, "quote accepted");
        self.purchase_orders(quote_id)
    }

    /// Purchase orders derived from the quote's current lines. Recomputed
    /// on every call; nothing is persisted.
    pub fn purchase_orders(&self, quote_id: QuoteId) -> ServiceResult<Vec<PurchaseOrderGroup>> {
        let quote = self.load_quote(quote_id)?;
        let lines = self.warehouse.lines_for_quote(quote_id)?;
        Ok(group_by_supplier(&quote.number, &lines))
    }

    /// Completion percentage of one derived order, from the stored
    /// fulfillment overlay.
    pub fn order_progress(&self, group: &PurchaseOrderGroup) -> ServiceResult<u32> {
        let mut statuses = std::collections::HashMap::new();
        for item in &group.items {
            let status = self
                .warehouse
                .fulfillment
                .get(&item.id)?
                .map(|f| f.status)
                .unwrap_or_default();
            statuses.insert(item.id, status);
        }

        Ok(group.progress(|item| statuses.get(&item.id).copied().unwrap_or_default()))
    }

    /// Moves one line through the procurement pipeline, stamping the
    /// reception date on the first pass through `Received` or `Done`.
    pub fn set_fulfillment(
        &self,
        line_item_id: LineItemId,
        status: FulfillmentStatus,
        today: NaiveDate,
    ) -> ServiceResult<Fulfillment> {
        let mut entry = self
            .warehouse
            .fulfillment
            .get(&line_item_id)?
            .unwrap_or_else(|| Fulfillment::new(line_item_id));
        entry.advance(status, today);
        self.warehouse.fulfillment.upsert(entry)?;
        Ok(entry)
    }

    /// Renders the printable quote, joining the case's client, vehicle and
    /// insurer into the document header.
    pub fn render_document(
        &self,
        quote_id: QuoteId,
        profile: &ShopProfile,
    ) -> ServiceResult<String> {
        let quote = self.load_quote(quote_id)?;
        let lines = self.warehouse.lines_for_quote(quote_id)?;

        let mut ctx = QuoteRenderContext {
            shop_name: profile.name.clone(),
            shop_address: profile.address.clone(),
            shop_phone: profile.phone.clone(),
            ..QuoteRenderContext::default()
        };

        if let Some(case) = self.warehouse.cases.get(&quote.case_id)? {
            ctx.case_number = Some(case.number.clone());
            ctx.policy_number = case.policy_number.clone();
            ctx.claim_ref = case.claim_ref.clone();
            if let Some(client_id) = case.client_id {
                ctx.client_name = self
                    .warehouse
                    .clients
                    .get(&client_id)?
                    .map(|client| client.full_name());
            }
            if let Some(vehicle_id) = case.vehicle_id {
                ctx.vehicle_label = self
                    .warehouse
                    .vehicles
                    .get(&vehicle_id)?
                    .map(|vehicle| vehicle.display_label());
            }
            if let Some(insurer_id) = case.insurer_id {
                ctx.insurer_name = self
                    .warehouse
                    .insurers
                    .get(&insurer_id)?
                    .map(|insurer| insurer.name);
            }
        }

        Ok(render_quote_html(&quote, &lines, &quote.labor, &ctx))
    }
}
