use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use atelier_core::Entity;
use atelier_quotes::LineItemId;

/// Where a quoted part stands in the procurement pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FulfillmentStatus {
    /// Not yet ordered from the supplier.
    #[default]
    Pending,
    /// Ordered, awaiting delivery.
    Ordered,
    /// Delivered to the shop.
    Received,
    /// Fitted on the vehicle.
    Done,
}

impl FulfillmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            FulfillmentStatus::Pending => "En attente",
            FulfillmentStatus::Ordered => "Commandé",
            FulfillmentStatus::Received => "Reçu",
            FulfillmentStatus::Done => "Terminé",
        }
    }

    /// Completed statuses count toward the order's progress figure.
    pub fn is_complete(self) -> bool {
        matches!(self, FulfillmentStatus::Done)
    }
}

/// Per-line fulfillment state, stored separately from the quote so that
/// re-saving a quote's lines does not reset procurement tracking for
/// lines that survive the save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fulfillment {
    pub line_item_id: LineItemId,
    pub status: FulfillmentStatus,
    /// Stamped when the status first reaches `Received` (or `Done`
    /// directly), cleared if the line moves back before reception.
    pub received_on: Option<NaiveDate>,
}

impl Fulfillment {
    pub fn new(line_item_id: LineItemId) -> Self {
        Self {
            line_item_id,
            status: FulfillmentStatus::default(),
            received_on: None,
        }
    }

    /// Applies a status change, maintaining the reception date stamp.
    pub fn advance(&mut self, status: FulfillmentStatus, today: NaiveDate) {
        self.status = status;
        match status {
            FulfillmentStatus::Received | FulfillmentStatus::Done => {
                if self.received_on.is_none() {
                    self.received_on = Some(today);
                }
            }
            FulfillmentStatus::Pending | FulfillmentStatus::Ordered => {
                self.received_on = None;
            }
        }
    }
}

impl Entity for Fulfillment {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.line_item_id
    }
}
