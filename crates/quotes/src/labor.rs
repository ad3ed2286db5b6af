use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Flat labor amounts per trade, entered directly as ex-tax totals.
///
/// Labor is never itemized per hour; the shop quotes one figure per trade
/// and each figure is taxed at the standard rate regardless of the parts
/// on the quote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborTotals {
    /// Bodywork (tôlerie).
    pub panel_beating: Decimal,
    /// Paint (peinture).
    pub painting: Decimal,
    /// Mechanical (mécanique).
    pub mechanical: Decimal,
    /// Electrical (électrique).
    pub electrical: Decimal,
}

impl LaborTotals {
    pub fn new(
        panel_beating: Decimal,
        painting: Decimal,
        mechanical: Decimal,
        electrical: Decimal,
    ) -> Self {
        Self {
            panel_beating,
            painting,
            mechanical,
            electrical,
        }
    }

    /// Sum of all four trades, ex tax.
    pub fn subtotal(&self) -> Decimal {
        self.panel_beating + self.painting + self.mechanical + self.electrical
    }

    pub fn is_zero(&self) -> bool {
        self.subtotal() == Decimal::ZERO
    }
}
