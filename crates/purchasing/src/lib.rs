//! Purchase orders (bons de commande), derived on the fly from accepted
//! quotes by grouping parts lines per supplier, plus the fulfillment
//! tracking overlaid on each line.

pub mod fulfillment;
pub mod order;

pub use fulfillment::{Fulfillment, FulfillmentStatus};
pub use order::{group_by_supplier, PurchaseOrderGroup};
