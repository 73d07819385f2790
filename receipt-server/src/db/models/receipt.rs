//! Receipt Model

use serde::{Deserialize, Serialize};

/// Receipt model matching the stored document shape
///
/// Wire field names are camelCase (`purchaseDate`, `purchaseTime`).
/// All amounts stay text end-to-end; they are only parsed inside the
/// scoring engine. The record id is owned by the store (SurrealDB record
/// id / memory map key), so it is skipped during (de)serialization and the
/// repository re-attaches it after reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    #[serde(skip)]
    pub id: Option<String>,
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// A single line entry on a receipt
///
/// No identity of its own; only meaningful inside a receipt's item list.
/// Item order is preserved as submitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

/// Receipt submission payload (without id)
///
/// Strict shape: a missing or mistyped field fails the decode. Field
/// *contents* are not validated here; malformed dates/amounts degrade to
/// zero rule contributions at scoring time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptCreate {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

impl ReceiptCreate {
    /// Attach a freshly generated id, producing the storable receipt
    pub fn into_receipt(self, id: String) -> Receipt {
        Receipt {
            id: Some(id),
            retailer: self.retailer,
            purchase_date: self.purchase_date,
            purchase_time: self.purchase_time,
            items: self.items,
            total: self.total,
        }
    }
}
