//! Database Models

pub mod receipt;

// Re-exports
pub use receipt::{Item, Receipt, ReceiptCreate};
