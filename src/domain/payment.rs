use rust_decimal::Decimal;

use crate::cart::LineItem;

/// Lifecycle of a manually entered payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Pending,
    Verified,
    Rejected,
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Verified => write!(f, "verified"),
            PaymentStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A payment the shopper made by scanning the shop's QR code, identified by
/// the transaction id they typed in. Verified or rejected later by an admin.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentRecord {
    pub id: String,
    pub user_id: String,
    pub user_email: String,
    pub transaction_id: String,
    pub amount: Decimal,
    pub items: Vec<LineItem>,
    pub status: PaymentStatus,
}

#[derive(Debug, Clone)]
pub struct PaymentCreate {
    pub user_id: String,
    pub user_email: String,
    pub transaction_id: String,
    pub amount: Decimal,
    pub items: Vec<LineItem>,
}
