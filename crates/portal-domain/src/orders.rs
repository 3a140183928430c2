//! Orders and their payment lifecycle.

use crate::ids::OrderId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Payment status of an order.
///
/// Serialized in the backend's uppercase wire form (`"PAID"` etc.).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentStatus {
    /// Payment initiated, awaiting confirmation.
    #[default]
    Pending,
    /// Payment captured.
    Paid,
    /// Cancelled before capture.
    Cancelled,
    /// Refunded after capture.
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
            PaymentStatus::Cancelled => "CANCELLED",
            PaymentStatus::Refunded => "REFUNDED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "PENDING" => Some(PaymentStatus::Pending),
            "PAID" => Some(PaymentStatus::Paid),
            "CANCELLED" => Some(PaymentStatus::Cancelled),
            "REFUNDED" => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    /// Whether money changed hands and stayed there.
    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentStatus::Paid)
    }

    /// Whether the status is terminal.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PaymentStatus::Paid | PaymentStatus::Cancelled | PaymentStatus::Refunded
        )
    }
}

/// A course purchase order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Unique order identifier.
    pub id: OrderId,
    /// Gateway transaction reference, searchable in the back office.
    #[serde(default)]
    pub transaction_id: String,
    /// Buyer display name.
    #[serde(default)]
    pub buyer_name: String,
    /// Buyer email.
    #[serde(default)]
    pub buyer_email: String,
    /// Order total in the stored currency.
    #[serde(default)]
    pub total: Money,
    /// Payment status.
    #[serde(default)]
    pub payment_status: PaymentStatus,
    /// Unix timestamp of creation.
    #[serde(default)]
    pub created_at: i64,
}
