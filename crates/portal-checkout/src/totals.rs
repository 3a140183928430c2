//! Per-currency checkout totals.

use crate::selection::SelectionItem;
use portal_domain::money::{Currency, ExchangeRate, Money};
use serde::{Deserialize, Serialize};

/// Totals breakdown for a checkout selection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutTotals {
    /// Number of free items in the selection.
    pub free_count: usize,
    /// Number of paid items in the selection.
    pub paid_count: usize,
    /// Subtotal in the stored currency.
    pub subtotal: Money,
    /// Subtotal converted for display.
    pub display_subtotal: Money,
    /// The currency shown to the visitor.
    pub display_currency: Currency,
}

impl CheckoutTotals {
    pub fn total_items(&self) -> usize {
        self.free_count + self.paid_count
    }

    /// Whether checkout can skip payment entirely.
    pub fn is_entirely_free(&self) -> bool {
        self.paid_count == 0
    }
}

/// Aggregate a selection into totals.
///
/// Free items contribute exactly 0 whatever `price` the record carries;
/// backend data has been seen with nonzero prices on free courses. The
/// display subtotal applies the supplied rate only when the display
/// currency differs from the stored one.
pub fn aggregate(
    items: &[SelectionItem],
    source: Currency,
    display: Currency,
    rate: f64,
) -> CheckoutTotals {
    let paid_count = items.iter().filter(|i| !i.is_free).count();
    let free_count = items.len() - paid_count;

    let subtotal = Money::sum(
        items.iter().filter(|i| !i.is_free).map(|i| &i.price),
        source,
    );
    let display_subtotal = ExchangeRate::new(source, display, rate).convert(subtotal);

    CheckoutTotals {
        free_count,
        paid_count,
        subtotal,
        display_subtotal,
        display_currency: display,
    }
}
