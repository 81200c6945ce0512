use serde::{Deserialize, Serialize};

/// Successful result of dispatching an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderOutcome {
    /// Live order accepted by the exchange
    Placed { order_id: u64 },
    /// Test order passed exchange validation; nothing was placed
    Validated,
}

impl OrderOutcome {
    /// Integer form for callers that only understand an order id.
    ///
    /// A validated test order has no id and maps to 0.
    pub fn order_id(&self) -> u64 {
        match self {
            OrderOutcome::Placed { order_id } => *order_id,
            OrderOutcome::Validated => 0,
        }
    }

    pub fn is_placed(&self) -> bool {
        matches!(self, OrderOutcome::Placed { .. })
    }
}
