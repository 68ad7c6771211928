use serde::{Deserialize, Serialize};

/// Settlement summary comparing what was claimed against the allocated advance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SettlementSummary {
    pub total_claimed: f64,
    pub allocated: f64,
    pub total_approved: Option<f64>,
}

/// Which way money flows once the settlement closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceDirection {
    /// The company owes the employee.
    Payable,
    /// The employee returns part of the advance.
    Recoverable,
}

impl SettlementSummary {
    pub fn new(total_claimed: f64, allocated: f64) -> Self {
        Self {
            total_claimed,
            allocated,
            total_approved: None,
        }
    }

    pub fn with_approved(mut self, total_approved: f64) -> Self {
        self.total_approved = Some(total_approved);
        self
    }

    /// Signed balance: approved (when known) or claimed, minus the advance.
    pub fn balance(&self) -> f64 {
        self.total_approved.unwrap_or(self.total_claimed) - self.allocated
    }

    pub fn direction(&self) -> BalanceDirection {
        if self.balance() >= 0.0 {
            BalanceDirection::Payable
        } else {
            BalanceDirection::Recoverable
        }
    }

    pub fn balance_label(&self) -> &'static str {
        match self.direction() {
            BalanceDirection::Payable => "Balance Payable",
            BalanceDirection::Recoverable => "Balance Recoverable",
        }
    }
}
