pub mod category;
pub mod common;
pub mod expense;
pub mod reference;
pub mod settlement;
pub mod summary;

pub use category::{classify, CategoryParseError, ExpenseCategory};
pub use common::{find_by_id, format_amount, Displayable, Identifiable};
pub use expense::{group_by_category, ExpenseItem};
pub use reference::{EmployeeProfile, TravelRequest, TravelRequestCatalog};
pub use settlement::{SettlementAggregate, SettlementStatus, UNASSIGNED_REVIEWER};
pub use summary::{BalanceDirection, SettlementSummary};
