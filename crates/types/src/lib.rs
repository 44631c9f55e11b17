pub mod directory;
pub mod ids;
pub mod record;
pub mod serde_util;
pub mod totals;

pub use directory::{BranchRecord, CompanyRecord};
pub use ids::{BranchId, LrNumber};
pub use record::{BranchGroup, LineItem, PaymentType, ShipmentRecord};
pub use totals::{RunningTotals, SelectionTotals};
