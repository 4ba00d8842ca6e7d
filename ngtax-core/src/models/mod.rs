mod entity;
mod policy;
mod tax_band;
mod tax_profile;
mod tax_result;
mod transaction;

pub use entity::{EntityType, PersonaType, SubscriptionTier};
pub use policy::{Assessment, PolicyYear};
pub use tax_band::TaxBand;
pub use tax_profile::TaxProfile;
pub use tax_result::{Deductions, TaxBreakdownItem, TaxResult};
pub use transaction::{Transaction, TransactionKind, TransactionSource};
