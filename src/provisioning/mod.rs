//! Phone number provisioning flow

pub mod catalog;
pub mod wizard;

pub use catalog::RegionCatalog;
pub use wizard::{SearchRequest, Wizard, WizardError, WizardState};
