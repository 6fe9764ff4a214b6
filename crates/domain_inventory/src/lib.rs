//! Inventory Domain
//!
//! This crate implements the estate-settlement (inventário) engine for
//! Brazilian succession: it classifies a decedent's assets under the marital
//! property regime, computes the monte-mor and the surviving spouse's marital
//! share, resolves the effective heirs, allocates quotas and transfer tax,
//! routes the case to a notarial or in-court procedure, scores complexity and
//! estimates professional fees.
//!
//! # Pipeline
//!
//! ```text
//! validate -> detect simultaneous deaths -> score complexity
//!   for each decedent in death order:
//!     classify assets -> monte-mor -> marital share -> heirs
//!       -> quotas + ITCMD -> partition -> procedure -> alerts -> fees -> trail
//!     carry quotas of deceased heirs forward
//! ```
//!
//! The engine is synchronous and pure: a run owns its accumulator and never
//! touches I/O.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_inventory::{run_inventory, InventoryCase};
//!
//! let case: InventoryCase = serde_json::from_str(&body)?;
//! let report = run_inventory(&case)?;
//! for result in &report.results {
//!     println!("{}: {} to divide", result.decedent_name, result.net_inheritance());
//! }
//! ```

pub mod model;
pub mod error;
pub mod classification;
pub mod balance;
pub mod simultaneous;
pub mod succession;
pub mod tax;
pub mod quota;
pub mod procedure;
pub mod complexity;
pub mod fees;
pub mod alerts;
pub mod partition;
pub mod trail;
pub mod narrative;
pub mod result;
pub mod validation;
pub mod engine;

pub use model::{
    AcquisitionOrigin, Asset, AssetCategory, ChildType, Debt, Decedent, Heir, InventoryCase,
    Kinship, MaritalStatus, PropertyRegime,
};
pub use error::InventoryError;
pub use classification::{classify_asset, split_patrimony, Classification, ClassifiedAsset, PatrimonySplit};
pub use balance::{calculate_balance, calculate_marital_share, EstateBalance, MaritalShare};
pub use simultaneous::SimultaneousDeathGroups;
pub use succession::{resolve_heirs, HeirResolution, SuccessionTier};
pub use tax::{resolve_rate, OverriddenTaxTable, RateSource, ResolvedRate, StateTaxTable, TaxRateTable};
pub use quota::{allocate_quotas, Quota, QuotaBasis};
pub use procedure::{route_procedure, Procedure, ProcedureDecision, ProcedureReason};
pub use complexity::{assess_complexity, ComplexityAssessment, ComplexityCategory, ComplexityFactor};
pub use fees::{calculate_fees, BillingModel, FeeEstimate};
pub use alerts::{AlertCode, LegalAlert, Severity};
pub use partition::{PartitionEntry, PartitionShare};
pub use trail::DecisionStep;
pub use result::{DecedentResult, InventoryReport};
pub use validation::{validate_case, InventoryValidator, ValidationResult, MAX_AMOUNT};
pub use engine::{run_inventory, EngineSettings, InventoryEngine};
