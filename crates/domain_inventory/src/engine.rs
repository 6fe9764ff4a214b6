//! Multi-decedent orchestration
//!
//! The only entry point that composes the pipeline. For each decedent, in
//! death order:
//!
//! ```text
//! split patrimony -> balance -> marital share -> resolve heirs
//!     -> quotas + tax -> partition -> procedure -> alerts -> fees -> trail
//! ```
//!
//! Quotas assigned to heirs who are themselves decedents of the case are
//! added to an accumulator and enter that decedent's monte-mor when it is
//! processed. Decedents already processed are never recomputed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

use core_kernel::{Money, PersonId, Rate};

use crate::alerts::{collect_alerts, AlertContext};
use crate::balance::{calculate_balance, calculate_marital_share};
use crate::classification::split_patrimony;
use crate::complexity::{assess_complexity, ComplexityAssessment};
use crate::error::InventoryError;
use crate::fees::{calculate_fees, DEFAULT_MINIMUM_FEE};
use crate::model::{Decedent, InventoryCase};
use crate::narrative::NarrativeLog;
use crate::partition::suggest_partition;
use crate::procedure::route_procedure;
use crate::quota::{allocate_quotas, total_tax};
use crate::result::{DecedentResult, InventoryReport};
use crate::simultaneous::SimultaneousDeathGroups;
use crate::succession::{has_qualifying_spouse, resolve_heirs};
use crate::tax::{OverriddenTaxTable, RateSource, StateTaxTable, TaxRateTable, DEFAULT_TAX_RATE};
use crate::trail::decision_trail;
use crate::validation::InventoryValidator;

/// Tunable engine parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Fixed minimum fee in case currency
    pub minimum_fee: Decimal,
    /// Transfer-tax rate for jurisdictions missing from the table
    pub default_tax_rate: Decimal,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            minimum_fee: DEFAULT_MINIMUM_FEE,
            default_tax_rate: DEFAULT_TAX_RATE,
        }
    }
}

/// Whole-case state shared by every decedent of one run
struct RunContext<'a, T: TaxRateTable + ?Sized> {
    case: &'a InventoryCase,
    groups: &'a SimultaneousDeathGroups,
    complexity: &'a ComplexityAssessment,
    rates: &'a OverriddenTaxTable<'a, T>,
    warnings: &'a [String],
}

/// Inventory engine
pub struct InventoryEngine<T: TaxRateTable = StateTaxTable> {
    settings: EngineSettings,
    table: T,
}

impl InventoryEngine<StateTaxTable> {
    /// Engine over the built-in state table
    pub fn new(settings: EngineSettings) -> Self {
        let table = StateTaxTable::brazil().with_default_rate(Rate::new(settings.default_tax_rate));
        Self { settings, table }
    }
}

impl Default for InventoryEngine<StateTaxTable> {
    fn default() -> Self {
        Self::new(EngineSettings::default())
    }
}

impl<T: TaxRateTable> InventoryEngine<T> {
    /// Engine over a caller-supplied rate table
    pub fn with_table(table: T, settings: EngineSettings) -> Self {
        Self { settings, table }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn table(&self) -> &T {
        &self.table
    }

    /// Runs the full inventory for a case
    ///
    /// # Arguments
    ///
    /// * `case` - The inventory case; never mutated
    ///
    /// # Returns
    ///
    /// One result per decedent, in processing order, or the first
    /// validation error
    pub fn run(&self, case: &InventoryCase) -> Result<InventoryReport, InventoryError> {
        let warnings = InventoryValidator::validate(case).into_result()?;
        for warning in &warnings {
            warn!(case = %case.case_id, warning = %warning, "Inventory validation warning");
        }

        let groups = SimultaneousDeathGroups::detect(&case.decedents);
        let complexity = assess_complexity(case, &groups);
        let rates = OverriddenTaxTable::new(&self.table, &case.tax_rate_overrides);
        let ctx = RunContext {
            case,
            groups: &groups,
            complexity: &complexity,
            rates: &rates,
            warnings: &warnings,
        };

        let mut order: Vec<&Decedent> = case.decedents.iter().collect();
        order.sort_by_key(|d| (d.death_order.is_none(), d.death_order));

        let mut inherited: BTreeMap<PersonId, Money> = BTreeMap::new();
        let mut results = Vec::with_capacity(order.len());

        for decedent in order {
            let inherited_amount = inherited
                .get(&decedent.id)
                .copied()
                .unwrap_or_else(|| Money::zero(case.currency));

            let result = self.process_decedent(&ctx, decedent, inherited_amount)?;

            for quota in &result.quotas {
                if quota.heir_id != decedent.id && case.is_decedent(quota.heir_id) {
                    let carried = inherited
                        .entry(quota.heir_id)
                        .or_insert_with(|| Money::zero(case.currency));
                    *carried = carried.checked_add(&quota.value)?;
                    info!(
                        from = %decedent.id,
                        to = %quota.heir_id,
                        amount = %quota.value,
                        "Quota carried forward to successive inventory"
                    );
                }
            }

            results.push(result);
        }

        info!(
            case = %case.case_id,
            decedents = results.len(),
            score = complexity.score,
            "Inventory computed"
        );

        Ok(InventoryReport {
            case_id: case.case_id,
            complexity,
            results,
            warnings,
        })
    }

    fn process_decedent<R: TaxRateTable + ?Sized>(
        &self,
        ctx: &RunContext<'_, R>,
        decedent: &Decedent,
        inherited_amount: Money,
    ) -> Result<DecedentResult, InventoryError> {
        let case = ctx.case;
        let heirs = case.heirs_of(decedent.id);
        let assets = case.assets_of(decedent.id);
        let debts = case.debts_of(decedent.id);

        let mut log = NarrativeLog::new();
        log.extend(ctx.warnings.iter().map(|w| format!("Validation warning: {}", w)));
        log.push(format!(
            "Inventory of {} (died {}), regime: {}",
            decedent.name,
            decedent.date_of_death,
            decedent.regime.label()
        ));

        let split = split_patrimony(assets.iter().copied(), decedent.regime);
        log.push(format!(
            "{} asset(s) classified: {} community, {} separate, {} needing review",
            split.len(),
            split.community.len(),
            split.separate.len(),
            split.undetermined.len()
        ));

        let balance = calculate_balance(
            assets.iter().copied(),
            debts.iter().copied(),
            inherited_amount,
            case.currency,
        )?;
        if balance.inherited_amount.is_positive() {
            log.push(format!(
                "{} received from earlier inventories added to the monte-mor",
                balance.inherited_amount
            ));
        }
        log.push(format!(
            "Monte-mor {}, debts {}, net estate {}",
            balance.gross_assets, balance.total_debts, balance.net_estate
        ));
        if balance.clamped {
            log.push("Debts exceed assets: net estate floored at zero");
        }

        let spouse = has_qualifying_spouse(&heirs);
        let marital = calculate_marital_share(&split.community, decedent.regime, spouse, balance.net_estate)?;
        log.push(format!(
            "Marital share {} separated before inheritance; net inheritance {}",
            marital.marital_share, marital.net_inheritance
        ));

        let resolution = resolve_heirs(decedent, &heirs, ctx.groups);
        if resolution.is_vacant() {
            warn!(decedent = %decedent.id, "No effective heirs, estate is vacant");
            log.push("No effective heir: vacant estate, no quotas allocated");
        } else {
            log.push(format!(
                "{} effective heir(s) from {}",
                resolution.heir_count(),
                resolution.tier.label()
            ));
        }
        if !resolution.excluded_simultaneous.is_empty() {
            log.push(format!(
                "{} heir(s) excluded for simultaneous death",
                resolution.excluded_simultaneous.len()
            ));
        }

        let tax_rate = ctx.rates.resolve(&decedent.jurisdiction);
        if tax_rate.source == RateSource::Default {
            log.push(format!(
                "Jurisdiction {} unknown, default tax rate {} applied",
                decedent.jurisdiction, tax_rate.jurisdiction_rate
            ));
        }

        let quotas = if balance.gross_assets.is_zero() {
            if !resolution.is_vacant() {
                log.push("Nothing to distribute: no quotas allocated");
            }
            Vec::new()
        } else {
            allocate_quotas(marital.net_inheritance, &resolution.heirs, tax_rate.jurisdiction_rate)?
        };
        let total_tax = total_tax(&quotas, case.currency)?;
        for quota in &quotas {
            log.push(format!(
                "{} ({}): quota {}, tax {}",
                quota.heir_name,
                quota.kinship.label(),
                quota.value,
                quota.tax
            ));
        }

        let partition = suggest_partition(&quotas, &assets, &case.custom_partition)?;
        let procedure = route_procedure(decedent, &heirs, case.litigation_declared);
        log.push(format!("Procedure: {}", procedure.procedure.label()));

        let simultaneous_group = if ctx.groups.simultaneous_with(decedent.id).is_empty() {
            None
        } else {
            ctx.groups.group_of(decedent.id).map(str::to_string)
        };
        let chained_heirs = resolution
            .heirs
            .iter()
            .filter(|h| h.id != decedent.id && case.is_decedent(h.id))
            .count();

        let alerts = collect_alerts(&AlertContext {
            decedent,
            declared_heirs: &heirs,
            split: &split,
            balance: &balance,
            resolution: &resolution,
            simultaneous_group: simultaneous_group.as_deref(),
            chained_heirs,
        });

        let fees = calculate_fees(
            balance.net_estate,
            procedure.procedure,
            ctx.complexity,
            resolution.heir_count(),
            self.settings.minimum_fee,
        )?;
        log.push(format!(
            "Recommended fee {} ({} to {})",
            fees.recommended, fees.floor, fees.ceiling
        ));

        info!(
            decedent = %decedent.id,
            net_estate = %balance.net_estate,
            heirs = resolution.heir_count(),
            procedure = procedure.procedure.label(),
            "Decedent processed"
        );

        let mut result = DecedentResult {
            decedent_id: decedent.id,
            decedent_name: decedent.name.clone(),
            regime: decedent.regime,
            jurisdiction: decedent.jurisdiction.clone(),
            community_assets: split.community,
            separate_assets: split.separate,
            undetermined_assets: split.undetermined,
            balance,
            marital,
            succession_tier: resolution.tier,
            spouse_concurs: resolution.spouse_concurs,
            excluded_predeceased: resolution.excluded_predeceased,
            excluded_simultaneous: resolution.excluded_simultaneous,
            vacant: resolution.heirs.is_empty(),
            tax_rate,
            quotas,
            total_tax,
            partition,
            procedure,
            alerts,
            complexity: ctx.complexity.clone(),
            simultaneous_death: simultaneous_group.is_some(),
            simultaneous_group,
            fees,
            trail: Vec::new(),
            narrative: log.into_entries(),
        };
        result.trail = decision_trail(&result);

        Ok(result)
    }
}

/// Runs an inventory with the built-in rate table and default settings
pub fn run_inventory(case: &InventoryCase) -> Result<InventoryReport, InventoryError> {
    InventoryEngine::<StateTaxTable>::default().run(case)
}
