//! Transfer-tax (ITCMD) rate lookup
//!
//! The rate table is injected into the engine through [`TaxRateTable`] so
//! that callers and tests can supply their own rates. Unknown jurisdictions
//! fall back to the table's default rate instead of failing.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::warn;

use core_kernel::Rate;

/// Source of a jurisdiction→rate lookup
pub trait TaxRateTable {
    /// Rate for a jurisdiction code, if the table knows it
    fn rate_for(&self, jurisdiction: &str) -> Option<Rate>;

    /// Rate applied to unknown jurisdictions
    fn default_rate(&self) -> Rate;
}

/// Where a resolved rate came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateSource {
    /// Per-case override supplied with the inventory
    Override,
    /// Rate table entry
    Table,
    /// Jurisdiction unknown, default rate used
    Default,
}

/// A rate together with its provenance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRate {
    pub jurisdiction_rate: Rate,
    pub source: RateSource,
}

/// Indicative ITCMD rates per Brazilian state
const STATE_RATES: &[(&str, Decimal)] = &[
    ("AC", dec!(0.04)),
    ("AL", dec!(0.04)),
    ("AM", dec!(0.02)),
    ("AP", dec!(0.04)),
    ("BA", dec!(0.08)),
    ("CE", dec!(0.08)),
    ("DF", dec!(0.06)),
    ("ES", dec!(0.04)),
    ("GO", dec!(0.08)),
    ("MA", dec!(0.07)),
    ("MG", dec!(0.05)),
    ("MS", dec!(0.06)),
    ("MT", dec!(0.08)),
    ("PA", dec!(0.04)),
    ("PB", dec!(0.08)),
    ("PE", dec!(0.08)),
    ("PI", dec!(0.06)),
    ("PR", dec!(0.04)),
    ("RJ", dec!(0.08)),
    ("RN", dec!(0.06)),
    ("RO", dec!(0.04)),
    ("RR", dec!(0.04)),
    ("RS", dec!(0.06)),
    ("SC", dec!(0.08)),
    ("SE", dec!(0.08)),
    ("SP", dec!(0.04)),
    ("TO", dec!(0.08)),
];

/// Default rate for jurisdictions missing from the table
pub const DEFAULT_TAX_RATE: Decimal = dec!(0.04);

/// In-memory rate table keyed by upper-case jurisdiction code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateTaxTable {
    rates: BTreeMap<String, Rate>,
    default_rate: Rate,
}

impl StateTaxTable {
    /// Built-in table of Brazilian state rates
    pub fn brazil() -> Self {
        let rates = STATE_RATES
            .iter()
            .map(|(code, rate)| (code.to_string(), Rate::new(*rate)))
            .collect();
        Self {
            rates,
            default_rate: Rate::new(DEFAULT_TAX_RATE),
        }
    }

    /// Table with explicit rates only
    pub fn from_rates<I, S>(rates: I, default_rate: Rate) -> Self
    where
        I: IntoIterator<Item = (S, Rate)>,
        S: AsRef<str>,
    {
        Self {
            rates: rates
                .into_iter()
                .map(|(code, rate)| (code.as_ref().to_uppercase(), rate))
                .collect(),
            default_rate,
        }
    }

    /// Replaces the fallback rate
    pub fn with_default_rate(mut self, rate: Rate) -> Self {
        self.default_rate = rate;
        self
    }
}

impl Default for StateTaxTable {
    fn default() -> Self {
        Self::brazil()
    }
}

impl TaxRateTable for StateTaxTable {
    fn rate_for(&self, jurisdiction: &str) -> Option<Rate> {
        self.rates.get(&jurisdiction.trim().to_uppercase()).copied()
    }

    fn default_rate(&self) -> Rate {
        self.default_rate
    }
}

/// Per-case overrides layered over another table
pub struct OverriddenTaxTable<'a, T: TaxRateTable + ?Sized> {
    inner: &'a T,
    overrides: BTreeMap<String, Rate>,
}

impl<'a, T: TaxRateTable + ?Sized> OverriddenTaxTable<'a, T> {
    pub fn new(inner: &'a T, overrides: &BTreeMap<String, Decimal>) -> Self {
        Self {
            inner,
            overrides: overrides
                .iter()
                .map(|(code, rate)| (code.trim().to_uppercase(), Rate::new(*rate)))
                .collect(),
        }
    }

    /// Resolves a rate, recording whether an override was used
    pub fn resolve(&self, jurisdiction: &str) -> ResolvedRate {
        if let Some(rate) = self.overrides.get(&jurisdiction.trim().to_uppercase()) {
            return ResolvedRate {
                jurisdiction_rate: *rate,
                source: RateSource::Override,
            };
        }
        resolve_rate(self.inner, jurisdiction)
    }
}

impl<T: TaxRateTable + ?Sized> TaxRateTable for OverriddenTaxTable<'_, T> {
    fn rate_for(&self, jurisdiction: &str) -> Option<Rate> {
        self.overrides
            .get(&jurisdiction.trim().to_uppercase())
            .copied()
            .or_else(|| self.inner.rate_for(jurisdiction))
    }

    fn default_rate(&self) -> Rate {
        self.inner.default_rate()
    }
}

/// Looks up a jurisdiction, falling back to the default rate
pub fn resolve_rate<T: TaxRateTable + ?Sized>(table: &T, jurisdiction: &str) -> ResolvedRate {
    match table.rate_for(jurisdiction) {
        Some(rate) => ResolvedRate {
            jurisdiction_rate: rate,
            source: RateSource::Table,
        },
        None => {
            warn!(jurisdiction, "Unknown jurisdiction, using default transfer-tax rate");
            ResolvedRate {
                jurisdiction_rate: table.default_rate(),
                source: RateSource::Default,
            }
        }
    }
}
