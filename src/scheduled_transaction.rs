use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::vault::VaultReadable;

pub type Figure = Decimal;
pub type Currency = String;

/// A transaction the user expects to repeat. The recurrence is stored as the
/// compact string described in the recurrence module, so a malformed rule on
/// one transaction never prevents the rest of the vault from loading.
#[cfg_attr(test, derive(Clone, Debug, PartialEq))]
#[derive(Deserialize)]
pub struct ScheduledTransaction {
    pub name: String,
    pub currency: Currency,
    pub amount: Figure,
    pub start_date: NaiveDate,
    pub recurrence: String,
}

pub type ScheduledTransactionsVaultValues = Vec<ScheduledTransaction>;
impl VaultReadable for ScheduledTransactionsVaultValues {
    const KEY: &'static str = "scheduled_transactions";
}
