use chrono::NaiveDate;

use crate::recurrence::{
    format_recurrence_description, parse_recurrence, validate_recurrence_config,
};
use crate::schedule::generate_scheduled_dates;
use crate::scheduled_transaction::{
    Currency, Figure, ScheduledTransaction, ScheduledTransactionsVaultValues,
};
use crate::vault::{Vault, VaultReadable};

/* Entrypoint */
pub struct UpcomingOperation {
    date: NaiveDate,
    preview_length: u32,
    transactions: Vec<ScheduledTransaction>,
}

impl UpcomingOperation {
    pub fn from_vault_values<V: Vault>(
        date: NaiveDate,
        preview_length: u32,
        vault: &V,
    ) -> Result<UpcomingOperation, String> {
        return Ok(UpcomingOperation {
            date,
            preview_length,
            transactions: ScheduledTransactionsVaultValues::from_vault(vault)?,
        });
    }

    /// One entry per scheduled transaction. A transaction whose rule cannot
    /// be parsed or does not validate gets its problems listed instead of
    /// dates; it never fails the whole screen.
    pub fn execute(&self) -> UpcomingScreen {
        let entries = self
            .transactions
            .iter()
            .map(|transaction| self.entry_for(transaction))
            .collect();

        return UpcomingScreen {
            date: self.date,
            entries,
        };
    }

    fn entry_for(&self, transaction: &ScheduledTransaction) -> UpcomingEntry {
        let mut entry = UpcomingEntry {
            name: transaction.name.clone(),
            currency: transaction.currency.clone(),
            amount: transaction.amount,
            description: "no recurrence".to_string(),
            dates: Vec::new(),
            problems: Vec::new(),
        };

        let rule = match parse_recurrence(&transaction.recurrence) {
            Some(rule) => rule,
            None => {
                entry.problems.push(format!(
                    "Could not parse recurrence '{}'",
                    transaction.recurrence
                ));
                return entry;
            }
        };

        entry.description = format_recurrence_description(&rule);

        let validation = validate_recurrence_config(&rule, &self.date);
        if !validation.is_valid {
            entry.problems = validation.errors;
            return entry;
        }

        entry.dates = generate_scheduled_dates(&transaction.start_date, &rule, self.preview_length);
        return entry;
    }
}

/* Output types */
#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct UpcomingScreen {
    pub date: NaiveDate,
    pub entries: Vec<UpcomingEntry>,
}

#[cfg_attr(test, derive(Debug, PartialEq))]
pub struct UpcomingEntry {
    pub name: String,
    pub currency: Currency,
    pub amount: Figure,
    pub description: String,
    pub dates: Vec<NaiveDate>,
    pub problems: Vec<String>,
}
