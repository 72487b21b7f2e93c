mod cli;
mod preview;
mod recurrence;
mod schedule;
mod scheduled_transaction;
mod vault;

use crate::cli::upcoming_operation;
fn main() {
    upcoming_operation()
}
