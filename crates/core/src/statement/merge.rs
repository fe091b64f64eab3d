//! Two-pointer merge of the invoice and ledger event streams.

use super::types::StatementEvent;

/// Merges two creation-ordered event streams into one.
///
/// Both inputs must already be sorted ascending by `created_at` (each
/// comes from a single indexed query, so this holds by construction).
/// The merge compares the next unconsumed element of each stream; the
/// earlier `created_at` is emitted first. On an exact timestamp tie the
/// invoice is emitted before the ledger entry — an arbitrary but fixed
/// rule that keeps the output deterministic.
#[must_use]
pub fn merge_by_creation(
    invoices: Vec<StatementEvent>,
    entries: Vec<StatementEvent>,
) -> Vec<StatementEvent> {
    let mut merged = Vec::with_capacity(invoices.len() + entries.len());
    let mut invoices = invoices.into_iter().peekable();
    let mut entries = entries.into_iter().peekable();

    while let (Some(invoice), Some(entry)) = (invoices.peek(), entries.peek()) {
        if invoice.created_at <= entry.created_at {
            if let Some(event) = invoices.next() {
                merged.push(event);
            }
        } else if let Some(event) = entries.next() {
            merged.push(event);
        }
    }

    merged.extend(invoices);
    merged.extend(entries);
    merged
}
