//! Expense ledger
//!
//! Holds the session's expense entries in insertion order and applies
//! validated mutations. Entries are addressed by [`EntryId`]; positional
//! helpers exist for callers that render rows by index.
//!
//! The sum of all amounts always stays representable: an add or edit that
//! would overflow it is refused, so totals computed from a ledger are exact.

use tracing::{debug, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{EntryId, ExpenseCategory, ExpenseEntry, Money, MoneyParseError};

/// An edit queued for [`Ledger::apply_batch`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingEdit {
    /// Replace the amount of an entry with the parsed text
    SetAmount { id: EntryId, text: String },
    /// Remove an entry
    Delete { id: EntryId },
}

/// What happened to a batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    /// Entries whose amount changed
    pub updated: Vec<EntryId>,
    /// Entries removed
    pub deleted: Vec<EntryId>,
    /// Amount edits that failed to parse; those entries kept their prior value
    pub rejected: Vec<(EntryId, MoneyParseError)>,
    /// Edits naming entries that do not exist
    pub missing: Vec<EntryId>,
    /// Amount edits refused because the ledger total would overflow
    pub overflowed: Vec<EntryId>,
}

impl BatchOutcome {
    /// True if every edit in the batch was applied
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty() && self.missing.is_empty() && self.overflowed.is_empty()
    }
}

/// The session's expense entries
#[derive(Debug, Clone)]
pub struct Ledger {
    entries: Vec<ExpenseEntry>,
    next_id: EntryId,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: EntryId::from_raw(1),
        }
    }

    /// Record a new expense from user-entered amount text
    ///
    /// Accepts `,` or `.` as the decimal separator. Empty, non-numeric and
    /// negative amounts are rejected and leave the ledger unchanged, as is an
    /// amount the ledger total could not absorb.
    pub fn add(&mut self, category: ExpenseCategory, text: &str) -> BudgetResult<EntryId> {
        let amount = Money::parse_non_negative(text).map_err(|e| {
            warn!(%category, input = text, error = %e, "rejected expense");
            BudgetError::from(e)
        })?;
        if self.total().checked_add(amount).is_none() {
            warn!(%category, input = text, "rejected expense, total would overflow");
            return Err(BudgetError::TotalOverflow {
                amount: text.trim().to_string(),
            });
        }

        let id = self.next_id;
        self.next_id = id.next();
        self.entries.push(ExpenseEntry::new(id, category, amount));

        debug!(%id, %category, %amount, len = self.entries.len(), "expense added");
        Ok(id)
    }

    /// Replace the amount of an entry, returning the previous amount
    ///
    /// On a parse failure the entry keeps its current amount and the error is
    /// returned; callers that want the lenient behaviour can ignore it.
    pub fn edit(&mut self, id: EntryId, text: &str) -> BudgetResult<Money> {
        let total = self.total();
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;

        let amount = match Money::parse_non_negative(text) {
            Ok(amount) => amount,
            Err(e) => {
                warn!(%id, input = text, error = %e, "edit rejected, keeping previous amount");
                return Err(e.into());
            }
        };

        if Self::retotal(total, entry.amount, amount).is_none() {
            warn!(%id, input = text, "edit rejected, total would overflow");
            return Err(BudgetError::TotalOverflow {
                amount: text.trim().to_string(),
            });
        }

        let previous = entry.amount;
        entry.set_amount(amount);
        debug!(%id, %previous, %amount, "expense edited");
        Ok(previous)
    }

    /// Remove an entry; later entries move up one position
    pub fn delete(&mut self, id: EntryId) -> BudgetResult<ExpenseEntry> {
        let index = self
            .position_of(id)
            .ok_or_else(|| BudgetError::expense_not_found(id.to_string()))?;
        let removed = self.entries.remove(index);
        debug!(%id, index, len = self.entries.len(), "expense deleted");
        Ok(removed)
    }

    /// Remove the entry at a position
    pub fn remove_at(&mut self, index: usize) -> BudgetResult<ExpenseEntry> {
        if index >= self.entries.len() {
            return Err(BudgetError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let removed = self.entries.remove(index);
        debug!(id = %removed.id, index, "expense removed by position");
        Ok(removed)
    }

    /// Apply a batch of edits as one copy-on-write step
    ///
    /// Amount edits are applied first and deletions second, all resolved by
    /// id against a working copy that replaces the current entries at the
    /// end. A failed amount edit keeps the entry's prior value and is
    /// reported in [`BatchOutcome::rejected`].
    pub fn apply_batch(&mut self, edits: Vec<PendingEdit>) -> BatchOutcome {
        let mut next = self.entries.clone();
        let mut total = self.total();
        let mut outcome = BatchOutcome::default();
        let mut deletions = Vec::new();

        for edit in edits {
            match edit {
                PendingEdit::SetAmount { id, text } => {
                    let Some(entry) = next.iter_mut().find(|e| e.id == id) else {
                        outcome.missing.push(id);
                        continue;
                    };
                    match Money::parse_non_negative(&text) {
                        Ok(amount) if entry.amount != amount => {
                            match Self::retotal(total, entry.amount, amount) {
                                Some(new_total) => {
                                    total = new_total;
                                    entry.set_amount(amount);
                                    outcome.updated.push(id);
                                }
                                None => outcome.overflowed.push(id),
                            }
                        }
                        Ok(_) => {}
                        Err(e) => outcome.rejected.push((id, e)),
                    }
                }
                PendingEdit::Delete { id } => deletions.push(id),
            }
        }

        for id in deletions {
            match next.iter().position(|e| e.id == id) {
                Some(index) => {
                    next.remove(index);
                    outcome.deleted.push(id);
                }
                None => outcome.missing.push(id),
            }
        }

        self.entries = next;
        debug!(
            updated = outcome.updated.len(),
            deleted = outcome.deleted.len(),
            rejected = outcome.rejected.len(),
            overflowed = outcome.overflowed.len(),
            "batch applied"
        );
        outcome
    }

    /// Remove every entry; ids keep increasing afterwards
    pub fn clear(&mut self) -> Vec<ExpenseEntry> {
        std::mem::take(&mut self.entries)
    }

    /// Read-only view of the entries in insertion order
    pub fn snapshot(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    /// Look up an entry by id
    pub fn get(&self, id: EntryId) -> Option<&ExpenseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entry at a position
    pub fn entry_at(&self, index: usize) -> Option<&ExpenseEntry> {
        self.entries.get(index)
    }

    /// Id of the entry at a position
    pub fn id_at(&self, index: usize) -> Option<EntryId> {
        self.entries.get(index).map(|e| e.id)
    }

    /// Current position of an entry
    pub fn position_of(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the ledger has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all amounts
    pub fn total(&self) -> Money {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// The total after replacing `old` with `new`, if representable
    fn retotal(total: Money, old: Money, new: Money) -> Option<Money> {
        total.checked_sub(old)?.checked_add(new)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
