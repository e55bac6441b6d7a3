use super::denomination::Denomination;
use super::error::TillError;

/// An in-memory cash drawer. Holds a count of bills per denomination and
/// a running total, kept in sync by every mutation.
///
/// Batch arguments and change breakdowns are positional arrays ordered
/// highest to lowest: [20s, 10s, 5s, 2s, 1s].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Till {
    counts: [u64; 5],
    total: u64,
}

impl Till {
    /// An empty drawer.
    pub fn new() -> Self {
        Till {
            counts: [0; 5],
            total: 0,
        }
    }

    /// A drawer seeded with one count per denomination, highest first.
    /// Rejects the seed with the same rules as [`Till::deposit_batch`].
    pub fn with_counts(counts: &[i64]) -> Result<Self, TillError> {
        let mut till = Till::new();
        till.deposit_batch(counts)?;
        Ok(till)
    }

    // ========================
    // Deposits
    // ========================

    /// Add a single bill, identified by its token ("$20", "$10", ...).
    pub fn deposit_one(&mut self, token: &str) -> Result<(), TillError> {
        let denomination = resolve_token(token)?;
        self.put(denomination, 1);
        Ok(())
    }

    /// Add bills in bulk. The batch is validated in full before any count
    /// changes, so a rejected batch leaves the drawer untouched.
    pub fn deposit_batch(&mut self, counts: &[i64]) -> Result<(), TillError> {
        let notes = validate_batch(counts)?;
        for denomination in Denomination::ALL {
            self.put(denomination, notes[denomination.slot()]);
        }
        Ok(())
    }

    // ========================
    // Withdrawals
    // ========================

    /// Remove a single bill. Returns `Ok(false)` when no bill of that
    /// denomination is held, without treating it as an error.
    pub fn withdraw_one(&mut self, token: &str) -> Result<bool, TillError> {
        let denomination = resolve_token(token)?;
        let slot = denomination.slot();

        if self.counts[slot] == 0 {
            return Ok(false);
        }

        self.counts[slot] -= 1;
        self.total -= denomination.value();
        Ok(true)
    }

    /// Remove bills in bulk. Availability is checked for every
    /// denomination before any count changes, so a rejected batch leaves
    /// the drawer untouched.
    pub fn withdraw_batch(&mut self, counts: &[i64]) -> Result<(), TillError> {
        let notes = validate_batch(counts)?;
        self.take_all(&notes)
    }

    // ========================
    // Queries
    // ========================

    /// Whether at least one bill of the given denomination is held.
    pub fn contains(&self, token: &str) -> Result<bool, TillError> {
        let denomination = resolve_token(token)?;
        Ok(self.counts[denomination.slot()] > 0)
    }

    /// Current counts per denomination, highest first.
    pub fn amounts(&self) -> [u64; 5] {
        self.counts
    }

    /// Current drawer value.
    pub fn total(&self) -> u64 {
        self.total
    }

    // ========================
    // Change
    // ========================

    /// Remove bills summing to `amount` and return the breakdown,
    /// highest first.
    ///
    /// The breakdown is greedy and never backtracks: walking from the
    /// highest denomination down, each step computes how many bills of
    /// that denomination the remaining amount calls for and takes exactly
    /// that many, or skips the denomination entirely when fewer are held.
    /// The walk never revisits a denomination, so a combination a human
    /// could assemble by splitting differently may still be reported as
    /// not possible.
    ///
    /// A failed request leaves the drawer untouched. An `amount` of zero
    /// succeeds with an all-zero breakdown.
    pub fn make_change(&mut self, amount: i64) -> Result<[u64; 5], TillError> {
        if amount < 0 || amount as u64 > self.total {
            tracing::error!("Change amount {} rejected: till holds {}", amount, self.total);
            return Err(TillError::InvalidAmount {
                requested: amount,
                total: self.total,
            });
        }

        let amount = amount as u64;
        let notes = self.change_breakdown(amount).ok_or_else(|| {
            tracing::error!("Change not possible for amount {}", amount);
            TillError::ChangeNotPossible { amount }
        })?;

        // The breakdown was drawn from live counts; failing to remove it
        // means the drawer itself is corrupt.
        if let Err(err) = self.take_all(&notes) {
            panic!("till state inconsistent while removing change: {}", err);
        }

        Ok(notes)
    }

    // ========================
    // Internal bookkeeping
    // ========================

    fn put(&mut self, denomination: Denomination, count: u64) {
        self.counts[denomination.slot()] += count;
        self.total += count * denomination.value();
    }

    /// Remove a set of bills atomically. Every denomination is checked
    /// before the first count changes.
    fn take_all(&mut self, notes: &[u64; 5]) -> Result<(), TillError> {
        for denomination in Denomination::ALL {
            let slot = denomination.slot();
            if notes[slot] > self.counts[slot] {
                tracing::error!(
                    "Cannot remove {} x {}: only {} held",
                    notes[slot],
                    denomination,
                    self.counts[slot]
                );
                return Err(TillError::InsufficientFunds {
                    denomination,
                    held: self.counts[slot],
                    requested: notes[slot],
                });
            }
        }

        for denomination in Denomination::ALL {
            self.counts[denomination.slot()] -= notes[denomination.slot()];
            self.total -= notes[denomination.slot()] * denomination.value();
        }

        Ok(())
    }

    /// Greedy change plan against current counts, or `None` when the walk
    /// cannot land on the exact amount.
    fn change_breakdown(&self, amount: u64) -> Option<[u64; 5]> {
        let mut notes = [0u64; 5];
        let mut remaining = amount;

        for denomination in Denomination::ALL {
            if remaining == 0 {
                return Some(notes);
            }

            let slot = denomination.slot();
            let wanted = remaining / denomination.value();
            if wanted == 0 || wanted > self.counts[slot] {
                continue;
            }

            notes[slot] = wanted;
            remaining -= wanted * denomination.value();
        }

        if remaining == 0 { Some(notes) } else { None }
    }
}

impl Default for Till {
    fn default() -> Self {
        Till::new()
    }
}

fn resolve_token(token: &str) -> Result<Denomination, TillError> {
    Denomination::from_token(token).ok_or_else(|| {
        tracing::error!("Denomination token {:?} not accepted", token);
        TillError::UnknownDenomination(token.to_string())
    })
}

/// Check a positional batch: exactly one entry per denomination, none
/// negative. Returns the counts widened for internal arithmetic.
fn validate_batch(counts: &[i64]) -> Result<[u64; 5], TillError> {
    let expected = Denomination::ALL.len();
    if counts.len() != expected {
        tracing::error!(
            "Batch of {} entries rejected; expected counts for [20s, 10s, 5s, 2s, 1s]",
            counts.len()
        );
        return Err(TillError::MalformedBatch {
            expected,
            found: counts.len(),
        });
    }

    let mut notes = [0u64; 5];
    for denomination in Denomination::ALL {
        let slot = denomination.slot();
        let count = counts[slot];
        if count < 0 {
            tracing::error!("Negative count {} for {} rejected", count, denomination);
            return Err(TillError::NegativeAmount {
                denomination,
                count,
            });
        }
        notes[slot] = count as u64;
    }

    Ok(notes)
}
