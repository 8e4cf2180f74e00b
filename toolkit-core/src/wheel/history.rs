use std::collections::{HashSet, VecDeque};

/// The last winners of a wheel, oldest first.
///
/// A bounded FIFO of option positions used to keep the next draws from
/// repeating the same options. It is a plain value: every operation returns
/// a new history instead of mutating shared state, and the caller threads it
/// from one spin to the next.
///
/// # Invariants
/// - `recent.len() <= recent_n`
/// - `recent_n == 0` means tracking is disabled and nothing is excluded
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionHistory {
	recent_n: usize,
	recent: VecDeque<usize>,
}

impl SelectionHistory {
	/// Creates an empty history remembering up to `recent_n` winners.
	pub fn new(recent_n: usize) -> Self {
		Self { recent_n, recent: VecDeque::new() }
	}

	/// Rebuilds a history from positions sent back by a client, oldest first.
	///
	/// Only the newest `recent_n` positions are kept.
	pub fn from_recent<I: IntoIterator<Item = usize>>(recent_n: usize, positions: I) -> Self {
		positions.into_iter().fold(Self::new(recent_n), |history, index| history.record(index))
	}

	/// Maximum number of remembered winners.
	pub fn recent_n(&self) -> usize {
		self.recent_n
	}

	/// Remembered winners, oldest first.
	pub fn recent(&self) -> impl Iterator<Item = usize> + '_ {
		self.recent.iter().copied()
	}

	pub fn is_empty(&self) -> bool {
		self.recent.is_empty()
	}

	/// Returns a history with `index` recorded as the latest winner.
	///
	/// The oldest entry is evicted once more than `recent_n` are held.
	pub fn record(&self, index: usize) -> Self {
		let mut next = self.clone();
		if next.recent_n == 0 {
			return next;
		}
		next.recent.push_back(index);
		while next.recent.len() > next.recent_n {
			next.recent.pop_front();
		}
		next
	}

	/// Positions that should not win the next draw.
	pub fn excluded_set(&self) -> HashSet<usize> {
		self.recent.iter().copied().collect()
	}

	/// Returns a history bounded by a new `recent_n`, keeping the newest entries.
	pub fn with_recent_n(&self, recent_n: usize) -> Self {
		let skip = self.recent.len().saturating_sub(recent_n);
		Self { recent_n, recent: self.recent.iter().skip(skip).copied().collect() }
	}

	/// Returns a history consistent with the removal of the option at `index`.
	///
	/// Entries for the removed option are dropped and later positions shift
	/// down by one, matching [`WheelConfig::remove_option`](super::WheelConfig::remove_option).
	pub fn forget(&self, index: usize) -> Self {
		let recent = self
			.recent
			.iter()
			.filter(|&&i| i != index)
			.map(|&i| if i > index { i - 1 } else { i })
			.collect();
		Self { recent_n: self.recent_n, recent }
	}
}
