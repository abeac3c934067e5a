//! Immutable step sequences.
//!
//! A [`Trace`] is the unit of exchange between a generator and its
//! consumer: an ordered, 0-indexed, finite list of snapshots, computed
//! eagerly in one call and never mutated afterward. The consumer drives a
//! "current step" integer over it; [`Trace::clamped`] makes out-of-range
//! indices safe without hiding logic errors behind silent wrap-around.

use serde::{Deserialize, Serialize};

/// An ordered, immutable sequence of algorithm snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace<S> {
    steps: Vec<S>,
}

impl<S> Trace<S> {
    /// Wrap a fully-computed step list.
    #[must_use]
    pub fn new(steps: Vec<S>) -> Self {
        Self { steps }
    }

    /// Number of steps in the trace.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// True if the trace holds no steps.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Get the step at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&S> {
        self.steps.get(index)
    }

    /// Get the step at `index` clamped to `[0, len - 1]`.
    ///
    /// Returns `None` only for an empty trace.
    #[must_use]
    pub fn clamped(&self, index: usize) -> Option<&S> {
        if self.steps.is_empty() {
            None
        } else {
            self.steps.get(index.min(self.steps.len() - 1))
        }
    }

    /// The terminal step, if any.
    #[must_use]
    pub fn last(&self) -> Option<&S> {
        self.steps.last()
    }

    /// Iterate over the steps in order.
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.steps.iter()
    }
}

impl<S> From<Vec<S>> for Trace<S> {
    fn from(steps: Vec<S>) -> Self {
        Self::new(steps)
    }
}

impl<S> std::ops::Index<usize> for Trace<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.steps[index]
    }
}

impl<'a, S> IntoIterator for &'a Trace<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
