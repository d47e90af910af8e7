/*!
 * Process Table
 * Per-run arena of runtime states addressed by stable handles
 */

use super::definition::ProcessDefinition;
use super::runtime::ProcessRuntime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Handle into a `ProcessTable`, equal to the definition index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcId(usize);

impl ProcId {
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProcId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Single source of truth for every runtime state in one run
///
/// Queues hold `ProcId`s only; the table owns the states.
#[derive(Debug, Clone)]
pub struct ProcessTable<'d> {
    entries: Vec<ProcessRuntime<'d>>,
}

impl<'d> ProcessTable<'d> {
    /// Instantiate a fresh runtime state for every definition, in order
    pub fn instantiate(defs: &'d [ProcessDefinition]) -> Self {
        Self {
            entries: defs.iter().map(ProcessRuntime::instantiate).collect(),
        }
    }

    /// Handles in definition order
    pub fn ids(&self) -> impl Iterator<Item = ProcId> + '_ {
        (0..self.entries.len()).map(ProcId)
    }

    pub fn all_done(&self) -> bool {
        self.entries.iter().all(ProcessRuntime::is_done)
    }
}

impl<'d> Index<ProcId> for ProcessTable<'d> {
    type Output = ProcessRuntime<'d>;

    #[inline]
    fn index(&self, id: ProcId) -> &Self::Output {
        &self.entries[id.0]
    }
}

impl<'d> IndexMut<ProcId> for ProcessTable<'d> {
    #[inline]
    fn index_mut(&mut self, id: ProcId) -> &mut Self::Output {
        &mut self.entries[id.0]
    }
}
