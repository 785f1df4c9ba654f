use strum::{Display, EnumString};

/// Order in which AC-3 takes arcs off its worklist.
///
/// Both disciplines reach the same fixpoint; they differ only in how much work it takes.
#[derive(Copy, Clone, Debug, Default, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Worklist {
    /// Most recently queued arc first.
    #[default]
    Lifo,
    /// Oldest queued arc first.
    Fifo,
}

/// Tunables for a [`CrosswordSolver`](crate::CrosswordSolver).
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SolverConfig {
    /// Worklist discipline for AC-3.
    pub worklist: Worklist,
}

impl SolverConfig {
    /// Use `worklist` for arc consistency.
    pub fn with_worklist(mut self, worklist: Worklist) -> Self {
        self.worklist = worklist;
        self
    }
}
