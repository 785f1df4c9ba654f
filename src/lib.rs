#![warn(missing_docs)]

//! # `cruciform`
//!
//! A solver which fills crossword grids from a word list, treating the grid as a constraint satisfaction problem.
//! Begin by describing the grid with a [`PuzzleBuilder`](builder::PuzzleBuilder), either cell by cell or from a structure string.
//! Build it into a [`Puzzle`], then call [`solve()`](crate::Puzzle::solve) with your words, yielding a [`Solution`] which prints as the filled grid.
//!
//! # Internals
//! Every slot (a maximal run of open cells across or down) is a variable whose values are words.
//! Three kinds of constraint apply:
//! 1. A word must be exactly as long as its slot (node consistency).
//! 2. Two crossing slots must agree on the letter in their shared cell (binary arc constraints).
//! 3. No word may be used twice.
//!
//! Solving runs in three phases, which [`CrosswordSolver`] also exposes individually:
//!
//! Node consistency first drops every word of the wrong length from each slot's candidates.
//! AC-3 then revises each slot against each crossing slot, removing candidates that no crossing candidate supports, until a fixpoint.
//! An emptied slot at this stage proves there is no fill and ends the solve early.
//!
//! Finally a depth-first backtracking search assigns words one slot at a time.
//! The next slot is the one with the fewest remaining candidates (ties going to the slot with the most crossings),
//! and its candidates are tried least constraining first, i.e. ordered by how many candidates they would rule out in unfilled crossing slots.

pub use assignment::Assignment;
pub use builder::PuzzleBuilder;
pub use config::{SolverConfig, Worklist};
pub use domain::Domains;
pub use location::Location;
pub use puzzle::Puzzle;
pub use solver::{CrosswordSolver, SearchOutcome, Solution, SolverFailure, Statistics};
pub use variable::{Direction, Variable};
pub use words::WordList;

pub(crate) mod assignment;
pub mod builder;
pub(crate) mod config;
pub mod consistency;
pub(crate) mod domain;
pub(crate) mod location;
pub(crate) mod puzzle;
pub mod search;
pub(crate) mod solver;
mod tests;
pub(crate) mod variable;
pub(crate) mod words;
