//! A library for AGM-style belief revision over propositional formulas.
//!
//! entrench maintains a prioritised set of propositional formulas --- a belief base ---
//! which stays logically consistent as new information arrives.
//! Contradictions are detected by a refutation-based entailment oracle, and resolved by an
//! entrenchment-ordered contraction: beliefs held at a lower priority give way to the
//! incoming formula, while beliefs held at least as strongly veto the revision.
//!
//! The operations approximate the AGM rationality postulates: closure, success, inclusion,
//! vacuity, consistency, and extensionality.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [base](crate::base).
//!
//! Bases are built with a [configuration](crate::config), and revised with
//! [formulas](crate::structures::formula) built by [parsing](crate::structures::formula::Formula::parse)
//! text or programmatically.
//!
//! Internally, and at a high level, revision is viewed in terms of a handful of procedures
//! over a few structures:
//!
//! - A formula is flattened to [conjunctive normal form](crate::procedures::cnf).
//! - The clauses are examined by a recursive [satisfiability search](crate::procedures::dpll)
//!   with unit propagation and case splitting.
//! - [Entailment](crate::procedures::entailment) is satisfiability, by refutation, and
//!   [contradiction detection](crate::procedures::consistency) is entailment of a negation.
//! - The [base](crate::base) expands, contracts, and revises its beliefs, consulting the
//!   procedures above.
//!
//! The search is run to completion and its worst case is exponential in the count of
//! distinct variables, so callers keep formulas small for the library to remain responsive.
//!
//! # Examples
//!
//! + Revision under contradiction, with entrenchment deciding the survivor.
//!
//! ```rust
//! use entrench::base::{Base, ReviseOk};
//! use entrench::config::Config;
//! use entrench::structures::formula::Formula;
//!
//! let mut base = Base::from_config(Config::default());
//!
//! let p = Formula::parse("p").unwrap();
//! let q = Formula::parse("q").unwrap();
//! let not_p = Formula::parse("~p").unwrap();
//!
//! assert_eq!(base.revise(Some(p.clone()), 0.5), ReviseOk::Expanded);
//! assert_eq!(base.revise(Some(q.clone()), 0.6), ReviseOk::Expanded);
//!
//! // ~p is held more strongly than p, so p is contracted away.
//! assert_eq!(base.revise(Some(not_p.clone()), 0.7), ReviseOk::Contracted);
//!
//! assert!(!base.contains(&p));
//! assert!(base.contains(&q));
//! assert!(base.contains(&not_p));
//! assert!(base.is_consistent());
//! ```
//!
//! + Entailment, over a base or the empty collection.
//!
//! ```rust
//! use entrench::base::Base;
//! use entrench::structures::formula::Formula;
//!
//! let mut base = Base::default();
//!
//! assert!(base.entails(&Formula::parse("p | ~p").unwrap()));
//!
//! base.expand(Formula::parse("p > q").unwrap(), 0.5);
//! base.expand(Formula::parse("p").unwrap(), 0.5);
//!
//! assert!(base.entails(&Formula::parse("q").unwrap()));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety
//! of targets are defined in order to help narrow output to relevant parts of the library.
//! No log implementation is provided; the targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to contraction can be filtered with `RUST_LOG=contraction …` or,
//! - Logs of each unit propagation with `RUST_LOG=propagation=trace …`

pub mod base;
pub mod config;
pub mod generic;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
