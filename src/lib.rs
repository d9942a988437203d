//! One-dimensional root finding.
//!
//! The `solver` module holds the root finders: bisection, Newton-Raphson,
//! Halley's method, and interval-scanning drivers that collect every root
//! bracketed inside a search range.
//!
//! Functions typically have to be wrapped before use.  See the `wrap` module
//! for how to do this.  When no analytic derivative is available, the
//! `derivative` module supplies a central-difference estimate behind the same
//! traits.
//!
//! Custom convergence criteria can be supplied.  Canned ones exist in the
//! `convergence` module.

pub mod bracket;
pub mod convergence;
pub mod derivative;
pub mod solver;
pub mod wrap;
