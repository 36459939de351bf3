//! # LG Mode Core
//!
//! Numerics for the radial intensity profile of Laguerre-Gaussian resonator
//! modes $\mathrm{LG}_{p0}$ and the radii of its local extrema.
//!
//! ## Pipeline
//!
//! [`profile::compute_profile`] takes validated [`types::ModeParameters`]
//! and produces a [`types::ModeProfile`]: the sampled intensity, a
//! normalised dataset ready for plotting, and the maxima/minima radii.
//!
//! ## Modules
//!
//! - [`types`] — Parameters, sample grids, result containers, unit conversion.
//! - [`laguerre`] — Laguerre polynomials: recurrence, roots, critical points.
//! - [`intensity`] — Closed-form intensity evaluator.
//! - [`extrema`] — Discrete and analytic maxima, exact minima.
//! - [`profile`] — End-to-end computation for one parameter set.
//! - [`error`] — Error taxonomy.

pub mod error;
pub mod extrema;
pub mod intensity;
pub mod laguerre;
pub mod profile;
pub mod types;

pub use error::ModeError;
pub use profile::compute_profile;
pub use types::{ExtremaResult, ModeParameters, ModeProfile, ProfilePoint};
