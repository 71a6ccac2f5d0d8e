//! Comparison figures for pendulum integrator output.
//!
//! Reads the CSV series written by the Gauss, Romberg and adaptive
//! integrators (with and without an external driving force) and renders
//! them into one composite PNG: two angle-vs-time panels and a row of
//! phase portraits.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod error;
pub mod render;

pub use app::{run, RunOutcome};
pub use config::{FigureConfig, RunConfig};
pub use error::{PlotError, Result};
