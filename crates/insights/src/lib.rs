//! jobscope's domain library.
//!
//! It defines the four job market insight panels and the projection of the
//! statistics records returned by the insights API into chart series.

pub mod error;
pub mod panel;
pub mod series;
