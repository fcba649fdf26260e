//! jobscope's dashboard generation library.
//!
//! It renders the job market insight panels into a static HTML dashboard:
//! one page hosting a named canvas per panel, plus one generated chart
//! script per panel that binds a [Chart.js] configuration to its canvas.
//!
//! [Chart.js]: https://www.chartjs.org
//!
//! **WARNING**: This library is the jobscope's internal visualization library
//! and there are no plans to stabilize it. The API may break at any time
//! without notice.

#![warn(missing_docs)]

pub(crate) mod chart;
pub(crate) mod script;
pub(crate) mod template;

pub mod error;
pub mod layout;
