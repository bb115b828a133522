//! Form session layer
//!
//! Toolkit-independent model of an ad form: captured values, dependent
//! option recomputation and submission to a report sink. Any renderer can
//! drive it by calling [`FormController::on_field_changed`] and
//! [`FormController::on_submit`].

mod controller;
mod sink;
mod values;

pub use controller::{FormController, FormError};
pub use sink::{BufferedSink, ReportSink};
pub use values::FieldValues;
