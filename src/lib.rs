//! Ad board - classified ad forms for Kharkiv publications
//!
//! [`publication`] and [`form`] hold the toolkit-independent model: field
//! schemas, category tables, report templates and the form controller.
//! [`app`], [`state`] and [`ui`] are the terminal front end built on Ratatui.

pub mod app;
pub mod config;
pub mod form;
pub mod publication;
pub mod state;
pub mod ui;
