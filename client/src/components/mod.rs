//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `resizable_drawer` owns the DOM binding of the drawer controller; the other
//! components are presentational and read shared state from Leptos context.

pub mod resizable_drawer;
pub mod resize_handle;
pub mod student_details;
pub mod student_list;
