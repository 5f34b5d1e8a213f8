//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `roster` holds the student domain model and `drawer` the rendered
//! snapshot of the side panel, so components depend on small focused models.

pub mod drawer;
pub mod roster;
