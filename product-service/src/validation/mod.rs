//! Request validation: reusable field checks composed into ordered
//! per-endpoint pipelines, with a gate that turns failures into a 400
//! response before any handler runs.

mod pipeline;
mod rules;

pub use pipeline::{gate, run, RawInput};
pub use rules::{Check, Rule};
