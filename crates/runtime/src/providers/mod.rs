//! Decision providers that control arena units.

pub mod ai;
