// ============================================================================
// Stepping Module
// Parameter resolution, clipping and step-lattice normalization
// ============================================================================

mod controller;

pub use controller::{clip, next_value, normalize_to_step, read_parameters, settle};
