// ============================================================================
// Interfaces Module
// Trait seam between Rust numeric types and the conversion engine
// ============================================================================

mod numeric_target;

pub use numeric_target::NumericTarget;
