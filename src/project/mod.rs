pub mod dsl;
pub mod eval;
pub mod model;
pub mod presets;
