pub mod line;
pub mod modes;
pub mod suggest;
pub mod validation;

pub use modes::{find_mode, FieldSpec, Mode, ModeKind, MODES};
pub use validation::ValidationResult;
