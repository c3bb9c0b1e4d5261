pub mod table;
pub mod validator;

pub use table::render_standings;
pub use validator::{SnapshotValidator, ValidationReport};
