pub mod error;
pub mod settings;

// Unified-record domain modules
pub mod investigation;
pub mod legal_text;
pub mod penalty;
pub mod query;
pub mod record;
pub mod timeline;

pub use error::*;
pub use settings::*;

pub use investigation::*;
pub use legal_text::*;
pub use penalty::*;
pub use query::*;
pub use record::*;
pub use timeline::*;
