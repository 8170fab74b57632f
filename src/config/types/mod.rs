//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Option paths used in messages                |
//! | `table`  | Raw option objects with unknown-key checks   |

mod error;
mod field;
mod table;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use table::RawTable;
