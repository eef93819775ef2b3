//! Convert Module
//!
//! Turns one Web Site entry of a solution into an IntelliSense-only
//! project plus a re-rooted solution.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`ConvertOptions`)
//! - `result` - Result types (`Inspection`, `ConvertResult`, `DependencyReport`)
//! - `use_case` - Pipeline (`ConvertUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use sln2csproj::application::convert::{ConvertOptions, ConvertUseCase};
//! use sln2csproj::infrastructure::LocalFs;
//!
//! let use_case = ConvertUseCase::new(LocalFs::new());
//! let result = use_case.execute(&ConvertOptions::new("legacy/Shop.sln"))?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::{ConvertOptions, DEFAULT_OUT_DIR};
pub use result::{ConvertResult, DependencyReport, Inspection};
pub use use_case::{safe_name, ConvertUseCase};
