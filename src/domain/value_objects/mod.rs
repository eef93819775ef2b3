//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod framework;
mod hint_map;
mod placement_mode;
mod project_type;
mod provenance;
pub mod win_path;

pub use framework::TargetFramework;
pub use hint_map::HintMap;
pub use placement_mode::PlacementMode;
pub use project_type::ProjectType;
pub use provenance::{LinkFallback, Provenance};
