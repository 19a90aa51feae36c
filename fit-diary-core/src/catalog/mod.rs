//! Plan and habit collections.

mod habits;
mod plans;
mod presets;

pub use habits::HabitCatalog;
pub use plans::PlanCatalog;
pub use presets::{default_plans, preplanned_habits};
