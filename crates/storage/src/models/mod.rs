mod age_group;
mod athlete;
mod discipline;
mod goal;
mod record;
mod stadium;
mod venue;

pub use age_group::AgeGroup;
pub use athlete::{Athlete, display_name};
pub use discipline::Discipline;
pub use goal::{Goal, GoalListing};
pub use record::{Record, RecordListing};
pub use stadium::{Stadium, StadiumSetting};
pub use venue::Venue;
