pub mod age_group;
pub mod athlete;
pub mod common;
pub mod goal;
pub mod record;
pub mod stadium;
pub mod venue;
