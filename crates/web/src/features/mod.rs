pub mod age_groups;
pub mod athletes;
pub mod goals;
pub mod records;
pub mod stadiums;
pub mod venues;
