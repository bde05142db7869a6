pub mod numeric;
pub mod project;
