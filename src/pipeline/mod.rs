pub mod load;
pub mod summarize;
