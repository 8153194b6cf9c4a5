pub mod report;
pub mod score;
pub mod wagner_fischer;
