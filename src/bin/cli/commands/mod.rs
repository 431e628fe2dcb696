pub mod generate;
pub mod review;
