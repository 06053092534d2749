pub mod nearby;
pub mod report;
pub mod seed;
