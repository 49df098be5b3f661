pub mod lenient;
pub mod report;
pub mod skill;
