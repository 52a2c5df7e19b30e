pub mod board;
pub mod measurement;
pub mod range;
pub mod score;
pub mod subject;
