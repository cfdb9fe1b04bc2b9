pub mod record;
pub mod stats;
pub mod subjects;
pub mod thresholds;
