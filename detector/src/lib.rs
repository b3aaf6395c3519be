pub mod errors;
pub mod gpu_detector;
pub mod options;
pub mod report;
