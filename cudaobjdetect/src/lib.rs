//! Safe bindings to OpenCV's CUDA object detectors.
//!
//! A small C++ shim (`libcudaobjdetect`) exposes `cv::cuda::GpuMat`,
//! `cv::cuda::HOG` and `cv::cuda::CascadeClassifier` through a flat C
//! surface. Every native exception is caught in the shim and returned here
//! as [`Error::Native`]. Each wrapper owns one native object and frees it on
//! drop; result arrays are copied into `Vec`s and released before returning.
//!
//! ```no_run
//! use cudaobjdetect::{GpuMat, Hog};
//! use opencv::imgcodecs;
//!
//! # fn main() -> cudaobjdetect::Result<()> {
//! let img = imgcodecs::imread("street.png", imgcodecs::IMREAD_GRAYSCALE)?;
//! let gpu = GpuMat::from_host(&img)?;
//! let mut hog = Hog::new()?;
//! let coefficients = hog.default_people_detector()?;
//! hog.set_svm_detector(&coefficients)?;
//! for rect in hog.detect_multiscale(&gpu)? {
//!     println!("{:?}", rect);
//! }
//! # Ok(())
//! # }
//! ```

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]
#![allow(non_snake_case)]

mod bindings;
mod marshal;

pub mod cascade;
pub mod error;
pub mod gpu_mat;
pub mod hog;
pub mod types;

pub use cascade::{CascadeConfig, GpuCascade};
pub use error::{Error, Result};
pub use gpu_mat::GpuMat;
pub use hog::{Hog, HogConfig, HogGeometry};
pub use types::{Detections, Rect, Size};

/// Number of CUDA devices OpenCV can use. Zero when OpenCV was built without
/// CUDA or no device is installed.
pub fn cuda_device_count() -> i32 {
    let n = unsafe { bindings::Cuda_DeviceCount() };
    n.max(0)
}
