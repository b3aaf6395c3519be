#![allow(dead_code)]

use opencv::{core, prelude::*};
use std::path::PathBuf;

/// GPU tests return early on machines without a usable CUDA device.
pub fn has_device() -> bool {
    let n = cudaobjdetect::cuda_device_count();
    if n == 0 {
        eprintln!("no CUDA device available, skipping");
    }
    n > 0
}

pub fn blank_image(rows: i32, cols: i32) -> Mat {
    Mat::new_rows_cols_with_default(rows, cols, core::CV_8UC1, core::Scalar::all(0.0)).unwrap()
}

pub fn cascade_model() -> Option<PathBuf> {
    match std::env::var("CUDAOBJDETECT_CASCADE") {
        Ok(p) => Some(PathBuf::from(p)),
        Err(_) => {
            eprintln!("CUDAOBJDETECT_CASCADE not set, skipping");
            None
        }
    }
}
