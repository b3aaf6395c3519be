mod common;

use cudaobjdetect::{GpuMat, Size};
use opencv::{core, prelude::*};

#[test]
fn new_gpu_mat_is_empty() {
    if !common::has_device() {
        return;
    }
    let gm = GpuMat::new().unwrap();
    assert!(gm.empty());
    assert_eq!(gm.rows(), 0);
    assert_eq!(gm.cols(), 0);
}

#[test]
fn upload_then_download_keeps_shape() {
    if !common::has_device() {
        return;
    }
    let image = common::blank_image(120, 200);
    let mut gm = GpuMat::new().unwrap();
    gm.upload(&image).unwrap();
    assert!(!gm.empty());
    assert_eq!(gm.rows(), 120);
    assert_eq!(gm.cols(), 200);
    assert_eq!(gm.size(), Size::new(200, 120));
    assert_eq!(gm.channels(), 1);
    assert_eq!(gm.typ(), core::CV_8UC1);

    let host = gm.download().unwrap();
    assert!(!host.empty().unwrap());
    assert_eq!(host.rows(), 120);
    assert_eq!(host.cols(), 200);
}

#[test]
fn upload_replaces_contents() {
    if !common::has_device() {
        return;
    }
    let mut gm = GpuMat::from_host(&common::blank_image(10, 10)).unwrap();
    gm.upload(&common::blank_image(32, 48)).unwrap();
    assert_eq!(gm.size(), Size::new(48, 32));
}

#[test]
fn download_of_empty_buffer_is_empty() {
    if !common::has_device() {
        return;
    }
    let gm = GpuMat::new().unwrap();
    let host = gm.download().unwrap();
    assert!(host.empty().unwrap());
}

#[test]
fn closing_one_buffer_leaves_others_intact() {
    if !common::has_device() {
        return;
    }
    let a = GpuMat::from_host(&common::blank_image(16, 16)).unwrap();
    let b = GpuMat::from_host(&common::blank_image(24, 8)).unwrap();
    a.close();
    assert_eq!(b.rows(), 24);
    assert_eq!(b.cols(), 8);
}

#[test]
fn buffers_move_across_threads() {
    if !common::has_device() {
        return;
    }
    let gm = GpuMat::from_host(&common::blank_image(64, 64)).unwrap();
    let rows = std::thread::spawn(move || gm.rows()).join().unwrap();
    assert_eq!(rows, 64);
}
