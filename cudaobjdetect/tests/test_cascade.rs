mod common;

use cudaobjdetect::{Error, GpuCascade, GpuMat, Size};
use std::io::Write;

#[test]
fn nonexistent_model_fails() {
    assert!(matches!(
        GpuCascade::new("nonexistent.xml"),
        Err(Error::ModelNotFound(_))
    ));
}

#[test]
fn malformed_model_fails() {
    let path = std::env::temp_dir().join(format!(
        "cudaobjdetect-malformed-cascade-{}.xml",
        std::process::id()
    ));
    {
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(b"this is not a cascade").unwrap();
    }
    let res = GpuCascade::new(&path);
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(res, Err(Error::Native { .. })));
}

#[test]
fn loaded_model_reports_window_size() {
    if !common::has_device() {
        return;
    }
    let model = match common::cascade_model() {
        Some(m) => m,
        None => return,
    };
    let cascade = GpuCascade::new(model).unwrap();
    let size = cascade.classifier_size();
    assert!(size.width > 0);
    assert!(size.height > 0);
}

#[test]
fn setters_round_trip() {
    if !common::has_device() {
        return;
    }
    let model = match common::cascade_model() {
        Some(m) => m,
        None => return,
    };
    let mut cascade = GpuCascade::new(model).unwrap();
    cascade.set_find_largest_object(true).unwrap();
    cascade.set_max_num_objects(5).unwrap();
    cascade.set_min_neighbors(3).unwrap();
    cascade.set_max_object_size(Size::new(200, 200)).unwrap();
    cascade.set_min_object_size(Size::new(30, 30)).unwrap();
    cascade.set_scale_factor(1.1).unwrap();

    assert!(cascade.find_largest_object());
    assert_eq!(cascade.max_num_objects(), 5);
    assert_eq!(cascade.min_neighbors(), 3);
    assert_eq!(cascade.max_object_size(), Size::new(200, 200));
    assert_eq!(cascade.min_object_size(), Size::new(30, 30));
    assert_eq!(cascade.scale_factor(), 1.1);

    let config = cascade.config();
    cascade.set_min_neighbors(1).unwrap();
    cascade.apply_config(&config).unwrap();
    assert_eq!(cascade.config(), config);
}

#[test]
fn blank_image_has_no_detections() {
    if !common::has_device() {
        return;
    }
    let model = match common::cascade_model() {
        Some(m) => m,
        None => return,
    };
    let mut cascade = GpuCascade::new(model).unwrap();
    let gpu = GpuMat::from_host(&common::blank_image(240, 320)).unwrap();
    let rects = cascade.detect_multiscale(&gpu).unwrap();
    assert!(rects.is_empty());
}
