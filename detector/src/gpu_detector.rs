use crate::errors::{DetectError, Result};
use crate::options::{CascadeOptions, HogOptions};
use crate::report::DetectionReport;
use bytes::Bytes;
use cudaobjdetect::{GpuCascade, GpuMat, Hog};
use opencv::{core, imgcodecs, imgproc, prelude::*};
use slog::{debug, info};
use std::path::Path;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
enum Engine {
    Hog { hog: Hog, with_confidence: bool },
    Cascade(GpuCascade),
}

/// One GPU detector shared behind a lock, so clones can be handed to other
/// threads while the native handle keeps a single writer.
#[derive(Debug, Clone)]
pub struct GpuDetector {
    engine: Arc<Mutex<Engine>>,
    logger: slog::Logger,
}

impl GpuDetector {
    /// Pedestrian detector using OpenCV's pre-trained people SVM.
    pub fn hog(opts: &HogOptions, logger: slog::Logger) -> Result<GpuDetector> {
        let mut hog = Hog::new()?;
        let coefficients = hog.default_people_detector()?;
        hog.set_svm_detector(&coefficients)?;
        hog.set_hit_threshold(opts.hit_threshold)?;
        hog.set_scale_factor(opts.scale_factor)?;
        hog.set_group_threshold(opts.group_threshold)?;
        if let Some(stride) = opts.win_stride {
            hog.set_win_stride(stride)?;
        }
        info!(logger, "hog detector ready";
            "hit_threshold" => opts.hit_threshold,
            "scale_factor" => opts.scale_factor,
            "with_confidence" => opts.with_confidence);
        Ok(GpuDetector {
            engine: Arc::new(Mutex::new(Engine::Hog {
                hog,
                with_confidence: opts.with_confidence,
            })),
            logger,
        })
    }

    pub fn cascade<P: AsRef<Path>>(
        model: P,
        opts: &CascadeOptions,
        logger: slog::Logger,
    ) -> Result<GpuDetector> {
        let model = model.as_ref();
        let mut cascade = GpuCascade::new(model)?;
        cascade.set_scale_factor(opts.scale_factor)?;
        cascade.set_min_neighbors(opts.min_neighbors)?;
        cascade.set_find_largest_object(opts.find_largest_object)?;
        if let Some(size) = opts.min_object_size {
            cascade.set_min_object_size(size)?;
        }
        let window = cascade.classifier_size();
        info!(logger, "cascade detector ready";
            "model" => %model.display(),
            "window" => format!("{}x{}", window.width, window.height));
        Ok(GpuDetector {
            engine: Arc::new(Mutex::new(Engine::Cascade(cascade))),
            logger,
        })
    }

    pub fn process_image_file(&self, img_path: &str) -> Result<DetectionReport> {
        let img = imgcodecs::imread(img_path, imgcodecs::IMREAD_UNCHANGED)?;
        if img.empty()? {
            return Err(DetectError::EmptyImage(img_path.to_string()));
        }
        self.process_image(&img)
    }

    pub fn process_image_blob(&self, data: Bytes) -> Result<DetectionReport> {
        let src = Mat::from_slice::<u8>(data.as_ref())?;
        let img = imgcodecs::imdecode(&src, imgcodecs::IMREAD_UNCHANGED)?;
        if img.empty()? {
            return Err(DetectError::EmptyImage(format!("{} byte blob", data.len())));
        }
        self.process_image(&img)
    }

    // process_image converts to 8-bit grayscale, uploads and runs the detector
    pub fn process_image(&self, img: &Mat) -> Result<DetectionReport> {
        let img_size = img.size()?;
        let gray = preprocess_img(img)?;
        let gpu = GpuMat::from_host(&gray)?;

        let mut res = DetectionReport::new(img_size.width, img_size.height);
        let mut engine = self
            .engine
            .lock()
            .map_err(|_| DetectError::EnginePoisoned)?;
        match &mut *engine {
            Engine::Hog {
                hog,
                with_confidence: true,
            } => res.extend_scored(hog.detect_multiscale_with_confidence(&gpu)?),
            Engine::Hog { hog, .. } => res.extend_rects(hog.detect_multiscale(&gpu)?),
            Engine::Cascade(cascade) => res.extend_rects(cascade.detect_multiscale(&gpu)?),
        }
        debug!(self.logger, "image processed";
            "width" => img_size.width,
            "height" => img_size.height,
            "detections" => res.detections.len());
        Ok(res)
    }
}

/// Both CUDA detectors take single-channel 8-bit input here.
fn preprocess_img(img: &Mat) -> Result<Mat, opencv::Error> {
    let mut eight_bit = Mat::default()?;
    let src = if img.depth()? == core::CV_8U {
        img
    } else {
        img.convert_to(&mut eight_bit, core::CV_8U, 1.0, 0.0)?;
        &eight_bit
    };

    let code = match src.channels()? {
        1 => return Ok(src.clone()),
        4 => imgproc::COLOR_BGRA2GRAY,
        _ => imgproc::COLOR_BGR2GRAY,
    };
    let mut gray = Mat::default()?;
    imgproc::cvt_color(src, &mut gray, code, 0)?;
    Ok(gray)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(typ: i32, value: f64) -> Mat {
        Mat::new_rows_cols_with_default(4, 6, typ, core::Scalar::all(value)).unwrap()
    }

    #[test]
    fn gray_input_passes_through() {
        let out = preprocess_img(&filled(core::CV_8UC1, 7.0)).unwrap();
        assert_eq!(out.channels().unwrap(), 1);
        assert_eq!(*out.at_2d::<u8>(0, 0).unwrap(), 7);
    }

    #[test]
    fn color_input_becomes_gray() {
        for typ in &[core::CV_8UC3, core::CV_8UC4] {
            let out = preprocess_img(&filled(*typ, 100.0)).unwrap();
            assert_eq!(out.channels().unwrap(), 1);
            assert_eq!(out.typ().unwrap(), core::CV_8UC1);
            assert_eq!(out.rows(), 4);
            assert_eq!(out.cols(), 6);
            assert_eq!(*out.at_2d::<u8>(3, 5).unwrap(), 100);
        }
    }

    #[test]
    fn float_input_is_narrowed() {
        let out = preprocess_img(&filled(core::CV_32FC1, 42.0)).unwrap();
        assert_eq!(out.typ().unwrap(), core::CV_8UC1);
        assert_eq!(*out.at_2d::<u8>(1, 1).unwrap(), 42);
    }
}
