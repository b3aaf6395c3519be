use crate::bindings;
use crate::error::Result;
use crate::gpu_mat::GpuMat;
use crate::marshal;
use crate::types::{Detections, Rect, Size};
use log::{debug, trace};
use opencv::{core::Mat, prelude::*};

/// Window, block and cell layout of a HOG descriptor. Fixed once the
/// detector is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HogGeometry {
    pub win_size: Size,
    pub block_size: Size,
    pub block_stride: Size,
    pub cell_size: Size,
    pub nbins: i32,
}

impl Default for HogGeometry {
    fn default() -> Self {
        HogGeometry {
            win_size: Size::new(64, 128),
            block_size: Size::new(16, 16),
            block_stride: Size::new(8, 8),
            cell_size: Size::new(8, 8),
            nbins: 9,
        }
    }
}

/// Snapshot of every runtime-adjustable HOG setting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HogConfig {
    pub gamma_correction: bool,
    pub group_threshold: i32,
    pub hit_threshold: f64,
    pub l2hys_threshold: f64,
    pub num_levels: i32,
    pub scale_factor: f64,
    pub win_sigma: f64,
    pub win_stride: Size,
}

/// GPU histogram-of-oriented-gradients detector (`cv::cuda::HOG`).
#[derive(Debug)]
pub struct Hog {
    inner: *mut bindings::Hog,
    geometry: HogGeometry,
}

unsafe impl Send for Hog {}

impl Drop for Hog {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe { bindings::Hog_Close(self.inner) };
            self.inner = std::ptr::null_mut();
            debug!("hog detector released");
        }
    }
}

impl Hog {
    /// Creates a detector with the library default geometry.
    pub fn new() -> Result<Hog> {
        let inner = marshal::call_handle(|status| unsafe { bindings::Hog_Create(status) })?;
        debug!("hog detector created with default geometry");
        Ok(Hog {
            inner,
            geometry: HogGeometry::default(),
        })
    }

    /// Creates a detector with explicit geometry. OpenCV rejects layouts where
    /// blocks do not tile the window; that surfaces as `Error::Native`.
    pub fn with_params(geometry: HogGeometry) -> Result<Hog> {
        let inner = marshal::call_handle(|status| unsafe {
            bindings::Hog_CreateWithParams(
                geometry.win_size,
                geometry.block_size,
                geometry.block_stride,
                geometry.cell_size,
                geometry.nbins,
                status,
            )
        })?;
        debug!("hog detector created with {:?}", geometry);
        Ok(Hog { inner, geometry })
    }

    pub fn close(self) {}

    pub fn geometry(&self) -> HogGeometry {
        self.geometry
    }

    pub fn win_size(&self) -> Size {
        self.geometry.win_size
    }

    pub fn block_size(&self) -> Size {
        self.geometry.block_size
    }

    pub fn block_stride(&self) -> Size {
        self.geometry.block_stride
    }

    pub fn cell_size(&self) -> Size {
        self.geometry.cell_size
    }

    pub fn nbins(&self) -> i32 {
        self.geometry.nbins
    }

    /// Installs linear SVM coefficients, one row of `f32`.
    pub fn set_svm_detector(&mut self, detector: &Mat) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::Hog_SetSvmDetector(self.inner, detector.as_raw_Mat(), status)
        })
    }

    /// Coefficients of OpenCV's pre-trained people detector for this geometry.
    pub fn default_people_detector(&self) -> Result<Mat> {
        let mut coefficients = Mat::default()?;
        marshal::call(|status| unsafe {
            bindings::Hog_DefaultPeopleDetector(self.inner, coefficients.as_raw_mut_Mat(), status)
        })?;
        Ok(coefficients)
    }

    pub fn descriptor_size(&self) -> usize {
        unsafe { bindings::Hog_DescriptorSize(self.inner) }
    }

    pub fn block_histogram_size(&self) -> usize {
        unsafe { bindings::Hog_BlockHistogramSize(self.inner) }
    }

    /// Multi-scale sliding-window detection, grouped with the current
    /// group threshold.
    pub fn detect_multiscale(&mut self, image: &GpuMat) -> Result<Vec<Rect>> {
        let raw = marshal::call(|status| unsafe {
            bindings::Hog_DetectMultiScale(self.inner, image.inner, status)
        })?;
        let rects = marshal::take_rects(raw);
        trace!("hog detect_multiscale found {} objects", rects.len());
        Ok(rects)
    }

    /// Multi-scale detection returning a score per window.
    ///
    /// This sets the group threshold to 0 first, so the windows are the raw
    /// ungrouped hits. The threshold stays at 0 afterwards; callers that mix
    /// both entry points should restore it with `set_group_threshold`.
    pub fn detect_multiscale_with_confidence(&mut self, image: &GpuMat) -> Result<Detections> {
        let mut confidences = bindings::Doubles {
            values: std::ptr::null_mut(),
            length: 0,
        };
        let raw = marshal::call(|status| unsafe {
            bindings::Hog_DetectMultiScaleWithConfidence(
                self.inner,
                image.inner,
                &mut confidences,
                status,
            )
        })?;
        let rects = marshal::take_rects(raw);
        let confidences = marshal::take_doubles(confidences);
        trace!(
            "hog detect_multiscale_with_confidence found {} windows",
            rects.len()
        );
        marshal::pair_detections(rects, confidences)
    }

    pub fn set_gamma_correction(&mut self, gamma: bool) -> Result<()> {
        marshal::call(|status| unsafe { bindings::Hog_SetGammaCorrection(self.inner, gamma, status) })
    }

    pub fn set_group_threshold(&mut self, group_threshold: i32) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::Hog_SetGroupThreshold(self.inner, group_threshold, status)
        })
    }

    pub fn set_hit_threshold(&mut self, hit_threshold: f64) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::Hog_SetHitThreshold(self.inner, hit_threshold, status)
        })
    }

    pub fn set_l2hys_threshold(&mut self, l2hys_threshold: f64) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::Hog_SetL2HysThreshold(self.inner, l2hys_threshold, status)
        })
    }

    pub fn set_num_levels(&mut self, num_levels: i32) -> Result<()> {
        marshal::call(|status| unsafe { bindings::Hog_SetNumLevels(self.inner, num_levels, status) })
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::Hog_SetScaleFactor(self.inner, scale_factor, status)
        })
    }

    pub fn set_win_sigma(&mut self, win_sigma: f64) -> Result<()> {
        marshal::call(|status| unsafe { bindings::Hog_SetWinSigma(self.inner, win_sigma, status) })
    }

    pub fn set_win_stride(&mut self, win_stride: Size) -> Result<()> {
        marshal::call(|status| unsafe { bindings::Hog_SetWinStride(self.inner, win_stride, status) })
    }

    pub fn gamma_correction(&self) -> bool {
        unsafe { bindings::Hog_GetGammaCorrection(self.inner) }
    }

    pub fn group_threshold(&self) -> i32 {
        unsafe { bindings::Hog_GetGroupThreshold(self.inner) }
    }

    pub fn hit_threshold(&self) -> f64 {
        unsafe { bindings::Hog_GetHitThreshold(self.inner) }
    }

    pub fn l2hys_threshold(&self) -> f64 {
        unsafe { bindings::Hog_GetL2HysThreshold(self.inner) }
    }

    pub fn num_levels(&self) -> i32 {
        unsafe { bindings::Hog_GetNumLevels(self.inner) }
    }

    pub fn scale_factor(&self) -> f64 {
        unsafe { bindings::Hog_GetScaleFactor(self.inner) }
    }

    pub fn win_sigma(&self) -> f64 {
        unsafe { bindings::Hog_GetWinSigma(self.inner) }
    }

    pub fn win_stride(&self) -> Size {
        unsafe { bindings::Hog_GetWinStride(self.inner) }
    }

    pub fn config(&self) -> HogConfig {
        HogConfig {
            gamma_correction: self.gamma_correction(),
            group_threshold: self.group_threshold(),
            hit_threshold: self.hit_threshold(),
            l2hys_threshold: self.l2hys_threshold(),
            num_levels: self.num_levels(),
            scale_factor: self.scale_factor(),
            win_sigma: self.win_sigma(),
            win_stride: self.win_stride(),
        }
    }

    pub fn apply_config(&mut self, config: &HogConfig) -> Result<()> {
        self.set_gamma_correction(config.gamma_correction)?;
        self.set_group_threshold(config.group_threshold)?;
        self.set_hit_threshold(config.hit_threshold)?;
        self.set_l2hys_threshold(config.l2hys_threshold)?;
        self.set_num_levels(config.num_levels)?;
        self.set_scale_factor(config.scale_factor)?;
        self.set_win_sigma(config.win_sigma)?;
        self.set_win_stride(config.win_stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_geometry_matches_people_detector() {
        let g = HogGeometry::default();
        assert_eq!(g.win_size, Size::new(64, 128));
        assert_eq!(g.block_size, Size::new(16, 16));
        assert_eq!(g.block_stride, Size::new(8, 8));
        assert_eq!(g.cell_size, Size::new(8, 8));
        assert_eq!(g.nbins, 9);
    }
}
