use crate::bindings;
use crate::error::{Error, Result};
use crate::gpu_mat::GpuMat;
use crate::marshal;
use crate::types::{Rect, Size};
use log::{debug, trace};
use std::ffi::CString;
use std::path::Path;

/// Snapshot of the adjustable cascade settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeConfig {
    pub find_largest_object: bool,
    pub max_num_objects: i32,
    pub min_neighbors: i32,
    pub max_object_size: Size,
    pub min_object_size: Size,
    pub scale_factor: f64,
}

/// Haar or LBP cascade classifier running on the GPU
/// (`cv::cuda::CascadeClassifier`).
#[derive(Debug)]
pub struct GpuCascade {
    inner: *mut bindings::GpuCascade,
}

unsafe impl Send for GpuCascade {}

impl Drop for GpuCascade {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe { bindings::GpuCascade_Close(self.inner) };
            self.inner = std::ptr::null_mut();
            debug!("cascade classifier released");
        }
    }
}

impl GpuCascade {
    /// Loads a classifier from a file.
    ///
    /// Haar models must be in the old haartraining format or NVIDIA's nvbin;
    /// LBP models must use the new OpenCV XML format. The CUDA variants of the
    /// stock models live under `data/haarcascades_cuda/` in OpenCV.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<GpuCascade> {
        let path = path.as_ref();
        let p = path
            .to_str()
            .ok_or_else(|| Error::InvalidPath(path.to_path_buf()))?;
        if !path.is_file() {
            return Err(Error::ModelNotFound(path.to_path_buf()));
        }
        let filename = CString::new(p)?;
        let inner = marshal::call_handle(|status| unsafe {
            bindings::GpuCascade_Create(filename.as_ptr(), status)
        })?;
        debug!("cascade classifier loaded from {}", p);
        Ok(GpuCascade { inner })
    }

    pub fn close(self) {}

    /// Detects objects of different sizes in `image`.
    pub fn detect_multiscale(&mut self, image: &GpuMat) -> Result<Vec<Rect>> {
        let raw = marshal::call(|status| unsafe {
            bindings::GpuCascade_DetectMultiScale(self.inner, image.inner, status)
        })?;
        let rects = marshal::take_rects(raw);
        trace!("cascade detect_multiscale found {} objects", rects.len());
        Ok(rects)
    }

    pub fn set_find_largest_object(&mut self, largest: bool) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::GpuCascade_SetFindLargestObject(self.inner, largest, status)
        })
    }

    pub fn set_max_num_objects(&mut self, max: i32) -> Result<()> {
        marshal::call(|status| unsafe { bindings::GpuCascade_SetMaxNumObjects(self.inner, max, status) })
    }

    pub fn set_min_neighbors(&mut self, min_neighbors: i32) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::GpuCascade_SetMinNeighbors(self.inner, min_neighbors, status)
        })
    }

    pub fn set_max_object_size(&mut self, size: Size) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::GpuCascade_SetMaxObjectSize(self.inner, size, status)
        })
    }

    pub fn set_min_object_size(&mut self, size: Size) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::GpuCascade_SetMinObjectSize(self.inner, size, status)
        })
    }

    pub fn set_scale_factor(&mut self, scale: f64) -> Result<()> {
        marshal::call(|status| unsafe { bindings::GpuCascade_SetScaleFactor(self.inner, scale, status) })
    }

    /// Native detection window of the loaded model.
    pub fn classifier_size(&self) -> Size {
        unsafe { bindings::GpuCascade_GetClassifierSize(self.inner) }
    }

    pub fn find_largest_object(&self) -> bool {
        unsafe { bindings::GpuCascade_GetFindLargestObject(self.inner) }
    }

    pub fn max_num_objects(&self) -> i32 {
        unsafe { bindings::GpuCascade_GetMaxNumObjects(self.inner) }
    }

    pub fn min_neighbors(&self) -> i32 {
        unsafe { bindings::GpuCascade_GetMinNeighbors(self.inner) }
    }

    pub fn max_object_size(&self) -> Size {
        unsafe { bindings::GpuCascade_GetMaxObjectSize(self.inner) }
    }

    pub fn min_object_size(&self) -> Size {
        unsafe { bindings::GpuCascade_GetMinObjectSize(self.inner) }
    }

    pub fn scale_factor(&self) -> f64 {
        unsafe { bindings::GpuCascade_GetScaleFactor(self.inner) }
    }

    pub fn config(&self) -> CascadeConfig {
        CascadeConfig {
            find_largest_object: self.find_largest_object(),
            max_num_objects: self.max_num_objects(),
            min_neighbors: self.min_neighbors(),
            max_object_size: self.max_object_size(),
            min_object_size: self.min_object_size(),
            scale_factor: self.scale_factor(),
        }
    }

    pub fn apply_config(&mut self, config: &CascadeConfig) -> Result<()> {
        self.set_find_largest_object(config.find_largest_object)?;
        self.set_max_num_objects(config.max_num_objects)?;
        self.set_min_neighbors(config.min_neighbors)?;
        self.set_max_object_size(config.max_object_size)?;
        self.set_min_object_size(config.min_object_size)?;
        self.set_scale_factor(config.scale_factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_model_is_rejected() {
        match GpuCascade::new("nonexistent.xml") {
            Err(Error::ModelNotFound(p)) => assert_eq!(p, Path::new("nonexistent.xml")),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn directory_is_not_a_model() {
        let dir = std::env::temp_dir();
        assert!(matches!(
            GpuCascade::new(&dir),
            Err(Error::ModelNotFound(_))
        ));
    }
}
