use crate::bindings;
use crate::error::Result;
use crate::marshal;
use crate::types::Size;
use log::debug;
use opencv::{core::Mat, prelude::*};

/// A single 2D image buffer in device memory.
///
/// Each `GpuMat` owns exactly one `cv::cuda::GpuMat`; it is released when the
/// value is dropped or passed to [`GpuMat::close`].
#[derive(Debug)]
pub struct GpuMat {
    pub(crate) inner: *mut bindings::GpuMat,
}

unsafe impl Send for GpuMat {}

impl Drop for GpuMat {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe { bindings::GpuMat_Close(self.inner) };
            self.inner = std::ptr::null_mut();
        }
    }
}

impl GpuMat {
    /// Creates an empty device buffer.
    pub fn new() -> Result<GpuMat> {
        let inner = marshal::call_handle(|status| unsafe { bindings::GpuMat_New(status) })?;
        debug!("gpu mat created");
        Ok(GpuMat { inner })
    }

    /// Creates a device buffer holding a copy of `host`.
    pub fn from_host(host: &Mat) -> Result<GpuMat> {
        let mut gm = GpuMat::new()?;
        gm.upload(host)?;
        Ok(gm)
    }

    /// Releases the native object. Same as dropping the value.
    pub fn close(self) {}

    pub fn rows(&self) -> i32 {
        unsafe { bindings::GpuMat_Rows(self.inner) }
    }

    pub fn cols(&self) -> i32 {
        unsafe { bindings::GpuMat_Cols(self.inner) }
    }

    pub fn size(&self) -> Size {
        Size::new(self.cols(), self.rows())
    }

    pub fn empty(&self) -> bool {
        unsafe { bindings::GpuMat_Empty(self.inner) }
    }

    /// OpenCV element type, e.g. `CV_8UC1`.
    pub fn typ(&self) -> i32 {
        unsafe { bindings::GpuMat_Type(self.inner) }
    }

    pub fn channels(&self) -> i32 {
        unsafe { bindings::GpuMat_Channels(self.inner) }
    }

    /// Replaces the buffer contents with a copy of `host`.
    pub fn upload(&mut self, host: &Mat) -> Result<()> {
        marshal::call(|status| unsafe {
            bindings::GpuMat_Upload(self.inner, host.as_raw_Mat(), status)
        })?;
        debug!("uploaded {}x{} image to device", self.cols(), self.rows());
        Ok(())
    }

    /// Copies the buffer back into a newly allocated host `Mat`.
    pub fn download(&self) -> Result<Mat> {
        let mut host = Mat::default()?;
        marshal::call(|status| unsafe {
            bindings::GpuMat_Download(self.inner, host.as_raw_mut_Mat(), status)
        })?;
        Ok(host)
    }
}
