use std::os::raw::{c_char, c_double, c_int, c_void};

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Rects {
    pub rects: *mut Rect,
    pub length: c_int,
}

#[repr(C)]
#[derive(Debug, Copy, Clone)]
pub struct Doubles {
    pub values: *mut c_double,
    pub length: c_int,
}

#[repr(C)]
#[derive(Debug)]
pub struct CvStatus {
    pub code: c_int,
    pub message: *mut c_char,
}

#[repr(C)]
#[derive(Debug)]
pub struct GpuMat {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug)]
pub struct Hog {
    _unused: [u8; 0],
}

#[repr(C)]
#[derive(Debug)]
pub struct GpuCascade {
    _unused: [u8; 0],
}

/// `cv::Mat*`, as held inside `opencv::core::Mat`.
pub type HostMat = *mut c_void;
pub type ConstHostMat = *const c_void;

extern "C" {
    pub fn CvStatus_FreeMessage(message: *mut c_char);
    pub fn Rects_Free(rects: Rects);
    pub fn Doubles_Free(values: Doubles);

    pub fn Cuda_DeviceCount() -> c_int;
}

extern "C" {
    pub fn GpuMat_New(status: *mut CvStatus) -> *mut GpuMat;
    pub fn GpuMat_Close(m: *mut GpuMat);
    pub fn GpuMat_Rows(m: *mut GpuMat) -> c_int;
    pub fn GpuMat_Cols(m: *mut GpuMat) -> c_int;
    pub fn GpuMat_Empty(m: *mut GpuMat) -> bool;
    pub fn GpuMat_Type(m: *mut GpuMat) -> c_int;
    pub fn GpuMat_Channels(m: *mut GpuMat) -> c_int;
    pub fn GpuMat_Upload(m: *mut GpuMat, host: ConstHostMat, status: *mut CvStatus);
    pub fn GpuMat_Download(m: *mut GpuMat, dst: HostMat, status: *mut CvStatus);
}

extern "C" {
    pub fn Hog_Create(status: *mut CvStatus) -> *mut Hog;
    pub fn Hog_CreateWithParams(
        win_size: Size,
        block_size: Size,
        block_stride: Size,
        cell_size: Size,
        nbins: c_int,
        status: *mut CvStatus,
    ) -> *mut Hog;
    pub fn Hog_Close(h: *mut Hog);
    pub fn Hog_SetSvmDetector(h: *mut Hog, detector: ConstHostMat, status: *mut CvStatus);
    pub fn Hog_DefaultPeopleDetector(h: *mut Hog, dst: HostMat, status: *mut CvStatus);
    pub fn Hog_DescriptorSize(h: *mut Hog) -> usize;
    pub fn Hog_BlockHistogramSize(h: *mut Hog) -> usize;
    pub fn Hog_DetectMultiScale(h: *mut Hog, image: *mut GpuMat, status: *mut CvStatus) -> Rects;
    pub fn Hog_DetectMultiScaleWithConfidence(
        h: *mut Hog,
        image: *mut GpuMat,
        confidences: *mut Doubles,
        status: *mut CvStatus,
    ) -> Rects;

    pub fn Hog_SetGammaCorrection(h: *mut Hog, gamma: bool, status: *mut CvStatus);
    pub fn Hog_SetGroupThreshold(h: *mut Hog, group_threshold: c_int, status: *mut CvStatus);
    pub fn Hog_SetHitThreshold(h: *mut Hog, hit_threshold: c_double, status: *mut CvStatus);
    pub fn Hog_SetL2HysThreshold(h: *mut Hog, l2hys_threshold: c_double, status: *mut CvStatus);
    pub fn Hog_SetNumLevels(h: *mut Hog, num_levels: c_int, status: *mut CvStatus);
    pub fn Hog_SetScaleFactor(h: *mut Hog, scale_factor: c_double, status: *mut CvStatus);
    pub fn Hog_SetWinSigma(h: *mut Hog, win_sigma: c_double, status: *mut CvStatus);
    pub fn Hog_SetWinStride(h: *mut Hog, win_stride: Size, status: *mut CvStatus);

    pub fn Hog_GetGammaCorrection(h: *mut Hog) -> bool;
    pub fn Hog_GetGroupThreshold(h: *mut Hog) -> c_int;
    pub fn Hog_GetHitThreshold(h: *mut Hog) -> c_double;
    pub fn Hog_GetL2HysThreshold(h: *mut Hog) -> c_double;
    pub fn Hog_GetNumLevels(h: *mut Hog) -> c_int;
    pub fn Hog_GetScaleFactor(h: *mut Hog) -> c_double;
    pub fn Hog_GetWinSigma(h: *mut Hog) -> c_double;
    pub fn Hog_GetWinStride(h: *mut Hog) -> Size;
}

extern "C" {
    pub fn GpuCascade_Create(filename: *const c_char, status: *mut CvStatus) -> *mut GpuCascade;
    pub fn GpuCascade_Close(c: *mut GpuCascade);
    pub fn GpuCascade_DetectMultiScale(
        c: *mut GpuCascade,
        image: *mut GpuMat,
        status: *mut CvStatus,
    ) -> Rects;

    pub fn GpuCascade_SetFindLargestObject(c: *mut GpuCascade, largest: bool, status: *mut CvStatus);
    pub fn GpuCascade_SetMaxNumObjects(c: *mut GpuCascade, max: c_int, status: *mut CvStatus);
    pub fn GpuCascade_SetMinNeighbors(c: *mut GpuCascade, min_neighbors: c_int, status: *mut CvStatus);
    pub fn GpuCascade_SetMaxObjectSize(c: *mut GpuCascade, max_size: Size, status: *mut CvStatus);
    pub fn GpuCascade_SetMinObjectSize(c: *mut GpuCascade, min_size: Size, status: *mut CvStatus);
    pub fn GpuCascade_SetScaleFactor(c: *mut GpuCascade, scale: c_double, status: *mut CvStatus);

    pub fn GpuCascade_GetClassifierSize(c: *mut GpuCascade) -> Size;
    pub fn GpuCascade_GetFindLargestObject(c: *mut GpuCascade) -> bool;
    pub fn GpuCascade_GetMaxNumObjects(c: *mut GpuCascade) -> c_int;
    pub fn GpuCascade_GetMinNeighbors(c: *mut GpuCascade) -> c_int;
    pub fn GpuCascade_GetMaxObjectSize(c: *mut GpuCascade) -> Size;
    pub fn GpuCascade_GetMinObjectSize(c: *mut GpuCascade) -> Size;
    pub fn GpuCascade_GetScaleFactor(c: *mut GpuCascade) -> c_double;
}
