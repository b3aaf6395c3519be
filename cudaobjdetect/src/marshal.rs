use crate::bindings;
use crate::error::{Error, Result};
use crate::types::{Detections, Rect};
use std::ffi::CStr;
use std::ptr;

fn empty_status() -> bindings::CvStatus {
    bindings::CvStatus {
        code: 0,
        message: ptr::null_mut(),
    }
}

/// Converts a filled-in status into a `Result`, releasing the native message.
pub(crate) fn check(status: bindings::CvStatus) -> Result<()> {
    if status.code == 0 {
        return Ok(());
    }
    let message = if status.message.is_null() {
        String::new()
    } else {
        let m = unsafe { CStr::from_ptr(status.message) }
            .to_string_lossy()
            .into_owned();
        unsafe { bindings::CvStatus_FreeMessage(status.message) };
        m
    };
    Err(Error::Native {
        code: status.code,
        message,
    })
}

/// Runs a native call that reports failure through a `CvStatus` out-parameter.
pub(crate) fn call<T, F>(f: F) -> Result<T>
where
    F: FnOnce(*mut bindings::CvStatus) -> T,
{
    let mut status = empty_status();
    let out = f(&mut status as *mut bindings::CvStatus);
    check(status).map(|_| out)
}

/// Like `call`, for constructors returning a handle pointer.
pub(crate) fn call_handle<T, F>(f: F) -> Result<*mut T>
where
    F: FnOnce(*mut bindings::CvStatus) -> *mut T,
{
    let handle = call(f)?;
    if handle.is_null() {
        return Err(Error::NullHandle);
    }
    Ok(handle)
}

pub(crate) unsafe fn copy_rects(ptr: *const Rect, length: i32) -> Vec<Rect> {
    if ptr.is_null() || length <= 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(ptr, length as usize).to_vec()
}

pub(crate) unsafe fn copy_doubles(ptr: *const f64, length: i32) -> Vec<f64> {
    if ptr.is_null() || length <= 0 {
        return Vec::new();
    }
    std::slice::from_raw_parts(ptr, length as usize).to_vec()
}

/// Copies a native rectangle array into a `Vec` and frees the native storage.
pub(crate) fn take_rects(raw: bindings::Rects) -> Vec<Rect> {
    let rects = unsafe { copy_rects(raw.rects, raw.length) };
    if !raw.rects.is_null() {
        unsafe { bindings::Rects_Free(raw) };
    }
    rects
}

pub(crate) fn take_doubles(raw: bindings::Doubles) -> Vec<f64> {
    let values = unsafe { copy_doubles(raw.values, raw.length) };
    if !raw.values.is_null() {
        unsafe { bindings::Doubles_Free(raw) };
    }
    values
}

pub(crate) fn pair_detections(rects: Vec<Rect>, confidences: Vec<f64>) -> Result<Detections> {
    if rects.len() != confidences.len() {
        return Err(Error::LengthMismatch {
            rects: rects.len(),
            confidences: confidences.len(),
        });
    }
    Ok(Detections { rects, confidences })
}
