extern crate cmake;

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=libcudaobjdetect/src/cudaobjdetect.cpp");
    println!("cargo:rerun-if-changed=libcudaobjdetect/include/cudaobjdetect.h");
    println!("cargo:rerun-if-changed=libcudaobjdetect/CMakeLists.txt");
    println!("cargo:rerun-if-env-changed=OPENCV_LIB_DIR");
    println!("cargo:rerun-if-env-changed=CUDA_HOME");

    let opencv_lib_dir = match env::var("OPENCV_LIB_DIR") {
        Ok(v) => v,
        Err(_) => String::from("/usr/local/lib"),
    };
    let cuda_root = match env::var("CUDA_HOME") {
        Ok(v) => v,
        Err(_) => String::from("/usr/local/cuda"),
    };

    const CURRENT_DIR: &str = "libcudaobjdetect";

    let cpp_libs = cmake::Config::new(CURRENT_DIR)
        .always_configure(true)
        .build();

    println!("cargo:rustc-link-search=native={}/lib", cpp_libs.display());
    println!("cargo:rustc-link-search=native={}", &opencv_lib_dir);
    println!("cargo:rustc-link-search=native={}/lib64", &cuda_root);
    println!("cargo:rustc-link-lib=static=cudaobjdetect");
    println!("cargo:rustc-link-lib=opencv_core");
    println!("cargo:rustc-link-lib=opencv_cudaobjdetect");
    println!("cargo:rustc-link-lib=cudart");
    println!("cargo:rustc-link-lib=dylib=stdc++");
}
