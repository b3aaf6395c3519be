use bytes::Bytes;
use detector::errors::DetectError;
use detector::gpu_detector::GpuDetector;
use detector::options::{self, LogFormat, Mode, Options};
use slog::Drain;
use slog::Logger;
use slog::{error, info, o, warn};
use std::io::{self, Read, Write};

fn main() {
    let matches = options::app().get_matches();
    let opts = match Options::from_matches(&matches) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    env_logger::init();
    let root_logger = build_logger(opts.log_level, opts.log_format);

    if let Err(e) = run(&opts, &root_logger) {
        error!(root_logger, "objdetect failed"; "error" => %e);
        drop(root_logger);
        std::process::exit(1);
    }
}

fn run(opts: &Options, logger: &Logger) -> Result<(), DetectError> {
    let devices = cudaobjdetect::cuda_device_count();
    if devices == 0 {
        warn!(logger, "no CUDA device reported by OpenCV");
    }

    let detector = match opts.mode {
        Mode::Hog => GpuDetector::hog(&opts.hog, logger.new(o!("detector" => "hog")))?,
        Mode::Cascade => {
            let model = opts
                .cascade_model
                .as_ref()
                .ok_or(DetectError::InvalidArgument {
                    name: "cascade",
                    value: String::new(),
                })?;
            GpuDetector::cascade(model, &opts.cascade, logger.new(o!("detector" => "cascade")))?
        }
    };
    info!(logger, "objdetect is starting"; "images" => opts.images.len(), "devices" => devices);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for img_path in &opts.images {
        let report = if img_path == "-" {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            detector.process_image_blob(Bytes::from(buf))?
        } else {
            detector.process_image_file(img_path)?
        };
        info!(logger, "detected"; "image" => img_path.as_str(), "count" => report.detections.len());
        write!(out, "{}\t{}", img_path, report)?;
    }
    info!(logger, "objdetect has finished");
    Ok(())
}

fn build_logger(log_level: slog::Level, format: LogFormat) -> Logger {
    // config logger
    let common_o = o!(
        "version" => env!("CARGO_PKG_VERSION"),
        "service" => "objdetect",
    );

    let base_drain: Box<dyn Drain<Ok = (), Err = slog::Never> + Send> = match format {
        LogFormat::Term => {
            let decorator = slog_term::TermDecorator::new().stderr().build();
            Box::new(slog_term::CompactFormat::new(decorator).build().fuse())
        }
        LogFormat::Json => Box::new(
            slog_json::Json::new(io::stderr())
                .add_default_keys()
                .build()
                .fuse(),
        ),
    };
    let drain = slog_async::Async::new(base_drain)
        .build()
        .filter_level(log_level)
        .fuse();
    slog::Logger::root(drain, common_o)
}
