use crate::errors::{DetectError, Result};
use clap::{App, Arg, ArgMatches};
use cudaobjdetect::Size;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hog,
    Cascade,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Term,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HogOptions {
    pub hit_threshold: f64,
    pub scale_factor: f64,
    pub group_threshold: i32,
    pub win_stride: Option<Size>,
    pub with_confidence: bool,
}

impl Default for HogOptions {
    fn default() -> Self {
        HogOptions {
            hit_threshold: 0.0,
            scale_factor: 1.05,
            group_threshold: 2,
            win_stride: None,
            with_confidence: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CascadeOptions {
    pub scale_factor: f64,
    pub min_neighbors: i32,
    pub find_largest_object: bool,
    pub min_object_size: Option<Size>,
}

impl Default for CascadeOptions {
    fn default() -> Self {
        CascadeOptions {
            scale_factor: 1.2,
            min_neighbors: 4,
            find_largest_object: false,
            min_object_size: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    pub mode: Mode,
    pub cascade_model: Option<PathBuf>,
    pub hog: HogOptions,
    pub cascade: CascadeOptions,
    pub log_level: slog::Level,
    pub log_format: LogFormat,
    /// `-` reads one encoded image from stdin.
    pub images: Vec<String>,
}

pub fn app<'a, 'b>() -> App<'a, 'b> {
    App::new("objdetect")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Runs OpenCV CUDA HOG or cascade detection over images")
        .arg(
            Arg::with_name("mode")
                .long("mode")
                .takes_value(true)
                .possible_values(&["hog", "cascade"])
                .default_value("hog"),
        )
        .arg(
            Arg::with_name("cascade")
                .long("cascade")
                .takes_value(true)
                .value_name("FILE")
                .required_if("mode", "cascade")
                .help("cascade model file"),
        )
        .arg(
            Arg::with_name("confidence")
                .long("confidence")
                .help("report raw HOG windows with their scores"),
        )
        .arg(
            Arg::with_name("hit-threshold")
                .long("hit-threshold")
                .takes_value(true),
        )
        .arg(Arg::with_name("scale").long("scale").takes_value(true))
        .arg(
            Arg::with_name("group-threshold")
                .long("group-threshold")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("win-stride")
                .long("win-stride")
                .takes_value(true)
                .value_name("WxH"),
        )
        .arg(
            Arg::with_name("min-neighbors")
                .long("min-neighbors")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("min-size")
                .long("min-size")
                .takes_value(true)
                .value_name("WxH"),
        )
        .arg(Arg::with_name("largest").long("largest"))
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .takes_value(true)
                .default_value("info"),
        )
        .arg(
            Arg::with_name("log-format")
                .long("log-format")
                .takes_value(true)
                .possible_values(&["term", "json"])
                .default_value("term"),
        )
        .arg(
            Arg::with_name("IMAGE")
                .multiple(true)
                .required(true)
                .help("image files, or - for stdin"),
        )
}

impl Options {
    pub fn from_matches(m: &ArgMatches) -> Result<Options> {
        let mode = match m.value_of("mode") {
            Some("cascade") => Mode::Cascade,
            _ => Mode::Hog,
        };

        let mut hog = HogOptions::default();
        let mut cascade = CascadeOptions::default();
        hog.with_confidence = m.is_present("confidence");
        cascade.find_largest_object = m.is_present("largest");
        if let Some(v) = parse_opt(m, "hit-threshold")? {
            hog.hit_threshold = v;
        }
        if let Some(v) = parse_opt(m, "group-threshold")? {
            hog.group_threshold = v;
        }
        if let Some(v) = parse_opt(m, "min-neighbors")? {
            cascade.min_neighbors = v;
        }
        if let Some(v) = parse_opt(m, "scale")? {
            hog.scale_factor = v;
            cascade.scale_factor = v;
        }
        hog.win_stride = parse_size_opt(m, "win-stride")?;
        cascade.min_object_size = parse_size_opt(m, "min-size")?;

        let level = m.value_of("log-level").unwrap_or("info");
        let log_level = slog::Level::from_str(level).map_err(|_| DetectError::InvalidArgument {
            name: "log-level",
            value: level.to_string(),
        })?;
        let log_format = match m.value_of("log-format") {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Term,
        };

        Ok(Options {
            mode,
            cascade_model: m.value_of("cascade").map(PathBuf::from),
            hog,
            cascade,
            log_level,
            log_format,
            images: m
                .values_of("IMAGE")
                .map(|v| v.map(String::from).collect())
                .unwrap_or_default(),
        })
    }
}

fn parse_opt<T: FromStr>(m: &ArgMatches, name: &'static str) -> Result<Option<T>> {
    match m.value_of(name) {
        None => Ok(None),
        Some(v) => v
            .parse()
            .map(Some)
            .map_err(|_| DetectError::InvalidArgument {
                name,
                value: v.to_string(),
            }),
    }
}

fn parse_size_opt(m: &ArgMatches, name: &'static str) -> Result<Option<Size>> {
    match m.value_of(name) {
        None => Ok(None),
        Some(v) => parse_size(v).map(Some).ok_or(DetectError::InvalidArgument {
            name,
            value: v.to_string(),
        }),
    }
}

/// Parses `WxH`, e.g. `8x8`.
pub fn parse_size(s: &str) -> Option<Size> {
    let mut parts = s.splitn(2, |c: char| c == 'x' || c == 'X');
    let width = parts.next()?.trim().parse().ok()?;
    let height = parts.next()?.trim().parse().ok()?;
    if width <= 0 || height <= 0 {
        return None;
    }
    Some(Size::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Options> {
        let mut argv = vec!["objdetect"];
        argv.extend_from_slice(args);
        let m = app().get_matches_from_safe(argv).expect("clap rejected args");
        Options::from_matches(&m)
    }

    #[test]
    fn defaults_to_hog() {
        let opts = parse(&["street.png"]).unwrap();
        assert_eq!(opts.mode, Mode::Hog);
        assert_eq!(opts.hog, HogOptions::default());
        assert_eq!(opts.log_level, slog::Level::Info);
        assert_eq!(opts.log_format, LogFormat::Term);
        assert_eq!(opts.images, vec!["street.png".to_string()]);
    }

    #[test]
    fn hog_flags() {
        let opts = parse(&[
            "--confidence",
            "--hit-threshold",
            "0.3",
            "--scale",
            "1.1",
            "--win-stride",
            "16x16",
            "a.png",
            "b.png",
        ])
        .unwrap();
        assert!(opts.hog.with_confidence);
        assert_eq!(opts.hog.hit_threshold, 0.3);
        assert_eq!(opts.hog.scale_factor, 1.1);
        assert_eq!(opts.hog.win_stride, Some(Size::new(16, 16)));
        assert_eq!(opts.images.len(), 2);
    }

    #[test]
    fn cascade_mode_needs_model() {
        let mut argv = vec!["objdetect", "--mode", "cascade", "face.png"];
        assert!(app().get_matches_from_safe(argv.clone()).is_err());

        argv.insert(3, "--cascade");
        argv.insert(4, "haarcascade_frontalface_default.xml");
        let m = app().get_matches_from_safe(argv).unwrap();
        let opts = Options::from_matches(&m).unwrap();
        assert_eq!(opts.mode, Mode::Cascade);
        assert_eq!(
            opts.cascade_model,
            Some(PathBuf::from("haarcascade_frontalface_default.xml"))
        );
        assert_eq!(opts.cascade, CascadeOptions::default());
    }

    #[test]
    fn bad_number_is_reported() {
        match parse(&["--hit-threshold", "high", "a.png"]) {
            Err(DetectError::InvalidArgument { name, value }) => {
                assert_eq!(name, "hit-threshold");
                assert_eq!(value, "high");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn log_level_and_format() {
        let opts = parse(&["--log-level", "debug", "--log-format", "json", "-"]).unwrap();
        assert_eq!(opts.log_level, slog::Level::Debug);
        assert_eq!(opts.log_format, LogFormat::Json);
        assert_eq!(opts.images, vec!["-".to_string()]);
        assert!(parse(&["--log-level", "loud", "a.png"]).is_err());
    }

    #[test]
    fn sizes() {
        assert_eq!(parse_size("8x8"), Some(Size::new(8, 8)));
        assert_eq!(parse_size("64X128"), Some(Size::new(64, 128)));
        assert_eq!(parse_size("8"), None);
        assert_eq!(parse_size("0x8"), None);
        assert_eq!(parse_size("ax8"), None);
    }
}
