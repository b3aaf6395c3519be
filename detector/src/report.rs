use cudaobjdetect::{Detections, Rect};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Detection {
    pub rect: Rect,
    /// Only set for HOG runs with confidence reporting.
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetectionReport {
    pub image_width: i32,
    pub image_height: i32,
    pub detections: Vec<Detection>,
}

impl DetectionReport {
    pub fn new(image_width: i32, image_height: i32) -> DetectionReport {
        DetectionReport {
            image_width,
            image_height,
            detections: vec![],
        }
    }

    pub fn extend_rects(&mut self, rects: Vec<Rect>) {
        self.detections.extend(rects.into_iter().map(|rect| Detection {
            rect,
            confidence: None,
        }));
    }

    pub fn extend_scored(&mut self, detections: Detections) {
        self.detections.extend(
            detections
                .rects
                .into_iter()
                .zip(detections.confidences)
                .map(|(rect, c)| Detection {
                    rect,
                    confidence: Some(c),
                }),
        );
    }
}

impl fmt::Display for Detection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.rect;
        write!(f, "{} {} {} {}", r.x, r.y, r.width, r.height)?;
        if let Some(c) = self.confidence {
            write!(f, " {:.4}", c)?;
        }
        Ok(())
    }
}

/// One header line `WxH N`, then one `x y w h [confidence]` line per box.
impl fmt::Display for DetectionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}x{} {}",
            self.image_width,
            self.image_height,
            self.detections.len()
        )?;
        for d in &self.detections {
            writeln!(f, "{}", d)?;
        }
        Ok(())
    }
}
