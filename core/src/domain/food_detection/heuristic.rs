//! Color-histogram fallback classifier.
//!
//! The rules below are a coarse, approximate signal: they look at which
//! color families dominate an image and map that onto a handful of foods.
//! Thresholds overlap on purpose and are resolved by evaluation order
//! (first matching rule wins).

use crate::domain::{
    capture::entities::Bitmap,
    food_detection::{
        entities::{DetectionError, DetectionSource, FoodDetectionResult},
        ports::Classifier,
        value_objects::{FoodLabel, LabelGuess},
    },
};

pub const MAX_CONFIDENCE: f64 = 0.95;
pub const UNKNOWN_CONFIDENCE: f64 = 0.5;

/// Fractions of pixels per color family plus per-channel averages.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ColorProfile {
    pub yellow: f64,
    pub orange: f64,
    pub green: f64,
    pub red: f64,
    pub brown: f64,
    pub white: f64,
    pub avg_red: f64,
    pub avg_green: f64,
    pub avg_blue: f64,
}

impl ColorProfile {
    pub fn from_bitmap(bitmap: &Bitmap) -> Self {
        let mut sums = [0u64; 3];
        let mut counts = [0u64; 6];

        for pixel in bitmap.pixels().chunks_exact(4) {
            let (r, g, b) = (pixel[0], pixel[1], pixel[2]);
            sums[0] += u64::from(r);
            sums[1] += u64::from(g);
            sums[2] += u64::from(b);

            let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));

            if r > 180 && g > 180 && b < 100 {
                counts[0] += 1;
            }
            if r > 180 && g > 80 && g < 170 && b < 80 {
                counts[1] += 1;
            }
            if g > 130 && gf > rf * 1.2 && gf > bf * 1.2 {
                counts[2] += 1;
            }
            if r > 180 && rf > gf * 1.5 && rf > bf * 1.5 {
                counts[3] += 1;
            }
            if r > 100 && r < 180 && g > 40 && g < 120 && b < 80 {
                counts[4] += 1;
            }
            if r > 200 && g > 200 && b > 200 {
                counts[5] += 1;
            }
        }

        let total = bitmap.pixel_count().max(1) as f64;
        let fraction = |count: u64| count as f64 / total;

        Self {
            yellow: fraction(counts[0]),
            orange: fraction(counts[1]),
            green: fraction(counts[2]),
            red: fraction(counts[3]),
            brown: fraction(counts[4]),
            white: fraction(counts[5]),
            avg_red: sums[0] as f64 / total,
            avg_green: sums[1] as f64 / total,
            avg_blue: sums[2] as f64 / total,
        }
    }

    /// Ordered decision list; confidence is clamped to [`MAX_CONFIDENCE`].
    pub fn guess(&self) -> LabelGuess {
        let (label, confidence) = if self.yellow > 0.15
            && self.avg_red > 150.0
            && self.avg_green > 150.0
            && self.avg_blue < 120.0
        {
            (FoodLabel::Banana, 0.7 + self.yellow)
        } else if self.green > 0.2 {
            if self.avg_green / self.avg_red > 1.3 {
                (FoodLabel::Broccoli, 0.7 + self.green * 0.5)
            } else {
                (FoodLabel::Avocado, 0.7 + self.green * 0.3)
            }
        } else if self.orange > 0.1 {
            (FoodLabel::Carrot, 0.7 + self.orange)
        } else if self.red > 0.15 {
            (FoodLabel::Apple, 0.7 + self.red)
        } else if self.brown > 0.25 {
            (FoodLabel::Chicken, 0.6 + self.brown * 0.5)
        } else if self.white > 0.4 {
            (FoodLabel::Rice, 0.7 + self.white * 0.3)
        } else if self.brown > 0.1 && self.white > 0.1 {
            (FoodLabel::Pasta, 0.65)
        } else if self.avg_red > 160.0 && self.avg_green < 130.0 && self.avg_blue > 110.0 {
            (FoodLabel::Salmon, 0.75)
        } else if self.white > 0.3 && self.yellow > 0.1 {
            (FoodLabel::Eggs, 0.7)
        } else {
            (FoodLabel::Unknown, UNKNOWN_CONFIDENCE)
        };

        LabelGuess::new(label, confidence.min(MAX_CONFIDENCE))
    }
}

/// Never fails: the worst case is `unknown food` at 0.5.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColorHeuristicClassifier;

impl ColorHeuristicClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn guess(&self, bitmap: &Bitmap) -> LabelGuess {
        let profile = ColorProfile::from_bitmap(bitmap);
        let guess = profile.guess();
        tracing::debug!(
            label = %guess.label,
            confidence = guess.confidence,
            "Color heuristic classification"
        );
        guess
    }
}

impl Classifier for ColorHeuristicClassifier {
    async fn classify(&self, bitmap: &Bitmap) -> Result<FoodDetectionResult, DetectionError> {
        let guess = self.guess(bitmap);
        Ok(FoodDetectionResult::from_label(
            guess.label.as_str(),
            guess.confidence,
            DetectionSource::Heuristic,
        ))
    }
}
