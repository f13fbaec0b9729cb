use crate::domain::model::ColorTriple;
use crate::utils::error::Result;
use crate::utils::validation::validate_positive_threshold;

pub const DEFAULT_MAX_THRESHOLD: f64 = 50.0;

/// 空清單的保留顏色（純藍），不屬於紅綠漸層
pub const EMPTY_LIST_COLOR: ColorTriple = ColorTriple::new(0, 0, 255);

/// 將壓力值映射為紅綠漸層：0 為純綠，達到門檻後為純紅
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMapper {
    max_threshold: f64,
}

impl ColorMapper {
    pub fn new(max_threshold: f64) -> Result<Self> {
        validate_positive_threshold("max_threshold", max_threshold)?;
        Ok(Self { max_threshold })
    }

    pub fn ratio(&self, score: i64) -> f64 {
        (score as f64 / self.max_threshold).clamp(0.0, 1.0)
    }

    pub fn map(&self, score: i64, card_count: usize) -> ColorTriple {
        if card_count == 0 {
            return EMPTY_LIST_COLOR;
        }

        let ratio = self.ratio(score);
        ColorTriple {
            red: channel(ratio),
            green: channel(1.0 - ratio),
            blue: 0,
        }
    }
}

impl Default for ColorMapper {
    fn default() -> Self {
        Self {
            max_threshold: DEFAULT_MAX_THRESHOLD,
        }
    }
}

fn channel(intensity: f64) -> u8 {
    (255.0 * intensity).round().clamp(0.0, 255.0) as u8
}

pub fn map_score(score: i64, card_count: usize, max_threshold: f64) -> Result<ColorTriple> {
    Ok(ColorMapper::new(max_threshold)?.map(score, card_count))
}
