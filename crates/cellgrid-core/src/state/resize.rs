use crate::tracks::MIN_COLUMN_WIDTH;

/// Column resize captured at pointer-down on a resize handle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDrag {
    /// Track being resized; track 0 is the row-number column
    pub track: usize,
    pub start_x: f64,
    pub start_width: f64,
}

impl ResizeDrag {
    pub fn new(track: usize, start_x: f64, start_width: f64) -> Self {
        Self {
            track,
            start_x,
            start_width,
        }
    }

    /// Width for the pointer at `x`, never below [`MIN_COLUMN_WIDTH`]
    pub fn width_at(&self, x: f64) -> f64 {
        (self.start_width + (x - self.start_x)).max(MIN_COLUMN_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_follows_pointer() {
        let drag = ResizeDrag::new(1, 200.0, 100.0);
        assert_eq!(drag.width_at(260.0), 160.0);
        assert_eq!(drag.width_at(170.0), 70.0);
        assert_eq!(drag.width_at(200.0), 100.0);
    }

    #[test]
    fn test_width_floor() {
        let drag = ResizeDrag::new(2, 500.0, 100.0);
        assert_eq!(drag.width_at(-500.0), MIN_COLUMN_WIDTH);
        assert_eq!(drag.width_at(449.0), MIN_COLUMN_WIDTH);
        assert_eq!(drag.width_at(451.0), 51.0);
    }

    #[test]
    fn test_narrow_start_width_is_lifted() {
        let drag = ResizeDrag::new(0, 0.0, 20.0);
        assert_eq!(drag.width_at(0.0), MIN_COLUMN_WIDTH);
    }
}
