//! Brightness table — maps the 1-based brightness setting to a driver level.

use crate::error::{GlyphError, Result};

/// Non-empty table of driver brightness levels, indexed by setting `1..=len`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrightnessLevels(Vec<u32>);

impl BrightnessLevels {
    pub fn new(levels: Vec<u32>) -> Result<Self> {
        if levels.is_empty() {
            return Err(GlyphError::Brightness(
                "brightness table must have at least one level".into(),
            ));
        }
        Ok(BrightnessLevels(levels))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Never true for a table built by [`BrightnessLevels::new`].
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Clamp a stored setting into `1..=len`.
    ///
    /// Stored values outside the table are logged and pulled to the nearest end.
    pub fn clamp_setting(&self, setting: i32) -> i32 {
        let max = i32::try_from(self.0.len()).unwrap_or(i32::MAX);
        let clamped = setting.clamp(1, max);
        if clamped != setting {
            log::warn!("brightness setting {setting} outside 1..={max}, using {clamped}");
        }
        clamped
    }

    /// Driver level for a 1-based `setting` (clamped into range).
    pub fn level(&self, setting: i32) -> u32 {
        let idx = (self.clamp_setting(setting) - 1) as usize;
        self.0[idx]
    }

    /// Check that `setting` is a valid 1-based index without clamping.
    pub fn check_setting(&self, setting: i32) -> Result<()> {
        if setting >= 1 && (setting as usize) <= self.0.len() {
            Ok(())
        } else {
            Err(GlyphError::Brightness(format!(
                "setting {setting} is out of range (table has {} level{})",
                self.0.len(),
                if self.0.len() == 1 { "" } else { "s" }
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> BrightnessLevels {
        BrightnessLevels::new(vec![10, 20, 40, 80]).unwrap()
    }

    #[test]
    fn empty_table_rejected() {
        let err = BrightnessLevels::new(vec![]).unwrap_err();
        assert!(matches!(err, GlyphError::Brightness(_)));
    }

    #[test]
    fn level_indexes_one_based() {
        let t = table();
        assert_eq!(t.level(1), 10);
        assert_eq!(t.level(3), 40);
        assert_eq!(t.level(4), 80);
    }

    #[test]
    fn zero_and_negative_clamp_to_first() {
        let t = table();
        assert_eq!(t.level(0), 10);
        assert_eq!(t.level(-5), 10);
    }

    #[test]
    fn too_large_clamps_to_last() {
        let t = table();
        assert_eq!(t.level(5), 80);
        assert_eq!(t.level(i32::MAX), 80);
    }

    #[test]
    fn clamp_setting_in_range_is_identity() {
        let t = table();
        for s in 1..=4 {
            assert_eq!(t.clamp_setting(s), s);
        }
    }

    #[test]
    fn check_setting_bounds() {
        let t = table();
        assert!(t.check_setting(1).is_ok());
        assert!(t.check_setting(4).is_ok());
        assert!(t.check_setting(0).is_err());
        let err = t.check_setting(5).unwrap_err();
        assert!(err.to_string().contains("out of range"), "got: {err}");
    }

    #[test]
    fn single_level_table() {
        let t = BrightnessLevels::new(vec![255]).unwrap();
        assert_eq!(t.level(3), 255);
        assert!(t.check_setting(2).unwrap_err().to_string().contains("1 level)"));
    }
}
