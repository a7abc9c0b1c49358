//! Derived nutrition metrics: grams of each macro to a calorie breakdown.

pub const PROTEIN_KCAL_PER_G: f64 = 4.0;
pub const CARBS_KCAL_PER_G: f64 = 4.0;
pub const FAT_KCAL_PER_G: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroSplit {
    pub protein_kcal: f64,
    pub carbs_kcal: f64,
    pub fat_kcal: f64,
}

impl MacroSplit {
    pub fn total_kcal(&self) -> f64 {
        self.protein_kcal + self.carbs_kcal + self.fat_kcal
    }

    /// Share of summed macro-calories, not of any separately reported
    /// total-calories figure (which may include other contributors).
    pub fn protein_pct(&self) -> f64 {
        self.protein_kcal / self.total_kcal() * 100.0
    }

    pub fn carbs_pct(&self) -> f64 {
        self.carbs_kcal / self.total_kcal() * 100.0
    }

    pub fn fat_pct(&self) -> f64 {
        self.fat_kcal / self.total_kcal() * 100.0
    }
}

/// Converts summed grams into a calorie split. Returns `None` when the summed
/// macro-calories are zero, so callers render "no data" instead of dividing
/// by zero.
pub fn macro_calories(protein_g: f64, carbs_g: f64, fat_g: f64) -> Option<MacroSplit> {
    let split = MacroSplit {
        protein_kcal: protein_g * PROTEIN_KCAL_PER_G,
        carbs_kcal: carbs_g * CARBS_KCAL_PER_G,
        fat_kcal: fat_g * FAT_KCAL_PER_G,
    };
    if split.total_kcal() == 0.0 { None } else { Some(split) }
}
