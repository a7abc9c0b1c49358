use nutridb::nutrition::{CARBS_KCAL_PER_G, FAT_KCAL_PER_G, PROTEIN_KCAL_PER_G, macro_calories};

#[test]
fn test_constants() {
    assert_eq!(PROTEIN_KCAL_PER_G, 4.0);
    assert_eq!(CARBS_KCAL_PER_G, 4.0);
    assert_eq!(FAT_KCAL_PER_G, 9.0);
}

#[test]
fn test_macro_calories_typical_day() {
    let split = macro_calories(50.0, 200.0, 70.0).unwrap();
    assert_eq!(split.protein_kcal, 200.0);
    assert_eq!(split.carbs_kcal, 800.0);
    assert_eq!(split.fat_kcal, 630.0);
    assert_eq!(split.total_kcal(), 1630.0);
}

#[test]
fn test_macro_percentages_sum_to_hundred() {
    let split = macro_calories(50.0, 200.0, 70.0).unwrap();
    let sum = split.protein_pct() + split.carbs_pct() + split.fat_pct();
    assert!((sum - 100.0).abs() < 1e-9, "shares summed to {sum}");
}

#[test]
fn test_macro_percentages_values() {
    let split = macro_calories(50.0, 200.0, 70.0).unwrap();
    assert!((split.protein_pct() - 12.269938650306749).abs() < 1e-9);
    assert!((split.carbs_pct() - 49.079754601226995).abs() < 1e-9);
    assert!((split.fat_pct() - 38.650306748466255).abs() < 1e-9);
}

#[test]
fn test_all_zero_grams_is_no_data() {
    assert!(macro_calories(0.0, 0.0, 0.0).is_none());
}

#[test]
fn test_single_nonzero_macro() {
    let split = macro_calories(0.0, 0.0, 10.0).unwrap();
    assert_eq!(split.total_kcal(), 90.0);
    assert_eq!(split.fat_pct(), 100.0);
    assert_eq!(split.protein_pct(), 0.0);
}

#[test]
fn test_fractional_grams() {
    let split = macro_calories(0.5, 0.25, 0.1).unwrap();
    assert!((split.protein_kcal - 2.0).abs() < 1e-12);
    assert!((split.carbs_kcal - 1.0).abs() < 1e-12);
    assert!((split.fat_kcal - 0.9).abs() < 1e-12);
}
