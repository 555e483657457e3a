use rendiff_core::diagnostic::DiffColormap;
use rendiff_core::pipeline::CompareConfig;

#[test]
fn test_defaults() {
    let config = CompareConfig::default();
    assert_eq!(config.worker_count, 4);
    assert_eq!(config.ssim_window, 7);
    assert!(config.otsu_enabled);
    assert_eq!(config.diff_colormap, DiffColormap::Hot);
    config.validate().unwrap();
}

#[test]
fn test_toml_round_trip_with_partial_fields() {
    let config: CompareConfig = toml::from_str("worker_count = 2").unwrap();
    assert_eq!(config.worker_count, 2);
    assert_eq!(config.ssim_window, 7, "omitted fields take defaults");
    assert!(config.otsu_enabled);

    let config: CompareConfig = toml::from_str(
        "worker_count = 8\nssim_window = 11\notsu_enabled = false\ndiff_colormap = \"Grayscale\"",
    )
    .unwrap();
    assert_eq!(config.worker_count, 8);
    assert_eq!(config.ssim_window, 11);
    assert!(!config.otsu_enabled);
    assert_eq!(config.diff_colormap, DiffColormap::Grayscale);
    config.validate().unwrap();
}

#[test]
fn test_validation_rejects_bad_values() {
    let mut config = CompareConfig::default();
    config.worker_count = 0;
    assert!(config.validate().is_err());

    let mut config = CompareConfig::default();
    config.ssim_window = 8;
    assert!(config.validate().is_err());

    let mut config = CompareConfig::default();
    config.ssim_window = 1;
    assert!(config.validate().is_err());
}
