use console::Style;
use rendiff_core::pipeline::{CompareConfig, SequenceSpec};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_compare_summary(config: &CompareConfig, spec: &SequenceSpec) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Rendiff Compare"));
    println!("  {}", s.title.apply_to("\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}"));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Original"),
        s.path.apply_to(spec.original_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Test"),
        s.path.apply_to(spec.test_dir.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(spec.output_root.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Versions"),
        s.method.apply_to(spec.versions.label())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Frames"),
        s.value
            .apply_to(format!("{:04}..{:04}", spec.start_frame, spec.end_frame))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Workers"),
        s.value.apply_to(config.worker_count)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("SSIM window"),
        s.value.apply_to(config.ssim_window)
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Threshold"),
        s.method.apply_to(if config.otsu_enabled {
            "Otsu"
        } else {
            "fixed midpoint"
        })
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Colormap"),
        s.method.apply_to(config.diff_colormap)
    );
    println!();
}
