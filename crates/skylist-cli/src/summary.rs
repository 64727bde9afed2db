use std::path::Path;

use console::Style;
use skylist_core::query::{Query, ScanStats};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_query_summary(catalog: &Path, query: &Query, stats: &ScanStats, held: usize) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Skylist Query"));
    println!();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Catalog"),
        s.path.apply_to(catalog.display())
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Center"),
        s.value
            .apply_to(format!("ra {}  dec {}", query.center_ra, query.center_dec))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Field of view"),
        s.value
            .apply_to(format!("{} x {} deg", query.fov_ra, query.fov_dec))
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Metric"),
        s.value.apply_to(query.metric)
    );
    println!();
    println!(
        "  {:<16}{}",
        s.label.apply_to("Rows scanned"),
        s.value.apply_to(stats.lines_seen)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Parse failures"),
        s.value.apply_to(stats.parse_failures)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Outside window"),
        s.value.apply_to(stats.outside_window)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("In window"),
        s.value.apply_to(stats.accepted)
    );
    println!(
        "  {:<16}{}",
        s.label.apply_to("Selected"),
        s.value.apply_to(held)
    );
}
