use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use crate::models::{Category, Report};

/// Render a colored terminal report.
pub fn render(report: &Report, path: &Path, quiet: bool) -> Result<()> {
    if quiet {
        println!("{}", summary_line(report));
        return Ok(());
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    println!(
        "\n {} v{}",
        "journal-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Scanning: {}\n", path.display());

    if !report.has_problems() {
        println!(" {} {}\n", "✓".green(), summary_line(report));
        return Ok(());
    }

    println!(
        " Journals in {} not found in the trusted list (preprint servers are green):\n",
        file_name
    );
    render_table(report);

    println!(
        "\n {}  Preprint: {}  Predatory: {}  Unlisted: {}",
        "SUMMARY".bold(),
        report.count(Category::Preprint).to_string().green(),
        report.count(Category::Predatory).to_string().red(),
        report.count(Category::Unlisted).to_string().yellow(),
    );
    println!("\n {} {}", "⚠".yellow(), summary_line(report));
    println!(
        " Extra care should be taken when assessing these journals to ensure their quality.\n"
    );

    Ok(())
}

fn render_table(report: &Report) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Key").add_attribute(Attribute::Bold),
            Cell::new("Journal").add_attribute(Attribute::Bold),
            Cell::new("Category").add_attribute(Attribute::Bold),
        ]);

    for result in &report.results {
        let color = category_color(result.category);
        table.add_row(vec![
            Cell::new(&result.entry.key),
            Cell::new(&result.display_name).fg(color),
            Cell::new(result.category.to_string()).fg(color),
        ]);
    }

    println!("{}", table);
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Trusted => Color::Reset,
        Category::Preprint => Color::Green,
        Category::Predatory => Color::Red,
        Category::Unlisted => Color::Yellow,
    }
}

/// Closing sentence shared by every output mode.
pub fn summary_line(report: &Report) -> String {
    if report.has_problems() {
        format!(
            "{} out of {} entries are potentially problematic",
            report.problem_count, report.total_entries
        )
    } else {
        format!("No issues found! Entries scanned: {}", report.total_entries)
    }
}
