/// Output formatting: terminal table and JSON.
use faceoff_core::RankedEntry;
use serde::Serialize;

#[derive(Serialize)]
struct JsonRankedItem {
    rank: usize,
    name: String,
}

#[derive(Serialize)]
struct JsonOutput {
    items: Vec<JsonRankedItem>,
    total_comparisons: usize,
}

/// Print results as a formatted terminal table.
pub fn print_table(entries: &[RankedEntry], total_comparisons: usize) {
    println!("Here are the results:\n");

    // Find the widest item label for padding
    let name_width = entries
        .iter()
        .map(|e| e.label.len())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    println!(" # | {:<name_width$}", "Item");
    println!("---|-{}", "-".repeat(name_width));
    for entry in entries {
        println!("{:>2} | {:<name_width$}", entry.rank, entry.label);
    }

    println!(
        "\n{} items ranked ({} comparisons)",
        entries.len(),
        total_comparisons,
    );
}

/// Print results as JSON.
pub fn print_json(entries: &[RankedEntry], total_comparisons: usize) {
    let items: Vec<JsonRankedItem> = entries
        .iter()
        .map(|e| JsonRankedItem {
            rank: e.rank,
            name: e.label.clone(),
        })
        .collect();

    let output = JsonOutput {
        items,
        total_comparisons,
    };

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
