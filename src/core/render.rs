//! Renderer module
//!
//! Box-drawn text reports over a `FrequencyTable`: single-item lookup, the
//! full quantity table, the histogram and the menu. Everything here is pure
//! string building so the exact layout can be tested without a terminal.

use crate::core::model::FrequencyTable;
use crate::core::util::capitalize_first;

/// Width of the item name column in both tables
pub const ITEM_WIDTH: usize = 20;

/// Width of the quantity column
pub const QTY_WIDTH: usize = 5;

/// Width of the histogram bar column
pub const BAR_WIDTH: usize = 20;

/// Total outer width of the menu box
pub const MENU_WIDTH: usize = 44;

/// Character drawn once per unit in a histogram bar
pub const BAR_CHAR: char = '*';

/// Horizontal border for the given column widths, e.g. `+-----+--+`
pub fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(*width));
        line.push('+');
    }
    line
}

/// Left-aligned row; cells wider than their column are not cut
pub fn row(cells: &[(&str, usize)]) -> String {
    let mut line = String::from("|");
    for (text, width) in cells {
        line.push_str(&format!("{:<width$}|", text, width = *width));
    }
    line
}

/// Two-column table with a header, framed top, below the header and bottom
fn two_column_table<I>(headers: (&str, &str), widths: (usize, usize), rows: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let rule = border(&[widths.0, widths.1]);
    let mut output = String::new();

    output.push_str(&rule);
    output.push('\n');
    output.push_str(&row(&[(headers.0, widths.0), (headers.1, widths.1)]));
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');

    for (left, right) in rows {
        output.push_str(&row(&[(left.as_str(), widths.0), (right.as_str(), widths.1)]));
        output.push('\n');
    }

    output.push_str(&rule);
    output.push('\n');
    output
}

/// Frame a message in a box sized to fit it with two spaces each side
pub fn boxed(message: &str) -> String {
    let rule = format!("+{}+", "-".repeat(message.chars().count() + 4));
    format!("{rule}\n|  {message}  |\n{rule}\n")
}

/// Center `text` in `width` columns; odd leftovers go to the right
pub fn centered(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let left = width.saturating_sub(len) / 2;
    let right = width.saturating_sub(len + left);
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Look up a single item and frame the answer.
///
/// Only the first character of `query` is uppercased before the lookup.
pub fn item_frequency(table: &FrequencyTable, query: &str) -> String {
    let name = capitalize_first(query);
    let message = match table.lookup(&name) {
        Some(count) => format!("{}: {}", name, count),
        None => format!("{} not found.", name),
    };
    boxed(&message)
}

/// Every item with its quantity
pub fn all_frequencies(table: &FrequencyTable) -> String {
    two_column_table(
        ("Item", "Qty"),
        (ITEM_WIDTH, QTY_WIDTH),
        table
            .entries()
            .map(|(name, count)| (name.to_string(), count.to_string())),
    )
}

/// Every item with its quantity drawn as a bar of `*`
pub fn histogram(table: &FrequencyTable) -> String {
    two_column_table(
        ("Item", "Frequency"),
        (ITEM_WIDTH, BAR_WIDTH),
        table
            .entries()
            .map(|(name, count)| (name.to_string(), bar(count))),
    )
}

fn bar(count: u64) -> String {
    std::iter::repeat(BAR_CHAR).take(count as usize).collect()
}

/// Menu box with a centered title and one line per option.
///
/// Starts with a blank line to separate it from the previous report.
pub fn menu(title: &str, options: &[String]) -> String {
    let inside = MENU_WIDTH - 2;
    let rule = format!("+{}+", "-".repeat(inside));
    let mut output = String::from("\n");

    output.push_str(&rule);
    output.push('\n');
    output.push_str(&format!("|{}|\n", centered(title, inside)));
    output.push_str(&rule);
    output.push('\n');
    for option in options {
        output.push_str(&format!("| {:<width$} |\n", option, width = MENU_WIDTH - 4));
    }
    output.push_str(&rule);
    output.push('\n');
    output
}
