//! Plain-text rendering for directory listings.

use entity::Employee;

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 30;

/// Prints the NAME / EMAIL / POSITION table followed by the total record
/// count. `rows` may be a filtered subset; `total` is the unfiltered count.
pub fn print_table(rows: &[&Employee], total: usize) {
    println!("{:<NAME_WIDTH$} {:<EMAIL_WIDTH$} POSITION", "NAME", "EMAIL");
    for row in rows {
        println!(
            "{:<NAME_WIDTH$} {:<EMAIL_WIDTH$} {}",
            row.name, row.email, row.position
        );
    }
    println!();
    println!("{total} employees");
}
