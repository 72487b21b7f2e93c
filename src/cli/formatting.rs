use comfy_table::Table;

use crate::preview::UpcomingScreen;

pub fn format_upcoming_screen(screen: &UpcomingScreen) -> String {
    let mut components = vec![title(&format!(
        "Upcoming transactions from {}",
        screen.date
    ))];

    if screen.entries.is_empty() {
        components.push("No scheduled transactions in the vault".to_string());
    }

    for entry in screen.entries.iter() {
        let entry_title = title(&format!("{} ({})", entry.name, entry.description));

        let content = if !entry.problems.is_empty() {
            entry.problems.join("\n")
        } else if entry.dates.is_empty() {
            "No upcoming occurrences".to_string()
        } else {
            let mut table = Table::new();
            table.set_header(vec!["#", "Date", "Amount"]);
            for (index, date) in entry.dates.iter().enumerate() {
                table.add_row(vec![
                    (index + 1).to_string(),
                    date.to_string(),
                    format!("{} {}", entry.amount, entry.currency),
                ]);
            }
            table.to_string()
        };

        components.push(format!("{}\n{}", entry_title, content));
    }

    components.push(format!("Release: {}", env!("RELEASE")));

    return components.join("\n\n");
}

fn title(string: &str) -> String {
    let string_length = string.len();
    return string.to_string() + "\n" + &"=".repeat(string_length);
}
