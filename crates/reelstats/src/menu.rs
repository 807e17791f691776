// crates/reelstats/src/menu.rs

use std::io::{self, BufRead, Write};

use anyhow::Result;
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use reelstats_core::model::MovieRecord;
use reelstats_core::reports::{Report, ReportRow};

/// What one line of user input asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Selection {
    Exit,
    Run(Report),
}

/// Prompts for selections on stdin until the user exits.
///
/// Anything that is not a digit between 0 and 4 is rejected with an
/// `Invalid Selection.` line and the loop continues. End of input counts
/// as an exit so piped sessions terminate cleanly.
pub fn run_loop(records: &[MovieRecord]) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu();
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };

        match parse_selection(&line?) {
            Some(Selection::Exit) => break,
            Some(Selection::Run(report)) => print_report(report, records),
            None => println!("Invalid Selection."),
        }
    }

    println!("Exiting program.");
    Ok(())
}

fn print_menu() {
    println!();
    println!("Select Input:");
    println!(" 1. Get top 10 genres with decreasing profitability.");
    println!(" 2. Get top 10 actors with decreasing profitability. (based on actor_1_name)");
    println!(" 3. Get top 10 directors with decreasing profitability.");
    println!(" 4. Get top 10 actor director pairs with most IMDB rating.");
    println!(" 0. To exit");
    println!();
}

fn parse_selection(line: &str) -> Option<Selection> {
    match line.trim().parse::<u32>() {
        Ok(0) => Some(Selection::Exit),
        Ok(1) => Some(Selection::Run(Report::GenreProfitability)),
        Ok(2) => Some(Selection::Run(Report::ActorProfitability)),
        Ok(3) => Some(Selection::Run(Report::DirectorProfitability)),
        Ok(4) => Some(Selection::Run(Report::ActorDirectorRating)),
        _ => None,
    }
}

fn print_report(report: Report, records: &[MovieRecord]) {
    let rows = report.run(records);

    println!("{}", report.title());
    println!();
    println!("{}", render_table(report, &rows));
    println!();
}

fn render_table(report: Report, rows: &[ReportRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec![report.key_label(), report.value_label()]);
    for row in rows {
        table.add_row(vec![row.key.clone(), row.total.to_string()]);
    }
    table
}
