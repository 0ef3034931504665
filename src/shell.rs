//! The interactive menu. One request/response iteration at a time: print
//! the menu, block on a line of input, dispatch, report, loop. Every
//! failure is painted red and the loop continues; only option 9 (or stdin
//! closing) ends the session.

use std::io::Write;

use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use yansi::Paint;

use crate::api;
use crate::chart;
use crate::error::TrackerError;
use crate::models::{AppContext, IpRecord, RecordField};
use crate::persistence;
use crate::store::RecordStore;

type InputLines = Lines<BufReader<Stdin>>;

/// Run the menu loop until the user exits or stdin closes. The store lives
/// here for the whole session and is lent to each operation; nothing
/// survives the loop unless the user saved it.
pub async fn run(ctx: &AppContext) {
    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();
    let mut store = RecordStore::new();

    loop {
        print_menu();
        let Some(option) = prompt(&mut lines, "\nSelect an option: ").await else {
            tracing::debug!("stdin closed, leaving menu loop");
            break;
        };
        if !dispatch(ctx, &mut store, &mut lines, &option).await {
            break;
        }
    }
}

fn print_menu() {
    println!("\n{}", Paint::new("========== IP Tracker ==========").cyan());
    println!("{}", Paint::new("1. Fetch IP Details").green());
    println!("{}", Paint::new("2. Store IP Details").green());
    println!("{}", Paint::new("3. Delete IP Details").green());
    println!("{}", Paint::new("4. Update IP Details").green());
    println!("{}", Paint::new("5. Arrange Data").green());
    println!("{}", Paint::new("6. Show Data in Graphic Format").green());
    println!("{}", Paint::new("7. Save Data to File").green());
    println!("{}", Paint::new("8. Load Data from File").green());
    println!("{}", Paint::new("9. Exit").green());
}

/// Route one selected option. Returns `false` when the loop should end.
async fn dispatch(
    ctx: &AppContext,
    store: &mut RecordStore,
    lines: &mut InputLines,
    option: &str,
) -> bool {
    match option {
        "1" => fetch_details(ctx, lines).await,
        "2" => fetch_and_store(ctx, store, lines).await,
        "3" => delete_record(store, lines).await,
        "4" => update_record(store, lines).await,
        "5" => arrange_records(store, lines).await,
        "6" => show_chart(store, lines).await,
        "7" => save_store(ctx, store),
        "8" => load_store(ctx, store),
        "9" => {
            println!("{}", Paint::new("Exiting... Thank you!").red());
            return false;
        }
        _ => println!("{}", Paint::new("Invalid option. Please try again.").red()),
    }
    true
}

/// Print a prompt without a newline and read one trimmed line; `None` once
/// stdin is closed.
async fn prompt(lines: &mut InputLines, label: &str) -> Option<String> {
    print!("{}", label);
    let _ = std::io::stdout().flush();
    match lines.next_line().await {
        Ok(Some(line)) => Some(line.trim().to_string()),
        _ => None,
    }
}

fn blank_to_none(input: &str) -> Option<&str> {
    if input.is_empty() {
        None
    } else {
        Some(input)
    }
}

/// Every failure lands here: logged, painted red, loop continues.
fn report_error(error: &TrackerError) {
    tracing::warn!(%error, "operation failed");
    println!("{}", Paint::new(error.to_string()).red());
}

fn report_success(message: String) {
    println!("{}", Paint::new(message).green());
}

async fn fetch_details(ctx: &AppContext, lines: &mut InputLines) {
    let Some(ip) = prompt(lines, "Enter IP (leave blank for your IP): ").await else {
        return;
    };
    match api::fetch_ip_details(&ctx.client, &ctx.lookup_base_url, blank_to_none(&ip)).await {
        Ok(record) => print_record(&record),
        Err(e) => report_error(&e),
    }
}

async fn fetch_and_store(ctx: &AppContext, store: &mut RecordStore, lines: &mut InputLines) {
    let Some(ip) = prompt(lines, "Enter IP (leave blank for your IP): ").await else {
        return;
    };
    match api::fetch_ip_details(&ctx.client, &ctx.lookup_base_url, blank_to_none(&ip)).await {
        Ok(record) => {
            let stored_ip = store.store(record);
            report_success(format!("Stored IP data successfully: {}", stored_ip));
        }
        Err(e) => report_error(&e),
    }
}

async fn delete_record(store: &mut RecordStore, lines: &mut InputLines) {
    let Some(ip) = prompt(lines, "Enter IP to delete: ").await else {
        return;
    };
    match store.delete(&ip) {
        // Deletion confirmations print red, not the usual success green
        Ok(removed) => println!("{}", Paint::new(format!("Deleted data for IP: {}", removed.ip)).red()),
        Err(e) => report_error(&e),
    }
}

async fn update_record(store: &mut RecordStore, lines: &mut InputLines) {
    let Some(ip) = prompt(lines, "Enter IP to update: ").await else {
        return;
    };
    let Some(field) = prompt(lines, "Enter field to update (e.g., city, region): ").await else {
        return;
    };
    let Some(value) = prompt(lines, "Enter new value: ").await else {
        return;
    };
    match store.update(&ip, &field, &value) {
        Ok(()) => report_success(format!("Updated {} for IP {} to {}", field, ip, value)),
        Err(e) => report_error(&e),
    }
}

async fn arrange_records(store: &mut RecordStore, lines: &mut InputLines) {
    let Some(field) = prompt(lines, "Enter field to arrange by (e.g., city, country): ").await
    else {
        return;
    };
    match store.sort(&field) {
        Ok(()) => report_success(format!("Data arranged by {}", field)),
        Err(e) => report_error(&e),
    }
}

async fn show_chart(store: &RecordStore, lines: &mut InputLines) {
    match chart::render(store) {
        // Hold the chart on screen until the user dismisses it
        Ok(()) => {
            let _ = prompt(lines, "\nPress Enter to continue...").await;
        }
        Err(e) => report_error(&e),
    }
}

fn save_store(ctx: &AppContext, store: &RecordStore) {
    match persistence::save_records(store, &ctx.data_file) {
        Ok(()) => report_success(format!(
            "Data successfully saved to {}.",
            ctx.data_file.display()
        )),
        Err(e) => report_error(&e),
    }
}

fn load_store(ctx: &AppContext, store: &mut RecordStore) {
    match persistence::load_records(&ctx.data_file) {
        Ok(records) => {
            store.replace_all(records);
            report_success(format!(
                "Data successfully loaded from {}.",
                ctx.data_file.display()
            ));
        }
        Err(e) => report_error(&e),
    }
}

/// Two-column Field/Value table of a single record.
fn print_record(record: &IpRecord) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w - 4);
    }
    table.set_header(vec!["Field", "Value"]);
    for field in RecordField::ALL {
        table.add_row(vec![field.name().to_string(), record.display_value(field)]);
    }
    println!("\n{table}\n");
}
