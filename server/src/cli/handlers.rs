// server/src/cli/handlers.rs

// Screen-level pieces of the interactive session: the welcome banner, the
// menu, listings and the farewell message.

use crossterm::style::{self, Stylize};
use log::debug;

use lib::workflows::OutputSink;
use lib::{list_kind, ClinicConfig, InMemoryStorage};
use models::RecordKind;

pub const MENU_LINES: &[&str] = &[
    "Menu",
    "1. REGISTER A PATIENT",
    "2. REGISTER A DOCTOR",
    "3. REGISTER AN APPOINTMENT",
    "4. DISPLAY PATIENTS",
    "5. DISPLAY DOCTORS",
    "6. DISPLAY APPOINTMENTS",
    "7. EXIT",
];

/// The bordered, centered banner lines. Widths count characters so that
/// non-ASCII clinic names stay aligned.
pub fn welcome_banner(config: &ClinicConfig) -> Vec<String> {
    let title = format!("WELCOME TO THE {} MANAGEMENT SYSTEM!", config.clinic_name.to_uppercase());
    let tip = "Enter a menu number or a command such as 'patients' or 'help'.";
    let total_width = title.chars().count().max(tip.chars().count()) + 4;
    let border = "*".repeat(total_width);

    let centered = |text: &str| {
        let padding = total_width.saturating_sub(text.chars().count() + 2);
        let left = padding / 2;
        format!("*{}{}{}*", " ".repeat(left), text, " ".repeat(padding - left))
    };

    vec![border.clone(), centered(&title), centered(tip), border]
}

pub fn print_welcome_screen(config: &ClinicConfig) {
    for line in welcome_banner(config) {
        if config.color {
            println!("{}", style::style(line).cyan());
        } else {
            println!("{}", line);
        }
    }
}

pub fn print_menu<O: OutputSink + ?Sized>(output: &mut O) {
    for line in MENU_LINES {
        output.line(line);
    }
}

pub fn registration_header(kind: RecordKind) -> String {
    format!("*****{} REGISTRATION*****", kind.to_string().to_uppercase())
}

/// Writes the heading and one line per stored record of `kind`.
pub fn display_records<O: OutputSink + ?Sized>(
    kind: RecordKind,
    storage: &InMemoryStorage,
    config: &ClinicConfig,
    output: &mut O,
) {
    output.line(&format!("*****{}*****", kind.plural()));
    match list_kind(kind, storage, config.listing_order, config.listing_format) {
        Ok(lines) => {
            debug!("Listing {} {} record(s)", lines.len(), kind);
            for line in &lines {
                output.line(line);
            }
        }
        Err(err) => output.failure(&err),
    }
}

pub fn print_farewell<O: OutputSink + ?Sized>(config: &ClinicConfig, output: &mut O) {
    output.line("Exiting the program...");
    output.line(&format!(
        "Thank you for using the {} management system.",
        config.clinic_name
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use lib::workflows::BufferedOutput;
    use models::{Doctor, RecordId};

    #[test]
    fn empty_listing_prints_only_the_heading() {
        let storage = InMemoryStorage::new();
        let mut output = BufferedOutput::new();

        display_records(RecordKind::Doctor, &storage, &ClinicConfig::default(), &mut output);

        assert_eq!(output.lines, vec!["*****DOCTORS*****"]);
    }

    #[test]
    fn listing_prints_every_record() {
        let mut storage = InMemoryStorage::new();
        for n in 1..=2 {
            storage
                .insert(Doctor {
                    id: RecordId::new(n).unwrap(),
                    name: format!("Doc {}", n),
                    specialization: "Surgery".into(),
                })
                .unwrap();
        }
        let mut output = BufferedOutput::new();

        display_records(RecordKind::Doctor, &storage, &ClinicConfig::default(), &mut output);

        assert_eq!(output.lines.len(), 3);
        assert_eq!(output.lines[1], "ID: 1 | NAME: Doc 1 | SPECIALIZATION: Surgery");
    }

    #[test]
    fn banner_lines_align_for_non_ascii_names() {
        let config = ClinicConfig { clinic_name: "Hôpital Kanombe".into(), ..ClinicConfig::default() };
        let banner = welcome_banner(&config);

        let width = banner[0].chars().count();
        assert!(banner.iter().all(|line| line.chars().count() == width));
        assert!(banner[1].contains("HÔPITAL KANOMBE"));
    }

    #[test]
    fn headers_name_the_record_kind() {
        assert_eq!(registration_header(RecordKind::Appointment), "*****APPOINTMENT REGISTRATION*****");
    }
}
