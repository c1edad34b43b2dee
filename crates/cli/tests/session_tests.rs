//! End-to-end labeling sessions driven through a scripted console.

use clap::Parser;
use csv_labeler_cli::app::run;
use csv_labeler_cli::cli_args::Args;
use csv_labeler_cli::console::ScriptedConsole;
use csv_labeler_core::error::Error;
use csv_labeler_core::table::Table;
use std::fs;
use tempfile::TempDir;

const CONFIG: &str = r#"
csv:
  separator: ";"
classification:
  labels: [Shopping, Food, Shoes, Car, Lebensmittel, Miete]
  keywords: [rewe]
"#;

struct Session {
    dir: TempDir,
}

impl Session {
    fn new(config: &str, csv: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("config.yml"), config).unwrap();
        fs::write(dir.path().join("data.csv"), csv).unwrap();
        Self { dir }
    }

    fn path(&self, name: &str) -> String {
        self.dir.path().join(name).to_str().unwrap().to_string()
    }

    fn args(&self, extra: &[&str]) -> Args {
        let config_path = self.path("config.yml");
        let mut args = vec!["csv-labeler", "-c", config_path.as_str()];
        args.extend_from_slice(extra);
        Args::parse_from(args)
    }

    fn run(&self, extra: &[&str], input: &[&str]) -> (Result<(), Error>, ScriptedConsole) {
        let csv_path = self.path("data.csv");
        let mut extra = extra.to_vec();
        extra.push(csv_path.as_str());
        let args = self.args(&extra);

        let mut console = ScriptedConsole::new(input.iter().copied());
        let result = run(&args, &mut console);
        (result, console)
    }

    fn labels(&self) -> Vec<Option<String>> {
        let table = Table::load(&self.path("data.csv"), b';').unwrap();
        let column = table.column_index("label").unwrap();
        (0..table.len())
            .map(|row| table.cell(row, column).map(str::to_string))
            .collect()
    }

    fn contents(&self) -> String {
        fs::read_to_string(self.dir.path().join("data.csv")).unwrap()
    }
}

fn some(label: &str) -> Option<String> {
    Some(label.to_string())
}

#[test]
fn test_complete_session_saves_labels() {
    let session = Session::new(CONFIG, "text;label\nREWE Markt;\nShell;\n");
    let (result, console) = session.run(&[], &["food", "4"]);

    assert!(result.is_ok());
    assert_eq!(session.labels(), [some("Food"), some("Car")]);
    assert!(console.transcript().contains("Labeling of the CSV file completed"));
    assert!(!console.transcript().contains("Existing labels detected"));
    assert_eq!(console.remaining_input(), 0);
}

#[test]
fn test_existing_labels_are_kept_when_confirmed() {
    let session = Session::new(CONFIG, "text;label\nREWE;Food\nShell;\n");
    let (result, console) = session.run(&[], &["", "car"]);

    assert!(result.is_ok());
    assert_eq!(session.labels(), [some("Food"), some("Car")]);
    assert!(console.transcript().contains("Existing labels detected!"));
    assert_eq!(console.transcript().matches("The following categories exist").count(), 1);
}

#[test]
fn test_existing_labels_are_deleted_when_declined() {
    let session = Session::new(CONFIG, "text;label\nREWE;Food\nShell;\n");
    let (result, _) = session.run(&[], &["n", "shoes", "car"]);

    assert!(result.is_ok());
    assert_eq!(session.labels(), [some("Shoes"), some("Car")]);
}

#[test]
fn test_keep_existing_flag_skips_question() {
    let session = Session::new(CONFIG, "text;label\nREWE;Food\nShell;\n");
    let (result, console) = session.run(&["--keep-existing"], &["car"]);

    assert!(result.is_ok());
    assert_eq!(session.labels(), [some("Food"), some("Car")]);
    assert!(!console.transcript().contains("Existing labels detected"));
}

#[test]
fn test_overwrite_existing_flag_asks_every_row() {
    let session = Session::new(CONFIG, "text;label\nREWE;Food\nShell;Car\n");
    let (result, console) = session.run(&["-o"], &["shopping", "u"]);

    assert!(result.is_ok());
    assert_eq!(session.labels(), [some("Shopping"), some("Umbuchung")]);
    assert!(!console.transcript().contains("Existing labels detected"));
}

#[test]
fn test_cancel_and_discard_leaves_file_untouched() {
    let original = "text;label\nREWE;\nShell;\nDeichmann;\n";
    let session = Session::new(CONFIG, original);
    let (result, console) = session.run(&[], &["food", "q", "n"]);

    assert!(result.is_ok());
    assert_eq!(session.contents(), original);
    assert!(console.transcript().contains("Labeling was canceled"));
    assert!(console.transcript().contains("The labels were not saved"));
}

#[test]
fn test_cancel_and_save_keeps_partial_labels() {
    let session = Session::new(CONFIG, "text;label\nREWE;\nShell;\nDeichmann;\n");
    let (result, console) = session.run(&[], &["food", "Cancel Input", "y"]);

    assert!(result.is_ok());
    assert_eq!(session.labels(), [some("Food"), None, None]);
    assert!(console.transcript().contains("1 labels were saved"));
}

#[test]
fn test_missing_label_column_is_written() {
    let session = Session::new(CONFIG, "text;amount\nREWE;12.5\n");
    let (result, _) = session.run(&[], &["Lebensmittel"]);

    assert!(result.is_ok());
    let table = Table::load(&session.path("data.csv"), b';').unwrap();
    assert_eq!(table.headers(), ["text", "amount", "label"]);
    assert_eq!(session.labels(), [some("Lebensmittel")]);
}

#[test]
fn test_csv_path_is_asked_for() {
    let session = Session::new(CONFIG, "text;label\nREWE;\n");
    let missing = session.path("missing.csv");
    let csv_path = session.path("data.csv");
    let args = session.args(&[]);
    let mut console = ScriptedConsole::new([missing.as_str(), csv_path.as_str(), "food"]);

    run(&args, &mut console).unwrap();

    assert_eq!(session.labels(), [some("Food")]);
    assert_eq!(console.transcript().matches("No valid file found").count(), 1);
}

#[test]
fn test_quit_at_path_prompt() {
    let session = Session::new(CONFIG, "text;label\nREWE;\n");
    let args = session.args(&[]);
    let mut console = ScriptedConsole::new(["q"]);

    run(&args, &mut console).unwrap();

    assert!(console.transcript().ends_with("Exiting...\n"));
    assert_eq!(session.contents(), "text;label\nREWE;\n");
}

#[test]
fn test_complete_prints_matching_labels() {
    let session = Session::new(CONFIG, "text;label\n");
    let args = session.args(&["--complete", "mi"]);
    let mut console = ScriptedConsole::new(Vec::<String>::new());

    run(&args, &mut console).unwrap();

    assert_eq!(console.transcript(), "Lebensmittel\nMiete\n");
}

#[test]
fn test_missing_relevant_column_is_an_error() {
    let config = "csv:\n  separator: \";\"\n  relevant_columns: [Text, Verwendungszweck]\nclassification:\n  labels: [Food]\n";
    let session = Session::new(config, "text;label\nREWE;\n");
    let (result, console) = session.run(&[], &[]);

    assert!(matches!(result, Err(Error::MissingRelevantColumn(column)) if column == "Verwendungszweck"));
    assert!(console.transcript().is_empty());
}

#[test]
fn test_reserved_label_in_config_is_an_error() {
    let config = "classification:\n  labels: [Food, Umbuchung]\n";
    let session = Session::new(config, "text;label\nREWE;\n");
    let (result, _) = session.run(&[], &[]);

    assert!(matches!(result, Err(Error::ReservedLabel(..))));
}

#[test]
fn test_running_out_of_input_is_an_error() {
    let original = "text;label\nREWE;\nShell;\n";
    let session = Session::new(CONFIG, original);
    let (result, _) = session.run(&[], &["food"]);

    assert!(matches!(result, Err(Error::Stdio(_))));
    assert_eq!(session.contents(), original);
}
