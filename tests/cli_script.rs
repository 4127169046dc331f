use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

fn script_command(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("saletrack_cli").unwrap();
    cmd.env("SALETRACK_CLI_SCRIPT", "1")
        .env("SALETRACK_HOME", home.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("API_KEY");
    cmd
}

#[test]
fn add_then_history_shows_the_record() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("add 2024-03-01 100 50 30 market day\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(contains("Recorded 2024-03-01"))
        .stdout(contains("2024-03-01"))
        .stdout(contains("$120.00"))
        .stdout(contains("market day"));
}

#[test]
fn records_persist_between_invocations() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("add 2024-03-01 100 0 0\nexit\n")
        .assert()
        .success();

    script_command(&home)
        .write_stdin("history\nexit\n")
        .assert()
        .success()
        .stdout(contains("2024-03-01"))
        .stdout(contains("1 record(s)."));
}

#[test]
fn summary_reports_totals_and_chart() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("add 2024-03-01 100 50 30\nadd 2024-03-02 80 20 10\nsummary\nexit\n")
        .assert()
        .success()
        .stdout(contains("Business Summary"))
        .stdout(contains("$210.00"))
        .stdout(contains("Last 2 day(s)"));
}

#[test]
fn delete_is_auto_confirmed_in_script_mode() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("add 2024-03-01 100 0 0\nadd 2024-03-02 50 0 0\ndelete 1\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(contains("Deleted the record from 2024-03-02"))
        .stdout(contains("1 record(s)."));
}

#[test]
fn insight_without_records_prints_the_fixed_message() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("insight\nexit\n")
        .assert()
        .success()
        .stdout(contains("No data available for analysis yet."));
}

#[test]
fn insight_without_credentials_warns_and_continues() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("add 2024-03-01 10 0 0\ninsight\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(contains("GEMINI_API_KEY is not set"))
        .stdout(contains("1 record(s)."));
}

#[test]
fn unknown_command_gets_a_suggestion() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("histori\nexit\n")
        .assert()
        .success()
        .stdout(contains("Unknown command `histori`"))
        .stdout(contains("Suggestion: `history`?"));
}

#[test]
fn invalid_arguments_report_usage_without_aborting() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("add 2024-03-01\nadd 2024-03-02 5 5 5\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(contains("usage: add <date> <cash> <card> <expenses> [note...]"))
        .stdout(contains("1 record(s)."));
}

#[test]
fn config_changes_persist_between_invocations() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("config set currency €\nexit\n")
        .assert()
        .success()
        .stdout(contains("Updated currency."));

    script_command(&home)
        .write_stdin("add 2024-03-01 10 0 0\nhistory\nexit\n")
        .assert()
        .success()
        .stdout(contains("€10.00"));
}

#[test]
fn version_names_the_data_locations() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("version\nexit\n")
        .assert()
        .success()
        .stdout(contains("SaleTrack"))
        .stdout(contains("config.json"));
}

#[test]
fn help_lists_every_command() {
    let home = TempDir::new().unwrap();

    script_command(&home)
        .write_stdin("help\nexit\n")
        .assert()
        .success()
        .stdout(contains("Available commands"))
        .stdout(contains("summary"))
        .stdout(contains("insight"))
        .stdout(contains("delete"));
}
