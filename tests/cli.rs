use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("MONTHLY_BUDGET_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn summary_reports_savings_and_overspending() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["summary", "-e", "housing=450", "-e", "groceries=80"])
        .assert()
        .success()
        .stdout(predicate::str::contains("€530.00"))
        .stdout(predicate::str::contains("You've met your savings goal!"))
        .stdout(predicate::str::contains("Over budget in 🏠 Housing by €350.00"))
        .stdout(predicate::str::contains("You can still spend €20.00 in 🍜 Groceries"));
}

#[test]
fn summary_reports_deficit() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["summary", "--income", "100", "-e", "housing=450,5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You're spending more than you earn!"));
}

#[test]
fn summary_rejects_invalid_amount() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["summary", "-e", "housing=abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expense 'housing=abc'"));
}

#[test]
fn summary_exports_csv() {
    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("breakdown.csv");
    budget(&dir)
        .args(["summary", "-e", "housing=450", "-o"])
        .arg(&csv_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Breakdown exported to"));

    let contents = std::fs::read_to_string(&csv_path).unwrap();
    assert!(contents
        .starts_with("Category,Budgeted,Actual Spent,Remaining Budget,% of Budget Used"));
    assert!(contents.contains("Housing,€100.00,€450.00,-€350.00,450.0%"));
}

#[test]
fn session_reads_commands_from_stdin() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .arg("session")
        .write_stdin("add housing 450\nadd groceries 80\nedit exp-2 abc\ncalc\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added €450.00 to 🏠 Housing (exp-1)"))
        .stdout(predicate::str::contains("Kept €80.00 for exp-2"))
        .stdout(predicate::str::contains("€530.00"));
}

#[test]
fn session_is_the_default_command() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .write_stdin("add other 5\nlist\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("exp-1"))
        .stdout(predicate::str::contains("Total: €5.00"));
}

#[test]
fn session_writes_audit_log() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["session", "--audit"])
        .write_stdin("add housing 450\ndelete exp-1\nquit\n")
        .assert()
        .success();

    budget(&dir)
        .args(["history", "-n", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Expense exp-1"))
        .stdout(predicate::str::contains("DELETE Expense exp-1"));
}

#[test]
fn categories_lists_every_category() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("🏠 Housing"))
        .stdout(predicate::str::contains("📦 Other"));
}

#[test]
fn init_writes_settings() {
    let dir = TempDir::new().unwrap();
    budget(&dir).arg("init").assert().success();
    assert!(dir.path().join("config.json").exists());

    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("€1500.00"));
}
