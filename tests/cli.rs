use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ezmoney(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ezmoney").unwrap();
    cmd.env("EZMONEY_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_init_seeds_categories() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized EzMoney"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("categories.json").exists());

    ezmoney(&dir)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("Expense Base"))
        .stdout(predicate::str::contains("├── To Live"))
        .stdout(predicate::str::contains("└── Community"))
        .stdout(predicate::str::contains("Income Base"));
}

#[test]
fn test_add_then_list() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir)
        .args(["add", "lunch", "12.5k", "/Have Fun|"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded transaction."))
        .stdout(predicate::str::contains("Amount:      12500.00 USD"))
        .stdout(predicate::str::contains("Category:    Have Fun"))
        .stdout(predicate::str::contains("Memo:        lunch"));

    ezmoney(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("12500.00 USD"))
        .stdout(predicate::str::contains("Have Fun"));
}

#[test]
fn test_add_unknown_tag_uses_default_category() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir)
        .args(["add", "coffee 3k /Nonexistent|"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Amount:      3000.00 USD"))
        .stdout(predicate::str::contains("Category:    To Live"))
        .stdout(predicate::str::contains("used the default category"));
}

#[test]
fn test_dry_run_saves_nothing() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir)
        .args(["add", "--dry-run", "taxi", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("40.00 USD"));

    ezmoney(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_summary_and_breakdown() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir).args(["add", "rent 2M /To Live|"]).assert().success();
    ezmoney(&dir).args(["add", "movie 300 /Have Fun|"]).assert().success();

    ezmoney(&dir)
        .arg("summary")
        .assert()
        .success()
        .stdout(predicate::str::contains("Spending Summary"))
        .stdout(predicate::str::contains("2000300.00 USD"));

    ezmoney(&dir)
        .args(["breakdown", "--period", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category Breakdown: All time"))
        .stdout(predicate::str::contains("2000000.00 USD"))
        .stdout(predicate::str::contains("300.00 USD"));
}

#[test]
fn test_breakdown_rejects_unknown_period() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir)
        .args(["breakdown", "--period", "fortnight"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown period"));
}

#[test]
fn test_clear_requires_confirmation() {
    let dir = TempDir::new().unwrap();
    ezmoney(&dir).args(["add", "a 1"]).assert().success();

    ezmoney(&dir)
        .arg("clear")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));

    ezmoney(&dir)
        .args(["clear", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted 1 transaction(s)"));
}

#[test]
fn test_delete_unknown_transaction_fails() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir)
        .args(["delete", "txn-00000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn test_delete_category_cascades() {
    let dir = TempDir::new().unwrap();
    ezmoney(&dir).args(["add", "movie 300 /Have Fun|"]).assert().success();

    ezmoney(&dir)
        .args(["categories", "delete", "Expense Base", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Deleted category 'Expense Base' (6 categories, 1 transaction(s))",
        ));

    ezmoney(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions found."));
}

#[test]
fn test_audit_and_config() {
    let dir = TempDir::new().unwrap();

    ezmoney(&dir)
        .arg("audit")
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Category"));

    ezmoney(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Default category: To Live"))
        .stdout(predicate::str::contains("Currency:         USD"));
}
