use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn splitbill(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("splitbill").unwrap();
    cmd.env("SPLITBILL_DATA_DIR", dir.path()).env_remove("RUST_LOG");
    cmd
}

fn init_sample(dir: &TempDir) {
    splitbill(dir)
        .args(["init", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized SplitBill"));
}

#[test]
fn settle_sample_group() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    splitbill(&dir)
        .arg("settle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Charlie → Alice"))
        .stdout(predicate::str::contains("$800"))
        .stdout(predicate::str::contains("Bob     → Alice"));
}

#[test]
fn itemized_details_list_expenses() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    splitbill(&dir)
        .args(["settle", "--strategy", "itemized", "--details"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settlement (Itemized)"))
        .stdout(predicate::str::contains("Alice   → Bob"))
        .stdout(predicate::str::contains("Drinks"));
}

#[test]
fn balances_show_signed_nets() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    splitbill(&dir)
        .arg("balances")
        .assert()
        .success()
        .stdout(predicate::str::contains("+$1000.00"))
        .stdout(predicate::str::contains("-$800.00"))
        .stdout(predicate::str::contains("Total spent: $2400.00"));
}

#[test]
fn build_a_group_from_scratch() {
    let dir = TempDir::new().unwrap();
    splitbill(&dir).arg("init").assert().success();

    for name in ["Ann", "Ben"] {
        splitbill(&dir)
            .args(["participant", "add", name])
            .assert()
            .success();
    }

    splitbill(&dir)
        .args(["participant", "add", "Ann"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    splitbill(&dir)
        .args(["expense", "add", "30", "--item", "Taxi", "--paid-by", "Ben"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Split Among: Ann, Ben"));

    splitbill(&dir)
        .arg("settle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Ann → Ben"))
        .stdout(predicate::str::contains("$15"));
}

#[test]
fn unknown_payer_is_rejected() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    splitbill(&dir)
        .args(["expense", "add", "10", "--paid-by", "Zed"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Zed"));
}

#[test]
fn share_link_round_trip() {
    let source = TempDir::new().unwrap();
    init_sample(&source);

    let output = splitbill(&source)
        .args(["share", "link"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let link = String::from_utf8(output).unwrap();
    assert!(link.starts_with("https://splitbill.app/?data="));

    let target = TempDir::new().unwrap();
    splitbill(&target).arg("init").assert().success();
    splitbill(&target)
        .args(["share", "load", link.trim()])
        .assert()
        .success()
        .stdout(predicate::str::contains("3 participants, 2 expenses"));

    splitbill(&target)
        .arg("settle")
        .assert()
        .success()
        .stdout(predicate::str::contains("Charlie → Alice"));
}

#[test]
fn bad_share_link_keeps_ledger() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    splitbill(&dir)
        .args(["share", "load", "not-a-ledger!!"])
        .assert()
        .success()
        .stdout(predicate::str::contains("was not changed"));

    splitbill(&dir)
        .args(["participant", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Charlie"));
}

#[test]
fn export_csv_writes_file() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);
    let out = dir.path().join("expenses.csv");

    splitbill(&dir)
        .args(["export", "csv"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 expenses"));

    let contents = std::fs::read_to_string(out).unwrap();
    assert!(contents.starts_with("Date,Item Description,Amount,Paid By,Split Among"));
    assert!(contents.contains("Drinks,600.00,Bob,Alice; Bob; Charlie"));
}

#[test]
fn config_changes_currency() {
    let dir = TempDir::new().unwrap();
    init_sample(&dir);

    splitbill(&dir)
        .args(["config", "--currency", "₹"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    splitbill(&dir)
        .arg("settle")
        .assert()
        .success()
        .stdout(predicate::str::contains("₹800"));
}
