use assert_cmd::Command;
use eyre::Result;
use predicates::prelude::*;

fn fibkont() -> Result<Command> {
    let mut cmd = Command::cargo_bin("fibkont")?;
    cmd.args(["--log-level", "off"]);
    Ok(cmd)
}

#[test]
fn run_prints_value() -> Result<()> {
    fibkont()?.args(["run", "30"]).assert().success().stdout("832040\n");
    fibkont()?.args(["run", "10", "--evaluator", "recursive", "--width", "u64"]).assert().success().stdout("55\n");
    Ok(())
}

#[test]
fn run_json_report() -> Result<()> {
    let output = fibkont()?.args(["run", "12", "-e", "recursive", "--json"]).output()?;
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(report["n"], 12);
    assert_eq!(report["evaluator"], "recursive");
    assert_eq!(report["width"], "big");
    assert_eq!(report["value"], "144");
    assert_eq!(report["steps"], 287);
    assert_eq!(report["max_chain_depth"], 10);
    assert_eq!(report["max_native_depth"], 287);
    Ok(())
}

#[test]
fn run_rejects_zero() -> Result<()> {
    fibkont()?.args(["run", "0"]).assert().failure().stderr(predicate::str::contains("invalid index"));
    Ok(())
}

#[test]
fn run_reports_overflow() -> Result<()> {
    fibkont()?.args(["run", "14", "-w", "u8"]).assert().failure().stderr(predicate::str::contains("overflow"));
    Ok(())
}

#[test]
fn run_rejects_unknown_evaluator() -> Result<()> {
    fibkont()?.args(["run", "5", "-e", "trampoline"]).assert().failure().stderr(predicate::str::contains("trampoline"));
    Ok(())
}

#[test]
fn run_respects_chain_limit() -> Result<()> {
    fibkont()?
        .args(["--max-chain-depth", "3", "run", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("continuation chain exhausted"));
    Ok(())
}

#[test]
fn compare_agrees() -> Result<()> {
    fibkont()?.args(["compare", "1", "14"]).assert().success().stdout(predicate::str::contains("evaluators agree"));
    Ok(())
}

#[test]
fn compare_rejects_empty_range() -> Result<()> {
    fibkont()?.args(["compare", "5", "1"]).assert().failure().stderr(predicate::str::contains("empty range"));
    Ok(())
}
