use clap::Parser as _;
use lpsolve::BaseArgs;
use rstest::*;
use serde_json::{Value, json};
use std::{fs, path::PathBuf};

struct Scratch(PathBuf);

impl Scratch {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("lpsolve-{}-{name}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn input(&self, body: &Value) -> String {
        let path = self.0.join("input.json");
        fs::write(&path, body.to_string()).unwrap();
        path.display().to_string()
    }

    fn output(&self) -> String {
        self.0.join("output.json").display().to_string()
    }

    fn result(&self) -> Value {
        serde_json::from_str(&fs::read_to_string(self.output()).unwrap()).unwrap()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn run(args: &[&str]) -> anyhow::Result<()> {
    BaseArgs::try_parse_from(args)?.evaluate()
}

#[test]
fn fit() {
    let scratch = Scratch::new("fit");
    let input = scratch.input(&json!({ "data": [[10.0, 100.0], [20.0, 80.0], [30.0, 60.0]] }));
    let output = scratch.output();

    run(&["lpsolve", "fit", &input, "-o", &output]).unwrap();

    let result = scratch.result();
    assert_eq!(result["alpha"], json!(120.0));
    assert_eq!(result["beta"], json!(2.0));
    assert_eq!(result["r2"], json!(1.0));
}

#[rstest]
#[case::closed_form("closed-form")]
#[case::clarabel("clarabel")]
fn optimize(#[case] lib: &str) {
    let scratch = Scratch::new(&format!("optimize-{lib}"));
    let input = scratch.input(
        &json!({ "alpha": 120.0, "beta": 2.0, "c": 10.0, "F": 50.0, "pMin": 0.0, "pMax": 30.0 }),
    );
    let output = scratch.output();

    run(&["lpsolve", "optimize", &input, "-o", &output, "--lib", lib, "-p", "1"]).unwrap();

    let result = scratch.result();
    assert_eq!(result["pOpt"], json!(30.0));
    assert_eq!(result["profitOpt"], json!(1150.0));
    assert_eq!(result["usedBoundary"], json!(true));
    assert_eq!(
        result["derivation"]["pStarFormula"],
        json!("p* = (120.0 + 2.0·10.0) / (2·2.0) = 35.0")
    );
}

#[test]
fn fit_reports_insufficient_data() {
    let scratch = Scratch::new("insufficient");
    let input = scratch.input(&json!({ "data": [[10.0, 100.0]] }));
    let output = scratch.output();

    let err = run(&["lpsolve", "fit", &input, "-o", &output]).unwrap_err();
    assert!(err.to_string().starts_with("insufficient data"));
}

#[test]
fn optimize_reports_invalid_interval() {
    let scratch = Scratch::new("interval");
    let input = scratch.input(
        &json!({ "alpha": 120.0, "beta": 2.0, "c": 10.0, "F": 50.0, "pMin": 50.0, "pMax": 10.0 }),
    );
    let output = scratch.output();

    let err = run(&["lpsolve", "optimize", &input, "-o", &output]).unwrap_err();
    assert!(err.to_string().starts_with("invalid interval"));
}
