use approx::assert_abs_diff_eq;
use lps_core::{
    models::{OptimizeRequest, OptimizeResponse},
    ports::Optimizer,
};
use rstest::*;
use rstest_reuse::{self, *};
use serde_json::Value;
use std::{fs::File, io::BufReader, path::PathBuf};

mod all_solvers;
use all_solvers::all_solvers;

// For every optimizer and every (input.json, output.json) pair in `./samples/**`,
// solve the request and compare the response to the known-good output. The
// reference files only list the fields they pin down; the derivation strings
// are covered by the unit tests.

#[apply(all_solvers)]
fn optimize_sample(
    optimizer: impl Optimizer,
    #[files("tests/samples/**/input.json")] input: PathBuf,
) {
    let mut output = input.clone();
    output.set_file_name("output.json");

    let request: OptimizeRequest =
        serde_json::from_reader(BufReader::new(File::open(input).unwrap())).unwrap();
    let reference: Value =
        serde_json::from_reader(BufReader::new(File::open(output).unwrap())).unwrap();

    let (demand, cost) = request.validate().unwrap();
    let response = OptimizeResponse::from(optimizer.optimize(&demand, &cost).unwrap());

    cmp(&serde_json::to_value(&response).unwrap(), &reference, 1e-9);
}

fn cmp(actual: &Value, reference: &Value, eps: f64) {
    let Value::Object(reference) = reference else {
        panic!("reference output must be an object");
    };

    for (key, expected) in reference {
        let value = &actual[key.as_str()];
        match (value.as_f64(), expected.as_f64()) {
            (Some(a), Some(b)) => assert_abs_diff_eq!(a, b, epsilon = eps),
            _ => assert_eq!(value, expected, "mismatch in {key}"),
        }
    }
}
