#![allow(unused_macros)]
use rstest_reuse::template;

// A testing "template" that injects every optimizer implementation

#[template]
#[rstest]
#[case::closed_form(lps_solver::closed_form::ClosedFormOptimizer::default())]
#[case::clarabel(lps_solver::clarabel::ClarabelOptimizer::default())]
pub fn all_solvers(#[case] optimizer: impl lps_core::ports::Optimizer) -> () {}
