use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use lps_axum::{ApiApplication, config::AxumConfig, router};
use lps_solver::clarabel::ClarabelOptimizer;
use rstest::*;
use serde_json::{Value, json};

mod app;
use app::{FailingOptimizer, TestApp};

fn server(app: impl ApiApplication, config: AxumConfig) -> TestServer {
    let (router, _) = router(app, config);
    TestServer::new(router).unwrap()
}

fn scenario() -> Value {
    json!({ "alpha": 120.0, "beta": 2.0, "c": 10.0, "F": 50.0, "pMin": 0.0, "pMax": 100.0 })
}

#[test_log::test(tokio::test)]
async fn health() {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "status": "ok" }));
}

#[rstest]
#[case::objects(json!([
    { "price": 10.0, "quantity": 100.0 },
    { "price": 20.0, "quantity": 80.0 },
    { "price": 30.0, "quantity": 60.0 },
]))]
#[case::pairs(json!([[10.0, 100.0], [20.0, 80.0], [30.0, 60.0]]))]
#[test_log::test(tokio::test)]
async fn fit_exact_line(#[case] data: Value) {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server.post("/fit").json(&json!({ "data": data })).await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "alpha": 120.0,
        "beta": 2.0,
        "intercept": 120.0,
        "slope": -2.0,
        "r2": 1.0,
        "invalidSlope": false,
        "samples": 3,
    }));
}

#[test_log::test(tokio::test)]
async fn fit_flags_increasing_demand() {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server
        .post("/fit")
        .json(&json!({ "data": [[1.0, 10.0], [2.0, 20.0]] }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["beta"], json!(-10.0));
    assert_eq!(body["invalidSlope"], json!(true));
}

#[rstest]
#[case::empty(json!({ "data": [] }))]
#[case::single(json!({ "data": [[1.0, 2.0]] }))]
#[case::constant_price(json!({ "data": [[0.1, 2.0], [0.1, 3.0], [0.1, 4.0]] }))]
#[case::negative_sample(json!({ "data": [[-1.0, 2.0], [2.0, 3.0]] }))]
#[case::not_a_number(json!({ "data": [["cheap", 2.0], [2.0, 3.0]] }))]
#[case::missing_data(json!({}))]
#[test_log::test(tokio::test)]
async fn fit_rejects_invalid_data(#[case] body: Value) {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server.post("/fit").json(&body).expect_failure().await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"].is_string());
}

#[test_log::test(tokio::test)]
async fn malformed_json_is_unprocessable() {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server
        .post("/optimize")
        .bytes("{\"alpha\": ".into())
        .content_type("application/json")
        .expect_failure()
        .await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"].is_string());
}

#[rstest]
#[test_log::test(tokio::test)]
async fn optimize_interior(
    #[values(TestApp::new(), TestApp::with_optimizer(ClarabelOptimizer::default()))]
    app: impl ApiApplication,
) {
    let server = server(app, AxumConfig::default());

    let response = server.post("/optimize").json(&scenario()).await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["pOpt"], json!(35.0));
    assert_eq!(body["qOpt"], json!(50.0));
    assert_eq!(body["revenue"], json!(1750.0));
    assert_eq!(body["profitOpt"], json!(1200.0));
    assert_eq!(body["usedBoundary"], json!(false));
    assert_eq!(body["pStar"], json!(35.0));
    assert_eq!(body["warnings"], json!([]));
    assert_eq!(
        body["derivation"]["pStarFormula"],
        json!("p* = (120.000 + 2.000·10.000) / (2·2.000) = 35.000")
    );
    assert!(body["derivation"]["objectiveLatex"].is_string());
}

#[test_log::test(tokio::test)]
async fn optimize_degenerate_demand() {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server
        .post("/optimize")
        .json(&json!({ "alpha": 120.0, "beta": 2.0, "c": 10.0, "F": 50.0, "pMin": 70.0, "pMax": 100.0 }))
        .await;
    response.assert_status_ok();

    // nothing sells above p = 60, so elasticity is undefined
    let body = response.json::<Value>();
    assert_eq!(body["qOpt"], json!(0.0));
    assert_eq!(body["elasticity"], Value::Null);

    let response = server
        .post("/optimize")
        .json(&json!({ "alpha": 10.0, "beta": -1.0, "c": 1.0, "F": 0.0, "pMin": 2.0, "pMax": 8.0 }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["pOpt"], json!(8.0));
    assert_eq!(body["usedBoundary"], json!(true));
    assert_eq!(body["pStar"], Value::Null);
    assert_eq!(body["warnings"], json!(["degenerate_demand"]));
}

#[rstest]
#[case::inverted_interval(json!({ "alpha": 120.0, "beta": 2.0, "c": 10.0, "F": 50.0, "pMin": 50.0, "pMax": 10.0 }))]
#[case::negative_cost(json!({ "alpha": 120.0, "beta": 2.0, "c": -1.0, "F": 50.0, "pMin": 0.0, "pMax": 100.0 }))]
#[case::missing_field(json!({ "alpha": 120.0, "beta": 2.0, "c": 10.0, "pMin": 0.0, "pMax": 100.0 }))]
#[test_log::test(tokio::test)]
async fn optimize_rejects_invalid_request(#[case] body: Value) {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server.post("/optimize").json(&body).expect_failure().await;
    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.json::<Value>()["error"].is_string());
}

#[test_log::test(tokio::test)]
async fn optimizer_failure_is_internal_error() {
    let server = server(
        TestApp::with_optimizer(FailingOptimizer),
        AxumConfig::default(),
    );

    let response = server
        .post("/optimize")
        .json(&scenario())
        .expect_failure()
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "backend unavailable" }));
}

#[test_log::test(tokio::test)]
async fn overflowing_solution_is_an_error_not_null() {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server
        .post("/optimize")
        .json(&json!({ "alpha": 1e308, "beta": 1.0, "c": 0.0, "F": 0.0, "pMin": 0.0, "pMax": 1e308 }))
        .expect_failure()
        .await;
    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    response.assert_json(&json!({ "error": "the revenue at the optimal price overflows" }));
}

#[test_log::test(tokio::test)]
async fn cors_allows_configured_origin() {
    let config = AxumConfig {
        allowed_origins: vec!["https://pricing.example.com".into()],
        ..Default::default()
    };
    let server = server(TestApp::new(), config);

    let response = server
        .post("/optimize")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://pricing.example.com"),
        )
        .json(&scenario())
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN),
        "https://pricing.example.com"
    );
}

#[test_log::test(tokio::test)]
async fn cors_defaults_to_any_origin() {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server
        .get("/health")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:5173"))
        .await;
    response.assert_status_ok();
    assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
}

#[test_log::test(tokio::test)]
async fn serves_openapi_document() {
    let server = server(TestApp::new(), AxumConfig::default());

    let response = server.get("/docs/api.json").await;
    response.assert_status_ok();

    let api = response.json::<Value>();
    assert_eq!(api["info"]["title"], json!("Linear Pricing API"));
    assert!(api["paths"]["/fit"]["post"].is_object());
    assert!(api["paths"]["/optimize"]["post"].is_object());

    // samples may be posted as objects or as [price, quantity] pairs
    let document = response.text();
    assert!(document.contains(r#""required":["price","quantity"]"#));
    assert!(document.contains(r#""prefixItems""#));

    let page = server.get("/docs").await;
    page.assert_status_ok();
    assert!(page.text().contains(r#"spec-url="/docs/api.json""#));
    assert!(page.text().contains("allow-try"));
}

#[test]
fn router_returns_openapi_document() {
    let (_, api) = router(TestApp::new(), AxumConfig::default());
    let paths = api.paths.unwrap();
    assert!(paths.paths.contains_key("/health"));
    assert!(paths.paths.contains_key("/fit"));
    assert!(paths.paths.contains_key("/optimize"));
}
