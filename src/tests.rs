#[cfg(test)]
mod integration_tests {
    use std::time::{Duration, Instant};

    use crate::schemas::{ApiResponse, ErrorResponse, HealthResponse};
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_with_latency};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{ChartSeries, ForecastResult, ForecastSummary, PriceDirection, TickerBasePrice};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_health_check() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: HealthResponse = response.json();
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_get_forecast_default_horizon() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/forecast/AAPL").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastResult> = response.json();
        assert!(body.success);
        assert_eq!(body.message, "Forecast generated successfully");

        let forecast = body.data;
        assert_eq!(forecast.ticker, "AAPL");
        assert_eq!(forecast.historical_data.len(), 90);
        assert_eq!(forecast.predicted_data.len(), 14);
        assert_eq!(forecast.latest_price, forecast.historical_data[89].price);

        let floor = Decimal::new(50, 0);
        for point in &forecast.predicted_data {
            assert!(point.price >= floor);
            assert!(point.lower_bound <= point.price);
            assert!(point.price <= point.upper_bound);
        }
        for pair in forecast.historical_data.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[tokio::test]
    async fn test_get_forecast_normalizes_ticker() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/forecast/tsla").add_query_param("days", 3).await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastResult> = response.json();
        assert_eq!(body.data.ticker, "TSLA");
        assert_eq!(body.data.predicted_data.len(), 3);
    }

    #[tokio::test]
    async fn test_seeded_forecasts_are_identical() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let first = server
            .get("/api/v1/forecast/GOOG")
            .add_query_param("days", 7)
            .add_query_param("seed", 1234)
            .await;
        let second = server
            .get("/api/v1/forecast/GOOG")
            .add_query_param("days", 7)
            .add_query_param("seed", 1234)
            .await;

        first.assert_status(StatusCode::OK);
        second.assert_status(StatusCode::OK);
        let first: ApiResponse<ForecastResult> = first.json();
        let second: ApiResponse<ForecastResult> = second.json();
        assert_eq!(first.data.latest_price, second.data.latest_price);
        let prices = |f: &ForecastResult| -> Vec<Decimal> {
            f.predicted_data.iter().map(|p| p.price).collect()
        };
        assert_eq!(prices(&first.data), prices(&second.data));
    }

    #[tokio::test]
    async fn test_get_forecast_rejects_out_of_range_days() {
        let server = TestServer::new(setup_test_app()).unwrap();

        for days in [0, 31] {
            let response = server
                .get("/api/v1/forecast/AAPL")
                .add_query_param("days", days)
                .await;
            response.assert_status(StatusCode::BAD_REQUEST);
        }

        let response = server.get("/api/v1/forecast/AAPL").add_query_param("days", 30).await;
        response.assert_status(StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_forecast_rejects_blank_ticker() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/forecast/%20%20").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: ErrorResponse = response.json();
        assert_eq!(body.code, "INVALID_ARGUMENT");
        assert!(!body.success);
    }

    #[tokio::test]
    async fn test_get_forecast_summary() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .get("/api/v1/forecast/AAPL/summary")
            .add_query_param("days", 10)
            .add_query_param("seed", 7)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastSummary> = response.json();
        assert!(body.success);

        let summary = body.data;
        assert_eq!(summary.ticker, "AAPL");
        // prices travel as JSON numbers
        let drift = (summary.change - (summary.predicted_end_price - summary.latest_price)).abs();
        assert!(drift < Decimal::new(1, 3));
        let expected = if summary.change >= Decimal::ZERO {
            PriceDirection::Up
        } else {
            PriceDirection::Down
        };
        assert_eq!(summary.direction, expected);
    }

    #[tokio::test]
    async fn test_get_forecast_chart() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server
            .get("/api/v1/forecast/MSFT/chart")
            .add_query_param("days", 5)
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ChartSeries> = response.json();
        let series = body.data;
        assert_eq!(series.len(), 95);
        assert_eq!(series.historical.len(), 95);
        assert_eq!(series.upper_bound.len(), 95);
        assert!(series.historical[89].is_some());
        assert!(series.historical[90].is_none());
        assert!(series.predicted[0].is_none());
        assert!(series.predicted[94].is_some());
    }

    #[tokio::test]
    async fn test_get_tickers() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api/v1/tickers").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<TickerBasePrice>> = response.json();
        assert!(body.success);
        let symbols: Vec<&str> = body.data.iter().map(|t| t.ticker.as_str()).collect();
        assert_eq!(symbols, vec!["AAPL", "GOOG", "TSLA"]);
        assert_eq!(body.data[2].base_price, Decimal::new(250, 0));
    }

    #[tokio::test]
    async fn test_simulated_latency_is_applied() {
        let latency = Duration::from_millis(50);
        let server = TestServer::new(setup_test_app_with_latency(latency)).unwrap();

        let started = Instant::now();
        let response = server.get("/api/v1/forecast/AAPL").add_query_param("days", 1).await;

        response.assert_status(StatusCode::OK);
        assert!(started.elapsed() >= latency);
    }

    #[tokio::test]
    async fn test_openapi_document_lists_forecast_routes() {
        let server = TestServer::new(setup_test_app()).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let document: serde_json::Value = response.json();
        let paths = document["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/v1/forecast/{ticker}"));
        assert!(paths.contains_key("/api/v1/forecast/{ticker}/summary"));
        assert!(paths.contains_key("/api/v1/forecast/{ticker}/chart"));
        assert!(paths.contains_key("/api/v1/tickers"));
    }

    #[tokio::test]
    async fn test_prometheus_metrics_endpoint() {
        let server = TestServer::new(setup_test_app()).unwrap();

        // the metrics layer is compiled out of test builds
        let response = server.get("/metrics").await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
