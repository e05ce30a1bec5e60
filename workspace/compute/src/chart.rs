use common::{ChartSeries, ForecastResult};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Lays a forecast out on one shared date axis.
///
/// The axis is the historical dates followed by the predicted dates. The
/// historical line has no values over the forecast, and the predicted line and
/// its band have no values over the history.
pub fn build_chart_series(forecast: &ForecastResult) -> ChartSeries {
    let history_len = forecast.historical_data.len();
    let total = history_len + forecast.predicted_data.len();

    let mut series = ChartSeries {
        labels: Vec::with_capacity(total),
        historical: Vec::with_capacity(total),
        predicted: Vec::with_capacity(total),
        lower_bound: Vec::with_capacity(total),
        upper_bound: Vec::with_capacity(total),
    };

    for point in &forecast.historical_data {
        series.labels.push(point.date);
        series.historical.push(to_value(point.price));
        series.predicted.push(None);
        series.lower_bound.push(None);
        series.upper_bound.push(None);
    }

    for point in &forecast.predicted_data {
        series.labels.push(point.date);
        series.historical.push(None);
        series.predicted.push(to_value(point.price));
        series.lower_bound.push(to_value(point.lower_bound));
        series.upper_bound.push(to_value(point.upper_bound));
    }

    series
}

fn to_value(price: Decimal) -> Option<f64> {
    price.to_f64()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::SeriesGenerator;
    use crate::random::FixedRandom;
    use chrono::NaiveDate;

    #[test]
    fn test_chart_series_alignment() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 15).unwrap();
        let forecast = SeriesGenerator::default()
            .generate_forecast("AAPL", 7, today, &mut FixedRandom::midpoint())
            .unwrap();

        let series = build_chart_series(&forecast);

        assert_eq!(series.len(), 97);
        assert_eq!(series.historical.len(), 97);
        assert_eq!(series.predicted.len(), 97);
        assert_eq!(series.lower_bound.len(), 97);
        assert_eq!(series.upper_bound.len(), 97);

        assert_eq!(series.labels[0], NaiveDate::from_ymd_opt(2026, 7, 17).unwrap());
        assert_eq!(series.labels[89], NaiveDate::from_ymd_opt(2026, 10, 14).unwrap());
        assert_eq!(series.labels[90], NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        assert!((series.historical[89].unwrap() - 193.35).abs() < 1e-9);
        assert_eq!(series.historical[90], None);
        assert!(series.predicted[..90].iter().all(Option::is_none));
        assert!(series.lower_bound[..90].iter().all(Option::is_none));
        assert!(series.predicted[90..].iter().all(Option::is_some));
        assert!((series.upper_bound[90].unwrap() - 195.19).abs() < 1e-9);
    }
}
