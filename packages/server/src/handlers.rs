//! HTTP handler functions for the Klima Insights API.
//!
//! Chart handlers always answer 200: an unresolvable selection is a
//! `{"status":"noSelection"}` body, not an HTTP error.

use actix_web::{HttpResponse, web};
use klima_analytics::charts;
use klima_analytics_models::{
    BiodiversityMapParams, DisasterBarParams, DisasterLineParams, DisasterMapParams,
    TemperatureBarParams, TemperatureMapParams,
};
use klima_server_models::{ApiHealth, ApiOptions};

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/options`
///
/// Lists the labels every control accepts.
pub async fn options(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiOptions::new(state.settings.mapbox_token.clone()))
}

/// `GET /api/temperature/bar?islandGroup=`
pub async fn temperature_bar(
    state: web::Data<AppState>,
    params: web::Query<TemperatureBarParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(charts::temperature_bar(&state.dataset, &params))
}

/// `GET /api/temperature/map?decade=`
pub async fn temperature_map(
    state: web::Data<AppState>,
    params: web::Query<TemperatureMapParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(charts::temperature_map(&state.dataset, &params))
}

/// `GET /api/disaster/map?division=&disasterType=`
pub async fn disaster_map(
    state: web::Data<AppState>,
    params: web::Query<DisasterMapParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(charts::disaster_map(&state.dataset, &params))
}

/// `GET /api/disaster/bar?division=&disasterType=&islandGroup=`
pub async fn disaster_bar(
    state: web::Data<AppState>,
    params: web::Query<DisasterBarParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(charts::disaster_bar(&state.dataset, &params))
}

/// `GET /api/disaster/line?division=&place=&lng=&lat=`
///
/// `place` is a clicked region code or province name; `lng`/`lat` is a
/// clicked map point.
pub async fn disaster_line(
    state: web::Data<AppState>,
    params: web::Query<DisasterLineParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(charts::disaster_line(&state.dataset, &params))
}

/// `GET /api/biodiversity/map?category=&islandGroup=`
pub async fn biodiversity_map(
    state: web::Data<AppState>,
    params: web::Query<BiodiversityMapParams>,
) -> HttpResponse {
    HttpResponse::Ok().json(charts::biodiversity_map(&state.dataset, &params))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, http::StatusCode, test};
    use klima_dataset::fixtures;
    use serde_json::Value;

    use crate::{AppState, Settings, configure};

    fn state() -> actix_web::web::Data<AppState> {
        let dataset = fixtures::dataset();
        let settings = Settings::from_lookup(|key| {
            (key == "MAPBOX_TOKEN").then(|| "pk.test".to_string())
        });
        actix_web::web::Data::new(AppState {
            dataset: Arc::new(dataset),
            settings,
        })
    }

    async fn get_json(uri: &str) -> Value {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get().uri(uri).to_request();
        test::call_and_read_body_json(&app, req).await
    }

    #[actix_web::test]
    async fn health_reports_version() {
        let body = get_json("/api/health").await;
        assert_eq!(body["healthy"], true);
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[actix_web::test]
    async fn options_pass_through_map_token() {
        let body = get_json("/api/options").await;
        assert_eq!(body["mapboxToken"], "pk.test");
        assert_eq!(body["disasterTypes"][0], "Total Disaster");
    }

    #[actix_web::test]
    async fn disaster_map_resolves_region_column() {
        let body = get_json("/api/disaster/map?division=Region&disasterType=Storm").await;
        assert_eq!(body["status"], "resolved");
        assert_eq!(body["column"], "Region_storm");
        assert_eq!(body["rows"].as_array().unwrap().len(), 5);
    }

    #[actix_web::test]
    async fn unknown_division_is_still_ok() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/disaster/bar?division=Unknown&disasterType=Storm&islandGroup=Luzon")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "noSelection");
        assert!(body["reason"].as_str().unwrap().contains("Unknown"));
    }

    #[actix_web::test]
    async fn disaster_bar_accepts_encoded_labels() {
        let body = get_json(
            "/api/disaster/bar?division=Province&disasterType=Total%20Disaster&islandGroup=Luzon",
        )
        .await;
        assert_eq!(body["status"], "resolved");
        assert_eq!(body["column"], "Total Disaster Count");
        assert_eq!(body["rows"][0]["label"], "Abra");
    }

    #[actix_web::test]
    async fn disaster_line_point_click() {
        let body = get_json("/api/disaster/line?division=Region&lng=120.75&lat=16.5").await;
        assert_eq!(body["status"], "resolved");
        assert_eq!(body["focus"], "CAR");
        assert_eq!(body["focusSource"], "click");
    }

    #[actix_web::test]
    async fn temperature_bar_reference_line() {
        let body = get_json("/api/temperature/bar?islandGroup=Luzon").await;
        assert_eq!(body["status"], "resolved");
        assert_eq!(body["referenceDecade"], "1960s");
        assert_eq!(body["referenceMax"], 26.9);
    }

    #[actix_web::test]
    async fn temperature_map_and_biodiversity_map() {
        let body = get_json("/api/temperature/map?decade=2020s").await;
        assert_eq!(body["column"], "2020s");

        let body = get_json("/api/biodiversity/map?category=Birds").await;
        assert_eq!(body["column"], "Bird Count");
        assert_eq!(body["unmatchedTemperature"][0], "Palawan");
    }

    #[actix_web::test]
    async fn malformed_query_is_bad_request() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;
        let req = test::TestRequest::get()
            .uri("/api/disaster/line?division=Region&lng=east")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }
}
