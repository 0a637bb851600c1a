//! HTTP-level integration tests for CSV and XML report downloads.

mod common;

use axum::http::{header, StatusCode};
use common::{body_json, body_text, get};
use inventario_core::clock::{Clock, FixedClock};

const BOM: char = '\u{FEFF}';

fn header_value(response: &axum::http::Response<axum::body::Body>, name: header::HeaderName) -> String {
    response
        .headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

#[tokio::test]
async fn inventory_csv_is_an_attachment_with_bom() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/csv/inventory").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE),
        "text/csv; charset=utf-8"
    );
    assert_eq!(
        header_value(&response, header::CONTENT_DISPOSITION),
        "attachment; filename=\"reporte_inventario_2024-06-15.csv\""
    );

    let body = body_text(response).await;
    assert!(body.starts_with(BOM));
    let lines: Vec<&str> = body.trim_start_matches(BOM).lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(",1,33%,1340.00,660.00"), "{}", lines[1]);
}

#[tokio::test]
async fn csv_report_honours_filter_query() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/csv/depreciation?status=Disponible").await;

    let body = body_text(response).await;
    let lines: Vec<&str> = body.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("2,Servidor Rack,"));
    assert!(lines[1].ends_with(",100.00%"));
}

#[tokio::test]
async fn status_csv_groups_values() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let body = body_text(get(app, "/api/v1/reports/csv/status").await).await;

    let lines: Vec<&str> = body.trim_start_matches(BOM).lines().collect();
    assert_eq!(lines[0], "Estado,Cantidad de Activos,Valor Total,Porcentaje");
    assert_eq!(lines[1], "Asignado,1,2000.00,57.14%");
    assert_eq!(lines[2], "Disponible,1,1500.00,42.86%");
}

#[tokio::test]
async fn unknown_csv_kind_is_a_bad_request() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/csv/pdf").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn asset_sheet_honours_as_of() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/csv/assets/1?as_of=2026-06-15").await;

    assert_eq!(
        header_value(&response, header::CONTENT_DISPOSITION),
        "attachment; filename=\"reporte_activo_1_2026-06-15.csv\""
    );
    let body = body_text(response).await;
    assert!(body.contains("Depreciación Acumulada,1980.00"));
    assert!(body.contains("Valor Actual Unitario,10.00"));
}

#[tokio::test]
async fn asset_sheet_for_missing_asset_returns_404() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/csv/assets/99").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn csv_certificate_is_dated_by_clock() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let body = body_text(get(app, "/api/v1/reports/csv/certificates/1").await).await;

    assert!(body.contains("Nombre del Activo,Laptop Dell"));
    assert!(body.contains("Fecha de Certificación,15/6/2024"));
}

// ---------------------------------------------------------------------------
// XML
// ---------------------------------------------------------------------------

#[tokio::test]
async fn audit_xml_uses_configured_signatory() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/xml/audit").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        header_value(&response, header::CONTENT_TYPE),
        "application/xml; charset=utf-8"
    );
    assert_eq!(
        header_value(&response, header::CONTENT_DISPOSITION),
        "attachment; filename=\"auditoria_2024-06-15.xml\""
    );

    let xml = body_text(response).await;
    assert!(xml.contains("<numeroAuditoria>AUD-2024-06</numeroAuditoria>"));
    assert!(xml.contains("<inicio>2021-03-10</inicio>"));
    assert!(xml.contains(r#"<activo id="2" criticidad="Alta">"#));
    assert!(xml.contains("<nombre>Dr. Carlos Mendoza</nombre>"));
    assert!(xml.contains("<depreciacionEstimada>2160.00</depreciacionEstimada>"));
}

#[tokio::test]
async fn depreciation_xml_is_named_after_fiscal_year() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/xml/depreciation").await;

    assert_eq!(
        header_value(&response, header::CONTENT_DISPOSITION),
        "attachment; filename=\"depreciacion_2024.xml\""
    );
    let xml = body_text(response).await;
    assert!(xml.contains("<totalDepreciacionAcumulada>2160.00</totalDepreciacionAcumulada>"));
}

#[tokio::test]
async fn movement_history_is_stamped_by_clock() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let xml = body_text(get(app, "/api/v1/reports/xml/movements").await).await;

    assert!(xml.contains("<fechaGeneracion>2024-06-15T00:00:00.000Z</fechaGeneracion>"));
    assert_eq!(xml.matches("<movimiento>").count(), 2);
}

#[tokio::test]
async fn xml_certificate_number_comes_from_clock() {
    let app = common::build_test_app(common::test_state(common::sample_inventory()));
    let response = get(app, "/api/v1/reports/xml/certificates/2").await;

    assert_eq!(
        header_value(&response, header::CONTENT_DISPOSITION),
        "attachment; filename=\"certificado_2.xml\""
    );
    let millis = FixedClock::at_date(common::today()).now().timestamp_millis();
    let xml = body_text(response).await;
    assert!(xml.contains(&format!("<numeroCertificado>CERT-{millis}</numeroCertificado>")));
    assert!(xml.contains("<siglas>ULEAM</siglas>"));
    assert!(xml.contains("<valorDeclarado>$1500.00</valorDeclarado>"));
}

#[tokio::test]
async fn unknown_xml_kind_is_a_bad_request() {
    let app = common::build_test_app(common::test_state(Vec::new()));
    let response = get(app, "/api/v1/reports/xml/balance").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
