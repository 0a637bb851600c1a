//! XML audit documents: the full audit report, assignment certificates, the
//! fiscal depreciation report and the movement history.
//!
//! Documents are built with [`XmlDocument`], which tracks open elements so
//! every element is closed and indented consistently. Free text entered by
//! users (names, locations, responsibles, messages) goes into CDATA sections;
//! everything else is escaped character data.

use chrono::{Datelike, NaiveDate, SecondsFormat};

use inventario_core::alert::generate_alerts;
use inventario_core::asset::Asset;
use inventario_core::criticality::{Criticality, PhysicalCondition};
use inventario_core::depreciation::compute_depreciation;
use inventario_core::rates::{useful_life_years, DepreciationRateTable};
use inventario_core::summary::aggregate_summary;
use inventario_core::types::Timestamp;

use crate::config::ReportConfig;
use crate::format::{dollars, iso_date, local_date, money, percent};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const INDENT: &str = "  ";

/// Duties listed on every assignment certificate.
const RESPONSIBILITIES: [&str; 3] = [
    "Uso adecuado del activo",
    "Custodia y conservación",
    "Notificar cualquier daño o pérdida",
];

const INITIAL_ASSIGNMENT: &str = "Asignación Inicial";

// ---------------------------------------------------------------------------
// Audit report
// ---------------------------------------------------------------------------

/// Full inventory audit as of `today`.
pub fn audit_report(
    assets: &[Asset],
    rates: &DepreciationRateTable,
    today: NaiveDate,
    config: &ReportConfig,
) -> String {
    let mut doc = XmlDocument::new("auditoriaActivos");

    doc.open("informacionAuditoria");
    doc.text("numeroAuditoria", &audit_number(today));
    doc.text("fechaAuditoria", &iso_date(today));
    doc.text("auditor", &config.auditor_name);
    doc.open("periodo");
    doc.text("inicio", &iso_date(period_start(assets, today)));
    doc.text("fin", &iso_date(today));
    doc.close();
    doc.close();

    let summary = aggregate_summary(assets, rates, today);
    doc.open("resumenGeneral");
    doc.text("totalActivos", &summary.total_count.to_string());
    doc.text("valorTotalInventario", &money(summary.total_value));
    doc.text("activosAsignados", &summary.assigned_count.to_string());
    doc.text("activosDisponibles", &summary.available_count.to_string());
    doc.text("depreciacionEstimada", &money(summary.estimated_total_depreciation));
    doc.close();

    doc.open("activos");
    for (index, asset) in assets.iter().enumerate() {
        let d = compute_depreciation(asset, rates, today);
        let id = asset.id.to_string();
        let criticality = Criticality::from_price(asset.price);

        doc.open_with("activo", &[("id", id.as_str()), ("criticidad", criticality.label())]);
        doc.text("codigoPatrimonial", &patrimonial_code(asset, index));
        doc.cdata("descripcion", &asset.name);
        doc.cdata("categoria", &asset.asset_type);

        doc.open("asignacion");
        doc.cdata("responsable", &asset.responsible);
        doc.cdata("ubicacion", &asset.location);
        doc.text("fechaAsignacion", &iso_date(asset.date));
        doc.close();

        doc.open("valoracion");
        doc.text("cantidad", &asset.quantity.to_string());
        doc.text("valorUnitario", &money(asset.price));
        doc.text("valorTotal", &money(d.original_value));
        doc.text("vidaUtil", &format!("{} años", useful_life_years(d.rate)));
        doc.text("depreciacionMensual", &money(d.monthly));
        doc.text("valorActual", &money(d.current_value));
        doc.close();

        doc.text("estadoFisico", PhysicalCondition::from_depreciation(&d).label());
        doc.close();
    }
    doc.close();

    doc.open("alertas");
    for asset in assets {
        for alert in generate_alerts(asset, rates, today) {
            doc.open_with(
                "alerta",
                &[
                    ("tipo", alert.kind.label()),
                    ("prioridad", alert.priority.label()),
                ],
            );
            doc.text("activo", &asset.id.to_string());
            doc.cdata("mensaje", &alert.message);
            doc.text("fechaEmision", &iso_date(today));
            doc.close();
        }
    }
    doc.close();

    doc.open("firmas");
    doc.open("responsableInventario");
    doc.text("nombre", &config.signatory_name);
    doc.text("cargo", &config.signatory_title);
    doc.text("fecha", &iso_date(today));
    doc.close();
    doc.close();

    doc.finish()
}

/// `AUD-YYYY-MM` for the audit month.
pub fn audit_number(today: NaiveDate) -> String {
    format!("AUD-{}-{:02}", today.year(), today.month())
}

/// Oldest acquisition date, or January 1st of the current year when the
/// inventory is empty.
pub fn period_start(assets: &[Asset], today: NaiveDate) -> NaiveDate {
    assets
        .iter()
        .map(|a| a.date)
        .min()
        .or_else(|| NaiveDate::from_ymd_opt(today.year(), 1, 1))
        .unwrap_or(today)
}

/// `PAT-{acquisition year}-{position:03}`, position counted from 1.
pub fn patrimonial_code(asset: &Asset, index: usize) -> String {
    format!("PAT-{}-{:03}", asset.date.year(), index + 1)
}

// ---------------------------------------------------------------------------
// Assignment certificate
// ---------------------------------------------------------------------------

/// Certificate binding `asset` to its responsible, numbered after `issued_at`.
pub fn assignment_certificate(asset: &Asset, issued_at: Timestamp, config: &ReportConfig) -> String {
    let mut doc = XmlDocument::new("certificadoAsignacion");

    doc.text("numeroCertificado", &format!("CERT-{}", issued_at.timestamp_millis()));
    doc.text("fechaEmision", &local_date(issued_at.date_naive()));

    doc.open("institucion");
    doc.text("nombre", &config.institution_name);
    doc.text("siglas", &config.institution_acronym);
    doc.close();

    doc.open("activoAsignado");
    doc.text("codigo", &asset.id.to_string());
    doc.cdata("descripcion", &asset.name);
    doc.text("valorDeclarado", &dollars(asset.total_value()));
    doc.close();

    doc.open("responsable");
    doc.cdata("nombre", &asset.responsible);
    doc.cdata("ubicacion", &asset.location);
    doc.open("responsabilidades");
    for duty in RESPONSIBILITIES {
        doc.text("responsabilidad", duty);
    }
    doc.close();
    doc.close();

    doc.finish()
}

// ---------------------------------------------------------------------------
// Depreciation report
// ---------------------------------------------------------------------------

/// Fiscal-year depreciation report with the accumulated total.
pub fn depreciation_report(
    assets: &[Asset],
    rates: &DepreciationRateTable,
    today: NaiveDate,
) -> String {
    let mut doc = XmlDocument::new("reporteDepreciacion");
    doc.text("periodoFiscal", &today.year().to_string());
    doc.text("fechaGeneracion", &iso_date(today));

    let mut total_accumulated = 0.0;
    doc.open("activos");
    for asset in assets {
        let d = compute_depreciation(asset, rates, today);
        total_accumulated += d.accumulated;

        doc.open("activo");
        doc.text("codigo", &asset.id.to_string());
        doc.cdata("descripcion", &asset.name);
        doc.text("valorOriginal", &money(d.original_value));
        doc.text("vidaUtil", &useful_life_years(d.rate).to_string());
        doc.text("depreciacionAnual", &money(d.annual));
        doc.text("depreciacionAcumulada", &money(d.accumulated));
        doc.text("valorEnLibros", &money(d.current_value));
        doc.text("porcentajeDepreciacion", &percent(d.percentage));
        doc.close();
    }
    doc.close();
    doc.text("totalDepreciacionAcumulada", &money(total_accumulated));

    doc.finish()
}

// ---------------------------------------------------------------------------
// Movement history
// ---------------------------------------------------------------------------

/// One initial-assignment movement per asset.
pub fn movement_history(assets: &[Asset], generated_at: Timestamp) -> String {
    let mut doc = XmlDocument::new("historialMovimientos");
    doc.text(
        "fechaGeneracion",
        &generated_at.to_rfc3339_opts(SecondsFormat::Millis, true),
    );

    doc.open("movimientos");
    for asset in assets {
        doc.open("movimiento");
        doc.text("tipoMovimiento", INITIAL_ASSIGNMENT);
        doc.text("fecha", &iso_date(asset.date));
        doc.cdata("activo", &asset.name);
        doc.cdata("destino", &asset.location);
        doc.cdata("responsable", &asset.responsible);
        doc.text("estado", asset.status.label());
        doc.close();
    }
    doc.close();

    doc.finish()
}

// ---------------------------------------------------------------------------
// Document builder
// ---------------------------------------------------------------------------

/// Indented XML writer with a stack of open elements.
struct XmlDocument {
    buf: String,
    open: Vec<&'static str>,
}

impl XmlDocument {
    fn new(root: &'static str) -> Self {
        let mut doc = Self {
            buf: format!("{XML_DECLARATION}\n"),
            open: Vec::new(),
        };
        doc.open(root);
        doc
    }

    fn open(&mut self, tag: &'static str) {
        self.open_with(tag, &[]);
    }

    fn open_with(&mut self, tag: &'static str, attrs: &[(&str, &str)]) {
        self.indent();
        self.buf.push('<');
        self.buf.push_str(tag);
        for (name, value) in attrs {
            self.buf.push(' ');
            self.buf.push_str(name);
            self.buf.push_str("=\"");
            self.buf.push_str(&escape_attr(value));
            self.buf.push('"');
        }
        self.buf.push_str(">\n");
        self.open.push(tag);
    }

    fn close(&mut self) {
        if let Some(tag) = self.open.pop() {
            self.indent();
            self.buf.push_str("</");
            self.buf.push_str(tag);
            self.buf.push_str(">\n");
        }
    }

    /// Leaf element with escaped character data.
    fn text(&mut self, tag: &str, value: &str) {
        self.leaf(tag, &escape_text(value));
    }

    /// Leaf element with the value wrapped in CDATA.
    fn cdata(&mut self, tag: &str, value: &str) {
        self.leaf(tag, &cdata(value));
    }

    fn leaf(&mut self, tag: &str, content: &str) {
        self.indent();
        self.buf.push_str(&format!("<{tag}>{content}</{tag}>\n"));
    }

    fn indent(&mut self) {
        for _ in 0..self.open.len() {
            self.buf.push_str(INDENT);
        }
    }

    /// Close every open element, root included.
    fn finish(mut self) -> String {
        while !self.open.is_empty() {
            self.close();
        }
        let len = self.buf.trim_end_matches('\n').len();
        self.buf.truncate(len);
        self.buf
    }
}

/// Wrap `text` in a CDATA section, splitting any `]]>` it contains.
pub fn cdata(text: &str) -> String {
    format!("<![CDATA[{}]]>", text.replace("]]>", "]]]]><![CDATA[>"))
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;").replace('\'', "&apos;")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use inventario_core::asset::AssetStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn asset(id: i64, name: &str, price: f64, status: AssetStatus, acquired: NaiveDate) -> Asset {
        Asset {
            id,
            name: name.into(),
            asset_type: "Equipos de cómputo y software".into(),
            price,
            quantity: 1,
            status,
            responsible: "Luis Cedeño".into(),
            location: "Centro de Cómputo".into(),
            date: acquired,
        }
    }

    fn inventory() -> Vec<Asset> {
        vec![
            asset(1, "Servidor", 1500.0, AssetStatus::Available, date(2021, 3, 10)),
            asset(2, "Impresora", 300.0, AssetStatus::Assigned, date(2023, 6, 1)),
        ]
    }

    // -- audit --

    #[test]
    fn audit_header_and_period() {
        let xml = audit_report(
            &inventory(),
            &DepreciationRateTable::default(),
            date(2024, 6, 15),
            &ReportConfig::default(),
        );

        assert!(xml.starts_with(XML_DECLARATION));
        assert!(xml.ends_with("</auditoriaActivos>"));
        assert!(xml.contains("<numeroAuditoria>AUD-2024-06</numeroAuditoria>"));
        assert!(xml.contains("<auditor>Sistema Automático ULEAM</auditor>"));
        assert!(xml.contains("<inicio>2021-03-10</inicio>"));
        assert!(xml.contains("<fin>2024-06-15</fin>"));
    }

    #[test]
    fn audit_assets_carry_criticality_and_condition() {
        let xml = audit_report(
            &inventory(),
            &DepreciationRateTable::default(),
            date(2024, 6, 15),
            &ReportConfig::default(),
        );

        assert!(xml.contains(r#"<activo id="1" criticidad="Alta">"#));
        assert!(xml.contains(r#"<activo id="2" criticidad="Media">"#));
        assert!(xml.contains("<codigoPatrimonial>PAT-2021-001</codigoPatrimonial>"));
        assert!(xml.contains("<codigoPatrimonial>PAT-2023-002</codigoPatrimonial>"));
        assert!(xml.contains("<vidaUtil>3 años</vidaUtil>"));
        // Server: 39 months at 33% is 107.25%, capped at 100.
        assert!(xml.contains("<estadoFisico>Regular</estadoFisico>"));
        assert!(xml.contains("<descripcion><![CDATA[Servidor]]></descripcion>"));
    }

    #[test]
    fn audit_lists_alerts_and_signatures() {
        let xml = audit_report(
            &inventory(),
            &DepreciationRateTable::default(),
            date(2024, 6, 15),
            &ReportConfig::default(),
        );

        assert!(xml.contains(r#"<alerta tipo="Depreciación" prioridad="Alta">"#));
        assert!(xml.contains(r#"<alerta tipo="Valor" prioridad="Media">"#));
        assert!(xml.contains("<mensaje><![CDATA[Activo ha alcanzado 100% de depreciación]]></mensaje>"));
        assert!(xml.contains("<nombre>Dr. Carlos Mendoza</nombre>"));
        assert!(xml.contains("<cargo>Director Administrativo</cargo>"));
    }

    #[test]
    fn empty_audit_starts_period_at_new_year() {
        let xml = audit_report(
            &[],
            &DepreciationRateTable::default(),
            date(2024, 6, 15),
            &ReportConfig::default(),
        );
        assert!(xml.contains("<inicio>2024-01-01</inicio>"));
        assert!(xml.contains("<totalActivos>0</totalActivos>"));
        assert!(xml.contains("<activos>\n  </activos>"));
    }

    #[test]
    fn elements_are_indented_by_depth() {
        let xml = audit_report(
            &inventory(),
            &DepreciationRateTable::default(),
            date(2024, 6, 15),
            &ReportConfig::default(),
        );
        assert!(xml.contains("\n  <informacionAuditoria>\n    <numeroAuditoria>"));
        assert!(xml.contains("\n    <periodo>\n      <inicio>"));
    }

    // -- certificate --

    #[test]
    fn certificate_number_and_institution() {
        let issued_at = chrono::Utc.with_ymd_and_hms(2024, 7, 3, 10, 0, 0).unwrap();
        let config = ReportConfig {
            institution_name: "Instituto Tecnológico".into(),
            institution_acronym: "ITEC".into(),
            ..ReportConfig::default()
        };

        let xml = assignment_certificate(&inventory()[0], issued_at, &config);

        assert!(xml.contains(&format!(
            "<numeroCertificado>CERT-{}</numeroCertificado>",
            issued_at.timestamp_millis()
        )));
        assert!(xml.contains("<fechaEmision>3/7/2024</fechaEmision>"));
        assert!(xml.contains("<siglas>ITEC</siglas>"));
        assert!(xml.contains("<valorDeclarado>$1500.00</valorDeclarado>"));
        assert_eq!(xml.matches("<responsabilidad>").count(), 3);
        assert!(xml.ends_with("</certificadoAsignacion>"));
    }

    // -- depreciation / movements --

    #[test]
    fn depreciation_report_totals_accumulated() {
        let xml = depreciation_report(&inventory(), &DepreciationRateTable::default(), date(2024, 6, 15));

        assert!(xml.contains("<periodoFiscal>2024</periodoFiscal>"));
        // 1500 (capped) + 300 * 0.33 / 12 * 12.
        assert!(xml.contains("<totalDepreciacionAcumulada>1599.00</totalDepreciacionAcumulada>"));
        assert!(xml.contains("<porcentajeDepreciacion>100.00%</porcentajeDepreciacion>"));
        assert!(xml.contains("<vidaUtil>3</vidaUtil>"));
    }

    #[test]
    fn movement_history_has_one_entry_per_asset() {
        let generated_at = chrono::Utc.with_ymd_and_hms(2024, 7, 3, 10, 0, 0).unwrap();
        let xml = movement_history(&inventory(), generated_at);

        assert!(xml.contains("<fechaGeneracion>2024-07-03T10:00:00.000Z</fechaGeneracion>"));
        assert_eq!(xml.matches("<tipoMovimiento>Asignación Inicial</tipoMovimiento>").count(), 2);
        assert!(xml.contains("<estado>Asignado</estado>"));
        assert!(xml.contains("<destino><![CDATA[Centro de Cómputo]]></destino>"));
    }

    // -- escaping --

    #[test]
    fn cdata_splits_terminator() {
        assert_eq!(cdata("a]]>b"), "<![CDATA[a]]]]><![CDATA[>b]]>");
    }

    #[test]
    fn config_text_is_escaped() {
        let config = ReportConfig {
            signatory_name: "Pérez & <Asociados>".into(),
            ..ReportConfig::default()
        };
        let xml = audit_report(&[], &DepreciationRateTable::default(), date(2024, 1, 1), &config);
        assert!(xml.contains("<nombre>Pérez &amp; &lt;Asociados&gt;</nombre>"));
    }
}
