//! Institution details printed on audit reports and certificates.

use serde::Deserialize;

/// Names and titles stamped on generated documents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportConfig {
    pub institution_name: String,
    pub institution_acronym: String,
    /// Shown as the auditor of generated audit reports.
    pub auditor_name: String,
    /// Person signing off the inventory.
    pub signatory_name: String,
    pub signatory_title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            institution_name: "Universidad Laica Eloy Alfaro de Manabí".into(),
            institution_acronym: "ULEAM".into(),
            auditor_name: "Sistema Automático ULEAM".into(),
            signatory_name: "Dr. Carlos Mendoza".into(),
            signatory_title: "Director Administrativo".into(),
        }
    }
}

impl ReportConfig {
    /// Load from environment variables, keeping the default for any unset one.
    ///
    /// | Env Var               | Default                                   |
    /// |-----------------------|-------------------------------------------|
    /// | `INSTITUTION_NAME`    | `Universidad Laica Eloy Alfaro de Manabí` |
    /// | `INSTITUTION_ACRONYM` | `ULEAM`                                   |
    /// | `AUDITOR_NAME`        | `Sistema Automático ULEAM`                |
    /// | `SIGNATORY_NAME`      | `Dr. Carlos Mendoza`                      |
    /// | `SIGNATORY_TITLE`     | `Director Administrativo`                 |
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let var = |key: &str, default: String| std::env::var(key).unwrap_or(default);

        Self {
            institution_name: var("INSTITUTION_NAME", defaults.institution_name),
            institution_acronym: var("INSTITUTION_ACRONYM", defaults.institution_acronym),
            auditor_name: var("AUDITOR_NAME", defaults.auditor_name),
            signatory_name: var("SIGNATORY_NAME", defaults.signatory_name),
            signatory_title: var("SIGNATORY_TITLE", defaults.signatory_title),
        }
    }
}
