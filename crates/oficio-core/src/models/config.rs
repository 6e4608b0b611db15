//! Configuration structures for letter generation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the oficio pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OficioConfig {
    /// Institutional fields printed on the letter.
    pub letter: LetterTemplate,

    /// Search period defaults.
    pub search: SearchConfig,

    /// Output settings.
    pub output: OutputConfig,
}

/// Institutional text of the letter.
///
/// Defaults reproduce the 28º DIP letterhead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LetterTemplate {
    /// Code printed right-aligned on the first line.
    pub document_code: String,

    /// Centered bold header, one entry per line.
    pub header_lines: Vec<String>,

    /// Appended to the letter number in the title.
    pub title_suffix: String,

    /// City and state opening the date line.
    pub city: String,

    /// Reply addresses line.
    pub reply_email: String,

    /// Signatory name.
    pub signatory_name: String,

    /// Signatory title.
    pub signatory_title: String,

    /// Addressee line.
    pub addressee: String,

    /// Default font face, applied at document scope.
    pub font_name: String,

    /// Default font size in points.
    pub font_size_pt: usize,
}

impl Default for LetterTemplate {
    fn default() -> Self {
        Self {
            document_code: "2500210467".to_string(),
            header_lines: vec![
                "GOVERNO DO ESTADO DO AMAZONAS".to_string(),
                "POLÍCIA CIVIL".to_string(),
                "28º DISTRITO INTEGRADO DE POLÍCIA - MANAUS - AM".to_string(),
            ],
            title_suffix: "/GDT/28ºDIP".to_string(),
            city: "Manaus/AM".to_string(),
            reply_email: "E-mail para resposta: 28dip@policiacivil.am.gov.br / elson_brito@policiacivil.am.gov.br"
                .to_string(),
            signatory_name: "Dr. Maurício Ramos Viçoso Silva".to_string(),
            signatory_title: "Delegado(a) de Polícia".to_string(),
            addressee: "Ilmo. Sr. Gerente da Empresa VIVO / TIM / CLARO".to_string(),
            font_name: "Arial".to_string(),
            font_size_pt: 11,
        }
    }
}

/// Defaults for the search period when the operator omits it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Days before the generation date used as the default start.
    pub default_window_days: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_window_days: 30,
        }
    }
}

/// Output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the letter is written to.
    pub output_dir: PathBuf,

    /// Also write a CSV summary of the extracted records.
    pub write_summary: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            write_summary: false,
        }
    }
}

impl OficioConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: OficioConfig =
            serde_json::from_str(r#"{"letter": {"signatory_name": "Dra. Fulana"}}"#).unwrap();

        assert_eq!(config.letter.signatory_name, "Dra. Fulana");
        assert_eq!(config.letter.document_code, "2500210467");
        assert_eq!(config.letter.header_lines.len(), 3);
        assert_eq!(config.search.default_window_days, 30);
        assert!(!config.output.write_summary);
    }

    #[test]
    fn test_config_roundtrip_through_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let mut config = OficioConfig::default();
        config.search.default_window_days = 60;
        config.save(&path).unwrap();

        let loaded = OficioConfig::from_file(&path).unwrap();
        assert_eq!(loaded.search.default_window_days, 60);
        assert_eq!(loaded.letter, LetterTemplate::default());
    }

    #[test]
    fn test_invalid_json_is_invalid_data() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = OficioConfig::from_file(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }
}
