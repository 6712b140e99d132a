use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::solver::EquationKind;

fn default_dimension() -> usize {
    2
}
fn default_hcr() -> f64 {
    1.4
}
fn default_element_num() -> usize {
    1
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct SolverParamParser {
    pub polynomial_order: usize,
    #[serde(default = "default_dimension")]
    pub dimension: usize,
    pub equation: EquationKind,
    #[serde(default)]
    pub initial_state: Option<Vec<f64>>,
    #[serde(default = "default_hcr")]
    pub hcr: f64,
    #[serde(default = "default_element_num")]
    pub element_num: usize,
}
impl SolverParamParser {
    pub fn parse(file_path: impl AsRef<Path>) -> Result<Self> {
        let file_content = fs::read_to_string(file_path)?;
        Self::parse_str(&file_content)
    }
    pub fn parse_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdError;

    #[test]
    fn test_defaults() {
        let param = SolverParamParser::parse_str(r#"{"polynomial_order": 3, "equation": "euler"}"#)
            .unwrap();
        assert_eq!(param.polynomial_order, 3);
        assert_eq!(param.dimension, 2);
        assert_eq!(param.equation, EquationKind::Euler);
        assert_eq!(param.initial_state, None);
        assert_eq!(param.hcr, 1.4);
        assert_eq!(param.element_num, 1);
    }

    #[test]
    fn test_full_file() {
        let param = SolverParamParser::parse_str(
            r#"{
                "polynomial_order": 2,
                "dimension": 2,
                "equation": "navier_stokes",
                "initial_state": [1.0, 0.2, 0.0, 2.5],
                "hcr": 1.3,
                "element_num": 16
            }"#,
        )
        .unwrap();
        assert_eq!(param.equation, EquationKind::NavierStokes);
        assert_eq!(param.initial_state, Some(vec![1.0, 0.2, 0.0, 2.5]));
        assert_eq!(param.element_num, 16);
    }

    #[test]
    fn test_unknown_equation() {
        let err = SolverParamParser::parse_str(r#"{"polynomial_order": 3, "equation": "mhd"}"#)
            .unwrap_err();
        assert!(matches!(err, SdError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SolverParamParser::parse("does/not/exist.json").unwrap_err();
        assert!(matches!(err, SdError::Io(_)));
    }
}
