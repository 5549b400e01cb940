use std::fmt;

use thiserror::Error;

use super::dto::CreatePlantRequest;
use super::repo_types::PlantFields;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Wire name of the field, e.g. `nome`.
    pub field: &'static str,
    pub problem: FieldProblem,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.problem {
            FieldProblem::Missing => write!(f, "{} is required", self.field),
            FieldProblem::Empty => write!(f, "{} must not be empty", self.field),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("plant validation failed: {}", join(.errors))]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

fn join(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn required(field: &'static str, value: Option<String>, errors: &mut Vec<FieldError>) -> String {
    match value {
        None => {
            errors.push(FieldError {
                field,
                problem: FieldProblem::Missing,
            });
            String::new()
        }
        Some(v) if v.trim().is_empty() => {
            errors.push(FieldError {
                field,
                problem: FieldProblem::Empty,
            });
            String::new()
        }
        Some(v) => v,
    }
}

/// Check that all six plant fields are present and non-blank.
///
/// Every offending field is reported, not just the first one.
pub fn validate(req: CreatePlantRequest) -> Result<PlantFields, ValidationError> {
    let mut errors = Vec::new();
    let fields = PlantFields {
        name: required("nome", req.nome, &mut errors),
        light_level: required("luz", req.luz, &mut errors),
        watering_frequency: required("rega", req.rega, &mut errors),
        kind: required("tipo", req.tipo, &mut errors),
        description: required("descricao", req.descricao, &mut errors),
        image_url: required("imagem", req.imagem, &mut errors),
    };

    if errors.is_empty() {
        Ok(fields)
    } else {
        Err(ValidationError { errors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_request() -> CreatePlantRequest {
        CreatePlantRequest {
            nome: Some("Fern".into()),
            luz: Some("shade".into()),
            rega: Some("high".into()),
            tipo: Some("tropical".into()),
            descricao: Some("Likes humidity".into()),
            imagem: Some("https://img.example/fern.jpg".into()),
        }
    }

    #[test]
    fn accepts_complete_request() {
        let fields = validate(full_request()).expect("valid");
        assert_eq!(fields.name, "Fern");
        assert_eq!(fields.light_level, "shade");
        assert_eq!(fields.watering_frequency, "high");
        assert_eq!(fields.kind, "tropical");
        assert_eq!(fields.description, "Likes humidity");
        assert_eq!(fields.image_url, "https://img.example/fern.jpg");
    }

    #[test]
    fn reports_missing_field() {
        let mut req = full_request();
        req.imagem = None;
        let err = validate(req).unwrap_err();
        assert_eq!(
            err.errors,
            vec![FieldError {
                field: "imagem",
                problem: FieldProblem::Missing,
            }]
        );
        assert_eq!(err.to_string(), "plant validation failed: imagem is required");
    }

    #[test]
    fn blank_strings_count_as_empty() {
        let mut req = full_request();
        req.nome = Some(String::new());
        req.tipo = Some("   ".into());
        let err = validate(req).unwrap_err();
        assert_eq!(err.errors.len(), 2);
        assert!(err.errors.iter().all(|e| e.problem == FieldProblem::Empty));
        assert!(err.to_string().contains("nome must not be empty"));
        assert!(err.to_string().contains("tipo must not be empty"));
    }

    #[test]
    fn reports_every_field_of_empty_request() {
        let err = validate(CreatePlantRequest::default()).unwrap_err();
        let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, ["nome", "luz", "rega", "tipo", "descricao", "imagem"]);
    }
}
