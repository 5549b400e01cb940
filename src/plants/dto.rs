use serde::{Deserialize, Serialize};

use super::repo_types::{Plant, PlantFilter};

/// Query string of `GET /api/plants`.
#[derive(Debug, Default, Deserialize)]
pub struct PlantQuery {
    pub busca: Option<String>,
    pub luz: Option<String>,
    pub rega: Option<String>,
    pub tipo: Option<String>,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

impl From<PlantQuery> for PlantFilter {
    fn from(q: PlantQuery) -> Self {
        Self {
            search_text: non_empty(q.busca),
            light_level: non_empty(q.luz),
            watering_frequency: non_empty(q.rega),
            kind: non_empty(q.tipo),
        }
    }
}

/// Body of `POST /api/plants`. Fields stay optional so that validation can
/// report every missing one instead of failing on the first.
#[derive(Debug, Default, Deserialize)]
pub struct CreatePlantRequest {
    pub nome: Option<String>,
    pub luz: Option<String>,
    pub rega: Option<String>,
    pub tipo: Option<String>,
    pub descricao: Option<String>,
    pub imagem: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PlantResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub nome: String,
    pub luz: String,
    pub rega: String,
    pub tipo: String,
    pub descricao: String,
    pub imagem: String,
}

impl From<Plant> for PlantResponse {
    fn from(p: Plant) -> Self {
        Self {
            id: p.id.map(|id| id.to_hex()).unwrap_or_default(),
            nome: p.name,
            luz: p.light_level,
            rega: p.watering_frequency,
            tipo: p.kind,
            descricao: p.description,
            imagem: p.image_url,
        }
    }
}

/// Error envelope returned by both endpoints.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn empty_query_values_are_ignored() {
        let filter: PlantFilter = PlantQuery {
            busca: Some(String::new()),
            luz: Some("sol-pleno".into()),
            rega: None,
            tipo: Some(String::new()),
        }
        .into();
        assert_eq!(
            filter,
            PlantFilter {
                light_level: Some("sol-pleno".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn response_uses_hex_id_and_wire_names() {
        let id = ObjectId::new();
        let resp = PlantResponse::from(Plant {
            id: Some(id),
            name: "Aloe".into(),
            light_level: "sol-pleno".into(),
            watering_frequency: "baixa".into(),
            kind: "suculenta".into(),
            description: "desc".into(),
            image_url: "https://img.example/aloe.jpg".into(),
        });
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["nome"], "Aloe");
        assert_eq!(json["rega"], "baixa");
        assert_eq!(json["tipo"], "suculenta");
        assert_eq!(json.as_object().unwrap().len(), 7);
    }
}
