use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::{Deserialize, Serialize};

/// Plant document as stored in the `plantas` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "luz")]
    pub light_level: String,
    #[serde(rename = "rega")]
    pub watering_frequency: String,
    #[serde(rename = "tipo")]
    pub kind: String,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "imagem")]
    pub image_url: String,
}

/// The six required fields of a plant once they passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlantFields {
    pub name: String,
    pub light_level: String,
    pub watering_frequency: String,
    pub kind: String,
    pub description: String,
    pub image_url: String,
}

impl PlantFields {
    pub fn into_plant(self, id: ObjectId) -> Plant {
        Plant {
            id: Some(id),
            name: self.name,
            light_level: self.light_level,
            watering_frequency: self.watering_frequency,
            kind: self.kind,
            description: self.description,
            image_url: self.image_url,
        }
    }
}

/// Optional list conditions, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlantFilter {
    pub search_text: Option<String>,
    pub light_level: Option<String>,
    pub watering_frequency: Option<String>,
    pub kind: Option<String>,
}

impl PlantFilter {
    pub fn is_empty(&self) -> bool {
        self.search_text.is_none()
            && self.light_level.is_none()
            && self.watering_frequency.is_none()
            && self.kind.is_none()
    }

    /// Exact-match conditions as a BSON filter. The name search is not included,
    /// it is applied with [`PlantFilter::name_matches`] after the query.
    pub fn exact_match_document(&self) -> Document {
        let mut filter = doc! {};
        if let Some(luz) = &self.light_level {
            filter.insert("luz", luz.as_str());
        }
        if let Some(rega) = &self.watering_frequency {
            filter.insert("rega", rega.as_str());
        }
        if let Some(tipo) = &self.kind {
            filter.insert("tipo", tipo.as_str());
        }
        filter
    }

    pub fn name_matches(&self, name: &str) -> bool {
        match &self.search_text {
            Some(needle) => name.to_lowercase().contains(&needle.to_lowercase()),
            None => true,
        }
    }

    pub fn matches(&self, plant: &Plant) -> bool {
        fn exact(expected: &Option<String>, actual: &str) -> bool {
            expected.as_deref().map_or(true, |e| e == actual)
        }

        exact(&self.light_level, &plant.light_level)
            && exact(&self.watering_frequency, &plant.watering_frequency)
            && exact(&self.kind, &plant.kind)
            && self.name_matches(&plant.name)
    }
}
