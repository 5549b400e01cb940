use thiserror::Error;
use tracing::info;

use super::dto::CreatePlantRequest;
use super::repo::{PlantRepository, RepoError};
use super::repo_types::{Plant, PlantFilter};
use super::validation::{validate, ValidationError};

#[derive(Debug, Error)]
pub enum PlantError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    DataAccess(#[from] RepoError),
}

pub async fn list_plants(
    repo: &dyn PlantRepository,
    filter: &PlantFilter,
) -> Result<Vec<Plant>, RepoError> {
    let plants = repo.list(filter).await?;
    info!(count = plants.len(), filtered = !filter.is_empty(), "plants listed");
    Ok(plants)
}

/// Validate the request and persist it. Nothing reaches the repository when
/// validation fails.
pub async fn create_plant(
    repo: &dyn PlantRepository,
    req: CreatePlantRequest,
) -> Result<Plant, PlantError> {
    let fields = validate(req)?;
    let plant = repo.insert(fields).await?;
    info!(id = ?plant.id, name = %plant.name, "plant created");
    Ok(plant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plants::repo::InMemoryPlantRepository;

    fn request() -> CreatePlantRequest {
        CreatePlantRequest {
            nome: Some("Aloe".into()),
            luz: Some("full-sun".into()),
            rega: Some("low".into()),
            tipo: Some("succulent".into()),
            descricao: Some("Medicinal succulent".into()),
            imagem: Some("https://img.example/aloe.jpg".into()),
        }
    }

    #[tokio::test]
    async fn created_plant_shows_up_in_list() {
        let repo = InMemoryPlantRepository::new();
        let created = create_plant(&repo, request()).await.expect("create");
        assert!(created.id.is_some());

        let all = list_plants(&repo, &PlantFilter::default()).await.unwrap();
        assert_eq!(all, vec![created]);
    }

    #[tokio::test]
    async fn each_missing_field_is_rejected_without_persisting() {
        let repo = InMemoryPlantRepository::new();
        let clears: [fn(&mut CreatePlantRequest); 6] = [
            |r| r.nome = None,
            |r| r.luz = None,
            |r| r.rega = None,
            |r| r.tipo = None,
            |r| r.descricao = None,
            |r| r.imagem = None,
        ];

        for clear in clears {
            let mut req = request();
            clear(&mut req);
            let err = create_plant(&repo, req).await.unwrap_err();
            assert!(matches!(err, PlantError::Validation(_)));
        }
        assert_eq!(repo.len().await, 0);
    }
}
