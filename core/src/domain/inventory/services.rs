use std::sync::Arc;

use tokio::{sync::Mutex, task};
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp},
    food_detection::entities::{DetectionSource, FoodDetectionResult},
    inventory::{
        entities::{AddOutcome, InventoryFilter, InventoryItem},
        ports::InventoryStore,
    },
    nutrition::{NutrientInfo, get_nutrient_data},
};

pub struct InventoryService<S> {
    store: Arc<S>,
    /// Serializes read-modify-write cycles and remembers the last issued id.
    last_id: Mutex<i64>,
}

impl<S: InventoryStore + 'static> InventoryService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            last_id: Mutex::new(0),
        }
    }

    async fn load_or_empty(&self) -> Vec<InventoryItem> {
        let store = Arc::clone(&self.store);
        match task::spawn_blocking(move || store.load()).await {
            Ok(Ok(items)) => items,
            Ok(Err(e)) => {
                tracing::error!(error = %e, "Error loading inventory, treating as empty");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(error = %e, "Inventory load task failed, treating as empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, items: Vec<InventoryItem>) -> Result<(), CoreError> {
        let store = Arc::clone(&self.store);
        task::spawn_blocking(move || store.save(&items))
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Inventory save task failed");
                CoreError::InternalServerError
            })?
            .map_err(|e| {
                tracing::error!(error = %e, "Error saving inventory");
                CoreError::from(e)
            })
    }

    pub async fn list(&self) -> Vec<InventoryItem> {
        let _guard = self.last_id.lock().await;
        self.load_or_empty().await
    }

    pub async fn filter(&self, filter: &InventoryFilter) -> Vec<InventoryItem> {
        self.list()
            .await
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    #[instrument(skip(self, nutrients))]
    pub async fn add(&self, name: &str, nutrients: NutrientInfo) -> Result<AddOutcome, CoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(CoreError::Invalid);
        }
        if !nutrients.has_valid_amounts() {
            tracing::warn!("Rejected nutrients with negative or non-finite amounts");
            return Err(CoreError::Invalid);
        }

        let mut last_id = self.last_id.lock().await;
        let mut items = self.load_or_empty().await;

        if items.iter().any(|item| item.has_name(name)) {
            tracing::info!("Food already in inventory");
            return Ok(AddOutcome::AlreadyPresent);
        }

        let (now, millis) = generate_timestamp();
        let newest = items.iter().map(|item| item.id).max().unwrap_or(0);
        let id = millis.max(*last_id + 1).max(newest + 1);

        let item = InventoryItem {
            id,
            name: name.to_string(),
            date_added: now.to_rfc3339(),
            nutrients,
        };
        items.push(item.clone());

        self.save(items).await?;
        *last_id = id;

        tracing::info!(id, "Food added to inventory");
        Ok(AddOutcome::Added(item))
    }

    /// Remote results carry real nutrition; local labels are looked up in the nutrient table.
    pub async fn add_detection(
        &self,
        detection: &FoodDetectionResult,
    ) -> Result<AddOutcome, CoreError> {
        let food = detection.primary_food();
        let nutrients = match detection.source() {
            DetectionSource::Remote => NutrientInfo::from(food),
            DetectionSource::Model | DetectionSource::Heuristic => get_nutrient_data(&food.name),
        };

        self.add(&food.name, nutrients).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, id: i64) -> Result<bool, CoreError> {
        let _guard = self.last_id.lock().await;
        let mut items = self.load_or_empty().await;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Ok(false);
        }

        self.save(items).await?;
        tracing::info!("Food removed from inventory");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex as StdMutex;

    use super::*;
    use crate::domain::{
        food_detection::entities::FoodItem,
        inventory::{
            entities::PersistenceError,
            ports::MockInventoryStore,
        },
    };

    #[derive(Default)]
    struct MemoryStore {
        items: StdMutex<Vec<InventoryItem>>,
    }

    impl InventoryStore for MemoryStore {
        fn load(&self) -> Result<Vec<InventoryItem>, PersistenceError> {
            Ok(self.items.lock().unwrap().clone())
        }

        fn save(&self, items: &[InventoryItem]) -> Result<(), PersistenceError> {
            *self.items.lock().unwrap() = items.to_vec();
            Ok(())
        }
    }

    fn nutrients(calories: f64) -> NutrientInfo {
        NutrientInfo {
            calories,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_add_is_idempotent_ignoring_case() {
        let service = InventoryService::new(MemoryStore::default());

        let first = service.add("Apple", nutrients(52.0)).await.unwrap();
        assert!(matches!(first, AddOutcome::Added(ref item) if item.name == "Apple"));

        let second = service.add("  aPPLE ", nutrients(60.0)).await.unwrap();
        assert_eq!(second, AddOutcome::AlreadyPresent);

        let items = service.list().await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].nutrients.calories, 52.0);
    }

    #[tokio::test]
    async fn test_ids_strictly_increase() {
        let service = InventoryService::new(MemoryStore::default());
        for name in ["rice", "pasta", "eggs", "tofu"] {
            service.add(name, nutrients(1.0)).await.unwrap();
        }

        let ids: Vec<i64> = service.list().await.iter().map(|item| item.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]), "{ids:?}");
    }

    #[tokio::test]
    async fn test_blank_name_is_invalid() {
        let service = InventoryService::new(MemoryStore::default());
        assert!(matches!(
            service.add("   ", nutrients(1.0)).await,
            Err(CoreError::Invalid)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_does_not_write() {
        let mut store = MockInventoryStore::new();
        store.expect_load().returning(|| {
            Ok(vec![InventoryItem {
                id: 7,
                name: "banana".to_string(),
                date_added: "2025-01-01T00:00:00+00:00".to_string(),
                nutrients: NutrientInfo::default(),
            }])
        });
        store.expect_save().never();

        let service = InventoryService::new(store);
        let outcome = service.add("Banana", nutrients(89.0)).await.unwrap();
        assert_eq!(outcome, AddOutcome::AlreadyPresent);
    }

    #[tokio::test]
    async fn test_load_error_is_treated_as_empty() {
        let mut store = MockInventoryStore::new();
        store
            .expect_load()
            .returning(|| Err(PersistenceError::Serialization("eof".to_string())));

        let service = InventoryService::new(store);
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_error_is_reported() {
        let mut store = MockInventoryStore::new();
        store.expect_load().returning(|| Ok(Vec::new()));
        store
            .expect_save()
            .times(1)
            .returning(|_| Err(PersistenceError::Io("disk full".to_string())));

        let service = InventoryService::new(store);
        let result = service.add("kale", nutrients(49.0)).await;
        assert!(matches!(result, Err(CoreError::Persistence(PersistenceError::Io(_)))));
    }

    #[tokio::test]
    async fn test_invalid_amounts_are_rejected_without_touching_the_store() {
        let service = InventoryService::new(MemoryStore::default());
        service.add("apple", nutrients(52.0)).await.unwrap();

        let negative = service.add("mystery", nutrients(-500.0)).await;
        assert!(matches!(negative, Err(CoreError::Invalid)));

        let nan = NutrientInfo {
            protein: f64::NAN,
            ..nutrients(10.0)
        };
        assert!(matches!(service.add("mystery", nan).await, Err(CoreError::Invalid)));

        let names: Vec<String> = service.list().await.into_iter().map(|item| item.name).collect();
        assert_eq!(names, vec!["apple"]);
    }

    #[tokio::test]
    async fn test_remove_by_id() {
        let service = InventoryService::new(MemoryStore::default());
        let AddOutcome::Added(item) = service.add("salmon", nutrients(208.0)).await.unwrap() else {
            panic!("expected item to be added");
        };

        assert!(!service.remove(item.id + 1).await.unwrap());
        assert!(service.remove(item.id).await.unwrap());
        assert!(service.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_add_detection_copies_remote_nutrients() {
        let service = InventoryService::new(MemoryStore::default());
        let mut food = FoodItem::unknown_nutrition("poke bowl");
        food.calories = 540.0;
        food.dietary_suitability = Some(vec!["Gluten-Free".to_string()]);
        let detection = FoodDetectionResult::new(vec![food], DetectionSource::Remote).unwrap();

        let AddOutcome::Added(item) = service.add_detection(&detection).await.unwrap() else {
            panic!("expected item to be added");
        };
        assert_eq!(item.name, "poke bowl");
        assert_eq!(item.nutrients.calories, 540.0);
        assert_eq!(item.nutrients.dietary_suitability, vec!["Gluten-Free"]);
    }

    #[tokio::test]
    async fn test_add_detection_uses_table_for_local_labels() {
        let service = InventoryService::new(MemoryStore::default());
        let detection = FoodDetectionResult::from_label("carrot", 0.8, DetectionSource::Heuristic);

        let AddOutcome::Added(item) = service.add_detection(&detection).await.unwrap() else {
            panic!("expected item to be added");
        };
        assert_eq!(item.nutrients.calories, 41.0);
    }

    #[tokio::test]
    async fn test_filter_applies_search_then_diet() {
        let service = InventoryService::new(MemoryStore::default());
        service.add("broccoli", get_nutrient_data("broccoli")).await.unwrap();
        service.add("pasta", get_nutrient_data("pasta")).await.unwrap();
        service.add("chicken", get_nutrient_data("chicken")).await.unwrap();

        let keto = service
            .filter(&InventoryFilter {
                search: None,
                diet: Some("keto".to_string()),
            })
            .await;
        let names: Vec<&str> = keto.iter().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["broccoli", "chicken"]);

        let all = service
            .filter(&InventoryFilter {
                search: Some("PA".to_string()),
                diet: Some("all".to_string()),
            })
            .await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "pasta");
    }
}
