#![allow(dead_code)]

use biok_core::{
    models::{Author, MealType, PlanDuration, PlanLocation, PriceRange},
    params::{CreateItem, ItemDetails},
    Catalog, CatalogBuilder,
};
use tempfile::TempDir;

/// Helper function to create a test catalog
pub async fn create_test_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}

pub fn plan(title: &str, las_carreras: u32, portu: u32, car_needed: bool) -> CreateItem {
    CreateItem {
        title: title.to_string(),
        author: Some(Author::Sergio),
        notes: None,
        links: vec![],
        time_las_carreras: las_carreras,
        time_portu: portu,
        car_needed,
        is_favorite: false,
        details: ItemDetails::Plan {
            price: 0.0,
            location: PlanLocation::Nature,
            duration: PlanDuration::HalfDay,
        },
    }
}

pub fn comer(title: &str, range: PriceRange, meals: &[MealType]) -> CreateItem {
    CreateItem {
        title: title.to_string(),
        author: Some(Author::Nerea),
        notes: None,
        links: vec![],
        time_las_carreras: 10,
        time_portu: 15,
        car_needed: false,
        is_favorite: false,
        details: ItemDetails::Comer {
            price_range: range,
            meal_types: meals.to_vec(),
        },
    }
}
