//! Tests for the catalog module.

use rand::{rngs::StdRng, SeedableRng};
use tempfile::TempDir;

use super::*;
use crate::{
    error::CatalogError,
    models::{Author, Category, MealType, ModeConstraints, Origin, PlanDuration, PlanLocation, PriceRange},
    params::{CreateItem, DeleteItem, ItemDetails, ItemRef, ListItems, SetPreferences, UpdateItem},
};

/// Helper function to create a test catalog
async fn create_test_catalog() -> (TempDir, Catalog) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let catalog = CatalogBuilder::new()
        .with_database_path(&db_path)
        .build()
        .await
        .expect("Failed to create catalog");
    (temp_dir, catalog)
}

fn plan_params(title: &str, minutes: u32, car_needed: bool) -> CreateItem {
    CreateItem {
        title: title.to_string(),
        author: Some(Author::Sergio),
        notes: None,
        links: vec![],
        time_las_carreras: minutes,
        time_portu: minutes + 10,
        car_needed,
        is_favorite: false,
        details: ItemDetails::Plan {
            price: 10.0,
            location: PlanLocation::City,
            duration: PlanDuration::Short,
        },
    }
}

fn comer_params(title: &str, meals: &[MealType]) -> CreateItem {
    CreateItem {
        title: title.to_string(),
        author: Some(Author::Nerea),
        notes: None,
        links: vec![],
        time_las_carreras: 10,
        time_portu: 10,
        car_needed: false,
        is_favorite: false,
        details: ItemDetails::Comer {
            price_range: PriceRange::Mid,
            meal_types: meals.to_vec(),
        },
    }
}

#[tokio::test]
async fn test_create_and_list_newest_first() {
    let (_temp_dir, catalog) = create_test_catalog().await;

    let first = catalog
        .create_item(&plan_params("Bolera", 10, false))
        .await
        .expect("Failed to create item");
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let second = catalog
        .create_item(&plan_params("Karaoke", 10, false))
        .await
        .expect("Failed to create item");
    catalog
        .create_item(&comer_params("Asador", &[MealType::Lunch]))
        .await
        .expect("Failed to create item");

    let plans = catalog.list_items(Category::Plan).await.unwrap();
    let ids: Vec<&str> = plans.iter().map(|i| i.id()).collect();
    assert_eq!(ids, [second.id(), first.id()]);

    let comer = catalog.list_items(Category::Comer).await.unwrap();
    assert_eq!(comer.len(), 1);
}

#[tokio::test]
async fn test_create_uses_default_author_preference() {
    let (_temp_dir, catalog) = create_test_catalog().await;

    let mut params = plan_params("Paseo", 5, false);
    params.author = None;
    let err = catalog.create_item(&params).await.unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput { .. }));
    assert!(catalog.list_items(Category::Plan).await.unwrap().is_empty());

    catalog
        .set_preferences(&SetPreferences {
            default_author: Some(Author::Nerea),
            default_origin: None,
        })
        .await
        .unwrap();
    let item = catalog.create_item(&params).await.unwrap();
    assert_eq!(item.base().created_by, Author::Nerea);
}

#[tokio::test]
async fn test_edit_preserves_identity() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let item = catalog
        .create_item(&plan_params("Museo", 20, false))
        .await
        .unwrap();

    let edited = catalog
        .edit_item(&UpdateItem {
            id: item.id().to_string(),
            title: Some("Museo de Bellas Artes".to_string()),
            car_needed: Some(true),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(edited.id(), item.id());
    assert_eq!(edited.base().created_at, item.base().created_at);
    assert_eq!(edited.title(), "Museo de Bellas Artes");

    let stored = catalog.get_item(item.id()).await.unwrap().unwrap();
    assert_eq!(stored, edited);
}

#[tokio::test]
async fn test_edit_missing_item() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let err = catalog
        .edit_item(&UpdateItem {
            id: "missing".to_string(),
            title: Some("x".to_string()),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::ItemNotFound { .. }));
}

#[tokio::test]
async fn test_toggles() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let item = catalog
        .create_item(&plan_params("Cine", 5, false))
        .await
        .unwrap();
    let item_ref = ItemRef {
        id: item.id().to_string(),
    };

    let fav = catalog.toggle_favorite(&item_ref).await.unwrap();
    assert!(fav.base().is_favorite);

    let done = catalog.toggle_done(&item_ref).await.unwrap();
    assert!(done.base().is_done);
    let done_at = done.base().completed_at.expect("completion stamp");
    assert!(done_at >= done.base().created_at);

    let reopened = catalog.toggle_done(&item_ref).await.unwrap();
    assert!(!reopened.base().is_done);
    assert!(reopened.base().completed_at.is_none());
    assert!(reopened.base().is_favorite);
}

#[tokio::test]
async fn test_remove_requires_confirmation() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let item = catalog
        .create_item(&plan_params("Rocódromo", 15, false))
        .await
        .unwrap();

    let err = catalog
        .remove_item(&DeleteItem {
            id: item.id().to_string(),
            confirmed: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidInput { .. }));
    assert!(catalog.get_item(item.id()).await.unwrap().is_some());

    let deleted = catalog
        .remove_item(&DeleteItem {
            id: item.id().to_string(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert_eq!(deleted.as_ref().map(|i| i.id()), Some(item.id()));
    assert!(catalog.get_item(item.id()).await.unwrap().is_none());

    let again = catalog
        .remove_item(&DeleteItem {
            id: item.id().to_string(),
            confirmed: true,
        })
        .await
        .unwrap();
    assert!(again.is_none());
}

#[tokio::test]
async fn test_list_grouped_with_search() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let mut params = plan_params("Playa", 25, false);
    params.notes = Some("Llevar sombrilla".to_string());
    let beach = catalog.create_item(&params).await.unwrap();
    catalog
        .create_item(&plan_params("Bolos", 5, false))
        .await
        .unwrap();

    let groups = catalog
        .list_grouped(&ListItems {
            category: Category::Plan,
            search: Some("SOMBRILLA".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups.pending[0].id(), beach.id());
}

#[tokio::test]
async fn test_list_or_empty_on_store_failure() {
    let (temp_dir, catalog) = create_test_catalog().await;
    catalog
        .create_item(&plan_params("Bolos", 5, false))
        .await
        .unwrap();

    // Corrupt the stored document so decoding fails.
    let conn = rusqlite::Connection::open(temp_dir.path().join("test.db")).unwrap();
    conn.execute("UPDATE items SET document = 'not json'", [])
        .unwrap();

    assert!(catalog.list_items(Category::Plan).await.is_err());
    assert!(catalog.list_items_or_empty(Category::Plan).await.is_empty());
}

#[tokio::test]
async fn test_decide_accept_marks_active() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let item = catalog
        .create_item(&plan_params("Picnic", 10, false))
        .await
        .unwrap();

    let constraints = catalog.default_constraints(Category::Plan).await.unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    let proposal = catalog.propose(&constraints, &mut rng).await.unwrap();
    assert_eq!(proposal.item().id(), item.id());

    let accepted = catalog.accept_proposal(proposal).await.unwrap();
    assert!(accepted.base().is_active);
    assert!(!accepted.base().is_done);

    let groups = catalog
        .list_grouped(&ListItems {
            category: Category::Plan,
            search: None,
        })
        .await
        .unwrap();
    assert_eq!(groups.active.len(), 1);
    assert!(groups.pending.is_empty());
}

#[tokio::test]
async fn test_reroll_persists_nothing() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let item = catalog
        .create_item(&plan_params("Picnic", 10, false))
        .await
        .unwrap();

    let constraints = catalog.default_constraints(Category::Plan).await.unwrap();
    let mut rng = StdRng::seed_from_u64(2);
    let proposal = catalog.propose(&constraints, &mut rng).await.unwrap();
    let back = proposal.reroll();
    assert_eq!(back, constraints);

    let stored = catalog.get_item(item.id()).await.unwrap().unwrap();
    assert_eq!(stored, item);
}

#[tokio::test]
async fn test_decide_without_candidates() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    catalog
        .create_item(&plan_params("Excursión", 60, true))
        .await
        .unwrap();

    let constraints = catalog.default_constraints(Category::Plan).await.unwrap();
    let report = catalog.candidate_report(&constraints).await.unwrap();
    assert_eq!(report.count, 0);
    assert_eq!(report.bounds.max_travel_minutes, 90);

    let mut rng = StdRng::seed_from_u64(3);
    let err = catalog.decide(&constraints, &mut rng).await.unwrap_err();
    assert!(matches!(err, CatalogError::NoCandidates));
}

#[tokio::test]
async fn test_default_constraints_use_origin_preference() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    catalog
        .set_preferences(&SetPreferences {
            default_author: None,
            default_origin: Some(Origin::Portu),
        })
        .await
        .unwrap();

    let constraints = catalog.default_constraints(Category::Comer).await.unwrap();
    assert_eq!(constraints.origin, Origin::Portu);
    assert!(matches!(constraints.mode, ModeConstraints::Comer(_)));
}

#[tokio::test]
async fn test_meal_filter_scenario() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let both = catalog
        .create_item(&comer_params("Casa Pepe", &[MealType::Lunch, MealType::Dinner]))
        .await
        .unwrap();
    catalog
        .create_item(&comer_params("Vermut", &[MealType::Bar]))
        .await
        .unwrap();

    let mut constraints = catalog.default_constraints(Category::Comer).await.unwrap();
    if let ModeConstraints::Comer(comer) = &mut constraints.mode {
        comer.meal_types.insert(MealType::Dinner);
    }

    let report = catalog.candidate_report(&constraints).await.unwrap();
    assert_eq!(report.count, 1);

    let mut rng = StdRng::seed_from_u64(4);
    let decision = catalog.decide(&constraints, &mut rng).await.unwrap();
    assert_eq!(decision.winner.id(), both.id());
}

#[tokio::test]
async fn test_export_import_round_trip() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    catalog
        .create_item(&plan_params("Cine", 5, false))
        .await
        .unwrap();
    catalog
        .create_item(&comer_params("Asador", &[MealType::Dinner]))
        .await
        .unwrap();

    let doc = catalog.export_backup().await.unwrap();
    let text = doc.to_json_pretty().unwrap();

    let (_other_dir, restored) = create_test_catalog().await;
    let summary = restored.import_backup(&text).await.unwrap();
    assert_eq!(summary.planes, 1);
    assert_eq!(summary.comer, 1);

    let again = restored.export_backup().await.unwrap();
    assert_eq!(again.planes, doc.planes);
    assert_eq!(again.comer, doc.comer);
}

#[tokio::test]
async fn test_invalid_import_changes_nothing() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let item = catalog
        .create_item(&plan_params("Cine", 5, false))
        .await
        .unwrap();

    let err = catalog
        .import_backup(r#"{"planes": []}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidBackup(_)));

    let items = catalog.list_all_items().await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id(), item.id());
}

#[tokio::test]
async fn test_statistics() {
    let (_temp_dir, catalog) = create_test_catalog().await;
    let item = catalog
        .create_item(&plan_params("Cine", 50, false))
        .await
        .unwrap();
    catalog
        .toggle_done(&ItemRef {
            id: item.id().to_string(),
        })
        .await
        .unwrap();

    let stats = catalog.statistics().await.unwrap();
    assert_eq!(stats.total_items, 1);
    assert_eq!(stats.sergio_count, 1);
    // (50 + 60) / 2
    assert_eq!(stats.taximeter_minutes, 55);
    assert_eq!(stats.total_unlocked(), 3);
}
