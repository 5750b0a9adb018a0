use marca_models::domain::prelude::{NewMarca, UpdateMarca};
use marca_repository::{MarcaRepository, SqlMarcaRepository};
use marca_storage::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

async fn setup() -> SqlMarcaRepository {
    // A pooled `sqlite::memory:` would open one database per connection;
    // pin the pool to a single connection so every query sees the same db.
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1);
    let db = Database::connect(opts).await.expect("in-memory sqlite");
    Migrator::up(&db, None).await.expect("migrations");
    SqlMarcaRepository::new(db)
}

fn marca(name: &str, description: Option<&str>) -> NewMarca {
    NewMarca {
        name: name.to_string(),
        description: description.map(str::to_string),
    }
}

#[tokio::test]
async fn create_assigns_unique_stable_ids() {
    let repo = setup().await;

    let a = repo.create(marca("Adidas", None)).await.unwrap();
    let b = repo.create(marca("Nike", Some("Deportes"))).await.unwrap();
    assert_ne!(a.id, b.id);
    assert!(a.deleted_at.is_none());

    let fetched = repo.find_one(a.id).await.unwrap().unwrap();
    assert_eq!(fetched.id, a.id);
    assert_eq!(fetched.name, "Adidas");
    assert_eq!(fetched.description, None);
}

#[tokio::test]
async fn find_one_unknown_id_is_absent() {
    let repo = setup().await;
    assert!(repo.find_one(9999).await.unwrap().is_none());
    assert!(repo.find_one_including_deleted(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn soft_delete_hides_record_from_default_lookups() {
    let repo = setup().await;
    let created = repo.create(marca("Puma", None)).await.unwrap();

    repo.soft_delete(created.id).await.unwrap();

    assert!(repo.find_one(created.id).await.unwrap().is_none());
    assert!(repo.find_all().await.unwrap().is_empty());

    let deleted = repo.find_soft_deleted().await.unwrap();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].id, created.id);
    assert!(deleted[0].deleted_at.is_some());

    let via_explicit = repo
        .find_one_including_deleted(created.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(via_explicit.name, "Puma");
}

#[tokio::test]
async fn restore_makes_record_visible_again() {
    let repo = setup().await;
    let created = repo.create(marca("Reebok", None)).await.unwrap();

    repo.soft_delete(created.id).await.unwrap();
    let restored = repo.restore(created.id).await.unwrap();
    assert!(restored.deleted_at.is_none());

    assert!(repo.find_one(created.id).await.unwrap().is_some());
    assert!(repo.find_soft_deleted().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_merges_only_supplied_fields() {
    let repo = setup().await;
    let created = repo
        .create(marca("Adidas", Some("Ropa deportiva")))
        .await
        .unwrap();

    let updated = repo
        .update(
            created.id,
            UpdateMarca {
                name: None,
                description: Some("Calzado".to_string()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Adidas");
    assert_eq!(updated.description.as_deref(), Some("Calzado"));

    // Visible to a subsequent read, fully applied.
    let fetched = repo.find_one(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.name, "Adidas");
    assert_eq!(fetched.description.as_deref(), Some("Calzado"));
}

#[tokio::test]
async fn mutations_on_unknown_ids_fail() {
    let repo = setup().await;

    assert!(repo
        .update(
            42,
            UpdateMarca {
                name: Some("x".to_string()),
                description: None,
            },
        )
        .await
        .is_err());
    assert!(repo.soft_delete(42).await.is_err());
    assert!(repo.restore(42).await.is_err());
}

#[tokio::test]
async fn soft_delete_twice_fails_second_time() {
    let repo = setup().await;
    let created = repo.create(marca("Fila", None)).await.unwrap();

    repo.soft_delete(created.id).await.unwrap();
    assert!(repo.soft_delete(created.id).await.is_err());
}

#[tokio::test]
async fn pagination_slices_active_records() {
    let repo = setup().await;
    for i in 1..=5 {
        repo.create(marca(&format!("Marca {i}"), None)).await.unwrap();
    }

    let (page1, total) = repo.find_page(1, 2).await.unwrap();
    assert_eq!(total, 5);
    assert_eq!(page1.len(), 2);
    assert_eq!(page1[0].name, "Marca 1");

    let (page3, _) = repo.find_page(3, 2).await.unwrap();
    assert_eq!(page3.len(), 1);
    assert_eq!(page3[0].name, "Marca 5");

    // Soft-deleted records drop out of pages and totals.
    repo.soft_delete(page1[0].id).await.unwrap();
    let (_, total_after) = repo.find_page(1, 2).await.unwrap();
    assert_eq!(total_after, 4);
}
