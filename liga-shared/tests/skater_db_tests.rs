/// Database-backed tests for the skater registration reconciler
///
/// These need a running PostgreSQL instance; point `DATABASE_URL` at a
/// scratch database and run:
///
/// ```bash
/// cargo test -p liga-shared -- --ignored
/// ```

use liga_shared::db::{
    migrations::run_migrations,
    pool::{create_pool, DatabaseConfig},
};
use liga_shared::models::skater::{Branch, CreateSkater, Estado, Skater, UpdateSkater};
use sqlx::PgPool;

async fn test_pool() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for database tests");
    let pool = create_pool(DatabaseConfig {
        url,
        ..Default::default()
    })
    .await
    .expect("database should be reachable");

    run_migrations(&pool).await.expect("migrations should apply");
    pool
}

fn payload(number_id: i64) -> CreateSkater {
    CreateSkater {
        number_id,
        numero_competencia: None,
        first_name: "Ana".to_string(),
        second_name: None,
        first_surname: "Diaz".to_string(),
        second_surname: None,
        birth_date: "01/01/2000".to_string(),
        branch: Branch::Femenino,
        estado: None,
        categoria: None,
    }
}

async fn reset(pool: &PgPool, number_id: i64) {
    sqlx::query("DELETE FROM skaters WHERE number_id = $1")
        .bind(number_id)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn first_registration_is_nuevo_even_if_payload_says_otherwise() {
    let pool = test_pool().await;
    reset(&pool, 910_001).await;

    let mut data = payload(910_001);
    data.estado = Some(Estado::Afiliado); // ignored

    let skater = Skater::register(&pool, data).await.unwrap();
    assert_eq!(skater.estado, Estado::Nuevo);

    reset(&pool, 910_001).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn re_registration_flips_estado_and_keeps_every_other_field() {
    let pool = test_pool().await;
    reset(&pool, 910_002).await;

    let first = Skater::register(&pool, payload(910_002)).await.unwrap();
    assert_eq!(first.estado, Estado::Nuevo);

    // Same number, different everything else
    let mut second = payload(910_002);
    second.first_name = "Otra".to_string();
    second.first_surname = "Persona".to_string();
    second.birth_date = "31/12/1990".to_string();
    second.branch = Branch::Masculino;

    let updated = Skater::register(&pool, second).await.unwrap();

    assert_eq!(updated.id, first.id);
    assert_eq!(updated.estado, Estado::Afiliado);
    assert_eq!(updated.first_name, "Ana");
    assert_eq!(updated.first_surname, "Diaz");
    assert_eq!(updated.birth_date, "01/01/2000");
    assert_eq!(updated.branch, Branch::Femenino);

    reset(&pool, 910_002).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn concurrent_registration_of_the_same_new_number_yields_one_row() {
    let pool = test_pool().await;
    reset(&pool, 910_003).await;

    let (a, b) = tokio::join!(
        Skater::register(&pool, payload(910_003)),
        Skater::register(&pool, payload(910_003)),
    );
    a.unwrap();
    b.unwrap();

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM skaters WHERE number_id = $1")
        .bind(910_003i64)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 1);

    reset(&pool, 910_003).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn update_changes_allow_listed_fields_only() {
    let pool = test_pool().await;
    reset(&pool, 910_004).await;

    let created = Skater::register(&pool, payload(910_004)).await.unwrap();

    let updated = Skater::update_by_number(
        &pool,
        910_004,
        UpdateSkater {
            first_name: "Marta".to_string(),
            second_name: Some("Lucía".to_string()),
            first_surname: "Gómez".to_string(),
            second_surname: None,
            birth_date: "02/02/2002".to_string(),
            branch: Branch::Femenino,
        },
    )
    .await
    .unwrap()
    .expect("skater should exist");

    assert_eq!(updated.first_name, "Marta");
    assert_eq!(updated.birth_date, "02/02/2002");
    // Immutable through updates:
    assert_eq!(updated.number_id, created.number_id);
    assert_eq!(updated.estado, created.estado);
    assert_eq!(updated.numero_competencia, created.numero_competencia);
    assert_eq!(updated.categoria, created.categoria);

    reset(&pool, 910_004).await;
}

#[tokio::test]
#[ignore = "requires a PostgreSQL database (DATABASE_URL)"]
async fn update_and_delete_of_unknown_number_report_a_miss() {
    let pool = test_pool().await;
    reset(&pool, 910_005).await;

    let updated = Skater::update_by_number(
        &pool,
        910_005,
        UpdateSkater {
            first_name: "Nadie".to_string(),
            second_name: None,
            first_surname: "Nunca".to_string(),
            second_surname: None,
            birth_date: "01/01/2000".to_string(),
            branch: Branch::Masculino,
        },
    )
    .await
    .unwrap();
    assert!(updated.is_none());

    assert!(!Skater::delete_by_number(&pool, 910_005).await.unwrap());
}
