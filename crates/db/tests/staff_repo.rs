use sqlx::PgPool;
use staffdesk_db::models::staff::{CreateStaff, StaffInfo};
use staffdesk_db::repositories::StaffRepo;

fn librarian(username: &str) -> CreateStaff {
    CreateStaff {
        username: username.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        name: "Library Admin".to_string(),
        role: "librarian".to_string(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_find_by_username(pool: PgPool) {
    let created = StaffRepo::create(&pool, &librarian("libadmin"))
        .await
        .unwrap();
    assert!(created.id > 0);

    let found = StaffRepo::find_by_username(&pool, "libadmin")
        .await
        .unwrap()
        .expect("staff should be found");
    assert_eq!(found.id, created.id);
    assert_eq!(found.password_hash, "$argon2id$placeholder");
    assert_eq!(found.role, "librarian");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_unknown_username_returns_none(pool: PgPool) {
    let found = StaffRepo::find_by_username(&pool, "ghost").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_username_lookup_is_case_sensitive(pool: PgPool) {
    StaffRepo::create(&pool, &librarian("libadmin")).await.unwrap();
    let found = StaffRepo::find_by_username(&pool, "LibAdmin").await.unwrap();
    assert!(found.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_username_rejected(pool: PgPool) {
    StaffRepo::create(&pool, &librarian("libadmin")).await.unwrap();
    let result = StaffRepo::create(&pool, &librarian("libadmin")).await;
    assert!(result.is_err(), "usernames must be unique");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_staff_info_excludes_hash(pool: PgPool) {
    let staff = StaffRepo::create(&pool, &librarian("desk")).await.unwrap();
    let info = StaffInfo::from(&staff);
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["username"], "desk");
    assert!(json.get("password_hash").is_none());
}
