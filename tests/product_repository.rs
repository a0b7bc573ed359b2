use emmaus_books::domain::product::{
    Category, NewProduct, PLACEHOLDER_IMAGE, ProductListQuery, UpdateProduct,
};
use emmaus_books::repository::{
    JsonProductRepository, ProductReader, ProductWriter, RepositoryError,
};

fn repo_in(dir: &tempfile::TempDir) -> JsonProductRepository {
    JsonProductRepository::new(dir.path().join("products.json"))
}

#[test]
fn product_repository_crud() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = repo_in(&dir);

    let created = repo
        .create_product(
            &NewProduct::new(
                "Grace",
                "J. Doe",
                Category::Book,
                "A story of grace.",
                750.0,
            )
            .with_image("/uploads/grace.jpg"),
        )
        .unwrap();

    assert!(!created.id.is_empty());
    assert_eq!(created.image, "/uploads/grace.jpg");

    let fetched = repo
        .get_product_by_id(&created.id)
        .unwrap()
        .expect("created product should be readable");
    assert_eq!(fetched, created);

    let updated = repo
        .update_product(&created.id, &UpdateProduct::new().price(500.0))
        .unwrap();
    assert_eq!(updated.price, 500.0);
    assert_eq!(updated.title, created.title);
    assert_eq!(updated.author, created.author);
    assert_eq!(updated.image, created.image);
    assert_eq!(updated.created_at, created.created_at);

    repo.delete_product(&created.id).unwrap();
    assert!(repo.get_product_by_id(&created.id).unwrap().is_none());

    let err = repo
        .delete_product(&created.id)
        .expect_err("deleting a missing product should fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn missing_file_reads_as_empty_catalog() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = repo_in(&dir);

    let products = repo.list_products(ProductListQuery::new()).unwrap();
    assert!(products.is_empty());
    assert!(repo.get_product_by_id("anything").unwrap().is_none());
}

#[test]
fn unparseable_file_reads_as_empty_catalog() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("products.json");
    std::fs::write(&path, "{ not json").unwrap();

    let repo = JsonProductRepository::new(path);

    let products = repo.list_products(ProductListQuery::new()).unwrap();
    assert!(products.is_empty());
}

#[test]
fn creation_applies_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = repo_in(&dir);

    let created = repo
        .create_product(&NewProduct::new(
            "Swahili Bible",
            "Bible Society",
            Category::Bible,
            "Full translation.",
            2200.0,
        ))
        .unwrap();

    assert_eq!(created.image, PLACEHOLDER_IMAGE);
    assert!(created.in_stock);
}

#[test]
fn ids_stay_unique_within_a_millisecond() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = repo_in(&dir);

    let payload = NewProduct::new("Grace", "J. Doe", Category::Book, "A story.", 750.0);

    let ids: Vec<String> = (0..5)
        .map(|_| repo.create_product(&payload).unwrap().id)
        .collect();

    let mut deduped = ids.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(deduped.len(), ids.len());
}

#[test]
fn search_matches_title_author_and_description_case_insensitively() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = repo_in(&dir);

    let a = repo
        .create_product(&NewProduct::new(
            "Walking in Faith",
            "J. Doe",
            Category::Book,
            "Daily devotions.",
            600.0,
        ))
        .unwrap();
    let b = repo
        .create_product(&NewProduct::new(
            "Hymns of Hope",
            "Faith Kamau",
            Category::Book,
            "A hymn collection.",
            450.0,
        ))
        .unwrap();
    let c = repo
        .create_product(&NewProduct::new(
            "Study Bible",
            "Bible Society",
            Category::Bible,
            "Notes on faithfulness.",
            3000.0,
        ))
        .unwrap();
    repo.create_product(&NewProduct::new(
        "Songbook",
        "Choir Union",
        Category::Book,
        "Choruses.",
        300.0,
    ))
    .unwrap();

    let results = repo
        .list_products(ProductListQuery::new().search("FAITH"))
        .unwrap();

    let ids: Vec<&str> = results.iter().map(|product| product.id.as_str()).collect();
    assert_eq!(ids, vec![a.id.as_str(), b.id.as_str(), c.id.as_str()]);
}

#[test]
fn category_filter_is_exact() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = repo_in(&dir);

    repo.create_product(&NewProduct::new(
        "Grace",
        "J. Doe",
        Category::Book,
        "A story.",
        750.0,
    ))
    .unwrap();
    let bible = repo
        .create_product(&NewProduct::new(
            "Swahili Bible",
            "Bible Society",
            Category::Bible,
            "Full translation.",
            2200.0,
        ))
        .unwrap();

    let results = repo
        .list_products(ProductListQuery::new().category(Category::Bible))
        .unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, bible.id);
}

#[test]
fn listing_preserves_insertion_order() {
    let dir = tempfile::tempdir().expect("temp dir");
    let repo = repo_in(&dir);

    let titles = ["First", "Second", "Third"];
    for title in titles {
        repo.create_product(&NewProduct::new(
            title,
            "J. Doe",
            Category::Book,
            "A story.",
            100.0,
        ))
        .unwrap();
    }

    let listed: Vec<String> = repo
        .list_products(ProductListQuery::new())
        .unwrap()
        .into_iter()
        .map(|product| product.title)
        .collect();

    assert_eq!(listed, titles);
}
