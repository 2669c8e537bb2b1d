use super::*;
use serde_json::json;

#[test]
fn full_record_decodes_underscore_id_and_details_order() {
    let product: Product = serde_json::from_value(json!({
        "_id": "665f1c",
        "title": "Solitaire Ring",
        "description": "A classic.",
        "images": ["ring-1.jpg", "ring-2.jpg"],
        "category": "Rings",
        "subcategory": "Engagement",
        "url": "https://shop.example/ring",
        "details": { "Metal": "Platinum", "Diamond": "Color:White; Clarity:VS1", "Carat": 1.5 }
    }))
    .unwrap();

    assert_eq!(product.id, "665f1c");
    assert_eq!(product.images, vec!["ring-1.jpg", "ring-2.jpg"]);
    assert_eq!(product.subcategory.as_deref(), Some("Engagement"));
    let keys: Vec<&str> = product.details.as_ref().unwrap().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["Metal", "Diamond", "Carat"]);
}

#[test]
fn summary_record_decodes_plain_id_and_single_image() {
    let product: Product = serde_json::from_value(json!({
        "id": "a1",
        "title": "Hoops",
        "image": "hoop.jpg",
        "category": "Earrings",
        "subcategory": "Gold"
    }))
    .unwrap();

    assert_eq!(product.id, "a1");
    assert!(product.images.is_empty());
    assert_eq!(product.cover_image(), Some("hoop.jpg"));
}

#[test]
fn nulls_and_missing_fields_fall_back_to_empty() {
    let product: Product = serde_json::from_value(json!({
        "id": "x",
        "title": null,
        "description": null,
        "images": null,
        "image": null,
        "category": null,
        "subcategory": null,
        "details": null
    }))
    .unwrap();

    assert_eq!(product.title, "");
    assert_eq!(product.description, "");
    assert!(product.images.is_empty());
    assert_eq!(product.cover_image(), None);
    assert_eq!(product.subcategory, None);
    assert_eq!(product.details, None);
    assert_eq!(product.url, "");
}

#[test]
fn cover_image_prefers_summary_cover_then_first_image() {
    let mut product = Product { images: vec!["first.jpg".into(), "second.jpg".into()], ..Product::default() };
    assert_eq!(product.cover_image(), Some("first.jpg"));

    product.cover = Some("cover.jpg".into());
    assert_eq!(product.cover_image(), Some("cover.jpg"));

    product.cover = Some(String::new());
    assert_eq!(product.cover_image(), Some("first.jpg"));
}

#[test]
fn product_page_zero_metadata_reads_as_one() {
    let page: ProductPage = serde_json::from_value(json!({
        "data": [], "page": 0, "size": 20, "total": 0, "total_pages": 0
    }))
    .unwrap();
    assert_eq!(page.current_page(), 1);
    assert_eq!(page.page_count(), 1);
}

#[test]
fn product_page_reads_backend_envelope() {
    let page: ProductPage = serde_json::from_value(json!({
        "data": [{ "id": "p1", "subcategory": "Bands" }],
        "page": 3,
        "size": 20,
        "total": 95,
        "total_pages": 5
    }))
    .unwrap();
    assert_eq!(page.data.len(), 1);
    assert_eq!(page.current_page(), 3);
    assert_eq!(page.page_count(), 5);
    assert_eq!(page.total, 95);
}

#[test]
fn product_page_without_data_is_rejected() {
    let result = serde_json::from_value::<ProductPage>(json!({ "page": 1, "total_pages": 1 }));
    assert!(result.is_err());
}

#[test]
fn product_page_missing_metadata_still_reads_as_one() {
    let page: ProductPage = serde_json::from_value(json!({ "data": [] })).unwrap();
    assert_eq!(page.current_page(), 1);
    assert_eq!(page.page_count(), 1);
}
