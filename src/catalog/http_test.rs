use super::*;

fn client(base: &str) -> HttpCatalog {
    HttpCatalog::new(base, BackendTimeouts { request_secs: 5, connect_secs: 1 }).unwrap()
}

// =============================================================================
// endpoint
// =============================================================================

#[test]
fn endpoint_joins_segments_on_bare_host() {
    let url = client("http://localhost:8000").endpoint(&["categories"]);
    assert_eq!(url.as_str(), "http://localhost:8000/categories");
}

#[test]
fn endpoint_keeps_base_path_prefix() {
    let url = client("http://backend.test/api").endpoint(&["products", "p1"]);
    assert_eq!(url.as_str(), "http://backend.test/api/products/p1");
}

#[test]
fn endpoint_percent_encodes_category_names() {
    let url = client("http://localhost:8000").endpoint(&["categories", "Wedding Bands/Men", "products"]);
    assert_eq!(url.as_str(), "http://localhost:8000/categories/Wedding%20Bands%2FMen/products");
}

#[test]
fn new_rejects_non_base_url() {
    let err = HttpCatalog::new("mailto:shop@example.test", BackendTimeouts { request_secs: 1, connect_secs: 1 })
        .err()
        .unwrap();
    assert!(matches!(err, CatalogError::HttpClientBuild(_)));
}

// =============================================================================
// parse_body / parse_optional_body
// =============================================================================

#[test]
fn parse_body_decodes_categories_envelope() {
    let body: CategoriesBody = parse_body(200, r#"{"categories":["Rings","Necklaces"]}"#).unwrap();
    assert_eq!(body.categories, vec!["Rings", "Necklaces"]);
}

#[test]
fn parse_body_server_error_is_status_error() {
    let err = parse_body::<CategoriesBody>(500, "boom").unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 500 }));
}

#[test]
fn parse_body_not_found_is_error_for_lists() {
    let err = parse_body::<ProductsBody>(404, r#"{"detail":"Not Found"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 404 }));
}

#[test]
fn parse_body_wrong_shape_is_decode_error() {
    let err = parse_body::<ProductsBody>(200, r#"{"items":[]}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Decode(_)));
}

#[test]
fn parse_optional_body_not_found_is_none() {
    let product = parse_optional_body::<Product>(404, r#"{"detail":"Product not found"}"#).unwrap();
    assert!(product.is_none());
}

#[test]
fn parse_optional_body_bad_request_is_error() {
    let err = parse_optional_body::<Product>(400, r#"{"detail":"Invalid product ID"}"#).unwrap_err();
    assert!(matches!(err, CatalogError::Status { status: 400 }));
}

#[test]
fn parse_optional_body_success_decodes_product() {
    let product = parse_optional_body::<Product>(200, r#"{"_id":"p9","title":"Pendant"}"#)
        .unwrap()
        .unwrap();
    assert_eq!(product.id, "p9");
    assert_eq!(product.title, "Pendant");
}

#[test]
fn parse_body_product_page_envelope() {
    let page: ProductPage =
        parse_body(200, r#"{"data":[{"id":"a"},{"id":"b"}],"page":2,"size":2,"total":6,"total_pages":3}"#)
            .unwrap();
    assert_eq!(page.data.len(), 2);
    assert_eq!(page.current_page(), 2);
    assert_eq!(page.page_count(), 3);
}

#[test]
fn parse_body_page_envelope_without_data_is_decode_error() {
    let result = parse_body::<ProductPage>(200, "{}");
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[test]
fn parse_body_page_envelope_with_null_data_is_decode_error() {
    let result = parse_body::<ProductPage>(200, r#"{"data":null,"page":1,"total_pages":1}"#);
    assert!(matches!(result, Err(CatalogError::Decode(_))));
}

#[test]
fn parse_body_subcategories_error_formats_with_status() {
    let err = parse_body::<SubcategoriesBody>(502, "").unwrap_err();
    assert_eq!(err.to_string(), "backend response error: status 502");
}
