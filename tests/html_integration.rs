#![cfg(feature = "html")]

use microdata::html::{items_from_document, items_from_html, parse_document};
use microdata::{ExtractOptions, ItemDocument, PropertyValue, Uri};
use serde_json::json;

const PERSON_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Jane Doe</title>
    <script>var tracking = "ignored";</script>
</head>
<body>
<div itemscope itemtype="http://schema.org/Person">
    <span itemprop="name">Jane Doe</span>
    <img src="janedoe.jpg" itemprop="image" alt="Photo of Jane Doe"/>

    <span itemprop="jobTitle">Professor</span>
    <div itemprop="address" itemscope itemtype="http://schema.org/PostalAddress">
        <span itemprop="streetAddress">
            20341 Whitworth Institute
            405 N. Whitworth
        </span>
        <span itemprop="addressLocality">Seattle</span>,
        <span itemprop="addressRegion">WA</span>
        <span itemprop="postalCode">98052</span>
    </div>
    <span itemprop="telephone">(425) 123-4567</span>
    <a href="mailto:jane-doe@xyz.edu" itemprop="email">jane-doe@xyz.edu</a>

    Jane's home page:
    <a href="http://www.janedoe.com" itemprop="url">janedoe.com</a>

    Graduate students:
    <a href="http://www.xyz.edu/students/alicejones.html" itemprop="colleague">Alice Jones</a>
    <a href="http://www.xyz.edu/students/bobsmith.html" itemprop="colleague">Bob Smith</a>
</div>
</body>
</html>"#;

#[test]
fn test_person_page() {
    let items = items_from_html(PERSON_PAGE, &ExtractOptions::default()).unwrap();

    // this page has just one main item
    assert_eq!(items.len(), 1);
    let item = &items[0];

    assert_eq!(item.itemtype(), &[Uri::from("http://schema.org/Person")]);
    assert_eq!(item.get("name").and_then(PropertyValue::as_text), Some("Jane Doe"));
    assert_eq!(
        item.get("image"),
        Some(&PropertyValue::Uri(Uri::from("janedoe.jpg")))
    );
    assert_eq!(
        item.get("url").and_then(PropertyValue::as_uri),
        Some(&Uri::from("http://www.janedoe.com"))
    );

    // properties can repeat
    assert_eq!(
        item.get("colleague").and_then(PropertyValue::as_str),
        Some("http://www.xyz.edu/students/alicejones.html")
    );
    let colleagues: Vec<_> = item
        .get_all("colleague")
        .iter()
        .filter_map(PropertyValue::as_str)
        .collect();
    assert_eq!(
        colleagues,
        vec![
            "http://www.xyz.edu/students/alicejones.html",
            "http://www.xyz.edu/students/bobsmith.html"
        ]
    );

    let address = item.get("address").and_then(PropertyValue::as_item).unwrap();
    assert_eq!(address.itemtype(), &[Uri::from("http://schema.org/PostalAddress")]);
    assert_eq!(address.get("addressLocality").and_then(PropertyValue::as_text), Some("Seattle"));
    assert_eq!(address.get("postalCode").and_then(PropertyValue::as_text), Some("98052"));
    let street = address.get("streetAddress").and_then(PropertyValue::as_text).unwrap();
    assert!(street.contains("20341 Whitworth Institute"));
    assert!(street.contains("405 N. Whitworth"));
    assert!(item.get("streetAddress").is_none());
}

#[test]
fn test_unlinked_address_becomes_second_item() {
    let html = r#"<div itemscope itemtype="http://schema.org/Person">
        <span itemprop="name">Jane Doe</span>
        <div itemscope itemtype="http://schema.org/PostalAddress">
            <span itemprop="streetAddress">20341 Whitworth Institute</span>
        </div>
    </div>"#;
    let items = items_from_html(html, &ExtractOptions::default()).unwrap();

    assert_eq!(items.len(), 2);
    assert!(items[0].has_type("http://schema.org/Person"));
    assert!(items[0].get("streetAddress").is_none());
    assert!(items[1].has_type("http://schema.org/PostalAddress"));
    assert_eq!(
        items[1].get("streetAddress").and_then(PropertyValue::as_text),
        Some("20341 Whitworth Institute")
    );
}

#[test]
fn test_script_text_is_excluded() {
    let html = r#"<div itemscope>
        <p itemprop="description">Visible<script>Unrelated text</script></p>
    </div>"#;
    let items = items_from_html(html, &ExtractOptions::default()).unwrap();
    let description = items[0].get("description").and_then(PropertyValue::as_text).unwrap();

    assert_eq!(description, "Visible");
}

#[test]
fn test_tag_table_values() {
    let html = r#"<div itemscope itemtype="http://schema.org/Movie">
        <img itemprop="photo" src="x.png">
        <meta itemprop="rating" content="4.5">
        <time itemprop="released" datetime="1999-03-31">March 31</time>
        <link itemprop="sameAs" href="http://example.com/matrix">
        <video itemprop="trailer" src="trailer.mp4"></video>
    </div>"#;
    let items = items_from_html(html, &ExtractOptions::default()).unwrap();
    let movie = &items[0];

    assert_eq!(movie.get("photo"), Some(&PropertyValue::Uri(Uri::from("x.png"))));
    assert_eq!(movie.get("rating"), Some(&PropertyValue::from("4.5")));
    assert_eq!(movie.get("released"), Some(&PropertyValue::from("1999-03-31")));
    assert_eq!(
        movie.get("sameAs"),
        Some(&PropertyValue::Uri(Uri::from("http://example.com/matrix")))
    );
    assert_eq!(movie.get("trailer"), Some(&PropertyValue::Uri(Uri::from("trailer.mp4"))));
}

#[test]
fn test_multiple_item_types_and_id() {
    let html = r#"<div itemscope itemid="urn:isbn:0-330-34032-8"
        itemtype="http://schema.org/Person http://schema.org/Employee"></div>"#;
    let items = items_from_html(html, &ExtractOptions::default()).unwrap();

    assert_eq!(
        items[0].itemtype(),
        &[Uri::from("http://schema.org/Person"), Uri::from("http://schema.org/Employee")]
    );
    assert_eq!(items[0].itemid(), Some(&Uri::from("urn:isbn:0-330-34032-8")));
}

#[test]
fn test_document_output() {
    let html = r#"<div itemscope itemtype="http://schema.org/Book">
        <span itemprop="name">Dune</span>
        <a itemprop="author" href="http://example.com/herbert">Frank Herbert</a>
    </div>"#;
    let document = parse_document(html);
    let items = items_from_document(&document, &ExtractOptions::default()).unwrap();
    let value = ItemDocument::new(items).to_value().unwrap();

    assert_eq!(
        value,
        json!({
            "items": [{
                "type": ["http://schema.org/Book"],
                "properties": {
                    "name": ["Dune"],
                    "author": ["http://example.com/herbert"]
                }
            }]
        })
    );
}

#[test]
fn test_no_microdata() {
    let items = items_from_html("<p>Nothing to see</p>", &ExtractOptions::default()).unwrap();
    assert!(items.is_empty());
}
