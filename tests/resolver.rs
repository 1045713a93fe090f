use mlcq_sample_fetcher::domain::BlobRef;
use mlcq_sample_fetcher::resolver::UrlResolver;

fn expected() -> BlobRef {
    BlobRef {
        owner: "apache".to_string(),
        repo: "tomcat".to_string(),
        reference: "7ab1f5c".to_string(),
        path: "java/org/apache/catalina/Server.java".to_string(),
    }
}

#[test]
fn resolve_plain_blob_url() {
    let resolver = UrlResolver::new();
    let blob = resolver
        .resolve("https://github.com/apache/tomcat/blob/7ab1f5c/java/org/apache/catalina/Server.java")
        .unwrap();
    assert_eq!(blob, expected());
}

#[test]
fn resolve_with_line_anchor() {
    let resolver = UrlResolver::new();
    let blob = resolver
        .resolve(
            "https://github.com/apache/tomcat/blob/7ab1f5c/java/org/apache/catalina/Server.java#L10",
        )
        .unwrap();
    assert_eq!(blob, expected());
}

#[test]
fn resolve_with_line_range_anchor() {
    let resolver = UrlResolver::new();
    let blob = resolver
        .resolve(
            "https://github.com/apache/tomcat/blob/7ab1f5c/java/org/apache/catalina/Server.java#L10-L20",
        )
        .unwrap();
    assert_eq!(blob, expected());
}

#[test]
fn resolve_with_slash_punctuated_anchor() {
    let resolver = UrlResolver::new();
    let blob = resolver
        .resolve(
            "https://github.com/apache/tomcat/blob/7ab1f5c/java/org/apache/catalina/Server.java/#L10-L20",
        )
        .unwrap();
    assert_eq!(blob, expected());
}

#[test]
fn resolve_rejects_missing_blob_segment() {
    let resolver = UrlResolver::new();
    assert!(
        resolver
            .resolve("https://github.com/apache/tomcat/tree/main/java")
            .is_none()
    );
}

#[test]
fn resolve_rejects_other_hosts() {
    let resolver = UrlResolver::new();
    assert!(
        resolver
            .resolve("https://gitlab.com/apache/tomcat/blob/main/Server.java")
            .is_none()
    );
}

#[test]
fn resolve_rejects_surrounding_whitespace() {
    let resolver = UrlResolver::new();
    assert!(
        resolver
            .resolve(" https://github.com/apache/tomcat/blob/7ab1f5c/java/Server.java ")
            .is_none()
    );
}

#[test]
fn resolve_rejects_empty_path() {
    let resolver = UrlResolver::new();
    assert!(
        resolver
            .resolve("https://github.com/apache/tomcat/blob/main/")
            .is_none()
    );
}

#[test]
fn raw_url_derivation() {
    let resolver = UrlResolver::new();
    let blob = resolver
        .resolve("https://github.com/apache/tomcat/blob/7ab1f5c/java/org/apache/catalina/Server.java#L10")
        .unwrap();
    assert_eq!(
        blob.raw_url(),
        "https://raw.githubusercontent.com/apache/tomcat/7ab1f5c/java/org/apache/catalina/Server.java"
    );
}
