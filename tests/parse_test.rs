use metasniff::{parse_bytes, parse_bytes_with_options, Error, Options, PageInfo, SCHEMA_VERSION};
use pretty_assertions::assert_eq;

fn parse_ok(html: &str) -> PageInfo {
    match parse_bytes(html.as_bytes()) {
        Ok(info) => info,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    }
}

#[test]
fn title_is_trimmed_and_used_as_main_title() {
    let info = parse_ok("<!doctype html><html><head><title> Hi </title></head><body></body></html>");
    assert_eq!(info.version, SCHEMA_VERSION);
    assert_eq!(info.document_type_name.as_deref(), Some("html"));
    assert_eq!(info.html.title.as_deref(), Some("Hi"));
    assert_eq!(info.main_content.title.as_deref(), Some("Hi"));
    assert!(info.errors.is_empty());
    assert!(info.unknown_tokens.is_empty());
}

#[test]
fn canonical_link_sets_url_and_base_url() {
    let info = parse_ok(
        r#"<!DOCTYPE html><html><head><link rel="canonical" href="https://x.test/p"></head></html>"#,
    );
    assert_eq!(info.url.as_deref(), Some("https://x.test/p"));
    assert_eq!(info.base_url.as_deref(), Some("https://x.test/p"));
    assert_eq!(info.html.links.len(), 1);
}

#[test]
fn single_json_ld_article_fills_main_content() {
    let info = parse_ok(
        r#"<!doctype html><head><script type="application/ld+json">[{"@type":["Article"],"headline":"H"}]</script></head>"#,
    );
    assert_eq!(info.main_content.kind.as_deref(), Some("article"));
    assert_eq!(info.main_content.headline.as_deref(), Some("H"));
    assert_eq!(info.main_content.title.as_deref(), Some("H"));
    assert_eq!(info.json_ld.len(), 1);
    assert!(info.html.scripts.is_empty());
}

#[test]
fn unclosed_title_is_recorded_and_body_still_processed() {
    let info = parse_ok(r#"<!doctype html><html><head><title>Broken<body class="home"></body></html>"#);
    assert_eq!(info.errors.len(), 1);
    assert_eq!(info.errors[0].kind, "unexpected_data");
    assert!(info.errors[0].message.contains("tag=body"), "{}", info.errors[0].message);
    assert_eq!(info.html.title, None);
    assert_eq!(info.html.body_attrs, vec![("class".to_string(), "home".to_string())]);
}

#[test]
fn input_without_doctype_is_rejected() {
    for html in ["<html></html>", "", "  <!doctype html>", "<!-- c --><!doctype html>", "hello"] {
        match parse_bytes(html.as_bytes()) {
            Err(Error::UnrecognizedPreamble { preview }) => assert_eq!(preview, html),
            other => panic!("expected UnrecognizedPreamble for {html:?}, got {other:?}"),
        }
    }
}

#[test]
fn doctype_keyword_is_case_insensitive() {
    for html in ["<!DOCTYPE html>", "<!doctype html>", "<!DocType HTML>"] {
        let info = parse_ok(html);
        assert!(info.document_type_name.is_some(), "{html}");
    }
}

#[test]
fn malformed_doctype_aborts() {
    assert!(matches!(
        parse_bytes(b"<!doctype html PUBLIC \"-//W3C//DTD HTML 4.01//EN\">"),
        Err(Error::UnexpectedData { .. })
    ));
    assert!(matches!(parse_bytes(b"<!doctype html"), Err(Error::UnexpectedEndOfFile { .. })));
}

#[test]
fn non_html_doctype_keeps_trailing_data() {
    let info = parse_ok("<!doctype svg><svg><title>Not HTML</title></svg>");
    assert_eq!(info.document_type_name.as_deref(), Some("svg"));
    assert_eq!(info.trailing_data.as_deref(), Some("<svg><title>Not HTML</title></svg>"));
    assert_eq!(info.html.title, None);
    assert!(info.main_content.is_empty());
}

#[test]
fn options_url_wins_over_canonical() {
    let html = br#"<!doctype html><link rel="canonical" href="https://other.test/p"><link rel="alternate" type="application/rss+xml" href="/feed">"#;
    let options = Options {
        url: Some("https://x.test/a/b".to_string()),
        ..Options::default()
    };
    let info = match parse_bytes_with_options(html, &options) {
        Ok(info) => info,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(info.url.as_deref(), Some("https://x.test/a/b"));
    assert_eq!(
        info.main_content.containing_feeds[0].url.as_deref(),
        Some("https://x.test/feed")
    );
}

#[test]
fn invalid_utf8_is_replaced() {
    let info = match parse_bytes(b"<!doctype html><title>Caf\xE9</title>") {
        Ok(info) => info,
        Err(err) => panic!("expected Ok(_), got Err({err:?})"),
    };
    assert_eq!(info.html.title.as_deref(), Some("Caf\u{FFFD}"));
}

#[test]
fn full_head_is_extracted() {
    let info = parse_ok(
        r#"<!DOCTYPE html>
<html lang="en" id="top" class="no-js">
<head profile="x">
  <meta charset="utf-8">
  <meta name="description" content="What it is about">
  <meta name="sailthru.author" content="Ada Lovelace">
  <meta property="og:type" content="article">
  <meta property="og:title" content="The Engine">
  <title>The Engine | Daily</title>
  <style media="screen">p { color: red }</style>
  <script src="/app.js"></script>
  <script>window.x = 1 < 2;</script>
</head>
<body data-page="post">
  <!-- generated -->
</body>
</html>"#,
    );
    assert_eq!(info.html.html_id.as_deref(), Some("top"));
    assert_eq!(info.html.html_class.as_deref(), Some("no-js"));
    assert_eq!(info.html.html_unknown_attrs, vec![("lang".to_string(), "en".to_string())]);
    assert_eq!(info.html.head_attrs, vec![("profile".to_string(), "x".to_string())]);
    assert_eq!(info.html.title.as_deref(), Some("The Engine | Daily"));
    assert_eq!(info.main_content.title.as_deref(), Some("The Engine"));
    assert_eq!(info.main_content.kind.as_deref(), Some("article"));
    assert_eq!(
        info.main_content.description.as_ref().map(|d| d.text.as_str()),
        Some("What it is about")
    );
    assert_eq!(info.main_content.author.len(), 1);
    assert_eq!(info.main_content.author[0].name.as_deref(), Some("Ada Lovelace"));
    assert_eq!(info.html.metas.len(), 5);
    assert_eq!(info.html.styles.len(), 1);
    assert_eq!(info.html.styles[0].media.as_deref(), Some("screen"));
    assert_eq!(info.html.scripts.len(), 2);
    assert_eq!(info.html.scripts[1].content.as_deref(), Some("window.x = 1 < 2;"));
    assert_eq!(info.html.comments, vec![" generated ".to_string()]);
    assert!(info.errors.is_empty());
    assert!(info.unknown_tokens.is_empty());
}

#[test]
fn record_serializes_without_empty_fields() {
    let info = parse_ok("<!doctype html><title>T</title>");
    let value = match serde_json::to_value(&info) {
        Ok(value) => value,
        Err(err) => panic!("serialization failed: {err}"),
    };
    assert_eq!(
        value,
        serde_json::json!({
            "version": 1,
            "document_type_name": "html",
            "html": { "title": "T" },
            "main_content": { "title": "T" }
        })
    );
}
