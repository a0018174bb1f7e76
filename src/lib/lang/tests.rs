use std::path::PathBuf;

use proptest::{
    prelude::*,
    test_runner::{Config, TestRunner},
};

use super::{Lang, switch_target};
use crate::{
    config::{TOKEN_EN, TOKEN_HE},
    types::RelPath,
};

fn derive(rel: &str) -> (Lang, String) {
    let rel = RelPath::new(PathBuf::from(rel)).expect("relative");
    let (lang, url) = switch_target(&rel);
    (lang, url.as_str().to_string())
}

#[test]
fn hebrew_directory_page_points_at_english_directory() {
    assert_eq!(derive("he/foo/index.html"), (Lang::He, "/foo/".to_string()));
}

#[test]
fn english_directory_page_points_at_hebrew_directory() {
    assert_eq!(
        derive("foo/index.html"),
        (Lang::En, "/he/foo/".to_string())
    );
}

#[test]
fn hebrew_file_page_keeps_file_name() {
    assert_eq!(derive("he/bar.html"), (Lang::He, "/bar.html".to_string()));
}

#[test]
fn english_file_page_keeps_file_name() {
    assert_eq!(derive("bar.html"), (Lang::En, "/he/bar.html".to_string()));
}

#[test]
fn root_indices_point_at_each_other() {
    assert_eq!(derive("index.html"), (Lang::En, "/he/".to_string()));
    assert_eq!(derive("he/index.html"), (Lang::He, "/".to_string()));
}

#[test]
fn prefix_check_requires_the_separator() {
    // A top-level `he.html` is an English page, not a Hebrew tree.
    assert_eq!(derive("he.html"), (Lang::En, "/he/he.html".to_string()));
}

#[test]
fn index_lookalikes_survive() {
    assert_eq!(
        derive("he/foo/xindex.html"),
        (Lang::He, "/foo/xindex.html".to_string())
    );
}

#[test]
fn tokens_name_the_other_language() {
    assert_eq!(Lang::En.switch_token(), TOKEN_HE);
    assert_eq!(Lang::He.switch_token(), TOKEN_EN);
    assert_eq!(Lang::En.code(), "en");
    assert_eq!(Lang::He.code(), "he");
}

prop_compose! {
    // Segments of three or more characters keep the generated English paths
    // from starting with a literal `he` directory.
    fn rel_html_path()(segments in proptest::collection::vec("[a-z0-9]{3,10}", 1..4)) -> PathBuf {
        let mut p = PathBuf::new();
        for seg in segments {
            p.push(seg);
        }
        p.set_extension("html");
        p
    }
}

#[test]
fn counterpart_pages_point_at_each_other() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&rel_html_path(), |p| {
            let english = RelPath::new(p.clone()).expect("relative");
            let hebrew = RelPath::new(PathBuf::from("he").join(&p)).expect("relative");

            let (lang_en, to_hebrew) = switch_target(&english);
            let (lang_he, to_english) = switch_target(&hebrew);

            prop_assert_eq!(lang_en, Lang::En);
            prop_assert_eq!(lang_he, Lang::He);

            // The two derivations differ only by the `/he` mount point.
            prop_assert_eq!(
                to_hebrew.as_str(),
                format!("/he{}", to_english.as_str())
            );
            Ok(())
        })
        .unwrap();
}

#[test]
fn switch_urls_are_site_absolute() {
    let mut runner = TestRunner::new(Config {
        failure_persistence: None,
        ..Config::default()
    });
    runner
        .run(&(rel_html_path(), any::<bool>()), |(p, hebrew)| {
            let p = if hebrew { PathBuf::from("he").join(p) } else { p };
            let rel = RelPath::new(p).expect("relative");
            let (_, url) = switch_target(&rel);

            prop_assert!(url.as_str().starts_with('/'));
            prop_assert!(!url.as_str().contains('\\'));
            prop_assert!(
                url.as_str() == "/" || !url.as_str().ends_with("/index.html")
            );
            Ok(())
        })
        .unwrap();
}
