use rstest::rstest;

use super::*;

fn options(include: &[&str], exclude: &[&str], invert: bool) -> FilterOptions {
    FilterOptions {
        include: include.iter().map(|&x| x.into()).collect(),
        exclude: exclude.iter().map(|&x| x.into()).collect(),
        invert,
    }
}

#[rstest]
#[case("")]
#[case("com.example.Service")]
fn test_default_accepts_everything(#[case] name: &str) {
    assert!(NameFilter::default().matches(name));
}

#[test]
fn test_include() {
    let filter = NameFilter::new(&options(&["com.example.", "Service"], &[], false));
    assert!(filter.matches("com.example.Service"));
    assert!(filter.matches("com.example.ServiceImpl"));
    assert!(!filter.matches("com.example.Repository"));
    assert!(!filter.matches("org.example.Service"));
}

#[test]
fn test_exclude() {
    let filter = NameFilter::new(&options(&[], &["Test |Tests ", "$*"], false));
    assert!(filter.matches("com.example.Service"));
    assert!(filter.matches("com.example.TestData"));
    assert!(!filter.matches("com.example.ServiceTest"));
    assert!(!filter.matches("com.example.ServiceTests"));
    assert!(!filter.matches("com.example.Service$1"));
}

#[test]
fn test_include_and_exclude() {
    let filter = NameFilter::new(&options(&["com.example."], &["Impl "], false));
    assert!(filter.matches("com.example.Service"));
    assert!(!filter.matches("com.example.ServiceImpl"));
    assert!(!filter.matches("org.example.Service"));
}

#[test]
fn test_invert() {
    let filter = NameFilter::new(&options(&["com.example."], &["Impl "], true));
    assert!(!filter.matches("com.example.Service"));
    assert!(filter.matches("com.example.ServiceImpl"));
    assert!(filter.matches("org.example.Service"));

    let filter = NameFilter::new(&options(&[], &[], true));
    assert!(!filter.matches("anything"));
}

#[test]
fn test_empty_patterns() {
    let filter = NameFilter::new(&options(&[""], &[], false));
    assert!(filter.matches("anything"));

    let filter = NameFilter::new(&options(&[], &[""], false));
    assert!(!filter.matches("anything"));
}

#[test]
fn test_universal_include_patterns_are_dropped() {
    let filter = NameFilter::new(&options(&["*", " | ", "Service"], &[], false));
    assert_eq!(filter.options().include, vec!["Service"]);
    assert!(filter.matches("com.example.Service"));
    assert!(!filter.matches("com.example.Repository"));

    let filter = NameFilter::new(&options(&["", "*|Service"], &[], false));
    assert!(filter.options().include.is_empty());
    assert!(filter.matches("com.example.Repository"));
}

#[test]
fn test_effective_options() {
    let filter = NameFilter::new(&options(&["  com.example. "], &[" Test |IT  ", ""], true));
    assert_eq!(
        filter.options(),
        &options(&["com.example. "], &["Test |IT ", ""], true)
    );
}
