use crate::Theme;

use std::str::FromStr;

#[test]
fn test_theme_as_str() {
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Dark.as_str(), "dark");
}

#[test]
fn test_theme_from_str() {
    assert_eq!(Theme::from_str("light").unwrap(), Theme::Light);
    assert_eq!(Theme::from_str("dark").unwrap(), Theme::Dark);
    assert!(Theme::from_str("Dark").is_err());
    assert!(Theme::from_str("").is_err());
}

#[test]
fn test_theme_toggled() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn test_theme_default() {
    assert_eq!(Theme::default(), Theme::Light);
}
