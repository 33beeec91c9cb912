use pubtrends::fallback_color;
use pubtrends::universities::DisplayTable;

#[test]
fn test_label_uses_table_then_name() {
    let display = DisplayTable::default();
    assert_eq!(display.label("University of Virginia"), "UVA");
    assert_eq!(display.label("peers"), "Peers");
    assert_eq!(display.label("Stanford University"), "Stanford University");
}

#[test]
fn test_color_from_table() {
    let mut display = DisplayTable::default();
    assert_eq!(display.color("University of Virginia"), "#E57200");
    assert_eq!(display.color("ICML"), "#ef476f");
}

#[test]
fn test_unlisted_color_is_stable() {
    let mut display = DisplayTable::default();
    let first = display.color("Stanford University");
    let second = display.color("Stanford University");
    assert_eq!(first, second);
    assert_eq!(first, fallback_color("Stanford University"));
}

#[test]
fn test_fallback_color_format() {
    let color = fallback_color("Universit√© de Paris");
    assert_eq!(color.len(), 7);
    assert!(color.starts_with('#'));
    assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(fallback_color("MIT"), fallback_color("Stanford University"));
}

#[test]
fn test_custom_table() {
    let mut display = DisplayTable::new(
        vec![("Acme".to_string(), "ACME".to_string())],
        vec![("Acme".to_string(), "#010203".to_string())],
    );
    assert_eq!(display.label("Acme"), "ACME");
    assert_eq!(display.color("Acme"), "#010203");
    assert_eq!(display.label("University of Virginia"), "University of Virginia");
}
