use pubtrends::universities::{tables, AffiliationNormalizer, Roster};

fn normalize(affiliation: &str) -> Option<String> {
    AffiliationNormalizer::default().normalize(affiliation)
}

#[test]
fn test_department_clause_is_dropped() {
    assert_eq!(
        normalize("Dept. of Computer Science, University of Virginia"),
        Some("University of Virginia".to_string())
    );
    assert_eq!(
        normalize("Department of Statistics, Duke University, Durham, NC"),
        Some("Duke University".to_string())
    );
}

#[test]
fn test_synonym_clause_is_canonicalized() {
    assert_eq!(
        normalize("MIT-IBM Watson AI Lab, Cambridge"),
        Some("MIT".to_string())
    );
    assert_eq!(
        normalize("UIUC"),
        Some("University of Illinois Urbana-Champaign".to_string())
    );
}

#[test]
fn test_every_synonym_maps_to_its_canonical_name() {
    for (alias, canonical) in tables::SYNONYMS {
        let wrapped = format!("Department of Physics, {}, Springfield", alias);
        assert_eq!(normalize(alias).as_deref(), Some(*canonical), "alias {}", alias);
        assert_eq!(normalize(&wrapped).as_deref(), Some(*canonical), "wrapped {}", alias);
    }
}

#[test]
fn test_skip_list_fragments_are_ignored() {
    assert_eq!(
        normalize("Computer Science, Electrical and Computer Engineering, Rutgers University"),
        Some("Rutgers University".to_string())
    );
}

#[test]
fn test_first_university_clause_wins() {
    assert_eq!(
        normalize("University of Michigan, University of Virginia"),
        Some("University of Michigan".to_string())
    );
}

#[test]
fn test_uc_prefix_counts_as_university() {
    assert_eq!(
        normalize("Lab for Vision, UC Berkeley"),
        Some("UC Berkeley".to_string())
    );
}

#[test]
fn test_institute_overrides_first_clause() {
    assert_eq!(
        normalize("Robotics Lab, Georgia Institute of Technology, Atlanta"),
        Some("Georgia Institute of Technology".to_string())
    );
}

#[test]
fn test_university_beats_tech_clause() {
    assert_eq!(
        normalize("Virginia Tech, University of Virginia"),
        Some("University of Virginia".to_string())
    );
}

#[test]
fn test_unrecognized_name_passes_through() {
    assert_eq!(
        normalize("Acme Research Labs, Springfield"),
        Some("Acme Research Labs".to_string())
    );
}

#[test]
fn test_empty_affiliation_yields_none() {
    assert_eq!(normalize(""), None);
    assert_eq!(normalize(" , ,"), None);
    assert_eq!(normalize("Department of Computer Science"), None);
}

#[test]
fn test_normalize_is_deterministic() {
    let normalizer = AffiliationNormalizer::default();
    let input = "School of Engineering, The Ohio State University, Columbus";
    let first = normalizer.normalize(input);
    let second = normalizer.normalize(input);
    assert_eq!(first, second);
    assert_eq!(first, Some("Ohio State University".to_string()));
}

#[test]
fn test_custom_tables() {
    let normalizer = AffiliationNormalizer::new(
        vec!["Physics".to_string()],
        vec![("UVa".to_string(), "University of Virginia".to_string())],
    );
    assert_eq!(
        normalizer.normalize("Physics, UVa"),
        Some("University of Virginia".to_string())
    );
    // Default skip entries are not present in a custom normalizer.
    assert_eq!(
        normalizer.normalize("Computer Science, Acme"),
        Some("Computer Science".to_string())
    );
}

#[test]
fn test_uva_roster() {
    let roster = Roster::uva();
    assert_eq!(roster.focal, "University of Virginia");
    assert_eq!(roster.tracked.len(), 13);
    assert_eq!(roster.peers.len(), 12);
    assert!(roster.is_tracked("University of Virginia"));
    assert!(!roster.is_peer("University of Virginia"));
    assert!(roster.is_peer("Virginia Tech"));
    assert!(roster.is_ignored("George Mason University"));
    assert!(!roster.is_tracked("George Mason University"));
    assert!(roster.selected.iter().all(|u| roster.is_tracked(u)));
}
