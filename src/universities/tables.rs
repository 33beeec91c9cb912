// Built-in reference data for the UVA comparison reports.

pub const FOCAL: &str = "University of Virginia";

/// Department-only fragments that never name an institution.
pub const SKIP_AFFILIATIONS: &[&str] = &[
    "Computer Science",
    "Electrical and Computer Engineering",
    "Computer Engineering",
];

pub const SYNONYMS: &[(&str, &str)] = &[
    ("University of North Carolina at Chapel Hill", "University of North Carolina"),
    ("UNC", "University of North Carolina"),
    ("Massachusetts Institute of Technology", "MIT"),
    ("University of Illinois", "University of Illinois Urbana-Champaign"),
    ("University of Illinois at Urbana-Champaign", "University of Illinois Urbana-Champaign"),
    ("UIUC", "University of Illinois Urbana-Champaign"),
    ("MIT-IBM Watson AI Lab", "MIT"),
    ("Google Brain", "Google"),
    ("The Ohio State University", "Ohio State University"),
    ("The University of Alabama at Birmingham", "University of Alabama at Birmingham"),
    ("Penn State", "Pennsylvania State University"),
    ("Penn State University", "Pennsylvania State University"),
    ("CSAIL", "MIT"),
    ("University of Wisconsin-Madison", "University of Wisconsin"),
    ("Google Research", "Google"),
    ("Intel Research", "Intel"),
    ("Duke", "Duke University"),
    ("Princeton", "Princeton University"),
    ("Duke Univeristy", "Duke University"),
    ("The University of Texas", "University of Texas"),
    ("UT Austin", "University of Texas"),
    ("UC Los Angeles", "UCLA"),
    ("Virginia Tech University", "Virginia Tech"),
    ("University of Pittsburg", "University of Pittsburgh"),
    ("Vanderbilt", "Vanderbilt University"),
];

/// SRI list of UVA peers and aspiring peers, focal institution first.
pub const TRACKED: &[&str] = &[
    "University of Virginia",
    "Duke University",
    "Emory University",
    "Northwestern University",
    "Ohio State University",
    "Rutgers University",
    "University of Alabama at Birmingham",
    "University of Michigan",
    "University of North Carolina",
    "University of Pittsburgh",
    "University of Washington",
    "Vanderbilt University",
    "Virginia Tech",
];

pub const SELECTED: &[&str] = &[
    "University of Virginia",
    "Duke University",
    "Ohio State University",
    "University of Michigan",
    "University of North Carolina",
    "University of Pittsburgh",
    "University of Washington",
    "Virginia Tech",
];

/// Present in the topic export but not part of the peer list.
pub const IGNORED: &[&str] = &["George Mason University"];

pub const CONFERENCE_PLOT: &[&str] = &[
    "University of Washington",
    "University of Michigan",
    "Ohio State University",
    "Duke University",
    "University of Virginia",
    "Rutgers University",
    "University of Pittsburgh",
    "Virginia Tech",
    "University of North Carolina",
    "University of Texas",
];

pub const LABELS: &[(&str, &str)] = &[
    ("University of Virginia", "UVA"),
    ("Emory University", "Emory"),
    ("Duke University", "Duke"),
    ("Northwestern University", "NWU"),
    ("George Mason University", "GMU"),
    ("Ohio State University", "OSU"),
    ("Rutgers University", "Rutgers"),
    ("University of Alabama at Birmingham", "UAB"),
    ("University of Michigan", "UMich"),
    ("University of North Carolina", "UNC"),
    ("University of Pittsburgh", "Pitt"),
    ("University of Washington", "UWash"),
    ("Vanderbilt University", "Vanderbilt"),
    ("Virginia Tech University", "VT"),
    ("Virginia Tech", "VT"),
    ("University of Pennsylvania", "UPenn"),
    ("University of Wisconsin", "UWisc"),
    ("University of Maryland", "UMd"),
    ("University of Texas", "UTAustin"),
    ("Northeastern University", "NEU"),
    ("Brown University", "Brown"),
    ("Johns Hopkins University", "JHU"),
    ("Michigan State University", "MSU"),
    ("Princeton University", "Princeton"),
    ("peers", "Peers"),
    ("instate", "In-State"),
    ("outofstate", "Out-of-State"),
    ("all", "Total"),
];

pub const COLORS: &[(&str, &str)] = &[
    ("University of Virginia", "#E57200"),
    ("Emory University", "#007dba"),
    ("Duke University", "#00539B"),
    ("Northwestern University", "#4E2A84"),
    ("George Mason University", "#006633"),
    ("Ohio State University", "#ba0c2f"),
    ("Rutgers University", "#ff0000"),
    ("University of Alabama at Birmingham", "#1E6B52"),
    ("University of Michigan", "#FFCB05"),
    ("University of North Carolina", "#007FAE"),
    ("University of Pittsburgh", "#FFB81C"),
    ("University of Washington", "#32006e"),
    ("Vanderbilt University", "#CFAE70"),
    ("Virginia Tech University", "#861F41"),
    ("Virginia Tech", "#861F41"),
    ("University of Pennsylvania", "#990000"),
    ("University of Wisconsin", "#C5050C"),
    ("University of Maryland", "#E21833"),
    ("University of Texas", "#bf5700"),
    ("Michigan State University", "#18453B"),
    ("Northeastern University", "#000000"),
    ("Brown University", "#4E3629"),
    ("Johns Hopkins University", "#002D72"),
    ("Princeton University", "#E77500"),
    ("peers", "#808080"),
    ("outofstate", "#808080"),
    ("instate", "#00008b"),
    ("all", "#000000"),
    // conferences
    ("NeurIPS", "#118ab2"),
    ("AAAI", "#06d6a0"),
    ("ICML", "#ef476f"),
    ("ICLR", "#ffd166"),
];
