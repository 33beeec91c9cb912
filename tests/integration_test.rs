use pubtrends::scopus::{ConferenceInput, ConferencesArgs};
use pubtrends::topics::{TopicsArgs, AREAS, UNCHARTED_AREAS};
use pubtrends::{ConferenceYearRecord, InstitutionYearRecord, TopicBucketRecord};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

fn read_jsonl<T: serde::de::DeserializeOwned>(path: &Path) -> Vec<T> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect()
}

fn count_svgs(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "svg"))
        .count()
}

#[test]
fn test_topics_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("publications.csv");
    let output = temp_dir.path().join("output");

    {
        let mut file = File::create(&input).unwrap();
        let areas: Vec<&str> = AREAS.iter().map(|(column, _)| *column).collect();
        writeln!(
            file,
            "publication_date,University,cited_by_count,Year,Area,{}",
            areas.join(",")
        )
        .unwrap();
        let scores = |s: &str| vec![s; AREAS.len()].join(",");
        writeln!(file, ",,,,,{}", vec![""; AREAS.len()].join(",")).unwrap();
        writeln!(file, "2020-01-01,University of Virginia,5,2020,AI,{}", scores("0.8")).unwrap();
        writeln!(file, "2020-02-01,Duke University,2,2020,AI,{}", scores("0.3")).unwrap();
        writeln!(file, "2019-02-01,Virginia Tech,2,2019,AI,{}", scores("0.5")).unwrap();
        writeln!(file, "2019-02-01,George Mason University,2,2019,AI,{}", scores("0.5")).unwrap();
    }

    let args = TopicsArgs {
        input,
        output: output.clone(),
        start_year: 2019,
        end_year: 2020,
        low_threshold: 0.25,
        high_threshold: 0.75,
        skip_rows: 1,
    };
    pubtrends::topics::run(args).unwrap();

    let records: Vec<TopicBucketRecord> = read_jsonl(&output.join("topic_stats.jsonl"));
    // every area x (13 tracked + peers) x 2 years
    assert_eq!(records.len(), AREAS.len() * 14 * 2);

    let uva = records
        .iter()
        .find(|r| {
            r.area == "artificial intelligence"
                && r.institution == "University of Virginia"
                && r.year == 2020
        })
        .unwrap();
    assert_eq!(uva.count, 1);
    assert_eq!(uva.num_above_t2, 1);

    let peers = records
        .iter()
        .find(|r| r.area == "statistics" && r.institution == "peers" && r.year == 2020)
        .unwrap();
    assert_eq!(peers.count, 1);
    assert_eq!(peers.num_above_t1, 1);
    assert_eq!(peers.num_above_t2, 0);

    let charted = AREAS.len() - UNCHARTED_AREAS.len();
    assert_eq!(count_svgs(&output), charted * 3 * 3);
    assert!(output
        .join("artificial intelligence-group-num_above_t2.svg")
        .exists());
    assert!(!output.join("applied work-group-mean_score.svg").exists());
}

#[test]
fn test_topics_pipeline_rejects_bad_score() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("publications.csv");

    {
        let mut file = File::create(&input).unwrap();
        let areas: Vec<&str> = AREAS.iter().map(|(column, _)| *column).collect();
        writeln!(
            file,
            "publication_date,University,cited_by_count,Year,Area,{}",
            areas.join(",")
        )
        .unwrap();
        writeln!(
            file,
            "2020-01-01,University of Virginia,5,2020,AI,{}",
            vec!["1.5"; AREAS.len()].join(",")
        )
        .unwrap();
    }

    let args = TopicsArgs {
        input,
        output: temp_dir.path().join("output"),
        start_year: 2019,
        end_year: 2020,
        low_threshold: 0.25,
        high_threshold: 0.75,
        skip_rows: 0,
    };
    assert!(pubtrends::topics::run(args).is_err());
}

#[test]
fn test_conferences_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    let output = temp_dir.path().join("scopusoutput");
    fs::create_dir_all(&data_dir).unwrap();

    let header = "Authors,Title,Year,Conference name,Affiliations,Cited by";
    fs::write(
        data_dir.join("neurips-all-scopus.csv"),
        format!(
            "{}\n{}\n{}\n",
            header,
            "A,P1,2021,NeurIPS 2021,\"University of Virginia, Charlottesville; University of Virginia\",10",
            "B,P2,2021,NeurIPS 2021,\"Stanford University; Duke University\",30",
        ),
    )
    .unwrap();
    fs::write(
        data_dir.join("iclr-all-scopus.csv"),
        format!(
            "{}\n{}\n{}\n",
            header,
            "C,P3,2014,ICLR 2014,New York University,5000",
            "D,P4,2022,ICLR 2022,Virginia Tech,4",
        ),
    )
    .unwrap();

    let pattern = |name: &str| data_dir.join(name).to_string_lossy().into_owned();
    let args = ConferencesArgs {
        inputs: vec![
            ConferenceInput {
                conference: "NeurIPS".to_string(),
                pattern: pattern("neurips-*.csv"),
            },
            ConferenceInput {
                conference: "ICLR".to_string(),
                pattern: pattern("iclr-all-scopus.csv"),
            },
        ],
        output: output.clone(),
        start_year: 2012,
        end_year: 2022,
    };
    pubtrends::scopus::run(args).unwrap();

    let summary: Vec<ConferenceYearRecord> = read_jsonl(&output.join("conference_summary.jsonl"));
    assert_eq!(summary.len(), 2 * 11);
    let neurips_2021 = summary
        .iter()
        .find(|r| r.conference == "NeurIPS" && r.year == 2021)
        .unwrap();
    assert_eq!(neurips_2021.papers, 2);
    assert_eq!(neurips_2021.citations, 40);
    assert_eq!(neurips_2021.editions, vec!["NeurIPS 2021".to_string()]);

    let institutions: Vec<InstitutionYearRecord> =
        read_jsonl(&output.join("institution_papers.jsonl"));
    let uva = institutions
        .iter()
        .find(|r| r.institution == "University of Virginia")
        .unwrap();
    assert_eq!(uva.papers, 1);
    assert_eq!(uva.citations, 10);

    for name in [
        "confcitings-mean",
        "confcitings-total",
        "conftotals",
        "allconfs",
        "fraccitings",
        "NeurIPS",
        "NeurIPS-citings",
        "ICLR",
        "ICLR-citings",
    ] {
        assert!(output.join(format!("{}.svg", name)).exists(), "{}", name);
    }
    assert_eq!(count_svgs(&output), 9);
}
