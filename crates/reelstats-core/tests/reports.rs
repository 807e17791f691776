use reelstats_core::model::MovieRecord;
use reelstats_core::reports::{Report, ReportTotal, TOP_N};

fn record(
    genres: &[&str],
    lead_actor: Option<&str>,
    director: Option<&str>,
    gross: Option<i64>,
    budget: Option<i64>,
    imdb_score: Option<f64>,
) -> MovieRecord {
    MovieRecord {
        genres: genres.iter().map(|genre| genre.to_string()).collect(),
        lead_actor: lead_actor.map(str::to_string),
        director: director.map(str::to_string),
        gross,
        budget,
        imdb_score,
    }
}

#[test]
fn genre_report_sums_profitability_per_genre() {
    let records = vec![
        record(&["Action"], None, None, Some(100), Some(40), None),
        record(&["Action"], None, None, Some(10), Some(50), None),
    ];

    let rows = Report::GenreProfitability.run(&records);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, "Action");
    assert_eq!(rows[0].total, ReportTotal::Revenue(20));
}

#[test]
fn multi_genre_record_contributes_fully_to_each_genre() {
    let records = vec![record(
        &["Action", "Comedy"],
        None,
        None,
        Some(500),
        Some(200),
        None,
    )];

    let rows = Report::GenreProfitability.run(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "Action");
    assert_eq!(rows[0].total, ReportTotal::Revenue(300));
    assert_eq!(rows[1].key, "Comedy");
    assert_eq!(rows[1].total, ReportTotal::Revenue(300));
}

#[test]
fn profitability_ranks_least_profitable_first() {
    let records = vec![
        record(&["Drama"], None, None, Some(900), Some(100), None),
        record(&["Horror"], None, None, Some(50), Some(400), None),
        record(&["Comedy"], None, None, Some(300), Some(100), None),
    ];

    let rows = Report::GenreProfitability.run(&records);

    let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, ["Horror", "Comedy", "Drama"]);
    assert_eq!(rows[0].total, ReportTotal::Revenue(-350));
}

#[test]
fn record_without_budget_is_excluded_from_profitability_but_not_rating() {
    let records = vec![
        record(
            &["Action"],
            Some("Tom Hardy"),
            Some("Christopher Nolan"),
            Some(448130642),
            None,
            Some(8.5),
        ),
        record(
            &["Action"],
            Some("Christoph Waltz"),
            Some("Sam Mendes"),
            Some(200074175),
            Some(245000000),
            Some(6.8),
        ),
    ];

    let actor_rows = Report::ActorProfitability.run(&records);
    assert_eq!(actor_rows.len(), 1);
    assert_eq!(actor_rows[0].key, "Christoph Waltz");

    let pair_rows = Report::ActorDirectorRating.run(&records);
    assert_eq!(pair_rows.len(), 2);
    assert_eq!(pair_rows[0].key, "Tom Hardy||||Christopher Nolan");
    assert_eq!(pair_rows[0].total, ReportTotal::Rating(8.5));
}

#[test]
fn rating_report_sums_scores_per_pair_descending() {
    let records = vec![
        record(&[], Some("A"), Some("D"), None, None, Some(7.0)),
        record(&[], Some("B"), Some("E"), None, None, Some(9.9)),
        record(&[], Some("A"), Some("D"), None, None, Some(8.5)),
    ];

    let rows = Report::ActorDirectorRating.run(&records);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "A||||D");
    assert_eq!(rows[0].total, ReportTotal::Rating(15.5));
    assert_eq!(rows[1].key, "B||||E");
    assert_eq!(rows[1].total, ReportTotal::Rating(9.9));
}

#[test]
fn record_missing_a_name_never_forms_a_pair() {
    let records = vec![
        record(&[], Some("Doug Walker"), None, None, None, Some(7.1)),
        record(&[], None, Some("Rob Walker"), None, None, Some(7.1)),
        record(&[], None, None, None, None, Some(7.1)),
    ];

    assert!(Report::ActorDirectorRating.run(&records).is_empty());
}

#[test]
fn empty_record_set_yields_empty_reports() {
    let records: Vec<MovieRecord> = Vec::new();

    for report in Report::ALL {
        assert!(
            report.run(&records).is_empty(),
            "expected no rows from {report:?} on an empty record set"
        );
    }
}

#[test]
fn reports_cap_at_ten_rows() {
    let records: Vec<MovieRecord> = (0..15)
        .map(|n| {
            record(
                &[&format!("Genre{n:02}")],
                None,
                None,
                Some(1000 + n),
                Some(1000),
                None,
            )
        })
        .collect();

    let rows = Report::GenreProfitability.run(&records);

    assert_eq!(rows.len(), TOP_N);
    assert_eq!(rows[0].key, "Genre00");
    assert_eq!(rows[9].key, "Genre09");
}

#[test]
fn tied_totals_keep_first_seen_order() {
    let records = vec![
        record(&["Western"], None, None, Some(500), Some(300), None),
        record(&["Musical"], None, None, Some(400), Some(200), None),
        record(&["War"], None, None, Some(300), Some(100), None),
    ];

    // All three genres total 200; first-seen order decides.
    let rows = Report::GenreProfitability.run(&records);

    let keys: Vec<&str> = rows.iter().map(|row| row.key.as_str()).collect();
    assert_eq!(keys, ["Western", "Musical", "War"]);
}

#[test]
fn rerunning_a_report_yields_identical_rows() {
    let records = vec![
        record(
            &["Action", "Adventure"],
            Some("CCH Pounder"),
            Some("James Cameron"),
            Some(760505847),
            Some(237000000),
            Some(7.9),
        ),
        record(
            &["Action"],
            Some("Johnny Depp"),
            Some("Gore Verbinski"),
            Some(309404152),
            Some(300000000),
            Some(7.1),
        ),
    ];

    for report in Report::ALL {
        let first = report.run(&records);
        let second = report.run(&records);
        assert_eq!(first, second, "expected {report:?} to be pure");
    }
}

#[test]
fn report_surfaces_carry_the_published_labels() {
    assert_eq!(
        Report::GenreProfitability.title(),
        "Top 10 Genre with decreasing profitability."
    );
    assert_eq!(
        Report::ActorDirectorRating.title(),
        "Top 10 actor director pair with most IMDB rating."
    );
    assert_eq!(Report::GenreProfitability.key_label(), "Genre");
    assert_eq!(Report::ActorProfitability.key_label(), "Actor");
    assert_eq!(Report::DirectorProfitability.key_label(), "Director");
    assert_eq!(
        Report::ActorDirectorRating.key_label(),
        "Actor||||Director"
    );
    assert_eq!(Report::DirectorProfitability.value_label(), "Revenue");
    assert_eq!(
        Report::ActorDirectorRating.value_label(),
        "Total IMDB Rating"
    );
}
