use anyhow::Result;
use httpmock::prelude::*;
use salary_stats::utils::validation::Validate;
use salary_stats::{
    render_table, EmptySamplePolicy, EnvSecrets, SourceSelection, StatsConfig, StatsEngine,
    StatsError,
};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn hh_item(from: Option<u64>, to: Option<u64>, currency: &str) -> serde_json::Value {
    json!({ "id": "1", "salary": { "from": from, "to": to, "currency": currency } })
}

fn config_for(hh: &MockServer, sj: &MockServer, secret_env: &str) -> StatsConfig {
    let mut config = StatsConfig {
        languages: vec!["Go".to_string(), "Rust".to_string()],
        ..StatsConfig::default()
    };
    config.headhunter.endpoint = hh.url("/vacancies/");
    config.headhunter.pages = 2;
    config.superjob.endpoint = sj.url("/2.0/vacancies/");
    config.superjob.secret_env = secret_env.to_string();
    config
}

/// Go has data on both boards, Rust only has a USD vacancy on hh.ru and
/// nothing on SuperJob.
fn mock_boards(hh: &MockServer, sj: &MockServer) {
    hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "программист Go")
            .query_param("per_page", "0");
        then.status(200).json_body(json!({"found": 120, "pages": 0, "items": []}));
    });
    hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "программист Go")
            .query_param("page", "0");
        then.status(200).json_body(json!({
            "found": 120, "pages": 2,
            "items": [hh_item(Some(100000), Some(200000), "RUR"), json!({"id": "2", "salary": null})]
        }));
    });
    hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "программист Go")
            .query_param("page", "1");
        then.status(200).json_body(json!({
            "found": 120, "pages": 2,
            "items": [hh_item(Some(150000), None, "RUR")]
        }));
    });
    hh.mock(|when, then| {
        when.method(GET)
            .path("/vacancies/")
            .query_param("text", "программист Rust");
        then.status(200).json_body(json!({
            "found": 3, "pages": 1,
            "items": [hh_item(Some(5000), None, "USD")]
        }));
    });

    sj.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .query_param("keyword", "программист Go");
        then.status(200).json_body(json!({
            "total": 50,
            "more": false,
            "objects": [
                {"payment_from": 100000, "payment_to": 140000, "currency": "rub"},
                {"payment_from": 100000, "payment_to": 0, "currency": "rub"}
            ]
        }));
    });
    sj.mock(|when, then| {
        when.method(GET)
            .path("/2.0/vacancies/")
            .query_param("keyword", "программист Rust");
        then.status(200).json_body(json!({"total": 0, "more": false, "objects": []}));
    });
}

#[tokio::test]
async fn test_end_to_end_both_sources() -> Result<()> {
    std::env::set_var("SALARY_STATS_IT_KEY_BOTH", "v3.integration");
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_boards(&hh, &sj);

    let config = config_for(&hh, &sj, "SALARY_STATS_IT_KEY_BOTH");
    config.validate()?;

    let engine = StatsEngine::from_config(&config, SourceSelection::All, &EnvSecrets)?;
    let reports = engine.run().await?;

    assert_eq!(reports.len(), 2);

    let hh_report = &reports[0];
    assert_eq!(hh_report.title, "Headhunter Moscow");
    assert_eq!(hh_report.rows.len(), 1);
    assert_eq!(hh_report.rows[0].language, "Go");
    assert_eq!(hh_report.rows[0].vacancies_found, 120);
    assert_eq!(hh_report.rows[0].vacancies_processed, 2);
    assert_eq!(hh_report.rows[0].average_salary, 165_000);
    assert_eq!(hh_report.skipped, vec!["Rust"]);

    let sj_report = &reports[1];
    assert_eq!(sj_report.title, "SuperJob Moscow");
    assert_eq!(sj_report.rows.len(), 1);
    assert_eq!(sj_report.rows[0].vacancies_found, 50);
    assert_eq!(sj_report.rows[0].vacancies_processed, 1);
    assert_eq!(sj_report.rows[0].average_salary, 120_000);

    let table = render_table(&sj_report.title, &sj_report.rows);
    assert!(table.contains("SuperJob Moscow"));
    assert!(table.contains("120000"));

    std::env::remove_var("SALARY_STATS_IT_KEY_BOTH");
    Ok(())
}

#[tokio::test]
async fn test_legacy_policy_fails_on_empty_headhunter_language() -> Result<()> {
    std::env::set_var("SALARY_STATS_IT_KEY_LEGACY", "v3.integration");
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_boards(&hh, &sj);

    let mut config = config_for(&hh, &sj, "SALARY_STATS_IT_KEY_LEGACY");
    config.empty_sample_policy = EmptySamplePolicy::Legacy;

    let engine = StatsEngine::from_config(&config, SourceSelection::All, &EnvSecrets)?;
    let mut printed = Vec::new();
    let result = engine
        .run_each(|report| {
            printed.push(report.title.clone());
            Ok(())
        })
        .await;

    match result {
        Err(StatsError::EmptySample {
            source_name,
            language,
        }) => {
            assert_eq!(source_name, "Headhunter");
            assert_eq!(language, "Rust");
        }
        other => panic!("expected EmptySample, got {:?}", other),
    }
    assert!(printed.is_empty());

    std::env::remove_var("SALARY_STATS_IT_KEY_LEGACY");
    Ok(())
}

fn mock_headhunter_single_page(hh: &MockServer, items: serde_json::Value) {
    hh.mock(|when, then| {
        when.method(GET).path("/vacancies/").query_param("per_page", "0");
        then.status(200).json_body(json!({"found": 10, "pages": 0, "items": []}));
    });
    hh.mock(|when, then| {
        when.method(GET).path("/vacancies/").query_param("per_page", "100");
        then.status(200).json_body(json!({"found": 10, "pages": 1, "items": items}));
    });
}

#[tokio::test]
async fn test_salary_without_bounds_depends_on_policy() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_headhunter_single_page(
        &hh,
        json!([
            hh_item(Some(100000), Some(200000), "RUR"),
            hh_item(None, None, "RUR")
        ]),
    );

    let mut config = config_for(&hh, &sj, "SALARY_STATS_IT_KEY_UNUSED");
    config.languages = vec!["Go".to_string()];
    config.headhunter.pages = 1;

    let reports = StatsEngine::from_config(&config, SourceSelection::Hh, &EnvSecrets)?
        .run()
        .await?;
    assert_eq!(reports[0].rows[0].vacancies_processed, 1);
    assert_eq!(reports[0].rows[0].average_salary, 150_000);

    config.empty_sample_policy = EmptySamplePolicy::Legacy;
    let reports = StatsEngine::from_config(&config, SourceSelection::Hh, &EnvSecrets)?
        .run()
        .await?;
    assert_eq!(reports[0].rows[0].vacancies_processed, 2);
    assert_eq!(reports[0].rows[0].average_salary, 75_000);
    Ok(())
}

#[tokio::test]
async fn test_legacy_policy_superjob_skips_silently() -> Result<()> {
    std::env::set_var("SALARY_STATS_IT_KEY_SJ", "v3.integration");
    let hh = MockServer::start();
    let sj = MockServer::start();
    mock_boards(&hh, &sj);

    let mut config = config_for(&hh, &sj, "SALARY_STATS_IT_KEY_SJ");
    config.empty_sample_policy = EmptySamplePolicy::Legacy;

    let engine = StatsEngine::from_config(&config, SourceSelection::Sj, &EnvSecrets)?;
    let reports = engine.run().await?;

    assert_eq!(reports.len(), 1);
    let languages: Vec<&str> = reports[0].rows.iter().map(|r| r.language.as_str()).collect();
    assert_eq!(languages, vec!["Go"]);

    std::env::remove_var("SALARY_STATS_IT_KEY_SJ");
    Ok(())
}

#[tokio::test]
async fn test_missing_credential_sends_no_requests() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();
    let sj_mock = sj.mock(|when, then| {
        when.method(GET).path("/2.0/vacancies/");
        then.status(200).json_body(json!({"total": 0, "objects": []}));
    });

    let config = config_for(&hh, &sj, "SALARY_STATS_IT_KEY_NEVER_SET");
    let result = StatsEngine::from_config(&config, SourceSelection::All, &EnvSecrets);

    assert!(matches!(result, Err(StatsError::MissingSecret { .. })));
    sj_mock.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_http_error_aborts_run() -> Result<()> {
    let hh = MockServer::start();
    let sj = MockServer::start();
    hh.mock(|when, then| {
        when.method(GET).path("/vacancies/");
        then.status(500);
    });

    let config = config_for(&hh, &sj, "SALARY_STATS_IT_KEY_UNUSED");
    let engine = StatsEngine::from_config(&config, SourceSelection::Hh, &EnvSecrets)?;
    let result = engine.run().await;

    assert!(matches!(result, Err(StatsError::Http(_))));
    Ok(())
}

#[test]
fn test_config_file_round_trip_through_validation() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
languages = ["Rust"]
empty_sample_policy = "fail"

[headhunter]
pages = 1
"#
    )?;

    let config = StatsConfig::from_file(file.path())?;
    config.validate()?;
    assert_eq!(config.languages, vec!["Rust"]);
    assert_eq!(config.empty_sample_policy, EmptySamplePolicy::Fail);
    assert_eq!(config.headhunter.pages, 1);
    Ok(())
}
