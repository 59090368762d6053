// Integration test for cleaning with the summary block enabled
use logsift::cleaner::LogCleaner;
use logsift::config::Config;
use logsift::summary::{build_summary, SummaryCounters};

fn summary_cleaner() -> LogCleaner {
    let mut config = Config::default();
    config.summary.enabled = true;
    LogCleaner::from_config(&config).unwrap()
}

#[test]
fn test_empty_input_renders_zero_counters() {
    let out = summary_cleaner().clean("");

    assert_eq!(
        out.text,
        "=== LOG SUMMARY ===\n\
         Total lines after cleanup: 0\n\
         Season selections: 0\n\
         API calls: 0\n\
         Errors/Warnings: 0\n\
         \n\
         === CLEANED LOG DATA ===\n"
    );
}

#[test]
fn test_api_call_counter_matches_reduced_output() {
    let input = "\
D/TMDbTVRepository: API CALL: getTvDetails(1)
D/TMDbTVRepository: API RESULT: success
D/TMDbTVRepository: API CALL: getSeason(1, 2)
D/TMDbTVRepository: API CALL: getCredits(1)
I/okhttp.OkHttpClient: API CALL: hidden by noise";

    let out = summary_cleaner().clean(input);
    assert!(out.text.contains("\nAPI calls: 3\n"));
    assert!(out.text.contains("\nTotal lines after cleanup: 4\n"));
}

#[test]
fn test_seven_errors_list_five() {
    let input: Vec<String> = (1..=7)
        .map(|i| format!("E/TVDetailsViewModel: Error loading episode {}", i))
        .collect();

    let out = summary_cleaner().clean(&input.join("\n"));

    let listed = "=== ERRORS/WARNINGS ===\n\
                  E/TVDetailsViewModel: Error loading episode 1\n\
                  E/TVDetailsViewModel: Error loading episode 2\n\
                  E/TVDetailsViewModel: Error loading episode 3\n\
                  E/TVDetailsViewModel: Error loading episode 4\n\
                  E/TVDetailsViewModel: Error loading episode 5\n\
                  ... and 2 more errors\n\
                  \n\
                  === CLEANED LOG DATA ===\n";
    assert!(out.text.contains(listed));
    assert!(out.text.contains("Errors/Warnings: 7\n"));
    assert!(out.text.ends_with("E/TVDetailsViewModel: Error loading episode 7"));
}

#[test]
fn test_season_selection_markers() {
    let reduced = "D/SeasonSelector: Season Selection: 1\n\
                   D/SeasonSelector: Selecting season 2\n\
                   D/SeasonSelector: season selection lowercase";

    let counters = SummaryCounters::from_text(reduced);
    assert_eq!(counters.season_selections, 2);
    assert_eq!(counters.total_lines, 3);
}

#[test]
fn test_summary_appends_data_verbatim() {
    let reduced = "WARNING low memory\nshouldFetch=false";
    let out = build_summary(reduced);

    assert!(out.ends_with("=== CLEANED LOG DATA ===\nWARNING low memory\nshouldFetch=false"));
    assert!(out.contains("=== ERRORS/WARNINGS ===\nWARNING low memory\n\n"));
}
