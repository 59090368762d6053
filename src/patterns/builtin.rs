// Hardcoded pattern tables for Android TV app logs (com.rdwatch.androidtv)

/// HTTP header dumps, raw TMDb JSON fields and repetitive view-model debug output
pub const NOISE_PATTERNS: &[&str] = &[
    // OkHttp request/response details
    r"okhttp\.OkHttpClient",
    r"content-type:",
    r"cache-control:",
    r"x-memc",
    r"etag:",
    r"age:",
    r"vary:",
    r"server:",
    r"date:",
    r"alt-svc:",
    r"via:",
    r"x-amz-cf",
    r"x-cache:",
    r"x-task-id:",
    r"x-az:",
    // Raw JSON response fields
    r#""adult":false"#,
    r#""gender":\d+"#,
    r#""known_for_department""#,
    r#""popularity":\d+\.\d+"#,
    r#""profile_path""#,
    r#""credit_id""#,
    r#""order":\d+"#,
    r#""backdrop_path""#,
    r#""poster_path""#,
    r#""vote_average""#,
    r#""vote_count""#,
    // Repetitive debug messages
    r"DEBUG \[TVDetailsViewModel\]: State updated",
    r"System\.out.*DEBUG \[TVDetailsViewModel\]",
];

pub const IMPORTANT_PATTERNS: &[&str] = &[
    r"SeasonSelector",
    r"TVDetailsViewModel.*(?:Season|Episode)",
    r"TMDbTVRepository",
    r"NetworkBoundResource.*API call",
    r"API CALL:",
    r"API RESULT:",
    r"shouldFetch",
    r"Error",
    r"WARNING",
    // Debug section headers
    r"===.*===",
    r"Mapped season from DB",
    r"Loading season",
    r"validation",
];

pub const IMPORTANT_KEYWORDS: &[&str] = &[
    "ERROR",
    "WARNING",
    "EXCEPTION",
    "CRASH",
    "FAIL",
    "Season Selection",
    "Episode Selection",
    "Loading",
    "API CALL",
    "API RESULT",
    "shouldFetch",
    "validation",
    "SeasonSelector",
    "episodes.size",
    "episodeCount",
];

/// Known-verbose internal dumps, consulted only by profiles that deny them
pub const VERBOSE_DUMP_PATTERNS: &[&str] = &[
    r"Bundle\[\{",
    r"<-- END HTTP",
    r"--> END (?:GET|POST|PUT|PATCH|DELETE)",
    r"Dumping (?:database|cursor)",
    r"Choreographer.*Skipped \d+ frames",
    r"ViewRootImpl",
];
