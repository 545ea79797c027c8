//! Property-based tests for multi_logger using proptest

use multi_logger::prelude::*;
use multi_logger::{parse_level, parse_size, sprint};
use proptest::prelude::*;
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

// ============================================================================
// Level parsing
// ============================================================================

proptest! {
    /// Canonical names parse back to their level, whatever the case and padding
    #[test]
    fn test_parse_level_roundtrip(
        level in any_level(),
        upper in any::<bool>(),
        padding in "[ \r\n]{0,3}",
    ) {
        let name = if upper { level.to_str().to_string() } else { level.to_str().to_lowercase() };
        let input = format!("{}{}{}", padding, name, padding);
        prop_assert_eq!(parse_level(&input), level);
    }

    /// Parsing never panics, and unrecognised input means info
    #[test]
    fn test_parse_level_unknown_is_info(input in "[a-z]{6,12}") {
        let known = ["trace", "debug", "info", "warn", "warning", "error", "fatal"];
        prop_assume!(!known.contains(&input.as_str()));
        prop_assert_eq!(parse_level(&input), LogLevel::Info);
    }

    /// Labels start with the level's short name and end with a single space
    #[test]
    fn test_label_shape(level in any_level()) {
        let label = level.label();
        prop_assert!(label.ends_with(' '));
        prop_assert!(!label.trim_end().contains(' '));
        prop_assert_eq!(LogLevel::from_line_prefix(&format!("{}x", label)), Some(level));
    }
}

// ============================================================================
// Sizes
// ============================================================================

proptest! {
    #[test]
    fn test_parse_size_suffixes(value in 0u64..(1 << 30), suffix in 0usize..4, upper in any::<bool>()) {
        let (text, multiplier) = match suffix {
            0 => ("", 1u64),
            1 => ("k", 1 << 10),
            2 => ("m", 1 << 20),
            _ => ("g", 1 << 30),
        };
        let text = if upper { text.to_uppercase() } else { text.to_string() };
        let input = format!("{}{}", value, text);
        prop_assert_eq!(parse_size(&input).unwrap(), value * multiplier);
    }

    #[test]
    fn test_parse_size_hex(value in 0u64..(1 << 40)) {
        prop_assert_eq!(parse_size(&format!("0x{:x}", value)).unwrap(), value);
    }
}

// ============================================================================
// Routing
// ============================================================================

proptest! {
    /// Each level reaches console, file, both or nothing by the two thresholds
    #[test]
    fn test_builder_routing_thresholds(
        console_level in any_level(),
        file_level in any_level(),
        console_on in any::<bool>(),
        file_on in any::<bool>(),
    ) {
        let console = Arc::new(MemorySink::named("console"));
        let file = Arc::new(MemorySink::named("file"));
        let config = Config::new()
            .with_console(console_on, console_level)
            .with_file(false, file_level);
        let builder = Builder::new(&config)
            .with_console_sink(console_on.then(|| console.clone() as SharedSink))
            .with_file_sink(file_on.then(|| file.clone() as SharedSink));
        let logger = builder.logger("p: ");

        for level in LogLevel::ALL {
            let to_console = console_on && level >= console_level;
            let to_file = file_on && level >= file_level;
            let expected = match (to_console, to_file) {
                (true, true) => Some("fan_out"),
                (true, false) => Some("console"),
                (false, true) => Some("file"),
                (false, false) => None,
            };
            let routed = logger.get(level);
            prop_assert_eq!(routed.as_ref().map(|sink| sink.name()), expected);
        }

        logger.warn("w");
        let warn_to_console = console_on && LogLevel::Warn >= console_level;
        let warn_to_file = file_on && LogLevel::Warn >= file_level;
        prop_assert_eq!(console.len(), usize::from(warn_to_console));
        prop_assert_eq!(file.len(), usize::from(warn_to_file));
    }

    /// A copied table matches its source entry for entry
    #[test]
    fn test_copy_from_matches_source(levels in proptest::collection::vec(any_level(), 0..6)) {
        let sink: SharedSink = Arc::new(MemorySink::named("src"));
        let source = NamedLogger::with_sink("s: ", sink, Some(levels.as_slice()));
        let target = NamedLogger::with_sink("t: ", Arc::new(MemorySink::named("dst")), None);

        target.copy_from(&source);

        prop_assert_eq!(target.table().routed_levels(), source.table().routed_levels());
        for (_, routed) in target.table().entries() {
            prop_assert_eq!(routed.name(), "src");
        }
    }
}

// ============================================================================
// Message rendering
// ============================================================================

proptest! {
    #[test]
    fn test_sprint_joins_with_single_spaces(words in proptest::collection::vec("[a-z0-9]{1,8}", 0..8)) {
        let args: Vec<&dyn std::fmt::Display> = words.iter().map(|w| w as &dyn std::fmt::Display).collect();
        prop_assert_eq!(sprint(&args), words.join(" "));
    }

    #[test]
    fn test_rendered_line_shape(level in any_level(), name in "[a-z]{0,6}", message in "[ -~]{0,40}") {
        let sink = Arc::new(MemorySink::new());
        let logger = NamedLogger::with_sink(name.clone(), sink.clone(), None);

        let _ = logger.emit(0, level, &message);

        prop_assert_eq!(sink.lines(), vec![format!("{}{}{}", level.label(), name, message)]);
    }
}
