use std::sync::Once;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

static INIT_LOGGER: Once = Once::new();

/// Route `log` output from the code under test through a test-aware
/// `tracing` subscriber. The level is read from the `LOG_LEVEL` environment
/// variable.
pub(crate) fn setup_logger() {
    INIT_LOGGER.call_once(|| {
        let env_val =
            std::env::var("LOG_LEVEL")
                .map(|s| s.trim().to_string());

        let mut log_level_warnings: Vec<String> = vec![];
        let log_level = match env_val.as_deref() {
            Ok("DEBUG" | "debug") => tracing::Level::DEBUG,
            Ok("INFO" | "info") => tracing::Level::INFO,
            Ok("TRACE" | "trace") => tracing::Level::TRACE,
            Ok(other) => {
                log_level_warnings.push(format!(
                    "Invalid `LOG_LEVEL` environment variable value: \
                    `{other}`"
                ));
                DEFAULT_LOG_LEVEL
            },
            Err(_) => DEFAULT_LOG_LEVEL,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();

        for warning in log_level_warnings.drain(..) {
            log::warn!("{warning}");
        }
    });
}

pub(crate) fn parse_document(source: &str) -> crate::ast::Document {
    setup_logger();
    crate::ast::parse(source).unwrap()
}

/// The selection set of the `idx`th definition in `document`.
pub(crate) fn definition_node(
    document: &crate::ast::Document,
    idx: usize,
) -> crate::schema::SourceNode<'_> {
    match &document.definitions[idx] {
        crate::ast::Definition::Fragment(fragment) => fragment.into(),
        crate::ast::Definition::Operation(operation) => operation.into(),
    }
}

pub(crate) fn first_field(selection_set: &crate::ast::SelectionSet) -> &crate::ast::Field {
    match selection_set.items.first() {
        Some(crate::ast::Selection::Field(field)) => field,
        other => panic!("Expected a field selection, found: {other:?}"),
    }
}

pub(crate) fn empty_selection_set() -> crate::ast::SelectionSet {
    crate::ast::SelectionSet {
        span: (pos(), pos()),
        items: vec![],
    }
}

pub(crate) fn pos() -> crate::ast::AstPos {
    crate::ast::AstPos {
        line: 1,
        column: 1,
    }
}
