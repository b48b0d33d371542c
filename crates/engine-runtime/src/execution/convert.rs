use crate::error::ConvertError;
use connectors::file::{csv::source::CsvSource, sql::destination::SqlFileDestination};
use engine_config::{
    report::summary::FileStats,
    settings::{ConvertSettings, policy::RowPolicy},
};
use model::core::identifiers::TableName;
use planner::query::{
    builder::insert::InsertBuilder,
    renderer::{Render, Renderer},
};
use std::path::Path;
use tracing::{debug, warn};

/// Converts one CSV file into an SQL script with one INSERT per data row.
///
/// The script is created (or truncated) once the header has been read and
/// written incrementally; if a row fails, the statements written so far
/// remain in `sql_path`. Both file handles are closed on return.
pub fn convert_file(
    csv_path: &Path,
    sql_path: &Path,
    table: &TableName,
    settings: &ConvertSettings,
) -> Result<FileStats, ConvertError> {
    if table.is_empty() {
        return Err(ConvertError::InvalidTableName(csv_path.display().to_string()));
    }

    let source = CsvSource::open(csv_path, &settings.csv)?;
    let mut destination = SqlFileDestination::create(sql_path)?;
    let builder = InsertBuilder::new(table.clone(), &settings.values);
    let dialect = settings.dialect.dialect();
    let mut stats = FileStats::default();

    for row in source {
        let row = match row {
            Ok(row) => row,
            Err(err) if err.is_malformed_row() && settings.on_malformed_row == RowPolicy::Skip => {
                warn!("Skipping malformed row: {err}");
                stats.rows_skipped += 1;
                continue;
            }
            Err(err) => return Err(err.into()),
        };

        let mut renderer = Renderer::new(dialect);
        builder.build(&row).render(&mut renderer);
        destination.write(&renderer.finish())?;
    }

    stats.rows_written = destination.finish()?;
    debug!(
        "Wrote {} statement(s) for table {} to {}",
        stats.rows_written,
        table,
        sql_path.display()
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use connectors::file::error::FileError;
    use model::core::value::{LiteralStyle, ValuePolicy};
    use planner::query::dialect::DialectKind;
    use std::fs;
    use tempfile::TempDir;
    use tracing_test::traced_test;

    fn setup(content: &str) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("a-x.csv");
        let sql = dir.path().join("a-x.sql");
        fs::write(&csv, content).unwrap();
        (dir, csv, sql)
    }

    #[test]
    fn test_convert_file_plain() {
        let (_dir, csv, sql) = setup("id;name\n1;Alice\n2;Bob\n");

        let stats =
            convert_file(&csv, &sql, &TableName::from("x"), &ConvertSettings::default()).unwrap();

        assert_eq!(stats.rows_written, 2);
        assert_eq!(
            fs::read_to_string(&sql).unwrap(),
            "INSERT INTO x (id, name) VALUES (\"1\", \"Alice\");\n\
             INSERT INTO x (id, name) VALUES (\"2\", \"Bob\");\n"
        );
    }

    #[test]
    fn test_embedded_quotes_are_not_escaped_by_default() {
        let (_dir, csv, sql) = setup("id;note\n1;\"say \"\"hi\"\"\"\n");

        convert_file(&csv, &sql, &TableName::from("x"), &ConvertSettings::default()).unwrap();

        assert_eq!(
            fs::read_to_string(&sql).unwrap(),
            "INSERT INTO x (id, note) VALUES (\"1\", \"say \"hi\"\");\n"
        );
    }

    #[test]
    fn test_typed_policy_with_postgres_dialect() {
        let (_dir, csv, sql) = setup("id;name;age\n1;O'Neil;\n");
        let settings = ConvertSettings {
            dialect: DialectKind::Postgres,
            values: ValuePolicy::new(LiteralStyle::Typed),
            ..Default::default()
        };

        convert_file(&csv, &sql, &TableName::from("people"), &settings).unwrap();

        assert_eq!(
            fs::read_to_string(&sql).unwrap(),
            "INSERT INTO \"people\" (\"id\", \"name\", \"age\") VALUES (1, 'O''Neil', NULL);\n"
        );
    }

    #[test]
    fn test_header_only_creates_empty_script() {
        let (_dir, csv, sql) = setup("id;name\n");

        let stats =
            convert_file(&csv, &sql, &TableName::from("x"), &ConvertSettings::default()).unwrap();

        assert_eq!(stats.rows_written, 0);
        assert_eq!(fs::read_to_string(&sql).unwrap(), "");
    }

    #[test]
    fn test_malformed_row_fails_and_keeps_partial_output() {
        let (_dir, csv, sql) = setup("id;name\n1;Alice\n2\n3;Carol\n");

        let err = convert_file(&csv, &sql, &TableName::from("x"), &ConvertSettings::default())
            .unwrap_err();

        assert!(matches!(
            err,
            ConvertError::File(FileError::MalformedRow { line: 3, .. })
        ));
        assert_eq!(
            fs::read_to_string(&sql).unwrap(),
            "INSERT INTO x (id, name) VALUES (\"1\", \"Alice\");\n"
        );
    }

    #[traced_test]
    #[test]
    fn test_malformed_row_skipped_when_configured() {
        let (_dir, csv, sql) = setup("id;name\n1;Alice\n2;Bob;extra\n3;Carol\n");
        let settings = ConvertSettings {
            on_malformed_row: RowPolicy::Skip,
            ..Default::default()
        };

        let stats = convert_file(&csv, &sql, &TableName::from("x"), &settings).unwrap();

        assert_eq!(stats.rows_written, 2);
        assert_eq!(stats.rows_skipped, 1);
        assert!(logs_contain("Skipping malformed row"));
        let content = fs::read_to_string(&sql).unwrap();
        assert!(!content.contains("Bob"));
    }

    #[test]
    fn test_missing_source_creates_no_script() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("missing.csv");
        let sql = dir.path().join("missing.sql");

        let err = convert_file(&csv, &sql, &TableName::from("missing"), &ConvertSettings::default())
            .unwrap_err();

        assert!(matches!(err, ConvertError::File(FileError::NotFound(_))));
        assert!(!sql.exists());
    }

    #[test]
    fn test_empty_table_name_rejected() {
        let (_dir, csv, sql) = setup("id\n1\n");

        let err = convert_file(&csv, &sql, &TableName::from(""), &ConvertSettings::default())
            .unwrap_err();

        assert!(matches!(err, ConvertError::InvalidTableName(_)));
        assert!(!sql.exists());
    }
}
