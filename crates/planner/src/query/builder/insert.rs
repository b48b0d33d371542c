use crate::query::ast::insert::{Insert, Literal};
use model::{
    core::{identifiers::TableName, value::ValuePolicy},
    records::row::Row,
};

#[derive(Debug, Clone)]
pub struct InsertBuilder<'a> {
    table: TableName,
    policy: &'a ValuePolicy,
}

impl<'a> InsertBuilder<'a> {
    pub fn new(table: TableName, policy: &'a ValuePolicy) -> Self {
        Self { table, policy }
    }

    /// Builds the statement for one row, picking each value's style by column.
    pub fn build(&self, row: &Row) -> Insert {
        let values = row
            .iter()
            .map(|(column, raw)| Literal::new(raw, self.policy.style_for(column)))
            .collect();

        Insert {
            table: self.table.clone(),
            columns: row.header().clone(),
            values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::core::value::LiteralStyle;
    use std::sync::Arc;

    #[test]
    fn test_insert_builder_applies_column_styles() {
        let header: Arc<[String]> = vec!["id".to_string(), "name".to_string()].into();
        let row = Row::new(header, vec!["7".to_string(), "Ann".to_string()]).unwrap();
        let policy = ValuePolicy::default().with_column("id", LiteralStyle::Typed);

        let ast = InsertBuilder::new(TableName::from("people"), &policy).build(&row);

        assert_eq!(ast.table.as_str(), "people");
        assert_eq!(&*ast.columns, &["id".to_string(), "name".to_string()]);
        assert_eq!(
            ast.values,
            vec![
                Literal::new("7", LiteralStyle::Typed),
                Literal::quoted("Ann"),
            ]
        );
    }
}
