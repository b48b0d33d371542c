use crate::query::{
    ast::insert::Insert,
    renderer::{Render, Renderer},
};

impl Render for Insert {
    fn render(&self, r: &mut Renderer) {
        // 1. INSERT INTO table (...)
        r.sql.push_str("INSERT INTO ");
        r.render_identifier(self.table.as_str());
        r.sql.push_str(" (");
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.render_identifier(column);
        }
        r.sql.push(')');

        // 2. VALUES (...)
        r.sql.push_str(" VALUES (");
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                r.sql.push_str(", ");
            }
            r.render_literal(value);
        }
        r.sql.push_str(");");
    }
}

#[cfg(test)]
mod tests {
    use crate::query::{
        ast::insert::{Insert, Literal},
        dialect::{MySql, Plain, Postgres},
        renderer::{Render, Renderer},
    };
    use model::core::{identifiers::TableName, value::LiteralStyle};
    use std::sync::Arc;

    fn users_insert(values: Vec<Literal>) -> Insert {
        Insert {
            table: TableName::from("users"),
            columns: Arc::from(vec!["id".to_string(), "name".to_string()]),
            values,
        }
    }

    #[test]
    fn test_render_insert_plain() {
        let ast = users_insert(vec![Literal::quoted("1"), Literal::quoted("Alice")]);

        let mut renderer = Renderer::new(&Plain);
        ast.render(&mut renderer);
        let sql = renderer.finish();

        assert_eq!(
            sql.as_str(),
            r#"INSERT INTO users (id, name) VALUES ("1", "Alice");"#
        );
    }

    #[test]
    fn test_render_insert_postgres_typed() {
        let ast = users_insert(vec![
            Literal::new("1", LiteralStyle::Typed),
            Literal::new("Alice", LiteralStyle::Typed),
        ]);

        let mut renderer = Renderer::new(&Postgres);
        ast.render(&mut renderer);

        assert_eq!(
            renderer.finish().as_str(),
            r#"INSERT INTO "users" ("id", "name") VALUES (1, 'Alice');"#
        );
    }

    #[test]
    fn test_render_insert_mysql() {
        let ast = users_insert(vec![Literal::quoted("2"), Literal::quoted("Bob")]);

        let mut renderer = Renderer::new(&MySql);
        ast.render(&mut renderer);

        assert_eq!(
            renderer.finish().as_str(),
            "INSERT INTO `users` (`id`, `name`) VALUES ('2', 'Bob');"
        );
    }
}
