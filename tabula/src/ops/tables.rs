//! Tables operation - list what the schema source can see.

use eyre::Result;
use tabula_manifest::{Engine, Manifest};
use tabula_schema::{MySqlDialect, PostgresDialect, SchemaDialect};

use crate::{ops::generate::open_source, reports::TablesReport};

/// Execute the tables operation.
pub fn tables(manifest: &Manifest, show_query: bool) -> Result<TablesReport> {
    let mut source = open_source(manifest)?;
    let tables = source.table_names()?;
    let catalog_query = show_query.then(|| dialect_for(manifest.project.engine).tables_query());

    Ok(TablesReport {
        project: manifest.project.name.clone(),
        engine: manifest.project.engine.to_string(),
        tables,
        catalog_query,
    })
}

fn dialect_for(engine: Engine) -> Box<dyn SchemaDialect> {
    match engine {
        Engine::Mysql => Box::new(MySqlDialect),
        Engine::Postgres => Box::new(PostgresDialect),
    }
}
