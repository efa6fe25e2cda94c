use feast_shared::{Collection, Document, Repository, Result};
use sea_query::{Expr, ExprTrait, OnConflict, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqlitePool, prelude::FromRow};

use crate::table;

#[derive(FromRow)]
struct DocumentRow {
    id: String,
    data: String,
}

impl TryFrom<DocumentRow> for Document {
    type Error = feast_shared::Error;

    fn try_from(row: DocumentRow) -> Result<Self> {
        Ok(Document {
            id: row.id,
            data: serde_json::from_str(&row.data)?,
        })
    }
}

/// [`Repository`] backed by the `document` table.
#[derive(Clone)]
pub struct SqliteRepository {
    pool: SqlitePool,
}

impl SqliteRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait::async_trait]
impl Repository for SqliteRepository {
    async fn all(&self, collection: Collection) -> Result<Vec<Document>> {
        let statement = Query::select()
            .columns([table::Document::Id, table::Document::Data])
            .from(table::Document::Table)
            .and_where(Expr::col(table::Document::Collection).eq(collection.as_ref()))
            .order_by_expr(Expr::cust("rowid"), Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let rows = sqlx::query_as_with::<_, DocumentRow, _>(&sql, values)
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(Document::try_from).collect()
    }

    async fn get(&self, collection: Collection, id: &str) -> Result<Option<Document>> {
        let statement = Query::select()
            .columns([table::Document::Id, table::Document::Data])
            .from(table::Document::Table)
            .and_where(Expr::col(table::Document::Collection).eq(collection.as_ref()))
            .and_where(Expr::col(table::Document::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let row = sqlx::query_as_with::<_, DocumentRow, _>(&sql, values)
            .fetch_optional(&self.pool)
            .await?;

        row.map(Document::try_from).transpose()
    }

    async fn save(&self, collection: Collection, document: Document) -> Result<()> {
        let now = feast_shared::now();
        let data = serde_json::to_string(&document.data)?;

        let statement = Query::insert()
            .into_table(table::Document::Table)
            .columns([
                table::Document::Collection,
                table::Document::Id,
                table::Document::Data,
                table::Document::CreatedAt,
                table::Document::UpdatedAt,
            ])
            .values_panic([
                collection.as_ref().into(),
                document.id.to_owned().into(),
                data.into(),
                now.into(),
                now.into(),
            ])
            .on_conflict(
                OnConflict::columns([table::Document::Collection, table::Document::Id])
                    .update_columns([table::Document::Data, table::Document::UpdatedAt])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.pool).await?;

        tracing::debug!(collection = %collection, id = %document.id, "document saved");

        Ok(())
    }

    async fn delete(&self, collection: Collection, id: &str) -> Result<bool> {
        let statement = Query::delete()
            .from_table(table::Document::Table)
            .and_where(Expr::col(table::Document::Collection).eq(collection.as_ref()))
            .and_where(Expr::col(table::Document::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }
}
