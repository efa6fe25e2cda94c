mod document;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "feast",
    "m0_1",
    vec_box![],
    vec_box![document::CreateTable, document::CreateIdx1]
);
