use sea_query::Iden;

#[derive(Iden, Clone)]
pub enum Document {
    Table,
    Collection,
    Id,
    Data,
    CreatedAt,
    UpdatedAt,
}
