use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "domain_list")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub row_id: i64,
    /// Provider account / login identifier
    pub id: String,
    pub real_id: String,
    pub provider: String,
    pub domain: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
