use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // domain_list 表：无唯一约束，同一域名可出现多次
        manager
            .create_table(
                Table::create()
                    .table(DomainList::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DomainList::RowId)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DomainList::Id).string().not_null())
                    .col(ColumnDef::new(DomainList::RealId).string().not_null())
                    .col(ColumnDef::new(DomainList::Provider).string().not_null())
                    .col(ColumnDef::new(DomainList::Domain).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_domain_list_domain")
                    .table(DomainList::Table)
                    .col(DomainList::Domain)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DomainList::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DomainList {
    #[sea_orm(iden = "domain_list")]
    Table,
    RowId,
    Id,
    RealId,
    Provider,
    Domain,
}
