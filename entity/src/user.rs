use sea_orm::entity::prelude::*;

/// Staff account. Exists so contact records and notes can reference their
/// acting principal; credentials and sessions live outside this crate.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: Option<String>,
    pub display_name: String,
    pub role: Role,
    pub is_superuser: bool,
    pub is_active: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ContactRecord,
    Note,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ContactRecord => Entity::has_many(super::contact_record::Entity).into(),
            Self::Note => Entity::has_many(super::company_note::Entity).into(),
        }
    }
}

impl Related<super::contact_record::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ContactRecord.def()
    }
}

impl Related<super::company_note::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Note.def()
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveActiveEnum, Eq, PartialEq)]
#[sea_orm(rs_type = "String", db_type = "String(Some(20))")]
pub enum Role {
    #[sea_orm(string_value = "manager")]
    Manager,
    #[sea_orm(string_value = "operator")]
    Operator,
}

impl ActiveModelBehavior for ActiveModel {}
