use sea_orm::entity::prelude::*;

/// A registered company. Phone and email may be absent; an empty string is
/// treated the same as absent by the contact-ready derivation.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(indexed)]
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub in_liquidation: bool,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[sea_orm(indexed)]
    pub company_type_id: Uuid,
    #[sea_orm(indexed)]
    pub legal_seat_id: Uuid,
    #[sea_orm(indexed)]
    pub legal_form_id: Uuid,
    #[sea_orm(indexed)]
    pub canton_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    ContactRecord,
    Note,
    CompanyType,
    LegalSeat,
    LegalForm,
    Canton,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Self::ContactRecord => Entity::has_many(super::contact_record::Entity).into(),
            Self::Note => Entity::has_many(super::company_note::Entity).into(),
            Self::CompanyType => Entity::belongs_to(super::company_type::Entity)
                .from(Column::CompanyTypeId)
                .to(super::company_type::Column::Id)
                .into(),
            Self::LegalSeat => Entity::belongs_to(super::legal_seat::Entity)
                .from(Column::LegalSeatId)
                .to(super::legal_seat::Column::Id)
                .into(),
            Self::LegalForm => Entity::belongs_to(super::legal_form::Entity)
                .from(Column::LegalFormId)
                .to(super::legal_form::Column::Id)
                .into(),
            Self::Canton => Entity::belongs_to(super::canton::Entity)
                .from(Column::CantonId)
                .to(super::canton::Column::Id)
                .into(),
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

impl Related<super::company_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CompanyType.def()
    }
}

impl Related<super::legal_seat::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegalSeat.def()
    }
}

impl Related<super::legal_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LegalForm.def()
    }
}

impl Related<super::canton::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Canton.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
