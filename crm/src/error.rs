use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CrmError {
    #[error("company {0} not found")]
    CompanyNotFound(Uuid),
    #[error(transparent)]
    Db(#[from] DbErr),
}

pub type CrmResult<T> = Result<T, CrmError>;
