//! SeaORM entities for the company registry.

pub mod canton;
pub mod company;
pub mod company_note;
pub mod company_type;
pub mod contact_record;
pub mod legal_form;
pub mod legal_seat;
pub mod user;
