//! Employer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, Set, Unchanged};

use domain::{Employer, EmployerInput};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "employers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub position: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Employer {
    fn from(model: Model) -> Self {
        Employer {
            id: model.id,
            name: model.name,
            email: model.email,
            position: model.position,
        }
    }
}

/// New row; the id is left for the store to assign
impl From<EmployerInput> for ActiveModel {
    fn from(input: EmployerInput) -> Self {
        ActiveModel {
            id: NotSet,
            name: Set(input.name),
            email: Set(input.email),
            position: Set(input.position),
        }
    }
}

/// Full overwrite of an existing row, keyed by its id
impl From<Employer> for ActiveModel {
    fn from(employer: Employer) -> Self {
        ActiveModel {
            id: Unchanged(employer.id),
            name: Set(employer.name),
            email: Set(employer.email),
            position: Set(employer.position),
        }
    }
}
