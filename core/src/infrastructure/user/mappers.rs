use crate::{
    domain::user::entities::{User, UserType},
    entity::users,
};

impl From<&users::Model> for User {
    fn from(model: &users::Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            email: model.email.clone(),
            user_type: model.user_type.parse().unwrap_or(UserType::User),
            department: model.department.clone(),
            active: model.active,
            legacy_id: model.legacy_id,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self::from(&model)
    }
}
