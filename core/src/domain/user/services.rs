use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{ports::UserRepository, value_objects::ReporterRef},
};

/// Resolve a reporter reference to the canonical user id.
///
/// This is the single place where legacy numeric ids are translated; HTTP
/// handlers parse the incoming string into a [`ReporterRef`] and call this
/// instead of sniffing UUIDs themselves.
pub async fn resolve_reporter_ref<U>(
    user_repository: &U,
    reporter: ReporterRef,
) -> Result<Uuid, CoreError>
where
    U: UserRepository,
{
    match reporter {
        ReporterRef::Canonical(id) => Ok(id),
        ReporterRef::Legacy(legacy_id) => {
            let user = user_repository
                .get_by_legacy_id(legacy_id)
                .await?
                .ok_or_else(|| {
                    CoreError::Validation(format!("unknown legacy reporter id: {legacy_id}"))
                })?;
            Ok(user.id)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::entities::{User, UserType};
    use crate::domain::user::ports::MockUserRepository;
    use chrono::Utc;

    fn legacy_user(id: Uuid, legacy_id: i32) -> User {
        User {
            id,
            first_name: "Ana".into(),
            last_name: "Pop".into(),
            email: "ana@example.com".into(),
            user_type: UserType::User,
            department: None,
            active: true,
            legacy_id: Some(legacy_id),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn reporter_ref_parses_uuid_and_legacy() {
        let id = Uuid::new_v4();
        assert_eq!(
            id.to_string().parse::<ReporterRef>().unwrap(),
            ReporterRef::Canonical(id)
        );
        assert_eq!("42".parse::<ReporterRef>().unwrap(), ReporterRef::Legacy(42));
        assert!("not-an-id".parse::<ReporterRef>().is_err());
    }

    #[tokio::test]
    async fn canonical_ref_resolves_without_lookup() {
        let repo = MockUserRepository::new();
        let id = Uuid::new_v4();

        let resolved = resolve_reporter_ref(&repo, ReporterRef::Canonical(id))
            .await
            .unwrap();
        assert_eq!(resolved, id);
    }

    #[tokio::test]
    async fn legacy_ref_translates_through_repository() {
        let id = Uuid::new_v4();
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_legacy_id()
            .withf(|legacy_id| *legacy_id == 7)
            .return_once(move |_| Box::pin(std::future::ready(Ok(Some(legacy_user(id, 7))))));

        let resolved = resolve_reporter_ref(&repo, ReporterRef::Legacy(7))
            .await
            .unwrap();
        assert_eq!(resolved, id);
    }

    #[tokio::test]
    async fn unknown_legacy_ref_is_a_validation_error() {
        let mut repo = MockUserRepository::new();
        repo.expect_get_by_legacy_id()
            .return_once(|_| Box::pin(std::future::ready(Ok(None))));

        let err = resolve_reporter_ref(&repo, ReporterRef::Legacy(99))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }
}
