use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Public profile of a user. This is what every response carries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default, Validate)]
pub struct User {
    pub user_id: Uuid,
    #[validate(email(message = "is not a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "must contain 1 to 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "must contain 1 to 50 characters"))]
    pub last_name: String,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
}

/// A registered user as persisted: the profile fields and the password
/// flattened into one record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserAccount {
    #[serde(flatten)]
    pub profile: User,
    pub password: String,
}

/// A signup request, checked before it becomes a [`UserAccount`].
#[derive(Debug, Clone, Default, Validate)]
pub struct Registration {
    pub user_id: Uuid,
    #[validate(email(message = "is not a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 50, message = "must contain 8 to 50 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 50, message = "must contain 1 to 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "must contain 1 to 50 characters"))]
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl Registration {
    pub fn into_account(self) -> UserAccount {
        UserAccount {
            profile: User {
                user_id: self.user_id,
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
                birth_date: self.birth_date,
            },
            password: self.password,
        }
    }
}

/// Login input. When `user_id` is given it must belong to the account
/// found by email.
#[derive(Debug, Clone, Default, Validate)]
pub struct Credentials {
    pub user_id: Option<Uuid>,
    #[validate(email(message = "is not a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 50, message = "must contain 8 to 50 characters"))]
    pub password: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct UserProfileUpdate {
    #[validate(email(message = "is not a valid email address"))]
    pub email: String,
    #[validate(length(min = 1, max = 50, message = "must contain 1 to 50 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 50, message = "must contain 1 to 50 characters"))]
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
}

impl UserProfileUpdate {
    pub fn apply_to(self, user: &mut User) {
        user.email = self.email;
        user.first_name = self.first_name;
        user.last_name = self.last_name;
        user.birth_date = self.birth_date;
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn registration() -> Registration {
        Registration {
            user_id: Uuid::nil(),
            email: "a@b.com".into(),
            password: "password1".into(),
            first_name: "A".into(),
            last_name: "B".into(),
            birth_date: None,
        }
    }

    fn violated(errors: &validator::ValidationErrors) -> Vec<String> {
        let mut fields: Vec<_> = errors.errors().keys().map(|k| k.to_string()).collect();
        fields.sort();
        fields
    }

    #[test]
    fn account_serializes_flat() {
        let mut registration = registration();
        registration.birth_date = NaiveDate::from_ymd_opt(1990, 4, 2);

        let value = serde_json::to_value(registration.into_account()).unwrap();
        assert_eq!(
            value,
            json!({
                "user_id": "00000000-0000-0000-0000-000000000000",
                "email": "a@b.com",
                "first_name": "A",
                "last_name": "B",
                "birth_date": "1990-04-02",
                "password": "password1",
            })
        );
    }

    #[test]
    fn registration_reports_every_violation() {
        let mut registration = registration();
        registration.email = "nope".into();
        registration.first_name = String::new();
        registration.last_name = "x".repeat(51);
        registration.password = "short".into();

        let errors = registration.validate().unwrap_err();
        assert_eq!(
            violated(&errors),
            vec!["email", "first_name", "last_name", "password"]
        );
    }

    #[test]
    fn password_bounds() {
        let mut registration = registration();
        registration.password = "x".repeat(8);
        assert!(registration.validate().is_ok());
        registration.password = "x".repeat(50);
        assert!(registration.validate().is_ok());
        registration.password = "x".repeat(51);
        assert!(registration.validate().is_err());
    }

    #[test]
    fn name_length_counts_characters() {
        let mut registration = registration();
        registration.first_name = "\u{e9}".repeat(50);
        assert!(registration.validate().is_ok());
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["plain", "@b.com", "a@@b.com", "a b@c.com"] {
            let update = UserProfileUpdate {
                email: bad.into(),
                first_name: "A".into(),
                last_name: "B".into(),
                birth_date: None,
            };
            let errors = update.validate().unwrap_err();
            assert_eq!(violated(&errors), vec!["email"], "{bad} should be rejected");
        }
    }
}
