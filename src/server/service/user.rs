//! Local account management.

use entity::sea_orm_active_enums::{SocialAuth, UserStatus};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{user::UserError, AppError},
    model::user::{ChangePasswordParams, CreateUserParams, FindIdParams, SignUpParams, User},
    service::auth::{
        jwt::JwtService,
        password::{hash_password, verify_password},
        phone::phone_digest,
    },
    util::validate,
};

const PASSWORD_MIN: usize = 8;
const PASSWORD_MAX: usize = 20;

/// Service for sign-up, log-in and account maintenance of email/password users.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    config: &'a Config,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection, config: &'a Config) -> Self {
        Self { db, config }
    }

    /// Registers a local account.
    ///
    /// Field shapes are checked first, then the password confirmation, then uniqueness of
    /// email, nickname and phone number in that order.
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::Validation)` - Malformed field
    /// - `Err(UserError::PasswordMismatch)` - Confirmation differs
    /// - `Err(UserError::EmailConflict | NicknameConflict | PhoneNumConflict)` - Already taken
    pub async fn sign_up(&self, params: SignUpParams) -> Result<User, AppError> {
        validate::email(&params.email)?;
        validate::length("password", &params.password, PASSWORD_MIN, PASSWORD_MAX)?;
        validate::length("name", &params.name, 2, 20)?;
        validate::length("nickname", &params.nickname, 2, 20)?;
        let digits = validate::phone_digits(&params.phone_num)?;

        if params.password != params.checked_password {
            return Err(UserError::PasswordMismatch.into());
        }

        let user_repo = UserRepository::new(self.db);
        let digest = phone_digest(&self.config.phone_pepper, &digits)?;

        if user_repo.email_exists(&params.email).await? {
            return Err(UserError::EmailConflict.into());
        }
        if user_repo.nickname_exists(&params.nickname).await? {
            return Err(UserError::NicknameConflict.into());
        }
        if user_repo.phone_exists(&digest).await? {
            return Err(UserError::PhoneNumConflict.into());
        }

        let user = user_repo
            .create(CreateUserParams {
                email: params.email,
                password_hash: hash_password(&params.password)?,
                name: params.name,
                nickname: params.nickname,
                birth: params.birth,
                gender: Some(params.gender),
                phone_digest: Some(digest),
                social_auth: SocialAuth::None,
                social_id: None,
            })
            .await?;

        tracing::info!("User {} signed up", user.id);

        Ok(user)
    }

    /// Checks credentials and issues an access token.
    ///
    /// Unknown email, wrong password and withdrawn accounts all fail the same way.
    ///
    /// # Returns
    /// - `Ok(String)` - Access token
    /// - `Err(UserError::InvalidCredentials)` - Credentials rejected
    pub async fn log_in(&self, email: &str, password: &str) -> Result<String, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email.trim()).await? else {
            return Err(UserError::InvalidCredentials.into());
        };

        if !user.is_active() || !verify_password(password, &user.password_hash) {
            return Err(UserError::InvalidCredentials.into());
        }

        let token = JwtService::new(self.config).create(&user.email)?;

        Ok(token)
    }

    /// Replaces the password of an authenticated user.
    ///
    /// # Returns
    /// - `Ok(())` - Password updated
    /// - `Err(UserError::IncorrectPassword)` - Current password wrong
    /// - `Err(UserError::NewPasswordMismatch)` - Confirmation differs
    /// - `Err(UserError::PasswordUnchanged)` - New password equals the current one
    /// - `Err(UserError::PasswordLength)` - New password outside 8 to 20 characters
    pub async fn change_password(
        &self,
        user: &User,
        params: ChangePasswordParams,
    ) -> Result<(), AppError> {
        if !verify_password(&params.current_password, &user.password_hash) {
            return Err(UserError::IncorrectPassword.into());
        }
        if params.new_password != params.confirm_password {
            return Err(UserError::NewPasswordMismatch.into());
        }
        if params.new_password == params.current_password {
            return Err(UserError::PasswordUnchanged.into());
        }

        let len = params.new_password.chars().count();
        if !(PASSWORD_MIN..=PASSWORD_MAX).contains(&len) {
            return Err(UserError::PasswordLength.into());
        }

        UserRepository::new(self.db)
            .update_password(user.id, hash_password(&params.new_password)?)
            .await?;

        Ok(())
    }

    /// Looks up the email of an active account by name, birth date and phone number.
    ///
    /// # Returns
    /// - `Ok(String)` - Email of the matching account
    /// - `Err(UserError::NotFound)` - No active account matches
    pub async fn find_id(&self, params: FindIdParams) -> Result<String, AppError> {
        let digits = validate::phone_digits(&params.phone_num)?;
        let digest = phone_digest(&self.config.phone_pepper, &digits)?;

        let user = UserRepository::new(self.db)
            .find_by_identity(&params.name, params.birth, &digest)
            .await?
            .ok_or(UserError::NotFound)?;

        Ok(user.email)
    }

    /// Withdraws the account. The row is kept with status `inactive`.
    pub async fn withdraw(&self, user: &User) -> Result<(), AppError> {
        UserRepository::new(self.db)
            .set_status(user.id, UserStatus::Inactive)
            .await?;

        tracing::info!("User {} withdrew", user.id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use entity::sea_orm_active_enums::Gender;
    use test_utils::builder::TestBuilder;

    use super::*;
    use crate::server::test_support::test_config;

    fn sign_up_params(email: &str, nickname: &str, phone: &str) -> SignUpParams {
        SignUpParams {
            email: email.to_string(),
            password: "password123".to_string(),
            checked_password: "password123".to_string(),
            name: "Cook".to_string(),
            nickname: nickname.to_string(),
            birth: NaiveDate::from_ymd_opt(1995, 4, 2).unwrap(),
            gender: Gender::Female,
            phone_num: phone.to_string(),
        }
    }

    /// Tests a successful sign-up followed by log-in.
    ///
    /// Expected: stored password is hashed and the issued token decodes to the email
    #[tokio::test]
    async fn signs_up_and_logs_in() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = test_config();
        let service = UserService::new(db, &config);

        let user = service
            .sign_up(sign_up_params("cook@example.com", "cook", "010-1234-5678"))
            .await?;
        assert_ne!(user.password_hash, "password123");
        assert_eq!(user.social_auth, SocialAuth::None);

        let token = service.log_in("cook@example.com", "password123").await?;
        let subject = JwtService::new(&config).decode(&token)?;
        assert_eq!(subject, "cook@example.com");

        Ok(())
    }

    /// Tests duplicate email, nickname and phone checks.
    ///
    /// Expected: conflict error for each taken field
    #[tokio::test]
    async fn rejects_taken_identity_fields() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = test_config();
        let service = UserService::new(db, &config);

        service
            .sign_up(sign_up_params("cook@example.com", "cook", "01012345678"))
            .await?;

        let email = service
            .sign_up(sign_up_params("cook@example.com", "other", "01000000000"))
            .await;
        assert!(matches!(email, Err(AppError::UserErr(UserError::EmailConflict))));

        let nickname = service
            .sign_up(sign_up_params("new@example.com", "cook", "01000000000"))
            .await;
        assert!(matches!(
            nickname,
            Err(AppError::UserErr(UserError::NicknameConflict))
        ));

        let phone = service
            .sign_up(sign_up_params("new@example.com", "other", "010-1234-5678"))
            .await;
        assert!(matches!(
            phone,
            Err(AppError::UserErr(UserError::PhoneNumConflict))
        ));

        Ok(())
    }

    /// Tests sign-up input checks.
    ///
    /// Expected: Validation for a short password, PasswordMismatch for a differing confirmation
    #[tokio::test]
    async fn validates_sign_up_input() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = test_config();
        let service = UserService::new(db, &config);

        let mut short = sign_up_params("cook@example.com", "cook", "01012345678");
        short.password = "short".to_string();
        short.checked_password = "short".to_string();
        assert!(matches!(
            service.sign_up(short).await,
            Err(AppError::Validation(_))
        ));

        let mut mismatch = sign_up_params("cook@example.com", "cook", "01012345678");
        mismatch.checked_password = "password999".to_string();
        assert!(matches!(
            service.sign_up(mismatch).await,
            Err(AppError::UserErr(UserError::PasswordMismatch))
        ));

        Ok(())
    }

    /// Tests log-in failures.
    ///
    /// Expected: InvalidCredentials for a wrong password, unknown email and withdrawn account
    #[tokio::test]
    async fn rejects_bad_credentials() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = test_config();
        let service = UserService::new(db, &config);

        let user = service
            .sign_up(sign_up_params("cook@example.com", "cook", "01012345678"))
            .await?;

        for (email, password) in [
            ("cook@example.com", "wrong-password"),
            ("nobody@example.com", "password123"),
        ] {
            assert!(matches!(
                service.log_in(email, password).await,
                Err(AppError::UserErr(UserError::InvalidCredentials))
            ));
        }

        service.withdraw(&user).await?;
        assert!(matches!(
            service.log_in("cook@example.com", "password123").await,
            Err(AppError::UserErr(UserError::InvalidCredentials))
        ));

        Ok(())
    }

    /// Tests the password change rules.
    ///
    /// Expected: each rule yields its own error and a valid change lets the new password log in
    #[tokio::test]
    async fn changes_password() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = test_config();
        let service = UserService::new(db, &config);

        let user = service
            .sign_up(sign_up_params("cook@example.com", "cook", "01012345678"))
            .await?;

        let change = |current: &str, new: &str, confirm: &str| ChangePasswordParams {
            current_password: current.to_string(),
            new_password: new.to_string(),
            confirm_password: confirm.to_string(),
        };

        assert!(matches!(
            service
                .change_password(&user, change("wrong-pass", "newpassword", "newpassword"))
                .await,
            Err(AppError::UserErr(UserError::IncorrectPassword))
        ));
        assert!(matches!(
            service
                .change_password(&user, change("password123", "newpassword", "otherpassword"))
                .await,
            Err(AppError::UserErr(UserError::NewPasswordMismatch))
        ));
        assert!(matches!(
            service
                .change_password(&user, change("password123", "password123", "password123"))
                .await,
            Err(AppError::UserErr(UserError::PasswordUnchanged))
        ));
        assert!(matches!(
            service
                .change_password(&user, change("password123", "short", "short"))
                .await,
            Err(AppError::UserErr(UserError::PasswordLength))
        ));

        service
            .change_password(&user, change("password123", "newpassword", "newpassword"))
            .await?;
        service.log_in("cook@example.com", "newpassword").await?;

        Ok(())
    }

    /// Tests finding an email by identity details.
    ///
    /// Expected: email for a match regardless of phone formatting, NotFound otherwise
    #[tokio::test]
    async fn finds_id_by_identity() -> Result<(), AppError> {
        let test = TestBuilder::new().with_user_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = test_config();
        let service = UserService::new(db, &config);

        let user = service
            .sign_up(sign_up_params("cook@example.com", "cook", "01012345678"))
            .await?;

        let email = service
            .find_id(FindIdParams {
                name: "Cook".to_string(),
                birth: user.birth,
                phone_num: "010-1234-5678".to_string(),
            })
            .await?;
        assert_eq!(email, "cook@example.com");

        let missing = service
            .find_id(FindIdParams {
                name: "Someone".to_string(),
                birth: user.birth,
                phone_num: "01012345678".to_string(),
            })
            .await;
        assert!(matches!(missing, Err(AppError::UserErr(UserError::NotFound))));

        Ok(())
    }
}
