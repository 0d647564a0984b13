//! Collection operations shared by every repository backend. Each one
//! works on the full in-memory list of records and leaves it untouched
//! when it fails.

use uuid::Uuid;

use crate::domain::{
    errors::{DomainError, DomainResult},
    models::{UserAccount, UserProfileUpdate},
    repositories::Record,
};

pub fn find_by_id<'a, T: Record>(records: &'a [T], id: &Uuid) -> Option<&'a T> {
    records.iter().find(|r| r.id() == *id)
}

pub fn insert<T: Record + Clone>(records: &mut Vec<T>, record: T) -> DomainResult<T> {
    if find_by_id(records, &record.id()).is_some() {
        return Err(DomainError::AlreadyExists(format!(
            "{} {}",
            T::KIND,
            record.id()
        )));
    }
    records.push(record.clone());
    Ok(record)
}

pub fn edit<T, F>(records: &mut [T], id: &Uuid, change: F) -> DomainResult<T>
where
    T: Record + Clone,
    F: FnOnce(&mut T),
{
    let slot = records
        .iter_mut()
        .find(|r| r.id() == *id)
        .ok_or_else(|| not_found::<T>(id))?;
    change(slot);
    Ok(slot.clone())
}

pub fn remove<T: Record>(records: &mut Vec<T>, id: &Uuid) -> DomainResult<T> {
    let index = records
        .iter()
        .position(|r| r.id() == *id)
        .ok_or_else(|| not_found::<T>(id))?;
    Ok(records.remove(index))
}

pub fn find_by_email<'a>(accounts: &'a [UserAccount], email: &str) -> Option<&'a UserAccount> {
    accounts
        .iter()
        .find(|a| a.profile.email.eq_ignore_ascii_case(email))
}

pub fn insert_account(
    accounts: &mut Vec<UserAccount>,
    account: UserAccount,
) -> DomainResult<UserAccount> {
    ensure_email_free(accounts, &account.profile.email, None)?;
    insert(accounts, account)
}

pub fn update_profile(
    accounts: &mut [UserAccount],
    id: &Uuid,
    update: UserProfileUpdate,
) -> DomainResult<UserAccount> {
    if find_by_id(accounts, id).is_none() {
        return Err(not_found::<UserAccount>(id));
    }
    ensure_email_free(accounts, &update.email, Some(*id))?;
    edit(accounts, id, |account| update.apply_to(&mut account.profile))
}

fn ensure_email_free(
    accounts: &[UserAccount],
    email: &str,
    owner: Option<Uuid>,
) -> DomainResult<()> {
    match find_by_email(accounts, email) {
        Some(existing) if Some(existing.profile.user_id) != owner => Err(
            DomainError::AlreadyExists(format!("user with email {email}")),
        ),
        _ => Ok(()),
    }
}

fn not_found<T: Record>(id: &Uuid) -> DomainError {
    DomainError::NotFound(format!("{} {id}", T::KIND))
}
