//! Commands for List CRUD

use chrono::{DateTime, SubsecRound, Utc};

use crate::domain::{DomainError, DomainResult, ShoppingList};
use crate::repository::Repository;

pub(crate) fn required_name(name: &str, what: &str) -> DomainResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidInput(format!("{} name is required", what)));
    }
    Ok(name.to_string())
}

/// All lists in display order
pub fn list_lists<R: Repository<ShoppingList>>(repo: &R) -> Vec<ShoppingList> {
    repo.get_all()
}

/// Get list by ID
pub fn get_list<R: Repository<ShoppingList>>(repo: &R, id: &str) -> DomainResult<ShoppingList> {
    repo.get_by_id(id)
        .ok_or_else(|| DomainError::NotFound(format!("list {}", id)))
}

/// Create a new empty list dated `created_at`
pub fn create_list<R: Repository<ShoppingList>>(
    repo: &R,
    name: &str,
    created_at: DateTime<Utc>,
) -> DomainResult<ShoppingList> {
    let list = ShoppingList::new(required_name(name, "list")?, created_at);
    repo.create(&list)?;
    log::info!("created list {}", list.id);
    Ok(list)
}

/// Rename and re-date a list
pub fn update_list_info<R: Repository<ShoppingList>>(
    repo: &R,
    id: &str,
    name: &str,
    created_at: DateTime<Utc>,
) -> DomainResult<ShoppingList> {
    let name = required_name(name, "list")?;
    modify_list(repo, id, |list| {
        list.name = name;
        list.created_at = created_at.trunc_subsecs(3);
        Ok(())
    })
}

/// Flip the completed flag of a whole list
pub fn toggle_list<R: Repository<ShoppingList>>(repo: &R, id: &str) -> DomainResult<ShoppingList> {
    modify_list(repo, id, |list| {
        list.completed = !list.completed;
        Ok(())
    })
}

/// Delete list. Unknown ids are ignored.
pub fn delete_list<R: Repository<ShoppingList>>(repo: &R, id: &str) -> DomainResult<()> {
    repo.delete(id)?;
    Ok(())
}

/// Read a list, apply `change`, write it back and return the new state
pub(crate) fn modify_list<R, F>(repo: &R, id: &str, change: F) -> DomainResult<ShoppingList>
where
    R: Repository<ShoppingList>,
    F: FnOnce(&mut ShoppingList) -> DomainResult<()>,
{
    let mut list = get_list(repo, id)?;
    change(&mut list)?;
    repo.update(&list)?;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{ListRepository, MemoryStorage};
    use chrono::TimeZone;

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_create_list_trims_and_rejects_blank() {
        let repo = ListRepository::new(MemoryStorage::new());
        let list = create_list(&repo, "  Market ", day(1)).unwrap();
        assert_eq!(list.name, "Market");
        assert_eq!(list.created_at, day(1));

        let err = create_list(&repo, "   ", day(1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
        assert_eq!(list_lists(&repo).len(), 1);
    }

    #[test]
    fn test_update_list_info() {
        let repo = ListRepository::new(MemoryStorage::new());
        let list = create_list(&repo, "Market", day(1)).unwrap();

        let updated = update_list_info(&repo, &list.id, "Farmers market", day(4)).unwrap();
        assert_eq!(updated.name, "Farmers market");
        assert_eq!(get_list(&repo, &list.id).unwrap().created_at, day(4));

        assert!(matches!(update_list_info(&repo, &list.id, "", day(4)), Err(DomainError::InvalidInput(_))));
        assert!(matches!(update_list_info(&repo, "nope", "x", day(4)), Err(DomainError::NotFound(_))));
    }

    #[test]
    fn test_toggle_and_delete_list() {
        let repo = ListRepository::new(MemoryStorage::new());
        let list = create_list(&repo, "Market", day(1)).unwrap();

        assert!(toggle_list(&repo, &list.id).unwrap().completed);
        assert!(!toggle_list(&repo, &list.id).unwrap().completed);

        delete_list(&repo, "unknown").unwrap();
        assert_eq!(list_lists(&repo).len(), 1);
        delete_list(&repo, &list.id).unwrap();
        assert!(list_lists(&repo).is_empty());
    }
}
