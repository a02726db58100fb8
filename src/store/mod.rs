//! In-memory record store
//!
//! [`RecordStore`] is the single owner of the user collection. Mutations are
//! synchronous and total: a missing id is a silent no-op, never an error.
//! Read-side queries delegate to the pure pipeline in [`query`].

pub mod query;

use crate::types::{NewUser, UserId, UserPatch, UserRecord};

pub use query::{FilterOptions, Filters, QueryState};

/// Authoritative holder of the user records for one session
#[derive(Debug, Clone)]
pub struct RecordStore {
    users: Vec<UserRecord>,
    next_id: UserId,
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore {
    /// Create an empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store seeded with existing records.
    ///
    /// Records repeating an earlier id are dropped. The id counter starts
    /// one above the largest seeded id.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let mut users: Vec<UserRecord> = Vec::with_capacity(records.len());
        for record in records {
            if users.iter().any(|u| u.id == record.id) {
                tracing::warn!("dropping seed record with duplicate id {}", record.id);
                continue;
            }
            users.push(record);
        }
        let next_id = users.iter().map(|u| u.id).max().map_or(1, |max| max + 1);
        Self { users, next_id }
    }

    /// All records in insertion order
    pub fn records(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// The id the next `add` will assign
    pub fn next_id(&self) -> UserId {
        self.next_id
    }

    /// Append a record, assigning it a fresh id.
    ///
    /// Ids come from a running counter, so an id is never handed out twice
    /// even after the record holding it is deleted. Email and phone are not
    /// checked for duplicates.
    pub fn add(&mut self, user: NewUser) -> UserId {
        let id = self.next_id;
        self.next_id += 1;
        self.users.push(user.into_record(id));
        tracing::debug!(id, "added user");
        id
    }

    /// Merge `patch` into the record with `id`. Returns whether a record matched.
    pub fn update(&mut self, id: UserId, patch: UserPatch) -> bool {
        match self.users.iter_mut().find(|u| u.id == id) {
            Some(user) => {
                user.apply(patch);
                tracing::debug!(id, "updated user");
                true
            }
            None => {
                tracing::warn!(id, "update ignored: no such user");
                false
            }
        }
    }

    /// Remove the record with `id`. Returns whether a record was removed.
    pub fn delete(&mut self, id: UserId) -> bool {
        let before = self.users.len();
        self.users.retain(|u| u.id != id);
        let removed = self.users.len() != before;
        if removed {
            tracing::debug!(id, "deleted user");
        } else {
            tracing::warn!(id, "delete ignored: no such user");
        }
        removed
    }

    pub fn get(&self, id: UserId) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Records matching the search text and filters of `query`
    pub fn filtered_view(&self, query: &QueryState) -> Vec<&UserRecord> {
        query::filter_users(&self.users, query)
    }

    /// The current page of the filtered view; empty when the page is out of range
    pub fn paginated_view(&self, query: &QueryState) -> Vec<&UserRecord> {
        let filtered = self.filtered_view(query);
        query::paginate(&filtered, query.current_page(), query.items_per_page()).to_vec()
    }

    pub fn total_pages(&self, query: &QueryState) -> usize {
        query::total_pages(self.filtered_view(query).len(), query.items_per_page())
    }

    /// Distinct designations, birth years and genders present right now
    pub fn filter_options(&self) -> FilterOptions {
        query::filter_options(&self.users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gender;
    use jiff::civil::date;

    fn new_user(name: &str, gender: Gender, designation: &str, year: i16) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "01700000000".to_string(),
            date_of_birth: date(year, 1, 1),
            gender,
            designation: designation.to_string(),
            bio: "bio".to_string(),
            skills: vec!["Git".to_string()],
            image: None,
        }
    }

    fn alice() -> NewUser {
        new_user("Alice", Gender::Female, "Team Lead", 1990)
    }

    fn bob() -> NewUser {
        new_user("Bob", Gender::Male, "Team Lead", 1985)
    }

    #[test]
    fn test_add_then_get_returns_equal_record() {
        let mut store = RecordStore::new();
        let id = store.add(alice());
        assert_eq!(store.get(id), Some(&alice().into_record(id)));
    }

    #[test]
    fn test_ids_strictly_increase_and_are_not_reused() {
        let mut store = RecordStore::new();
        let a = store.add(alice());
        let b = store.add(bob());
        assert!(b > a);

        store.delete(b);
        let c = store.add(bob());
        assert!(c > b);
    }

    #[test]
    fn test_with_records_continues_after_max_id() {
        let seeded = vec![alice().into_record(3), bob().into_record(10)];
        let mut store = RecordStore::with_records(seeded);
        assert_eq!(store.next_id(), 11);
        assert_eq!(store.add(alice()), 11);
    }

    #[test]
    fn test_with_records_drops_duplicate_ids() {
        let seeded = vec![alice().into_record(1), bob().into_record(1)];
        let store = RecordStore::with_records(seeded);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(1).unwrap().name, "Alice");
    }

    #[test]
    fn test_duplicate_email_is_permitted() {
        let mut store = RecordStore::new();
        store.add(alice());
        store.add(alice());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let mut store = RecordStore::new();
        let id = store.add(alice());
        assert!(store.delete(id));
        assert!(store.get(id).is_none());
    }

    #[test]
    fn test_delete_missing_is_noop() {
        let mut store = RecordStore::new();
        store.add(alice());
        let before = store.records().to_vec();
        assert!(!store.delete(42));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_update_preserves_untouched_fields() {
        let mut store = RecordStore::new();
        let id = store.add(alice());
        let updated = store.update(
            id,
            UserPatch {
                designation: Some("Project Manager".to_string()),
                ..Default::default()
            },
        );
        assert!(updated);
        let user = store.get(id).unwrap();
        assert_eq!(user.designation, "Project Manager");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.id, id);
    }

    #[test]
    fn test_update_missing_is_noop() {
        let mut store = RecordStore::new();
        store.add(alice());
        let before = store.records().to_vec();
        let patch = UserPatch {
            name: Some("Ghost".to_string()),
            ..Default::default()
        };
        assert!(!store.update(99, patch.clone()));
        assert!(!store.update(99, patch));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn test_team_lead_scenario() {
        let mut store = RecordStore::new();
        store.add(alice());
        store.add(bob());

        let mut q = QueryState::default();
        q.set_designation("Team Lead");
        assert_eq!(store.filtered_view(&q).len(), 2);

        q.set_gender(Some(Gender::Female));
        let filtered = store.filtered_view(&q);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Alice");
    }

    #[test]
    fn test_one_per_page_scenario() {
        let mut store = RecordStore::new();
        store.add(alice());
        store.add(bob());

        let mut q = QueryState::new(1);
        assert_eq!(store.total_pages(&q), 2);
        q.set_current_page(2);
        let page = store.paginated_view(&q);
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].name, "Bob");
    }

    #[test]
    fn test_deleting_last_row_on_page_does_not_clamp() {
        let mut store = RecordStore::new();
        store.add(alice());
        let bob_id = store.add(bob());

        let mut q = QueryState::new(1);
        q.set_current_page(2);
        store.delete(bob_id);

        assert!(store.paginated_view(&q).is_empty());
        assert_eq!(q.current_page(), 2);
        assert_eq!(store.total_pages(&q), 1);
    }

    #[test]
    fn test_total_pages_zero_when_nothing_matches() {
        let mut store = RecordStore::new();
        store.add(alice());
        let mut q = QueryState::default();
        q.set_search_query("zzz");
        assert_eq!(store.total_pages(&q), 0);
        assert!(store.paginated_view(&q).is_empty());
    }

    #[test]
    fn test_filtered_view_is_idempotent_subset() {
        let mut store = RecordStore::new();
        store.add(alice());
        store.add(bob());
        let mut q = QueryState::default();
        q.set_search_query("b");

        let first: Vec<u64> = store.filtered_view(&q).iter().map(|u| u.id).collect();
        let second: Vec<u64> = store.filtered_view(&q).iter().map(|u| u.id).collect();
        assert_eq!(first, second);
        assert!(first.iter().all(|id| store.get(*id).is_some()));
    }

    #[test]
    fn test_filter_options_drop_deleted_designation() {
        let mut store = RecordStore::new();
        store.add(alice());
        let pm = store.add(new_user("Pat", Gender::Male, "Project Manager", 1980));
        assert!(store.filter_options().designations.contains(&"Project Manager".to_string()));

        store.delete(pm);
        assert_eq!(store.filter_options().designations, vec!["Team Lead"]);
    }
}
