//! Key-value backed stand-in datastore for resources with no remote API.
//!
//! A collection lives under `<namespace>:<resource>s` as one JSON array,
//! read on every access and rewritten wholesale on every mutation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::Rc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::error::AppError;
use super::list::{derive_page, ListRequest, ListResult, ListSource};
use super::mutation::{MutationKind, MutationOutcome, RecordGateway};
use crate::domain::common::Resource;

pub trait KeyValueStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError>;

    fn write(&self, key: &str, value: &str) -> Result<(), AppError>;
}

/// In-process store; clones share the same entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct RecordStore<R, S> {
    store: S,
    key: String,
    _record: PhantomData<R>,
}

impl<R: Resource, S: KeyValueStore> RecordStore<R, S> {
    pub fn new(store: S, namespace: &str) -> Self {
        Self {
            store,
            key: format!("{}:{}", namespace, R::collection_key()),
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All stored records. Unreadable data is logged and treated as empty.
    pub fn load(&self) -> Result<Vec<R>, AppError> {
        let Some(raw) = self.store.read(&self.key)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                log::warn!("ignoring corrupt data under {}: {}", self.key, e);
                Ok(Vec::new())
            }
        }
    }

    pub fn replace_all(&self, records: &[R]) -> Result<(), AppError> {
        let raw = serde_json::to_string(records)
            .map_err(|e| AppError::server(format!("Could not encode {}: {}", R::PLURAL_LABEL, e)))?;
        self.store.write(&self.key, &raw)
    }

    /// Applies one mutation and returns the record as stored.
    pub fn apply(&self, kind: MutationKind, record: &R) -> Result<R, AppError> {
        let mut records = self.load()?;
        let id = record.record_id().trim().to_string();
        let position = records.iter().position(|r| r.record_id() == id);

        let stored = match (kind, position) {
            (MutationKind::Register, Some(_)) => {
                return Err(AppError::server(format!("{} {} already exists", R::LABEL, id)));
            }
            (MutationKind::Register, None) => {
                let mut created = record.clone();
                if id.is_empty() {
                    created.set_record_id(Uuid::new_v4().to_string());
                } else {
                    created.set_record_id(id);
                }
                if created.field("created_at").trim().is_empty() {
                    created.set_field("created_at", Utc::now().to_rfc3339());
                }
                records.push(created.clone());
                created
            }
            (MutationKind::Update, Some(index)) => {
                let mut updated = record.clone();
                updated.set_record_id(id);
                records[index] = updated.clone();
                updated
            }
            (MutationKind::Delete, Some(index)) => records.remove(index),
            (_, None) => {
                return Err(AppError::server(format!("{} {} not found", R::LABEL, id)));
            }
        };

        self.replace_all(&records)?;
        Ok(stored)
    }
}

#[async_trait(?Send)]
impl<R: Resource, S: KeyValueStore> ListSource<R> for RecordStore<R, S> {
    async fn fetch(
        &self,
        request: &ListRequest<R::SortField>,
    ) -> Result<ListResult<R, R::SortField>, AppError> {
        let matching: Vec<R> = self
            .load()?
            .into_iter()
            .filter(|r| request.search.as_deref().map_or(true, |s| r.matches_search(s)))
            .filter(|r| r.matches_filters(&request.filters))
            .collect();
        Ok(derive_page(&matching, &request.to_query()))
    }
}

#[async_trait(?Send)]
impl<R: Resource, S: KeyValueStore> RecordGateway<R> for RecordStore<R, S> {
    async fn send(&self, kind: MutationKind, record: &R) -> Result<MutationOutcome, AppError> {
        self.apply(kind, record)?;
        Ok(MutationOutcome::fallback(kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vessel::Vessel;
    use crate::shared::list::{PageSize, SortOrder};
    use crate::shared::mutation::submit;
    use crate::shared::record::EditableRecord;

    fn vessel(name: &str, flag: &str) -> Vessel {
        let mut v = Vessel::default();
        v.set_field("name", name.into());
        v.set_field("imo_number", "9321483".into());
        v.set_field("flag", flag.into());
        v.set_field("vessel_type", "Container".into());
        v
    }

    #[test]
    fn register_assigns_id_and_timestamp() {
        let store: RecordStore<Vessel, _> = RecordStore::new(MemoryStore::default(), "freight_desk");
        assert_eq!(store.key(), "freight_desk:vessels");

        let stored = store.apply(MutationKind::Register, &vessel("Maersk Alabama", "US")).unwrap();
        assert!(Uuid::parse_str(&stored.id).is_ok());
        assert!(!stored.created_at.is_empty());
        assert_eq!(store.load().unwrap(), vec![stored]);
    }

    #[test]
    fn update_and_delete_of_unknown_ids_fail() {
        let store: RecordStore<Vessel, _> = RecordStore::new(MemoryStore::default(), "t");
        let mut ghost = vessel("Ghost", "PA");
        ghost.set_record_id("missing".into());

        let err = store.apply(MutationKind::Update, &ghost).unwrap_err();
        assert_eq!(err.to_string(), "Vessel missing not found");
        assert!(store.apply(MutationKind::Delete, &ghost).is_err());
    }

    #[test]
    fn update_stores_the_trimmed_id() {
        let store: RecordStore<Vessel, _> = RecordStore::new(MemoryStore::default(), "t");
        let stored = store.apply(MutationKind::Register, &vessel("Ever Given", "PA")).unwrap();

        let mut edited = stored.clone();
        edited.set_record_id(format!("  {}  ", stored.id));
        edited.set_field("flag", "MT".into());
        let updated = store.apply(MutationKind::Update, &edited).unwrap();

        assert_eq!(updated.id, stored.id);
        let all = store.load().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, stored.id);
        assert_eq!(all[0].flag, "MT");
    }

    #[test]
    fn corrupt_collection_reads_as_empty() {
        let backing = MemoryStore::default();
        backing.write("t:vessels", "{not json").unwrap();
        let store: RecordStore<Vessel, _> = RecordStore::new(backing, "t");
        assert!(store.load().unwrap().is_empty());
    }

    #[tokio::test]
    async fn mutations_through_the_gateway_are_listed() {
        let store: RecordStore<Vessel, _> = RecordStore::new(MemoryStore::default(), "t");
        for (name, flag) in [("Ever Given", "PA"), ("Al Zubara", "MT"), ("Berge Stahl", "NO")] {
            submit(&store, MutationKind::Register, &vessel(name, flag)).await.unwrap();
        }

        let mut query = crate::shared::list::ListQuery::new(2, SortOrder::Ascending);
        query.page_size = PageSize::Count(2);
        let page = store.fetch(&ListRequest::from_query(&query, 2)).await.unwrap();
        let names: Vec<&str> = page.items.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Al Zubara", "Berge Stahl"]);
        assert_eq!(page.total_count, 3);

        let mut victim = page.items[0].clone();
        victim.set_field("flag", "QA".into());
        submit(&store, MutationKind::Update, &victim).await.unwrap();
        submit(&store, MutationKind::Delete, &page.items[1]).await.unwrap();

        let mut filtered = query.clone();
        filtered.filters.insert("flag".into(), "qa".into());
        let page = store.fetch(&ListRequest::from_query(&filtered, 2)).await.unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Al Zubara");
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn search_matches_any_search_field() {
        let store: RecordStore<Vessel, _> = RecordStore::new(MemoryStore::default(), "t");
        store.apply(MutationKind::Register, &vessel("Ever Given", "PA")).unwrap();
        store.apply(MutationKind::Register, &vessel("Berge Stahl", "NO")).unwrap();

        let mut query = crate::shared::list::ListQuery::new(10, SortOrder::Ascending);
        query.search_text = "GIVEN".into();
        let page = store.fetch(&ListRequest::from_query(&query, 10)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].flag, "PA");
    }
}
