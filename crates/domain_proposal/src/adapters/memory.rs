//! In-memory proposal store
//!
//! Keeps proposals in a `HashMap` behind a tokio `RwLock`. The document index
//! is updated under the same write lock as the proposal map, which makes the
//! uniqueness check in `save` atomic.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use core_kernel::{AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError, ProposalId};

use crate::ports::ProposalStore;
use crate::proposal::{NewProposal, Proposal};

#[derive(Debug, Default)]
struct Inner {
    proposals: HashMap<ProposalId, Proposal>,
    by_document: HashMap<String, ProposalId>,
}

/// In-memory implementation of `ProposalStore`
#[derive(Debug, Default)]
pub struct InMemoryProposalStore {
    inner: RwLock<Inner>,
}

impl InMemoryProposalStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the store, e.g. to seed existing documents in tests
    ///
    /// Later entries with an already seen document replace earlier ones.
    pub async fn with_proposals(proposals: Vec<Proposal>) -> Self {
        let store = Self::new();
        {
            let mut inner = store.inner.write().await;
            for proposal in proposals {
                inner.by_document.insert(proposal.document.clone(), proposal.id);
                inner.proposals.insert(proposal.id, proposal);
            }
        }
        store
    }

    /// Number of stored proposals
    pub async fn len(&self) -> usize {
        self.inner.read().await.proposals.len()
    }

    /// Whether the store is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl DomainPort for InMemoryProposalStore {}

#[async_trait]
impl HealthCheckable for InMemoryProposalStore {
    async fn health_check(&self) -> HealthCheckResult {
        HealthCheckResult {
            adapter_id: "in-memory-proposal-store".to_string(),
            status: AdapterHealth::Healthy,
            latency_ms: 0,
            message: Some("In-memory store always healthy".to_string()),
            checked_at: Utc::now(),
        }
    }
}

#[async_trait]
impl ProposalStore for InMemoryProposalStore {
    async fn exists_by_document(&self, document: &str) -> Result<bool, PortError> {
        Ok(self.inner.read().await.by_document.contains_key(document))
    }

    async fn save(&self, proposal: NewProposal) -> Result<Proposal, PortError> {
        let mut inner = self.inner.write().await;
        if inner.by_document.contains_key(&proposal.document) {
            return Err(PortError::conflict(format!(
                "proposal with document '{}' already exists",
                proposal.document
            )));
        }

        let proposal = proposal.into_proposal(ProposalId::new_v7(), Utc::now());
        inner.by_document.insert(proposal.document.clone(), proposal.id);
        inner.proposals.insert(proposal.id, proposal.clone());
        debug!(proposal_id = %proposal.id, "Stored proposal in memory");

        Ok(proposal)
    }

    async fn find_by_id(&self, id: ProposalId) -> Result<Option<Proposal>, PortError> {
        Ok(self.inner.read().await.proposals.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proposal::CreateProposalRequest;
    use rust_decimal_macros::dec;
    use std::sync::Arc;

    fn new_proposal(document: &str) -> NewProposal {
        NewProposal::try_from(CreateProposalRequest::new(
            "Ana",
            document,
            "ana@example.com",
            "Rua 1",
            dec!(1000),
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = InMemoryProposalStore::new();
        let saved = store.save(new_proposal("52998224725")).await.unwrap();

        let found = store.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
        assert!(store.exists_by_document("52998224725").await.unwrap());
        assert!(!store.exists_by_document("11222333000181").await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_document_conflicts() {
        let store = InMemoryProposalStore::new();
        store.save(new_proposal("52998224725")).await.unwrap();

        let error = store.save(new_proposal("52998224725")).await.unwrap_err();
        assert!(error.is_conflict());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_unknown_id() {
        let store = InMemoryProposalStore::new();
        assert!(store.is_empty().await);
        assert_eq!(store.find_by_id(ProposalId::new_v7()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_with_proposals_seeds_document_index() {
        let seeded = new_proposal("11222333000181").into_proposal(ProposalId::new_v7(), Utc::now());
        let store = InMemoryProposalStore::with_proposals(vec![seeded]).await;
        assert!(store.exists_by_document("11222333000181").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_saves_store_one() {
        let store = Arc::new(InMemoryProposalStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.save(new_proposal("52998224725")).await })
            })
            .collect();

        let mut stored = 0;
        let mut conflicts = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => stored += 1,
                Err(e) if e.is_conflict() => conflicts += 1,
                Err(e) => panic!("unexpected error: {e}"),
            }
        }

        assert_eq!(stored, 1);
        assert_eq!(conflicts, 7);
    }

    #[tokio::test]
    async fn test_health_check() {
        let store = InMemoryProposalStore::new();
        assert_eq!(store.health_check().await.status, AdapterHealth::Healthy);
    }
}
