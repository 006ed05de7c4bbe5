//! Branch registry: branches and their embedded representatives

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Branch, BranchRepresentative};

use super::{LedgerError, LedgerResult};

/// Branches keyed by id
#[derive(Debug, Default)]
pub struct BranchRegistry {
    branches: HashMap<Uuid, Branch>,
}

impl BranchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_branch(&mut self, branch: Branch) -> LedgerResult<()> {
        if self.branches.contains_key(&branch.id) {
            return Err(LedgerError::DuplicateId("branch"));
        }
        Self::check_representative_ids(&branch.representatives)?;
        self.branches.insert(branch.id, branch);
        Ok(())
    }

    /// Replace a branch by id, representatives included.
    pub fn update_branch(&mut self, branch: Branch) -> LedgerResult<()> {
        if !self.branches.contains_key(&branch.id) {
            return Err(LedgerError::NotFound("branch"));
        }
        Self::check_representative_ids(&branch.representatives)?;
        self.branches.insert(branch.id, branch);
        Ok(())
    }

    pub fn add_representative(
        &mut self,
        branch_id: Uuid,
        representative: BranchRepresentative,
    ) -> LedgerResult<()> {
        let branch = self
            .branches
            .get_mut(&branch_id)
            .ok_or(LedgerError::NotFound("branch"))?;
        if branch
            .representatives
            .iter()
            .any(|rep| rep.id == representative.id)
        {
            return Err(LedgerError::DuplicateId("representative"));
        }
        branch.representatives.push(representative);
        Ok(())
    }

    pub fn branch(&self, branch_id: Uuid) -> Option<&Branch> {
        self.branches.get(&branch_id)
    }

    pub fn representative(
        &self,
        branch_id: Uuid,
        representative_id: Uuid,
    ) -> Option<&BranchRepresentative> {
        self.branches
            .get(&branch_id)?
            .representatives
            .iter()
            .find(|rep| rep.id == representative_id)
    }

    /// All branches, sorted by name.
    pub fn branches(&self) -> Vec<Branch> {
        let mut branches: Vec<_> = self.branches.values().cloned().collect();
        branches.sort_by(|a, b| a.name.cmp(&b.name));
        branches
    }

    fn check_representative_ids(representatives: &[BranchRepresentative]) -> LedgerResult<()> {
        for (i, rep) in representatives.iter().enumerate() {
            if representatives[..i].iter().any(|other| other.id == rep.id) {
                return Err(LedgerError::DuplicateId("representative"));
            }
        }
        Ok(())
    }
}
