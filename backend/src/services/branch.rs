//! Branch service: branches and their receiving representatives

use serde::Deserialize;
use uuid::Uuid;

use shared::models::{Branch, BranchRepresentative};
use shared::validation;

use crate::error::{invalid, AppError, AppResult};
use crate::store::Store;

/// Branch service wrapping the shared store
#[derive(Clone)]
pub struct BranchService {
    store: Store,
}

/// Input for creating or updating a branch
///
/// On update, an omitted `representatives` field keeps the branch's
/// current representative list unchanged; an explicit list replaces it.
#[derive(Debug, Deserialize)]
pub struct BranchInput {
    pub name: String,
    pub location: String,
    pub phone: String,
    pub manager: String,
    #[serde(default)]
    pub representatives: Option<Vec<RepresentativeInput>>,
}

/// Input for adding a representative to a branch
///
/// Round-tripped representatives carry their id so it survives a
/// branch update; new ones omit it and get a fresh one.
#[derive(Debug, Deserialize)]
pub struct RepresentativeInput {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub name: String,
    pub phone: String,
    pub role: String,
}

impl BranchService {
    /// Create a new BranchService instance
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn list_branches(&self) -> Vec<Branch> {
        self.store.read().branches.branches()
    }

    pub fn get_branch(&self, branch_id: Uuid) -> AppResult<Branch> {
        self.store
            .read()
            .branches
            .branch(branch_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("branch".to_string()))
    }

    pub fn create_branch(&self, input: BranchInput) -> AppResult<Branch> {
        let branch = self.build_branch(Uuid::new_v4(), input, Vec::new())?;
        self.store.write().branches.add_branch(branch.clone())?;
        tracing::debug!(branch = %branch.name, "branch created");
        Ok(branch)
    }

    pub fn update_branch(&self, branch_id: Uuid, input: BranchInput) -> AppResult<Branch> {
        let current = self.get_branch(branch_id)?.representatives;
        let branch = self.build_branch(branch_id, input, current)?;
        self.store.write().branches.update_branch(branch.clone())?;
        Ok(branch)
    }

    pub fn add_representative(
        &self,
        branch_id: Uuid,
        input: RepresentativeInput,
    ) -> AppResult<BranchRepresentative> {
        let representative = Self::build_representative(input)?;
        self.store
            .write()
            .branches
            .add_representative(branch_id, representative.clone())?;
        tracing::debug!(%branch_id, representative = %representative.name, "representative added");
        Ok(representative)
    }

    fn build_branch(
        &self,
        id: Uuid,
        input: BranchInput,
        current: Vec<BranchRepresentative>,
    ) -> AppResult<Branch> {
        invalid(
            "name",
            validation::validate_name(&input.name),
            "اسم الفرع مطلوب",
        )?;
        invalid(
            "phone",
            validation::validate_jordanian_phone(&input.phone),
            "رقم الهاتف غير صالح",
        )?;
        let representatives = match input.representatives {
            Some(inputs) => inputs
                .into_iter()
                .map(Self::build_representative)
                .collect::<AppResult<Vec<_>>>()?,
            None => current,
        };
        Ok(Branch {
            id,
            name: input.name,
            location: input.location,
            phone: input.phone,
            manager: input.manager,
            representatives,
        })
    }

    fn build_representative(input: RepresentativeInput) -> AppResult<BranchRepresentative> {
        invalid(
            "name",
            validation::validate_name(&input.name),
            "اسم المندوب مطلوب",
        )?;
        invalid(
            "phone",
            validation::validate_jordanian_phone(&input.phone),
            "رقم الهاتف غير صالح",
        )?;
        Ok(BranchRepresentative {
            id: input.id.unwrap_or_else(Uuid::new_v4),
            name: input.name,
            phone: input.phone,
            role: input.role,
        })
    }
}
