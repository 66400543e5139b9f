//! Candidate pools competing for placement on a grid.
//!
//! A pool is an explicit, immutable set of [`Candidate`] values handed to the
//! picker or locator at call time; nothing here discovers content or caches
//! global state.
use crate::error::{Error, Result};
use crate::rule::WeightTable;

pub mod select;

pub type StructureId = String;

/// What a candidate resolves to when selected.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CandidateKind {
    /// A concrete structure to generate.
    Structure(StructureId),
    /// An explicit empty slot: the winning chunk stays unoccupied when chosen.
    Empty,
}

/// One entry competing in a pool, with its biome weight rules.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    pub kind: CandidateKind,
    pub weights: WeightTable,
}

impl Candidate {
    /// Creates a structure candidate.
    pub fn structure(id: impl Into<StructureId>, weights: WeightTable) -> Self {
        Self {
            kind: CandidateKind::Structure(id.into()),
            weights,
        }
    }

    /// Creates an empty-slot candidate.
    pub fn empty(weights: WeightTable) -> Self {
        Self {
            kind: CandidateKind::Empty,
            weights,
        }
    }

    /// Structure id, when this candidate is a structure.
    pub fn structure_id(&self) -> Option<&str> {
        match &self.kind {
            CandidateKind::Structure(id) => Some(id),
            CandidateKind::Empty => None,
        }
    }

    pub fn is_empty_slot(&self) -> bool {
        matches!(self.kind, CandidateKind::Empty)
    }
}

/// Immutable set of candidates competing on one placement grid.
#[non_exhaustive]
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CandidatePool {
    pub candidates: Vec<Candidate>,
}

impl CandidatePool {
    /// Creates an empty pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a candidate and returns the pool.
    pub fn with_candidate(mut self, candidate: Candidate) -> Self {
        self.candidates.push(candidate);
        self
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// True if the pool contains a structure candidate with the given id.
    pub fn contains_structure(&self, id: &str) -> bool {
        self.candidates
            .iter()
            .any(|candidate| candidate.structure_id() == Some(id))
    }

    /// Fails with [`Error::UnknownStructure`] if the id is not in the pool.
    pub fn require_structure(&self, id: &str) -> Result<()> {
        if self.contains_structure(id) {
            Ok(())
        } else {
            Err(Error::UnknownStructure { id: id.to_owned() })
        }
    }

    /// Validates the pool shape and every candidate's weight table.
    pub fn validate(&self) -> Result<()> {
        if self.candidates.is_empty() {
            return Err(Error::InvalidConfig("candidate pool is empty".into()));
        }
        for candidate in &self.candidates {
            candidate.weights.validate()?;
        }
        Ok(())
    }
}

impl FromIterator<Candidate> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}
