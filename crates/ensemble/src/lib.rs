//! # optel-ensemble
//!
//! Interface types for the converted tree-ensemble model. An external
//! converter loads a trained model plus a metadata file of ordered
//! feature names and re-serializes it, feature indices resolved to
//! names, into a data module consumed by a runtime classifier elsewhere.
//! The converter and the classifier both live outside this workspace;
//! this crate only pins down the shape the two sides agree on.
//!
//! The fingerprint crates take no dependency on this one.

#![deny(unsafe_code)]

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a converted data module is inconsistent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnsembleError {
    /// The declared tree count disagrees with the tree list.
    #[error("declared tree count {declared} but module holds {actual} trees")]
    TreeCountMismatch { declared: usize, actual: usize },
}

/// Result type for ensemble-module operations.
pub type EnsembleResult<T> = Result<T, EnsembleError>;

/// One node of a converted decision tree.
///
/// Serialized untagged to match the converter's JSON: a leaf is
/// `{"leaf": score}`, a decision node carries the resolved feature
/// name, its threshold, and the below/above-threshold children.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Leaf {
        leaf: f64,
    },
    Decision {
        feature: String,
        threshold: f64,
        yes: Box<TreeNode>,
        no: Box<TreeNode>,
    },
}

impl TreeNode {
    /// Total nodes in this subtree, the node itself included.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Decision { yes, no, .. } => 1 + yes.node_count() + no.node_count(),
        }
    }

    /// Depth of this subtree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Decision { yes, no, .. } => 1 + yes.depth().max(no.depth()),
        }
    }
}

/// The generated data module: a model version, a tree count, and the
/// ordered trees themselves.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnsembleModule {
    pub version: String,
    pub tree_count: usize,
    pub trees: Vec<TreeNode>,
}

impl EnsembleModule {
    pub fn new(version: impl Into<String>, trees: Vec<TreeNode>) -> Self {
        Self {
            version: version.into(),
            tree_count: trees.len(),
            trees,
        }
    }

    /// Check that the declared tree count matches the tree list.
    pub fn validate(&self) -> EnsembleResult<()> {
        if self.tree_count != self.trees.len() {
            return Err(EnsembleError::TreeCountMismatch {
                declared: self.tree_count,
                actual: self.trees.len(),
            });
        }
        Ok(())
    }

    /// Parse a module from the converter's JSON output.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for EnsembleModule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EnsembleModule(version={}, trees={})",
            self.version, self.tree_count
        )
    }
}
