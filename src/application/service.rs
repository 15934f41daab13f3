//! Rebuild service: parses textual traversals and runs the reconstruction.

use tracing::{info, instrument};

use crate::application::error::ApplicationResult;
use crate::application::parse::parse_sequence;
use crate::config::Settings;
use crate::domain::{validate, BinaryTree, Reconstructor, TraversalError};

/// Service for rebuilding trees from textual traversals.
#[derive(Debug, Clone)]
pub struct RebuildService {
    settings: Settings,
}

impl RebuildService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn parse(&self, text: &str) -> Vec<String> {
        parse_sequence(text, self.settings.tokens, self.settings.separator.as_deref())
    }

    /// Parse both traversals and rebuild the tree they describe.
    #[instrument(level = "debug", skip(self))]
    pub fn rebuild(&self, preorder: &str, inorder: &str) -> ApplicationResult<BinaryTree<String>> {
        let preorder = self.parse(preorder);
        let inorder = self.parse(inorder);

        let tree = Reconstructor::new(self.settings.policy).rebuild(&preorder, &inorder)?;
        info!(nodes = tree.len(), depth = tree.depth(), "rebuilt tree");
        Ok(tree)
    }

    /// Parse both traversals and validate them without building a tree.
    /// Returns the number of values per traversal.
    #[instrument(level = "debug", skip(self))]
    pub fn check(&self, preorder: &str, inorder: &str) -> ApplicationResult<usize> {
        let preorder = self.parse(preorder);
        let inorder = self.parse(inorder);

        validate(&preorder, &inorder).map_err(TraversalError::from)?;
        Ok(preorder.len())
    }
}
