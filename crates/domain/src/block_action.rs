use serde::{Deserialize, Serialize};

/// The wire-level reply shape used to deny a query.
///
/// Non-A query types under `Redirect`/`BlockPage` resolve to NOERROR with
/// an empty answer section — only `A` ever gets a synthesized address
/// record under these two actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockAction {
    Nxdomain,
    Redirect,
    BlockPage,
}

impl Default for BlockAction {
    fn default() -> Self {
        BlockAction::Nxdomain
    }
}
