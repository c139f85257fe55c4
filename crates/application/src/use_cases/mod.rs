pub mod add_custom;
pub mod add_whitelist;
pub mod clear_cache;
pub mod get_stats;
pub mod reload_custom;
pub mod remove_custom;
pub mod remove_whitelist;
pub mod update_all;

pub use add_custom::AddCustomUseCase;
pub use add_whitelist::AddWhitelistUseCase;
pub use clear_cache::ClearCacheUseCase;
pub use get_stats::{GetStatsUseCase, StatsView};
pub use reload_custom::ReloadCustomUseCase;
pub use remove_custom::RemoveCustomUseCase;
pub use remove_whitelist::RemoveWhitelistUseCase;
pub use update_all::UpdateAllUseCase;
