use crate::domain::model::PointsScheme;
use crate::utils::error::Result;

/// Read access to the persisted contest results log.
pub trait ReadOnlyStore {
    /// Whether the backing storage exists. Never fails; `false` on any error.
    fn is_initialized(&self) -> bool;

    /// Whether the backing storage exists and holds no data. Never fails;
    /// `false` on any error.
    fn is_empty(&self) -> bool;

    /// Every persisted record line, oldest first.
    ///
    /// Fails with [`crate::RankingsError::StoreNotFound`] when the store is not
    /// initialized.
    fn read_all_lines(&self) -> Result<Vec<String>>;
}

/// Append-only access to the persisted contest results log.
pub trait Store: ReadOnlyStore {
    fn append_all_lines(&self, lines: &[String]) -> Result<()>;

    /// Creates the backing storage if it does not exist yet.
    fn initialize(&self) -> Result<()>;

    /// Drops all data and returns the store to the uninitialized state.
    fn reset(&self) -> Result<()>;
}

pub trait ConfigProvider {
    fn store_path(&self) -> &str;
    fn points(&self) -> PointsScheme;
}
