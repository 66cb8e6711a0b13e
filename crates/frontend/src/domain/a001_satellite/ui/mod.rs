pub mod list;
pub mod selected_assets;
pub mod summary;
