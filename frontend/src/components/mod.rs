pub mod preview;
pub mod sidebar;
pub mod upload;
pub mod workbench;
