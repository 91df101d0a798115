//! File storage records and enumerations.

mod drive;
mod enums;
mod file;
mod folder;
mod group;
mod permission;
mod user;

pub use drive::Drive;
pub use enums::{PermissionRole, PermissionType};
pub use file::{File, FileRequest};
pub use folder::{Folder, FolderRequest};
pub use group::Group;
pub use permission::Permission;
pub use user::User;
