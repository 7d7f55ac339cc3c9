pub mod artifact;
pub mod backup;
pub mod checksum;

pub use artifact::ArtifactCard;
pub use backup::{backup_file_name, export_backup, import_backup};
