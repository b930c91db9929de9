use std::fs;

use bootconf::editor::{self, WorkingCopy};
use bootconf::QualifiedKey;

#[cfg(test)]
mod working_copy_tests {
    use super::*;

    #[test]
    fn test_edit_save_cycle() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("config.txt");
        fs::write(&live, "gpu_mem=128\n").unwrap();

        let copy = WorkingCopy::create(&live).unwrap();
        assert!(!copy.is_dirty().unwrap());

        editor::set(&QualifiedKey::parse("gpu_mem"), "256", copy.path(), true, true).unwrap();
        assert!(copy.is_dirty().unwrap());
        assert_eq!(fs::read_to_string(&live).unwrap(), "gpu_mem=128\n");

        assert!(copy.save().unwrap());
        assert_eq!(fs::read_to_string(&live).unwrap(), "gpu_mem=256\n");
        assert!(!copy.is_dirty().unwrap());
        assert!(!copy.save().unwrap());
    }

    #[test]
    fn test_comment_only_edit_is_not_dirty() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("config.txt");
        fs::write(&live, "gpu_mem=128\n").unwrap();

        let copy = WorkingCopy::create(&live).unwrap();
        let content = fs::read_to_string(copy.path()).unwrap();
        fs::write(copy.path(), format!("# edited\n{}", content)).unwrap();

        assert!(!copy.is_dirty().unwrap());
        assert!(!copy.save().unwrap());
    }

    #[test]
    fn test_revert_discards_edits() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("config.txt");
        fs::write(&live, "a=1\n").unwrap();

        let copy = WorkingCopy::create(&live).unwrap();
        editor::set(&QualifiedKey::parse("a"), "2", copy.path(), true, true).unwrap();
        copy.revert().unwrap();

        assert_eq!(fs::read_to_string(copy.path()).unwrap(), "a=1\n");
        assert!(!copy.is_dirty().unwrap());
    }

    #[test]
    fn test_missing_file_is_created_and_scratch_removed() {
        let dir = tempfile::tempdir().unwrap();
        let live = dir.path().join("config.txt");

        let copy = WorkingCopy::create(&live).unwrap();
        assert!(live.exists());
        assert_eq!(fs::read_to_string(&live).unwrap(), "");

        let scratch = copy.path().to_path_buf();
        assert!(scratch.exists());
        drop(copy);
        assert!(!scratch.exists());
    }
}
