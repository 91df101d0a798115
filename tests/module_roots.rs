use std::path::Path;

#[test]
fn keeps_mod_rs_roots_for_split_modules() {
    let src = Path::new(env!("CARGO_MANIFEST_DIR")).join("src");
    let legacy_roots = [
        "models.rs",
        "ats.rs",
        "filestorage.rs",
        "wire.rs",
        "models/ats.rs",
        "models/filestorage.rs",
    ];

    let stale_files: Vec<&str> = legacy_roots
        .iter()
        .copied()
        .filter(|path| src.join(path).exists())
        .collect();

    assert!(
        stale_files.is_empty(),
        "legacy module roots found: {stale_files:?}; keep only mod.rs roots for split modules",
    );
}
