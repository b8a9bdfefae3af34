//! Integration tests for the full manifest run: directory layout, file
//! counts and idempotence.

mod common;

use std::collections::HashSet;
use std::fs;

use common::*;
use lookbook::{Generator, SUBDIRS, manifest};

#[test]
fn manifest_lists_31_distinct_paths() {
    let tasks = manifest();
    assert_eq!(tasks.len(), 31);

    let paths: HashSet<_> = tasks.iter().map(|t| t.path.clone()).collect();
    assert_eq!(
        paths.len(),
        tasks.len(),
        "every path should be written at most once per run"
    );
}

#[test]
fn ensure_layout_is_idempotent() -> anyhow::Result<()> {
    let root = create_assets_root();
    let generator = Generator::new(root.path());

    generator.ensure_layout()?;
    generator.ensure_layout()?;

    for sub in SUBDIRS {
        assert!(root.path().join(sub).is_dir(), "{sub} should exist");
    }

    Ok(())
}

#[test]
fn full_run_populates_the_expected_layout() -> anyhow::Result<()> {
    let root = create_assets_root();
    let written = Generator::new(root.path()).run()?;
    assert_eq!(written, 31);

    assert_eq!(count_files(root.path()), 15);
    assert_eq!(count_files(&root.path().join("fashion")), 13);
    assert_eq!(count_files(&root.path().join("onboarding")), 3);
    assert_eq!(count_files(&root.path().join("categories")), 0);

    // Spot-check a few well-known outputs
    assert!(root.path().join("model.jpg").is_file());
    assert!(root.path().join("fashion").join("dresses.jpg").is_file());
    assert!(
        root.path()
            .join("onboarding")
            .join("fashion_ai.jpg")
            .is_file()
    );

    Ok(())
}

#[test]
fn generated_images_have_manifest_dimensions() -> anyhow::Result<()> {
    let root = create_assets_root();
    Generator::new(root.path()).run()?;

    let hero = image::image_dimensions(root.path().join("model.jpg"))?;
    assert_eq!(hero, (400, 500));

    let banner = image::image_dimensions(root.path().join("fashion").join("blazers.jpg"))?;
    assert_eq!(banner, (300, 200));

    let onboarding =
        image::image_dimensions(root.path().join("onboarding").join("personalized.jpg"))?;
    assert_eq!(onboarding, (400, 300));

    Ok(())
}

#[test]
fn rerunning_reproduces_identical_files() -> anyhow::Result<()> {
    let root = create_assets_root();
    let generator = Generator::new(root.path());
    generator.run()?;

    let before: Vec<_> = manifest()
        .iter()
        .map(|task| {
            let path = root.path().join(&task.path);
            let bytes = fs::read(&path).expect("Failed to read generated file");
            (path, bytes)
        })
        .collect();

    generator.run()?;

    for (path, bytes) in before {
        let again = fs::read(&path)?;
        assert_eq!(again, bytes, "{} changed between runs", path.display());
    }

    Ok(())
}
