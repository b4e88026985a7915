// crates/core/tests/stamp_properties.rs
use proptest::prelude::*;
use regex::Regex;

use verstamp_core::stamp::{StampOptionsBuilder, Stamper};

fn stamp_once(dir: &std::path::Path, version: &str) -> String {
    let target = dir.join("_version.py");
    let options = StampOptionsBuilder::default()
        .target_path(target.clone())
        .build()
        .unwrap();
    Stamper::new(options, None).run(Some(version)).unwrap();
    std::fs::read_to_string(target).unwrap()
}

proptest! {
    #[test]
    fn stamped_version_reads_back_exactly(version in "[0-9A-Za-z.+-]{1,24}") {
        let dir = tempfile::tempdir().unwrap();
        let content = stamp_once(dir.path(), &version);

        let re = Regex::new("__version__ = '([^']*)'").unwrap();
        let captured = re.captures(&content).unwrap().get(1).unwrap().as_str();
        prop_assert_eq!(captured, version.as_str());
    }

    #[test]
    fn restamping_is_byte_identical(version in "[0-9A-Za-z.+-]{1,24}") {
        let dir = tempfile::tempdir().unwrap();
        let first = stamp_once(dir.path(), &version);
        let second = stamp_once(dir.path(), &version);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn patching_after_a_different_version_keeps_only_the_latest(
        v1 in "[0-9A-Za-z.+-]{1,24}",
        v2 in "[0-9A-Za-z.+-]{1,24}",
    ) {
        let dir = tempfile::tempdir().unwrap();
        stamp_once(dir.path(), &v1);
        let content = stamp_once(dir.path(), &v2);

        let re = Regex::new("__version__ = '([^']*)'").unwrap();
        let captured = re.captures(&content).unwrap().get(1).unwrap().as_str();
        prop_assert_eq!(captured, v2.as_str());
    }
}
